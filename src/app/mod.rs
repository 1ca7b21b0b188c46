pub mod commands;

pub use commands::{render, run, CommandOutput};
