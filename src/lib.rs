pub mod adapters;
#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{KlConfig, OutputFormat};
pub use crate::core::defer::ScopeExit;
pub use crate::core::enum_set::{EnumFlag, EnumSet};
pub use crate::core::reflect_enum::{from_string, reflect, to_string, EnumReflector, ReflectEnum};
pub use utils::error::{KlError, Result};

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
