pub mod base64;
pub mod defer;
pub mod enum_set;
pub mod hash;
pub mod meta;
pub mod reflect_enum;
pub mod text;

pub use crate::utils::error::Result;
