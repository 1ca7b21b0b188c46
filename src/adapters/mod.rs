//! Serialization façades over serde backends.
//!
//! Both façades serialize through an intermediate value tree and let a
//! [`SerializeContext`] drop object fields before the tree is written out.

pub mod json;
pub mod yaml;

/// Decides which object fields are left out of serialized output.
pub trait SerializeContext<V> {
    fn skip_field(&self, key: &str, value: &V) -> bool;
}

/// Skips null-valued fields unless configured otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultContext {
    pub skip_null_fields: bool,
}

impl DefaultContext {
    pub fn new(skip_null_fields: bool) -> Self {
        Self { skip_null_fields }
    }
}

impl Default for DefaultContext {
    fn default() -> Self {
        Self::new(true)
    }
}

impl SerializeContext<serde_json::Value> for DefaultContext {
    fn skip_field(&self, _key: &str, value: &serde_json::Value) -> bool {
        self.skip_null_fields && value.is_null()
    }
}

impl SerializeContext<serde_yaml::Value> for DefaultContext {
    fn skip_field(&self, _key: &str, value: &serde_yaml::Value) -> bool {
        self.skip_null_fields && value.is_null()
    }
}
