use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_yaml::{Mapping, Value};

use crate::adapters::{DefaultContext, SerializeContext};
use crate::core::meta::type_name;
use crate::utils::error::{KlError, Result};

/// Serializes `obj` to a YAML document, skipping null fields.
pub fn dump<T: Serialize + ?Sized>(obj: &T) -> Result<String> {
    dump_with(obj, &DefaultContext::default())
}

pub fn dump_with<T, C>(obj: &T, ctx: &C) -> Result<String>
where
    T: Serialize + ?Sized,
    C: SerializeContext<Value>,
{
    let value = serialize_with(obj, ctx)?;
    Ok(serde_yaml::to_string(&value)?)
}

pub fn serialize<T: Serialize + ?Sized>(obj: &T) -> Result<Value> {
    serialize_with(obj, &DefaultContext::default())
}

pub fn serialize_with<T, C>(obj: &T, ctx: &C) -> Result<Value>
where
    T: Serialize + ?Sized,
    C: SerializeContext<Value>,
{
    let mut value = serde_yaml::to_value(obj)?;
    prune(&mut value, ctx);
    Ok(value)
}

fn key_name(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

fn prune<C: SerializeContext<Value>>(value: &mut Value, ctx: &C) {
    match value {
        Value::Mapping(map) => {
            let fields = std::mem::take(map);
            let mut kept = Mapping::with_capacity(fields.len());
            for (key, mut field) in fields {
                let name = key_name(&key);
                if ctx.skip_field(&name, &field) {
                    tracing::trace!(field = %name, "skipping YAML field");
                    continue;
                }
                prune(&mut field, ctx);
                kept.insert(key, field);
            }
            *map = kept;
        }
        Value::Sequence(items) => {
            for item in items {
                prune(item, ctx);
            }
        }
        Value::Tagged(tagged) => prune(&mut tagged.value, ctx),
        _ => {}
    }
}

pub fn deserialize<T: DeserializeOwned>(value: &Value) -> Result<T> {
    serde_yaml::from_value(value.clone()).map_err(|e| KlError::Deserialize {
        type_name: type_name::<T>().to_string(),
        message: e.to_string(),
    })
}

pub fn parse(input: &str) -> Result<Value> {
    serde_yaml::from_str(input).map_err(|e| KlError::Parse {
        format: "YAML",
        message: e.to_string(),
    })
}

pub fn from_str<T: DeserializeOwned>(input: &str) -> Result<T> {
    deserialize(&parse(input)?)
}
