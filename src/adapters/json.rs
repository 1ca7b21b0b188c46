use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::adapters::{DefaultContext, SerializeContext};
use crate::core::meta::type_name;
use crate::utils::error::{KlError, Result};

/// Serializes `obj` to compact JSON, skipping null fields.
pub fn dump<T: Serialize + ?Sized>(obj: &T) -> Result<String> {
    dump_with(obj, &DefaultContext::default())
}

pub fn dump_with<T, C>(obj: &T, ctx: &C) -> Result<String>
where
    T: Serialize + ?Sized,
    C: SerializeContext<Value>,
{
    let value = serialize_with(obj, ctx)?;
    Ok(serde_json::to_string(&value)?)
}

pub fn dump_pretty<T: Serialize + ?Sized>(obj: &T) -> Result<String> {
    let value = serialize(obj)?;
    Ok(serde_json::to_string_pretty(&value)?)
}

pub fn serialize<T: Serialize + ?Sized>(obj: &T) -> Result<Value> {
    serialize_with(obj, &DefaultContext::default())
}

pub fn serialize_with<T, C>(obj: &T, ctx: &C) -> Result<Value>
where
    T: Serialize + ?Sized,
    C: SerializeContext<Value>,
{
    let mut value = serde_json::to_value(obj)?;
    prune(&mut value, ctx);
    Ok(value)
}

fn prune<C: SerializeContext<Value>>(value: &mut Value, ctx: &C) {
    match value {
        Value::Object(map) => {
            map.retain(|key, field| {
                let skip = ctx.skip_field(key, field);
                if skip {
                    tracing::trace!(field = %key, "skipping JSON field");
                }
                !skip
            });
            for field in map.values_mut() {
                prune(field, ctx);
            }
        }
        Value::Array(items) => {
            for item in items {
                prune(item, ctx);
            }
        }
        _ => {}
    }
}

pub fn deserialize<T: DeserializeOwned>(value: &Value) -> Result<T> {
    T::deserialize(value).map_err(|e| KlError::Deserialize {
        type_name: type_name::<T>().to_string(),
        message: e.to_string(),
    })
}

pub fn parse(input: &str) -> Result<Value> {
    serde_json::from_str(input).map_err(|e| KlError::Parse {
        format: "JSON",
        message: e.to_string(),
    })
}

pub fn from_str<T: DeserializeOwned>(input: &str) -> Result<T> {
    deserialize(&parse(input)?)
}
