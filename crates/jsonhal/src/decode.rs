use crate::error::{DecodeError, HalError};
use crate::hal::Embedded;
use serde::de::value::{MapDeserializer, SeqDeserializer};
use serde::de::{DeserializeOwned, IntoDeserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Deepest nesting of arrays and objects accepted; a scalar has depth 1.
    pub max_depth: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self { max_depth: 128 }
    }
}

/// Turns stored embedded values back into typed structs.
///
/// Decoding walks the stored values in place, so field names drive the mapping
/// and nothing is re-encoded to bytes or copied.
///
/// A plain `chrono::DateTime` field accepts RFC 3339 but also chrono's looser
/// forms, such as a space before the offset. Annotate the field with
/// `#[serde(with = "jsonhal::timestamp::rfc3339")]` to reject anything that is
/// not strict RFC 3339.
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    pub fn decode<T: DeserializeOwned>(
        &self,
        name: &str,
        embedded: &Embedded,
    ) -> Result<T, HalError> {
        let depth = embedded_depth(embedded);
        if depth > self.config.max_depth {
            return Err(HalError::Decode {
                name: name.to_string(),
                source: DecodeError::TooDeep {
                    depth,
                    limit: self.config.max_depth,
                },
            });
        }

        debug!(
            embedded = name,
            target = std::any::type_name::<T>(),
            depth,
            "decoding embedded resource"
        );

        let decoded = match embedded {
            Embedded::Resource(value) => T::deserialize(value),
            Embedded::Collection(items) => {
                let items = items.iter().map(Borrowed);
                T::deserialize(SeqDeserializer::<_, serde_json::Error>::new(items))
            }
            Embedded::Map(map) => {
                let entries = map
                    .iter()
                    .map(|(key, value)| (key.as_str(), Borrowed(value)));
                T::deserialize(MapDeserializer::<_, serde_json::Error>::new(entries))
            }
        };

        decoded.map_err(|e| HalError::Decode {
            name: name.to_string(),
            source: DecodeError::Mismatch(e),
        })
    }
}

/// Hands a borrowed element to serde's sequence and map deserializers.
struct Borrowed<'a>(&'a Value);

impl<'a> IntoDeserializer<'a, serde_json::Error> for Borrowed<'a> {
    type Deserializer = &'a Value;

    fn into_deserializer(self) -> Self::Deserializer {
        self.0
    }
}

fn embedded_depth(embedded: &Embedded) -> usize {
    match embedded {
        Embedded::Resource(value) => nesting_depth(value),
        Embedded::Collection(items) => 1 + items.iter().map(nesting_depth).max().unwrap_or(0),
        Embedded::Map(map) => 1 + map.values().map(nesting_depth).max().unwrap_or(0),
    }
}

fn nesting_depth(value: &Value) -> usize {
    let mut deepest = 0;
    let mut pending = vec![(value, 1usize)];
    while let Some((value, depth)) = pending.pop() {
        deepest = deepest.max(depth);
        match value {
            Value::Array(items) => pending.extend(items.iter().map(|item| (item, depth + 1))),
            Value::Object(map) => pending.extend(map.values().map(|item| (item, depth + 1))),
            _ => {}
        }
    }
    deepest
}
