use crate::decode::Decoder;
use crate::error::HalError;
use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::trace;

/// A single entry of the `_links` object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(default)]
    pub title: String,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            title: String::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

/// A value stored under `_embedded`.
///
/// Untyped JSON (the wire, `json!`) lands as `Collection` for arrays, `Map` for
/// objects and `Resource` for anything else. [`Embedded::resource`] keeps a
/// typed value as a `Resource` even when it serializes to an object, so it is
/// not countable. Equality compares the serialized form.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Embedded {
    Resource(Value),
    Collection(Vec<Value>),
    Map(Map<String, Value>),
}

impl Embedded {
    pub fn resource<T>(resource: &T) -> Result<Self, HalError>
    where
        T: Serialize + ?Sized,
    {
        Ok(Self::Resource(serde_json::to_value(resource)?))
    }

    pub fn collection<'a, T, I>(resources: I) -> Result<Self, HalError>
    where
        T: Serialize + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let items = resources
            .into_iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::Collection(items))
    }

    pub fn map<'a, K, T, I>(resources: I) -> Result<Self, HalError>
    where
        K: Into<String>,
        T: Serialize + 'a,
        I: IntoIterator<Item = (K, &'a T)>,
    {
        let mut map = Map::new();
        for (key, resource) in resources {
            map.insert(key.into(), serde_json::to_value(resource)?);
        }
        Ok(Self::Map(map))
    }

    /// Number of elements, or `None` for a single resource.
    pub fn len(&self) -> Option<usize> {
        match self {
            Self::Resource(_) => None,
            Self::Collection(items) => Some(items.len()),
            Self::Map(map) => Some(map.len()),
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            Self::Resource(value) => value,
            Self::Collection(items) => Value::Array(items),
            Self::Map(map) => Value::Object(map),
        }
    }
}

impl From<Value> for Embedded {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => Self::Collection(items),
            Value::Object(map) => Self::Map(map),
            other => Self::Resource(other),
        }
    }
}

impl PartialEq for Embedded {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Resource(a), Self::Resource(b)) => a == b,
            (Self::Collection(a), Self::Collection(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            (Self::Resource(Value::Array(a)), Self::Collection(b))
            | (Self::Collection(b), Self::Resource(Value::Array(a))) => a == b,
            (Self::Resource(Value::Object(a)), Self::Map(b))
            | (Self::Map(b), Self::Resource(Value::Object(a))) => a == b,
            _ => false,
        }
    }
}

impl<'de> Deserialize<'de> for Embedded {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::from)
    }
}

/// Links and embedded resources of a HAL document.
///
/// Compose it into a host struct with `#[serde(flatten)]`; the host then
/// serializes with `_links` and `_embedded` next to its own fields. Empty
/// mappings are left out of the output entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Hal {
    #[serde(rename = "_links")]
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    #[serde(default)]
    links: BTreeMap<String, Link>,
    #[serde(rename = "_embedded")]
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    #[serde(default)]
    embedded: BTreeMap<String, Embedded>,
    #[serde(skip)]
    decoder: OnceCell<Decoder>,
}

impl Hal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn links(&self) -> &BTreeMap<String, Link> {
        &self.links
    }

    pub fn embedded(&self) -> &BTreeMap<String, Embedded> {
        &self.embedded
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty() && self.embedded.is_empty()
    }

    /// Sets a link (self, next, etc). Pass an empty title to leave it out.
    pub fn set_link(
        &mut self,
        name: impl Into<String>,
        href: impl Into<String>,
        title: impl Into<String>,
    ) {
        let name = name.into();
        trace!(link = %name, "setting link");
        self.links.insert(name, Link::new(href).with_title(title));
    }

    pub fn delete_link(&mut self, name: &str) {
        trace!(link = %name, "deleting link");
        self.links.remove(name);
    }

    pub fn get_link(&self, name: &str) -> Result<&Link, HalError> {
        self.links.get(name).ok_or_else(|| HalError::LinkNotFound {
            name: name.to_string(),
        })
    }

    pub fn set_embedded(&mut self, name: impl Into<String>, embedded: impl Into<Embedded>) {
        let name = name.into();
        trace!(embedded = %name, "setting embedded resource");
        self.embedded.insert(name, embedded.into());
    }

    pub fn delete_embedded(&mut self, name: &str) {
        trace!(embedded = %name, "deleting embedded resource");
        self.embedded.remove(name);
    }

    pub fn get_embedded(&self, name: &str) -> Result<&Embedded, HalError> {
        self.embedded
            .get(name)
            .ok_or_else(|| HalError::EmbeddedNotFound {
                name: name.to_string(),
            })
    }

    pub fn count_embedded(&self, name: &str) -> Result<usize, HalError> {
        self.get_embedded(name)?
            .len()
            .ok_or_else(|| HalError::InvalidShape {
                name: name.to_string(),
            })
    }

    /// Decodes the resource stored under `name` into `T`.
    ///
    /// The decoder is built on first use and kept for later calls.
    pub fn decode_embedded<T: DeserializeOwned>(&self, name: &str) -> Result<T, HalError> {
        let embedded = self.get_embedded(name)?;
        self.decoder
            .get_or_init(Decoder::default)
            .decode(name, embedded)
    }

    pub fn set_decoder(&mut self, decoder: Decoder) {
        self.decoder = OnceCell::with_value(decoder);
    }
}

impl PartialEq for Hal {
    fn eq(&self, other: &Self) -> bool {
        self.links == other.links && self.embedded == other.embedded
    }
}
