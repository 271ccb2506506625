use crate::decode::Decoder;
use crate::error::HalError;
use crate::hal::{Embedded, Hal};
use serde::Serialize;

#[derive(Debug, Default)]
pub struct HalBuilder {
    hal: Hal,
    error: Option<HalError>,
}

impl HalBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn link(self, name: impl Into<String>, href: impl Into<String>) -> Self {
        self.titled_link(name, href, "")
    }

    pub fn titled_link(
        mut self,
        name: impl Into<String>,
        href: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        self.hal.set_link(name, href, title);
        self
    }

    pub fn embedded(mut self, name: impl Into<String>, embedded: impl Into<Embedded>) -> Self {
        self.hal.set_embedded(name, embedded);
        self
    }

    pub fn embed_resource<T>(self, name: impl Into<String>, resource: &T) -> Self
    where
        T: Serialize + ?Sized,
    {
        let embedded = Embedded::resource(resource);
        self.record(name, embedded)
    }

    pub fn embed_collection<'a, T, I>(self, name: impl Into<String>, resources: I) -> Self
    where
        T: Serialize + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let embedded = Embedded::collection(resources);
        self.record(name, embedded)
    }

    pub fn decoder(mut self, decoder: Decoder) -> Self {
        self.hal.set_decoder(decoder);
        self
    }

    /// Returns the first conversion error raised by an `embed_*` call, if any.
    pub fn build(self) -> Result<Hal, HalError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.hal),
        }
    }

    fn record(mut self, name: impl Into<String>, embedded: Result<Embedded, HalError>) -> Self {
        match embedded {
            Ok(embedded) => self.hal.set_embedded(name, embedded),
            Err(error) => {
                if self.error.is_none() {
                    self.error = Some(error);
                }
            }
        }
        self
    }
}

impl Hal {
    pub fn builder() -> HalBuilder {
        HalBuilder::new()
    }
}
