use crate::error::HalError;
use crate::hal::{Embedded, Hal, Link};
use serde::de::DeserializeOwned;

/// A type that carries a [`Hal`] and exposes its links and embedded resources.
///
/// Usually implemented with `#[derive(HalResource)]`, which picks the field
/// marked `#[hal]` or, failing that, the one field of type `Hal`.
pub trait HalResource {
    fn hal(&self) -> &Hal;

    fn hal_mut(&mut self) -> &mut Hal;

    fn set_link(
        &mut self,
        name: impl Into<String>,
        href: impl Into<String>,
        title: impl Into<String>,
    ) {
        self.hal_mut().set_link(name, href, title)
    }

    fn delete_link(&mut self, name: &str) {
        self.hal_mut().delete_link(name)
    }

    fn get_link(&self, name: &str) -> Result<&Link, HalError> {
        self.hal().get_link(name)
    }

    fn set_embedded(&mut self, name: impl Into<String>, embedded: impl Into<Embedded>) {
        self.hal_mut().set_embedded(name, embedded)
    }

    fn delete_embedded(&mut self, name: &str) {
        self.hal_mut().delete_embedded(name)
    }

    fn get_embedded(&self, name: &str) -> Result<&Embedded, HalError> {
        self.hal().get_embedded(name)
    }

    fn count_embedded(&self, name: &str) -> Result<usize, HalError> {
        self.hal().count_embedded(name)
    }

    fn decode_embedded<T: DeserializeOwned>(&self, name: &str) -> Result<T, HalError> {
        self.hal().decode_embedded(name)
    }
}

impl HalResource for Hal {
    fn hal(&self) -> &Hal {
        self
    }

    fn hal_mut(&mut self) -> &mut Hal {
        self
    }
}
