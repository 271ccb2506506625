//! # jsonhal
//!
//! Wraps your own data in a [HAL](http://stateless.co/hal_specification.html)
//! document: a payload object plus an optional `_links` map and an optional
//! `_embedded` map of sub-resources.
//!
//! ## Basic Usage
//!
//! Compose a [`Hal`] into your struct with `#[serde(flatten)]` and derive
//! [`HalResource`] to get the link and embedded accessors on the struct itself.
//!
//! ```rust
//! use jsonhal::*;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, HalResource)]
//! struct HelloWorld {
//!     #[serde(flatten)]
//!     hal: Hal,
//!     id: u32,
//!     name: String,
//! }
//!
//! let mut hello = HelloWorld {
//!     hal: Hal::default(),
//!     id: 1,
//!     name: "Hello World".to_string(),
//! };
//! assert_eq!(
//!     serde_json::to_string(&hello).unwrap(),
//!     r#"{"id":1,"name":"Hello World"}"#
//! );
//!
//! hello.set_link("self", "/v1/hello/world/1", "");
//! assert_eq!(
//!     serde_json::to_string(&hello).unwrap(),
//!     r#"{"_links":{"self":{"href":"/v1/hello/world/1"}},"id":1,"name":"Hello World"}"#
//! );
//! ```
//!
//! ## Embedded Resources
//!
//! ```rust
//! use jsonhal::*;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Serialize, Deserialize, HalResource)]
//! struct Foobar {
//!     #[serde(flatten)]
//!     hal: Hal,
//!     id: u32,
//!     name: String,
//! }
//!
//! let foobars: Vec<Foobar> = (1..=2)
//!     .map(|id| Foobar {
//!         hal: Hal::builder()
//!             .link("self", format!("/v1/foo/bar/{id}"))
//!             .build()
//!             .expect("Valid links"),
//!         id,
//!         name: format!("Foo bar {id}"),
//!     })
//!     .collect();
//!
//! let hal = Hal::builder()
//!     .link("self", "/v1/hello/world/1")
//!     .embed_collection("foobars", &foobars)
//!     .build()
//!     .expect("Foobars serialize");
//!
//! assert_eq!(hal.count_embedded("foobars").unwrap(), 2);
//!
//! let decoded: Vec<Foobar> = hal.decode_embedded("foobars").unwrap();
//! assert_eq!(decoded[1].get_link("self").unwrap().href, "/v1/foo/bar/2");
//! ```

mod builder;
mod decode;
mod error;
mod hal;
mod resource;
pub mod timestamp;

pub use builder::*;
pub use decode::*;
pub use error::*;
pub use hal::*;
pub use resource::*;

// Re-export the derive macro
pub use jsonhal_derive::HalResource;
