#![allow(dead_code)]

use jsonhal::*;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, HalResource)]
pub struct HelloWorld {
    #[serde(flatten)]
    pub hal: Hal,
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, HalResource)]
pub struct Foobar {
    #[serde(flatten)]
    pub hal: Hal,
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, HalResource)]
pub struct Qux {
    #[serde(flatten)]
    pub hal: Hal,
    pub id: u32,
    pub name: String,
}

pub fn hello_world() -> HelloWorld {
    HelloWorld {
        hal: Hal::default(),
        id: 1,
        name: "Hello World".to_string(),
    }
}

pub fn foobar(id: u32) -> Foobar {
    let mut foobar = Foobar {
        hal: Hal::default(),
        id,
        name: format!("Foo bar {id}"),
    };
    foobar.set_link("self", format!("/v1/foo/bar/{id}"), "");
    foobar
}

pub fn qux(id: u32) -> Qux {
    let mut qux = Qux {
        hal: Hal::default(),
        id,
        name: format!("Qux {id}"),
    };
    qux.set_link("self", format!("/v1/qux/{id}"), "");
    qux
}

/// Routes library events to the test harness; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
