//! Shared browser-glue support for the storefront wasm bundles.
//!
//! The [`cookie`] and [`money`] modules are pure and build on any target;
//! the DOM helpers are only available on `wasm32`.

pub mod cookie;
pub mod money;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("no document on window")]
    NoDocument,
    #[error("dom operation failed: {0}")]
    Js(String),
}

#[cfg(target_arch = "wasm32")]
mod browser;
#[cfg(target_arch = "wasm32")]
pub use browser::*;
