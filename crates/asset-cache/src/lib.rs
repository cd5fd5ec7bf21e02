#![allow(async_fn_in_trait)]

mod manifest;
pub use manifest::*;

mod platform;
pub use platform::*;

#[cfg(feature = "wasm")]
mod web;
#[cfg(feature = "wasm")]
pub use web::*;

mod worker;
pub use worker::*;
