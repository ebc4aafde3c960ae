//! Utility helpers shared across managers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rate limiting, viewport tests and counter stepping are plain Rust so they
//! can be tested natively; `dom` and the browser halves of the other modules
//! only exist with the `hydrate` feature.

pub mod counter;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod storage;
pub mod timing;
pub mod viewport;
