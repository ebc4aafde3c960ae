//! Browser-independent page state.
//!
//! DESIGN
//! ======
//! Each manager keeps its decisions here as plain Rust so they can be tested
//! natively. The `managers` layer only reflects these values into the DOM.

pub mod contact;
pub mod nav;
pub mod reveal;
pub mod theme;
