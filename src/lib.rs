//! Space-themed single-page portfolio.
//!
//! The decorative math, form state machine and display content compile on
//! every target so they stay testable natively; the Yew component tree only
//! exists on wasm32 and is served by Trunk.

pub mod content;
pub mod form;
pub mod fx;

#[cfg(target_arch = "wasm32")]
pub mod frontend;
