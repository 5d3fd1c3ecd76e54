//! Decorative-effect math, kept free of browser types so it runs under
//! `cargo test` on any target. The wasm components in `frontend` wire these
//! values to DOM events and styles.

pub mod magnetic;
pub mod parallax;
pub mod particles;
pub mod progress;
pub mod reveal;
pub mod starfield;
pub mod tilt;
pub mod trail;
