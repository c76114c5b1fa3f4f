//! Foundation primitives for the monthgrid date-picker crates.
//!
//! ## Usage
//!
//! Provides the pixel coordinate types used by hit-testing and label layout,
//! and identity-comparable callback handles for event listeners.
#![deny(missing_docs, clippy::unwrap_used)]

pub mod callback;
pub mod dp;
pub mod px;

pub use callback::{Callback, CallbackWith, Slot};
pub use dp::Dp;
pub use px::{Px, PxPosition, PxSize};
