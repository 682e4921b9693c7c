//! # colorwell-interactive
//!
//! Color picker components for colorwell.
//!
//! This crate builds pickers out of the core's interactive surfaces: a
//! saturation/value area, hue and alpha bars, and text fields for typing a
//! color in directly.

mod config;
mod fields;
mod picker;

pub use config::*;
pub use fields::*;
pub use picker::*;
