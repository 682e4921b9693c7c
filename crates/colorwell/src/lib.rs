//! # colorwell
//!
//! Backend agnostic color picker core.
//!
//! This crate provides the pointer-interaction engine and color model behind
//! the picker widgets, with no dependency on any windowing library. Platform
//! events are translated by backend crates like `colorwell-winit`.
//!
//! ## Pointer Interaction
//!
//! - [`InteractiveSurface`] - Draggable region reporting clamped, region-relative positions
//! - [`PointerEvent`] - A mouse or touch event, already resolved by a platform adapter
//! - [`GestureSession`] - Owns the document-level listeners of one drag
//! - [`ListenerRegistry`] - Records which listeners are attached where
//!
//! ## Color
//!
//! - [`Color`] - A color in hex, RGB and HSV at once
//! - [`Rgb`], [`Hsv`] - The individual color models

mod color;
mod error;
mod gesture;
mod input;
mod listeners;
mod primitives;
mod surface;

pub use color::*;
pub use error::*;
pub use gesture::*;
pub use input::*;
pub use listeners::*;
pub use primitives::*;
pub use surface::*;
