//! # colorwell-winit
//!
//! Winit input adapter for colorwell.
//!
//! [`PointerTranslator`] turns winit `WindowEvent`s into colorwell
//! [`PointerEvent`](colorwell::PointerEvent)s that can be fed to any
//! [`InteractiveSurface`](colorwell::InteractiveSurface) or picker component.

mod input;

pub use input::*;

// Re-export the winit types callers need to drive the translator
pub use winit::event::WindowEvent;
