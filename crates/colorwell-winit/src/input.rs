//! Winit input adapter for colorwell
//!
//! This module converts winit window events into colorwell's
//! backend-agnostic [`PointerEvent`]s. Mouse buttons carry no position in
//! winit, so the translator remembers the last cursor position. Only the
//! first finger of a multi-touch contact is tracked.

use colorwell::{
    ColorwellError, MouseButton, Point, PointerEvent, PointerInput, PointerPhase, Result,
};
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, Touch, TouchPhase, WindowEvent};

/// Whether `event` is one the translator understands
pub fn is_pointer_event(event: &WindowEvent) -> bool {
    matches!(
        event,
        WindowEvent::CursorMoved { .. }
            | WindowEvent::CursorEntered { .. }
            | WindowEvent::CursorLeft { .. }
            | WindowEvent::MouseInput { .. }
            | WindowEvent::Touch(_)
    )
}

/// Convert winit MouseButton to colorwell MouseButton
pub fn convert_mouse_button(button: winit::event::MouseButton) -> MouseButton {
    match button {
        winit::event::MouseButton::Left => MouseButton::Left,
        winit::event::MouseButton::Right => MouseButton::Right,
        winit::event::MouseButton::Middle => MouseButton::Middle,
        winit::event::MouseButton::Back => MouseButton::Other(3),
        winit::event::MouseButton::Forward => MouseButton::Other(4),
        winit::event::MouseButton::Other(n) => MouseButton::Other(n.min(u8::MAX as u16) as u8),
    }
}

/// Stateful translator from winit events to pointer events
#[derive(Debug, Clone)]
pub struct PointerTranslator {
    cursor: Option<Point>,
    active_touch: Option<u64>,
    scale_factor: f64,
}

impl Default for PointerTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerTranslator {
    pub fn new() -> Self {
        Self {
            cursor: None,
            active_touch: None,
            scale_factor: 1.0,
        }
    }

    /// Builder: report positions in logical pixels for this scale factor
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.set_scale_factor(scale_factor);
        self
    }

    /// Update the scale factor, e.g. on `WindowEvent::ScaleFactorChanged`
    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        if scale_factor > 0.0 {
            self.scale_factor = scale_factor;
        }
    }

    /// Last known cursor position in logical pixels
    pub fn cursor_position(&self) -> Option<Point> {
        self.cursor
    }

    fn to_point(&self, position: PhysicalPosition<f64>) -> Point {
        let logical = position.to_logical::<f32>(self.scale_factor);
        Point::new(logical.x, logical.y)
    }

    /// Translate one winit event
    ///
    /// Returns `Ok(None)` for pointer events that carry no press, move or
    /// release for colorwell (cursor entering/leaving, extra fingers, a
    /// button press before the cursor position is known).
    ///
    /// # Errors
    /// Returns [`ColorwellError::UnexpectedEvent`] for anything that is not a
    /// pointer event. Filter with [`is_pointer_event`] first when forwarding
    /// a whole event stream.
    pub fn translate(&mut self, event: &WindowEvent) -> Result<Option<PointerEvent>> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                let point = self.to_point(*position);
                self.cursor = Some(point);
                Ok(Some(PointerEvent::new(
                    PointerPhase::Move,
                    PointerInput::Mouse {
                        position: point,
                        button: MouseButton::Left,
                    },
                )))
            }
            WindowEvent::CursorEntered { .. } | WindowEvent::CursorLeft { .. } => Ok(None),
            WindowEvent::MouseInput { state, button, .. } => {
                let Some(position) = self.cursor else {
                    log::debug!("{button:?} {state:?} before any cursor position, dropping");
                    return Ok(None);
                };
                let phase = match state {
                    ElementState::Pressed => PointerPhase::Press,
                    ElementState::Released => PointerPhase::Release,
                };
                Ok(Some(PointerEvent::new(
                    phase,
                    PointerInput::Mouse {
                        position,
                        button: convert_mouse_button(*button),
                    },
                )))
            }
            WindowEvent::Touch(touch) => Ok(self.translate_touch(touch)),
            other => Err(ColorwellError::UnexpectedEvent(format!("{other:?}"))),
        }
    }

    fn translate_touch(&mut self, touch: &Touch) -> Option<PointerEvent> {
        let position = self.to_point(touch.location);
        let input = PointerInput::Touch { position };

        let phase = match touch.phase {
            TouchPhase::Started => {
                if self.active_touch.is_some() {
                    return None;
                }
                self.active_touch = Some(touch.id);
                PointerPhase::Press
            }
            TouchPhase::Moved => {
                if self.active_touch != Some(touch.id) {
                    return None;
                }
                PointerPhase::Move
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                if self.active_touch != Some(touch.id) {
                    return None;
                }
                self.active_touch = None;
                PointerPhase::Release
            }
        };

        Some(PointerEvent::new(phase, input))
    }
}
