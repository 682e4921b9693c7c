//! Backend-agnostic pointer input
//!
//! Mouse and touch input are physically distinct but both carry a position.
//! Platform adapters (winit, a DOM bridge, tests) resolve their native events
//! into [`PointerEvent`] once, and everything past that boundary works with
//! the tagged [`PointerInput`] variant only.

use crate::{ListenerKind, Point};

/// Backend-agnostic mouse button representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Middle mouse button (scroll wheel click)
    Middle,
    /// Right mouse button
    Right,
    /// Additional mouse buttons (back, forward, etc.)
    Other(u8),
}

impl MouseButton {
    /// Button index as reported by pointer APIs (0 = primary, 1 = auxiliary,
    /// 2 = secondary, 3+ = extra buttons)
    pub fn index(self) -> u8 {
        match self {
            MouseButton::Left => 0,
            MouseButton::Middle => 1,
            MouseButton::Right => 2,
            MouseButton::Other(n) => n,
        }
    }

    /// Map a pointer API button index back to a button
    pub fn from_index(index: u8) -> Self {
        match index {
            0 => MouseButton::Left,
            1 => MouseButton::Middle,
            2 => MouseButton::Right,
            n => MouseButton::Other(n),
        }
    }

    /// Whether this is the primary button (index 0)
    pub fn is_primary(self) -> bool {
        self.index() == 0
    }
}

/// The device that produced a pointer event, with its client position
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    /// Mouse event at `position`
    Mouse {
        position: Point,
        /// Button that changed state. Ignored for moves.
        button: MouseButton,
    },
    /// First touch point of a touch event at `position`
    Touch { position: Point },
}

impl PointerInput {
    /// Raw client coordinates carried by the event
    pub fn position(&self) -> Point {
        match *self {
            PointerInput::Mouse { position, .. } | PointerInput::Touch { position } => position,
        }
    }

    pub fn is_touch(&self) -> bool {
        matches!(self, PointerInput::Touch { .. })
    }
}

/// Where in a press-move-release sequence an event sits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// mousedown / touchstart
    Press,
    /// mousemove / touchmove
    Move,
    /// mouseup / touchend
    Release,
}

/// A single pointer event, already normalized by a platform adapter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub input: PointerInput,
    /// Whether the platform lets the handler suppress default behavior
    /// (text selection, scrolling) for this event
    pub cancelable: bool,
}

impl PointerEvent {
    pub fn new(phase: PointerPhase, input: PointerInput) -> Self {
        Self {
            phase,
            input,
            cancelable: true,
        }
    }

    /// Builder: mark the event as (non-)cancelable
    pub fn with_cancelable(mut self, cancelable: bool) -> Self {
        self.cancelable = cancelable;
        self
    }

    pub fn mouse_down(x: f32, y: f32, button: MouseButton) -> Self {
        Self::new(
            PointerPhase::Press,
            PointerInput::Mouse {
                position: Point::new(x, y),
                button,
            },
        )
    }

    pub fn mouse_move(x: f32, y: f32) -> Self {
        Self::new(
            PointerPhase::Move,
            PointerInput::Mouse {
                position: Point::new(x, y),
                button: MouseButton::Left,
            },
        )
    }

    pub fn mouse_up(x: f32, y: f32, button: MouseButton) -> Self {
        Self::new(
            PointerPhase::Release,
            PointerInput::Mouse {
                position: Point::new(x, y),
                button,
            },
        )
    }

    pub fn touch_start(x: f32, y: f32) -> Self {
        Self::new(
            PointerPhase::Press,
            PointerInput::Touch {
                position: Point::new(x, y),
            },
        )
    }

    pub fn touch_move(x: f32, y: f32) -> Self {
        Self::new(
            PointerPhase::Move,
            PointerInput::Touch {
                position: Point::new(x, y),
            },
        )
    }

    pub fn touch_end(x: f32, y: f32) -> Self {
        Self::new(
            PointerPhase::Release,
            PointerInput::Touch {
                position: Point::new(x, y),
            },
        )
    }

    /// Raw client coordinates of the event
    pub fn position(&self) -> Point {
        self.input.position()
    }

    /// The platform listener kind that would receive this event
    pub fn kind(&self) -> ListenerKind {
        match (self.phase, self.input.is_touch()) {
            (PointerPhase::Press, false) => ListenerKind::MouseDown,
            (PointerPhase::Move, false) => ListenerKind::MouseMove,
            (PointerPhase::Release, false) => ListenerKind::MouseUp,
            (PointerPhase::Press, true) => ListenerKind::TouchStart,
            (PointerPhase::Move, true) => ListenerKind::TouchMove,
            (PointerPhase::Release, true) => ListenerKind::TouchEnd,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_index_round_trip() {
        for index in 0..6 {
            assert_eq!(MouseButton::from_index(index).index(), index);
        }
        assert!(MouseButton::Left.is_primary());
        assert!(!MouseButton::Middle.is_primary());
        assert!(!MouseButton::Right.is_primary());
    }

    #[test]
    fn test_event_kind() {
        assert_eq!(
            PointerEvent::mouse_down(0.0, 0.0, MouseButton::Left).kind(),
            ListenerKind::MouseDown
        );
        assert_eq!(PointerEvent::mouse_move(0.0, 0.0).kind(), ListenerKind::MouseMove);
        assert_eq!(
            PointerEvent::mouse_up(0.0, 0.0, MouseButton::Left).kind(),
            ListenerKind::MouseUp
        );
        assert_eq!(PointerEvent::touch_start(0.0, 0.0).kind(), ListenerKind::TouchStart);
        assert_eq!(PointerEvent::touch_move(0.0, 0.0).kind(), ListenerKind::TouchMove);
        assert_eq!(PointerEvent::touch_end(0.0, 0.0).kind(), ListenerKind::TouchEnd);
    }

    #[test]
    fn test_position_from_either_variant() {
        assert_eq!(PointerEvent::touch_move(3.0, 4.0).position(), Point::new(3.0, 4.0));
        assert_eq!(
            PointerEvent::mouse_down(5.0, 6.0, MouseButton::Right).position(),
            Point::new(5.0, 6.0)
        );
    }
}
