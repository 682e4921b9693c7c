//! Interactive surface: the draggable region at the heart of every picker
//!
//! A surface turns pointer events into region-relative, clamped coordinates
//! and runs a two-state machine:
//!
//! - `Idle -> Dragging` on a primary mouse press or first touch inside the
//!   region. The position is reported immediately and a [`GestureSession`]
//!   attaches document-scoped move/release listeners.
//! - `Dragging -> Dragging` on every move, reporting the new position.
//! - `Dragging -> Idle` on release. Listeners are detached first, then the
//!   final position is reported twice: as a preview and as a commit.
//!
//! # Example
//!
//! ```ignore
//! let registry = ListenerRegistry::shared();
//! let mut surface = InteractiveSurface::new(&registry, BoundingRect::new(100.0, 50.0, 0.0, 0.0))
//!     .on_change(|change| println!("{:?}", change));
//! surface.mount();
//! surface.handle_event(&PointerEvent::mouse_down(30.0, 20.0, MouseButton::Left));
//! ```

use crate::{
    BoundingRect, GestureSession, ListenerKind, ListenerOptions, ListenerScope, Point,
    PointerEvent, PointerInput, PointerPhase, SharedRegistry, SurfaceId,
};

/// Source of a region's current bounding rectangle
///
/// Queried on every press, move and release, never cached, because the
/// region may have been laid out again since the last event. `None` means
/// the region currently has no geometry, and emissions are skipped.
pub trait RegionBounds {
    fn bounding_rect(&self) -> Option<BoundingRect>;
}

impl RegionBounds for BoundingRect {
    fn bounding_rect(&self) -> Option<BoundingRect> {
        Some(*self)
    }
}

impl<F> RegionBounds for F
where
    F: Fn() -> Option<BoundingRect>,
{
    fn bounding_rect(&self) -> Option<BoundingRect> {
        self()
    }
}

/// Normalized position reported to `on_change`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerChange {
    /// Horizontal offset from the region's left edge, in `[0, width]`
    pub x: f32,
    /// Vertical offset from the region's top edge, in `[0, height]`
    pub y: f32,
    /// Set on the last report of a gesture only
    pub complete: bool,
}

impl PointerChange {
    pub fn preview(point: Point) -> Self {
        Self {
            x: point.x,
            y: point.y,
            complete: false,
        }
    }

    pub fn commit(point: Point) -> Self {
        Self {
            x: point.x,
            y: point.y,
            complete: true,
        }
    }

    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Rendering attributes passed through untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurfaceAttributes {
    pub class_name: Option<String>,
    pub style: Option<String>,
}

impl SurfaceAttributes {
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }
}

/// Drag state of a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SurfaceState {
    #[default]
    Idle,
    Dragging,
}

/// What a surface did with an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventResponse {
    /// The event reached a listener of this surface
    pub handled: bool,
    /// The platform's default handling should be suppressed
    pub prevent_default: bool,
}

impl EventResponse {
    pub const IGNORED: EventResponse = EventResponse {
        handled: false,
        prevent_default: false,
    };

    pub const HANDLED: EventResponse = EventResponse {
        handled: true,
        prevent_default: false,
    };

    /// Combine the responses of several surfaces that saw the same event
    pub fn merge(self, other: EventResponse) -> EventResponse {
        EventResponse {
            handled: self.handled || other.handled,
            prevent_default: self.prevent_default || other.prevent_default,
        }
    }
}

/// A draggable region reporting normalized pointer positions
pub struct InteractiveSurface {
    id: SurfaceId,
    registry: SharedRegistry,
    bounds: Box<dyn RegionBounds>,
    attributes: SurfaceAttributes,
    on_change: Option<Box<dyn FnMut(PointerChange)>>,
    on_preview: Option<Box<dyn FnMut(Point)>>,
    on_commit: Option<Box<dyn FnMut(Point)>>,
    session: Option<GestureSession>,
}

impl std::fmt::Debug for InteractiveSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InteractiveSurface")
            .field("id", &self.id)
            .field("attributes", &self.attributes)
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

impl InteractiveSurface {
    /// Create an unmounted surface over the region described by `bounds`
    pub fn new(registry: &SharedRegistry, bounds: impl RegionBounds + 'static) -> Self {
        let id = registry.borrow_mut().allocate_surface_id();

        Self {
            id,
            registry: registry.clone(),
            bounds: Box::new(bounds),
            attributes: SurfaceAttributes::default(),
            on_change: None,
            on_preview: None,
            on_commit: None,
            session: None,
        }
    }

    /// Set a callback receiving every report, with `complete` set on the
    /// final one of a gesture
    pub fn on_change(mut self, f: impl FnMut(PointerChange) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    /// Set a callback for live updates (press, move, and the release position)
    pub fn on_preview(mut self, f: impl FnMut(Point) + 'static) -> Self {
        self.on_preview = Some(Box::new(f));
        self
    }

    /// Set a callback fired once when a gesture is released
    pub fn on_commit(mut self, f: impl FnMut(Point) + 'static) -> Self {
        self.on_commit = Some(Box::new(f));
        self
    }

    /// Set pass-through rendering attributes
    pub fn with_attributes(mut self, attributes: SurfaceAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn id(&self) -> SurfaceId {
        self.id
    }

    pub fn attributes(&self) -> &SurfaceAttributes {
        &self.attributes
    }

    pub fn state(&self) -> SurfaceState {
        match self.session {
            Some(ref session) if session.is_active() => SurfaceState::Dragging,
            _ => SurfaceState::Idle,
        }
    }

    pub fn is_mounted(&self) -> bool {
        let registry = self.registry.borrow();
        ListenerKind::PRESS
            .iter()
            .any(|kind| registry.is_attached(ListenerScope::Region(self.id), *kind))
    }

    /// Attach the region's press listeners
    pub fn mount(&mut self) {
        let mut registry = self.registry.borrow_mut();
        for kind in ListenerKind::PRESS {
            registry.add(ListenerScope::Region(self.id), kind, ListenerOptions::ACTIVE);
        }
    }

    /// Detach the region's press listeners and drop any live gesture
    ///
    /// A gesture cut short this way releases its document listeners but does
    /// not report a commit.
    pub fn unmount(&mut self) {
        {
            let mut registry = self.registry.borrow_mut();
            for kind in ListenerKind::PRESS {
                registry.remove(ListenerScope::Region(self.id), kind);
            }
        }

        if let Some(session) = self.session.take() {
            log::debug!("{:?} unmounted mid-gesture; no completion reported", self.id);
            session.end();
        }
    }

    /// Feed one pointer event to the surface
    pub fn handle_event(&mut self, event: &PointerEvent) -> EventResponse {
        match event.phase {
            PointerPhase::Press => self.handle_press(event),
            PointerPhase::Move => self.handle_move(event),
            PointerPhase::Release => self.handle_release(event),
        }
    }

    fn handle_press(&mut self, event: &PointerEvent) -> EventResponse {
        let kind = event.kind();
        if !self
            .registry
            .borrow()
            .is_attached(ListenerScope::Region(self.id), kind)
        {
            return EventResponse::IGNORED;
        }

        let Some(rect) = self.bounds.bounding_rect() else {
            log::trace!("{:?} has no bounds, ignoring {kind}", self.id);
            return EventResponse::IGNORED;
        };

        let position = event.position();
        if !rect.contains(position) {
            return EventResponse::IGNORED;
        }

        if let PointerInput::Mouse { button, .. } = event.input {
            if !button.is_primary() {
                log::trace!("{:?} ignoring press of {button:?}", self.id);
                return EventResponse::IGNORED;
            }
        }

        if self.state() == SurfaceState::Dragging {
            log::trace!("{:?} already dragging, ignoring {kind}", self.id);
            return EventResponse::IGNORED;
        }

        self.emit_preview(rect.clamp_local(position));
        self.session = Some(GestureSession::begin(&self.registry, self.id));

        EventResponse {
            handled: true,
            prevent_default: event.cancelable,
        }
    }

    fn handle_move(&mut self, event: &PointerEvent) -> EventResponse {
        if !self.listens_for(event.kind()) {
            return EventResponse::IGNORED;
        }

        if let Some(rect) = self.bounds.bounding_rect() {
            self.emit_preview(rect.clamp_local(event.position()));
        }

        EventResponse::HANDLED
    }

    fn handle_release(&mut self, event: &PointerEvent) -> EventResponse {
        if !self.listens_for(event.kind()) {
            return EventResponse::IGNORED;
        }

        // Detach before reporting so a late event cannot slip in after teardown
        if let Some(session) = self.session.take() {
            session.end();
        }

        if let Some(rect) = self.bounds.bounding_rect() {
            let point = rect.clamp_local(event.position());
            self.emit_preview(point);
            self.emit_commit(point);
        }

        EventResponse::HANDLED
    }

    fn listens_for(&self, kind: ListenerKind) -> bool {
        self.session
            .as_ref()
            .map(|session| session.listens_for(kind))
            .unwrap_or(false)
    }

    fn emit_preview(&mut self, point: Point) {
        if let Some(ref mut on_change) = self.on_change {
            on_change(PointerChange::preview(point));
        }
        if let Some(ref mut on_preview) = self.on_preview {
            on_preview(point);
        }
    }

    fn emit_commit(&mut self, point: Point) {
        if let Some(ref mut on_change) = self.on_change {
            on_change(PointerChange::commit(point));
        }
        if let Some(ref mut on_commit) = self.on_commit {
            on_commit(point);
        }
    }
}

impl Drop for InteractiveSurface {
    fn drop(&mut self) {
        self.unmount();
    }
}
