//! Listener registration bookkeeping
//!
//! A region only hears presses that land on it, but a drag has to keep
//! tracking the pointer after it leaves the region. Platforms solve this with
//! two listener scopes: region-scoped press listeners that live as long as
//! the region is mounted, and document-scoped move/release listeners that
//! live as long as a gesture. [`ListenerRegistry`] records which of those are
//! attached so that delivery, idempotency and cleanup can be checked.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Platform pointer event kinds a surface listens for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ListenerKind {
    MouseDown,
    MouseMove,
    MouseUp,
    TouchStart,
    TouchMove,
    TouchEnd,
}

impl ListenerKind {
    /// Kinds a region listens for while mounted
    pub const PRESS: [ListenerKind; 2] = [ListenerKind::MouseDown, ListenerKind::TouchStart];

    /// Kinds a gesture listens for on the document while dragging
    pub const GESTURE: [ListenerKind; 4] = [
        ListenerKind::MouseMove,
        ListenerKind::MouseUp,
        ListenerKind::TouchMove,
        ListenerKind::TouchEnd,
    ];

    /// DOM-style event name
    pub fn name(self) -> &'static str {
        match self {
            ListenerKind::MouseDown => "mousedown",
            ListenerKind::MouseMove => "mousemove",
            ListenerKind::MouseUp => "mouseup",
            ListenerKind::TouchStart => "touchstart",
            ListenerKind::TouchMove => "touchmove",
            ListenerKind::TouchEnd => "touchend",
        }
    }
}

impl fmt::Display for ListenerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identifies a surface within a registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(pub u64);

/// Target a listener is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ListenerScope {
    /// The surface's own region element
    Region(SurfaceId),
    /// The whole document/window, on behalf of one surface's gesture
    Document(SurfaceId),
}

impl ListenerScope {
    pub fn owner(self) -> SurfaceId {
        match self {
            ListenerScope::Region(id) | ListenerScope::Document(id) => id,
        }
    }
}

/// Options a listener is registered with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerOptions {
    /// Passive listeners cannot suppress default handling. Pointer tracking
    /// needs `passive: false`.
    pub passive: bool,
}

impl ListenerOptions {
    pub const ACTIVE: ListenerOptions = ListenerOptions { passive: false };
}

impl Default for ListenerOptions {
    fn default() -> Self {
        Self::ACTIVE
    }
}

/// Registry of attached listeners
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    attached: HashMap<(ListenerScope, ListenerKind), ListenerOptions>,
    next_surface_id: u64,
}

/// The registry is shared by every surface of one UI thread
pub type SharedRegistry = Rc<RefCell<ListenerRegistry>>;

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry wrapped for sharing between surfaces
    pub fn shared() -> SharedRegistry {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Allocate an id for a new surface
    pub fn allocate_surface_id(&mut self) -> SurfaceId {
        let id = SurfaceId(self.next_surface_id);
        self.next_surface_id += 1;
        id
    }

    /// Attach a listener. Returns `false` if it was already attached, in
    /// which case the registry is unchanged.
    pub fn add(&mut self, scope: ListenerScope, kind: ListenerKind, options: ListenerOptions) -> bool {
        if self.attached.contains_key(&(scope, kind)) {
            log::trace!("{kind} already attached on {scope:?}");
            return false;
        }
        self.attached.insert((scope, kind), options);
        true
    }

    /// Detach a listener. Returns `false` if it was not attached.
    pub fn remove(&mut self, scope: ListenerScope, kind: ListenerKind) -> bool {
        self.attached.remove(&(scope, kind)).is_some()
    }

    pub fn is_attached(&self, scope: ListenerScope, kind: ListenerKind) -> bool {
        self.attached.contains_key(&(scope, kind))
    }

    /// Options a listener was attached with, if attached
    pub fn options(&self, scope: ListenerScope, kind: ListenerKind) -> Option<ListenerOptions> {
        self.attached.get(&(scope, kind)).copied()
    }

    /// Number of listeners attached on a scope
    pub fn count(&self, scope: ListenerScope) -> usize {
        self.attached.keys().filter(|(s, _)| *s == scope).count()
    }

    /// Number of listeners attached for any scope owned by `surface`
    pub fn count_for(&self, surface: SurfaceId) -> usize {
        self.attached
            .keys()
            .filter(|(s, _)| s.owner() == surface)
            .count()
    }

    /// Total number of attached listeners
    pub fn len(&self) -> usize {
        self.attached.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attached.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_idempotent() {
        let mut registry = ListenerRegistry::new();
        let id = registry.allocate_surface_id();
        let scope = ListenerScope::Document(id);

        assert!(registry.add(scope, ListenerKind::MouseMove, ListenerOptions::ACTIVE));
        assert!(!registry.add(scope, ListenerKind::MouseMove, ListenerOptions::ACTIVE));
        assert_eq!(registry.count(scope), 1);
    }

    #[test]
    fn test_remove_missing() {
        let mut registry = ListenerRegistry::new();
        let id = registry.allocate_surface_id();

        assert!(!registry.remove(ListenerScope::Region(id), ListenerKind::MouseDown));
    }

    #[test]
    fn test_scopes_are_separate() {
        let mut registry = ListenerRegistry::new();
        let a = registry.allocate_surface_id();
        let b = registry.allocate_surface_id();
        assert_ne!(a, b);

        for kind in ListenerKind::PRESS {
            registry.add(ListenerScope::Region(a), kind, ListenerOptions::ACTIVE);
        }
        for kind in ListenerKind::GESTURE {
            registry.add(ListenerScope::Document(b), kind, ListenerOptions::ACTIVE);
        }

        assert_eq!(registry.count(ListenerScope::Region(a)), 2);
        assert_eq!(registry.count(ListenerScope::Document(a)), 0);
        assert_eq!(registry.count_for(b), 4);
        assert_eq!(registry.len(), 6);
        assert_eq!(
            registry.options(ListenerScope::Region(a), ListenerKind::TouchStart),
            Some(ListenerOptions { passive: false })
        );
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(ListenerKind::TouchEnd.to_string(), "touchend");
        assert_eq!(ListenerKind::MouseDown.name(), "mousedown");
    }
}
