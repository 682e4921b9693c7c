//! Gesture-scoped listener subscription
//!
//! A [`GestureSession`] is acquired when a drag starts and owns the
//! document-scoped move/release listeners for that drag. Ending the session
//! (or dropping it) detaches them exactly once.

use crate::{ListenerKind, ListenerOptions, ListenerScope, SharedRegistry, SurfaceId};

/// Handle for one live press-move-release gesture
#[derive(Debug)]
pub struct GestureSession {
    registry: SharedRegistry,
    scope: ListenerScope,
    released: bool,
}

impl GestureSession {
    /// Attach the gesture listeners for `surface` and return the handle that
    /// owns them
    pub fn begin(registry: &SharedRegistry, surface: SurfaceId) -> Self {
        let scope = ListenerScope::Document(surface);
        {
            let mut reg = registry.borrow_mut();
            for kind in ListenerKind::GESTURE {
                reg.add(scope, kind, ListenerOptions::ACTIVE);
            }
        }
        log::debug!("gesture started for {surface:?}");

        Self {
            registry: registry.clone(),
            scope,
            released: false,
        }
    }

    /// Whether this session still holds its listeners
    pub fn is_active(&self) -> bool {
        !self.released
    }

    /// Whether `kind` is delivered to this session
    pub fn listens_for(&self, kind: ListenerKind) -> bool {
        !self.released && self.registry.borrow().is_attached(self.scope, kind)
    }

    /// Detach the gesture listeners. Consumes the session.
    pub fn end(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;

        let mut reg = self.registry.borrow_mut();
        for kind in ListenerKind::GESTURE {
            reg.remove(self.scope, kind);
        }
        log::debug!("gesture ended for {:?}", self.scope.owner());
    }
}

impl Drop for GestureSession {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ListenerRegistry;

    #[test]
    fn test_begin_attaches_four_listeners() {
        let registry = ListenerRegistry::shared();
        let id = registry.borrow_mut().allocate_surface_id();

        let session = GestureSession::begin(&registry, id);
        assert!(session.is_active());
        assert_eq!(registry.borrow().count(ListenerScope::Document(id)), 4);
        for kind in ListenerKind::GESTURE {
            assert!(session.listens_for(kind));
            assert_eq!(
                registry.borrow().options(ListenerScope::Document(id), kind),
                Some(ListenerOptions { passive: false })
            );
        }
        assert!(!session.listens_for(ListenerKind::MouseDown));
    }

    #[test]
    fn test_end_detaches() {
        let registry = ListenerRegistry::shared();
        let id = registry.borrow_mut().allocate_surface_id();

        let session = GestureSession::begin(&registry, id);
        session.end();
        assert!(registry.borrow().is_empty());
    }

    #[test]
    fn test_drop_detaches() {
        let registry = ListenerRegistry::shared();
        let id = registry.borrow_mut().allocate_surface_id();

        {
            let _session = GestureSession::begin(&registry, id);
            assert_eq!(registry.borrow().len(), 4);
        }
        assert!(registry.borrow().is_empty());
    }

    #[test]
    fn test_release_leaves_other_surfaces_alone() {
        let registry = ListenerRegistry::shared();
        let a = registry.borrow_mut().allocate_surface_id();
        let b = registry.borrow_mut().allocate_surface_id();

        let first = GestureSession::begin(&registry, a);
        let second = GestureSession::begin(&registry, b);
        first.end();

        assert_eq!(registry.borrow().count_for(a), 0);
        assert_eq!(registry.borrow().count_for(b), 4);
        assert!(second.is_active());
    }
}
