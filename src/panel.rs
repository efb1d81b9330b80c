#![forbid(unsafe_code)]

//! Contextual settings panel controller.
//!
//! [`PanelController`] owns which tile's settings panel is open (at most one,
//! widget-global) and the outside-interaction dismissal that closes it.
//!
//! # Scoped outside-pointer observer
//!
//! Outside dismissal needs a process-wide pointer observer (the moral
//! equivalent of a document-level `mousedown` listener). That observer is a
//! scoped resource, never a free-standing global: the controller registers it
//! when a panel opens and deregisters it on every path that closes the panel
//! (toggle-close, outside click, programmatic close, controller drop). The
//! renderer supplies the observer through [`PointerObserver`].
//!
//! # Invariants
//!
//! 1. At most one panel is open at a time; opening one closes any other.
//! 2. The observer is registered exactly while a panel is open. Repeated
//!    open/close cycles never leak or double-register it.
//! 3. Switching the open panel from one tile to another keeps the single
//!    registration alive; it is not re-registered per tile.
//!
//! # Action hooks
//!
//! The panel menu exposes its actions (set as first page, rename, copy,
//! duplicate, delete) as named hooks on [`PanelActions`], invoked with the
//! owning tile id. Their effects are external collaborators' responsibility;
//! the core only dispatches.

use crate::store::TileStore;
use crate::tile::TileId;

/// Process-wide pointer observer used for outside dismissal.
///
/// Implemented by the renderer. `register` and `deregister` calls are always
/// paired by [`PanelController`].
pub trait PointerObserver {
    /// Start observing pointer-down events outside the panel.
    fn register(&mut self);
    /// Stop observing.
    fn deregister(&mut self);
}

/// Observer that does nothing. Default for headless use and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoopObserver;

impl PointerObserver for NoopObserver {
    fn register(&mut self) {}
    fn deregister(&mut self) {}
}

/// Menu actions the settings panel offers, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelAction {
    /// Set as first page.
    SetFirst,
    /// Rename.
    Rename,
    /// Copy.
    Copy,
    /// Duplicate.
    Duplicate,
    /// Delete.
    Delete,
}

/// Named hooks for panel menu actions.
///
/// Every hook receives the id of the tile owning the open panel. All hooks
/// default to no-ops; collaborators override the ones they implement.
pub trait PanelActions {
    /// Set the tile as the first page.
    fn on_set_first(&mut self, _id: &TileId) {}
    /// Rename the tile.
    fn on_rename(&mut self, _id: &TileId) {}
    /// Copy the tile.
    fn on_copy(&mut self, _id: &TileId) {}
    /// Duplicate the tile.
    fn on_duplicate(&mut self, _id: &TileId) {}
    /// Delete the tile.
    fn on_delete(&mut self, _id: &TileId) {}
}

/// At-most-one open settings panel, with scoped outside dismissal.
#[derive(Debug)]
pub struct PanelController<O: PointerObserver = NoopObserver> {
    open: Option<TileId>,
    observer: O,
}

impl PanelController<NoopObserver> {
    /// Create with the no-op observer.
    #[must_use]
    pub fn new() -> Self {
        Self::with_observer(NoopObserver)
    }
}

impl Default for PanelController<NoopObserver> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: PointerObserver> PanelController<O> {
    /// Create with a renderer-supplied observer.
    #[must_use]
    pub fn with_observer(observer: O) -> Self {
        Self {
            open: None,
            observer,
        }
    }

    /// Id of the tile whose panel is open, if any.
    #[must_use]
    pub fn open_panel(&self) -> Option<&TileId> {
        self.open.as_ref()
    }

    /// Whether any panel is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// The observer, for renderer access.
    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Toggle the panel for `id`.
    ///
    /// Closes it when it is the open one; otherwise opens it, implicitly
    /// closing any other open panel. Returns `true` when a panel is open
    /// afterwards.
    pub fn toggle(&mut self, id: &TileId) -> bool {
        if self.open.as_ref() == Some(id) {
            self.close();
            return false;
        }
        if self.open.is_none() {
            self.observer.register();
        }
        tracing::debug!(message = "panel.open", id = %id);
        self.open = Some(id.clone());
        true
    }

    /// Close the open panel, releasing the observer.
    ///
    /// Returns `true` when a panel was open.
    pub fn close(&mut self) -> bool {
        match self.open.take() {
            Some(id) => {
                tracing::debug!(message = "panel.close", id = %id);
                self.observer.deregister();
                true
            }
            None => false,
        }
    }

    /// Close the panel when a pointer interaction landed outside it.
    ///
    /// `pointer_inside` is the externally supplied containment verdict ("is
    /// the pointer target inside the rendered panel region"). No-op when no
    /// panel is open or the pointer was inside. Returns `true` when the
    /// panel closed.
    pub fn close_if_outside(&mut self, pointer_inside: bool) -> bool {
        if pointer_inside || self.open.is_none() {
            return false;
        }
        tracing::debug!(message = "panel.dismiss_outside");
        self.close()
    }

    /// Dispatch a menu action to `hooks` with the owning tile id.
    ///
    /// Returns `false` without dispatching when no panel is open.
    pub fn invoke(&mut self, action: PanelAction, hooks: &mut dyn PanelActions) -> bool {
        let Some(id) = self.open.clone() else {
            return false;
        };
        tracing::debug!(message = "panel.action", ?action, id = %id);
        match action {
            PanelAction::SetFirst => hooks.on_set_first(&id),
            PanelAction::Rename => hooks.on_rename(&id),
            PanelAction::Copy => hooks.on_copy(&id),
            PanelAction::Duplicate => hooks.on_duplicate(&id),
            PanelAction::Delete => hooks.on_delete(&id),
        }
        true
    }

    /// Close the panel when its owning tile no longer exists.
    pub(crate) fn retain_valid(&mut self, store: &TileStore) -> bool {
        if self.open.as_ref().is_some_and(|id| !store.contains(id)) {
            return self.close();
        }
        false
    }
}

impl<O: PointerObserver> Drop for PanelController<O> {
    fn drop(&mut self) {
        // Release the observer on the last close path there is.
        if self.open.is_some() {
            self.observer.deregister();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::TileStore;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Debug, Default)]
    struct CountingObserver {
        registered: Rc<Cell<u32>>,
        deregistered: Rc<Cell<u32>>,
    }

    impl PointerObserver for CountingObserver {
        fn register(&mut self) {
            self.registered.set(self.registered.get() + 1);
        }
        fn deregister(&mut self) {
            self.deregistered.set(self.deregistered.get() + 1);
        }
    }

    fn counting() -> (
        PanelController<CountingObserver>,
        Rc<Cell<u32>>,
        Rc<Cell<u32>>,
    ) {
        let observer = CountingObserver::default();
        let registered = Rc::clone(&observer.registered);
        let deregistered = Rc::clone(&observer.deregistered);
        (
            PanelController::with_observer(observer),
            registered,
            deregistered,
        )
    }

    #[test]
    fn toggle_twice_is_an_involution() {
        let mut panel = PanelController::new();
        assert!(panel.toggle(&"info".into()));
        assert!(!panel.toggle(&"info".into()));
        assert!(panel.open_panel().is_none());
    }

    #[test]
    fn toggle_other_tile_swaps_open_panel() {
        let mut panel = PanelController::new();
        panel.toggle(&"info".into());
        assert!(panel.toggle(&"details".into()));
        assert_eq!(panel.open_panel().map(TileId::as_str), Some("details"));
    }

    #[test]
    fn close_if_outside_respects_containment() {
        let mut panel = PanelController::new();
        panel.toggle(&"info".into());
        assert!(!panel.close_if_outside(true));
        assert!(panel.is_open());
        assert!(panel.close_if_outside(false));
        assert!(!panel.is_open());
        // Nothing open: both verdicts are no-ops.
        assert!(!panel.close_if_outside(false));
    }

    #[test]
    fn observer_paired_across_open_close_cycles() {
        let (mut panel, registered, deregistered) = counting();
        for _ in 0..3 {
            panel.toggle(&"info".into());
            panel.close_if_outside(false);
        }
        assert_eq!(registered.get(), 3);
        assert_eq!(deregistered.get(), 3);
    }

    #[test]
    fn observer_stays_registered_while_switching_panels() {
        let (mut panel, registered, deregistered) = counting();
        panel.toggle(&"info".into());
        panel.toggle(&"details".into());
        panel.toggle(&"other".into());
        assert_eq!(registered.get(), 1);
        assert_eq!(deregistered.get(), 0);
        panel.close();
        assert_eq!(deregistered.get(), 1);
    }

    #[test]
    fn drop_releases_live_registration() {
        let (mut panel, registered, deregistered) = counting();
        panel.toggle(&"info".into());
        drop(panel);
        assert_eq!(registered.get(), 1);
        assert_eq!(deregistered.get(), 1);
    }

    #[test]
    fn drop_after_close_does_not_double_release() {
        let (mut panel, _registered, deregistered) = counting();
        panel.toggle(&"info".into());
        panel.close();
        drop(panel);
        assert_eq!(deregistered.get(), 1);
    }

    #[test]
    fn invoke_dispatches_with_owning_id() {
        #[derive(Default)]
        struct Recorder {
            calls: Vec<(&'static str, String)>,
        }
        impl PanelActions for Recorder {
            fn on_set_first(&mut self, id: &TileId) {
                self.calls.push(("set_first", id.to_string()));
            }
            fn on_delete(&mut self, id: &TileId) {
                self.calls.push(("delete", id.to_string()));
            }
        }

        let mut panel = PanelController::new();
        let mut hooks = Recorder::default();
        assert!(!panel.invoke(PanelAction::Rename, &mut hooks));

        panel.toggle(&"info".into());
        assert!(panel.invoke(PanelAction::SetFirst, &mut hooks));
        assert!(panel.invoke(PanelAction::Delete, &mut hooks));
        // Defaulted hook: dispatch succeeds, nothing recorded.
        assert!(panel.invoke(PanelAction::Copy, &mut hooks));
        assert_eq!(
            hooks.calls,
            vec![
                ("set_first", "info".to_string()),
                ("delete", "info".to_string())
            ]
        );
        // Dispatch leaves the panel open; closing is a separate gesture.
        assert!(panel.is_open());
    }

    #[test]
    fn retain_valid_closes_dangling_panel() {
        let mut store = TileStore::new(TileStore::default_seed()).unwrap();
        let (mut panel, _registered, deregistered) = counting();
        panel.toggle(&"details".into());
        assert!(!panel.retain_valid(&store));
        store.remove(&"details".into()).unwrap();
        assert!(panel.retain_valid(&store));
        assert!(!panel.is_open());
        assert_eq!(deregistered.get(), 1);
    }
}
