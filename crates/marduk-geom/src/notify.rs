//! Change notification.
//!
//! Mutable models ([`Rect`](crate::coords::Rect),
//! [`Coordinate`](crate::coords::Coordinate)) own a [`ChangeNotifier`] and call
//! [`ChangeNotifier::notify`] once for every field whose value actually changed.
//! Batching, deduplication and re-rendering are the listener's business.

use std::fmt;

/// Holds the optional "state changed" callback of a model.
///
/// The default notifier has no listener and `notify` does nothing.
#[derive(Default)]
pub struct ChangeNotifier {
    listener: Option<Box<dyn FnMut()>>,
}

impl ChangeNotifier {
    pub const fn new() -> Self {
        Self { listener: None }
    }

    pub fn with_listener(f: impl FnMut() + 'static) -> Self {
        Self { listener: Some(Box::new(f)) }
    }

    /// Replaces the current listener.
    pub fn set_listener(&mut self, f: impl FnMut() + 'static) {
        self.listener = Some(Box::new(f));
    }

    /// Removes the listener, returning it if one was installed.
    pub fn take_listener(&mut self) -> Option<Box<dyn FnMut()>> {
        self.listener.take()
    }

    #[inline]
    pub fn has_listener(&self) -> bool {
        self.listener.is_some()
    }

    /// Invokes the listener synchronously, if any.
    #[inline]
    pub fn notify(&mut self) {
        if let Some(f) = &mut self.listener {
            f();
        }
    }
}

impl fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("listener", &self.listener.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn default_is_silent() {
        let mut n = ChangeNotifier::new();
        assert!(!n.has_listener());
        n.notify();
    }

    #[test]
    fn listener_runs_once_per_notify() {
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        let mut n = ChangeNotifier::with_listener(move || h.set(h.get() + 1));
        n.notify();
        n.notify();
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn take_listener_detaches() {
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        let mut n = ChangeNotifier::new();
        n.set_listener(move || h.set(h.get() + 1));
        assert!(n.take_listener().is_some());
        n.notify();
        assert_eq!(hits.get(), 0);
    }
}
