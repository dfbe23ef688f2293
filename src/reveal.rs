//! One-shot "entered view" tracking for page sections.
//!
//! A [`RevealController`] subscribes to a [`VisibilityObserver`] for a single section and
//! latches [`RevealState::Entered`] on the first intersection. The observer subscription
//! is released as soon as that happens, or when the controller is dropped.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};
use std::str::FromStr;
use thiserror::Error;

/// Sections must be this far inside the viewport before they reveal.
pub const DEFAULT_REVEAL_MARGIN: ViewportMargin = ViewportMargin(-100);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    NotEntered,
    Entered,
}

impl RevealState {
    pub fn has_entered(&self) -> bool {
        matches!(self, RevealState::Entered)
    }
}

/// Grows (positive) or shrinks (negative) the viewport used for intersection, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportMargin(pub i32);

impl ViewportMargin {
    pub fn px(&self) -> i32 {
        self.0
    }
}

impl Default for ViewportMargin {
    fn default() -> Self {
        DEFAULT_REVEAL_MARGIN
    }
}

impl fmt::Display for ViewportMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid viewport margin: {0:?} (expected e.g. \"-100px\")")]
pub struct MarginParseError(pub String);

impl FromStr for ViewportMargin {
    type Err = MarginParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let num = trimmed.strip_suffix("px").unwrap_or(trimmed).trim();
        num.parse::<i32>()
            .map(ViewportMargin)
            .map_err(|_| MarginParseError(s.to_string()))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ObserverError {
    #[error("viewport intersection observation is not supported")]
    Unsupported,
    #[error("couldn't observe element: {0}")]
    Observe(String),
}

/// Platform capability that reports whether an element intersects the viewport.
///
/// `subscribe` registers `on_change`, which is called with `true` whenever the target
/// intersects the (margin-adjusted) viewport and `false` when it leaves it.
pub trait VisibilityObserver {
    type Target;
    type Handle;

    fn subscribe(
        &self,
        target: &Self::Target,
        margin: ViewportMargin,
        on_change: Box<dyn FnMut(bool)>,
    ) -> Result<Self::Handle, ObserverError>;

    fn unsubscribe(&self, handle: Self::Handle);
}

struct Shared<O: VisibilityObserver> {
    observer: O,
    margin: ViewportMargin,
    state: Cell<RevealState>,
    started: Cell<bool>,
    handle: RefCell<Option<O::Handle>>,
    on_enter: RefCell<Option<Box<dyn FnOnce()>>>,
}

impl<O: VisibilityObserver> Shared<O> {
    fn enter(&self) {
        if self.state.get().has_entered() {
            return;
        }
        self.state.set(RevealState::Entered);
        self.release();
        // take before calling so a re-entrant event can't see it
        let cb = self.on_enter.borrow_mut().take();
        if let Some(cb) = cb {
            cb();
        }
    }

    fn release(&self) {
        let handle = self.handle.borrow_mut().take();
        if let Some(handle) = handle {
            self.observer.unsubscribe(handle);
        }
    }
}

pub struct RevealController<O: VisibilityObserver> {
    shared: Rc<Shared<O>>,
}

impl<O: VisibilityObserver + 'static> RevealController<O> {
    pub fn new(observer: O, margin: ViewportMargin) -> Self {
        Self {
            shared: Rc::new(Shared {
                observer,
                margin,
                state: Cell::new(RevealState::NotEntered),
                started: Cell::new(false),
                handle: RefCell::new(None),
                on_enter: RefCell::new(None),
            }),
        }
    }

    /// Starts watching `target`. `on_enter` runs at most once, on the first intersection.
    ///
    /// Falls back to revealing immediately when the observer can't watch the target.
    /// Calling this again after the first call does nothing.
    pub fn observe(&self, target: &O::Target, on_enter: impl FnOnce() + 'static) {
        let shared = &self.shared;
        if shared.started.replace(true) {
            return;
        }
        *shared.on_enter.borrow_mut() = Some(Box::new(on_enter));

        let weak: Weak<Shared<O>> = Rc::downgrade(shared);
        let on_change = Box::new(move |visible: bool| {
            if !visible {
                return;
            }
            if let Some(shared) = weak.upgrade() {
                shared.enter();
            }
        });

        match shared.observer.subscribe(target, shared.margin, on_change) {
            Ok(handle) => {
                if shared.state.get().has_entered() {
                    // the observer reported synchronously during subscribe
                    shared.observer.unsubscribe(handle);
                } else {
                    *shared.handle.borrow_mut() = Some(handle);
                }
            }
            Err(e) => {
                log::warn!("revealing without animation: {e}");
                shared.enter();
            }
        }
    }

    pub fn state(&self) -> RevealState {
        self.shared.state.get()
    }

    pub fn has_entered(&self) -> bool {
        self.state().has_entered()
    }

    pub fn margin(&self) -> ViewportMargin {
        self.shared.margin
    }

    pub fn is_observing(&self) -> bool {
        self.shared.handle.borrow().is_some()
    }

    /// Stops observing without changing the reveal state.
    pub fn release(&self) {
        self.shared.release();
    }
}

impl<O: VisibilityObserver> Drop for RevealController<O> {
    fn drop(&mut self) {
        self.shared.release();
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct Inner {
        next: u32,
        subs: HashMap<u32, (String, ViewportMargin, Box<dyn FnMut(bool)>)>,
        unsubscribed: Vec<u32>,
    }

    /// Test observer; clones share the same subscription table.
    #[derive(Clone, Default)]
    pub struct MockObserver {
        inner: Rc<RefCell<Inner>>,
        unsupported: bool,
        report_on_subscribe: Option<bool>,
    }

    impl MockObserver {
        pub fn unsupported() -> Self {
            Self {
                unsupported: true,
                ..Default::default()
            }
        }

        pub fn already_visible() -> Self {
            Self {
                report_on_subscribe: Some(true),
                ..Default::default()
            }
        }

        /// Delivers a visibility event to every subscription on `target`.
        pub fn emit(&self, target: &str, visible: bool) {
            let ids = self
                .inner
                .borrow()
                .subs
                .iter()
                .filter(|(_, (t, _, _))| t == target)
                .map(|(id, _)| *id)
                .collect::<Vec<_>>();
            for id in ids {
                // the callback may unsubscribe, so don't hold the borrow while calling it
                let entry = self.inner.borrow_mut().subs.remove(&id);
                if let Some((t, m, mut cb)) = entry {
                    cb(visible);
                    let mut inner = self.inner.borrow_mut();
                    if !inner.unsubscribed.contains(&id) {
                        inner.subs.insert(id, (t, m, cb));
                    }
                }
            }
        }

        pub fn active(&self) -> usize {
            self.inner.borrow().subs.len()
        }

        pub fn unsubscribed(&self) -> usize {
            self.inner.borrow().unsubscribed.len()
        }

        pub fn margins(&self) -> Vec<ViewportMargin> {
            self.inner.borrow().subs.values().map(|(_, m, _)| *m).collect()
        }
    }

    impl VisibilityObserver for MockObserver {
        type Target = String;
        type Handle = u32;

        fn subscribe(
            &self,
            target: &String,
            margin: ViewportMargin,
            mut on_change: Box<dyn FnMut(bool)>,
        ) -> Result<u32, ObserverError> {
            if self.unsupported {
                return Err(ObserverError::Unsupported);
            }
            let id = {
                let mut inner = self.inner.borrow_mut();
                inner.next += 1;
                inner.next
            };
            if let Some(visible) = self.report_on_subscribe {
                on_change(visible);
            }
            self.inner
                .borrow_mut()
                .subs
                .insert(id, (target.clone(), margin, on_change));
            Ok(id)
        }

        fn unsubscribe(&self, handle: u32) {
            let mut inner = self.inner.borrow_mut();
            inner.subs.remove(&handle);
            inner.unsubscribed.push(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockObserver;
    use super::*;

    fn counter() -> (Rc<Cell<u32>>, impl FnOnce() + 'static) {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        (count, move || c.set(c.get() + 1))
    }

    #[test]
    fn test_starts_not_entered() {
        let obs = MockObserver::default();
        let reveal = RevealController::new(obs.clone(), DEFAULT_REVEAL_MARGIN);
        assert_eq!(reveal.state(), RevealState::NotEntered);
        let (count, cb) = counter();
        reveal.observe(&"about".to_string(), cb);
        assert!(!reveal.has_entered());
        assert!(reveal.is_observing());
        assert_eq!(count.get(), 0);
        assert_eq!(obs.margins(), vec![ViewportMargin(-100)]);
    }

    #[test]
    fn test_invisible_events_do_not_reveal() {
        let obs = MockObserver::default();
        let reveal = RevealController::new(obs.clone(), DEFAULT_REVEAL_MARGIN);
        let (count, cb) = counter();
        reveal.observe(&"skills".to_string(), cb);
        obs.emit("skills", false);
        obs.emit("skills", false);
        assert_eq!(reveal.state(), RevealState::NotEntered);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_enters_once_and_never_reverts() {
        let obs = MockObserver::default();
        let reveal = RevealController::new(obs.clone(), DEFAULT_REVEAL_MARGIN);
        let (count, cb) = counter();
        reveal.observe(&"projects".to_string(), cb);

        obs.emit("projects", true);
        assert_eq!(reveal.state(), RevealState::Entered);
        assert_eq!(count.get(), 1);

        // scroll jitter after the reveal
        for visible in [false, true, false, true] {
            obs.emit("projects", visible);
            assert_eq!(reveal.state(), RevealState::Entered);
        }
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_observer_released_after_enter() {
        let obs = MockObserver::default();
        let reveal = RevealController::new(obs.clone(), DEFAULT_REVEAL_MARGIN);
        reveal.observe(&"contact".to_string(), || {});
        assert_eq!(obs.active(), 1);
        obs.emit("contact", true);
        assert_eq!(obs.active(), 0);
        assert_eq!(obs.unsubscribed(), 1);
        assert!(!reveal.is_observing());
    }

    #[test]
    fn test_observer_released_on_drop() {
        let obs = MockObserver::default();
        {
            let reveal = RevealController::new(obs.clone(), DEFAULT_REVEAL_MARGIN);
            reveal.observe(&"about".to_string(), || {});
            assert_eq!(obs.active(), 1);
        }
        assert_eq!(obs.active(), 0);
        assert_eq!(obs.unsubscribed(), 1);
    }

    #[test]
    fn test_fails_open_when_unsupported() {
        let obs = MockObserver::unsupported();
        let reveal = RevealController::new(obs.clone(), DEFAULT_REVEAL_MARGIN);
        let (count, cb) = counter();
        reveal.observe(&"about".to_string(), cb);
        assert_eq!(reveal.state(), RevealState::Entered);
        assert_eq!(count.get(), 1);
        assert!(!reveal.is_observing());
    }

    #[test]
    fn test_visible_on_subscribe_reveals_and_releases() {
        let obs = MockObserver::already_visible();
        let reveal = RevealController::new(obs.clone(), DEFAULT_REVEAL_MARGIN);
        let (count, cb) = counter();
        reveal.observe(&"home".to_string(), cb);
        assert!(reveal.has_entered());
        assert_eq!(count.get(), 1);
        assert_eq!(obs.active(), 0);
    }

    #[test]
    fn test_second_observe_is_ignored() {
        let obs = MockObserver::default();
        let reveal = RevealController::new(obs.clone(), DEFAULT_REVEAL_MARGIN);
        let (first, cb1) = counter();
        let (second, cb2) = counter();
        reveal.observe(&"skills".to_string(), cb1);
        reveal.observe(&"skills".to_string(), cb2);
        assert_eq!(obs.active(), 1);
        obs.emit("skills", true);
        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 0);
    }

    #[test]
    fn test_observe_after_release_is_ignored() {
        let obs = MockObserver::default();
        let reveal = RevealController::new(obs.clone(), DEFAULT_REVEAL_MARGIN);
        let (first, cb1) = counter();
        let (second, cb2) = counter();
        reveal.observe(&"projects".to_string(), cb1);
        reveal.release();
        assert!(!reveal.is_observing());
        reveal.observe(&"projects".to_string(), cb2);
        assert_eq!(obs.active(), 0);
        obs.emit("projects", true);
        assert!(!reveal.has_entered());
        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 0);
    }

    #[test]
    fn test_sections_reveal_independently() {
        let obs = MockObserver::default();
        let about = RevealController::new(obs.clone(), DEFAULT_REVEAL_MARGIN);
        let skills = RevealController::new(obs.clone(), DEFAULT_REVEAL_MARGIN);
        about.observe(&"about".to_string(), || {});
        skills.observe(&"skills".to_string(), || {});
        obs.emit("about", true);
        assert!(about.has_entered());
        assert!(!skills.has_entered());
    }

    #[test]
    fn test_margin_parsing() {
        assert_eq!("-100px".parse::<ViewportMargin>(), Ok(ViewportMargin(-100)));
        assert_eq!(" 40 ".parse::<ViewportMargin>(), Ok(ViewportMargin(40)));
        assert!("10em".parse::<ViewportMargin>().is_err());
        assert_eq!(ViewportMargin(-100).to_string(), "-100px");
    }
}
