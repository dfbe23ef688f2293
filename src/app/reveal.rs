use std::cell::RefCell;

use leptos::{html, prelude::*};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::motion::Motion;
use crate::reveal::{
    ObserverError, RevealController, ViewportMargin, VisibilityObserver, DEFAULT_REVEAL_MARGIN,
};

type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

pub struct BrowserSubscription {
    observer: IntersectionObserver,
    callback: EntriesCallback,
}

/// [`VisibilityObserver`] backed by the browser's `IntersectionObserver`.
#[derive(Default)]
pub struct BrowserObserver {
    // unsubscribe can run inside the callback being retired, so it is dropped with self
    retired: RefCell<Vec<EntriesCallback>>,
}

impl VisibilityObserver for BrowserObserver {
    type Target = Element;
    type Handle = BrowserSubscription;

    fn subscribe(
        &self,
        target: &Element,
        margin: ViewportMargin,
        mut on_change: Box<dyn FnMut(bool)>,
    ) -> Result<BrowserSubscription, ObserverError> {
        let callback =
            EntriesCallback::new(move |entries: js_sys::Array, _: IntersectionObserver| {
                let visible = entries
                    .iter()
                    .filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
                    .any(|e| e.is_intersecting());
                on_change(visible);
            });
        let init = IntersectionObserverInit::new();
        init.set_root_margin(&margin.to_string());
        // the constructor throws when the API is missing
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|_| ObserverError::Unsupported)?;
        observer.observe(target);
        Ok(BrowserSubscription { observer, callback })
    }

    fn unsubscribe(&self, handle: BrowserSubscription) {
        handle.observer.disconnect();
        self.retired.borrow_mut().push(handle.callback);
    }
}

/// Tracks whether the section behind `target` has entered the viewport.
///
/// The returned signal starts `false`, flips to `true` once, and never goes back. The
/// observer lives in a local stored value owned by the calling component, so it is
/// released when the section unmounts.
pub fn use_reveal(target: NodeRef<html::Section>) -> ReadSignal<bool> {
    use_reveal_with_margin(target, DEFAULT_REVEAL_MARGIN)
}

pub fn use_reveal_with_margin(
    target: NodeRef<html::Section>,
    margin: ViewportMargin,
) -> ReadSignal<bool> {
    let (entered, set_entered) = signal(false);
    let controller = StoredValue::new_local(None::<RevealController<BrowserObserver>>);

    Effect::new(move |_| {
        let Some(el) = target.get() else {
            return;
        };
        if controller.with_value(|c| c.is_some()) {
            return;
        }
        let el: Element = el.into();
        let id = el.id();
        let reveal = RevealController::new(BrowserObserver::default(), margin);
        reveal.observe(&el, move || {
            log::debug!("section {id} entered view");
            set_entered.set(true);
        });
        controller.set_value(Some(reveal));
    });

    entered
}

/// Flips to `true` right after the component mounts in the browser.
pub fn use_mounted() -> ReadSignal<bool> {
    let (mounted, set_mounted) = signal(false);
    Effect::new(move |_| set_mounted.set(true));
    mounted
}

/// Wraps `children` in an element that runs `motion` once `trigger` turns true.
#[component]
pub fn Animated(
    motion: Motion,
    #[prop(into)] trigger: Signal<bool>,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!("motion {class}") style=move || motion.style(trigger.get())>
            {children()}
        </div>
    }
}
