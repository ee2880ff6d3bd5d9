use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::{REVEAL_DURATION_MS, REVEAL_EASING, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};

/// Side the block slides in from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Up,
    Left,
    Right,
}

impl Direction {
    fn class(self) -> &'static str {
        match self {
            Direction::Up => "reveal-from-up",
            Direction::Left => "reveal-from-left",
            Direction::Right => "reveal-from-right",
        }
    }
}

/// One-way hidden -> visible latch for a revealed block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealState {
    visible: bool,
}

impl RevealState {
    /// A block that needs no animation.
    pub fn shown() -> Self {
        let mut state = Self::default();
        state.observe(true);
        state
    }

    pub fn is_visible(self) -> bool {
        self.visible
    }

    /// Feeds one intersection observation. Returns `true` only for the
    /// observation that makes the block visible.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.visible || !intersecting {
            return false;
        }
        self.visible = true;
        true
    }

    pub fn classes(self, direction: Direction) -> Classes {
        if self.visible {
            classes!("reveal", "reveal-visible")
        } else {
            classes!("reveal", "reveal-hidden", direction.class())
        }
    }
}

pub fn transition_style(delay_ms: u32) -> String {
    format!(
        "transition-duration: {}ms; transition-timing-function: {}; transition-delay: {}ms;",
        REVEAL_DURATION_MS, REVEAL_EASING, delay_ms
    )
}

pub trait Release {
    fn release(&mut self);
}

/// Owns a viewport watch until the first trigger or teardown, whichever
/// comes first. Cancelling more than once is harmless.
pub struct Subscription<W: Release> {
    watch: Option<W>,
}

impl<W: Release> Subscription<W> {
    pub fn new(watch: W) -> Self {
        Self { watch: Some(watch) }
    }

    fn empty() -> Self {
        Self { watch: None }
    }

    fn hold(&mut self, watch: W) {
        self.cancel();
        self.watch = Some(watch);
    }

    pub fn is_active(&self) -> bool {
        self.watch.is_some()
    }

    pub fn cancel(&mut self) {
        if let Some(mut watch) = self.watch.take() {
            watch.release();
        }
    }
}

impl<W: Release> Drop for Subscription<W> {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Handles one intersection observation. The first intersecting one while
/// the subscription is still active cancels it and returns `true`.
pub fn fire_once<W: Release>(subscription: &RefCell<Subscription<W>>, intersecting: bool) -> bool {
    let mut subscription = subscription.borrow_mut();
    if !intersecting || !subscription.is_active() {
        return false;
    }
    subscription.cancel();
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WatchUnavailable {
    #[error("no window")]
    NoWindow,
    #[error("IntersectionObserver is not supported")]
    Unsupported,
    #[error("IntersectionObserver rejected the options")]
    Rejected,
    #[error("block is not mounted")]
    NotMounted,
}

/// Initial state of a block once its watch has been requested. Without a
/// watch the block is shown straight away.
pub fn settle<W: Release>(
    watch: Result<W, WatchUnavailable>,
) -> (RevealState, Option<Subscription<W>>) {
    match watch {
        Ok(watch) => (RevealState::default(), Some(Subscription::new(watch))),
        Err(reason) => {
            log::warn!("showing block without reveal animation: {reason}");
            (RevealState::shown(), None)
        }
    }
}

struct ObserverHandle(IntersectionObserver);

impl Release for ObserverHandle {
    fn release(&mut self) {
        self.0.disconnect();
    }
}

/// Browser watch backed by an `IntersectionObserver` on a single element.
/// The observer is disconnected through the same subscription on first
/// trigger and on teardown.
pub struct ObserverWatch {
    subscription: Rc<RefCell<Subscription<ObserverHandle>>>,
    _callback: Closure<dyn FnMut(Array)>,
}

impl ObserverWatch {
    pub fn attach(
        element: &Element,
        on_enter: impl FnOnce() + 'static,
    ) -> Result<Self, WatchUnavailable> {
        let window = web_sys::window().ok_or(WatchUnavailable::NoWindow)?;
        let supported =
            Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false);
        if !supported {
            return Err(WatchUnavailable::Unsupported);
        }

        let subscription = Rc::new(RefCell::new(Subscription::empty()));
        let weak = Rc::downgrade(&subscription);
        let mut on_enter = Some(on_enter);
        let callback = Closure::<dyn FnMut(Array)>::new(move |entries: Array| {
            let Some(subscription) = weak.upgrade() else {
                return;
            };
            let intersecting = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());
            if fire_once(&subscription, intersecting) {
                if let Some(on_enter) = on_enter.take() {
                    on_enter();
                }
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        options.set_root_margin(REVEAL_ROOT_MARGIN);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|_| WatchUnavailable::Rejected)?;
        observer.observe(element);
        subscription.borrow_mut().hold(ObserverHandle(observer));

        Ok(Self {
            subscription,
            _callback: callback,
        })
    }
}

impl Release for ObserverWatch {
    fn release(&mut self) {
        self.subscription.borrow_mut().cancel();
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub delay: u32,
    #[prop_or_default]
    pub direction: Direction,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Fades and slides its children into place the first time they come into
/// view. Without `IntersectionObserver` the children are shown right away.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let state = use_state(RevealState::default);

    {
        let node = node.clone();
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let watch = match node.cast::<Element>() {
                    Some(element) => ObserverWatch::attach(&element, {
                        let state = state.clone();
                        move || state.set(RevealState::shown())
                    }),
                    None => Err(WatchUnavailable::NotMounted),
                };
                let (initial, subscription) = settle(watch);
                if initial.is_visible() {
                    state.set(initial);
                }
                move || drop(subscription)
            },
            (),
        );
    }

    html! {
        <div
            ref={node}
            class={classes!(state.classes(props.direction), props.class.clone())}
            style={transition_style(props.delay)}
        >
            { for props.children.iter() }
        </div>
    }
}
