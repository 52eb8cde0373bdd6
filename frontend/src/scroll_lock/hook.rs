use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use super::hold::DocumentScrollHold;
use super::machine::{
    target_scroll_top, Effect, ScrollEvent, ScrollLock, SectionGeometry, UNLOCK_SETTLE_MS,
};
use crate::hooks::motion::use_reduced_motion;

pub struct UseScrollLockHandle {
    pub is_locked: bool,
    /// Releases the lock and scrolls to the target section.
    pub scroll_to_next: Callback<()>,
    pub prefers_reduced_motion: bool,
}

#[derive(Clone)]
struct Controller {
    machine: Rc<RefCell<ScrollLock>>,
    hold: Rc<RefCell<Option<DocumentScrollHold>>>,
    settle: Rc<RefCell<Option<Timeout>>>,
    locked: UseStateSetter<bool>,
    last_locked: Rc<Cell<bool>>,
    target_id: Rc<str>,
}

impl Controller {
    fn dispatch(&self, event: ScrollEvent) {
        let effects = self.machine.borrow_mut().transition(event);
        self.apply(effects);
    }

    fn set_enabled(&self, enabled: bool) {
        let effects = self.machine.borrow_mut().set_enabled(enabled);
        self.apply(effects);
    }

    fn apply(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::HoldDocument => {
                    *self.hold.borrow_mut() = DocumentScrollHold::acquire();
                }
                Effect::ReleaseDocument => {
                    self.hold.borrow_mut().take();
                }
                Effect::ScrollToTarget { smooth } => scroll_to_target(&self.target_id, smooth),
                Effect::ScheduleUnlockSettle => {
                    let controller = self.clone();
                    let timeout = Timeout::new(UNLOCK_SETTLE_MS, move || {
                        controller.dispatch(ScrollEvent::UnlockSettled);
                    });
                    *self.settle.borrow_mut() = Some(timeout);
                }
            }
        }
        let now = self.machine.borrow().is_locked();
        if self.last_locked.replace(now) != now {
            self.locked.set(now);
        }
    }

    fn teardown(&self) {
        self.settle.borrow_mut().take();
        self.dispatch(ScrollEvent::Teardown);
        // Whatever the state, nothing may keep the document held past unmount.
        self.hold.borrow_mut().take();
    }
}

fn sample(section: &NodeRef) -> Option<SectionGeometry> {
    let window = web_sys::window()?;
    let rect = section.cast::<Element>()?.get_bounding_client_rect();
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    Some(SectionGeometry {
        top: rect.top(),
        bottom: rect.bottom(),
        viewport_height,
    })
}

// A missing target makes this a no-op; the lock is already released by then.
fn scroll_to_target(target_id: &str, smooth: bool) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(target) = window.document().and_then(|d| d.get_element_by_id(target_id)) else {
        log::warn!("Scroll target #{} not found", target_id);
        return;
    };
    let top = target_scroll_top(
        target.get_bounding_client_rect().top(),
        window.scroll_y().unwrap_or(0.0),
    );
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(if smooth {
        ScrollBehavior::Smooth
    } else {
        ScrollBehavior::Instant
    });
    window.scroll_to_with_scroll_to_options(&options);
}

/// Turns `section` into a stop on the way down the page.
///
/// The section locks document scrolling the first time it arrives at the bottom
/// of the viewport; `scroll_to_next` releases it and smooth-scrolls to the
/// element with id `target_id`.
#[hook]
pub fn use_scroll_lock(section: NodeRef, target_id: &'static str, enabled: bool) -> UseScrollLockHandle {
    let prefers_reduced_motion = use_reduced_motion();
    let active = enabled && !prefers_reduced_motion;
    let is_locked = use_state(|| false);

    let machine = use_mut_ref(|| ScrollLock::new(active));
    let hold = use_mut_ref(|| None::<DocumentScrollHold>);
    let settle = use_mut_ref(|| None::<Timeout>);
    let last_locked = use_memo(|_| Cell::new(false), ());
    let controller = Controller {
        machine,
        hold,
        settle,
        locked: is_locked.setter(),
        last_locked,
        target_id: Rc::from(target_id),
    };

    {
        let controller = controller.clone();
        use_effect_with_deps(
            move |active| {
                controller.set_enabled(*active);
                || ()
            },
            active,
        );
    }

    // Geometry checks on scroll (at most once per frame) and on resize.
    {
        let controller = controller.clone();
        use_effect_with_deps(
            move |(active, section)| {
                let window = web_sys::window();
                let mut cleanup: Option<Box<dyn FnOnce()>> = None;

                if let (true, Some(window)) = (*active, window) {
                    let check = {
                        let controller = controller.clone();
                        let section = section.clone();
                        Rc::new(move || {
                            if let Some(geometry) = sample(&section) {
                                controller.dispatch(ScrollEvent::Sample(geometry));
                            }
                        })
                    };

                    let frame_pending = Rc::new(Cell::new(false));
                    let frame_id = Rc::new(Cell::new(0));
                    let on_frame = {
                        let check = check.clone();
                        let frame_pending = frame_pending.clone();
                        Closure::wrap(Box::new(move || {
                            frame_pending.set(false);
                            check();
                        }) as Box<dyn FnMut()>)
                    };
                    let on_scroll = {
                        let window = window.clone();
                        let frame_pending = frame_pending.clone();
                        let frame_id = frame_id.clone();
                        let frame_fn = on_frame.as_ref().unchecked_ref::<js_sys::Function>().clone();
                        Closure::wrap(Box::new(move || {
                            if frame_pending.replace(true) {
                                return;
                            }
                            if let Ok(id) = window.request_animation_frame(&frame_fn) {
                                frame_id.set(id);
                            }
                        }) as Box<dyn FnMut()>)
                    };
                    let on_resize = {
                        let check = check.clone();
                        Closure::wrap(Box::new(move || check()) as Box<dyn FnMut()>)
                    };

                    let _ = window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
                    let _ = window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
                    check();

                    cleanup = Some(Box::new(move || {
                        let _ = window.remove_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
                        let _ = window.remove_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
                        if frame_pending.get() {
                            let _ = window.cancel_animation_frame(frame_id.get());
                        }
                        drop(on_frame);
                    }));
                }

                move || {
                    if let Some(cleanup) = cleanup {
                        cleanup();
                    }
                }
            },
            (active, section),
        );
    }

    {
        let controller = controller.clone();
        use_effect_with_deps(
            move |_| move || controller.teardown(),
            (),
        );
    }

    let scroll_to_next = {
        let controller = controller.clone();
        Callback::from(move |_| controller.dispatch(ScrollEvent::Continue))
    };

    UseScrollLockHandle {
        is_locked: *is_locked,
        scroll_to_next,
        prefers_reduced_motion,
    }
}
