use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use super::motion::use_reduced_motion;

const THRESHOLD: f64 = 0.1;
const ROOT_MARGIN: &str = "0px 0px -50px 0px";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealUpdate {
    Show { disconnect: bool },
    Hide,
    Keep,
}

/// What an intersection change means for the element.
pub fn reveal_update(intersecting: bool, trigger_once: bool) -> RevealUpdate {
    match (intersecting, trigger_once) {
        (true, once) => RevealUpdate::Show { disconnect: once },
        (false, false) => RevealUpdate::Hide,
        (false, true) => RevealUpdate::Keep,
    }
}

pub struct UseScrollRevealHandle {
    pub node: NodeRef,
    pub in_view: bool,
}

#[hook]
pub fn use_scroll_reveal(trigger_once: bool) -> UseScrollRevealHandle {
    let node = use_node_ref();
    let in_view = use_state(|| false);
    let reduced_motion = use_reduced_motion();

    {
        let node = node.clone();
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |(reduced_motion, trigger_once)| {
                let mut observer = None;
                let mut callback = None;

                if *reduced_motion {
                    in_view.set(true);
                } else if let Some(element) = node.cast::<Element>() {
                    let trigger_once = *trigger_once;
                    let on_change = Closure::wrap(Box::new(
                        move |entries: Array, observer: IntersectionObserver| {
                            let intersecting = entries
                                .iter()
                                .filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
                                .any(|e| e.is_intersecting());
                            match reveal_update(intersecting, trigger_once) {
                                RevealUpdate::Show { disconnect } => {
                                    in_view.set(true);
                                    if disconnect {
                                        observer.disconnect();
                                    }
                                }
                                RevealUpdate::Hide => in_view.set(false),
                                RevealUpdate::Keep => {}
                            }
                        },
                    )
                        as Box<dyn FnMut(Array, IntersectionObserver)>);

                    let init = IntersectionObserverInit::new();
                    init.set_threshold(&JsValue::from_f64(THRESHOLD));
                    init.set_root_margin(ROOT_MARGIN);
                    match IntersectionObserver::new_with_options(on_change.as_ref().unchecked_ref(), &init) {
                        Ok(obs) => {
                            obs.observe(&element);
                            observer = Some(obs);
                        }
                        Err(e) => log::warn!("IntersectionObserver unavailable: {:?}", e),
                    }
                    callback = Some(on_change);
                }

                move || {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                    drop(callback);
                }
            },
            (reduced_motion, trigger_once),
        );
    }

    UseScrollRevealHandle {
        node,
        in_view: *in_view,
    }
}
