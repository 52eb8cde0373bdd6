use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{MediaQueryList, MediaQueryListEvent};
use yew::prelude::*;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

fn reduced_motion_query() -> Option<MediaQueryList> {
    web_sys::window()?.match_media(REDUCED_MOTION_QUERY).ok().flatten()
}

/// Whether the visitor asked the OS/browser for reduced motion. Follows changes live.
#[hook]
pub fn use_reduced_motion() -> bool {
    let prefers = use_state(|| reduced_motion_query().map_or(false, |q| q.matches()));

    {
        let prefers = prefers.clone();
        use_effect_with_deps(
            move |_| {
                let query = reduced_motion_query();
                let listener = Closure::wrap(Box::new(move |e: MediaQueryListEvent| {
                    prefers.set(e.matches());
                }) as Box<dyn FnMut(MediaQueryListEvent)>);

                if let Some(query) = &query {
                    let _ = query.add_event_listener_with_callback("change", listener.as_ref().unchecked_ref());
                }

                move || {
                    if let Some(query) = &query {
                        let _ = query.remove_event_listener_with_callback("change", listener.as_ref().unchecked_ref());
                    }
                }
            },
            (),
        );
    }

    *prefers
}
