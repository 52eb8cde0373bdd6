use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Event, HtmlElement, Window};

const BLOCKED_EVENTS: [&str; 2] = ["wheel", "touchmove"];

/// Holds document scrolling for as long as it is alive.
///
/// Acquiring hides body overflow and swallows wheel and touch scrolling;
/// dropping the hold restores both.
pub struct DocumentScrollHold {
    window: Window,
    body: HtmlElement,
    previous_overflow: String,
    blocker: Closure<dyn FnMut(Event)>,
}

impl DocumentScrollHold {
    pub fn acquire() -> Option<Self> {
        let window = web_sys::window()?;
        let body = window.document()?.body()?;

        let style = body.style();
        let previous_overflow = style.get_property_value("overflow").unwrap_or_default();
        let _ = style.set_property("overflow", "hidden");

        let blocker = Closure::wrap(Box::new(move |e: Event| {
            e.prevent_default();
        }) as Box<dyn FnMut(Event)>);

        // Must not be passive, otherwise preventDefault is ignored.
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        for event in BLOCKED_EVENTS {
            let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
                event,
                blocker.as_ref().unchecked_ref(),
                &options,
            );
        }

        log::debug!("Document scroll held");
        Some(Self {
            window,
            body,
            previous_overflow,
            blocker,
        })
    }
}

impl Drop for DocumentScrollHold {
    fn drop(&mut self) {
        for event in BLOCKED_EVENTS {
            let _ = self
                .window
                .remove_event_listener_with_callback(event, self.blocker.as_ref().unchecked_ref());
        }
        let _ = self
            .body
            .style()
            .set_property("overflow", &self.previous_overflow);
        log::debug!("Document scroll released");
    }
}
