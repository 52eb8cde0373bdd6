use yew::prelude::*;

use crate::components::scroll_reveal::ScrollReveal;
use crate::content::{self, register as copy};

#[function_component(Confirmation)]
pub fn confirmation() -> Html {
    html! {
        <div class="confirmation">
            <ScrollReveal>
                <div class="confirmation-mark" aria-hidden="true">{"✓"}</div>
            </ScrollReveal>
            <ScrollReveal delay_ms={100}>
                <h2>{ copy::CONFIRMED_HEADLINE }</h2>
            </ScrollReveal>
            <ScrollReveal delay_ms={150}>
                <p class="text-large">{ copy::CONFIRMED_MESSAGE }</p>
            </ScrollReveal>
            <ScrollReveal delay_ms={200}>
                <p class="text-secondary">{ copy::CONFIRMED_NEXT }</p>
            </ScrollReveal>
            <ScrollReveal delay_ms={250}>
                <a href={content::INSTAGRAM_URL} target="_blank" rel="noopener noreferrer">
                    {"Follow on Instagram"}
                </a>
            </ScrollReveal>
        </div>
    }
}
