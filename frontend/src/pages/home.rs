use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::scroll_reveal::ScrollReveal;
use crate::content::{self, event, home};
use crate::scroll_lock::hook::use_scroll_lock;
use crate::Route;

const ESSENCE_ID: &str = "essence";

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section class="hero">
            <div class="hero-orb" aria-hidden="true"></div>
            <div class="container">
                <h1 class="hero-headline">{ content::TAGLINE }</h1>
            </div>
        </section>
    }
}

#[function_component(Narrative)]
fn narrative() -> Html {
    html! {
        <section id="after-hero" class="section narrative">
            <div class="container narrow">
                { for home::NARRATIVE.iter().enumerate().map(|(i, beat)| html! {
                    <ScrollReveal delay_ms={(i as u32) * 100}>
                        <p class="narrative-beat">{ *beat }</p>
                    </ScrollReveal>
                }) }
            </div>
        </section>
    }
}

/// Full-height stop: scrolling pauses here until the visitor continues.
#[function_component(EventIntro)]
fn event_intro() -> Html {
    let section = use_node_ref();
    let lock = use_scroll_lock(section.clone(), ESSENCE_ID, true);

    let on_continue = {
        let scroll_to_next = lock.scroll_to_next.clone();
        Callback::from(move |_: MouseEvent| scroll_to_next.emit(()))
    };

    html! {
        <section
            ref={section}
            class={classes!("event-intro", "full-height", lock.is_locked.then(|| "is-locked"))}
        >
            <div class="container centered">
                <ScrollReveal delay_ms={100}>
                    <h2 class="display">{ home::INTRO_HEADLINE }</h2>
                </ScrollReveal>
                <ScrollReveal delay_ms={150}>
                    <p class="eyebrow">{ event::SUBTITLE }</p>
                </ScrollReveal>
                <ScrollReveal delay_ms={200}>
                    <p class="text-large">{ home::INTRO_DESCRIPTION }</p>
                </ScrollReveal>
                <ScrollReveal delay_ms={250}>
                    <div class="cta">
                        <Link<Route> to={Route::Register} classes="button button-large">
                            { home::CTA_PRIMARY }
                        </Link<Route>>
                        <span class="event-date">{ home::INTRO_DATE }</span>
                    </div>
                </ScrollReveal>
                <button
                    class={classes!("scroll-indicator", (!lock.prefers_reduced_motion).then(|| "bob"))}
                    aria-label="Continue to the next section"
                    onclick={on_continue}
                >
                    <span aria-hidden="true">{"↓"}</span>
                </button>
            </div>
        </section>
    }
}

#[function_component(Essence)]
fn essence() -> Html {
    html! {
        <section id={ESSENCE_ID} class="section essence">
            <div class="container narrow">
                <ScrollReveal>
                    <h2>{ home::ESSENCE_HEADLINE }</h2>
                </ScrollReveal>
                <ul class="essence-list">
                    { for home::ESSENCE_ITEMS.iter().enumerate().map(|(i, item)| html! {
                        <li>
                            <ScrollReveal delay_ms={(i as u32) * 120}>
                                { *item }
                            </ScrollReveal>
                        </li>
                    }) }
                </ul>
            </div>
        </section>
    }
}

#[function_component(Closing)]
fn closing() -> Html {
    html! {
        <section class="section closing">
            <div class="container narrow centered">
                <ScrollReveal>
                    <h2>{ home::CLOSING_HEADLINE }</h2>
                </ScrollReveal>
                <ScrollReveal delay_ms={100}>
                    <p class="text-large">{ home::CLOSING_TEXT }</p>
                </ScrollReveal>
                <ScrollReveal delay_ms={150}>
                    <Link<Route> to={Route::Gathering} classes="button button-ghost">
                        { home::CTA_SECONDARY }
                    </Link<Route>>
                </ScrollReveal>
            </div>
        </section>
    }
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <main id="main-content" class="page">
            <Hero />
            <Narrative />
            <EventIntro />
            <Essence />
            <Closing />
        </main>
    }
}
