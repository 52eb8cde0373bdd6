use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::scroll_reveal::ScrollReveal;
use crate::content::{event, gathering, home};
use crate::Route;

#[derive(Properties, PartialEq)]
struct DetailProps {
    label: AttrValue,
    value: AttrValue,
}

#[function_component(Detail)]
fn detail(props: &DetailProps) -> Html {
    html! {
        <div class="detail">
            <dt>{ &props.label }</dt>
            <dd>{ &props.value }</dd>
        </div>
    }
}

#[function_component(GatheringPage)]
pub fn gathering_page() -> Html {
    html! {
        <main id="main-content" class="page">
            <section class="hero hero-compact">
                <div class="container">
                    <h1>{ gathering::HEADLINE }</h1>
                    <p class="eyebrow">{ format!("{}: {}", event::NAME, event::SUBTITLE) }</p>
                </div>
            </section>

            <section class="section">
                <div class="container narrow">
                    <ScrollReveal>
                        <h2>{"What this is"}</h2>
                        <p>{ gathering::WHAT_IT_IS }</p>
                    </ScrollReveal>
                </div>
            </section>

            <section class="section">
                <div class="container narrow">
                    <h2>{"What happens"}</h2>
                    { for gathering::AGENDA.iter().enumerate().map(|(i, (title, text))| html! {
                        <ScrollReveal delay_ms={(i as u32) * 100} class={classes!("agenda-item")}>
                            <h3>{ *title }</h3>
                            <p>{ *text }</p>
                        </ScrollReveal>
                    }) }
                </div>
            </section>

            <section class="section">
                <div class="container narrow">
                    <ScrollReveal>
                        <h2>{"Who this is for"}</h2>
                        <p>{ gathering::WHO_FOR }</p>
                        <p class="text-secondary">{ gathering::NOT_FOR }</p>
                    </ScrollReveal>
                </div>
            </section>

            <section class="section logistics">
                <div class="container narrow">
                    <h2>{"Details"}</h2>
                    <dl class="details">
                        <Detail label="Date" value={event::DATE} />
                        <Detail label="Time" value={event::TIME} />
                        <Detail label="Location" value={event::LOCATION} />
                        <Detail label="Venue" value={event::VENUE} />
                        <Detail label="Parking" value={gathering::PARKING} />
                        <Detail label="Duration" value={gathering::DURATION} />
                        <Detail label="Price" value={event::PRICE} />
                    </dl>
                    <p class="text-secondary">{ gathering::NOTE }</p>
                    <Link<Route> to={Route::Register} classes="button button-large">
                        { home::CTA_PRIMARY }
                    </Link<Route>>
                </div>
            </section>
        </main>
    }
}
