use yew::prelude::*;

use crate::components::scroll_reveal::ScrollReveal;
use crate::content::about;

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    html! {
        <main id="main-content" class="page">
            <section class="section section-large">
                <div class="container narrow">
                    <ScrollReveal>
                        <h1>{ about::HEADLINE }</h1>
                    </ScrollReveal>
                    <h2>{"What Elysian House is"}</h2>
                    { for about::PHILOSOPHY.iter().enumerate().map(|(i, p)| html! {
                        <ScrollReveal delay_ms={(i as u32) * 100}>
                            <p>{ *p }</p>
                        </ScrollReveal>
                    }) }
                </div>
            </section>
            <section class="section">
                <div class="container narrow">
                    <ScrollReveal>
                        <h2>{"The Host"}</h2>
                        <p>{ about::HOST_BIO }</p>
                    </ScrollReveal>
                </div>
            </section>
            <section class="section">
                <div class="container narrow">
                    <ScrollReveal>
                        <h2>{"What's coming"}</h2>
                        <p>{ about::VISION }</p>
                    </ScrollReveal>
                </div>
            </section>
        </main>
    }
}
