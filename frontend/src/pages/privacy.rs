use yew::prelude::*;

use crate::content::privacy;

#[function_component(PrivacyPage)]
pub fn privacy_page() -> Html {
    html! {
        <main id="main-content" class="page">
            <section class="section section-large">
                <div class="container narrow">
                    <h1>{"Privacy Policy"}</h1>
                    { for privacy::SECTIONS.iter().map(|(heading, body)| html! {
                        <section class="privacy-section">
                            <h2>{ *heading }</h2>
                            <p>{ *body }</p>
                        </section>
                    }) }
                    <p class="text-secondary">{ privacy::LAST_UPDATED }</p>
                </div>
            </section>
        </main>
    }
}
