use yew::prelude::*;

use crate::components::scroll_reveal::ScrollReveal;
use crate::content::register as copy;
use crate::register::confirmation::Confirmation;
use crate::register::registration_form::RegistrationForm;

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let submitted = use_state(|| false);
    let on_success = {
        let submitted = submitted.clone();
        Callback::from(move |_| submitted.set(true))
    };

    html! {
        <main id="main-content" class="page">
            <section class="section section-large">
                <div class="container narrow">
                    if *submitted {
                        <Confirmation />
                    } else {
                        <div class="stack centered">
                            <ScrollReveal>
                                <h1>{ copy::HEADLINE }</h1>
                            </ScrollReveal>
                            <ScrollReveal delay_ms={100}>
                                <p class="text-secondary">{ copy::SUBTITLE }</p>
                            </ScrollReveal>
                        </div>
                        <ScrollReveal delay_ms={150}>
                            <RegistrationForm {on_success} />
                        </ScrollReveal>
                    }
                </div>
            </section>
        </main>
    }
}
