use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <main id="main-content" class="page">
            <section class="section section-large">
                <div class="container narrow centered">
                    <p class="eyebrow">{"Page not found"}</p>
                    <h1 class="display">{"This room doesn't exist yet."}</h1>
                    <p>{"Perhaps you're looking for something that's still becoming. Let's find your way back."}</p>
                    <Link<Route> to={Route::Home} classes="button button-large">{"Return home"}</Link<Route>>
                    <Link<Route> to={Route::Gathering} classes="button button-ghost">{"View the gathering"}</Link<Route>>
                </div>
            </section>
        </main>
    }
}
