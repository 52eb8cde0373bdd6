use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::{self, footer};
use crate::hooks::typewriter::use_typewriter;
use crate::Route;

#[function_component(Footer)]
pub fn site_footer() -> Html {
    let typed = use_typewriter(
        footer::ROTATING_WORDS.to_vec(),
        footer::TYPE_SPEED_MS,
        footer::PAUSE_MS,
    );

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <span class="wordmark">{ content::SITE_NAME }</span>
                <p class="footer-line">
                    <span>{ footer::PREFIX }{" "}</span>
                    <span class="typed">
                        { typed.text }
                        if !typed.is_complete {
                            <span class="caret" aria-hidden="true">{"|"}</span>
                        }
                    </span>
                </p>
                <nav class="footer-links">
                    <Link<Route> to={Route::Gathering} classes="footer-link">{"The Gathering"}</Link<Route>>
                    <Link<Route> to={Route::About} classes="footer-link">{"About"}</Link<Route>>
                    <a href={content::INSTAGRAM_URL} class="footer-link" target="_blank" rel="noopener noreferrer">
                        {"Instagram"}
                    </a>
                </nav>
                <div class="footer-legal">
                    <span>{ format!("© {}", content::SITE_NAME) }</span>
                    <Link<Route> to={Route::Privacy} classes="footer-link">{"Privacy"}</Link<Route>>
                </div>
            </div>
        </footer>
    }
}
