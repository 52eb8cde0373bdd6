use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod theme;
mod scroll_lock {
    pub mod hold;
    pub mod hook;
    pub mod machine;
}
mod hooks {
    pub mod motion;
    pub mod reveal;
    pub mod typewriter;
}
mod register {
    pub mod confirmation;
    pub mod form;
    pub mod registration_form;
    pub mod submit;
}
mod components {
    pub mod fields;
    pub mod footer;
    pub mod scroll_reveal;
}
mod pages {
    pub mod about;
    pub mod gathering;
    pub mod home;
    pub mod not_found;
    pub mod privacy;
    pub mod register;
}

use components::footer::Footer;
use pages::{
    about::AboutPage, gathering::GatheringPage, home::HomePage, not_found::NotFound,
    privacy::PrivacyPage, register::RegisterPage,
};
use theme::{use_theme, Theme, ThemeProvider};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/gathering")]
    Gathering,
    #[at("/register")]
    Register,
    #[at("/privacy")]
    Privacy,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <HomePage /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <AboutPage /> }
        }
        Route::Gathering => {
            info!("Rendering Gathering page");
            html! { <GatheringPage /> }
        }
        Route::Register => {
            info!("Rendering Register page");
            html! { <RegisterPage /> }
        }
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPage /> }
        }
        Route::NotFound => {
            info!("Rendering 404 page");
            html! { <NotFound /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);
    let theme = use_theme();

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let scroll_callback = {
                    let window = window.clone();
                    Closure::wrap(Box::new(move || {
                        let scroll_y = window
                            .as_ref()
                            .and_then(|w| w.scroll_y().ok())
                            .unwrap_or(0.0);
                        is_scrolled.set(scroll_y > 24.0);
                    }) as Box<dyn FnMut()>)
                };

                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }

                move || {
                    if let Some(window) = &window {
                        let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let toggle_theme = {
        let toggle = theme.toggle.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };

    let (theme_icon, theme_label) = match theme.theme {
        Theme::Light => ("☾", "Switch to dark theme"),
        Theme::Dark => ("☀", "Switch to light theme"),
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    { content::SITE_NAME }
                </Link<Route>>

                <button
                    class="burger-menu"
                    aria-label="Toggle menu"
                    aria-expanded={menu_open.to_string()}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={classes!("nav-right", (*menu_open).then(|| "mobile-menu-open"))}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Gathering} classes="nav-link">
                            {"The Gathering"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::About} classes="nav-link">
                            {"About"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Register} classes="nav-cta">
                            {"Request Invitation"}
                        </Link<Route>>
                    </div>
                    <button class="theme-toggle" aria-label={theme_label} onclick={toggle_theme}>
                        { theme_icon }
                    </button>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <ThemeProvider>
            <BrowserRouter>
                <a class="skip-link" href="#main-content">{"Skip to content"}</a>
                <Nav />
                <Switch<Route> render={switch} />
                <Footer />
            </BrowserRouter>
        </ThemeProvider>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    // Only fails if a logger is already installed.
    let _ = console_log::init_with_level(Level::Info);

    info!("Starting Elysian House");
    yew::Renderer::<App>::new().render();
}
