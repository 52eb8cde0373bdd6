use std::rc::Rc;

use yew::prelude::*;

pub const THEME_STORAGE_KEY: &str = "elysian-theme";
const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// A stored choice wins over the system preference.
    pub fn resolve(stored: Option<&str>, system_prefers_dark: bool) -> Self {
        stored.and_then(Theme::parse).unwrap_or(if system_prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        })
    }
}

fn initial_theme() -> Theme {
    let Some(window) = web_sys::window() else {
        return Theme::Light;
    };
    let stored = window
        .local_storage()
        .ok()
        .flatten()
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten());
    let prefers_dark = window
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .map_or(false, |q| q.matches());
    Theme::resolve(stored.as_deref(), prefers_dark)
}

fn apply_theme(theme: Theme) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Some(root) = window.document().and_then(|d| d.document_element()) {
        let _ = root
            .class_list()
            .toggle_with_force(DARK_CLASS, theme == Theme::Dark);
    }
    if let Ok(Some(storage)) = window.local_storage() {
        if let Err(e) = storage.set_item(THEME_STORAGE_KEY, theme.as_str()) {
            log::warn!("Failed to persist theme: {:?}", e);
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub theme: Theme,
    pub toggle: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let theme = use_state(initial_theme);

    use_effect_with_deps(
        move |theme| {
            apply_theme(*theme);
            || ()
        },
        *theme,
    );

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |_| theme.set(theme.toggled()))
    };

    let context = Rc::new(ThemeContext {
        theme: *theme,
        toggle,
    });

    html! {
        <ContextProvider<Rc<ThemeContext>> context={context}>
            { for props.children.iter() }
        </ContextProvider<Rc<ThemeContext>>>
    }
}

/// Current theme; outside a `ThemeProvider` this is light and toggling does nothing.
#[hook]
pub fn use_theme() -> ThemeContext {
    use_context::<Rc<ThemeContext>>()
        .map(|ctx| (*ctx).clone())
        .unwrap_or_else(|| ThemeContext {
            theme: Theme::Light,
            toggle: Callback::noop(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_choice_beats_system_preference() {
        assert_eq!(Theme::resolve(Some("light"), true), Theme::Light);
        assert_eq!(Theme::resolve(Some("dark"), false), Theme::Dark);
    }

    #[test]
    fn unknown_or_missing_value_follows_system() {
        assert_eq!(Theme::resolve(None, true), Theme::Dark);
        assert_eq!(Theme::resolve(Some("sepia"), false), Theme::Light);
    }

    #[test]
    fn toggling_twice_is_identity() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert_eq!(Theme::parse(Theme::Dark.as_str()), Some(Theme::Dark));
    }
}
