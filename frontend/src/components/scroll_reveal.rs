use yew::prelude::*;

use crate::hooks::reveal::use_scroll_reveal;

#[derive(Properties, PartialEq)]
pub struct ScrollRevealProps {
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    /// Transition delay, in milliseconds.
    #[prop_or_default]
    pub delay_ms: u32,
}

/// Fades its children in the first time they scroll into view.
#[function_component(ScrollReveal)]
pub fn scroll_reveal(props: &ScrollRevealProps) -> Html {
    let reveal = use_scroll_reveal(true);
    let style = (props.delay_ms > 0).then(|| format!("transition-delay: {}ms", props.delay_ms));

    html! {
        <div
            ref={reveal.node}
            class={classes!("reveal", reveal.in_view.then(|| "revealed"), props.class.clone())}
            style={style}
        >
            { for props.children.iter() }
        </div>
    }
}
