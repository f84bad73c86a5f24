//! Wrapper that keeps a section hidden until it first scrolls into view.

use yew::prelude::*;

use super::dom::observe_once;

const VISIBLE_THRESHOLD: f64 = 0.1;

#[derive(Properties, PartialEq)]
pub struct SectionRevealProps {
    #[prop_or_default]
    pub id: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

#[function_component(SectionReveal)]
pub fn section_reveal(props: &SectionRevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state(|| false);
    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                observe_once(
                    &node,
                    VISIBLE_THRESHOLD,
                    Callback::from(move |_| visible.set(true)),
                )
            },
            (),
        );
    }
    let state_class = if *visible {
        "section-visible"
    } else {
        "section-hidden"
    };
    html! {
        <section
            id={props.id.clone()}
            ref={node}
            class={classes!("bx-section", state_class, props.class.clone())}
        >
            { for props.children.iter() }
        </section>
    }
}
