//! Site header that picks up a `scrolled` treatment past 100px of scroll.

use yew::prelude::*;

use super::dom::listen_to_scroll;

const SCROLLED_OFFSET_PX: f64 = 100.0;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let scrolled = use_state(|| false);
    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| listen_to_scroll(move |scroll_y| scrolled.set(scroll_y > SCROLLED_OFFSET_PX)),
            (),
        );
    }
    html! {
        <header class={classes!("site-header", (*scrolled).then_some("scrolled"))}>
            <style>
            {r#".site-header {
                position: fixed;
                top: 0;
                left: 0;
                right: 0;
                display: flex;
                align-items: center;
                justify-content: space-between;
                padding: 1.25rem 2rem;
                z-index: 900;
                transition: background 0.3s ease, padding 0.3s ease, box-shadow 0.3s ease;
            }
            .site-header.scrolled {
                background: rgba(16, 20, 24, 0.95);
                padding: 0.75rem 2rem;
                box-shadow: 0 2px 16px rgba(0, 0, 0, 0.4);
            }
            .site-header .brand {
                font-size: 1.3rem;
                font-weight: 700;
                color: #fff;
            }
            .site-header nav a {
                color: rgba(255, 255, 255, 0.8);
                margin-left: 1.5rem;
                font-size: 0.95rem;
            }
            .site-header nav a:hover {
                color: #1E90FF;
            }"#}
            </style>
            <span class="brand">{"Victorine Maikem"}</span>
            <nav>
                <a href="#home">{"Home"}</a>
                <a href="#about">{"About"}</a>
                <a href="#services">{"Services"}</a>
                <a href="#portfolio">{"Portfolio"}</a>
                <a href="#contact">{"Contact"}</a>
            </nav>
        </header>
    }
}
