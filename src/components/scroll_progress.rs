//! Fixed top-of-page bar tracking how far down the document the user is.

use yew::prelude::*;

use super::dom::listen_to_scroll;

#[function_component(ScrollProgress)]
pub fn scroll_progress() -> Html {
    let percent = use_state(|| 0.0_f64);
    {
        let percent = percent.clone();
        use_effect_with_deps(
            move |_| {
                listen_to_scroll(move |scroll_y| {
                    let Some(window) = web_sys::window() else {
                        return;
                    };
                    let doc_height = window
                        .document()
                        .and_then(|doc| doc.document_element())
                        .map(|root| f64::from(root.scroll_height()))
                        .unwrap_or(0.0);
                    let viewport = window
                        .inner_height()
                        .ok()
                        .and_then(|height| height.as_f64())
                        .unwrap_or(0.0);
                    let scrollable = doc_height - viewport;
                    if scrollable > 0.0 {
                        percent.set((scroll_y / scrollable * 100.0).clamp(0.0, 100.0));
                    }
                })
            },
            (),
        );
    }
    html! {
        <>
            <style>
            {r#".scroll-progress {
                position: fixed;
                top: 0;
                left: 0;
                height: 3px;
                background: linear-gradient(90deg, #1E90FF, #7EB2FF);
                z-index: 1000;
                transition: width 0.1s linear;
            }"#}
            </style>
            <div class="scroll-progress" style={format!("width: {:.2}%;", *percent)}></div>
        </>
    }
}
