//! Animated stat counter that counts up once it scrolls into view.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use super::dom::observe_once;

const DURATION_MS: f64 = 2_000.0;
const FRAME_MS: u32 = 16;
const VISIBLE_THRESHOLD: f64 = 0.5;

#[derive(Properties, PartialEq)]
pub struct CounterProps {
    pub target: u32,
    #[prop_or_default]
    pub suffix: AttrValue,
}

#[function_component(Counter)]
pub fn counter(props: &CounterProps) -> Html {
    let node = use_node_ref();
    let visible = use_state(|| false);
    let shown = use_state(|| 0_u32);

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

    {
        let shown = shown.clone();
        let target = props.target;
        use_effect_with_deps(
            move |visible: &bool| {
                let handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
                if *visible {
                    let step = f64::from(target) / (DURATION_MS / f64::from(FRAME_MS));
                    let current = Cell::new(0.0_f64);
                    let ticker = handle.clone();
                    *handle.borrow_mut() = Some(Interval::new(FRAME_MS, move || {
                        let next = current.get() + step;
                        current.set(next);
                        if next >= f64::from(target) {
                            shown.set(target);
                            // Dropping the handle cancels the interval.
                            ticker.borrow_mut().take();
                        } else {
                            shown.set(next as u32);
                        }
                    }));
                }
                move || {
                    handle.borrow_mut().take();
                }
            },
            *visible,
        );
    }

    html! {
        <span class="counter-value" ref={node}>
            { format!("{}{}", *shown, props.suffix) }
        </span>
    }
}
