//! Hero typing animation: cycles a fixed phrase list character by character.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const TYPE_DELAY_MS: u32 = 100;
const DELETE_DELAY_MS: u32 = 50;
const HOLD_DELAY_MS: u32 = 2_000;
const NEXT_PHRASE_DELAY_MS: u32 = 500;
const START_DELAY_MS: u32 = 1_500;

/// One rendered step of the animation and the pause before the next one.
pub struct Step {
    pub text: String,
    pub delay_ms: u32,
}

/// The phrase-cycling state machine, kept free of any DOM or timer concerns
/// so the tick logic can be exercised directly.
pub struct TypingLoop {
    phrases: Vec<String>,
    phrase_index: usize,
    visible_chars: usize,
    deleting: bool,
}

impl TypingLoop {
    /// Returns `None` for an empty phrase list: the animation never starts.
    pub fn new(phrases: Vec<String>) -> Option<Self> {
        if phrases.is_empty() {
            return None;
        }
        Some(Self {
            phrases,
            phrase_index: 0,
            visible_chars: 0,
            deleting: false,
        })
    }

    /// Advances by one character and reports the text to show along with the
    /// delay until the next tick. Reaching the full phrase switches to
    /// deleting after a hold; reaching zero advances to the next phrase.
    pub fn tick(&mut self) -> Step {
        let current = self.phrase_index;
        let phrase_len = self.phrases[current].chars().count();

        let mut delay_ms = if self.deleting {
            self.visible_chars = self.visible_chars.saturating_sub(1);
            DELETE_DELAY_MS
        } else {
            self.visible_chars = (self.visible_chars + 1).min(phrase_len);
            TYPE_DELAY_MS
        };

        if !self.deleting && self.visible_chars == phrase_len {
            self.deleting = true;
            delay_ms = HOLD_DELAY_MS;
        } else if self.deleting && self.visible_chars == 0 {
            self.deleting = false;
            self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
            delay_ms = NEXT_PHRASE_DELAY_MS;
        }

        Step {
            text: self.phrases[current].chars().take(self.visible_chars).collect(),
            delay_ms,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct TypingTextProps {
    pub phrases: Vec<String>,
}

#[function_component(TypingText)]
pub fn typing_text(props: &TypingTextProps) -> Html {
    let shown = use_state(String::new);
    {
        let shown = shown.clone();
        let phrases = props.phrases.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(mut animation) = TypingLoop::new(phrases) {
                    // Runs for the lifetime of the page; there is no stop
                    // condition, matching the hero heading's behavior.
                    spawn_local(async move {
                        TimeoutFuture::new(START_DELAY_MS).await;
                        loop {
                            let step = animation.tick();
                            shown.set(step.text);
                            TimeoutFuture::new(step.delay_ms).await;
                        }
                    });
                }
                || ()
            },
            (),
        );
    }

    if props.phrases.is_empty() {
        return html! {};
    }
    html! {
        <>
            <style>
            {r#".typing-cursor {
                display: inline-block;
                width: 3px;
                height: 1em;
                margin-left: 4px;
                background: #1E90FF;
                vertical-align: text-bottom;
                animation: cursor-blink 0.8s step-end infinite;
            }
            @keyframes cursor-blink {
                50% { opacity: 0; }
            }"#}
            </style>
            { &*shown }
            <span class="typing-cursor"></span>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(animation: &mut TypingLoop, ticks: usize) -> Vec<(String, u32)> {
        (0..ticks)
            .map(|_| {
                let step = animation.tick();
                (step.text, step.delay_ms)
            })
            .collect()
    }

    #[test]
    fn empty_phrase_list_never_starts() {
        assert!(TypingLoop::new(Vec::new()).is_none());
    }

    #[test]
    fn types_holds_deletes_and_pauses() {
        let mut animation = TypingLoop::new(vec!["hi".to_string()]).unwrap();
        let steps = texts(&mut animation, 5);
        assert_eq!(steps[0], ("h".to_string(), TYPE_DELAY_MS));
        assert_eq!(steps[1], ("hi".to_string(), HOLD_DELAY_MS));
        assert_eq!(steps[2], ("h".to_string(), DELETE_DELAY_MS));
        assert_eq!(steps[3], ("".to_string(), NEXT_PHRASE_DELAY_MS));
        // Wrapped back around to the only phrase.
        assert_eq!(steps[4], ("h".to_string(), TYPE_DELAY_MS));
    }

    #[test]
    fn visits_every_phrase_in_order() {
        let phrases = vec!["ab".to_string(), "c".to_string(), "de".to_string()];
        let mut animation = TypingLoop::new(phrases.clone()).unwrap();
        let completed: Vec<String> = texts(&mut animation, 40)
            .into_iter()
            .filter(|(_, delay)| *delay == HOLD_DELAY_MS)
            .map(|(text, _)| text)
            .collect();
        assert!(completed.len() >= 4);
        for (i, text) in completed.iter().enumerate() {
            assert_eq!(text, &phrases[i % phrases.len()]);
        }
    }

    #[test]
    fn shown_text_is_always_a_prefix_within_bounds() {
        let phrases = vec!["alpha".to_string(), "bη".to_string()];
        let mut animation = TypingLoop::new(phrases.clone()).unwrap();
        for (text, _) in texts(&mut animation, 100) {
            assert!(
                phrases.iter().any(|p| p.starts_with(&text)),
                "{text:?} is not a prefix of any phrase"
            );
            let max_len = phrases.iter().map(|p| p.chars().count()).max().unwrap();
            assert!(text.chars().count() <= max_len);
        }
    }
}
