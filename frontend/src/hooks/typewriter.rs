use gloo_timers::callback::Timeout;
use yew::prelude::*;

use super::motion::use_reduced_motion;

/// Types each word one character at a time, pauses, then moves to the next word.
#[derive(Debug, Clone, PartialEq)]
pub struct Typewriter {
    words: Vec<&'static str>,
    word_index: usize,
    visible_chars: usize,
}

impl Typewriter {
    pub fn new(words: Vec<&'static str>) -> Self {
        Self {
            words,
            word_index: 0,
            visible_chars: 0,
        }
    }

    pub fn current_word(&self) -> &'static str {
        self.words.get(self.word_index).copied().unwrap_or_default()
    }

    pub fn displayed(&self) -> String {
        self.current_word().chars().take(self.visible_chars).collect()
    }

    pub fn is_word_complete(&self) -> bool {
        self.visible_chars >= self.current_word().chars().count()
    }

    /// Delay before the next tick.
    pub fn next_delay(&self, speed_ms: u32, pause_ms: u32) -> u32 {
        if self.is_word_complete() {
            pause_ms
        } else {
            speed_ms
        }
    }

    pub fn tick(&self) -> Self {
        let mut next = self.clone();
        if next.is_word_complete() {
            next.word_index = (next.word_index + 1) % next.words.len().max(1);
            next.visible_chars = 0;
        } else {
            next.visible_chars += 1;
        }
        next
    }
}

pub struct UseTypewriterHandle {
    pub text: String,
    pub is_complete: bool,
}

#[hook]
pub fn use_typewriter(words: Vec<&'static str>, speed_ms: u32, pause_ms: u32) -> UseTypewriterHandle {
    let reduced_motion = use_reduced_motion();
    let typewriter = use_state(|| Typewriter::new(words));

    {
        let deps = ((*typewriter).clone(), reduced_motion);
        let typewriter = typewriter.clone();
        use_effect_with_deps(
            move |(current, reduced_motion)| {
                let timeout = (!*reduced_motion).then(|| {
                    let next = current.tick();
                    Timeout::new(current.next_delay(speed_ms, pause_ms), move || {
                        typewriter.set(next);
                    })
                });
                move || drop(timeout)
            },
            deps,
        );
    }

    if reduced_motion {
        UseTypewriterHandle {
            text: typewriter.current_word().to_string(),
            is_complete: true,
        }
    } else {
        UseTypewriterHandle {
            text: typewriter.displayed(),
            is_complete: typewriter.is_word_complete(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_then_pauses_then_rotates() {
        let mut t = Typewriter::new(vec!["hi", "yo"]);
        assert_eq!(t.displayed(), "");
        assert_eq!(t.next_delay(80, 1_500), 80);

        t = t.tick();
        assert_eq!(t.displayed(), "h");
        t = t.tick();
        assert_eq!(t.displayed(), "hi");
        assert!(t.is_word_complete());
        assert_eq!(t.next_delay(80, 1_500), 1_500);

        t = t.tick();
        assert_eq!(t.current_word(), "yo");
        assert_eq!(t.displayed(), "");

        t = t.tick().tick().tick();
        assert_eq!(t.current_word(), "hi");
    }

    #[test]
    fn counts_characters_not_bytes() {
        let t = Typewriter::new(vec!["bloom…"]).tick().tick().tick().tick().tick().tick();
        assert_eq!(t.displayed(), "bloom…");
        assert!(t.is_word_complete());
    }

    #[test]
    fn empty_word_list_does_not_panic() {
        let t = Typewriter::new(vec![]);
        assert_eq!(t.displayed(), "");
        assert_eq!(t.tick().current_word(), "");
    }
}
