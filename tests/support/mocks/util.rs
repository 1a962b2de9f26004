// tests/support/mocks/util.rs
use recipe_core::application::ports::util::SlugGenerator;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Real slugification with scripted suffixes; falls back to `zzzz` once the
/// script runs out.
#[derive(Debug, Default)]
pub struct QueuedSlugGenerator {
    suffixes: Mutex<VecDeque<String>>,
}

impl QueuedSlugGenerator {
    pub fn new(suffixes: &[&str]) -> Self {
        Self {
            suffixes: Mutex::new(suffixes.iter().map(|s| s.to_string()).collect()),
        }
    }
}

impl SlugGenerator for QueuedSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slug::slugify(input)
    }

    fn random_suffix(&self, len: usize) -> String {
        self.suffixes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| "z".repeat(len))
    }
}
