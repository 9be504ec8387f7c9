use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypewriterEffect {
    Schedule { delay: Duration },
}

/// Character-by-character reveal: one activation tick after `start_delay`,
/// then one character per `speed` interval until the text is exhausted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Typewriter {
    text: String,
    speed: Duration,
    start_delay: Duration,
    active: bool,
    progress: usize,
}

impl Typewriter {
    pub fn new(text: impl Into<String>, speed: Duration, start_delay: Duration) -> Self {
        Self {
            text: text.into(),
            speed,
            start_delay,
            active: false,
            progress: 0,
        }
    }

    /// Begins the reveal. Returns the activation schedule; calling again once
    /// active is a no-op.
    pub fn start(&mut self) -> Vec<TypewriterEffect> {
        if self.active {
            return Vec::new();
        }
        vec![TypewriterEffect::Schedule {
            delay: self.start_delay,
        }]
    }

    /// Advances by one step. The first tick activates the cursor; each later
    /// tick reveals one character. Scheduling stops when the text is complete.
    pub fn tick(&mut self) -> Vec<TypewriterEffect> {
        if !self.active {
            self.active = true;
        } else if self.progress < self.char_count() {
            self.progress += 1;
        }

        if self.progress < self.char_count() {
            vec![TypewriterEffect::Schedule { delay: self.speed }]
        } else {
            Vec::new()
        }
    }

    /// The revealed prefix, always on a character boundary.
    pub fn visible(&self) -> &str {
        match self.text.char_indices().nth(self.progress) {
            Some((index, _)) => &self.text[..index],
            None => &self.text,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_complete(&self) -> bool {
        self.active && self.progress >= self.char_count()
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}
