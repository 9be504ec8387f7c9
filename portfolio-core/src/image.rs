use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
enum ImageAttempt {
    Primary,
    Fallback,
    Broken,
}

/// Retry-once-then-give-up source selection for one image.
///
/// The first load failure swaps to the fallback source; a failure of the
/// fallback itself hides the image for good. No further attempts are made.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageFallback {
    primary: String,
    fallback: String,
    attempt: ImageAttempt,
}

impl ImageFallback {
    pub fn new(primary: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            fallback: fallback.into(),
            attempt: ImageAttempt::Primary,
        }
    }

    /// Current source to render, or `None` once the image is broken.
    pub fn src(&self) -> Option<&str> {
        match self.attempt {
            ImageAttempt::Primary => Some(&self.primary),
            ImageAttempt::Fallback => Some(&self.fallback),
            ImageAttempt::Broken => None,
        }
    }

    pub fn is_broken(&self) -> bool {
        self.attempt == ImageAttempt::Broken
    }

    /// Records a load failure of the current source.
    pub fn mark_failed(&mut self) {
        self.attempt = match self.attempt {
            ImageAttempt::Primary if self.primary != self.fallback => ImageAttempt::Fallback,
            _ => ImageAttempt::Broken,
        };
    }
}
