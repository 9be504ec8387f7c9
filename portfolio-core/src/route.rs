use serde::{Deserialize, Serialize};

/// The three logical routes of the site.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    Landing,
    Portfolio,
    Project { slug: String },
}

impl Route {
    /// Parses a location pathname. Trailing slashes are tolerated; anything
    /// outside the three known shapes is `None`.
    pub fn parse(path: &str) -> Option<Route> {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Some(Route::Landing),
            "/portfolio" => Some(Route::Portfolio),
            _ => {
                let slug = trimmed.strip_prefix("/projects/")?;
                if slug.is_empty() || slug.contains('/') {
                    return None;
                }
                Some(Route::Project {
                    slug: slug.to_string(),
                })
            }
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Landing => "/".to_string(),
            Route::Portfolio => "/portfolio".to_string(),
            Route::Project { slug } => format!("/projects/{slug}"),
        }
    }
}

/// Animation grouping key. The landing screen and the shared-layout screens
/// are structurally unrelated trees; keying them apart keeps their enter/exit
/// animations from cross-fading into each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransitionGroup {
    Landing,
    Chrome,
}

impl TransitionGroup {
    pub fn of_path(path: &str) -> TransitionGroup {
        if path.trim_end_matches('/').is_empty() {
            TransitionGroup::Landing
        } else {
            TransitionGroup::Chrome
        }
    }

    pub fn shell_class(&self) -> &'static str {
        match self {
            TransitionGroup::Landing => "route-shell route-shell-landing",
            TransitionGroup::Chrome => "route-shell route-shell-chrome",
        }
    }
}
