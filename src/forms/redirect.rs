//! src/forms/redirect.rs
use std::time::Duration;

/// Sink for navigation requests, implemented by the hosting view layer.
pub trait Navigator {
    fn push(&self, location: &str);
}

/// A navigation scheduled by a successful submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Redirect {
    location: String,
    delay: Duration,
}

impl Redirect {
    pub fn to(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            delay: Duration::ZERO,
        }
    }

    pub fn after(location: impl Into<String>, delay: Duration) -> Self {
        Self {
            location: location.into(),
            delay,
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Wait out the scheduled delay, then hand the location to the navigator.
    pub async fn follow(self, navigator: &impl Navigator) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        navigator.push(&self.location);
    }
}
