//! Retry policy with exponential backoff and jitter.

use std::time::Duration;

use rand::Rng;

/// Configuration for retry behavior.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retry attempts.
    pub max_attempts: u32,
    /// Initial delay before the first retry.
    pub initial_delay: Duration,
    /// Maximum delay between retries.
    pub max_delay: Duration,
    /// Backoff strategy to use.
    pub backoff: BackoffStrategy,
    /// Add random jitter on top of the computed delay.
    pub jitter: bool,
    /// Cap on delays taken from Retry-After headers.
    pub max_retry_after: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(30),
            backoff: BackoffStrategy::Exponential { factor: 2.0 },
            jitter: true,
            max_retry_after: Duration::from_secs(60),
        }
    }
}

impl RetryConfig {
    /// Set the maximum number of attempts.
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Set the initial delay.
    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    /// Set the maximum delay.
    pub fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    /// Set the backoff strategy.
    pub fn with_backoff(mut self, backoff: BackoffStrategy) -> Self {
        self.backoff = backoff;
        self
    }

    /// Disable jitter for deterministic delays.
    pub fn without_jitter(mut self) -> Self {
        self.jitter = false;
        self
    }
}

/// Backoff strategy for determining retry delays.
#[derive(Debug, Clone, Copy)]
pub enum BackoffStrategy {
    /// Constant delay between retries.
    Fixed,
    /// Exponential increase in delay (delay * factor^attempt).
    Exponential { factor: f64 },
}

impl BackoffStrategy {
    /// Calculate the base delay for a given attempt number (0-indexed),
    /// before jitter.
    pub fn base_delay(&self, attempt: u32, initial_delay: Duration) -> Duration {
        match self {
            BackoffStrategy::Fixed => initial_delay,
            BackoffStrategy::Exponential { factor } => {
                let multiplier = factor.powi(attempt as i32);
                Duration::from_secs_f64(initial_delay.as_secs_f64() * multiplier)
            }
        }
    }
}

/// Retry policy that determines when and how long to wait.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    config: RetryConfig,
    attempt: u32,
}

impl RetryPolicy {
    /// Create a new retry policy from config.
    pub fn new(config: RetryConfig) -> Self {
        Self { config, attempt: 0 }
    }

    /// Returns the current attempt number (0-indexed).
    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    /// Returns true if another retry is allowed.
    pub fn should_retry(&self) -> bool {
        self.attempt < self.config.max_attempts
    }

    /// Record an attempt and return the delay before the next retry.
    /// Returns None if all retries are exhausted.
    ///
    /// A server-provided Retry-After wins over the computed backoff, capped
    /// at `max_retry_after`.
    pub fn next_delay(&mut self, retry_after: Option<Duration>) -> Option<Duration> {
        if !self.should_retry() {
            return None;
        }

        let delay = match retry_after {
            Some(after) => std::cmp::min(after, self.config.max_retry_after),
            None => {
                let base = self
                    .config
                    .backoff
                    .base_delay(self.attempt, self.config.initial_delay);
                let delay = if self.config.jitter {
                    // Random jitter in [0, base) on top of the base delay
                    let jitter = rand::rng().random::<f64>() * base.as_secs_f64();
                    base + Duration::from_secs_f64(jitter)
                } else {
                    base
                };
                std::cmp::min(delay, self.config.max_delay)
            }
        };

        self.attempt += 1;
        Some(delay)
    }
}
