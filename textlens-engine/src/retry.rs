//! Bounded retry for transient failures

use log::warn;
use std::fmt::Display;
use std::thread;
use std::time::Duration;

/// How often and how patiently to retry a failing operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one
    pub max_attempts: u32,
    /// Pause between attempts
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    /// Create a policy
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts,
            delay,
        }
    }

    /// Single attempt, no retries
    pub fn none() -> Self {
        Self::new(1, Duration::ZERO)
    }

    /// Run `op` until it succeeds or the attempts are used up
    ///
    /// The error of the last attempt is returned as is. `max_attempts` of 0
    /// behaves like 1.
    pub fn run<T, E, F>(&self, mut op: F) -> Result<T, E>
    where
        F: FnMut() -> Result<T, E>,
        E: Display,
    {
        let attempts = self.max_attempts.max(1);
        let mut attempt = 1;
        loop {
            match op() {
                Ok(value) => return Ok(value),
                Err(err) if attempt >= attempts => return Err(err),
                Err(err) => {
                    warn!("attempt {attempt}/{attempts} failed: {err}; retrying");
                    if !self.delay.is_zero() {
                        thread::sleep(self.delay);
                    }
                    attempt += 1;
                }
            }
        }
    }

    /// Wrap `func` into a function with the same signature that retries
    pub fn wrap<A, T, E, F>(self, func: F) -> impl Fn(A) -> Result<T, E>
    where
        A: Clone,
        F: Fn(A) -> Result<T, E>,
        E: Display,
    {
        move |arg: A| self.run(|| func(arg.clone()))
    }
}
