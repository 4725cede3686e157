//! Exponential backoff with jitter.

use std::time::Duration;

use rand::Rng;

/// Exponential backoff configuration for retrying reads.
///
/// Built from [`Default`] and the setters. Each delay is the previous one
/// times `multiplier`, capped at `max_interval`, then randomized by
/// `± randomization_factor`. Retrying stops once `max_elapsed_time` would be
/// exceeded. Delays saturate at [`Duration::MAX`] instead of overflowing.
#[derive(Debug, Clone, PartialEq)]
pub struct ExponentialBackoff {
    /// Delay before the first retry.
    pub(crate) initial_interval: Duration,
    /// Growth factor between consecutive delays.
    pub(crate) multiplier: f64,
    /// Upper bound for a single delay, before jitter.
    pub(crate) max_interval: Duration,
    /// Jitter ratio in `[0, 1]`.
    pub(crate) randomization_factor: f64,
    /// Total time budget, including round trips.
    pub(crate) max_elapsed_time: Duration,
}

impl Default for ExponentialBackoff {
    fn default() -> Self {
        Self {
            initial_interval: Duration::from_millis(500),
            multiplier: 1.5,
            max_interval: Duration::from_secs(5),
            randomization_factor: 0.5,
            max_elapsed_time: Duration::from_secs(10),
        }
    }
}

impl ExponentialBackoff {
    /// Set the delay before the first retry.
    pub fn initial_interval(mut self, interval: Duration) -> Self {
        self.initial_interval = interval;
        self
    }

    /// Set the growth factor.
    pub fn multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = sanitize_multiplier(multiplier);
        self
    }

    /// Set the per-delay cap.
    pub fn max_interval(mut self, interval: Duration) -> Self {
        self.max_interval = interval;
        self
    }

    /// Set the jitter ratio. Clamped to `[0, 1]`; NaN disables jitter.
    pub fn randomization_factor(mut self, factor: f64) -> Self {
        self.randomization_factor = sanitize_factor(factor);
        self
    }

    /// Set the total time budget.
    pub fn max_elapsed_time(mut self, elapsed: Duration) -> Self {
        self.max_elapsed_time = elapsed;
        self
    }

    /// An endless sequence of jittered delays.
    pub fn delays(&self) -> Delays {
        Delays {
            current: self.initial_interval,
            policy: self.clone(),
        }
    }
}

/// Iterator over backoff delays. Never ends; the caller enforces the
/// elapsed-time ceiling.
#[derive(Debug, Clone)]
pub struct Delays {
    current: Duration,
    policy: ExponentialBackoff,
}

impl Iterator for Delays {
    type Item = Duration;

    fn next(&mut self) -> Option<Duration> {
        let cap = self.policy.max_interval;
        let base = self.current.min(cap);
        self.current = scale(base, sanitize_multiplier(self.policy.multiplier)).min(cap);

        let factor = sanitize_factor(self.policy.randomization_factor);
        if factor == 0.0 || base.is_zero() {
            return Some(base);
        }
        let jitter = rand::thread_rng().gen_range((1.0 - factor)..=(1.0 + factor));
        Some(scale(base, jitter))
    }
}

/// `duration * factor`, saturating at [`Duration::MAX`].
fn scale(duration: Duration, factor: f64) -> Duration {
    Duration::try_from_secs_f64(duration.as_secs_f64() * factor).unwrap_or(Duration::MAX)
}

fn sanitize_multiplier(multiplier: f64) -> f64 {
    if multiplier.is_nan() { 1.0 } else { multiplier.max(1.0) }
}

fn sanitize_factor(factor: f64) -> f64 {
    if factor.is_nan() { 0.0 } else { factor.clamp(0.0, 1.0) }
}
