use std::time::Duration;

use time::ext::NumericalStdDuration as _;

/// What an empty pod selection means for readiness.
///
/// A deployment that has not scheduled any pods yet matches zero pods, so
/// whether the empty set counts as ready is a policy choice rather than a
/// fact about the cluster.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ZeroPodPolicy {
    /// Zero matching pods satisfy the wait.
    Ready,
    /// Zero matching pods keep the wait polling.
    #[default]
    NotReady,
}

/// Timing and policy knobs for one readiness wait.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PollConfig {
    /// Delay between poll attempts. The first attempt runs immediately.
    pub interval: Duration,
    /// Hard deadline for the whole wait.
    pub timeout: Duration,
    pub zero_pods: ZeroPodPolicy,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: 20.std_seconds(),
            timeout: 600.std_seconds(),
            zero_pods: ZeroPodPolicy::default(),
        }
    }
}

impl PollConfig {
    pub fn with_interval(self, interval: Duration) -> Self {
        Self { interval, ..self }
    }

    pub fn with_timeout(self, timeout: Duration) -> Self {
        Self { timeout, ..self }
    }

    pub fn with_zero_pods(self, zero_pods: ZeroPodPolicy) -> Self {
        Self { zero_pods, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timing_is_20s_interval_10min_deadline() {
        let config = PollConfig::default();

        assert_eq!(config.interval, Duration::from_secs(20));
        assert_eq!(config.timeout, Duration::from_secs(600));
        assert_eq!(config.zero_pods, ZeroPodPolicy::NotReady);
    }

    #[test]
    fn builders_replace_single_fields() {
        let config = PollConfig::default()
            .with_interval(Duration::from_secs(1))
            .with_zero_pods(ZeroPodPolicy::Ready);

        assert_eq!(config.interval, Duration::from_secs(1));
        assert_eq!(config.timeout, Duration::from_secs(600));
        assert_eq!(config.zero_pods, ZeroPodPolicy::Ready);
    }
}
