use k8s_openapi::api::core::v1 as corev1;

use crate::config::ZeroPodPolicy;

/// Phase a pod reports while all of its containers are running.
pub const POD_RUNNING: &str = "Running";

/// Verdict of a single poll attempt over a listed pod set.
///
/// A fatal list failure is not a verdict; callers surface it as an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PollOutcome {
    /// Every matched pod reports the `Running` phase.
    Ready { total: usize },
    /// Only `ready` of `total` matched pods report the `Running` phase.
    NotYetReady { ready: usize, total: usize },
}

impl PollOutcome {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }
}

/// Count running pods against the total and judge the snapshot.
///
/// The empty selection is resolved by `zero_pods`; see [`ZeroPodPolicy`].
pub fn assess(pods: &[corev1::Pod], zero_pods: ZeroPodPolicy) -> PollOutcome {
    let total = pods.len();
    let ready = pods.iter().filter(|pod| phase_is_running(pod)).count();
    match total {
        0 => match zero_pods {
            ZeroPodPolicy::Ready => PollOutcome::Ready { total },
            ZeroPodPolicy::NotReady => PollOutcome::NotYetReady { ready, total },
        },
        _ if ready < total => PollOutcome::NotYetReady { ready, total },
        _ => PollOutcome::Ready { total },
    }
}

fn phase_is_running(pod: &corev1::Pod) -> bool {
    pod.status
        .as_ref()
        .and_then(|status| status.phase.as_deref())
        == Some(POD_RUNNING)
}
