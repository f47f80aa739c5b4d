//! Bounded polling until a deployment's pods are all running.
//!
//! Integration tests build a [`DeploymentWaiter`] around something that can
//! list pods, then await [`DeploymentWaiter::wait_until_ready`] with the
//! cancellation token the test driver owns.

use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use k8s_ready::{
    assess, ClusterHandle, PodLister, PodQuery, PollConfig, PollOutcome, RetryableError as _,
    WaitError,
};

/// Polls a lister at a fixed interval until every pod of a deployment is
/// `Running`, a permanent error occurs, the deadline passes, or the caller
/// cancels.
#[derive(Debug)]
pub struct DeploymentWaiter<L> {
    lister: L,
    cluster: ClusterHandle,
    config: PollConfig,
}

impl<L: PodLister> DeploymentWaiter<L> {
    pub fn new(lister: L, cluster: ClusterHandle) -> Self {
        Self {
            lister,
            cluster,
            config: PollConfig::default(),
        }
    }

    pub fn with_config(self, config: PollConfig) -> Self {
        Self { config, ..self }
    }

    /// Wait until every pod labelled `app=<deployment>` in `namespace` reports
    /// the `Running` phase.
    ///
    /// The first attempt runs immediately; later attempts are spaced by the
    /// configured interval. Transient list failures are absorbed and retried;
    /// the configured timeout bounds the whole wait, and cancelling the token
    /// aborts it promptly even mid-sleep.
    pub async fn wait_until_ready(
        &self,
        cancel: &CancellationToken,
        namespace: &str,
        deployment: &str,
    ) -> Result<(), WaitError> {
        tokio::select! {
            () = cancel.cancelled() => Err(WaitError::cancelled(deployment, &self.cluster)),
            polled = tokio::time::timeout(self.config.timeout, self.poll(namespace, deployment)) => {
                match polled {
                    Ok(result) => result,
                    Err(_elapsed) => Err(WaitError::timeout(
                        deployment,
                        namespace,
                        &self.cluster,
                        self.config.timeout,
                    )),
                }
            }
        }
    }

    #[allow(tail_expr_drop_order)]
    async fn poll(&self, namespace: &str, deployment: &str) -> Result<(), WaitError> {
        let query = PodQuery::for_app(namespace, deployment);
        let mut ticker = tokio::time::interval(self.config.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            match self.lister.list_pods(&query).await {
                Ok(pods) => match assess(&pods, self.config.zero_pods) {
                    PollOutcome::Ready { total } => {
                        tracing::info!(%query, total, "deployment ready");
                        return Ok(());
                    }
                    PollOutcome::NotYetReady { ready, total } => {
                        println!("running pods: {ready} < {total}");
                    }
                },
                Err(err) if err.is_retryable() => {
                    tracing::warn!(%query, error = %err, "transient error listing pods, retrying");
                }
                Err(err) => return Err(WaitError::list(deployment, &self.cluster, err)),
            }
        }
    }
}

/// Wait for a deployment with the default timing, the way test drivers call it.
pub async fn wait_for_deployment_ready<L>(
    lister: L,
    cluster: ClusterHandle,
    cancel: &CancellationToken,
    namespace: &str,
    deployment: &str,
) -> Result<(), WaitError>
where
    L: PodLister,
{
    DeploymentWaiter::new(lister, cluster)
        .wait_until_ready(cancel, namespace, deployment)
        .await
}
