use std::time::Duration;

use thiserror::Error;

use crate::cluster::ClusterHandle;

/// Terminal failures of a readiness wait.
///
/// Transient list errors never surface here; the poller absorbs and retries
/// them. Every variant names the deployment and the owning cluster.
#[derive(Debug, Error)]
pub enum WaitError {
    /// The pod listing failed with a non-retryable error.
    #[error("error querying deployment [{deployment}] status for cluster [{cluster}]: {source}")]
    List {
        deployment: String,
        cluster: ClusterHandle,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The deadline elapsed before every pod reached `Running`.
    #[error(
        "deployment [{deployment}] in namespace [{namespace}] on cluster [{cluster}] not ready after {timeout:?}"
    )]
    Timeout {
        deployment: String,
        namespace: String,
        cluster: ClusterHandle,
        timeout: Duration,
    },

    /// The caller cancelled the wait.
    #[error("cancelled while waiting for deployment [{deployment}] on cluster [{cluster}]")]
    Cancelled {
        deployment: String,
        cluster: ClusterHandle,
    },
}

impl WaitError {
    pub fn list(
        deployment: impl ToString,
        cluster: &ClusterHandle,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::List {
            deployment: deployment.to_string(),
            cluster: cluster.clone(),
            source: Box::new(source),
        }
    }

    pub fn timeout(
        deployment: impl ToString,
        namespace: impl ToString,
        cluster: &ClusterHandle,
        timeout: Duration,
    ) -> Self {
        Self::Timeout {
            deployment: deployment.to_string(),
            namespace: namespace.to_string(),
            cluster: cluster.clone(),
            timeout,
        }
    }

    pub fn cancelled(deployment: impl ToString, cluster: &ClusterHandle) -> Self {
        Self::Cancelled {
            deployment: deployment.to_string(),
            cluster: cluster.clone(),
        }
    }
}
