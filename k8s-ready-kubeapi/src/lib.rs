use std::fmt::Debug;

use async_trait::async_trait;
use k8s_ready::{PodLister, PodQuery, RetryableError};
use k8s_ready_ext as k8s;
use kube::api;
use thiserror::Error;

use k8s::corev1;

/// Pod listing against a live cluster, scoped to what a readiness wait needs.
pub struct KubeApi {
    list_params: api::ListParams,
    client: kube::Client,
}

impl KubeApi {
    /// Create a KubeApi configured with a default Kubernetes client.
    pub async fn new() -> kube::Result<Self> {
        kube::Client::try_default().await.map(Self::with_client)
    }

    /// Create a KubeApi backed by the provided Kubernetes client.
    pub fn with_client(client: kube::Client) -> Self {
        Self {
            list_params: api::ListParams::default(),
            client,
        }
    }

    /// List the pods of `namespace` matching `label_selector`.
    pub async fn list_labeled_pods(
        &self,
        namespace: &str,
        label_selector: &str,
    ) -> kube::Result<Vec<corev1::Pod>> {
        let lp = self.list_params.clone().labels(label_selector);
        let pods = self.pods(namespace).list(&lp).await?;
        tracing::debug!(namespace, label_selector, count = pods.items.len(), "listed pods");
        Ok(pods.items)
    }

    fn pods(&self, namespace: &str) -> api::Api<corev1::Pod> {
        api::Api::namespaced(self.client.clone(), namespace)
    }
}

#[async_trait]
impl PodLister for KubeApi {
    type Error = ListPodsError;

    async fn list_pods(&self, query: &PodQuery) -> Result<Vec<corev1::Pod>, ListPodsError> {
        self.list_labeled_pods(&query.namespace, &query.label_selector)
            .await
            .map_err(ListPodsError)
    }
}

/// A pod listing failure, classified for retry.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ListPodsError(pub kube::Error);

impl RetryableError for ListPodsError {
    fn is_retryable(&self) -> bool {
        is_retryable(&self.0)
    }
}

/// Whether a kube error is transient infrastructure trouble worth retrying.
///
/// API responses signalling server-side pressure or gateway trouble are
/// retryable, as are transport-level failures (an apiserver or port-forward
/// restarting mid-test). Anything else (RBAC, not-found, bad requests, client
/// misconfiguration) is permanent.
pub fn is_retryable(err: &kube::Error) -> bool {
    match err {
        kube::Error::Api(resp) => matches!(resp.code, 408 | 429 | 500 | 502 | 503 | 504),
        kube::Error::HyperError(_) | kube::Error::Service(_) => true,
        _ => false,
    }
}

impl Debug for KubeApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KubeApi")
            .field("list_params", &self.list_params)
            .field("client", &"<kube::Client>")
            .finish()
    }
}
