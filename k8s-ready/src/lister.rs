use async_trait::async_trait;
use k8s_openapi::api::core::v1 as corev1;

use crate::query::PodQuery;

/// Classification of a listing failure as transient or permanent.
///
/// Transient failures are absorbed by the poller and retried; permanent ones
/// abort the wait immediately.
pub trait RetryableError: std::error::Error {
    fn is_retryable(&self) -> bool;
}

/// The one capability a readiness wait needs from a cluster: list the pods
/// matching a query.
///
/// Implemented by the kube client wrapper for real clusters and by scripted
/// fakes in tests.
#[async_trait]
pub trait PodLister {
    type Error: RetryableError + Send + Sync + 'static;

    async fn list_pods(&self, query: &PodQuery) -> Result<Vec<corev1::Pod>, Self::Error>;
}
