pub use k8s_openapi as openapi;
pub use k8s_openapi::api::core::v1 as corev1;
pub use k8s_openapi::apimachinery::pkg::apis::meta::v1 as metav1;

use k8s_ready::POD_RUNNING;

pub trait PodExt {
    /// Build a pod reporting the given phase. Fakes and tests use this to
    /// script snapshots without a cluster.
    fn with_phase(name: impl ToString, namespace: impl ToString, phase: impl ToString) -> Self;
    fn phase(&self) -> Option<&str>;
    fn is_running(&self) -> bool;
}

impl PodExt for corev1::Pod {
    fn with_phase(name: impl ToString, namespace: impl ToString, phase: impl ToString) -> Self {
        let metadata = metav1::ObjectMeta::with_namespace(name, namespace);
        let status = corev1::PodStatus {
            phase: Some(phase.to_string()),
            ..default()
        };
        Self {
            metadata,
            status: Some(status),
            ..default()
        }
    }

    fn phase(&self) -> Option<&str> {
        self.status.as_ref().and_then(|status| status.phase.as_deref())
    }

    fn is_running(&self) -> bool {
        self.phase() == Some(POD_RUNNING)
    }
}

pub trait ObjectMetaExt {
    fn new(name: impl ToString) -> Self;
    fn with_namespace(name: impl ToString, namespace: impl ToString) -> Self;
    fn labeled(self, key: impl ToString, value: impl ToString) -> Self;
}

impl ObjectMetaExt for metav1::ObjectMeta {
    fn new(name: impl ToString) -> Self {
        let name = Some(name.to_string());
        Self { name, ..default() }
    }

    fn with_namespace(name: impl ToString, namespace: impl ToString) -> Self {
        Self {
            namespace: Some(namespace.to_string()),
            ..Self::new(name)
        }
    }

    fn labeled(self, key: impl ToString, value: impl ToString) -> Self {
        let mut labels = self.labels.unwrap_or_default();
        labels.insert(key.to_string(), value.to_string());
        Self {
            labels: Some(labels),
            ..self
        }
    }
}

pub fn default<T: Default>() -> T {
    T::default()
}
