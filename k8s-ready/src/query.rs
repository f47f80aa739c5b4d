use std::fmt;

/// Label key conventionally shared by every pod of a deployment.
pub const APP_LABEL: &str = "app";

/// Inputs to one poll attempt: where to look and which pods to match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PodQuery {
    pub namespace: String,
    pub label_selector: String,
}

impl PodQuery {
    pub fn new(namespace: impl ToString, label_selector: impl ToString) -> Self {
        let namespace = namespace.to_string();
        let label_selector = label_selector.to_string();
        Self {
            namespace,
            label_selector,
        }
    }

    /// Query for the pods of a deployment labelled `app=<app>`.
    pub fn for_app(namespace: impl ToString, app: impl ToString) -> Self {
        let label_selector = format!("{APP_LABEL}={}", app.to_string());
        Self::new(namespace, label_selector)
    }
}

impl fmt::Display for PodQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.label_selector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_app_builds_the_app_selector() {
        let query = PodQuery::for_app("default", "web");

        assert_eq!(query.namespace, "default");
        assert_eq!(query.label_selector, "app=web");
    }

    #[test]
    fn display_joins_namespace_and_selector() {
        let query = PodQuery::for_app("kube-system", "coredns");

        assert_eq!(query.to_string(), "kube-system/app=coredns");
    }
}
