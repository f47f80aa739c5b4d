use std::fmt;

/// Identity of the cluster a test run is pointed at.
///
/// Supplied by the test driver and threaded into every terminal error so that
/// failures in multi-cluster runs name their origin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClusterHandle {
    pub name: String,
    pub id: String,
}

impl ClusterHandle {
    pub fn new(name: impl ToString, id: impl ToString) -> Self {
        let name = name.to_string();
        let id = id.to_string();
        Self { name, id }
    }
}

impl fmt::Display for ClusterHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.id)
    }
}
