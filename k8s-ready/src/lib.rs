pub use cluster::ClusterHandle;
pub use config::{PollConfig, ZeroPodPolicy};
pub use error::WaitError;
pub use lister::{PodLister, RetryableError};
pub use outcome::{assess, PollOutcome, POD_RUNNING};
pub use query::{PodQuery, APP_LABEL};

mod cluster;
mod config;
mod error;
mod lister;
mod outcome;
mod query;
