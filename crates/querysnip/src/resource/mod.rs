//! Concurrent loading of the console's resource collections.
//!
//! On startup the console preloads a handful of independent collections.
//! The loaders carry no ordering dependency among themselves, return no
//! meaningful value on success, and the whole load fails if any one of
//! them rejects. There is no retry or partial-success handling.

use std::future::Future;

use futures::future::try_join_all;

/// Resource collections the console preloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Provider,
    Project,
    ServiceAccount,
    Secret,
    Collector,
}

impl ResourceKind {
    /// Dispatch order of the loaders.
    pub const ALL: [ResourceKind; 5] = [
        ResourceKind::Provider,
        ResourceKind::Project,
        ResourceKind::ServiceAccount,
        ResourceKind::Secret,
        ResourceKind::Collector,
    ];

    /// Store path of the loader action.
    pub const fn name(self) -> &'static str {
        match self {
            ResourceKind::Provider => "provider/load",
            ResourceKind::Project => "project/load",
            ResourceKind::ServiceAccount => "serviceAccount/load",
            ResourceKind::Secret => "secret/load",
            ResourceKind::Collector => "collector/load",
        }
    }
}

/// Dispatches one loader per resource kind concurrently and waits for all
/// of them. Fails with the first loader error.
pub async fn load_all<L, F, E>(mut loader: L) -> Result<(), E>
where
    L: FnMut(ResourceKind) -> F,
    F: Future<Output = Result<(), E>>,
{
    try_join_all(ResourceKind::ALL.into_iter().map(|kind| loader(kind))).await?;
    Ok(())
}
