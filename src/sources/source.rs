use anyhow::Result;

use crate::inspect::InspectedContainer;
use crate::notifier::Notifier;

/// Source trait for retrieving container inspect records from different engines
pub trait Source {
    /// Returns the name of the source for identification purposes
    fn name(&self) -> &str;

    /// Retrieves the inspect record for one container.
    ///
    /// The identifier is whatever the source resolves: a container ID or name for
    /// engine sources, a file path for [`crate::sources::FileSource`]. This call
    /// blocks until the engine answers; no timeout is applied here.
    fn inspect(&self, identifier: &str, notifier: &Notifier) -> Result<InspectedContainer>;
}
