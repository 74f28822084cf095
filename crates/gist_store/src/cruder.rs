use gist_parser::Gist;

use crate::error::StoreError;
use crate::response::RemoteGist;

/// Create, retrieve, update and delete operations against the remote
/// snippet host. The GitHub client implements this for real; orchestration
/// code and its tests depend only on the trait.
pub trait GistCruder {
    /// Uploads a new gist. A successful create answers with the stored
    /// resource, id and URL included.
    fn create(&self, gist: &Gist) -> Result<RemoteGist, StoreError>;

    /// Fetches a single gist by id.
    fn retrieve(&self, id: &str) -> Result<RemoteGist, StoreError>;

    /// Replaces the description, visibility and files of an existing gist.
    fn update(&self, id: &str, gist: &Gist) -> Result<RemoteGist, StoreError>;

    /// Removes the remote gist.
    fn delete(&self, id: &str) -> Result<(), StoreError>;
}
