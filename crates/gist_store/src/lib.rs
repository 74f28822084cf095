// crates/gist_store/src/lib.rs

//! Remote side of the gist pipeline: an authenticated session, the CRUD
//! contract against the snippet host, and the GitHub-backed client.
//!
//! The parser knows nothing about any of this; it hands over a
//! [`gist_parser::Gist`] and this crate takes it from there.

mod cruder;
mod error;
mod github;
mod response;
mod session;

pub use cruder::GistCruder;
pub use error::StoreError;
pub use github::{GitHubGists, ENDPOINT_BASE};
pub use response::{RemoteGist, RemoteGistFile};
pub use session::{Session, TOKEN_ENV_VAR};
