use gist_parser::Gist;
use reqwest::blocking::{RequestBuilder, Response};

use crate::cruder::GistCruder;
use crate::error::StoreError;
use crate::response::RemoteGist;
use crate::session::Session;

/// Base URL of the GitHub REST API.
pub const ENDPOINT_BASE: &str = "https://api.github.com";

/// GitHub-backed implementation of [`GistCruder`]. Borrows the session it
/// authenticates with; one session can serve any number of clients.
pub struct GitHubGists<'a> {
    session: &'a Session,
    base_url: String,
}

impl<'a> GitHubGists<'a> {
    pub fn new(session: &'a Session) -> Self {
        GitHubGists {
            session,
            base_url: ENDPOINT_BASE.to_string(),
        }
    }

    /// Points the client at a different host, for tests or an enterprise
    /// deployment.
    pub fn with_base_url(session: &'a Session, base_url: impl Into<String>) -> Self {
        GitHubGists {
            session,
            base_url: base_url.into(),
        }
    }

    pub fn gists_url(&self) -> String {
        format!("{}/gists", self.base_url)
    }

    pub fn gist_url(&self, id: &str) -> String {
        format!("{}/gists/{}", self.base_url, id)
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        req.header("Accept", "application/vnd.github+json")
            .header("User-Agent", "gist-cli")
            .bearer_auth(self.session.token())
    }

    fn send(&self, url: &str, req: RequestBuilder) -> Result<Response, StoreError> {
        let resp = self
            .authorize(req)
            .send()
            .map_err(|source| StoreError::Transport {
                url: url.to_string(),
                source,
            })?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(StoreError::Status {
                url: url.to_string(),
                status,
                body,
            });
        }
        Ok(resp)
    }

    fn send_json(&self, url: &str, req: RequestBuilder) -> Result<RemoteGist, StoreError> {
        self.send(url, req)?
            .json()
            .map_err(|source| StoreError::Transport {
                url: url.to_string(),
                source,
            })
    }
}

impl GistCruder for GitHubGists<'_> {
    fn create(&self, gist: &Gist) -> Result<RemoteGist, StoreError> {
        let url = self.gists_url();
        self.send_json(&url, self.session.client().post(&url).json(gist))
    }

    fn retrieve(&self, id: &str) -> Result<RemoteGist, StoreError> {
        let url = self.gist_url(id);
        self.send_json(&url, self.session.client().get(&url))
    }

    fn update(&self, id: &str, gist: &Gist) -> Result<RemoteGist, StoreError> {
        let url = self.gist_url(id);
        self.send_json(&url, self.session.client().patch(&url).json(gist))
    }

    fn delete(&self, id: &str) -> Result<(), StoreError> {
        let url = self.gist_url(id);
        self.send(&url, self.session.client().delete(&url))
            .map(|_| ())
    }
}
