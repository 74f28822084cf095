use serde::{Deserialize, Serialize};

/// The normalized record handed to the upload collaborator:
/// `{ description, public, files: [{ content }] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gist {
    pub description: String,
    pub public: bool,
    pub files: Vec<GistFileBody>,
}

/// One uploaded file. The content is the entire source file, not just the
/// text between the markers. The filename is only serialized when a caller
/// has set one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GistFileBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    pub content: String,
}
