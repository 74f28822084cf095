use std::collections::BTreeMap;

use serde::Deserialize;

/// The subset of the gist resource this tool reads back from the host.
/// Everything else in the response is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteGist {
    pub id: String,
    pub html_url: String,
    pub description: Option<String>,
    pub public: bool,
    #[serde(default)]
    pub files: BTreeMap<String, RemoteGistFile>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteGistFile {
    pub filename: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub truncated: bool,
    /// Absent when the host truncates large files out of the listing.
    #[serde(default)]
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_a_host_response() {
        let body = r#"{
            "id": "aa5a315d61ae9438b18d",
            "html_url": "https://gist.github.com/aa5a315d61ae9438b18d",
            "description": "demo snippet",
            "public": true,
            "comments": 0,
            "files": {
                "snippet.py": {
                    "filename": "snippet.py",
                    "type": "text/plain",
                    "size": 9,
                    "truncated": false,
                    "content": "print(1)\n"
                }
            }
        }"#;
        let remote: RemoteGist = serde_json::from_str(body).unwrap();
        assert_eq!(remote.id, "aa5a315d61ae9438b18d");
        assert_eq!(remote.description.as_deref(), Some("demo snippet"));
        assert!(remote.public);
        let file = &remote.files["snippet.py"];
        assert_eq!(file.content.as_deref(), Some("print(1)\n"));
        assert!(!file.truncated);
    }

    #[test]
    fn tolerates_missing_optional_sections() {
        let body = r#"{
            "id": "x",
            "html_url": "https://gist.github.com/x",
            "description": null,
            "public": false
        }"#;
        let remote: RemoteGist = serde_json::from_str(body).unwrap();
        assert!(remote.description.is_none());
        assert!(remote.files.is_empty());
    }
}
