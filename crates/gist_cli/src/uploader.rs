use std::path::PathBuf;
use std::thread;

use gist_parser::Gist;
use gist_store::{GistCruder, RemoteGist, StoreError};

/// Uploads every record on its own thread and waits for all of them.
/// Records are independent: results carry no ordering guarantee beyond the
/// returned pairing, and one failed upload never aborts the others.
pub fn send_all<C>(
    client: &C,
    records: &[(PathBuf, Gist)],
) -> Vec<(PathBuf, Result<RemoteGist, StoreError>)>
where
    C: GistCruder + Sync,
{
    thread::scope(|scope| {
        let handles: Vec<_> = records
            .iter()
            .map(|(path, gist)| scope.spawn(move || (path.clone(), client.create(gist))))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("upload thread panicked"))
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use gist_parser::GistFileBody;

    /// Succeeds for every gist except the one whose description says fail.
    struct FlakyStore;

    impl GistCruder for FlakyStore {
        fn create(&self, gist: &Gist) -> Result<RemoteGist, StoreError> {
            if gist.description == "fail" {
                return Err(StoreError::MissingToken);
            }
            Ok(RemoteGist {
                id: gist.description.clone(),
                html_url: format!("https://gist.github.com/{}", gist.description),
                description: Some(gist.description.clone()),
                public: gist.public,
                files: BTreeMap::new(),
            })
        }

        fn retrieve(&self, _id: &str) -> Result<RemoteGist, StoreError> {
            unimplemented!("not exercised")
        }

        fn update(&self, _id: &str, _gist: &Gist) -> Result<RemoteGist, StoreError> {
            unimplemented!("not exercised")
        }

        fn delete(&self, _id: &str) -> Result<(), StoreError> {
            unimplemented!("not exercised")
        }
    }

    fn record(description: &str) -> (PathBuf, Gist) {
        (
            PathBuf::from(format!("{description}.txt")),
            Gist {
                description: description.to_string(),
                public: true,
                files: vec![GistFileBody {
                    filename: None,
                    content: "body".to_string(),
                }],
            },
        )
    }

    #[test]
    fn one_failure_does_not_sink_the_rest() {
        let records = vec![record("a"), record("fail"), record("b")];
        let results = send_all(&FlakyStore, &records);
        assert_eq!(results.len(), 3);

        let ok: Vec<_> = results
            .iter()
            .filter(|(_, result)| result.is_ok())
            .map(|(path, _)| path.clone())
            .collect();
        assert_eq!(ok.len(), 2);
        assert!(ok.contains(&PathBuf::from("a.txt")));
        assert!(ok.contains(&PathBuf::from("b.txt")));

        let failed: Vec<_> = results
            .iter()
            .filter(|(_, result)| result.is_err())
            .map(|(path, _)| path.clone())
            .collect();
        assert_eq!(failed, vec![PathBuf::from("fail.txt")]);
    }

    #[test]
    fn empty_input_uploads_nothing() {
        let results = send_all(&FlakyStore, &[]);
        assert!(results.is_empty());
    }
}
