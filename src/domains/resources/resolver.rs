//! Resource Resolver - locates resource files across candidate directories.
//!
//! Candidate directories are searched in order and the first directory that
//! holds the requested file wins. Every call goes back to the disk; nothing
//! is cached between requests.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value, json};
use tracing::{debug, instrument, warn};

use super::error::ResourceError;
use super::registry::find_resource;

/// Resolves logical resource keys to parsed JSON documents on disk.
#[derive(Debug, Clone)]
pub struct ResourceResolver {
    /// Ordered base directories, highest priority first.
    candidate_dirs: Vec<PathBuf>,
}

impl ResourceResolver {
    /// Create a resolver over the given candidate directories.
    pub fn new(candidate_dirs: Vec<PathBuf>) -> Self {
        Self { candidate_dirs }
    }

    /// The directories searched, in priority order.
    pub fn candidate_dirs(&self) -> &[PathBuf] {
        &self.candidate_dirs
    }

    /// Resolve a registered resource by its logical key.
    pub async fn resolve(&self, key: &str) -> Result<Value, ResourceError> {
        let entry = find_resource(key).ok_or_else(|| ResourceError::unknown(key))?;
        self.resolve_file(entry.key, entry.file_name).await
    }

    /// Find `file_name` in the first candidate directory that holds it and
    /// parse it.
    ///
    /// A parse failure on that file is final: later directories are not
    /// consulted even if they hold a valid copy.
    #[instrument(skip(self))]
    pub async fn resolve_file(&self, key: &str, file_name: &str) -> Result<Value, ResourceError> {
        for dir in &self.candidate_dirs {
            let path = dir.join(file_name);
            if is_file(&path).await {
                debug!("Resolved {} to {}", key, path.display());
                return load_json_file(&path).await;
            }
        }

        warn!(
            "{} not found in any of {} candidate directories",
            file_name,
            self.candidate_dirs.len()
        );
        Err(ResourceError::not_found(
            key,
            file_name,
            self.candidate_dirs.clone(),
        ))
    }

    /// Load every `*.json` file of the first existing candidate directory,
    /// keyed by file stem.
    ///
    /// A file that fails to load is reported as an `{"error": ...}` entry
    /// under its own key; the rest of the scan carries on.
    #[instrument(skip(self))]
    pub async fn scan_all(&self) -> Result<Map<String, Value>, ResourceError> {
        let mut data = Map::new();

        for dir in &self.candidate_dirs {
            if !is_dir(dir).await {
                debug!("Skipping missing directory {}", dir.display());
                continue;
            }

            for path in list_json_files(dir).await? {
                let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                    continue;
                };
                if data.contains_key(stem) {
                    continue;
                }

                let value = match load_json_file(&path).await {
                    Ok(value) => value,
                    Err(e) => {
                        warn!("Failed to load {}: {}", path.display(), e);
                        json!({ "error": e.to_string() })
                    }
                };
                data.insert(stem.to_string(), value);
            }

            // Only the first existing directory is scanned.
            break;
        }

        if data.is_empty() {
            warn!("No data files found in candidate directories");
            return Err(ResourceError::NoDataFiles {
                searched: self.candidate_dirs.clone(),
            });
        }

        Ok(data)
    }
}

/// Read and parse a JSON file.
///
/// Bytes that are not valid UTF-8 are a parse failure of the file, not an
/// I/O failure.
pub async fn load_json_file(path: &Path) -> Result<Value, ResourceError> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let content = tokio::fs::read(path)
        .await
        .map_err(|e| ResourceError::io(path, e))?;

    serde_json::from_slice(&content).map_err(|e| ResourceError::parse(file_name, e.to_string()))
}

async fn is_file(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|m| m.is_file())
        .unwrap_or(false)
}

async fn is_dir(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false)
}

/// Regular `*.json` files of a directory, sorted by name.
async fn list_json_files(dir: &Path) -> Result<Vec<PathBuf>, ResourceError> {
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .map_err(|e| ResourceError::io(dir, e))?;

    let mut files = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| ResourceError::io(dir, e))?
    {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        if is_file(&path).await {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    #[tokio::test]
    async fn test_not_found_lists_searched_dirs_in_order() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        let missing = first.path().join("nope");
        let dirs = vec![
            second.path().to_path_buf(),
            missing.clone(),
            first.path().to_path_buf(),
        ];

        let resolver = ResourceResolver::new(dirs.clone());
        match resolver.resolve("staff").await {
            Err(ResourceError::NotFound {
                key,
                file_name,
                searched,
            }) => {
                assert_eq!(key, "staff");
                assert_eq!(file_name, "staff_extensions.json");
                assert_eq!(searched, dirs);
            }
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_first_match_wins() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        write(first.path(), "information.json", r#"{"source": "first"}"#);
        write(second.path(), "information.json", r#"{"source": "second"}"#);

        let resolver =
            ResourceResolver::new(vec![first.path().to_path_buf(), second.path().to_path_buf()]);
        let value = resolver.resolve("information").await.unwrap();

        assert_eq!(value, json!({"source": "first"}));
    }

    #[tokio::test]
    async fn test_falls_through_to_later_directory() {
        let empty = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        write(second.path(), "callflow_corrected.json", r#"[{"step": 1}]"#);

        let resolver =
            ResourceResolver::new(vec![empty.path().to_path_buf(), second.path().to_path_buf()]);
        let value = resolver.resolve("callflow").await.unwrap();

        assert_eq!(value, json!([{"step": 1}]));
    }

    #[tokio::test]
    async fn test_parse_failure_does_not_fall_back() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        write(first.path(), "insurance_portals.json", "{ not json");
        write(second.path(), "insurance_portals.json", "[]");

        let resolver =
            ResourceResolver::new(vec![first.path().to_path_buf(), second.path().to_path_buf()]);
        let result = resolver.resolve("insurance").await;

        match result {
            Err(ResourceError::Parse { file_name, .. }) => {
                assert_eq!(file_name, "insurance_portals.json")
            }
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_directory_named_like_file_is_skipped() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        fs::create_dir(first.path().join("information.json")).unwrap();
        write(second.path(), "information.json", r#"{"ok": true}"#);

        let resolver =
            ResourceResolver::new(vec![first.path().to_path_buf(), second.path().to_path_buf()]);
        assert_eq!(resolver.resolve("information").await.unwrap(), json!({"ok": true}));
    }

    #[tokio::test]
    async fn test_unknown_key() {
        let resolver = ResourceResolver::new(vec![]);
        let result = resolver.resolve("payroll").await;
        assert!(matches!(result, Err(ResourceError::UnknownResource(k)) if k == "payroll"));
    }

    #[tokio::test]
    async fn test_content_is_returned_unchanged() {
        let dir = TempDir::new().unwrap();
        let raw = r#"{"zeta": 1, "alpha": [3, 2, 1], "Mid": {"b": null, "a": "x"}}"#;
        write(dir.path(), "staff_extensions.json", raw);

        let resolver = ResourceResolver::new(vec![dir.path().to_path_buf()]);
        let value = resolver.resolve("staff").await.unwrap();

        assert_eq!(
            serde_json::to_string(&value).unwrap(),
            r#"{"zeta":1,"alpha":[3,2,1],"Mid":{"b":null,"a":"x"}}"#
        );
    }

    #[tokio::test]
    async fn test_scan_all_uses_first_existing_directory_only() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        write(first.path(), "staff_extensions.json", "[]");
        write(first.path(), "notes.txt", "ignored");
        write(second.path(), "information.json", "{}");

        let resolver = ResourceResolver::new(vec![
            first.path().join("missing"),
            first.path().to_path_buf(),
            second.path().to_path_buf(),
        ]);
        let data = resolver.scan_all().await.unwrap();

        let keys: Vec<_> = data.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["staff_extensions"]);
    }

    #[tokio::test]
    async fn test_scan_all_reports_bad_files_per_key() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "appointment_guide.json", r#"[{"visit_type": "Physical"}]"#);
        write(dir.path(), "broken.json", "[1, 2");

        let resolver = ResourceResolver::new(vec![dir.path().to_path_buf()]);
        let data = resolver.scan_all().await.unwrap();

        assert_eq!(data["appointment_guide"], json!([{"visit_type": "Physical"}]));
        let error = data["broken"]["error"].as_str().unwrap();
        assert!(error.starts_with("Error loading broken.json"));
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("callflow_corrected.json"),
            b"{\"step\": \"\xff\xfe\"}",
        )
        .unwrap();
        fs::write(dir.path().join("notes.json"), b"\xff\xfe[]").unwrap();

        let resolver = ResourceResolver::new(vec![dir.path().to_path_buf()]);
        match resolver.resolve("callflow").await {
            Err(ResourceError::Parse { file_name, .. }) => {
                assert_eq!(file_name, "callflow_corrected.json")
            }
            other => panic!("Expected Parse error, got {:?}", other),
        }

        let data = resolver.scan_all().await.unwrap();
        let error = data["notes"]["error"].as_str().unwrap();
        assert!(error.starts_with("Error loading notes.json"));
    }

    #[tokio::test]
    async fn test_scan_all_empty_directory() {
        let dir = TempDir::new().unwrap();
        let resolver = ResourceResolver::new(vec![dir.path().to_path_buf()]);

        match resolver.scan_all().await {
            Err(ResourceError::NoDataFiles { searched }) => {
                assert_eq!(searched, vec![dir.path().to_path_buf()])
            }
            other => panic!("Expected NoDataFiles, got {:?}", other),
        }
    }
}
