use super::Result;
use crate::error::StorageError;
use std::fs;
use std::path::PathBuf;

/// Environment variable that names the API credential, both in the process
/// environment and inside the credential file.
pub const CREDENTIAL_VAR: &str = "FX_API_KEY";

const APP_DIR: &str = "fx-cli";
const CREDENTIAL_FILE: &str = "credentials.env";

/// On-disk credential store.
///
/// The file is a dotenv-style single assignment, e.g.
/// `FX_API_KEY="abc123"`. Unknown lines are preserved on save.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store rooted at the user's configuration directory
    /// (`<config_dir>/fx-cli/credentials.env`).
    pub fn default_location() -> Result<Self> {
        let config_dir = dirs::config_dir().ok_or(StorageError::ConfigDirNotFound)?;
        Ok(Self::new(config_dir.join(APP_DIR).join(CREDENTIAL_FILE)))
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Read the stored credential, if the file exists and defines it.
    pub fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path).map_err(|source| StorageError::FileIo {
            path: self.path.to_string_lossy().to_string(),
            source,
        })?;

        for line in content.lines() {
            if let Some(value) = parse_assignment(line) {
                if !value.is_empty() {
                    return Ok(Some(value));
                }
            }
        }

        Ok(None)
    }

    /// Persist the credential, replacing an existing assignment line or
    /// appending a new quoted one. Other lines in the file are kept as-is.
    pub fn save(&self, key: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::FileIo {
                path: parent.to_string_lossy().to_string(),
                source,
            })?;
        }

        let existing = if self.path.exists() {
            fs::read_to_string(&self.path).map_err(|source| StorageError::FileIo {
                path: self.path.to_string_lossy().to_string(),
                source,
            })?
        } else {
            String::new()
        };

        let assignment = format!("{}=\"{}\"", CREDENTIAL_VAR, key);
        let mut lines: Vec<String> = Vec::new();
        let mut replaced = false;

        for line in existing.lines() {
            if parse_assignment(line).is_some() {
                lines.push(assignment.clone());
                replaced = true;
            } else {
                lines.push(line.to_string());
            }
        }
        if !replaced {
            lines.push(assignment);
        }

        let mut content = lines.join("\n");
        content.push('\n');

        fs::write(&self.path, content).map_err(|source| StorageError::FileIo {
            path: self.path.to_string_lossy().to_string(),
            source,
        })?;

        self.restrict_permissions();
        Ok(())
    }

    // Best-effort owner-only permissions; platforms without a POSIX
    // permission model simply keep the file as written.
    #[cfg(unix)]
    fn restrict_permissions(&self) {
        use std::os::unix::fs::PermissionsExt;
        let _ = fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600));
    }

    #[cfg(not(unix))]
    fn restrict_permissions(&self) {}
}

/// Parse a `FX_API_KEY=value` line, stripping surrounding quotes.
fn parse_assignment(line: &str) -> Option<String> {
    let line = line.trim();
    if line.starts_with('#') {
        return None;
    }

    let (name, value) = line.split_once('=')?;
    if name.trim() != CREDENTIAL_VAR {
        return None;
    }

    let value = value.trim();
    let value = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
        .unwrap_or(value);

    Some(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store_in(dir: &tempfile::TempDir) -> CredentialStore {
        CredentialStore::new(dir.path().join("fx-cli").join("credentials.env"))
    }

    #[test]
    fn test_load_missing_file_returns_none() {
        let dir = tempdir().expect("Failed to create temp dir");
        let store = store_in(&dir);
        assert_eq!(store.load().expect("load should succeed"), None);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempdir().expect("Failed to create temp dir");
        let store = store_in(&dir);

        store.save("abc123def456").expect("save should succeed");
        assert_eq!(
            store.load().expect("load should succeed"),
            Some("abc123def456".to_string())
        );
    }

    #[test]
    fn test_save_replaces_existing_assignment() {
        let dir = tempdir().expect("Failed to create temp dir");
        let store = store_in(&dir);

        store.save("old-key").expect("first save should succeed");
        store.save("new-key").expect("second save should succeed");

        assert_eq!(
            store.load().expect("load should succeed"),
            Some("new-key".to_string())
        );

        // Only one assignment line remains
        let content = fs::read_to_string(store.path()).expect("file should exist");
        assert_eq!(content.matches(CREDENTIAL_VAR).count(), 1);
    }

    #[test]
    fn test_save_preserves_unrelated_lines() {
        let dir = tempdir().expect("Failed to create temp dir");
        let store = store_in(&dir);

        fs::create_dir_all(store.path().parent().expect("store path has parent"))
            .expect("mkdir should succeed");
        fs::write(
            store.path(),
            "# fx-cli credentials\nOTHER_VAR=keep-me\nFX_API_KEY=\"stale\"\n",
        )
        .expect("seed write should succeed");

        store.save("fresh").expect("save should succeed");

        let content = fs::read_to_string(store.path()).expect("file should exist");
        assert!(content.contains("# fx-cli credentials"));
        assert!(content.contains("OTHER_VAR=keep-me"));
        assert!(content.contains("FX_API_KEY=\"fresh\""));
        assert!(!content.contains("stale"));
    }

    #[test]
    fn test_parse_assignment_quote_styles() {
        assert_eq!(
            parse_assignment("FX_API_KEY=plain"),
            Some("plain".to_string())
        );
        assert_eq!(
            parse_assignment("FX_API_KEY=\"quoted\""),
            Some("quoted".to_string())
        );
        assert_eq!(
            parse_assignment("FX_API_KEY='single'"),
            Some("single".to_string())
        );
        assert_eq!(parse_assignment("# FX_API_KEY=commented"), None);
        assert_eq!(parse_assignment("OTHER=value"), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_save_restricts_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().expect("Failed to create temp dir");
        let store = store_in(&dir);
        store.save("secret").expect("save should succeed");

        let mode = fs::metadata(store.path())
            .expect("file should exist")
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
