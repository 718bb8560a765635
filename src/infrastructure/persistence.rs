use crate::domain::WizardState;
use std::fs;
use std::path::{Path, PathBuf};

/// Default storage key for the wizard session file.
pub const DEFAULT_SESSION_FILE: &str = "wizard_session_v1.json";

/// File-backed storage for one wizard session. The path acts as the storage
/// key; every save rewrites the whole state.
pub struct SessionRepository {
    path: PathBuf,
}

impl SessionRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save_session(&self, state: &WizardState) -> Result<(), String> {
        match serde_json::to_string_pretty(state) {
            Ok(json) => match fs::write(&self.path, &json) {
                Ok(_) => Ok(()),
                Err(e) => Err(e.to_string()),
            },
            Err(e) => Err(format!("Serialization failed: {}", e)),
        }
    }

    /// Loads the persisted session if one exists. A missing file is a fresh
    /// session, not an error.
    pub fn load_session(&self) -> Result<Option<WizardState>, String> {
        if !self.path.exists() {
            return Ok(None);
        }
        match fs::read_to_string(&self.path) {
            Ok(content) => match serde_json::from_str::<WizardState>(&content) {
                Ok(state) => Ok(Some(state)),
                Err(e) => Err(format!("Invalid session format - {}", e)),
            },
            Err(e) => Err(e.to_string()),
        }
    }

    /// Removes the session file. Clearing an already-absent session is fine.
    pub fn clear_session(&self) -> Result<(), String> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EntityRef;

    fn repository() -> (SessionRepository, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let repo = SessionRepository::new(dir.path().join(DEFAULT_SESSION_FILE));
        (repo, dir)
    }

    #[test]
    fn test_load_missing_session_is_none() {
        let (repo, _dir) = repository();
        assert_eq!(repo.load_session().unwrap(), None);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let (repo, _dir) = repository();

        let mut state = WizardState::default();
        state.application_id = Some(101);
        state.opportunity_id = Some(55);
        state.created_contacts.push(EntityRef::new(3, "Jo Doe"));
        state.last_step = Some(3);
        state.highest_visited_step = Some(3);

        repo.save_session(&state).unwrap();
        let restored = repo.load_session().unwrap().unwrap();
        assert_eq!(restored, state);
    }

    #[test]
    fn test_load_rejects_malformed_session() {
        let (repo, _dir) = repository();
        fs::write(repo.path(), "not json").unwrap();

        let err = repo.load_session().unwrap_err();
        assert!(err.contains("Invalid session format"));
    }

    #[test]
    fn test_clear_session_removes_file() {
        let (repo, _dir) = repository();
        repo.save_session(&WizardState::default()).unwrap();
        assert!(repo.path().exists());

        repo.clear_session().unwrap();
        assert!(!repo.path().exists());

        // Clearing again is not an error.
        repo.clear_session().unwrap();
    }
}
