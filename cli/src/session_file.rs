//! Session persisted as a JSON file between CLI invocations.

#[cfg(test)]
#[path = "session_file_test.rs"]
mod session_file_test;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use authflow::{Session, SessionError, SessionStore};

pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn save(&self, session: &Session) -> Result<(), SessionError> {
        let json = serde_json::to_string_pretty(session).map_err(|e| SessionError::Write(e.to_string()))?;
        std::fs::write(&self.path, json).map_err(|e| SessionError::Write(e.to_string()))?;
        tracing::debug!(path = %self.path().display(), "session written");
        Ok(())
    }

    fn load(&self) -> Result<Option<Session>, SessionError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(SessionError::Unavailable(e.to_string())),
        };
        serde_json::from_str(&raw).map(Some).map_err(|e| SessionError::Malformed(e.to_string()))
    }

    fn clear(&self) -> Result<(), SessionError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::Write(e.to_string())),
        }
    }
}
