use super::DomainError;
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// A filesystem path guaranteed to be relative and to stay below its base.
///
/// Invariant: never absolute, never contains `..`, `.` or a prefix.
/// Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Fallible constructor.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        let contained = path.as_os_str().len() > 0
            && path.components().all(|c| matches!(c, Component::Normal(_)));
        if contained {
            Ok(Self(path))
        } else {
            Err(DomainError::InvalidScaffoldPath {
                path: path.display().to_string(),
            })
        }
    }

    /// Join a segment, maintaining the relative invariant.
    pub fn join(&self, segment: &RelativePath) -> Self {
        Self(self.0.join(&segment.0))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
