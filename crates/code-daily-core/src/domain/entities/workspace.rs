//! The on-disk practice workspace and its planned layout.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::domain::{
    catalog::FileTemplate,
    entities::{common::RelativePath, content::ExerciseBatch},
    error::DomainError,
    value_objects::{ExerciseNumber, LanguageKey, SectionKey},
};

pub const EXERCISES_FILE: &str = "exercises.md";

/// Identity and well-known paths of one generated workspace.
///
/// The folder name is a pure function of (language, section, date), so the
/// same triple on the same day always resolves to the same folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    root: PathBuf,
    language: LanguageKey,
    section: SectionKey,
    created_on: NaiveDate,
}

impl Workspace {
    /// `{language}-{section}-{YYYY-MM-DD}`, all lowercase.
    pub fn folder_name(language: LanguageKey, section: SectionKey, date: NaiveDate) -> String {
        format!(
            "{}-{}-{}",
            language.as_str(),
            section.slug(),
            date.format("%Y-%m-%d")
        )
    }

    pub fn new(
        output_root: impl AsRef<Path>,
        language: LanguageKey,
        section: SectionKey,
        created_on: NaiveDate,
    ) -> Self {
        let root = output_root
            .as_ref()
            .join(Self::folder_name(language, section, created_on));
        Self {
            root,
            language,
            section,
            created_on,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub const fn language(&self) -> LanguageKey {
        self.language
    }

    pub const fn section(&self) -> SectionKey {
        self.section
    }

    pub const fn created_on(&self) -> NaiveDate {
        self.created_on
    }

    pub fn exercises_file(&self) -> PathBuf {
        self.root.join(EXERCISES_FILE)
    }

    pub fn exercise_dir_name(number: ExerciseNumber) -> String {
        format!("exercise-{number}")
    }

    pub fn exercise_dir(&self, number: ExerciseNumber) -> PathBuf {
        self.root.join(Self::exercise_dir_name(number))
    }

    /// Solutions live in the workspace root, not in the exercise folder.
    pub fn solution_file(&self, number: ExerciseNumber) -> PathBuf {
        self.root.join(format!("solution-{number}.md"))
    }
}

/// Everything to create for one workspace, in write order.
///
/// This is data only; the application layer walks it and performs the I/O.
/// Entry paths are relative to [`WorkspaceLayout::root`].
#[derive(Debug, Clone)]
pub struct WorkspaceLayout {
    pub(crate) root: PathBuf,
    pub(crate) entries: Vec<FsEntry>,
}

impl WorkspaceLayout {
    /// Plan `exercises.md` plus one independent copy of `files` in each
    /// exercise folder. Call [`WorkspaceLayout::validate`] before writing.
    pub fn plan(
        workspace: &Workspace,
        batch: &ExerciseBatch,
        files: &[FileTemplate],
    ) -> Result<Self, DomainError> {
        let mut layout = Self {
            root: workspace.root().to_path_buf(),
            entries: Vec::new(),
        };

        layout.entries.push(FsEntry::File(FileToWrite {
            path: PathBuf::from(EXERCISES_FILE),
            content: batch.as_str().to_string(),
        }));

        for number in ExerciseNumber::all() {
            let dir = RelativePath::try_new(Workspace::exercise_dir_name(number))?;
            layout.entries.push(FsEntry::Directory(DirectoryToCreate {
                path: dir.as_path().to_path_buf(),
            }));

            for file in files {
                let path = dir.join(&RelativePath::try_new(file.path)?);
                layout.entries.push(FsEntry::File(FileToWrite {
                    path: path.into_path_buf(),
                    content: file.content.to_string(),
                }));
            }
        }

        Ok(layout)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for entry in &self.entries {
            let path = entry.path();
            if !seen.insert(path) {
                return Err(DomainError::DuplicatePath {
                    path: path.display().to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entries(&self) -> &[FsEntry] {
        &self.entries
    }

    pub fn files(&self) -> impl Iterator<Item = &FileToWrite> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::File(f) => Some(f),
            _ => None,
        })
    }

    pub fn directories(&self) -> impl Iterator<Item = &DirectoryToCreate> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::Directory(d) => Some(d),
            _ => None,
        })
    }
}

#[derive(Debug, Clone)]
pub enum FsEntry {
    File(FileToWrite),
    Directory(DirectoryToCreate),
}

impl FsEntry {
    pub fn path(&self) -> &Path {
        match self {
            Self::File(f) => &f.path,
            Self::Directory(d) => &d.path,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileToWrite {
    pub path: PathBuf,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct DirectoryToCreate {
    pub path: PathBuf,
}
