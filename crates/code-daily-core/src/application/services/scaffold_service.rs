//! Workspace Scaffolder - writes a generated batch to disk.
//!
//! 1. Name the workspace from (language, section, today)
//! 2. Plan `exercises.md` plus the starter files for every exercise
//! 3. Write everything, overwriting what is already there
//!
//! There is no rollback: a failed write leaves a partial workspace behind.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::ports::{Clock, Filesystem},
    domain::{
        DomainValidator as validator, ExerciseBatch, ExerciseNumber, FsEntry, LanguageKey,
        SectionKey, Solution, Workspace, WorkspaceLayout, catalog,
    },
    error::CoreResult,
};

pub struct WorkspaceScaffolder {
    filesystem: Box<dyn Filesystem>,
    clock: Box<dyn Clock>,
    output_root: PathBuf,
}

impl WorkspaceScaffolder {
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        clock: Box<dyn Clock>,
        output_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            filesystem,
            clock,
            output_root: output_root.into(),
        }
    }

    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    /// Create (or refresh) today's workspace for a language and section.
    #[instrument(skip(self, batch), fields(language = %language, section = %section))]
    pub fn materialize(
        &self,
        language: LanguageKey,
        section: SectionKey,
        batch: &ExerciseBatch,
    ) -> CoreResult<Workspace> {
        validator::validate_choice(language, section)?;

        let workspace = Workspace::new(&self.output_root, language, section, self.clock.today());
        let files = catalog::templates_for(language, section);
        if files.is_empty() {
            debug!("Section has no starter files, writing exercises.md only");
        }

        let layout = WorkspaceLayout::plan(&workspace, batch, files)?;
        validator::validate_layout(&layout)?;

        if self.filesystem.exists(workspace.root()) {
            info!(path = %workspace.root().display(), "Workspace exists, overwriting");
        }

        self.write_all(&layout)?;

        info!(
            path = %workspace.root().display(),
            files = layout.files().count(),
            "Workspace ready"
        );
        Ok(workspace)
    }

    /// Write `solution-{n}.md` into the workspace root.
    #[instrument(skip(self, workspace, solution), fields(number = %number))]
    pub fn write_solution(
        &self,
        workspace: &Workspace,
        number: ExerciseNumber,
        solution: &Solution,
    ) -> CoreResult<PathBuf> {
        let path = workspace.solution_file(number);
        self.filesystem.create_dir_all(workspace.root())?;
        self.filesystem.write_file(&path, solution.as_str())?;
        info!(path = %path.display(), "Solution saved");
        Ok(path)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn write_all(&self, layout: &WorkspaceLayout) -> CoreResult<()> {
        self.filesystem.create_dir_all(layout.root())?;

        for entry in layout.entries() {
            match entry {
                FsEntry::Directory(dir) => {
                    let path = layout.root().join(&dir.path);
                    self.filesystem.create_dir_all(&path)?;
                }
                FsEntry::File(file) => {
                    let path = layout.root().join(&file.path);
                    if let Some(parent) = path.parent() {
                        self.filesystem.create_dir_all(parent)?;
                    }
                    self.filesystem.write_file(&path, &file.content)?;
                    debug!(path = %path.display(), "Wrote file");
                }
            }
        }

        Ok(())
    }
}
