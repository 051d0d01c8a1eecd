use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::plan::{ScaffoldPlan, TemplateId};
use super::templates::render;
use crate::error::ScaffoldError;

/// Generation switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecuteOptions {
    /// Overwrite files whose content differs
    pub force: bool,
    /// Report what would happen without touching the file system
    pub dry_run: bool,
}

/// What happened to one destination file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    /// New file
    Create,
    /// Existing file already had the rendered content
    Identical,
    /// Existing file differs and was left alone
    Skip,
    /// Existing file differs and was overwritten
    Force,
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FileStatus::Create => "create",
            FileStatus::Identical => "identical",
            FileStatus::Skip => "skip",
            FileStatus::Force => "force",
        };
        f.pad(s)
    }
}

/// Outcome for one file of the plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenFile {
    pub template: TemplateId,
    /// Destination including the target root
    pub path: PathBuf,
    pub status: FileStatus,
}

/// Render every file of `plan` under `target_root`
///
/// The resource folder is created first. Existing files with different
/// content are skipped unless `options.force` is set.
///
/// # Errors
///
/// [`ScaffoldError::Render`] or [`ScaffoldError::Io`]; files written before
/// the failure stay on disk.
pub fn execute(
    plan: &ScaffoldPlan,
    target_root: &Path,
    options: ExecuteOptions,
) -> Result<Vec<WrittenFile>, ScaffoldError> {
    let folder = target_root.join(&plan.resource_folder);
    if !options.dry_run {
        create_dir(&folder)?;
    }

    let mut written = Vec::with_capacity(plan.target_files.len());
    for target in &plan.target_files {
        let path = target_root.join(&target.path);
        let content = render(target.template, &plan.identifiers)?;
        let status = status_for(&path, &content, options.force)?;

        if !options.dry_run && matches!(status, FileStatus::Create | FileStatus::Force) {
            if let Some(parent) = path.parent() {
                create_dir(parent)?;
            }
            fs::write(&path, &content).map_err(|source| ScaffoldError::Io {
                path: path.clone(),
                source,
            })?;
        }

        match status {
            FileStatus::Skip => warn!(
                path = %path.display(),
                "file exists with different content, skipping (use --force to overwrite)"
            ),
            _ => info!(
                template = %target.template,
                path = %path.display(),
                %status,
                dry_run = options.dry_run,
                "scaffold file"
            ),
        }

        written.push(WrittenFile {
            template: target.template,
            path,
            status,
        });
    }
    Ok(written)
}

fn status_for(path: &Path, content: &str, force: bool) -> Result<FileStatus, ScaffoldError> {
    if !path.exists() {
        return Ok(FileStatus::Create);
    }
    let existing = fs::read_to_string(path).map_err(|source| ScaffoldError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(if existing == content {
        FileStatus::Identical
    } else if force {
        FileStatus::Force
    } else {
        FileStatus::Skip
    })
}

fn create_dir(dir: &Path) -> Result<(), ScaffoldError> {
    fs::create_dir_all(dir).map_err(|source| ScaffoldError::Io {
        path: dir.to_path_buf(),
        source,
    })
}
