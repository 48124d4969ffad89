use serde_json::{json, Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use wfdoc_core::{FieldPath, Violation, ViolationKind};
use wfdoc_sdk::{validate_document_text, ValidateOptions, ValidationReport};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileValidation {
    pub path: PathBuf,
    pub report: ValidationReport,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkspaceValidation {
    pub files: Vec<FileValidation>,
    /// Problems that are not tied to a readable document.
    pub io_violations: Vec<Violation>,
}

impl FileValidation {
    /// This file's violations, each tagged with `related.file`.
    pub fn tagged_violations(&self) -> Vec<Violation> {
        self.report
            .violations
            .iter()
            .cloned()
            .map(|violation| attach_violation_file(violation, self.path.as_path()))
            .collect()
    }
}

impl WorkspaceValidation {
    pub fn valid(&self) -> bool {
        self.io_violations.is_empty() && self.files.iter().all(|file| file.report.valid)
    }

    /// Every violation in one report, each tagged with `related.file`.
    pub fn combined(&self) -> ValidationReport {
        let violations = self
            .files
            .iter()
            .flat_map(FileValidation::tagged_violations)
            .chain(self.io_violations.iter().cloned())
            .collect();
        ValidationReport::from_violations(violations)
    }
}

/// Validates every `.json`/`.yaml`/`.yml` file below `workspace_root`.
/// Unreadable directories and files are recorded, not fatal. Symlinked
/// files are read; symlinked directories are not descended into.
pub fn validate_workspace(workspace_root: impl AsRef<Path>, options: ValidateOptions) -> WorkspaceValidation {
    let root = workspace_root.as_ref();
    let mut validation = WorkspaceValidation::default();

    let mut pending = vec![root.to_path_buf()];
    while let Some(current) = pending.pop() {
        let entries = match fs::read_dir(&current) {
            Ok(entries) => entries,
            Err(error) => {
                validation.io_violations.push(io_violation(
                    format!("read_dir failed: {error}"),
                    current.as_path(),
                ));
                continue;
            }
        };

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(error) => {
                    validation.io_violations.push(io_violation(
                        format!("read_dir entry failed: {error}"),
                        current.as_path(),
                    ));
                    continue;
                }
            };

            // `DirEntry::file_type` does not follow symlinks, so a link back
            // to an ancestor is never walked twice.
            let file_type = match entry.file_type() {
                Ok(file_type) => file_type,
                Err(error) => {
                    validation.io_violations.push(io_violation(
                        format!("file type lookup failed: {error}"),
                        entry.path().as_path(),
                    ));
                    continue;
                }
            };
            let path = entry.path();
            if file_type.is_dir() {
                pending.push(path);
                continue;
            }
            if file_type.is_symlink() && path.is_dir() {
                tracing::debug!(link = %path.display(), "skipping directory symlink");
                continue;
            }
            if !is_document_candidate(path.as_path()) {
                continue;
            }

            let text = match fs::read_to_string(&path) {
                Ok(text) => text,
                Err(error) => {
                    validation.io_violations.push(io_violation(
                        format!("read file failed: {error}"),
                        path.as_path(),
                    ));
                    continue;
                }
            };

            let report = validate_document_text(text.as_str(), options);
            tracing::debug!(
                file = %path.display(),
                valid = report.valid,
                violations = report.violations.len(),
                "validated workspace file"
            );
            validation.files.push(FileValidation { path, report });
        }
    }

    validation.files.sort_by(|left, right| left.path.cmp(&right.path));
    Violation::sort_stable(&mut validation.io_violations);
    validation
}

fn is_document_candidate(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("json") | Some("yaml") | Some("yml")
    )
}

fn io_violation(message: String, path: &Path) -> Violation {
    Violation {
        related: Some(json!({ "file": path.display().to_string() })),
        ..Violation::error(ViolationKind::IoError, FieldPath::root(), message)
    }
}

fn attach_violation_file(mut violation: Violation, path: &Path) -> Violation {
    let file = Value::String(path.display().to_string());
    violation.related = Some(match violation.related.take() {
        Some(Value::Object(mut object)) => {
            object.insert("file".to_string(), file);
            Value::Object(object)
        }
        Some(other) => {
            let mut object = Map::new();
            object.insert("file".to_string(), file);
            object.insert("details".to_string(), other);
            Value::Object(object)
        }
        None => {
            let mut object = Map::new();
            object.insert("file".to_string(), file);
            Value::Object(object)
        }
    });
    violation
}

#[cfg(test)]
#[path = "workspace_test.rs"]
mod tests;
