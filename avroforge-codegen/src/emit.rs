//! File map emission.

use crate::error::CodegenError;
use crate::linker::FileMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes every unit of a file map below `base`.
///
/// Parent directories are created as needed and existing files are
/// overwritten.
///
/// # Arguments
/// * `files` - Relative path → source
/// * `base` - Target directory
///
/// # Returns
/// The paths written, in file map order.
///
/// # Errors
/// Returns `CodegenError::Io` if a directory or file cannot be written.
pub fn emit_file_map(files: &FileMap, base: &Path) -> Result<Vec<PathBuf>, CodegenError> {
    let mut written = Vec::with_capacity(files.len());
    for (relative, source) in files {
        let path = base.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, source)?;
        tracing::trace!("wrote {}", path.display());
        written.push(path);
    }
    tracing::info!("emitted {} files to {}", written.len(), base.display());
    Ok(written)
}

/// Readies the target directory for emission.
///
/// A missing target is left alone. An existing target is deleted when
/// `force` is set.
///
/// # Errors
/// Returns `CodegenError::TargetExists` if the target exists without
/// `force`, or `CodegenError::Io` if it cannot be deleted.
pub fn prepare_target(base: &Path, force: bool) -> Result<(), CodegenError> {
    if !base.exists() {
        return Ok(());
    }
    if !force {
        return Err(CodegenError::TargetExists {
            path: base.display().to_string(),
        });
    }
    tracing::warn!("removing existing target {}", base.display());
    if base.is_dir() {
        fs::remove_dir_all(base)?;
    } else {
        fs::remove_file(base)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_creates_directories() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let target = dir.path().join("build");
        let mut files = FileMap::new();
        files.insert("mod.rs".to_string(), "pub mod com;\n".to_string());
        files.insert("com/acme/mod.rs".to_string(), "pub struct A;\n".to_string());

        let written = emit_file_map(&files, &target).expect("Failed to emit");
        assert_eq!(written.len(), 2);
        assert_eq!(
            fs::read_to_string(target.join("com/acme/mod.rs")).expect("Failed to read"),
            "pub struct A;\n"
        );
        assert!(target.join("mod.rs").is_file());
    }

    #[test]
    fn test_prepare_target() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let target = dir.path().join("build");
        prepare_target(&target, false).expect("Failed to accept missing target");

        fs::create_dir_all(target.join("old")).expect("Failed to create target");
        assert!(matches!(
            prepare_target(&target, false),
            Err(CodegenError::TargetExists { .. })
        ));
        prepare_target(&target, true).expect("Failed to clear target");
        assert!(!target.exists());
    }
}
