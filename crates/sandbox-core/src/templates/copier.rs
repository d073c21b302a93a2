//! Copy bundled template trees onto disk

use crate::error::{Result, SandboxError};
use crate::templates::bundle::EmbeddedFs;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Mode for created directories (rwxr-xr-x)
pub const DIR_MODE: u32 = 0o755;

/// Mode for copied files (rw-r--r--)
pub const FILE_MODE: u32 = 0o644;

/// Fail if a file, directory or symlink (even a dangling one) already exists
/// at `path`.
///
/// This is a plain existence probe; nothing stops another process from
/// creating the path before we do.
pub async fn ensure_absent(path: &Path) -> Result<()> {
    if fs::symlink_metadata(path).await.is_ok() {
        return Err(SandboxError::TargetExists(path.to_path_buf()));
    }
    Ok(())
}

/// Create a single directory. The parent must already exist.
pub async fn create_directory(path: &Path) -> Result<()> {
    let mut builder = fs::DirBuilder::new();
    #[cfg(unix)]
    builder.mode(DIR_MODE);
    builder
        .create(path)
        .await
        .map_err(|e| SandboxError::io("create directory", path, e))?;
    tracing::debug!(path = %path.display(), "created directory");
    Ok(())
}

async fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    use tokio::io::AsyncWriteExt;

    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(FILE_MODE);

    let mut file = options
        .open(path)
        .await
        .map_err(|e| SandboxError::io("create file", path, e))?;
    file.write_all(contents)
        .await
        .map_err(|e| SandboxError::io("write", path, e))?;
    file.flush()
        .await
        .map_err(|e| SandboxError::io("write", path, e))?;

    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(())
}

/// Copy the bundle subtree at `source` into the existing directory `target`.
///
/// The tree is walked depth-first: each directory is created before its
/// children are copied. Nothing is cleaned up on failure, so an error part way
/// through leaves the files written so far in place.
///
/// Returns the paths written, relative to `target`.
pub async fn copy_tree(assets: &EmbeddedFs, source: &str, target: &Path) -> Result<Vec<PathBuf>> {
    let mut copied = Vec::new();
    let mut pending = vec![(source.trim_end_matches('/').to_string(), target.to_path_buf())];

    while let Some((src_dir, dest_dir)) = pending.pop() {
        let entries = assets.read_dir(&src_dir)?;

        // Reverse so the stack pops entries in name order
        for entry in entries.into_iter().rev() {
            let src_path = format!("{}/{}", src_dir, entry.name);
            let dest_path = dest_dir.join(&entry.name);

            if entry.is_dir {
                create_directory(&dest_path).await?;
                pending.push((src_path, dest_path));
            } else {
                let contents = assets.read_file(&src_path)?;
                write_file(&dest_path, contents).await?;
                copied.push(relative_to(&dest_path, target));
            }
        }
    }

    Ok(copied)
}

/// Write `contents` to `path`, replacing anything already there
pub async fn write_rendered(path: &Path, contents: &str) -> Result<()> {
    write_file(path, contents.as_bytes()).await
}

fn relative_to(path: &Path, base: &Path) -> PathBuf {
    path.strip_prefix(base).unwrap_or(path).to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::bundle::ASSETS;

    #[tokio::test]
    async fn test_ensure_absent_detects_files_and_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("taken-dir");
        let file = tmp.path().join("taken-file");
        std::fs::create_dir(&dir).unwrap();
        std::fs::write(&file, "x").unwrap();

        assert!(matches!(
            ensure_absent(&dir).await,
            Err(SandboxError::TargetExists(_))
        ));
        assert!(matches!(
            ensure_absent(&file).await,
            Err(SandboxError::TargetExists(_))
        ));
        assert!(ensure_absent(&tmp.path().join("free")).await.is_ok());
    }

    #[tokio::test]
    async fn test_create_directory_requires_parent() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("missing").join("child");

        let err = create_directory(&nested).await.unwrap_err();
        assert!(matches!(
            err,
            SandboxError::Io {
                action: "create directory",
                ..
            }
        ));
        assert!(err.to_string().starts_with("Failed to create directory"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_ensure_absent_detects_dangling_symlink() {
        let tmp = tempfile::tempdir().unwrap();
        let link = tmp.path().join("demo");
        std::os::unix::fs::symlink(tmp.path().join("gone"), &link).unwrap();

        assert!(matches!(
            ensure_absent(&link).await,
            Err(SandboxError::TargetExists(p)) if p == link
        ));
    }

    #[tokio::test]
    async fn test_copy_tree_mirrors_bundle() {
        let tmp = tempfile::tempdir().unwrap();
        let copied = copy_tree(&ASSETS, "docker/mysql", tmp.path()).await.unwrap();

        let expected = ASSETS.files_under("docker/mysql");
        assert_eq!(copied.len(), expected.len());
        for (rel, contents) in expected {
            let on_disk = std::fs::read(tmp.path().join(rel)).unwrap();
            assert_eq!(on_disk, contents, "{} differs", rel);
        }
    }

    #[tokio::test]
    async fn test_copy_tree_missing_source_writes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let err = copy_tree(&ASSETS, "docker/oracle", tmp.path())
            .await
            .unwrap_err();

        assert!(matches!(err, SandboxError::MissingAsset(_)));
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_copy_tree_applies_modes() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir().unwrap();
        copy_tree(&ASSETS, "docker/postgres", tmp.path()).await.unwrap();

        let dir_mode = std::fs::metadata(tmp.path().join("conf.d"))
            .unwrap()
            .permissions()
            .mode();
        let file_mode = std::fs::metadata(tmp.path().join("postgres/init.sql"))
            .unwrap()
            .permissions()
            .mode();

        // umask can only remove bits
        assert_eq!(dir_mode & 0o777 & !DIR_MODE, 0);
        assert_eq!(file_mode & 0o777 & !FILE_MODE, 0);
        assert_ne!(dir_mode & 0o700, 0);
    }
}
