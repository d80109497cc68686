//! Idempotent project archival
//!
//! One archive per project id, built lazily and at most once for the life of
//! the artifact. Projects are immutable after synthesis, so a present archive
//! is never stale and never rebuilt.

use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("project {0} not found")]
    ProjectNotFound(String),
    #[error("failed to write archive: {0}")]
    Write(#[from] std::io::Error),
}

/// Compress `projects_dir/<project_id>` into `temp_dir/<project_id>.tar.gz`.
///
/// Entries are stored relative to the project root, so unpacking reproduces
/// the project's own tree rather than an id-named wrapper folder. The tarball
/// is written to a scratch path and renamed into place; the final path never
/// holds a partially written archive.
#[tracing::instrument(name = "Archive project.", skip(projects_dir, temp_dir))]
pub fn archive(
    projects_dir: &Path,
    temp_dir: &Path,
    project_id: &str,
) -> Result<PathBuf, ArchiveError> {
    let project_path = projects_dir.join(project_id);
    if !project_path.is_dir() {
        return Err(ArchiveError::ProjectNotFound(project_id.to_string()));
    }

    let archive_path = temp_dir.join(format!("{}.tar.gz", project_id));
    if archive_path.exists() {
        tracing::debug!(project_id, "archive already present, skipping rebuild");
        return Ok(archive_path);
    }

    fs::create_dir_all(temp_dir)?;
    let scratch_path = temp_dir.join(format!("{}.tar.gz.partial", project_id));

    let file = File::create(&scratch_path)?;
    let encoder = GzEncoder::new(file, Compression::default());
    let mut builder = tar::Builder::new(encoder);
    builder.append_dir_all(".", &project_path)?;
    builder.into_inner()?.finish()?;

    fs::rename(&scratch_path, &archive_path)?;
    tracing::info!(project_id, "archive written");

    Ok(archive_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;

    fn write_project(projects_dir: &Path, id: &str) {
        let root = projects_dir.join(id);
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("index.html"), "<html>тест</html>").unwrap();
        fs::write(root.join("styles.css"), "body {}").unwrap();
    }

    #[test]
    fn test_missing_project_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = archive(dir.path(), dir.path(), "no-such-id").unwrap_err();
        assert!(matches!(err, ArchiveError::ProjectNotFound(_)));
    }

    #[test]
    fn test_archive_is_idempotent() {
        let projects = tempfile::tempdir().unwrap();
        let temp = tempfile::tempdir().unwrap();
        write_project(projects.path(), "p1");

        let first = archive(projects.path(), temp.path(), "p1").unwrap();
        let mtime = fs::metadata(&first).unwrap().modified().unwrap();

        let second = archive(projects.path(), temp.path(), "p1").unwrap();
        assert_eq!(first, second);
        assert_eq!(
            mtime,
            fs::metadata(&second).unwrap().modified().unwrap(),
            "second call must not rewrite the archive"
        );
    }

    #[test]
    fn test_round_trip_reproduces_project_tree() {
        let projects = tempfile::tempdir().unwrap();
        let temp = tempfile::tempdir().unwrap();
        write_project(projects.path(), "p2");

        let archive_path = archive(projects.path(), temp.path(), "p2").unwrap();

        let unpacked = tempfile::tempdir().unwrap();
        let decoder = GzDecoder::new(File::open(archive_path).unwrap());
        tar::Archive::new(decoder).unpack(unpacked.path()).unwrap();

        for file in ["index.html", "styles.css"] {
            let original = fs::read(projects.path().join("p2").join(file)).unwrap();
            let restored = fs::read(unpacked.path().join(file)).unwrap();
            assert_eq!(original, restored, "{} differs after round trip", file);
        }
    }
}
