//! Project synthesis - materializes a template onto disk
//!
//! Every call allocates a fresh identifier and directory, so concurrent
//! synthesis never shares mutable state beyond the filesystem namespace.
//! A failed call leaves any partially written directory behind; its id is
//! never handed out, so the residue is only reachable by housekeeping.

use crate::models::Project;
use crate::services::templates::{ProjectType, TemplateRegistry};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("failed to create project directory {path}: {source}")]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to render template for {path}: {source}")]
    Render {
        path: &'static str,
        #[source]
        source: tera::Error,
    },
    #[error("failed to write {path}: {source}")]
    TemplateWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SynthesisError {
    fn directory_create(path: PathBuf) -> impl FnOnce(std::io::Error) -> Self {
        move |source| SynthesisError::DirectoryCreate { path, source }
    }

    fn template_write(path: PathBuf) -> impl FnOnce(std::io::Error) -> Self {
        move |source| SynthesisError::TemplateWrite { path, source }
    }
}

/// Materializes projects from the template registry.
#[derive(Clone)]
pub struct ProjectGenerator {
    registry: Arc<TemplateRegistry>,
    projects_dir: PathBuf,
}

impl ProjectGenerator {
    pub fn new(registry: Arc<TemplateRegistry>, projects_dir: PathBuf) -> Self {
        Self {
            registry,
            projects_dir,
        }
    }

    /// Generate a project of `type_key` under a fresh unique directory.
    ///
    /// Files are rendered and fully written in the order the template
    /// declares them; on any failure the whole operation fails.
    #[tracing::instrument(name = "Synthesize project.", skip(self, description))]
    pub fn synthesize(
        &self,
        type_key: &str,
        description: &str,
        name: &str,
    ) -> Result<Project, SynthesisError> {
        let project_type = ProjectType::from_key(type_key);
        let id = Uuid::new_v4();
        let root = self.projects_dir.join(id.to_string());

        fs::create_dir_all(&root).map_err(SynthesisError::directory_create(root.clone()))?;

        let mut files = Vec::new();
        for file in self.registry.files_for(project_type) {
            let content = self
                .registry
                .render(file, name, description)
                .map_err(|source| SynthesisError::Render {
                    path: file.path,
                    source,
                })?;

            let full_path = root.join(file.path);
            if let Some(parent) = full_path.parent() {
                fs::create_dir_all(parent)
                    .map_err(SynthesisError::template_write(full_path.clone()))?;
            }
            fs::write(&full_path, content)
                .map_err(SynthesisError::template_write(full_path.clone()))?;

            files.push(file.path.to_string());
        }

        tracing::info!(project_id = %id, files = files.len(), "project synthesized");

        Ok(Project {
            id,
            name: name.to_string(),
            files,
            root,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator(dir: &tempfile::TempDir) -> ProjectGenerator {
        let registry = Arc::new(TemplateRegistry::new().unwrap());
        ProjectGenerator::new(registry, dir.path().to_path_buf())
    }

    #[test]
    fn test_synthesize_writes_declared_files() {
        let dir = tempfile::tempdir().unwrap();
        let project = generator(&dir)
            .synthesize("html", "тестовое описание", "Тестовый проект")
            .unwrap();

        assert_eq!(
            project.files,
            vec!["index.html", "styles.css", "script.js", "README.md"]
        );
        for file in &project.files {
            let content = fs::read_to_string(project.root.join(file)).unwrap();
            assert!(!content.is_empty(), "{} is empty", file);
        }

        let index = fs::read_to_string(project.root.join("index.html")).unwrap();
        assert!(index.contains("Тестовый проект"));
        assert!(index.contains("тестовое описание"));
    }

    #[test]
    fn test_unknown_type_uses_html_template() {
        let dir = tempfile::tempdir().unwrap();
        let project = generator(&dir)
            .synthesize("flutter", "описание", "проект")
            .unwrap();
        assert!(project.root.join("index.html").exists());
    }

    #[test]
    fn test_each_call_gets_a_distinct_directory() {
        let dir = tempfile::tempdir().unwrap();
        let generator = generator(&dir);
        let first = generator.synthesize("html", "a", "a").unwrap();
        let second = generator.synthesize("html", "a", "a").unwrap();
        assert_ne!(first.id, second.id);
        assert_ne!(first.root, second.root);
    }
}
