use std::path::{Path, PathBuf};

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Settings {
    pub app_host: String,
    pub app_port: u16,
    pub public_url: String,
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct StorageSettings {
    pub projects_dir: PathBuf,
    pub temp_dir: PathBuf,
}

impl StorageSettings {
    pub fn project_path(&self, project_id: &str) -> PathBuf {
        self.projects_dir.join(project_id)
    }

    pub fn archive_path(&self, project_id: &str) -> PathBuf {
        self.temp_dir.join(format!("{}.tar.gz", project_id))
    }

    /// Both roots must exist before the first request comes in.
    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.projects_dir)?;
        std::fs::create_dir_all(&self.temp_dir)
    }
}

impl Settings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.app_host, self.app_port)
    }

    pub fn download_url(&self, project_id: &str) -> String {
        format!("{}/download/{}", self.public_url, project_id)
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let mut settings = config::Config::default();

    // Add configuration values from a file named `configuration`
    // with the .yaml extension
    settings.merge(config::File::with_name("configuration"))?;

    settings.try_deserialize()
}

impl Default for StorageSettings {
    fn default() -> Self {
        StorageSettings {
            projects_dir: Path::new("projects").to_path_buf(),
            temp_dir: Path::new("temp").to_path_buf(),
        }
    }
}
