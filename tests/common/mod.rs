use siteforge::configuration::{Settings, StorageSettings};

pub struct TestApp {
    pub address: String,
    pub storage: StorageSettings,
    // Keeps the per-test storage directories alive until the app is dropped.
    _workdir: tempfile::TempDir,
}

pub async fn spawn_app() -> TestApp {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let workdir = tempfile::tempdir().expect("Failed to create storage dir");
    let storage = StorageSettings {
        projects_dir: workdir.path().join("projects"),
        temp_dir: workdir.path().join("temp"),
    };
    let settings = Settings {
        app_host: "127.0.0.1".to_string(),
        app_port: port,
        public_url: address.clone(),
        storage: storage.clone(),
    };

    let server = siteforge::startup::run(listener, settings).expect("Failed to bind address.");
    let _ = tokio::spawn(server);
    println!("Used Port: {}", port);

    TestApp {
        address,
        storage,
        _workdir: workdir,
    }
}
