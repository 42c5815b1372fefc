//! Integration tests: core services wired to the real adapters.

use std::path::Path;
use std::sync::Arc;

use serde_json::json;
use sola_adapters::{
    ConfigFileCredentials, DirectoryStore, InMemoryStore, LocalFilesystem, MemoryFilesystem,
    OpenAiClient,
};
use sola_core::{
    domain::{ARCHITECTURE_SPEC, ENGINEERING_SPEC},
    prelude::*,
};
use tempfile::TempDir;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

const STANDARD_TEMPLATES: [&str; 7] = [
    "Makefile.j2",
    "README.md.j2",
    "pyproject.toml.j2",
    "main.py.j2",
    "health_router.py.j2",
    "Dockerfile.j2",
    "docker-compose.yml.j2",
];

fn full_store() -> InMemoryStore {
    let store = InMemoryStore::new();
    for name in STANDARD_TEMPLATES {
        store.insert(name, format!("{name} for {{{{ project_name }}}}\n")).unwrap();
    }
    store
}

#[test]
fn scaffold_creates_the_standard_skeleton() {
    let fs = MemoryFilesystem::new();
    let service = ScaffoldService::new(Box::new(full_store()), Arc::new(fs.clone()));

    let report = service.scaffold("shop", "/work").unwrap();

    assert!(report.is_complete());
    assert_eq!(report.rendered.len(), 7);
    for dir in ["app/features/health", "app/shared", "test/evals", ".github/workflows"] {
        assert!(fs.is_dir(Path::new("/work/shop").join(dir)), "{dir}");
    }
    for marker in [
        "app/features/health/__init__.py",
        "app/shared/__init__.py",
        "test/evals/__init__.py",
    ] {
        assert_eq!(fs.content(Path::new("/work/shop").join(marker)).as_deref(), Some(""));
    }
    assert!(!fs.exists(Path::new("/work/shop/.github/workflows/__init__.py")));
    assert_eq!(
        fs.content("/work/shop/app/features/health/router.py").as_deref(),
        Some("health_router.py.j2 for shop\n")
    );
}

#[test]
fn scaffold_twice_keeps_existing_files() {
    let fs = MemoryFilesystem::new();
    let service = ScaffoldService::new(Box::new(full_store()), Arc::new(fs.clone()));

    service.scaffold("shop", "/work").unwrap();
    fs.write_file(Path::new("/work/shop/app/shared/__init__.py"), "X = 1\n")
        .unwrap();
    fs.write_file(Path::new("/work/shop/app/shared/db.py"), "pool = None\n")
        .unwrap();

    let second = service.scaffold("shop", "/work").unwrap();

    assert!(second.markers.is_empty());
    assert_eq!(
        fs.content("/work/shop/app/shared/__init__.py").as_deref(),
        Some("X = 1\n")
    );
    assert_eq!(
        fs.content("/work/shop/app/shared/db.py").as_deref(),
        Some("pool = None\n")
    );
}

#[test]
fn one_missing_template_only_skips_that_file() {
    let dir = TempDir::new().unwrap();
    let templates = dir.path().join("templates");
    std::fs::create_dir(&templates).unwrap();
    for name in STANDARD_TEMPLATES.iter().filter(|n| **n != "Dockerfile.j2") {
        std::fs::write(templates.join(name), "name = \"{{project_name}}\"\n").unwrap();
    }

    let service = ScaffoldService::new(
        Box::new(DirectoryStore::new(&templates)),
        Arc::new(LocalFilesystem::new()),
    );
    let report = service.scaffold("svc", dir.path()).unwrap();

    assert_eq!(report.skipped, vec!["Dockerfile.j2".to_string()]);
    assert_eq!(report.rendered.len(), 6);
    assert!(!dir.path().join("svc/Dockerfile").exists());
    assert_eq!(
        std::fs::read_to_string(dir.path().join("svc/pyproject.toml")).unwrap(),
        "name = \"svc\"\n"
    );
}

#[test]
fn stored_key_is_resolved_later() {
    let home = TempDir::new().unwrap();
    let file = ConfigFileCredentials::in_home(home.path());

    let writer = CredentialResolver::new(Box::new(file.clone()));
    writer.store("xyz").unwrap();

    let reader = CredentialResolver::new(Box::new(file.clone())).with_source(Box::new(file));
    assert_eq!(reader.resolve().unwrap().expose(), "xyz");
}

#[test]
fn quoted_key_in_config_file() {
    let home = TempDir::new().unwrap();
    let file = ConfigFileCredentials::in_home(home.path());
    std::fs::write(file.path(), "OPENAI_API_KEY=\"abc\"").unwrap();

    assert_eq!(file.try_get().unwrap().unwrap().expose(), "abc");
}

fn generate_service(base_url: String, home: &Path, specs: &Path) -> GenerateService {
    let file = ConfigFileCredentials::in_home(home);
    std::fs::write(file.path(), "OPENAI_API_KEY=sk-file\n").unwrap();
    let credentials = CredentialResolver::new(Box::new(file.clone())).with_source(Box::new(file));

    GenerateService::new(
        Arc::new(LocalFilesystem::new()),
        Box::new(OpenAiClient::new(base_url)),
        credentials,
        GenerationSettings {
            standards: StandardsSource::Directory(specs.to_path_buf()),
            ..GenerationSettings::default()
        },
    )
}

fn write_specs(root: &Path) -> std::path::PathBuf {
    let specs = root.join("specs");
    std::fs::create_dir(&specs).unwrap();
    std::fs::write(specs.join(ARCHITECTURE_SPEC), "feature folders").unwrap();
    std::fs::write(specs.join(ENGINEERING_SPEC), "evals first").unwrap();
    specs
}

#[tokio::test]
async fn generated_code_is_written_without_fences() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "content": "```python\nprint(1)\n```" } }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let root = TempDir::new().unwrap();
    let specs = write_specs(root.path());
    let project = root.path().join("proj");
    std::fs::create_dir(&project).unwrap();

    let service = generate_service(server.uri(), root.path(), &specs);
    let path = service.generate("count words", &project).await.unwrap();

    assert_eq!(path, project.join("app/services.py"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "print(1)");
}

#[tokio::test]
async fn network_error_writes_nothing() {
    let root = TempDir::new().unwrap();
    let specs = write_specs(root.path());
    let project = root.path().join("proj");
    std::fs::create_dir(&project).unwrap();

    let service = generate_service("http://127.0.0.1:9".into(), root.path(), &specs);
    let err = service.generate("count words", &project).await.unwrap_err();

    assert_eq!(err.category(), ErrorCategory::RemoteCall);
    assert!(!project.join("app/services.py").exists());
    assert!(!project.join("app").exists());
}

#[tokio::test]
async fn missing_standards_is_filesystem_failure() {
    let root = TempDir::new().unwrap();
    let service = generate_service(
        "http://127.0.0.1:9".into(),
        root.path(),
        &root.path().join("nowhere"),
    );

    let err = service.generate("task", root.path()).await.unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Filesystem);
    assert!(err.to_string().contains(ARCHITECTURE_SPEC));
}
