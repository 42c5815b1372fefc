//! End-to-end tests for the `sola` binary.
//!
//! Every invocation runs with a throwaway `HOME` and config directory, and
//! without any `SOLA_*` variable, so the developer's own key file and
//! settings never leak in.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use assert_cmd::cargo;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// An isolated `sola` command rooted at `home`.
fn sola(home: &Path) -> Command {
    let mut cmd = cargo::cargo_bin_cmd!("sola");
    cmd.current_dir(home)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("OPENAI_API_KEY")
        .env_remove("OPENAI_BASE_URL")
        .env_remove("RUST_LOG")
        .write_stdin("");
    for (key, _) in std::env::vars_os() {
        if key.to_string_lossy().starts_with("SOLA_") {
            cmd.env_remove(key);
        }
    }
    cmd
}

fn completion_body(content: &str) -> serde_json::Value {
    json!({ "choices": [{ "message": { "role": "assistant", "content": content } }] })
}

// ── help / version ────────────────────────────────────────────────────────────

#[test]
fn test_help_flag() {
    let temp = TempDir::new().unwrap();
    sola(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("build"))
        .stdout(predicate::str::contains("auth"));
}

#[test]
fn test_version_flag() {
    let temp = TempDir::new().unwrap();
    sola(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_arguments_shows_usage() {
    let temp = TempDir::new().unwrap();
    sola(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

// ── init ──────────────────────────────────────────────────────────────────────

#[test]
fn test_init_creates_skeleton() {
    let temp = TempDir::new().unwrap();
    sola(temp.path())
        .args(["init", "ticket-triage"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Forging SOLA project: ticket-triage"))
        .stdout(predicate::str::contains("cd ticket-triage"));

    let root = temp.path().join("ticket-triage");
    for dir in ["app/features/health", "app/shared", "test/evals", ".github/workflows"] {
        assert!(root.join(dir).is_dir(), "missing {dir}");
    }
    for marker in [
        "app/features/health/__init__.py",
        "app/shared/__init__.py",
        "test/evals/__init__.py",
    ] {
        assert_eq!(fs::read_to_string(root.join(marker)).unwrap(), "");
    }
    assert!(!root.join(".github/workflows/__init__.py").exists());

    for file in [
        "Makefile",
        "README.md",
        "pyproject.toml",
        "app/main.py",
        "app/features/health/router.py",
        "Dockerfile",
        "docker-compose.yml",
    ] {
        let text = fs::read_to_string(root.join(file)).unwrap();
        assert!(!text.contains("{{"), "{file} kept a placeholder");
    }
    let main = fs::read_to_string(root.join("app/main.py")).unwrap();
    assert!(main.contains("FastAPI(title=\"ticket-triage\")"));
    let pyproject = fs::read_to_string(root.join("pyproject.toml")).unwrap();
    assert!(pyproject.contains("name = \"ticket-triage\""));
}

#[test]
fn test_init_template_dir_overrides_builtins() {
    let temp = TempDir::new().unwrap();
    let templates = temp.path().join("templates");
    fs::create_dir(&templates).unwrap();
    for name in [
        "Makefile.j2",
        "README.md.j2",
        "pyproject.toml.j2",
        "main.py.j2",
        "health_router.py.j2",
        "Dockerfile.j2",
        "docker-compose.yml.j2",
    ] {
        fs::write(templates.join(name), "custom {{ project_name_snake }}\n").unwrap();
    }

    sola(temp.path())
        .env("SOLA_PATHS__TEMPLATES_DIR", &templates)
        .args(["init", "my-shop"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(temp.path().join("my-shop/Dockerfile")).unwrap(),
        "custom my_shop\n"
    );
}

#[test]
fn test_init_twice_keeps_user_files() {
    let temp = TempDir::new().unwrap();
    sola(temp.path()).args(["init", "shop"]).assert().success();

    let services = temp.path().join("shop/app/services.py");
    fs::write(&services, "def run(): ...\n").unwrap();

    sola(temp.path()).args(["init", "shop"]).assert().success();
    assert_eq!(fs::read_to_string(services).unwrap(), "def run(): ...\n");
}

#[test]
fn test_init_with_missing_templates_warns_and_succeeds() {
    let temp = TempDir::new().unwrap();
    let templates = temp.path().join("templates");
    fs::create_dir(&templates).unwrap();
    fs::write(templates.join("main.py.j2"), "# {{ project_name }}\n").unwrap();

    sola(temp.path())
        .env("SOLA_PATHS__TEMPLATES_DIR", &templates)
        .args(["init", "lean"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dockerfile.j2"))
        .stdout(predicate::str::contains("6 of 7 templates skipped"));

    let root = temp.path().join("lean");
    assert_eq!(fs::read_to_string(root.join("app/main.py")).unwrap(), "# lean\n");
    assert!(!root.join("Dockerfile").exists());
    assert!(root.join("app/shared/__init__.py").exists());
}

#[test]
fn test_init_invalid_name_is_user_error() {
    let temp = TempDir::new().unwrap();
    sola(temp.path())
        .args(["init", ".hidden"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid project name"));
    assert!(!temp.path().join(".hidden").exists());
}

#[test]
fn test_init_requires_name() {
    let temp = TempDir::new().unwrap();
    sola(temp.path()).arg("init").assert().code(2);
}

// ── auth ──────────────────────────────────────────────────────────────────────

#[test]
fn test_auth_writes_key_file() {
    let temp = TempDir::new().unwrap();
    sola(temp.path())
        .args(["auth", "--api-key", "  sk-test-123  "])
        .assert()
        .success()
        .stdout(predicate::str::contains(".sola_config"));

    let stored = fs::read_to_string(temp.path().join(".sola_config")).unwrap();
    assert_eq!(stored, "OPENAI_API_KEY=sk-test-123\n");
}

#[test]
fn test_auth_without_terminal_fails() {
    let temp = TempDir::new().unwrap();
    sola(temp.path())
        .arg("auth")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("--api-key"));
    assert!(!temp.path().join(".sola_config").exists());
}

#[test]
fn test_auth_blank_key_is_rejected() {
    let temp = TempDir::new().unwrap();
    sola(temp.path())
        .args(["auth", "--api-key", "   "])
        .assert()
        .code(2);
    assert!(!temp.path().join(".sola_config").exists());
}

// ── build ─────────────────────────────────────────────────────────────────────

#[test]
fn test_build_without_key_is_configuration_error() {
    let temp = TempDir::new().unwrap();
    sola(temp.path())
        .args(["build", "--task", "rank leads"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("No API key available"))
        .stderr(predicate::str::contains("sola auth"));
    assert!(!temp.path().join("app").exists());
}

#[test]
fn test_build_empty_task_is_user_error() {
    let temp = TempDir::new().unwrap();
    sola(temp.path())
        .env("OPENAI_API_KEY", "sk-test")
        .args(["build", "-t", "   "])
        .assert()
        .code(2);
}

#[test]
fn test_build_unreachable_endpoint_writes_nothing() {
    let temp = TempDir::new().unwrap();
    sola(temp.path())
        .env("OPENAI_API_KEY", "sk-test")
        .env("OPENAI_BASE_URL", "http://127.0.0.1:9/v1")
        .args(["build", "--task", "rank leads"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Remote completion failed"));
    assert!(!temp.path().join("app/services.py").exists());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_build_writes_unfenced_services_file() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer sk-from-file"))
        .and(body_string_contains("Standardized Orchestration"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion_body("```python\nprint(1)\n```")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".sola_config"), "OPENAI_API_KEY=\"sk-from-file\"\n").unwrap();

    let project = temp.path().join("shop");
    sola(temp.path())
        .env("OPENAI_BASE_URL", server.uri())
        .args(["build", "-t", "print one", "--project-dir"])
        .arg(&project)
        .assert()
        .success()
        .stdout(predicate::str::contains("Logic generated at"));

    assert_eq!(
        fs::read_to_string(project.join("app/services.py")).unwrap(),
        "print(1)"
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_build_reports_api_error_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": { "message": "Incorrect API key provided" }
        })))
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    sola(temp.path())
        .env("OPENAI_API_KEY", "sk-bad")
        .env("OPENAI_BASE_URL", server.uri())
        .args(["build", "-t", "anything"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Incorrect API key provided"));
    assert!(!temp.path().join("app").exists());
}

// ── config ────────────────────────────────────────────────────────────────────

#[test]
fn test_config_path_honours_flag() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("custom.toml");
    sola(temp.path())
        .arg("--config")
        .arg(&file)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.toml"));
}

#[test]
fn test_config_init_then_list() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("conf/sola.toml");
    let with_file = |args: &[&str]| {
        let mut cmd = sola(temp.path());
        cmd.arg("--config").arg(&file).args(args);
        cmd
    };

    with_file(&["config", "list"]).assert().code(4);

    with_file(&["config", "init"]).assert().success();
    assert!(file.is_file());

    with_file(&["config", "init"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("--force"));
    with_file(&["config", "init", "--force"]).assert().success();

    with_file(&["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[generation]"))
        .stdout(predicate::str::contains("gpt-4o-mini"));
}

#[test]
fn test_config_init_uses_platform_path() {
    let temp = TempDir::new().unwrap();
    sola(temp.path()).args(["config", "init"]).assert().success();
    assert!(temp.path().join(".config/sola/config.toml").is_file());
}

#[test]
fn test_config_file_values_are_used() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("sola.toml");
    fs::write(&file, "[generation]\nmodel = \"gpt-4o\"\n").unwrap();

    sola(temp.path())
        .arg("--config")
        .arg(&file)
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("model = \"gpt-4o\""));
}

#[test]
fn test_invalid_config_file_exits_with_configuration_code() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("broken.toml");
    fs::write(&file, "[generation\nmodel = ").unwrap();

    sola(temp.path())
        .arg("--config")
        .arg(&file)
        .args(["config", "list"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

// ── completions ───────────────────────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    let temp = TempDir::new().unwrap();
    sola(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_sola"));
}
