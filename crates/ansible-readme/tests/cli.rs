use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_ansible-readme")));
    cmd.env_remove("ANSIBLE_README_LOG");
    cmd
}

fn make_role(root: &Path, name: &str, defaults: &str) {
    for dir in ["defaults", "meta", "tasks"] {
        let path = root.join(name).join(dir);
        fs::create_dir_all(&path).unwrap();
        fs::write(path.join("main.yml"), "---\n").unwrap();
    }
    fs::write(root.join(name).join("defaults").join("main.yml"), defaults).unwrap();
}

// -- generate --

#[test]
fn generate_writes_readme() {
    let dir = TempDir::new().unwrap();
    make_role(dir.path(), "nginx", "---\nnginx_port: 80\n");
    let role = dir.path().join("nginx");

    cmd()
        .arg("generate")
        .arg(&role)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let readme = fs::read_to_string(role.join("README.md")).unwrap();
    assert!(readme.starts_with("# nginx\n"));
    assert!(readme.contains("### nginx_port"));
    assert!(role.join("docs").join("main.yml").exists());
}

#[test]
fn generate_refuses_existing_readme() {
    let dir = TempDir::new().unwrap();
    make_role(dir.path(), "nginx", "---\n");
    let role = dir.path().join("nginx");

    cmd().arg("generate").arg(&role).assert().success();
    cmd()
        .arg("generate")
        .arg(&role)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn generate_force_overwrites_readme() {
    let dir = TempDir::new().unwrap();
    make_role(dir.path(), "nginx", "---\n");
    let role = dir.path().join("nginx");
    fs::write(role.join("README.md"), "stale").unwrap();

    cmd()
        .args(["generate", "--force"])
        .arg(&role)
        .assert()
        .success();

    let readme = fs::read_to_string(role.join("README.md")).unwrap();
    assert_ne!(readme, "stale");
}

#[test]
fn generate_multiple_roles() {
    let dir = TempDir::new().unwrap();
    for name in ["db", "web"] {
        make_role(dir.path(), name, "---\n");
    }

    cmd().arg("generate").arg(dir.path()).assert().success();

    for name in ["db", "web"] {
        let readme = fs::read_to_string(dir.path().join(name).join("README.md")).unwrap();
        assert!(readme.starts_with(&format!("# {name}\n")));
    }
}

#[test]
fn generate_with_custom_name_and_template() {
    let dir = TempDir::new().unwrap();
    make_role(dir.path(), "nginx", "---\nnginx_port: 80\n");
    let role = dir.path().join("nginx");
    let template = dir.path().join("custom.md.j2");
    fs::write(&template, "Role: {{ extras.role_name }}\n").unwrap();

    cmd()
        .arg("generate")
        .arg(&role)
        .arg("--template")
        .arg(&template)
        .args(["--name", "DOCS.md"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(role.join("DOCS.md")).unwrap(),
        "Role: nginx\n"
    );
    assert!(!role.join("README.md").exists());
}

#[test]
fn generate_missing_template_fails_before_writing() {
    let dir = TempDir::new().unwrap();
    make_role(dir.path(), "nginx", "---\n");
    let role = dir.path().join("nginx");

    cmd()
        .arg("generate")
        .arg(&role)
        .args(["-t", "does-not-exist.j2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));

    assert!(!role.join("docs").exists());
    assert!(!role.join("README.md").exists());
}

#[test]
fn generate_debug_shows_rendered_readme() {
    let dir = TempDir::new().unwrap();
    make_role(dir.path(), "nginx", "---\n");

    cmd()
        .args(["--debug", "generate"])
        .arg(dir.path().join("nginx"))
        .assert()
        .success()
        .stdout(predicate::str::contains("contains a single role"))
        .stdout(predicate::str::contains("README for nginx will look like"));
}

// -- init --

#[test]
fn init_on_empty_directory_fails() {
    let dir = TempDir::new().unwrap();

    cmd()
        .arg("init")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not contain any Ansible roles"));
}

#[test]
fn init_creates_docs_stub() {
    let dir = TempDir::new().unwrap();
    make_role(dir.path(), "nginx", "---\nnginx_port: 80\n");
    let role = dir.path().join("nginx");

    cmd()
        .arg("init")
        .arg(&role)
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialised"));

    let stub = fs::read_to_string(role.join("docs").join("main.yml")).unwrap();
    assert!(stub.starts_with("---\n"));
    assert!(stub.contains("nginx_port:\n    help: TODO."));
    assert!(!role.join("README.md").exists());
}

#[test]
fn init_skips_existing_docs_without_force() {
    let dir = TempDir::new().unwrap();
    make_role(dir.path(), "nginx", "---\nnginx_port: 80\n");
    let role = dir.path().join("nginx");
    fs::create_dir(role.join("docs")).unwrap();
    fs::write(role.join("docs").join("main.yml"), "hand written").unwrap();

    cmd()
        .arg("init")
        .arg(&role)
        .assert()
        .success()
        .stdout(predicate::str::contains("skipping"));
    assert_eq!(
        fs::read_to_string(role.join("docs").join("main.yml")).unwrap(),
        "hand written"
    );

    cmd().args(["init", "--force"]).arg(&role).assert().success();
    assert!(fs::read_to_string(role.join("docs").join("main.yml"))
        .unwrap()
        .contains("nginx_port"));
}

#[test]
fn init_malformed_defaults_fails() {
    let dir = TempDir::new().unwrap();
    make_role(dir.path(), "nginx", "---\nnginx_port: [\n");

    cmd()
        .arg("init")
        .arg(dir.path().join("nginx"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse"));
}

#[test]
fn version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ansible-readme"));
}
