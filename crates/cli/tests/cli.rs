use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

fn write(root: &Path, rel: &str, content: &str) -> PathBuf {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}

fn lombokify(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("lombokify").unwrap();
    cmd.current_dir(cwd)
        .env_remove("LOMBOKIFY_ROOT")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn updates_eligible_files_and_prints_summary() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("java");
    let user = write(
        &root,
        "com/x/model/User.java",
        "package com.x.model;\n\n@Entity\npublic class User {\n}\n",
    );
    let login = write(
        &root,
        "com/x/dto/LoginRequest.java",
        "package com.x.dto;\n\npublic class LoginRequest {\n}\n",
    );
    write(
        &root,
        "com/x/service/Mailer.java",
        "package com.x.service;\n\npublic class Mailer {\n}\n",
    );

    let output = lombokify(tmp.path()).arg(&root).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        format!(
            "Updated: {}\nUpdated: {}\n\nTotal files updated: 2\n",
            login.display(),
            user.display()
        )
    );
    assert!(fs::read_to_string(&user).unwrap().contains("@Builder\npublic class User"));
}

#[test]
fn rerun_reports_zero() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("java");
    write(&root, "a/Payload.java", "package a;\n\npublic class Payload {\n}\n");

    lombokify(tmp.path()).arg(&root).assert().success();
    let output = lombokify(tmp.path()).arg(&root).output().unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "\nTotal files updated: 0\n");
}

#[test]
fn default_root_is_maven_source_dir() {
    let tmp = tempfile::tempdir().unwrap();
    let file = write(
        tmp.path(),
        "src/main/java/a/OrderResponse.java",
        "package a;\n\npublic class OrderResponse {\n}\n",
    );

    let output = lombokify(tmp.path()).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.ends_with("Total files updated: 1\n"));
    assert!(fs::read_to_string(file).unwrap().contains("@Data\n"));
}

#[test]
fn root_from_environment() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("sources");
    write(&root, "a/OrderResponse.java", "package a;\n\npublic class OrderResponse {\n}\n");

    let output = lombokify(tmp.path())
        .env("LOMBOKIFY_ROOT", &root)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout)
        .unwrap()
        .ends_with("Total files updated: 1\n"));
}

#[test]
fn dry_run_leaves_files_alone() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("java");
    let src = "package a;\n\n@Table(name = \"t\")\npublic class Thing {\n}\n";
    let file = write(&root, "a/Thing.java", src);

    let output = lombokify(tmp.path())
        .arg(&root)
        .arg("--dry-run")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        format!("Would update: {}\n\nTotal files to update: 1\n", file.display())
    );
    assert_eq!(fs::read_to_string(&file).unwrap(), src);
}

#[test]
fn missing_root_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let output = lombokify(tmp.path())
        .arg(tmp.path().join("does-not-exist"))
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("does not exist"), "stderr: {stderr}");
}

#[test]
fn undecodable_file_is_skipped_not_fatal() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("java");
    fs::create_dir_all(root.join("a")).unwrap();
    fs::write(root.join("a/BrokenRequest.java"), [0xffu8, 0xfe, 0x00]).unwrap();
    write(&root, "b/GoodRequest.java", "package b;\n\npublic class GoodRequest {\n}\n");

    let output = lombokify(tmp.path()).arg(&root).output().unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout)
        .unwrap()
        .ends_with("Total files updated: 1\n"));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("BrokenRequest.java"), "stderr: {stderr}");
}
