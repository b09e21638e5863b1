//! Runs the `jsrelease` binary against a scratch project and a mocked
//! compiler service.

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SOURCES: [&str; 6] = [
    "public/jsfxr.js",
    "public/jsfxrsequencer.js",
    "public/audio.js",
    "public/levels.js",
    "public/common.js",
    "public/game.js",
];

fn scaffold_project(root: &Path) {
    for relative in SOURCES {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "'use strict';\nvar x = 1;").unwrap();
    }
    fs::create_dir_all(root.join("release")).unwrap();
    fs::write(root.join("release/index.html"), "<script src=bundle.js></script>").unwrap();
}

fn jsrelease() -> Command {
    Command::cargo_bin("jsrelease").unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn test_release_prints_only_the_final_size() {
    let project = tempfile::tempdir().unwrap();
    scaffold_project(project.path());

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/compile"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"var x=1;".to_vec()))
        .expect(1)
        .mount(&server)
        .await;

    let root = project.path().to_path_buf();
    let endpoint = format!("{}/compile", server.uri());
    let output = tokio::task::spawn_blocking(move || {
        jsrelease()
            .arg("-C")
            .arg(&root)
            .arg("--endpoint")
            .arg(endpoint)
            .assert()
            .success()
            .get_output()
            .clone()
    })
    .await
    .unwrap();

    let archive = project.path().join("release/retrohaunt.zip");
    let size = fs::metadata(&archive).unwrap().len();
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        format!("Final size: {} bytes\n", size)
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_missing_source_exits_with_error_and_no_report() {
    let project = tempfile::tempdir().unwrap();
    scaffold_project(project.path());
    fs::remove_file(project.path().join("public/levels.js")).unwrap();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("var x=1;"))
        .expect(0)
        .mount(&server)
        .await;

    let root = project.path().to_path_buf();
    let endpoint = format!("{}/compile", server.uri());
    tokio::task::spawn_blocking(move || {
        jsrelease()
            .arg("-C")
            .arg(&root)
            .arg("--endpoint")
            .arg(endpoint)
            .assert()
            .failure()
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("public/levels.js"));
    })
    .await
    .unwrap();

    assert!(!project.path().join("release/retrohaunt.zip").exists());
}

#[test]
fn test_invalid_endpoint_is_rejected() {
    jsrelease()
        .args(["--endpoint", "ftp://example.com/compile"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported scheme"));
}
