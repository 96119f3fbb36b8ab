//! End-to-end CLI tests for lintrag

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn lintrag() -> Command {
    cargo_bin_cmd!("lintrag")
}

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        lintrag()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("render"))
            .stdout(predicate::str::contains("content"));
    }

    #[test]
    fn shows_version() {
        lintrag()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

// ============================================
// Render Tests
// ============================================

mod render {
    use super::*;

    #[test]
    fn writes_index_into_directory() {
        let dir = TempDir::new().unwrap();

        lintrag()
            .args(["render", "--out"])
            .arg(dir.path())
            .assert()
            .success();

        let html = fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Book a Demo"));
        assert!(html.contains("Roller cage association"));
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("public/site/home.html");

        lintrag().args(["render", "--out"]).arg(&out).assert().success();

        assert!(out.is_file());
    }

    #[test]
    fn prefill_and_asset_base_show_up_in_output() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("index.html");

        lintrag()
            .args(["render", "--out"])
            .arg(&out)
            .args([
                "--asset-base",
                "https://cdn.example.com",
                "--prefill",
                "name=Jane Doe",
            ])
            .assert()
            .success();

        let html = fs::read_to_string(&out).unwrap();
        assert!(html.contains(r#"value="Jane Doe""#));
        assert!(html.contains("https://cdn.example.com/images/owners.jpg"));
    }

    #[test]
    fn config_file_is_applied() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("page.json");
        fs::write(&config, r#"{"title": "Lintrag Preview", "stylesheet": "/site.css"}"#).unwrap();
        let out = dir.path().join("index.html");

        lintrag()
            .args(["render", "--out"])
            .arg(&out)
            .arg("--config")
            .arg(&config)
            .assert()
            .success();

        let html = fs::read_to_string(&out).unwrap();
        assert!(html.contains("Lintrag Preview"));
        assert!(html.contains(r#"href="/site.css""#));
    }

    #[test]
    fn unknown_prefill_field_fails() {
        let dir = TempDir::new().unwrap();

        lintrag()
            .args(["render", "--out"])
            .arg(dir.path())
            .args(["--prefill", "phone=555"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("unknown form field"));

        assert!(!dir.path().join("index.html").exists());
    }

    #[test]
    fn missing_config_fails() {
        let dir = TempDir::new().unwrap();

        lintrag()
            .args(["render", "--out"])
            .arg(dir.path())
            .args(["--config", "/definitely/not/here.json"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error:"));
    }
}

// ============================================
// Content Tests
// ============================================

mod content {
    use super::*;

    #[test]
    fn prints_content_as_json() {
        let output = lintrag().arg("content").output().unwrap();
        assert!(output.status.success());

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["features"].as_array().map(Vec::len), Some(6));
        assert_eq!(json["segments"][0]["title"], "Laundry Owners");
        assert_eq!(json["contact"]["phone"], "+1 (555) 123-4567");
    }

    #[test]
    fn pretty_output_is_multiline() {
        lintrag()
            .args(["content", "--pretty"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\n  \"product\": \"Lintrag\""));
    }
}
