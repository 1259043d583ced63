//! End-to-end tests for the `screenapi-landing` binary.

#![cfg(feature = "ssr")]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn landing() -> Command {
    cargo_bin_cmd!("screenapi-landing")
}

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        landing()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("build"))
            .stdout(predicate::str::contains("pricing"));
    }

    #[test]
    fn shows_version() {
        landing()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn check_passes_on_shipped_content() {
        landing()
            .arg("check")
            .assert()
            .success()
            .stdout(predicate::str::contains("ok: 4 plans"));
    }
}

mod build {
    use super::*;

    #[test]
    fn writes_index_html() {
        let temp = TempDir::new().expect("temp dir");
        let out = temp.path().join("dist");

        landing()
            .args(["build", "--out"])
            .arg(&out)
            .assert()
            .success();

        let html = std::fs::read_to_string(out.join("index.html")).expect("index.html");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Pricing"));
    }

    #[test]
    fn copies_assets_tree() {
        let temp = TempDir::new().expect("temp dir");
        let assets = temp.path().join("public");
        std::fs::create_dir_all(assets.join("static/images")).expect("mkdir");
        std::fs::write(assets.join("static/images/avatar.png"), b"png").expect("write");
        let out = temp.path().join("dist");

        landing()
            .args(["build", "--out"])
            .arg(&out)
            .arg("--assets")
            .arg(&assets)
            .assert()
            .success();

        assert!(out.join("static/images/avatar.png").is_file());
        assert!(out.join("index.html").is_file());
    }

    #[test]
    fn refuses_assets_dir_as_output() {
        let temp = TempDir::new().expect("temp dir");
        let public = temp.path().join("public");
        std::fs::create_dir_all(&public).expect("mkdir");
        std::fs::write(public.join("logo.png"), b"png").expect("write");

        landing()
            .args(["build", "--out"])
            .arg(&public)
            .arg("--assets")
            .arg(&public)
            .assert()
            .failure()
            .stderr(predicate::str::contains("overlaps output directory"));

        assert_eq!(std::fs::read(public.join("logo.png")).expect("logo"), b"png");
        assert!(!public.join("index.html").exists());
    }

    #[test]
    fn refuses_output_nested_in_assets() {
        let temp = TempDir::new().expect("temp dir");
        let site = temp.path().join("site");
        std::fs::create_dir_all(&site).expect("mkdir");
        std::fs::write(site.join("robots.txt"), b"User-agent: *").expect("write");
        let out = site.join("dist");

        landing()
            .args(["build", "--out"])
            .arg(&out)
            .arg("--assets")
            .arg(&site)
            .assert()
            .failure()
            .stderr(predicate::str::contains("overlaps output directory"));

        assert!(!out.exists());
    }

    #[test]
    fn uses_config_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = temp.path().join("site.toml");
        std::fs::write(
            &config,
            "[site]\ntitle = \"ShotBox\"\nsticky_nav = true\n\n[[nav]]\ntitle = \"Docs\"\nhref = \"/docs\"\n",
        )
        .expect("write config");
        let out = temp.path().join("dist");

        landing()
            .arg("--config")
            .arg(&config)
            .args(["build", "--out"])
            .arg(&out)
            .assert()
            .success();

        let html = std::fs::read_to_string(out.join("index.html")).expect("index.html");
        assert!(html.contains("<title>ShotBox</title>"));
        assert!(html.contains("site-header sticky"));
    }

    #[test]
    fn rejects_invalid_nav() {
        let temp = TempDir::new().expect("temp dir");
        let config = temp.path().join("site.toml");
        std::fs::write(
            &config,
            "[[nav]]\ntitle = \"Docs\"\nhref = \"/docs\"\n\n[[nav]]\ntitle = \"Docs\"\nhref = \"/v2/docs\"\n",
        )
        .expect("write config");

        landing()
            .arg("--config")
            .arg(&config)
            .args(["build", "--out"])
            .arg(temp.path().join("dist"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("duplicate nav link entry `Docs`"));
        assert!(!temp.path().join("dist").exists());
    }

    #[test]
    fn missing_config_fails() {
        let temp = TempDir::new().expect("temp dir");
        landing()
            .arg("--config")
            .arg(temp.path().join("missing.toml"))
            .arg("check")
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to read"));
    }
}

mod pricing {
    use super::*;

    #[test]
    fn monthly_table() {
        landing()
            .arg("pricing")
            .assert()
            .success()
            .stdout(predicate::str::contains("Starter"))
            .stdout(predicate::str::contains("$4/mo"))
            .stdout(predicate::str::contains("Save").not());
    }

    #[test]
    fn annual_json() {
        let output = landing()
            .args(["pricing", "--billing", "annual", "--json"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        let rows: serde_json::Value = serde_json::from_slice(&output).expect("json");
        let rows = rows.as_array().expect("array");
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[1]["plan"], "Pro");
        assert_eq!(rows[1]["billing"], "annual");
        assert_eq!(rows[1]["amount"], 168);
        assert_eq!(rows[1]["suffix"], "/yr");
        assert_eq!(rows[1]["savings_percent"], 13);
    }

    #[test]
    fn rejects_unknown_period() {
        landing()
            .args(["pricing", "--billing", "weekly"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("weekly"));
    }
}
