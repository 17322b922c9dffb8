//! Integration tests for cacheopt

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use tempfile::TempDir;

    const IMAGE: &str = "io.test.io/myorg/my-cache:build";

    /// Command pointed at a config file that does not exist yet
    fn cacheopt(temp: &TempDir) -> Command {
        let mut cmd = cargo_bin_cmd!("cacheopt");
        cmd.env_remove("CACHEOPT_LOG_FORMAT")
            .arg("--config")
            .arg(temp.path().join("config.toml"));
        cmd
    }

    #[test]
    fn help_displays() {
        let temp = TempDir::new().unwrap();
        cacheopt(&temp)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("cache option"));
    }

    #[test]
    fn version_displays() {
        let temp = TempDir::new().unwrap();
        cacheopt(&temp)
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("cacheopt"));
    }

    #[test]
    fn parse_prints_canonical_form() {
        let temp = TempDir::new().unwrap();
        cacheopt(&temp)
            .args(["parse", &format!("name={IMAGE};format=image;type=launch")])
            .assert()
            .success()
            .stdout(format!("type=launch;format=image;name={IMAGE}\n"));
    }

    #[test]
    fn parse_applies_defaults() {
        let temp = TempDir::new().unwrap();
        cacheopt(&temp)
            .args(["parse", &format!("name={IMAGE}")])
            .assert()
            .success()
            .stdout(format!("type=build;format=volume;name={IMAGE}\n"));
    }

    #[test]
    fn parse_json_output() {
        let temp = TempDir::new().unwrap();
        let output = cacheopt(&temp)
            .args(["parse", "-o", "json", "type=launch;format=volume"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{"type": "launch", "format": "volume"}])
        );
    }

    #[test]
    fn parse_table_output() {
        let temp = TempDir::new().unwrap();
        cacheopt(&temp)
            .args(["parse", "-o", "table", "type=launch;name=shared"])
            .assert()
            .success()
            .stdout(predicate::str::contains("TYPE").and(predicate::str::contains("shared")));
    }

    #[test]
    fn missing_name_fails() {
        let temp = TempDir::new().unwrap();
        cacheopt(&temp)
            .args(["parse", "type=launch;format=image"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("cache 'name' is required"));
    }

    #[test]
    fn bare_token_fails() {
        let temp = TempDir::new().unwrap();
        cacheopt(&temp)
            .args(["parse", &format!("launch;format=image;name={IMAGE}")])
            .assert()
            .failure()
            .stderr(predicate::str::contains(
                "invalid field 'launch' must be a key=value pair",
            ));
    }

    #[test]
    fn trailing_semicolon_fails() {
        let temp = TempDir::new().unwrap();
        cacheopt(&temp)
            .args(["parse", &format!("type=launch;format=image;name={IMAGE};")])
            .assert()
            .failure()
            .stderr(predicate::str::contains(
                "invalid field '' must be a key=value pair",
            ));
    }

    #[test]
    fn invalid_type_shows_hint() {
        let temp = TempDir::new().unwrap();
        cacheopt(&temp)
            .args(["parse", "type=invalid_cache;name=x"])
            .assert()
            .failure()
            .stderr(
                predicate::str::contains("invalid cache type 'invalid_cache'")
                    .and(predicate::str::contains("build, launch")),
            );
    }

    #[test]
    fn parse_without_spec_or_default_fails() {
        let temp = TempDir::new().unwrap();
        cacheopt(&temp)
            .arg("parse")
            .assert()
            .failure()
            .stderr(predicate::str::contains("cache.default_spec"));
    }

    #[test]
    fn parse_uses_configured_default() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("config.toml"),
            "[cache]\ndefault_spec = \"type=launch;name=shared\"\n",
        )
        .unwrap();

        cacheopt(&temp)
            .arg("parse")
            .assert()
            .success()
            .stdout("type=launch;format=volume;name=shared\n");
    }

    #[test]
    fn invalid_configured_default_fails() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("config.toml"),
            "[cache]\ndefault_spec = \"format=image\"\n",
        )
        .unwrap();

        cacheopt(&temp)
            .args(["parse", "name=x"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid configuration"));
    }

    #[test]
    fn config_path() {
        let temp = TempDir::new().unwrap();
        cacheopt(&temp)
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }

    #[test]
    fn config_init_then_show() {
        let temp = TempDir::new().unwrap();
        cacheopt(&temp).args(["config", "init"]).assert().success();
        assert!(temp.path().join("config.toml").exists());

        cacheopt(&temp)
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[cache]"));
    }

    #[test]
    fn config_repair_commands_work_with_invalid_config() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("config.toml"),
            "[cache]\ndefault_spec = \"format=image\"\n",
        )
        .unwrap();

        cacheopt(&temp)
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));

        cacheopt(&temp)
            .args(["config", "init", "--force"])
            .assert()
            .success();

        cacheopt(&temp)
            .args(["parse", "name=x"])
            .assert()
            .success()
            .stdout("type=build;format=volume;name=x\n");
    }

    #[test]
    fn parse_stops_at_end_of_line() {
        let temp = TempDir::new().unwrap();
        cacheopt(&temp)
            .args(["parse", "name=x\n"])
            .assert()
            .success()
            .stdout("type=build;format=volume;name=x\n");
    }
}
