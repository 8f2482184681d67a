//! Environment overrides layered over config files.
//!
//! Every test runs inside `figment::Jail`, which serialises access to the
//! process environment and working directory.

use figment::Jail;
use rollrig_config::{OutputFormat, discover, load_build_config};

const CONFIG: &str = r#"{
    "entry": "src/main.js",
    "dest": "dist/bundle.js",
    "format": "es",
    "moduleName": "App"
}"#;

#[test]
fn format_override_wins_over_file() {
    Jail::expect_with(|jail| {
        jail.create_file("rollrig.config.json", CONFIG)?;
        jail.set_env("ROLLRIG_FORMAT", "umd");

        let config = load_build_config("rollrig.config.json").map_err(|e| e.to_string())?;
        assert_eq!(config.format, OutputFormat::Umd);
        assert_eq!(config.effective_global_name(), Some("App"));
        Ok(())
    });
}

#[test]
fn module_name_and_dest_overrides() {
    Jail::expect_with(|jail| {
        jail.create_file("rollrig.config.json", CONFIG)?;
        jail.set_env("ROLLRIG_MODULE_NAME", "FableRepl");
        jail.set_env("ROLLRIG_DEST", "public/repl.js");

        let config = load_build_config("rollrig.config.json").map_err(|e| e.to_string())?;
        let cwd = std::env::current_dir().map_err(|e| e.to_string())?;
        assert_eq!(config.global_name.as_deref(), Some("FableRepl"));
        assert_eq!(config.output_path, cwd.join("public/repl.js"));
        Ok(())
    });
}

#[test]
fn numeric_looking_overrides_stay_strings() {
    Jail::expect_with(|jail| {
        jail.create_file("rollrig.config.json", CONFIG)?;
        jail.set_env("ROLLRIG_ENTRY", "123");
        jail.set_env("ROLLRIG_DEST", "2024");

        let config = load_build_config("rollrig.config.json").map_err(|e| e.to_string())?;
        let cwd = std::env::current_dir().map_err(|e| e.to_string())?;
        assert_eq!(config.entry_path, cwd.join("123"));
        assert_eq!(config.output_path, cwd.join("2024"));
        Ok(())
    });
}

#[test]
fn override_with_unknown_format_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file("rollrig.toml", "entry = \"main.js\"\ndest = \"out.js\"\nformat = \"es\"\n")?;
        jail.set_env("ROLLRIG_FORMAT", "xyz");

        let err = discover().unwrap_err();
        assert!(matches!(err, rollrig_config::ConfigError::UnrecognizedFormat(ref f) if f == "xyz"));
        Ok(())
    });
}

#[test]
fn unrelated_variables_are_ignored() {
    Jail::expect_with(|jail| {
        jail.create_file("rollrig.config.json", CONFIG)?;
        jail.set_env("ROLLRIG_PLUGINS", "not-a-list");
        jail.set_env("ROLLRIG_SOURCE_MAP", "sideways");

        let config = discover().map_err(|e| e.to_string())?;
        assert_eq!(config.format, OutputFormat::Es);
        assert!(config.plugins.is_empty());
        Ok(())
    });
}
