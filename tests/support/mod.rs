use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for gradescale, isolated from the user's config directory
pub fn gradescale() -> Command {
    let mut cmd = cargo_bin_cmd!("gradescale");
    cmd.env("GRADESCALE_CONFIG_DIR", "/nonexistent/gradescale-test-config")
        .env_remove("GRADESCALE_CONFIG")
        .env_remove("GRADESCALE_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Registry config adding a custom 0-10 scale next to the presets
#[allow(dead_code)]
pub const CUSTOM_CONFIG: &str = r#"
locale = "en"

[defaults]
rounding_mode = "nearest"

[[systems]]
id = "sur-10"
name = "Sur 10"
min_value = 0
max_value = 10
suffix = "/10"

[systems.rules]
scale_type = "custom"
precision = 0.5
"#;

/// Write a config file into `dir` and return its path
#[allow(dead_code)]
pub fn write_config(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("failed to write config");
    path
}
