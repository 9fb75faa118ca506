//! Shared utilities for integration tests.

use std::fs;
use std::path::Path;

use route_composer::config::{parse_config, AppConfig};
use tempfile::TempDir;

/// Base URL used by every fixture config.
#[allow(dead_code)]
pub const BASE_URL: &str = "http://h/";

/// Build a validated config from TOML, pointing resources at `resource_root`.
pub fn config_with_resources(toml: &str, resource_root: &Path) -> AppConfig {
    let mut config = parse_config(toml).expect("fixture config is valid");
    config.resources.root = resource_root.display().to_string();
    config
}

/// Create a temporary resource directory holding `files` (name, body).
#[allow(dead_code)]
pub fn resource_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    for (name, body) in files {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create resource subdir");
        }
        fs::write(path, body).expect("write resource");
    }
    dir
}

/// Routes shared by the URL tests.
#[allow(dead_code)]
pub const ROUTES_TOML: &str = r#"
modules = ["admin", "blog", "admin"]

[app]
base_url = "http://h/"

[[routes]]
name = "profile"
path = ":module/:controller/:action/:params"

[[routes]]
name = "localized"
path = "/:language/:module/:controller/:action/:params"
controller = "ignored"

[[routes]]
name = "home"
path = "/"

[[routes]]
name = "x"
path = "p1"

[[routes]]
name = "x"
path = "p2"
"#;
