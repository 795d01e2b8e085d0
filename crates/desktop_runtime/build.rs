use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WindowSize {
    w: i32,
    h: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PlacementBand {
    x_min: i32,
    x_max: i32,
    y_min: i32,
    y_max: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Layout {
    taskbar_height_px: i32,
    default_window: WindowSize,
    placement: PlacementBand,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AppManifest {
    app_id: String,
    display_name: String,
    icon: String,
    show_on_desktop: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DesktopConfig {
    schema_version: u32,
    layout: Layout,
    apps: Vec<AppManifest>,
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("desktop.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let config: DesktopConfig = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));

    if config.schema_version != 1 {
        panic!(
            "desktop config schema mismatch in {}: expected 1 found {}",
            path.display(),
            config.schema_version
        );
    }

    let band = &config.layout.placement;
    if band.x_min >= band.x_max || band.y_min >= band.y_max {
        panic!("placement band in {} must have min < max on both axes", path.display());
    }
    if config.layout.default_window.w <= 0 || config.layout.default_window.h <= 0 {
        panic!("default window size in {} must be positive", path.display());
    }

    let mut seen = HashSet::new();
    for app in &config.apps {
        if !seen.insert(app.app_id.as_str()) {
            panic!("duplicate app id `{}` in {}", app.app_id, path.display());
        }
    }

    let json = serde_json::to_string_pretty(&config).expect("serialize desktop config");
    let generated = format!(
        "/// Build-time generated desktop config JSON.\n\
pub const DESKTOP_CONFIG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("desktop_config_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
