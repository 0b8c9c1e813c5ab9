use std::path::PathBuf;

pub const APP_NAME: &str = "Art Space";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const WINDOW_SIZE: [f32; 2] = [480.0, 800.0];
pub const WINDOW_MIN_SIZE: [f32; 2] = [360.0, 600.0];

// Larger artwork is downscaled before upload.
pub const MAX_IMAGE_WIDTH: u32 = 1920;
pub const MAX_IMAGE_HEIGHT: u32 = 1080;

pub const OUTER_PADDING: f32 = 30.0;
pub const LABEL_PADDING: f32 = 20.0;
pub const NAV_BUTTON_WIDTH: f32 = 120.0;
pub const TITLE_FONT_SIZE: f32 = 24.0;
pub const NO_IMAGE_HEIGHT_FRACTION: f32 = 0.6;

pub const FRAME_BACKGROUND: egui::Color32 = egui::Color32::GRAY;
pub const LABEL_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(0xEC, 0xEB, 0xF4);

pub const DEFAULT_LOG_FILTER: &str = "info,art_space=debug";

pub const CATALOG_FILE: &str = "data/paintings_data.json";
pub const IMAGES_DIR: &str = "images";

/// `assets/` next to the executable. Debug builds fall back to the source tree's copy.
pub fn assets_dir() -> PathBuf {
    let shipped = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
        .unwrap_or_else(|| PathBuf::from("assets"));

    #[cfg(debug_assertions)]
    if !shipped.is_dir() {
        return PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets");
    }

    shipped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(debug_assertions)]
    #[test]
    fn test_debug_assets_dir_falls_back_to_source_tree() {
        let dir = assets_dir();
        assert!(dir.join(CATALOG_FILE).is_file(), "{} has no catalog", dir.display());
        assert!(dir.join(IMAGES_DIR).is_dir());
    }
}
