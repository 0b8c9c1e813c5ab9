use std::fs;
use std::path::{Path, PathBuf};

/// Raster formats the bundled artwork may be stored in.
/// Declaration order is the lookup preference when several files share an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Webp,
    Bmp,
    Gif,
}

impl ImageFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "png" => Some(ImageFormat::Png),
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "webp" => Some(ImageFormat::Webp),
            "bmp" => Some(ImageFormat::Bmp),
            "gif" => Some(ImageFormat::Gif),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    pub fn codec(self) -> image::ImageFormat {
        match self {
            ImageFormat::Png => image::ImageFormat::Png,
            ImageFormat::Jpeg => image::ImageFormat::Jpeg,
            ImageFormat::Webp => image::ImageFormat::WebP,
            ImageFormat::Bmp => image::ImageFormat::Bmp,
            ImageFormat::Gif => image::ImageFormat::Gif,
        }
    }
}

/// A symbolic identifier is a bare file stem; anything path-like is rejected.
pub fn is_valid_identifier(identifier: &str) -> bool {
    !identifier.is_empty()
        && identifier != "."
        && identifier != ".."
        && !identifier.contains(|c: char| matches!(c, '/' | '\\' | '\0'))
}

/// Finds `<dir>/<identifier>.<ext>` for a supported extension in any letter case.
/// The stem must match exactly.
pub fn locate_asset(dir: &Path, identifier: &str) -> Option<PathBuf> {
    if !is_valid_identifier(identifier) {
        return None;
    }

    fs::read_dir(dir)
        .ok()?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| path.file_stem().and_then(|stem| stem.to_str()) == Some(identifier))
        .filter_map(|path| ImageFormat::from_path(&path).map(|format| (format as u8, path)))
        .min()
        .map(|(_, path)| path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("art_space_{}_{}", std::process::id(), name));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_from_extension() {
        assert_eq!(ImageFormat::from_extension("PNG"), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::from_extension("jpeg"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_extension("jpg"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_extension("svg"), None);
        assert_eq!(
            ImageFormat::from_path(Path::new("art/great_wave.webp")),
            Some(ImageFormat::Webp)
        );
        assert_eq!(ImageFormat::from_path(Path::new("great_wave")), None);
    }

    #[test]
    fn test_rejects_path_like_identifiers() {
        assert!(is_valid_identifier("starry_night"));
        for bad in ["", ".", "..", "../secret", "a/b", "a\\b"] {
            assert!(!is_valid_identifier(bad), "{:?} should be rejected", bad);
        }
    }

    #[test]
    fn test_locate_asset_by_any_extension() {
        let dir = scratch_dir("locate");
        fs::write(dir.join("venus.jpeg"), b"not really a jpeg").unwrap();
        fs::write(dir.join("notes.txt"), b"ignored").unwrap();

        assert_eq!(locate_asset(&dir, "venus"), Some(dir.join("venus.jpeg")));
        assert_eq!(locate_asset(&dir, "notes"), None);
        assert_eq!(locate_asset(&dir, "missing"), None);
        assert_eq!(locate_asset(&dir, "../venus"), None);

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_locate_asset_prefers_png() {
        let dir = scratch_dir("prefer_png");
        fs::write(dir.join("wave.gif"), b"gif").unwrap();
        fs::write(dir.join("wave.png"), b"png").unwrap();

        assert_eq!(locate_asset(&dir, "wave"), Some(dir.join("wave.png")));

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_locate_asset_ignores_extension_case() {
        let dir = scratch_dir("upper_ext");
        fs::write(dir.join("starry.PNG"), b"png").unwrap();
        fs::write(dir.join("Sunrise.jpg"), b"jpg").unwrap();

        assert_eq!(locate_asset(&dir, "starry"), Some(dir.join("starry.PNG")));
        assert_eq!(locate_asset(&dir, "sunrise"), None);
        assert_eq!(locate_asset(&dir, "Sunrise"), Some(dir.join("Sunrise.jpg")));

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_locate_asset_in_missing_dir() {
        let dir = std::env::temp_dir().join(format!("art_space_{}_absent", std::process::id()));
        assert_eq!(locate_asset(&dir, "starry"), None);
    }
}
