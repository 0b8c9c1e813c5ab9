use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use egui::{ColorImage, Context, TextureHandle, TextureOptions};
use thiserror::Error;

use crate::config::config::{MAX_IMAGE_HEIGHT, MAX_IMAGE_WIDTH};
use crate::core::image_format::{locate_asset, ImageFormat};

/// Turns a painting's symbolic image name into something drawable.
/// `None` is the "no image" sentinel.
pub trait ImageResolver {
    fn resolve(&mut self, ctx: &Context, identifier: &str) -> Option<TextureHandle>;
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("no bundled image named {0:?}")]
    NotFound(String),

    #[error("unsupported image file {0}")]
    UnsupportedFormat(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("decode error: {0}")]
    Decode(#[from] image::ImageError),
}

/// Resolves identifiers against image files in a bundled asset directory.
/// Each identifier is decoded at most once; misses are remembered too.
pub struct BundledImageResolver {
    images_dir: PathBuf,
    textures: HashMap<String, Option<TextureHandle>>,
}

impl BundledImageResolver {
    pub fn new(images_dir: PathBuf) -> Self {
        Self {
            images_dir,
            textures: HashMap::new(),
        }
    }

    pub fn load(&self, identifier: &str) -> Result<ColorImage, LoadError> {
        let path = locate_asset(&self.images_dir, identifier)
            .ok_or_else(|| LoadError::NotFound(identifier.to_string()))?;
        decode_image(&path)
    }
}

impl ImageResolver for BundledImageResolver {
    fn resolve(&mut self, ctx: &Context, identifier: &str) -> Option<TextureHandle> {
        if let Some(cached) = self.textures.get(identifier) {
            return cached.clone();
        }

        let texture = match self.load(identifier) {
            Ok(color_image) => {
                tracing::debug!(identifier, "painting image loaded");
                Some(ctx.load_texture(
                    format!("painting_{}", identifier),
                    color_image,
                    TextureOptions::LINEAR,
                ))
            }
            Err(e) => {
                tracing::warn!(identifier, error = %e, "painting image unavailable");
                None
            }
        };

        self.textures.insert(identifier.to_string(), texture.clone());
        texture
    }
}

pub fn decode_image(path: &Path) -> Result<ColorImage, LoadError> {
    let format =
        ImageFormat::from_path(path).ok_or_else(|| LoadError::UnsupportedFormat(path.to_path_buf()))?;
    let bytes = fs::read(path)?;
    let img = image::load_from_memory_with_format(&bytes, format.codec())?;

    let img = if img.width() > MAX_IMAGE_WIDTH || img.height() > MAX_IMAGE_HEIGHT {
        img.resize(MAX_IMAGE_WIDTH, MAX_IMAGE_HEIGHT, image::imageops::FilterType::Triangle)
    } else {
        img
    };

    let rgba = img.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::config::IMAGES_DIR;

    fn bundled_images_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets").join(IMAGES_DIR)
    }

    #[test]
    fn test_decodes_bundled_painting() {
        let resolver = BundledImageResolver::new(bundled_images_dir());
        let image = resolver.load("starry_night").unwrap();
        assert_eq!(image.size, [320, 240]);
    }

    #[test]
    fn test_unknown_identifier_is_not_found() {
        let resolver = BundledImageResolver::new(bundled_images_dir());
        assert!(matches!(resolver.load("mona_lisa"), Err(LoadError::NotFound(_))));
        assert!(matches!(
            resolver.load("../data/paintings_data"),
            Err(LoadError::NotFound(_))
        ));
    }

    #[test]
    fn test_corrupt_file_is_decode_error() {
        let dir = std::env::temp_dir().join(format!("art_space_{}_corrupt", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("broken.png"), b"definitely not a png").unwrap();

        let resolver = BundledImageResolver::new(dir.clone());
        assert!(matches!(resolver.load("broken"), Err(LoadError::Decode(_))));

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_resolve_caches_hits_and_misses() {
        let ctx = Context::default();
        let mut resolver = BundledImageResolver::new(bundled_images_dir());

        let first = resolver.resolve(&ctx, "great_wave").unwrap();
        let second = resolver.resolve(&ctx, "great_wave").unwrap();
        assert_eq!(first.id(), second.id());

        assert!(resolver.resolve(&ctx, "mona_lisa").is_none());
        assert!(resolver.resolve(&ctx, "mona_lisa").is_none());
        assert_eq!(resolver.textures.len(), 2);
    }
}
