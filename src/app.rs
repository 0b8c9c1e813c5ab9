use std::process;

use crate::config::config::*;
use crate::core::catalog::{CatalogLoader, CatalogSource};
use crate::core::image_resolver::BundledImageResolver;
use crate::ui::gallery_state::GalleryState;
use crate::ui::viewer::ArtSpaceApp;

pub fn run() {
    let assets = assets_dir();
    if !assets.is_dir() {
        tracing::warn!(
            path = %assets.display(),
            "asset directory missing; using the compiled-in catalog and no images"
        );
    }

    // The catalog must load before any window exists; there is no partial gallery.
    let loader = CatalogLoader::new(CatalogSource::discover(&assets));
    let catalog = match loader.load() {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!(error = %e, "cannot start without the painting catalog");
            process::exit(1);
        }
    };

    let gallery = GalleryState::new(catalog);
    let resolver = BundledImageResolver::new(assets.join(IMAGES_DIR));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_NAME)
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size(WINDOW_MIN_SIZE),
        ..Default::default()
    };

    tracing::info!(version = APP_VERSION, "starting {}", APP_NAME);

    let result = eframe::run_native(
        APP_NAME,
        options,
        Box::new(|cc| {
            let mut app = ArtSpaceApp::new(gallery, resolver);
            app.init(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "failed to start the application");
        process::exit(1);
    }
}
