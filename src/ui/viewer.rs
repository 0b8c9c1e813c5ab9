use eframe::egui;
use egui::{RichText, TextureHandle, Widget};

use crate::config::config::*;
use crate::core::catalog::CatalogRecord;
use crate::core::error::CatalogError;
use crate::core::image_resolver::{BundledImageResolver, ImageResolver};
use crate::i18n::en::*;
use crate::ui::gallery_state::GalleryState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NavAction {
    Previous,
    Next,
}

pub struct ArtSpaceApp<R: ImageResolver = BundledImageResolver> {
    gallery: GalleryState,
    resolver: R,
}

impl<R: ImageResolver> ArtSpaceApp<R> {
    pub fn new(gallery: GalleryState, resolver: R) -> Self {
        Self { gallery, resolver }
    }

    pub fn init(&mut self, ctx: &egui::Context) {
        ctx.set_visuals(egui::Visuals::light());
    }

    #[cfg(test)]
    pub fn gallery(&self) -> &GalleryState {
        &self.gallery
    }

    /// Draws one frame. Navigation requests are applied before rendering.
    pub fn show(&mut self, ctx: &egui::Context) {
        if let Some(action) = Self::keyboard_action(ctx) {
            self.navigate(action);
        }

        self.show_toolbar(ctx);
        self.show_main_content(ctx);
    }

    fn navigate(&mut self, action: NavAction) {
        let moved = match action {
            NavAction::Previous => self.gallery.go_previous(),
            NavAction::Next => self.gallery.go_next(),
        };
        if moved {
            tracing::debug!(index = self.gallery.current_index(), "painting changed");
        }
    }

    fn keyboard_action(ctx: &egui::Context) -> Option<NavAction> {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::ArrowLeft) {
                Some(NavAction::Previous)
            } else if i.key_pressed(egui::Key::ArrowRight) {
                Some(NavAction::Next)
            } else {
                None
            }
        })
    }

    fn show_toolbar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.gallery.position_label());
                ui.separator();
                ui.weak(TEXT_KEYS_HINT);
            });
        });
    }

    fn show_main_content(&mut self, ctx: &egui::Context) {
        let record = match self.gallery.current() {
            Ok(record) => Some(record.clone()),
            Err(CatalogError::EmptyCatalog) => None,
            Err(e) => {
                tracing::error!(error = %e, "gallery cursor out of sync with catalog");
                None
            }
        };

        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(record) = record else {
                ui.centered_and_justified(|ui| {
                    ui.label(TEXT_EMPTY_CATALOG);
                });
                return;
            };

            let texture = self.resolver.resolve(ctx, &record.image_identifier);

            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    Self::show_painting_frame(ui, texture.as_ref(), &record.content_description);
                    Self::show_painting_label(ui, &record);
                    ui.add_space(LABEL_PADDING);
                    if let Some(action) = self.show_navigation_row(ui) {
                        self.navigate(action);
                    }
                    ui.add_space(LABEL_PADDING);
                });
            });
        });
    }

    fn show_painting_frame(ui: &mut egui::Ui, texture: Option<&TextureHandle>, description: &str) {
        egui::Frame::new()
            .fill(FRAME_BACKGROUND)
            .outer_margin(egui::Margin::same(OUTER_PADDING as i8))
            .inner_margin(egui::Margin::same(OUTER_PADDING as i8))
            .show(ui, |ui| match texture {
                Some(texture) => {
                    let width = ui.available_width();
                    let image_size = texture.size_vec2();
                    let scaled_size = image_size * (width / image_size.x);
                    egui::Image::from_texture(texture)
                        .fit_to_exact_size(scaled_size)
                        .ui(ui)
                        .on_hover_text(description);
                }
                None => Self::show_no_image(ui),
            });
    }

    fn show_no_image(ui: &mut egui::Ui) {
        let size = egui::vec2(
            ui.available_width(),
            ui.ctx().screen_rect().height() * NO_IMAGE_HEIGHT_FRACTION,
        );
        ui.allocate_ui_with_layout(
            size,
            egui::Layout::centered_and_justified(egui::Direction::TopDown),
            |ui| {
                ui.label(TEXT_NO_IMAGE);
            },
        );
    }

    fn show_painting_label(ui: &mut egui::Ui, record: &CatalogRecord) {
        egui::Frame::new()
            .fill(LABEL_BACKGROUND)
            .outer_margin(egui::Margin::symmetric(OUTER_PADDING as i8, 0))
            .inner_margin(egui::Margin::same(LABEL_PADDING as i8))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::LEFT), |ui| {
                    ui.label(RichText::new(&record.title).size(TITLE_FONT_SIZE));
                    ui.horizontal_wrapped(|ui| {
                        ui.spacing_mut().item_spacing.x = 0.0;
                        ui.label(RichText::new(&record.author).strong());
                        ui.label(RichText::new(record.year_label()).weak());
                    });
                });
            });
    }

    fn show_navigation_row(&self, ui: &mut egui::Ui) -> Option<NavAction> {
        let mut action = None;
        let button_size = egui::vec2(NAV_BUTTON_WIDTH, 0.0);

        ui.columns(2, |columns| {
            columns[0].vertical_centered(|ui| {
                let prev = egui::Button::new(BTN_PREV).min_size(button_size);
                if ui.add_enabled(self.gallery.can_go_previous(), prev).clicked() {
                    action = Some(NavAction::Previous);
                }
            });
            columns[1].vertical_centered(|ui| {
                let next = egui::Button::new(BTN_NEXT).min_size(button_size);
                if ui.add_enabled(self.gallery.can_go_next(), next).clicked() {
                    action = Some(NavAction::Next);
                }
            });
        });

        action
    }
}

impl<R: ImageResolver> eframe::App for ArtSpaceApp<R> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}
