use crate::upload::Upload;
use crate::waste_classifier::core::{Msg, UploadedImage};
use crate::waste_classifier::main::WasteClassifier;
use crate::waste_classifier::render::{self, HistoryView, MainView, ResultCard, View};
use eframe::egui;
use std::path::PathBuf;

const FOOTER: &str = "Smart Waste Classifier";

fn accent() -> egui::Color32 {
    egui::Color32::from_rgb(0x20, 0x70, 0x3a)
}

fn danger() -> egui::Color32 {
    egui::Color32::from_rgb(0xdc, 0x35, 0x45)
}

pub fn native_options(title: &str) -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title)
            .with_inner_size([1100.0, 780.0]),
        ..Default::default()
    }
}

/// The classifier window. Owns exactly one session.
pub struct WasteClassifierGui {
    session: WasteClassifier,
    path_input: String,
    preview: Option<(u64, egui::TextureHandle)>,
}

impl WasteClassifierGui {
    pub fn new(session: WasteClassifier) -> Self {
        Self {
            session,
            path_input: String::new(),
            preview: None,
        }
    }

    fn collect_uploads(&self, ctx: &egui::Context) -> Vec<Msg> {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());

        dropped
            .into_iter()
            .filter_map(|file| match (file.bytes, file.path) {
                (Some(bytes), path) => {
                    let name = path
                        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
                        .unwrap_or(file.name);
                    Some(Ok(Upload::new(name, bytes.to_vec())))
                }
                (None, Some(path)) => Some(Upload::from_path(&path)),
                (None, None) => None,
            })
            .map(Msg::from_read)
            .collect()
    }

    fn preview_texture(&mut self, ctx: &egui::Context, upload: &UploadedImage) -> egui::TextureHandle {
        match &self.preview {
            Some((seq, texture)) if *seq == upload.seq => texture.clone(),
            _ => {
                let size = [upload.image.width() as usize, upload.image.height() as usize];
                let color_image = egui::ColorImage::from_rgb(size, upload.image.as_raw());
                let texture = ctx.load_texture(
                    format!("upload-{}", upload.seq),
                    color_image,
                    egui::TextureOptions::default(),
                );
                self.preview = Some((upload.seq, texture.clone()));
                texture
            }
        }
    }

    fn show_history(&self, ui: &mut egui::Ui, view: &View) -> bool {
        ui.heading("🕓 Prediction History");
        ui.separator();

        egui::ScrollArea::vertical()
            .max_height((ui.available_height() - 48.0).max(0.0))
            .show(ui, |ui| match &view.history {
                HistoryView::Empty(text) => {
                    ui.label(*text);
                }
                HistoryView::Rows(rows) => {
                    for row in rows {
                        ui.label(egui::RichText::new(&row.heading).strong());
                        ui.label(egui::RichText::new(&row.detail).small());
                        ui.add_space(6.0);
                    }
                }
            });

        ui.separator();
        ui.button("Clear History").clicked()
    }

    fn show_upload_prompt(&mut self, ui: &mut egui::Ui, hovering: bool) -> Option<Msg> {
        let mut msg = None;

        egui::Frame::group(ui.style())
            .stroke(egui::Stroke::new(
                if hovering { 2.5 } else { 1.0 },
                if hovering { accent() } else { egui::Color32::GRAY },
            ))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new(render::UPLOAD_PROMPT).size(18.0));
                    ui.label("Drop a file here, or enter its path:");
                });
                ui.horizontal(|ui| {
                    let field = ui.add(
                        egui::TextEdit::singleline(&mut self.path_input)
                            .hint_text("path/to/image.jpg")
                            .desired_width(ui.available_width() - 96.0),
                    );
                    let submitted =
                        field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if (ui.button("Classify").clicked() || submitted) && !self.path_input.trim().is_empty() {
                        let path = PathBuf::from(self.path_input.trim());
                        msg = Some(Msg::from_read(Upload::from_path(&path)));
                    }
                });
            });

        msg
    }

    fn show_result(&mut self, ui: &mut egui::Ui, card: &ResultCard) {
        let texture = self.preview_texture(ui.ctx(), &card.upload);
        let max_width = ui.available_width().min(420.0);
        let size = texture.size_vec2();
        let scale = (max_width / size.x).min(320.0 / size.y).min(1.0);

        ui.vertical_centered(|ui| {
            ui.add(egui::Image::new(egui::load::SizedTexture::new(texture.id(), size * scale)));
            ui.label(egui::RichText::new(&card.upload.name).small());
            ui.add_space(12.0);

            let [r, g, b] = card.bin_color;
            egui::Frame::none()
                .fill(egui::Color32::from_rgb(r, g, b))
                .rounding(18.0)
                .inner_margin(18.0)
                .show(ui, |ui| {
                    ui.label(
                        egui::RichText::new(&card.bin_banner)
                            .size(32.0)
                            .strong()
                            .color(egui::Color32::WHITE),
                    );
                })
                .response
                .on_hover_text(&card.bin_color_hex);
            ui.add_space(16.0);
        });

        egui::Grid::new("details")
            .num_columns(2)
            .striped(true)
            .spacing([24.0, 8.0])
            .show(ui, |ui| {
                for (label, value) in &card.details {
                    ui.label(egui::RichText::new(*label).strong());
                    ui.label(value);
                    ui.end_row();
                }
            });

        ui.add_space(16.0);

        egui::Grid::new("top_classes")
            .num_columns(2)
            .striped(true)
            .spacing([24.0, 8.0])
            .show(ui, |ui| {
                ui.label(egui::RichText::new("Class").strong());
                ui.label(egui::RichText::new("Confidence").strong());
                ui.end_row();
                for (class, confidence) in &card.top_classes {
                    ui.label(class);
                    ui.label(confidence);
                    ui.end_row();
                }
            });
    }
}

impl eframe::App for WasteClassifierGui {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut messages = self.collect_uploads(ctx);
        let hovering = ctx.input(|i| !i.raw.hovered_files.is_empty());

        let view = render::view(self.session.model());

        egui::SidePanel::left("history")
            .resizable(false)
            .default_width(280.0)
            .show(ctx, |ui| {
                if self.show_history(ui, &view) {
                    messages.push(Msg::ClearHistoryClicked);
                }
            });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.vertical_centered(|ui| ui.label(egui::RichText::new(FOOTER).small()));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new(view.title).size(34.0).strong().color(accent()));
                    ui.label(egui::RichText::new(view.subtitle).size(18.0).color(accent()));
                });
                ui.add_space(12.0);

                for warning in &view.warnings {
                    ui.colored_label(egui::Color32::from_rgb(0xff, 0xc1, 0x07), format!("⚠ {}", warning));
                }

                if let Some(msg) = self.show_upload_prompt(ui, hovering) {
                    messages.push(msg);
                }
                ui.add_space(16.0);

                match &view.main {
                    MainView::Prompt => {}
                    MainView::Working { name } => {
                        ui.horizontal(|ui| {
                            ui.spinner();
                            ui.label(format!("Classifying {}...", name));
                        });
                    }
                    MainView::Error { name, message } => {
                        ui.colored_label(danger(), format!("{}: {}", name, message));
                    }
                    MainView::Result(card) => self.show_result(ui, card),
                }
            });
        });

        if !messages.is_empty() {
            for msg in messages {
                self.session.send(msg);
            }
            ctx.request_repaint();
        }
    }
}

/// Shown instead of the classifier when startup fails. Offers no upload
/// control.
pub struct StartupFailureGui {
    diagnostic: String,
}

impl StartupFailureGui {
    pub fn new(diagnostic: String) -> Self {
        Self { diagnostic }
    }
}

impl eframe::App for StartupFailureGui {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.label(egui::RichText::new(render::TITLE).size(28.0).strong().color(accent()));
                ui.add_space(24.0);
                ui.colored_label(danger(), &self.diagnostic);
                ui.add_space(8.0);
                ui.label("Fix the configuration and restart the application.");
            });
        });
    }
}
