#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release
#![allow(rustdoc::missing_crate_level_docs)] // it's an example

use std::fs;

use eframe::egui;
use egui::{Color32, Frame, Pos2, Sense, Stroke as PenStroke, Ui};
use ron::ser::{to_string_pretty, PrettyConfig};
use shape_recognizer::{
    Point, RecognitionResult, RecognitionSink, Recognizer, RecognizerConfig, Stroke,
};
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("shape_recognizer=debug")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([800.0, 500.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Shape recognizer",
        options,
        Box::new(|_| Ok(Box::<DemoApp>::default())),
    )
}

/// Everything drawn on top of the stroke once it has been recognized.
/// Owned by the app and reset when the next stroke starts.
#[derive(Default)]
struct Overlay {
    corner_markers: Vec<Pos2>,
    label: String,
    last_result: Option<RecognitionResult>,
}

impl Overlay {
    fn clear(&mut self) {
        self.corner_markers.clear();
        self.label.clear();
        self.last_result = None;
    }
}

impl RecognitionSink for Overlay {
    fn on_result(&mut self, result: &RecognitionResult) {
        self.corner_markers = result.corners.iter().map(|p| Pos2::new(p.x, p.y)).collect();
        self.label = result.summary();
        self.last_result = Some(result.clone());
    }

    fn on_skipped(&mut self, points: usize) {
        self.label = format!("Stroke too short ({points} points)");
    }
}

struct DemoApp {
    /// in screen coordinates, so the default tolerance applies
    stroke: Stroke,
    drawing: bool,
    pen: PenStroke,
    recognizer: Recognizer,
    epsilon: f32,
    area_stride: usize,
    overlay: Overlay,
}

impl Default for DemoApp {
    fn default() -> Self {
        let config = RecognizerConfig::default();
        Self {
            stroke: Stroke::new(),
            drawing: false,
            pen: PenStroke::new(2.0, Color32::from_rgb(25, 200, 100)),
            epsilon: config.epsilon,
            area_stride: config.area_stride,
            recognizer: Recognizer::default(),
            overlay: Overlay::default(),
        }
    }
}

impl DemoApp {
    fn recognize_stroke(&mut self) {
        if let Err(err) = self.recognizer.recognize_into(self.stroke.points(), &mut self.overlay) {
            self.overlay.label = err.to_string();
        }
    }

    fn apply_config(&mut self) {
        let config = RecognizerConfig::default()
            .with_epsilon(self.epsilon)
            .with_area_stride(self.area_stride);
        match Recognizer::new(config) {
            Ok(recognizer) => {
                self.recognizer = recognizer;
                if !self.stroke.is_empty() {
                    self.recognize_stroke();
                }
            }
            Err(err) => self.overlay.label = err.to_string(),
        }
    }

    fn export_result(&mut self) {
        let Some(result) = &self.overlay.last_result else {
            return;
        };
        let Some(path) = rfd::FileDialog::new()
            .set_file_name("shape.ron")
            .save_file()
        else {
            return;
        };
        let written = to_string_pretty(result, PrettyConfig::default())
            .map_err(|e| e.to_string())
            .and_then(|data| fs::write(&path, data).map_err(|e| e.to_string()));
        if let Err(err) = written {
            self.overlay.label = format!("Export failed: {err}");
        }
    }

    pub fn ui_control(&mut self, ui: &mut egui::Ui) -> egui::Response {
        ui.horizontal(|ui| {
            let mut changed = ui
                .add(egui::Slider::new(&mut self.epsilon, 1.0..=60.0).text("epsilon"))
                .changed();
            changed |= ui
                .add(egui::Slider::new(&mut self.area_stride, 1..=20).text("area stride"))
                .changed();
            if changed {
                self.apply_config();
            }
            ui.separator();
            if ui.button("Export Result").clicked() {
                self.export_result();
            }
            if ui.button("Clear Drawing").clicked() {
                self.stroke.clear();
                self.overlay.clear();
            }
            ui.label(self.overlay.label.clone());
        })
        .response
    }

    pub fn ui_content(&mut self, ui: &mut Ui) -> egui::Response {
        let (mut response, painter) =
            ui.allocate_painter(ui.available_size_before_wrap(), Sense::drag());

        if let Some(pointer_pos) = response.interact_pointer_pos() {
            if !self.drawing {
                self.drawing = true;
                self.stroke.clear();
                self.overlay.clear();
            }
            let p = Point::new(pointer_pos.x, pointer_pos.y);
            if self.stroke.last() != Some(&p) {
                self.stroke.push(p);
                response.mark_changed();
            }
        } else if self.drawing {
            self.drawing = false;
            self.recognize_stroke();
            response.mark_changed();
        }

        if self.stroke.len() >= 2 {
            let points: Vec<Pos2> = self.stroke.points().iter().map(|p| Pos2::new(p.x, p.y)).collect();
            painter.add(egui::Shape::line(points, self.pen));
        }
        for marker in &self.overlay.corner_markers {
            painter.circle_filled(*marker, 5.0, Color32::GREEN);
        }

        response
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("metrics").show(ctx, |ui| {
            ui.label("Metrics:");
            match &self.overlay.last_result {
                Some(result) => {
                    let m = &result.metrics;
                    ui.label(format!("Corners: {}", m.corner_count));
                    ui.label(format!("Circularity: {:.2}", m.circularity));
                    match m.aspect_ratio {
                        Some(ratio) => ui.label(format!("Aspect ratio: {ratio:.2}")),
                        None => ui.label("Aspect ratio: flat"),
                    };
                    ui.label(format!("Perimeter: {:.1}", m.perimeter));
                    ui.label(format!("Area: {:.1}", m.area));
                    ui.label(format!(
                        "Bounds: {:.0}x{:.0}",
                        m.bounding_box.width, m.bounding_box.height
                    ));
                }
                None => {
                    ui.label("Nothing recognized yet");
                }
            }
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui_control(ui);
            ui.label("Draw a triangle, square, rectangle or circle!");
            Frame::canvas(ui.style()).show(ui, |ui| {
                self.ui_content(ui);
            });
        });
    }
}
