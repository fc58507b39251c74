//! Visualization: Original vs Reconstructed Signal
//!
//! Overlays the demo signal with its reconstruction from the dominant
//! frequency components, so the quality of the lossy resynthesis is visible
//! directly.
//!
//! Run: cargo run --release --bin viz_reconstruction [-- --rate R --duration D --freq F --threshold T]

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use fourier_resynth::synth;
use fourier_resynth::viz_common::{self, to_plot_points};

fn main() -> eframe::Result<()> {
    let pipeline = viz_common::load_demo_pipeline();

    println!("Reconstructing from {} dominant waves...", pipeline.dominant.len());
    let reconstructed = synth::reconstruct(&pipeline.dominant, 1.0, &pipeline.times)
        .unwrap_or_else(|e| panic!("reconstruction failed: {e}"));

    let original_points = to_plot_points(&pipeline.times, &pipeline.samples);
    let reconstructed_points = to_plot_points(&pipeline.times, &reconstructed);

    let info_line = format!(
        "{} samples at {} Hz | {} waves kept of {} (threshold {})",
        pipeline.samples.len(),
        pipeline.sampling_rate,
        pipeline.dominant.len(),
        pipeline.waves.len(),
        pipeline.threshold,
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 800.0])
            .with_title("Fourier Resynth — Reconstruction"),
        ..Default::default()
    };

    eframe::run_native(
        "Reconstruction",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(ReconstructionApp {
                original_points,
                reconstructed_points,
                info_line,
            }))
        }),
    )
}

struct ReconstructionApp {
    original_points: Vec<[f64; 2]>,
    reconstructed_points: Vec<[f64; 2]>,
    info_line: String,
}

impl eframe::App for ReconstructionApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Reconstruction");
                ui.separator();
                ui.label(&self.info_line);
            });
            ui.label("White=original, Red=reconstructed from dominant waves. Scroll to zoom, drag to pan.");
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let plot = Plot::new("reconstruction")
                .legend(Legend::default())
                .x_axis_label("Time (s)")
                .y_axis_label("Amplitude")
                .allow_zoom(true)
                .allow_drag(true)
                .allow_scroll(true);

            plot.show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(PlotPoints::new(self.original_points.clone()))
                        .name("Original")
                        .color(egui::Color32::from_rgb(230, 230, 230))
                        .width(1.0),
                );
                plot_ui.line(
                    Line::new(PlotPoints::new(self.reconstructed_points.clone()))
                        .name("Reconstructed")
                        .color(egui::Color32::from_rgb(255, 80, 80))
                        .width(1.5),
                );
            });
        });
    }
}
