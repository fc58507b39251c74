//! Visualization: Amplitude Spectrum
//!
//! Wave magnitude against frequency for the demo signal's decomposition,
//! with the dominant waves (those above the amplitude threshold) highlighted.
//!
//! Run: cargo run --release --bin viz_spectrum [-- --rate R --duration D --freq F --threshold T]

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};
use fourier_resynth::viz_common::{self, spectrum_points};

fn main() -> eframe::Result<()> {
    let pipeline = viz_common::load_demo_pipeline();

    let all_points = spectrum_points(&pipeline.waves);
    let dominant_points = spectrum_points(&pipeline.dominant);

    // Horizontal cut line at the dominance threshold.
    let max_frequency = pipeline
        .waves
        .last()
        .map_or(1.0, |w| w.frequency());
    let threshold_line = vec![
        [0.0, pipeline.threshold],
        [max_frequency, pipeline.threshold],
    ];

    let info_line = format!(
        "{} waves | {} dominant | threshold {}",
        pipeline.waves.len(),
        pipeline.dominant.len(),
        pipeline.threshold,
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 800.0])
            .with_title("Fourier Resynth — Spectrum"),
        ..Default::default()
    };

    eframe::run_native(
        "Spectrum",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(SpectrumApp {
                all_points,
                dominant_points,
                threshold_line,
                info_line,
            }))
        }),
    )
}

struct SpectrumApp {
    all_points: Vec<[f64; 2]>,
    dominant_points: Vec<[f64; 2]>,
    threshold_line: Vec<[f64; 2]>,
    info_line: String,
}

impl eframe::App for SpectrumApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Amplitude Spectrum");
                ui.separator();
                ui.label(&self.info_line);
            });
            ui.label("Grey=all waves, Red=dominant (kept for reconstruction), Yellow=threshold.");
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let plot = Plot::new("spectrum")
                .legend(Legend::default())
                .x_axis_label("Frequency (Hz)")
                .y_axis_label("|Amplitude|")
                .allow_zoom(true)
                .allow_drag(true)
                .allow_scroll(true);

            plot.show(ui, |plot_ui| {
                plot_ui.points(
                    Points::new(PlotPoints::new(self.all_points.clone()))
                        .name("All waves")
                        .color(egui::Color32::from_rgb(140, 140, 140))
                        .radius(1.5),
                );
                plot_ui.points(
                    Points::new(PlotPoints::new(self.dominant_points.clone()))
                        .name("Dominant")
                        .color(egui::Color32::from_rgb(255, 80, 80))
                        .radius(4.0),
                );
                plot_ui.line(
                    Line::new(PlotPoints::new(self.threshold_line.clone()))
                        .name("Threshold")
                        .color(egui::Color32::from_rgb(255, 200, 50))
                        .width(1.0),
                );
            });
        });
    }
}
