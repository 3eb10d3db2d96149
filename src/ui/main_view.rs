use crate::app::TinnitusApp;
use crate::params::{Source, NUM_SOURCES};
use crate::ui::source_panel::draw_source_panel;
use egui::{CentralPanel, Color32, ProgressBar, RichText, TopBottomPanel, ViewportCommand};
use std::sync::atomic::Ordering;

pub fn draw_main_view(app: &mut TinnitusApp, ctx: &egui::Context) {
    TopBottomPanel::top("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(&app.audio.device_name).monospace());
            ui.separator();

            let buffer_text = match app.audio.buffer_size {
                Some(frames) => format!("{} Hz / {} frames", app.audio.sample_rate, frames),
                None => format!("{} Hz / default buffer", app.audio.sample_rate),
            };
            ui.label(RichText::new(buffer_text).monospace());
            ui.label(RichText::new(format!("{} ch", app.audio.channels)).monospace());
            ui.separator();

            let active = app.params.enabled_count();
            ui.label(RichText::new(format!("Active: {}/{}", active, NUM_SOURCES)).monospace());
            ui.separator();

            let cpu_text = format!("CPU: {:>5.1}%", app.audio.meters.cpu_load_percent());
            ui.label(RichText::new(cpu_text).monospace());

            let xruns = app.xrun_count.load(Ordering::Relaxed);
            let mut xrun_text = RichText::new(format!("Xruns: {}", xruns)).monospace();
            if xruns > 0 {
                xrun_text = xrun_text.color(Color32::LIGHT_RED);
            }
            ui.label(xrun_text);
        });
    });

    TopBottomPanel::bottom("output_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new("Output").monospace());
            let peak = app.displayed_peak_level;
            let mut meter = ProgressBar::new(peak.clamp(0.0, 1.0)).desired_width(200.0);
            if peak > 1.0 {
                meter = meter.fill(Color32::LIGHT_RED);
            }
            ui.add(meter);

            ui.separator();
            if ui.button("Quit").clicked() {
                ctx.send_viewport_cmd(ViewportCommand::Close);
            }
        });
    });

    CentralPanel::default().show(ctx, |ui| {
        let mut commands = Vec::new();
        for source in Source::ALL {
            let tone = if source == Source::SineTone {
                Some(&mut app.tone_controls)
            } else {
                None
            };
            draw_source_panel(
                ui,
                &app.params,
                source,
                &mut app.source_controls[source.index()],
                tone,
                &mut commands,
            );
            ui.add_space(6.0);
        }

        for command in commands {
            app.send_command(command);
        }
    });
}
