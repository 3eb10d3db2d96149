// src/ui/source_panel.rs

use crate::app::{SourceControls, ToneControls};
use crate::audio_engine::ParamCommand;
use crate::controls;
use crate::params::{ParamStore, Source};
use egui::{Grid, RichText, Slider, Ui};

const LABEL_WIDTH: f32 = 120.0;

fn control_slider(ui: &mut Ui, value: &mut f64) -> bool {
    ui.add(
        Slider::new(value, controls::CONTROL_MIN..=controls::CONTROL_MAX)
            .step_by(1.0)
            .show_value(false),
    )
    .changed()
}

fn value_label(ui: &mut Ui, text: String) {
    ui.add_sized(
        [LABEL_WIDTH, ui.spacing().interact_size.y],
        egui::Label::new(RichText::new(text).monospace()),
    );
}

/// Draws one source card. Any slider or checkbox the user touched is pushed onto `commands`.
pub fn draw_source_panel(
    ui: &mut Ui,
    params: &ParamStore,
    source: Source,
    state: &mut SourceControls,
    tone: Option<&mut ToneControls>,
    commands: &mut Vec<ParamCommand>,
) {
    ui.group(|ui| {
        ui.label(RichText::new(format!("{} Controls", source)).strong());
        ui.horizontal(|ui| {
            if ui.checkbox(&mut state.enabled, source.to_string()).changed() {
                commands.push(ParamCommand::SetEnabled(source, state.enabled));
            }

            Grid::new(("source_controls", source.index()))
                .num_columns(2)
                .show(ui, |ui| {
                    value_label(ui, format!("Pan: {:+.2}", controls::pan_from_control(state.pan)));
                    if control_slider(ui, &mut state.pan) {
                        commands.push(ParamCommand::SetPan(source, state.pan));
                    }
                    ui.end_row();

                    value_label(
                        ui,
                        format!("Vol: {:+.2}", controls::volume_from_control(state.volume)),
                    );
                    if control_slider(ui, &mut state.volume) {
                        commands.push(ParamCommand::SetVolume(source, state.volume));
                    }
                    ui.end_row();

                    if let Some(tone) = tone {
                        draw_tone_rows(ui, params, tone, commands);
                    }
                });
        });
    });
}

fn draw_tone_rows(
    ui: &mut Ui,
    params: &ParamStore,
    tone: &mut ToneControls,
    commands: &mut Vec<ParamCommand>,
) {
    value_label(
        ui,
        format!("Off: %{:+.2}", controls::offset_from_control(tone.offset)),
    );
    if control_slider(ui, &mut tone.offset) {
        commands.push(ParamCommand::SetToneOffset(tone.offset));
    }
    ui.end_row();

    value_label(ui, format!("Hertz: {:.0}", controls::coarse_hz(tone.coarse)));
    if control_slider(ui, &mut tone.coarse) {
        commands.push(ParamCommand::SetToneCoarse(tone.coarse));
    }
    ui.end_row();

    // The fine label shows what the engine is actually playing.
    let stored = params.tone();
    value_label(
        ui,
        format!("Hertz: {:.0}", stored.coarse_hz.load() + stored.fine_hz.load()),
    );
    if control_slider(ui, &mut tone.fine) {
        commands.push(ParamCommand::SetToneFine(tone.fine));
    }
    ui.end_row();
}
