// src/app.rs
use crate::audio_engine::ParamCommand;
use crate::audio_io::AudioHandle;
use crate::controls;
use crate::params::{ParamStore, NUM_SOURCES};
use crate::ui;
use std::sync::atomic::AtomicUsize;
use std::sync::Arc;
use std::time::Duration;

const PEAK_METER_FALLOFF: f32 = 0.9;

/// Slider positions (0-100) for a source card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceControls {
    pub enabled: bool,
    pub pan: f64,
    pub volume: f64,
}

impl Default for SourceControls {
    fn default() -> Self {
        Self {
            enabled: false,
            pan: controls::CONTROL_CENTER,
            volume: controls::CONTROL_CENTER,
        }
    }
}

/// Slider positions (0-100) for the tone-only controls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneControls {
    pub coarse: f64,
    pub fine: f64,
    pub offset: f64,
}

impl Default for ToneControls {
    fn default() -> Self {
        Self {
            coarse: controls::CONTROL_CENTER,
            fine: controls::CONTROL_CENTER,
            offset: controls::CONTROL_CENTER,
        }
    }
}

pub struct TinnitusApp {
    // --- Audio Engine Resources (managed) ---
    pub audio: AudioHandle,
    pub xrun_count: Arc<AtomicUsize>,

    // --- UI / Shared State ---
    pub params: Arc<ParamStore>,
    pub source_controls: [SourceControls; NUM_SOURCES],
    pub tone_controls: ToneControls,
    pub displayed_peak_level: f32,
}

impl TinnitusApp {
    pub fn new(params: Arc<ParamStore>, audio: AudioHandle, xrun_count: Arc<AtomicUsize>) -> Self {
        Self {
            audio,
            xrun_count,
            params,
            source_controls: [SourceControls::default(); NUM_SOURCES],
            tone_controls: ToneControls::default(),
            displayed_peak_level: 0.0,
        }
    }

    pub fn send_command(&self, command: ParamCommand) {
        command.apply(&self.params);
    }
}

impl eframe::App for TinnitusApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let peak = self.audio.meters.output_peak();
        self.displayed_peak_level = peak.max(self.displayed_peak_level * PEAK_METER_FALLOFF);

        ui::draw_main_view(self, ctx);

        ctx.request_repaint_after(Duration::from_millis(50));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Source;

    #[test]
    fn initial_sliders_agree_with_the_store() {
        let store = ParamStore::new();
        let source = SourceControls::default();
        for s in Source::ALL {
            let params = store.source(s);
            assert_eq!(params.is_enabled(), source.enabled);
            assert_eq!(params.pan.load(), controls::pan_from_control(source.pan));
            assert_eq!(params.volume.load(), controls::volume_from_control(source.volume));
        }

        let tone = ToneControls::default();
        assert_eq!(store.tone().coarse_control.load(), tone.coarse);
        assert_eq!(store.tone().coarse_hz.load(), controls::coarse_hz(tone.coarse));
        assert_eq!(
            store.tone().fine_hz.load(),
            controls::fine_hz(tone.coarse, tone.fine)
        );
        assert_eq!(
            store.tone().offset_percent.load(),
            controls::offset_from_control(tone.offset)
        );
    }

    #[test]
    fn replaying_slider_state_reproduces_the_store() {
        let store = ParamStore::new();
        let source = SourceControls {
            enabled: true,
            pan: 20.0,
            volume: 70.0,
        };
        let tone = ToneControls {
            coarse: 64.0,
            fine: 12.0,
            offset: 90.0,
        };
        let commands = [
            ParamCommand::SetEnabled(Source::SineTone, source.enabled),
            ParamCommand::SetPan(Source::SineTone, source.pan),
            ParamCommand::SetVolume(Source::SineTone, source.volume),
            ParamCommand::SetToneCoarse(tone.coarse),
            ParamCommand::SetToneFine(tone.fine),
            ParamCommand::SetToneOffset(tone.offset),
        ];
        for command in commands {
            command.apply(&store);
        }

        let params = store.source(Source::SineTone);
        assert!(params.is_enabled());
        assert_eq!(params.pan.load(), controls::pan_from_control(20.0));
        assert_eq!(params.volume.load(), controls::volume_from_control(70.0));
        assert_eq!(
            store.tone().fine_hz.load(),
            controls::fine_hz(64.0, 12.0)
        );
        assert_eq!(store.tone().offset_percent.load(), 40.0);
    }
}
