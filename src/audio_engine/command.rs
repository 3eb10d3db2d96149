// FILE: src\audio_engine\command.rs
// ==================================

use crate::controls;
use crate::params::{ParamStore, Source};
use std::sync::atomic::Ordering;

/// A single control-surface interaction. Values are raw 0-100 control positions.
///
/// Applying a command performs the stores for exactly one parameter and takes effect on
/// the next frame the engine renders. Nothing is queued.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamCommand {
    SetEnabled(Source, bool),
    SetPan(Source, f64),
    SetVolume(Source, f64),
    SetToneCoarse(f64),
    SetToneFine(f64),
    SetToneOffset(f64),
}

impl ParamCommand {
    pub fn apply(self, store: &ParamStore) {
        log::debug!("Applying {:?}", self);
        match self {
            ParamCommand::SetEnabled(source, enabled) => {
                store.source(source).enabled.store(enabled, Ordering::Relaxed);
            }
            ParamCommand::SetPan(source, value) => {
                store.source(source).pan.store(controls::pan_from_control(value));
            }
            ParamCommand::SetVolume(source, value) => {
                store
                    .source(source)
                    .volume
                    .store(controls::volume_from_control(value));
            }
            ParamCommand::SetToneCoarse(value) => {
                // The stored fine offset is left as is.
                let tone = store.tone();
                let value = controls::clamp_control(value);
                tone.coarse_control.store(value);
                tone.coarse_hz.store(controls::coarse_hz(value));
            }
            ParamCommand::SetToneFine(value) => {
                let tone = store.tone();
                let coarse_snapshot = tone.coarse_control.load();
                tone.fine_hz.store(controls::fine_hz(coarse_snapshot, value));
            }
            ParamCommand::SetToneOffset(value) => {
                store
                    .tone()
                    .offset_percent
                    .store(controls::offset_from_control(value));
            }
        }
    }
}
