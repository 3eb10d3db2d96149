// src/params.rs

//! The shared parameter store read by the audio thread and written by the control surface.
//!
//! Every field is its own atomic. Writers store one field at a time and the audio thread
//! loads fields independently, so a frame may see a mix of old and new values across
//! fields of the same source. No field is ever observed half-written.

use crate::controls;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

pub const NUM_SOURCES: usize = 3;

/// An `f64` stored as its bit pattern in an `AtomicU64`.
#[derive(Debug)]
pub struct AtomicF64(AtomicU64);

impl AtomicF64 {
    pub fn new(value: f64) -> Self {
        Self(AtomicU64::new(value.to_bits()))
    }

    #[inline]
    pub fn load(&self) -> f64 {
        f64::from_bits(self.0.load(Ordering::Relaxed))
    }

    #[inline]
    pub fn store(&self, value: f64) {
        self.0.store(value.to_bits(), Ordering::Relaxed);
    }
}

/// The sound sources the engine can mix. Order here is the order they are mixed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    WhiteNoise = 0,
    PinkNoise = 1,
    SineTone = 2,
}

impl Source {
    pub const ALL: [Source; NUM_SOURCES] = [Source::WhiteNoise, Source::PinkNoise, Source::SineTone];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::WhiteNoise => write!(f, "White Noise"),
            Source::PinkNoise => write!(f, "Pink Noise"),
            Source::SineTone => write!(f, "Sine Tone"),
        }
    }
}

/// Parameters every source has.
#[derive(Debug)]
pub struct SourceParams {
    pub enabled: AtomicBool,
    /// Pan position, -1.0 (left) to 1.0 (right).
    pub pan: AtomicF64,
    /// Linear volume, 0.0 to 1.0.
    pub volume: AtomicF64,
}

impl SourceParams {
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }
}

impl Default for SourceParams {
    fn default() -> Self {
        Self {
            enabled: AtomicBool::new(false),
            pan: AtomicF64::new(controls::pan_from_control(controls::CONTROL_CENTER)),
            volume: AtomicF64::new(controls::volume_from_control(controls::CONTROL_CENTER)),
        }
    }
}

/// Extra parameters of the sine tone.
#[derive(Debug)]
pub struct ToneParams {
    /// Raw coarse slider position (0-100). Fine offsets are computed against it.
    pub coarse_control: AtomicF64,
    pub coarse_hz: AtomicF64,
    /// Offset in Hz added to `coarse_hz`.
    pub fine_hz: AtomicF64,
    /// Phase offset in percent of a cycle, -50 to 50.
    pub offset_percent: AtomicF64,
}

impl Default for ToneParams {
    fn default() -> Self {
        Self {
            coarse_control: AtomicF64::new(controls::CONTROL_CENTER),
            coarse_hz: AtomicF64::new(controls::coarse_hz(controls::CONTROL_CENTER)),
            fine_hz: AtomicF64::new(0.0),
            offset_percent: AtomicF64::new(controls::offset_from_control(
                controls::CONTROL_CENTER,
            )),
        }
    }
}

/// Process-wide parameter state, shared through an `Arc` by the UI and the engine.
#[derive(Debug, Default)]
pub struct ParamStore {
    sources: [SourceParams; NUM_SOURCES],
    tone: ToneParams,
}

impl ParamStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn source(&self, source: Source) -> &SourceParams {
        &self.sources[source.index()]
    }

    #[inline]
    pub fn tone(&self) -> &ToneParams {
        &self.tone
    }

    pub fn enabled_count(&self) -> usize {
        self.sources.iter().filter(|s| s.is_enabled()).count()
    }
}
