// src/audio_engine.rs

mod command;

pub use command::ParamCommand;

use crate::dsp_components::{circular_pan, Agc, PinkNoise, SineOscillator, WhiteNoise};
use crate::params::{ParamStore, Source, NUM_SOURCES};
use cpal::{FromSample, Sample};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Instant;

pub const LOAD_SCALER: f32 = 1000.0;

/// Per-source stereo contributions for one output frame. Never allocates.
#[derive(Debug, Clone, Copy, Default)]
struct MixFrame {
    contributions: [(f64, f64); NUM_SOURCES],
    len: usize,
}

impl MixFrame {
    #[inline]
    fn push(&mut self, left: f64, right: f64) {
        self.contributions[self.len] = (left, right);
        self.len += 1;
    }

    /// Equal-weight average of the contributions, or silence if there are none.
    #[inline]
    fn average(&self) -> (f64, f64) {
        if self.len == 0 {
            return (0.0, 0.0);
        }
        let portion = 1.0 / self.len as f64;
        self.contributions[..self.len]
            .iter()
            .fold((0.0, 0.0), |(l, r), &(cl, cr)| (l + cl * portion, r + cr * portion))
    }
}

/// Telemetry the audio thread publishes for the control surface.
#[derive(Debug, Clone)]
pub struct EngineMeters {
    /// Callback time over buffer duration, scaled by `LOAD_SCALER`.
    pub cpu_load: Arc<AtomicU32>,
    /// Absolute output peak of the last buffer, stored as `f32` bits.
    pub output_peak: Arc<AtomicU32>,
}

impl Default for EngineMeters {
    fn default() -> Self {
        Self {
            cpu_load: Arc::new(AtomicU32::new(0)),
            output_peak: Arc::new(AtomicU32::new(0.0f32.to_bits())),
        }
    }
}

impl EngineMeters {
    pub fn cpu_load_percent(&self) -> f32 {
        self.cpu_load.load(Ordering::Relaxed) as f32 / LOAD_SCALER * 100.0
    }

    pub fn output_peak(&self) -> f32 {
        f32::from_bits(self.output_peak.load(Ordering::Relaxed))
    }
}

/// The audio-thread side: generators, per-source AGC, and the mixer.
pub struct AudioEngine<R: Rng = StdRng> {
    params: Arc<ParamStore>,
    sample_rate: f64,
    white: WhiteNoise<R>,
    pink: PinkNoise<R>,
    sine: SineOscillator,
    agcs: [Agc; NUM_SOURCES],
    meters: EngineMeters,
}

impl AudioEngine<StdRng> {
    pub fn new(params: Arc<ParamStore>, sample_rate: f64) -> Self {
        Self::with_rngs(
            params,
            sample_rate,
            StdRng::from_entropy(),
            StdRng::from_entropy(),
        )
    }
}

impl<R: Rng> AudioEngine<R> {
    /// Builds an engine whose noise generators draw from the given RNGs.
    pub fn with_rngs(params: Arc<ParamStore>, sample_rate: f64, white_rng: R, pink_rng: R) -> Self {
        Self {
            params,
            sample_rate,
            white: WhiteNoise::new(white_rng),
            pink: PinkNoise::new(pink_rng),
            sine: SineOscillator::new(sample_rate),
            agcs: Source::ALL.map(Agc::for_source),
            meters: EngineMeters::default(),
        }
    }

    pub fn meters(&self) -> EngineMeters {
        self.meters.clone()
    }

    #[inline]
    fn raw_sample(&mut self, source: Source) -> f64 {
        match source {
            Source::WhiteNoise => self.white.next_sample(),
            Source::PinkNoise => self.pink.next_sample(),
            Source::SineTone => {
                let tone = self.params.tone();
                self.sine.next_sample(
                    tone.offset_percent.load() / 100.0,
                    tone.coarse_hz.load(),
                    tone.fine_hz.load(),
                )
            }
        }
    }

    /// Renders one stereo frame from the currently enabled sources.
    #[inline]
    pub fn next_frame(&mut self) -> (f64, f64) {
        let mut frame = MixFrame::default();

        for source in Source::ALL {
            if !self.params.source(source).is_enabled() {
                continue;
            }
            let raw = self.raw_sample(source);
            let levelled = self.agcs[source.index()].process(raw);

            let params = self.params.source(source);
            let (left, right) = circular_pan(levelled, params.pan.load());
            let volume = params.volume.load();
            frame.push(left * volume, right * volume);
        }

        frame.average()
    }

    /// Fills an interleaved buffer with `channels` samples per frame.
    ///
    /// Stereo goes to the first two channels and any extra channels are silenced. A mono
    /// stream gets the average of left and right.
    pub fn fill_frames<T>(&mut self, data: &mut [T], channels: usize)
    where
        T: Sample + FromSample<f32>,
    {
        if channels == 0 {
            return;
        }
        let start_time = Instant::now();
        let mut peak = 0.0f32;

        for frame in data.chunks_mut(channels) {
            let (left, right) = self.next_frame();
            let (left, right) = (left as f32, right as f32);
            peak = peak.max(left.abs()).max(right.abs());

            match frame {
                [mono] => *mono = T::from_sample((left + right) * 0.5),
                [l, r, rest @ ..] => {
                    *l = T::from_sample(left);
                    *r = T::from_sample(right);
                    for sample in rest.iter_mut() {
                        *sample = T::EQUILIBRIUM;
                    }
                }
                [] => {}
            }
        }

        self.meters
            .output_peak
            .store(peak.to_bits(), Ordering::Relaxed);

        let num_frames = data.len() / channels;
        if num_frames > 0 {
            let buffer_duration_seconds = num_frames as f64 / self.sample_rate;
            let load_ratio = start_time.elapsed().as_secs_f64() / buffer_duration_seconds;
            self.meters
                .cpu_load
                .store((load_ratio as f32 * LOAD_SCALER) as u32, Ordering::Relaxed);
        }
    }
}
