// src/audio_io.rs

use crate::audio_device;
use crate::audio_engine::{AudioEngine, EngineMeters};
use crate::audio_error::{AudioError, AudioResult};
use crate::params::ParamStore;
use crate::settings::AppSettings;
use cpal::traits::{DeviceTrait, StreamTrait};
use cpal::{BufferSize, Device, FromSample, Sample, SampleFormat, Stream, StreamConfig};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Keeps the output stream alive and describes what was opened.
pub struct AudioHandle {
    _stream: Stream,
    pub device_name: String,
    pub sample_rate: u32,
    pub buffer_size: Option<u32>,
    pub channels: u16,
    pub meters: EngineMeters,
}

pub fn init_and_run_stream(
    settings: &AppSettings,
    params: Arc<ParamStore>,
    xrun_count: Arc<AtomicUsize>,
) -> AudioResult<AudioHandle> {
    let host = audio_device::resolve_host(settings.host_name.as_deref())?;
    let device = audio_device::find_output_device(&host, settings.output_device.as_deref())?;
    let device_name = device.name().unwrap_or_else(|_| "Unknown".to_string());
    log::info!("Using output device: {} ({})", device_name, host.id().name());

    let default_config = device
        .default_output_config()
        .map_err(|e| AudioError::ConfigError(e.to_string()))?;
    let sample_format = default_config.sample_format();

    let mut config: StreamConfig = default_config.into();
    config.sample_rate = cpal::SampleRate(settings.sample_rate);
    if settings.buffer_size > 0 {
        config.buffer_size = BufferSize::Fixed(settings.buffer_size);
    }

    let engine = AudioEngine::new(params, config.sample_rate.0 as f64);
    let meters = engine.meters();

    let stream = match sample_format {
        SampleFormat::F32 => build_output_stream::<f32>(&device, &config, engine, xrun_count)?,
        SampleFormat::I16 => build_output_stream::<i16>(&device, &config, engine, xrun_count)?,
        SampleFormat::U16 => build_output_stream::<u16>(&device, &config, engine, xrun_count)?,
        format => return Err(AudioError::UnsupportedFormat(format.to_string())),
    };
    stream
        .play()
        .map_err(|e| AudioError::StreamPlayError(e.to_string()))?;

    let buffer_size = match config.buffer_size {
        BufferSize::Fixed(size) => Some(size),
        BufferSize::Default => None,
    };
    let latency_ms = buffer_size.map(|bs| bs as f32 / config.sample_rate.0 as f32 * 1000.0);
    log::info!(
        "Audio stream started: {} channels, {} Hz, {:?} frames ({:?} ms), format {}",
        config.channels,
        config.sample_rate.0,
        buffer_size,
        latency_ms,
        sample_format
    );

    Ok(AudioHandle {
        _stream: stream,
        device_name,
        sample_rate: config.sample_rate.0,
        buffer_size,
        channels: config.channels,
        meters,
    })
}

fn build_output_stream<T>(
    device: &Device,
    config: &StreamConfig,
    mut engine: AudioEngine,
    xrun_count: Arc<AtomicUsize>,
) -> AudioResult<Stream>
where
    T: Sample + cpal::SizedSample + FromSample<f32>,
{
    let channels = config.channels as usize;
    let err_fn = move |err: cpal::StreamError| {
        log::warn!("an error occurred on output stream: {}", err);
        xrun_count.fetch_add(1, Ordering::Relaxed);
    };

    device
        .build_output_stream(
            config,
            move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                engine.fill_frames(data, channels);
            },
            err_fn,
            None,
        )
        .map_err(|e| AudioError::StreamBuildError(e.to_string()))
}
