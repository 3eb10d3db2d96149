use crate::audio_error::{AudioError, AudioResult};
use cpal::traits::{DeviceTrait, HostTrait};
use cpal::{Device, Host};

/// Picks the host named in settings, or the platform default.
pub fn resolve_host(host_name: Option<&str>) -> AudioResult<Host> {
    let Some(name) = host_name else {
        return Ok(cpal::default_host());
    };
    let host_id = cpal::available_hosts()
        .into_iter()
        .find(|id| id.name().eq_ignore_ascii_case(name))
        .ok_or_else(|| AudioError::HostUnavailable(name.to_string()))?;
    cpal::host_from_id(host_id).map_err(|e| AudioError::HostUnavailable(e.to_string()))
}

pub fn get_output_devices(host: &Host) -> AudioResult<Vec<(String, Device)>> {
    let devices = host
        .output_devices()
        .map_err(|e| AudioError::DeviceEnumeration(e.to_string()))?;
    let mut result = Vec::new();
    for device in devices {
        if let Ok(name) = device.name() {
            result.push((name, device));
        }
    }
    Ok(result)
}

/// Finds an output device by name, or falls back to the host default.
pub fn find_output_device(host: &Host, device_name: Option<&str>) -> AudioResult<Device> {
    match device_name {
        Some(name) => get_output_devices(host)?
            .into_iter()
            .find(|(candidate, _)| candidate == name)
            .map(|(_, device)| device)
            .ok_or_else(|| AudioError::DeviceNotFound(name.to_string())),
        None => host
            .default_output_device()
            .ok_or(AudioError::NoDefaultDevice),
    }
}
