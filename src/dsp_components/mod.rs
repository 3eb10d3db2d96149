// src/dsp_components/mod.rs

// Declare all component modules
pub mod agc;
pub mod noise;
pub mod pan;
pub mod sine;

pub use agc::Agc;
pub use noise::{PinkNoise, WhiteNoise};
pub use pan::circular_pan;
pub use sine::SineOscillator;
