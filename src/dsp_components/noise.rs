// src/dsp_components/noise.rs

//! White and pink noise generators.
use rand::rngs::StdRng;
use rand::Rng;

/// Uniform white noise in [-1, 1).
#[derive(Debug, Clone)]
pub struct WhiteNoise<R: Rng = StdRng> {
    rng: R,
}

impl<R: Rng> WhiteNoise<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    #[inline]
    pub fn next_sample(&mut self) -> f64 {
        self.rng.gen::<f64>() * 2.0 - 1.0
    }
}

/// Pink (1/f) noise using Paul Kellet's refined filter bank.
///
/// See <https://www.firstpr.com.au/dsp/pink-noise/>. The output is not normalized and
/// regularly exceeds +/-1; downstream gain control is expected to scale it.
#[derive(Debug, Clone)]
pub struct PinkNoise<R: Rng = StdRng> {
    white: WhiteNoise<R>,
    b0: f64,
    b1: f64,
    b2: f64,
    b3: f64,
    b4: f64,
    b5: f64,
    b6: f64,
}

impl<R: Rng> PinkNoise<R> {
    pub fn new(rng: R) -> Self {
        Self {
            white: WhiteNoise::new(rng),
            b0: 0.0,
            b1: 0.0,
            b2: 0.0,
            b3: 0.0,
            b4: 0.0,
            b5: 0.0,
            b6: 0.0,
        }
    }

    #[inline]
    pub fn next_sample(&mut self) -> f64 {
        let white = self.white.next_sample();
        self.b0 = 0.99886 * self.b0 + white * 0.0555179;
        self.b1 = 0.99332 * self.b1 + white * 0.0750759;
        self.b2 = 0.96900 * self.b2 + white * 0.1538520;
        self.b3 = 0.86650 * self.b3 + white * 0.3104856;
        self.b4 = 0.55000 * self.b4 + white * 0.5329522;
        self.b5 = -0.7616 * self.b5 - white * 0.0168980;
        self.b6 = white * 0.115926;
        self.b0 + self.b1 + self.b2 + self.b3 + self.b4 + self.b5 + self.b6 + white * 0.5362
    }
}
