use sample::Sample;

use crate::error::{Error, Result};

pub fn clamp(i: f64, min: f64, max: f64) -> f64 {
    if i < min {
        min
    } else if i > max {
        max
    } else {
        i
    }
}

pub fn clamp_audio(i: f64) -> f64 {
    clamp(i, -1.0, 1.0)
}

/// Clip a mixed sample to [-1, 1], rejecting NaN.
pub fn clip(s: f64) -> Result<f64> {
    if s.is_nan() {
        return Err(Error::NonFiniteSample);
    }
    Ok(clamp_audio(s))
}

/// Clip and convert to signed 16 bit PCM.
pub fn to_pcm(s: f64) -> Result<i16> {
    Ok(clip(s)?.to_sample::<i16>())
}
