pub mod config;
pub mod error;
pub mod karplus_strong;
pub mod instrument;
pub mod tuning;
pub mod score;
pub mod sink;
pub mod util;
#[cfg(feature = "alsa-output")]
pub mod alsa;

pub use crate::error::{Error, Result};
pub use crate::instrument::Piano;
pub use crate::karplus_strong::{MusicString, PianoString};

pub const SAMPLE_RATE: u32 = 44_100;

/// Share of energy a wave keeps per round trip through the wire.
pub const DEFAULT_DECAY: f64 = 0.996;
