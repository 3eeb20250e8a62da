pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The filter reads two neighbouring slots, so a delay line needs at least two.
    #[error("delay line for note {note:?} has length {length}, need at least 2")]
    DelayLineTooShort { note: String, length: usize },

    #[error("invalid value {value:?} for <{name}>")]
    InvalidArgument { name: String, value: String },

    #[error("decay must lie in (0, 1), got {0}")]
    InvalidDecay(f64),

    #[error("sample rate must be positive")]
    InvalidSampleRate,

    #[error("sample is not a number")]
    NonFiniteSample,

    #[error("no audio output configured, pass --output FILE")]
    NoOutput,

    #[error("wav output: {0}")]
    Wav(#[from] hound::Error),

    #[cfg(feature = "alsa-output")]
    #[error("audio device: {0}")]
    Alsa(#[from] ::alsa::Error),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}
