use crate::error::Result;
use crate::util::clip;

pub mod wav;

pub use self::wav::WavSink;

/// Consumer of the mixed signal, fed one sample per tick.
pub trait Sink {
    /// Queue one sample. Values outside [-1, 1] are clipped, NaN is an error.
    fn play_sample(&mut self, s: f64) -> Result<()>;

    /// Push out everything queued so far.
    fn drain(&mut self) -> Result<()>;
}

impl<'a, S: Sink + ?Sized> Sink for &'a mut S {
    fn play_sample(&mut self, s: f64) -> Result<()> {
        (**self).play_sample(s)
    }

    fn drain(&mut self) -> Result<()> {
        (**self).drain()
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn play_sample(&mut self, s: f64) -> Result<()> {
        (**self).play_sample(s)
    }

    fn drain(&mut self) -> Result<()> {
        (**self).drain()
    }
}

/// Keeps every clipped sample in memory.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    pub samples: Vec<f64>,
    pub drains: usize,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Sink for MemorySink {
    fn play_sample(&mut self, s: f64) -> Result<()> {
        self.samples.push(clip(s)?);
        Ok(())
    }

    fn drain(&mut self) -> Result<()> {
        self.drains += 1;
        Ok(())
    }
}
