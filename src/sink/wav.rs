use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use log::info;

use super::Sink;
use crate::error::Result;
use crate::util::to_pcm;

/// Mono 16 bit PCM written to a WAV file.
pub struct WavSink {
    writer: hound::WavWriter<BufWriter<File>>,
    written: u64,
}

impl WavSink {
    pub fn create<P: AsRef<Path>>(path: P, sample_rate: u32) -> Result<Self> {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let writer = hound::WavWriter::create(path.as_ref(), spec)?;
        info!("Writing {} Hz mono output to {:?}", sample_rate, path.as_ref());

        Ok(Self { writer, written: 0 })
    }

    pub fn written(&self) -> u64 {
        self.written
    }

    /// Write the final header. Dropping the sink does the same but swallows errors.
    pub fn finalize(self) -> Result<()> {
        let written = self.written;
        self.writer.finalize()?;
        info!("Finished WAV output after {} samples", written);
        Ok(())
    }
}

impl Sink for WavSink {
    fn play_sample(&mut self, s: f64) -> Result<()> {
        self.writer.write_sample(to_pcm(s)?)?;
        self.written += 1;
        Ok(())
    }

    fn drain(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
