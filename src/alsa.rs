use ::alsa::pcm::{self, PCM};
use ::alsa::{Direction, ValueOr};
use log::{info, warn};

use crate::error::Result;
use crate::sink::Sink;
use crate::util::to_pcm;

/// Frames handed to the device per write.
const BUFFER_SIZE: usize = 1024;

/// Mono 16 bit playback on an ALSA device.
pub struct AlsaSink {
    pcm: PCM,
    buffer: Vec<i16>,
    rate: u32,
}

impl AlsaSink {
    pub fn open(device: &str, sample_rate: u32) -> Result<Self> {
        let p = PCM::new(device, Direction::Playback, false)?;

        // Set hardware parameters
        {
            let hwp = pcm::HwParams::any(&p)?;
            hwp.set_channels(1)?;
            hwp.set_rate(sample_rate, ValueOr::Nearest)?;
            hwp.set_format(pcm::Format::s16())?;
            hwp.set_access(pcm::Access::RWInterleaved)?;
            hwp.set_buffer_size(BUFFER_SIZE as pcm::Frames * 4)?;
            hwp.set_period_size(BUFFER_SIZE as pcm::Frames, ValueOr::Nearest)?;
            p.hw_params(&hwp)?;
        }

        // Set software parameters
        let rate = {
            let hwp = p.hw_params_current()?;
            let swp = p.sw_params_current()?;
            let (bufsize, periodsize) = (hwp.get_buffer_size()?, hwp.get_period_size()?);
            swp.set_start_threshold(bufsize - periodsize)?;
            swp.set_avail_min(periodsize)?;
            p.sw_params(&swp)?;
            info!("Opened audio output {:?} with parameters: {:?}, {:?}", device, hwp, swp);
            hwp.get_rate()?
        };
        if rate != sample_rate {
            warn!("Device runs at {} Hz instead of {} Hz, pitch will be off", rate, sample_rate);
        }

        Ok(Self { pcm: p, buffer: Vec::with_capacity(BUFFER_SIZE), rate })
    }

    /// Rate the device actually runs at.
    pub fn rate(&self) -> u32 {
        self.rate
    }

    fn write_buffer(&mut self) -> Result<()> {
        let io = self.pcm.io_i16()?;
        let mut offset = 0;
        while offset < self.buffer.len() {
            match io.writei(&self.buffer[offset..]) {
                Ok(frames) => offset += frames,
                Err(e) => {
                    warn!("Underrun in audio output stream: {}", e);
                    self.pcm.try_recover(e, true)?;
                }
            }
        }
        self.buffer.clear();
        Ok(())
    }
}

impl Sink for AlsaSink {
    fn play_sample(&mut self, s: f64) -> Result<()> {
        self.buffer.push(to_pcm(s)?);
        if self.buffer.len() >= BUFFER_SIZE {
            self.write_buffer()?;
        }
        Ok(())
    }

    fn drain(&mut self) -> Result<()> {
        self.write_buffer()?;
        self.pcm.drain()?;
        Ok(())
    }
}
