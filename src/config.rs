use std::path::PathBuf;

use clap::{App, Arg, ArgMatches};

use crate::error::{Error, Result};
use crate::{DEFAULT_DECAY, SAMPLE_RATE};

#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    Wav(PathBuf),
    Device(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub decay: f64,
    pub sample_rate: u32,
    pub output: Output,
}

pub fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("pianowire")
        .about("Plays a Karplus-Strong piano")
        .arg(Arg::with_name("decay")
             .help("Energy kept per round trip through a string, in (0, 1)")
             .index(1))
        .arg(Arg::with_name("output")
             .short("o")
             .long("output")
             .takes_value(true)
             .value_name("FILE")
             .help("Write a WAV file instead of playing on a device"))
        .arg(Arg::with_name("rate")
             .short("r")
             .long("rate")
             .takes_value(true)
             .value_name("HZ")
             .help("Sample rate"))
        .arg(Arg::with_name("device")
             .short("d")
             .long("device")
             .takes_value(true)
             .value_name("NAME")
             .help("ALSA playback device"))
}

fn parse<T: std::str::FromStr>(matches: &ArgMatches, name: &str) -> Result<Option<T>> {
    match matches.value_of(name) {
        Some(v) => v.parse::<T>().map(Some).map_err(|_| Error::InvalidArgument {
            name: name.to_string(),
            value: v.to_string(),
        }),
        None => Ok(None),
    }
}

impl Config {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let decay = parse::<f64>(matches, "decay")?.unwrap_or(DEFAULT_DECAY);
        let sample_rate = parse::<u32>(matches, "rate")?.unwrap_or(SAMPLE_RATE);

        let output = if let Some(path) = matches.value_of("output") {
            Output::Wav(PathBuf::from(path))
        } else if let Some(device) = matches.value_of("device") {
            Output::Device(device.to_string())
        } else if cfg!(feature = "alsa-output") {
            Output::Device("default".to_string())
        } else {
            return Err(Error::NoOutput);
        };

        let config = Self { decay, sample_rate, output };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.decay > 0.0 && self.decay < 1.0) {
            return Err(Error::InvalidDecay(self.decay));
        }
        if self.sample_rate == 0 {
            return Err(Error::InvalidSampleRate);
        }
        Ok(())
    }
}
