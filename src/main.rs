use log::{error, info};

use pianowire::config::{self, Config, Output};
use pianowire::score::Player;
use pianowire::sink::WavSink;
use pianowire::tuning::keyboard;
use pianowire::Result;

fn run() -> Result<()> {
    let matches = config::app().get_matches();
    let config = Config::from_matches(&matches)?;
    info!("Decay {}, {} Hz", config.decay, config.sample_rate);

    let mut piano = keyboard(config.decay, config.sample_rate)?;

    match config.output {
        Output::Wav(ref path) => {
            let sink = WavSink::create(path, config.sample_rate)?;
            let mut player = Player::new(&mut piano, sink, config.sample_rate);
            player.perform()?;
            player.finish()?.finalize()?;
        }
        Output::Device(ref device) => play_on_device(&mut piano, device, config.sample_rate)?,
    }

    Ok(())
}

#[cfg(feature = "alsa-output")]
fn play_on_device(piano: &mut pianowire::Piano, device: &str, sample_rate: u32) -> Result<()> {
    let sink = pianowire::alsa::AlsaSink::open(device, sample_rate)?;
    let mut player = Player::new(piano, sink, sample_rate);
    player.perform()?;
    player.finish()?;
    Ok(())
}

#[cfg(not(feature = "alsa-output"))]
fn play_on_device(_piano: &mut pianowire::Piano, device: &str, _sample_rate: u32) -> Result<()> {
    error!("Built without ALSA support, cannot open {:?}", device);
    Err(pianowire::Error::NoOutput)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}
