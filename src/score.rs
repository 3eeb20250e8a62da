use log::info;

use crate::error::Result;
use crate::instrument::Piano;
use crate::sink::Sink;
use crate::tuning::KEYBOARD;

/// Strike `note`, or nothing for a rest, then let the piano ring for `seconds`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step<'a> {
    pub note: Option<&'a str>,
    pub seconds: f64,
}

impl<'a> Step<'a> {
    pub const fn note(note: &'a str, seconds: f64) -> Self {
        Self { note: Some(note), seconds }
    }

    pub const fn rest(seconds: f64) -> Self {
        Self { note: None, seconds }
    }
}

/// Drives a piano in real time, forwarding every tick to a sink.
pub struct Player<'p, S: Sink> {
    piano: &'p mut Piano,
    sink: S,
    sample_rate: u32,
    ticks: u64,
}

impl<'p, S: Sink> Player<'p, S> {
    pub fn new(piano: &'p mut Piano, sink: S, sample_rate: u32) -> Self {
        Self { piano, sink, sample_rate, ticks: 0 }
    }

    /// Samples produced so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn sample_for(&mut self, seconds: f64) -> Result<()> {
        let samples = (f64::from(self.sample_rate) * seconds) as u64;
        for _ in 0..samples {
            self.sink.play_sample(self.piano.sample_all())?;
        }
        self.ticks += samples;
        Ok(())
    }

    /// Play `notes` one after another, each ringing for `seconds`.
    pub fn play_notes<'n, I>(&mut self, seconds: f64, notes: I) -> Result<()>
    where
        I: IntoIterator<Item = &'n str>,
    {
        for note in notes {
            self.piano.strike_note(note);
            self.sample_for(seconds)?;
        }
        Ok(())
    }

    /// Strike all `notes` at once and let them ring for `seconds`.
    pub fn play_chord(&mut self, notes: &[&str], seconds: f64) -> Result<()> {
        for note in notes {
            self.piano.strike_note(note);
        }
        self.sample_for(seconds)
    }

    pub fn play_tune(&mut self, tune: &[Step]) -> Result<()> {
        for step in tune {
            if let Some(note) = step.note {
                self.piano.strike_note(note);
            }
            self.sample_for(step.seconds)?;
        }
        Ok(())
    }

    /// The whole demo: scale, fade out, chords, then both tunes.
    pub fn perform(&mut self) -> Result<()> {
        info!("Playing the scale");
        self.play_notes(0.5, KEYBOARD.iter().cloned())?;
        self.sample_for(1.0)?;

        info!("Playing chords");
        for chord in CHORDS.iter() {
            self.play_chord(chord, 1.0)?;
        }

        info!("Playing \"Do Re Mi\"");
        self.play_tune(DO_RE_MI)?;

        info!("Playing \"Do Re Mi\" a whole tone up");
        self.play_tune(DO_RE_MI_UP)?;

        Ok(())
    }

    /// Drain the sink and hand it back.
    pub fn finish(mut self) -> Result<S> {
        self.sink.drain()?;
        info!("Played {} samples", self.ticks);
        Ok(self.sink)
    }
}

/// C major, C minor, C augmented and C diminished.
pub const CHORDS: [&[&str]; 4] = [
    &["C", "E", "G"],
    &["C", "D#", "G"],
    &["C", "E", "G#"],
    &["C", "D#", "F#"],
];

pub const DO_RE_MI: &[Step<'static>] = &[
    Step::note("C", 0.75), Step::note("D", 0.25), Step::note("E", 0.75), Step::note("C", 0.25),
    Step::note("E", 0.5), Step::note("C", 0.5), Step::note("E", 1.0),

    Step::note("D", 0.75), Step::note("E", 0.25), Step::note("F", 0.25), Step::note("F", 0.25),
    Step::note("E", 0.25), Step::note("D", 0.25), Step::note("F", 2.0),

    Step::note("E", 0.75), Step::note("F", 0.25), Step::note("G", 0.75), Step::note("E", 0.25),
    Step::note("G", 0.5), Step::note("E", 0.5), Step::note("G", 1.0),

    Step::note("F", 0.75), Step::note("G", 0.25), Step::note("A", 0.25), Step::note("A", 0.25),
    Step::note("G", 0.25), Step::note("F", 0.25), Step::note("A", 2.0),

    Step::note("G", 0.75), Step::note("C", 0.25), Step::note("D", 0.25), Step::note("E", 0.25),
    Step::note("F", 0.25), Step::note("G", 0.25), Step::note("A", 2.0),

    Step::note("A", 0.75), Step::note("D", 0.25), Step::note("E", 0.25), Step::note("F", 0.25),
    Step::note("G", 0.25), Step::note("A", 0.25), Step::note("B", 2.0),

    Step::note("B", 0.75), Step::note("E", 0.25), Step::note("F", 0.25), Step::note("G", 0.25),
    Step::note("A", 0.25), Step::note("B", 0.25), Step::note("C+", 1.5),

    Step::note("C+", 0.25), Step::note("B", 0.25), Step::note("A", 0.5), Step::note("F", 0.5),
    Step::note("B", 0.5), Step::note("G", 0.5), Step::note("C+", 2.0),
];

pub const DO_RE_MI_UP: &[Step<'static>] = &[
    Step::note("D", 0.75), Step::note("E", 0.25), Step::note("F#", 0.75), Step::note("D", 0.25),
    Step::note("F#", 0.5), Step::note("D", 0.5), Step::note("F#", 1.0),

    Step::note("E", 0.75), Step::note("F#", 0.25), Step::note("G", 0.25), Step::note("G", 0.25),
    Step::note("F#", 0.25), Step::note("E", 0.25), Step::note("G", 2.0),

    Step::note("F#", 0.75), Step::note("G", 0.25), Step::note("A", 0.75), Step::note("F#", 0.25),
    Step::note("A", 0.5), Step::note("F#", 0.5), Step::note("A", 1.0),

    Step::note("G", 0.75), Step::note("A", 0.25), Step::note("B", 0.25), Step::note("B", 0.25),
    Step::note("A", 0.25), Step::note("G", 0.25), Step::note("B", 2.0),

    Step::note("A", 0.75), Step::note("D", 0.25), Step::note("E", 0.25), Step::note("F#", 0.25),
    Step::note("G", 0.25), Step::note("A", 0.25), Step::note("B", 2.0),

    Step::note("B", 0.75), Step::note("E", 0.25), Step::note("F#", 0.25), Step::note("G", 0.25),
    Step::note("A", 0.25), Step::note("B", 0.25), Step::note("C#+", 2.0),

    Step::note("C#+", 0.75), Step::note("F#", 0.25), Step::note("G", 0.25), Step::note("A", 0.25),
    Step::note("B", 0.25), Step::note("C#+", 0.25), Step::note("D+", 1.5),

    Step::note("D+", 0.25), Step::note("C#+", 0.25), Step::note("B", 0.5), Step::note("G", 0.5),
    Step::note("C#+", 0.5), Step::note("A", 0.5), Step::note("D+", 2.0),
];

/// Total length of `tune` in seconds.
pub fn duration(tune: &[Step]) -> f64 {
    tune.iter().map(|step| step.seconds).sum()
}
