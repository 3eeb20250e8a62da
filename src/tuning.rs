//! Note names to string lengths.

use crate::error::Result;
use crate::instrument::Piano;

/// Keys of the demo keyboard, from C3 up to D4.
pub const KEYBOARD: [&str; 15] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
    "C+", "C#+", "D+",
];

/// Semitones from A4 down to the first key of `KEYBOARD`.
const KEYBOARD_OFFSET: i32 = -21;

/// Frequency of the note `offset` semitones away from A4 (440 Hz).
pub fn frequency(offset: i32) -> f64 {
    440.0 * f64::powf(2.0, f64::from(offset) / 12.0)
}

/// Number of samples in one period of `freq` at `sample_rate`, rounded.
pub fn delay_line_length(sample_rate: u32, freq: f64) -> usize {
    (f64::from(sample_rate) / freq + 0.5) as usize
}

/// Offset from A4 of a key on the demo keyboard.
pub fn keyboard_offset(note: &str) -> Option<i32> {
    KEYBOARD
        .iter()
        .position(|&key| key == note)
        .map(|i| i as i32 + KEYBOARD_OFFSET)
}

/// A piano with one string for every key of `KEYBOARD`.
pub fn keyboard(decay: f64, sample_rate: u32) -> Result<Piano> {
    let mut piano = Piano::new(decay);
    for (i, note) in KEYBOARD.iter().enumerate() {
        let freq = frequency(i as i32 + KEYBOARD_OFFSET);
        piano.add_string(note, delay_line_length(sample_rate, freq))?;
    }
    Ok(piano)
}
