use std::collections::HashMap;

use log::debug;

use crate::error::{Error, Result};
use crate::karplus_strong::{MusicString, PianoString};

/// A set of strings keyed by note name, mixed into one signal.
///
/// Note names are matched exactly, so "C#" and "c#" are different strings.
/// Striking and sampling are meant to be driven from a single thread; a
/// `Piano` shared between producers needs external locking around both.
#[derive(Debug)]
pub struct Piano {
    decay: f64,
    strings: HashMap<String, PianoString>,
}

impl Piano {
    pub fn new(decay: f64) -> Self {
        Self { decay, strings: HashMap::new() }
    }

    /// Install a silent string of `size` samples under `note`, replacing any
    /// string already registered for it.
    pub fn add_string(&mut self, note: &str, size: usize) -> Result<()> {
        let string = PianoString::new(size, self.decay).map_err(|e| match e {
            Error::DelayLineTooShort { length, .. } => {
                Error::DelayLineTooShort { note: note.to_string(), length }
            }
            e => e,
        })?;

        debug!("Registered string {:?} with delay line of {} samples", note, size);
        self.strings.insert(note.to_string(), string);
        Ok(())
    }

    /// Strike the string for `note`. Unknown notes are ignored.
    pub fn strike_note(&mut self, note: &str) {
        if let Some(string) = self.strings.get_mut(note) {
            string.strike();
        }
    }

    /// Advance every string by one step and return the sum of their outputs.
    ///
    /// The result is not clipped, enough loud strings exceed [-1, 1].
    pub fn sample_all(&mut self) -> f64 {
        self.strings.values_mut().fold(0.0, |sum, s| sum + s.sample())
    }

    pub fn decay(&self) -> f64 {
        self.decay
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    pub fn contains(&self, note: &str) -> bool {
        self.strings.contains_key(note)
    }

    pub fn notes(&self) -> impl Iterator<Item = &str> {
        self.strings.keys().map(String::as_str)
    }

    pub fn string(&self, note: &str) -> Option<&PianoString> {
        self.strings.get(note)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_piano_is_silent() {
        let mut piano = Piano::new(0.996);
        assert!(piano.is_empty());
        for _ in 0..10 {
            assert_eq!(piano.sample_all(), 0.0);
        }
    }

    #[test]
    fn short_strings_fail_at_registration() {
        let mut piano = Piano::new(0.996);
        match piano.add_string("C#", 1) {
            Err(Error::DelayLineTooShort { note, length }) => {
                assert_eq!(note, "C#");
                assert_eq!(length, 1);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(piano.is_empty());
    }

    #[test]
    fn unstruck_strings_contribute_nothing() {
        let mut piano = Piano::new(0.996);
        piano.add_string("A", 100).unwrap();
        piano.add_string("C+", 84).unwrap();
        for _ in 0..1000 {
            assert_eq!(piano.sample_all(), 0.0);
        }
        assert_eq!(piano.len(), 2);
    }

    #[test]
    fn unknown_note_is_ignored() {
        let mut piano = Piano::new(0.996);
        piano.add_string("A", 100).unwrap();
        piano.strike_note("Z");
        piano.strike_note("a");

        assert_eq!(piano.len(), 1);
        assert!(!piano.contains("Z"));
        for _ in 0..200 {
            assert_eq!(piano.sample_all(), 0.0);
        }
    }

    #[test]
    fn mix_is_sum_of_strings() {
        for &order in &[["A", "B"], ["B", "A"]] {
            let mut piano = Piano::new(0.996);
            for &note in order.iter() {
                let size = if note == "A" { 100 } else { 67 };
                piano.add_string(note, size).unwrap();
            }
            piano.strike_note("A");
            piano.strike_note("B");

            let mut a = piano.string("A").unwrap().clone();
            let mut b = piano.string("B").unwrap().clone();
            for _ in 0..500 {
                let expected = a.sample() + b.sample();
                assert!((piano.sample_all() - expected).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn sample_all_advances_every_string() {
        let mut piano = Piano::new(0.996);
        piano.add_string("A", 10).unwrap();
        piano.add_string("B", 10).unwrap();
        piano.strike_note("B");
        let struck = piano.string("B").unwrap().snapshot();

        piano.sample_all();
        assert_eq!(piano.string("B").unwrap().snapshot()[..9], struck[1..]);
    }

    #[test]
    fn struck_string_plays_back_its_noise() {
        let mut piano = Piano::new(0.996);
        piano.add_string("A", 100).unwrap();
        piano.strike_note("A");
        let struck = piano.string("A").unwrap().snapshot();

        let played: Vec<f64> = (0..100).map(|_| piano.sample_all()).collect();
        assert!(played.iter().all(|&v| v >= -0.5 && v <= 0.5));
        assert_eq!(played, struck);
    }

    #[test]
    fn registering_again_replaces_string() {
        let mut piano = Piano::new(0.996);
        piano.add_string("A", 100).unwrap();
        piano.strike_note("A");
        piano.add_string("A", 50).unwrap();

        assert_eq!(piano.notes().collect::<Vec<_>>(), vec!["A"]);
        let string = piano.string("A").unwrap();
        assert_eq!(string.len(), 50);
        assert_eq!(string.decay(), piano.decay());
        assert!(string.snapshot().iter().all(|&v| v == 0.0));

        piano.strike_note("A");
        assert_eq!(piano.string("A").unwrap().len(), 50);
        let played: Vec<f64> = (0..50).map(|_| piano.sample_all()).collect();
        assert!(played.iter().any(|&v| v != 0.0));
    }
}
