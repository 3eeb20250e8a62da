use rand::{Rng, thread_rng};
use rand::rngs::ThreadRng;

use crate::error::{Error, Result};

/// A guitar string, piano wire or any other vibrating string.
///
/// Implementations hold displacement values in [-0.5, 0.5] whose count is
/// the period of the string in samples.
pub trait MusicString {
    /// Replace the whole delay line with white noise in [-0.5, 0.5].
    fn strike(&mut self);

    /// Return the value at the front of the delay line and advance it by
    /// one step.
    fn sample(&mut self) -> f64;
}

/// Karplus-Strong string: a circular delay line fed back through a
/// two-point average scaled by `decay`.
///
/// `index` is the front of the queue, the slot right before it is the back.
#[derive(Debug, Clone)]
pub struct PianoString {
    wavetable: Vec<f64>,
    index: usize,
    decay: f64,
    rng: ThreadRng,
}

impl PianoString {
    /// A silent string with a delay line of `size` samples.
    ///
    /// `decay` should lie in (0, 1), values outside let the output diverge.
    pub fn new(size: usize, decay: f64) -> Result<Self> {
        if size < 2 {
            return Err(Error::DelayLineTooShort { note: String::new(), length: size });
        }

        Ok(Self {
            wavetable: vec![0.0; size],
            index: 0,
            decay,
            rng: thread_rng(),
        })
    }

    pub fn len(&self) -> usize {
        self.wavetable.len()
    }

    pub fn decay(&self) -> f64 {
        self.decay
    }

    /// Contents of the delay line, front first.
    pub fn snapshot(&self) -> Vec<f64> {
        let (back, front) = self.wavetable.split_at(self.index);
        front.iter().chain(back.iter()).cloned().collect()
    }

    fn next(&self) -> usize {
        if self.index + 1 == self.wavetable.len() {
            0
        } else {
            self.index + 1
        }
    }
}

impl MusicString for PianoString {
    fn strike(&mut self) {
        for v in self.wavetable.iter_mut() {
            *v = self.rng.gen_range(-0.5, 0.5);
        }
    }

    fn sample(&mut self) -> f64 {
        let next = self.next();
        let first = self.wavetable[self.index];
        let second = self.wavetable[next];

        // The popped slot becomes the back of the queue.
        self.wavetable[self.index] = (first + second) / 2.0 * self.decay;
        self.index = next;

        first
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn energy(string: &mut PianoString, n: usize) -> f64 {
        (0..n).map(|_| string.sample().powi(2)).sum()
    }

    #[test]
    fn rejects_short_delay_lines() {
        assert!(PianoString::new(0, 0.996).is_err());
        assert!(PianoString::new(1, 0.996).is_err());
        assert!(PianoString::new(2, 0.996).is_ok());
    }

    #[test]
    fn silent_string_stays_silent() {
        let mut string = PianoString::new(37, 0.996).unwrap();
        for _ in 0..37 * 3 {
            assert_eq!(string.sample(), 0.0);
        }
        assert_eq!(string.len(), 37);
        assert!(string.snapshot().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn strike_fills_with_bounded_noise() {
        let mut string = PianoString::new(500, 0.996).unwrap();
        string.strike();

        let values = string.snapshot();
        assert_eq!(values.len(), 500);
        assert!(values.iter().all(|&v| v >= -0.5 && v <= 0.5));
        assert!(values.iter().any(|&v| v != 0.0));
    }

    #[test]
    fn strike_overwrites_previous_energy() {
        let mut string = PianoString::new(64, 0.996).unwrap();
        string.strike();
        for _ in 0..10 {
            string.sample();
        }
        string.strike();
        string.strike();

        assert_eq!(string.len(), 64);
        assert!(string.snapshot().iter().all(|&v| v >= -0.5 && v <= 0.5));
    }

    #[test]
    fn sample_pops_front_and_appends_average() {
        let mut string = PianoString::new(4, 0.5).unwrap();
        string.wavetable = vec![0.5, 0.25, -0.25, 0.0];

        assert_eq!(string.sample(), 0.5);
        // (0.5 + 0.25) / 2 * 0.5
        assert_eq!(string.snapshot(), vec![0.25, -0.25, 0.0, 0.1875]);

        assert_eq!(string.sample(), 0.25);
        assert_eq!(string.snapshot(), vec![-0.25, 0.0, 0.1875, 0.0]);

        assert_eq!(string.sample(), -0.25);
        assert_eq!(string.sample(), 0.0);
        // Wrapped around: the last pair reads the freshly written back.
        assert_eq!(string.snapshot(), vec![0.1875, 0.0, -0.0625, 0.046875]);
        assert_eq!(string.sample(), 0.1875);
        assert_eq!(string.snapshot(), vec![0.0, -0.0625, 0.046875, 0.046875]);
    }

    #[test]
    fn shortest_string_wraps() {
        let mut string = PianoString::new(2, 1.0).unwrap();
        string.wavetable = vec![0.5, -0.5];

        assert_eq!(string.sample(), 0.5);
        assert_eq!(string.sample(), -0.5);
        assert_eq!(string.sample(), 0.0);
        assert_eq!(string.sample(), -0.25);
        assert_eq!(string.len(), 2);
    }

    #[test]
    fn energy_decays_over_windows() {
        for &decay in &[0.5, 0.9, 0.996] {
            let n = 100;
            let mut string = PianoString::new(n, decay).unwrap();
            string.strike();

            let mut previous = energy(&mut string, n);
            assert!(previous > 0.0);
            for _ in 0..20 {
                let current = energy(&mut string, n);
                assert!(current < previous, "decay {}: {} !< {}", decay, current, previous);
                previous = current;
            }
        }
    }

    #[test]
    fn first_period_returns_struck_values_in_order() {
        let mut string = PianoString::new(100, 0.996).unwrap();
        string.strike();
        let struck = string.snapshot();

        let played: Vec<f64> = (0..100).map(|_| string.sample()).collect();
        assert_eq!(played, struck);
        assert_eq!(string.len(), 100);
    }
}
