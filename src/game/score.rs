//! Score counter and its decimal digit sequence.

use crate::audio::{AudioCue, AudioSink};

/// Number of barriers passed this round.
///
/// Digits are kept least-significant first and updated by carrying, the same
/// way an odometer rolls over, so the renderer never re-formats the number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreCounter {
    value: u32,
    digits: Vec<u8>,
}

impl Default for ScoreCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreCounter {
    pub fn new() -> Self {
        Self {
            value: 0,
            digits: vec![0],
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Digits most-significant first, in drawing order.
    pub fn digits(&self) -> Vec<u8> {
        self.digits.iter().rev().copied().collect()
    }

    /// Digits least-significant first.
    pub fn digits_lsd_first(&self) -> &[u8] {
        &self.digits
    }

    pub fn increment(&mut self, audio: &mut dyn AudioSink) {
        audio.play(AudioCue::Score);
        self.value += 1;

        let mut carry = true;
        for digit in &mut self.digits {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            self.digits.push(1);
        }
    }

    pub fn reset(&mut self) {
        self.value = 0;
        self.digits.clear();
        self.digits.push(0);
    }
}
