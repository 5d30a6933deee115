//! Sound triggers emitted by the simulation.
//!
//! The engine never waits on audio. It hands each cue to an [`AudioSink`] and
//! moves on; whatever the sink does with it (play a sample, ring the bell,
//! record it for a test) is outside the tick.

use std::io::Write;

/// A fire-and-forget notification for the audio collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioCue {
    /// Wing flap on a press.
    Flap,
    /// A barrier was passed.
    Score,
    /// The player hit the ground or a barrier; background music stops.
    Collision,
    /// A new round started; background music resumes.
    Restart,
}

/// Receiver of [`AudioCue`]s.
pub trait AudioSink {
    fn play(&mut self, cue: AudioCue);
}

/// Records cues in order. Used by the simulator and by tests.
impl AudioSink for Vec<AudioCue> {
    fn play(&mut self, cue: AudioCue) {
        self.push(cue);
    }
}

/// Discards every cue.
impl AudioSink for () {
    fn play(&mut self, _cue: AudioCue) {}
}

/// Terminal stand-in for a mixer: rings the bell on a crash.
pub struct TerminalAudio<W: Write> {
    out: W,
    muted: bool,
}

impl<W: Write> TerminalAudio<W> {
    pub fn new(out: W) -> Self {
        Self { out, muted: false }
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }
}

impl<W: Write> AudioSink for TerminalAudio<W> {
    fn play(&mut self, cue: AudioCue) {
        tracing::trace!(?cue, "audio cue");
        if self.muted || cue != AudioCue::Collision {
            return;
        }
        // BEL; a failed write just means no sound.
        let _ = self.out.write_all(b"\x07").and_then(|_| self.out.flush());
    }
}
