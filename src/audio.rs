//! Audio cues.
//!
//! The simulation only raises cues; it never waits on them.  A sink that
//! cannot play something stays silent.

/// Sound effect requests raised by the simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    /// Game launched
    Start,
    /// Start (or resume) the looping background track
    BackgroundLoop,
    /// Stop the background track
    BackgroundStop,
    /// Player fired
    Shoot,
    /// Red, pink or cyan alien destroyed
    ExplosionSmall,
    /// Flagship destroyed
    ExplosionBoss,
    /// Ship hit by an enemy bullet
    ShipLoss,
    /// Extra life awarded
    ExtraLife,
}

impl Cue {
    pub fn as_str(&self) -> &'static str {
        match self {
            Cue::Start => "start",
            Cue::BackgroundLoop => "background-loop",
            Cue::BackgroundStop => "background-stop",
            Cue::Shoot => "shoot",
            Cue::ExplosionSmall => "explosion-small",
            Cue::ExplosionBoss => "explosion-boss",
            Cue::ShipLoss => "ship-loss",
            Cue::ExtraLife => "extra-life",
        }
    }
}

/// Something that can play cues.  Fire-and-forget: no result, no errors.
pub trait AudioSink {
    fn play(&mut self, cue: Cue);

    fn play_all(&mut self, cues: impl IntoIterator<Item = Cue>)
    where
        Self: Sized,
    {
        for cue in cues {
            self.play(cue);
        }
    }
}

/// Drops every cue.
#[derive(Debug, Default)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play(&mut self, _cue: Cue) {}
}

/// Writes cues to the log and tracks whether the background loop would be
/// playing.  Used by the terminal frontend, which has no audio device.
#[derive(Debug, Default)]
pub struct LogAudio {
    background_playing: bool,
    played: u64,
}

impl LogAudio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background_playing(&self) -> bool {
        self.background_playing
    }

    pub fn played(&self) -> u64 {
        self.played
    }
}

impl AudioSink for LogAudio {
    fn play(&mut self, cue: Cue) {
        match cue {
            Cue::BackgroundLoop => self.background_playing = true,
            Cue::BackgroundStop => self.background_playing = false,
            _ => {}
        }
        self.played += 1;
        log::debug!("cue: {}", cue.as_str());
    }
}
