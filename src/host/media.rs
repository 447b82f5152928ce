//! Media element transport interface and a simulated implementation.

/// Transport properties of a native media element.
///
/// The player reads these live on every event and never caches them.
pub trait MediaElement {
    /// Playback position in seconds.
    fn current_time(&self) -> f64;

    fn set_current_time(&mut self, seconds: f64);

    /// Total length in seconds; NaN until metadata has loaded.
    fn duration(&self) -> f64;

    fn paused(&self) -> bool;

    fn play(&mut self);

    fn pause(&mut self);

    fn muted(&self) -> bool;

    fn set_muted(&mut self, muted: bool);

    /// Volume in [0, 1], kept while muted.
    fn volume(&self) -> f64;

    fn set_volume(&mut self, volume: f64);

    fn playback_rate(&self) -> f64;

    fn set_playback_rate(&mut self, rate: f64);
}

/// A media element driven by an explicit clock.
///
/// Starts paused with unknown (NaN) duration, full volume and normal rate.
/// Hosts call `load_metadata` once the duration is known and `advance` on
/// every tick.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedMedia {
    current_time: f64,
    duration: f64,
    paused: bool,
    muted: bool,
    volume: f64,
    playback_rate: f64,
}

impl SimulatedMedia {
    pub fn new() -> Self {
        Self {
            current_time: 0.0,
            duration: f64::NAN,
            paused: true,
            muted: false,
            volume: 1.0,
            playback_rate: 1.0,
        }
    }

    /// Set the duration, as if metadata finished loading.
    pub fn load_metadata(&mut self, duration: f64) {
        self.duration = duration;
    }

    /// Whether the duration is known.
    pub fn has_metadata(&self) -> bool {
        self.duration.is_finite()
    }

    /// Whether playback reached the end.
    pub fn ended(&self) -> bool {
        self.has_metadata() && self.current_time >= self.duration
    }

    /// Advance the clock by `seconds` of wall time.
    ///
    /// Position moves by `seconds * playback_rate` while playing and stops
    /// (pausing) at the end. Returns true if the position changed, which is
    /// when a host should fire a time update.
    pub fn advance(&mut self, seconds: f64) -> bool {
        if self.paused || !self.has_metadata() || !seconds.is_finite() || seconds <= 0.0 {
            return false;
        }

        let before = self.current_time;
        self.current_time = (self.current_time + seconds * self.playback_rate).min(self.duration);
        if self.current_time >= self.duration {
            self.paused = true;
        }
        self.current_time != before
    }
}

impl Default for SimulatedMedia {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaElement for SimulatedMedia {
    fn current_time(&self) -> f64 {
        self.current_time
    }

    /// Stores the position as given; non-finite values are ignored.
    fn set_current_time(&mut self, seconds: f64) {
        if seconds.is_finite() {
            self.current_time = seconds;
        }
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn paused(&self) -> bool {
        self.paused
    }

    fn play(&mut self) {
        if self.ended() {
            self.current_time = 0.0;
        }
        self.paused = false;
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn muted(&self) -> bool {
        self.muted
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn volume(&self) -> f64 {
        self.volume
    }

    /// Out-of-range values are ignored.
    fn set_volume(&mut self, volume: f64) {
        if (0.0..=1.0).contains(&volume) {
            self.volume = volume;
        }
    }

    fn playback_rate(&self) -> f64 {
        self.playback_rate
    }

    fn set_playback_rate(&mut self, rate: f64) {
        if rate.is_finite() && rate > 0.0 {
            self.playback_rate = rate;
        }
    }
}
