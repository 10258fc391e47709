//! Animation-state blending over asynchronously delivered clips.
//!
//! Tracks are slot-indexed by the fixed [`AnimState`] set so the hot path
//! never looks clips up by name. Requesting a state whose clip has not
//! arrived yet is silently ignored; fades are independent per track, so
//! weights need not sum to one mid-fade but converge to a single track at
//! weight one once fades complete.

/// Fixed animation-state set; each variant owns one track slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimState {
    #[default]
    Idle,
    Run,
}

impl AnimState {
    pub const COUNT: usize = 2;
    pub const ALL: [Self; Self::COUNT] = [Self::Idle, Self::Run];

    #[must_use]
    pub fn slot(self) -> usize {
        match self {
            Self::Idle => 0,
            Self::Run => 1,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Run => "run",
        }
    }
}

/// Handle to a loaded clip: source name and loop length in seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimClip {
    pub name: String,
    pub duration: f32,
}

/// One playing track: looping cursor plus fade weights.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub clip: AnimClip,
    pub time: f32,
    pub weight: f32,
    pub target_weight: f32,
}

/// Per-frame weight/cursor snapshot for the external pose compositor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackSample {
    pub state: AnimState,
    pub time: f32,
    pub weight: f32,
}

#[derive(Debug, Clone)]
pub struct AnimationBlender {
    tracks: [Option<Track>; AnimState::COUNT],
    active: Option<AnimState>,
    fade_duration: f32,
}

impl AnimationBlender {
    #[must_use]
    pub fn new(fade_duration: f32) -> Self {
        Self {
            tracks: std::array::from_fn(|_| None),
            active: None,
            fade_duration: fade_duration.max(1e-3),
        }
    }

    /// Install the track for `state` once its clip arrives. Weight starts at
    /// zero; a later [`Self::set_active`] begins the fade normally.
    pub fn register_clip(&mut self, state: AnimState, clip: AnimClip) {
        log::debug!(
            "anim: clip '{}' registered for {} ({:.2}s)",
            clip.name,
            state.name(),
            clip.duration
        );
        self.tracks[state.slot()] = Some(Track {
            clip,
            time: 0.0,
            weight: 0.0,
            target_weight: 0.0,
        });
    }

    #[must_use]
    pub fn active(&self) -> Option<AnimState> {
        self.active
    }

    #[must_use]
    pub fn is_loaded(&self, state: AnimState) -> bool {
        self.tracks[state.slot()].is_some()
    }

    #[must_use]
    pub fn track(&self, state: AnimState) -> Option<&Track> {
        self.tracks[state.slot()].as_ref()
    }

    /// Make `state` the active track.
    ///
    /// No-op when it already is active (idempotent, re-entrant for an
    /// in-progress fade target) or when its clip has not loaded. Otherwise
    /// every other loaded track starts fading out and the requested one
    /// rewinds and fades in over the same fixed duration.
    pub fn set_active(&mut self, state: AnimState) {
        if self.active == Some(state) {
            return;
        }
        if self.tracks[state.slot()].is_none() {
            log::debug!("anim: request '{}' ignored (clip not loaded)", state.name());
            return;
        }
        let slot = state.slot();
        for (i, track) in self.tracks.iter_mut().enumerate() {
            let Some(track) = track else { continue };
            if i == slot {
                track.time = 0.0;
                track.target_weight = 1.0;
            } else {
                track.target_weight = 0.0;
            }
        }
        self.active = Some(state);
    }

    /// Advance fades and play cursors.
    ///
    /// Weights move linearly toward their targets at `1/fade_duration` per
    /// second. Cursors loop regardless of weight so a fading-out track does
    /// not freeze mid-pose.
    pub fn advance(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        let step = dt / self.fade_duration;
        for track in self.tracks.iter_mut().flatten() {
            if track.weight < track.target_weight {
                track.weight = (track.weight + step).min(track.target_weight);
            } else if track.weight > track.target_weight {
                track.weight = (track.weight - step).max(track.target_weight);
            }
            if track.clip.duration > 0.0 {
                track.time = (track.time + dt) % track.clip.duration;
            }
        }
    }

    /// Weight/cursor snapshot of the loaded tracks, slot order.
    #[must_use]
    pub fn sample(&self) -> Vec<TrackSample> {
        AnimState::ALL
            .iter()
            .filter_map(|&state| {
                self.tracks[state.slot()].as_ref().map(|t| TrackSample {
                    state,
                    time: t.time,
                    weight: t.weight,
                })
            })
            .collect()
    }
}
