//! Playback session: which track is selected, whether it is playing, and the
//! slider-bound parameters that go with it.

use crate::error::VisualizerError;
use fnv::FnvHashMap;

/// A loaded, playable track supplied by the audio front-end.
pub trait TrackHandle {
    /// Start playing; resumes from the pause point if paused.
    fn play(&mut self);
    fn pause(&mut self);
    /// Stop and rewind.
    fn stop(&mut self);
    fn is_playing(&self) -> bool;
    fn set_volume(&mut self, volume: f32);
    fn pan(&mut self, pan: f32);
}

/// Loads tracks for the session.
pub trait AudioBackend {
    fn load(&mut self, name: &str, path: &str) -> Result<Box<dyn TrackHandle>, VisualizerError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Track {
    pub name: &'static str,
    pub path: &'static str,
}

pub const DEFAULT_TRACKS: &[Track] = &[
    Track {
        name: "Same",
        path: "Same.mp3",
    },
    Track {
        name: "No Emotion",
        path: "NoEmotion.mp3",
    },
];

/// Static list of selectable tracks with name lookup.
#[derive(Clone, Debug)]
pub struct TrackCatalog {
    tracks: &'static [Track],
    by_name: FnvHashMap<&'static str, usize>,
}

impl TrackCatalog {
    pub fn new(tracks: &'static [Track]) -> Self {
        let by_name = tracks.iter().enumerate().map(|(i, t)| (t.name, i)).collect();
        Self { tracks, by_name }
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter()
    }
}

impl Default for TrackCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_TRACKS)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

pub const DEFAULT_VOLUME: f32 = 0.5;
pub const DEFAULT_PAN: f32 = 0.0;
pub const DEFAULT_PULSE_INTENSITY: f32 = 1.0;

pub struct Session {
    pub catalog: TrackCatalog,
    tracks: Vec<Option<Box<dyn TrackHandle>>>,
    current: Option<usize>,
    state: PlaybackState,
    pub volume: f32,
    pub pan: f32,
    pub pulse_intensity: f32,
}

impl Session {
    pub fn new(catalog: TrackCatalog) -> Self {
        let tracks = (0..catalog.len()).map(|_| None).collect();
        Self {
            catalog,
            tracks,
            current: None,
            state: PlaybackState::Stopped,
            volume: DEFAULT_VOLUME,
            pan: DEFAULT_PAN,
            pulse_intensity: DEFAULT_PULSE_INTENSITY,
        }
    }

    /// Load every catalog entry; failures leave that slot unavailable and are returned.
    pub fn load_tracks(&mut self, backend: &mut dyn AudioBackend) -> Vec<VisualizerError> {
        let mut failures = Vec::new();
        for (i, track) in self.catalog.iter().enumerate() {
            match backend.load(track.name, track.path) {
                Ok(handle) => {
                    log::info!("[audio] loaded {}", track.name);
                    self.tracks[i] = Some(handle);
                }
                Err(e) => {
                    log::error!("[audio] {}", e);
                    self.tracks[i] = None;
                    failures.push(e);
                }
            }
        }
        failures
    }

    /// Mark a previously loaded track as unusable (e.g. a late decode error).
    pub fn mark_unavailable(&mut self, index: usize) {
        if let Some(slot) = self.tracks.get_mut(index) {
            *slot = None;
        }
        if self.current == Some(index) {
            self.state = PlaybackState::Stopped;
        }
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn current_name(&self) -> Option<&'static str> {
        self.current
            .and_then(|i| self.catalog.get(i))
            .map(|t| t.name)
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing && self.active_track().is_some()
    }

    fn active_track(&self) -> Option<&dyn TrackHandle> {
        self.current
            .and_then(|i| self.tracks.get(i))
            .and_then(|slot| slot.as_deref())
    }

    fn active_track_mut(&mut self) -> Option<&mut (dyn TrackHandle + 'static)> {
        let i = self.current?;
        self.tracks.get_mut(i)?.as_deref_mut()
    }

    fn stop_active_if_playing(&mut self) {
        if let Some(track) = self.active_track_mut() {
            if track.is_playing() {
                track.stop();
            }
        }
    }

    fn start(&mut self, index: usize) -> Result<(), VisualizerError> {
        let name = self
            .catalog
            .get(index)
            .map(|t| t.name)
            .ok_or(VisualizerError::UnknownTrack(index))?;
        let volume = self.volume;
        let pan = self.pan;
        let track = self
            .tracks
            .get_mut(index)
            .and_then(|slot| slot.as_deref_mut())
            .ok_or_else(|| VisualizerError::TrackUnavailable {
                name: name.to_string(),
            })?;
        track.set_volume(volume);
        track.pan(pan);
        track.play();
        self.state = PlaybackState::Playing;
        log::info!("[session] playing {}", name);
        Ok(())
    }

    /// Select a track from the picker; it starts playing right away.
    pub fn select_track(&mut self, index: usize) -> Result<(), VisualizerError> {
        if self.catalog.get(index).is_none() {
            return Err(VisualizerError::UnknownTrack(index));
        }
        self.stop_active_if_playing();
        self.state = PlaybackState::Stopped;
        self.current = Some(index);
        self.start(index)
    }

    /// Play button: restart the selected track from the top.
    pub fn play_selected(&mut self) -> Result<(), VisualizerError> {
        let index = self.current.ok_or(VisualizerError::NoTrackSelected)?;
        self.stop_active_if_playing();
        self.start(index)
    }

    /// Pause button: pause when playing, resume otherwise.
    pub fn toggle_pause(&mut self) {
        let Some(track) = self.active_track_mut() else {
            return;
        };
        if track.is_playing() {
            track.pause();
            self.state = PlaybackState::Paused;
            log::info!("[session] paused");
        } else {
            track.play();
            self.state = PlaybackState::Playing;
            log::info!("[session] resumed");
        }
    }

    pub fn stop(&mut self) {
        if let Some(track) = self.active_track_mut() {
            track.stop();
            self.state = PlaybackState::Stopped;
            log::info!("[session] stopped");
        }
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
        if let Some(track) = self.active_track_mut() {
            track.set_volume(volume);
        }
    }

    pub fn set_pan(&mut self, pan: f32) {
        self.pan = pan;
        if let Some(track) = self.active_track_mut() {
            track.pan(pan);
        }
    }

    /// Notice tracks that ended on their own.
    pub fn sync(&mut self) {
        if self.state != PlaybackState::Playing {
            return;
        }
        let finished = self.active_track().map(|t| !t.is_playing()).unwrap_or(true);
        if finished {
            self.state = PlaybackState::Stopped;
            log::info!("[session] track finished");
        }
    }
}
