use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum VisualizerError {
    #[error("no track selected")]
    NoTrackSelected,
    #[error("track index {0} is not in the catalog")]
    UnknownTrack(usize),
    #[error("track \"{name}\" is unavailable")]
    TrackUnavailable { name: String },
    #[error("failed to load track \"{name}\": {reason}")]
    TrackLoad { name: String, reason: String },
    #[error("renderer initialization failed: {0}")]
    RendererInit(String),
}
