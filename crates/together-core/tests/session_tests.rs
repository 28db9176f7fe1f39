mod common;

use common::FakeBackend;
use together_core::*;

fn loaded_session() -> (Session, FakeBackend) {
    let mut session = Session::new(TrackCatalog::default());
    let mut backend = FakeBackend::default();
    let failures = session.load_tracks(&mut backend);
    assert!(failures.is_empty());
    (session, backend)
}

#[test]
fn catalog_lists_both_tracks() {
    let catalog = TrackCatalog::default();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get(0).map(|t| t.path), Some("Same.mp3"));
    assert_eq!(catalog.index_of("No Emotion"), Some(1));
    assert_eq!(catalog.index_of("Missing"), None);
}

#[test]
fn defaults_before_any_interaction() {
    let session = Session::new(TrackCatalog::default());
    assert_eq!(session.current(), None);
    assert_eq!(session.state(), PlaybackState::Stopped);
    assert!(!session.is_playing());
    assert_eq!(session.volume, 0.5);
    assert_eq!(session.pan, 0.0);
    assert_eq!(session.pulse_intensity, 1.0);
}

#[test]
fn play_without_selection_is_an_error() {
    let (mut session, _) = loaded_session();
    assert_eq!(session.play_selected(), Err(VisualizerError::NoTrackSelected));
    assert!(!session.is_playing());
}

#[test]
fn selecting_a_track_starts_it_at_current_volume_and_pan() {
    let (mut session, backend) = loaded_session();
    session.set_volume(0.8);
    session.set_pan(-0.25);
    session.select_track(1).unwrap();
    assert!(session.is_playing());
    assert_eq!(session.current_name(), Some("No Emotion"));
    let log = backend.log_for("No Emotion");
    let log = log.borrow();
    assert_eq!(log.plays, 1);
    assert_eq!(log.volume, Some(0.8));
    assert_eq!(log.pan, Some(-0.25));
}

#[test]
fn switching_tracks_stops_the_previous_one() {
    let (mut session, backend) = loaded_session();
    session.select_track(0).unwrap();
    session.select_track(1).unwrap();
    assert_eq!(backend.log_for("Same").borrow().stops, 1);
    assert!(!backend.log_for("Same").borrow().playing);
    assert!(backend.log_for("No Emotion").borrow().playing);
}

#[test]
fn unknown_index_is_rejected_without_changing_selection() {
    let (mut session, _) = loaded_session();
    session.select_track(0).unwrap();
    assert_eq!(session.select_track(9), Err(VisualizerError::UnknownTrack(9)));
    assert_eq!(session.current(), Some(0));
    assert!(session.is_playing());
}

#[test]
fn pause_toggles_between_paused_and_playing() {
    let (mut session, backend) = loaded_session();
    session.select_track(0).unwrap();
    session.toggle_pause();
    assert_eq!(session.state(), PlaybackState::Paused);
    assert!(!session.is_playing());
    session.toggle_pause();
    assert_eq!(session.state(), PlaybackState::Playing);
    let log = backend.log_for("Same");
    assert_eq!(log.borrow().pauses, 1);
    assert_eq!(log.borrow().plays, 2);
}

#[test]
fn pause_and_stop_without_a_track_do_nothing() {
    let (mut session, _) = loaded_session();
    session.toggle_pause();
    session.stop();
    assert_eq!(session.state(), PlaybackState::Stopped);
}

#[test]
fn stop_then_play_restarts_the_selection() {
    let (mut session, backend) = loaded_session();
    session.select_track(0).unwrap();
    session.stop();
    assert_eq!(session.state(), PlaybackState::Stopped);
    session.play_selected().unwrap();
    assert!(session.is_playing());
    assert_eq!(backend.log_for("Same").borrow().plays, 2);
}

#[test]
fn volume_and_pan_reach_the_active_track() {
    let (mut session, backend) = loaded_session();
    session.select_track(0).unwrap();
    session.set_volume(0.1);
    session.set_pan(1.0);
    let log = backend.log_for("Same");
    assert_eq!(log.borrow().volume, Some(0.1));
    assert_eq!(log.borrow().pan, Some(1.0));
}

#[test]
fn failed_load_makes_track_unavailable() {
    let mut session = Session::new(TrackCatalog::default());
    let mut backend = FakeBackend {
        broken: vec!["No Emotion"],
        ..Default::default()
    };
    let failures = session.load_tracks(&mut backend);
    assert_eq!(failures.len(), 1);
    assert!(matches!(failures[0], VisualizerError::TrackLoad { ref name, .. } if name == "No Emotion"));
    assert_eq!(
        session.select_track(1),
        Err(VisualizerError::TrackUnavailable {
            name: "No Emotion".to_string()
        })
    );
    assert!(!session.is_playing());
    session.select_track(0).unwrap();
    assert!(session.is_playing());
}

#[test]
fn late_failure_stops_the_current_track() {
    let (mut session, _) = loaded_session();
    session.select_track(0).unwrap();
    session.mark_unavailable(0);
    assert!(!session.is_playing());
    assert!(session.play_selected().is_err());
}

#[test]
fn sync_notices_a_finished_track() {
    let (mut session, backend) = loaded_session();
    session.select_track(0).unwrap();
    backend.log_for("Same").borrow_mut().playing = false;
    session.sync();
    assert_eq!(session.state(), PlaybackState::Stopped);
    assert_eq!(session.current(), Some(0));
}
