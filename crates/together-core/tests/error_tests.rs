use together_core::VisualizerError;

#[test]
fn renderer_init_message_carries_the_cause() {
    let err = VisualizerError::RendererInit("No WebGPU adapter".to_string());
    assert_eq!(
        err.to_string(),
        "renderer initialization failed: No WebGPU adapter"
    );
}

#[test]
fn track_errors_name_the_track() {
    let unavailable = VisualizerError::TrackUnavailable {
        name: "Same".to_string(),
    };
    assert_eq!(unavailable.to_string(), "track \"Same\" is unavailable");
    let load = VisualizerError::TrackLoad {
        name: "No Emotion".to_string(),
        reason: "404".to_string(),
    };
    assert!(load.to_string().contains("No Emotion"));
    assert!(load.to_string().contains("404"));
}
