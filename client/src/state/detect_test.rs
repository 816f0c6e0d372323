use super::*;

fn result(is_deepfake: bool) -> AnalysisResult {
    AnalysisResult { is_deepfake, confidence: 88, analysis_secs: 1.5 }
}

#[test]
fn detect_state_default_home_tab_without_video() {
    let state = DetectState::default();
    assert_eq!(state.tab, DetectTab::Home);
    assert!(state.video.is_none());
    assert!(!state.analyzing);
}

#[test]
fn non_video_file_is_ignored() {
    let mut state = DetectState::default();
    assert_eq!(state.select_file("cat.png", "image/png", "blob:1".to_owned()), FilePick::Ignored);
    assert!(state.video.is_none());
}

#[test]
fn selecting_video_clears_previous_result_and_returns_old_video() {
    let mut state = DetectState::default();
    assert_eq!(
        state.select_file("a.mp4", "video/mp4", "blob:a".to_owned()),
        FilePick::Accepted { replaced: None }
    );
    assert!(state.begin_analysis());
    state.finish_analysis(result(true));
    assert!(state.result.is_some());

    let FilePick::Accepted { replaced } = state.select_file("b.mov", "video/quicktime", "blob:b".to_owned()) else {
        panic!("video should be accepted");
    };
    assert_eq!(replaced.map(|v| v.preview_url), Some("blob:a".to_owned()));
    assert!(state.result.is_none());
    assert_eq!(state.video.as_ref().map(|v| v.name.as_str()), Some("b.mov"));
}

#[test]
fn analysis_requires_video_and_is_exclusive() {
    let mut state = DetectState::default();
    assert!(!state.begin_analysis());

    state.select_file("a.mp4", "video/mp4", "blob:a".to_owned());
    assert!(state.begin_analysis());
    assert!(!state.begin_analysis());
    assert_eq!(state.analyze_button_label(), "Analyzing Video...");

    state.finish_analysis(result(false));
    assert!(!state.analyzing);
    assert_eq!(state.analyze_button_label(), "Analyze Video");
}

#[test]
fn finish_without_analysis_is_ignored() {
    let mut state = DetectState::default();
    state.finish_analysis(result(true));
    assert!(state.result.is_none());
}
