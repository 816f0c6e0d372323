use super::*;

fn result(is_deepfake: bool, confidence: u8) -> AnalysisResult {
    AnalysisResult { is_deepfake, confidence, analysis_secs: 2.0 }
}

#[test]
fn active_tab_gets_active_class() {
    assert_eq!(tab_class(DetectTab::Home, DetectTab::Home), "nav-item active");
    assert_eq!(tab_class(DetectTab::About, DetectTab::Home), "nav-item");
}

#[test]
fn verdict_class_tracks_result() {
    assert_eq!(verdict_class(&result(true, 80)), "analysis-result deepfake");
    assert_eq!(verdict_class(&result(false, 80)), "analysis-result authentic");
}

#[test]
fn progress_width_is_confidence_percent() {
    assert_eq!(progress_style(&result(false, 91)), "width: 91%");
}
