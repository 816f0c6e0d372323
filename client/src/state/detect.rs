//! Detection page state: selected video, analysis progress, and result.

#[cfg(test)]
#[path = "detect_test.rs"]
mod detect_test;

use authflow::analysis::{AnalysisResult, is_video_mime};

/// Tabs on the detection page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DetectTab {
    #[default]
    Home,
    About,
}

/// A video picked from the file input.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedVideo {
    pub name: String,
    /// Object URL used by the `<video>` preview.
    pub preview_url: String,
}

/// Result of offering a picked file to the page.
#[derive(Clone, Debug, PartialEq)]
pub enum FilePick {
    /// Accepted; carries the video it replaced so its preview URL can be released.
    Accepted { replaced: Option<SelectedVideo> },
    /// Not a video; state is unchanged.
    Ignored,
}

#[derive(Clone, Debug, Default)]
pub struct DetectState {
    pub tab: DetectTab,
    pub video: Option<SelectedVideo>,
    pub analyzing: bool,
    pub result: Option<AnalysisResult>,
}

impl DetectState {
    /// Accept a picked file if its MIME type is a video, dropping any previous result.
    pub fn select_file(&mut self, name: &str, mime: &str, preview_url: String) -> FilePick {
        if !is_video_mime(mime) {
            return FilePick::Ignored;
        }
        self.result = None;
        let replaced = self.video.replace(SelectedVideo { name: name.to_owned(), preview_url });
        FilePick::Accepted { replaced }
    }

    /// Start analysis. Returns `false` with no video or while already analyzing.
    pub fn begin_analysis(&mut self) -> bool {
        if self.video.is_none() || self.analyzing {
            return false;
        }
        self.analyzing = true;
        true
    }

    pub fn finish_analysis(&mut self, result: AnalysisResult) {
        if !self.analyzing {
            return;
        }
        self.analyzing = false;
        self.result = Some(result);
    }

    pub fn analyze_button_label(&self) -> &'static str {
        if self.analyzing { "Analyzing Video..." } else { "Analyze Video" }
    }
}
