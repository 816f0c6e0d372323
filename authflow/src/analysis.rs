//! Placeholder video analysis shown on the detection page.
//!
//! No inference happens: a result is sampled at random once the fixed delay
//! elapses. The sampling is driven by a caller-supplied RNG so the browser
//! and tests can seed it however they like.

#[cfg(test)]
#[path = "analysis_test.rs"]
mod analysis_test;

use std::time::Duration;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// How long the page pretends to analyze before showing a result.
pub const ANALYSIS_DELAY: Duration = Duration::from_millis(3000);

pub const MIN_CONFIDENCE: u8 = 70;
pub const CONFIDENCE_SPAN: f64 = 25.0;

#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisResult {
    pub is_deepfake: bool,
    /// Whole percent, 70..=94.
    pub confidence: u8,
    /// Reported analysis duration in seconds, 1.0..3.0.
    pub analysis_secs: f64,
}

impl AnalysisResult {
    /// Build a result from three uniform samples in `[0, 1)`.
    pub fn from_unit_samples(verdict: f64, confidence: f64, duration: f64) -> Self {
        let verdict = verdict.clamp(0.0, 1.0);
        let confidence = confidence.clamp(0.0, 0.999_999);
        let duration = duration.clamp(0.0, 1.0);

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let confidence = (f64::from(MIN_CONFIDENCE) + confidence * CONFIDENCE_SPAN).floor() as u8;

        Self { is_deepfake: verdict > 0.5, confidence, analysis_secs: duration * 2.0 + 1.0 }
    }

    pub fn sample<R: Rng>(rng: &mut R) -> Self {
        Self::from_unit_samples(rng.random(), rng.random(), rng.random())
    }

    /// Sample from a small RNG seeded with `seed`. Browsers have no OS entropy
    /// source here, so the page supplies its own seed.
    pub fn from_seed(seed: u64) -> Self {
        Self::sample(&mut SmallRng::seed_from_u64(seed))
    }

    pub fn verdict_label(&self) -> &'static str {
        if self.is_deepfake { "Likely Deepfake" } else { "Likely Authentic" }
    }

    /// Analysis time with one decimal, e.g. `"2.4"`.
    pub fn analysis_time_label(&self) -> String {
        format!("{:.1}", self.analysis_secs)
    }
}

/// Only files whose MIME type mentions `video` are accepted for analysis.
pub fn is_video_mime(mime: &str) -> bool {
    mime.contains("video")
}
