//! Deepfake detection page (authenticated landing at `/home`).
//!
//! The upload never leaves the browser: the file is previewed through an
//! object URL and a mock result is produced after a fixed delay.

#[cfg(test)]
#[path = "detect_test.rs"]
mod detect_test;

use authflow::analysis::AnalysisResult;
use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::state::detect::{DetectState, DetectTab};

pub fn tab_class(tab: DetectTab, active: DetectTab) -> &'static str {
    if tab == active { "nav-item active" } else { "nav-item" }
}

pub fn verdict_class(result: &AnalysisResult) -> &'static str {
    if result.is_deepfake { "analysis-result deepfake" } else { "analysis-result authentic" }
}

pub fn progress_style(result: &AnalysisResult) -> String {
    format!("width: {}%", result.confidence)
}

#[component]
pub fn DetectPage() -> impl IntoView {
    let state = RwSignal::new(DetectState::default());

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use crate::state::detect::FilePick;
            use wasm_bindgen::JsCast;

            let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let mime = file.type_();
            if !authflow::analysis::is_video_mime(&mime) {
                log::info!("ignoring non-video file {}", file.name());
                return;
            }
            let Ok(url) = web_sys::Url::create_object_url_with_blob(&file) else {
                return;
            };
            let pick = state.try_update(|s| s.select_file(&file.name(), &mime, url));
            if let Some(FilePick::Accepted { replaced: Some(old) }) = pick {
                let _ = web_sys::Url::revoke_object_url(&old.preview_url);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_analyze = move |_| {
        if !state.try_update(DetectState::begin_analysis).unwrap_or(false) {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(authflow::analysis::ANALYSIS_DELAY).await;
            let result = AnalysisResult::from_seed(browser_seed());
            log::info!("mock analysis finished: {}", result.verdict_label());
            state.update(|s| s.finish_analysis(result));
        });
    };

    #[cfg(feature = "hydrate")]
    on_cleanup(move || {
        if let Some(video) = state.with_untracked(|s| s.video.clone()) {
            let _ = web_sys::Url::revoke_object_url(&video.preview_url);
        }
    });

    let active_tab = move || state.with(|s| s.tab);

    view! {
        <div class="app-container">
            <div class="detect-tabs">
                <button
                    class=move || tab_class(DetectTab::Home, active_tab())
                    on:click=move |_| state.update(|s| s.tab = DetectTab::Home)
                >
                    "Home"
                </button>
                <button
                    class=move || tab_class(DetectTab::About, active_tab())
                    on:click=move |_| state.update(|s| s.tab = DetectTab::About)
                >
                    "About"
                </button>
            </div>

            <div class="main-content container">
                <Show when=move || active_tab() == DetectTab::Home fallback=|| view! { <AboutSection/> }>
                    <div class="home-content">
                        <div class="card upload-section">
                            <h2 class="section-title">"Upload Video for Analysis"</h2>
                            <div class="upload-container">
                                <span class="input-label">"Select video file:"</span>
                                <label class="upload-dropzone" for="videoInput">
                                    <p class="upload-text">"Drag & drop your video here or click to browse"</p>
                                    <p class="upload-subtext">"Supported formats: MP4, AVI, MOV (max 100MB)"</p>
                                </label>
                                <input
                                    type="file"
                                    id="videoInput"
                                    accept="video/*"
                                    class="hidden-input"
                                    on:change=on_file_change
                                />
                            </div>

                            <Show when=move || state.with(|s| s.video.is_some())>
                                <div class="selected-file">
                                    <p class="file-name">
                                        "Selected file: "
                                        {move || state.with(|s| s.video.as_ref().map(|v| v.name.clone()).unwrap_or_default())}
                                    </p>
                                    <button
                                        class=move || {
                                            if state.with(|s| s.analyzing) { "analyze-button analyzing" } else { "analyze-button" }
                                        }
                                        disabled=move || state.with(|s| s.analyzing)
                                        on:click=on_analyze
                                    >
                                        <Show when=move || state.with(|s| s.analyzing)>
                                            <span class="spinner"></span>
                                        </Show>
                                        {move || state.with(DetectState::analyze_button_label)}
                                    </button>
                                </div>
                            </Show>
                        </div>

                        <div class="card results-section">
                            <h2 class="section-title">"Video Preview & Results"</h2>
                            {move || match state.with(|s| s.video.as_ref().map(|v| v.preview_url.clone())) {
                                Some(url) => view! {
                                    <div class="video-preview">
                                        <video src=url controls=true class="preview-player"></video>
                                    </div>
                                }.into_any(),
                                None => view! {
                                    <div class="empty-preview">
                                        <p>"No video selected for analysis"</p>
                                    </div>
                                }.into_any(),
                            }}
                            {move || state.with(|s| s.result.clone()).map(|result| view! { <ResultPanel result=result/> })}
                        </div>
                    </div>
                </Show>
            </div>

            <Footer/>
        </div>
    }
}

/// RNG seed from the page's `Math.random` and clock.
#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn browser_seed() -> u64 {
    let noise = (js_sys::Math::random() * 9_007_199_254_740_992.0) as u64;
    noise ^ (js_sys::Date::now() as u64).rotate_left(32)
}

#[component]
fn ResultPanel(result: AnalysisResult) -> impl IntoView {
    let bar_class = if result.is_deepfake { "progress-bar fake" } else { "progress-bar real" };
    view! {
        <div class=verdict_class(&result)>
            <div class="result-header">
                <h3 class="result-title">{result.verdict_label()}</h3>
            </div>
            <div class="confidence-section">
                <p class="confidence-label">"Confidence Score:"</p>
                <div class="progress-bar-container">
                    <div class=bar_class style=progress_style(&result)></div>
                </div>
                <div class="progress-labels">
                    <span>"0%"</span>
                    <span>{format!("{}%", result.confidence)}</span>
                    <span>"100%"</span>
                </div>
            </div>
            <p class="analysis-time">
                {format!("Analysis completed in {} seconds", result.analysis_time_label())}
            </p>
        </div>
    }
}

#[component]
fn AboutSection() -> impl IntoView {
    view! {
        <div class="card about-section">
            <h2 class="section-title">"About DeepCheck"</h2>
            <div class="about-content">
                <p>
                    "DeepCheck is a deepfake video recognition system designed to help users identify manipulated video content."
                </p>
                <p>
                    "It looks at facial movements, lighting inconsistencies, and digital artifacts that are often present in synthetic media."
                </p>
                <p>"How it works:"</p>
                <ol class="steps-list">
                    <li>"Upload your video file through the interface"</li>
                    <li>"The video is analyzed frame-by-frame for signs of manipulation"</li>
                    <li>"Receive a report with a confidence score"</li>
                </ol>
                <div class="info-box">
                    <p>
                        "No deepfake detection technology is perfect. Use DeepCheck as one tool among many for evaluating video authenticity."
                    </p>
                </div>
            </div>
        </div>
    }
}
