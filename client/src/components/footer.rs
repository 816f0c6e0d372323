//! Page footer.

use leptos::prelude::*;

pub const FOOTER_TEXT: &str = "© 2025 DeepCheck - Deepfake Video Recognition System";

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <p>{FOOTER_TEXT}</p>
            </div>
        </footer>
    }
}
