//! Loading Component
//!
//! Full-page loading spinner shown while a page's fetches are in flight.

use leptos::*;

/// Full-page loading spinner
#[component]
pub fn Loading(
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-12 space-y-3">
            <div class="loading-spinner w-8 h-8" />
            <p class="text-gray-400 text-sm">{message}</p>
        </div>
    }
}
