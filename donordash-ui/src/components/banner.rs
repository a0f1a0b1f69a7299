//! Demo-Data Banner
//!
//! Non-blocking notice shown at the top of a page that is rendering fixture
//! data because the live API was unreachable. Distinct from a full-page
//! error: the page content below it stays fully usable.

use leptos::*;

/// Banner flagging that fixture data is on screen
#[component]
pub fn DemoDataBanner(
    #[prop(into)]
    error: String,
) -> impl IntoView {
    view! {
        <div
            class="flex items-center space-x-3 bg-yellow-600/20 border border-yellow-600
                   text-yellow-200 px-4 py-3 rounded-lg mb-6"
            title=error
        >
            <span class="text-lg">"⚠️"</span>
            <span class="text-sm font-medium">"Using demo data - API connection failed"</span>
        </div>
    }
}
