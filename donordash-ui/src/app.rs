//! App Root Component
//!
//! Main application component with routing and the session provider.
//!
//! Route resolution, evaluated per navigation:
//!
//! | Path         | logged out      | logged in            |
//! |--------------|-----------------|----------------------|
//! | /login       | Login           | redirect /dashboard  |
//! | /dashboard   | redirect /login | Dashboard            |
//! | /leaderboard | redirect /login | Leaderboard          |
//! | /            | redirect /login | redirect /dashboard  |

use leptos::*;
use leptos_router::*;

use crate::components::Nav;
use crate::pages::{Dashboard, Leaderboard, Login};
use crate::state::{provide_session, use_session};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide session state to all components
    provide_session();
    let session = use_session();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header, only while logged in
                {move || session.logged_in.get().then(|| view! { <Nav /> })}

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/login" view=LoginRoute />
                        <Route path="/dashboard" view=DashboardRoute />
                        <Route path="/leaderboard" view=LeaderboardRoute />
                        <Route path="/" view=HomeRoute />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// /login: shown when logged out, otherwise bounce to the dashboard
#[component]
fn LoginRoute() -> impl IntoView {
    let session = use_session();

    move || {
        if session.logged_in.get() {
            view! { <Redirect path="/dashboard" /> }.into_view()
        } else {
            view! { <Login /> }.into_view()
        }
    }
}

/// /dashboard: requires a session
#[component]
fn DashboardRoute() -> impl IntoView {
    let session = use_session();

    move || {
        if session.logged_in.get() {
            view! { <Dashboard /> }.into_view()
        } else {
            view! { <Redirect path="/login" /> }.into_view()
        }
    }
}

/// /leaderboard: requires a session
#[component]
fn LeaderboardRoute() -> impl IntoView {
    let session = use_session();

    move || {
        if session.logged_in.get() {
            view! { <Leaderboard /> }.into_view()
        } else {
            view! { <Redirect path="/login" /> }.into_view()
        }
    }
}

/// /: forwarded by session state
#[component]
fn HomeRoute() -> impl IntoView {
    let session = use_session();

    move || {
        let target = if session.logged_in.get() { "/dashboard" } else { "/login" };
        view! { <Redirect path=target /> }
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go Home"
            </A>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> web_sys::Document {
        web_sys::window().unwrap().document().unwrap()
    }

    fn pathname() -> String {
        web_sys::window().unwrap().location().pathname().unwrap()
    }

    fn has_nav() -> bool {
        document().query_selector("nav").unwrap().is_some()
    }

    fn click_button(label: &str) {
        let buttons = document().query_selector_all("button").unwrap();
        for i in 0..buttons.length() {
            let button: web_sys::HtmlElement =
                buttons.get(i).unwrap().dyn_into().unwrap();
            if button.text_content().unwrap_or_default().contains(label) {
                button.click();
                return;
            }
        }
        panic!("no button labelled {:?}", label);
    }

    async fn settle() {
        TimeoutFuture::new(100).await;
    }

    #[wasm_bindgen_test]
    async fn logout_redirects_to_login_and_hides_nav() {
        // Start from the root route regardless of the harness URL
        web_sys::window()
            .unwrap()
            .history()
            .unwrap()
            .replace_state_with_url(&JsValue::NULL, "", Some("/"))
            .unwrap();

        mount_to_body(App);
        settle().await;

        // Logged out: / bounces to /login and the nav bar is absent
        assert_eq!(pathname(), "/login");
        assert!(!has_nav());

        click_button("Demo Login");
        settle().await;

        // Logged in: redirected off /login, nav bar present
        assert_eq!(pathname(), "/dashboard");
        assert!(has_nav());

        click_button("Logout");
        settle().await;

        // Logged out again: back on /login, nav bar gone
        assert_eq!(pathname(), "/login");
        assert!(!has_nav());
    }
}
