//! Login Page
//!
//! Collects a name (required) and email (optional), or logs in immediately
//! as one of three canned demo identities. Login is entirely client-side:
//! the user record is synthesized here and handed to the session, nothing is
//! sent to the server. A one-second delay simulates network latency on the
//! form path; the demo path is immediate.

use gloo_timers::future::TimeoutFuture;
use leptos::*;

use crate::fixtures::demo_users;
use crate::model::{derive_email, User};
use crate::state::use_session;

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let session = use_session();

    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (loading, set_loading) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let Some(trimmed_name) = submitted_name(&name.get()) else {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message("Please enter your name");
            }
            return;
        };

        set_loading.set(true);

        let trimmed_email = email.get().trim().to_string();
        spawn_local(async move {
            // Simulated network latency
            TimeoutFuture::new(1_000).await;

            let user = User {
                id: random_intern_id(),
                email: if trimmed_email.is_empty() {
                    derive_email(&trimmed_name)
                } else {
                    trimmed_email
                },
                name: trimmed_name,
            };

            session.login(user);
            set_loading.set(false);
        });
    };

    let on_demo_login = move |_| {
        let users = demo_users();
        let pick = (js_sys::Math::random() * users.len() as f64).floor() as usize;
        let user = users.into_iter().nth(pick.min(2)).unwrap_or_else(|| User {
            id: 1,
            name: "Alice Smith".to_string(),
            email: "alice.smith@example.com".to_string(),
        });
        session.login(user);
    };

    view! {
        <div class="flex items-center justify-center min-h-[80vh]">
            <div class="bg-gray-800 rounded-xl p-8 w-full max-w-md space-y-6">
                // Header
                <div class="text-center">
                    <h1 class="text-3xl font-bold">"🎯 Donordash"</h1>
                    <p class="text-gray-400 mt-1">"Welcome to your donation tracking platform"</p>
                </div>

                // Login form
                <form on:submit=on_submit class="space-y-4">
                    <div>
                        <label for="name" class="block text-sm text-gray-400 mb-1">"Full Name"</label>
                        <input
                            type="text"
                            id="name"
                            placeholder="Enter your full name"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <div>
                        <label for="email" class="block text-sm text-gray-400 mb-1">"Email (Optional)"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="Enter your email"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <button
                        type="submit"
                        disabled=move || loading.get()
                        class="w-full px-6 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               rounded-lg font-medium transition-colors"
                    >
                        {move || if loading.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>

                // Demo login
                <div class="text-center space-y-2 border-t border-gray-700 pt-4">
                    <p class="text-gray-400 text-sm">"Or try a demo account:"</p>
                    <button
                        on:click=on_demo_login
                        class="w-full px-6 py-3 bg-gray-700 hover:bg-gray-600
                               rounded-lg font-medium transition-colors"
                    >
                        "🚀 Demo Login"
                    </button>
                </div>

                <p class="text-center text-gray-500 text-xs">
                    "Track your donations • Earn rewards • Compete with peers"
                </p>
            </div>
        </div>
    }
}

/// Pseudo-random intern id in 1..=100
fn random_intern_id() -> u32 {
    (js_sys::Math::random() * 100.0).floor() as u32 + 1
}

/// Trimmed submission name, or `None` for a blank one.
///
/// A blank name rejects the submission entirely: no session transition, no
/// simulated-latency delay.
fn submitted_name(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_rejected() {
        assert_eq!(submitted_name(""), None);
        assert_eq!(submitted_name("   "), None);
        assert_eq!(submitted_name("\t\n"), None);
    }

    #[test]
    fn test_name_only_submission_trimmed() {
        assert_eq!(submitted_name("  Alice Smith "), Some("Alice Smith".to_string()));
    }
}
