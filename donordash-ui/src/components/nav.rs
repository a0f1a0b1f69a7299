//! Navigation Component
//!
//! Header navigation bar with links, the current user's name, and logout.
//! Rendered only while a session is active; logging out clears the session
//! and the route guards take care of the redirect to /login.

use leptos::*;
use leptos_router::*;

use crate::state::use_session;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let session = use_session();

    let on_logout = move |_| {
        session.logout();
    };

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/dashboard" class="flex items-center space-x-3">
                        <span class="text-2xl">"🎯"</span>
                        <span class="text-xl font-bold text-white">"Donordash"</span>
                    </A>

                    // Navigation links
                    <div class="flex items-center space-x-1">
                        <NavLink href="/dashboard" label="📊 Dashboard" />
                        <NavLink href="/leaderboard" label="🏆 Leaderboard" />
                    </div>

                    // Current user and logout
                    <div class="flex items-center space-x-3">
                        <span class="text-gray-300 text-sm">
                            "👋 "
                            {move || {
                                session.current_user.get().map(|u| u.name).unwrap_or_default()
                            }}
                        </span>
                        <button
                            on:click=on_logout
                            class="px-4 py-2 rounded-lg text-sm bg-gray-700 text-gray-300
                                   hover:bg-red-600 hover:text-white transition-colors"
                        >
                            "🚪 Logout"
                        </button>
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}
