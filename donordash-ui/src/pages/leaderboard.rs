//! Leaderboard Page
//!
//! Cross-intern ranking: podium for the top three, ranked list for the
//! rest, and a static achievement-tier legend. Entries are rendered in the
//! order the API (or fixture) provides them; the podium is simply the first
//! three by position.

use leptos::*;

use crate::components::{DemoDataBanner, Loading};
use crate::loader::{self, RequestGuard, ViewState};
use crate::model::{
    avatar_initial, format_amount, relative_width, split_podium, total_raised, LeaderboardData,
    LeaderboardEntry,
};

/// Leaderboard page component
#[component]
pub fn Leaderboard() -> impl IntoView {
    let (state, set_state) = create_signal(ViewState::<LeaderboardData>::Loading);

    // Late responses after navigation away must not write into a dead view
    let guard = RequestGuard::new();
    on_cleanup(move || guard.invalidate());

    create_effect(move |_| {
        let token = guard.begin();
        set_state.set(ViewState::Loading);
        spawn_local(async move {
            let loaded = loader::load_leaderboard().await;
            if guard.is_current(token) {
                set_state.set(loaded);
            }
        });
    });

    view! {
        <div>
            {move || match state.get() {
                ViewState::Loading => view! {
                    <Loading message="Loading leaderboard..." />
                }.into_view(),
                ViewState::Ready(data) => view! {
                    <LeaderboardContent data=data error=None />
                }.into_view(),
                ViewState::Degraded { data, error } => view! {
                    <LeaderboardContent data=data error=Some(error) />
                }.into_view(),
            }}
        </div>
    }
}

/// Rendered leaderboard body, shared by the live and degraded states
#[component]
fn LeaderboardContent(
    data: LeaderboardData,
    error: Option<String>,
) -> impl IntoView {
    let (podium, remaining) = split_podium(&data.leaderboard);
    let entries = data.leaderboard.clone();
    let raised = total_raised(&entries);

    view! {
        <div class="space-y-8">
            {error.map(|e| view! { <DemoDataBanner error=e /> })}

            // Header with summary figures
            <div class="text-center space-y-4">
                <h1 class="text-3xl font-bold">"🏆 Leaderboard"</h1>
                <p class="text-gray-400">"Top performers in our donation drive"</p>
                <div class="flex justify-center gap-8">
                    <div>
                        <div class="text-2xl font-bold">{data.total_participants}</div>
                        <div class="text-gray-400 text-sm">"Total Participants"</div>
                    </div>
                    <div>
                        <div class="text-2xl font-bold">{format!("₹{}", format_amount(raised))}</div>
                        <div class="text-gray-400 text-sm">"Total Raised"</div>
                    </div>
                </div>
            </div>

            // Top 3 podium
            <section>
                <h2 class="text-xl font-semibold mb-4">"🥇 Top Performers"</h2>
                <div class="grid md:grid-cols-3 gap-4">
                    {podium.into_iter().map(|entry| view! { <PodiumCard entry=entry /> }).collect_view()}
                </div>
            </section>

            // Remaining rankings
            {(!remaining.is_empty()).then(|| view! {
                <section>
                    <h2 class="text-xl font-semibold mb-4">"📊 All Rankings"</h2>
                    <div class="space-y-3">
                        {remaining.into_iter().map(|entry| {
                            let width = relative_width(entry.donations, &entries);
                            view! { <RankingRow entry=entry width=width /> }
                        }).collect_view()}
                    </div>
                </section>
            })}

            <AchievementLevels />

            <div class="text-center text-gray-500 text-sm space-y-1">
                <p>{format!("Last updated: {}", data.last_updated)}</p>
                <p>"Keep up the great work! 🚀"</p>
            </div>
        </div>
    }
}

/// Podium card for a top-three entry
#[component]
fn PodiumCard(entry: LeaderboardEntry) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-6 text-center space-y-2 border border-gray-700">
            <div class="text-3xl">{entry.badge.clone()}</div>
            <div class="w-12 h-12 mx-auto rounded-full bg-primary-600 flex items-center justify-center text-xl font-bold">
                {avatar_initial(&entry.name)}
            </div>
            <h3 class="font-semibold">{entry.name.clone()}</h3>
            <p class="text-lg text-green-400 font-bold">
                {format!("₹{}", format_amount(entry.donations))}
            </p>
            <div class="text-gray-400 text-sm font-mono">{entry.referral_code.clone()}</div>
            <div class="text-gray-500 text-sm">{format!("#{}", entry.rank)}</div>
        </div>
    }
}

/// Ranked list row with a bar scaled against the top entry
#[component]
fn RankingRow(
    entry: LeaderboardEntry,
    width: f64,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 flex items-center gap-4">
            <div class="flex items-center gap-2 w-16">
                <span class="text-gray-400">{format!("#{}", entry.rank)}</span>
                <span>{entry.badge.clone()}</span>
            </div>

            <div class="flex items-center gap-3 flex-1">
                <div class="w-8 h-8 rounded-full bg-gray-700 flex items-center justify-center text-sm font-bold">
                    {avatar_initial(&entry.name)}
                </div>
                <div>
                    <h4 class="font-semibold">{entry.name.clone()}</h4>
                    <span class="text-gray-500 text-xs font-mono">{entry.referral_code.clone()}</span>
                </div>
            </div>

            <div class="w-40 text-right">
                <span class="font-semibold">{format!("₹{}", format_amount(entry.donations))}</span>
                <div class="w-full bg-gray-700 rounded-full h-2 mt-1">
                    <div
                        class="bg-primary-500 h-2 rounded-full"
                        style=format!("width: {}%", width)
                    />
                </div>
            </div>
        </div>
    }
}

/// Static achievement-tier legend, independent of fetched data
#[component]
fn AchievementLevels() -> impl IntoView {
    let tiers = [
        ("🥇", "Legend", "₹5,000+"),
        ("🏆", "Champion", "₹2,500+"),
        ("⭐", "Rising Star", "₹1,000+"),
        ("🎯", "Starter", "₹100+"),
    ];

    view! {
        <section>
            <h2 class="text-xl font-semibold mb-4">"🎯 Achievement Levels"</h2>
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                {tiers.into_iter().map(|(icon, title, amount)| view! {
                    <div class="bg-gray-800 rounded-lg p-4 text-center border border-gray-700">
                        <div class="text-2xl">{icon}</div>
                        <h4 class="font-semibold mt-1">{title}</h4>
                        <p class="text-gray-400 text-sm">{amount}</p>
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}
