//! Dashboard Page
//!
//! Per-intern overview: totals, level progress, rewards grid, recent
//! donations, and the monthly trend chart. Data is re-fetched whenever the
//! session's intern id changes; on any fetch failure the page degrades to
//! fixtures behind a banner instead of erroring out.

use leptos::*;

use crate::components::{DemoDataBanner, Loading};
use crate::loader::{self, DashboardBundle, RequestGuard, ViewState};
use crate::model::{clamp_percentage, format_amount, trend_bar_heights, StatsData};
use crate::state::use_session;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let session = use_session();
    let (state, set_state) = create_signal(ViewState::<DashboardBundle>::Loading);

    // Responses from a superseded load (intern id changed mid-flight) or
    // from after navigation away must not write into this view
    let guard = RequestGuard::new();
    on_cleanup(move || guard.invalidate());

    create_effect(move |_| {
        let intern_id = session.intern_id();
        let token = guard.begin();
        set_state.set(ViewState::Loading);

        spawn_local(async move {
            let loaded = loader::load_dashboard(intern_id).await;
            if guard.is_current(token) {
                set_state.set(loaded);
            }
        });
    });

    view! {
        <div>
            {move || match state.get() {
                ViewState::Loading => view! {
                    <Loading message="Loading your dashboard..." />
                }.into_view(),
                ViewState::Ready(bundle) => view! {
                    <DashboardContent bundle=bundle error=None />
                }.into_view(),
                ViewState::Degraded { data, error } => view! {
                    <DashboardContent bundle=data error=Some(error) />
                }.into_view(),
            }}
        </div>
    }
}

/// Rendered dashboard body, shared by the live and degraded states
#[component]
fn DashboardContent(
    bundle: DashboardBundle,
    error: Option<String>,
) -> impl IntoView {
    let DashboardBundle { data, stats } = bundle;

    view! {
        <div class="space-y-8">
            {error.map(|e| view! { <DemoDataBanner error=e /> })}

            // Page header with referral code
            <div class="flex items-center justify-between flex-wrap gap-4">
                <div>
                    <h1 class="text-3xl font-bold">{format!("Welcome back, {}! 👋", data.name)}</h1>
                    <p class="text-gray-400 mt-1">"Here's your donation tracking overview"</p>
                </div>
                <div class="bg-gray-800 rounded-lg px-4 py-2 text-sm">
                    <span class="text-gray-400">"Your Referral Code: "</span>
                    <span class="font-mono font-semibold">{data.referral_code.clone()}</span>
                </div>
            </div>

            // Stat cards
            <StatCards total_donations=data.total_donations stats=stats.clone() />

            <div class="grid lg:grid-cols-2 gap-8">
                <div class="space-y-8">
                    <ProgressSection progress=data.progress.clone() />
                    <RewardsSection rewards=data.rewards.clone() />
                </div>
                <div class="space-y-8">
                    <RecentDonations donations=data.recent_donations.clone() />
                    <TrendSection trend=stats.donation_trend.clone() />
                </div>
            </div>
        </div>
    }
}

/// Summary stat cards row
#[component]
fn StatCards(
    total_donations: f64,
    stats: StatsData,
) -> impl IntoView {
    let growth = stats.this_month.growth;
    let (growth_arrow, growth_class) = if growth >= 0.0 {
        ("↗️", "text-green-400")
    } else {
        ("↘️", "text-red-400")
    };

    view! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
            <StatCard icon="💰" value=format!("₹{}", format_amount(total_donations)) label="Total Donations" />
            <StatCard icon="👥" value=stats.total_donors.to_string() label="Total Donors" />
            <StatCard icon="📈" value=format!("₹{}", format_amount(stats.average_donation)) label="Average Donation" />
            <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
                <div class="text-2xl">"🔥"</div>
                <div class="text-2xl font-bold mt-2">
                    {format!("₹{}", format_amount(stats.this_month.donations))}
                </div>
                <p class="text-gray-400 text-sm">"This Month"</p>
                <span class=format!("text-sm {}", growth_class)>
                    {format!("{} {}%", growth_arrow, growth.abs())}
                </span>
            </div>
        </div>
    }
}

/// Single stat card
#[component]
fn StatCard(
    icon: &'static str,
    #[prop(into)]
    value: String,
    label: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
            <div class="text-2xl">{icon}</div>
            <div class="text-2xl font-bold mt-2">{value}</div>
            <p class="text-gray-400 text-sm">{label}</p>
        </div>
    }
}

/// Progress toward the next milestone
#[component]
fn ProgressSection(progress: crate::model::Progress) -> impl IntoView {
    // Bar width is clamped even if the server reports out-of-range progress
    let width = clamp_percentage(progress.progress_percentage);

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"🎯 Progress to Next Level"</h2>
            <div class="space-y-3">
                <div class="flex items-center justify-between text-sm">
                    <span class="font-semibold text-primary-400">{progress.current_level.clone()}</span>
                    <span class="text-gray-400">
                        {format!("Next: ₹{}", format_amount(progress.next_milestone))}
                    </span>
                </div>
                <div class="w-full bg-gray-700 rounded-full h-3">
                    <div
                        class="bg-primary-500 h-3 rounded-full transition-all"
                        style=format!("width: {}%", width)
                    />
                </div>
                <div class="text-center text-sm text-gray-400">
                    {format!("{}% Complete", progress.progress_percentage.round())}
                </div>
            </div>
        </section>
    }
}

/// Rewards and achievements grid
#[component]
fn RewardsSection(rewards: Vec<crate::model::Reward>) -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"🏆 Rewards & Achievements"</h2>
            <div class="grid sm:grid-cols-2 gap-4">
                {rewards.into_iter().map(|reward| {
                    let card_class = if reward.unlocked {
                        "relative bg-gray-700 rounded-lg p-4 border border-primary-500"
                    } else {
                        "relative bg-gray-700/50 rounded-lg p-4 border border-gray-600 opacity-70"
                    };
                    view! {
                        <div class=card_class>
                            <div class="text-3xl">{reward.icon.clone()}</div>
                            <h4 class="font-semibold mt-2">{reward.title.clone()}</h4>
                            <p class="text-gray-400 text-sm">{reward.description.clone()}</p>
                            <div class="text-xs text-gray-500 mt-2">
                                {format!("₹{} required", format_amount(reward.required_donations))}
                            </div>
                            // Unlock badge renders strictly from the server flag
                            {reward.unlocked.then(|| view! {
                                <div class="absolute top-2 right-2">"✅"</div>
                            })}
                        </div>
                    }
                }).collect_view()}
            </div>
        </section>
    }
}

/// Recent donations list or empty state
#[component]
fn RecentDonations(donations: Vec<crate::model::Donation>) -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"💸 Recent Donations"</h2>
            {if donations.is_empty() {
                view! {
                    <div class="text-center py-8">
                        <p class="text-gray-400">"No recent donations"</p>
                        <span class="text-gray-500 text-sm">"Share your referral code to get started!"</span>
                    </div>
                }.into_view()
            } else {
                donations.into_iter().map(|donation| {
                    view! {
                        <div class="flex items-center justify-between py-3 border-b border-gray-700 last:border-0">
                            <div class="text-lg font-semibold text-green-400">
                                {format!("₹{}", format_amount(donation.amount))}
                            </div>
                            <div class="text-right">
                                <div>{donation.donor_name.clone()}</div>
                                <div class="text-gray-500 text-sm">{donation.date.clone()}</div>
                            </div>
                        </div>
                    }
                }).collect_view()
            }}
        </section>
    }
}

/// Monthly trend bar chart; hidden entirely when the trend is empty
#[component]
fn TrendSection(trend: Vec<crate::model::TrendPoint>) -> impl IntoView {
    if trend.is_empty() {
        return ().into_view();
    }

    let heights = trend_bar_heights(&trend);

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"📊 Monthly Trend"</h2>
            <div class="flex items-end justify-between h-40 gap-2">
                {trend.into_iter().zip(heights).map(|(point, height)| {
                    view! {
                        <div class="flex-1 flex flex-col items-center justify-end h-full">
                            <div
                                class="w-full bg-primary-500 rounded-t"
                                style=format!("height: {}%", height)
                            />
                            <div class="text-xs text-gray-400 mt-1">{point.month.clone()}</div>
                            <div class="text-xs text-gray-500">
                                {format!("₹{}", format_amount(point.amount))}
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
        </section>
    }
    .into_view()
}
