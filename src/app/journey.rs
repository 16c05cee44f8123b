//! Career timeline, staged through the scroll deck: a heading step, one card
//! per stop, and a glowing line to close the chapter.

use leptos::prelude::*;

use crate::motion::StepKind;

use super::icons::{self, Icon};
use super::stage::StageDeck;

struct JourneyItem {
    period: &'static str,
    title: &'static str,
    subtitle: &'static str,
    details: &'static str,
    icon: &'static str,
}

static JOURNEY_ITEMS: [JourneyItem; 3] = [
    JourneyItem {
        period: "2021 - 2025",
        title: "Bachelor of Engineering",
        subtitle: "Comp Eng. & Visual Arts",
        details: "Focusing on the intersection of technical excellence and creative expression. \
                  Maintaining a high academic standard with a CGPA of 7.75.",
        icon: icons::GRADUATION_CAP,
    },
    JourneyItem {
        period: "June 2025 - Oct 2025",
        title: "Product Analyst Intern",
        subtitle: "Kanishka Software",
        details: "Analyzed user behavior data to inform product decisions. Built predictive \
                  models and dashboards to track product metrics and KPIs.",
        icon: icons::BRIEFCASE,
    },
    JourneyItem {
        period: "Jan 2024 - Present",
        title: "Product Strategy & Development",
        subtitle: "Independent Projects",
        details: "Leading end-to-end product development for automation and analytics \
                  solutions. Conducting user research and defining product vision.",
        icon: icons::BRIEFCASE,
    },
];

#[component]
pub fn Journey() -> impl IntoView {
    let mut steps: Vec<(StepKind, AnyView)> = Vec::new();
    steps.push((StepKind::Heading, view! { <JourneyHeading /> }.into_any()));
    for item in &JOURNEY_ITEMS {
        steps.push((StepKind::Card, view! { <JourneyCard item=item /> }.into_any()));
    }
    steps.push((StepKind::Line, view! { <GlowingLine /> }.into_any()));

    view! { <StageDeck steps=steps /> }
}

#[component]
fn JourneyHeading() -> impl IntoView {
    view! {
        <div class="text-center px-6">
            <h2 class="text-6xl md:text-8xl font-black tracking-tighter bg-gradient-to-b from-white to-slate-500 bg-clip-text text-transparent">
                "Journey So Far"
            </h2>
            <div class="flex justify-center mt-4">
                <div class="w-px h-24 bg-gradient-to-b from-blue-600/80 via-blue-600/50 to-blue-600/30 relative">
                    <div class="absolute top-0 left-1/2 -translate-x-1/2 w-1 h-8 bg-gradient-to-b from-blue-400 to-transparent rounded-full animate-pulse"></div>
                    <div class="absolute inset-0 w-px bg-blue-500/50 blur-sm"></div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn JourneyCard(item: &'static JourneyItem) -> impl IntoView {
    view! {
        <div class="w-[280px] sm:w-[320px] md:w-[380px] lg:w-[420px] glass-card rounded-2xl sm:rounded-[2rem] p-5 sm:p-6 border border-white/10 mx-4 sm:mx-0">
            <div class="w-12 h-12 sm:w-14 sm:h-14 md:w-16 md:h-16 rounded-xl sm:rounded-2xl bg-blue-500/10 flex items-center justify-center text-blue-400 mb-6 sm:mb-8">
                <Icon markup=item.icon class="w-7 h-7 sm:w-8 sm:h-8" />
            </div>

            <div class="space-y-3 sm:space-y-4">
                <div class="flex items-center text-[11px] sm:text-[12px] font-bold text-blue-400 uppercase tracking-[0.25em] sm:tracking-[0.3em]">
                    <Icon markup=icons::CALENDAR class="w-3 h-3 sm:w-3.5 sm:h-3.5 mr-2 sm:mr-3" />
                    {item.period}
                </div>
                <h3 class="text-xl sm:text-2xl font-black text-white leading-tight">{item.title}</h3>
                <p class="text-base sm:text-lg font-semibold text-slate-300">{item.subtitle}</p>
                <div class="pt-4 sm:pt-6 border-t border-white/10">
                    <p class="text-slate-400 text-xs sm:text-sm leading-relaxed font-light">
                        {item.details}
                    </p>
                </div>
            </div>
        </div>
    }
}

#[component]
fn GlowingLine() -> impl IntoView {
    view! {
        <div class="w-full h-screen flex items-center justify-center">
            <div class="relative w-3/4 h-1">
                <div class="absolute inset-0 bg-gradient-to-r from-transparent via-purple-500 to-transparent"></div>
                <div class="absolute inset-0 bg-gradient-to-r from-transparent via-purple-400 to-transparent blur-md"></div>
                <div class="absolute inset-0 bg-gradient-to-r from-transparent via-purple-300 to-transparent blur-xl"></div>
                <div class="absolute top-1/2 -translate-y-1/2 w-32 h-3 bg-gradient-to-r from-transparent via-white to-transparent blur-sm animate-glow-slide"></div>
            </div>
        </div>
    }
}
