//! Tech-stack ladder: cards reveal as they intersect the viewport, while a
//! glow travels down the center line with section progress.

use leptos::html;
use leptos::prelude::*;
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::motion;

use super::listeners::{on_viewport_change, viewport_height};

const SKILLS: [(&str, bool); 9] = [
    ("QA (Quality Assurance)", true),
    ("n8n Automation", false),
    ("Python Engineering", true),
    ("A/B Testing", false),
    ("System Testing", true),
    ("Workflow Automation", false),
    ("SQL Querying", true),
    ("MySQL Database", false),
    ("Power BI Visualization", true),
];

#[component]
pub fn Skills() -> impl IntoView {
    let section_ref = NodeRef::<html::Div>::new();
    let (progress, set_progress) = signal(0.0_f64);

    on_viewport_change(move || {
        if let Some(el) = section_ref.get_untracked() {
            let rect = el.get_bounding_client_rect();
            set_progress.set(motion::section_through_progress(
                rect.top(),
                rect.height(),
                viewport_height(),
            ));
        }
    });

    // The glow stops short of the line's tail instead of running off it.
    let glow_top = move || format!("top:{:.2}%", (progress.get() * 100.0).min(85.0));

    view! {
        <div node_ref=section_ref class="max-w-4xl mx-auto px-6 relative">
            <div class="text-center mb-20">
                <h2 class="text-5xl md:text-7xl font-black mb-6 tracking-tighter">"Tech Stack"</h2>
                <p class="text-slate-500 text-xl font-light">
                    "A collection of tools that drive my "
                    <span class="text-blue-500">"automation ecosystem"</span> "."
                </p>
            </div>

            <div class="absolute left-1/2 transform -translate-x-1/2 top-48 bottom-0 w-px bg-gradient-to-b from-blue-600/30 via-blue-400/20 to-transparent hidden md:block">
                <div
                    class="absolute left-1/2 -translate-x-1/2 w-3 h-20 bg-gradient-to-b from-cyan-400 via-blue-500 to-transparent rounded-full blur-sm transition-all duration-150"
                    style=glow_top
                ></div>
                <div
                    class="absolute left-1/2 -translate-x-1/2 w-1 h-12 bg-gradient-to-b from-white via-cyan-300 to-transparent rounded-full transition-all duration-150"
                    style=glow_top
                ></div>
                <div class="absolute inset-0 w-px bg-blue-500/30 blur-sm"></div>
            </div>

            <div class="space-y-4 md:space-y-6 relative">
                {SKILLS
                    .iter()
                    .map(|(name, left)| view! { <SkillCard name=*name left=*left /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn SkillCard(name: &'static str, left: bool) -> impl IntoView {
    let card_ref = NodeRef::<html::Div>::new();
    let (visible, set_visible) = signal(false);

    // Inset margins make cards drop out again just before touching the
    // viewport edges, matching the reveal on the way in.
    let _ = use_intersection_observer_with_options(
        card_ref,
        move |entries, _| {
            if let Some(entry) = entries.first() {
                set_visible.set(entry.is_intersecting());
            }
        },
        UseIntersectionObserverOptions::default()
            .thresholds(vec![0.1])
            .root_margin("-50px 0px -50px 0px"),
    );

    let wrapper_class = move || {
        let motion = if visible.get() {
            "opacity-100 translate-x-0 translate-y-0 scale-100 blur-0"
        } else if left {
            "opacity-0 -translate-x-12 translate-y-12 scale-95 blur-sm"
        } else {
            "opacity-0 translate-x-12 translate-y-12 scale-95 blur-sm"
        };
        let order = if left { "md:flex-row-reverse" } else { "" };
        format!(
            "flex flex-col md:flex-row items-center justify-center relative transition-all duration-700 ease-in-out {motion} {order}"
        )
    };

    let dot_class = move || {
        let reveal = if visible.get() {
            "scale-100 opacity-100"
        } else {
            "scale-0 opacity-0"
        };
        format!(
            "hidden md:flex absolute left-1/2 transform -translate-x-1/2 w-3 h-2 rounded-full bg-blue-600 shadow-[0_0_15px_rgba(37,99,235,0.8)] z-10 transition-all duration-500 {reveal}"
        )
    };

    let text_align = if left { "md:text-left" } else { "md:text-right" };

    view! {
        <div node_ref=card_ref class=wrapper_class>
            <div class=format!("w-full md:w-1/2 px-4 {text_align}")>
                <div class="inline-block p-4 px-4 rounded-3xl glass-card hover:border-blue-500/50 hover:bg-blue-600/5 transition-all duration-500 cursor-default group w-full md:w-auto overflow-hidden relative">
                    <div class="absolute inset-0 bg-gradient-to-r from-blue-600/0 via-blue-600/5 to-blue-600/0 translate-x-[-100%] group-hover:translate-x-[100%] transition-transform duration-1000"></div>
                    <span class="text-xl font-bold tracking-tight text-slate-100 group-hover:text-blue-400 group-hover:neon-text-blue transition-all relative z-10">
                        {name}
                    </span>
                </div>
            </div>

            <div class=dot_class></div>

            <div class="hidden md:block md:w-1/2 px-2"></div>
        </div>
    }
}
