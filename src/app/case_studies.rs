//! Case-study showcase: a sticky stacked-card deck driven by scroll
//! progress, followed by the "Product Impact" overview block.

use leptos::html;
use leptos::prelude::*;

use crate::motion;

use super::icons::{self, Icon};
use super::listeners::{on_viewport_change, viewport_height};
use super::tilt::TiltCard;
use super::PageNav;

struct CaseStudy {
    id: u8,
    category: &'static str,
    title: &'static str,
    description: &'static str,
    gradient: &'static str,
    icon: &'static str,
}

static CASE_STUDIES: [CaseStudy; 6] = [
    CaseStudy {
        id: 1,
        category: "Analytics Engine",
        title: "Predictive Market Pulse",
        description: "Real-time forecasting algorithm processing 50k+ data points per second. \
                      Achieved 94% accuracy in volatility detection for retail trading desks.",
        gradient: "from-blue-900 via-indigo-900 to-slate-900",
        icon: icons::ZAP,
    },
    CaseStudy {
        id: 2,
        category: "AI Automation",
        title: "Neural Content Architect",
        description: "Autonomous content generation pipeline using custom LLM agents. Reducing \
                      editorial workflow overhead by 68% while maintaining specific brand voice parameters.",
        gradient: "from-purple-900 via-fuchsia-900 to-slate-900",
        icon: icons::CODE,
    },
    CaseStudy {
        id: 3,
        category: "Infrastructure",
        title: "Global Mesh Network",
        description: "Decentralized edge-computing protocol for IoT devices. Reduced latency by \
                      40ms globally through intelligent peer-to-peer route optimization.",
        gradient: "from-emerald-900 via-teal-900 to-slate-900",
        icon: icons::GLOBE,
    },
    CaseStudy {
        id: 4,
        category: "Data Viz",
        title: "Holographic Dashboard",
        description: "WebGPU-powered 3D visualization suite for complex supply chain data. \
                      Rendering millions of entities in real-time with sub-16ms frame times.",
        gradient: "from-amber-900 via-orange-900 to-slate-900",
        icon: icons::BOX,
    },
    CaseStudy {
        id: 5,
        category: "FinTech",
        title: "Quantum Ledger Core",
        description: "High-frequency trading settlement layer capable of 100k TPS. Built with \
                      Rust for zero-cost abstractions and memory safety guarantees.",
        gradient: "from-rose-900 via-red-900 to-slate-900",
        icon: icons::DATABASE,
    },
    CaseStudy {
        id: 6,
        category: "System Design",
        title: "Micro-Frontend Orchestrator",
        description: "Framework-agnostic composition layer allowing seamless integration of \
                      independent UI modules into a unified enterprise view.",
        gradient: "from-cyan-900 via-blue-900 to-slate-900",
        icon: icons::LAYERS,
    },
];

fn card_style(progress: f64, index: usize) -> String {
    let style = motion::stack_style(progress, index, CASE_STUDIES.len());
    let clip = match style.clip_right {
        Some(clip) => format!("clip-path:inset(0 {clip:.2}% 0 0);"),
        None => "clip-path:none;".to_string(),
    };
    format!(
        "opacity:{:.4};transform:translateX({:.3}%) scale({:.4}) translateZ(0);{}\
         z-index:{};will-change:transform,opacity,clip-path;{}",
        style.opacity,
        style.translate_x,
        style.scale,
        clip,
        CASE_STUDIES.len() - index,
        if style.hidden { "display:none;" } else { "" },
    )
}

#[component]
pub fn CaseStudies() -> impl IntoView {
    view! {
        <CardStack />
        <ImpactOverview />
    }
}

#[component]
fn CardStack() -> impl IntoView {
    let container_ref = NodeRef::<html::Div>::new();
    let (progress, set_progress) = signal(0.0_f64);

    on_viewport_change(move || {
        if let Some(el) = container_ref.get_untracked() {
            let rect = el.get_bounding_client_rect();
            set_progress.set(motion::scroll_progress(
                rect.top(),
                rect.height(),
                viewport_height(),
            ));
        }
    });

    let active = Memo::new(move |_| motion::stack_active_index(progress.get(), CASE_STUDIES.len()));
    let nav = use_context::<PageNav>();

    view! {
        <div node_ref=container_ref class="relative h-[500vh]">
            <div class="sticky top-0 h-screen w-full flex items-center justify-center overflow-hidden">
                // Progress pips
                <div class="absolute right-4 md:right-8 top-1/2 -translate-y-1/2 flex flex-col gap-3 md:gap-4 z-50 pointer-events-none">
                    {(0..CASE_STUDIES.len())
                        .map(|i| {
                            view! {
                                <div class=move || {
                                    if i == active.get() {
                                        "transition-all duration-300 rounded-full w-1.5 h-6 md:h-8 bg-white shadow-[0_0_10px_rgba(255,255,255,0.5)]"
                                    } else {
                                        "transition-all duration-300 rounded-full w-1.5 h-1.5 bg-white/20"
                                    }
                                }></div>
                            }
                        })
                        .collect_view()}
                </div>

                // Counter
                <div class="absolute left-4 bottom-4 md:left-8 md:bottom-8 z-50 font-mono text-2xl md:text-4xl text-white/20 font-light pointer-events-none">
                    {move || format!("0{}", active.get() + 1)}
                    " "
                    <span class="text-white/10 text-base md:text-xl">
                        {format!("of 0{}", CASE_STUDIES.len())}
                    </span>
                </div>

                // Card stack
                <div class="relative w-[90vw] md:w-[80vw] h-[60vh] md:h-[70vh]">
                    {CASE_STUDIES
                        .iter()
                        .enumerate()
                        .map(|(i, study)| {
                            view! {
                                <div
                                    class="absolute inset-0 rounded-[2rem] overflow-hidden shadow-2xl border border-white/10 bg-[#08080c]"
                                    style=move || card_style(progress.get(), i)
                                >
                                    <div class=format!(
                                        "absolute inset-0 bg-gradient-to-br {}",
                                        study.gradient,
                                    )></div>

                                    <span class="absolute -right-6 sm:-right-12 -bottom-10 sm:-bottom-20 text-[10rem] sm:text-[15rem] md:text-[20rem] lg:text-[25rem] font-bold text-white/5 select-none pointer-events-none font-serif leading-none">
                                        {study.id}
                                    </span>

                                    <div class="absolute inset-0 p-6 sm:p-8 md:p-12 lg:p-16 flex flex-col justify-between">
                                        <div class="flex justify-between items-start">
                                            <div class="inline-flex items-center gap-1.5 sm:gap-2 px-3 sm:px-4 py-1.5 sm:py-2 rounded-full glass-card bg-white/5 border border-white/10 text-white/80 text-xs sm:text-sm font-medium tracking-wide uppercase">
                                                {study.category}
                                            </div>
                                        </div>

                                        <div class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 text-white/10">
                                            <Icon markup=study.icon class="w-24 h-24 md:w-32 md:h-32" />
                                        </div>

                                        <div class="space-y-4 sm:space-y-6 lg:space-y-8 z-10 max-w-2xl">
                                            <h2 class="text-3xl sm:text-4xl md:text-5xl lg:text-7xl font-bold text-white font-serif leading-tight">
                                                {study.title}
                                            </h2>
                                            <p class="text-sm sm:text-base md:text-lg lg:text-xl text-slate-300 leading-relaxed font-light">
                                                {study.description}
                                            </p>

                                            <button
                                                on:click=move |_| {
                                                    if let Some(nav) = nav {
                                                        nav.go("/projects");
                                                    }
                                                }
                                                class="group mt-2 sm:mt-4 inline-flex items-center gap-2 sm:gap-3 text-white text-sm sm:text-base lg:text-lg font-medium border-b border-white/0 hover:border-white transition-all pb-1"
                                            >
                                                "View Case Study"
                                                <Icon
                                                    markup=icons::ARROW_RIGHT
                                                    class="w-4 h-4 sm:w-5 sm:h-5 group-hover:translate-x-1 transition-transform"
                                                />
                                            </button>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn ImpactOverview() -> impl IntoView {
    let nav = use_context::<PageNav>();

    view! {
        <div class="max-w-7xl mx-auto px-6 mt-24">
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
                <div class="relative">
                    <TiltCard class="rounded-2xl overflow-hidden">
                        <img
                            src="https://picsum.photos/seed/impact/800/600"
                            alt="Case study preview"
                            class="w-full h-auto object-cover rounded-2xl"
                        />
                    </TiltCard>
                </div>

                <div class="space-y-6">
                    <h2 class="text-5xl md:text-6xl font-black leading-tight">
                        <span class="bg-gradient-to-r from-blue-400 via-indigo-500 to-cyan-400 bg-clip-text text-transparent">
                            "Product Impact"
                        </span>
                    </h2>

                    <p class="text-lg text-slate-400 leading-relaxed">
                        "Product case studies showcasing user-centered problem solving and measurable business impact.
                        Each project demonstrates strategic thinking, data-driven decisions, and cross-functional collaboration."
                    </p>

                    <ul class="space-y-3">
                        <li class="flex items-center gap-3 text-slate-300">
                            <span class="w-2 h-2 bg-blue-500 rounded-full"></span>
                            "B2B Lead Generation Platform - 80% time reduction, 4.7/5 satisfaction"
                        </li>
                        <li class="flex items-center gap-3 text-slate-300">
                            <span class="w-2 h-2 bg-indigo-500 rounded-full"></span>
                            "Retail Analytics Platform - 92% forecast accuracy, $200K ARR"
                        </li>
                        <li class="flex items-center gap-3 text-slate-300">
                            <span class="w-2 h-2 bg-cyan-500 rounded-full"></span>
                            "Business Automation Platform - 40+ hrs saved, 70% activation rate"
                        </li>
                    </ul>

                    <button
                        on:click=move |_| {
                            if let Some(nav) = nav {
                                nav.go("/projects");
                            }
                        }
                        class="group inline-flex items-center gap-3 px-8 py-4 rounded-full bg-gradient-to-r from-blue-600 to-indigo-600 text-white font-bold transition-all hover:from-blue-500 hover:to-indigo-500 shadow-lg hover:shadow-blue-500/25"
                    >
                        "View Case Studies"
                        <Icon
                            markup=icons::ARROW_RIGHT
                            class="w-5 h-5 transition-transform group-hover:translate-x-1"
                        />
                    </button>
                </div>
            </div>
        </div>
    }
}
