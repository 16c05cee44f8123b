//! Projects listing page and the case-study detail modal.

use leptos::prelude::*;
use leptos_use::{use_document, use_event_listener};

use crate::contact::CONTACT_EMAIL;

use super::icons::{self, Icon};
use super::tilt::TiltCard;
use super::PageNav;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    Product,
    Analytics,
    Automation,
}

impl Category {
    fn label(self) -> &'static str {
        match self {
            Category::Product => "Product",
            Category::Analytics => "Analytics",
            Category::Automation => "Automation",
        }
    }

    fn badge_class(self) -> &'static str {
        match self {
            Category::Product => {
                "absolute top-4 left-4 px-4 py-2 rounded-full glass-card border border-purple-500/30 text-purple-400 text-sm font-bold"
            }
            Category::Analytics => {
                "absolute top-4 left-4 px-4 py-2 rounded-full glass-card border border-blue-500/30 text-blue-400 text-sm font-bold"
            }
            Category::Automation => {
                "absolute top-4 left-4 px-4 py-2 rounded-full glass-card border border-cyan-500/30 text-cyan-400 text-sm font-bold"
            }
        }
    }

    fn pill_class(self) -> &'static str {
        match self {
            Category::Product => {
                "px-3 py-1 rounded-full bg-purple-500/10 border border-purple-500/20 text-purple-400 text-xs font-bold"
            }
            Category::Analytics => {
                "px-3 py-1 rounded-full bg-blue-500/10 border border-blue-500/20 text-blue-400 text-xs font-bold"
            }
            Category::Automation => {
                "px-3 py-1 rounded-full bg-cyan-500/10 border border-cyan-500/20 text-cyan-400 text-xs font-bold"
            }
        }
    }

    fn dot_class(self) -> &'static str {
        match self {
            Category::Product => "w-2 h-2 rounded-full bg-purple-500",
            Category::Analytics => "w-2 h-2 rounded-full bg-blue-500",
            Category::Automation => "w-2 h-2 rounded-full bg-cyan-500",
        }
    }

    fn metric_class(self) -> &'static str {
        match self {
            Category::Product => "text-3xl font-bold text-purple-400 mb-2",
            Category::Analytics => "text-3xl font-bold text-blue-400 mb-2",
            Category::Automation => "text-3xl font-bold text-cyan-400 mb-2",
        }
    }

    fn cta_class(self) -> &'static str {
        match self {
            Category::Product => {
                "flex items-center justify-center gap-2 px-6 py-3 rounded-full bg-purple-600 text-white hover:bg-purple-700 transition-all active:scale-95"
            }
            Category::Analytics => {
                "flex items-center justify-center gap-2 px-6 py-3 rounded-full bg-blue-600 text-white hover:bg-blue-700 transition-all active:scale-95"
            }
            Category::Automation => {
                "flex items-center justify-center gap-2 px-6 py-3 rounded-full bg-cyan-600 text-white hover:bg-cyan-700 transition-all active:scale-95"
            }
        }
    }
}

struct Project {
    title: &'static str,
    long_description: &'static str,
    tags: &'static [&'static str],
    image: &'static str,
    github: Option<&'static str>,
    live: Option<&'static str>,
    featured: bool,
    category: Category,
    role: &'static str,
    problem: &'static str,
    solution: &'static str,
    outcome: &'static str,
    metrics: &'static [(&'static str, &'static str)],
    duration: Option<&'static str>,
    stakeholders: &'static [&'static str],
    methodologies: &'static [&'static str],
}

static PROJECTS: [Project; 6] = [
    Project {
        title: "Predictive Analytics Dashboard",
        long_description: "Built a comprehensive analytics dashboard using SQL and Power BI to \
                           forecast retail sales trends with 92% accuracy. Implemented ETL \
                           pipelines and automated reporting systems.",
        tags: &["SQL", "Power BI", "Python", "ETL"],
        image: "https://picsum.photos/seed/dashboard/800/600",
        github: Some("https://github.com/Gethc"),
        live: Some("https://retail-pulse.streamlit.app"),
        featured: true,
        category: Category::Analytics,
        role: "Data Analyst",
        problem: "Regional managers planned inventory from month-old spreadsheets, so stores \
                  alternated between stockouts on fast movers and markdowns on dead stock.",
        solution: "Consolidated point-of-sale feeds into a nightly ETL pipeline and layered a \
                   Power BI forecasting model on top, with per-store drill-downs and automated \
                   weekly digests.",
        outcome: "Forecasts reached 92% accuracy and buying decisions moved from monthly \
                  guesswork to a weekly data-driven cadence.",
        metrics: &[
            ("Forecast accuracy", "92%"),
            ("Reporting time saved", "12 hrs/wk"),
            ("Annual revenue impact", "$200K"),
        ],
        duration: Some("4 months"),
        stakeholders: &["Retail Ops", "Finance", "Store Managers"],
        methodologies: &["Time-series forecasting", "Dimensional modeling"],
    },
    Project {
        title: "Automated Lead Gen Bot",
        long_description: "Developed an intelligent automation system that scrapes, verifies, and \
                           categorizes potential B2B leads via LinkedIn APIs. Reduced manual \
                           prospecting time by 80%.",
        tags: &["n8n", "Node.js", "Automation", "API"],
        image: "https://picsum.photos/seed/leadbot/800/600",
        github: Some("https://github.com/Gethc"),
        live: Some("https://leadhunter-demo.vercel.app"),
        featured: true,
        category: Category::Automation,
        role: "Automation Engineer",
        problem: "Sales reps spent most mornings copy-pasting prospect details between LinkedIn, \
                  a verifier tool, and the CRM before outreach could even start.",
        solution: "Modeled the whole funnel as an n8n workflow: scheduled scraping, e-mail \
                   verification, enrichment, deduplication, and CRM insertion with a manual \
                   review queue for edge cases.",
        outcome: "Prospecting time dropped by 80% and reps rated the lead quality 4.7 out of 5 \
                  after the first quarter.",
        metrics: &[
            ("Prospecting time cut", "80%"),
            ("Lead quality rating", "4.7/5"),
            ("Leads processed daily", "1,200"),
        ],
        duration: Some("3 months"),
        stakeholders: &["Sales", "Marketing"],
        methodologies: &["Workflow automation", "API integration"],
    },
    Project {
        title: "Health Tech QA Suite",
        long_description: "Created an automated testing suite for a healthcare application, \
                           reducing regression testing time by 60%. Includes unit, integration, \
                           and E2E test coverage.",
        tags: &["QA", "Selenium", "JavaScript", "Jest"],
        image: "https://picsum.photos/seed/qatest/800/600",
        github: Some("https://github.com/Gethc"),
        live: None,
        featured: true,
        category: Category::Product,
        role: "QA Lead",
        problem: "Every release of the patient portal needed a week of manual regression \
                  testing, and critical flows still slipped through untested.",
        solution: "Built a layered suite: Jest units for business rules, integration tests \
                   against a seeded staging database, and Selenium E2E runs for the booking and \
                   prescription flows, wired into CI.",
        outcome: "Regression time fell by 60% and release-blocking defects were caught before \
                  staging instead of in production.",
        metrics: &[
            ("Regression time cut", "60%"),
            ("Critical flows covered", "100%"),
            ("Escaped defects", "0 in 6 mo"),
        ],
        duration: Some("5 months"),
        stakeholders: &["Engineering", "Compliance", "Clinical Ops"],
        methodologies: &["Risk-based testing", "CI/CD"],
    },
    Project {
        title: "E-commerce Data Pipeline",
        long_description: "Designed and implemented a real-time data pipeline for e-commerce \
                           analytics, processing over 100K transactions daily with sub-second \
                           latency.",
        tags: &["Python", "Apache Kafka", "PostgreSQL"],
        image: "https://picsum.photos/seed/ecommerce/800/600",
        github: Some("https://github.com/Gethc"),
        live: Some("https://commerce-stream-demo.vercel.app"),
        featured: false,
        category: Category::Analytics,
        role: "Data Engineer",
        problem: "Order, inventory, and clickstream data landed in three separate stores and \
                  only met in a batch job that ran overnight.",
        solution: "Streamed all three sources through Kafka into a PostgreSQL mart with \
                   idempotent consumers, giving dashboards a single sub-second view.",
        outcome: "The business watched campaign performance live for the first time, processing \
                  100K+ transactions a day without a missed event.",
        metrics: &[("Daily transactions", "100K+"), ("End-to-end latency", "<1s")],
        duration: Some("6 months"),
        stakeholders: &["Growth", "Engineering"],
        methodologies: &["Stream processing", "Event sourcing"],
    },
    Project {
        title: "AI Customer Support Bot",
        long_description: "Built an intelligent chatbot using NLP techniques to handle customer \
                           support queries, achieving 85% resolution rate without human \
                           intervention.",
        tags: &["Python", "NLP", "FastAPI", "Redis"],
        image: "https://picsum.photos/seed/aibot/800/600",
        github: Some("https://github.com/Gethc"),
        live: None,
        featured: false,
        category: Category::Automation,
        role: "ML Engineer",
        problem: "Support queues overflowed with repetitive questions while complex tickets \
                  waited behind them.",
        solution: "Trained an intent classifier over two years of ticket history and served it \
                   behind FastAPI with Redis-backed conversation state, escalating anything \
                   below a confidence threshold.",
        outcome: "85% of conversations resolved without a human and median response time for \
                  escalated tickets halved.",
        metrics: &[("Self-serve resolution", "85%"), ("Escalation wait time", "-50%")],
        duration: Some("4 months"),
        stakeholders: &["Support", "Customer Success"],
        methodologies: &["Intent classification", "Human-in-the-loop"],
    },
    Project {
        title: "Workflow Automation Suite",
        long_description: "Developed a comprehensive workflow automation platform that integrates \
                           with 20+ third-party services, saving 40+ hours of manual work weekly.",
        tags: &["n8n", "Zapier", "REST APIs", "Webhooks"],
        image: "https://picsum.photos/seed/workflow/800/600",
        github: Some("https://github.com/Gethc"),
        live: Some("https://flowsuite-demo.vercel.app"),
        featured: false,
        category: Category::Product,
        role: "Product Owner",
        problem: "Back-office teams stitched together invoicing, onboarding, and reporting by \
                  hand across a sprawl of SaaS tools.",
        solution: "Catalogued every recurring hand-off, then shipped a library of composable \
                   n8n and Zapier workflows with shared error handling and a status dashboard.",
        outcome: "Over 40 hours of manual work disappeared each week and 70% of the team \
                  activated at least one workflow in the first month.",
        metrics: &[("Hours saved weekly", "40+"), ("Team activation", "70%")],
        duration: Some("Ongoing"),
        stakeholders: &["Operations", "Finance", "HR"],
        methodologies: &["Process mining", "Iterative rollout"],
    },
];

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let (selected, set_selected) = signal(None::<usize>);
    let nav = use_context::<PageNav>();

    view! {
        <div class="min-h-screen pt-24 pb-20 px-6 relative z-10">
            <div class="max-w-7xl mx-auto">
                <button
                    on:click=move |_| {
                        if let Some(nav) = nav {
                            nav.go("/");
                        }
                    }
                    class="inline-flex items-center gap-2 text-slate-400 hover:text-white transition-colors mb-12 group"
                >
                    <Icon
                        markup=icons::ARROW_LEFT
                        class="w-5 h-5 transition-transform group-hover:-translate-x-1"
                    />
                    <span>"Back to Home"</span>
                </button>

                <div class="text-center mb-16">
                    <div class="inline-flex items-center gap-2 px-4 py-2 rounded-full bg-blue-500/10 border border-blue-500/20 mb-6">
                        <Icon markup=icons::FOLDER class="w-4 h-4 text-blue-400" />
                        <span class="text-blue-400 text-sm font-medium">"My Work"</span>
                    </div>

                    <h1 class="text-5xl md:text-6xl font-bold mb-6">
                        <span class="bg-gradient-to-r from-blue-400 via-indigo-500 to-purple-500 bg-clip-text text-transparent">
                            "Projects"
                        </span>
                    </h1>

                    <p class="text-xl text-slate-400 max-w-2xl mx-auto">
                        "A collection of my work spanning automation, data analytics, quality assurance,
                        and AI-powered solutions."
                    </p>
                </div>

                <div class="mb-20">
                    <h2 class="text-2xl font-bold mb-8 flex items-center gap-3">
                        <span class="w-8 h-[2px] bg-blue-500"></span>
                        "Featured Projects"
                    </h2>

                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                        {PROJECTS
                            .iter()
                            .enumerate()
                            .filter(|(_, project)| project.featured)
                            .map(|(i, project)| {
                                view! { <ProjectCard project=project on_open=move || set_selected.set(Some(i)) /> }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div>
                    <h2 class="text-2xl font-bold mb-8 flex items-center gap-3">
                        <span class="w-8 h-[2px] bg-indigo-500"></span>
                        "Other Projects"
                    </h2>

                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                        {PROJECTS
                            .iter()
                            .enumerate()
                            .filter(|(_, project)| !project.featured)
                            .map(|(i, project)| {
                                view! { <ProjectCard project=project on_open=move || set_selected.set(Some(i)) /> }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="mt-20 text-center glass-card rounded-2xl p-12">
                    <h3 class="text-2xl font-bold mb-4">"Interested in working together?"</h3>
                    <p class="text-slate-400 mb-8 max-w-lg mx-auto">
                        "I'm always open to discussing new projects, creative ideas, or opportunities to be part of your vision."
                    </p>
                    <a
                        href=format!("mailto:{CONTACT_EMAIL}")
                        class="inline-flex items-center gap-2 px-8 py-4 rounded-full bg-gradient-to-r from-blue-600 to-indigo-600 text-white font-bold hover:shadow-lg hover:shadow-blue-500/25 transition-all"
                    >
                        "Get in Touch"
                    </a>
                </div>
            </div>

            <ProjectDetailModal selected=selected set_selected=set_selected />
        </div>
    }
}

#[component]
fn ProjectCard(project: &'static Project, on_open: impl Fn() + 'static) -> impl IntoView {
    let ring = if project.featured {
        "group rounded-2xl overflow-hidden glass-card cursor-pointer ring-1 ring-blue-500/30"
    } else {
        "group rounded-2xl overflow-hidden glass-card cursor-pointer"
    };

    view! {
        <div on:click=move |_| on_open()>
            <TiltCard class=ring>
                {project
                    .featured
                    .then(|| {
                        view! {
                            <div class="absolute top-4 right-4 z-10 px-3 py-1 rounded-full bg-blue-500/20 border border-blue-500/30">
                                <span class="text-blue-400 text-xs font-bold">"Featured"</span>
                            </div>
                        }
                    })}

                <div class="aspect-video w-full overflow-hidden relative">
                    <img
                        src=project.image
                        alt=project.title
                        class="w-full h-full object-cover transition-transform duration-700 group-hover:scale-110"
                    />
                    <div class="absolute inset-0 bg-gradient-to-t from-slate-950 via-slate-950/50 to-transparent"></div>
                </div>

                <div class="p-6 relative">
                    <div class="flex flex-wrap gap-2 mb-4">
                        {project
                            .tags
                            .iter()
                            .map(|tag| {
                                view! {
                                    <span class="text-[10px] uppercase tracking-wider font-bold px-2 py-1 rounded bg-blue-500/10 text-blue-400 border border-blue-500/20">
                                        {*tag}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>

                    <h3 class="text-xl font-bold mb-2 text-white group-hover:text-blue-400 transition-colors">
                        {project.title}
                    </h3>

                    <p class="text-slate-400 text-sm mb-4 line-clamp-2">{project.long_description}</p>

                    <div class="flex items-center gap-4 pt-4 border-t border-slate-800">
                        <span class="text-slate-300 flex items-center gap-2 text-sm font-medium">
                            <Icon markup=icons::GITHUB class="w-[18px] h-[18px]" />
                            "Code"
                        </span>
                        <span class="text-blue-400 flex items-center gap-2 text-sm font-medium">
                            <Icon markup=icons::EXTERNAL_LINK class="w-[18px] h-[18px]" />
                            "Case Study"
                        </span>
                    </div>
                </div>
            </TiltCard>
        </div>
    }
}

#[component]
fn ProjectDetailModal(
    selected: ReadSignal<Option<usize>>,
    set_selected: WriteSignal<Option<usize>>,
) -> impl IntoView {
    // ESC closes whichever project is open.
    let _ = use_event_listener(use_document(), leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            set_selected.set(None);
        }
    });

    // Lock body scroll behind the modal.
    Effect::new(move |_| {
        let locked = selected.get().is_some();
        if let Some(body) = document().body() {
            if locked {
                let _ = body.style().set_property("overflow", "hidden");
            } else {
                let _ = body.style().remove_property("overflow");
            }
        }
    });
    on_cleanup(|| {
        if let Some(body) = document().body() {
            let _ = body.style().remove_property("overflow");
        }
    });

    view! {
        {move || {
            selected
                .get()
                .and_then(|index| PROJECTS.get(index))
                .map(|project| {
                    let category = project.category;
                    view! {
                        <div class="fixed inset-0 z-50 flex items-center justify-center p-0 md:p-4">
                            <div
                                class="absolute inset-0 bg-black/80 backdrop-blur-sm"
                                on:click=move |_| set_selected.set(None)
                            ></div>

                            <div class="relative w-full h-full md:h-auto md:max-h-[90vh] md:max-w-4xl bg-slate-950 md:rounded-2xl overflow-hidden border-0 md:border md:border-slate-800 shadow-2xl">
                                <button
                                    on:click=move |_| set_selected.set(None)
                                    class="absolute top-4 right-4 z-20 w-12 h-12 rounded-full glass-card flex items-center justify-center text-slate-400 hover:text-white hover:bg-slate-800 transition-all active:scale-95"
                                >
                                    <Icon markup=icons::X class="w-6 h-6" />
                                </button>

                                <div class="h-full md:max-h-[90vh] overflow-y-auto">
                                    <div class="relative w-full aspect-video">
                                        <img
                                            src=project.image
                                            alt=project.title
                                            class="w-full h-full object-cover"
                                        />
                                        <div class="absolute inset-0 bg-gradient-to-t from-slate-950 via-slate-950/50 to-transparent"></div>
                                        <div class=category.badge_class()>{category.label()}</div>
                                    </div>

                                    <div class="p-6 md:p-8 space-y-8">
                                        <div>
                                            <div class="flex items-center gap-3 mb-4">
                                                <span class=category.pill_class()>{project.role}</span>
                                                {project
                                                    .featured
                                                    .then(|| {
                                                        view! {
                                                            <span class="px-3 py-1 rounded-full bg-blue-500/10 border border-blue-500/20 text-blue-400 text-xs font-bold">
                                                                "Featured"
                                                            </span>
                                                        }
                                                    })}
                                            </div>
                                            <h2 class="text-3xl md:text-4xl font-bold mb-4 text-white">
                                                {project.title}
                                            </h2>
                                            <p class="text-lg text-slate-300">{project.long_description}</p>
                                        </div>

                                        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                                            {project
                                                .duration
                                                .map(|duration| {
                                                    view! {
                                                        <div class="glass-card p-4 rounded-xl">
                                                            <div class="flex items-center gap-2 text-slate-400 text-sm mb-1">
                                                                <Icon markup=icons::CALENDAR class="w-4 h-4" />
                                                                <span>"Duration"</span>
                                                            </div>
                                                            <p class="text-white font-semibold">{duration}</p>
                                                        </div>
                                                    }
                                                })}
                                            <div class="glass-card p-4 rounded-xl">
                                                <div class="flex items-center gap-2 text-slate-400 text-sm mb-1">
                                                    <Icon markup=icons::USERS class="w-4 h-4" />
                                                    <span>"Stakeholders"</span>
                                                </div>
                                                <p class="text-white font-semibold">{project.stakeholders.len()}</p>
                                            </div>
                                            <div class="glass-card p-4 rounded-xl">
                                                <div class="flex items-center gap-2 text-slate-400 text-sm mb-1">
                                                    <Icon markup=icons::TARGET class="w-4 h-4" />
                                                    <span>"Methodologies"</span>
                                                </div>
                                                <p class="text-white font-semibold">
                                                    {project.methodologies.len()}
                                                </p>
                                            </div>
                                        </div>

                                        <div>
                                            <h3 class="text-xl font-bold mb-4 text-white">"Key Metrics"</h3>
                                            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                                                {project
                                                    .metrics
                                                    .iter()
                                                    .map(|(label, value)| {
                                                        view! {
                                                            <div class="glass-card p-6 rounded-xl border border-white/10">
                                                                <div class=category.metric_class()>{*value}</div>
                                                                <div class="text-sm text-slate-400">{*label}</div>
                                                            </div>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        </div>

                                        <div class="glass-card p-6 rounded-xl">
                                            <h3 class="text-xl font-bold mb-3 text-white flex items-center gap-2">
                                                <span class="w-2 h-2 rounded-full bg-red-500"></span>
                                                "Problem"
                                            </h3>
                                            <p class="text-slate-300 leading-relaxed">{project.problem}</p>
                                        </div>

                                        <div class="glass-card p-6 rounded-xl">
                                            <h3 class="text-xl font-bold mb-3 text-white flex items-center gap-2">
                                                <span class=category.dot_class()></span>
                                                "Solution"
                                            </h3>
                                            <p class="text-slate-300 leading-relaxed">{project.solution}</p>
                                        </div>

                                        <div class="glass-card p-6 rounded-xl">
                                            <h3 class="text-xl font-bold mb-3 text-white flex items-center gap-2">
                                                <span class="w-2 h-2 rounded-full bg-green-500"></span>
                                                "Outcome"
                                            </h3>
                                            <p class="text-slate-300 leading-relaxed">{project.outcome}</p>
                                        </div>

                                        <div>
                                            <h3 class="text-lg font-bold mb-3 text-white">"Stakeholders"</h3>
                                            <div class="flex flex-wrap gap-2">
                                                {project
                                                    .stakeholders
                                                    .iter()
                                                    .map(|stakeholder| {
                                                        view! {
                                                            <span class="px-3 py-1.5 rounded-full bg-slate-800 text-slate-300 text-sm border border-slate-700">
                                                                {*stakeholder}
                                                            </span>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        </div>

                                        <div>
                                            <h3 class="text-lg font-bold mb-3 text-white">"Methodologies"</h3>
                                            <div class="flex flex-wrap gap-2">
                                                {project
                                                    .methodologies
                                                    .iter()
                                                    .map(|methodology| {
                                                        view! {
                                                            <span class=category.pill_class()>{*methodology}</span>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        </div>

                                        <div>
                                            <h3 class="text-lg font-bold mb-3 text-white">
                                                "Skills & Technologies"
                                            </h3>
                                            <div class="flex flex-wrap gap-2">
                                                {project
                                                    .tags
                                                    .iter()
                                                    .map(|tag| {
                                                        view! {
                                                            <span class="px-3 py-1.5 rounded bg-slate-800 text-slate-300 text-sm border border-slate-700">
                                                                {*tag}
                                                            </span>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        </div>

                                        <div class="flex flex-col sm:flex-row gap-4 pt-4">
                                            {project
                                                .github
                                                .map(|github| {
                                                    view! {
                                                        <a
                                                            href=github
                                                            target="_blank"
                                                            rel="noopener noreferrer"
                                                            class="flex items-center justify-center gap-2 px-6 py-3 rounded-full glass-card text-white hover:bg-slate-800 transition-all active:scale-95"
                                                        >
                                                            <Icon markup=icons::GITHUB class="w-5 h-5" />
                                                            <span>"View Code"</span>
                                                        </a>
                                                    }
                                                })}
                                            {project
                                                .live
                                                .map(|live| {
                                                    view! {
                                                        <a
                                                            href=live
                                                            target="_blank"
                                                            rel="noopener noreferrer"
                                                            class=category.cta_class()
                                                        >
                                                            <Icon markup=icons::EXTERNAL_LINK class="w-5 h-5" />
                                                            <span>"Live Demo"</span>
                                                        </a>
                                                    }
                                                })}
                                        </div>
                                    </div>
                                </div>
                            </div>
                        </div>
                    }
                })
        }}
    }
}
