//! YouTube embed that autoplays (muted) only while at least half of the
//! section is on screen.

use leptos::html;
use leptos::prelude::*;
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use super::icons::{self, Icon};

const VIDEO_ID: &str = "4cQWJViybAQ?si=-nKi2PXhfLYfsDLF";

fn embed_url(autoplay: bool) -> String {
    format!(
        "https://www.youtube.com/embed/{}&autoplay={}&mute=1&controls=1&showinfo=1&rel=0&modestbranding=1&enablejsapi=1",
        VIDEO_ID,
        if autoplay { 1 } else { 0 },
    )
}

#[component]
pub fn VideoSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Div>::new();
    let (visible, set_visible) = signal(false);

    let _ = use_intersection_observer_with_options(
        section_ref,
        move |entries, _| {
            if let Some(entry) = entries.first() {
                set_visible.set(entry.is_intersecting());
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![0.5]),
    );

    view! {
        <div class="max-w-7xl mx-auto px-6" node_ref=section_ref>
            <div class="text-center mb-16">
                <h2 class="text-4xl md:text-5xl font-bold mb-4 bg-gradient-to-r from-red-500 via-pink-500 to-purple-500 bg-clip-text text-transparent">
                    "Watch Me Code"
                </h2>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
                <div class="relative group flex justify-center lg:justify-start">
                    <div class="aspect-video w-full max-w-lg rounded-2xl overflow-hidden glass-card border-2 border-slate-700/50 hover:border-blue-500/50 transition-all duration-500 relative">
                        <iframe
                            src=move || embed_url(visible.get())
                            title="YouTube video player"
                            allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share"
                            allowfullscreen="true"
                            class="w-full h-full rounded-2xl"
                        ></iframe>
                    </div>
                </div>

                <div class="space-y-6 flex flex-col justify-center text-center lg:text-left">
                    <p class="text-2xl md:text-3xl font-bold text-slate-200 leading-relaxed">
                        "Explore more on YouTube by following me on my YouTube Channel"
                    </p>

                    <div class="space-y-4">
                        <div class="flex items-center gap-3 justify-center lg:justify-start">
                            <div class="w-2 h-2 bg-red-500 rounded-full"></div>
                            <span class="text-slate-400 text-lg">"Get Tech news First"</span>
                        </div>
                        <div class="flex items-center gap-3 justify-center lg:justify-start">
                            <div class="w-2 h-2 bg-green-500 rounded-full"></div>
                            <span class="text-slate-400 text-lg">"Real-time Interaction"</span>
                        </div>
                        <div class="flex items-center gap-3 justify-center lg:justify-start">
                            <div class="w-2 h-2 bg-purple-500 rounded-full"></div>
                            <span class="text-slate-400 text-lg">"No Fluff, Pure Value"</span>
                        </div>
                    </div>

                    <div class="flex justify-center lg:justify-start">
                        <a
                            href="https://youtu.be/4cQWJViybAQ?si=-nKi2PXhfLYfsDLF"
                            target="_blank"
                            rel="noopener noreferrer"
                            class="inline-flex items-center gap-3 px-8 py-4 rounded-full bg-red-600 hover:bg-red-500 text-white font-bold transition-all duration-300 shadow-lg hover:shadow-red-500/25"
                        >
                            <Icon markup=icons::PLAY class="w-5 h-5" />
                            "Watch on YouTube"
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}
