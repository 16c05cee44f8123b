use leptos::prelude::*;

use crate::contact::CONTACT_EMAIL;

use super::icons::{self, Icon};

/// Build timestamp injected by build.rs; the leading four characters are the
/// copyright year.
const BUILD_TIME: &str = env!("BUILD_TIME");

#[component]
pub fn Footer() -> impl IntoView {
    let socials: [(&'static str, String); 4] = [
        (
            icons::LINKEDIN,
            "https://www.linkedin.com/in/aditya-thorat-915947210/".to_string(),
        ),
        (icons::GITHUB, "https://www.github.com/Gethc".to_string()),
        (icons::TWITTER, "#".to_string()),
        (icons::MAIL, format!("mailto:{CONTACT_EMAIL}")),
    ];

    view! {
        <footer class="border-t border-white/5 pt-12 sm:pt-16 lg:pt-20 pb-6 sm:pb-8 lg:pb-10 bg-slate-950 relative z-10">
            <div class="max-w-7xl mx-auto px-4 sm:px-6">
                <div class="flex flex-col md:flex-row justify-between items-center gap-8 sm:gap-10 lg:gap-12 mb-12 sm:mb-16 lg:mb-20">
                    <div class="text-center md:text-left">
                        <h2 class="text-2xl sm:text-3xl font-bold mb-3 sm:mb-4 bg-gradient-to-r from-blue-400 to-indigo-400 bg-clip-text text-transparent">
                            "ADITYA THORAT"
                        </h2>
                        <p class="text-slate-400 text-sm sm:text-base max-w-xs mx-auto md:mx-0 mb-4 sm:mb-6">
                            "Designing the future through data analytics and intelligent automation."
                        </p>
                        <a
                            href="/assets/Aditya_Resume.pdf"
                            download="Aditya_Resume.pdf"
                            class="inline-flex items-center gap-2 px-5 sm:px-6 py-2.5 sm:py-3 rounded-full bg-gradient-to-r from-blue-600 to-indigo-600 text-white text-sm sm:text-base font-semibold hover:shadow-lg hover:shadow-blue-500/25 transition-all hover:scale-105"
                        >
                            <Icon markup=icons::DOWNLOAD class="w-4 h-4 sm:w-[18px] sm:h-[18px]" />
                            "Get Resume"
                        </a>
                    </div>

                    <div class="flex flex-col items-center md:items-end gap-4 sm:gap-6">
                        <h4 class="text-base sm:text-lg font-semibold text-white">"Let's Connect"</h4>
                        <div class="flex gap-3 sm:gap-4">
                            {socials
                                .into_iter()
                                .map(|(icon, href)| {
                                    view! {
                                        <a
                                            href=href
                                            class="w-10 h-10 sm:w-12 sm:h-12 rounded-full glass-card flex items-center justify-center text-slate-400 hover:text-blue-400 hover:border-blue-500/50 transition-all transform hover:-translate-y-1"
                                        >
                                            <Icon markup=icon class="w-[18px] h-[18px]" />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                <div class="flex flex-col md:flex-row justify-between items-center pt-6 sm:pt-8 border-t border-white/5 gap-3 sm:gap-4">
                    <p class="text-slate-500 text-xs sm:text-sm text-center md:text-left">
                        {format!("© {} Aditya. All rights reserved.", &BUILD_TIME[..4])}
                    </p>
                    <div class="flex gap-6 sm:gap-8 text-xs sm:text-sm text-slate-500">
                        <a href="#" class="hover:text-slate-300 transition-colors">
                            "Privacy Policy"
                        </a>
                        <a href="#" class="hover:text-slate-300 transition-colors">
                            "Terms of Service"
                        </a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
