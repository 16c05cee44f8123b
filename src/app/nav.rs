//! Fixed top navigation: section links with the active indicator, the
//! "Connect" dropdown, and the mobile fullscreen menu.

use leptos::html;
use leptos::prelude::*;
use leptos_use::{use_document, use_event_listener};
use wasm_bindgen::JsCast;

use crate::contact::CONTACT_EMAIL;

use super::icons::{self, Icon};
use super::listeners::on_viewport_change;

const NAV_ITEMS: [(&str, &str); 5] = [
    ("Home", "home"),
    ("Journey", "journey"),
    ("Skills", "skills"),
    ("Projects", "projects"),
    ("About", "about"),
];

#[component]
pub fn Navbar(
    active: ReadSignal<&'static str>,
    set_contact_open: WriteSignal<bool>,
) -> impl IntoView {
    let (scrolled, set_scrolled) = signal(false);
    let (menu_open, set_menu_open) = signal(false);
    let (connect_open, set_connect_open) = signal(false);
    let dropdown_ref = NodeRef::<html::Div>::new();

    on_viewport_change(move || {
        set_scrolled.set(window().scroll_y().unwrap_or(0.0) > 50.0);
    });

    // Clicking anywhere outside the dropdown closes it.
    let _ = use_event_listener(use_document(), leptos::ev::mousedown, move |ev| {
        let (Some(dropdown), Some(target)) = (dropdown_ref.get_untracked(), ev.target()) else {
            return;
        };
        if let Some(node) = target.dyn_ref::<web_sys::Node>() {
            if !dropdown.contains(Some(node)) {
                set_connect_open.set(false);
            }
        }
    });

    let nav_class = move || {
        if scrolled.get() {
            "fixed top-0 left-0 right-0 z-[60] transition-all duration-500 bg-black/40 backdrop-blur-xl py-4 border-b border-white/5"
        } else {
            "fixed top-0 left-0 right-0 z-[60] transition-all duration-500 bg-transparent py-8"
        }
    };

    let open_form = move || {
        set_connect_open.set(false);
        set_menu_open.set(false);
        set_contact_open.set(true);
    };

    view! {
        <nav class=nav_class>
            <div class="max-w-7xl mx-auto px-8 flex items-center justify-between">
                <div class="flex-1 md:flex hidden"></div>

                <div class="hidden md:flex items-center space-x-10">
                    {NAV_ITEMS
                        .iter()
                        .map(|(name, id)| {
                            let id = *id;
                            view! {
                                <a
                                    href=format!("#{id}")
                                    class=move || {
                                        if active.get() == id {
                                            "text-xs uppercase tracking-[0.2em] font-bold transition-all hover:text-blue-500 whitespace-nowrap text-blue-500 neon-text-blue"
                                        } else {
                                            "text-xs uppercase tracking-[0.2em] font-bold transition-all hover:text-blue-500 whitespace-nowrap text-slate-500"
                                        }
                                    }
                                >
                                    {*name}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="flex-1 flex justify-end">
                    <div class="relative" node_ref=dropdown_ref>
                        <button
                            on:click=move |_| set_connect_open.update(|open| *open = !*open)
                            class="px-6 py-2.5 rounded-full border border-blue-600/50 text-blue-500 text-xs font-bold uppercase tracking-widest hover:bg-blue-600 hover:text-white transition-all shadow-[0_0_15px_rgba(37,99,235,0.2)] md:flex hidden items-center gap-2"
                        >
                            "Connect"
                            <Icon
                                markup=icons::CHEVRON_DOWN
                                class="w-3.5 h-3.5 transition-transform"
                            />
                        </button>

                        {move || {
                            connect_open
                                .get()
                                .then(|| {
                                    view! {
                                        <div class="absolute top-full right-0 mt-2 w-48 glass-card rounded-xl overflow-hidden animate-fade-in">
                                            <a
                                                href=format!("mailto:{CONTACT_EMAIL}")
                                                on:click=move |_| set_connect_open.set(false)
                                                class="w-full px-4 py-3 flex items-center gap-3 text-slate-300 hover:bg-blue-600/20 hover:text-white transition-all text-left"
                                            >
                                                <Icon markup=icons::MAIL class="w-[18px] h-[18px] text-blue-400" />
                                                <span class="text-sm font-medium">"Send Email"</span>
                                            </a>
                                            <button
                                                on:click=move |_| open_form()
                                                class="w-full px-4 py-3 flex items-center gap-3 text-slate-300 hover:bg-blue-600/20 hover:text-white transition-all text-left border-t border-slate-700/50"
                                            >
                                                <Icon
                                                    markup=icons::FILE_TEXT
                                                    class="w-[18px] h-[18px] text-indigo-400"
                                                />
                                                <span class="text-sm font-medium">"Contact Form"</span>
                                            </button>
                                        </div>
                                    }
                                })
                        }}
                    </div>

                    <button
                        class="md:hidden text-white ml-auto"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || {
                            if menu_open.get() {
                                view! { <Icon markup=icons::X class="w-6 h-6" /> }
                            } else {
                                view! { <Icon markup=icons::MENU class="w-6 h-6" /> }
                            }
                        }}
                    </button>
                </div>
            </div>

            {move || {
                menu_open
                    .get()
                    .then(|| {
                        view! {
                            <div class="md:hidden fixed inset-0 top-[72px] bg-black/95 backdrop-blur-2xl p-12 flex flex-col items-center space-y-8 animate-fade-in">
                                {NAV_ITEMS
                                    .iter()
                                    .map(|(name, id)| {
                                        view! {
                                            <a
                                                href=format!("#{id}")
                                                on:click=move |_| set_menu_open.set(false)
                                                class="text-2xl font-black tracking-tight text-white hover:text-blue-500"
                                            >
                                                {*name}
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                                <div class="w-full space-y-3">
                                    <a
                                        href=format!("mailto:{CONTACT_EMAIL}")
                                        on:click=move |_| set_menu_open.set(false)
                                        class="w-full flex items-center justify-center gap-2 py-4 rounded-xl bg-blue-600 text-white font-bold"
                                    >
                                        <Icon markup=icons::MAIL class="w-[18px] h-[18px]" />
                                        "Send Email"
                                    </a>
                                    <button
                                        on:click=move |_| open_form()
                                        class="w-full flex items-center justify-center gap-2 py-4 rounded-xl border border-blue-600/50 text-blue-400 font-bold hover:bg-blue-600/20 transition-all"
                                    >
                                        <Icon markup=icons::FILE_TEXT class="w-[18px] h-[18px]" />
                                        "Contact Form"
                                    </button>
                                </div>
                            </div>
                        }
                    })
            }}
        </nav>
    }
}
