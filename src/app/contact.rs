//! Contact modal. Validation and payload building live in
//! [`crate::contact`]; this component owns the transient form state and the
//! delivery flow: webhook first, `mailto:` handoff when every webhook fails,
//! and an apparent-success confirmation either way.

use std::time::Duration;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::contact::{self, ContactFields, FieldErrors, SubmitStatus};
use crate::net;

use super::icons::{self, Icon};

fn field_class(has_error: bool) -> &'static str {
    if has_error {
        "w-full pl-9 pr-3 py-2 text-sm bg-slate-900/50 border rounded-lg text-white placeholder-slate-500 focus:outline-none focus:ring-2 transition-all border-red-500 focus:ring-red-500/50"
    } else {
        "w-full pl-9 pr-3 py-2 text-sm bg-slate-900/50 border rounded-lg text-white placeholder-slate-500 focus:outline-none focus:ring-2 transition-all border-slate-700 focus:ring-blue-500/50 focus:border-blue-500"
    }
}

#[component]
pub fn ContactModal(open: ReadSignal<bool>, set_open: WriteSignal<bool>) -> impl IntoView {
    let fields = RwSignal::new(ContactFields::default());
    let (errors, set_errors) = signal(FieldErrors::default());
    let (status, set_status) = signal(SubmitStatus::Idle);

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked() == SubmitStatus::Submitting {
            return;
        }
        let current = fields.get_untracked();
        let found = contact::validate(&current);
        set_errors.set(found);
        if !found.is_clean() {
            return;
        }
        set_status.set(SubmitStatus::Submitting);

        spawn_local(async move {
            let timestamp = js_sys::Date::new_0()
                .to_iso_string()
                .as_string()
                .unwrap_or_default();
            let body = contact::encode_form(&contact::webhook_pairs(&current, &timestamp));

            let mut delivered = false;
            for url in contact::WEBHOOK_URLS {
                match net::post_form(url, &body).await {
                    Ok(()) => {
                        log::info!("contact form delivered via webhook");
                        delivered = true;
                        break;
                    }
                    Err(err) => log::warn!("webhook {url} failed: {err}"),
                }
            }

            if !delivered {
                // Hand the same summary to the visitor's mail client. Neither
                // path can confirm delivery; the confirmation below is
                // optimistic either way.
                let mailto = contact::mailto_url(&current, &timestamp);
                let opened = web_sys::window()
                    .and_then(|win| win.open_with_url_and_target(&mailto, "_blank").ok())
                    .flatten();
                if opened.is_none() {
                    log::warn!("mail client handoff could not be confirmed");
                }
            }

            set_status.set(SubmitStatus::Submitted);
            fields.set(ContactFields::default());
            set_errors.set(FieldErrors::default());
            set_timeout(
                move || {
                    set_status.set(SubmitStatus::Idle);
                    set_open.set(false);
                },
                Duration::from_millis(contact::CONFIRMATION_MS),
            );
        });
    };

    view! {
        {move || {
            open.get()
                .then(|| {
                    view! {
                        <div class="fixed inset-0 z-[100] flex items-center justify-center p-4">
                            <div
                                class="absolute inset-0 bg-black/80 backdrop-blur-sm"
                                on:click=move |_| set_open.set(false)
                            ></div>

                            <div class="relative w-full max-w-md glass-card rounded-2xl p-6 animate-fade-in max-h-[90vh] overflow-y-auto">
                                <button
                                    on:click=move |_| set_open.set(false)
                                    class="absolute top-3 right-3 text-slate-400 hover:text-white transition-colors"
                                >
                                    <Icon markup=icons::X class="w-5 h-5" />
                                </button>

                                <div class="mb-4">
                                    <h2 class="text-xl font-bold text-white mb-1">"Get in Touch"</h2>
                                    <p class="text-slate-400 text-xs">
                                        "Fill out the form and I'll get back to you soon."
                                    </p>
                                </div>

                                {move || {
                                    if status.get() == SubmitStatus::Submitted {
                                        view! {
                                            <div class="text-center py-8">
                                                <div class="w-12 h-12 bg-green-500/20 rounded-full flex items-center justify-center mx-auto mb-3">
                                                    <Icon markup=icons::SEND class="w-6 h-6 text-green-400" />
                                                </div>
                                                <h3 class="text-lg font-bold text-white mb-1">"Message Sent!"</h3>
                                                <p class="text-slate-400 text-sm">
                                                    "Thank you! I'll respond shortly."
                                                </p>
                                            </div>
                                        }
                                            .into_any()
                                    } else {
                                        view! {
                                            <form on:submit=submit class="space-y-3">
                                                <div class="grid grid-cols-2 gap-3">
                                                    <div>
                                                        <label class="block text-xs font-medium text-slate-300 mb-1">
                                                            "Name " <span class="text-red-400">"*"</span>
                                                        </label>
                                                        <div class="relative">
                                                            <Icon
                                                                markup=icons::USER
                                                                class="w-3.5 h-3.5 absolute left-3 top-1/2 -translate-y-1/2 text-slate-500"
                                                            />
                                                            <input
                                                                type="text"
                                                                placeholder="Your name"
                                                                prop:value=move || fields.with(|f| f.name.clone())
                                                                on:input=move |ev| {
                                                                    fields.update(|f| f.name = event_target_value(&ev));
                                                                    set_errors.update(|e| e.name = None);
                                                                }
                                                                class=move || field_class(errors.get().name.is_some())
                                                            />
                                                        </div>
                                                        {move || {
                                                            errors
                                                                .get()
                                                                .name
                                                                .map(|msg| {
                                                                    view! {
                                                                        <p class="text-red-400 text-[10px] mt-0.5">{msg}</p>
                                                                    }
                                                                })
                                                        }}
                                                    </div>

                                                    <div>
                                                        <label class="block text-xs font-medium text-slate-300 mb-1">
                                                            "Company"
                                                        </label>
                                                        <div class="relative">
                                                            <Icon
                                                                markup=icons::BUILDING
                                                                class="w-3.5 h-3.5 absolute left-3 top-1/2 -translate-y-1/2 text-slate-500"
                                                            />
                                                            <input
                                                                type="text"
                                                                placeholder="Optional"
                                                                prop:value=move || fields.with(|f| f.company.clone())
                                                                on:input=move |ev| {
                                                                    fields.update(|f| f.company = event_target_value(&ev));
                                                                }
                                                                class=field_class(false)
                                                            />
                                                        </div>
                                                    </div>
                                                </div>

                                                <div class="grid grid-cols-2 gap-3">
                                                    <div>
                                                        <label class="block text-xs font-medium text-slate-300 mb-1">
                                                            "Phone " <span class="text-red-400">"*"</span>
                                                        </label>
                                                        <div class="relative">
                                                            <Icon
                                                                markup=icons::PHONE
                                                                class="w-3.5 h-3.5 absolute left-3 top-1/2 -translate-y-1/2 text-slate-500"
                                                            />
                                                            <input
                                                                type="tel"
                                                                placeholder="+91 XXXXXXXXXX"
                                                                prop:value=move || fields.with(|f| f.phone.clone())
                                                                on:input=move |ev| {
                                                                    fields.update(|f| f.phone = event_target_value(&ev));
                                                                    set_errors.update(|e| e.phone = None);
                                                                }
                                                                class=move || field_class(errors.get().phone.is_some())
                                                            />
                                                        </div>
                                                        {move || {
                                                            errors
                                                                .get()
                                                                .phone
                                                                .map(|msg| {
                                                                    view! {
                                                                        <p class="text-red-400 text-[10px] mt-0.5">{msg}</p>
                                                                    }
                                                                })
                                                        }}
                                                    </div>

                                                    <div>
                                                        <label class="block text-xs font-medium text-slate-300 mb-1">
                                                            "Email " <span class="text-red-400">"*"</span>
                                                        </label>
                                                        <div class="relative">
                                                            <Icon
                                                                markup=icons::MAIL
                                                                class="w-3.5 h-3.5 absolute left-3 top-1/2 -translate-y-1/2 text-slate-500"
                                                            />
                                                            <input
                                                                type="email"
                                                                placeholder="your@email.com"
                                                                prop:value=move || fields.with(|f| f.email.clone())
                                                                on:input=move |ev| {
                                                                    fields.update(|f| f.email = event_target_value(&ev));
                                                                    set_errors.update(|e| e.email = None);
                                                                }
                                                                class=move || field_class(errors.get().email.is_some())
                                                            />
                                                        </div>
                                                        {move || {
                                                            errors
                                                                .get()
                                                                .email
                                                                .map(|msg| {
                                                                    view! {
                                                                        <p class="text-red-400 text-[10px] mt-0.5">{msg}</p>
                                                                    }
                                                                })
                                                        }}
                                                    </div>
                                                </div>

                                                <div>
                                                    <label class="block text-xs font-medium text-slate-300 mb-1">
                                                        "Message"
                                                    </label>
                                                    <div class="relative">
                                                        <Icon
                                                            markup=icons::MESSAGE_SQUARE
                                                            class="w-3.5 h-3.5 absolute left-3 top-3 text-slate-500"
                                                        />
                                                        <textarea
                                                            placeholder="Your message (optional)"
                                                            rows="3"
                                                            prop:value=move || fields.with(|f| f.message.clone())
                                                            on:input=move |ev| {
                                                                fields.update(|f| f.message = event_target_value(&ev));
                                                            }
                                                            class="w-full pl-9 pr-3 py-2 text-sm bg-slate-900/50 border border-slate-700 rounded-lg text-white placeholder-slate-500 focus:outline-none focus:ring-2 focus:ring-blue-500/50 focus:border-blue-500 transition-all resize-none"
                                                        ></textarea>
                                                    </div>
                                                </div>

                                                <button
                                                    type="submit"
                                                    disabled=move || status.get() == SubmitStatus::Submitting
                                                    class="w-full py-3 bg-gradient-to-r from-blue-600 to-indigo-600 text-white font-bold rounded-lg hover:shadow-lg hover:shadow-blue-500/25 transition-all flex items-center justify-center gap-2 text-sm disabled:opacity-50 disabled:cursor-not-allowed"
                                                >
                                                    {move || {
                                                        if status.get() == SubmitStatus::Submitting {
                                                            view! {
                                                                <div class="w-4 h-4 border-2 border-white/30 border-t-white rounded-full animate-spin"></div>
                                                                <span>"Sending..."</span>
                                                            }
                                                                .into_any()
                                                        } else {
                                                            view! {
                                                                <Icon markup=icons::SEND class="w-4 h-4" />
                                                                <span>"Send Message"</span>
                                                            }
                                                                .into_any()
                                                        }
                                                    }}
                                                </button>
                                            </form>
                                        }
                                            .into_any()
                                    }
                                }}
                            </div>
                        </div>
                    }
                })
        }}
    }
}
