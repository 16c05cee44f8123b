//! Floating assistant chat widget.

use leptos::ev::KeyboardEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::chat::{self, ChatMessage, Role};

use super::icons::{self, Icon};

#[component]
pub fn ChatWidget() -> impl IntoView {
    let (open, set_open) = signal(false);
    let messages = RwSignal::new(vec![ChatMessage::assistant(chat::GREETING)]);
    let (draft, set_draft) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let send = move || {
        let text = draft.get_untracked().trim().to_string();
        if text.is_empty() || loading.get_untracked() {
            return;
        }
        set_draft.set(String::new());
        messages.update(|list| list.push(ChatMessage::user(text.clone())));
        set_loading.set(true);
        spawn_local(async move {
            let reply = chat::ask(&text).await;
            messages.update(|list| list.push(ChatMessage::assistant(reply)));
            set_loading.set(false);
        });
    };

    let on_key = move |ev: KeyboardEvent| {
        if ev.key() == "Enter" {
            send();
        }
    };

    view! {
        <div class="fixed bottom-6 right-6 z-[100]">
            {move || {
                if open.get() {
                    view! {
                        <div class="w-80 md:w-96 h-[500px] glass-card rounded-2xl flex flex-col shadow-2xl border-blue-500/30 overflow-hidden animate-slide-up">
                            <div class="p-4 bg-blue-600/20 border-b border-white/10 flex justify-between items-center">
                                <div class="flex items-center gap-2">
                                    <Icon markup=icons::SPARKLES class="w-[18px] h-[18px] text-blue-400" />
                                    <span class="font-bold text-sm tracking-tight">"Aditya's AI Twin"</span>
                                </div>
                                <button
                                    on:click=move |_| set_open.set(false)
                                    class="text-slate-400 hover:text-white transition-colors"
                                >
                                    <Icon markup=icons::X class="w-5 h-5" />
                                </button>
                            </div>

                            <div class="flex-1 overflow-y-auto p-4 space-y-4">
                                {move || {
                                    messages
                                        .get()
                                        .into_iter()
                                        .map(|message| {
                                            let user = message.role == Role::User;
                                            view! {
                                                <div class=if user {
                                                    "flex justify-end"
                                                } else {
                                                    "flex justify-start"
                                                }>
                                                    <div class=if user {
                                                        "max-w-[80%] p-3 rounded-2xl text-sm bg-blue-600 text-white rounded-br-none"
                                                    } else {
                                                        "max-w-[80%] p-3 rounded-2xl text-sm bg-slate-800 text-slate-200 rounded-bl-none border border-white/5"
                                                    }>{message.text}</div>
                                                </div>
                                            }
                                        })
                                        .collect_view()
                                }}
                                {move || {
                                    loading
                                        .get()
                                        .then(|| {
                                            view! {
                                                <div class="flex justify-start">
                                                    <div class="bg-slate-800 p-3 rounded-2xl rounded-bl-none border border-white/5 animate-pulse text-xs text-slate-400">
                                                        "Thinking..."
                                                    </div>
                                                </div>
                                            }
                                        })
                                }}
                            </div>

                            <div class="p-4 bg-slate-900/50 border-t border-white/10 flex gap-2">
                                <input
                                    type="text"
                                    prop:value=draft
                                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                                    on:keydown=on_key
                                    placeholder="Ask me something..."
                                    class="flex-1 bg-slate-800 border border-slate-700 rounded-full px-4 py-2 text-sm focus:outline-none focus:border-blue-500 transition-colors"
                                />
                                <button
                                    on:click=move |_| send()
                                    class="w-10 h-10 rounded-full bg-blue-600 flex items-center justify-center hover:bg-blue-500 transition-colors"
                                >
                                    <Icon markup=icons::SEND class="w-[18px] h-[18px]" />
                                </button>
                            </div>
                        </div>
                    }
                        .into_any()
                } else {
                    view! {
                        <button
                            on:click=move |_| set_open.set(true)
                            class="w-14 h-14 rounded-full bg-blue-600 text-white flex items-center justify-center shadow-[0_0_20px_rgba(59,130,246,0.5)] hover:scale-110 active:scale-95 transition-all"
                        >
                            <Icon markup=icons::MESSAGE_SQUARE class="w-6 h-6" />
                        </button>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
