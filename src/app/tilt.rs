//! Tilt-on-hover card with a glare highlight that follows the pointer.

use leptos::ev::MouseEvent;
use leptos::html;
use leptos::prelude::*;

const RESTING: &str = "perspective(1000px) rotateX(0deg) rotateY(0deg) scale3d(1, 1, 1)";

#[component]
pub fn TiltCard(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    let card_ref = NodeRef::<html::Div>::new();
    let (transform, set_transform) = signal(RESTING.to_string());
    let (glare, set_glare) = signal((50.0_f64, 50.0_f64));

    let on_move = move |ev: MouseEvent| {
        let Some(el) = card_ref.get_untracked() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return;
        }
        let x = (ev.client_x() as f64 - rect.left()) / rect.width() - 0.5;
        let y = (ev.client_y() as f64 - rect.top()) / rect.height() - 0.5;
        set_transform.set(format!(
            "perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg) scale3d(1.02, 1.02, 1.02)",
            y * -15.0,
            x * 15.0,
        ));
        set_glare.set(((x + 0.5) * 100.0, (y + 0.5) * 100.0));
    };

    let on_leave = move |_| {
        set_transform.set(RESTING.to_string());
        set_glare.set((50.0, 50.0));
    };

    view! {
        <div
            node_ref=card_ref
            class=format!("relative {class}")
            on:mousemove=on_move
            on:mouseleave=on_leave
            style=move || {
                format!(
                    "transform:{};transform-style:preserve-3d;transition:transform 0.15s ease-out;",
                    transform.get(),
                )
            }
        >
            {children()}
            <div
                class="absolute inset-0 rounded-2xl pointer-events-none opacity-0 hover:opacity-100 transition-opacity duration-300"
                style=move || {
                    let (x, y) = glare.get();
                    format!(
                        "background:radial-gradient(circle at {x:.1}% {y:.1}%, rgba(255,255,255,0.15) 0%, transparent 60%);",
                    )
                }
            ></div>
        </div>
    }
}
