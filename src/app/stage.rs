//! Sticky stage deck: a tall container whose children are pinned full-screen
//! and staged through entry/hold/exit windows as the page scrolls past. The
//! math lives in [`crate::motion`]; this component only measures the
//! container and renders style strings.

use leptos::html;
use leptos::prelude::*;

use crate::motion::{self, StepKind};

use super::listeners::{on_viewport_change, viewport_height};

fn item_style(progress: f64, kinds: &[StepKind], index: usize) -> String {
    let style = motion::slide_style(progress, kinds, index);
    format!(
        "opacity:{:.4};transform:translate({:.3}vw,{:.3}vh) scale({:.4});\
         will-change:transform,opacity;pointer-events:{};{}",
        style.opacity,
        style.translate_x,
        style.translate_y,
        style.scale,
        if style.opacity > 0.3 { "auto" } else { "none" },
        if style.hidden { "display:none;" } else { "" },
    )
}

#[component]
pub fn StageDeck(steps: Vec<(StepKind, AnyView)>) -> impl IntoView {
    let kinds: Vec<StepKind> = steps.iter().map(|(kind, _)| *kind).collect();
    // The container is as tall as the summed step weights so each step gets
    // its declared share of scroll runway.
    let total_vh: f64 = kinds.iter().map(|kind| kind.weight() * 100.0).sum();
    let kinds = StoredValue::new(kinds);

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

    view! {
        <div node_ref=container_ref class="relative" style=format!("height:{total_vh}vh")>
            <div class="sticky top-0 h-screen w-full overflow-hidden flex items-center justify-center">
                {steps
                    .into_iter()
                    .enumerate()
                    .map(|(i, (_, content))| {
                        view! {
                            <div
                                class="absolute inset-0 flex items-center justify-center"
                                style=move || {
                                    kinds.with_value(|kinds| item_style(progress.get(), kinds, i))
                                }
                            >
                                {content}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
