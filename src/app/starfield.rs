//! Decorative starfield rendered on a fixed full-viewport canvas: four color
//! families, per-star twinkle, and a slow downward drift. Honors
//! `prefers-reduced-motion` by drawing a static field instead.

use leptos::html;
use leptos::prelude::*;
use leptos_use::use_raf_fn;
use wasm_bindgen::JsCast;

const STAR_COUNT: usize = 400;

struct Star {
    x: f64,
    y: f64,
    radius: f64,
    alpha: f64,
    twinkle_phase: f64,
    twinkle_speed: f64,
    /// Drift in CSS pixels per second.
    drift: f64,
    color: &'static str,
}

fn spawn_stars(width: f64, height: f64) -> Vec<Star> {
    (0..STAR_COUNT)
        .map(|_| {
            let pick = js_sys::Math::random();
            let color = if pick < 0.4 {
                "#ffffff"
            } else if pick < 0.65 {
                "#93c5fd"
            } else if pick < 0.85 {
                "#c4b5fd"
            } else {
                "#fcd34d"
            };
            // A handful of stars are noticeably larger than the rest.
            let radius = if js_sys::Math::random() < 0.95 {
                0.3 + js_sys::Math::random() * 1.2
            } else {
                1.5 + js_sys::Math::random() * 1.5
            };
            Star {
                x: js_sys::Math::random() * width,
                y: js_sys::Math::random() * height,
                radius,
                alpha: 0.3 + js_sys::Math::random() * 0.7,
                twinkle_phase: js_sys::Math::random() * std::f64::consts::TAU,
                twinkle_speed: 0.5 + js_sys::Math::random() * 2.0,
                drift: 2.0 + js_sys::Math::random() * 6.0,
                color,
            }
        })
        .collect()
}

fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|win| win.match_media("(prefers-reduced-motion: reduce)").ok())
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

#[component]
pub fn Starfield() -> impl IntoView {
    let canvas_ref = NodeRef::<html::Canvas>::new();
    let stars = StoredValue::new(Vec::<Star>::new());
    let animate = !prefers_reduced_motion();

    let _ = use_raf_fn(move |args| {
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };
        let win = window();
        let width = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        // Resizing also reseeds, so stars stay distributed over the new area.
        if canvas.width() != width as u32 || canvas.height() != height as u32 {
            canvas.set_width(width as u32);
            canvas.set_height(height as u32);
            stars.set_value(spawn_stars(width, height));
        }

        let Ok(Some(context)) = canvas.get_context("2d") else {
            return;
        };
        let Ok(context) = context.dyn_into::<web_sys::CanvasRenderingContext2d>() else {
            return;
        };

        context.clear_rect(0.0, 0.0, width, height);
        let seconds = args.timestamp / 1000.0;
        stars.update_value(|stars| {
            for star in stars.iter_mut() {
                if animate {
                    star.y += star.drift * args.delta / 1000.0;
                    if star.y > height {
                        star.y = 0.0;
                        star.x = js_sys::Math::random() * width;
                    }
                }
                let twinkle = if animate {
                    0.55 + 0.45 * (seconds * star.twinkle_speed + star.twinkle_phase).sin()
                } else {
                    1.0
                };
                context.set_global_alpha((star.alpha * twinkle).clamp(0.0, 1.0));
                context.set_fill_style_str(star.color);
                context.begin_path();
                let _ = context.arc(star.x, star.y, star.radius, 0.0, std::f64::consts::TAU);
                context.fill();
            }
        });
        context.set_global_alpha(1.0);
    });

    view! {
        <canvas
            node_ref=canvas_ref
            class="fixed inset-0 z-0 pointer-events-none"
            aria-hidden="true"
        ></canvas>
    }
}
