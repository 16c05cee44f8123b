use leptos::prelude::*;
use portfolio_site::app::App;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(|| view! { <App /> });
}
