mod about;
mod assistant;
mod case_studies;
mod contact;
mod footer;
mod hero;
mod icons;
mod journey;
mod listeners;
mod nav;
mod projects;
mod skills;
mod stage;
mod starfield;
mod tilt;
mod video;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::motion;

use about::About;
use assistant::ChatWidget;
use case_studies::CaseStudies;
use contact::ContactModal;
use footer::Footer;
use hero::Hero;
use journey::Journey;
use listeners::on_viewport_change;
use nav::Navbar;
use projects::ProjectsPage;
use skills::Skills;
use starfield::Starfield;
use video::VideoSection;

/// Section ids probed for the navbar indicator, in document order.
const SECTION_IDS: [&str; 5] = ["home", "journey", "skills", "projects", "about"];

/// Which of the two views is mounted. Routing is deliberately two branches
/// over `location.pathname`; there is no router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Projects,
}

pub fn page_for_path(path: &str) -> Page {
    if path == "/projects" {
        Page::Projects
    } else {
        Page::Home
    }
}

fn location_pathname() -> Option<String> {
    web_sys::window().and_then(|win| win.location().pathname().ok())
}

fn current_page() -> Page {
    location_pathname()
        .map(|path| page_for_path(&path))
        .unwrap_or(Page::Home)
}

/// In-app navigation handle provided through context: pushes a history entry
/// and swaps the view without a full page load. Back/forward come back in
/// through the `popstate` listener in [`App`].
#[derive(Clone, Copy)]
pub struct PageNav(WriteSignal<Page>);

impl PageNav {
    pub fn go(&self, path: &str) {
        let win = window();
        if let Ok(history) = win.history() {
            let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path));
        }
        win.scroll_to_with_x_and_y(0.0, 0.0);
        self.0.set(page_for_path(path));
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let (page, set_page) = signal(current_page());
    provide_context(PageNav(set_page));

    // Browser back/forward re-resolve the view from the path.
    Effect::new(move |_| {
        let Some(win) = web_sys::window() else {
            return;
        };
        let on_pop = Closure::<dyn FnMut()>::new(move || set_page.set(current_page()));
        let _ = win.add_event_listener_with_callback("popstate", on_pop.as_ref().unchecked_ref());
        on_cleanup(move || {
            if let Some(win) = web_sys::window() {
                let _ = win
                    .remove_event_listener_with_callback("popstate", on_pop.as_ref().unchecked_ref());
            }
        });
    });

    view! {
        <Title formatter=|title| format!("Aditya Thorat - {title}") />
        {move || match page.get() {
            Page::Home => view! { <HomeView /> }.into_any(),
            Page::Projects => view! { <ProjectsView /> }.into_any(),
        }}
    }
}

#[component]
fn HomeView() -> impl IntoView {
    let (active_section, set_active_section) = signal("home");
    let (contact_open, set_contact_open) = signal(false);

    on_viewport_change(move || {
        let win = window();
        let scroll_y = win.scroll_y().unwrap_or(0.0);
        let doc = document();
        let mut sections: Vec<(&'static str, f64, f64)> = Vec::with_capacity(SECTION_IDS.len());
        for id in SECTION_IDS {
            if let Some(el) = doc
                .get_element_by_id(id)
                .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
            {
                sections.push((id, el.offset_top() as f64, el.offset_height() as f64));
            }
        }
        set_active_section
            .update(|current| *current = motion::active_section(scroll_y, &sections, *current));
    });

    view! {
        <Title text="Data & Automation" />
        <div class="min-h-screen bg-transparent text-slate-50 selection:bg-blue-600/50">
            <Starfield />
            <Navbar active=active_section set_contact_open=set_contact_open />

            <main class="relative z-10">
                <section id="home">
                    <Hero set_contact_open=set_contact_open />
                </section>

                <section
                    id="journey"
                    class="pt-32 pb-8 bg-gradient-to-b from-transparent via-blue-900/10 to-transparent"
                >
                    <Journey />
                </section>

                <section
                    id="video"
                    class="py-16 bg-gradient-to-b from-transparent via-red-900/5 to-transparent"
                >
                    <VideoSection />
                </section>

                <section id="skills" class="pt-8 pb-32">
                    <Skills />
                </section>

                <section
                    id="projects"
                    class="py-32 bg-gradient-to-b from-transparent via-indigo-900/10 to-transparent"
                >
                    <CaseStudies />
                </section>

                <section id="about" class="py-32 bg-slate-950/40 backdrop-blur-sm">
                    <About />
                </section>
            </main>

            <Footer />
            <ContactModal open=contact_open set_open=set_contact_open />
            <ChatWidget />
        </div>
    }
}

#[component]
fn ProjectsView() -> impl IntoView {
    view! {
        <Title text="Projects" />
        <div class="min-h-screen bg-transparent text-slate-50 selection:bg-blue-600/50">
            <Starfield />
            <ProjectsPage />
            <Footer />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projects_path_selects_projects_view() {
        assert_eq!(page_for_path("/projects"), Page::Projects);
        assert_eq!(page_for_path("/"), Page::Home);
        assert_eq!(page_for_path(""), Page::Home);
        assert_eq!(page_for_path("/blog"), Page::Home);
        assert_eq!(page_for_path("/projects/1"), Page::Home);
    }
}
