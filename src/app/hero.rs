//! Landing hero: typewriter headline, portrait card, and the two calls to
//! action (scroll to the journey, open the contact form).

use leptos::prelude::*;
use leptos_use::use_interval_fn;

const TYPE_WORDS: [&str; 3] = ["Intelligence.", "Automation.", "Efficiency."];

/// One state-machine step every 50ms; typing advances every other tick so a
/// character lands every ~100ms, deleting runs at full tick rate, and a
/// finished word holds for two seconds before unwinding.
const TICK_MS: u64 = 50;
const HOLD_TICKS: u16 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Holding(u16),
    Deleting,
}

#[derive(Debug, Clone, Copy)]
struct TypeState {
    word: usize,
    len: usize,
    phase: Phase,
    ticks: u64,
}

impl TypeState {
    fn new() -> Self {
        TypeState {
            word: 0,
            len: 0,
            phase: Phase::Typing,
            ticks: 0,
        }
    }

    fn tick(&mut self, words: &[&str]) {
        self.ticks += 1;
        match self.phase {
            Phase::Typing => {
                if self.ticks % 2 != 0 {
                    return;
                }
                let target = words[self.word].len();
                if self.len < target {
                    self.len += 1;
                }
                if self.len == target {
                    self.phase = Phase::Holding(HOLD_TICKS);
                }
            }
            Phase::Holding(remaining) => {
                self.phase = if remaining == 0 {
                    Phase::Deleting
                } else {
                    Phase::Holding(remaining - 1)
                };
            }
            Phase::Deleting => {
                self.len = self.len.saturating_sub(1);
                if self.len == 0 {
                    self.word = (self.word + 1) % words.len();
                    self.phase = Phase::Typing;
                }
            }
        }
    }

    fn rendered<'a>(&self, words: &[&'a str]) -> &'a str {
        &words[self.word][..self.len]
    }
}

#[component]
fn Typewriter() -> impl IntoView {
    let state = RwSignal::new(TypeState::new());
    let _ = use_interval_fn(
        move || state.update(|s| s.tick(&TYPE_WORDS)),
        TICK_MS,
    );

    view! {
        <span class="text-blue-500 neon-text-blue font-bold tracking-tight">
            {move || state.with(|s| s.rendered(&TYPE_WORDS).to_string())}
            <span class="typewriter-caret">"|"</span>
        </span>
    }
}

#[component]
pub fn Hero(set_contact_open: WriteSignal<bool>) -> impl IntoView {
    view! {
        <div class="relative min-h-screen flex items-center pt-20 sm:pt-24 px-4 sm:px-6 overflow-hidden">
            <div class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-[500px] sm:w-[800px] h-[500px] sm:h-[800px] bg-blue-600/5 rounded-full blur-[100px] sm:blur-[160px] pointer-events-none"></div>

            <div class="max-w-7xl mx-auto w-full grid grid-cols-1 lg:grid-cols-2 gap-8 sm:gap-12 lg:gap-16 items-center relative z-10">
                <div class="space-y-4 sm:space-y-6 lg:space-y-8 text-center lg:text-left order-2 lg:order-1">
                    <h1 class="text-4xl sm:text-6xl md:text-7xl lg:text-8xl font-extrabold tracking-tighter leading-none text-white">
                        "Hi, I'm " <br />
                        <span class="bg-gradient-to-r from-blue-400 via-indigo-500 to-blue-600 bg-clip-text text-transparent">
                            "Aditya"
                        </span>
                    </h1>

                    <div class="text-2xl sm:text-3xl md:text-4xl lg:text-5xl font-light text-slate-400 tracking-tight">
                        "Delivering " <br class="sm:hidden" />
                        <Typewriter />
                    </div>

                    <p class="text-base sm:text-lg lg:text-xl text-slate-400 max-w-xl mx-auto lg:mx-0 leading-relaxed font-light px-2 sm:px-0">
                        "I craft data-driven solutions and intelligent automated systems
                        that empower the next generation of digital platforms."
                    </p>

                    <div class="flex flex-col sm:flex-row gap-4 sm:gap-6 pt-4 sm:pt-8 justify-center lg:justify-start">
                        <a
                            href="#journey"
                            class="group relative px-8 sm:px-10 py-3 sm:py-4 rounded-full bg-blue-600 text-white font-bold transition-all overflow-hidden text-sm sm:text-base"
                        >
                            <div class="absolute inset-0 w-full h-full bg-blue-400 transform scale-x-0 group-hover:scale-x-100 transition-transform origin-left duration-500"></div>
                            <span class="relative z-10">"See Journey"</span>
                        </a>
                        <button
                            on:click=move |_| set_contact_open.set(true)
                            class="px-8 sm:px-10 py-3 sm:py-4 rounded-full border border-white/10 text-white font-medium hover:bg-white/5 transition-all text-sm sm:text-base"
                        >
                            "Get in Touch"
                        </button>
                    </div>
                </div>

                <div class="flex justify-center lg:justify-end order-1 lg:order-2">
                    <div class="relative animate-float">
                        <div class="absolute -inset-4 bg-blue-600/20 rounded-full blur-[80px] sm:blur-[100px]"></div>
                        <div class="relative w-60 h-60 sm:w-72 sm:h-72 md:w-96 md:h-96 lg:w-[450px] lg:h-[450px] rounded-full overflow-hidden border border-white/10 p-2 glass-card">
                            <div class="w-full h-full rounded-full overflow-hidden">
                                <img
                                    src="/assets/portrait.png"
                                    alt="Aditya"
                                    class="w-full h-full object-cover grayscale brightness-90 hover:grayscale-0 transition-all duration-1000"
                                />
                            </div>
                        </div>
                        <div class="absolute top-6 sm:top-10 -right-2 sm:-right-4 hidden sm:block">
                            <div class="relative glass-card px-3 sm:px-4 py-2 sm:py-3 rounded-2xl rounded-bl-sm border border-blue-500/30 shadow-lg shadow-blue-500/10">
                                <div class="absolute -left-2 bottom-2 w-0 h-0 border-t-8 border-t-transparent border-r-8 border-r-slate-900/80 border-b-8 border-b-transparent"></div>
                                <div class="flex items-center gap-2">
                                    <div class="w-2 h-2 rounded-full bg-green-500 animate-pulse shadow-lg shadow-green-500/50"></div>
                                    <span class="text-white text-xs font-medium">"Online"</span>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: [&str; 2] = ["ab", "xyz"];

    fn run_ticks(state: &mut TypeState, n: usize) {
        for _ in 0..n {
            state.tick(&WORDS);
        }
    }

    #[test]
    fn types_one_character_every_other_tick() {
        let mut state = TypeState::new();
        run_ticks(&mut state, 1);
        assert_eq!(state.rendered(&WORDS), "");
        run_ticks(&mut state, 1);
        assert_eq!(state.rendered(&WORDS), "a");
        run_ticks(&mut state, 2);
        assert_eq!(state.rendered(&WORDS), "ab");
        assert_eq!(state.phase, Phase::Holding(HOLD_TICKS));
    }

    #[test]
    fn holds_then_deletes_then_advances_word() {
        let mut state = TypeState::new();
        // Type "ab" fully, then sit out the hold.
        run_ticks(&mut state, 4);
        run_ticks(&mut state, HOLD_TICKS as usize + 1);
        assert_eq!(state.phase, Phase::Deleting);
        run_ticks(&mut state, 1);
        assert_eq!(state.rendered(&WORDS), "a");
        run_ticks(&mut state, 1);
        // Back to empty and on to the next word.
        assert_eq!(state.word, 1);
        assert_eq!(state.phase, Phase::Typing);
        assert_eq!(state.rendered(&WORDS), "");
    }

    #[test]
    fn wraps_around_the_word_list() {
        let mut state = TypeState::new();
        state.word = WORDS.len() - 1;
        state.len = 1;
        state.phase = Phase::Deleting;
        run_ticks(&mut state, 1);
        assert_eq!(state.word, 0);
    }
}
