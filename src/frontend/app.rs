//! Application root: the loading screen, the custom cursor and the page
//! itself.

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, MouseEvent};
use yew::prelude::*;

use crate::content;
use crate::fx::reveal::Animation;
use crate::fx::starfield::Speed;

use super::effects::{
    CursorTrail, ParticlesHost, ScrollProgressRing, ScrollReveal, SpotlightCursor, Starfield,
};
use super::sections::{Contact, Experience, Footer, Hero, Navbar, Projects, Skills};

/// How long the loading screen covers the page.
const LOADING_SCREEN_MS: u32 = 2_000;

/// Selector for elements the cursor should enlarge over.
const INTERACTIVE_SELECTOR: &str = "a, button, input, textarea, [role='button']";

fn targets_interactive(event: &web_sys::Event) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest(INTERACTIVE_SELECTOR).ok())
        .flatten()
        .is_some()
}

/// Two-element cursor: a dot glued to the pointer and a slower ring around
/// it. The ring grows over interactive elements and shrinks while pressed.
#[function_component(CustomCursor)]
fn custom_cursor() -> Html {
    let position = use_state(|| (0.0_f64, 0.0_f64));
    let pressed = use_state(|| false);
    let enlarged = use_state(|| false);

    {
        let position = position.clone();
        let pressed = pressed.clone();
        let enlarged = enlarged.clone();
        use_effect_with((), move |_| {
            let mut listeners = Vec::new();

            if let Some(win) = window() {
                listeners.push(EventListener::new(&win, "mousemove", move |event| {
                    if let Some(event) = event.dyn_ref::<MouseEvent>() {
                        position.set((f64::from(event.client_x()), f64::from(event.client_y())));
                    }
                }));

                {
                    let pressed = pressed.clone();
                    listeners.push(EventListener::new(&win, "mousedown", move |_| {
                        pressed.set(true);
                    }));
                }
                listeners.push(EventListener::new(&win, "mouseup", move |_| {
                    pressed.set(false);
                }));

                if let Some(document) = win.document() {
                    // Delegated hover tracking; per-element listeners would
                    // miss nodes that mount later.
                    {
                        let enlarged = enlarged.clone();
                        listeners.push(EventListener::new(&document, "mouseover", move |event| {
                            if targets_interactive(event) {
                                enlarged.set(true);
                            }
                        }));
                    }
                    listeners.push(EventListener::new(&document, "mouseout", move |event| {
                        if targets_interactive(event) {
                            enlarged.set(false);
                        }
                    }));
                }
            }

            move || drop(listeners)
        });
    }

    let (x, y) = *position;
    let dot_style = format!("left: {x:.0}px; top: {y:.0}px;");
    let ring_style = format!(
        "left: {x:.0}px; top: {y:.0}px; transform: translate(-50%, -50%) scale({});",
        match (*enlarged, *pressed) {
            (_, true) => 0.8,
            (true, false) => 1.6,
            (false, false) => 1.0,
        },
    );

    html! {
        <div class="custom-cursor" aria-hidden="true">
            <div class="cursor-dot" style={dot_style} />
            <div class="cursor-ring" style={ring_style} />
        </div>
    }
}

#[function_component(LoadingScreen)]
fn loading_screen() -> Html {
    html! {
        <div class="loading-screen">
            <Starfield count={50} speed={Speed::Fast} />
            <div class="loading-content">
                <div class="loading-spinner" />
                <h1 class="loading-name">{content::FULL_NAME}</h1>
                <p class="loading-caption">{"Exploring the Universe..."}</p>
                <div class="loading-bar">
                    <div class="loading-bar-fill" />
                </div>
            </div>
        </div>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let loading = use_state(|| true);

    {
        let loading = loading.clone();
        use_effect_with((), move |_| {
            let timeout = Timeout::new(LOADING_SCREEN_MS, move || loading.set(false));
            move || drop(timeout)
        });
    }

    if *loading {
        return html! {
            <>
                <CustomCursor />
                <LoadingScreen />
            </>
        };
    }

    html! {
        <>
            <CustomCursor />
            <CursorTrail />
            <SpotlightCursor />
            <ParticlesHost />
            <ScrollProgressRing />
            <Navbar />
            <main>
                <Hero />
                <ScrollReveal animation={Animation::FadeInUp}>
                    <Experience />
                </ScrollReveal>
                <ScrollReveal animation={Animation::FadeInUp} delay_ms={200}>
                    <Projects />
                </ScrollReveal>
                <ScrollReveal animation={Animation::ScaleIn} delay_ms={300}>
                    <Skills />
                </ScrollReveal>
                <ScrollReveal animation={Animation::FadeInUp} delay_ms={400}>
                    <Contact />
                </ScrollReveal>
            </main>
            <Footer />
        </>
    }
}
