//! Cosmetic-effect widgets. Each one subscribes to the input events it
//! cares about on mount and drops the subscriptions on unmount; none of
//! them share state with any other widget.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use gloo::timers::callback::Timeout;
use js_sys::Function;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, CanvasRenderingContext2d, Element, HtmlCanvasElement, HtmlElement,
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, MouseEvent,
};
use yew::prelude::*;

use crate::fx::magnetic::{self, MagneticConfig};
use crate::fx::parallax::{self, Direction};
use crate::fx::particles::{self, ParticlesOptions};
use crate::fx::progress;
use crate::fx::reveal::{self, Animation, Reveal, RevealConfig, Transition};
use crate::fx::starfield::{self, ColorScheme, Density, Speed, StarfieldConfig};
use crate::fx::tilt::{self, TiltConfig};
use crate::fx::trail::Trail;

use super::{document_height, scroll_to_top, scroll_y, viewport_size};

// ---------------------------------------------------------------------------
// Starfield

#[derive(Properties, PartialEq)]
pub struct StarfieldProps {
    #[prop_or(50)]
    pub count: usize,
    #[prop_or(Density::Medium)]
    pub density: Density,
    #[prop_or(Speed::Medium)]
    pub speed: Speed,
    #[prop_or(ColorScheme::White)]
    pub color_scheme: ColorScheme,
    #[prop_or(false)]
    pub with_nebula: bool,
}

/// A field of drifting stars behind a section. The field is randomized once
/// per mount and stays stable for the component's lifetime.
#[function_component(Starfield)]
pub fn starfield(props: &StarfieldProps) -> Html {
    let config = StarfieldConfig {
        count: props.count,
        density: props.density,
        speed: props.speed,
        color_scheme: props.color_scheme,
        with_nebula: props.with_nebula,
    };
    let stars = use_state(move || starfield::generate(&config, &mut fastrand::Rng::new()));

    html! {
        <div class="starfield" aria-hidden="true">
            { for stars.iter().map(|star| html! {
                <div class="star" style={star.style()} />
            }) }
            if props.with_nebula {
                <>
                    <div class="nebula nebula-blue" />
                    <div class="nebula nebula-purple" style="animation-delay: 1s;" />
                    <div class="nebula nebula-indigo" style="animation-delay: 2s;" />
                </>
            }
        </div>
    }
}

// ---------------------------------------------------------------------------
// Particle engine host

fn load_particles_layer(id: &str, options: &ParticlesOptions) {
    // The engine is an optional global; a page without it just loses one
    // backdrop layer.
    let Ok(json) = serde_json::to_string(options) else {
        return;
    };
    let Some(win) = window() else {
        return;
    };
    let Ok(engine) = js_sys::Reflect::get(&win, &JsValue::from_str("tsParticles")) else {
        return;
    };
    if engine.is_undefined() || engine.is_null() {
        return;
    }
    let Ok(load) = js_sys::Reflect::get(&engine, &JsValue::from_str("load")) else {
        return;
    };
    let Some(load) = load.dyn_ref::<Function>() else {
        return;
    };
    let Ok(parsed) = js_sys::JSON::parse(&json) else {
        return;
    };
    let _ = load.call2(&engine, &JsValue::from_str(id), &parsed);
}

/// Fixed full-page backdrop: an immediately visible star layer plus the two
/// particle-engine canvases and a few nebula blobs.
#[function_component(ParticlesHost)]
pub fn particles_host() -> Html {
    use_effect_with((), |_| {
        load_particles_layer("tsparticles", &particles::star_layer());
        load_particles_layer("shooting-stars", &particles::shooting_star_layer());
        || ()
    });

    html! {
        <div class="particles-root" aria-hidden="true">
            <Starfield count={200} speed={Speed::Slow} />
            <div id="tsparticles" class="particles-layer" />
            <div id="shooting-stars" class="particles-layer" />
            <div class="backdrop-glow backdrop-glow-top" />
            <div class="backdrop-glow backdrop-glow-bottom" />
            <div class="nebula nebula-blue" />
            <div class="nebula nebula-purple" style="animation-delay: 1s;" />
            <div class="nebula nebula-indigo" style="animation-delay: 2s;" />
        </div>
    }
}

// ---------------------------------------------------------------------------
// Cursor trail

#[derive(Properties, PartialEq)]
pub struct CursorTrailProps {
    /// Trail color as bare RGB channels; per-dot alpha is appended.
    #[prop_or(AttrValue::Static("59, 130, 246"))]
    pub color_rgb: AttrValue,
    #[prop_or(6.0)]
    pub size: f64,
    #[prop_or(15)]
    pub trail_length: usize,
}

struct TrailRuntime {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    trail: RefCell<Trail>,
    rgb: String,
    frame: RefCell<Option<AnimationFrame>>,
    active: Cell<bool>,
}

impl TrailRuntime {
    fn draw_frame(&self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        );
        for dot in self.trail.borrow_mut().step() {
            self.ctx.begin_path();
            let _ = self
                .ctx
                .arc(dot.x, dot.y, dot.radius.max(0.0), 0.0, std::f64::consts::TAU);
            self.ctx
                .set_fill_style_str(&format!("rgba({}, {:.3})", self.rgb, dot.opacity));
            self.ctx.fill();
        }
    }
}

/// The frame loop reschedules itself until the component deactivates it.
fn schedule_trail_frame(runtime: Rc<TrailRuntime>) {
    let next = Rc::clone(&runtime);
    let handle = request_animation_frame(move |_| {
        next.frame.borrow_mut().take();
        if !next.active.get() {
            return;
        }
        next.draw_frame();
        schedule_trail_frame(Rc::clone(&next));
    });
    *runtime.frame.borrow_mut() = Some(handle);
}

fn resize_trail_canvas(canvas: &HtmlCanvasElement) {
    let (width, height) = viewport_size();
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
}

/// Paints a fading circle trail behind the pointer on a fixed full-screen
/// canvas, redrawn every animation frame.
#[function_component(CursorTrail)]
pub fn cursor_trail(props: &CursorTrailProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let rgb = props.color_rgb.to_string();
        let size = props.size;
        let trail_length = props.trail_length;
        use_effect_with((), move |_| {
            let mut listeners = Vec::new();
            let mut runtime_slot = None;

            if let (Some(canvas), Some(win)) = (canvas_ref.cast::<HtmlCanvasElement>(), window())
            {
                resize_trail_canvas(&canvas);

                let ctx = canvas
                    .get_context("2d")
                    .ok()
                    .flatten()
                    .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok());

                if let Some(ctx) = ctx {
                    let runtime = Rc::new(TrailRuntime {
                        canvas: canvas.clone(),
                        ctx,
                        trail: RefCell::new(Trail::new(trail_length, size)),
                        rgb,
                        frame: RefCell::new(None),
                        active: Cell::new(true),
                    });

                    {
                        let runtime = Rc::clone(&runtime);
                        listeners.push(EventListener::new(&win, "mousemove", move |event| {
                            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                                runtime
                                    .trail
                                    .borrow_mut()
                                    .record(f64::from(event.client_x()), f64::from(event.client_y()));
                            }
                        }));
                    }

                    {
                        let canvas = canvas.clone();
                        listeners.push(EventListener::new(&win, "resize", move |_| {
                            resize_trail_canvas(&canvas);
                        }));
                    }

                    schedule_trail_frame(Rc::clone(&runtime));
                    runtime_slot = Some(runtime);
                }
            }

            move || {
                if let Some(runtime) = runtime_slot {
                    runtime.active.set(false);
                    runtime.frame.borrow_mut().take();
                }
                drop(listeners);
            }
        });
    }

    html! { <canvas ref={canvas_ref} class="cursor-trail" aria-hidden="true" /> }
}

// ---------------------------------------------------------------------------
// Spotlight cursor

/// A radial-gradient highlight that follows the pointer and hides when the
/// pointer leaves the page.
#[function_component(SpotlightCursor)]
pub fn spotlight_cursor() -> Html {
    let position = use_state(|| (0.0_f64, 0.0_f64));
    let visible = use_state(|| false);

    {
        let position = position.clone();
        let visible = visible.clone();
        use_effect_with((), move |_| {
            let mut listeners = Vec::new();

            if let Some(win) = window() {
                let visible_on_move = visible.clone();
                listeners.push(EventListener::new(&win, "mousemove", move |event| {
                    if let Some(event) = event.dyn_ref::<MouseEvent>() {
                        position.set((f64::from(event.client_x()), f64::from(event.client_y())));
                        visible_on_move.set(true);
                    }
                }));

                if let Some(document) = win.document() {
                    listeners.push(EventListener::new(&document, "mouseleave", move |_| {
                        visible.set(false);
                    }));
                }
            }

            move || drop(listeners)
        });
    }

    let style = format!(
        "left: {:.0}px; top: {:.0}px; opacity: {};",
        position.0,
        position.1,
        if *visible { 1 } else { 0 },
    );

    html! { <div class="spotlight" style={style} aria-hidden="true" /> }
}

// ---------------------------------------------------------------------------
// Parallax wrapper

#[derive(Properties, PartialEq)]
pub struct ParallaxProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub direction: Direction,
    #[prop_or(0.1)]
    pub factor: f64,
}

/// Translates its content as a pure function of scroll and pointer
/// position, recomputed on every scroll and pointer-move event.
#[function_component(Parallax)]
pub fn parallax_wrapper(props: &ParallaxProps) -> Html {
    let offset = use_state(parallax::Offset::default);

    {
        let offset = offset.clone();
        let direction = props.direction;
        let factor = props.factor;
        use_effect_with((direction, factor), move |_| {
            let mut listeners = Vec::new();

            if let Some(win) = window() {
                let center = {
                    let (width, height) = viewport_size();
                    (width / 2.0, height / 2.0)
                };
                let pointer = Rc::new(Cell::new(center));

                let recompute = {
                    let pointer = Rc::clone(&pointer);
                    move || {
                        parallax::offset(direction, factor, scroll_y(), pointer.get(), viewport_size())
                    }
                };

                offset.set(recompute());

                {
                    let offset = offset.clone();
                    let recompute = recompute.clone();
                    listeners.push(EventListener::new(&win, "scroll", move |_| {
                        offset.set(recompute());
                    }));
                }

                listeners.push(EventListener::new(&win, "mousemove", move |event| {
                    if let Some(event) = event.dyn_ref::<MouseEvent>() {
                        pointer.set((f64::from(event.client_x()), f64::from(event.client_y())));
                        offset.set(recompute());
                    }
                }));
            }

            move || drop(listeners)
        });
    }

    html! {
        <div class={classes!("parallax", props.class.clone())} style={offset.translate3d()}>
            { props.children.clone() }
        </div>
    }
}

// ---------------------------------------------------------------------------
// 3D tilt wrapper

#[derive(Properties, PartialEq)]
pub struct TiltProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(10.0)]
    pub max_tilt: f64,
    #[prop_or(1000.0)]
    pub perspective: f64,
    #[prop_or(1.02)]
    pub scale: f64,
    #[prop_or(400)]
    pub speed_ms: u32,
}

/// Rotates its content toward the pointer while hovered; rests flat when
/// the pointer leaves.
#[function_component(Tilt)]
pub fn tilt_wrapper(props: &TiltProps) -> Html {
    let config = TiltConfig {
        max_tilt_deg: props.max_tilt,
        perspective_px: props.perspective,
        hover_scale: props.scale,
        transition_ms: props.speed_ms,
    };
    let node_ref = use_node_ref();
    let style = use_state(|| tilt::rest_style(&config));

    let onmousemove = {
        let node_ref = node_ref.clone();
        let style = style.clone();
        Callback::from(move |event: MouseEvent| {
            let Some(element) = node_ref.cast::<HtmlElement>() else {
                return;
            };
            let rect = element.get_bounding_client_rect();
            let rotation = tilt::rotation(
                &config,
                f64::from(event.client_x()) - rect.left(),
                f64::from(event.client_y()) - rect.top(),
                rect.width(),
                rect.height(),
            );
            style.set(tilt::tilt_style(&config, rotation));
        })
    };

    let onmouseleave = {
        let style = style.clone();
        Callback::from(move |_: MouseEvent| {
            style.set(tilt::rest_style(&config));
        })
    };

    html! {
        <div
            ref={node_ref}
            class={classes!("card-3d", props.class.clone())}
            style={(*style).clone()}
            {onmousemove}
            {onmouseleave}
        >
            <div class="card-3d-inner">{ props.children.clone() }</div>
        </div>
    }
}

// ---------------------------------------------------------------------------
// Magnetic button

#[derive(Properties, PartialEq)]
pub struct MagneticButtonProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(50.0)]
    pub distance: f64,
    #[prop_or(0.3)]
    pub strength: f64,
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
}

/// Leans toward the pointer while it is within the activation radius of the
/// element's center.
#[function_component(MagneticButton)]
pub fn magnetic_button(props: &MagneticButtonProps) -> Html {
    let node_ref = use_node_ref();
    let shift = use_state(magnetic::Displacement::default);

    {
        let node_ref = node_ref.clone();
        let shift = shift.clone();
        let config = MagneticConfig {
            activation_distance: props.distance,
            strength: props.strength,
        };
        use_effect_with((props.distance.to_bits(), props.strength.to_bits()), move |_| {
            let mut listeners = Vec::new();

            if let Some(win) = window() {
                listeners.push(EventListener::new(&win, "mousemove", move |event| {
                    let Some(event) = event.dyn_ref::<MouseEvent>() else {
                        return;
                    };
                    let Some(element) = node_ref.cast::<HtmlElement>() else {
                        return;
                    };
                    let rect = element.get_bounding_client_rect();
                    let center = (
                        rect.left() + rect.width() / 2.0,
                        rect.top() + rect.height() / 2.0,
                    );
                    let pointer = (f64::from(event.client_x()), f64::from(event.client_y()));
                    shift.set(magnetic::displacement(&config, pointer, center));
                }));
            }

            move || drop(listeners)
        });
    }

    let onmouseleave = {
        let shift = shift.clone();
        Callback::from(move |_: MouseEvent| shift.set(magnetic::Displacement::default()))
    };

    let class = classes!("magnetic-btn", props.class.clone());
    let style = shift.translate();

    match &props.href {
        Some(href) => html! {
            <a
                ref={node_ref}
                class={class}
                style={style}
                href={href.clone()}
                aria-label={props.aria_label.clone()}
                onclick={props.onclick.clone()}
                {onmouseleave}
            >
                { props.children.clone() }
            </a>
        },
        None => html! {
            <button
                ref={node_ref}
                type="button"
                class={class}
                style={style}
                aria-label={props.aria_label.clone()}
                onclick={props.onclick.clone()}
                {onmouseleave}
            >
                { props.children.clone() }
            </button>
        },
    }
}

// ---------------------------------------------------------------------------
// Scroll-triggered reveal

#[derive(Properties, PartialEq)]
pub struct ScrollRevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub animation: Animation,
    #[prop_or(0.2)]
    pub threshold: f64,
    #[prop_or(0)]
    pub delay_ms: u32,
    #[prop_or(600)]
    pub duration_ms: u32,
    #[prop_or(true)]
    pub once: bool,
}

/// Toggles a `visible` class once the wrapped content intersects the
/// viewport past the configured threshold; with `once` the observer
/// detaches after the first trigger.
#[function_component(ScrollReveal)]
pub fn scroll_reveal(props: &ScrollRevealProps) -> Html {
    let node_ref = use_node_ref();
    let visible = use_state(|| false);

    {
        let node_ref = node_ref.clone();
        let visible = visible.clone();
        let threshold = props.threshold.clamp(0.0, 1.0);
        let delay_ms = props.delay_ms;
        let once = props.once;
        use_effect_with((threshold.to_bits(), delay_ms, once), move |_| {
            let state = Rc::new(RefCell::new(Reveal::new(once)));

            let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                move |entries: js_sys::Array, observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                            continue;
                        };
                        let transition =
                            state.borrow_mut().on_intersection(entry.is_intersecting());
                        match transition {
                            Transition::ScheduleShow => {
                                if once {
                                    observer.disconnect();
                                }
                                let state = Rc::clone(&state);
                                let visible = visible.clone();
                                Timeout::new(delay_ms, move || {
                                    state.borrow_mut().mark_visible();
                                    visible.set(true);
                                })
                                .forget();
                            }
                            Transition::Hide => visible.set(false),
                            Transition::None => {}
                        }
                    }
                },
            );

            let options = IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(threshold));

            let observer =
                IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                    .ok();
            if let (Some(observer), Some(element)) = (&observer, node_ref.cast::<Element>()) {
                observer.observe(&element);
            }

            move || {
                if let Some(observer) = observer {
                    observer.disconnect();
                }
                drop(callback);
            }
        });
    }

    let config = RevealConfig {
        animation: props.animation,
        threshold: props.threshold,
        delay_ms: props.delay_ms,
        duration_ms: props.duration_ms,
        once: props.once,
    };

    html! {
        <div
            ref={node_ref}
            class={classes!(reveal::class_list(&config, *visible), props.class.clone())}
            style={format!("transition-duration: {}ms;", props.duration_ms)}
        >
            { props.children.clone() }
        </div>
    }
}

// ---------------------------------------------------------------------------
// Scroll progress ring

/// Circular indicator of how far the page has been scrolled; clicking it
/// scrolls back to the top.
#[function_component(ScrollProgressRing)]
pub fn scroll_progress_ring() -> Html {
    let percent = use_state(|| 0.0_f64);

    {
        let percent = percent.clone();
        use_effect_with((), move |_| {
            let mut listeners = Vec::new();

            if let Some(win) = window() {
                let recompute = move || {
                    let (_, viewport_height) = viewport_size();
                    progress::percent(scroll_y(), document_height(), viewport_height)
                };
                percent.set(recompute());

                listeners.push(EventListener::new(&win, "scroll", move |_| {
                    percent.set(recompute());
                }));
            }

            move || drop(listeners)
        });
    }

    let circumference = progress::circumference(progress::RING_RADIUS);
    let offset = progress::dash_offset(*percent, progress::RING_RADIUS);
    let onclick = Callback::from(|_: MouseEvent| scroll_to_top());

    html! {
        <div class="scroll-progress" {onclick} role="button" aria-label="Scroll to top">
            <svg class="scroll-progress-ring" width="56" height="56">
                <circle
                    cx="28"
                    cy="28"
                    r="18"
                    stroke="rgba(59, 130, 246, 0.2)"
                    stroke-width="3"
                    fill="none"
                />
                <circle
                    cx="28"
                    cy="28"
                    r="18"
                    stroke="url(#progress-gradient)"
                    stroke-width="3"
                    fill="none"
                    stroke-linecap="round"
                    stroke-dasharray={format!("{circumference:.3}")}
                    stroke-dashoffset={format!("{offset:.3}")}
                />
                <defs>
                    <linearGradient id="progress-gradient" x1="0%" y1="0%" x2="100%" y2="100%">
                        <stop offset="0%" stop-color="#3b82f6" />
                        <stop offset="50%" stop-color="#8b5cf6" />
                        <stop offset="100%" stop-color="#06b6d4" />
                    </linearGradient>
                </defs>
            </svg>
            <span class="scroll-progress-arrow" aria-hidden="true">{"↑"}</span>
            <span class="scroll-progress-tooltip">{format!("{:.0}%", *percent)}</span>
        </div>
    }
}
