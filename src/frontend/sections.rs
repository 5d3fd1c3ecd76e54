//! Page sections: navbar, hero, experience, projects, skills, contact and
//! footer. Layout and copy live here; the decorative machinery comes from
//! the effect widgets.

use std::cell::Cell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::{Interval, Timeout};
use web_sys::{window, HtmlInputElement, HtmlTextAreaElement, MouseEvent, SubmitEvent};
use yew::prelude::*;

use crate::content;
use crate::form::{ContactForm, Field, Phase, SUBMITTED_HOLD_MS, SUBMIT_LATENCY_MS};
use crate::fx::starfield::{ColorScheme, Density, Speed};
use crate::fx::tilt::{self, TiltConfig};

use super::effects::{MagneticButton, Parallax, Starfield, Tilt};
use super::{scroll_to_top, scroll_y};

const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#experience", "Experience"),
    ("#projects", "Projects"),
    ("#skills", "Skills"),
    ("#contact", "Contact"),
];

/// Scroll depth past which the navbar switches to its solid style.
const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let scrolled = use_state(|| false);
    let menu_open = use_state(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|win| {
                EventListener::new(&win, "scroll", move |_| {
                    scrolled.set(scroll_y() > NAVBAR_SCROLL_THRESHOLD);
                })
            });
            move || drop(listener)
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <nav class={classes!("navbar", scrolled.then_some("navbar-scrolled"))}>
            <div class="navbar-inner">
                <a href="#home" class="navbar-brand" onclick={close_menu.clone()}>
                    <span class="navbar-brand-mark">{"✦"}</span>
                    <span>{content::FIRST_NAME}</span>
                </a>
                <div class={classes!("navbar-links", menu_open.then_some("open"))}>
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <a href={*href} class="navbar-link" onclick={close_menu.clone()}>
                            { *label }
                        </a>
                    }) }
                </div>
                <button
                    type="button"
                    class="navbar-toggle"
                    aria-label="Toggle navigation"
                    onclick={toggle_menu}
                >
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>
        </nav>
    }
}

// ---------------------------------------------------------------------------
// Hero

/// Orbit geometry for the dots circling the profile picture.
const ORBIT_DOTS: usize = 8;
const ORBIT_RADIUS_PCT: f64 = 52.0;
const ORBIT_HOVER_BONUS_PCT: f64 = 5.0;

/// Profile picture in a glowing frame: tilts toward the pointer, and while
/// hovered the glow pulses and the orbit dots swing wider.
#[function_component(ProfileFrame)]
fn profile_frame() -> Html {
    let hovered = use_state(|| false);
    let glow = use_state(|| 0.3_f64);
    let tilt_style = use_state(|| tilt::rest_style(&TiltConfig::default()));
    let node_ref = use_node_ref();

    // One dot-size roll per mount keeps the orbit stable across re-renders.
    let dot_sizes = use_state(|| {
        let mut rng = fastrand::Rng::new();
        (0..ORBIT_DOTS)
            .map(|_| 3.0 + rng.f64() * 3.0)
            .collect::<Vec<f64>>()
    });

    {
        let glow = glow.clone();
        let hovered_now = *hovered;
        use_effect_with(hovered_now, move |&hovered| {
            let pulse = hovered.then(|| {
                let glow = glow.clone();
                let level = Rc::new(Cell::new((0.3_f64, true)));
                Interval::new(50, move || {
                    let (mut value, mut rising) = level.get();
                    value += if rising { 0.05 } else { -0.05 };
                    if value >= 1.0 {
                        value = 1.0;
                        rising = false;
                    } else if value <= 0.3 {
                        value = 0.3;
                        rising = true;
                    }
                    level.set((value, rising));
                    glow.set(value);
                })
            });
            if !hovered {
                glow.set(0.3);
            }
            move || drop(pulse)
        });
    }

    let onmousemove = {
        let node_ref = node_ref.clone();
        let tilt_style = tilt_style.clone();
        Callback::from(move |event: MouseEvent| {
            let Some(element) = node_ref.cast::<web_sys::HtmlElement>() else {
                return;
            };
            let rect = element.get_bounding_client_rect();
            let rotation = tilt::rotation(
                &TiltConfig::default(),
                f64::from(event.client_x()) - rect.left(),
                f64::from(event.client_y()) - rect.top(),
                rect.width(),
                rect.height(),
            );
            tilt_style.set(tilt::tilt_style(&TiltConfig::default(), rotation));
        })
    };

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        let tilt_style = tilt_style.clone();
        Callback::from(move |_: MouseEvent| {
            hovered.set(false);
            tilt_style.set(tilt::rest_style(&TiltConfig::default()));
        })
    };

    let radius = if *hovered {
        ORBIT_RADIUS_PCT + ORBIT_HOVER_BONUS_PCT
    } else {
        ORBIT_RADIUS_PCT
    };

    html! {
        <div
            ref={node_ref}
            class="profile-frame"
            style={(*tilt_style).clone()}
            {onmousemove}
            {onmouseenter}
            {onmouseleave}
        >
            <div
                class="profile-glow"
                style={format!("opacity: {:.2};", *glow)}
            />
            <img class="profile-image" src={content::PROFILE_IMAGE} alt={content::FULL_NAME} />
            { for dot_sizes.iter().enumerate().map(|(i, size)| {
                let angle = std::f64::consts::TAU * i as f64 / ORBIT_DOTS as f64;
                let x = angle.cos() * radius;
                let y = angle.sin() * radius;
                let style = format!(
                    "left: calc(50% + {x:.1}%); top: calc(50% + {y:.1}%); \
                     width: {size:.1}px; height: {size:.1}px; \
                     animation-delay: {:.2}s;",
                    i as f64 * 0.25,
                );
                html! { <span class="orbit-dot" style={style} /> }
            }) }
        </div>
    }
}

/// Scroll distance over which the hero content fades out entirely.
const HERO_FADE_SPAN: f64 = 700.0;

#[function_component(Hero)]
pub fn hero() -> Html {
    let mounted = use_state(|| false);
    let scroll = use_state(|| 0.0_f64);

    {
        let mounted = mounted.clone();
        let scroll = scroll.clone();
        use_effect_with((), move |_| {
            mounted.set(true);
            let listener = window().map(|win| {
                EventListener::new(&win, "scroll", move |_| scroll.set(scroll_y()))
            });
            move || drop(listener)
        });
    }

    let fade_style = format!(
        "opacity: {:.3}; transform: translateY({:.1}px);",
        1.0 - (*scroll / HERO_FADE_SPAN).min(1.0),
        *scroll * 0.5,
    );

    let letters = |text: &str, offset: usize| -> Html {
        text.chars()
            .enumerate()
            .map(|(i, ch)| {
                let i = i + offset;
                let style = format!(
                    "animation-delay: {:.2}s; --letter-drift: {:.1}px;",
                    i as f64 * 0.05,
                    ((i as f64).sin() * 2.0),
                );
                html! { <span class="hero-letter" style={style}>{ ch.to_string() }</span> }
            })
            .collect()
    };

    html! {
        <section id="home" class="hero">
            <Starfield
                count={100}
                density={Density::High}
                speed={Speed::Slow}
                color_scheme={ColorScheme::Mixed}
                with_nebula={true}
            />
            <div
                class={classes!("hero-content", mounted.then_some("hero-mounted"))}
                style={fade_style}
            >
                <div class="hero-text">
                    <p class="hero-greeting">{"Hello, I'm"}</p>
                    <h1 class="hero-name">
                        <span class="hero-first">{ letters(content::FIRST_NAME, 0) }</span>
                        {" "}
                        <span class="hero-last">
                            { letters(content::LAST_NAME, content::FIRST_NAME.chars().count()) }
                        </span>
                    </h1>
                    <p class="hero-tagline typewriter">{content::TAGLINE}</p>
                    <p class="hero-summary">{content::SUMMARY}</p>
                    <div class="hero-actions">
                        <MagneticButton class={classes!("btn-primary")} href="#projects">
                            {"View My Work"}
                        </MagneticButton>
                        <MagneticButton class={classes!("btn-outline")} href="#contact">
                            {"Get In Touch"}
                        </MagneticButton>
                    </div>
                    <div class="hero-social">
                        <a href={content::GITHUB_URL} target="_blank" rel="noreferrer">
                            {"GitHub ↗"}
                        </a>
                        <a href={content::LINKEDIN_URL} target="_blank" rel="noreferrer">
                            {"LinkedIn ↗"}
                        </a>
                        <a href={format!("mailto:{}", content::EMAIL)}>{"Email"}</a>
                    </div>
                </div>
                <div class="hero-visual">
                    <Parallax factor={0.05}>
                        <ProfileFrame />
                    </Parallax>
                </div>
            </div>
            <div class="hero-highlights">
                { for content::TECH_HIGHLIGHTS.iter().map(|highlight| html! {
                    <Tilt class={classes!("tech-card", highlight.accent.class())}>
                        <h3>{ highlight.title }</h3>
                        <p>{ highlight.description }</p>
                        <div
                            class="tech-card-glow"
                            style={format!(
                                "background: radial-gradient(circle, rgba({}, 0.25), transparent 70%);",
                                highlight.accent.glow_rgb(),
                            )}
                        />
                    </Tilt>
                }) }
            </div>
            <a href="#experience" class="hero-scroll-hint" aria-label="Scroll to experience">
                <span class="hero-scroll-arrow">{"↓"}</span>
            </a>
        </section>
    }
}

// ---------------------------------------------------------------------------
// Experience

#[function_component(Experience)]
pub fn experience() -> Html {
    let active = use_state(|| 0_usize);
    let entered = use_state(|| false);

    // Re-run the achievement stagger whenever another entry is picked.
    {
        let entered = entered.clone();
        use_effect_with(*active, move |_| {
            entered.set(false);
            let timeout = Timeout::new(100, move || entered.set(true));
            move || drop(timeout)
        });
    }

    let entry = &content::EXPERIENCES[(*active).min(content::EXPERIENCES.len() - 1)];

    html! {
        <section id="experience" class="section">
            <Starfield count={70} color_scheme={ColorScheme::Blue} />
            <div class="section-inner">
                <h2 class="section-title">{"Work Experience"}</h2>
                <p class="section-subtitle">{"Where I've been putting models into production."}</p>
                <div class="experience-layout">
                    <div class="experience-tabs" role="tablist">
                        { for content::EXPERIENCES.iter().enumerate().map(|(i, e)| {
                            let active_handle = active.clone();
                            let onmouseenter =
                                Callback::from(move |_: MouseEvent| active_handle.set(i));
                            html! {
                                <button
                                    type="button"
                                    role="tab"
                                    class={classes!(
                                        "experience-tab",
                                        (i == *active).then_some("active"),
                                    )}
                                    {onmouseenter}
                                >
                                    <span class="experience-company">{ e.company }</span>
                                    <span class="experience-duration">{ e.duration }</span>
                                </button>
                            }
                        }) }
                    </div>
                    <div class="experience-detail" key={*active}>
                        <h3>{ entry.title }</h3>
                        <p class="experience-meta">
                            { entry.company }{" · "}{ entry.location }{" · "}{ entry.duration }
                        </p>
                        <ul class={classes!("achievements", entered.then_some("entered"))}>
                            { for entry.achievements.iter().enumerate().map(|(i, item)| html! {
                                <li
                                    class="achievement-item"
                                    style={format!("transition-delay: {}ms;", i * 100)}
                                >
                                    <span class="achievement-marker">{"▹"}</span>
                                    { *item }
                                </li>
                            }) }
                        </ul>
                        <div class="tag-row">
                            { for entry.skills.iter().map(|skill| html! {
                                <span class="tag">{ *skill }</span>
                            }) }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

// ---------------------------------------------------------------------------
// Projects

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    index: usize,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let project = &content::PROJECTS[props.index];
    let hovered = use_state(|| false);

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    html! {
        <Tilt class={classes!("project-card")} max_tilt={6.0}>
            <article
                class={classes!("project-card-body", hovered.then_some("hovered"))}
                {onmouseenter}
                {onmouseleave}
            >
                <div class="project-media">
                    <img src={project.image} alt={project.title} loading="lazy" />
                    <div class="project-overlay">
                        <a
                            class="project-link"
                            href={project.live_url}
                            target="_blank"
                            rel="noreferrer"
                        >
                            {"Live Demo ↗"}
                        </a>
                        if let Some(code_url) = project.code_url {
                            <a
                                class="project-link"
                                href={code_url}
                                target="_blank"
                                rel="noreferrer"
                            >
                                {"Code"}
                            </a>
                        }
                    </div>
                </div>
                <div class="project-info">
                    <h3>{ project.title }</h3>
                    <p>{ project.description }</p>
                    <div class="tag-row">
                        { for project.technologies.iter().map(|tech| html! {
                            <span class="tag">{ *tech }</span>
                        }) }
                    </div>
                </div>
            </article>
        </Tilt>
    }
}

#[function_component(Projects)]
pub fn projects() -> Html {
    html! {
        <section id="projects" class="section">
            <Starfield count={80} color_scheme={ColorScheme::Purple} />
            <div class="section-inner">
                <h2 class="section-title">{"Projects"}</h2>
                <p class="section-subtitle">{"A few things I've shipped recently."}</p>
                <div class="project-grid">
                    { for (0..content::PROJECTS.len()).map(|index| html! {
                        <ProjectCard {index} />
                    }) }
                </div>
            </div>
        </section>
    }
}

// ---------------------------------------------------------------------------
// Skills

#[function_component(Skills)]
pub fn skills() -> Html {
    html! {
        <section id="skills" class="section">
            <Starfield count={60} density={Density::Low} speed={Speed::Fast} color_scheme={ColorScheme::Mixed} />
            <div class="section-inner">
                <h2 class="section-title">{"Skills & Technologies"}</h2>
                <p class="section-subtitle">{"The toolbox I reach for."}</p>
                <div class="skills-grid">
                    { for content::SKILL_CATEGORIES.iter().map(|category| html! {
                        <div class="skill-category">
                            <h3>{ category.category }</h3>
                            <div class="tag-row">
                                { for category.skills.iter().enumerate().map(|(i, skill)| html! {
                                    <span
                                        class="tag skill-tag"
                                        style={format!("animation-delay: {}ms;", i * 60)}
                                    >
                                        { *skill }
                                    </span>
                                }) }
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

// ---------------------------------------------------------------------------
// Contact

/// Kicks off the simulated submission: success flips in after the latency,
/// then the form returns to an empty editing state once the banner times
/// out. The timers are fired-and-forgotten; they act on snapshots, so a
/// re-render in between cannot resurrect stale field text.
fn schedule_submission(form: UseStateHandle<ContactForm>, accepted: ContactForm) {
    Timeout::new(SUBMIT_LATENCY_MS, move || {
        let mut submitted = accepted;
        submitted.finish_submission();
        form.set(submitted.clone());

        Timeout::new(SUBMITTED_HOLD_MS, move || {
            let mut rested = submitted;
            rested.reset();
            form.set(rested);
        })
        .forget();
    })
    .forget();
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_state(ContactForm::new);

    let on_field = |field: Field| {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            let value = match field {
                Field::Message => event.target_unchecked_into::<HtmlTextAreaElement>().value(),
                _ => event.target_unchecked_into::<HtmlInputElement>().value(),
            };
            let mut next = (*form).clone();
            next.edit(field, value);
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let mut next = (*form).clone();
            if next.submit() {
                schedule_submission(form.clone(), next.clone());
            }
            form.set(next);
        })
    };

    let field_error = |error: Option<&'static str>| -> Html {
        match error {
            Some(message) => html! { <p class="field-error">{ message }</p> },
            None => html! {},
        }
    };

    let submitting = form.phase == Phase::Submitting;

    html! {
        <section id="contact" class="section">
            <Starfield count={90} density={Density::High} speed={Speed::Slow} color_scheme={ColorScheme::Blue} with_nebula={true} />
            <div class="section-inner">
                <h2 class="section-title">{"Get In Touch"}</h2>
                <p class="section-subtitle">
                    {"Have a project in mind or just want to say hi? My inbox is open."}
                </p>
                <div class="contact-layout">
                    <div class="contact-info">
                        <h3>{"Contact Information"}</h3>
                        <ul>
                            <li>
                                <span class="contact-label">{"Email"}</span>
                                <a href={format!("mailto:{}", content::EMAIL)}>{content::EMAIL}</a>
                            </li>
                            <li>
                                <span class="contact-label">{"Phone"}</span>
                                <a href={content::PHONE_HREF}>{content::PHONE}</a>
                            </li>
                            <li>
                                <span class="contact-label">{"GitHub"}</span>
                                <a href={content::GITHUB_URL} target="_blank" rel="noreferrer">
                                    {content::GITHUB_LABEL}
                                </a>
                            </li>
                            <li>
                                <span class="contact-label">{"LinkedIn"}</span>
                                <a href={content::LINKEDIN_URL} target="_blank" rel="noreferrer">
                                    {content::LINKEDIN_LABEL}
                                </a>
                            </li>
                        </ul>
                    </div>
                    <form class="contact-form" {onsubmit} novalidate="novalidate">
                        if form.phase == Phase::Submitted {
                            <div class="form-banner" role="status">
                                {"Message sent! I'll get back to you soon."}
                            </div>
                        }
                        <label class="form-field">
                            <span>{"Name"}</span>
                            <input
                                type="text"
                                value={form.name.clone()}
                                oninput={on_field(Field::Name)}
                                disabled={submitting}
                                placeholder="Your name"
                            />
                            { field_error(form.errors.name) }
                        </label>
                        <label class="form-field">
                            <span>{"Email"}</span>
                            <input
                                type="email"
                                value={form.email.clone()}
                                oninput={on_field(Field::Email)}
                                disabled={submitting}
                                placeholder="you@example.com"
                            />
                            { field_error(form.errors.email) }
                        </label>
                        <label class="form-field">
                            <span>{"Message"}</span>
                            <textarea
                                rows="5"
                                value={form.message.clone()}
                                oninput={on_field(Field::Message)}
                                disabled={submitting}
                                placeholder="What would you like to build?"
                            />
                            { field_error(form.errors.message) }
                        </label>
                        <button type="submit" class="btn-primary form-submit" disabled={submitting}>
                            { if submitting { "Sending..." } else { "Send Message" } }
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}

// ---------------------------------------------------------------------------
// Footer

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = js_sys::Date::new_0().get_full_year();
    let back_to_top = Callback::from(|_: MouseEvent| scroll_to_top());

    html! {
        <footer class="footer">
            <Starfield count={40} speed={Speed::Slow} />
            <div class="footer-inner">
                <Parallax factor={0.05}>
                    <MagneticButton class={classes!("btn-outline")} onclick={back_to_top}>
                        {"Back to top ↑"}
                    </MagneticButton>
                </Parallax>
                <div class="footer-identity">
                    <span class="footer-name">{content::FULL_NAME}</span>
                    <span class="footer-tagline">{content::FOOTER_TAGLINE}</span>
                </div>
                <div class="footer-links">
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <a href={*href}>{ *label }</a>
                    }) }
                </div>
                <div class="footer-social">
                    <a href={content::GITHUB_URL} target="_blank" rel="noreferrer">{"GitHub"}</a>
                    <a href={content::LINKEDIN_URL} target="_blank" rel="noreferrer">{"LinkedIn"}</a>
                    <a href={format!("mailto:{}", content::EMAIL)}>{"Email"}</a>
                </div>
                <p class="footer-copyright">
                    { format!("© {year} {} · Built among the stars", content::FULL_NAME) }
                </p>
            </div>
        </footer>
    }
}
