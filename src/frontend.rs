use crate::browser::{self, BrowserScheduler, CanvasParticleRenderer, DomSurface, WindowListener};
use crate::carousel::{Carousel, PanelPhase, TRANSITION_MS};
use crate::chart::{points_attr, ChartPalette, Point, RadarChart, GRID_LEVELS};
use crate::config::RuntimeConfig;
use crate::content::{
    footer_notice, hero_links, mail_href, tel_href, CONTACT_PITCH, EXPERIENCE, HERO_TAGLINE,
    HERO_TITLE, PROFILE, PROJECTS, SKILLS, SKILL_SCORES, SKILL_SCORE_MAX, SKILL_SERIES_NAME,
};
use crate::error::PageError;
use crate::logging::{log_event, LogLevel};
use crate::motion::{intersects_viewport, mount_decorations};
use crate::parallax;
use crate::particles::{canvas_extent, ParticleField, ParticleOptions};
use crate::state::{ViewAction, ViewState};
use crate::theme::{FlagWrite, Theme, ThemeSync};
use gloo_timers::callback::{Interval, Timeout};
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{Element, HtmlCanvasElement};
use yew::prelude::*;

const CHART_SIZE: f64 = 360.0;
const CHART_MARGIN: f64 = 72.0;
const ENTER_KICKOFF_MS: u32 = 20;
const NOMINAL_FRAME_MS: f64 = 1_000.0 / 60.0;

impl Reducible for ViewState {
    type Action = ViewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new((*self).apply(action))
    }
}

fn log_unavailable<T>(
    config: &RuntimeConfig,
    event: &str,
    attached: Result<T, PageError>,
) -> Option<T> {
    attached
        .map_err(|error| {
            log_event(config, LogLevel::Warn, event, json!({ "error": error.to_string() }))
        })
        .ok()
}

/// Hero backdrop style, driven by scrolling through `target`.
#[hook]
fn use_parallax_style(target: NodeRef, config: Rc<RuntimeConfig>) -> AttrValue {
    let style = use_state_eq(|| parallax::layer_style(0.0));

    {
        let style = style.clone();
        use_effect_with(target, move |target| {
            let target = target.clone();
            let measure = move || {
                if let Some(element) = target.cast::<Element>() {
                    let rect = element.get_bounding_client_rect();
                    style.set(parallax::container_style(rect.top(), rect.height()));
                }
            };
            measure();
            let listener = log_unavailable(&config, "parallax.unavailable", WindowListener::scroll(measure));
            move || drop(listener)
        });
    }

    AttrValue::from((*style).clone())
}

#[hook]
fn use_in_view(target: NodeRef, config: Rc<RuntimeConfig>) -> bool {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_effect_with(target, move |target| {
            let target = target.clone();
            let measure = move || {
                if let Some(element) = target.cast::<Element>() {
                    let rect = element.get_bounding_client_rect();
                    let (_, viewport_height) = browser::viewport_size();
                    visible.set(intersects_viewport(rect.top(), rect.height(), viewport_height));
                }
            };
            measure();
            let listener = log_unavailable(&config, "in_view.unavailable", WindowListener::scroll(measure));
            move || drop(listener)
        });
    }

    *visible
}

#[derive(Properties, PartialEq)]
struct ExternalLinkProps {
    href: AttrValue,
    label: AttrValue,
    #[prop_or_default]
    class: Classes,
}

#[function_component(ExternalLink)]
fn external_link(props: &ExternalLinkProps) -> Html {
    html! {
        <a
            class={classes!("link", props.class.clone())}
            href={props.href.clone()}
            target="_blank"
            rel="noopener noreferrer"
        >
            {props.label.clone()}
            <span class="external-mark" aria-hidden="true">{"↗"}</span>
            <span class="sr-only">{" (opens in a new tab)"}</span>
        </a>
    }
}

#[derive(Properties, PartialEq)]
struct ParticleBackgroundProps {
    theme: Theme,
    config: Rc<RuntimeConfig>,
}

fn start_particles(
    canvas: &HtmlCanvasElement,
    theme: Theme,
    config: &RuntimeConfig,
) -> Result<Option<Interval>, PageError> {
    let (width, height) = browser::viewport_size();
    let (canvas_width, canvas_height) = canvas_extent(width, height);
    canvas.set_width(canvas_width);
    canvas.set_height(canvas_height);

    let mut renderer = CanvasParticleRenderer::new(canvas)?;
    let options = ParticleOptions::for_theme(theme, config.particle_count);
    let mut rng = fastrand::Rng::with_seed(browser::now_ms() as u64);
    let mut field = ParticleField::spawn(options, width, height, &mut rng);

    log_event(
        config,
        LogLevel::Debug,
        "particles.regenerated",
        json!({
            "theme": theme.as_str(),
            "particles": field.particles().len(),
            "width": canvas_width,
            "height": canvas_height,
            "options": serde_json::to_value(field.options()).unwrap_or_default(),
        }),
    );

    field.render(&mut renderer);
    if config.reduced_motion {
        return Ok(None);
    }

    let frames_per_tick = f64::from(config.frame_interval_ms) / NOMINAL_FRAME_MS;
    Ok(Some(Interval::new(config.frame_interval_ms, move || {
        field.step(frames_per_tick);
        field.render(&mut renderer);
    })))
}

#[function_component(ParticleBackground)]
fn particle_background(props: &ParticleBackgroundProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let config = props.config.clone();
        use_effect_with(props.theme, move |theme| {
            let theme = *theme;
            let frame_loop: Rc<RefCell<Option<Interval>>> = Rc::default();

            let regenerate = {
                let frame_loop = Rc::clone(&frame_loop);
                let config = Rc::clone(&config);
                move |force: bool| {
                    let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() else {
                        log_event(
                            &config,
                            LogLevel::Warn,
                            "particles.unavailable",
                            json!({ "error": PageError::MissingMountPoint("particles").to_string() }),
                        );
                        return;
                    };
                    let (width, height) = browser::viewport_size();
                    if !force && (canvas.width(), canvas.height()) == canvas_extent(width, height) {
                        return;
                    }

                    frame_loop.borrow_mut().take();
                    match start_particles(&canvas, theme, &config) {
                        Ok(next) => *frame_loop.borrow_mut() = next,
                        Err(error) => log_event(
                            &config,
                            LogLevel::Warn,
                            "particles.unavailable",
                            json!({ "error": error.to_string() }),
                        ),
                    }
                }
            };

            regenerate(true);
            let resize = log_unavailable(
                &config,
                "particles.unavailable",
                WindowListener::resize(move || regenerate(false)),
            );

            move || {
                drop(resize);
                frame_loop.borrow_mut().take();
            }
        });
    }

    html! {
        <canvas ref={canvas_ref} class="particles-layer" aria-hidden="true" />
    }
}

#[derive(Properties, PartialEq)]
struct SiteHeaderProps {
    theme: Theme,
    on_toggle: Callback<()>,
}

#[function_component(SiteHeader)]
fn site_header(props: &SiteHeaderProps) -> Html {
    let theme = props.theme;

    html! {
        <header class="site-header">
            <a class="site-name" href="#">{PROFILE.name}</a>
            <div class="theme-switch">
                <span aria-hidden="true">{Theme::Light.icon()}</span>
                <button
                    class={classes!("theme-toggle", theme.is_dark().then_some("is-on"))}
                    type="button"
                    role="switch"
                    aria-checked={theme.is_dark().to_string()}
                    aria-label={theme.toggle_label()}
                    onclick={props.on_toggle.reform(|_| ())}
                >
                    <span class="theme-toggle-thumb" aria-hidden="true" />
                </button>
                <span aria-hidden="true">{Theme::Dark.icon()}</span>
            </div>
        </header>
    }
}

#[derive(Properties, PartialEq)]
struct HeroSectionProps {
    /// Page container whose scroll span drives the backdrop.
    scroll_target: NodeRef,
    config: Rc<RuntimeConfig>,
}

#[function_component(HeroSection)]
fn hero_section(props: &HeroSectionProps) -> Html {
    let backdrop_style = use_parallax_style(props.scroll_target.clone(), props.config.clone());

    html! {
        <section class="hero" aria-labelledby="hero-heading">
            <div class="hero-backdrop" style={backdrop_style}>
                <div class="hero-gradient" />
                <div class="hero-blur" />
            </div>
            <div class="hero-copy">
                <h1 id="hero-heading" class="hero-title fade-up">{HERO_TITLE}</h1>
                <p class="hero-tagline fade-up delay-1">{HERO_TAGLINE}</p>
                <div class="hero-links fade-in delay-2">
                    { for hero_links(&PROFILE).into_iter().map(|link| html! {
                        <ExternalLink href={link.href} label={link.label} class="pill-button" />
                    }) }
                </div>
            </div>
            <span class="scroll-hint" aria-hidden="true">{"↓"}</span>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct SkillChartProps {
    theme: Theme,
}

fn point_coords(point: Point) -> (String, String) {
    (format!("{:.2}", point.x), format!("{:.2}", point.y))
}

#[function_component(SkillChart)]
fn skill_chart(props: &SkillChartProps) -> Html {
    let palette = ChartPalette::for_theme(props.theme);
    let chart = RadarChart::new(&SKILL_SCORES, SKILL_SCORE_MAX, CHART_SIZE, CHART_MARGIN);
    let (cx, cy) = point_coords(chart.center());
    let vertices = chart.vertices();
    let outline: Vec<Point> = vertices.iter().map(|vertex| vertex.point).collect();

    html! {
        <figure class="skill-chart">
            <svg
                viewBox={format!("0 0 {CHART_SIZE} {CHART_SIZE}")}
                role="img"
                aria-label="Skill proficiency radar chart"
            >
                { for GRID_LEVELS.iter().map(|level| html! {
                    <polygon points={points_attr(&chart.grid_ring(*level))} fill="none" stroke={palette.grid} />
                }) }
                { for chart.spoke_ends().into_iter().map(|end| {
                    let (x2, y2) = point_coords(end);
                    html! { <line x1={cx.clone()} y1={cy.clone()} x2={x2} y2={y2} stroke={palette.grid} /> }
                }) }
                <polygon
                    points={points_attr(&outline)}
                    fill={palette.series_fill}
                    stroke={palette.series}
                    stroke-width="2"
                />
                { for vertices.into_iter().map(|vertex| {
                    let (x, y) = point_coords(vertex.point);
                    html! {
                        <circle cx={x} cy={y} r="4" fill={palette.series}>
                            <title>{vertex.tooltip}</title>
                        </circle>
                    }
                }) }
                { for chart.labels().into_iter().map(|label| {
                    let (x, y) = point_coords(label.anchor);
                    html! {
                        <text x={x} y={y} text-anchor={label.text_anchor} dominant-baseline="middle" fill={palette.text}>
                            {label.text}
                        </text>
                    }
                }) }
            </svg>
            <figcaption style={format!("color: {}", palette.text)}>
                <span class="legend-swatch" style={format!("background: {}", palette.series)} />
                {SKILL_SERIES_NAME}
            </figcaption>
        </figure>
    }
}

#[derive(Properties, PartialEq)]
struct SkillsSectionProps {
    theme: Theme,
    config: Rc<RuntimeConfig>,
}

#[function_component(SkillsSection)]
fn skills_section(props: &SkillsSectionProps) -> Html {
    let heading_ref = use_node_ref();
    let heading_visible = use_in_view(heading_ref.clone(), props.config.clone());

    html! {
        <section class="section-block skills-section" aria-labelledby="skills-heading">
            <h2
                id="skills-heading"
                ref={heading_ref}
                class={classes!("section-title", "in-view-fade", heading_visible.then_some("is-visible"))}
            >
                {"Core Skills"}
            </h2>
            <div class="skills-layout">
                <div class="skills-grid">
                    { for SKILLS.iter().map(|skill| html! {
                        <article class="card skill-card">
                            <div class="skill-icon" aria-hidden="true">{skill.icon.glyph()}</div>
                            <h3>{skill.title}</h3>
                            <p class="muted">{skill.description}</p>
                        </article>
                    }) }
                </div>
                <div class="card chart-card">
                    <h3>{"Skill Proficiency"}</h3>
                    <SkillChart theme={props.theme} />
                </div>
            </div>
        </section>
    }
}

#[function_component(ExperienceSection)]
fn experience_section() -> Html {
    html! {
        <section class="section-block experience-section" aria-labelledby="experience-heading">
            <h2 id="experience-heading" class="section-title">{"Work Experience"}</h2>
            <div class="stack">
                { for EXPERIENCE.iter().map(|entry| html! {
                    <article class="card experience-card">
                        <h3>{entry.heading()}</h3>
                        <p class="muted">{entry.period}</p>
                        <ul class="highlights">
                            { for entry.highlights.iter().map(|item| html! { <li>{*item}</li> }) }
                        </ul>
                    </article>
                }) }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectsSectionProps {
    carousel: Carousel,
    on_select: Callback<usize>,
}

#[function_component(ProjectsSection)]
fn projects_section(props: &ProjectsSectionProps) -> Html {
    let carousel = props.carousel;
    let project = &PROJECTS[carousel.displayed()];

    html! {
        <section class="section-block projects-section" aria-labelledby="projects-heading">
            <h2 id="projects-heading" class="section-title">{"Featured Projects"}</h2>
            <div class="stack">
                <article class={classes!("card", "project-panel", carousel.phase().class())} aria-live="polite">
                    <h3 class="project-title">{project.title}</h3>
                    <p class="project-description">{project.description}</p>
                    <p class="muted">{format!("Tools: {}", project.tools)}</p>
                </article>
                <div class="project-selectors">
                    { for (0..carousel.len()).map(|index| {
                        let on_select = props.on_select.clone();
                        let selected = index == carousel.active();
                        html! {
                            <button
                                type="button"
                                class={classes!("selector", selected.then_some("is-active"))}
                                aria-pressed={selected.to_string()}
                                aria-label={format!("Show project {}", index + 1)}
                                onclick={Callback::from(move |_| on_select.emit(index))}
                            >
                                {(index + 1).to_string()}
                            </button>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(ContactSection)]
fn contact_section() -> Html {
    html! {
        <section class="section-block contact-section" aria-labelledby="contact-heading">
            <h2 id="contact-heading" class="section-title">{"Get in Touch"}</h2>
            <p>{CONTACT_PITCH}</p>
            <a class="pill-button primary" href={mail_href(&PROFILE)}>
                <span aria-hidden="true">{"✉ "}</span>
                {"Email Me"}
            </a>
            <p class="muted">
                {"Phone: "}
                <a class="link" href={tel_href(&PROFILE)}>{PROFILE.phone}</a>
            </p>
            <p class="muted">
                {"Website: "}
                <ExternalLink href={PROFILE.website} label={PROFILE.website} />
            </p>
        </section>
    }
}

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| browser::runtime_config());
    let view = use_reducer(ViewState::default);
    let page_ref = use_node_ref();
    let theme_sync = use_mut_ref(ThemeSync::default);

    {
        let config = config.clone();
        let theme = view.theme;
        use_effect_with((), move |_| {
            log_event(
                &config,
                LogLevel::Info,
                "page.mounted",
                json!({ "theme": theme.as_str(), "projects": PROJECTS.len() }),
            );
            || ()
        });
    }

    {
        let config = config.clone();
        use_effect_with((), move |_| {
            let scheduler = BrowserScheduler {
                frame_interval_ms: config.frame_interval_ms,
            };
            let scope = DomSurface::new().and_then(|surface| {
                mount_decorations(&scheduler, Rc::new(surface), config.reduced_motion)
            });

            match &scope {
                Ok(scope) => log_event(
                    &config,
                    LogLevel::Info,
                    "animations.mounted",
                    json!({ "subscriptions": scope.len(), "reduced_motion": config.reduced_motion }),
                ),
                Err(error) => log_event(
                    &config,
                    LogLevel::Warn,
                    "animations.mount_failed",
                    json!({ "error": error.to_string() }),
                ),
            }

            move || {
                if let Ok(scope) = scope {
                    let released = scope.len();
                    drop(scope);
                    log_event(
                        &config,
                        LogLevel::Debug,
                        "animations.released",
                        json!({ "subscriptions": released }),
                    );
                }
            }
        });
    }

    {
        let config = config.clone();
        use_effect_with(view.theme, move |theme| {
            let write = theme_sync.borrow_mut().follow(*theme);
            match write {
                Some(FlagWrite::Immediate) => browser::apply_theme(*theme),
                Some(FlagWrite::Animated) => {
                    browser::apply_theme_with_transition(*theme);
                    log_event(&config, LogLevel::Info, "theme.toggled", json!({ "theme": theme.as_str() }));
                }
                None => {}
            }
            || ()
        });
    }

    {
        let dispatcher = view.dispatcher();
        use_effect_with(view.carousel.phase(), move |phase| {
            let timer = match *phase {
                PanelPhase::Exiting => Some(Timeout::new(TRANSITION_MS, move || {
                    dispatcher.dispatch(ViewAction::ProjectExitFinished)
                })),
                PanelPhase::Entering => Some(Timeout::new(ENTER_KICKOFF_MS, move || {
                    dispatcher.dispatch(ViewAction::ProjectEnterFinished)
                })),
                PanelPhase::Shown => None,
            };
            move || drop(timer)
        });
    }

    let on_toggle = {
        let dispatcher = view.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(ViewAction::ToggleTheme))
    };

    let on_select = {
        let view = view.clone();
        let config = config.clone();
        Callback::from(move |index: usize| {
            if let Some(project) = PROJECTS.get(index) {
                if index != view.active_project_index() {
                    log_event(
                        &config,
                        LogLevel::Info,
                        "carousel.selected",
                        json!({ "index": index, "title": project.title }),
                    );
                }
            }
            view.dispatch(ViewAction::SelectProject(index));
        })
    };

    html! {
        <div class="page" ref={page_ref.clone()}>
            <ParticleBackground theme={view.theme} config={config.clone()} />
            <SiteHeader theme={view.theme} on_toggle={on_toggle} />
            <main id="content">
                <HeroSection scroll_target={page_ref.clone()} config={config.clone()} />
                <SkillsSection theme={view.theme} config={config.clone()} />
                <ExperienceSection />
                <ProjectsSection carousel={view.carousel} on_select={on_select} />
                <ContactSection />
            </main>
            <footer class="site-footer">
                <p>{footer_notice(&PROFILE, browser::current_year())}</p>
            </footer>
        </div>
    }
}

pub fn run() -> Result<(), PageError> {
    let root = browser::document()?
        .get_element_by_id("app")
        .ok_or(PageError::MissingMountPoint("app"))?;
    yew::Renderer::<App>::with_root(root).render();
    Ok(())
}
