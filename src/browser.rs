use crate::config::RuntimeConfig;
use crate::error::PageError;
use crate::motion::{
    trigger_progress, AnimationSurface, FrameScheduler, Release, RevealFrame, RevealGroup,
    PARTICLE_LAYER_SELECTOR,
};
use crate::particles::ParticleRenderer;
use crate::theme::{PresentationRoot, Theme, DARK_CLASS};
use gloo_timers::callback::Interval;
use js_sys::{Function, Reflect};
use std::f64::consts::PI;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, HtmlElement, Storage,
    Window,
};

pub fn document() -> Result<Document, PageError> {
    window()
        .ok_or(PageError::NoWindow)?
        .document()
        .ok_or(PageError::NoDocument)
}

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn runtime_config() -> RuntimeConfig {
    let storage = local_storage();
    RuntimeConfig::from_overrides(
        |key| storage.as_ref()?.get_item(key).ok().flatten(),
        prefers_reduced_motion(),
    )
}

pub fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return (1280.0, 720.0);
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);

    (width, height)
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// The `<html>` element, where the stylesheet looks for the theme flag.
pub struct DocumentRoot(Element);

impl DocumentRoot {
    pub fn find() -> Option<Self> {
        document().ok()?.document_element().map(Self)
    }
}

impl PresentationRoot for DocumentRoot {
    fn set_dark_flag(&self, theme: Theme) {
        let _ = self.0.class_list().toggle_with_force(DARK_CLASS, theme.is_dark());
        let _ = self.0.set_attribute("data-theme", theme.as_str());
    }
}

pub fn apply_theme(theme: Theme) {
    if let Some(root) = DocumentRoot::find() {
        crate::theme::apply_theme(&root, theme);
    }
}

/// Flips the flag inside a view transition when the browser has one.
pub fn apply_theme_with_transition(theme: Theme) {
    if prefers_reduced_motion() {
        apply_theme(theme);
        return;
    }

    let Ok(document) = document() else {
        apply_theme(theme);
        return;
    };

    let document_js: JsValue = document.into();
    let Ok(start_view_transition) =
        Reflect::get(&document_js, &JsValue::from_str("startViewTransition"))
    else {
        apply_theme(theme);
        return;
    };

    let Some(start_view_transition) = start_view_transition.dyn_ref::<Function>() else {
        apply_theme(theme);
        return;
    };

    let callback = Closure::once_into_js(move || apply_theme(theme));
    if start_view_transition
        .call1(&document_js, &callback)
        .is_err()
    {
        apply_theme(theme);
    }
}

/// Window event listener, removed when dropped.
pub struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    pub fn attach(event: &'static str, handler: impl FnMut() + 'static) -> Result<Self, PageError> {
        let window = window().ok_or(PageError::NoWindow)?;
        let callback = Closure::<dyn FnMut()>::new(handler);
        window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            window,
            event,
            callback,
        })
    }

    pub fn scroll(handler: impl FnMut() + 'static) -> Result<Self, PageError> {
        Self::attach("scroll", handler)
    }

    pub fn resize(handler: impl FnMut() + 'static) -> Result<Self, PageError> {
        Self::attach("resize", handler)
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

impl Release for WindowListener {
    fn release(self: Box<Self>) {}
}

impl Release for Interval {
    fn release(self: Box<Self>) {
        let _ = (*self).cancel();
    }
}

pub struct BrowserScheduler {
    pub frame_interval_ms: u32,
}

impl FrameScheduler for BrowserScheduler {
    fn every_frame(&self, mut tick: Box<dyn FnMut(f64)>) -> Result<Box<dyn Release>, PageError> {
        let interval = Interval::new(self.frame_interval_ms, move || tick(now_ms()));
        Ok(Box::new(interval))
    }

    fn on_scroll(&self, mut notify: Box<dyn FnMut()>) -> Result<Box<dyn Release>, PageError> {
        Ok(Box::new(WindowListener::scroll(move || notify())?))
    }
}

pub struct DomSurface {
    document: Document,
}

impl DomSurface {
    pub fn new() -> Result<Self, PageError> {
        Ok(Self {
            document: document()?,
        })
    }

    fn item(&self, group: RevealGroup, index: usize) -> Option<HtmlElement> {
        self.document
            .query_selector_all(group.item_selector())
            .ok()?
            .get(index as u32)?
            .dyn_into::<HtmlElement>()
            .ok()
    }
}

impl AnimationSurface for DomSurface {
    fn section_progress(&self, group: RevealGroup) -> Option<f64> {
        let section = self
            .document
            .query_selector(group.section_selector())
            .ok()
            .flatten()?;
        let rect = section.get_bounding_client_rect();
        let (_, viewport_height) = viewport_size();
        Some(trigger_progress(rect.top(), rect.height(), viewport_height))
    }

    fn item_count(&self, group: RevealGroup) -> usize {
        self.document
            .query_selector_all(group.item_selector())
            .map(|list| list.length() as usize)
            .unwrap_or(0)
    }

    fn apply_reveal(&self, group: RevealGroup, index: usize, frame: &RevealFrame) {
        if let Some(item) = self.item(group, index) {
            let style = item.style();
            let _ = style.set_property("opacity", &frame.opacity_css());
            let _ = style.set_property("transform", &frame.transform_css());
        }
    }

    fn apply_pulse(&self, opacity: f64) {
        let layer = self
            .document
            .query_selector(PARTICLE_LAYER_SELECTOR)
            .ok()
            .flatten()
            .and_then(|element| element.dyn_into::<HtmlElement>().ok());
        if let Some(layer) = layer {
            let _ = layer.style().set_property("opacity", &format!("{opacity:.3}"));
        }
    }
}

pub struct CanvasParticleRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasParticleRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, PageError> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or(PageError::NoCanvasContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| PageError::NoCanvasContext)?;
        Ok(Self { ctx })
    }
}

impl ParticleRenderer for CanvasParticleRenderer {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn circle(&mut self, x: f64, y: f64, radius: f64, color: &str, opacity: f64) {
        self.ctx.set_global_alpha(opacity);
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        let _ = self.ctx.arc(x, y, radius, 0.0, 2.0 * PI);
        self.ctx.fill();
    }

    fn line(&mut self, from: (f64, f64), to: (f64, f64), color: &str, opacity: f64, width: f64) {
        self.ctx.set_global_alpha(opacity);
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(width);
        self.ctx.begin_path();
        self.ctx.move_to(from.0, from.1);
        self.ctx.line_to(to.0, to.1);
        self.ctx.stroke();
    }
}
