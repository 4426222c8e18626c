//! Scroll-scrubbed card reveals and the particle layer pulse.
//!
//! Every visual value is a pure function of scroll progress or elapsed
//! time. The driver only wires those functions to a [`FrameScheduler`] and
//! an [`AnimationSurface`], and hands every subscription it takes to an
//! [`AnimationScope`] that releases them when dropped.

use crate::error::PageError;
use std::cell::RefCell;
use std::rc::Rc;

pub const PULSE_PERIOD_SECONDS: f64 = 2.0;
pub const PULSE_OPACITY_RANGE: (f64, f64) = (1.0, 0.5);
pub const PARTICLE_LAYER_SELECTOR: &str = ".particles-layer";

pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

pub fn ease_out_quad(t: f64) -> f64 {
    let t = clamp_unit(t);
    t * (2.0 - t)
}

/// Progress of a section through the window that opens when its top reaches
/// the viewport center and closes when its bottom does.
pub fn trigger_progress(top: f64, height: f64, viewport_height: f64) -> f64 {
    let center = viewport_height / 2.0;
    if height <= 0.0 {
        return if top <= center { 1.0 } else { 0.0 };
    }

    clamp_unit((center - top) / height)
}

/// True while any part of an element overlaps the viewport.
pub fn intersects_viewport(top: f64, height: f64, viewport_height: f64) -> bool {
    top < viewport_height && top + height.max(0.0) > 0.0
}

/// Moves `current` toward `target` so that a gap closes in `scrub_seconds`.
pub fn scrub_toward(current: f64, target: f64, dt_seconds: f64, scrub_seconds: f64) -> f64 {
    if scrub_seconds <= 0.0 {
        return target;
    }

    let step = (dt_seconds.max(0.0) / scrub_seconds).min(1.0);
    current + (target - current) * step
}

/// Opacity of the particle layer: 1.0 to 0.5 and back, forever.
pub fn pulse_opacity(elapsed_seconds: f64) -> f64 {
    let cycle = elapsed_seconds.max(0.0) / PULSE_PERIOD_SECONDS;
    let phase = cycle.fract();
    let forward = (cycle.floor() as u64) % 2 == 0;
    let t = if forward { phase } else { 1.0 - phase };

    lerp(PULSE_OPACITY_RANGE.0, PULSE_OPACITY_RANGE.1, ease_out_quad(t))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealSpec {
    pub axis: Axis,
    /// Starting offset in pixels; cards travel from here to 0.
    pub distance: f64,
    pub stagger: f64,
    pub duration: f64,
    pub scrub_seconds: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealGroup {
    Skills,
    Experience,
}

impl RevealGroup {
    pub const ALL: [Self; 2] = [Self::Skills, Self::Experience];

    pub fn section_selector(self) -> &'static str {
        match self {
            Self::Skills => ".skills-section",
            Self::Experience => ".experience-section",
        }
    }

    pub fn item_selector(self) -> &'static str {
        match self {
            Self::Skills => ".skill-card",
            Self::Experience => ".experience-card",
        }
    }

    pub fn spec(self) -> RevealSpec {
        match self {
            Self::Skills => RevealSpec {
                axis: Axis::Y,
                distance: 50.0,
                stagger: 0.2,
                duration: 0.5,
                scrub_seconds: 1.0,
            },
            Self::Experience => RevealSpec {
                axis: Axis::X,
                distance: -50.0,
                stagger: 0.2,
                duration: 0.5,
                scrub_seconds: 1.0,
            },
        }
    }

    fn slot(self) -> usize {
        match self {
            Self::Skills => 0,
            Self::Experience => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealFrame {
    pub axis: Axis,
    pub opacity: f64,
    pub offset: f64,
}

impl RevealFrame {
    pub fn settled(axis: Axis) -> Self {
        Self {
            axis,
            opacity: 1.0,
            offset: 0.0,
        }
    }

    pub fn opacity_css(&self) -> String {
        format!("{:.3}", self.opacity)
    }

    pub fn transform_css(&self) -> String {
        match self.axis {
            Axis::X => format!("translateX({:.2}px)", self.offset),
            Axis::Y => format!("translateY({:.2}px)", self.offset),
        }
    }
}

/// Pose of child `index` out of `count` when its section is at `progress`.
///
/// Children start `stagger` seconds apart on a shared timeline that the
/// scroll position scrubs from start to end.
pub fn reveal_frame(spec: &RevealSpec, progress: f64, index: usize, count: usize) -> RevealFrame {
    let count = count.max(1);
    let index = index.min(count - 1);
    let total = spec.duration + spec.stagger * (count - 1) as f64;
    let start = spec.stagger * index as f64;
    let local = clamp_unit((clamp_unit(progress) * total - start) / spec.duration);
    let eased = ease_out_quad(local);

    RevealFrame {
        axis: spec.axis,
        opacity: eased,
        offset: spec.distance * (1.0 - eased),
    }
}

/// A live registration that stops firing once released.
pub trait Release {
    fn release(self: Box<Self>);
}

/// Owns registrations and releases all of them, newest first, on drop.
#[derive(Default)]
pub struct AnimationScope {
    subscriptions: Vec<Box<dyn Release>>,
}

impl AnimationScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hold(&mut self, subscription: Box<dyn Release>) {
        self.subscriptions.push(subscription);
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }
}

impl Drop for AnimationScope {
    fn drop(&mut self) {
        while let Some(subscription) = self.subscriptions.pop() {
            subscription.release();
        }
    }
}

pub trait FrameScheduler {
    /// `tick` receives a timestamp in milliseconds.
    fn every_frame(&self, tick: Box<dyn FnMut(f64)>) -> Result<Box<dyn Release>, PageError>;

    fn on_scroll(&self, notify: Box<dyn FnMut()>) -> Result<Box<dyn Release>, PageError>;
}

pub trait AnimationSurface {
    /// `None` while the section is not in the document.
    fn section_progress(&self, group: RevealGroup) -> Option<f64>;

    fn item_count(&self, group: RevealGroup) -> usize;

    fn apply_reveal(&self, group: RevealGroup, index: usize, frame: &RevealFrame);

    fn apply_pulse(&self, opacity: f64);
}

struct DriverState {
    target: [f64; 2],
    shown: [f64; 2],
    last_tick: Option<f64>,
    origin: Option<f64>,
}

impl DriverState {
    fn advance(&mut self, now_ms: f64) -> ([f64; 2], f64) {
        let dt_seconds = self
            .last_tick
            .map(|last| (now_ms - last) / 1_000.0)
            .unwrap_or(0.0);
        self.last_tick = Some(now_ms);
        let origin = *self.origin.get_or_insert(now_ms);

        for group in RevealGroup::ALL {
            let slot = group.slot();
            self.shown[slot] = scrub_toward(
                self.shown[slot],
                self.target[slot],
                dt_seconds,
                group.spec().scrub_seconds,
            );
        }

        (self.shown, pulse_opacity((now_ms - origin) / 1_000.0))
    }
}

fn paint_group(surface: &impl AnimationSurface, group: RevealGroup, progress: f64) {
    let spec = group.spec();
    let count = surface.item_count(group);
    for index in 0..count {
        surface.apply_reveal(group, index, &reveal_frame(&spec, progress, index, count));
    }
}

/// Registers the two card reveals and the particle pulse.
///
/// With `reduced_motion` the cards are painted in their settled pose and
/// nothing is registered.
pub fn mount_decorations<S>(
    scheduler: &impl FrameScheduler,
    surface: Rc<S>,
    reduced_motion: bool,
) -> Result<AnimationScope, PageError>
where
    S: AnimationSurface + 'static,
{
    let mut scope = AnimationScope::new();

    if reduced_motion {
        for group in RevealGroup::ALL {
            let axis = group.spec().axis;
            for index in 0..surface.item_count(group) {
                surface.apply_reveal(group, index, &RevealFrame::settled(axis));
            }
        }
        return Ok(scope);
    }

    let initial = RevealGroup::ALL.map(|group| surface.section_progress(group).unwrap_or(0.0));
    let state = Rc::new(RefCell::new(DriverState {
        target: initial,
        shown: initial,
        last_tick: None,
        origin: None,
    }));

    for group in RevealGroup::ALL {
        let surface = Rc::clone(&surface);
        let state = Rc::clone(&state);
        scope.hold(scheduler.on_scroll(Box::new(move || {
            if let Some(progress) = surface.section_progress(group) {
                state.borrow_mut().target[group.slot()] = progress;
            }
        }))?);
    }

    for group in RevealGroup::ALL {
        paint_group(surface.as_ref(), group, initial[group.slot()]);
    }

    scope.hold(scheduler.every_frame(Box::new(move |now_ms| {
        let (shown, pulse) = state.borrow_mut().advance(now_ms);
        for group in RevealGroup::ALL {
            paint_group(surface.as_ref(), group, shown[group.slot()]);
        }
        surface.apply_pulse(pulse);
    }))?);

    Ok(scope)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct Registry {
        frames: Vec<Option<Box<dyn FnMut(f64)>>>,
        scrolls: Vec<Option<Box<dyn FnMut()>>>,
    }

    #[derive(Default)]
    struct ManualScheduler {
        registry: Rc<RefCell<Registry>>,
        fail_on_registration: Option<usize>,
        registrations: Cell<usize>,
    }

    impl ManualScheduler {
        fn failing_on(registration: usize) -> Self {
            Self {
                fail_on_registration: Some(registration),
                ..Self::default()
            }
        }

        fn check_failure(&self) -> Result<(), PageError> {
            let current = self.registrations.get() + 1;
            self.registrations.set(current);
            if self.fail_on_registration == Some(current) {
                return Err(PageError::Dom {
                    message: "listener rejected".to_string(),
                });
            }
            Ok(())
        }

        fn live(&self) -> usize {
            let registry = self.registry.borrow();
            registry.frames.iter().flatten().count() + registry.scrolls.iter().flatten().count()
        }

        fn fire_frame(&self, now_ms: f64) {
            for tick in self.registry.borrow_mut().frames.iter_mut().flatten() {
                tick(now_ms);
            }
        }

        fn fire_scroll(&self) {
            for notify in self.registry.borrow_mut().scrolls.iter_mut().flatten() {
                notify();
            }
        }
    }

    enum SlotKind {
        Frame,
        Scroll,
    }

    struct ManualSubscription {
        registry: Rc<RefCell<Registry>>,
        kind: SlotKind,
        slot: usize,
    }

    impl Release for ManualSubscription {
        fn release(self: Box<Self>) {
            let mut registry = self.registry.borrow_mut();
            match self.kind {
                SlotKind::Frame => registry.frames[self.slot] = None,
                SlotKind::Scroll => registry.scrolls[self.slot] = None,
            }
        }
    }

    impl FrameScheduler for ManualScheduler {
        fn every_frame(&self, tick: Box<dyn FnMut(f64)>) -> Result<Box<dyn Release>, PageError> {
            self.check_failure()?;
            let mut registry = self.registry.borrow_mut();
            registry.frames.push(Some(tick));
            Ok(Box::new(ManualSubscription {
                registry: Rc::clone(&self.registry),
                kind: SlotKind::Frame,
                slot: registry.frames.len() - 1,
            }))
        }

        fn on_scroll(&self, notify: Box<dyn FnMut()>) -> Result<Box<dyn Release>, PageError> {
            self.check_failure()?;
            let mut registry = self.registry.borrow_mut();
            registry.scrolls.push(Some(notify));
            Ok(Box::new(ManualSubscription {
                registry: Rc::clone(&self.registry),
                kind: SlotKind::Scroll,
                slot: registry.scrolls.len() - 1,
            }))
        }
    }

    #[derive(Default)]
    struct RecordingSurface {
        progress: Cell<f64>,
        reveals: RefCell<Vec<(RevealGroup, usize, RevealFrame)>>,
        pulses: RefCell<Vec<f64>>,
    }

    impl RecordingSurface {
        fn last_reveal(&self, group: RevealGroup, index: usize) -> Option<RevealFrame> {
            self.reveals
                .borrow()
                .iter()
                .rev()
                .find(|(g, i, _)| *g == group && *i == index)
                .map(|(_, _, frame)| *frame)
        }
    }

    impl AnimationSurface for RecordingSurface {
        fn section_progress(&self, _group: RevealGroup) -> Option<f64> {
            Some(self.progress.get())
        }

        fn item_count(&self, group: RevealGroup) -> usize {
            match group {
                RevealGroup::Skills => 3,
                RevealGroup::Experience => 2,
            }
        }

        fn apply_reveal(&self, group: RevealGroup, index: usize, frame: &RevealFrame) {
            self.reveals.borrow_mut().push((group, index, *frame));
        }

        fn apply_pulse(&self, opacity: f64) {
            self.pulses.borrow_mut().push(opacity);
        }
    }

    #[test]
    fn reveal_starts_hidden_and_ends_settled() {
        let spec = RevealGroup::Skills.spec();

        let hidden = reveal_frame(&spec, 0.0, 0, 3);
        assert_eq!(hidden.opacity, 0.0);
        assert_eq!(hidden.offset, 50.0);

        for index in 0..3 {
            let settled = reveal_frame(&spec, 1.0, index, 3);
            assert!((settled.opacity - 1.0).abs() < 1e-9);
            assert!(settled.offset.abs() < 1e-9);
        }
    }

    #[test]
    fn later_children_trail_earlier_ones() {
        let spec = RevealGroup::Experience.spec();

        let first = reveal_frame(&spec, 0.5, 0, 2);
        let second = reveal_frame(&spec, 0.5, 1, 2);

        assert!(first.opacity > second.opacity);
        assert!(first.offset > second.offset);
        assert!(second.offset < 0.0);
    }

    #[test]
    fn frame_css_uses_the_group_axis() {
        let skills = reveal_frame(&RevealGroup::Skills.spec(), 0.0, 0, 1);
        let experience = reveal_frame(&RevealGroup::Experience.spec(), 0.0, 0, 1);

        assert_eq!(skills.transform_css(), "translateY(50.00px)");
        assert_eq!(experience.transform_css(), "translateX(-50.00px)");
        assert_eq!(skills.opacity_css(), "0.000");
    }

    #[test]
    fn trigger_window_spans_center_to_center() {
        assert_eq!(trigger_progress(500.0, 400.0, 1000.0), 0.0);
        assert_eq!(trigger_progress(300.0, 400.0, 1000.0), 0.5);
        assert_eq!(trigger_progress(100.0, 400.0, 1000.0), 1.0);
        assert_eq!(trigger_progress(900.0, 400.0, 1000.0), 0.0);
    }

    #[test]
    fn heading_is_in_view_while_any_edge_overlaps() {
        assert!(!intersects_viewport(1000.0, 60.0, 1000.0));
        assert!(intersects_viewport(990.0, 60.0, 1000.0));
        assert!(intersects_viewport(-50.0, 60.0, 1000.0));
        assert!(!intersects_viewport(-60.0, 60.0, 1000.0));
    }

    #[test]
    fn pulse_yoyos_between_full_and_half_opacity() {
        assert_eq!(pulse_opacity(0.0), 1.0);
        assert_eq!(pulse_opacity(2.0), 0.5);
        assert_eq!(pulse_opacity(4.0), 1.0);
        assert_eq!(pulse_opacity(1.0), pulse_opacity(3.0));
        assert!((pulse_opacity(1.0) - 0.625).abs() < 1e-9);
    }

    #[test]
    fn scrub_closes_the_gap_over_its_window() {
        assert_eq!(scrub_toward(0.0, 1.0, 0.5, 1.0), 0.5);
        assert_eq!(scrub_toward(0.0, 1.0, 3.0, 1.0), 1.0);
        assert_eq!(scrub_toward(0.2, 0.8, 0.1, 0.0), 0.8);
    }

    #[test]
    fn mount_registers_both_reveals_and_the_frame_loop() {
        let scheduler = ManualScheduler::default();
        let surface = Rc::new(RecordingSurface::default());

        let scope = mount_decorations(&scheduler, Rc::clone(&surface), false).expect("mounts");

        assert_eq!(scope.len(), 3);
        assert_eq!(scheduler.live(), 3);
        assert_eq!(surface.reveals.borrow().len(), 5);
    }

    #[test]
    fn frames_scrub_cards_toward_scroll_position_and_pulse() {
        let scheduler = ManualScheduler::default();
        let surface = Rc::new(RecordingSurface::default());
        let _scope = mount_decorations(&scheduler, Rc::clone(&surface), false).expect("mounts");

        surface.progress.set(1.0);
        scheduler.fire_scroll();
        scheduler.fire_frame(0.0);
        assert_eq!(surface.last_reveal(RevealGroup::Skills, 0).map(|f| f.opacity), Some(0.0));

        scheduler.fire_frame(500.0);
        let halfway = surface
            .last_reveal(RevealGroup::Skills, 0)
            .expect("painted");
        assert!(halfway.opacity > 0.0 && halfway.opacity < 1.0);

        scheduler.fire_frame(1_500.0);
        let settled = surface
            .last_reveal(RevealGroup::Experience, 1)
            .expect("painted");
        assert!((settled.opacity - 1.0).abs() < 1e-9);

        let pulses = surface.pulses.borrow();
        assert_eq!(pulses.first().copied(), Some(1.0));
        assert_eq!(pulses.len(), 3);
    }

    #[test]
    fn nothing_fires_after_the_scope_is_dropped() {
        let scheduler = ManualScheduler::default();
        let surface = Rc::new(RecordingSurface::default());
        let scope = mount_decorations(&scheduler, Rc::clone(&surface), false).expect("mounts");

        scheduler.fire_frame(0.0);
        let reveals_before = surface.reveals.borrow().len();
        let pulses_before = surface.pulses.borrow().len();

        drop(scope);
        assert_eq!(scheduler.live(), 0);

        surface.progress.set(1.0);
        scheduler.fire_scroll();
        scheduler.fire_frame(16.0);
        scheduler.fire_frame(32.0);

        assert_eq!(surface.reveals.borrow().len(), reveals_before);
        assert_eq!(surface.pulses.borrow().len(), pulses_before);
        assert_eq!(Rc::strong_count(&surface), 1);
    }

    #[test]
    fn failed_registration_releases_what_was_already_taken() {
        let scheduler = ManualScheduler::failing_on(2);
        let surface = Rc::new(RecordingSurface::default());

        let result = mount_decorations(&scheduler, Rc::clone(&surface), false);

        assert!(result.is_err());
        assert_eq!(scheduler.live(), 0);
    }

    #[test]
    fn reduced_motion_paints_settled_cards_without_registering() {
        let scheduler = ManualScheduler::default();
        let surface = Rc::new(RecordingSurface::default());

        let scope = mount_decorations(&scheduler, Rc::clone(&surface), true).expect("mounts");

        assert!(scope.is_empty());
        assert_eq!(scheduler.live(), 0);
        let reveals = surface.reveals.borrow();
        assert_eq!(reveals.len(), 5);
        assert!(reveals.iter().all(|(_, _, frame)| frame.opacity == 1.0 && frame.offset == 0.0));
        assert!(surface.pulses.borrow().is_empty());
    }
}
