//! Featured-project carousel.
//!
//! `active` is the selected index and changes as soon as a selector is
//! clicked. `displayed` is the panel on screen; it follows `active` once the
//! outgoing panel has finished its exit transition.

pub const TRANSITION_MS: u32 = 500;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelPhase {
    Shown,
    Exiting,
    Entering,
}

impl PanelPhase {
    pub fn class(self) -> &'static str {
        match self {
            Self::Shown => "is-shown",
            Self::Exiting => "is-exiting",
            Self::Entering => "is-entering",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    active: usize,
    displayed: usize,
    phase: PanelPhase,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            active: 0,
            displayed: 0,
            phase: PanelPhase::Shown,
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn displayed(&self) -> usize {
        self.displayed
    }

    pub fn phase(&self) -> PanelPhase {
        self.phase
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `false` when nothing changed.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len || index == self.active {
            return false;
        }

        self.active = index;
        if self.displayed != index || self.phase != PanelPhase::Shown {
            self.phase = PanelPhase::Exiting;
        }
        true
    }

    pub fn exit_finished(&mut self) {
        if self.phase == PanelPhase::Exiting {
            self.displayed = self.active;
            self.phase = PanelPhase::Entering;
        }
    }

    pub fn enter_finished(&mut self) {
        if self.phase == PanelPhase::Entering {
            self.phase = PanelPhase::Shown;
        }
    }
}
