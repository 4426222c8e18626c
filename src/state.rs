use crate::carousel::Carousel;
use crate::content::{Project, PROJECTS};
use crate::theme::Theme;

/// Page state owned by the root component and changed only by its handlers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewState {
    pub theme: Theme,
    pub carousel: Carousel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewAction {
    ToggleTheme,
    SelectProject(usize),
    ProjectExitFinished,
    ProjectEnterFinished,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            carousel: Carousel::new(PROJECTS.len()),
        }
    }
}

impl ViewState {
    pub fn is_dark_mode(&self) -> bool {
        self.theme.is_dark()
    }

    pub fn active_project_index(&self) -> usize {
        self.carousel.active()
    }

    pub fn displayed_project(&self) -> &'static Project {
        &PROJECTS[self.carousel.displayed()]
    }

    pub fn apply(mut self, action: ViewAction) -> Self {
        match action {
            ViewAction::ToggleTheme => self.theme = self.theme.toggled(),
            ViewAction::SelectProject(index) => {
                self.carousel.select(index);
            }
            ViewAction::ProjectExitFinished => self.carousel.exit_finished(),
            ViewAction::ProjectEnterFinished => self.carousel.enter_finished(),
        }
        self
    }
}
