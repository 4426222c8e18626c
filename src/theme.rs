pub const DARK_CLASS: &str = "dark";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "☀",
            Self::Dark => "☾",
        }
    }
}

/// Root-level presentation flag consumed by the stylesheet.
pub trait PresentationRoot {
    fn set_dark_flag(&self, theme: Theme);
}

pub fn apply_theme(root: &impl PresentationRoot, theme: Theme) {
    root.set_dark_flag(theme);
}

/// How a pending root flag write should be performed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlagWrite {
    /// First write after mount, no transition.
    Immediate,
    Animated,
}

/// Keeps the root flag in step with the reducer's theme.
#[derive(Debug, Default)]
pub struct ThemeSync {
    applied: Option<Theme>,
}

impl ThemeSync {
    pub fn applied(&self) -> Option<Theme> {
        self.applied
    }

    /// Records `theme` as applied and reports how to write it, or `None` when
    /// the flag already matches.
    pub fn follow(&mut self, theme: Theme) -> Option<FlagWrite> {
        let write = match self.applied {
            None => FlagWrite::Immediate,
            Some(current) if current == theme => return None,
            Some(_) => FlagWrite::Animated,
        };
        self.applied = Some(theme);
        Some(write)
    }
}
