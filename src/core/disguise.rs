//! Disguise controller: Normal / Disguised.
//!
//! The controller only owns the mode. It never touches filter or focus
//! state; preemption happens at render time through [`Session::view`].
//!
//! [`Session::view`]: super::session::Session::view

/// Global display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisguiseMode {
    #[default]
    Normal,
    Disguised,
}

impl DisguiseMode {
    pub fn flipped(self) -> Self {
        match self {
            Self::Normal => Self::Disguised,
            Self::Disguised => Self::Normal,
        }
    }

    pub fn is_disguised(self) -> bool {
        self == Self::Disguised
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Disguised => "disguised",
        }
    }
}

#[derive(Debug, Default)]
pub struct DisguiseController {
    mode: DisguiseMode,
    /// Number of effective mode changes this session.
    transitions: u64,
}

impl DisguiseController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> DisguiseMode {
        self.mode
    }

    pub fn is_disguised(&self) -> bool {
        self.mode.is_disguised()
    }

    /// Flip the mode and return the new one.
    pub fn toggle(&mut self) -> DisguiseMode {
        self.mode = self.mode.flipped();
        self.transitions += 1;
        log::debug!("Disguise toggled -> {}", self.mode.label());
        self.mode
    }

    /// Set the mode explicitly. Returns `true` if it changed.
    pub fn set_mode(&mut self, mode: DisguiseMode) -> bool {
        if self.mode == mode {
            return false;
        }
        self.mode = mode;
        self.transitions += 1;
        log::debug!("Disguise set -> {}", mode.label());
        true
    }

    pub fn transitions(&self) -> u64 {
        self.transitions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_normal() {
        let disguise = DisguiseController::new();
        assert_eq!(disguise.mode(), DisguiseMode::Normal);
        assert_eq!(disguise.transitions(), 0);
    }

    #[test]
    fn test_toggle_flips() {
        let mut disguise = DisguiseController::new();
        assert_eq!(disguise.toggle(), DisguiseMode::Disguised);
        assert!(disguise.is_disguised());
        assert_eq!(disguise.toggle(), DisguiseMode::Normal);
        assert_eq!(disguise.transitions(), 2);
    }

    #[test]
    fn test_set_mode_same_is_noop() {
        let mut disguise = DisguiseController::new();
        assert!(!disguise.set_mode(DisguiseMode::Normal));
        assert!(disguise.set_mode(DisguiseMode::Disguised));
        assert!(!disguise.set_mode(DisguiseMode::Disguised));
        assert_eq!(disguise.transitions(), 1);
    }

    #[test]
    fn test_flipped_is_involution() {
        for mode in [DisguiseMode::Normal, DisguiseMode::Disguised] {
            assert_eq!(mode.flipped().flipped(), mode);
        }
    }
}
