use crate::core::StateChange;

/// Events flowing through the Elm-architecture event loop.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Raw terminal input (keyboard/mouse/resize) other than the trigger.
    Input(crossterm::event::Event),
    /// The designated disguise trigger fired.
    Trigger,
    /// The session reported an effective state change.
    StateChanged(StateChange),
    /// Request to quit the application.
    Quit,
}

/// High-level actions dispatched by the input mapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Catalog browsing
    SelectNext,
    SelectPrev,
    NextCategory,
    PrevCategory,
    StartSearch,
    ClearSearch,
    OpenSelected,

    // Module overlay
    CloseModule,
    OpenExternally,

    // Disguise
    EnterDisguise,
    Resume,

    // Modals
    ShowHelp,
    CloseHelp,

    // Application
    Quit,
}

/// Where typed characters go while the portal is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keys are commands.
    #[default]
    Browse,
    /// Keys edit the search query.
    Search,
}

/// Notification level for the overlay system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A timed notification shown in the overlay.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    /// Ticks remaining before auto-dismiss.
    pub ttl_ticks: u32,
}
