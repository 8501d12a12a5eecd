//! The application's action vocabulary
//!
//! Key and mouse events translate into actions, and `App::update` is the
//! single place actions mutate state. An update may return a follow-up
//! action, which the main loop feeds straight back in.

use crate::model::ui::Screen;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// The poll timeout elapsed with no input
    Tick,
    /// New terminal dimensions
    Resize(u16, u16),
    /// Quit now, skipping the confirmation dialog
    ForceQuit,
    /// Leave the splash and show the main screens
    SplashComplete,

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Jump to a top-level screen
    SwitchScreen(Screen),
    /// List cursor down
    NextItem,
    /// List cursor up
    PrevItem,
    /// Category tab to the right
    NextTab,
    /// Category tab to the left
    PrevTab,
    /// List cursor to the top
    FirstItem,
    /// List cursor to the bottom
    LastItem,

    // ─────────────────────────────────────────────────────────────────────────
    // Scrolling
    // ─────────────────────────────────────────────────────────────────────────
    /// Detail panel up one line
    ScrollUp,
    /// Detail panel down one line
    ScrollDown,
    /// Detail panel up one page
    PageUp,
    /// Detail panel down one page
    PageDown,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Ask before quitting
    OpenQuitDialog,
    /// Show the keyboard shortcut reference
    OpenHelp,
    /// Dismiss the top overlay
    CloseModal,
    /// Previous option inside the top overlay
    ModalUp,
    /// Next option inside the top overlay
    ModalDown,

    // ─────────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────────
    /// Start typing a query on the active list screen
    EnterSearchMode,
    /// Leave search mode, keeping the query
    ExitSearchMode,
    /// A character typed into the query
    SearchInput(char),
    /// Delete the last query character
    SearchBackspace,

    // ─────────────────────────────────────────────────────────────────────────
    // Filters
    // ─────────────────────────────────────────────────────────────────────────
    /// Step to the next price band on the active list screen
    CyclePriceBand,
    /// Open purpose filter dialog
    OpenPurposeFilter,
    /// Set purpose filter
    SetPurposeFilter(String),
    /// Clear purpose filter
    ClearPurposeFilter,

    // ─────────────────────────────────────────────────────────────────────────
    // Configurator
    // ─────────────────────────────────────────────────────────────────────────
    /// Assign the highlighted part to its category slot
    SelectPart,
    /// Clear the active category slot
    RemoveSlot,
    /// Clear every slot of the configuration
    ClearConfiguration,
    /// Open the save-build name prompt
    OpenSaveDialog,
    /// Save the configuration under the given name
    SaveBuild(String),

    // ─────────────────────────────────────────────────────────────────────────
    // Comparison
    // ─────────────────────────────────────────────────────────────────────────
    /// Add or remove the highlighted build from the comparison
    ToggleCompare,
    /// Step to the next comparison pair
    NextPair,
    /// Step to the previous comparison pair
    PrevPair,

    // ─────────────────────────────────────────────────────────────────────────
    // Profile
    // ─────────────────────────────────────────────────────────────────────────
    /// Submit the sign-in / sign-up form
    SubmitAuth,
    /// The simulated auth delay elapsed
    CompleteAuth,
    /// Sign the current account out
    SignOut,
    /// Delete the highlighted saved build
    DeleteSavedBuild,

    // ─────────────────────────────────────────────────────────────────────────
    // Export
    // ─────────────────────────────────────────────────────────────────────────
    /// Write the current parts list as CSV
    ExportParts,
}
