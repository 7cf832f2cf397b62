//! Commands produced by keymap resolution.
//!
//! A [`Command`] is the "what" of user intent, decoupled from the key that
//! triggered it. The dispatcher that turns commands into behavior lives
//! elsewhere; this module only defines the closed set of identifiers and a
//! few classification helpers.
//!
//! # Example
//!
//! ```
//! use lazydb::commands::Command;
//!
//! let command: Command = "MoveDown".parse().unwrap();
//! assert!(command.is_navigation());
//! assert_eq!(command.to_string(), "MoveDown");
//! ```

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

// ============================================================================
// Command
// ============================================================================

/// All commands the application understands.
///
/// The textual name of a command is its variant name. It is what
/// [`Bind::render`](crate::keymap::Bind::render) prints and what keymap
/// config files refer to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumString, IntoStaticStr,
)]
pub enum Command {
    // === No Operation ===
    /// Reserved sentinel: the key is not bound in the active keymap.
    #[default]
    Noop,

    // === Application Control ===
    /// Exit the application.
    Quit,
    /// Toggle the help popup.
    HelpPopup,
    /// Close the current popup or cancel the current prompt.
    Dismiss,
    /// Reload data for the focused view.
    Refresh,

    // === Connections ===
    /// Open the selected connection.
    Connect,
    /// Try the selected connection without opening it.
    TestConnection,
    /// Create a new connection record.
    NewConnection,
    /// Edit the selected connection record.
    EditConnection,
    /// Delete the selected connection record.
    DeleteConnection,
    /// Return to the connection list.
    GotoConnections,

    // === Navigation ===
    /// Move selection up.
    MoveUp,
    /// Move selection down.
    MoveDown,
    /// Move selection left.
    MoveLeft,
    /// Move selection right.
    MoveRight,
    /// Jump to the first row.
    GotoTop,
    /// Jump to the last row.
    GotoBottom,
    /// Jump to the first column.
    GotoStart,
    /// Jump to the last column.
    GotoEnd,
    /// Show the next page of results.
    PageNext,
    /// Show the previous page of results.
    PagePrev,
    /// Open the selected item.
    Select,
    /// Start an incremental search.
    Search,

    // === Focus & Tabs ===
    /// Focus the database tree.
    FocusTree,
    /// Focus the results table.
    FocusTable,
    /// Show or hide the record sidebar.
    ToggleSidebar,
    /// Show or hide the SQL editor.
    ToggleEditor,
    /// Leave the SQL editor without closing it.
    UnfocusEditor,
    /// Switch to the next tab.
    NextTab,
    /// Switch to the previous tab.
    PreviousTab,
    /// Close the current tab.
    CloseTab,

    // === Table Editing ===
    /// Sort by the selected column, ascending.
    SortAsc,
    /// Sort by the selected column, descending.
    SortDesc,
    /// Edit the selected cell.
    Edit,
    /// Mark the selected row for deletion.
    Delete,
    /// Append an empty row.
    AppendNewRow,
    /// Copy the selected cell value.
    Copy,
    /// Commit pending changes.
    Save,

    // === Editor ===
    /// Run the query in the editor.
    Execute,
}

impl Command {
    /// Returns `true` for the reserved [`Command::Noop`] sentinel.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        matches!(self, Self::Noop)
    }

    /// Returns `true` if this command would exit the application.
    #[must_use]
    pub const fn is_exit(&self) -> bool {
        matches!(self, Self::Quit)
    }

    /// Returns `true` if this command only moves the selection or focus.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::MoveUp
                | Self::MoveDown
                | Self::MoveLeft
                | Self::MoveRight
                | Self::GotoTop
                | Self::GotoBottom
                | Self::GotoStart
                | Self::GotoEnd
                | Self::PageNext
                | Self::PagePrev
                | Self::FocusTree
                | Self::FocusTable
                | Self::NextTab
                | Self::PreviousTab
        )
    }

    /// Returns the textual name of the command.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

// ============================================================================
// Tests
// ============================================================================
