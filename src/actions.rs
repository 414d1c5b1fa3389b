//! User intents emitted by the presentation layer.
//!
//! The tab bar, selector dropdown, and keyboard handling are host-side; they
//! read deck state and hand back one of these actions per interaction.

use crate::tab::{LayoutId, TabId};

/// Actions that can be triggered from the tab bar and selector.
#[derive(Debug, Clone, PartialEq)]
pub enum TabAction {
    /// No action.
    None,

    // Tab bar intents
    /// Switch to a specific tab.
    Select(TabId),
    /// Close a specific tab.
    Close(TabId),
    /// Create a new (selector) tab.
    NewTab,
    /// Duplicate a specific tab.
    Duplicate(TabId),
    /// Lock a tab against close/rename/layout change.
    Lock(TabId),
    /// Unlock a tab.
    Unlock(TabId),
    /// Pin or unpin a tab.
    Pin(TabId, bool),
    /// Reorder a tab to a new storage index (drag-reorder landing).
    Reorder(TabId, usize),
    /// Move the active tab one slot left.
    MoveActiveLeft,
    /// Move the active tab one slot right.
    MoveActiveRight,
    /// Switch to the next tab in display order.
    NextTab,
    /// Switch to the previous tab in display order.
    PrevTab,
    /// Switch to a tab by display-order index (1-based).
    SelectIndex(usize),

    // Inline rename sub-protocol
    /// Begin renaming a tab.
    StartRename(TabId),
    /// Replace the rename buffer text.
    RenameInput(String),
    /// Commit the rename buffer.
    CommitRename,
    /// Discard the rename buffer.
    CancelRename,
    /// Direct one-shot rename (context menu path).
    Rename(TabId, String),

    // Selector intents
    /// Replace the search query.
    SearchInput(String),
    /// Open the suggestion dropdown.
    OpenDropdown,
    /// Request the dropdown to close (first phase).
    RequestCloseDropdown,
    /// Confirm a pending dropdown close (second phase).
    ConfirmCloseDropdown,
    /// Move the selection cursor up.
    CursorUp,
    /// Move the selection cursor down.
    CursorDown,
    /// Choose a layout from the suggestions.
    ChooseLayout(LayoutId),
    /// Choose a parameter preset by key.
    ChoosePreset(String),
    /// Type one character into the parameter input.
    ParamChar(char),
    /// Delete one character from the parameter input.
    ParamBackspace,
    /// Replace the parameter input wholesale.
    ParamInput(String),
    /// Enter: choose at cursor / advance / finalize, depending on mode.
    Enter,
    /// Escape: abort collection or close the dropdown.
    Escape,
}
