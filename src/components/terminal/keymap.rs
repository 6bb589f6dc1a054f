//! Keyboard bindings of the terminal input.

/// What a key press does to the input line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Submit,
    HistoryBack,
    HistoryForward,
    Complete,
    /// Take the ghost hint if the caret is at the end
    AcceptHint,
    ClearLine,
    /// Runs `clear` as if typed
    ClearScreen,
    DismissCompletions,
}

impl KeyAction {
    /// Map a `KeyboardEvent.key` value; `None` leaves the key to the browser.
    pub fn from_key(key: &str, ctrl: bool) -> Option<Self> {
        match (key, ctrl) {
            ("Enter", _) => Some(Self::Submit),
            ("ArrowUp", _) => Some(Self::HistoryBack),
            ("ArrowDown", _) => Some(Self::HistoryForward),
            ("Tab", _) => Some(Self::Complete),
            ("ArrowRight", _) => Some(Self::AcceptHint),
            ("c", true) => Some(Self::ClearLine),
            ("l", true) => Some(Self::ClearScreen),
            ("Escape", _) => Some(Self::DismissCompletions),
            _ => None,
        }
    }

    /// Whether the browser default must be suppressed up front.
    ///
    /// `AcceptHint` decides later: the caret still has to move when there is
    /// no hint to take.
    pub fn prevents_default(self) -> bool {
        matches!(
            self,
            Self::HistoryBack | Self::HistoryForward | Self::Complete | Self::ClearScreen
        )
    }
}
