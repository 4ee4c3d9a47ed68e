#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    FocusNext,
    FocusPrev,
    ToggleHelp,

    InputChar(char),
    Backspace,
    ClearInput,
    Submit,
    Clear,

    ToggleFavorite,
    ListUp,
    ListDown,
    OpenSelected,
    RemoveSelected,

    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,

    Resize,
}
