#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Artist,
    Title,
    Favorites,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Artist => Focus::Title,
            Focus::Title => Focus::Favorites,
            Focus::Favorites => Focus::Artist,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Artist => Focus::Favorites,
            Focus::Title => Focus::Artist,
            Focus::Favorites => Focus::Title,
        }
    }

    pub fn is_input(self) -> bool {
        matches!(self, Focus::Artist | Focus::Title)
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub created_at: std::time::Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
            created_at: std::time::Instant::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
            created_at: std::time::Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > std::time::Duration::from_secs(3)
    }
}

/// Selection and scroll for the favorites pane
#[derive(Debug, Clone, Default)]
pub struct ListState {
    pub selected: usize,
    pub scroll_offset: usize,
}

impl ListState {
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    /// Keep the selection inside a list that may have shrunk.
    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
        self.scroll_offset = self.scroll_offset.min(self.selected);
    }

    pub fn update_scroll(&mut self, visible_height: usize) {
        if visible_height == 0 {
            return;
        }
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if self.selected >= self.scroll_offset + visible_height {
            self.scroll_offset = self.selected - visible_height + 1;
        }
    }
}

/// Terminal-only state; search results and favorites live in the session.
#[derive(Debug, Default)]
pub struct AppState {
    pub should_quit: bool,
    pub tick: u64,

    pub focus: Focus,
    pub artist_input: String,
    pub title_input: String,

    pub favorites_list: ListState,
    pub lyrics_scroll: u16,
    pub show_help: bool,

    pub toast: Option<Toast>,
    pub status: String,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused_input_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::Artist => Some(&mut self.artist_input),
            Focus::Title => Some(&mut self.title_input),
            Focus::Favorites => None,
        }
    }

    pub fn clear_inputs(&mut self) {
        self.artist_input.clear();
        self.title_input.clear();
        self.lyrics_scroll = 0;
        self.focus = Focus::Artist;
    }
}
