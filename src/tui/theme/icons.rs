//! Nerd Font icons for TUI display
//! Requires a Nerd Font to be installed (https://www.nerdfonts.com)

#[derive(Debug, Clone)]
pub struct Icons {
    pub artist: &'static str,
    pub music: &'static str,
    pub lyrics: &'static str,
    pub help: &'static str,

    pub star: &'static str,
    pub star_empty: &'static str,

    pub success: &'static str,
    pub error: &'static str,
    pub info: &'static str,

    pub selected: &'static str,
}

impl Icons {
    pub const fn nerd() -> Self {
        Self {
            artist: "\u{f007}",     // nf-fa-user
            music: "\u{f001}",      // nf-fa-music
            lyrics: "\u{f15c}",     // nf-fa-file_text_o
            help: "\u{f059}",       // nf-fa-question_circle

            star: "\u{f005}",       // nf-fa-star
            star_empty: "\u{f006}", // nf-fa-star_o

            success: "\u{f00c}",    // nf-fa-check
            error: "\u{f00d}",      // nf-fa-times
            info: "\u{f05a}",       // nf-fa-info_circle

            selected: "\u{f054}",   // nf-fa-chevron_right
        }
    }
}

impl Default for Icons {
    fn default() -> Self {
        Self::nerd()
    }
}

/// Loading spinner frames
pub struct LoadingSpinner;

impl LoadingSpinner {
    /// Braille-based smooth spinner
    pub const BRAILLE: [&'static str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

    pub fn frame(tick: u64) -> &'static str {
        Self::BRAILLE[tick as usize % Self::BRAILLE.len()]
    }
}
