//! Colour roles per scheme.

use crate::services::config::ColourScheme;
use crate::tui::console::Colour;

/// Foreground/background pair.
pub type ColourPair = (Colour, Colour);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub text: ColourPair,
    pub status: ColourPair,
    pub help: ColourPair,
    pub ruler: ColourPair,
    pub message: ColourPair,
    pub command: ColourPair,
    pub highlight: ColourPair,
}

impl Palette {
    pub fn for_scheme(scheme: ColourScheme) -> Self {
        match scheme {
            ColourScheme::Default => Self {
                text: (Colour::Grey, Colour::Black),
                status: (Colour::Black, Colour::Cyan),
                help: (Colour::Cyan, Colour::Black),
                ruler: (Colour::DarkGrey, Colour::Black),
                message: (Colour::Yellow, Colour::Black),
                command: (Colour::Green, Colour::Black),
                highlight: (Colour::Black, Colour::Yellow),
            },
            ColourScheme::Mono => Self {
                text: (Colour::Reset, Colour::Reset),
                status: (Colour::Black, Colour::White),
                help: (Colour::Reset, Colour::Reset),
                ruler: (Colour::Reset, Colour::Reset),
                message: (Colour::Reset, Colour::Reset),
                command: (Colour::Reset, Colour::Reset),
                highlight: (Colour::Black, Colour::White),
            },
            ColourScheme::Light => Self {
                text: (Colour::Black, Colour::White),
                status: (Colour::White, Colour::Blue),
                help: (Colour::Blue, Colour::White),
                ruler: (Colour::Grey, Colour::White),
                message: (Colour::Red, Colour::White),
                command: (Colour::Magenta, Colour::White),
                highlight: (Colour::White, Colour::Magenta),
            },
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::for_scheme(ColourScheme::Default)
    }
}
