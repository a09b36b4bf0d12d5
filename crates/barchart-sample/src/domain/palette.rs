//! The fixed palette of bar colors offered by the control surface.

use std::fmt;
use std::str::FromStr;

use barchart_core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A bar fill color. Names match the CSS named colors of the same spelling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarColor {
    /// `#87CEEB`
    #[default]
    SkyBlue,
    /// `#FA8072`
    Salmon,
    /// `#90EE90`
    LightGreen,
    /// `#EE82EE`
    Violet,
    /// `#FFD700`
    Gold,
}

impl BarColor {
    /// Every palette entry, in the order the selector lists them.
    pub const ALL: [BarColor; 5] = [
        BarColor::SkyBlue,
        BarColor::Salmon,
        BarColor::LightGreen,
        BarColor::Violet,
        BarColor::Gold,
    ];

    /// The token used in query strings, JSON and CSS.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            BarColor::SkyBlue => "skyblue",
            BarColor::Salmon => "salmon",
            BarColor::LightGreen => "lightgreen",
            BarColor::Violet => "violet",
            BarColor::Gold => "gold",
        }
    }

    /// Red, green and blue channels.
    #[must_use]
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            BarColor::SkyBlue => (135, 206, 235),
            BarColor::Salmon => (250, 128, 114),
            BarColor::LightGreen => (144, 238, 144),
            BarColor::Violet => (238, 130, 238),
            BarColor::Gold => (255, 215, 0),
        }
    }

    /// Uppercase `#RRGGBB` form.
    #[must_use]
    pub fn hex(self) -> String {
        let (r, g, b) = self.rgb();
        format!("#{r:02X}{g:02X}{b:02X}")
    }
}

impl fmt::Display for BarColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BarColor {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BarColor::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::Validation(format!("unknown bar color: {s}")))
    }
}
