//! Graphics settings
//!
//! Window resolution presets, cycled with F2.

use std::fmt;
use std::str::FromStr;

/// Presets offered in the resolution menu, as "WxH" strings
pub const RESOLUTION_PRESETS: [&str; 4] = ["800x600", "1024x768", "1280x720", "1920x1080"];

/// A window size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// All presets, in menu order
    pub fn presets() -> Vec<Resolution> {
        RESOLUTION_PRESETS
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect()
    }

    /// The preset after the one matching `current`, wrapping around.
    /// A non-preset size goes to the first preset.
    pub fn next_preset(current: Resolution) -> Resolution {
        let presets = Self::presets();
        let next = presets
            .iter()
            .position(|r| *r == current)
            .map(|i| (i + 1) % presets.len())
            .unwrap_or(0);
        presets.get(next).copied().unwrap_or(current)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Failure to parse a "WxH" string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionParseError {
    /// No 'x' separator
    MissingSeparator(String),
    /// Width or height isn't a positive integer
    BadDimension(String),
}

impl fmt::Display for ResolutionParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionParseError::MissingSeparator(s) => write!(f, "expected WxH, got '{}'", s),
            ResolutionParseError::BadDimension(s) => write!(f, "bad dimension '{}'", s),
        }
    }
}

impl std::error::Error for ResolutionParseError {}

impl FromStr for Resolution {
    type Err = ResolutionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(|| ResolutionParseError::MissingSeparator(s.to_string()))?;
        let parse = |part: &str| -> Result<u32, ResolutionParseError> {
            match part.trim().parse::<u32>() {
                Ok(v) if v > 0 => Ok(v),
                _ => Err(ResolutionParseError::BadDimension(part.to_string())),
            }
        };
        Ok(Resolution::new(parse(w)?, parse(h)?))
    }
}
