use crate::error::{RankError, Result};
use std::fmt;
use std::str::FromStr;

/// Number of channels a target color is split into.
pub const CHANNELS: usize = 3;

/// Widest channel group we accept. Eight hex digits still fit in a `u32`.
const MAX_GROUP_WIDTH: usize = 8;

/// Reference color every image is scored against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetColor {
    channels: [u32; CHANNELS],
}

impl TargetColor {
    pub fn new(r: u32, g: u32, b: u32) -> Self {
        Self {
            channels: [r, g, b],
        }
    }

    /// Parse a hex color such as `#BADA55`.
    ///
    /// The digits are split into three equal groups and each group is read
    /// as base 16, so `F00` is `(15, 0, 0)` and `FFFF00000000` is
    /// `(65535, 0, 0)`.
    pub fn parse(value: &str) -> Result<Self> {
        let hex = value.trim_start_matches('#');

        if hex.is_empty() {
            return Err(RankError::color(value, "no hex digits"));
        }
        if let Some(bad) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(RankError::color(
                value,
                format!("{bad:?} is not a hex digit"),
            ));
        }
        if hex.len() % CHANNELS != 0 {
            return Err(RankError::color(
                value,
                format!(
                    "{} digits do not split into {CHANNELS} equal channels",
                    hex.len()
                ),
            ));
        }

        let width = hex.len() / CHANNELS;
        if width > MAX_GROUP_WIDTH {
            return Err(RankError::color(
                value,
                format!("channels wider than {MAX_GROUP_WIDTH} digits are not supported"),
            ));
        }

        let mut channels = [0u32; CHANNELS];
        for (channel, start) in channels.iter_mut().zip((0..hex.len()).step_by(width)) {
            *channel = u32::from_str_radix(&hex[start..start + width], 16)
                .map_err(|e| RankError::color(value, e.to_string()))?;
        }

        Ok(Self { channels })
    }

    pub fn channels(&self) -> [u32; CHANNELS] {
        self.channels
    }

    /// Channels as a point in color space.
    pub fn as_point(&self) -> [f64; CHANNELS] {
        self.channels.map(f64::from)
    }
}

impl FromStr for TargetColor {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for TargetColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.channels;
        write!(f, "({r}, {g}, {b})")
    }
}
