pub mod const_table;
pub mod host;
pub mod import;
pub mod read;
pub mod write;

use std::str::FromStr;

use cgmath::Point2;
use thiserror::Error;

/// One record of the path solver's output: a time step and the positions of
/// the ring's two pins, in maze-relative `[0, 1]` coordinates.
///
/// The solver emits the path by backtracking from the goal, so records
/// usually arrive in decreasing time order. Nothing here reorders them.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Sample {
    pub time: i32,
    pub top: Point2<f32>,
    pub bottom: Point2<f32>,
}

impl Sample {
    pub fn pin(&self, pin: Pin) -> Point2<f32> {
        match pin {
            Pin::Top => self.top,
            Pin::Bottom => self.bottom,
        }
    }
}

/// Which of the ring's pins drives the curves.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Pin {
    Top,
    Bottom,
}

impl Default for Pin {
    fn default() -> Self {
        Pin::Top
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Error)]
#[error("unknown pin {0:?}, expected `top` or `bottom`")]
pub struct ParsePinError(String);

impl FromStr for Pin {
    type Err = ParsePinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match &s.to_ascii_lowercase()[..] {
            "top" => Ok(Pin::Top),
            "bottom" => Ok(Pin::Bottom),
            _ => Err(ParsePinError(s.to_string())),
        }
    }
}

#[derive(Debug, Default, PartialEq, PartialOrd, Clone, Copy)]
pub struct Keyframe {
    pub frame: i32,
    pub value: f32,
}

/// Interpolation modes the host knows about.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Interpolation {
    Constant,
    Linear,
    Bezier,
}

impl Interpolation {
    /// The host's symbolic name for the mode.
    pub fn name(self) -> &'static str {
        match self {
            Interpolation::Constant => "Constant",
            Interpolation::Linear => "Linear",
            Interpolation::Bezier => "Bezier",
        }
    }
}

/// Linear rescaling from sample steps to host frames.
///
/// The default `10 * t + 1` is what the rest of the toolchain expects; both
/// factors are plain fields so callers can pick their own pacing.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct TimeMap {
    pub scale: i32,
    pub offset: i32,
}

impl Default for TimeMap {
    fn default() -> Self {
        TimeMap {
            scale: 10,
            offset: 1,
        }
    }
}

impl TimeMap {
    pub fn frame(self, time: i32) -> i32 {
        self.scale * time + self.offset
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn frame_rescaling() {
        let map = TimeMap::default();
        assert_eq!(map.frame(3), 31);
        assert_eq!(map.frame(0), 1);
        assert_eq!(map.frame(-2), -19);

        let map = TimeMap {
            scale: 1,
            offset: 0,
        };
        assert_eq!(map.frame(7), 7);
    }

    #[test]
    fn pin_parse() {
        assert_eq!("top".parse(), Ok(Pin::Top));
        assert_eq!("Bottom".parse(), Ok(Pin::Bottom));
        assert!("middle".parse::<Pin>().is_err());
    }
}
