// SPDX-License-Identifier: MIT OR Apache-2.0
//! Easing curves and interpolation helpers.
//!
//! Curve names follow the GSAP convention used by the site's animation
//! code (`power2.out`, `sine.inOut`, ...) so timelines can be written in
//! RON by hand.

use serde::{Deserialize, Serialize};
use std::f32::consts::PI;
use std::fmt;
use std::str::FromStr;

/// Named interpolation curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "String")]
pub enum Easing {
    /// Hold the start value until the step ends
    Constant,
    /// Linear interpolation
    Linear,
    /// Quadratic ease-in
    Power1In,
    /// Quadratic ease-out
    Power1Out,
    /// Quadratic ease-in-out
    Power1InOut,
    /// Cubic ease-in
    Power2In,
    /// Cubic ease-out
    #[default]
    Power2Out,
    /// Cubic ease-in-out
    Power2InOut,
    /// Quartic ease-in
    Power3In,
    /// Quartic ease-out
    Power3Out,
    /// Quartic ease-in-out
    Power3InOut,
    /// Sinusoidal ease-in-out
    SineInOut,
    /// Ease-out that overshoots the target before settling, by the given
    /// amount
    BackOut(f32),
}

/// Overshoot of `back.out` when none is given
pub const DEFAULT_OVERSHOOT: f32 = 1.70158;

impl Easing {
    /// Every curve, in declaration order
    pub fn all() -> &'static [Easing] {
        &[
            Easing::Constant,
            Easing::Linear,
            Easing::Power1In,
            Easing::Power1Out,
            Easing::Power1InOut,
            Easing::Power2In,
            Easing::Power2Out,
            Easing::Power2InOut,
            Easing::Power3In,
            Easing::Power3Out,
            Easing::Power3InOut,
            Easing::SineInOut,
            Easing::BackOut(DEFAULT_OVERSHOOT),
        ]
    }

    /// The curve family name, without parameters
    pub fn name(&self) -> &'static str {
        match self {
            Easing::Constant => "constant",
            Easing::Linear => "linear",
            Easing::Power1In => "power1.in",
            Easing::Power1Out => "power1.out",
            Easing::Power1InOut => "power1.inOut",
            Easing::Power2In => "power2.in",
            Easing::Power2Out => "power2.out",
            Easing::Power2InOut => "power2.inOut",
            Easing::Power3In => "power3.in",
            Easing::Power3Out => "power3.out",
            Easing::Power3InOut => "power3.inOut",
            Easing::SineInOut => "sine.inOut",
            Easing::BackOut(_) => "back.out",
        }
    }

    /// Map linear progress `t` onto the curve.
    ///
    /// `t` is clamped to [0, 1]. Every curve maps 0 to 0 and 1 to 1. All
    /// but `back.out` are non-decreasing in between; `back.out` rises past
    /// 1 and comes back.
    pub fn apply(&self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Easing::Constant => {
                if t >= 1.0 {
                    1.0
                } else {
                    0.0
                }
            }
            Easing::Linear => t,
            Easing::Power1In => ease_in(t, 2),
            Easing::Power1Out => ease_out(t, 2),
            Easing::Power1InOut => ease_in_out(t, 2),
            Easing::Power2In => ease_in(t, 3),
            Easing::Power2Out => ease_out(t, 3),
            Easing::Power2InOut => ease_in_out(t, 3),
            Easing::Power3In => ease_in(t, 4),
            Easing::Power3Out => ease_out(t, 4),
            Easing::Power3InOut => ease_in_out(t, 4),
            Easing::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
            Easing::BackOut(_) if t == 0.0 => 0.0,
            &Easing::BackOut(overshoot) => {
                let p = t - 1.0;
                p * p * ((overshoot + 1.0) * p + overshoot) + 1.0
            }
        }
    }
}

fn ease_in(t: f32, power: i32) -> f32 {
    t.powi(power)
}

fn ease_out(t: f32, power: i32) -> f32 {
    1.0 - (1.0 - t).powi(power)
}

fn ease_in_out(t: f32, power: i32) -> f32 {
    if t < 0.5 {
        (2.0 * t).powi(power) / 2.0
    } else {
        1.0 - (2.0 * (1.0 - t)).powi(power) / 2.0
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Easing::BackOut(overshoot) => write!(f, "back.out({overshoot})"),
            _ => f.write_str(self.name()),
        }
    }
}

/// Unknown easing name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown easing: {0}")]
pub struct UnknownEasing(pub String);

impl FromStr for Easing {
    type Err = UnknownEasing;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // GSAP treats "none" as linear
        if s == "none" {
            return Ok(Easing::Linear);
        }
        if s == "back.out" {
            return Ok(Easing::BackOut(DEFAULT_OVERSHOOT));
        }
        if let Some(arg) = s
            .strip_prefix("back.out(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return match arg.trim().parse::<f32>() {
                Ok(overshoot) if overshoot.is_finite() && overshoot >= 0.0 => {
                    Ok(Easing::BackOut(overshoot))
                }
                _ => Err(UnknownEasing(s.to_string())),
            };
        }
        Easing::all()
            .iter()
            .copied()
            .find(|e| e.name() == s)
            .ok_or_else(|| UnknownEasing(s.to_string()))
    }
}

impl TryFrom<String> for Easing {
    type Error = UnknownEasing;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Easing> for String {
    fn from(easing: Easing) -> Self {
        easing.to_string()
    }
}

/// Interpolation utilities
pub struct Interpolation;

impl Interpolation {
    /// Linear interpolation between two floats
    pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
        a + (b - a) * t
    }
}
