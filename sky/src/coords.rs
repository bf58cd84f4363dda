//! Spherical helpers and formatting for the info panel.
//!
//! Frame conversion stays in the engine; these are the small pure pieces the
//! engine also exposes (`c2s`, `anp`, `anpm`), reimplemented so formatting
//! can be tested without it.

use std::f64::consts::{PI, TAU};

use crate::consts::AU_PER_PARSEC;

#[cfg(test)]
#[path = "coords_test.rs"]
mod coords_test;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Cartesian to spherical: `(longitude, latitude)` in radians.
#[must_use]
pub fn c2s(v: [f64; 3]) -> (f64, f64) {
    let [x, y, z] = v;
    let d2 = x * x + y * y;
    let theta = if d2 == 0.0 { 0.0 } else { y.atan2(x) };
    let phi = if z == 0.0 { 0.0 } else { z.atan2(d2.sqrt()) };
    (theta, phi)
}

/// Normalize an angle into `[0, 2π)`.
#[must_use]
pub fn anp(a: f64) -> f64 {
    let w = a % TAU;
    if w < 0.0 { w + TAU } else { w }
}

/// Normalize an angle into `[-π, π)`.
#[must_use]
pub fn anpm(a: f64) -> f64 {
    let mut w = a % TAU;
    if w.abs() >= PI {
        w -= TAU.copysign(a);
    }
    w
}

/// Split a non-negative quantity into whole units and whole sixtieths.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn sexagesimal(value: f64) -> (u32, u32) {
    let total = (value * 60.0 + 1e-9).floor().max(0.0) as u32;
    (total / 60, total % 60)
}

/// Right ascension as `HHh MMm`.
#[must_use]
pub fn format_ra(ra_rad: f64) -> String {
    let hours = anp(ra_rad) * 12.0 / PI;
    let (mut h, m) = sexagesimal(hours);
    if h * 60 + m >= MINUTES_PER_DAY {
        h = 0;
    }
    format!("{h:02}h {m:02}m")
}

/// Declination as `±DD° MM'`.
#[must_use]
pub fn format_dec(dec_rad: f64) -> String {
    let deg = anpm(dec_rad).to_degrees();
    let sign = if deg >= 0.0 { '+' } else { '-' };
    let (d, m) = sexagesimal(deg.abs());
    format!("{sign}{d:02}° {m:02}'")
}

/// Distance in parsecs, bucketed into kpc, pc or AU by magnitude.
#[must_use]
pub fn format_distance(parsecs: f64) -> String {
    if parsecs > 1000.0 {
        format!("{:.1} kpc", parsecs / 1000.0)
    } else if parsecs > 1.0 {
        format!("{parsecs:.1} pc")
    } else {
        format!("{:.0} AU", parsecs * AU_PER_PARSEC)
    }
}

#[must_use]
pub fn format_magnitude(vmag: f64) -> String {
    format!("{vmag:.2}")
}
