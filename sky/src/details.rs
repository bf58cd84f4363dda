//! Detail rows for the selected-object panel.
//!
//! Every row except "Type" is optional. A missing accessor, a non-finite
//! number or a failed frame conversion drops that one row and nothing else.

use crate::coords::{c2s, format_dec, format_distance, format_magnitude, format_ra};
use crate::engine::SkyEngine;
use crate::object::ObjectSnapshot;

#[cfg(test)]
#[path = "details_test.rs"]
mod details_test;

/// One key/value row in the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detail {
    pub key: &'static str,
    pub value: String,
}

impl Detail {
    fn new(key: &'static str, value: impl Into<String>) -> Self {
        Self { key, value: value.into() }
    }
}

/// Build the panel rows for `obj`, using `engine` only for frame conversion.
pub fn object_details<E: SkyEngine + ?Sized>(obj: &ObjectSnapshot, engine: &E) -> Vec<Detail> {
    let kind = obj.kind();
    let mut rows = vec![Detail::new("Type", kind.label())];

    if kind.has_magnitude() {
        if let Some(vmag) = obj.vmag.filter(|v| v.is_finite()) {
            rows.push(Detail::new("Magnitude", format_magnitude(vmag)));
        }
    }

    if kind.has_position() {
        if let Some((ra, dec)) = obj.radec.and_then(|v| engine.icrf_to_cirs(v)).map(c2s) {
            rows.push(Detail::new("Right Ascension", format_ra(ra)));
            rows.push(Detail::new("Declination", format_dec(dec)));
        }
    }

    if let Some(distance) = obj.distance.filter(|d| d.is_finite()) {
        rows.push(Detail::new("Distance", format_distance(distance)));
    }

    if let Some(constellation) = obj.constellation.as_deref().filter(|c| !c.is_empty()) {
        rows.push(Detail::new("Constellation", constellation));
    }

    let alternates = obj.alternate_names();
    if !alternates.is_empty() {
        rows.push(Detail::new("Also Known As", alternates.join(", ")));
    }

    rows
}
