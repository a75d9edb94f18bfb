//! Rating-threshold filter over the loaded band collection.

use crate::loader::model::Band;

/// Bands with `rating >= threshold`, original relative order preserved.
///
/// Pure function; the input collection is left untouched.
#[must_use]
pub fn filter_by_rating(bands: &[Band], threshold: f64) -> Vec<Band> {
    bands
        .iter()
        .filter(|band| band.rating >= threshold)
        .cloned()
        .collect()
}
