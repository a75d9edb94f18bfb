//! Aggregate statistics over the filtered subset.

#![allow(clippy::cast_precision_loss)]

use crate::core::errors::{Result, RockrError};
use crate::loader::model::Band;

/// Aggregates computed in one pass over the qualifying subset.
///
/// `average_rating` stays an `f64` here; it is rendered to two decimals
/// only when the report document is assembled.
#[derive(Debug, Clone, PartialEq)]
pub struct SubsetStats {
    /// Number of qualifying bands.
    pub count: usize,
    /// Sum of album counts across the subset.
    pub total_albums: u64,
    /// Mean rating across the subset.
    pub average_rating: f64,
    /// Subset member with the maximum album count; first occurrence wins ties.
    pub most_prolific: Band,
}

/// Compute count, album total, average rating, and the most prolific band.
///
/// An empty subset is an explicit [`RockrError::NoQualifyingRecords`] —
/// never a NaN average or a panicking reduction. `threshold` is carried
/// only for the error message; the subset is assumed already filtered.
pub fn aggregate(subset: &[Band], threshold: f64) -> Result<SubsetStats> {
    let Some(first) = subset.first() else {
        return Err(RockrError::NoQualifyingRecords { threshold });
    };

    let total_albums = subset.iter().map(|b| u64::from(b.albums)).sum();
    let rating_sum: f64 = subset.iter().map(|b| b.rating).sum();

    // Strictly-greater fold seeded with the first member: on ties the
    // earliest band in subset order is kept.
    let most_prolific = subset
        .iter()
        .fold(first, |max, band| {
            if band.albums > max.albums { band } else { max }
        })
        .clone();

    Ok(SubsetStats {
        count: subset.len(),
        total_albums,
        average_rating: rating_sum / subset.len() as f64,
        most_prolific,
    })
}
