//! Report assembly: timestamp, banner, display subset, statistics block.
//!
//! JSON field names are camelCase because downstream consumers of the
//! report artifact expect the established schema
//! (`legendaryBands`, `totalLegendaryBands`, …).

use serde::{Deserialize, Serialize};

use crate::core::clock::Clock;
use crate::loader::model::Band;
use crate::report::aggregate::SubsetStats;

/// Fixed celebratory banner carried in every report.
pub const REPORT_MESSAGE: &str = "🎸 IN ROCK WE TRUST! 🤘";

/// Display form of a qualifying band: selected fields only, rating
/// rendered as `"<value>/10"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandSummary {
    /// Band name.
    pub name: String,
    /// Genre label.
    pub genre: String,
    /// Number of released albums.
    pub albums: u32,
    /// Rating as a `"<value>/10"` display string.
    pub rating: String,
}

/// The statistics block of the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportStatistics {
    /// Subset size; always equals the length of `legendaryBands`.
    pub total_legendary_bands: usize,
    /// Album count summed over the subset.
    pub total_albums: u64,
    /// Mean rating rendered to two decimals, e.g. `"9.00"`.
    pub average_rating: String,
    /// `"<name> with <n> albums"` for the most prolific subset member.
    pub most_prolific_band: String,
}

/// The generated output document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// UTC generation time, RFC 3339 with millisecond precision.
    pub timestamp: String,
    /// Always [`REPORT_MESSAGE`].
    pub message: String,
    /// Display form of the filtered subset, input order preserved.
    pub legendary_bands: Vec<BandSummary>,
    /// Aggregate statistics consistent with `legendary_bands`.
    pub statistics: ReportStatistics,
}

/// Assemble the report document from the subset and its statistics.
pub fn build_report(subset: &[Band], stats: &SubsetStats, clock: &dyn Clock) -> Report {
    Report {
        timestamp: clock.timestamp(),
        message: REPORT_MESSAGE.to_string(),
        legendary_bands: subset.iter().map(band_summary).collect(),
        statistics: ReportStatistics {
            total_legendary_bands: stats.count,
            total_albums: stats.total_albums,
            average_rating: format!("{:.2}", stats.average_rating),
            most_prolific_band: format!(
                "{} with {} albums",
                stats.most_prolific.name, stats.most_prolific.albums
            ),
        },
    }
}

fn band_summary(band: &Band) -> BandSummary {
    BandSummary {
        name: band.name.clone(),
        genre: band.genre.clone(),
        albums: band.albums,
        // f64 Display drops a zero fraction: 9.0 -> "9/10", 8.5 -> "8.5/10".
        rating: format!("{}/10", band.rating),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use crate::report::aggregate::aggregate;

    fn band(name: &str, genre: &str, albums: u32, rating: f64) -> Band {
        Band {
            name: name.to_string(),
            genre: genre.to_string(),
            albums,
            rating,
        }
    }

    fn fixed_clock() -> FixedClock {
        FixedClock::from_rfc3339("2026-08-06T12:00:00Z").expect("valid timestamp")
    }

    #[test]
    fn legendary_scenario_produces_expected_report() {
        // Input {bands:[A(rating 9, albums 5), B(rating 8, albums 10)]},
        // threshold 9 -> only A qualifies.
        let subset = vec![band("A", "x", 5, 9.0)];
        let stats = aggregate(&subset, 9.0).expect("non-empty subset");
        let report = build_report(&subset, &stats, &fixed_clock());

        assert_eq!(report.timestamp, "2026-08-06T12:00:00.000Z");
        assert_eq!(report.message, REPORT_MESSAGE);
        assert_eq!(report.legendary_bands.len(), 1);
        assert_eq!(report.legendary_bands[0].name, "A");
        assert_eq!(report.legendary_bands[0].rating, "9/10");
        assert_eq!(report.statistics.total_legendary_bands, 1);
        assert_eq!(report.statistics.total_albums, 5);
        assert_eq!(report.statistics.average_rating, "9.00");
        assert_eq!(report.statistics.most_prolific_band, "A with 5 albums");
    }

    #[test]
    fn fractional_ratings_keep_their_fraction_in_display() {
        let subset = vec![band("A", "x", 3, 8.5), band("B", "y", 7, 9.25)];
        let stats = aggregate(&subset, 8.0).expect("non-empty subset");
        let report = build_report(&subset, &stats, &fixed_clock());

        assert_eq!(report.legendary_bands[0].rating, "8.5/10");
        assert_eq!(report.legendary_bands[1].rating, "9.25/10");
        assert_eq!(report.statistics.average_rating, "8.88"); // (8.5+9.25)/2 = 8.875
    }

    #[test]
    fn statistics_consistent_with_subset() {
        let subset = vec![
            band("A", "x", 9, 9.5),
            band("B", "y", 19, 9.0),
            band("C", "z", 4, 10.0),
        ];
        let stats = aggregate(&subset, 9.0).expect("non-empty subset");
        let report = build_report(&subset, &stats, &fixed_clock());

        assert_eq!(
            report.statistics.total_legendary_bands,
            report.legendary_bands.len()
        );
        assert_eq!(report.statistics.most_prolific_band, "B with 19 albums");
    }

    #[test]
    fn serialized_keys_are_camel_case() {
        let subset = vec![band("A", "x", 5, 9.0)];
        let stats = aggregate(&subset, 9.0).expect("non-empty subset");
        let report = build_report(&subset, &stats, &fixed_clock());

        let json = serde_json::to_string_pretty(&report).expect("report serializes");
        assert!(json.contains("\"legendaryBands\""));
        assert!(json.contains("\"totalLegendaryBands\""));
        assert!(json.contains("\"totalAlbums\""));
        assert!(json.contains("\"averageRating\""));
        assert!(json.contains("\"mostProlificBand\""));
    }

    #[test]
    fn report_round_trips_through_json() {
        let subset = vec![band("A", "x", 5, 9.0), band("B", "y", 7, 9.5)];
        let stats = aggregate(&subset, 9.0).expect("non-empty subset");
        let report = build_report(&subset, &stats, &fixed_clock());

        let json = serde_json::to_string_pretty(&report).expect("report serializes");
        let parsed: Report = serde_json::from_str(&json).expect("report parses back");
        assert_eq!(parsed, report);
    }
}
