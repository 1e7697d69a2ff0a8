//! Rating aggregation
//!
//! Reduces the raw rating event stream to a mean star value per dapp and
//! merges those means into the dapp records.

use serde::Serialize;
use std::collections::HashMap;

use super::types::{DappData, DappId, DappRating, RatingsMap};

/// Running total of the rating events seen for one dapp
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RatingSummary {
    /// Number of rating events
    pub count: u64,
    /// Sum of star values
    pub total: u64,
}

impl RatingSummary {
    fn record(&mut self, star_rating: u32) {
        self.count += 1;
        self.total += u64::from(star_rating);
    }

    /// Mean star value, 0 when no events were recorded
    pub fn average(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total as f64 / self.count as f64
        }
    }
}

/// Group rating events by dapp id and total them
pub fn summarize_ratings(events: &[DappRating]) -> HashMap<DappId, RatingSummary> {
    let mut summaries: HashMap<DappId, RatingSummary> = HashMap::new();

    for event in events {
        summaries
            .entry(event.dapp_id.clone())
            .or_default()
            .record(event.star_rating);
    }

    summaries
}

/// Compute the mean star value per dapp
///
/// Dapps without any rating events get no entry.
pub fn compute_average_ratings(events: &[DappRating]) -> RatingsMap {
    summarize_ratings(events)
        .into_iter()
        .map(|(id, summary)| (id, summary.average()))
        .collect()
}

/// Attach averages to the dapp records, 0 for dapps missing from the map
pub fn apply_ratings(dapps: Vec<DappData>, ratings: &RatingsMap) -> Vec<DappData> {
    dapps
        .into_iter()
        .map(|mut dapp| {
            dapp.average_rating = ratings.get(&dapp.dapp_id).copied().unwrap_or(0.0);
            dapp
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_events() {
        assert!(compute_average_ratings(&[]).is_empty());
    }

    #[test]
    fn test_average_is_arithmetic_mean() {
        let events = vec![
            DappRating::new("1", 5),
            DappRating::new("1", 3),
            DappRating::new("2", 1),
            DappRating::new("1", 4),
            DappRating::new("2", 2),
        ];

        let averages = compute_average_ratings(&events);
        assert_eq!(averages.len(), 2);
        assert_eq!(averages[&DappId::from("1")], 4.0);
        assert_eq!(averages[&DappId::from("2")], 1.5);
    }

    #[test]
    fn test_merge_defaults_unrated_to_zero() {
        let dapps = vec![DappData::new("1", "Foo"), DappData::new("2", "Bar")];
        let events = vec![DappRating::new("1", 5), DappRating::new("1", 3)];

        let merged = apply_ratings(dapps, &compute_average_ratings(&events));
        assert_eq!(merged[0].average_rating, 4.0);
        assert_eq!(merged[1].average_rating, 0.0);
    }

    #[test]
    fn test_merge_overwrites_stale_rating() {
        let dapps = vec![DappData::new("1", "Foo").average_rating(2.0)];
        let merged = apply_ratings(dapps, &RatingsMap::new());
        assert_eq!(merged[0].average_rating, 0.0);
    }

    #[test]
    fn test_summary_counts() {
        let events = vec![DappRating::new("9", 5), DappRating::new("9", 2)];
        let summaries = summarize_ratings(&events);
        let summary = summaries[&DappId::from("9")];
        assert_eq!(summary.count, 2);
        assert_eq!(summary.total, 7);
        assert_eq!(summary.average(), 3.5);
    }

    #[test]
    fn test_summary_default_average() {
        assert_eq!(RatingSummary::default().average(), 0.0);
    }
}
