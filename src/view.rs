use crate::models::{RatingEntry, Summary};
use crate::stats::{sort_and_filter, summarize};
use crate::storage::{KeyValueStore, RatingsStore};

pub const EXPORT_FILENAME: &str = "daily-ratings.csv";
pub const EMPTY_CHART_MESSAGE: &str = "No ratings yet. Save one to see the chart.";

const MAX_RATING: f64 = 5.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub date: String,
    pub rating: f64,
    pub fill: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Visualization {
    Empty { message: String },
    Chart { summary_line: String, bars: Vec<Bar> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub filename: String,
    pub content: String,
}

pub fn render_visualization<S: KeyValueStore>(store: &RatingsStore<S>) -> Visualization {
    let entries = sort_and_filter(&store.load());
    if entries.is_empty() {
        return Visualization::Empty {
            message: EMPTY_CHART_MESSAGE.to_string(),
        };
    }

    let summary = summarize(&entries);
    let bars = entries
        .into_iter()
        .map(|entry| Bar {
            fill: bar_fill(entry.rating),
            date: entry.date,
            rating: entry.rating,
        })
        .collect();

    Visualization::Chart {
        summary_line: summary_line(&summary),
        bars,
    }
}

pub fn export_csv<S: KeyValueStore>(store: &RatingsStore<S>) -> Option<CsvExport> {
    let entries = sort_and_filter(&store.load());
    if entries.is_empty() {
        return None;
    }

    Some(CsvExport {
        filename: EXPORT_FILENAME.to_string(),
        content: build_csv(&entries),
    })
}

pub fn build_csv(entries: &[RatingEntry]) -> String {
    let mut lines = Vec::with_capacity(entries.len() + 1);
    lines.push("date,rating".to_string());
    lines.extend(
        entries
            .iter()
            .map(|entry| format!("{},{}", entry.date, entry.rating)),
    );
    lines.join("\n")
}

pub fn bar_fill(rating: f64) -> f64 {
    rating.clamp(0.0, MAX_RATING) / MAX_RATING
}

pub fn summary_line(summary: &Summary) -> String {
    let days = if summary.count == 1 { "day" } else { "days" };
    match summary.average {
        Some(average) => format!(
            "Average {average:.1} across {} {days}.",
            summary.count
        ),
        None => format!("No average yet across {} {days}.", summary.count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RatingsMap;
    use crate::storage::MemoryStore;
    use serde_json::json;

    fn store_with(pairs: &[(&str, serde_json::Value)]) -> RatingsStore<MemoryStore> {
        let mut store = RatingsStore::new(MemoryStore::new());
        let map: RatingsMap = pairs
            .iter()
            .map(|(date, value)| (date.to_string(), value.clone()))
            .collect();
        store.save(&map).unwrap();
        store
    }

    #[test]
    fn empty_store_shows_placeholder() {
        let store = RatingsStore::new(MemoryStore::new());
        assert_eq!(
            render_visualization(&store),
            Visualization::Empty {
                message: EMPTY_CHART_MESSAGE.to_string()
            }
        );
    }

    #[test]
    fn chart_has_one_bar_per_entry() {
        let store = store_with(&[
            ("2024-01-02", json!(4)),
            ("2024-01-01", json!(5)),
            ("2024-01-03", json!(2)),
        ]);

        let Visualization::Chart { summary_line, bars } = render_visualization(&store) else {
            panic!("expected a chart");
        };
        assert_eq!(summary_line, "Average 3.7 across 3 days.");
        let dates: Vec<_> = bars.iter().map(|bar| bar.date.as_str()).collect();
        assert_eq!(dates, ["2024-01-01", "2024-01-02", "2024-01-03"]);
        assert_eq!(bars[0].fill, 1.0);
        assert_eq!(bars[2].fill, 0.4);
    }

    #[test]
    fn bar_fill_is_clamped() {
        assert_eq!(bar_fill(9.0), 1.0);
        assert_eq!(bar_fill(-2.0), 0.0);
        assert_eq!(bar_fill(2.5), 0.5);
    }

    #[test]
    fn export_empty_is_none() {
        let store = store_with(&[("junk", json!("abc"))]);
        assert_eq!(export_csv(&store), None);
    }

    #[test]
    fn export_lists_sorted_rows() {
        let store = store_with(&[("2024-02-01", json!("3")), ("2024-01-31", json!(1))]);
        let export = export_csv(&store).unwrap();
        assert_eq!(export.filename, "daily-ratings.csv");
        assert_eq!(export.content, "date,rating\n2024-01-31,1\n2024-02-01,3");
    }

    #[test]
    fn summary_line_singular() {
        let summary = Summary {
            average: Some(4.0),
            count: 1,
        };
        assert_eq!(summary_line(&summary), "Average 4.0 across 1 day.");
    }
}
