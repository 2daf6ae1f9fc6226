//! Unit tests for the series aggregator.

use super::*;
use crate::investments::ActualPoint;
use crate::projection::{simulate, InvestmentPoint};
use chrono::NaiveDate;

fn actual(date: &str, total_value: f64, total_returns: f64, pct: f64) -> ActualPoint {
    ActualPoint {
        date: date.to_string(),
        total_returns,
        total_value,
        total_return_percentage: pct,
        id: format!("id-{}", date),
    }
}

fn sample_actual() -> Vec<ActualPoint> {
    vec![
        actual("2024-07-01", 1.1, 0.0, 0.0),
        actual("2024-08-01T00:00:00.000Z", 1.15, 0.031234, 2.84),
        actual("2024-09-01", 1.21, 0.0789, 6.98),
    ]
}

fn sample_projected() -> Vec<InvestmentPoint> {
    let start = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
    simulate(start, 1.10e7, 25.0, 2e5, 1, 9125).unwrap()
}

#[test]
fn test_empty_actual_series_gives_empty_chart() {
    let projected = sample_projected();
    let chart = build_net_worth_chart(&[], Some(&projected)).unwrap();
    assert!(chart.labels.is_empty());
    assert!(chart.datasets.is_empty());
    assert!(chart.is_empty());

    let json = serde_json::to_value(&chart).unwrap();
    assert_eq!(json, serde_json::json!({ "labels": [], "datasets": [] }));
}

#[test]
fn test_single_series_chart() {
    let chart = build_net_worth_chart(&sample_actual(), None).unwrap();
    assert_eq!(chart.labels, vec!["01/Jul/2024", "01/Aug/2024", "01/Sep/2024"]);
    assert_eq!(chart.datasets.len(), 1);
    assert_eq!(chart.datasets[0].label, TOTAL_AMOUNT_LABEL);
    assert_eq!(chart.datasets[0].data, vec![1.1, 1.15, 1.21]);
}

#[test]
fn test_dual_series_chart_aligns_by_position() {
    let projected = sample_projected();
    let chart = build_net_worth_chart(&sample_actual(), Some(&projected)).unwrap();

    assert_eq!(chart.datasets.len(), 2);
    let overlay = chart.dataset(PREDICTED_AMOUNT_LABEL).unwrap();
    assert_eq!(overlay.data.len(), 3);
    // Positional: the first three projected days, not the actual dates
    assert_eq!(overlay.data[0], projected[0].value / 10_000_000.0);
    assert_eq!(overlay.data[2], projected[2].value / 10_000_000.0);
}

#[test]
fn test_overlay_shorter_than_labels_is_not_padded() {
    let projected = &sample_projected()[..2];
    let chart = build_net_worth_chart(&sample_actual(), Some(projected)).unwrap();
    assert_eq!(chart.labels.len(), 3);
    assert_eq!(chart.dataset(PREDICTED_AMOUNT_LABEL).unwrap().data.len(), 2);
}

#[test]
fn test_unparseable_actual_date_is_an_error() {
    let series = vec![actual("01-07-2024", 1.0, 0.0, 0.0)];
    assert!(build_net_worth_chart(&series, None).is_err());
    assert!(build_percentage_chart(&series).is_err());
}

#[test]
fn test_tooltip_for_total_amount() {
    let projected = sample_projected();
    let entry = resolve_tooltip(&sample_actual(), &projected, TOTAL_AMOUNT_LABEL, 1)
        .unwrap()
        .unwrap();
    assert_eq!(
        entry,
        TooltipEntry::Actual {
            total_value: 1.15,
            net_pl: 0.03,
            net_pl_percent: 2.84,
        }
    );
    assert_eq!(
        entry.lines(),
        vec![
            "Total Amount: 1.15 Crores",
            "Net PL Amount: 0.03 Crores",
            "Net PL Percentage: 2.84",
        ]
    );
}

#[test]
fn test_tooltip_for_other_dataset_reads_projection() {
    let projected = sample_projected();
    let entry = resolve_tooltip(&sample_actual(), &projected, PREDICTED_AMOUNT_LABEL, 2)
        .unwrap()
        .unwrap();
    assert_eq!(
        entry,
        TooltipEntry::Projected {
            value: projected[2].value / 10_000_000.0
        }
    );
    assert_eq!(entry.lines().len(), 1);
}

#[test]
fn test_tooltip_index_out_of_range() {
    let projected = sample_projected();
    assert!(resolve_tooltip(&sample_actual(), &projected, TOTAL_AMOUNT_LABEL, 3)
        .unwrap()
        .is_none());
    assert!(resolve_tooltip(&[], &[], PREDICTED_AMOUNT_LABEL, 0)
        .unwrap()
        .is_none());
}

#[test]
fn test_tooltip_is_positional_beyond_actual_length() {
    // The projected series is much longer than the actual one; indexes past
    // the actual series still resolve on the overlay
    let projected = sample_projected();
    let entry = resolve_tooltip(&sample_actual(), &projected, "anything", 100).unwrap();
    assert!(entry.is_some());
}

#[test]
fn test_percentage_chart() {
    let chart = build_percentage_chart(&sample_actual()).unwrap();
    assert_eq!(chart.labels.len(), 3);
    assert_eq!(chart.datasets.len(), 1);
    assert_eq!(chart.datasets[0].label, NET_PERCENTAGE_LABEL);
    assert_eq!(chart.datasets[0].data, vec![0.0, 2.84, 6.98]);

    assert!(build_percentage_chart(&[]).unwrap().is_empty());
}

#[test]
fn test_prediction_chart() {
    let projected = sample_projected();
    let chart = build_prediction_chart(&projected);
    assert_eq!(chart.labels.len(), projected.len());
    assert_eq!(chart.labels[0], "02/Jul/2024");
    assert_eq!(chart.datasets[0].label, NET_VALUE_LABEL);
    assert_eq!(chart.datasets[0].data[0], projected[0].value / 10_000_000.0);

    assert!(build_prediction_chart(&[]).is_empty());
}

#[test]
fn test_tooltip_serializes_with_kind_tag() {
    let entry = TooltipEntry::Actual {
        total_value: 1.0,
        net_pl: 0.1,
        net_pl_percent: 10.0,
    };
    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["kind"], "actual");
    assert_eq!(json["netPl"], 0.1);
    assert_eq!(json["netPlPercent"], 10.0);
}
