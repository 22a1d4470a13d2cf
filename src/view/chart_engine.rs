//! Chart projection engine
//!
//! Classifies result columns into measures and categories, decides which
//! chart types the data can support, and produces chart-ready series
//! (grouped sums or paired coordinates). Heavy work happens here rather
//! than in the render path, and it is redone from scratch for every page
//! of data; classifications are never reused across result sets.

use crate::constants::{GROUP_LABEL_MAX_CHARS, PIE_MAX_SLICES};
use crate::types::{ChartType, ResultSet};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

/// How a column participates in chart projection
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ColumnClass {
    /// Every value reads as a finite number and the name is not
    /// identifier-like; usable as a measure
    Numeric,
    /// Every value reads as a calendar date; excluded from both the
    /// measure and category buckets
    DateLike,
    /// Discrete labels
    Categorical,
}

/// One bar: a category label and its grouped sum
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BarSlice {
    pub label: String,
    pub total: f64,
}

/// One pie slice: a grouped sum plus its share of the grand total
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub total: f64,
    /// Share of the grand total, rounded to one decimal place
    pub percent: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
}

/// One scatter series: unlabeled when the data has no categorical column
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScatterGroup {
    pub label: Option<String>,
    pub points: Vec<ScatterPoint>,
}

/// Chart-ready data for one projection
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum ChartSeries {
    Bar(Vec<BarSlice>),
    Pie(Vec<PieSlice>),
    Scatter(Vec<ScatterGroup>),
}

/// Classify each column of a result for projection purposes.
///
/// A column is numeric when every row's value has a numeric view AND the
/// column name does not contain "id" (case-insensitive); identifier
/// columns are deliberately kept out of the measures. A non-numeric
/// column whose every value parses as a calendar date is date-like.
/// Everything else, including any column of an empty result, is
/// categorical.
pub fn classify(result: &ResultSet) -> Vec<ColumnClass> {
    (0..result.column_count())
        .map(|col| {
            if result.rows.is_empty() {
                return ColumnClass::Categorical;
            }
            let name = result.columns[col].name.to_lowercase();
            if !name.contains("id")
                && result.rows.iter().all(|r| r.cell(col).as_number().is_some())
            {
                ColumnClass::Numeric
            } else if result.rows.iter().all(|r| r.cell(col).as_date().is_some()) {
                ColumnClass::DateLike
            } else {
                ColumnClass::Categorical
            }
        })
        .collect()
}

/// The chart types this data can support, in fixed display order.
pub fn available_charts(result: &ResultSet, classes: &[ColumnClass]) -> Vec<ChartType> {
    let numeric_count = classes.iter().filter(|c| **c == ColumnClass::Numeric).count();
    let has_category = classes.contains(&ColumnClass::Categorical);

    let mut available = Vec::new();
    if numeric_count >= 1 && has_category {
        available.push(ChartType::Bar);

        let groups = group_totals(result, classes);
        let grand_total: f64 = groups.iter().map(|(_, total)| total).sum();
        if grand_total > 0.0 && groups.len() <= PIE_MAX_SLICES {
            available.push(ChartType::Pie);
        }
    }
    if numeric_count >= 2 {
        available.push(ChartType::Scatter);
    }
    available
}

/// Project a page of rows into a chart series.
///
/// Returns `None` for a chart type whose availability rule does not
/// hold; callers are expected to consult [`available_charts`] first. Only
/// the FIRST numeric and FIRST categorical column feed bar/pie grouping;
/// later measures are ignored.
pub fn project(
    chart_type: ChartType,
    result: &ResultSet,
    classes: &[ColumnClass],
) -> Option<ChartSeries> {
    if !available_charts(result, classes).contains(&chart_type) {
        return None;
    }

    match chart_type {
        ChartType::Bar => {
            let slices = group_totals(result, classes)
                .into_iter()
                .map(|(label, total)| BarSlice { label, total })
                .collect();
            Some(ChartSeries::Bar(slices))
        }
        ChartType::Pie => {
            let groups = group_totals(result, classes);
            let grand_total: f64 = groups.iter().map(|(_, total)| total).sum();
            let slices = groups
                .into_iter()
                .map(|(label, total)| PieSlice {
                    label,
                    total,
                    percent: round_one_decimal(total / grand_total * 100.0),
                })
                .collect();
            Some(ChartSeries::Pie(slices))
        }
        ChartType::Scatter => Some(ChartSeries::Scatter(scatter_groups(result, classes))),
    }
}

/// Group rows by the first categorical column, summing the first numeric
/// column per group. Labels are truncated for display. Groups come back
/// sorted by descending total, ties keeping first-appearance order.
fn group_totals(result: &ResultSet, classes: &[ColumnClass]) -> Vec<(String, f64)> {
    let (Some(category_col), Some(value_col)) = (
        first_of(classes, ColumnClass::Categorical),
        first_of(classes, ColumnClass::Numeric),
    ) else {
        return Vec::new();
    };

    let mut order: Vec<String> = Vec::new();
    let mut totals: HashMap<String, f64> = HashMap::new();
    for row in &result.rows {
        let label = truncate_label(&row.cell(category_col).display());
        let value = row.cell(value_col).as_number().unwrap_or(0.0);
        if !totals.contains_key(&label) {
            order.push(label.clone());
        }
        *totals.entry(label).or_insert(0.0) += value;
    }

    let mut groups: Vec<(String, f64)> = order
        .into_iter()
        .map(|label| {
            let total = totals[&label];
            (label, total)
        })
        .collect();
    groups.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    groups
}

/// Pair the first two numeric columns per row, partitioned into one
/// series per distinct category value when a categorical column exists.
fn scatter_groups(result: &ResultSet, classes: &[ColumnClass]) -> Vec<ScatterGroup> {
    let mut numeric = classes
        .iter()
        .enumerate()
        .filter(|(_, c)| **c == ColumnClass::Numeric)
        .map(|(i, _)| i);
    let (Some(x_col), Some(y_col)) = (numeric.next(), numeric.next()) else {
        return Vec::new();
    };
    let category_col = first_of(classes, ColumnClass::Categorical);

    let mut order: Vec<Option<String>> = Vec::new();
    let mut groups: HashMap<Option<String>, Vec<ScatterPoint>> = HashMap::new();
    for row in &result.rows {
        let (Some(x), Some(y)) = (row.cell(x_col).as_number(), row.cell(y_col).as_number())
        else {
            continue;
        };
        let label = category_col.map(|c| row.cell(c).display());
        if !groups.contains_key(&label) {
            order.push(label.clone());
        }
        groups.entry(label).or_default().push(ScatterPoint { x, y });
    }

    order
        .into_iter()
        .map(|label| {
            let points = groups.remove(&label).unwrap_or_default();
            ScatterGroup { label, points }
        })
        .collect()
}

fn first_of(classes: &[ColumnClass], wanted: ColumnClass) -> Option<usize> {
    classes.iter().position(|c| *c == wanted)
}

fn truncate_label(label: &str) -> String {
    label.chars().take(GROUP_LABEL_MAX_CHARS).collect()
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
