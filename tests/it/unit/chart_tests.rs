//! Chart availability rules and projection output.

use crate::helpers::{city_sales_result, dec, int, text, ResultSetBuilder};
use queryboard::{available_charts, classify, project, ChartSeries, ChartType, DataType};

#[test]
fn city_sales_offers_bar_and_pie_but_not_scatter() {
    let result = city_sales_result();
    let classes = classify(&result);
    let available = available_charts(&result, &classes);

    assert!(available.contains(&ChartType::Bar));
    assert!(available.contains(&ChartType::Pie));
    assert!(!available.contains(&ChartType::Scatter));
}

#[test]
fn identifier_columns_never_become_measures() {
    let result = ResultSetBuilder::new()
        .column("customer_id", DataType::Integer)
        .column("city", DataType::Text)
        .row(vec![int(1), text("A")])
        .row(vec![int(2), text("B")])
        .build();
    let classes = classify(&result);

    // The only numeric-looking column is identifier-like, so no charts
    assert!(available_charts(&result, &classes).is_empty());
}

#[test]
fn pie_series_snapshot() {
    let result = city_sales_result();
    let classes = classify(&result);
    let series = project(ChartType::Pie, &result, &classes).expect("pie is available");

    insta::assert_json_snapshot!(series, @r#"
    {
      "Pie": [
        {
          "label": "B",
          "total": 20.0,
          "percent": 66.7
        },
        {
          "label": "A",
          "total": 10.0,
          "percent": 33.3
        }
      ]
    }
    "#);
}

#[test]
fn pie_percentages_sum_to_one_hundred_across_shapes() {
    for group_count in [2, 3, 6, 7] {
        let mut builder = ResultSetBuilder::new()
            .column("bucket", DataType::Text)
            .column("value", DataType::Decimal);
        for i in 0..group_count {
            builder = builder.row(vec![text(&format!("g{i}")), dec(1.0)]);
        }
        let result = builder.build();
        let classes = classify(&result);

        let Some(ChartSeries::Pie(slices)) = project(ChartType::Pie, &result, &classes) else {
            panic!("pie should be available for {group_count} groups");
        };
        let sum: f64 = slices.iter().map(|s| s.percent).sum();
        assert!(
            (sum - 100.0).abs() < 0.15,
            "{group_count} groups summed to {sum}"
        );
    }
}

#[test]
fn date_columns_join_neither_bucket() {
    let result = ResultSetBuilder::new()
        .column("day", DataType::Text)
        .column("sales", DataType::Decimal)
        .row(vec![text("2021-06-01"), dec(10.0)])
        .row(vec![text("2021-06-02"), dec(20.0)])
        .build();
    let classes = classify(&result);

    // Without a categorical column there is nothing to group by
    assert!(available_charts(&result, &classes).is_empty());
}
