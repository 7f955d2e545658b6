use super::{daily_totals, SalesDataset, SalesView};

use std::fs;
use std::str::FromStr;

use anyhow::Result;
use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;
use tempfile::NamedTempFile;

use crate::config::PRICE_INCREASE_DATE;
use crate::models::{NormalizedSalesRecord, Region, RegionSelector};
use crate::pipeline::PipelineError;
use crate::types::Monetary;

fn create_record(sales: &str, date: &str, region: &str) -> Result<NormalizedSalesRecord> {
    Ok(NormalizedSalesRecord {
        sales: Monetary::from_str(sales)?,
        date: date.to_string(),
        region: region.to_string()
    })
}

fn only(region: &str) -> RegionSelector {
    RegionSelector::Only(region.to_string())
}

fn date(value: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(value, "%Y-%m-%d")?)
}

fn totals_as_strings(dataset: &SalesDataset, selector: &RegionSelector) -> Vec<(String, String)> {
    dataset.daily_totals(selector)
        .into_iter()
        .map(|aggregate| (aggregate.date.to_string(), aggregate.total_sales.to_string()))
        .collect()
}

#[test]
fn test_region_selector_filters_before_grouping() -> Result<()> {
    let dataset = SalesDataset::from_records(vec![
        create_record("12.00", "2021-01-10", "north")?,
        create_record("8.00", "2021-01-10", "south")?,
    ]);

    assert_eq!(totals_as_strings(&dataset, &RegionSelector::All), vec![("2021-01-10".to_string(), "20.00".to_string())]);
    assert_eq!(totals_as_strings(&dataset, &only("north")), vec![("2021-01-10".to_string(), "12.00".to_string())]);
    assert!(dataset.daily_totals(&only("east")).is_empty());

    Ok(())
}

#[test]
fn test_unknown_or_differently_cased_selector_yields_empty_result() -> Result<()> {
    let dataset = SalesDataset::from_records(vec![create_record("12.00", "2021-01-10", "north")?]);

    assert!(dataset.daily_totals(&only("North")).is_empty());
    assert!(dataset.daily_totals(&only("centre")).is_empty());

    Ok(())
}

#[test]
fn test_aggregates_are_sorted_by_date_without_zero_filling() -> Result<()> {
    let dataset = SalesDataset::from_records(vec![
        create_record("1.00", "2021-01-20", "north")?,
        create_record("2.00", "2021-01-05", "north")?,
        create_record("3.00", "2021-01-20", "west")?,
        create_record("4.00", "2020-12-31", "east")?,
    ]);

    assert_eq!(totals_as_strings(&dataset, &RegionSelector::All), vec![
        ("2020-12-31".to_string(), "4.00".to_string()),
        ("2021-01-05".to_string(), "2.00".to_string()),
        ("2021-01-20".to_string(), "4.00".to_string()),
    ]);

    Ok(())
}

#[test]
fn test_records_with_unparseable_dates_are_excluded() -> Result<()> {
    let records = vec![
        create_record("5.00", "garbage", "north")?,
        create_record("7.00", "2021-01-10", "north")?,
    ];

    let totals = daily_totals(&records, &RegionSelector::All);

    assert_eq!(totals.len(), 1);
    assert_eq!(totals[0].total_sales.to_string(), "7.00");

    Ok(())
}

#[test]
fn test_region_totals_partition_the_all_regions_total() -> Result<()> {
    let mut rng = rand::thread_rng();
    let dates = ["2021-01-13", "2021-01-14", "2021-01-15", "2021-01-16"];
    let mut records = Vec::new();

    for _ in 0..500 {
        let cents: u32 = rng.gen_range(0..100_000);
        let sales = format!("{}.{:02}", cents / 100, cents % 100);
        let date = dates.choose(&mut rng).copied().unwrap_or(dates[0]);
        let region = Region::ALL.choose(&mut rng).copied().unwrap_or(Region::North);

        records.push(create_record(&sales, date, region.as_str())?);
    }

    let dataset = SalesDataset::from_records(records);
    let all_regions = dataset.daily_totals(&RegionSelector::All);

    for aggregate in &all_regions {
        let mut partitioned = Monetary::new();

        for region in Region::ALL {
            partitioned += dataset.daily_totals(&only(region.as_str()))
                .iter()
                .find(|regional| regional.date == aggregate.date)
                .map_or(Monetary::new(), |regional| regional.total_sales);
        }

        assert_eq!(partitioned, aggregate.total_sales);
    }

    assert!(all_regions.windows(2).all(|pair| pair[0].date < pair[1].date));

    Ok(())
}

#[test]
fn test_load_reads_processed_file_and_excludes_non_numeric_sales() -> Result<()> {
    let file = NamedTempFile::new()?;
    fs::write(file.path(), "Sales,Date,Region\n12.00,2021-01-10,north\nn/a,2021-01-10,south\n8.00,2021-01-10,south\n")?;

    let dataset = SalesDataset::load(file.path())?;

    assert_eq!(dataset.len(), 2);
    assert_eq!(totals_as_strings(&dataset, &RegionSelector::All), vec![("2021-01-10".to_string(), "20.00".to_string())]);

    Ok(())
}

#[test]
fn test_load_of_missing_file_is_fatal() {
    let result = SalesDataset::load(std::path::Path::new("definitely_missing_processed_sales.csv"));

    assert!(matches!(result, Err(PipelineError::OpenInput { .. })));
}

#[test]
fn test_view_passes_reference_date_through_and_plots_totals() -> Result<()> {
    let dataset = SalesDataset::from_records(vec![
        create_record("10.00", "2021-01-14", "north")?,
        create_record("30.00", "2021-01-15", "north")?,
        create_record("50.00", "2021-01-16", "north")?,
    ]);

    let selector = only("north");
    let reference_date = date(PRICE_INCREASE_DATE)?;
    let view = SalesView::build(&dataset.daily_totals(&selector), &selector, reference_date);

    assert_eq!(view.reference_date, reference_date);
    assert_eq!(view.region, "north");
    assert_eq!(view.label, "North");
    assert_eq!(view.colour, Region::North.colour());
    assert_eq!(view.series.len(), 3);
    assert_eq!(view.series[0].date, date("2021-01-14")?);
    assert_eq!(view.series[0].sales, 10.0);

    let summary = view.price_change_summary();

    assert_eq!(summary.days_before, 1);
    assert_eq!(summary.days_after, 2);
    assert_eq!(summary.mean_before, Some(10.0));
    assert_eq!(summary.mean_after, Some(40.0));

    Ok(())
}

#[test]
fn test_empty_view_has_no_means() -> Result<()> {
    let view = SalesView::build(&[], &only("east"), date(PRICE_INCREASE_DATE)?);
    let summary = view.price_change_summary();

    assert!(view.series.is_empty());
    assert_eq!(summary.mean_before, None);
    assert_eq!(summary.mean_after, None);

    Ok(())
}

#[test]
fn test_view_serializes_for_the_chart_layer() -> Result<()> {
    let dataset = SalesDataset::from_records(vec![create_record("12.50", "2021-01-10", "west")?]);
    let view = SalesView::build(&dataset.daily_totals(&RegionSelector::All), &RegionSelector::All, date(PRICE_INCREASE_DATE)?);

    let json = serde_json::to_value(&view)?;

    assert_eq!(json["reference_date"], "2021-01-15");
    assert_eq!(json["region"], "all");
    assert_eq!(json["series"][0]["date"], "2021-01-10");
    assert_eq!(json["series"][0]["sales"], 12.5);

    Ok(())
}

#[test]
fn test_date_whose_total_overflows_is_excluded() -> Result<()> {
    let dataset = SalesDataset::from_records(vec![
        create_record("500000000000000000000000000.00", "2021-01-10", "north")?,
        create_record("500000000000000000000000000.00", "2021-01-10", "south")?,
        create_record("3.00", "2021-01-11", "north")?,
    ]);

    assert_eq!(totals_as_strings(&dataset, &RegionSelector::All), vec![("2021-01-11".to_string(), "3.00".to_string())]);
    assert_eq!(totals_as_strings(&dataset, &only("south")), vec![("2021-01-10".to_string(), "500000000000000000000000000.00".to_string())]);

    Ok(())
}
