// ==========================================
// Pipeline integration tests
// ==========================================
// Full runs over in-memory tables: barcode fix, weekday
// lookup, split, and the row-accounting properties
// ==========================================


use chrono::NaiveDate;
use promo_orders::{
    BarcodeMap, BarcodeRewriter, PipelineConfig, PipelineError, PromoPipeline, Weekday,
};
use test_helpers::{map_table, order_table, schedule_table};

fn run_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
}

fn pipeline() -> PromoPipeline {
    PromoPipeline::new(PipelineConfig::default())
}

/// Order table with an extra quantity column after the default two
fn order_table_with_qty(rows: &[(&str, &str, &str)]) -> promo_orders::DataTable {
    let mut table = promo_orders::DataTable::new(vec![
        "Код EAN/UPC".to_string(),
        "Завод".to_string(),
        "Qty".to_string(),
    ]);
    for (barcode, shop, qty) in rows {
        table.push_row(vec![barcode.to_string(), shop.to_string(), qty.to_string()]);
    }
    table
}

// ==========================================
// End-to-end partition routing
// ==========================================

#[test]
fn test_end_to_end_scenario_routes_every_shop() {
    let order = order_table(&[("4861", "X"), ("4862", "Y"), ("4863", "Z")]);
    let schedule = schedule_table(&[("X", "1"), ("Y", "Friday")]);
    let barcode_map = map_table(&[]);

    let run = pipeline()
        .run(order, schedule, barcode_map, run_date())
        .unwrap();

    let rows_by_day: Vec<(Weekday, usize)> = run
        .split
        .weekday_tables
        .iter()
        .map(|(day, table)| (*day, table.row_count()))
        .collect();

    assert_eq!(
        rows_by_day,
        vec![
            (Weekday::Monday, 1),
            (Weekday::Tuesday, 0),
            (Weekday::Wednesday, 0),
            (Weekday::Thursday, 0),
            (Weekday::Friday, 1),
        ]
    );
    assert_eq!(run.split.unassigned_rows(), 1);

    // The unassigned row is shop Z's
    let unassigned = run.split.unassigned.as_ref().unwrap();
    let shop_idx = unassigned.column_index("Завод").unwrap();
    assert_eq!(unassigned.cell(0, shop_idx), Some("Z"));
}

#[test]
fn test_row_count_preserved_without_duplicate_shops() {
    let order = order_table(&[
        ("1", "A"),
        ("2", "B"),
        ("3", "C"),
        ("4", "A"),
        ("5", "nowhere"),
    ]);
    let schedule = schedule_table(&[("A", "1"), ("B", "2"), ("C", "Friday")]);

    let run = pipeline()
        .run(order, schedule, map_table(&[]), run_date())
        .unwrap();

    assert_eq!(run.summary.input_rows, 5);
    assert_eq!(run.summary.joined_rows, 5);
    assert_eq!(run.split.total_rows(), 5);
}

#[test]
fn test_duplicate_schedule_shops_fan_rows_out() {
    // One order row, two schedule entries for its shop: the join
    // produces one output row per schedule entry
    let order = order_table(&[("4861", "X")]);
    let schedule = schedule_table(&[("X", "1"), ("X", "2")]);

    let run = pipeline()
        .run(order, schedule, map_table(&[]), run_date())
        .unwrap();

    assert_eq!(run.summary.input_rows, 1);
    assert_eq!(run.summary.joined_rows, 2);
    assert_eq!(run.split.weekday_tables[0].1.row_count(), 1);
    assert_eq!(run.split.weekday_tables[1].1.row_count(), 1);
    assert_eq!(run.split.total_rows(), 2);
}

// ==========================================
// Barcode rewrite properties
// ==========================================

#[test]
fn test_barcode_rewrite_is_idempotent() {
    let map_source = map_table(&[("NEW-1", "OLD-1"), ("NEW-2", "OLD-2")]);
    let map = BarcodeMap::from_table(&map_source, "შტრიხკოდი", "ძირითადი შტრიხკოდი");

    let mut table = order_table(&[("OLD-1", "A"), ("NEW-2", "B"), ("4863", "C")]);

    let first = BarcodeRewriter.rewrite(&mut table, "Код EAN/UPC", &map);
    assert_eq!(first, 1);
    let after_first = table.clone();

    let second = BarcodeRewriter.rewrite(&mut table, "Код EAN/UPC", &map);
    assert_eq!(second, 0);
    assert_eq!(table, after_first);
}

#[test]
fn test_rewrite_runs_before_join_in_pipeline() {
    let order = order_table(&[("OLD-1", "X")]);
    let schedule = schedule_table(&[("X", "1")]);
    let barcode_map = map_table(&[("NEW-1", "OLD-1")]);

    let run = pipeline()
        .run(order, schedule, barcode_map, run_date())
        .unwrap();

    assert_eq!(run.summary.rewritten_barcodes, 1);
    let monday = &run.split.weekday_tables[0].1;
    let barcode_idx = monday.column_index("Код EAN/UPC").unwrap();
    assert_eq!(monday.cell(0, barcode_idx), Some("NEW-1"));
}

// ==========================================
// Shop code matching
// ==========================================

#[test]
fn test_shop_matching_ignores_case_and_whitespace() {
    let order = order_table(&[("4861", " store1 ")]);
    let schedule = schedule_table(&[("STORE1", "3")]);

    let run = pipeline()
        .run(order, schedule, map_table(&[]), run_date())
        .unwrap();

    let wednesday = &run.split.weekday_tables[2].1;
    assert_eq!(wednesday.row_count(), 1);

    // The shop cell carries the normalized form after the join
    let shop_idx = wednesday.column_index("Завод").unwrap();
    assert_eq!(wednesday.cell(0, shop_idx), Some("STORE1"));
}

// ==========================================
// Export column shape
// ==========================================

#[test]
fn test_working_columns_dropped_and_first_column_rotated() {
    let order = order_table_with_qty(&[("4861", "X", "12")]);
    let schedule = schedule_table(&[("X", "1")]);

    let run = pipeline()
        .run(order, schedule, map_table(&[]), run_date())
        .unwrap();

    let monday = &run.split.weekday_tables[0].1;
    assert_eq!(
        monday.columns,
        vec![
            "Завод".to_string(),
            "Qty".to_string(),
            "Код EAN/UPC".to_string(),
        ]
    );
    assert_eq!(monday.rows[0], vec!["X", "12", "4861"]);
}

#[test]
fn test_configured_drop_columns_removed_case_insensitively() {
    let mut order = promo_orders::DataTable::new(vec![
        "Код EAN/UPC".to_string(),
        "Завод".to_string(),
        "дата ДОКУМЕНТА".to_string(),
    ]);
    order.push_row(vec![
        "4861".to_string(),
        "X".to_string(),
        "2025-01-01".to_string(),
    ]);
    let schedule = schedule_table(&[("X", "1")]);

    let run = pipeline()
        .run(order, schedule, map_table(&[]), run_date())
        .unwrap();

    let monday = &run.split.weekday_tables[0].1;
    assert!(!monday
        .columns
        .iter()
        .any(|c| c.to_lowercase() == "дата документа"));
}

// ==========================================
// Validation
// ==========================================

#[test]
fn test_missing_columns_aggregated_across_all_tables() {
    let order = promo_orders::DataTable::new(vec!["something".to_string()]);
    let schedule = promo_orders::DataTable::new(vec!["shop_code".to_string()]);
    let barcode_map = promo_orders::DataTable::new(vec!["შტრიხკოდი".to_string()]);

    let err = pipeline()
        .run(order, schedule, barcode_map, run_date())
        .unwrap_err();

    match err {
        PipelineError::MissingColumns(missing) => {
            assert_eq!(
                missing,
                vec![
                    "Код EAN/UPC".to_string(),
                    "Завод".to_string(),
                    "allowed_weekday".to_string(),
                    "ძირითადი შტრიხკოდი".to_string(),
                ]
            );
        }
        other => panic!("expected MissingColumns, got {other:?}"),
    }
}

#[test]
fn test_unparseable_weekdays_go_to_unassigned() {
    let order = order_table(&[("1", "A"), ("2", "B"), ("3", "C")]);
    // "6" is out of range and "შაბათი" (Saturday) is not a delivery day
    let schedule = schedule_table(&[("A", "6"), ("B", "შაბათი"), ("C", "2")]);

    let run = pipeline()
        .run(order, schedule, map_table(&[]), run_date())
        .unwrap();

    assert_eq!(run.summary.unassigned_rows, 2);
    assert_eq!(run.split.weekday_tables[1].1.row_count(), 1);
}
