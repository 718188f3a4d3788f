// ==========================================
// Promo order API end-to-end tests
// ==========================================
// Facade runs over real files in a temp directory: local
// defaults, caller overrides and the error surface
// ==========================================


use promo_orders::logging;
use promo_orders::{
    ApiError, ExcelWriter, InputOverrides, LocalFileConfig, PipelineConfig, PromoOrderApi,
};
use std::fs;
use std::path::Path;
use test_helpers::{map_table, order_table, schedule_table};

const ORDER_CSV: &str = "Код EAN/UPC,Завод\nOLD-1,X\n4862,Y\n4863,Z\n";

fn api_over(dir: &Path) -> PromoOrderApi {
    PromoOrderApi::new(
        PipelineConfig::default(),
        LocalFileConfig::with_search_dirs(vec![dir.to_path_buf()]),
    )
}

fn write_local_files(dir: &Path) {
    fs::write(
        dir.join("shop_schedule.xlsx"),
        ExcelWriter
            .table_to_xlsx_bytes(&schedule_table(&[("X", "1"), ("Y", "Friday")]))
            .unwrap(),
    )
    .unwrap();
    fs::create_dir(dir.join("config")).unwrap();
    fs::write(
        dir.join("config").join("barcode_map.xlsx"),
        ExcelWriter
            .table_to_xlsx_bytes(&map_table(&[("NEW-1", "OLD-1")]))
            .unwrap(),
    )
    .unwrap();
}

// ==========================================
// Happy path with local reference files
// ==========================================

#[test]
fn test_upload_with_local_defaults() {
    logging::init_test();

    let dir = tempfile::tempdir().unwrap();
    write_local_files(dir.path());
    let api = api_over(dir.path());

    let response = api
        .process_order_bytes("orders.csv", ORDER_CSV.as_bytes(), InputOverrides::default())
        .unwrap();

    assert_eq!(response.summary.input_rows, 3);
    assert_eq!(response.summary.rewritten_barcodes, 1);
    assert_eq!(response.summary.unassigned_rows, 1);

    // Monday..Friday plus Unassigned, files matching partitions
    assert_eq!(response.partitions.len(), 6);
    assert_eq!(response.files.len(), 6);
    assert_eq!(response.partitions[0].name, "Monday");
    assert_eq!(response.partitions[0].table.row_count(), 1);
    assert_eq!(response.partitions[4].name, "Friday");
    assert_eq!(response.partitions[4].table.row_count(), 1);
    assert_eq!(response.partitions[5].name, "Unassigned");

    assert!(!response.archive.bytes.is_empty());

    // Both local files were used and reported
    assert!(response
        .schedule_path
        .as_deref()
        .unwrap()
        .contains("shop_schedule.xlsx"));
    assert!(response
        .barcode_map_path
        .as_deref()
        .unwrap()
        .contains("barcode_map.xlsx"));
}

#[test]
fn test_order_file_from_disk() {
    logging::init_test();

    let dir = tempfile::tempdir().unwrap();
    write_local_files(dir.path());
    let api = api_over(dir.path());

    let order_path = dir.path().join("orders.xlsx");
    fs::write(
        &order_path,
        ExcelWriter
            .table_to_xlsx_bytes(&order_table(&[("OLD-1", "X")]))
            .unwrap(),
    )
    .unwrap();

    let response = api
        .process_order_file(&order_path, InputOverrides::default())
        .unwrap();

    assert_eq!(response.summary.input_rows, 1);
    assert_eq!(response.summary.rewritten_barcodes, 1);
    assert_eq!(response.partitions[0].table.row_count(), 1);
}

// ==========================================
// Overrides
// ==========================================

#[test]
fn test_overrides_beat_local_files() {
    logging::init_test();

    let dir = tempfile::tempdir().unwrap();
    // Local schedule sends X to Monday...
    write_local_files(dir.path());
    let api = api_over(dir.path());

    // ...but the override sends X to Friday
    let overrides = InputOverrides {
        schedule: Some(schedule_table(&[("X", "Friday")])),
        barcode_map: None,
    };
    let response = api
        .process_order_bytes(
            "orders.csv",
            "Код EAN/UPC,Завод\n4861,X\n".as_bytes(),
            overrides,
        )
        .unwrap();

    assert_eq!(response.partitions[0].table.row_count(), 0);
    assert_eq!(response.partitions[4].table.row_count(), 1);

    // Overridden input is not reported as a local path
    assert_eq!(response.schedule_path, None);
    assert!(response
        .barcode_map_path
        .as_deref()
        .unwrap()
        .contains("barcode_map.xlsx"));
}

// ==========================================
// Error surface
// ==========================================

#[test]
fn test_missing_locals_reported_as_aggregated_columns() {
    logging::init_test();

    let dir = tempfile::tempdir().unwrap();
    let api = api_over(dir.path());

    let err = api
        .process_order_bytes("orders.csv", ORDER_CSV.as_bytes(), InputOverrides::default())
        .unwrap_err();

    match err {
        ApiError::MissingColumns(columns) => {
            assert_eq!(
                columns,
                vec![
                    "shop_code".to_string(),
                    "allowed_weekday".to_string(),
                    "ძირითადი შტრიხკოდი".to_string(),
                    "შტრიხკოდი".to_string(),
                ]
            );
        }
        other => panic!("expected MissingColumns, got {other:?}"),
    }
}

#[test]
fn test_unsupported_order_format_rejected() {
    logging::init_test();

    let dir = tempfile::tempdir().unwrap();
    write_local_files(dir.path());
    let api = api_over(dir.path());

    let err = api
        .process_order_bytes("orders.pdf", b"%PDF-1.4", InputOverrides::default())
        .unwrap_err();

    match err {
        ApiError::ImportError(msg) => assert!(msg.contains("orders.pdf")),
        other => panic!("expected ImportError, got {other:?}"),
    }
}

#[test]
fn test_summary_json_for_status_display() {
    logging::init_test();

    let dir = tempfile::tempdir().unwrap();
    write_local_files(dir.path());
    let api = api_over(dir.path());

    let response = api
        .process_order_bytes("orders.csv", ORDER_CSV.as_bytes(), InputOverrides::default())
        .unwrap();

    let json = response.summary.as_json();
    assert_eq!(json["input_rows"], 3);
    assert_eq!(json["unassigned_rows"], 1);
    let partition_names: Vec<&str> = json["partitions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        partition_names,
        vec![
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Unassigned"
        ]
    );
}
