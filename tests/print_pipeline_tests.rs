mod common;

use common::{MockDriver, TestResult, fixtures, init_logger, texts};
use rollprint::{
    Document, DocumentKind, ErrorKind, LayoutCalculator, PageSizer, PrintError, PrinterProfile,
};
use rollprint_render_core::{DrawOp, Primitive};
use serde_json::json;
use std::sync::Arc;
use std::thread;

#[test]
fn draw_pass_ends_where_the_dry_run_predicted() -> TestResult {
    init_logger();
    let driver = MockDriver::new();
    let orchestrator = driver.orchestrator();
    let margin = orchestrator.profile().layout.margin;

    for value in fixtures::all_documents() {
        let report = orchestrator.print_value(&value)?;
        let document = Document::from_value(&value)?;
        let predicted =
            LayoutCalculator::new(&orchestrator.profile().layout).compute_height(&document);
        assert_eq!(report.content_height, predicted);
        assert_eq!(report.final_cursor + margin, predicted);
    }
    Ok(())
}

#[test]
fn device_is_sized_before_the_surface_opens() -> TestResult {
    let driver = MockDriver::new();
    let report = driver.orchestrator().print_value(&fixtures::receipt())?;

    let log = driver.log();
    assert_eq!(log.configs.len(), 1);
    let config = &log.configs[0];
    assert!(config.is_custom());
    let expected = PageSizer::default().paper_length_mm10(report.content_height);
    assert_eq!(config.paper_length_mm10, Some(expected));
    assert_eq!(report.paper_length_mm10, expected);
    assert_eq!(config.paper_width_mm10, Some(800));
    Ok(())
}

#[test]
fn job_is_one_document_with_one_page() -> TestResult {
    let driver = MockDriver::new();
    driver.orchestrator().print_value(&fixtures::debt_invoices())?;

    let log = driver.log();
    assert_eq!((log.opens, log.releases), (1, 1));
    let ops = &log.jobs[0];
    assert!(matches!(ops.first(), Some(DrawOp::StartDoc(name)) if name.contains("debt_invoices")));
    assert_eq!(ops[1], DrawOp::StartPage);
    assert_eq!(ops[ops.len() - 2], DrawOp::EndPage);
    assert_eq!(ops[ops.len() - 1], DrawOp::EndDoc);
    Ok(())
}

#[test]
fn variants_do_not_draw_each_others_content() -> TestResult {
    let driver = MockDriver::new();
    let orchestrator = driver.orchestrator();
    let labels = orchestrator.profile().layout.labels.clone();
    orchestrator.print_value(&fixtures::receipt())?;
    orchestrator.print_value(&fixtures::debt_summary())?;

    let log = driver.log();
    let receipt = texts(&log.jobs[0]);
    let summary = texts(&log.jobs[1]);
    assert!(receipt.contains(&"R-2024-0042"));
    assert!(!receipt.contains(&labels.summary_title.as_str()));
    assert!(!receipt.contains(&labels.invoices_total.as_str()));
    assert!(summary.contains(&labels.summary_title.as_str()));
    assert!(!summary.contains(&labels.column_product.as_str()));
    assert!(!summary.contains(&labels.receipt_number.as_str()));
    Ok(())
}

#[test]
fn zero_costs_are_suppressed_and_positive_costs_printed() -> TestResult {
    let driver = MockDriver::new();
    let orchestrator = driver.orchestrator();
    let labels = orchestrator.profile().layout.labels.clone();
    let cash = orchestrator.print_value(&fixtures::receipt())?;
    let credit = orchestrator.print_value(&fixtures::credit_receipt())?;

    let log = driver.log();
    let cash_texts = texts(&log.jobs[0]);
    let credit_texts = texts(&log.jobs[1]);
    for label in [&labels.discount, &labels.delivery_cost, &labels.labor_cost, &labels.remaining] {
        assert!(!cash_texts.contains(&label.as_str()));
        assert!(credit_texts.contains(&label.as_str()));
    }
    assert!(credit_texts.contains(&"1,500"));
    assert!(credit.content_height > cash.content_height);
    Ok(())
}

#[test]
fn statement_footer_sums_invoice_costs() -> TestResult {
    let driver = MockDriver::new();
    let orchestrator = driver.orchestrator();
    let labels = orchestrator.profile().layout.labels.clone();
    orchestrator.print_value(&fixtures::debt_summary())?;

    let log = driver.log();
    let ops = &log.jobs[0];
    let value_after = |label: &str| {
        ops.iter()
            .position(|op| matches!(op, DrawOp::Text { text, .. } if text == label))
            .and_then(|i| match &ops[i + 1] {
                DrawOp::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
    };
    assert_eq!(value_after(&labels.invoices_total).as_deref(), Some("21,300"));
    assert_eq!(value_after(&labels.labor_share).as_deref(), Some("800"));
    assert_eq!(value_after(&labels.delivery_share).as_deref(), Some("1,500"));
    assert_eq!(value_after(&labels.remaining_total).as_deref(), Some("16,800"));
    Ok(())
}

#[test]
fn detail_prints_a_banner_and_rows_per_invoice() -> TestResult {
    let driver = MockDriver::new();
    let orchestrator = driver.orchestrator();
    let labels = orchestrator.profile().layout.labels.clone();
    orchestrator.print_value(&fixtures::debt_invoices())?;

    let log = driver.log();
    let drawn = texts(&log.jobs[0]);
    assert!(drawn.contains(&labels.invoice_banner("101").as_str()));
    assert!(drawn.contains(&labels.invoice_banner("117").as_str()));
    for product in ["Brique", "Ciment", "Gravier"] {
        assert!(drawn.contains(&product));
    }
    let headings = drawn
        .iter()
        .filter(|t| **t == labels.column_product)
        .count();
    assert_eq!(headings, 2);
    Ok(())
}

#[test]
fn empty_item_list_still_prints_table_heading_and_totals() -> TestResult {
    let driver = MockDriver::new();
    let orchestrator = driver.orchestrator();
    let labels = orchestrator.profile().layout.labels.clone();
    let empty = orchestrator.print_value(&json!({"articlesVendus": []}))?;
    let one = orchestrator.print_value(&json!({"articlesVendus": [{"nomProduit": "X"}]}))?;

    let log = driver.log();
    let drawn = texts(&log.jobs[0]);
    assert!(drawn.contains(&labels.column_product.as_str()));
    assert!(drawn.contains(&labels.total.as_str()));
    assert_eq!(one.content_height - empty.content_height, 35);
    Ok(())
}

#[test]
fn unsupported_type_is_rejected_before_any_device_work() {
    let driver = MockDriver::new();
    let err = driver
        .orchestrator()
        .print_value(&json!({"type": "delivery_note"}))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedDocumentType);
    assert_eq!(err.status_code(), 400);
    let log = driver.log();
    assert_eq!((log.queries, log.opens), (0, 0));
}

#[test]
fn malformed_input_is_rejected_before_any_device_work() {
    let driver = MockDriver::new();
    let orchestrator = driver.orchestrator();
    for value in [
        json!([1, 2, 3]),
        json!({"type": 7}),
        json!({"articlesVendus": "none"}),
        json!({"articlesVendus": [{"quantite": -2}]}),
    ] {
        let err = orchestrator.print_value(&value).unwrap_err();
        assert!(matches!(err, PrintError::MalformedInput(_)), "{value}: {err}");
    }
    let log = driver.log();
    assert_eq!((log.queries, log.opens), (0, 0));
}

#[test]
fn unavailable_device_opens_no_surface() {
    let driver = MockDriver::new().unavailable();
    let err = driver
        .orchestrator()
        .print_value(&fixtures::receipt())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DeviceUnavailable);
    assert_eq!(err.status_code(), 503);
    let log = driver.log();
    assert_eq!((log.queries, log.opens, log.releases), (1, 0, 0));
}

#[test]
fn failing_primitive_still_releases_the_surface_once() {
    for primitive in [Primitive::TextOut, Primitive::LineTo, Primitive::SelectFont] {
        let driver = MockDriver::new().failing_on(primitive);
        let err = driver
            .orchestrator()
            .print_value(&fixtures::receipt())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RenderingFailure);
        let log = driver.log();
        assert_eq!((log.opens, log.releases), (1, 1), "{primitive}");
        assert_eq!(log.jobs[0].last(), Some(&DrawOp::EndDoc));
    }
}

#[test]
fn failing_start_or_teardown_still_releases_once() {
    for primitive in [
        Primitive::StartDoc,
        Primitive::StartPage,
        Primitive::EndPage,
        Primitive::EndDoc,
    ] {
        let driver = MockDriver::new().failing_on(primitive);
        let err = driver
            .orchestrator()
            .print_value(&fixtures::debt_summary())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RenderingFailure, "{primitive}");
        assert_eq!(driver.log().releases, 1, "{primitive}");
    }
}

#[test]
fn jobs_for_one_device_never_overlap() {
    let driver = MockDriver::new().slow();
    let locks = Arc::new(rollprint::DeviceLocks::new());
    let front = Arc::new(driver.orchestrator().with_locks(locks.clone()));
    let back = Arc::new(
        driver
            .orchestrator_for(PrinterProfile {
                dpi: 203,
                ..PrinterProfile::default()
            })
            .with_locks(locks),
    );

    let handles: Vec<_> = (0..6)
        .map(|i| {
            let orchestrator = if i % 2 == 0 { front.clone() } else { back.clone() };
            thread::spawn(move || orchestrator.print_value(&fixtures::receipt()))
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap().is_ok());
    }

    let log = driver.log();
    assert_eq!(log.releases, 6);
    assert_eq!(log.max_active, 1);
}

#[test]
fn measuring_touches_no_device() -> TestResult {
    let driver = MockDriver::new().unavailable();
    let orchestrator = driver.orchestrator();
    let document = Document::from_value(&fixtures::credit_receipt())?;
    assert_eq!(document.kind(), DocumentKind::Receipt);
    let measurement = orchestrator.measure(&document);
    assert_eq!(
        measurement.paper_length_mm10,
        PageSizer::default().paper_length_mm10(measurement.content_height)
    );
    assert_eq!(driver.log().queries, 0);
    Ok(())
}

#[test]
fn profile_layout_changes_geometry_but_not_consistency() -> TestResult {
    let driver = MockDriver::new();
    let mut profile = PrinterProfile::default();
    profile.layout.margin = 8;
    profile.layout.page_width = 384;
    profile.layout.receipt_columns.quantity = 200;
    profile.layout.receipt_columns.price = 120;
    let orchestrator = driver.orchestrator_for(profile);

    let report = orchestrator.print_value(&fixtures::receipt())?;
    assert_eq!(report.final_cursor + 8, report.content_height);

    let log = driver.log();
    let max_x = log.jobs[0]
        .iter()
        .filter_map(|op| match op {
            DrawOp::Text { x, .. } | DrawOp::LineTo { x, .. } => Some(*x),
            _ => None,
        })
        .max()
        .unwrap_or_default();
    assert_eq!(max_x, 376);
    Ok(())
}

#[test]
fn profiles_with_columns_off_the_roll_never_reach_the_device() {
    let driver = MockDriver::new();
    let mut profile = PrinterProfile::default();
    profile.layout.receipt_columns.quantity = u32::MAX;
    let err = driver.try_orchestrator_for(profile).err().unwrap();
    assert_eq!(err.kind(), ErrorKind::InvalidProfile);
    assert!(matches!(err, PrintError::InvalidProfile(_)));

    let log = driver.log();
    assert_eq!((log.queries, log.opens), (0, 0));
}

#[test]
fn device_is_told_the_printable_width_of_the_layout() -> TestResult {
    let driver = MockDriver::new();
    let orchestrator = driver.orchestrator();
    orchestrator.print_value(&fixtures::receipt())?;

    let page_width = orchestrator.profile().layout.page_width;
    let log = driver.log();
    assert_eq!(log.configs[0].printable_width_px, Some(page_width));
    assert_eq!(log.configs[0].paper_width_mm10, Some(800));
    Ok(())
}
