use std::time::Duration;

use rental_contract::{
    render_pdf, submit, validate_submission, Catalog, ContractDocumentGenerator, ContractRequest, DirectorySink,
    ManualScheduler, Point, RenterInfo, Section, SignatureCapture, SignatureExport, StaticCatalog, SubmitError,
    SurfaceSize, ValidationError, Vehicle, REPLAY_DEBOUNCE, SIGNATURE_PLACEHOLDER,
};

const CATALOG: &str = r#"[
  {
    "id": "excavator-001",
    "name": "Caterpillar 320",
    "category": "Excavator",
    "description": "Crawler excavator for earthworks",
    "specifications": { "weight": "20,000 kg", "maxReach": "9.7 m", "bucketCapacity": null },
    "dailyRate": 350
  },
  {
    "id": "loader-002",
    "name": "Volvo L60H",
    "category": "Wheel loader",
    "specifications": { "enginePower": "115 kW" },
    "dailyRate": 280
  }
]"#;

fn excavator() -> Vehicle {
    let catalog = StaticCatalog::from_json(CATALOG).unwrap();
    catalog.vehicle_by_id("excavator-001").unwrap().clone()
}

fn capture() -> SignatureCapture<ManualScheduler> {
    SignatureCapture::new(SurfaceSize::new(400, 160), ManualScheduler::new())
}

/// Diagonal stroke spanning 60x25 px
fn sign(capture: &mut SignatureCapture<ManualScheduler>) {
    capture.begin_stroke(Point::new(30.0, 40.0));
    for i in 1..24 {
        let t = i as f64 / 23.0;
        capture.extend_stroke(Point::new(30.0 + 60.0 * t, 40.0 + 25.0 * t));
    }
    capture.end_stroke();
}

#[test]
fn valid_signature_produces_contract_on_disk() {
    let mut capture = capture();
    sign(&mut capture);
    assert!(capture.is_valid());

    let vehicle = excavator();
    let request = validate_submission("Anna", "Muller", &vehicle, &capture).unwrap();
    let document = ContractDocumentGenerator::default().generate(&request);
    assert_eq!(document.section_order()[0], Section::Header);
    assert!(document.contains_text("$350.00"));
    assert!(document.contains_text("Anna Muller"));
    assert!(!document.contains_text(SIGNATURE_PLACEHOLDER));
    assert_eq!(document.images.len(), 1);

    let tmp = tempfile::tempdir().unwrap();
    let mut sink = DirectorySink::new(tmp.path().join("downloads"));
    let receipt = submit(
        "Anna",
        "Muller",
        &vehicle,
        &capture,
        &ContractDocumentGenerator::default(),
        &mut sink,
    )
    .unwrap();
    assert_eq!(receipt.daily_rate, "$350.00");
    assert_eq!(receipt.renter_name, "Anna Muller");
    let pdf = std::fs::read(sink.path_for(&receipt.filename)).unwrap();
    assert!(pdf.starts_with(b"%PDF-"));
}

#[test]
fn single_tap_blocks_submission() {
    let mut capture = capture();
    capture.begin_stroke(Point::new(100.0, 80.0));
    capture.end_stroke();
    assert!(!capture.is_empty());

    let tmp = tempfile::tempdir().unwrap();
    let mut sink = DirectorySink::new(tmp.path());
    let result = submit(
        "Anna",
        "Muller",
        &excavator(),
        &capture,
        &ContractDocumentGenerator::default(),
        &mut sink,
    );
    match result {
        Err(SubmitError::Validation(errors)) => {
            assert_eq!(errors.errors(), &[ValidationError::SignatureIncomplete]);
        }
        other => panic!("expected validation failure, got {:?}", other),
    }
    assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
}

#[test]
fn signature_survives_resize_burst() {
    let mut capture = capture();
    sign(&mut capture);
    let before = capture.recording();

    capture.notify_resize(SurfaceSize::new(320, 140));
    capture.scheduler_mut().advance(Duration::from_millis(100));
    capture.notify_resize(SurfaceSize::new(360, 150));
    assert_eq!(capture.scheduler().pending_count(), 1);

    let due = capture.scheduler_mut().advance(REPLAY_DEBOUNCE);
    assert_eq!(due.len(), 1);
    assert!(capture.handle_timer(due[0]));
    assert_eq!(capture.recording(), before);
    assert!(capture.is_valid());
}

#[test]
fn clear_during_pending_replay_stays_cleared() {
    let mut capture = capture();
    sign(&mut capture);
    capture.notify_resize(SurfaceSize::new(300, 120));
    capture.clear();

    assert!(capture.scheduler_mut().advance(REPLAY_DEBOUNCE * 2).is_empty());
    assert!(capture.is_empty());
    assert!(capture.recording().strokes().is_empty());
}

#[test]
fn malformed_signature_payload_still_renders() {
    let request = ContractRequest::new(
        excavator(),
        RenterInfo::new("Anna", "Muller"),
        SignatureExport::from_data_url("data:image/png;base64,not-a-png"),
        rental_contract::next_issue_time(),
    );
    let document = ContractDocumentGenerator::default().generate(&request);
    assert!(document.contains_text(SIGNATURE_PLACEHOLDER));
    assert!(document.images.is_empty());

    let pdf = render_pdf(&document).unwrap();
    assert!(pdf.starts_with(b"%PDF-"));
}
