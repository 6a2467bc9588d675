use assert_matches::assert_matches;
use chrono::{Duration, NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use medication_cell::models::{Frequency, MedicationError, MedicationPatch, NewMedication};
use medication_cell::services::store::{MedicationStore, INTAKE_LOG_CAPACITY};

fn new_medication(name: &str, times: &str) -> NewMedication {
    NewMedication {
        name: name.to_string(),
        dosage: "5mg".to_string(),
        frequency: Frequency::OnceDaily,
        times: times.parse().unwrap(),
        refill_reminder: false,
        refill_date: None,
    }
}

#[test]
fn test_demo_data() {
    let store = MedicationStore::with_demo_data();

    let names: Vec<&str> = store.list().iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Amoxicillin", "Lisinopril", "Metformin"]);

    let amoxicillin = &store.list()[0];
    assert_eq!(amoxicillin.times.to_string(), "08:00,20:00");
    assert!(amoxicillin.refill_reminder);
    assert_eq!(amoxicillin.refill_date, NaiveDate::from_ymd_opt(2024, 9, 15));
    assert!(!store.list()[1].refill_reminder);
}

#[test]
fn test_create_prepends_with_fresh_id() {
    let mut store = MedicationStore::with_demo_data();
    let existing: Vec<Uuid> = store.list().iter().map(|m| m.id).collect();

    let created = store.create(new_medication("Atorvastatin", "21:00"));

    assert!(!existing.contains(&created.id));
    assert_eq!(store.list()[0], created);
    assert_eq!(store.len(), 4);
}

#[test]
fn test_update_keeps_unpatched_fields() {
    let mut store = MedicationStore::with_demo_data();
    let before = store.list()[2].clone();

    let patch = MedicationPatch {
        dosage: Some("850mg".to_string()),
        refill_date: Some(None),
        ..MedicationPatch::default()
    };
    let after = store.update(before.id, patch).unwrap();

    assert_eq!(after.dosage, "850mg");
    assert_eq!(after.refill_date, None);
    assert_eq!(after.name, before.name);
    assert_eq!(after.times, before.times);
    assert_eq!(after.refill_reminder, before.refill_reminder);
    assert_eq!(store.len(), 3);
}

#[test]
fn test_missing_ids_are_not_found() {
    let mut store = MedicationStore::with_demo_data();
    let missing = Uuid::new_v4();

    assert_matches!(store.get(missing), Err(MedicationError::NotFound(_)));
    assert_matches!(
        store.update(missing, MedicationPatch::default()),
        Err(MedicationError::NotFound(_))
    );
    assert_matches!(store.delete(missing), Err(MedicationError::NotFound(_)));
    assert_matches!(
        store.log_intake(missing, Utc::now()),
        Err(MedicationError::NotFound(_))
    );
    assert_eq!(store.len(), 3);
    assert!(store.intake_log().is_empty());
}

#[test]
fn test_intake_log_survives_delete() {
    let mut store = MedicationStore::with_demo_data();
    let id = store.list()[1].id;
    let at = Utc.with_ymd_and_hms(2024, 9, 1, 9, 5, 0).unwrap();

    let record = store.log_intake(id, at).unwrap();
    assert_eq!(record.medication_name, "Lisinopril");
    assert_eq!(record.logged_at, at);

    store.delete(id).unwrap();

    assert_eq!(store.len(), 2);
    assert_eq!(store.intake_log(), &[record]);
}

#[test]
fn test_intake_log_drops_oldest_beyond_capacity() {
    let mut store = MedicationStore::with_demo_data();
    let id = store.list()[0].id;
    let start = Utc.with_ymd_and_hms(2024, 9, 1, 8, 0, 0).unwrap();

    for i in 0..=INTAKE_LOG_CAPACITY as i64 {
        store.log_intake(id, start + Duration::minutes(i)).unwrap();
    }

    let log = store.intake_log();
    assert_eq!(log.len(), INTAKE_LOG_CAPACITY);
    assert_eq!(log[0].logged_at, start + Duration::minutes(1));
    assert_eq!(
        log[INTAKE_LOG_CAPACITY - 1].logged_at,
        start + Duration::minutes(INTAKE_LOG_CAPACITY as i64)
    );
}
