// Integration tests for the repository accessors
// Covers: load/update/delete semantics and the seeded-table scenario

use qualtrack_core::RecordFields;
use qualtrack_store::QualificationRepo;

fn setup_seeded_repo() -> QualificationRepo {
    let mut repo = QualificationRepo::open_in_memory().unwrap();
    repo.initialize().unwrap();
    repo.seed_if_empty().unwrap();
    repo
}

#[test]
fn test_seeded_rows_load_in_insertion_order() {
    // Given: A freshly seeded store
    let repo = setup_seeded_repo();

    // When: All rows are loaded
    let rows = repo.load_all().unwrap();

    // Then: Seven rows with ids 1..=7 in order
    let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(rows[0].faculty, "Natural Sciences");
    assert_eq!(rows[4].status, "Not Submitted");
    assert_eq!(rows[4].date, "");
}

#[test]
fn test_delete_then_update_scenario() {
    // Given: A freshly seeded store
    let repo = setup_seeded_repo();

    // When: Record 5 is deleted
    let deleted = repo.delete_row(5).unwrap();

    // Then: Six rows remain, none with id 5
    assert_eq!(deleted, 1);
    let rows = repo.load_all().unwrap();
    assert_eq!(rows.len(), 6);
    assert!(rows.iter().all(|r| r.id != 5));

    // When: Record 1 is overwritten
    let updated = repo
        .update_row(
            1,
            &RecordFields::new(
                "Natural Sciences",
                "Bachelor of Science in Computer Science (NQF Level 7 – 360 credits)",
                "DHET Approved",
                "2024-08-01",
            ),
        )
        .unwrap();

    // Then: Reloading record 1 shows the new status and date
    assert_eq!(updated, 1);
    let record = repo.get(1).unwrap().expect("record 1 should exist");
    assert_eq!(record.status, "DHET Approved");
    assert_eq!(record.date, "2024-08-01");
    assert_eq!(repo.load_all().unwrap().len(), 6);
}

#[test]
fn test_update_is_full_row_overwrite() {
    // Given: A seeded store
    let repo = setup_seeded_repo();

    // When: Record 2 is updated with empty fields
    repo.update_row(2, &RecordFields::default()).unwrap();

    // Then: Every mutable field is cleared and the id is kept
    let record = repo.get(2).unwrap().unwrap();
    assert_eq!(record.id, 2);
    assert!(record.fields().is_blank());
}

#[test]
fn test_absent_ids_are_silent_noops() {
    // Given: A seeded store
    let repo = setup_seeded_repo();

    // When: Updating and deleting an id that does not exist
    let updated = repo.update_row(100, &RecordFields::new("X", "Y", "Z", "")).unwrap();
    let deleted = repo.delete_row(100).unwrap();

    // Then: Nothing changes and no error is raised
    assert_eq!(updated, 0);
    assert_eq!(deleted, 0);
    assert_eq!(repo.count().unwrap(), 7);
}

#[test]
fn test_save_all_updates_every_row() {
    // Given: A seeded store with every row loaded for editing
    let mut repo = setup_seeded_repo();
    let mut rows = repo.load_all().unwrap();

    // When: Two rows are edited and the whole grid is saved
    rows[0].status = "DHET Approved".to_string();
    rows[5].date = "2025-02-01".to_string();
    let affected = repo.save_all(&rows).unwrap();

    // Then: Every row is written and the edits persist
    assert_eq!(affected, 7);
    assert_eq!(repo.load_all().unwrap(), rows);
}

#[test]
fn test_save_all_ignores_rows_with_unknown_ids() {
    // Given: A seeded store
    let mut repo = setup_seeded_repo();
    let mut rows = repo.load_all().unwrap();
    let mut phantom = rows[0].clone();
    phantom.id = 999;
    rows.push(phantom);

    // When: The grid including a row with no stored counterpart is saved
    let affected = repo.save_all(&rows).unwrap();

    // Then: Only existing rows are touched
    assert_eq!(affected, 7);
    assert_eq!(repo.count().unwrap(), 7);
}

#[test]
fn test_file_backed_store_persists_across_reopen() {
    // Given: A database file with one update applied
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("qualifications.db");
    {
        let repo = QualificationRepo::bootstrap(&path).unwrap();
        repo.update_row(3, &RecordFields::new("EMS", "BCom Economics", "SAQA Registered", "2025-05-01"))
            .unwrap();
    }

    // When: The file is reopened
    let repo = QualificationRepo::bootstrap(&path).unwrap();

    // Then: The update survived and seeding did not run again
    assert_eq!(repo.count().unwrap(), 7);
    assert_eq!(repo.get(3).unwrap().unwrap().status, "SAQA Registered");
}
