use super::*;

#[test]
fn test_initialize_produces_empty_entries() {
    let store = AnnotationStore::initialize(3);
    assert_eq!(store.len(), 3);

    for i in 0..3 {
        let entry = store.get(i).expect("entry should exist");
        assert_eq!(entry.ground_truth, "");
        assert_eq!(entry.context, "");
    }
}

#[test]
fn test_initialize_zero_entries() {
    let store = AnnotationStore::initialize(0);
    assert!(store.is_empty());
    assert!(store.get(0).is_none());
}

#[test]
fn test_initialize_discards_prior_state() {
    let mut store = AnnotationStore::initialize(2);
    store
        .update(0, AnnotationField::GroundTruth, "stale")
        .expect("update should succeed");

    // A new session starts fresh regardless of what came before.
    let store = AnnotationStore::initialize(2);
    assert_eq!(store.get(0).expect("entry should exist").ground_truth, "");
}

#[test]
fn test_update_ground_truth() {
    let mut store = AnnotationStore::initialize(2);
    store
        .update(0, AnnotationField::GroundTruth, "Y.")
        .expect("update should succeed");

    let entry = store.get(0).expect("entry should exist");
    assert_eq!(entry.ground_truth, "Y.");
    assert_eq!(entry.context, "");
}

#[test]
fn test_update_context() {
    let mut store = AnnotationStore::initialize(2);
    store
        .update(1, AnnotationField::Context, "doc1")
        .expect("update should succeed");

    let entry = store.get(1).expect("entry should exist");
    assert_eq!(entry.context, "doc1");
    assert_eq!(entry.ground_truth, "");
}

#[test]
fn test_update_isolation() {
    let mut store = AnnotationStore::initialize(3);
    store
        .update(1, AnnotationField::GroundTruth, "middle")
        .expect("update should succeed");
    store
        .update(1, AnnotationField::Context, "middle-ctx")
        .expect("update should succeed");

    assert_eq!(store.get(0), Some(&AnnotationEntry::default()));
    assert_eq!(store.get(2), Some(&AnnotationEntry::default()));
}

#[test]
fn test_update_replaces_prior_value() {
    let mut store = AnnotationStore::initialize(1);
    store
        .update(0, AnnotationField::GroundTruth, "draft")
        .expect("update should succeed");
    store
        .update(0, AnnotationField::GroundTruth, "final")
        .expect("update should succeed");

    assert_eq!(store.get(0).expect("entry should exist").ground_truth, "final");
}

#[test]
fn test_sequential_updates_apply_to_latest_state() {
    let mut store = AnnotationStore::initialize(1);
    store
        .update(0, AnnotationField::GroundTruth, "Y.")
        .expect("update should succeed");
    store
        .update(0, AnnotationField::Context, "doc1")
        .expect("update should succeed");

    // The second edit must not clobber the first.
    let entry = store.get(0).expect("entry should exist");
    assert_eq!(entry.ground_truth, "Y.");
    assert_eq!(entry.context, "doc1");
}

#[test]
fn test_update_out_of_range() {
    let mut store = AnnotationStore::initialize(2);
    let result = store.update(2, AnnotationField::GroundTruth, "beyond");

    let err = result.expect_err("update past the end should fail");
    assert!(matches!(
        err,
        AnnotationError::IndexOutOfRange { index: 2, len: 2 }
    ));
    assert!(err.to_string().contains("out of range"));
}

#[test]
fn test_update_on_empty_store() {
    let mut store = AnnotationStore::initialize(0);
    let result = store.update(0, AnnotationField::Context, "anything");
    assert!(matches!(
        result,
        Err(AnnotationError::IndexOutOfRange { index: 0, len: 0 })
    ));
}
