// tests/content_protocol.rs
//
// Drives the shared create/rename/delete protocol through an in-memory
// department store. The same service type backs every content entity, so
// these cover the protocol once.
use std::sync::Arc;

use chrono::{TimeZone, Utc};

mod support;

use clinica_core::application::content::ContentService;
use clinica_core::application::error::ApplicationError;
use clinica_core::domain::department::{DepartmentDraft, DepartmentFilter, DepartmentPatch, Departments};
use clinica_core::domain::errors::DomainError;
use support::{FixedClock, MemoryDepartmentStore};

fn service() -> ContentService<Departments> {
    let clock = Arc::new(FixedClock(
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
    ));
    ContentService::from_store(Arc::new(MemoryDepartmentStore::new()), clock)
}

fn draft() -> DepartmentDraft {
    DepartmentDraft {
        description: Some("surgical procedures".into()),
        icon: None,
        image: None,
        is_active: true,
        display_order: 0,
    }
}

fn is_duplicate(err: &ApplicationError) -> bool {
    matches!(err, ApplicationError::Domain(DomainError::DuplicateName(_)))
}

fn is_invalid_name(err: &ApplicationError) -> bool {
    matches!(err, ApplicationError::Domain(DomainError::InvalidName(_)))
}

#[tokio::test]
async fn create_derives_slug_from_name() {
    let service = service();

    let created = service.create("Oral Surgery", draft()).await.unwrap();

    assert_eq!(created.slug.as_str(), "oral-surgery");
    assert_eq!(created.name.as_str(), "Oral Surgery");
    assert_eq!(created.created_at, created.updated_at);
}

#[tokio::test]
async fn create_with_colliding_name_is_rejected() {
    let service = service();
    service.create("Oral Surgery", draft()).await.unwrap();

    let err = service.create("Oral Surgery", draft()).await.unwrap_err();
    assert!(is_duplicate(&err));

    // different display string, same normalized slug
    let err = service.create("oral   SURGERY!", draft()).await.unwrap_err();
    assert!(is_duplicate(&err));
}

#[tokio::test]
async fn symbol_only_name_is_rejected_without_writing() {
    let service = service();

    let err = service.create("!!!", draft()).await.unwrap_err();
    assert!(is_invalid_name(&err));

    let rows = service
        .list(DepartmentFilter {
            include_inactive: true,
        })
        .await
        .unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn rename_rederives_slug_and_leaves_other_rows_alone() {
    let service = service();
    let first = service.create("Oral Surgery", draft()).await.unwrap();
    let second = service.create("Orthodontics", draft()).await.unwrap();

    let patch = DepartmentPatch {
        name: Some("Oral & Maxillofacial Surgery".into()),
        ..DepartmentPatch::default()
    };
    let updated = service.update(first.id.into(), patch).await.unwrap();

    assert_eq!(updated.slug.as_str(), "oral-maxillofacial-surgery");
    assert_eq!(updated.name.as_str(), "Oral & Maxillofacial Surgery");

    let untouched = service.get(second.id.into()).await.unwrap();
    assert_eq!(untouched.slug.as_str(), "orthodontics");
}

#[tokio::test]
async fn renaming_to_current_name_keeps_slug() {
    let service = service();
    let created = service.create("Oral Surgery", draft()).await.unwrap();

    for _ in 0..3 {
        let patch = DepartmentPatch {
            name: Some("Oral Surgery".into()),
            ..DepartmentPatch::default()
        };
        let updated = service.update(created.id.into(), patch).await.unwrap();
        assert_eq!(updated.slug.as_str(), "oral-surgery");
    }
}

#[tokio::test]
async fn patch_without_name_keeps_slug() {
    let service = service();
    let created = service.create("Oral Surgery", draft()).await.unwrap();

    let patch = DepartmentPatch {
        description: Some("updated copy".into()),
        ..DepartmentPatch::default()
    };
    let updated = service.update(created.id.into(), patch).await.unwrap();

    assert_eq!(updated.slug.as_str(), "oral-surgery");
    assert_eq!(updated.description.as_deref(), Some("updated copy"));
}

#[tokio::test]
async fn rename_colliding_with_another_row_is_rejected() {
    let service = service();
    service.create("Oral Surgery", draft()).await.unwrap();
    let second = service.create("Orthodontics", draft()).await.unwrap();

    let patch = DepartmentPatch {
        name: Some("Oral Surgery".into()),
        ..DepartmentPatch::default()
    };
    let err = service.update(second.id.into(), patch).await.unwrap_err();
    assert!(is_duplicate(&err));

    let unchanged = service.get(second.id.into()).await.unwrap();
    assert_eq!(unchanged.slug.as_str(), "orthodontics");
    assert_eq!(unchanged.name.as_str(), "Orthodontics");
}

#[tokio::test]
async fn rename_may_reclaim_its_own_slug() {
    let service = service();
    let created = service.create("Oral Surgery", draft()).await.unwrap();

    // different display string, derivation lands on the row's current slug
    let patch = DepartmentPatch {
        name: Some("Oral  Surgery".into()),
        ..DepartmentPatch::default()
    };
    let updated = service.update(created.id.into(), patch).await.unwrap();

    assert_eq!(updated.slug.as_str(), "oral-surgery");
    assert_eq!(updated.name.as_str(), "Oral  Surgery");
}

#[tokio::test]
async fn rename_to_symbol_only_name_is_rejected() {
    let service = service();
    let created = service.create("Oral Surgery", draft()).await.unwrap();

    let patch = DepartmentPatch {
        name: Some("???".into()),
        ..DepartmentPatch::default()
    };
    let err = service.update(created.id.into(), patch).await.unwrap_err();
    assert!(is_invalid_name(&err));

    let unchanged = service.get(created.id.into()).await.unwrap();
    assert_eq!(unchanged.name.as_str(), "Oral Surgery");
}

#[tokio::test]
async fn deleted_slug_is_free_for_reuse() {
    let service = service();
    let created = service.create("Oral Surgery", draft()).await.unwrap();

    service.delete(created.id.into()).await.unwrap();

    let recreated = service.create("Oral Surgery", draft()).await.unwrap();
    assert_eq!(recreated.slug.as_str(), "oral-surgery");
    assert_ne!(recreated.id, created.id);
}

#[tokio::test]
async fn update_and_delete_miss_on_unknown_id() {
    let service = service();

    let patch = DepartmentPatch {
        description: Some("ghost".into()),
        ..DepartmentPatch::default()
    };
    let err = service.update(42, patch).await.unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));

    let err = service.delete(42).await.unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::NotFound(_))
    ));
}

#[tokio::test]
async fn slug_lookup_finds_exactly_the_row() {
    let service = service();
    let created = service.create("Oral Surgery", draft()).await.unwrap();
    service.create("Orthodontics", draft()).await.unwrap();

    let found = service.get_by_slug("oral-surgery").await.unwrap();
    assert_eq!(found.id, created.id);

    let err = service.get_by_slug("periodontics").await.unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}
