// src/infrastructure/seed.rs
use crate::application::content::ContentService;
use crate::application::error::ApplicationResult;
use crate::domain::department::{DepartmentDraft, DepartmentFilter, Departments};

/// Seed the default departments on first boot so the public site has
/// something to render before an editor logs in. A populated table is left
/// alone.
pub async fn seed_default_departments(
    departments: &ContentService<Departments>,
) -> ApplicationResult<()> {
    let existing = departments
        .list(DepartmentFilter {
            include_inactive: true,
        })
        .await?;
    if !existing.is_empty() {
        return Ok(());
    }

    tracing::info!("no departments found, seeding defaults");

    let defaults: [(&str, &str); 4] = [
        (
            "General Dentistry",
            "Comprehensive dental care including preventive and restorative treatments",
        ),
        (
            "Orthodontics",
            "Correction of teeth and jaw alignment using braces and aligners",
        ),
        (
            "Oral & Maxillofacial Surgery",
            "Surgical procedures for the mouth, jaw, and face",
        ),
        (
            "Pediatric Dentistry",
            "Specialized dental care for children and adolescents",
        ),
    ];

    for (order, (name, description)) in defaults.into_iter().enumerate() {
        let draft = DepartmentDraft {
            description: Some(description.to_owned()),
            icon: None,
            image: None,
            is_active: true,
            display_order: i32::try_from(order).unwrap_or(0) + 1,
        };
        let created = departments.create(name, draft).await?;
        tracing::info!(slug = %created.slug, "seeded department");
    }

    Ok(())
}
