// src/infrastructure/repositories/mod.rs
mod postgres_blog;
mod postgres_departments;
mod postgres_faculty;
mod postgres_programs;
mod postgres_services;

pub use postgres_blog::PostgresBlogStore;
pub use postgres_departments::PostgresDepartmentStore;
pub use postgres_faculty::PostgresFacultyStore;
pub use postgres_programs::PostgresProgramStore;
pub use postgres_services::PostgresClinicServiceStore;

use crate::domain::errors::DomainError;

const SLUG_CONSTRAINT_SUFFIX: &str = "_slug_key";
const DEPARTMENT_FK_SUFFIX: &str = "_department_id_fkey";

/// Map sqlx failures into the domain taxonomy. Every content table names its
/// slug constraint `<table>_slug_key`, so a unique violation there is the
/// losing side of a create/rename race and surfaces as the same duplicate
/// error the fast-path check produces.
pub(crate) fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                if constraint.ends_with(SLUG_CONSTRAINT_SUFFIX) {
                    return DomainError::DuplicateName("slug already exists".into());
                }
                if constraint.ends_with(DEPARTMENT_FK_SUFFIX) {
                    return DomainError::NotFound("department not found".into());
                }
                return DomainError::Persistence(format!(
                    "database constraint violation: {constraint}"
                ));
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::DuplicateName("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
