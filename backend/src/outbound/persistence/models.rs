//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use diesel::prelude::*;

use crate::domain::{Project, ProjectId, User, UserDraft, UserFields, UserId};

use super::schema::{projects, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub enable_email: bool,
    pub phone: String,
    pub enable_phone: bool,
    pub universal: bool,
    pub rule_level: i32,
}

impl TryFrom<UserRow> for User {
    type Error = String;

    /// Stored rows are re-validated so a row written outside this service
    /// cannot smuggle an invalid value into the domain.
    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let UserRow {
            id,
            name,
            email,
            enable_email,
            phone,
            enable_phone,
            universal,
            rule_level,
        } = row;
        let draft = UserFields {
            name,
            email,
            enable_email,
            phone,
            enable_phone,
            universal,
            rule_level,
        }
        .validate()
        .map_err(|err| format!("stored user {id} is invalid: {err}"))?;
        Ok(User::new(UserId::new(id), draft))
    }
}

/// Insertable struct for creating user records; `id` comes from the sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub enable_email: bool,
    pub phone: &'a str,
    pub enable_phone: bool,
    pub universal: bool,
    pub rule_level: i32,
}

impl<'a> From<&'a UserDraft> for NewUserRow<'a> {
    fn from(draft: &'a UserDraft) -> Self {
        Self {
            name: draft.name.as_str(),
            email: draft.email.as_str(),
            enable_email: draft.enable_email,
            phone: draft.phone.as_str(),
            enable_phone: draft.enable_phone,
            universal: draft.universal,
            rule_level: draft.rule_level.into(),
        }
    }
}

/// Changeset overwriting every mutable column.
///
/// No field is optional, so Diesel never skips a column: this is what makes
/// an update a full replace.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct UserChangeset<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub enable_email: bool,
    pub phone: &'a str,
    pub enable_phone: bool,
    pub universal: bool,
    pub rule_level: i32,
}

impl<'a> From<&'a User> for UserChangeset<'a> {
    fn from(user: &'a User) -> Self {
        Self {
            name: user.name().as_str(),
            email: user.email().as_str(),
            enable_email: user.enable_email(),
            phone: user.phone().as_str(),
            enable_phone: user.enable_phone(),
            universal: user.universal(),
            rule_level: user.rule_level().into(),
        }
    }
}

/// Row struct for reading from the projects table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = projects)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ProjectRow {
    pub id: i32,
    pub name: String,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Project::new(ProjectId::new(row.id), row.name)
    }
}
