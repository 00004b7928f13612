//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Administered users.
    users (id) {
        id -> Int4,
        /// Unique; constraint `users_name_key`.
        name -> Varchar,
        /// Empty string when unset.
        email -> Varchar,
        enable_email -> Bool,
        /// Empty string when unset.
        phone -> Varchar,
        enable_phone -> Bool,
        universal -> Bool,
        rule_level -> Int4,
    }
}

diesel::table! {
    /// Projects users may be granted visibility into.
    projects (id) {
        id -> Int4,
        name -> Varchar,
    }
}

diesel::table! {
    /// Pure membership relation between users and projects.
    user_projects (user_id, project_id) {
        user_id -> Int4,
        project_id -> Int4,
    }
}

diesel::joinable!(user_projects -> users (user_id));
diesel::joinable!(user_projects -> projects (project_id));

diesel::allow_tables_to_appear_in_same_query!(users, projects, user_projects);
