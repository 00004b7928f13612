//! Tests for the user administration service.

use std::sync::Arc;

use rstest::rstest;

use super::*;
use crate::domain::ports::{MockProjectRepository, MockUserRepository};
use crate::domain::{ErrorCode, ProjectId, UserDraft};

type Service = UserAdminService<MockUserRepository, MockProjectRepository>;

fn make_service(users: MockUserRepository, projects: MockProjectRepository) -> Service {
    UserAdminService::new(Arc::new(users), Arc::new(projects))
}

fn fields(name: &str) -> UserFields {
    UserFields {
        name: name.to_owned(),
        email: "ops@example.com".to_owned(),
        enable_email: true,
        phone: "+8613800000000".to_owned(),
        enable_phone: true,
        universal: false,
        rule_level: 1,
    }
}

fn stored_user(id: i32, universal: bool) -> User {
    let mut raw = fields("alice");
    raw.universal = universal;
    let draft = raw.validate().expect("fixture fields are valid");
    User::new(UserId::new(id), draft)
}

fn projects() -> Vec<Project> {
    vec![
        Project::new(ProjectId::new(1), "core"),
        Project::new(ProjectId::new(2), "edge"),
        Project::new(ProjectId::new(3), "batch"),
    ]
}

#[tokio::test]
async fn create_persists_validated_draft() {
    let mut users = MockUserRepository::new();
    users
        .expect_create()
        .withf(|draft: &UserDraft| draft.name.as_str() == "alice")
        .times(1)
        .returning(|draft| Ok(User::new(UserId::new(7), draft.clone())));

    let service = make_service(users, MockProjectRepository::new());
    let user = service
        .create_user(fields("alice"))
        .await
        .expect("create succeeds");

    assert_eq!(user.id(), UserId::new(7));
    assert_eq!(user.name().as_str(), "alice");
}

#[rstest]
#[case::empty_name(fields(""), "name", "empty_name")]
#[case::bad_email(UserFields { email: "nope".into(), ..fields("alice") }, "email", "invalid_email")]
#[case::bad_phone(UserFields { phone: "12".into(), ..fields("alice") }, "phone", "invalid_phone")]
#[case::bad_level(UserFields { rule_level: 3, ..fields("alice") }, "ruleLevel", "invalid_rule_level")]
#[tokio::test]
async fn create_rejects_invalid_fields_without_touching_storage(
    #[case] input: UserFields,
    #[case] field: &str,
    #[case] reason: &str,
) {
    // No expectations: any repository call panics.
    let service = make_service(MockUserRepository::new(), MockProjectRepository::new());

    let err = service.create_user(input).await.expect_err("validation fails");

    assert_eq!(err.code(), ErrorCode::ValidationFailed);
    let details = err.details().expect("validation details");
    assert_eq!(details["field"], field);
    assert_eq!(details["code"], reason);
}

#[tokio::test]
async fn update_rejects_empty_name_without_touching_storage() {
    let service = make_service(MockUserRepository::new(), MockProjectRepository::new());

    let err = service
        .update_user(UserId::new(1), fields(""))
        .await
        .expect_err("validation fails");

    assert_eq!(err.code(), ErrorCode::ValidationFailed);
}

#[rstest]
#[case::not_null(UserPersistenceError::not_null_violation("name"), ErrorCode::NotNullViolation)]
#[case::unique(UserPersistenceError::unique_violation("name"), ErrorCode::UniqueViolation)]
#[case::primary_key(UserPersistenceError::primary_key_violation(), ErrorCode::PrimaryKeyViolation)]
#[case::connection(UserPersistenceError::connection("refused"), ErrorCode::InternalError)]
#[case::query(UserPersistenceError::query("syntax"), ErrorCode::InternalError)]
#[tokio::test]
async fn create_maps_storage_faults(#[case] fault: UserPersistenceError, #[case] code: ErrorCode) {
    let mut users = MockUserRepository::new();
    users
        .expect_create()
        .times(1)
        .return_once(move |_| Err(fault));

    let service = make_service(users, MockProjectRepository::new());
    let err = service
        .create_user(fields("alice"))
        .await
        .expect_err("storage fault surfaces");

    assert_eq!(err.code(), code);
}

#[tokio::test]
async fn duplicate_name_reports_the_field() {
    let mut users = MockUserRepository::new();
    users
        .expect_create()
        .times(1)
        .return_once(|_| Err(UserPersistenceError::unique_violation("name")));

    let service = make_service(users, MockProjectRepository::new());
    let err = service
        .create_user(fields("alice"))
        .await
        .expect_err("duplicate");

    assert_eq!(err.message(), "duplicate user name");
}

#[tokio::test]
async fn not_null_without_column_omits_details() {
    let mut users = MockUserRepository::new();
    users
        .expect_create()
        .times(1)
        .return_once(|_| Err(UserPersistenceError::not_null_violation("")));

    let service = make_service(users, MockProjectRepository::new());
    let err = service
        .create_user(fields("alice"))
        .await
        .expect_err("not null");

    assert_eq!(err.code(), ErrorCode::NotNullViolation);
    assert!(err.details().is_none());
}

#[tokio::test]
async fn update_replaces_every_mutable_field() {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .times(1)
        .return_once(|_| Ok(stored_user(4, true)));
    users
        .expect_save()
        .times(1)
        .returning(|user| Ok(user.clone()));

    let service = make_service(users, MockProjectRepository::new());
    let replacement = UserFields {
        name: "bob".into(),
        email: String::new(),
        enable_email: false,
        phone: String::new(),
        enable_phone: false,
        universal: false,
        rule_level: 0,
    };
    let user = service
        .update_user(UserId::new(4), replacement)
        .await
        .expect("update succeeds");

    assert_eq!(user.id(), UserId::new(4));
    assert_eq!(user.name().as_str(), "bob");
    assert!(user.email().is_empty());
    assert!(user.phone().is_empty());
    assert!(!user.enable_email());
    assert!(!user.universal());
}

#[tokio::test]
async fn update_of_missing_user_is_not_found_and_skips_save() {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .times(1)
        .return_once(|_| Err(UserPersistenceError::not_found()));
    users.expect_save().never();

    let service = make_service(users, MockProjectRepository::new());
    let err = service
        .update_user(UserId::new(99), fields("alice"))
        .await
        .expect_err("missing");

    assert_eq!(err.code(), ErrorCode::NotFound);
    assert_eq!(err.message(), "user not found");
}

#[tokio::test]
async fn update_maps_row_vanishing_before_save_to_not_found() {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .times(1)
        .return_once(|_| Ok(stored_user(4, false)));
    users
        .expect_save()
        .times(1)
        .return_once(|_| Err(UserPersistenceError::not_found()));

    let service = make_service(users, MockProjectRepository::new());
    let err = service
        .update_user(UserId::new(4), fields("alice"))
        .await
        .expect_err("vanished");

    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn delete_delegates_to_atomic_repository_call() {
    let mut users = MockUserRepository::new();
    users
        .expect_delete_with_projects()
        .withf(|id| *id == UserId::new(5))
        .times(1)
        .return_once(|_| Ok(()));

    let service = make_service(users, MockProjectRepository::new());
    service
        .delete_user(UserId::new(5))
        .await
        .expect("delete succeeds");
}

#[tokio::test]
async fn delete_of_missing_user_is_not_found() {
    let mut users = MockUserRepository::new();
    users
        .expect_delete_with_projects()
        .times(1)
        .return_once(|_| Err(UserPersistenceError::not_found()));

    let service = make_service(users, MockProjectRepository::new());
    let err = service
        .delete_user(UserId::new(5))
        .await
        .expect_err("missing");

    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn universal_user_sees_every_project() {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .times(1)
        .return_once(|_| Ok(stored_user(1, true)));
    users.expect_find_projects().never();
    let mut catalogue = MockProjectRepository::new();
    catalogue
        .expect_list()
        .times(1)
        .return_once(|| Ok(projects()));

    let service = make_service(users, catalogue);
    let visible = service
        .user_projects(UserId::new(1))
        .await
        .expect("projects");

    assert_eq!(visible, projects());
}

#[tokio::test]
async fn regular_user_sees_only_associated_projects() {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .times(1)
        .return_once(|_| Ok(stored_user(2, false)));
    users
        .expect_find_projects()
        .times(1)
        .return_once(|_| Ok(vec![Project::new(ProjectId::new(2), "edge")]));
    let mut catalogue = MockProjectRepository::new();
    catalogue.expect_list().never();

    let service = make_service(users, catalogue);
    let visible = service
        .user_projects(UserId::new(2))
        .await
        .expect("projects");

    assert_eq!(visible, vec![Project::new(ProjectId::new(2), "edge")]);
}

#[tokio::test]
async fn projects_for_missing_user_is_not_found() {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .times(1)
        .return_once(|_| Err(UserPersistenceError::not_found()));

    let service = make_service(users, MockProjectRepository::new());
    let err = service
        .user_projects(UserId::new(3))
        .await
        .expect_err("missing");

    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn project_catalogue_fault_is_internal() {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .times(1)
        .return_once(|_| Ok(stored_user(1, true)));
    let mut catalogue = MockProjectRepository::new();
    catalogue
        .expect_list()
        .times(1)
        .return_once(|| Err(ProjectPersistenceError::connection("down")));

    let service = make_service(users, catalogue);
    let err = service
        .user_projects(UserId::new(1))
        .await
        .expect_err("fault");

    assert_eq!(err.code(), ErrorCode::InternalError);
}

#[tokio::test]
async fn list_returns_repository_rows() {
    let mut users = MockUserRepository::new();
    users
        .expect_list()
        .times(1)
        .return_once(|| Ok(vec![stored_user(1, false), stored_user(2, true)]));

    let service = make_service(users, MockProjectRepository::new());
    let listed = service.list_users().await.expect("list");

    assert_eq!(listed.len(), 2);
}
