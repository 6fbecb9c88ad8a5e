use motorpool_core::models::{NewAdministrator, Page, Profile};
use motorpool_db::Database;

use crate::integration::common::setup_test_db;

fn new_admin(email: &str, profile: Profile) -> NewAdministrator {
    NewAdministrator {
        email: email.to_string(),
        password: "secret".to_string(),
        profile,
    }
}

#[tokio::test]
async fn create_and_get_administrator() {
    let (pool, _container) = setup_test_db().await;
    let repo = Database::from_pool(pool).administrator_repo();

    let created = repo
        .create(&new_admin("admin@test.com", Profile::Admin))
        .await
        .unwrap();
    assert_eq!(created.email, "admin@test.com");
    assert_eq!(created.profile, Profile::Admin);

    let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.email, "admin@test.com");
    assert_eq!(fetched.password, "secret");
}

#[tokio::test]
async fn find_by_email_matches_exactly() {
    let (pool, _container) = setup_test_db().await;
    let repo = Database::from_pool(pool).administrator_repo();

    repo.create(&new_admin("editor@test.com", Profile::Editor))
        .await
        .unwrap();

    let found = repo.find_by_email("editor@test.com").await.unwrap();
    assert_eq!(found.unwrap().profile, Profile::Editor);

    let missing = repo.find_by_email("nobody@test.com").await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn duplicate_email_is_rejected_by_storage() {
    let (pool, _container) = setup_test_db().await;
    let repo = Database::from_pool(pool).administrator_repo();

    repo.create(&new_admin("dup@test.com", Profile::Admin))
        .await
        .unwrap();

    let result = repo.create(&new_admin("dup@test.com", Profile::Editor)).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn list_is_paged_in_insertion_order() {
    let (pool, _container) = setup_test_db().await;
    let repo = Database::from_pool(pool).administrator_repo();

    for i in 0..11 {
        repo.create(&new_admin(&format!("admin{i}@test.com"), Profile::Admin))
            .await
            .unwrap();
    }

    let first = repo.list(Page::new(Some(1))).await.unwrap();
    assert_eq!(first.len(), 10);
    assert_eq!(first[0].email, "admin0@test.com");

    let second = repo.list(Page::new(Some(2))).await.unwrap();
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].email, "admin10@test.com");

    // Absent page parameter means page 1
    let default = repo.list(Page::new(None)).await.unwrap();
    assert_eq!(default.len(), 10);
    assert_eq!(default[0].email, "admin0@test.com");
}

#[tokio::test]
async fn delete_reports_whether_a_row_matched() {
    let (pool, _container) = setup_test_db().await;
    let repo = Database::from_pool(pool).administrator_repo();

    let created = repo
        .create(&new_admin("gone@test.com", Profile::Admin))
        .await
        .unwrap();

    assert!(repo.delete(created.id).await.unwrap());
    assert!(repo.get_by_id(created.id).await.unwrap().is_none());
    assert!(!repo.delete(created.id).await.unwrap());
}
