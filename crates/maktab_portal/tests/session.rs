//! crates/maktab_portal/tests/session.rs
//!
//! End-to-end lifecycle tests for the session stores, run against the
//! in-memory adapters with the artificial login delay dialed down.

use std::sync::Arc;
use std::time::Duration;

use maktab_core::domain::{EntityKind, ProfileUpdate, Status};
use maktab_core::error::{AuthError, DomainError};
use maktab_core::ports::FlagStore;
use maktab_portal::adapters::{directory::FixtureDirectory, flags::MemoryFlagStore};
use maktab_portal::{build_stores, AdminStore, Config, InstructorStore, PortalError};

fn collaborators(delay: Duration) -> (Arc<MemoryFlagStore>, Arc<FixtureDirectory>) {
    (
        Arc::new(MemoryFlagStore::new()),
        Arc::new(FixtureDirectory::new(delay)),
    )
}

#[tokio::test]
async fn admin_login_then_logout_round_trip() {
    let (flags, directory) = collaborators(Duration::ZERO);
    let mut store = AdminStore::new(flags, directory);
    let rx = store.subscribe();

    let session = store.login("admin@example.com", "admin123").await.unwrap();
    assert!(store.is_authenticated());
    assert_eq!(store.session(), Some(&session));
    {
        let snapshot = rx.borrow();
        assert!(snapshot.authenticated);
        assert!(!snapshot.loading);
        assert_eq!(
            snapshot.profile.as_ref().map(|p| p.name.as_str()),
            Some("Dr. Ahmed Hassan")
        );
    }

    store.logout().await.unwrap();
    assert!(!store.is_authenticated());
    assert!(store.state().is_none());
    let snapshot = rx.borrow();
    assert!(!snapshot.authenticated);
    assert!(snapshot.profile.is_none());
}

#[tokio::test]
async fn rejected_credentials_leave_the_store_unauthenticated() {
    let (flags, directory) = collaborators(Duration::ZERO);
    let mut store = AdminStore::new(flags.clone(), directory);

    let err = store.login("admin@example.com", "wrong").await.unwrap_err();
    assert!(matches!(
        err,
        PortalError::Auth(AuthError::InvalidCredentials)
    ));
    assert!(!store.is_authenticated());
    assert!(store.state().is_none());
    // The failure never persisted a flag either.
    assert!(!flags.get("maktab_admin_auth").await.unwrap());
}

#[tokio::test]
async fn logout_is_idempotent() {
    let (flags, directory) = collaborators(Duration::ZERO);
    let mut store = AdminStore::new(flags, directory);
    store.login("admin@example.com", "admin123").await.unwrap();

    store.logout().await.unwrap();
    let rx = store.subscribe();
    let after_first = rx.borrow().clone();
    store.logout().await.unwrap();
    assert_eq!(*rx.borrow(), after_first);
    assert!(!store.is_authenticated());
}

#[tokio::test]
async fn login_when_authenticated_is_a_no_op_returning_the_same_session() {
    let (flags, directory) = collaborators(Duration::ZERO);
    let mut store = AdminStore::new(flags, directory);

    let first = store.login("admin@example.com", "admin123").await.unwrap();
    let second = store.login("admin@example.com", "admin123").await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn loading_snapshot_is_observable_during_login() {
    let (flags, directory) = collaborators(Duration::from_millis(200));
    let store = Arc::new(tokio::sync::Mutex::new(AdminStore::new(flags, directory)));
    let mut rx = store.lock().await.subscribe();

    let task = tokio::spawn({
        let store = store.clone();
        async move {
            store
                .lock()
                .await
                .login("admin@example.com", "admin123")
                .await
        }
    });

    rx.changed().await.unwrap();
    {
        let snapshot = rx.borrow();
        assert!(snapshot.loading);
        assert!(!snapshot.authenticated);
    }

    task.await.unwrap().unwrap();
    rx.changed().await.unwrap();
    assert!(rx.borrow().authenticated);
}

#[tokio::test]
async fn restore_reestablishes_a_session_but_not_prior_edits() {
    let (flags, directory) = collaborators(Duration::ZERO);

    {
        let mut store = AdminStore::new(flags.clone(), directory.clone());
        store.login("admin@example.com", "admin123").await.unwrap();
        store
            .update(|state| {
                state.update_profile(ProfileUpdate {
                    name: Some("Renamed Admin".to_string()),
                    ..ProfileUpdate::default()
                });
                Ok(())
            })
            .unwrap();
        // Store dropped without logout: the flag stays persisted.
    }

    let mut revived = AdminStore::new(flags.clone(), directory.clone());
    let session = revived.restore_session().await.unwrap();
    assert!(session.is_some());
    assert!(revived.is_authenticated());
    // Only the flag survives; the working copy is the fixture again.
    assert_eq!(revived.state().unwrap().profile.name, "Dr. Ahmed Hassan");

    let mut cold = AdminStore::new(Arc::new(MemoryFlagStore::new()), directory);
    assert!(cold.restore_session().await.unwrap().is_none());
}

#[tokio::test]
async fn mutations_require_a_session_and_republish_snapshots() {
    let (flags, directory) = collaborators(Duration::ZERO);
    let mut store = AdminStore::new(flags, directory);

    let err = store
        .update(|state| {
            state.update_student_status(1, Status::Inactive)?;
            Ok(())
        })
        .unwrap_err();
    assert!(matches!(err, PortalError::NotAuthenticated));

    store.login("admin@example.com", "admin123").await.unwrap();
    let rx = store.subscribe();
    store
        .update(|state| {
            state.update_profile(ProfileUpdate {
                name: Some("Dr. A. Hassan".to_string()),
                ..ProfileUpdate::default()
            });
            Ok(())
        })
        .unwrap();
    assert_eq!(
        rx.borrow().profile.as_ref().map(|p| p.name.clone()),
        Some("Dr. A. Hassan".to_string())
    );
}

#[tokio::test]
async fn unresolved_ids_surface_not_found_through_the_store() {
    let (flags, directory) = collaborators(Duration::ZERO);
    let mut store = AdminStore::new(flags, directory);
    store.login("admin@example.com", "admin123").await.unwrap();

    let before = store.state().unwrap().clone();
    let err = store
        .update(|state| state.assign_student_to_instructor(999, 11, 21))
        .unwrap_err();
    assert!(matches!(
        err,
        PortalError::Domain(DomainError::NotFound {
            kind: EntityKind::Student,
            id: 999
        })
    ));
    assert_eq!(store.state().unwrap(), &before);
}

#[tokio::test]
async fn instructor_grades_and_regrades_through_the_store() {
    let (flags, directory) = collaborators(Duration::ZERO);
    let mut store = InstructorStore::new(flags, directory);
    store.login("fatima@maktab.example", "teach123").await.unwrap();

    // Bilal (student 2) has handed in assignment 31 in the fixture.
    store
        .update(|state| state.grade_assignment(21, 31, 2, 85, "good"))
        .unwrap();
    store
        .update(|state| state.grade_assignment(21, 31, 2, 90, "better"))
        .unwrap();

    let state = store.state().unwrap();
    let assignment = state.courses()[0]
        .assignments
        .iter()
        .find(|a| a.id == 31)
        .unwrap();
    let submissions: Vec<_> = assignment
        .submissions
        .iter()
        .filter(|s| s.student_id == 2)
        .collect();
    assert_eq!(submissions.len(), 1);
    assert_eq!(submissions[0].grade, Some(90));
    assert_eq!(submissions[0].feedback.as_deref(), Some("better"));
}

#[tokio::test]
async fn realm_flags_are_keyed_independently() {
    let (flags, directory) = collaborators(Duration::ZERO);
    let mut admin = AdminStore::new(flags.clone(), directory.clone());
    let mut instructor = InstructorStore::new(flags.clone(), directory.clone());

    admin.login("admin@example.com", "admin123").await.unwrap();
    assert!(instructor.restore_session().await.unwrap().is_none());

    instructor
        .login("fatima@maktab.example", "teach123")
        .await
        .unwrap();
    admin.logout().await.unwrap();
    assert!(instructor.is_authenticated());
    assert!(flags.get("maktab_instructor_auth").await.unwrap());
    assert!(!flags.get("maktab_admin_auth").await.unwrap());
}

#[tokio::test]
async fn built_stores_share_a_browser_but_not_a_session() {
    let config = Config {
        login_delay: Duration::ZERO,
        log_level: tracing::Level::INFO,
    };
    let (mut student, mut instructor, mut admin) = build_stores(&config);

    admin.login("admin@example.com", "admin123").await.unwrap();
    student.login("amina@maktab.example", "learn123").await.unwrap();
    assert!(instructor.restore_session().await.unwrap().is_none());

    admin.logout().await.unwrap();
    assert!(student.is_authenticated());
    assert_eq!(
        student.state().map(|s| s.profile.name.as_str()),
        Some("Amina Yusuf")
    );
}

#[tokio::test]
async fn snapshots_serialize_with_the_consumer_contract_shape() {
    let (flags, directory) = collaborators(Duration::ZERO);
    let mut store = AdminStore::new(flags, directory);
    store.login("admin@example.com", "admin123").await.unwrap();

    let snapshot = store.subscribe().borrow().clone();
    let value = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(value["authenticated"], true);
    assert_eq!(value["loading"], false);
    assert_eq!(value["profile"]["email"], "admin@example.com");
}
