//! PostgreSQL repository tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test pg_repository

use amc_core::{
    AdminLog, Ban, DomainError, EntityId, EntityKind, EntityStore, GroupPrivilege, Intelligence,
    Merit, Message, MissionGroupView, MissionNote, MissionUserView, News, Notification, UserGroup,
    UserMission,
};
use integration_tests::{check_test_env, fixtures::*, pg_store};
use serde_json::json;

// ============================================================================
// Reference validation
// ============================================================================

#[tokio::test]
async fn test_create_with_unknown_reference_is_refused() {
    if !check_test_env().await {
        return;
    }
    let store = pg_store().await.expect("Failed to connect to test database");

    let missing = EntityId::new(i64::MAX);
    let mut ban = Ban::new(missing, missing, "spam".to_string());

    let err = store.bans().create(&mut ban).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::InvalidReference {
            kind: EntityKind::User,
            ..
        }
    ));
    assert_eq!(ban.id, None);
}

#[tokio::test]
async fn test_update_cannot_point_at_missing_row() {
    if !check_test_env().await {
        return;
    }
    let store = pg_store().await.expect("Failed to connect to test database");

    let mut alice = unique_user();
    let mut admin = unique_admin();
    store.users().create(&mut alice).await.unwrap();
    store.users().create(&mut admin).await.unwrap();

    let mut ban = Ban::new(alice.id.unwrap(), admin.id.unwrap(), "conduct".to_string());
    ban.ban_date = Some(epoch_now());
    store.bans().create(&mut ban).await.unwrap();

    ban.user_id = Some(EntityId::new(i64::MAX));
    let err = store.bans().update(&ban).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::InvalidReference {
            kind: EntityKind::User,
            ..
        }
    ));
}

#[tokio::test]
async fn test_check_reference_then_wire() {
    if !check_test_env().await {
        return;
    }
    let store = pg_store().await.expect("Failed to connect to test database");
    let users = store.users();

    let mut alice = unique_user();
    users.create(&mut alice).await.unwrap();

    let checked = users.check_reference(alice.id.unwrap()).await.unwrap();
    let mut note = Notification::new(checked, "welcome aboard".to_string());
    note.note_date = Some(epoch_now());
    store.notifications().create(&mut note).await.unwrap();

    let inbox = store
        .notifications()
        .find_by_user(alice.id.unwrap())
        .await
        .unwrap();
    assert!(inbox.contains(&note));
}

#[tokio::test]
async fn test_membership_names_the_missing_side() {
    if !check_test_env().await {
        return;
    }
    let store = pg_store().await.expect("Failed to connect to test database");

    let mut alice = unique_user();
    store.users().create(&mut alice).await.unwrap();

    let mut membership = UserGroup::new(alice.id.unwrap(), EntityId::new(i64::MAX));
    let err = store.user_groups().create(&mut membership).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::InvalidReference {
            kind: EntityKind::Group,
            ..
        }
    ));
}

#[tokio::test]
async fn test_delete_of_referenced_row_is_blocked() {
    if !check_test_env().await {
        return;
    }
    let store = pg_store().await.expect("Failed to connect to test database");

    let mut alice = unique_user();
    let mut admin = unique_admin();
    store.users().create(&mut alice).await.unwrap();
    store.users().create(&mut admin).await.unwrap();

    let mut ban = Ban::new(alice.id.unwrap(), admin.id.unwrap(), "spam".to_string());
    store.bans().create(&mut ban).await.unwrap();

    // The ban still points at alice, so the row cannot go away
    let err = store.users().delete(&mut alice).await.unwrap_err();
    assert!(matches!(err, DomainError::Storage(_)));
    assert!(alice.id.is_some());

    // Removing the ban unblocks the delete
    store.bans().delete(&mut ban).await.unwrap();
    store.users().delete(&mut alice).await.unwrap();
    assert_eq!(alice.id, None);
}

// ============================================================================
// Typed finders
// ============================================================================

#[tokio::test]
async fn test_find_user_by_username_and_email() {
    if !check_test_env().await {
        return;
    }
    let store = pg_store().await.expect("Failed to connect to test database");
    let users = store.users();

    let mut user = unique_user();
    users.create(&mut user).await.unwrap();

    let by_name = users
        .find_by_username(user.username.as_deref().unwrap())
        .await
        .unwrap();
    assert_eq!(by_name, vec![user.clone()]);

    let by_email = users
        .find_by_email(user.email.as_deref().unwrap())
        .await
        .unwrap();
    assert_eq!(by_email, vec![user]);
}

#[tokio::test]
async fn test_find_admins_sees_only_flagged_accounts() {
    if !check_test_env().await {
        return;
    }
    let store = pg_store().await.expect("Failed to connect to test database");
    let users = store.users();

    let mut regular = unique_user();
    let mut admin = unique_admin();
    users.create(&mut regular).await.unwrap();
    users.create(&mut admin).await.unwrap();

    let admins = users.find_admins().await.unwrap();
    assert!(admins.contains(&admin));
    assert!(!admins.contains(&regular));
}

#[tokio::test]
async fn test_bans_by_user_and_active() {
    if !check_test_env().await {
        return;
    }
    let store = pg_store().await.expect("Failed to connect to test database");

    let mut alice = unique_user();
    let mut admin = unique_admin();
    store.users().create(&mut alice).await.unwrap();
    store.users().create(&mut admin).await.unwrap();

    let mut lifted = Ban::new(alice.id.unwrap(), admin.id.unwrap(), "old".to_string());
    lifted.active = Some(false);
    let mut current = Ban::new(alice.id.unwrap(), admin.id.unwrap(), "new".to_string());
    current.expiry = Some(Ban::NO_EXPIRY);
    store.bans().create(&mut lifted).await.unwrap();
    store.bans().create(&mut current).await.unwrap();

    let for_alice = store.bans().find_by_user(alice.id.unwrap()).await.unwrap();
    assert_eq!(for_alice, vec![lifted.clone(), current.clone()]);

    let active = store.bans().find_active().await.unwrap();
    assert!(active.contains(&current));
    assert!(!active.contains(&lifted));
}

#[tokio::test]
async fn test_merits_by_user() {
    if !check_test_env().await {
        return;
    }
    let store = pg_store().await.expect("Failed to connect to test database");

    let mut alice = unique_user();
    let mut admin = unique_admin();
    store.users().create(&mut alice).await.unwrap();
    store.users().create(&mut admin).await.unwrap();

    let mut merit = Merit::new(
        alice.id.unwrap(),
        admin.id.unwrap(),
        "valor".to_string(),
        25,
    );
    merit.merit_date = Some(epoch_now());
    store.merits().create(&mut merit).await.unwrap();

    let earned = store.merits().find_by_user(alice.id.unwrap()).await.unwrap();
    assert_eq!(earned, vec![merit]);
}

#[tokio::test]
async fn test_news_published_and_by_author() {
    if !check_test_env().await {
        return;
    }
    let store = pg_store().await.expect("Failed to connect to test database");

    let mut author = unique_admin();
    store.users().create(&mut author).await.unwrap();

    let mut draft = News::new(
        author.id.unwrap(),
        "Draft".to_string(),
        "...".to_string(),
    );
    let mut posted = News::new(
        author.id.unwrap(),
        "Posted".to_string(),
        "...".to_string(),
    );
    posted.published = Some(true);
    posted.post_date = Some(epoch_now());
    store.news().create(&mut draft).await.unwrap();
    store.news().create(&mut posted).await.unwrap();

    let by_author = store.news().find_by_author(author.id.unwrap()).await.unwrap();
    assert_eq!(by_author, vec![draft.clone(), posted.clone()]);

    let published = store.news().find_published().await.unwrap();
    assert!(published.contains(&posted));
    assert!(!published.contains(&draft));
}

#[tokio::test]
async fn test_unread_messages_for_recipient() {
    if !check_test_env().await {
        return;
    }
    let store = pg_store().await.expect("Failed to connect to test database");

    let mut sender = unique_user();
    let mut recipient = unique_user();
    store.users().create(&mut sender).await.unwrap();
    store.users().create(&mut recipient).await.unwrap();

    let mut unread = Message::new(
        sender.id.unwrap(),
        recipient.id.unwrap(),
        "hello".to_string(),
        "first".to_string(),
    );
    let mut opened = Message::new(
        sender.id.unwrap(),
        recipient.id.unwrap(),
        "hello again".to_string(),
        "second".to_string(),
    );
    opened.read = Some(true);
    store.messages().create(&mut unread).await.unwrap();
    store.messages().create(&mut opened).await.unwrap();

    let pending = store
        .messages()
        .find_unread(recipient.id.unwrap())
        .await
        .unwrap();
    assert!(pending.contains(&unread));
    assert!(!pending.contains(&opened));

    let received = store
        .messages()
        .find_by_recipient(recipient.id.unwrap())
        .await
        .unwrap();
    assert_eq!(received, vec![unread, opened]);
}

#[tokio::test]
async fn test_intelligence_by_classification() {
    if !check_test_env().await {
        return;
    }
    let store = pg_store().await.expect("Failed to connect to test database");

    let mut author = unique_admin();
    store.users().create(&mut author).await.unwrap();

    let marker = format!("level-{}", unique_suffix());
    let mut report = Intelligence::new(
        author.id.unwrap(),
        "Field report".to_string(),
        "...".to_string(),
    );
    report.classification = Some(marker.clone());
    report.intel_date = Some(epoch_now());
    store.intelligence().create(&mut report).await.unwrap();

    let found = store
        .intelligence()
        .find_by_classification(&marker)
        .await
        .unwrap();
    assert_eq!(found, vec![report]);
}

#[tokio::test]
async fn test_mission_notes_by_mission() {
    if !check_test_env().await {
        return;
    }
    let store = pg_store().await.expect("Failed to connect to test database");

    let mut mission = unique_mission();
    let mut author = unique_user();
    store.missions().create(&mut mission).await.unwrap();
    store.users().create(&mut author).await.unwrap();

    let mut note = MissionNote::new(
        mission.id.unwrap(),
        author.id.unwrap(),
        "recon complete".to_string(),
    );
    note.note_date = Some(epoch_now());
    store.mission_notes().create(&mut note).await.unwrap();

    let notes = store
        .mission_notes()
        .find_by_mission(mission.id.unwrap())
        .await
        .unwrap();
    assert_eq!(notes, vec![note]);
}

#[tokio::test]
async fn test_mission_visibility_grants() {
    if !check_test_env().await {
        return;
    }
    let store = pg_store().await.expect("Failed to connect to test database");

    let mut mission = unique_mission();
    let mut group = unique_group();
    let mut viewer = unique_user();
    store.missions().create(&mut mission).await.unwrap();
    store.groups().create(&mut group).await.unwrap();
    store.users().create(&mut viewer).await.unwrap();

    let mut group_grant = MissionGroupView::new(mission.id.unwrap(), group.id.unwrap());
    let mut user_grant = MissionUserView::new(mission.id.unwrap(), viewer.id.unwrap());
    store.mission_group_views().create(&mut group_grant).await.unwrap();
    store.mission_user_views().create(&mut user_grant).await.unwrap();

    let group_grants = store
        .mission_group_views()
        .find_by_mission(mission.id.unwrap())
        .await
        .unwrap();
    assert_eq!(group_grants, vec![group_grant]);

    let user_grants = store
        .mission_user_views()
        .find_by_user(viewer.id.unwrap())
        .await
        .unwrap();
    assert_eq!(user_grants, vec![user_grant]);
}

#[tokio::test]
async fn test_assignments_round_trip() {
    if !check_test_env().await {
        return;
    }
    let store = pg_store().await.expect("Failed to connect to test database");

    let mut mission = unique_mission();
    let mut operative = unique_user();
    store.missions().create(&mut mission).await.unwrap();
    store.users().create(&mut operative).await.unwrap();

    let mut assignment = UserMission::new(operative.id.unwrap(), mission.id.unwrap());
    assignment.assigned_date = Some(epoch_now());
    store.user_missions().create(&mut assignment).await.unwrap();

    assignment.completed = Some(true);
    store.user_missions().update(&assignment).await.unwrap();

    let on_mission = store
        .user_missions()
        .find_by_mission(mission.id.unwrap())
        .await
        .unwrap();
    assert_eq!(on_mission, vec![assignment]);
}

#[tokio::test]
async fn test_group_privileges_by_group() {
    if !check_test_env().await {
        return;
    }
    let store = pg_store().await.expect("Failed to connect to test database");

    let mut group = unique_group();
    store.groups().create(&mut group).await.unwrap();

    let mut privilege = GroupPrivilege::new(group.id.unwrap(), "post_news".to_string());
    privilege.granted_date = Some(epoch_now());
    store.group_privileges().create(&mut privilege).await.unwrap();

    let granted = store
        .group_privileges()
        .find_by_group(group.id.unwrap())
        .await
        .unwrap();
    assert_eq!(granted, vec![privilege]);
}

// ============================================================================
// Audit log
// ============================================================================

#[tokio::test]
async fn test_admin_log_survives_target_deletion() {
    if !check_test_env().await {
        return;
    }
    let store = pg_store().await.expect("Failed to connect to test database");

    let mut admin = unique_admin();
    let mut group = unique_group();
    store.users().create(&mut admin).await.unwrap();
    store.groups().create(&mut group).await.unwrap();

    let group_id = group.id.unwrap();
    let mut entry = AdminLog::new(admin.id.unwrap(), "group.delete".to_string())
        .with_target(EntityKind::Group, group_id);
    entry.detail = Some(json!({ "name": group.name }));
    entry.log_date = Some(epoch_now());
    store.admin_logs().create(&mut entry).await.unwrap();

    store.groups().delete(&mut group).await.unwrap();

    let trail = store
        .admin_logs()
        .find_by_admin(admin.id.unwrap())
        .await
        .unwrap();
    assert_eq!(trail, vec![entry.clone()]);
    assert_eq!(trail[0].target_id, Some(group_id));
}

#[tokio::test]
async fn test_row_counts_track_inserts() {
    if !check_test_env().await {
        return;
    }
    let store = pg_store().await.expect("Failed to connect to test database");

    let before = store.groups().count().await.unwrap();
    let mut group = unique_group();
    store.groups().create(&mut group).await.unwrap();

    let after = store.groups().count().await.unwrap();
    assert!(after > before);
}
