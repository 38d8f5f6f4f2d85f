mod common;

use std::sync::Arc;

use boop::backend::{DEMO_PASSWORD, DEMO_PHONE};
use boop::session::Platform;
use boop::StoreError;
use common::memory_session;

#[tokio::test(start_paused = true)]
async fn sign_in_with_known_credentials() {
    let (store, _) = memory_session();

    let user = store.sign_in("1234567890", "password").await.unwrap();

    let state = store.state();
    assert!(state.is_authenticated);
    assert_eq!(state.user.as_ref().unwrap().phone_number, "1234567890");
    assert_eq!(user.username, "boopuser");
    assert!(state.error.is_none());
    assert!(!state.is_loading());
}

#[tokio::test(start_paused = true)]
async fn sign_in_with_wrong_credentials() {
    let (store, _) = memory_session();

    let result = store.sign_in("0000000000", "x").await;

    assert!(matches!(result, Err(StoreError::InvalidCredentials)));
    let state = store.state();
    assert!(!state.is_authenticated);
    assert!(state.user.is_none());
    assert_eq!(
        state.error.as_deref(),
        Some("Invalid phone number or password")
    );
    assert!(!state.is_loading());
}

#[tokio::test(start_paused = true)]
async fn sign_up_then_verify() {
    let (store, _) = memory_session();

    store
        .sign_up("+15551234567", "newbie", "secret1")
        .await
        .unwrap();

    // Account created, identity unconfirmed.
    let state = store.state();
    assert!(state.user.is_some());
    assert!(!state.is_authenticated);
    assert!(state.is_verification_pending());
    let user = state.user.unwrap();
    assert_eq!(user.phone_number, "+15551234567");
    assert_eq!(user.username, "newbie");
    assert_eq!(user.connected_socials.connected_count(), 0);
    assert_eq!(user.points, 250);

    store.verify_code("123456").await.unwrap();
    assert!(store.is_authenticated());
    assert!(store.user().is_some());
}

#[tokio::test(start_paused = true)]
async fn wrong_code_leaves_account_unverified() {
    let (store, _) = memory_session();
    store.sign_up("+15551234567", "newbie", "secret1").await.unwrap();

    let result = store.verify_code("000000").await;

    assert!(matches!(result, Err(StoreError::InvalidCode)));
    assert!(!store.is_authenticated());
    assert_eq!(store.error().as_deref(), Some("Invalid verification code"));
}

#[tokio::test(start_paused = true)]
async fn verify_without_pending_account_keeps_auth_gate() {
    let (store, _) = memory_session();

    let result = store.verify_code("123456").await;

    assert!(matches!(result, Err(StoreError::NoActiveUser)));
    assert!(!store.is_authenticated());
    assert_eq!(store.error().as_deref(), Some("Failed to verify code"));
}

#[tokio::test(start_paused = true)]
async fn new_account_cannot_sign_in_after_sign_out() {
    let (store, _) = memory_session();
    store.sign_up("+15551234567", "newbie", "secret1").await.unwrap();
    store.verify_code("123456").await.unwrap();
    store.sign_out();

    let result = store.sign_in("+15551234567", "secret1").await;
    assert!(matches!(result, Err(StoreError::InvalidCredentials)));
}

#[tokio::test(start_paused = true)]
async fn sign_out_clears_session() {
    let (store, _) = memory_session();
    store.sign_in(DEMO_PHONE, DEMO_PASSWORD).await.unwrap();

    store.sign_out();

    let state = store.state();
    assert!(state.user.is_none());
    assert!(!state.is_authenticated);
}

#[tokio::test(start_paused = true)]
async fn connect_then_disconnect_restores_flag() {
    let (store, _) = memory_session();
    store.sign_in(DEMO_PHONE, DEMO_PASSWORD).await.unwrap();
    let before = store.user().unwrap().connected_socials.instagram;

    store.connect_social(Platform::Instagram).await.unwrap();
    assert!(store.user().unwrap().connected_socials.instagram);

    store.disconnect_social(Platform::Instagram).await.unwrap();
    assert_eq!(store.user().unwrap().connected_socials.instagram, before);
    assert!(!before);
}

#[tokio::test(start_paused = true)]
async fn social_toggle_without_user_reports_fallback() {
    let (store, _) = memory_session();

    let result = store.connect_social(Platform::Tiktok).await;

    assert!(matches!(result, Err(StoreError::NoActiveUser)));
    assert_eq!(store.error().as_deref(), Some("Failed to connect tiktok"));

    let result = store.disconnect_social(Platform::Snapchat).await;
    assert!(result.is_err());
    assert_eq!(store.error().as_deref(), Some("Failed to disconnect snapchat"));
}

#[tokio::test(start_paused = true)]
async fn profile_edits_require_user() {
    let (store, _) = memory_session();

    assert!(store.update_username("someone").await.is_err());
    assert_eq!(store.error().as_deref(), Some("Failed to update username"));
    assert!(store.update_profile_photo("file:///me.jpg").await.is_err());
    assert_eq!(
        store.error().as_deref(),
        Some("Failed to update profile photo")
    );

    store.sign_in(DEMO_PHONE, DEMO_PASSWORD).await.unwrap();
    store.update_username("renamed").await.unwrap();
    store.update_profile_photo("file:///me.jpg").await.unwrap();

    let user = store.user().unwrap();
    assert_eq!(user.username, "renamed");
    assert_eq!(user.profile_photo.as_deref(), Some("file:///me.jpg"));
    assert_eq!(user.initial(), Some('R'));
    assert!(store.error().is_none());
}

#[tokio::test(start_paused = true)]
async fn password_change_only_checks_current() {
    let (store, _) = memory_session();
    store.sign_in(DEMO_PHONE, DEMO_PASSWORD).await.unwrap();
    let before = store.state();

    store.update_password("password", "newsecret").await.unwrap();
    assert_eq!(store.state(), before);

    let result = store.update_password("wrong", "newsecret").await;
    assert!(matches!(result, Err(StoreError::IncorrectPassword)));
    assert_eq!(store.error().as_deref(), Some("Current password is incorrect"));

    // New password was never stored.
    store.sign_out();
    assert!(store.sign_in(DEMO_PHONE, "newsecret").await.is_err());
    store.sign_in(DEMO_PHONE, DEMO_PASSWORD).await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn next_action_clears_previous_error() {
    let (store, _) = memory_session();
    store.sign_in("0000000000", "x").await.unwrap_err();
    assert!(store.error().is_some());

    store.sign_in(DEMO_PHONE, DEMO_PASSWORD).await.unwrap();
    assert!(store.error().is_none());
}

#[tokio::test(start_paused = true)]
async fn clear_error_resets_message() {
    let (store, _) = memory_session();
    store.sign_in("0000000000", "x").await.unwrap_err();

    store.clear_error();

    assert!(store.error().is_none());
}

#[tokio::test(start_paused = true)]
async fn busy_while_round_trip_pending() {
    let (store, _) = memory_session();
    let store = Arc::new(store);
    let mut rx = store.subscribe();

    let handle = {
        let store = Arc::clone(&store);
        tokio::spawn(async move { store.sign_in(DEMO_PHONE, DEMO_PASSWORD).await })
    };

    rx.changed().await.unwrap();
    {
        let state = rx.borrow_and_update();
        assert!(state.is_loading());
        assert!(!state.is_authenticated);
    }

    handle.await.unwrap().unwrap();
    assert!(!store.is_loading());
    assert!(store.is_authenticated());
}

#[tokio::test(start_paused = true)]
async fn concurrent_social_links_both_survive() {
    let (store, _) = memory_session();
    store.sign_in(DEMO_PHONE, DEMO_PASSWORD).await.unwrap();

    let (a, b) = tokio::join!(
        store.connect_social(Platform::Instagram),
        store.connect_social(Platform::Tiktok)
    );
    a.unwrap();
    b.unwrap();

    let socials = store.user().unwrap().connected_socials;
    assert!(socials.instagram);
    assert!(socials.tiktok);
    assert!(!socials.snapchat);
    assert!(!store.is_loading());
}

#[tokio::test(start_paused = true)]
async fn sign_out_during_round_trip_fails_pending_edit() {
    let (store, _) = memory_session();
    store.sign_in(DEMO_PHONE, DEMO_PASSWORD).await.unwrap();

    let edit = store.update_username("late");
    let sign_out = async {
        tokio::task::yield_now().await;
        store.sign_out();
    };
    let (result, ()) = tokio::join!(edit, sign_out);

    assert!(matches!(result, Err(StoreError::NoActiveUser)));
    assert!(store.user().is_none());
    assert_eq!(store.error().as_deref(), Some("Failed to update username"));
}

#[tokio::test(start_paused = true)]
async fn credit_points_adds_to_balance() {
    let (store, _) = memory_session();
    store.sign_in(DEMO_PHONE, DEMO_PASSWORD).await.unwrap();

    let balance = store.credit_points(42).unwrap();

    assert_eq!(balance, 292);
    assert_eq!(store.user().unwrap().points, 292);
}

#[tokio::test(start_paused = true)]
async fn credit_points_without_user_is_rejected() {
    let (store, _) = memory_session();

    let result = store.credit_points(10);

    assert!(matches!(result, Err(StoreError::NoActiveUser)));
    assert_eq!(store.error().as_deref(), Some("Failed to credit points"));
    assert!(!store.is_loading());
}
