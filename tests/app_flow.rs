mod common;

use std::sync::Arc;

use boop::backend::{MockBackend, SimulatedLatency, DEMO_PASSWORD, DEMO_PHONE};
use boop::clock::FixedClock;
use boop::cli::{execute, run_shell, ShellCommand};
use boop::points::FixedPoints;
use boop::reward::{BoopStatus, RewardFlowStore, StaticCatalog};
use boop::session::{SessionStore, SESSION_STORAGE_KEY};
use boop::storage::MemoryStorage;
use boop::BoopApp;
use common::{fixed_now, NIKE_IMAGES};

fn app(latency: SimulatedLatency) -> BoopApp {
    let session = SessionStore::open(
        Arc::new(MockBackend::default()),
        Arc::new(MemoryStorage::new()),
        latency,
        SESSION_STORAGE_KEY,
    );
    let rewards = RewardFlowStore::new(
        Arc::new(StaticCatalog::default()),
        Arc::new(FixedClock::new(fixed_now())),
        Arc::new(FixedPoints(30)),
        latency,
    );
    BoopApp::new(Arc::new(session), Arc::new(rewards))
}

#[tokio::test(start_paused = true)]
async fn share_credits_signed_in_user() {
    let app = app(common::latency());
    app.session().sign_in(DEMO_PHONE, DEMO_PASSWORD).await.unwrap();
    app.rewards().scan_qr_code("retailer:Nike").await.unwrap();

    let boop = app.share_and_credit().await.unwrap();

    assert_eq!(boop.points, 30);
    assert_eq!(app.session().user().unwrap().points, 280);
    assert!(app.session().error().is_none());
}

#[tokio::test(start_paused = true)]
async fn share_without_user_stands_uncredited() {
    let app = app(common::latency());
    app.rewards().scan_qr_code("retailer:Nike").await.unwrap();
    let before = app.rewards().boops().len();

    let boop = app.share_and_credit().await.unwrap();

    assert_eq!(app.rewards().boops().len(), before + 1);
    assert_eq!(boop.status, BoopStatus::Completed);
    assert_eq!(
        app.session().error().as_deref(),
        Some("Failed to credit points")
    );
}

#[tokio::test(start_paused = true)]
async fn failed_share_credits_nothing() {
    let app = app(common::latency());
    app.session().sign_in(DEMO_PHONE, DEMO_PASSWORD).await.unwrap();

    assert!(app.share_and_credit().await.is_err());

    assert_eq!(app.session().user().unwrap().points, 250);
    assert_eq!(app.rewards().error().as_deref(), Some("Failed to share boop"));
}

#[tokio::test(start_paused = true)]
async fn handles_share_the_same_stores() {
    let app = app(common::latency());
    let session = app.session_handle();

    session.sign_in(DEMO_PHONE, DEMO_PASSWORD).await.unwrap();

    assert!(app.session().is_authenticated());
    assert!(Arc::ptr_eq(&session, &app.session_handle()));
    assert_eq!(app.rewards_handle().boops(), app.rewards().boops());
}

#[tokio::test]
async fn execute_reports_store_errors() {
    let app = app(SimulatedLatency::instant());

    let reply = execute(
        &app,
        ShellCommand::parse("sign-in 1234567890 wrongpass").unwrap(),
    )
    .await;
    assert_eq!(reply, "error: Invalid phone number or password");

    let reply = execute(&app, ShellCommand::parse("connect instagram").unwrap()).await;
    assert_eq!(reply, "error: Failed to connect instagram");

    let reply = execute(&app, ShellCommand::parse("scan Walmart").unwrap()).await;
    assert_eq!(reply, "error: Invalid QR code or retailer not found");
}

#[tokio::test]
async fn execute_validates_forms_before_calling_stores() {
    let app = app(SimulatedLatency::instant());

    let reply = execute(&app, ShellCommand::parse("verify 12").unwrap()).await;
    assert_eq!(reply, "error: Verification code must be 6 digits");

    let reply = execute(
        &app,
        ShellCommand::parse("sign-up US 555 ab secret other").unwrap(),
    )
    .await;
    assert!(reply.starts_with("error: "));
    assert!(reply.contains("Passwords do not match"));
    assert!(app.session().user().is_none());
}

#[tokio::test]
async fn sign_up_and_verify_through_execute() {
    let app = app(SimulatedLatency::instant());

    let reply = execute(
        &app,
        ShellCommand::parse("sign-up GB 7700900123 newbie secret secret").unwrap(),
    )
    .await;
    assert_eq!(
        reply,
        "account newbie created for +447700900123, enter the verification code"
    );

    let reply = execute(&app, ShellCommand::parse("verify 123456").unwrap()).await;
    assert_eq!(reply, "verified");
    assert!(app.session().is_authenticated());
}

#[tokio::test]
async fn shell_script_runs_until_quit() {
    let app = app(SimulatedLatency::instant());
    let script = format!(
        "sign-in {DEMO_PHONE} {DEMO_PASSWORD}\n\
         # comment lines are skipped\n\
         \n\
         scan Nike\n\
         select 2\n\
         share\n\
         history completed\n\
         bogus\n\
         quit\n\
         sign-out\n"
    );
    let mut output = Vec::new();

    run_shell(&app, script.as_bytes(), &mut output).await.unwrap();

    let output = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "signed in as boopuser");
    assert_eq!(lines[1], "Nike: 15% off your purchase");
    assert_eq!(lines[2], format!(" *1 {}", NIKE_IMAGES[0]));
    assert_eq!(lines[5], format!("selected {}", NIKE_IMAGES[1]));
    assert_eq!(lines[6], "shared Nike for 30 points, balance 280");
    let minted = format!(
        "boop-{} 2024-05-01 Nike 30 completed",
        fixed_now().timestamp_millis()
    );
    assert_eq!(lines[7], minted);
    assert_eq!(lines.last(), Some(&"error: unknown command 'bogus' (try 'help')"));
    // Nothing after quit ran.
    assert!(app.session().is_authenticated());
    assert!(app.rewards().current_boop().is_none());
}

#[tokio::test]
async fn next_command_starts_without_previous_error() {
    let app = app(SimulatedLatency::instant());

    let reply = execute(&app, ShellCommand::parse("scan Walmart").unwrap()).await;
    assert!(reply.starts_with("error: "));
    let reply = execute(&app, ShellCommand::parse("sign-in 1234567890 nope").unwrap()).await;
    assert!(reply.starts_with("error: "));

    let reply = execute(&app, ShellCommand::parse("scan Nike").unwrap()).await;
    assert!(reply.starts_with("Nike: "));
    assert!(app.rewards().error().is_none());

    let reply = execute(&app, ShellCommand::parse("sign-in 1234567890 password").unwrap()).await;
    assert_eq!(reply, "signed in as boopuser");
    assert!(app.session().error().is_none());
}
