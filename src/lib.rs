//! Session and reward-flow state stores for the Boop rewards app.
//!
//! Users scan a retailer QR code, pick a promotional image, share it and
//! earn points. Two independent stores hold the state a front end renders:
//!
//! - [`session::SessionStore`] - sign-in, sign-up verification, linked
//!   socials and profile edits; persisted to a key-value slot.
//! - [`reward::RewardFlowStore`] - the scan → select → share redemption and
//!   its history; in memory only.
//!
//! Both expose a snapshot, a `watch` subscription and async actions that
//! report failures through a typed error and a message field.

pub mod app;
pub mod backend;
pub mod cli;
pub mod clock;
pub mod config;
pub mod country;
pub mod error;
pub mod logging;
pub mod mvi;
pub mod points;
pub mod reward;
pub mod session;
pub mod storage;
pub mod validation;

pub use app::BoopApp;
pub use error::{Operation, StoreError};
