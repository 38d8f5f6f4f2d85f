//! Error types shared by both stores.
//!
//! Every action failure is reported twice: as a typed [`StoreError`] to the
//! Rust caller, and as a human-readable message in the store's `error`
//! field for views that only branch on that field.

use std::fmt;

use thiserror::Error;

use crate::session::Platform;
use crate::storage::StorageError;

/// Identifies the store action an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    SignIn,
    SignUp,
    VerifyCode,
    ConnectSocial(Platform),
    DisconnectSocial(Platform),
    UpdateUsername,
    UpdatePassword,
    UpdateProfilePhoto,
    CreditPoints,
    ScanQrCode,
    ShareBoop,
    DeleteBoop,
}

impl Operation {
    /// Message shown when the action faults rather than being rejected.
    pub fn fallback_message(&self) -> String {
        match self {
            Self::SignIn => "Failed to sign in".to_string(),
            Self::SignUp => "Failed to sign up".to_string(),
            Self::VerifyCode => "Failed to verify code".to_string(),
            Self::ConnectSocial(platform) => format!("Failed to connect {}", platform),
            Self::DisconnectSocial(platform) => format!("Failed to disconnect {}", platform),
            Self::UpdateUsername => "Failed to update username".to_string(),
            Self::UpdatePassword => "Failed to update password".to_string(),
            Self::UpdateProfilePhoto => "Failed to update profile photo".to_string(),
            Self::CreditPoints => "Failed to credit points".to_string(),
            Self::ScanQrCode => "Failed to scan QR code".to_string(),
            Self::ShareBoop => "Failed to share boop".to_string(),
            Self::DeleteBoop => "Failed to delete boop".to_string(),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SignIn => write!(f, "sign_in"),
            Self::SignUp => write!(f, "sign_up"),
            Self::VerifyCode => write!(f, "verify_code"),
            Self::ConnectSocial(platform) => write!(f, "connect_social:{}", platform),
            Self::DisconnectSocial(platform) => write!(f, "disconnect_social:{}", platform),
            Self::UpdateUsername => write!(f, "update_username"),
            Self::UpdatePassword => write!(f, "update_password"),
            Self::UpdateProfilePhoto => write!(f, "update_profile_photo"),
            Self::CreditPoints => write!(f, "credit_points"),
            Self::ScanQrCode => write!(f, "scan_qr_code"),
            Self::ShareBoop => write!(f, "share_boop"),
            Self::DeleteBoop => write!(f, "delete_boop"),
        }
    }
}

/// Errors that can occur while running a store action.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Phone/password pair did not match the known credential.
    #[error("Invalid phone number or password")]
    InvalidCredentials,

    /// Verification code did not match.
    #[error("Invalid verification code")]
    InvalidCode,

    /// Current password check failed during a password change.
    #[error("Current password is incorrect")]
    IncorrectPassword,

    /// Scanned payload names no retailer in the catalog.
    #[error("Invalid QR code or retailer not found")]
    UnknownRetailer { payload: String },

    /// Action needs a loaded user and there is none.
    #[error("User not found")]
    NoActiveUser,

    /// Share attempted without a selected image.
    #[error("No image selected")]
    NoImageSelected,

    /// Persisting or restoring a snapshot failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl StoreError {
    /// Faults are unexpected conditions inside an action. Their text is
    /// replaced by the operation's fallback message in the `error` field.
    pub fn is_fault(&self) -> bool {
        matches!(
            self,
            Self::NoActiveUser | Self::NoImageSelected | Self::Storage(_)
        )
    }

    /// Message recorded in the store's `error` field.
    pub fn message_for(&self, operation: Operation) -> String {
        if self.is_fault() {
            operation.fallback_message()
        } else {
            self.to_string()
        }
    }
}
