//! Credential checks against the mocked account backend.

use crate::session::{ConnectedSocials, User};

/// Phone number of the single known account.
pub const DEMO_PHONE: &str = "1234567890";
/// Password of the single known account.
pub const DEMO_PASSWORD: &str = "password";
/// The only verification code the backend accepts.
pub const DEMO_VERIFICATION_CODE: &str = "123456";

/// Account backend consulted by the session store after each round trip.
///
/// Implementations decide; the store only applies the outcome.
pub trait CredentialVerifier: Send + Sync {
    /// Returns the account for a matching phone/password pair.
    fn sign_in(&self, phone_number: &str, password: &str) -> Option<User>;

    /// Builds the record for a new account. Registration never fails and
    /// does not make the new credentials valid for [`Self::sign_in`].
    fn register(&self, phone_number: &str, username: &str) -> User;

    fn verify_code(&self, code: &str) -> bool;

    /// Checks the current password before a password change.
    fn check_password(&self, current_password: &str) -> bool;
}

/// Hard-coded backend: one account, one password, one verification code.
#[derive(Debug, Clone)]
pub struct MockBackend {
    account: User,
    password: String,
    verification_code: String,
}

impl MockBackend {
    pub fn new(account: User, password: String, verification_code: String) -> Self {
        Self {
            account,
            password,
            verification_code,
        }
    }

    /// The account returned by a successful sign-in.
    pub fn account(&self) -> &User {
        &self.account
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new(
            demo_user(),
            DEMO_PASSWORD.to_string(),
            DEMO_VERIFICATION_CODE.to_string(),
        )
    }
}

impl CredentialVerifier for MockBackend {
    fn sign_in(&self, phone_number: &str, password: &str) -> Option<User> {
        (phone_number == self.account.phone_number && password == self.password)
            .then(|| self.account.clone())
    }

    fn register(&self, phone_number: &str, username: &str) -> User {
        User {
            phone_number: phone_number.to_string(),
            username: username.to_string(),
            ..self.account.clone()
        }
    }

    fn verify_code(&self, code: &str) -> bool {
        code == self.verification_code
    }

    fn check_password(&self, current_password: &str) -> bool {
        current_password == self.password
    }
}

/// The demo account: no socials linked, 250 points.
pub fn demo_user() -> User {
    User {
        id: "user-123".to_string(),
        phone_number: DEMO_PHONE.to_string(),
        username: "boopuser".to_string(),
        profile_photo: None,
        connected_socials: ConnectedSocials::default(),
        points: 250,
    }
}
