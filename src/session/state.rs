use std::fmt;

use serde::{Deserialize, Serialize};

use crate::mvi::Snapshot;

/// Social platform a user can link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Tiktok,
    Snapchat,
}

impl Platform {
    /// Stable lowercase key, also used in messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Instagram => "instagram",
            Self::Tiktok => "tiktok",
            Self::Snapchat => "snapchat",
        }
    }

    /// All variants in display order.
    pub fn all() -> &'static [Platform] {
        &[Self::Instagram, Self::Tiktok, Self::Snapchat]
    }

    /// Case-insensitive parse. Unknown names return `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "instagram" => Some(Self::Instagram),
            "tiktok" => Some(Self::Tiktok),
            "snapchat" => Some(Self::Snapchat),
            _ => None,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Link flags for the three supported platforms, toggled independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectedSocials {
    pub instagram: bool,
    pub tiktok: bool,
    pub snapchat: bool,
}

impl ConnectedSocials {
    pub fn get(&self, platform: Platform) -> bool {
        match platform {
            Platform::Instagram => self.instagram,
            Platform::Tiktok => self.tiktok,
            Platform::Snapchat => self.snapchat,
        }
    }

    pub fn set(&mut self, platform: Platform, connected: bool) {
        match platform {
            Platform::Instagram => self.instagram = connected,
            Platform::Tiktok => self.tiktok = connected,
            Platform::Snapchat => self.snapchat = connected,
        }
    }

    pub fn connected_count(&self) -> usize {
        Platform::all().iter().filter(|p| self.get(**p)).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub phone_number: String,
    pub username: String,
    /// Absent means the view renders an initials placeholder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<String>,
    pub connected_socials: ConnectedSocials,
    pub points: u32,
}

impl User {
    /// Placeholder avatar letter: first character of the username, uppercased.
    pub fn initial(&self) -> Option<char> {
        self.username
            .chars()
            .next()
            .and_then(|c| c.to_uppercase().next())
    }
}

/// Snapshot of the session store.
///
/// `user` is set without `is_authenticated` only between a sign-up and a
/// successful verification.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub is_authenticated: bool,
    /// Number of actions suspended at their simulated round trip.
    pub in_flight: usize,
    pub error: Option<String>,
}

impl Snapshot for SessionState {}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    /// Account exists but its identity has not been confirmed yet.
    pub fn is_verification_pending(&self) -> bool {
        self.user.is_some() && !self.is_authenticated
    }

    /// Build a snapshot from a restored record. Transient fields start idle.
    pub fn restored(persisted: PersistedSession) -> Self {
        // Never come back authenticated without a user.
        let is_authenticated = persisted.is_authenticated && persisted.user.is_some();
        Self {
            user: persisted.user,
            is_authenticated,
            in_flight: 0,
            error: None,
        }
    }

    pub fn persisted(&self) -> PersistedSession {
        PersistedSession {
            user: self.user.clone(),
            is_authenticated: self.is_authenticated,
        }
    }
}

/// The durable part of [`SessionState`], written under the session key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSession {
    pub user: Option<User>,
    pub is_authenticated: bool,
}
