//! Mocked backend collaborators.
//!
//! Stands in for the account service and the network. Swapping these for a
//! real client does not touch the store state machines.

mod credentials;
mod latency;

pub use credentials::{
    demo_user, CredentialVerifier, MockBackend, DEMO_PASSWORD, DEMO_PHONE,
    DEMO_VERIFICATION_CODE,
};
pub use latency::SimulatedLatency;
