//! Screens selected by the root view guard.
//!
//! ARCHITECTURE
//! ============
//! Each page reads the shared session from context and owns any state local
//! to its screen (the auth page owns the credential form).

pub mod auth;
pub mod home;
