//! Networking for the auth endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements `authflow::AuthApi` over `gloo-net` in the browser. The
//! wire types themselves are owned by `authflow::types`.

pub mod api;
