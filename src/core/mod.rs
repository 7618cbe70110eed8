//! Core domain logic: data model, session store, token claims, route-guard
//! decisions and the REST API client. Everything here that does no I/O is
//! testable on the native target.

pub mod api;
pub mod config;
pub mod guard;
pub mod models;
pub mod session;
pub mod token;
