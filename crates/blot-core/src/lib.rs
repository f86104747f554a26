//! Core library for blot: configuration, session token storage, the
//! article data model, and the HTTP client for the articles service.

pub mod api;
pub mod articles;
pub mod auth;
pub mod config;
pub mod logging;
