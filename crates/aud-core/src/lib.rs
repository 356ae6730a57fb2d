//! # aud-core
//!
//! Core types shared by every crate of the audit client.
//!
//! - Entity structs mirrored from the backend REST API (companies, users,
//!   audits, audit plans, processes, activities, findings, attachments)
//! - Categorical enums: roles, semaforo risk ratings, plan statuses
//! - The static role permission matrix, navigation links and route guards
//! - Client-side dashboard aggregation and executive summaries
//! - Cross-cutting error types

pub mod access;
pub mod dashboard;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod identity;
pub mod wire;
