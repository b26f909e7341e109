//! # gb-core
//!
//! Core types shared across all gradebook crates:
//! - Entity structs for the five tables (teachers, groups, students, subjects, grades)
//! - Typed results returned by the analytical query catalog
//! - Cross-cutting error types
//! - Grade averaging and rounding policy

pub mod entities;
pub mod errors;
pub mod responses;
pub mod rounding;
