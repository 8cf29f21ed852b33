//! Vibe Check - Bilingual Wellness Self-Assessment
//!
//! This crate implements a PHQ-9/GAD-7 style check-in: a fixed question
//! catalog, a pure scoring and interpretation engine with crisis-flag
//! derivation, and a recovery game plan builder, in English and Spanish.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
