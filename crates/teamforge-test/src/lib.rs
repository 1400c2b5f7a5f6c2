//! Shared test fixtures for TeamForge crates.
//!
//! This crate provides small rosters and seeded random rosters for testing.
//! It depends only on `teamforge-core`, so every crate can use it as a
//! dev-dependency.
//!
//! - [`metro`] - A hand-written 10-hero roster gated on "Metro Zero"
//! - [`random`] - Reproducible random rosters for property checks
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! teamforge-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use teamforge_test::metro::{metro_catalog, metro_rules, hero};
//! use teamforge_test::random::random_catalog;
//! ```

pub mod metro;
pub mod random;

pub use metro::{hero, metro_catalog, metro_rules, trait_id};
pub use random::{random_catalog, random_rules, random_team};
