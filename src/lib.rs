//! Cooking-event and fuel-usage analysis for household cookstove studies.
//!
//! Stove temperature and fuel weight readings go in; per-stove cooking
//! events, minutes of cooking per day and kilograms of fuel used per day
//! come out.
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
