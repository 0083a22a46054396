//! MenuMate Core Library
//!
//! Calculation engine for diet tracking: energy expenditure, macro
//! budgets, and daily journal math.

pub mod energy;
pub mod error;
pub mod models;
