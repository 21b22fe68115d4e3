//! Core business logic for Expensa.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! The approval workflow engine and the monthly expense record types live here.
//!
//! # Modules
//!
//! - `workflow` - Expense approval status machine
//! - `expense` - Monthly expense records and input validation

pub mod expense;
pub mod workflow;
