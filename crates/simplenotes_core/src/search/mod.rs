//! Note search entry points.
//!
//! # Responsibility
//! - Filter and order notes for the list view (`filter`).
//! - Model the debounced search box feeding queries to the owner (`input`).

pub mod filter;
pub mod input;
