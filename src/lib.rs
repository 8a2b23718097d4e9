//! # OOP Patterns Workbook
//!
//! Worked solutions for the design-pattern exercise set:
//!
//! - `product`: identity-keyed equality and hashing, plus comparator
//!   functions for sorting (equality/ordering contracts, dedup by id)
//! - `registry`: lazily initialized process-wide singleton with a
//!   connect/disconnect state machine (Singleton pattern)
//! - `channel`: discriminant string to trait object (Factory pattern)
//! - `user`: fluent builder producing an immutable record with
//!   required-field validation (Builder pattern)
//!
//! Each module is self-contained. Run the narrative walkthrough with:
//! ```bash
//! cargo run --bin walkthrough
//! ```

pub mod channel;
pub mod product;
pub mod registry;
pub mod user;
