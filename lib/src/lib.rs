//! Library package holding the session-scoped user store behind the
//! userboard dashboard
//!
//! The store is seeded once from a remote, read-only source and then grows
//! only through local appends. Every view (list, search, detail, create form)
//! reads snapshots from it and goes through its two mutating operations.
//!
//! # Examples
//!
//! ## Seeding the store
//!
//! ```bash
//! cargo run --example seed-store -p userboard-lib
//! ```

#![deny(missing_docs)]
pub mod error;
pub mod id;
pub mod source;
pub mod store;
pub mod user;
pub mod validation;
