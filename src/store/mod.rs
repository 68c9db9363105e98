//! Fjall-based persistence for shop settings and order tracking meta
//!
//! This module stands in for the shop platform's two key-value stores and
//! its transient flags. It uses Fjall (an embedded LSM key-value store) to
//! persist:
//!
//! - Settings sections (the raw `shipper_<field>_<id>` entries, in the
//!   order they were submitted)
//! - Order tracking meta (shipper key and tracking number per order)
//! - One-shot notices (flags with an expiry, cleared when read)
//!
//! The store does no interpretation of what it holds: settings are written
//! back verbatim and shipper maps are rebuilt from them on every read.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ordertrack::store::FjallStore;
//!
//! let store = FjallStore::open("data/ordertrack")?;
//! store.save_tracking(1042, "ups", "1Z999AA10123456784")?;
//! let tracking = store.load_tracking(1042)?;
//! ```

pub mod error;
pub mod partitions;
pub mod store;

pub use error::{Result, StoreError};
pub use store::{FjallStore, StoreStats};
