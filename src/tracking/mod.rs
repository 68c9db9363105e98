//! Order tracking: write-side validation and read-side resolution
//!
//! An order carries a shipper key and a tracking number. Both are validated
//! together before being stored ([`validate`]) and resolved against the
//! current [`ShipperMap`](crate::shippers::ShipperMap) whenever the order is
//! displayed ([`resolve`]). A reference to a shipper that no longer exists
//! resolves to nothing rather than an error.

mod resolver;
mod validation;

pub use resolver::{DisplayPayload, OrderTracking, resolve};
pub use validation::{TrackingError, TrackingField, is_valid_field, validate};
