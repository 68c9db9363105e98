//! Shipper registry
//!
//! Shippers are defined in the settings store as numbered slots, each holding
//! a name and a tracking URL prefix under `shipper_name_<id>` and
//! `shipper_url_<id>`. This module turns those raw entries into a
//! [`ShipperMap`] keyed by a lookup key derived from the shipper name, and
//! works out which slots the settings form should render.
//!
//! ```
//! use ordertrack::shippers::{RawEntry, normalize, required_slot_count};
//!
//! let raw = vec![
//!     RawEntry::new("shipper_name_0", "Fedex Express"),
//!     RawEntry::new("shipper_url_0", "http://www.fedex.com/Tracking?tracknumbers="),
//! ];
//!
//! let shippers = normalize(&raw);
//! assert!(shippers.contains_key("fedex_express"));
//! assert_eq!(required_slot_count(&raw), 2);
//! ```

mod form;
mod key;
mod registry;

pub use form::{FormField, SHIPPERS_SECTION, SettingsForm, SlotFields, settings_form};
pub use key::{MAX_SLOT_ID, MalformedSettingsKey, SettingsKey, ShipperField};
pub use registry::{
    RawEntry, Shipper, ShipperDefinition, ShipperMap, definitions, derive_key, normalize,
    required_slot_count, slot_layout,
};
