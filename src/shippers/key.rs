//! Settings key encoding: `shipper_<field>_<slot_id>`
//!
//! Every shipper slot stores two settings entries, one per field. The slot id
//! is a non-negative integer below [`MAX_SLOT_ID`] and the field is either
//! `name` or `url`:
//!
//! - `shipper_name_0` -> name of the seed slot
//! - `shipper_url_3`  -> tracking URL prefix of slot 3

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const KEY_PREFIX: &str = "shipper_";

/// Highest slot id a key may carry; the slot after it must stay addressable
pub const MAX_SLOT_ID: u32 = u32::MAX - 1;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed settings key: {0}")]
pub struct MalformedSettingsKey(pub String);

/// Field of a shipper slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShipperField {
    Name,
    Url,
}

impl ShipperField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShipperField::Name => "name",
            ShipperField::Url => "url",
        }
    }
}

/// Parsed `shipper_<field>_<slot_id>` key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SettingsKey {
    pub field: ShipperField,
    pub slot_id: u32,
}

impl SettingsKey {
    pub fn new(field: ShipperField, slot_id: u32) -> Self {
        Self { field, slot_id }
    }

    pub fn name(slot_id: u32) -> Self {
        Self::new(ShipperField::Name, slot_id)
    }

    pub fn url(slot_id: u32) -> Self {
        Self::new(ShipperField::Url, slot_id)
    }

    pub fn parse(key: &str) -> Result<Self, MalformedSettingsKey> {
        let malformed = || MalformedSettingsKey(key.to_string());

        let rest = key.strip_prefix(KEY_PREFIX).ok_or_else(malformed)?;
        let (field, slot) = rest.split_once('_').ok_or_else(malformed)?;

        let field = match field {
            "name" => ShipperField::Name,
            "url" => ShipperField::Url,
            _ => return Err(malformed()),
        };

        // u32::from_str accepts a leading '+', slot ids are plain digits only
        if slot.is_empty() || !slot.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        let slot_id: u32 = slot.parse().map_err(|_| malformed())?;
        if slot_id > MAX_SLOT_ID {
            return Err(malformed());
        }

        Ok(Self { field, slot_id })
    }
}

impl fmt::Display for SettingsKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}_{}", KEY_PREFIX, self.field.as_str(), self.slot_id)
    }
}

impl FromStr for SettingsKey {
    type Err = MalformedSettingsKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
