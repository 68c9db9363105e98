use serde::{Deserialize, Serialize};

use crate::shippers::ShipperMap;

/// Shipper reference and tracking number stored on one order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTracking {
    pub shipper_key: Option<String>,
    pub number: Option<String>,
}

impl OrderTracking {
    pub fn new(shipper_key: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            shipper_key: Some(shipper_key.into()),
            number: Some(number.into()),
        }
    }

    pub fn resolve(&self, shippers: &ShipperMap) -> Option<DisplayPayload> {
        resolve(self.shipper_key.as_deref(), self.number.as_deref(), shippers)
    }
}

/// Ready-to-render tracking information for one order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayPayload {
    pub shipper_name: String,
    pub tracking_number: String,
    pub tracking_url: String,
}

/// Resolve an order's shipper key and tracking number against the shippers
///
/// Returns `None` when either value is missing or empty, or when the key no
/// longer names a shipper. The tracking URL is the shipper URL with the raw
/// tracking number appended, no encoding applied.
pub fn resolve(
    shipper_key: Option<&str>,
    number: Option<&str>,
    shippers: &ShipperMap,
) -> Option<DisplayPayload> {
    let shipper_key = shipper_key.filter(|key| !key.is_empty())?;
    let number = number.filter(|number| !number.is_empty())?;
    let shipper = shippers.get(shipper_key)?;

    Some(DisplayPayload {
        shipper_name: shipper.name.clone(),
        tracking_number: number.to_string(),
        tracking_url: format!("{}{}", shipper.url, number),
    })
}
