//! API models for the ordertrack admin and storefront endpoints.
//!
//! # Settings
//!
//! `PUT /settings/shippers` takes the shipper slots exactly as the settings
//! form submitted them:
//!
//! ```json
//! {
//!   "entries": [
//!     { "key": "shipper_name_0", "value": "Fedex Express" },
//!     { "key": "shipper_url_0", "value": "http://www.fedex.com/Tracking?tracknumbers=" },
//!     { "key": "shipper_name_1", "value": null },
//!     { "key": "shipper_url_1", "value": null }
//!   ]
//! }
//! ```
//!
//! # Order tracking
//!
//! `PUT /orders/{order_id}/tracking` takes the selected shipper key and the
//! tracking number:
//!
//! ```json
//! { "shipper": "fedex_express", "number": "7489 2215 0042" }
//! ```
//!
//! `GET /orders/{order_id}/tracking` returns a
//! [`DisplayPayload`](crate::tracking::DisplayPayload), or `204 No Content`
//! when there is nothing to show.
//!
//! `GET /orders/{order_id}/tracking/edit` returns a [`TrackingEditor`] with
//! the raw stored values, even when they no longer resolve.

use serde::{Deserialize, Serialize};

use crate::observability::MetricsSnapshot;
use crate::shippers::RawEntry;
use crate::store::StoreStats;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ShipperSettingsRequest {
    #[serde(default)]
    pub entries: Vec<RawEntry>,
}

/// One entry of the order editor's shipper dropdown
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShipperOption {
    pub value: String,
    pub label: String,
    pub url: String,
}

/// Order editor box: dropdown, stored values and a tracking link
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TrackingEditor {
    pub options: Vec<ShipperOption>,
    /// Stored shipper key, as saved
    pub shipper: Option<String>,
    pub number: Option<String>,
    /// Option to preselect; `None` when the stored key names no shipper
    pub selected: Option<String>,
    pub track_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdminNotice {
    pub code: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct NoticesResponse {
    pub notices: Vec<AdminNotice>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub metrics: MetricsSnapshot,
    pub store: StoreStats,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: &'static str,
    pub message: String,
}
