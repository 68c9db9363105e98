//! Operations the shop platform invokes on admin and storefront events
//!
//! Each function takes the shared [`AppState`], reads what it needs from the
//! store, runs the pure shipper/tracking logic and writes results back. The
//! HTTP layer and the CLI are thin callers of these.

use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::api::models::{AdminNotice, ShipperOption, TrackingEditor};
use crate::api::state::AppState;
use crate::shippers::{self, RawEntry, SHIPPERS_SECTION, SettingsForm, ShipperMap};
use crate::store::{self, StoreError};
use crate::tracking::{self, DisplayPayload, TrackingError};

/// Notice raised when an order tracking save is rejected
pub const TRACKING_ERROR_NOTICE: &str = "tracking_error";
const TRACKING_ERROR_MESSAGE: &str = "Invalid or missing tracking number or shipper.";
const NO_SHIPPERS_HINT: &str = "You first need to add new shippers on the settings page.";

#[derive(Debug, Error)]
pub enum HookError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Tracking(#[from] TrackingError),
}

/// Shipper and tracking number as submitted from the order editor
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrackingSubmission {
    #[serde(default)]
    pub shipper: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// Both fields were left empty, nothing was written
    NotSubmitted,
}

pub fn shippers(state: &AppState) -> store::Result<ShipperMap> {
    let raw = state.store.load_settings(SHIPPERS_SECTION)?;
    Ok(shippers::normalize(&raw))
}

pub fn settings_form(state: &AppState) -> store::Result<SettingsForm> {
    let raw = state.store.load_settings(SHIPPERS_SECTION)?;
    Ok(shippers::settings_form(&raw))
}

/// Store the submitted shipper slots as they are
pub fn save_shipper_settings(state: &AppState, entries: &[RawEntry]) -> store::Result<()> {
    state.store.save_settings(SHIPPERS_SECTION, entries)?;
    state.metrics.settings_saved();
    info!(entries = entries.len(), "Saved shipper settings");
    Ok(())
}

/// Dropdown options for the order editor, in slot order
pub fn shipper_options(state: &AppState) -> store::Result<Vec<ShipperOption>> {
    Ok(options(&shippers(state)?))
}

fn options(shippers: &ShipperMap) -> Vec<ShipperOption> {
    shippers
        .iter()
        .map(|(key, shipper)| ShipperOption {
            value: key.to_string(),
            label: shipper.name.clone(),
            url: shipper.url.clone(),
        })
        .collect()
}

/// Order editor contents for an order
///
/// Stored values are returned raw, so tracking whose shipper was renamed or
/// removed stays visible to the admin. The track link only appears when the
/// stored values resolve.
pub fn order_tracking_editor(state: &AppState, order_id: u64) -> store::Result<TrackingEditor> {
    let shippers = shippers(state)?;
    let stored = state.store.load_tracking(order_id)?;

    let selected = stored
        .shipper_key
        .clone()
        .filter(|key| shippers.contains_key(key));
    let track_url = stored
        .resolve(&shippers)
        .map(|payload| payload.tracking_url);

    Ok(TrackingEditor {
        options: options(&shippers),
        shipper: stored.shipper_key,
        number: stored.number,
        selected,
        track_url,
        hint: shippers.is_empty().then_some(NO_SHIPPERS_HINT),
    })
}

/// Save the tracking fields of an order
///
/// Both fields are trimmed first. Leaving both empty is not an error. If
/// either fails validation nothing is written and the tracking error notice
/// is raised for the next admin page.
pub fn save_order_tracking(
    state: &AppState,
    order_id: u64,
    submission: &TrackingSubmission,
) -> Result<SaveOutcome, HookError> {
    let shipper_key = sanitize_text(submission.shipper.as_deref());
    let number = sanitize_text(submission.number.as_deref());

    if shipper_key.is_empty() && number.is_empty() {
        return Ok(SaveOutcome::NotSubmitted);
    }

    if let Err(err) = tracking::validate(shipper_key, number) {
        warn!(order_id, %err, "Rejected order tracking");
        state
            .store
            .raise_notice(TRACKING_ERROR_NOTICE, state.config.notices.ttl())?;
        state.metrics.tracking_rejected();
        return Err(err.into());
    }

    state.store.save_tracking(order_id, shipper_key, number)?;
    state.metrics.tracking_saved();
    info!(order_id, shipper_key, "Saved order tracking");

    Ok(SaveOutcome::Saved)
}

/// Tracking information to show on the order page and in order emails
pub fn order_tracking_display(
    state: &AppState,
    order_id: u64,
) -> store::Result<Option<DisplayPayload>> {
    let shippers = shippers(state)?;
    let payload = state.store.load_tracking(order_id)?.resolve(&shippers);

    match payload {
        Some(_) => state.metrics.tracking_displayed(),
        None => state.metrics.tracking_absent(),
    }

    Ok(payload)
}

/// Pending admin notices; each is returned once
pub fn take_admin_notices(state: &AppState) -> store::Result<Vec<AdminNotice>> {
    let mut notices = Vec::new();

    if state.store.take_notice(TRACKING_ERROR_NOTICE)? {
        notices.push(AdminNotice {
            code: TRACKING_ERROR_NOTICE,
            message: TRACKING_ERROR_MESSAGE,
        });
    }

    Ok(notices)
}

fn sanitize_text(value: Option<&str>) -> &str {
    value.map(str::trim).unwrap_or_default()
}
