use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use fjall::{Config, Keyspace, PartitionCreateOptions, PartitionHandle};
use serde::Serialize;
use tracing::{debug, info};

use crate::shippers::RawEntry;
use crate::tracking::OrderTracking;

use super::error::{Result, StoreError};
use super::partitions::{
    ORDER_FIELD_NUMBER, ORDER_FIELD_SHIPPER, decode_settings_key, encode_notice_key,
    encode_order_key, encode_settings_key, encode_settings_prefix,
};

/// Fjall-backed storage for settings, order tracking meta and notices
#[derive(Clone)]
pub struct FjallStore {
    keyspace: Keyspace,
    settings: PartitionHandle,
    orders: PartitionHandle,
    notices: PartitionHandle,
    /// Held across the scan and commit of a section replace
    settings_write: Arc<Mutex<()>>,
}

impl FjallStore {
    /// Open or create a Fjall store at the given path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening Fjall store at: {}", path.display());

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let keyspace = Config::new(path).open()?;

        let settings = keyspace.open_partition("settings", PartitionCreateOptions::default())?;
        let orders = keyspace.open_partition("orders", PartitionCreateOptions::default())?;
        let notices = keyspace.open_partition("notices", PartitionCreateOptions::default())?;

        info!("Fjall store opened successfully");
        Ok(Self {
            keyspace,
            settings,
            orders,
            notices,
            settings_write: Arc::new(Mutex::new(())),
        })
    }

    /// Load the entries of a settings section in submission order
    ///
    /// An unset section yields an empty list.
    pub fn load_settings(&self, section: &str) -> Result<Vec<RawEntry>> {
        let mut entries = Vec::new();

        for item in self.settings.prefix(encode_settings_prefix(section)) {
            let (key, value) = item?;
            if decode_settings_key(section, &key).is_none() {
                debug!(key = %String::from_utf8_lossy(&key), "Skipping undecodable settings key");
                continue;
            }
            entries.push(serde_json::from_slice(&value)?);
        }

        Ok(entries)
    }

    /// Replace a settings section with the submitted entries, verbatim
    ///
    /// Concurrent saves are applied one after the other, so the section
    /// always holds exactly one submission.
    pub fn save_settings(&self, section: &str, entries: &[RawEntry]) -> Result<()> {
        let _guard = self
            .settings_write
            .lock()
            .map_err(|_| StoreError::Poisoned)?;
        let mut batch = self.keyspace.batch();

        for item in self.settings.prefix(encode_settings_prefix(section)) {
            let (key, _) = item?;
            if decode_settings_key(section, &key).is_some() {
                batch.remove(&self.settings, key);
            }
        }

        for (seq, entry) in entries.iter().enumerate() {
            batch.insert(
                &self.settings,
                encode_settings_key(section, seq),
                serde_json::to_vec(entry)?,
            );
        }

        batch.commit()?;
        debug!(section, entries = entries.len(), "Saved settings section");
        Ok(())
    }

    /// Read the tracking meta of an order; fields never set are `None`
    pub fn load_tracking(&self, order_id: u64) -> Result<OrderTracking> {
        Ok(OrderTracking {
            shipper_key: self.read_order_field(order_id, ORDER_FIELD_SHIPPER)?,
            number: self.read_order_field(order_id, ORDER_FIELD_NUMBER)?,
        })
    }

    /// Write both tracking fields of an order in one batch
    pub fn save_tracking(&self, order_id: u64, shipper_key: &str, number: &str) -> Result<()> {
        let mut batch = self.keyspace.batch();
        batch.insert(
            &self.orders,
            encode_order_key(order_id, ORDER_FIELD_SHIPPER),
            shipper_key.as_bytes(),
        );
        batch.insert(
            &self.orders,
            encode_order_key(order_id, ORDER_FIELD_NUMBER),
            number.as_bytes(),
        );
        batch.commit()?;

        debug!(order_id, shipper_key, "Saved order tracking");
        Ok(())
    }

    fn read_order_field(&self, order_id: u64, field: &str) -> Result<Option<String>> {
        let key = encode_order_key(order_id, field);
        match self.orders.get(&key)? {
            Some(value) => {
                let value = String::from_utf8(value.to_vec()).map_err(|_| {
                    StoreError::InvalidValue(String::from_utf8_lossy(&key).into_owned())
                })?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Raise a one-shot notice that expires after `ttl`
    pub fn raise_notice(&self, name: &str, ttl: Duration) -> Result<()> {
        let now = Utc::now();
        let expires_at = TimeDelta::from_std(ttl)
            .ok()
            .and_then(|ttl| now.checked_add_signed(ttl))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        self.notices
            .insert(encode_notice_key(name), expires_at.to_rfc3339().as_bytes())?;
        debug!(notice = name, %expires_at, "Raised notice");
        Ok(())
    }

    /// Consume a notice
    ///
    /// Returns whether an unexpired notice was pending. The notice is cleared
    /// either way.
    pub fn take_notice(&self, name: &str) -> Result<bool> {
        let key = encode_notice_key(name);
        let Some(value) = self.notices.get(&key)? else {
            return Ok(false);
        };
        self.notices.remove(key.as_slice())?;

        let raw = std::str::from_utf8(&value)
            .map_err(|_| StoreError::InvalidValue(format!("notice:{}", name)))?;
        let expires_at = DateTime::parse_from_rfc3339(raw)?;

        Ok(expires_at > Utc::now())
    }

    /// Flush the journal to disk
    pub fn persist(&self) -> Result<()> {
        self.keyspace.persist(fjall::PersistMode::SyncAll)?;
        info!("Fjall store persisted");
        Ok(())
    }

    /// Entry counts per partition, reported by the health check
    pub fn stats(&self) -> Result<StoreStats> {
        let mut settings_count = 0;
        let mut order_field_count = 0;
        let mut notice_count = 0;

        for item in self.settings.iter() {
            item?;
            settings_count += 1;
        }

        for item in self.orders.iter() {
            item?;
            order_field_count += 1;
        }

        for item in self.notices.iter() {
            item?;
            notice_count += 1;
        }

        Ok(StoreStats {
            settings_count,
            order_field_count,
            notice_count,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StoreStats {
    pub settings_count: usize,
    pub order_field_count: usize,
    pub notice_count: usize,
}
