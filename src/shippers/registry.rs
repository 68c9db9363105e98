use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use super::key::{SettingsKey, ShipperField};

/// One raw `{key, value}` entry of the shipper settings section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntry {
    pub key: String,
    #[serde(default)]
    pub value: Option<String>,
}

impl RawEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
        }
    }

    pub fn empty(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
        }
    }
}

/// Name/URL pair stored in one settings slot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShipperDefinition {
    pub slot_id: u32,
    pub name: Option<String>,
    pub url: Option<String>,
}

impl ShipperDefinition {
    /// Name of the shipper, if the slot holds one
    pub fn named(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.trim().is_empty())
    }
}

/// Resolved shipper, as exposed to orders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shipper {
    pub name: String,
    pub url: String,
}

/// Shipper key -> shipper, iterated in ascending slot order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShipperMap {
    entries: IndexMap<String, Shipper>,
}

impl ShipperMap {
    pub fn get(&self, key: &str) -> Option<&Shipper> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Shipper)> {
        self.entries.iter().map(|(key, shipper)| (key.as_str(), shipper))
    }

    fn insert(&mut self, key: String, shipper: Shipper) {
        self.entries.insert(key, shipper);
    }
}

impl FromIterator<(String, Shipper)> for ShipperMap {
    fn from_iter<I: IntoIterator<Item = (String, Shipper)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Group raw entries into slot definitions keyed by slot id
///
/// Entries whose key does not parse are dropped. When a key appears twice the
/// later value wins.
pub fn definitions(raw: &[RawEntry]) -> BTreeMap<u32, ShipperDefinition> {
    let mut slots: BTreeMap<u32, ShipperDefinition> = BTreeMap::new();

    for entry in raw {
        let key = match SettingsKey::parse(&entry.key) {
            Ok(key) => key,
            Err(err) => {
                debug!(key = %entry.key, "Discarding settings entry: {}", err);
                continue;
            }
        };

        let slot = slots
            .entry(key.slot_id)
            .or_insert_with(|| ShipperDefinition {
                slot_id: key.slot_id,
                ..Default::default()
            });

        match key.field {
            ShipperField::Name => slot.name = entry.value.clone(),
            ShipperField::Url => slot.url = entry.value.clone(),
        }
    }

    slots
}

/// Derive the lookup key of a shipper name
///
/// Lower-cases the name and joins its whitespace-separated words with `_`.
pub fn derive_key(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

/// Build the shipper map from raw settings entries
///
/// Slots are visited in ascending slot id. A shipper whose derived key is
/// already taken gets `_<n>` appended, where `n` comes from one counter shared
/// by the whole pass.
pub fn normalize(raw: &[RawEntry]) -> ShipperMap {
    let mut shippers = ShipperMap::default();
    let mut collisions: u32 = 0;

    for definition in definitions(raw).into_values() {
        let Some(name) = definition.named() else {
            continue;
        };

        let base = derive_key(name);
        let mut key = base.clone();
        while shippers.contains_key(&key) {
            key = format!("{}_{}", base, collisions);
            collisions += 1;
        }

        if key != base {
            debug!(
                slot_id = definition.slot_id,
                base = %base,
                key = %key,
                "Shipper key collision"
            );
        }

        shippers.insert(
            key,
            Shipper {
                name: name.to_string(),
                url: definition.url.clone().unwrap_or_default(),
            },
        );
    }

    shippers
}

/// Number of slots the settings form renders
///
/// Every named slot plus one trailing empty slot. With nothing named this is
/// the seed slot alone.
pub fn required_slot_count(raw: &[RawEntry]) -> usize {
    let named = definitions(raw)
        .values()
        .filter(|definition| definition.named().is_some())
        .count();

    named + 1
}

/// Slot ids the settings form renders, in display order
///
/// Named slots ascending, then the next free slot after the highest named
/// one. Always `required_slot_count` long.
pub fn slot_layout(raw: &[RawEntry]) -> Vec<u32> {
    let mut layout: Vec<u32> = definitions(raw)
        .values()
        .filter(|definition| definition.named().is_some())
        .map(|definition| definition.slot_id)
        .collect();

    // Parsed slot ids stop at MAX_SLOT_ID, so the trailing id always fits
    let trailing = layout.last().map_or(0, |&highest| highest + 1);
    layout.push(trailing);

    layout
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(id: u32, name: &str, url: &str) -> Vec<RawEntry> {
        vec![
            RawEntry::new(format!("shipper_name_{id}"), name),
            RawEntry::new(format!("shipper_url_{id}"), url),
        ]
    }

    #[test]
    fn test_derive_key() {
        assert_eq!(derive_key("UPS"), "ups");
        assert_eq!(derive_key("Fedex Express"), "fedex_express");
        assert_eq!(derive_key("  La   Poste \t Colissimo "), "la_poste_colissimo");
        assert_eq!(derive_key("Ελληνικά Ταχυδρομεία"), "ελληνικά_ταχυδρομεία");
    }

    #[test]
    fn test_normalize_distinct_names() {
        let mut raw = slot(0, "UPS", "http://ups.com/track?n=");
        raw.extend(slot(1, "DHL Express", "http://dhl.com/?id="));
        raw.extend(slot(2, "La Poste", "https://laposte.fr/suivi/"));

        let shippers = normalize(&raw);

        assert_eq!(shippers.len(), 3);
        assert_eq!(
            shippers.keys().collect::<Vec<_>>(),
            vec!["ups", "dhl_express", "la_poste"]
        );
        assert_eq!(
            shippers.get("dhl_express"),
            Some(&Shipper {
                name: "DHL Express".to_string(),
                url: "http://dhl.com/?id=".to_string(),
            })
        );
    }

    #[test]
    fn test_normalize_collision_suffixes_later_slot() {
        let mut raw = slot(1, "fedex_express", "http://b");
        raw.extend(slot(0, "Fedex Express", "http://a"));

        let shippers = normalize(&raw);

        assert_eq!(shippers.get("fedex_express").unwrap().url, "http://a");
        assert_eq!(shippers.get("fedex_express_0").unwrap().url, "http://b");
    }

    #[test]
    fn test_collision_counter_is_shared_across_keys() {
        let mut raw = slot(0, "DHL", "d0");
        raw.extend(slot(1, "Fedex", "f0"));
        raw.extend(slot(2, "fedex", "f1"));
        raw.extend(slot(3, "dhl", "d1"));
        raw.extend(slot(4, "FEDEX", "f2"));

        let shippers = normalize(&raw);

        assert_eq!(
            shippers.keys().collect::<Vec<_>>(),
            vec!["dhl", "fedex", "fedex_0", "dhl_1", "fedex_2"]
        );
    }

    #[test]
    fn test_suffixed_key_already_taken() {
        let mut raw = slot(0, "ups", "a");
        raw.extend(slot(1, "UPS 0", "b"));
        raw.extend(slot(2, "Ups", "c"));

        let shippers = normalize(&raw);

        assert_eq!(
            shippers.keys().collect::<Vec<_>>(),
            vec!["ups", "ups_0", "ups_1"]
        );
        assert_eq!(shippers.get("ups_1").unwrap().url, "c");
    }

    #[test]
    fn test_unnamed_slots_are_skipped() {
        let mut raw = slot(0, "", "http://orphan");
        raw.push(RawEntry::empty("shipper_name_1"));
        raw.push(RawEntry::new("shipper_url_1", "http://orphan-too"));
        raw.extend(slot(2, "   ", "http://blank"));
        raw.extend(slot(3, "GLS", "http://gls"));

        let shippers = normalize(&raw);

        assert_eq!(shippers.keys().collect::<Vec<_>>(), vec!["gls"]);
    }

    #[test]
    fn test_missing_url_defaults_to_empty() {
        let raw = vec![RawEntry::new("shipper_name_0", "Hand delivery")];

        let shippers = normalize(&raw);

        assert_eq!(shippers.get("hand_delivery").unwrap().url, "");
    }

    #[test]
    fn test_malformed_keys_are_discarded() {
        let mut raw = slot(0, "UPS", "http://ups");
        raw.push(RawEntry::new("shipper_color_0", "brown"));
        raw.push(RawEntry::new("shipper_name_x", "Ghost"));
        raw.push(RawEntry::new("unrelated", "value"));

        let shippers = normalize(&raw);

        assert_eq!(shippers.len(), 1);
        assert_eq!(shippers.get("ups").unwrap().name, "UPS");
    }

    #[test]
    fn test_normalize_is_deterministic() {
        let mut raw = slot(2, "Chronopost", "c");
        raw.extend(slot(0, "chronopost", "a"));
        raw.extend(slot(1, "Colissimo", "b"));

        assert_eq!(normalize(&raw), normalize(&raw));
    }

    #[test]
    fn test_required_slot_count() {
        assert_eq!(required_slot_count(&[]), 1);

        let mut raw = slot(0, "UPS", "a");
        raw.extend(slot(1, "DHL", "b"));
        assert_eq!(required_slot_count(&raw), 3);

        raw.extend(slot(2, "", ""));
        assert_eq!(required_slot_count(&raw), 3);
    }

    #[test]
    fn test_slot_layout() {
        assert_eq!(slot_layout(&[]), vec![0]);
        assert_eq!(slot_layout(&slot(0, "", "http://x")), vec![0]);

        let mut raw = slot(0, "UPS", "a");
        raw.extend(slot(1, "DHL", "b"));
        assert_eq!(slot_layout(&raw), vec![0, 1, 2]);

        let mut sparse = slot(5, "GLS", "g");
        sparse.extend(slot(0, "UPS", "u"));
        assert_eq!(slot_layout(&sparse), vec![0, 5, 6]);
        assert_eq!(slot_layout(&sparse).len(), required_slot_count(&sparse));
    }

    #[test]
    fn test_slot_layout_at_highest_slot_id() {
        let raw = slot(u32::MAX - 1, "GLS", "g");
        assert_eq!(slot_layout(&raw), vec![u32::MAX - 1, u32::MAX]);
        assert_eq!(slot_layout(&raw).len(), required_slot_count(&raw));

        let out_of_range = slot(u32::MAX, "GLS", "g");
        assert_eq!(slot_layout(&out_of_range), vec![0]);
        assert_eq!(required_slot_count(&out_of_range), 1);
    }
}
