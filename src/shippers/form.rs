use serde::Serialize;

use super::key::SettingsKey;
use super::registry::{RawEntry, definitions, slot_layout};

/// Settings section holding the shipper slots
pub const SHIPPERS_SECTION: &str = "shippers";

const SECTION_TITLE: &str = "Set your shippers";
const SECTION_DESCRIPTION: &str =
    "Add new shippers here, or edit the ones created before.";
const NAME_LABEL: &str = "Shipper's name";
const NAME_HELP: &str =
    "Name of the new shipper. Customers see it exactly as entered.";
const URL_LABEL: &str = "Shipper's URL";
const URL_HELP: &str = "Tracking service URL of the new shipper, the tracking number is appended \
     to it. Eg for FedEx: http://www.fedex.com/Tracking?action=track&tracknumbers=";

/// Field layout of the shipper settings section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsForm {
    pub section: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub slots: Vec<SlotFields>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotFields {
    pub slot_id: u32,
    pub name: FormField,
    pub url: FormField,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
    pub key: String,
    pub label: &'static str,
    pub value: Option<String>,
    /// Only set while the field is empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<&'static str>,
}

impl FormField {
    fn new(
        key: SettingsKey,
        label: &'static str,
        help: &'static str,
        value: Option<String>,
    ) -> Self {
        let value = value.filter(|value| !value.is_empty());
        let help = value.is_none().then_some(help);
        Self {
            key: key.to_string(),
            label,
            value,
            help,
        }
    }
}

/// Build the shipper settings form from the stored entries
pub fn settings_form(raw: &[RawEntry]) -> SettingsForm {
    let mut stored = definitions(raw);

    let slots = slot_layout(raw)
        .into_iter()
        .map(|slot_id| {
            let definition = stored.remove(&slot_id).unwrap_or_default();
            SlotFields {
                slot_id,
                name: FormField::new(
                    SettingsKey::name(slot_id),
                    NAME_LABEL,
                    NAME_HELP,
                    definition.name,
                ),
                url: FormField::new(
                    SettingsKey::url(slot_id),
                    URL_LABEL,
                    URL_HELP,
                    definition.url,
                ),
            }
        })
        .collect();

    SettingsForm {
        section: SHIPPERS_SECTION,
        title: SECTION_TITLE,
        description: SECTION_DESCRIPTION,
        slots,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_form_offers_seed_slot() {
        let form = settings_form(&[]);

        assert_eq!(form.section, "shippers");
        assert_eq!(form.slots.len(), 1);
        let seed = &form.slots[0];
        assert_eq!(seed.slot_id, 0);
        assert_eq!(seed.name.key, "shipper_name_0");
        assert_eq!(seed.url.key, "shipper_url_0");
        assert!(seed.name.value.is_none());
        assert!(seed.name.help.is_some());
    }

    #[test]
    fn test_form_carries_stored_values_and_trailing_slot() {
        let raw = vec![
            RawEntry::new("shipper_name_0", "UPS"),
            RawEntry::new("shipper_url_0", "http://ups.com/track?n="),
            RawEntry::new("shipper_name_1", "DHL"),
            RawEntry::empty("shipper_url_1"),
        ];

        let form = settings_form(&raw);

        let ids: Vec<u32> = form.slots.iter().map(|slot| slot.slot_id).collect();
        assert_eq!(ids, vec![0, 1, 2]);

        assert_eq!(form.slots[0].name.value.as_deref(), Some("UPS"));
        assert!(form.slots[0].name.help.is_none());
        assert_eq!(
            form.slots[0].url.value.as_deref(),
            Some("http://ups.com/track?n=")
        );

        assert!(form.slots[1].url.value.is_none());
        assert!(form.slots[1].url.help.is_some());

        assert_eq!(form.slots[2].name.key, "shipper_name_2");
        assert!(form.slots[2].name.value.is_none());
    }
}
