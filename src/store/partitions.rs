//! Key layout and encoding utilities for Fjall partitions
//!
//! Partition structure:
//! - `settings`: settings:{section}:{seq:08} -> RawEntry (JSON)
//! - `orders`: order:{order_id}:{field} -> value (UTF-8)
//! - `notices`: notice:{name} -> expiry (RFC 3339)

pub const ORDER_FIELD_SHIPPER: &str = "shipper";
pub const ORDER_FIELD_NUMBER: &str = "number";

/// Encode a settings entry key: settings:{section}:{seq:08}
pub fn encode_settings_key(section: &str, seq: usize) -> Vec<u8> {
    format!("settings:{}:{:08}", section, seq).into_bytes()
}

/// Encode a settings prefix for range scan: settings:{section}:
pub fn encode_settings_prefix(section: &str) -> Vec<u8> {
    format!("settings:{}:", section).into_bytes()
}

/// Decode the sequence number of a settings entry key in `section`
///
/// Keys of any other section yield `None`.
pub fn decode_settings_key(section: &str, key: &[u8]) -> Option<usize> {
    let key_str = std::str::from_utf8(key).ok()?;
    let seq = key_str
        .strip_prefix("settings:")?
        .strip_prefix(section)?
        .strip_prefix(':')?;
    if seq.is_empty() || !seq.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    seq.parse().ok()
}

/// Encode an order field key: order:{order_id}:{field}
pub fn encode_order_key(order_id: u64, field: &str) -> Vec<u8> {
    format!("order:{}:{}", order_id, field).into_bytes()
}

/// Encode a notice key: notice:{name}
pub fn encode_notice_key(name: &str) -> Vec<u8> {
    format!("notice:{}", name).into_bytes()
}
