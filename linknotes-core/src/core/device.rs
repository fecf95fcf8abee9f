//! Stable hardware-based device identity used to stamp logged operations.

use crate::{LinknotesError, Result};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// Returns a stable device identifier derived from the machine's primary MAC address.
///
/// The MAC address bytes are hashed to produce an opaque identifier of the form
/// `device-<16 hex digits>`. The same hardware always yields the same identifier
/// across process restarts.
///
/// # Errors
///
/// Returns [`LinknotesError::Io`] if the system has no network interfaces or
/// the MAC address cannot be read.
pub fn get_device_id() -> Result<String> {
    match mac_address::get_mac_address() {
        Ok(Some(mac)) => {
            let mut hasher = DefaultHasher::new();
            mac.bytes().hash(&mut hasher);
            Ok(format!("device-{:016x}", hasher.finish()))
        }
        Ok(None) => Err(LinknotesError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine device MAC address",
        ))),
        Err(e) => Err(LinknotesError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("Failed to get MAC address: {e}"),
        ))),
    }
}

/// Returns [`get_device_id`], or a random `device-<uuid>` when the machine has
/// no readable MAC address.
///
/// The random id changes on every call; callers persist it once.
pub fn device_id_or_random() -> String {
    get_device_id().unwrap_or_else(|e| {
        log::warn!("falling back to a random device id: {e}");
        format!("device-{}", Uuid::new_v4().simple())
    })
}
