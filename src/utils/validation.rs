//! Input validation utilities

use crate::constants::MAX_EVENT_NAME_LENGTH;

/// Validate an event name taken from a path parameter
pub fn validate_event_name(name: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Event name must not be empty");
    }
    if name.len() > MAX_EVENT_NAME_LENGTH {
        return Err("Event name is too long");
    }
    Ok(())
}
