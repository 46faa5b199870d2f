//! The contract shared by every outbound payload entity.

use serde_json::{Map, Value};

use crate::payload::error::ValidationError;

/// An entity that can be flattened into its wire form and checked for
/// readiness.
///
/// The two operations are independent: serialisation never fails and never
/// reflects invalidity, while validation never alters the entity. Callers are
/// expected to check validity before handing a payload to the transport.
pub trait Entity {
    /// Produces the entity's wire form.
    ///
    /// Implementations must be pure and deterministic for a given field
    /// state, and key order must follow the platform schema.
    fn to_payload(&self) -> Map<String, Value>;

    /// Explains why the entity is not ready to send.
    ///
    /// # Errors
    ///
    /// Returns every broken rule, combined with
    /// [`ValidationError::collect`].
    fn validate(&self) -> Result<(), ValidationError>;

    /// Returns `true` when [`Self::validate`] finds nothing wrong.
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Renders the wire form as a JSON string.
    fn to_json(&self) -> String {
        Value::Object(self.to_payload()).to_string()
    }
}
