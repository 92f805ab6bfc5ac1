use crate::error::CoreError;

/// Primary key of the `usuarios` table (PostgreSQL `SERIAL`).
pub type DbId = i32;

/// Parse a raw identifier (e.g. a path segment) into a [`DbId`].
///
/// Identifiers are accepted as unsigned 32-bit integers written as plain
/// decimal digits: no sign, no surrounding whitespace. Values that parse
/// but exceed the `SERIAL` range can never name a stored row and are reported
/// as [`CoreError::NotFound`] rather than as a parse failure.
pub fn parse_id(entity: &'static str, raw: &str) -> Result<DbId, CoreError> {
    let invalid = |reason: &dyn std::fmt::Display| {
        CoreError::Validation(format!("Invalid {entity} id '{raw}': {reason}"))
    };

    // `u32::from_str` tolerates a leading `+`.
    if raw.starts_with('+') {
        return Err(invalid(&"unexpected sign"));
    }
    let id: u32 = raw.parse().map_err(|e| invalid(&e))?;

    DbId::try_from(id).map_err(|_| CoreError::NotFound {
        entity,
        id: id.into(),
    })
}
