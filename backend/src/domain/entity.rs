//! Entity definition: the shape every catalogued resource shares.

use std::fmt::Display;

/// Description of one resource type: an identity field plus a set of data
/// fields that are replaced wholesale on update.
///
/// Implementations are plain records; all business meaning lives in the
/// generic service. `replace_fields` must overwrite every data field and
/// must never touch the identity field.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Entity type name as shown in error and deletion messages, e.g. `Book`.
    const NAME: &'static str;

    /// Identity key. Numeric store-assigned or string caller-assigned.
    type Key: Clone + Eq + Display + Send + Sync + 'static;

    /// Complete replacement set of data-field values (identity excluded).
    type Fields: Send + 'static;

    /// Current identity key of this record.
    fn key(&self) -> Self::Key;

    /// Overwrite every data field with the supplied values. Full replace,
    /// not patch: callers supply the whole field set.
    fn replace_fields(&mut self, fields: Self::Fields);
}
