use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A declared string field of a resource and its maximum length in characters.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub max_length: usize,
}

impl Field {
    pub const fn new(name: &'static str, max_length: usize) -> Self {
        Field { name, max_length }
    }
}

/// A flat record shape with a fixed set of required, length-bounded string fields.
pub trait Resource:
    Serialize + DeserializeOwned + Clone + PartialEq + std::fmt::Debug + Send + Sync + 'static
{
    /// Name used for logging and as the storage partition, e.g. "Contact".
    const NAME: &'static str;
    const FIELDS: &'static [Field];

    /// Builds the record from values that already passed validation,
    /// keyed by field name.
    fn from_cleaned(values: HashMap<&'static str, String>) -> Self;
}

/// A record together with its store-assigned identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stored<R> {
    pub id: u64,
    #[serde(flatten)]
    pub record: R,
}
