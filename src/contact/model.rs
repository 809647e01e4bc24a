use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::resource::{Field, Resource};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Contact {
    #[schema(max_length = 22, example = "Alice")]
    pub name: String,
    #[schema(max_length = 22, example = "555-1000")]
    pub phone: String,
    #[schema(max_length = 44, example = "1 Main St")]
    pub address: String,
}

impl Resource for Contact {
    const NAME: &'static str = "Contact";
    const FIELDS: &'static [Field] = &[
        Field::new("name", 22),
        Field::new("phone", 22),
        Field::new("address", 44),
    ];

    fn from_cleaned(mut values: HashMap<&'static str, String>) -> Self {
        Contact {
            name: values.remove("name").unwrap_or_default(),
            phone: values.remove("phone").unwrap_or_default(),
            address: values.remove("address").unwrap_or_default(),
        }
    }
}
