use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::resource::{Field, Resource};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Medical {
    #[schema(max_length = 22)]
    pub name: String,
    #[schema(max_length = 22, example = "AB-")]
    pub bloodgroup: String,
    #[schema(max_length = 44)]
    pub birthmark: String,
}

impl Resource for Medical {
    const NAME: &'static str = "Medical";
    const FIELDS: &'static [Field] = &[
        Field::new("name", 22),
        Field::new("bloodgroup", 22),
        Field::new("birthmark", 44),
    ];

    fn from_cleaned(mut values: HashMap<&'static str, String>) -> Self {
        Medical {
            name: values.remove("name").unwrap_or_default(),
            bloodgroup: values.remove("bloodgroup").unwrap_or_default(),
            birthmark: values.remove("birthmark").unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate;
    use serde_json::json;

    #[test]
    fn medical_fields_are_validated() {
        let input = json!({ "name": "Ann", "bloodgroup": "x".repeat(23) });
        let errors = validate::<Medical>(input.as_object().unwrap()).unwrap_err();

        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            ["birthmark", "bloodgroup"]
        );
    }
}
