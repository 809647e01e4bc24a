use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use serde_json::{Map, Value};

use crate::resource::{Field, Resource};

/// Field-level validation failures, serialized as `{"field": ["message", ...]}`.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn messages(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fields: Vec<&str> = self.fields().collect();
        write!(f, "invalid fields: {}", fields.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Converts an untyped input map into a record of type `R`.
///
/// Every declared field is checked; unknown keys are ignored. Numbers are taken in
/// their decimal form. Values are trimmed before the blank and length checks.
pub fn validate<R: Resource>(input: &Map<String, Value>) -> Result<R, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    let mut cleaned = HashMap::with_capacity(R::FIELDS.len());

    for field in R::FIELDS {
        match clean_field(field, input.get(field.name)) {
            Ok(value) => {
                cleaned.insert(field.name, value);
            }
            Err(message) => errors.add(field.name, message),
        }
    }

    if errors.is_empty() {
        Ok(R::from_cleaned(cleaned))
    } else {
        Err(errors)
    }
}

fn clean_field(field: &Field, value: Option<&Value>) -> Result<String, String> {
    let raw = match value {
        None => return Err("This field is required.".to_string()),
        Some(Value::Null) => return Err("This field may not be null.".to_string()),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(_) => return Err("Not a valid string.".to_string()),
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("This field may not be blank.".to_string());
    }
    if trimmed.chars().count() > field.max_length {
        return Err(format!(
            "Ensure this field has no more than {} characters.",
            field.max_length
        ));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::Contact;
    use serde_json::json;

    fn input(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test input must be an object"),
        }
    }

    #[test]
    fn accepts_complete_input_and_ignores_unknown_keys() {
        let contact: Contact = validate(&input(json!({
            "name": "Alice",
            "phone": "555-1000",
            "address": "1 Main St",
            "email": "alice@example.com"
        })))
        .unwrap();

        assert_eq!(contact.name, "Alice");
        assert_eq!(contact.phone, "555-1000");
        assert_eq!(contact.address, "1 Main St");
    }

    #[test]
    fn reports_every_failing_field() {
        let errors = validate::<Contact>(&input(json!({
            "name": "",
            "phone": null,
        })))
        .unwrap_err();

        assert_eq!(
            errors.messages("name").unwrap(),
            ["This field may not be blank."]
        );
        assert_eq!(
            errors.messages("phone").unwrap(),
            ["This field may not be null."]
        );
        assert_eq!(
            errors.messages("address").unwrap(),
            ["This field is required."]
        );
    }

    #[test]
    fn max_length_is_inclusive() {
        let at_limit = "a".repeat(22);
        let over_limit = "a".repeat(23);

        let ok = validate::<Contact>(&input(json!({
            "name": at_limit,
            "phone": "1",
            "address": "x".repeat(44),
        })));
        assert!(ok.is_ok());

        let errors = validate::<Contact>(&input(json!({
            "name": over_limit,
            "phone": "1",
            "address": "x".repeat(45),
        })))
        .unwrap_err();
        assert_eq!(
            errors.messages("name").unwrap(),
            ["Ensure this field has no more than 22 characters."]
        );
        assert_eq!(
            errors.messages("address").unwrap(),
            ["Ensure this field has no more than 44 characters."]
        );
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let ok = validate::<Contact>(&input(json!({
            "name": "é".repeat(22),
            "phone": "1",
            "address": "x",
        })));
        assert!(ok.is_ok());
    }

    #[test]
    fn whitespace_only_is_blank_and_values_are_trimmed() {
        let errors = validate::<Contact>(&input(json!({
            "name": "   ",
            "phone": "1",
            "address": "x",
        })))
        .unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), ["name"]);

        let contact: Contact = validate(&input(json!({
            "name": "  Bob ",
            "phone": "1",
            "address": "x",
        })))
        .unwrap();
        assert_eq!(contact.name, "Bob");
    }

    #[test]
    fn numbers_are_coerced_to_strings() {
        let contact: Contact = validate(&input(json!({
            "name": "Alice",
            "phone": 5551000,
            "address": 1.5,
        })))
        .unwrap();
        assert_eq!(contact.phone, "5551000");
        assert_eq!(contact.address, "1.5");
    }

    #[test]
    fn bools_arrays_and_objects_are_rejected() {
        let errors = validate::<Contact>(&input(json!({
            "name": true,
            "phone": ["555"],
            "address": { "street": "Main" },
        })))
        .unwrap_err();
        for field in ["name", "phone", "address"] {
            assert_eq!(errors.messages(field).unwrap(), ["Not a valid string."]);
        }
    }

    #[test]
    fn errors_serialize_as_field_map() {
        let mut errors = ValidationErrors::default();
        errors.add("name", "This field is required.");
        assert_eq!(
            serde_json::to_value(&errors).unwrap(),
            json!({ "name": ["This field is required."] })
        );
    }
}
