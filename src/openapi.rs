use utoipa::openapi::schema::{AllOfBuilder, KnownFormat, ObjectBuilder, SchemaFormat, SchemaType};
use utoipa::openapi::{Ref, RefOr, Schema};
use utoipa::{OpenApi, ToSchema};

use crate::contact::Contact;
use crate::medical::Medical;

/// `{"id": ..}` merged with the fields of the named record schema.
fn stored_schema(record: &str) -> RefOr<Schema> {
    let id = ObjectBuilder::new()
        .schema_type(SchemaType::Integer)
        .format(Some(SchemaFormat::KnownFormat(KnownFormat::Int64)))
        .build();
    let identified = ObjectBuilder::new()
        .property("id", RefOr::T(Schema::Object(id)))
        .required("id")
        .build();

    RefOr::T(Schema::AllOf(
        AllOfBuilder::new()
            .item(RefOr::T(Schema::Object(identified)))
            .item(RefOr::Ref(Ref::from_schema_name(record)))
            .build(),
    ))
}

pub struct StoredContact;

impl<'s> ToSchema<'s> for StoredContact {
    fn schema() -> (&'s str, RefOr<Schema>) {
        ("StoredContact", stored_schema("Contact"))
    }
}

pub struct StoredMedical;

impl<'s> ToSchema<'s> for StoredMedical {
    fn schema() -> (&'s str, RefOr<Schema>) {
        ("StoredMedical", stored_schema("Medical"))
    }
}

#[derive(ToSchema)]
pub struct DetailDoc {
    pub detail: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::app::health,
        crate::contact::routes::list,
        crate::contact::routes::create,
        crate::medical::routes::get_medical,
        crate::medical::routes::save_medical,
    ),
    components(
        schemas(
            Contact,
            Medical,
            StoredContact,
            StoredMedical,
            DetailDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "contact"),
        (name = "medical")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::Resource;

    #[test]
    fn document_lists_both_resources() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        assert!(paths.iter().any(|p| *p == "/api/v1/contact"));
        assert!(paths.iter().any(|p| *p == "/api/v1/medical"));
        assert!(paths.iter().any(|p| *p == "/health"));
    }

    fn assert_limits_documented<R: Resource>() {
        let doc = ApiDoc::openapi();
        let schemas = doc.components.expect("components").schemas;
        let object = match schemas.get(R::NAME) {
            Some(RefOr::T(Schema::Object(object))) => object,
            other => panic!("no object schema for {}: {other:?}", R::NAME),
        };

        assert_eq!(object.properties.len(), R::FIELDS.len());
        for field in R::FIELDS {
            match object.properties.get(field.name) {
                Some(RefOr::T(Schema::Object(property))) => {
                    assert_eq!(property.max_length, Some(field.max_length), "{}", field.name)
                }
                other => panic!("{} missing from schema: {other:?}", field.name),
            }
            assert!(object.required.iter().any(|r| r == field.name));
        }
    }

    #[test]
    fn schemas_follow_validated_field_limits() {
        assert_limits_documented::<Contact>();
        assert_limits_documented::<Medical>();
    }
}
