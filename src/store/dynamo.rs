use std::collections::HashMap;
use std::marker::PhantomData;

use async_trait::async_trait;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::operation::query::builders::QueryFluentBuilder;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client;
use serde::{Deserialize, Serialize};
use serde_dynamo::{from_items, to_item};

use super::RecordStore;
use crate::error::StoreError;
use crate::resource::{Resource, Stored};

const COUNTER_PK: &str = "Counter";

/// DynamoDB-backed store. All resources share one table; each resource is its own
/// partition (`pk` = resource name) and `sk` is the zero-padded identifier, so a
/// partition query yields records in insertion order.
pub struct DynamoStore<R> {
    client: Client,
    table_name: String,
    _record: PhantomData<fn() -> R>,
}

#[derive(Serialize, Deserialize)]
struct RecordItem<R> {
    pk: String,
    sk: String,
    id: u64,
    record: R,
}

impl<R> From<RecordItem<R>> for Stored<R> {
    fn from(item: RecordItem<R>) -> Self {
        Stored {
            id: item.id,
            record: item.record,
        }
    }
}

fn sort_key(id: u64) -> String {
    format!("{id:020}")
}

fn backend_error<E>(err: E) -> StoreError
where
    E: std::error::Error,
{
    StoreError::Backend(DisplayErrorContext(err).to_string())
}

impl<R: Resource> DynamoStore<R> {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        DynamoStore {
            client,
            table_name: table_name.into(),
            _record: PhantomData,
        }
    }

    /// One page of the resource partition. Strongly consistent so a listing
    /// always includes inserts that already returned.
    fn page_query(
        &self,
        start_key: Option<HashMap<String, AttributeValue>>,
    ) -> QueryFluentBuilder {
        self.client
            .query()
            .table_name(&self.table_name)
            .key_condition_expression("pk = :pk")
            .expression_attribute_values(":pk", AttributeValue::S(R::NAME.to_string()))
            .consistent_read(true)
            .set_exclusive_start_key(start_key)
    }

    async fn next_id(&self) -> Result<u64, StoreError> {
        let res = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .key("pk", AttributeValue::S(COUNTER_PK.to_string()))
            .key("sk", AttributeValue::S(R::NAME.to_string()))
            .update_expression("ADD seq :one")
            .expression_attribute_values(":one", AttributeValue::N("1".to_string()))
            .return_values(ReturnValue::UpdatedNew)
            .send()
            .await
            .map_err(backend_error)?;

        res.attributes
            .as_ref()
            .and_then(|attrs| attrs.get("seq"))
            .and_then(|seq| seq.as_n().ok())
            .and_then(|n| n.parse::<u64>().ok())
            .ok_or(StoreError::MissingCounter(R::NAME))
    }
}

#[async_trait]
impl<R: Resource> RecordStore<R> for DynamoStore<R> {
    async fn insert(&self, record: R) -> Result<Stored<R>, StoreError> {
        let id = self.next_id().await?;
        let item: HashMap<String, AttributeValue> = to_item(RecordItem {
            pk: R::NAME.to_string(),
            sk: sort_key(id),
            id,
            record: record.clone(),
        })?;

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .condition_expression("attribute_not_exists(pk)")
            .send()
            .await
            .map_err(backend_error)?;

        tracing::debug!(resource = R::NAME, id, "dynamodb put_item");
        Ok(Stored { id, record })
    }

    async fn list_all(&self) -> Result<Vec<Stored<R>>, StoreError> {
        let mut records = Vec::new();
        let mut start_key: Option<HashMap<String, AttributeValue>> = None;

        loop {
            let res = self
                .page_query(start_key.take())
                .send()
                .await
                .map_err(backend_error)?;

            if let Some(items) = res.items {
                let page: Vec<RecordItem<R>> = from_items(items)?;
                records.extend(page.into_iter().map(Stored::from));
            }

            match res.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        Ok(records)
    }
}
