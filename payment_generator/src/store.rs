use crate::event::PaymentEvent;
use anyhow::Result;
use async_trait::async_trait;
use shared::dynamodb::{self, Item};

/// Somewhere to persist generated events, one item per call.
#[async_trait]
pub trait PaymentStore {
    async fn put(&self, event: &PaymentEvent) -> Result<()>;
}

pub struct DynamoStore {
    client: aws_sdk_dynamodb::Client,
    table_name: String,
}

impl DynamoStore {
    pub fn new(client: aws_sdk_dynamodb::Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

#[async_trait]
impl PaymentStore for DynamoStore {
    async fn put(&self, event: &PaymentEvent) -> Result<()> {
        dynamodb::put(&self.client, &self.table_name, to_item(event)).await
    }
}

pub fn to_item(event: &PaymentEvent) -> Item {
    Item::from([
        ("payment_id".to_string(), dynamodb::string(event.payment_id.to_string())),
        ("created_at".to_string(), dynamodb::string(event.created_at_iso())),
        ("amount".to_string(), dynamodb::number(event.amount)),
        ("currency".to_string(), dynamodb::string(event.currency.as_str())),
        ("merchant_id".to_string(), dynamodb::string(event.merchant_id.as_str())),
        ("status".to_string(), dynamodb::string(event.status.as_str())),
        ("source".to_string(), dynamodb::string(event.source.as_str())),
    ])
}
