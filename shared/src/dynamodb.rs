use anyhow::{Context, Result};
use aws_sdk_dynamodb::types::AttributeValue;
use std::collections::HashMap;

pub type Item = HashMap<String, AttributeValue>;

pub async fn client() -> aws_sdk_dynamodb::Client {
    let aws_config = aws_config::load_from_env().await;
    aws_sdk_dynamodb::Client::new(&aws_config)
}

/// Unconditional `PutItem`, replacing any item that already has the same key.
pub async fn put(ddb: &aws_sdk_dynamodb::Client, table_name: &str, item: Item) -> Result<()> {
    ddb.put_item()
        .table_name(table_name)
        .set_item(Some(item))
        .send()
        .await
        .with_context(|| format!("PutItem into {} failed", table_name))?;

    Ok(())
}

pub fn string(value: impl Into<String>) -> AttributeValue {
    AttributeValue::S(value.into())
}

pub fn number(value: impl ToString) -> AttributeValue {
    AttributeValue::N(value.to_string())
}
