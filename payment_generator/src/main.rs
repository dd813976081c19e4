mod config;
mod event;
mod handler;
mod request;
mod store;

use config::Config;
use handler::AppState;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use store::DynamoStore;
use tracing::debug;

#[tokio::main]
async fn main() -> Result<(), Error> {
    shared::log::init();

    let config = Config::from_env()?;
    debug!("Table name: {}", config.table_name);

    let ddb = shared::dynamodb::client().await;
    debug!("DynamoDB client created");

    let state = AppState {
        store: DynamoStore::new(ddb, config.table_name.clone()),
        config,
    };
    let state = &state;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        handler::func(state, event).await
    }))
    .await?;
    Ok(())
}
