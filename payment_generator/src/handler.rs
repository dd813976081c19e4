use crate::config::Config;
use crate::event::generate;
use crate::request::GenerateRequest;
use crate::store::PaymentStore;
use anyhow::{Context, Result};
use chrono::Utc;
use lambda_runtime::LambdaEvent;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};
use uuid::Uuid;

pub const MESSAGE: &str = "Mock payment events inserted.";

/// Built once at cold start and lent to every invocation.
pub struct AppState<S> {
    pub config: Config,
    pub store: S,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Response {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub message: String,
    pub table: String,
    pub count: usize,
    pub payment_ids: Vec<Uuid>,
}

pub async fn func<S>(state: &AppState<S>, event: LambdaEvent<Value>) -> Result<Response>
where
    S: PaymentStore + Sync,
{
    debug!("Request: {}", event.context.request_id);
    let request = GenerateRequest::from_payload(&event.payload);
    let mut rng = StdRng::from_entropy();

    handle(&state.config, &state.store, &mut rng, request).await
}

/// Writes are sequential; the first failed put aborts the invocation and
/// anything already written stays in the table.
pub async fn handle<S, R>(
    config: &Config,
    store: &S,
    rng: &mut R,
    request: GenerateRequest,
) -> Result<Response>
where
    S: PaymentStore + ?Sized,
    R: Rng + ?Sized,
{
    let count = request.count();
    let mut payment_ids = Vec::new();

    for _ in 0..count {
        let event = generate(rng, Utc::now());
        store.put(&event).await.with_context(|| {
            format!(
                "Failed to insert payment {} into {}",
                event.payment_id, config.table_name
            )
        })?;

        info!(
            "Payment: {} | Amount: {} {} | Status: {}",
            event.payment_id,
            event.amount,
            event.currency.as_str(),
            event.status.as_str()
        );
        payment_ids.push(event.payment_id);
    }

    info!("Inserted {} into {}", payment_ids.len(), config.table_name);

    let summary = Summary {
        message: MESSAGE.to_string(),
        table: config.table_name.clone(),
        count: payment_ids.len(),
        payment_ids,
    };

    Ok(Response {
        status_code: 200,
        body: serde_json::to_string(&summary)?,
    })
}
