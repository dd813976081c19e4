use serde_json::Value;

const DEFAULT_COUNT: usize = 1;

/// How many events one invocation should insert.
///
/// Anything other than a positive JSON integer under `count` is ignored and
/// the invocation falls back to a single event.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GenerateRequest {
    count: Option<usize>,
}

impl GenerateRequest {
    pub fn from_payload(payload: &Value) -> Self {
        let count = payload
            .get("count")
            .and_then(Value::as_u64)
            .filter(|count| *count > 0)
            .and_then(|count| usize::try_from(count).ok());

        Self { count }
    }

    pub fn count(&self) -> usize {
        self.count.unwrap_or(DEFAULT_COUNT)
    }
}
