use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::models::List;
use crate::query::{build_url, to_query_string};
use crate::transport::HttpTransport;

pub mod comments;
pub mod submissions;

pub use comments::CommentsClient;
pub use submissions::SubmissionsClient;

/// Run one search: encode params, GET once, read the body, decode it.
///
/// Any failure aborts the call; there is no partial result.
pub async fn search<P, T>(
    transport: &dyn HttpTransport,
    endpoint: &str,
    params: &P,
) -> Result<List<T>>
where
    P: Serialize,
    T: DeserializeOwned,
{
    let query = to_query_string(params)?;
    let url = build_url(endpoint, &query);
    debug!(target: "pushshift", "GET {}", url);

    let response = transport.get(&url).await?;
    let body = response.read_all().await?;
    let list: List<T> = serde_json::from_slice(&body)?;

    debug!(target: "pushshift", "Decoded {} record(s) from {}", list.len(), url);
    Ok(list)
}
