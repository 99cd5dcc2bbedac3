use contracts::domain::a003_data_table::{ServerSidePage, ServerSideRequest};
use gloo_net::http::Request;

/// Endpoint URL with the request's parameters appended to any existing query string.
pub fn request_url(endpoint: &str, request: &ServerSideRequest) -> Result<String, String> {
    let query = serde_qs::to_string(request).map_err(|e| format!("Failed to encode request: {}", e))?;
    let separator = if endpoint.contains('?') { '&' } else { '?' };
    Ok(format!("{}{}{}", endpoint, separator, query))
}

/// Fetch one page of rows from a server-driven table endpoint
pub async fn fetch_page(endpoint: &str, request: &ServerSideRequest) -> Result<ServerSidePage, String> {
    let url = request_url(endpoint, request)?;
    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to fetch: {}", e))?;
    if !response.ok() {
        return Err(format!("Server error: {}", response.status()));
    }
    response
        .json::<ServerSidePage>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
