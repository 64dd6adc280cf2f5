use reqwest::header::SET_COOKIE;
use veil_core::VeilResult;

/// What one bounded GET produced. A failed or skipped fetch is represented
/// by the default value: empty body, no cookies, zero requests counted.
#[derive(Debug, Default)]
pub struct FetchOutcome {
    pub body: String,
    pub set_cookie_headers: Vec<String>,
    pub server_requests: u32,
    pub bytes_transferred: u64,
}

/// Single GET with the client's configured timeout. Non-2xx responses are
/// treated the same as connection failures: the caller degrades to the
/// empty-content path.
pub async fn fetch_page(client: &reqwest::Client, url: &str) -> VeilResult<FetchOutcome> {
    let response = client.get(url).send().await?.error_for_status()?;

    let set_cookie_headers = response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok().map(str::to_string))
        .collect();

    let body = response.text().await?;

    Ok(FetchOutcome {
        bytes_transferred: body.len() as u64,
        server_requests: 1,
        set_cookie_headers,
        body,
    })
}
