use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::redirect;

pub fn build_client() -> Result<Client> {
    let custom_redirect_policy = redirect::Policy::custom(|attempt| {
        if attempt.previous().len() > 10 {
            attempt.error("Too many redirects (>10)")
        } else {
            attempt.follow()
        }
    });

    let client = Client::builder()
        .redirect(custom_redirect_policy)
        .build()?;
    Ok(client)
}

/// Search URL for one results page, e.g.
/// `https://www.amazon.co.uk/s?k=gaming+mouse&page=2`.
pub fn search_url(base_url: &str, query: &str, page: u32) -> String {
    let encoded = query.trim().replace(' ', "+");
    format!("{}/s?k={}&page={}", base_url.trim_end_matches('/'), encoded, page)
}

pub fn fetch_search_page(client: &Client, url: &str) -> Result<String> {
    let response = client.get(url)
        .header("User-Agent", "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3")
        .send()
        .with_context(|| format!("request failed: {}", url))?
        .error_for_status()
        .with_context(|| format!("non-success status: {}", url))?;

    Ok(response.text()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_url_encodes_query_and_page() {
        assert_eq!(
            search_url("https://www.amazon.co.uk", "gaming mouse", 2),
            "https://www.amazon.co.uk/s?k=gaming+mouse&page=2"
        );
    }

    #[test]
    fn search_url_tolerates_trailing_slash() {
        assert_eq!(
            search_url("https://www.amazon.co.uk/", "usb hub", 1),
            "https://www.amazon.co.uk/s?k=usb+hub&page=1"
        );
    }
}
