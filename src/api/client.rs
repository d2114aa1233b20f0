use yansi::Paint;
use std::sync::atomic::{AtomicBool, Ordering};

pub const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

static SILENT: AtomicBool = AtomicBool::new(false);

pub fn set_silent(silent: bool) {
    SILENT.store(silent, Ordering::Relaxed);
}

pub fn is_silent() -> bool {
    SILENT.load(Ordering::Relaxed)
}

fn log_output(msg: String) {
    if !is_silent() {
        println!("{}", msg);
    }
}

/// Build an HTTP client for talking to the admin API.
pub fn build_client(timeout: std::time::Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(format!("Storefront/{}", env!("CARGO_PKG_VERSION")))
        .timeout(timeout)
        .build()
}

/// Keep the first four characters of a token and hide the rest.
pub fn mask_token(token: &str) -> String {
    if token.is_empty() {
        return String::new();
    }
    let visible: String = token.chars().take(4).collect();
    format!("{}****", visible)
}

/// Echo an outgoing request as a curl command line.
pub fn echo_request(method: &str, url: &str, token: &str) {
    let mut parts = Vec::new();
    parts.push(Paint::new("curl").fg(yansi::Color::Green).bold().to_string());
    parts.push(format!("-X {}", Paint::new(method).fg(yansi::Color::Yellow).bold()));
    parts.push(format!("'{}'", Paint::new(url).fg(yansi::Color::Cyan)));
    parts.push(format!(
        "{} {}",
        Paint::new("-H").fg(yansi::Color::Magenta),
        Paint::new(format!("'{}: {}'", ACCESS_TOKEN_HEADER, mask_token(token))).fg(yansi::Color::Magenta)
    ));
    log_output(format!("Request:\n{}", parts.join(" ")));
}

/// Echo a decoded response body, dimmed.
pub fn echo_response(body: &serde_json::Value) {
    let json_str = serde_json::to_string(body).unwrap_or_else(|_| format!("{:?}", body));
    let response_str = Paint::new(json_str).rgb(100, 100, 100).to_string();
    log_output(format!("Response:\n{}", response_str));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_token_hides_tail() {
        assert_eq!(mask_token("shpat_abcdef"), "shpa****");
    }

    #[test]
    fn test_mask_token_short_and_empty() {
        assert_eq!(mask_token("ab"), "ab****");
        assert_eq!(mask_token(""), "");
    }
}
