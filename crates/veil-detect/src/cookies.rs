use veil_core::Cookie;

struct CookieTemplate {
    kind: &'static str,
    purpose: String,
    critique: String,
}

/// Parse repeated `Set-Cookie` header values into classified cookies.
/// Headers whose first `;`-delimited segment carries no `=` are skipped
/// silently.
pub fn parse_cookies(headers: &[String], domain: &str) -> Vec<Cookie> {
    headers
        .iter()
        .filter_map(|header| parse_one(header, domain))
        .collect()
}

fn parse_one(header: &str, domain: &str) -> Option<Cookie> {
    let first_segment = header.split(';').next()?.trim();
    let (name, _value) = first_segment.split_once('=')?;
    let name = name.trim();

    let template = classify_name(name, domain);

    Some(Cookie {
        name: name.to_string(),
        kind: template.kind.to_string(),
        purpose: template.purpose,
        domain: domain.to_string(),
        expiry: classify_expiry(header),
        critique: Some(template.critique),
        is_real: true,
    })
}

// First-match-wins over the cookie name, case-insensitive.
fn classify_name(name: &str, domain: &str) -> CookieTemplate {
    let lowered = name.to_ascii_lowercase();

    if lowered.contains("_ga") || lowered.contains("analytics") {
        CookieTemplate {
            kind: "behavioral tracking",
            purpose: "Google Analytics - constructs behavioral profiles across digital spaces"
                .to_string(),
            critique: "Creates persistent identity markers for surveillance capitalism"
                .to_string(),
        }
    } else if lowered.contains("_fb") || lowered.contains("facebook") {
        CookieTemplate {
            kind: "advertising surveillance",
            purpose: "Facebook tracking - builds psychographic profiles for manipulation"
                .to_string(),
            critique: "Enables cross-platform behavioral modification and social control"
                .to_string(),
        }
    } else if lowered.contains("doubleclick") {
        CookieTemplate {
            kind: "cross-site tracking",
            purpose: "Google DoubleClick - omnipresent user identification".to_string(),
            critique: "Creates persistent shadow profiles across the web".to_string(),
        }
    } else {
        CookieTemplate {
            kind: "unknown tracking",
            purpose: format!("Unclassified tracking cookie from {domain}"),
            critique: "Purpose unclear - potential privacy violation".to_string(),
        }
    }
}

fn classify_expiry(header: &str) -> String {
    let lowered = header.to_ascii_lowercase();
    if lowered.contains("max-age") {
        "Session-based".to_string()
    } else if lowered.contains("expires") {
        "Long-term".to_string()
    } else {
        "Session".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_single(header: &str) -> Vec<Cookie> {
        parse_cookies(&[header.to_string()], "example.com")
    }

    #[test]
    fn ga_cookie_classified_as_behavioral_tracking() {
        let cookies = parse_single("_ga=GA1.2.123.456; Path=/");
        assert_eq!(cookies.len(), 1);
        assert_eq!(cookies[0].name, "_ga");
        assert_eq!(cookies[0].kind, "behavioral tracking");
        assert_eq!(
            cookies[0].critique.as_deref(),
            Some("Creates persistent identity markers for surveillance capitalism")
        );
        assert!(cookies[0].is_real);
    }

    #[test]
    fn name_matching_is_case_insensitive() {
        let cookies = parse_single("MyAnalyticsId=abc");
        assert_eq!(cookies[0].kind, "behavioral tracking");

        let cookies = parse_single("FACEBOOK_session=xyz");
        assert_eq!(cookies[0].kind, "advertising surveillance");
    }

    #[test]
    fn doubleclick_wins_only_after_ga_and_fb() {
        let cookies = parse_single("doubleclick_id=1");
        assert_eq!(cookies[0].kind, "cross-site tracking");

        // _ga takes precedence even when doubleclick also appears.
        let cookies = parse_single("_ga_doubleclick=1");
        assert_eq!(cookies[0].kind, "behavioral tracking");
    }

    #[test]
    fn unknown_cookie_references_page_domain() {
        let cookies = parse_single("sessionid=deadbeef");
        assert_eq!(cookies[0].kind, "unknown tracking");
        assert_eq!(
            cookies[0].purpose,
            "Unclassified tracking cookie from example.com"
        );
    }

    #[test]
    fn malformed_header_is_skipped_silently() {
        let headers = vec![
            "garbage-without-equals; Path=/".to_string(),
            "_gid=123".to_string(),
        ];
        let cookies = parse_cookies(&headers, "example.com");
        assert_eq!(cookies.len(), 1);
        assert_eq!(cookies[0].name, "_gid");
    }

    #[test]
    fn expiry_buckets() {
        assert_eq!(parse_single("a=1; Max-Age=3600")[0].expiry, "Session-based");
        assert_eq!(
            parse_single("a=1; Expires=Wed, 21 Oct 2026 07:28:00 GMT")[0].expiry,
            "Long-term"
        );
        assert_eq!(parse_single("a=1; Path=/")[0].expiry, "Session");
    }
}
