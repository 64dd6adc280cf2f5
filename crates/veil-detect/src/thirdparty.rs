use veil_core::ThirdParty;
use veil_rules::KNOWN_TRACKERS;

/// Detect known tracker domains embedded in a page body. Matching is a
/// case-sensitive literal substring test; `requests` is the occurrence
/// count of the domain string, a crude proxy for real request volume.
pub fn scan_third_parties(body: &str) -> Vec<ThirdParty> {
    KNOWN_TRACKERS
        .iter()
        .filter(|rule| body.contains(rule.domain))
        .map(|rule| ThirdParty {
            domain: rule.domain.to_string(),
            category: rule.category.to_string(),
            purpose: format!("Detected {} scripts and trackers", rule.kind),
            requests: body.matches(rule.domain).count() as u64,
            data_shared: "Behavioral patterns, device information, interaction data".to_string(),
            critique: Some(format!(
                "Commodifies human attention and agency for {}",
                rule.category
            )),
        })
        .collect()
}
