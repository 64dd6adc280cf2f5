//! Poisoning engine: fabricates plausible fake tracking values and
//! fingerprint-obfuscation payloads for a caller to apply client-side.
//! Pure local computation, no network access.

mod rng;
mod values;

use std::time::Instant;

use chrono::Utc;
use veil_core::{
    FingerprintObfuscation, PoisonImpact, PoisonReport, PoisonRequest, PoisonedCookie,
};
use veil_rules::{DEFAULT_POISON_TARGETS, DISRUPTION_KEYWORDS};

use rng::TokenRng;
pub use values::OBFUSCATED_PLACEHOLDER;

pub fn poison(request: &PoisonRequest) -> PoisonReport {
    let start = Instant::now();
    let mut rng = TokenRng::from_clock();

    let poisoned_cookies = if request.target_cookies.is_empty() {
        poison_targets(
            &mut rng,
            DEFAULT_POISON_TARGETS.iter().copied(),
            "algorithmic confusion",
        )
    } else {
        poison_targets(
            &mut rng,
            request.target_cookies.iter().map(String::as_str),
            "data injection",
        )
    };

    let fingerprint_obfuscations = obfuscate_fingerprints(&mut rng);

    // One keyword per poisoned cookie, in list order, capped at the list.
    let disruption_keywords: Vec<String> = DISRUPTION_KEYWORDS
        .iter()
        .take(poisoned_cookies.len())
        .map(|kw| kw.to_string())
        .collect();

    let elapsed_secs = start.elapsed().as_secs_f64();
    let carbon = elapsed_secs * 0.05;
    let vectors = poisoned_cookies.len() + fingerprint_obfuscations.len();

    PoisonReport {
        success: true,
        poisoned_cookies,
        fingerprint_obfuscations,
        disruption_keywords,
        message: "Digital chaos spell complete - surveillance apparatus confused".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        environmental_impact: PoisonImpact {
            carbon_footprint: format!("{carbon:.4}g CO\u{2082}"),
            processing_time: format!("{elapsed_secs:.2}s"),
            data_manipulated: format!("{vectors} tracking vectors"),
            message: "Minimal environmental impact - local data scrambling only".to_string(),
        },
        resistance_level: "Digital Liberation Achieved".to_string(),
        critique: "Algorithmic surveillance apparatus disrupted through playful technological resistance"
            .to_string(),
    }
}

fn poison_targets<'a>(
    rng: &mut TokenRng,
    names: impl Iterator<Item = &'a str>,
    technique: &str,
) -> Vec<PoisonedCookie> {
    names
        .map(|name| PoisonedCookie {
            name: name.to_string(),
            original_value: OBFUSCATED_PLACEHOLDER.to_string(),
            poisoned_value: values::false_tracking_value(rng, name),
            technique: technique.to_string(),
        })
        .collect()
}

// Always exactly five entries with fixed techniques and resistance levels;
// only the payload varies.
fn obfuscate_fingerprints(rng: &mut TokenRng) -> Vec<FingerprintObfuscation> {
    vec![
        FingerprintObfuscation {
            technique: "Canvas Fingerprint Scrambling".to_string(),
            description:
                "Injected random noise into canvas rendering to break hardware identification"
                    .to_string(),
            obfuscated_data: values::false_canvas_signature(rng),
            resistance_level: "high".to_string(),
        },
        FingerprintObfuscation {
            technique: "WebRTC IP Masking".to_string(),
            description: "Spoofed local and public IP addresses to prevent location tracking"
                .to_string(),
            obfuscated_data: values::false_ip_data(rng),
            resistance_level: "high".to_string(),
        },
        FingerprintObfuscation {
            technique: "Audio Context Disruption".to_string(),
            description:
                "Randomized audio processing signatures to prevent device identification"
                    .to_string(),
            obfuscated_data: values::false_audio_signature(rng),
            resistance_level: "medium".to_string(),
        },
        FingerprintObfuscation {
            technique: "Font Enumeration Spoofing".to_string(),
            description:
                "Provided false font list to obscure cultural and professional markers"
                    .to_string(),
            obfuscated_data: values::false_font_list(rng),
            resistance_level: "medium".to_string(),
        },
        FingerprintObfuscation {
            technique: "Screen Resolution Randomization".to_string(),
            description: "Reported randomized screen dimensions to break device tracking"
                .to_string(),
            obfuscated_data: values::false_screen_data(rng),
            resistance_level: "low".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(targets: &[&str]) -> PoisonRequest {
        PoisonRequest {
            url: "https://tracked.example".to_string(),
            domain: "tracked.example".to_string(),
            poison_level: "aggressive".to_string(),
            target_cookies: targets.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn explicit_target_gets_ga_shaped_value() {
        let report = poison(&request(&["_ga"]));
        assert!(report.success);
        assert_eq!(report.poisoned_cookies.len(), 1);

        let cookie = &report.poisoned_cookies[0];
        assert_eq!(cookie.name, "_ga");
        assert_eq!(cookie.technique, "data injection");
        assert_eq!(cookie.original_value, OBFUSCATED_PLACEHOLDER);
        assert_ne!(cookie.poisoned_value, OBFUSCATED_PLACEHOLDER);

        let parts: Vec<&str> = cookie.poisoned_value.split('.').collect();
        assert_eq!(parts[0], "GA1");
        assert_eq!(parts[1], "2");
        assert_eq!(parts[2].len(), 9);
        assert!(parts[2].chars().all(|c| c.is_ascii_digit()));
        assert_eq!(parts[3].len(), 10);
        assert!(parts[3].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn default_targets_are_the_six_known_trackers() {
        let report = poison(&request(&[]));
        let names: Vec<&str> = report
            .poisoned_cookies
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["_ga", "_fbp", "_gid", "doubleclick", "_hjid", "_mixpanel"]
        );
        assert!(report
            .poisoned_cookies
            .iter()
            .all(|c| c.technique == "algorithmic confusion"));
    }

    #[test]
    fn doubleclick_value_is_a_long_numeral() {
        let report = poison(&request(&["doubleclick"]));
        let value = &report.poisoned_cookies[0].poisoned_value;
        assert!(value.len() == 18 || value.len() == 19, "got {value}");
        assert!(value.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn unknown_cookie_gets_a_32_char_token() {
        let report = poison(&request(&["weird_tracker"]));
        let value = &report.poisoned_cookies[0].poisoned_value;
        assert_eq!(value.len(), 32);
        assert!(value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn always_exactly_five_obfuscations() {
        for targets in [&[][..], &["_ga"][..], &["a", "b", "c"][..]] {
            let report = poison(&request(targets));
            let techniques: Vec<&str> = report
                .fingerprint_obfuscations
                .iter()
                .map(|o| o.technique.as_str())
                .collect();
            assert_eq!(
                techniques,
                vec![
                    "Canvas Fingerprint Scrambling",
                    "WebRTC IP Masking",
                    "Audio Context Disruption",
                    "Font Enumeration Spoofing",
                    "Screen Resolution Randomization",
                ]
            );
            let levels: Vec<&str> = report
                .fingerprint_obfuscations
                .iter()
                .map(|o| o.resistance_level.as_str())
                .collect();
            assert_eq!(levels, vec!["high", "high", "medium", "medium", "low"]);
        }
    }

    #[test]
    fn one_disruption_keyword_per_cookie_capped_at_seven() {
        let report = poison(&request(&["a", "b", "c"]));
        assert_eq!(report.disruption_keywords.len(), 3);
        assert_eq!(
            report.disruption_keywords,
            vec!["liberation", "disruption", "wildflowers"]
        );

        let many: Vec<&str> = (0..9).map(|_| "x").collect::<Vec<_>>();
        let report = poison(&request(&many));
        assert_eq!(report.disruption_keywords.len(), 7);
    }

    #[test]
    fn carbon_estimate_is_time_based_and_tiny() {
        let report = poison(&request(&[]));
        let grams: f64 = report
            .environmental_impact
            .carbon_footprint
            .trim_end_matches("g CO\u{2082}")
            .parse()
            .unwrap();
        // 0.05 g/s over a sub-second local run.
        assert!(grams < 0.05);
        assert_eq!(
            report.environmental_impact.data_manipulated,
            "11 tracking vectors"
        );
    }
}
