use veil_core::FingerprintingMethod;
use veil_rules::{DETECTED_SUFFIX, FINGERPRINT_SIGNATURES};

/// Scan a page body against every fingerprint signature. All signatures are
/// evaluated and returned in table order regardless of detection, so the
/// caller always sees the full technique inventory.
pub fn scan_fingerprinting(body: &str) -> Vec<FingerprintingMethod> {
    let body_lower = body.to_lowercase();

    FINGERPRINT_SIGNATURES
        .iter()
        .map(|sig| {
            let detected = body_lower.contains(sig.pattern);
            let word = first_word(sig.technique);

            FingerprintingMethod {
                technique: sig.technique.to_string(),
                detected,
                description: if detected {
                    format!("{}{DETECTED_SUFFIX}", sig.description)
                } else {
                    sig.description.to_string()
                },
                data_collected: format!("{word} characteristics and patterns"),
                resistance: detected
                    .then(|| format!("Use browser extensions to spoof {word} data")),
            }
        })
        .collect()
}

fn first_word(technique: &str) -> String {
    technique
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_signatures_returned_in_table_order() {
        let methods = scan_fingerprinting("");
        assert_eq!(methods.len(), FINGERPRINT_SIGNATURES.len());
        assert_eq!(methods[0].technique, "Canvas Fingerprinting");
        assert_eq!(methods[5].technique, "Battery Status Exposure");
        assert!(methods.iter().all(|m| !m.detected));
        assert!(methods.iter().all(|m| m.resistance.is_none()));
    }

    #[test]
    fn canvas_detection_is_case_insensitive_and_suffixed() {
        let methods = scan_fingerprinting("<script>ctx = CANVAS.getContext('2d')</script>");
        let canvas = &methods[0];
        assert!(canvas.detected);
        assert!(canvas.description.ends_with(DETECTED_SUFFIX));
        assert_eq!(
            canvas.resistance.as_deref(),
            Some("Use browser extensions to spoof canvas data")
        );
        assert_eq!(canvas.data_collected, "canvas characteristics and patterns");
    }

    #[test]
    fn undetected_description_has_no_suffix() {
        let methods = scan_fingerprinting("a perfectly innocent page");
        assert!(!methods[0].detected);
        assert_eq!(
            methods[0].description,
            "Invisible images reveal unique hardware signatures"
        );
    }

    #[test]
    fn multiple_independent_detections() {
        let methods = scan_fingerprinting("canvas webgl webrtc");
        let detected: Vec<&str> = methods
            .iter()
            .filter(|m| m.detected)
            .map(|m| m.technique.as_str())
            .collect();
        assert_eq!(
            detected,
            vec!["Canvas Fingerprinting", "WebGL Fingerprinting", "WebRTC IP Leakage"]
        );
    }
}
