use veil_core::{FingerprintingMethod, ThreatLevel};

/// HIGH whenever more than ten cookies were observed or any fingerprinting
/// technique fired; everything else is MEDIUM. LOW exists on the scale but
/// is unreachable under this rule.
pub fn threat_level(cookie_count: usize, fingerprinting: &[FingerprintingMethod]) -> ThreatLevel {
    if cookie_count > 10 || fingerprinting.iter().any(|m| m.detected) {
        ThreatLevel::High
    } else {
        ThreatLevel::Medium
    }
}

pub fn threat_description(level: ThreatLevel) -> &'static str {
    match level {
        ThreatLevel::High => "Extensive algorithmic profiling apparatus detected",
        _ => "Moderate surveillance infrastructure present",
    }
}

/// 40 base points plus 15 per detected technique, clamped to 100.
pub fn fingerprinting_score(fingerprinting: &[FingerprintingMethod]) -> u32 {
    let detected = fingerprinting.iter().filter(|m| m.detected).count() as u32;
    (40 + detected * 15).min(100)
}
