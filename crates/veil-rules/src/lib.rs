//! Static classification knowledge base: known tracker domains, fingerprint
//! signatures, keyword lists, and the canned educational dataset returned
//! when a page yields no live signals. All tables are immutable and loaded
//! at compile time; detectors borrow them, nothing mutates them.

use veil_core::{Cookie, FingerprintingMethod, ThirdParty};

pub struct TrackerRule {
    pub domain: &'static str,
    pub kind: &'static str,
    pub category: &'static str,
}

pub const KNOWN_TRACKERS: &[TrackerRule] = &[
    TrackerRule {
        domain: "google-analytics.com",
        kind: "behavioral tracking",
        category: "surveillance capitalism",
    },
    TrackerRule {
        domain: "googletagmanager.com",
        kind: "tag management",
        category: "data collection",
    },
    TrackerRule {
        domain: "facebook.com",
        kind: "advertising surveillance",
        category: "social surveillance",
    },
    TrackerRule {
        domain: "doubleclick.net",
        kind: "cross-site tracking",
        category: "attention economy",
    },
    TrackerRule {
        domain: "hotjar.com",
        kind: "behavioral monitoring",
        category: "intimate surveillance",
    },
    TrackerRule {
        domain: "mixpanel.com",
        kind: "event tracking",
        category: "behavioral analysis",
    },
    TrackerRule {
        domain: "amplitude.com",
        kind: "user analytics",
        category: "behavioral profiling",
    },
];

pub struct FingerprintSignature {
    pub pattern: &'static str,
    pub technique: &'static str,
    pub description: &'static str,
}

// Order is significant for output ordering only; every signature is
// evaluated on every scan.
pub const FINGERPRINT_SIGNATURES: &[FingerprintSignature] = &[
    FingerprintSignature {
        pattern: "canvas",
        technique: "Canvas Fingerprinting",
        description: "Invisible images reveal unique hardware signatures",
    },
    FingerprintSignature {
        pattern: "webgl",
        technique: "WebGL Fingerprinting",
        description: "3D graphics capabilities create hardware-specific identity",
    },
    FingerprintSignature {
        pattern: "audiocont",
        technique: "Audio Context Fingerprinting",
        description: "Audio hardware creates unique acoustic signatures",
    },
    FingerprintSignature {
        pattern: "getfonts",
        technique: "Font Enumeration",
        description: "Installed fonts reveal cultural and professional background",
    },
    FingerprintSignature {
        pattern: "webrtc",
        technique: "WebRTC IP Leakage",
        description: "Communication protocols expose real location",
    },
    FingerprintSignature {
        pattern: "battery",
        technique: "Battery Status Exposure",
        description: "Power levels enable device tracking",
    },
];

/// Suffix appended to the description of every detected fingerprint method.
pub const DETECTED_SUFFIX: &str = "\u{2014}a form of digital DNA extraction";

pub const POETIC_KEYWORDS: &[&str] = &[
    "liberation",
    "moon",
    "wildflowers",
    "disruption",
    "enchantment",
    "sisterhood",
    "fragment",
    "rupture",
    "solitude",
    "sacred",
];

pub const DISRUPTION_KEYWORDS: &[&str] = &[
    "liberation",
    "disruption",
    "wildflowers",
    "moon",
    "sisterhood",
    "rupture",
    "enchantment",
];

/// Cookie names poisoned when the caller does not name explicit targets.
pub const DEFAULT_POISON_TARGETS: &[&str] =
    &["_ga", "_fbp", "_gid", "doubleclick", "_hjid", "_mixpanel"];

pub const EDUCATIONAL_DATA_SOURCE: &str = "Educational Simulation (No live data available)";
pub const LIVE_DATA_SOURCE: &str = "Live Website Analysis";

pub fn educational_cookies() -> Vec<Cookie> {
    vec![
        Cookie {
            name: "_ga".to_string(),
            kind: "behavioral tracking".to_string(),
            purpose: "Google Analytics - constructs behavioral profiles across digital spaces"
                .to_string(),
            domain: "google-analytics.com".to_string(),
            expiry: "2 years".to_string(),
            critique: Some(
                "Creates persistent identity markers for surveillance capitalism".to_string(),
            ),
            is_real: false,
        },
        Cookie {
            name: "_fbp".to_string(),
            kind: "advertising surveillance".to_string(),
            purpose: "Facebook Pixel - builds psychographic profiles for targeted manipulation"
                .to_string(),
            domain: "facebook.com".to_string(),
            expiry: "90 days".to_string(),
            critique: Some(
                "Enables cross-platform behavioral modification and social control".to_string(),
            ),
            is_real: false,
        },
    ]
}

pub fn educational_fingerprinting() -> Vec<FingerprintingMethod> {
    vec![
        FingerprintingMethod {
            technique: "Canvas Fingerprinting".to_string(),
            detected: true,
            description: format!(
                "Invisible images reveal unique hardware signatures{DETECTED_SUFFIX}"
            ),
            data_collected: "GPU characteristics and rendering patterns".to_string(),
            resistance: Some("Use canvas spoofing browser extensions".to_string()),
        },
        FingerprintingMethod {
            technique: "Audio Context Fingerprinting".to_string(),
            detected: true,
            description: "Audio hardware creates unique acoustic signatures\u{2014}even silence betrays identity"
                .to_string(),
            data_collected: "Audio processing characteristics and hardware details".to_string(),
            resistance: Some("Use audio spoofing or disable audio context APIs".to_string()),
        },
    ]
}

pub fn educational_third_parties() -> Vec<ThirdParty> {
    vec![ThirdParty {
        domain: "google-analytics.com".to_string(),
        category: "surveillance capitalism".to_string(),
        purpose: "Educational example: Behavioral tracking and user profiling".to_string(),
        requests: 5,
        data_shared: "Behavioral patterns, emotional states, vulnerability markers".to_string(),
        critique: Some(
            "Commodifies human attention and reduces agency to algorithmic manipulation"
                .to_string(),
        ),
    }]
}
