use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisOptions {
    pub include_browser_cookies: bool,
    pub include_web_scraping: bool,
    pub include_fingerprinting: bool,
    pub include_environmental_metrics: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            include_browser_cookies: false,
            include_web_scraping: false,
            include_fingerprinting: true,
            include_environmental_metrics: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub url: String,
    #[serde(default)]
    pub options: AnalysisOptions,
}

/// An observed or synthetic tracking cookie. `is_real` records provenance:
/// false means the entry came from the canned educational dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cookie {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub purpose: String,
    pub domain: String,
    pub expiry: String,
    pub critique: Option<String>,
    pub is_real: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FingerprintingMethod {
    pub technique: String,
    pub detected: bool,
    pub description: String,
    pub data_collected: String,
    pub resistance: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThirdParty {
    pub domain: String,
    pub category: String,
    pub purpose: String,
    pub requests: u64,
    pub data_shared: String,
    pub critique: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentalImpact {
    pub carbon_footprint: String,
    pub data_transfer: String,
    pub energy_used: String,
    pub server_requests: u32,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ThreatLevel {
    // Reserved by the scoring scale but unreachable under the current
    // thresholding rule, which bottoms out at Medium.
    Low,
    Medium,
    High,
}

impl ThreatLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThreatLevel::Low => "LOW",
            ThreatLevel::Medium => "MEDIUM",
            ThreatLevel::High => "HIGH",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub url: String,
    pub domain: String,
    pub threat_level: ThreatLevel,
    pub threat_description: String,
    pub cookie_count: u32,
    pub fingerprinting_score: u32,
    pub analysis_timestamp: String,
    pub data_source: String,
    pub is_real_data: bool,
    pub poetic_keyword: String,
    pub cookies: Vec<Cookie>,
    pub fingerprinting: Vec<FingerprintingMethod>,
    pub third_parties: Vec<ThirdParty>,
    pub environmental_impact: EnvironmentalImpact,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoisonRequest {
    pub url: String,
    pub domain: String,
    #[serde(default = "default_poison_level")]
    pub poison_level: String,
    #[serde(default)]
    pub target_cookies: Vec<String>,
}

fn default_poison_level() -> String {
    "aggressive".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoisonedCookie {
    pub name: String,
    pub original_value: String,
    pub poisoned_value: String,
    pub technique: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FingerprintObfuscation {
    pub technique: String,
    pub description: String,
    pub obfuscated_data: String,
    pub resistance_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoisonImpact {
    pub carbon_footprint: String,
    pub processing_time: String,
    pub data_manipulated: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoisonReport {
    pub success: bool,
    pub poisoned_cookies: Vec<PoisonedCookie>,
    pub fingerprint_obfuscations: Vec<FingerprintObfuscation>,
    pub disruption_keywords: Vec<String>,
    pub message: String,
    pub timestamp: String,
    pub environmental_impact: PoisonImpact,
    pub resistance_level: String,
    pub critique: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCheck {
    pub id: String,
    pub client_name: String,
    pub timestamp: DateTime<Utc>,
}

impl StatusCheck {
    pub fn new(client_name: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            client_name,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCheckCreate {
    pub client_name: String,
}
