use std::time::{Duration, Instant};

use chrono::Utc;
use tracing::warn;
use url::Url;
use veil_core::{AnalysisOptions, AnalysisReport, VeilResult};
use veil_detect::{cookies, fingerprint, scoring, thirdparty};

use crate::fetch::{self, FetchOutcome};
use crate::impact;
use crate::keyword;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; Veil/0.1)";

/// Runs the analysis pipeline: one bounded fetch, the three detectors, the
/// educational fallback, and report assembly. Holds no per-request state.
pub struct Analyzer {
    client: reqwest::Client,
}

impl Analyzer {
    pub fn new() -> VeilResult<Self> {
        Self::with_fetch_settings(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT)
    }

    pub fn with_fetch_settings(timeout: Duration, user_agent: &str) -> VeilResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }

    pub async fn analyze(
        &self,
        url: &str,
        options: &AnalysisOptions,
    ) -> VeilResult<AnalysisReport> {
        let start = Instant::now();

        // Invalid URLs yield an empty domain rather than failing.
        let domain = Url::parse(url)
            .ok()
            .and_then(|parsed| parsed.host_str().map(str::to_string))
            .unwrap_or_default();

        let outcome = if options.include_web_scraping {
            match fetch::fetch_page(&self.client, url).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    warn!(url, error = %e, "web scraping failed");
                    FetchOutcome::default()
                }
            }
        } else {
            FetchOutcome::default()
        };

        let mut cookie_list = cookies::parse_cookies(&outcome.set_cookie_headers, &domain);
        let mut fingerprinting = fingerprint::scan_fingerprinting(&outcome.body);
        let mut third_parties = thirdparty::scan_third_parties(&outcome.body);

        // Fallback is keyed on detections, not fetch success: a reachable
        // page that trips zero signals still gets the canned dataset.
        let is_real_data =
            !cookie_list.is_empty() || fingerprinting.iter().any(|m| m.detected);

        let data_source = if is_real_data {
            veil_rules::LIVE_DATA_SOURCE
        } else {
            cookie_list = veil_rules::educational_cookies();
            fingerprinting = veil_rules::educational_fingerprinting();
            third_parties = veil_rules::educational_third_parties();
            veil_rules::EDUCATIONAL_DATA_SOURCE
        };

        let elapsed_secs = start.elapsed().as_secs_f64();
        let environmental_impact = impact::environmental_impact(
            outcome.bytes_transferred,
            elapsed_secs,
            outcome.server_requests,
        );

        let threat_level = scoring::threat_level(cookie_list.len(), &fingerprinting);

        Ok(AnalysisReport {
            url: url.to_string(),
            domain,
            threat_level,
            threat_description: scoring::threat_description(threat_level).to_string(),
            cookie_count: cookie_list.len() as u32,
            fingerprinting_score: scoring::fingerprinting_score(&fingerprinting),
            analysis_timestamp: Utc::now().to_rfc3339(),
            data_source: data_source.to_string(),
            is_real_data,
            poetic_keyword: keyword::poetic_keyword(url).to_string(),
            cookies: cookie_list,
            fingerprinting,
            third_parties,
            environmental_impact,
        })
    }
}
