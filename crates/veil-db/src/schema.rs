use rusqlite::Connection;
use veil_core::VeilResult;

pub fn run_migrations(conn: &Connection) -> VeilResult<()> {
    conn.execute_batch(SCHEMA_V1)
        .map_err(|e| veil_core::VeilError::Database(e.to_string()))?;
    Ok(())
}

const SCHEMA_V1: &str = r#"
CREATE TABLE IF NOT EXISTS analysis_requests (
    id TEXT PRIMARY KEY,
    url TEXT NOT NULL,
    options_json TEXT NOT NULL,
    user_consent INTEGER NOT NULL DEFAULT 1,
    timestamp TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS analysis_results (
    id TEXT PRIMARY KEY,
    url TEXT NOT NULL,
    domain TEXT NOT NULL,
    threat_level TEXT NOT NULL,
    cookie_count INTEGER NOT NULL,
    fingerprinting_score INTEGER NOT NULL,
    is_real_data INTEGER NOT NULL,
    report_json TEXT NOT NULL,
    timestamp TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS poison_actions (
    id TEXT PRIMARY KEY,
    url TEXT NOT NULL,
    domain TEXT NOT NULL,
    poison_level TEXT NOT NULL,
    cookies_poisoned INTEGER NOT NULL,
    fingerprints_obfuscated INTEGER NOT NULL,
    processing_time TEXT NOT NULL,
    carbon_footprint TEXT NOT NULL,
    timestamp TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS status_checks (
    id TEXT PRIMARY KEY,
    client_name TEXT NOT NULL,
    timestamp TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_requests_ts ON analysis_requests(timestamp);
CREATE INDEX IF NOT EXISTS idx_results_domain ON analysis_results(domain);
CREATE INDEX IF NOT EXISTS idx_poison_domain ON poison_actions(domain);
CREATE INDEX IF NOT EXISTS idx_status_ts ON status_checks(timestamp);
"#;
