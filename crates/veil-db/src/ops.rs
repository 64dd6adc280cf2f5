use chrono::Utc;
use rusqlite::{params, Connection};
use std::sync::{Arc, Mutex};
use veil_core::{
    AnalysisOptions, AnalysisReport, PoisonReport, PoisonRequest, StatusCheck, VeilError,
    VeilResult,
};

/// Append-only audit store. All request-path writes are wrapped best-effort
/// by callers; a failed write never fails a user-facing request.
pub struct VeilDb {
    conn: Arc<Mutex<Connection>>,
}

impl VeilDb {
    pub fn open(path: &str) -> VeilResult<Self> {
        let conn = Connection::open(path).map_err(|e| VeilError::Database(e.to_string()))?;
        conn.execute_batch(
            "PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL; PRAGMA busy_timeout=5000;",
        )
        .map_err(|e| VeilError::Database(e.to_string()))?;
        crate::schema::run_migrations(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn clone_handle(&self) -> Self {
        Self {
            conn: self.conn.clone(),
        }
    }

    fn with_conn<F, T>(&self, f: F) -> VeilResult<T>
    where
        F: FnOnce(&Connection) -> Result<T, rusqlite::Error>,
    {
        let conn = self
            .conn
            .lock()
            .map_err(|e| VeilError::Database(e.to_string()))?;
        f(&conn).map_err(|e| VeilError::Database(e.to_string()))
    }

    pub fn insert_analysis_request(
        &self,
        url: &str,
        options: &AnalysisOptions,
    ) -> VeilResult<String> {
        let id = uuid::Uuid::new_v4().to_string();
        let options_json =
            serde_json::to_string(options).map_err(|e| VeilError::Database(e.to_string()))?;
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO analysis_requests (id, url, options_json, user_consent, timestamp) VALUES (?1, ?2, ?3, 1, ?4)",
                params![id, url, options_json, Utc::now().to_rfc3339()],
            )?;
            Ok(id.clone())
        })
    }

    pub fn insert_analysis_result(&self, report: &AnalysisReport) -> VeilResult<String> {
        let id = uuid::Uuid::new_v4().to_string();
        let report_json =
            serde_json::to_string(report).map_err(|e| VeilError::Database(e.to_string()))?;
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO analysis_results (id, url, domain, threat_level, cookie_count, fingerprinting_score, is_real_data, report_json, timestamp) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                params![
                    id,
                    report.url,
                    report.domain,
                    report.threat_level.as_str(),
                    report.cookie_count as i64,
                    report.fingerprinting_score as i64,
                    report.is_real_data as i32,
                    report_json,
                    report.analysis_timestamp,
                ],
            )?;
            Ok(id.clone())
        })
    }

    pub fn insert_poison_action(
        &self,
        request: &PoisonRequest,
        report: &PoisonReport,
    ) -> VeilResult<String> {
        let id = uuid::Uuid::new_v4().to_string();
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO poison_actions (id, url, domain, poison_level, cookies_poisoned, fingerprints_obfuscated, processing_time, carbon_footprint, timestamp) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                params![
                    id,
                    request.url,
                    request.domain,
                    request.poison_level,
                    report.poisoned_cookies.len() as i64,
                    report.fingerprint_obfuscations.len() as i64,
                    report.environmental_impact.processing_time,
                    report.environmental_impact.carbon_footprint,
                    report.timestamp,
                ],
            )?;
            Ok(id.clone())
        })
    }

    pub fn insert_status_check(&self, check: &StatusCheck) -> VeilResult<()> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO status_checks (id, client_name, timestamp) VALUES (?1, ?2, ?3)",
                params![check.id, check.client_name, check.timestamp.to_rfc3339()],
            )?;
            Ok(())
        })
    }

    pub fn get_status_checks(&self, limit: usize) -> VeilResult<Vec<StatusCheck>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, client_name, timestamp FROM status_checks ORDER BY timestamp DESC LIMIT ?1",
            )?;
            let rows = stmt.query_map(params![limit as i64], |row| {
                let ts: String = row.get(2)?;
                Ok(StatusCheck {
                    id: row.get(0)?,
                    client_name: row.get(1)?,
                    timestamp: chrono::DateTime::parse_from_rfc3339(&ts)
                        .map(|dt| dt.with_timezone(&Utc))
                        .unwrap_or_else(|_| Utc::now()),
                })
            })?;
            rows.collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veil_core::PoisonImpact;

    fn temp_db() -> VeilDb {
        let path = std::env::temp_dir().join(format!("veil-test-{}.db", uuid::Uuid::new_v4()));
        VeilDb::open(path.to_str().unwrap()).unwrap()
    }

    #[test]
    fn status_checks_round_trip_newest_first() {
        let db = temp_db();
        let first = StatusCheck::new("client-a".to_string());
        db.insert_status_check(&first).unwrap();

        let mut second = StatusCheck::new("client-b".to_string());
        second.timestamp = first.timestamp + chrono::Duration::seconds(1);
        db.insert_status_check(&second).unwrap();

        let listed = db.get_status_checks(10).unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].client_name, "client-b");
        assert_eq!(listed[1].client_name, "client-a");
    }

    #[test]
    fn analysis_request_and_result_insert() {
        let db = temp_db();
        db.insert_analysis_request("https://example.com", &AnalysisOptions::default())
            .unwrap();

        let report = AnalysisReport {
            url: "https://example.com".to_string(),
            domain: "example.com".to_string(),
            threat_level: veil_core::ThreatLevel::Medium,
            threat_description: String::new(),
            cookie_count: 0,
            fingerprinting_score: 40,
            analysis_timestamp: Utc::now().to_rfc3339(),
            data_source: String::new(),
            is_real_data: false,
            poetic_keyword: "moon".to_string(),
            cookies: vec![],
            fingerprinting: vec![],
            third_parties: vec![],
            environmental_impact: veil_core::EnvironmentalImpact {
                carbon_footprint: "0.00g CO\u{2082}".to_string(),
                data_transfer: "0 KB".to_string(),
                energy_used: "0.00 Wh".to_string(),
                server_requests: 0,
                message: String::new(),
            },
        };
        db.insert_analysis_result(&report).unwrap();
    }

    #[test]
    fn poison_action_insert() {
        let db = temp_db();
        let request = PoisonRequest {
            url: "https://example.com".to_string(),
            domain: "example.com".to_string(),
            poison_level: "aggressive".to_string(),
            target_cookies: vec![],
        };
        let report = PoisonReport {
            success: true,
            poisoned_cookies: vec![],
            fingerprint_obfuscations: vec![],
            disruption_keywords: vec![],
            message: String::new(),
            timestamp: Utc::now().to_rfc3339(),
            environmental_impact: PoisonImpact {
                carbon_footprint: "0.0000g CO\u{2082}".to_string(),
                processing_time: "0.00s".to_string(),
                data_manipulated: "0 tracking vectors".to_string(),
                message: String::new(),
            },
            resistance_level: String::new(),
            critique: String::new(),
        };
        db.insert_poison_action(&request, &report).unwrap();
    }
}
