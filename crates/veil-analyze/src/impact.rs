use veil_core::EnvironmentalImpact;

/// 0.5 g CO₂ per MB transferred, 0.1 g per elapsed second, 0.1 g per
/// HTTP request made.
pub fn carbon_grams(bytes: u64, elapsed_secs: f64, requests: u32) -> f64 {
    let data_carbon = (bytes as f64 / 1024.0 / 1024.0) * 0.5;
    let processing_carbon = elapsed_secs * 0.1;
    let request_carbon = requests as f64 * 0.1;
    data_carbon + processing_carbon + request_carbon
}

pub fn environmental_impact(bytes: u64, elapsed_secs: f64, requests: u32) -> EnvironmentalImpact {
    let carbon = carbon_grams(bytes, elapsed_secs, requests);

    EnvironmentalImpact {
        carbon_footprint: format!("{carbon:.2}g CO\u{2082}"),
        data_transfer: if bytes > 0 {
            format!("{:.1} KB", bytes as f64 / 1024.0)
        } else {
            "0 KB".to_string()
        },
        energy_used: format!("{:.2} Wh", elapsed_secs * 0.5),
        server_requests: requests,
        message: if requests > 0 {
            format!("Analysis completed in {elapsed_secs:.2}s with minimal environmental impact")
        } else {
            "No environmental impact - using cached educational data".to_string()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carbon_is_linear_in_each_input() {
        // 2 MiB, 3 s, 1 request: 1.0 + 0.3 + 0.1
        let grams = carbon_grams(2 * 1024 * 1024, 3.0, 1);
        assert!((grams - 1.4).abs() < 1e-9);
    }

    #[test]
    fn no_fetch_reports_zero_transfer_and_cached_message() {
        let impact = environmental_impact(0, 0.01, 0);
        assert_eq!(impact.data_transfer, "0 KB");
        assert_eq!(impact.server_requests, 0);
        assert_eq!(
            impact.message,
            "No environmental impact - using cached educational data"
        );
    }

    #[test]
    fn live_fetch_reports_kilobytes() {
        let impact = environmental_impact(2048, 0.5, 1);
        assert_eq!(impact.data_transfer, "2.0 KB");
        assert!(impact.message.starts_with("Analysis completed in"));
    }
}
