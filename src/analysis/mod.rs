//! Analysis passes
//!
//! Each pass walks the survey once and appends findings. Pass order is
//! fixed: encryption, signal strength, connected devices, WPS advisory,
//! network behavior. Report numbering follows this order.

mod behavior;
mod encryption;
mod signal;
mod stations;

use tracing::debug;

use crate::config::Thresholds;
use crate::finding::{Finding, FindingKind, Message, Severity};
use crate::survey::Survey;

/// Runs all analysis passes over a survey
#[derive(Debug, Clone)]
pub struct Analyzer {
    thresholds: Thresholds,
}

impl Analyzer {
    /// Create an analyzer with the given thresholds
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    /// Run every pass and collect the findings
    pub fn analyze(&self, survey: &Survey) -> Vec<Finding> {
        let mut findings = Vec::new();

        encryption::evaluate(survey, &mut findings);
        signal::evaluate(survey, &self.thresholds, &mut findings);
        stations::evaluate(survey, &self.thresholds, &mut findings);
        findings.push(wps_advisory());
        behavior::evaluate(survey, &self.thresholds, &mut findings);

        debug!(count = findings.len(), "analysis complete");
        findings
    }
}

/// WPS state is not visible in a capture summary, so every run carries a
/// manual-check advisory alongside the automated findings.
fn wps_advisory() -> Finding {
    Finding::new(
        FindingKind::WpsCheck,
        Severity::Info,
        Message::new(
            "WPS (WiFi Protected Setup) status unknown from this data. Recommend checking with wash or similar tools",
            "حالة WPS (إعداد WiFi المحمي) غير معروفة من هذه البيانات. يُنصح بالفحص باستخدام أدوات مثل wash",
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::survey::{AccessPoint, Station};

    fn make_survey() -> Survey {
        Survey {
            access_points: vec![
                AccessPoint {
                    bssid: "AA:BB:CC:DD:EE:01".to_string(),
                    essid: "CoffeeShop".to_string(),
                    privacy: "OPN".to_string(),
                    power: Some(-35),
                    beacons: Some(50),
                    data_packets: Some(30000),
                    ..Default::default()
                },
                AccessPoint {
                    bssid: "AA:BB:CC:DD:EE:02".to_string(),
                    essid: "HomeWiFi".to_string(),
                    privacy: "WPA2".to_string(),
                    cipher: "CCMP".to_string(),
                    authentication: "PSK".to_string(),
                    power: Some(-60),
                    beacons: Some(800),
                    data_packets: Some(500),
                    ..Default::default()
                },
            ],
            stations: vec![Station {
                mac: "DE:AD:BE:EF:00:01".to_string(),
                bssid: "AA:BB:CC:DD:EE:02".to_string(),
                power: Some(-92),
            }],
        }
    }

    #[test]
    fn test_full_pipeline() {
        let analyzer = Analyzer::new(Thresholds::default());
        let findings = analyzer.analyze(&make_survey());

        let kinds: Vec<FindingKind> = findings.iter().map(|f| f.kind).collect();
        assert_eq!(
            kinds,
            vec![
                FindingKind::NoEncryption,
                FindingKind::GoodEncryption,
                FindingKind::PskAuthentication,
                FindingKind::VeryStrongSignal,
                FindingKind::WeakClientSignal,
                FindingKind::WpsCheck,
                FindingKind::LowBeaconCount,
                FindingKind::HighDataTraffic,
            ]
        );
    }

    #[test]
    fn test_severity_counts() {
        let analyzer = Analyzer::new(Thresholds::default());
        let findings = analyzer.analyze(&make_survey());

        let count =
            |severity: Severity| findings.iter().filter(|f| f.severity == severity).count();
        assert_eq!(count(Severity::Critical), 1);
        assert_eq!(count(Severity::High), 0);
        assert_eq!(count(Severity::Medium), 1);
        assert_eq!(count(Severity::Low), 2);
        assert_eq!(count(Severity::Info), 4);
    }

    #[test]
    fn test_empty_survey_still_carries_wps_advisory() {
        let analyzer = Analyzer::new(Thresholds::default());
        let findings = analyzer.analyze(&Survey::default());

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].kind, FindingKind::WpsCheck);
    }

    #[test]
    fn test_custom_thresholds() {
        let thresholds = Thresholds {
            strong_signal_dbm: -30,
            ..Default::default()
        };
        let analyzer = Analyzer::new(thresholds);
        let findings = analyzer.analyze(&make_survey());

        assert!(!findings
            .iter()
            .any(|f| f.kind == FindingKind::VeryStrongSignal));
    }
}
