//! Network behavior rules
//!
//! Beacon and data-packet counters from the capture window. Both counters
//! must have parsed for a row to be considered.

use crate::config::Thresholds;
use crate::finding::{Finding, FindingKind, Message, Severity};
use crate::survey::Survey;

pub(crate) fn evaluate(survey: &Survey, thresholds: &Thresholds, findings: &mut Vec<Finding>) {
    for ap in &survey.access_points {
        let (beacons, data_packets) = match (ap.beacons, ap.data_packets) {
            (Some(b), Some(d)) => (b, d),
            _ => continue,
        };

        if beacons < thresholds.low_beacon_count {
            findings.push(
                Finding::new(
                    FindingKind::LowBeaconCount,
                    Severity::Low,
                    Message::new(
                        format!(
                            "Low beacon count ({}) - might indicate hidden SSID or unusual configuration",
                            beacons
                        ),
                        format!(
                            "عدد إشارات بث منخفض ({}) - قد يشير إلى SSID مخفي أو إعداد غير عادي",
                            beacons
                        ),
                    ),
                )
                .with_network(&ap.essid)
                .with_bssid(&ap.bssid),
            );
        }

        if data_packets > thresholds.high_data_count {
            findings.push(
                Finding::new(
                    FindingKind::HighDataTraffic,
                    Severity::Info,
                    Message::new(
                        format!(
                            "High data packet count ({}) - active network usage detected",
                            data_packets
                        ),
                        format!(
                            "عدد حزم بيانات مرتفع ({}) - تم اكتشاف استخدام نشط للشبكة",
                            data_packets
                        ),
                    ),
                )
                .with_network(&ap.essid)
                .with_bssid(&ap.bssid),
            );
        }
    }
}
