//! Connected device rules
//!
//! Groups stations by associated BSSID. Crowded networks get a device
//! audit warning; far or low-power clients get an informational note.

use std::collections::HashMap;

use crate::config::Thresholds;
use crate::finding::{Finding, FindingKind, Message, Severity};
use crate::survey::{Station, Survey};

pub(crate) fn evaluate(survey: &Survey, thresholds: &Thresholds, findings: &mut Vec<Finding>) {
    // Group by BSSID, keeping first-appearance order for stable reports
    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<&Station>> = HashMap::new();
    for station in &survey.stations {
        if station.bssid.is_empty() {
            continue;
        }
        let group = groups.entry(station.bssid.as_str()).or_default();
        if group.is_empty() {
            order.push(station.bssid.as_str());
        }
        group.push(station);
    }

    for bssid in order {
        let stations = &groups[bssid];
        let network = survey.network_name(bssid).unwrap_or("Unknown");

        if stations.len() >= thresholds.station_alert_count {
            findings.push(
                Finding::new(
                    FindingKind::MultipleDevices,
                    Severity::Low,
                    Message::new(
                        format!(
                            "{} devices connected - verify all are authorized",
                            stations.len()
                        ),
                        format!(
                            "{} جهاز متصل - تحقق من أن جميعها مصرح بها",
                            stations.len()
                        ),
                    ),
                )
                .with_network(network)
                .with_bssid(bssid),
            );
        }

        for station in stations {
            let power = match station.power {
                Some(p) => p,
                None => continue,
            };

            if power < thresholds.weak_client_dbm {
                findings.push(
                    Finding::new(
                        FindingKind::WeakClientSignal,
                        Severity::Info,
                        Message::new(
                            format!(
                                "Device {} has weak signal ({} dBm) - may indicate distance or interference",
                                station.mac, power
                            ),
                            format!(
                                "الجهاز {} له إشارة ضعيفة ({} dBm) - قد يشير للمسافة أو التداخل",
                                station.mac, power
                            ),
                        ),
                    )
                    .with_network(network)
                    .with_station(&station.mac),
                );
            }
        }
    }
}
