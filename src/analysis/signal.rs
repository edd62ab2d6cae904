//! Signal strength rules
//!
//! An unusually strong AP signal can mean a device planted close by or an
//! evil twin running high transmit power.

use crate::config::Thresholds;
use crate::finding::{Finding, FindingKind, Message, Severity};
use crate::survey::Survey;

pub(crate) fn evaluate(survey: &Survey, thresholds: &Thresholds, findings: &mut Vec<Finding>) {
    for ap in &survey.access_points {
        let power = match ap.power {
            Some(p) => p,
            None => continue,
        };

        if power > thresholds.strong_signal_dbm {
            findings.push(
                Finding::new(
                    FindingKind::VeryStrongSignal,
                    Severity::Low,
                    Message::new(
                        format!(
                            "Very strong signal ({} dBm) - may indicate unauthorized access point or evil twin",
                            power
                        ),
                        format!(
                            "إشارة قوية جداً ({} dBm) - قد تشير إلى نقطة وصول غير مصرح بها",
                            power
                        ),
                    ),
                )
                .with_network(&ap.essid)
                .with_bssid(&ap.bssid),
            );
        }
    }
}
