//! Encryption rules
//!
//! Grades each access point's privacy, cipher and authentication fields:
//! - WEP or an open network is critical
//! - first-generation WPA is high
//! - WPA2 with TKIP, and PSK authentication, are medium
//! - WPA2 with CCMP earns an informational good-encryption note

use crate::finding::{Finding, FindingKind, Message, Severity};
use crate::survey::{EncryptionGrade, Survey};

pub(crate) fn evaluate(survey: &Survey, findings: &mut Vec<Finding>) {
    for ap in &survey.access_points {
        match ap.encryption_grade() {
            EncryptionGrade::Wep => findings.push(
                Finding::new(
                    FindingKind::WeakEncryption,
                    Severity::Critical,
                    Message::new(
                        "WEP encryption is extremely vulnerable and can be cracked in minutes",
                        "تشفير WEP ضعيف جداً ويمكن كسره في دقائق",
                    ),
                )
                .with_network(&ap.essid)
                .with_bssid(&ap.bssid),
            ),
            EncryptionGrade::WpaLegacy => findings.push(
                Finding::new(
                    FindingKind::DeprecatedEncryption,
                    Severity::High,
                    Message::new(
                        "WPA is deprecated and vulnerable to attacks. Should use WPA2 or WPA3",
                        "تشفير WPA قديم وعرضة للاختراق. يجب استخدام WPA2 أو WPA3",
                    ),
                )
                .with_network(&ap.essid)
                .with_bssid(&ap.bssid),
            ),
            EncryptionGrade::Open => findings.push(
                Finding::new(
                    FindingKind::NoEncryption,
                    Severity::Critical,
                    Message::new(
                        "Network has no encryption - all traffic is visible",
                        "الشبكة بدون تشفير - كل البيانات مرئية",
                    ),
                )
                .with_network(&ap.essid)
                .with_bssid(&ap.bssid),
            ),
            EncryptionGrade::Wpa2 if ap.has_tkip() => findings.push(
                Finding::new(
                    FindingKind::WeakCipher,
                    Severity::Medium,
                    Message::new(
                        "WPA2 with TKIP is weaker than CCMP/AES. Should use AES only",
                        "WPA2 مع TKIP أضعف من CCMP/AES. يجب استخدام AES فقط",
                    ),
                )
                .with_network(&ap.essid)
                .with_bssid(&ap.bssid),
            ),
            EncryptionGrade::Wpa2 if ap.has_ccmp() => findings.push(
                Finding::new(
                    FindingKind::GoodEncryption,
                    Severity::Info,
                    Message::new(
                        "WPA2 with CCMP/AES - Good encryption standard",
                        "WPA2 مع CCMP/AES - معيار تشفير جيد",
                    ),
                )
                .with_network(&ap.essid)
                .with_bssid(&ap.bssid),
            ),
            EncryptionGrade::Wpa2 | EncryptionGrade::Other => {}
        }

        if ap.uses_psk() {
            findings.push(
                Finding::new(
                    FindingKind::PskAuthentication,
                    Severity::Medium,
                    Message::new(
                        "PSK authentication is vulnerable to dictionary and brute-force attacks if password is weak",
                        "مصادقة PSK عرضة لهجمات القاموس والقوة الغاشمة إذا كانت كلمة المرور ضعيفة",
                    ),
                )
                .with_network(&ap.essid)
                .with_bssid(&ap.bssid),
            );
        }
    }
}
