//! Report rendering
//!
//! Assembles the bilingual plain-text report: header, executive summary,
//! findings grouped by severity, a capped informational section, and the
//! fixed recommendation list.

use chrono::Local;

use crate::config::ReportConfig;
use crate::finding::{Finding, Severity};
use crate::survey::Survey;

const SEPARATOR_WIDTH: usize = 80;

/// Fixed bilingual hardening recommendations, always appended in full
const RECOMMENDATIONS: &[(&str, &str)] = &[
    (
        "1. Use WPA2-PSK with AES/CCMP or WPA3 for encryption",
        "1. استخدم WPA2-PSK مع AES/CCMP أو WPA3 للتشفير",
    ),
    (
        "2. Use strong, complex passwords (12+ characters, mixed case, numbers, symbols)",
        "2. استخدم كلمات مرور قوية ومعقدة (12+ حرف، أحرف كبيرة وصغيرة، أرقام، رموز)",
    ),
    (
        "3. Disable WPS (WiFi Protected Setup) if not needed",
        "3. عطّل WPS (إعداد WiFi المحمي) إذا لم يكن ضرورياً",
    ),
    (
        "4. Change default router credentials immediately",
        "4. غيّر بيانات اعتماد الراوتر الافتراضية فوراً",
    ),
    (
        "5. Enable MAC address filtering for additional security layer",
        "5. فعّل تصفية عناوين MAC لطبقة أمان إضافية",
    ),
    (
        "6. Regularly update router firmware",
        "6. حدّث البرنامج الثابت للراوتر بانتظام",
    ),
    (
        "7. Monitor connected devices regularly",
        "7. راقب الأجهزة المتصلة بانتظام",
    ),
    (
        "8. Consider hiding SSID for additional obscurity (not primary security)",
        "8. فكّر في إخفاء SSID للتمويه الإضافي (ليس الأمان الأساسي)",
    ),
    (
        "9. Implement network segmentation (guest network, IoT network)",
        "9. طبّق تقسيم الشبكة (شبكة ضيوف، شبكة IoT)",
    ),
    (
        "10. Regularly conduct security audits",
        "10. أجرِ تدقيقات أمنية بانتظام",
    ),
];

/// Render the full report as plain text
pub fn render(survey: &Survey, findings: &[Finding], options: &ReportConfig) -> String {
    let mut lines: Vec<String> = Vec::new();

    push_header(&mut lines, survey);
    push_summary(&mut lines, findings);
    push_vulnerabilities(&mut lines, findings);
    push_medium_warnings(&mut lines, findings);
    push_low_warnings(&mut lines, findings);
    push_informational(&mut lines, findings, options.max_info_items);
    push_recommendations(&mut lines);

    lines.push(String::new());
    lines.push(separator());
    lines.push("END OF REPORT / نهاية التقرير".to_string());
    lines.push(separator());

    lines.join("\n")
}

fn separator() -> String {
    "=".repeat(SEPARATOR_WIDTH)
}

fn push_header(lines: &mut Vec<String>, survey: &Survey) {
    lines.push(separator());
    lines.push("NETWORK SECURITY ANALYSIS REPORT".to_string());
    lines.push("تقرير تحليل أمان الشبكة".to_string());
    lines.push(separator());
    lines.push(String::new());
    lines.push(format!(
        "Generated: {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ));
    lines.push(format!("Networks Analyzed: {}", survey.network_count()));
    lines.push(format!("Devices Detected: {}", survey.station_count()));
    lines.push(String::new());
}

fn push_summary(lines: &mut Vec<String>, findings: &[Finding]) {
    let count = |severity: Severity| findings.iter().filter(|f| f.severity == severity).count();

    lines.push(separator());
    lines.push("EXECUTIVE SUMMARY / الملخص التنفيذي".to_string());
    lines.push(separator());
    lines.push(format!("Critical Vulnerabilities: {}", count(Severity::Critical)));
    lines.push(format!("High Severity Issues: {}", count(Severity::High)));
    lines.push(format!("Medium Severity Warnings: {}", count(Severity::Medium)));
    lines.push(format!("Low Severity Warnings: {}", count(Severity::Low)));
    lines.push(format!("Informational Items: {}", count(Severity::Info)));
    lines.push(String::new());
}

fn push_vulnerabilities(lines: &mut Vec<String>, findings: &[Finding]) {
    let entries: Vec<&Finding> = findings
        .iter()
        .filter(|f| f.severity.is_vulnerability())
        .collect();
    if entries.is_empty() {
        return;
    }

    lines.push(separator());
    lines.push("CRITICAL & HIGH SEVERITY VULNERABILITIES / نقاط الضعف الحرجة والعالية".to_string());
    lines.push(separator());
    for (i, finding) in entries.iter().enumerate() {
        lines.push(String::new());
        lines.push(format!("[{}] {} - {}", i + 1, finding.severity, finding.kind));
        lines.push(format!(
            "    Network: {}",
            finding.network.as_deref().unwrap_or("N/A")
        ));
        lines.push(format!(
            "    BSSID: {}",
            finding.bssid.as_deref().unwrap_or("N/A")
        ));
        lines.push(format!("    Description: {}", finding.message.en));
        lines.push(format!("    الوصف: {}", finding.message.ar));
    }
    lines.push(String::new());
}

fn push_medium_warnings(lines: &mut Vec<String>, findings: &[Finding]) {
    let entries: Vec<&Finding> = findings
        .iter()
        .filter(|f| f.severity == Severity::Medium)
        .collect();
    if entries.is_empty() {
        return;
    }

    lines.push(separator());
    lines.push("MEDIUM SEVERITY WARNINGS / تحذيرات متوسطة الخطورة".to_string());
    lines.push(separator());
    for (i, finding) in entries.iter().enumerate() {
        lines.push(String::new());
        lines.push(format!("[{}] {}", i + 1, finding.kind));
        lines.push(format!(
            "    Network: {}",
            finding.network.as_deref().unwrap_or("N/A")
        ));
        lines.push(format!(
            "    BSSID: {}",
            finding.bssid.as_deref().unwrap_or("N/A")
        ));
        lines.push(format!("    Description: {}", finding.message.en));
        lines.push(format!("    الوصف: {}", finding.message.ar));
    }
    lines.push(String::new());
}

fn push_low_warnings(lines: &mut Vec<String>, findings: &[Finding]) {
    let entries: Vec<&Finding> = findings
        .iter()
        .filter(|f| f.severity == Severity::Low)
        .collect();
    if entries.is_empty() {
        return;
    }

    lines.push(separator());
    lines.push("LOW SEVERITY WARNINGS / تحذيرات منخفضة الخطورة".to_string());
    lines.push(separator());
    for (i, finding) in entries.iter().enumerate() {
        lines.push(String::new());
        lines.push(format!("[{}] {}", i + 1, finding.kind));
        lines.push(format!(
            "    Network: {}",
            finding.network.as_deref().unwrap_or("N/A")
        ));
        if let Some(bssid) = &finding.bssid {
            lines.push(format!("    BSSID: {}", bssid));
        }
        if let Some(station) = &finding.station {
            lines.push(format!("    Device: {}", station));
        }
        lines.push(format!("    Description: {}", finding.message.en));
        lines.push(format!("    الوصف: {}", finding.message.ar));
    }
    lines.push(String::new());
}

fn push_informational(lines: &mut Vec<String>, findings: &[Finding], max_items: usize) {
    let entries: Vec<&Finding> = findings
        .iter()
        .filter(|f| f.severity == Severity::Info)
        .collect();
    if entries.is_empty() {
        return;
    }

    lines.push(separator());
    lines.push("INFORMATIONAL / معلومات إضافية".to_string());
    lines.push(separator());
    for (i, finding) in entries.iter().take(max_items).enumerate() {
        lines.push(String::new());
        lines.push(format!("[{}] {}", i + 1, finding.kind));
        match &finding.network {
            Some(network) if !network.is_empty() => {
                lines.push(format!("    Network: {}", network));
            }
            _ => {}
        }
        if let Some(station) = &finding.station {
            lines.push(format!("    Device: {}", station));
        }
        lines.push(format!("    {}", finding.message.en));
        lines.push(format!("    {}", finding.message.ar));
    }
    if entries.len() > max_items {
        lines.push(String::new());
        lines.push(format!(
            "... and {} more informational items",
            entries.len() - max_items
        ));
    }
    lines.push(String::new());
}

fn push_recommendations(lines: &mut Vec<String>) {
    lines.push(separator());
    lines.push("SECURITY RECOMMENDATIONS / التوصيات الأمنية".to_string());
    lines.push(separator());
    for (english, arabic) in RECOMMENDATIONS {
        lines.push(String::new());
        lines.push((*english).to_string());
        lines.push((*arabic).to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finding::{FindingKind, Message};

    fn make_finding(kind: FindingKind, severity: Severity) -> Finding {
        Finding::new(kind, severity, Message::new("english text", "نص عربي"))
            .with_network("TestNet")
            .with_bssid("AA:BB:CC:DD:EE:FF")
    }

    fn make_survey() -> Survey {
        Survey::parse(
            "BSSID, channel, Privacy, Cipher, Authentication, Power, # beacons, # IV, ESSID\n\
             AA:BB:CC:DD:EE:FF, 6, WPA2, CCMP, PSK, -50, 500, 100, TestNet\n",
        )
    }

    #[test]
    fn test_header_and_footer() {
        let report = render(&make_survey(), &[], &ReportConfig::default());
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "=".repeat(80));
        assert_eq!(lines[1], "NETWORK SECURITY ANALYSIS REPORT");
        assert_eq!(lines[2], "تقرير تحليل أمان الشبكة");
        assert!(lines[5].starts_with("Generated: "));
        assert!(report.contains("Networks Analyzed: 1"));
        assert!(report.contains("Devices Detected: 0"));
        assert!(report.ends_with(&format!(
            "END OF REPORT / نهاية التقرير\n{}",
            "=".repeat(80)
        )));
    }

    #[test]
    fn test_summary_counts() {
        let findings = vec![
            make_finding(FindingKind::WeakEncryption, Severity::Critical),
            make_finding(FindingKind::DeprecatedEncryption, Severity::High),
            make_finding(FindingKind::PskAuthentication, Severity::Medium),
            make_finding(FindingKind::VeryStrongSignal, Severity::Low),
            make_finding(FindingKind::GoodEncryption, Severity::Info),
        ];
        let report = render(&make_survey(), &findings, &ReportConfig::default());

        assert!(report.contains("Critical Vulnerabilities: 1"));
        assert!(report.contains("High Severity Issues: 1"));
        assert!(report.contains("Medium Severity Warnings: 1"));
        assert!(report.contains("Low Severity Warnings: 1"));
        assert!(report.contains("Informational Items: 1"));
    }

    #[test]
    fn test_vulnerability_entries() {
        let findings = vec![
            make_finding(FindingKind::WeakEncryption, Severity::Critical),
            make_finding(FindingKind::DeprecatedEncryption, Severity::High),
        ];
        let report = render(&make_survey(), &findings, &ReportConfig::default());

        assert!(report.contains("CRITICAL & HIGH SEVERITY VULNERABILITIES"));
        assert!(report.contains("[1] CRITICAL - Weak Encryption"));
        assert!(report.contains("[2] HIGH - Deprecated Encryption"));
        assert!(report.contains("    Network: TestNet"));
        assert!(report.contains("    BSSID: AA:BB:CC:DD:EE:FF"));
        assert!(report.contains("    Description: english text"));
        assert!(report.contains("    الوصف: نص عربي"));
    }

    #[test]
    fn test_empty_sections_are_omitted() {
        let findings = vec![make_finding(FindingKind::PskAuthentication, Severity::Medium)];
        let report = render(&make_survey(), &findings, &ReportConfig::default());

        assert!(!report.contains("CRITICAL & HIGH SEVERITY VULNERABILITIES"));
        assert!(report.contains("MEDIUM SEVERITY WARNINGS"));
        assert!(!report.contains("LOW SEVERITY WARNINGS"));
        assert!(!report.contains("INFORMATIONAL /"));
    }

    #[test]
    fn test_low_section_optional_lines() {
        let with_station = Finding::new(
            FindingKind::MultipleDevices,
            Severity::Low,
            Message::new("crowded", "مزدحم"),
        )
        .with_network("TestNet")
        .with_station("DE:AD:BE:EF:00:01");
        let report = render(&make_survey(), &[with_station], &ReportConfig::default());

        assert!(report.contains("    Device: DE:AD:BE:EF:00:01"));
        assert!(!report.contains("    BSSID:"));
    }

    #[test]
    fn test_info_hides_empty_network() {
        let hidden = Finding::new(
            FindingKind::GoodEncryption,
            Severity::Info,
            Message::new("good", "جيد"),
        )
        .with_network("")
        .with_bssid("AA:BB:CC:DD:EE:FF");
        let report = render(&make_survey(), &[hidden], &ReportConfig::default());

        let info_section = report
            .split("INFORMATIONAL / معلومات إضافية")
            .nth(1)
            .unwrap();
        assert!(!info_section.contains("Network:"));
    }

    #[test]
    fn test_info_cap_and_overflow_line() {
        let findings: Vec<Finding> = (0..13)
            .map(|_| make_finding(FindingKind::GoodEncryption, Severity::Info))
            .collect();
        let report = render(&make_survey(), &findings, &ReportConfig::default());

        assert!(report.contains("[10] Good Encryption"));
        assert!(!report.contains("[11] Good Encryption"));
        assert!(report.contains("... and 3 more informational items"));
    }

    #[test]
    fn test_recommendations_always_present() {
        let report = render(&make_survey(), &[], &ReportConfig::default());

        assert!(report.contains("SECURITY RECOMMENDATIONS / التوصيات الأمنية"));
        assert!(report.contains("1. Use WPA2-PSK with AES/CCMP or WPA3 for encryption"));
        assert!(report.contains("10. Regularly conduct security audits"));
        assert!(report.contains("10. أجرِ تدقيقات أمنية بانتظام"));
    }
}
