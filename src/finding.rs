//! Security findings
//!
//! Unified finding format produced by all analysis passes.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Finding severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Severity {
    Info = 0,
    Low = 1,
    Medium = 2,
    High = 3,
    Critical = 4,
}

impl Severity {
    /// Critical and High findings are reported as vulnerabilities
    pub fn is_vulnerability(&self) -> bool {
        matches!(self, Severity::Critical | Severity::High)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "INFO"),
            Severity::Low => write!(f, "LOW"),
            Severity::Medium => write!(f, "MEDIUM"),
            Severity::High => write!(f, "HIGH"),
            Severity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Finding categories, one per analysis rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FindingKind {
    // Encryption
    WeakEncryption,
    DeprecatedEncryption,
    NoEncryption,
    WeakCipher,
    GoodEncryption,
    PskAuthentication,

    // Signal
    VeryStrongSignal,
    WeakClientSignal,

    // Connected devices
    MultipleDevices,

    // Behavior counters
    LowBeaconCount,
    HighDataTraffic,

    // Advisories
    WpsCheck,
}

impl std::fmt::Display for FindingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FindingKind::WeakEncryption => write!(f, "Weak Encryption"),
            FindingKind::DeprecatedEncryption => write!(f, "Deprecated Encryption"),
            FindingKind::NoEncryption => write!(f, "No Encryption"),
            FindingKind::WeakCipher => write!(f, "Weak Cipher"),
            FindingKind::GoodEncryption => write!(f, "Good Encryption"),
            FindingKind::PskAuthentication => write!(f, "PSK Authentication"),
            FindingKind::VeryStrongSignal => write!(f, "Very Strong Signal"),
            FindingKind::WeakClientSignal => write!(f, "Weak Client Signal"),
            FindingKind::MultipleDevices => write!(f, "Multiple Devices"),
            FindingKind::LowBeaconCount => write!(f, "Low Beacon Count"),
            FindingKind::HighDataTraffic => write!(f, "High Data Traffic"),
            FindingKind::WpsCheck => write!(f, "WPS Check"),
        }
    }
}

/// Bilingual description text (English and Arabic)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub en: String,
    pub ar: String,
}

impl Message {
    pub fn new(en: impl Into<String>, ar: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ar: ar.into(),
        }
    }
}

/// A single security finding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    /// Unique finding ID
    pub id: Uuid,
    /// Finding category
    pub kind: FindingKind,
    /// Severity
    pub severity: Severity,
    /// Network name (ESSID), empty for hidden SSIDs
    pub network: Option<String>,
    /// Access point BSSID
    pub bssid: Option<String>,
    /// Client station MAC
    pub station: Option<String>,
    /// Bilingual description
    pub message: Message,
}

impl Finding {
    /// Create a new finding
    pub fn new(kind: FindingKind, severity: Severity, message: Message) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            severity,
            network: None,
            bssid: None,
            station: None,
            message,
        }
    }

    /// Set the network name (ESSID)
    pub fn with_network(mut self, essid: &str) -> Self {
        self.network = Some(essid.to_string());
        self
    }

    /// Set the access point BSSID
    pub fn with_bssid(mut self, bssid: &str) -> Self {
        self.bssid = Some(bssid.to_string());
        self
    }

    /// Set the client station MAC
    pub fn with_station(mut self, mac: &str) -> Self {
        self.station = Some(mac.to_string());
        self
    }
}
