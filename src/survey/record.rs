//! Survey records
//!
//! Typed access-point and station entries from a capture summary.

use serde::{Deserialize, Serialize};

/// Encryption family advertised in an access point's privacy field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncryptionGrade {
    /// WEP anywhere in the privacy field
    Wep,
    /// First-generation WPA only
    WpaLegacy,
    /// Open network or empty privacy field
    Open,
    /// Plain WPA2
    Wpa2,
    /// Mixed modes and newer standards (WPA2 WPA, WPA3, ...)
    Other,
}

impl EncryptionGrade {
    /// Grade a privacy field. WEP dominates; WPA, OPN and WPA2 must match
    /// exactly; everything else grades Other.
    pub fn from_privacy(privacy: &str) -> Self {
        let privacy = privacy.trim();
        if privacy.contains("WEP") {
            EncryptionGrade::Wep
        } else if privacy == "WPA" {
            EncryptionGrade::WpaLegacy
        } else if privacy == "OPN" || privacy.is_empty() {
            EncryptionGrade::Open
        } else if privacy == "WPA2" {
            EncryptionGrade::Wpa2
        } else {
            EncryptionGrade::Other
        }
    }
}

/// One access point row from the capture summary
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccessPoint {
    /// AP MAC address
    pub bssid: String,
    /// Network name, empty for hidden SSIDs
    pub essid: String,
    /// Channel
    pub channel: Option<i32>,
    /// Privacy field (OPN, WEP, WPA, WPA2, ...)
    pub privacy: String,
    /// Cipher field (CCMP, TKIP, WEP, ...)
    pub cipher: String,
    /// Authentication field (PSK, MGT, ...)
    pub authentication: String,
    /// Signal level in dBm
    pub power: Option<i32>,
    /// Beacon frames captured
    pub beacons: Option<i64>,
    /// Data packets captured
    pub data_packets: Option<i64>,
}

impl AccessPoint {
    /// Encryption grade of the privacy field
    pub fn encryption_grade(&self) -> EncryptionGrade {
        EncryptionGrade::from_privacy(&self.privacy)
    }

    /// TKIP present in the cipher field
    pub fn has_tkip(&self) -> bool {
        self.cipher.contains("TKIP")
    }

    /// CCMP/AES present in the cipher field
    pub fn has_ccmp(&self) -> bool {
        self.cipher.contains("CCMP")
    }

    /// Pre-shared-key authentication
    pub fn uses_psk(&self) -> bool {
        self.authentication.contains("PSK")
    }
}

/// One client station row from the capture summary
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Station {
    /// Client MAC address
    pub mac: String,
    /// Associated AP BSSID, or "(not associated)"
    pub bssid: String,
    /// Signal level in dBm
    pub power: Option<i32>,
}
