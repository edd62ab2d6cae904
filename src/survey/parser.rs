//! Capture summary parsing
//!
//! Parses airodump-ng CSV exports: an access-point section and a station
//! section separated by a blank line, each with its own header row. Cells
//! map to columns by header name, so column order does not matter. Rows
//! without a BSSID (or Station MAC) are skipped; short rows parse with
//! empty cells; numeric cells that fail to parse become None.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, info};

use super::record::{AccessPoint, Station};
use crate::error::{AuditError, Result};

/// A parsed capture summary
#[derive(Debug, Clone, Default)]
pub struct Survey {
    pub access_points: Vec<AccessPoint>,
    pub stations: Vec<Station>,
}

impl Survey {
    /// Load a capture summary from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(AuditError::FileNotFound(path.display().to_string()));
        }

        info!("Loading capture summary from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    /// Parse a capture summary from text
    pub fn parse(content: &str) -> Self {
        // The section split expects Unix line endings
        let content = content.replace("\r\n", "\n");
        let mut sections = content.split("\n\n");

        let access_points = sections.next().map(parse_access_points).unwrap_or_default();
        let stations = sections.next().map(parse_stations).unwrap_or_default();

        debug!(
            networks = access_points.len(),
            stations = stations.len(),
            "parsed capture summary"
        );

        Survey {
            access_points,
            stations,
        }
    }

    /// Number of access points
    pub fn network_count(&self) -> usize {
        self.access_points.len()
    }

    /// Number of client stations
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// ESSID of the first access point with the given BSSID
    pub fn network_name(&self, bssid: &str) -> Option<&str> {
        self.access_points
            .iter()
            .find(|ap| ap.bssid == bssid)
            .map(|ap| ap.essid.as_str())
    }
}

fn parse_access_points(section: &str) -> Vec<AccessPoint> {
    let mut lines = section.trim().lines();
    let header = match lines.next() {
        Some(line) => parse_header(line),
        None => return Vec::new(),
    };

    let mut access_points = Vec::new();
    for line in lines {
        let cells = row_cells(&header, line);
        let bssid = cell(&cells, "BSSID");
        if bssid.is_empty() {
            continue;
        }

        access_points.push(AccessPoint {
            bssid: bssid.to_string(),
            essid: cell(&cells, "ESSID").to_string(),
            channel: int_cell(&cells, "channel"),
            privacy: cell(&cells, "Privacy").to_string(),
            cipher: cell(&cells, "Cipher").to_string(),
            authentication: cell(&cells, "Authentication").to_string(),
            power: int_cell(&cells, "Power"),
            beacons: int_cell(&cells, "# beacons"),
            data_packets: int_cell(&cells, "# IV"),
        });
    }

    access_points
}

fn parse_stations(section: &str) -> Vec<Station> {
    let mut lines = section.trim().lines();
    let header = match lines.next() {
        Some(line) => parse_header(line),
        None => return Vec::new(),
    };

    let mut stations = Vec::new();
    for line in lines {
        let cells = row_cells(&header, line);
        let mac = cell(&cells, "Station MAC");
        if mac.is_empty() {
            continue;
        }

        stations.push(Station {
            mac: mac.to_string(),
            bssid: cell(&cells, "BSSID").to_string(),
            power: int_cell(&cells, "Power"),
        });
    }

    stations
}

fn parse_header(line: &str) -> Vec<String> {
    line.split(',').map(|name| name.trim().to_string()).collect()
}

/// Match a data row against the header by position. Extra cells are
/// dropped, missing cells stay absent.
fn row_cells<'h, 'l>(header: &'h [String], line: &'l str) -> HashMap<&'h str, &'l str> {
    header
        .iter()
        .map(String::as_str)
        .zip(line.split(',').map(str::trim))
        .collect()
}

fn cell<'l>(cells: &HashMap<&str, &'l str>, name: &str) -> &'l str {
    cells.get(name).copied().unwrap_or("")
}

fn int_cell<T: std::str::FromStr>(cells: &HashMap<&str, &str>, name: &str) -> Option<T> {
    cell(cells, name).parse().ok()
}
