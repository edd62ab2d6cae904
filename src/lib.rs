pub mod analysis;
pub mod config;
pub mod error;
pub mod finding;
pub mod report;
pub mod survey;

pub use analysis::Analyzer;
pub use config::Config;
pub use error::{AuditError, Result};
pub use finding::{Finding, FindingKind, Message, Severity};
pub use survey::{AccessPoint, EncryptionGrade, Station, Survey};
