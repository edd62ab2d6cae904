//! Capture survey input
//!
//! Typed records and the airodump-ng CSV parser.

mod parser;
mod record;

pub use parser::Survey;
pub use record::{AccessPoint, EncryptionGrade, Station};
