//! JSON export of submitted profiles

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::BodaiResult;
use crate::models::SubmittedProfile;
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Profile export document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Exported profiles, oldest first
    pub profiles: Vec<SubmittedProfile>,
}

impl ProfileExport {
    /// Wrap the given profiles
    pub fn new(profiles: Vec<SubmittedProfile>) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            profiles,
        }
    }

    /// Every profile in storage
    pub fn from_storage(storage: &Storage) -> BodaiResult<Self> {
        Ok(Self::new(storage.profiles.get_all()?))
    }
}

/// Write profiles as pretty-printed JSON
pub fn export_profiles_json<W: Write>(export: &ProfileExport, writer: &mut W) -> BodaiResult<()> {
    serde_json::to_writer_pretty(&mut *writer, export)?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Profile;

    #[test]
    fn test_json_export() {
        let mut profile = Profile::new();
        profile.age = "30".into();
        let export = ProfileExport::new(vec![SubmittedProfile::new(profile, None)]);

        let mut out = Vec::new();
        export_profiles_json(&export, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["profiles"][0]["profile"]["age"], "30");
    }
}
