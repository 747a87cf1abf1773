//! YAML export of submitted profiles

use std::io::Write;

use crate::error::BodaiResult;
use crate::export::json::ProfileExport;

/// Write profiles as YAML with a short header comment
pub fn export_profiles_yaml<W: Write>(export: &ProfileExport, writer: &mut W) -> BodaiResult<()> {
    writeln!(writer, "# BodAI profile export")?;
    writeln!(writer, "# Generated: {}", export.exported_at)?;
    writeln!(writer, "# App Version: {}", export.app_version)?;
    writeln!(writer)?;

    serde_yaml::to_writer(writer, export)?;
    Ok(())
}
