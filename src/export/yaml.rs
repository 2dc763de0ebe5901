//! YAML export, for human-readable report snapshots

use serde::Serialize;
use std::io::Write;

use super::json::ExportEnvelope;
use crate::error::FintrackResult;

/// Write `data` as YAML inside the same envelope as the JSON export,
/// preceded by a comment header
pub fn export_yaml<T: Serialize, W: Write>(
    data: &T,
    kind: &'static str,
    writer: &mut W,
) -> FintrackResult<()> {
    let envelope = ExportEnvelope::new(kind, data);

    writeln!(writer, "# fintrack {} export", kind)?;
    writeln!(writer, "# Generated: {}", envelope.exported_at)?;
    writeln!(writer, "# App Version: {}", envelope.app_version)?;
    writeln!(writer)?;

    serde_yaml::to_writer(&mut *writer, &envelope)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Payload {
        categories: Vec<&'static str>,
    }

    #[test]
    fn test_yaml_export() {
        let mut buf = Vec::new();
        let payload = Payload {
            categories: vec!["Food", "Salary"],
        };
        export_yaml(&payload, "payload", &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("# fintrack payload export"));
        assert!(text.contains("kind: payload"));
        assert!(text.contains("- Food"));

        let value: serde_yaml::Value = serde_yaml::from_str(&text).unwrap();
        assert_eq!(value["schema_version"].as_str(), Some("1.0.0"));
    }
}
