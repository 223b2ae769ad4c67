//! Directory Export
//!
//! Pretty-printed JSON snapshot of the loaded employees for download.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::Serialize;

use crate::domain::Employee;

pub const EXPORT_VERSION: &str = "1.0";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportDocument<'a> {
    employees: &'a [Employee],
    export_date: String,
    version: &'static str,
}

pub fn export_json(employees: &[Employee], exported_at: DateTime<Utc>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ExportDocument {
        employees,
        export_date: exported_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        version: EXPORT_VERSION,
    })
}

/// `hr-dashboard-export-YYYY-MM-DD.json`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("hr-dashboard-export-{}.json", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Department;
    use crate::fixtures::staff;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    #[test]
    fn test_export_document_shape() {
        let employees = staff(1, 3, Department::Finance, 4);
        let at = Utc.with_ymd_and_hms(2025, 4, 2, 9, 30, 0).unwrap();
        let raw = export_json(&employees, at).unwrap();

        let doc: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(doc["version"], "1.0");
        assert_eq!(doc["exportDate"], "2025-04-02T09:30:00.000Z");
        assert_eq!(doc["employees"].as_array().unwrap().len(), 3);
        assert_eq!(doc["employees"][0]["firstName"], "First1");

        let back: Vec<Employee> = serde_json::from_value(doc["employees"].clone()).unwrap();
        assert_eq!(back, employees);
    }

    #[test]
    fn test_export_file_name() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 9).unwrap();
        assert_eq!(export_file_name(date), "hr-dashboard-export-2025-01-09.json");
    }
}
