use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Output column names, in output order.
pub const COLUMNS: [&str; 8] = [
    "Name",
    "Pool",
    "ShareSMB",
    "Sharesmb Name",
    "Sharenfs",
    "Shareftp",
    "Space data",
    "space_total",
];

/// One filesystem object as returned by the appliance.
///
/// Every field is kept as a raw JSON value so that a missing key or an
/// unexpected type degrades that field only. `None` means the key was
/// absent; an explicit `null` is `Some(Value::Null)`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FilesystemRecord {
    #[serde(default, deserialize_with = "present_value")]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "present_value")]
    pub pool: Option<Value>,
    #[serde(default, deserialize_with = "present_value")]
    pub sharesmb: Option<Value>,
    #[serde(default, deserialize_with = "present_value")]
    pub sharesmb_name: Option<Value>,
    #[serde(default, deserialize_with = "present_value")]
    pub sharenfs: Option<Value>,
    #[serde(default, deserialize_with = "present_value")]
    pub shareftp: Option<Value>,
    #[serde(default, deserialize_with = "present_value")]
    pub space_data: Option<Value>,
    #[serde(default, deserialize_with = "present_value")]
    pub space_total: Option<Value>,
}

fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl FilesystemRecord {
    /// Best-effort decode of one array element. Anything that is not an
    /// object becomes an all-absent record.
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }
}

/// Fixed 8-field projection of a filesystem record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    #[serde(rename = "Name")]
    pub name: Value,
    #[serde(rename = "Pool")]
    pub pool: Value,
    #[serde(rename = "ShareSMB")]
    pub sharesmb: Value,
    #[serde(rename = "Sharesmb Name")]
    pub sharesmb_name: Value,
    #[serde(rename = "Sharenfs")]
    pub sharenfs: Value,
    #[serde(rename = "Shareftp")]
    pub shareftp: Value,
    #[serde(rename = "Space data")]
    pub space_data: Value,
    #[serde(rename = "space_total")]
    pub space_total: Value,
}

impl From<FilesystemRecord> for ReportRow {
    fn from(record: FilesystemRecord) -> Self {
        Self {
            name: record.name.unwrap_or(Value::Null),
            pool: record.pool.unwrap_or(Value::Null),
            sharesmb: record.sharesmb.unwrap_or(Value::Null),
            sharesmb_name: record
                .sharesmb_name
                .unwrap_or_else(|| Value::String(String::new())),
            sharenfs: record.sharenfs.unwrap_or(Value::Null),
            shareftp: record.shareftp.unwrap_or(Value::Null),
            space_data: record.space_data.unwrap_or(Value::Null),
            space_total: record.space_total.unwrap_or(Value::Null),
        }
    }
}

impl ReportRow {
    /// Field values in `COLUMNS` order.
    pub fn values(&self) -> [&Value; 8] {
        [
            &self.name,
            &self.pool,
            &self.sharesmb,
            &self.sharesmb_name,
            &self.sharenfs,
            &self.shareftp,
            &self.space_data,
            &self.space_total,
        ]
    }

    /// Field values rendered as flat text cells in `COLUMNS` order.
    pub fn cells(&self) -> [String; 8] {
        self.values().map(cell_text)
    }
}

/// Text form of a scalar for CSV and console cells. Null is an empty cell.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_record_projection() {
        let record = FilesystemRecord::from_value(json!({
            "name": "home",
            "pool": "pool-0",
            "sharesmb": "off",
            "sharesmb_name": "home$",
            "sharenfs": "on",
            "shareftp": "off",
            "space_data": 1024,
            "space_total": 2048.5,
            "quota": 0
        }));
        let row = ReportRow::from(record);

        assert_eq!(row.name, json!("home"));
        assert_eq!(row.sharesmb_name, json!("home$"));
        assert_eq!(row.space_total, json!(2048.5));
        assert_eq!(row.cells()[6], "1024");
    }

    #[test]
    fn test_missing_sharesmb_name_is_empty_string() {
        let row = ReportRow::from(FilesystemRecord::from_value(json!({
            "name": "export",
            "pool": "pool-1",
            "sharesmb": "off",
            "sharenfs": "on",
            "shareftp": "off",
            "space_data": 1,
            "space_total": 2
        })));

        assert_eq!(row.sharesmb_name, json!(""));
        assert_eq!(row.name, json!("export"));
        assert_eq!(row.shareftp, json!("off"));
        assert_eq!(row.space_total, json!(2));
    }

    #[test]
    fn test_explicit_null_sharesmb_name_stays_null() {
        let record = FilesystemRecord::from_value(json!({ "name": "a", "sharesmb_name": null }));
        assert_eq!(record.sharesmb_name, Some(Value::Null));
        assert_eq!(record.pool, None);

        let row = ReportRow::from(record);
        assert_eq!(row.sharesmb_name, Value::Null);
        assert_eq!(row.cells()[3], "");
        assert_eq!(serde_json::to_value(&row).unwrap()["Sharesmb Name"], Value::Null);
    }

    #[test]
    fn test_other_missing_fields_are_null() {
        let row = ReportRow::from(FilesystemRecord::from_value(json!({ "name": "x" })));
        assert_eq!(row.pool, Value::Null);
        assert_eq!(row.shareftp, Value::Null);
        assert_eq!(row.cells()[5], "");
    }

    #[test]
    fn test_non_object_element_yields_empty_row() {
        let row = ReportRow::from(FilesystemRecord::from_value(json!("garbage")));
        assert_eq!(row.name, Value::Null);
        assert_eq!(row.sharesmb_name, json!(""));
    }

    #[test]
    fn test_unexpected_types_are_kept() {
        let row = ReportRow::from(FilesystemRecord::from_value(json!({
            "sharesmb": false,
            "space_data": "12G"
        })));
        assert_eq!(row.cells()[2], "false");
        assert_eq!(row.cells()[6], "12G");
    }

    #[test]
    fn test_json_keys_match_columns() {
        let row = ReportRow::from(FilesystemRecord::default());
        let value = serde_json::to_value(&row).unwrap();
        let object = value.as_object().unwrap();
        for column in COLUMNS {
            assert!(object.contains_key(column), "missing key {}", column);
        }
        assert_eq!(object.len(), COLUMNS.len());
    }
}
