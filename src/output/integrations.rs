//! Integration settings output formatter

use serde::Serialize;

use super::common::{output_rows, print_json, print_yaml, Tabular};
use crate::cli::OutputFormat;

/// One setting of an integration
#[derive(Serialize)]
struct SettingRow {
    setting: String,
    value: String,
}

impl Tabular for SettingRow {
    fn headers() -> &'static [&'static str] {
        &["SETTING", "VALUE"]
    }

    fn row(&self) -> Vec<String> {
        vec![self.setting.clone(), self.value.clone()]
    }
}

fn setting_rows<S: Serialize>(settings: &S) -> Vec<SettingRow> {
    let Ok(serde_json::Value::Object(map)) = serde_json::to_value(settings) else {
        return Vec::new();
    };
    map.into_iter()
        .map(|(setting, value)| SettingRow {
            setting,
            value: match value {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            },
        })
        .collect()
}

/// Output integration settings: key/value rows, or the object itself for JSON/YAML
pub fn output_integration<S: Serialize>(settings: &S, format: OutputFormat, no_header: bool) {
    if !format.is_structured() {
        output_rows(&setting_rows(settings), format, no_header);
    } else if format == OutputFormat::Json {
        print_json(settings);
    } else {
        print_yaml(settings);
    }
}
