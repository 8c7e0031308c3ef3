//! Country record as delivered by the country API.
//!
//! A `Country` is an open-ended, ordered field map. Only a handful of
//! fields are interpreted (see the typed accessors); everything else is
//! carried verbatim so it stays searchable.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field used as the unique list key.
pub const FIELD_ALPHA3_CODE: &str = "alpha3Code";
/// Display name.
pub const FIELD_NAME: &str = "name";
/// Population (number).
pub const FIELD_POPULATION: &str = "population";
/// Region name (e.g. "Europe").
pub const FIELD_REGION: &str = "region";
/// Capital city.
pub const FIELD_CAPITAL: &str = "capital";
/// Nested flag image references (`small`, `medium`, `large`).
pub const FIELD_FLAG: &str = "flag";

/// One entry of the API response.
///
/// Key order is the order the API sent (serde_json `preserve_order`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Country {
    fields: Map<String, Value>,
}

impl Country {
    /// Declared searchable fields for the `core` search scope.
    pub const CORE_FIELDS: &'static [&'static str] = &[
        FIELD_NAME,
        FIELD_ALPHA3_CODE,
        FIELD_CAPITAL,
        FIELD_REGION,
        FIELD_POPULATION,
    ];

    /// Wrap an already-decoded JSON object.
    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Build a record from a JSON value. Returns `None` unless the value is an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self { fields }),
            _ => None,
        }
    }

    /// Raw lookup of a top-level field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Field names in record order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of top-level fields.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// ISO alpha-3 code, used as the card key.
    pub fn alpha3_code(&self) -> Option<&str> {
        self.str_field(FIELD_ALPHA3_CODE)
    }

    /// Common name.
    pub fn name(&self) -> Option<&str> {
        self.str_field(FIELD_NAME)
    }

    /// Region name, e.g. "Europe".
    pub fn region(&self) -> Option<&str> {
        self.str_field(FIELD_REGION)
    }

    /// Capital city, if the record has one.
    pub fn capital(&self) -> Option<&str> {
        self.str_field(FIELD_CAPITAL)
    }

    /// Population as display text. Accepts numbers and numeric strings alike.
    pub fn population_text(&self) -> Option<String> {
        self.get(FIELD_POPULATION).and_then(value_text)
    }

    /// URL of the large flag image (`flag.large`).
    pub fn flag_large(&self) -> Option<&str> {
        self.get(FIELD_FLAG)
            .and_then(|flag| flag.get("large"))
            .and_then(Value::as_str)
    }

    /// Text form of a field, lowercased, for case-insensitive matching.
    ///
    /// Returns `None` when the field is absent or `null`.
    pub fn search_text(&self, field: &str) -> Option<String> {
        self.get(field)
            .and_then(value_text)
            .map(|text| text.to_lowercase())
    }

    fn str_field(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }
}

/// Render a JSON value as plain text.
///
/// Strings are verbatim, integral floats drop the fractional part, arrays
/// and objects join their members with `,`. `null` has no text.
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(b.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(number_text(n)),
        Value::Array(items) => Some(join_texts(items.iter())),
        Value::Object(map) => Some(join_texts(map.values())),
    }
}

fn join_texts<'a>(values: impl Iterator<Item = &'a Value>) -> String {
    values
        .map(|v| value_text(v).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(",")
}

fn number_text(n: &serde_json::Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    // 2^53: largest range where every integer is exactly representable
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < MAX_EXACT => format!("{}", f as i64),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn landia() -> Country {
        Country::from_value(json!({
            "alpha3Code": "ABC",
            "name": "Landia",
            "population": 100,
            "region": "Zed",
            "capital": "Zee",
            "flag": {"small": "s", "large": "u"}
        }))
        .unwrap()
    }

    #[test]
    fn typed_accessors_read_consumed_fields() {
        let c = landia();
        assert_eq!(c.alpha3_code(), Some("ABC"));
        assert_eq!(c.name(), Some("Landia"));
        assert_eq!(c.region(), Some("Zed"));
        assert_eq!(c.capital(), Some("Zee"));
        assert_eq!(c.population_text().as_deref(), Some("100"));
        assert_eq!(c.flag_large(), Some("u"));
    }

    #[test]
    fn field_names_keep_response_order() {
        let c = landia();
        let names: Vec<&str> = c.field_names().collect();
        assert_eq!(
            names,
            vec!["alpha3Code", "name", "population", "region", "capital", "flag"]
        );
    }

    #[test]
    fn from_value_rejects_non_objects() {
        assert!(Country::from_value(json!("Landia")).is_none());
        assert!(Country::from_value(json!(42)).is_none());
        assert!(Country::from_value(json!(null)).is_none());
    }

    #[test]
    fn missing_fields_are_none() {
        let c = Country::from_value(json!({"name": "Nowhere"})).unwrap();
        assert_eq!(c.region(), None);
        assert_eq!(c.flag_large(), None);
        assert_eq!(c.search_text("capital"), None);
    }

    #[test]
    fn search_text_lowercases() {
        assert_eq!(landia().search_text("region").as_deref(), Some("zed"));
    }

    #[test]
    fn value_text_of_null_is_none() {
        assert_eq!(value_text(&json!(null)), None);
    }

    #[test]
    fn value_text_prints_integral_floats_without_fraction() {
        assert_eq!(value_text(&json!(100.0)).as_deref(), Some("100"));
        assert_eq!(value_text(&json!(1.5)).as_deref(), Some("1.5"));
        assert_eq!(value_text(&json!(-3)).as_deref(), Some("-3"));
    }

    #[test]
    fn value_text_joins_arrays_and_objects() {
        assert_eq!(value_text(&json!(["a", 1, true])).as_deref(), Some("a,1,true"));
        assert_eq!(
            value_text(&json!({"small": "s.png", "large": "l.png"})).as_deref(),
            Some("s.png,l.png")
        );
        assert_eq!(value_text(&json!([null, "x"])).as_deref(), Some(",x"));
    }

    #[test]
    fn population_accepts_numeric_strings() {
        let c = Country::from_value(json!({"population": "12"})).unwrap();
        assert_eq!(c.population_text().as_deref(), Some("12"));
    }
}
