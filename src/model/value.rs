//! Attribute values with a distinguished null sentinel.
//!
//! Values carry a total order (doubles via `total_cmp`, composites via
//! their rendering) so per-field aggregates can live in a `BTreeSet` with
//! deterministic display order.

use std::cmp::Ordering;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// One attribute value as projected from the record source.
///
/// `Null` is a real member of a value set, never merged with the empty
/// string or zero.
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Double(f64),
    Text(String),
    Date(NaiveDate),
    Time(NaiveTime),
    DateTime(NaiveDateTime),
    /// Composite payload (list or map) as delivered by the source
    Json(serde_json::Value),
    Bytes(Vec<u8>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    fn rank(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Int(_) => 2,
            Value::Double(_) => 3,
            Value::Text(_) => 4,
            Value::Date(_) => 5,
            Value::Time(_) => 6,
            Value::DateTime(_) => 7,
            Value::Json(_) => 8,
            Value::Bytes(_) => 9,
        }
    }

    /// Render for display; `null_rep` is the host's null representation
    pub fn render(&self, null_rep: &str) -> String {
        match self {
            Value::Null => null_rep.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Int(i) => i.to_string(),
            Value::Double(f) => f.to_string(),
            Value::Text(s) => s.clone(),
            Value::Date(d) => d.format("%Y-%m-%d").to_string(),
            Value::Time(t) => t.format("%H:%M:%S").to_string(),
            Value::DateTime(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
            Value::Json(v) => v.to_string(),
            Value::Bytes(b) => format!("BLOB ({} bytes)", b.len()),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        use Value::*;
        match (self, other) {
            (Null, Null) => Ordering::Equal,
            (Bool(a), Bool(b)) => a.cmp(b),
            (Int(a), Int(b)) => a.cmp(b),
            (Double(a), Double(b)) => a.total_cmp(b),
            (Text(a), Text(b)) => a.cmp(b),
            (Date(a), Date(b)) => a.cmp(b),
            (Time(a), Time(b)) => a.cmp(b),
            (DateTime(a), DateTime(b)) => a.cmp(b),
            (Json(a), Json(b)) => a.to_string().cmp(&b.to_string()),
            (Bytes(a), Bytes(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// Lenient boolean parsing for committed text
pub fn str_to_bool(s: &str) -> bool {
    !matches!(
        s.to_ascii_lowercase().as_str(),
        "n" | "no" | "f" | "false" | "off" | "0" | ""
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_null_is_distinct() {
        assert_ne!(Value::Null, Value::Text(String::new()));
        assert_ne!(Value::Null, Value::Int(0));
        assert_eq!(Value::Null, Value::Null);
    }

    #[test]
    fn test_set_deduplicates() {
        let mut set = BTreeSet::new();
        set.insert(Value::Int(5));
        set.insert(Value::Int(5));
        set.insert(Value::Null);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_double_total_order() {
        let mut set = BTreeSet::new();
        set.insert(Value::Double(1.5));
        set.insert(Value::Double(1.5));
        set.insert(Value::Double(-0.5));
        assert_eq!(set.len(), 2);
        let first = set.iter().next().unwrap();
        assert_eq!(*first, Value::Double(-0.5));
    }

    #[test]
    fn test_str_to_bool() {
        assert!(!str_to_bool("no"));
        assert!(!str_to_bool("OFF"));
        assert!(!str_to_bool("0"));
        assert!(!str_to_bool(""));
        assert!(str_to_bool("yes"));
        assert!(str_to_bool("1"));
    }

    #[test]
    fn test_render() {
        assert_eq!(Value::Null.render("NULL"), "NULL");
        assert_eq!(Value::Int(42).render("NULL"), "42");
        assert_eq!(Value::Text("abc".into()).render("NULL"), "abc");
        assert_eq!(
            Value::Date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()).render("NULL"),
            "2024-03-01"
        );
    }
}
