//! Schema-Felder eines Eintrags: `class`, `pos`, `exits`.

use crate::core::{Fields, MapError, Position};
use serde_json::Value;

/// Entnimmt den `class`-Tag. Fehlt er oder ist er kein String, gibt es `None`.
pub(super) fn take_class(fields: &mut Fields) -> Option<String> {
    match fields.remove("class") {
        Some(Value::String(tag)) => Some(tag),
        _ => None,
    }
}

/// Entnimmt ein Pflichtfeld mit einer Position (`[x, y]`).
pub(super) fn take_position(fields: &mut Fields, key: &str, entry: &str) -> Result<Position, MapError> {
    let value = fields
        .remove(key)
        .ok_or_else(|| MapError::malformed(format!("{}: Feld '{}' fehlt", entry, key)))?;
    parse_position(&value).map_err(|reason| MapError::malformed(format!("{}: '{}' {}", entry, key, reason)))
}

/// Entnimmt die Pflichtliste `exits`.
pub(super) fn take_exits(fields: &mut Fields, entry: &str) -> Result<Vec<Position>, MapError> {
    let value = fields
        .remove("exits")
        .ok_or_else(|| MapError::malformed(format!("{}: Feld 'exits' fehlt", entry)))?;
    let Value::Array(items) = value else {
        return Err(MapError::malformed(format!("{}: 'exits' ist keine Liste", entry)));
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            parse_position(item).map_err(|reason| {
                MapError::malformed(format!("{}: Ausgang #{} {}", entry, index, reason))
            })
        })
        .collect()
}

/// Liest `[x, y]` mit endlichen Zahlen.
pub(super) fn parse_position(value: &Value) -> Result<Position, &'static str> {
    let Value::Array(coords) = value else {
        return Err("ist keine Liste");
    };
    let [x, y] = coords.as_slice() else {
        return Err("braucht genau zwei Koordinaten");
    };
    let (Some(x), Some(y)) = (x.as_f64(), y.as_f64()) else {
        return Err("enthält keine Zahlen");
    };

    let position = Position::new(x, y);
    if !position.is_finite() {
        return Err("ist nicht endlich");
    }
    Ok(position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position(&json!([1, 2.5])), Ok(Position::new(1.0, 2.5)));
        assert!(parse_position(&json!([1])).is_err());
        assert!(parse_position(&json!([1, 2, 3])).is_err());
        assert!(parse_position(&json!(["a", 2])).is_err());
        assert!(parse_position(&json!({"x": 1, "y": 2})).is_err());
    }

    #[test]
    fn test_take_exits_reports_bad_entry() {
        let mut fields = json!({"exits": [[0, 1], [2]]})
            .as_object()
            .cloned()
            .unwrap();
        let err = take_exits(&mut fields, "Kachel #3").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Kachel #3"));
        assert!(msg.contains("Ausgang #1"));
    }

    #[test]
    fn test_take_class_ignores_non_strings() {
        let mut fields = json!({"class": 5}).as_object().cloned().unwrap();
        assert_eq!(take_class(&mut fields), None);
        let mut fields = json!({"class": "Road"}).as_object().cloned().unwrap();
        assert_eq!(take_class(&mut fields).as_deref(), Some("Road"));
        assert!(fields.is_empty());
    }
}
