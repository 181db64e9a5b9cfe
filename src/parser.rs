//! JSON parsing for shuttle API responses.

use serde_json::Value;

use crate::error::{Error, Result, kind_of};
use crate::stops::Stop;

/// Keys every stop object must carry.
pub const STOP_FIELDS: [&str; 4] = ["id", "latitude", "longitude", "name"];

/// Decodes a response body as an untyped JSON value.
///
/// # Errors
///
/// Returns [`Error::MalformedData`] if the bytes are not valid JSON.
pub fn parse_json(bytes: &[u8]) -> Result<Value> {
    serde_json::from_slice(bytes).map_err(Error::MalformedData)
}

/// Decodes a stops response: a JSON array of objects, one [`Stop`] each, in
/// input order.
///
/// # Errors
///
/// Fails on the first bad element; no partial list is returned.
/// - [`Error::MalformedData`] if the body is not JSON
/// - [`Error::NotAnArray`] / [`Error::NotAnObject`] for the wrong shape
/// - [`Error::MissingField`] if an element lacks one of [`STOP_FIELDS`]
/// - [`Error::InvalidField`] if a field has the wrong type
pub fn parse_stops(bytes: &[u8]) -> Result<Vec<Stop>> {
    let items = match parse_json(bytes)? {
        Value::Array(items) => items,
        other => {
            return Err(Error::NotAnArray {
                found: kind_of(&other),
            });
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| stop_from_value(index, item))
        .collect()
}

fn stop_from_value(index: usize, item: Value) -> Result<Stop> {
    let Some(object) = item.as_object() else {
        return Err(Error::NotAnObject {
            index,
            found: kind_of(&item),
        });
    };

    if let Some(field) = STOP_FIELDS.into_iter().find(|f| !object.contains_key(*f)) {
        return Err(Error::MissingField { index, field });
    }

    serde_json::from_value(item).map_err(|source| Error::InvalidField { index, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_stop() {
        let body = br#"[{"id": 1, "latitude": 42.73, "longitude": -73.68, "name": "Commons"}]"#;
        let stops = parse_stops(body).unwrap();

        assert_eq!(stops.len(), 1);
        let stop = &stops[0];
        assert_eq!(stop.id().to_string(), "1");
        assert_eq!(stop.name(), "Commons");
        assert_eq!(stop.coords(), (42.73, -73.68));
    }

    #[test]
    fn test_parse_preserves_order_and_length() {
        let body = br#"[
            {"id": 3, "latitude": 42.1, "longitude": -73.1, "name": "Union"},
            {"id": 1, "latitude": 42.2, "longitude": -73.2, "name": "Commons"},
            {"id": "blitman", "latitude": 42.3, "longitude": -73.3, "name": "Blitman"}
        ]"#;
        let stops = parse_stops(body).unwrap();

        let names: Vec<_> = stops.iter().map(Stop::name).collect();
        assert_eq!(names, ["Union", "Commons", "Blitman"]);
        assert_eq!(stops[2].id().to_string(), "blitman");
    }

    #[test]
    fn test_parse_ignores_extra_keys() {
        let body = br#"[{"id": 7, "latitude": 1, "longitude": 2, "name": "X", "enabled": true}]"#;
        let stops = parse_stops(body).unwrap();
        assert_eq!(stops[0].coords(), (1.0, 2.0));
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse_stops(b"[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_not_json() {
        let err = parse_stops(b"not json").unwrap_err();
        assert!(matches!(err, Error::MalformedData(_)));
    }

    #[test]
    fn test_parse_missing_each_field() {
        for missing in STOP_FIELDS {
            let mut object = serde_json::json!({
                "id": 1, "latitude": 42.73, "longitude": -73.68, "name": "Commons"
            });
            object.as_object_mut().unwrap().remove(missing);
            let body = serde_json::to_vec(&serde_json::json!([{
                "id": 0, "latitude": 0.0, "longitude": 0.0, "name": "ok"
            }, object]))
            .unwrap();

            let err = parse_stops(&body).unwrap_err();
            assert!(
                matches!(err, Error::MissingField { index: 1, field } if field == missing),
                "expected missing `{missing}`, got {err}"
            );
        }
    }

    #[test]
    fn test_parse_wrong_shape() {
        let err = parse_stops(br#"{"id": 1}"#).unwrap_err();
        assert!(matches!(err, Error::NotAnArray { found: "an object" }));

        let err = parse_stops(b"[1, 2]").unwrap_err();
        assert!(matches!(err, Error::NotAnObject { index: 0, found: "a number" }));
    }

    #[test]
    fn test_parse_wrong_field_type() {
        let body = br#"[{"id": 1, "latitude": "north", "longitude": -73.68, "name": "Commons"}]"#;
        let err = parse_stops(body).unwrap_err();
        assert!(matches!(err, Error::InvalidField { index: 0, .. }));
    }

    #[test]
    fn test_parse_json_any_shape() {
        assert_eq!(parse_json(b"42").unwrap(), serde_json::json!(42));
        assert_eq!(
            parse_json(br#"{"routes": []}"#).unwrap(),
            serde_json::json!({"routes": []})
        );
        assert!(matches!(parse_json(b"{").unwrap_err(), Error::MalformedData(_)));
    }
}
