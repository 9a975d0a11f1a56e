//! Number-with-unit fields (elevation, runway length).

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Error, Result};

/// A numeric value with an optional unit label. Either half may be missing:
/// `m` has a unit but no value, `23` has a value but no unit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Quantity {
    pub value: Option<f64>,
    pub unit: Option<String>,
}

impl Quantity {
    pub fn new(value: Option<f64>, unit: Option<&str>) -> Self {
        Quantity {
            value,
            unit: unit.map(str::to_owned),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_none() && self.unit.is_none()
    }
}

lazy_static! {
    static ref ELEVATION_REGEX: Regex =
        Regex::new(r"(?i)^(-?(?:\d+(?:\.\d*)?|\.\d+))?\s?(m|ft)?$").unwrap();
    static ref RUNWAY_LENGTH_REGEX: Regex =
        Regex::new(r"(?i)^(-?(?:\d+(?:\.\d*)?|\.\d+))?\s?(ml|nm|m)?$").unwrap();
}

/// Decodes an elevation field such as `125m`, `300 ft` or `-25.4m`.
pub fn decode_elevation(text: &str) -> Result<Quantity> {
    decode_quantity(&ELEVATION_REGEX, text)
}

/// Decodes a runway length field such as `800m`, `3.5ml` or `2.4NM`.
pub fn decode_runway_length(text: &str) -> Result<Quantity> {
    decode_quantity(&RUNWAY_LENGTH_REGEX, text)
}

fn decode_quantity(re: &Regex, text: &str) -> Result<Quantity> {
    let trimmed = text.trim();
    let cap = re.captures(trimmed).ok_or_else(|| Error::quantity(text))?;

    let value = match cap.get(1) {
        Some(number) => Some(
            number
                .as_str()
                .parse::<f64>()
                .map_err(|_| Error::quantity(text))?,
        ),
        None => None,
    };
    let unit = cap.get(2).map(|unit| unit.as_str().to_owned());

    Ok(Quantity { value, unit })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use pretty_assertions::assert_eq;

    fn assert_quantity(q: Quantity, value: Option<f64>, unit: Option<&str>) {
        match (q.value, value) {
            (Some(got), Some(want)) => assert!((got - want).abs() < 0.0001, "{} != {}", got, want),
            (got, want) => assert_eq!(got, want),
        }
        assert_eq!(q.unit.as_deref(), unit);
    }

    #[test]
    fn elevation_shapes() {
        assert_quantity(decode_elevation("125m").unwrap(), Some(125.0), Some("m"));
        assert_quantity(decode_elevation("300ft").unwrap(), Some(300.0), Some("ft"));
        assert_quantity(decode_elevation("300 m").unwrap(), Some(300.0), Some("m"));
        assert_quantity(decode_elevation("-25.4m").unwrap(), Some(-25.4), Some("m"));
        assert_quantity(decode_elevation("m").unwrap(), None, Some("m"));
        assert_quantity(decode_elevation("23").unwrap(), Some(23.0), None);
        assert_quantity(decode_elevation(".5m").unwrap(), Some(0.5), Some("m"));
        assert_quantity(decode_elevation("").unwrap(), None, None);
    }

    #[test]
    fn elevation_rejects_garbage() {
        for text in &["x", "-", "12x", "1,200m", "12  m", "m12", "1.2.3m"] {
            let err = decode_elevation(text).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MalformedQuantity, "{}", text);
        }
    }

    #[test]
    fn runway_length_shapes() {
        assert_quantity(decode_runway_length("1250m").unwrap(), Some(1250.0), Some("m"));
        assert_quantity(decode_runway_length("3.5ml").unwrap(), Some(3.5), Some("ml"));
        assert_quantity(decode_runway_length("0 m").unwrap(), Some(0.0), Some("m"));
        assert_quantity(decode_runway_length("2.4NM").unwrap(), Some(2.4), Some("NM"));
        assert_quantity(decode_runway_length("23").unwrap(), Some(23.0), None);
        assert_quantity(decode_runway_length("").unwrap(), None, None);
    }

    #[test]
    fn runway_length_rejects_garbage() {
        assert_eq!(
            decode_runway_length("x").unwrap_err().kind(),
            ErrorKind::MalformedQuantity
        );
        assert!(decode_runway_length("800ft").is_err());
    }

    #[test]
    fn empty_quantity() {
        assert!(Quantity::default().is_empty());
        assert!(!Quantity::new(None, Some("m")).is_empty());
    }
}
