use regex::Regex;
use lazy_static::lazy_static;

use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatLon(f64, f64);

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Self {
        LatLon(lat, lon)
    }

    pub fn lat(self) -> f64 {
        self.0
    }

    pub fn lon(self) -> f64 {
        self.1
    }

    //Ex: 5117.983N 00657.383E
    pub fn from_cup(lat: &str, lon: &str) -> Result<Self> {
        Ok(LatLon(decode_latitude(lat)?, decode_longitude(lon)?))
    }
}

lazy_static! {
    static ref LAT_REGEX: Regex = Regex::new(r"^(\d{2})(\d{2}(?:\.\d+)?)([NS])$").unwrap();
    static ref LON_REGEX: Regex = Regex::new(r"^(\d{3})(\d{2}(?:\.\d+)?)([EW])$").unwrap();
}

/// Decodes a `DDMM.mmm[NS]` latitude into signed decimal degrees.
pub fn decode_latitude(text: &str) -> Result<f64> {
    decode_dm(&LAT_REGEX, text, 90.0)
}

/// Decodes a `DDDMM.mmm[EW]` longitude into signed decimal degrees.
pub fn decode_longitude(text: &str) -> Result<f64> {
    decode_dm(&LON_REGEX, text, 180.0)
}

fn decode_dm(re: &Regex, text: &str, limit: f64) -> Result<f64> {
    fn to_dd(d: f64, m: f64) -> f64 {
        d + m / 60.0
    }

    let cap = re.captures(text.trim()).ok_or_else(|| Error::coordinate(text))?;
    let (d, m, dir) = (&cap[1], &cap[2], &cap[3]);
    let d: f64 = d.parse().map_err(|_| Error::coordinate(text))?;
    let m: f64 = m.parse().map_err(|_| Error::coordinate(text))?;
    if m >= 60.0 {
        return Err(Error::coordinate(text));
    }

    let mut dd = to_dd(d, m);
    if dd > limit {
        return Err(Error::coordinate(text));
    }
    if dir == "S" || dir == "W" {
        dd = -dd;
    }
    Ok(dd)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn northern_eastern() {
        let pos = LatLon::from_cup("5117.983N", "00657.383E").unwrap();
        assert!(close(pos.lat(), 51.0 + 17.983 / 60.0));
        assert!(close(pos.lon(), 6.0 + 57.383 / 60.0));
    }

    #[test]
    fn southern_western_are_negative() {
        assert!(close(decode_latitude("3356.767S").unwrap(), -(33.0 + 56.767 / 60.0)));
        assert!(close(decode_longitude("07130.000W").unwrap(), -71.5));
    }

    #[test]
    fn whole_minutes() {
        assert!(close(decode_latitude("4530N").unwrap(), 45.5));
    }

    #[test]
    fn bad_hemisphere() {
        let err = decode_latitude("5117.983E").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedCoordinate);
        assert!(decode_longitude("00657.383N").is_err());
        assert!(decode_latitude("5117.983n").is_err());
    }

    #[test]
    fn wrong_width() {
        assert!(decode_latitude("05117.983N").is_err());
        assert!(decode_longitude("0657.383E").is_err());
        assert!(decode_latitude("").is_err());
    }

    #[test]
    fn out_of_range() {
        assert!(decode_latitude("9100.000N").is_err());
        assert!(decode_latitude("4560.000N").is_err());
        assert!(decode_longitude("18030.000E").is_err());
        assert!(close(decode_latitude("9000.000S").unwrap(), -90.0));
        assert!(close(decode_longitude("18000.000W").unwrap(), -180.0));
    }
}
