//! First decoding stage: one CUP line into a flat record of typed fields.

use csv::StringRecord;
use derive_builder::Builder;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::fields::read_record;
use crate::geo::LatLon;
use crate::quantity::{decode_elevation, decode_runway_length, Quantity};

pub const FIELD_COUNT: usize = 11;

/// Marks the end of the waypoint section; task definitions follow it.
pub const TASK_SECTION: &str = "-----Related Tasks-----";

/// Column title rows written by the tools that produce CUP files.
const HEADER_LAYOUTS: &[&[&str]] = &[
    &["name", "code", "country", "lat", "lon", "elev", "style", "rwdir", "rwlen", "freq", "desc"],
    &[
        "name", "code", "country", "lat", "lon", "elev", "style", "rwdir", "rwlen", "rwwidth",
        "freq", "desc", "userdata", "pics",
    ],
    &[
        "title", "code", "country", "latitude", "longitude", "elevation", "style", "direction",
        "length", "frequency", "description",
    ],
];

#[derive(Clone, Debug, PartialEq, Builder)]
#[builder(setter(into))]
pub struct BaseRecord {
    pub name: String,
    pub code: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: Quantity,
    pub style: Option<i32>,
    pub runway_direction: Option<i32>,
    pub runway_length: Option<Quantity>,
    pub frequency: Option<String>,
    pub description: String,
    /// Not part of the 11 column layout; left for callers merging other sources.
    #[builder(default)]
    pub icao: Option<String>,
}

impl BaseRecord {
    pub fn latlon(&self) -> LatLon {
        LatLon::new(self.latitude, self.longitude)
    }
}

pub fn is_task_section(line: &str) -> bool {
    line.trim() == TASK_SECTION
}

/// Decodes one line. Comments, blank lines and header rows give `Ok(None)`.
pub fn decode_line(line: &str) -> Result<Option<BaseRecord>> {
    let line = line.trim_start_matches('\u{feff}').trim();
    if line.is_empty() || line.starts_with('*') {
        return Ok(None);
    }

    let fields = match read_record(line)? {
        Some(fields) => fields,
        None => return Ok(None),
    };
    if is_header(&fields) {
        return Ok(None);
    }
    if fields.len() != FIELD_COUNT {
        return Err(Error::record(format!(
            "expected {} fields, found {}",
            FIELD_COUNT,
            fields.len()
        )));
    }

    let pos = LatLon::from_cup(&fields[3], &fields[4])?;
    let runway_length = Some(decode_runway_length(&fields[8])?).filter(|q| !q.is_empty());

    BaseRecordBuilder::default()
        .name(&fields[0])
        .code(&fields[1])
        .country(&fields[2])
        .latitude(pos.lat())
        .longitude(pos.lon())
        .elevation(decode_elevation(&fields[5])?)
        .style(decode_integer(&fields[6], "style")?)
        .runway_direction(decode_integer(&fields[7], "runway direction")?)
        .runway_length(runway_length)
        .frequency(non_empty(&fields[9]))
        .description(&fields[10])
        .build()
        .map(Some)
        .map_err(|e| Error::record(e.to_string()))
}

fn is_header(fields: &StringRecord) -> bool {
    HEADER_LAYOUTS.iter().any(|layout| {
        fields.len() == layout.len()
            && fields.iter().zip(layout.iter()).all(|(f, h)| f.eq_ignore_ascii_case(h))
    })
}

fn decode_integer(text: &str, field: &str) -> Result<Option<i32>> {
    if text.is_empty() {
        return Ok(None);
    }
    text.parse()
        .map(Some)
        .map_err(|_| Error::record(format!("{} '{}' is not an integer", field, text)))
}

fn non_empty(text: &str) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text.to_owned())
    }
}

/// Lazily decodes base records from a line source, in input order.
///
/// A line that looks like data but fails to decode is yielded as an error;
/// the caller decides whether to keep pulling.
pub struct BaseDecoder<I> {
    lines: I,
    line_number: usize,
    done: bool,
}

impl<I: Iterator> BaseDecoder<I> {
    pub fn new<L: IntoIterator<IntoIter = I>>(lines: L) -> Self {
        BaseDecoder {
            lines: lines.into_iter(),
            line_number: 0,
            done: false,
        }
    }

    /// 1-based number of the last line pulled from the source.
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

impl<I, S> Iterator for BaseDecoder<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = Result<BaseRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            let line = match self.lines.next() {
                Some(line) => line,
                None => {
                    self.done = true;
                    return None;
                }
            };
            self.line_number += 1;
            let line = line.as_ref();

            if is_task_section(line) {
                debug!(line = self.line_number, "reached task section");
                self.done = true;
                return None;
            }

            match decode_line(line) {
                Ok(Some(record)) => break Some(Ok(record)),
                Ok(None) => trace!(line = self.line_number, "skipping non-record line"),
                Err(e) => {
                    debug!(line = self.line_number, error = %e, "could not decode line");
                    break Some(Err(e));
                }
            }
        }
    }
}
