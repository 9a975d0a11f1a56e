//! Second decoding stage: base records into domain waypoints.

use std::collections::BTreeSet;
use std::fmt;

use itertools::Itertools;

use crate::base::{BaseDecoder, BaseRecord};
use crate::error::Result;
use crate::geo::LatLon;
use crate::style::{self, Classifier, Surface};

#[derive(Clone, Debug, PartialEq)]
pub struct Runway {
    /// As written in the source; `unit` says what it is measured in.
    pub length: f64,
    pub unit: Option<String>,
    pub surface: Option<Surface>,
    pub directions: Vec<i32>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Frequency {
    pub frequency: String,
}

impl Frequency {
    /// True for the `NNN.NNN` shape consumers expect. Not checked on decode.
    pub fn is_well_formed(&self) -> bool {
        let bytes = self.frequency.as_bytes();
        bytes.len() == 7
            && bytes
                .iter()
                .enumerate()
                .all(|(i, &b)| if i == 3 { b == b'.' } else { b.is_ascii_digit() })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Waypoint {
    pub name: String,
    pub shortname: String,
    pub description: String,
    pub icao: Option<String>,
    pub classifiers: BTreeSet<Classifier>,
    pub runways: Vec<Runway>,
    pub frequencies: Vec<Frequency>,
    pub elevation: Option<f64>,
    pub latitude: f64,
    pub longitude: f64,
    pub country: String,
}

impl Waypoint {
    pub fn is(&self, classifier: Classifier) -> bool {
        self.classifiers.contains(&classifier)
    }

    pub fn latlon(&self) -> LatLon {
        LatLon::new(self.latitude, self.longitude)
    }
}

impl fmt::Display for Waypoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let pos = self.latlon();
        write!(
            f,
            "{:<8} {:>10.5} {:>11.5} {:2} [{}]",
            self.shortname,
            pos.lat(),
            pos.lon(),
            self.country,
            self.classifiers.iter().join(",")
        )?;
        if let Some(elevation) = self.elevation {
            write!(f, " elev={}", elevation)?;
        }
        for rwy in &self.runways {
            write!(f, " rwy={}/{}", rwy.directions.iter().join("/"), rwy.length)?;
            if let Some(unit) = &rwy.unit {
                write!(f, "{}", unit)?;
            }
            if let Some(surface) = rwy.surface {
                write!(f, " {}", surface)?;
            }
        }
        for frq in &self.frequencies {
            write!(f, " frq={}", frq.frequency)?;
        }
        write!(f, " {:?}", self.name)
    }
}

/// Runway headings for a primary direction: the reciprocal is added for
/// real compass headings, `0` means no heading was given.
pub fn runway_directions(primary: i32) -> Vec<i32> {
    if primary > 0 && primary < 360 {
        vec![primary, (primary + 180) % 360]
    } else {
        vec![primary]
    }
}

pub fn map_record(record: BaseRecord) -> Waypoint {
    let classifiers = style::classifier_set(record.style);

    let icao = if classifiers.contains(&Classifier::Airfield) {
        record.icao
    } else {
        None
    };

    let length = record
        .runway_length
        .and_then(|q| q.value.map(|value| (value, q.unit)));
    let runways = match (length, record.runway_direction) {
        (Some((length, unit)), Some(direction)) => vec![Runway {
            length,
            unit,
            surface: record.style.and_then(style::surface),
            directions: runway_directions(direction),
        }],
        _ => vec![],
    };

    let frequencies = record
        .frequency
        .into_iter()
        .filter(|f| !f.is_empty())
        .map(|frequency| Frequency { frequency })
        .collect();

    Waypoint {
        name: record.name,
        shortname: record.code,
        description: record.description,
        icao,
        classifiers,
        runways,
        frequencies,
        elevation: record.elevation.value,
        latitude: record.latitude,
        longitude: record.longitude,
        country: record.country,
    }
}

/// Lazily maps base records into waypoints, forwarding decode errors as-is.
pub struct SemanticMapper<I> {
    records: I,
}

impl<I> SemanticMapper<I>
where
    I: Iterator<Item = Result<BaseRecord>>,
{
    pub fn new(records: I) -> Self {
        SemanticMapper { records }
    }
}

impl<L> SemanticMapper<BaseDecoder<L>>
where
    L: Iterator,
    L::Item: AsRef<str>,
{
    pub fn from_lines<T: IntoIterator<IntoIter = L>>(lines: T) -> Self {
        SemanticMapper::new(BaseDecoder::new(lines))
    }

    /// 1-based number of the last line pulled from the source.
    pub fn line_number(&self) -> usize {
        self.records.line_number()
    }
}

impl<I> Iterator for SemanticMapper<I>
where
    I: Iterator<Item = Result<BaseRecord>>,
{
    type Item = Result<Waypoint>;

    fn next(&mut self) -> Option<Self::Item> {
        self.records.next().map(|record| record.map(map_record))
    }
}
