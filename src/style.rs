//! Style code table: what kind of place a waypoint is.

use std::collections::BTreeSet;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Classifier {
    Airfield,
    Glidersite,
    Landable,
    MountainPass,
    MountainTop,
    Mast,
    Vor,
    Ndb,
    CoolingTower,
    Dam,
    Tunnel,
    Bridge,
    PowerPlant,
    Castle,
    Intersection,
}

impl From<Classifier> for &str {
    fn from(x: Classifier) -> &'static str {
        match x {
            Classifier::Airfield => "airfield",
            Classifier::Glidersite => "glidersite",
            Classifier::Landable => "landable",
            Classifier::MountainPass => "mountain-pass",
            Classifier::MountainTop => "mountain-top",
            Classifier::Mast => "mast",
            Classifier::Vor => "vor",
            Classifier::Ndb => "ndb",
            Classifier::CoolingTower => "cooling-tower",
            Classifier::Dam => "dam",
            Classifier::Tunnel => "tunnel",
            Classifier::Bridge => "bridge",
            Classifier::PowerPlant => "power-plant",
            Classifier::Castle => "castle",
            Classifier::Intersection => "intersection",
        }
    }
}

impl fmt::Display for Classifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str((*self).into())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Surface {
    Grass,
    Solid,
}

impl From<Surface> for &str {
    fn from(x: Surface) -> &'static str {
        match x {
            Surface::Grass => "grass",
            Surface::Solid => "solid",
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str((*self).into())
    }
}

/// Classifier tags for a style code. Unknown codes have none.
pub fn classifiers(style: i32) -> &'static [Classifier] {
    use Classifier::*;

    match style {
        2 | 5 => &[Airfield, Landable],
        3 => &[Landable],
        4 => &[Airfield, Glidersite, Landable],
        6 => &[MountainPass],
        7 => &[MountainTop],
        8 => &[Mast],
        9 => &[Vor],
        10 => &[Ndb],
        11 => &[CoolingTower],
        12 => &[Dam],
        13 => &[Tunnel],
        14 => &[Bridge],
        15 => &[PowerPlant],
        16 => &[Castle],
        17 => &[Intersection],
        // 0 unknown, 1 plain waypoint
        _ => &[],
    }
}

pub fn classifier_set(style: Option<i32>) -> BTreeSet<Classifier> {
    style
        .map(|s| classifiers(s).iter().cloned().collect())
        .unwrap_or_default()
}

/// Runway surface implied by the style code, if any.
pub fn surface(style: i32) -> Option<Surface> {
    match style {
        2 => Some(Surface::Grass),
        5 => Some(Surface::Solid),
        _ => None,
    }
}
