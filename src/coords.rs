//! Sky coordinates and angular quantities from user input.
//!
//! Coordinates are accepted in the notations astronomers type on a command
//! line:
//!
//! ```text
//! Decimal degrees:   10.684 41.269     10.684d +41.269d    10.684,41.269
//! Decimal hours RA:  0.7123h +41.26d
//! Sexagesimal:       00:42:44.3 +41:16:09    00h42m44.3s +41d16m09s
//! Six tokens:        00 42 44.3 +41 16 09
//! ```
//!
//! Sexagesimal RA is always hours. Anything else is treated as an object
//! name and resolved with the CDS Sesame service.

use crate::client::ArchiveClient;
use crate::{Error, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

pub const SESAME_URL: &str = "https://cds.unistra.fr/cgi-bin/nph-sesame/-ox/SNV";

static QUANTITY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)\s*([A-Za-z'"°]*)\s*$"#)
        .expect("valid quantity regex")
});

static RA_SEXAGESIMAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})[:hH](\d{1,2})[:mM](\d{1,2}(?:\.\d*)?)[sS]?$").expect("valid RA regex")
});

static DEC_SEXAGESIMAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^([+-]?)(\d{1,2})[:dD°](\d{1,2})[:mM'](\d{1,2}(?:\.\d*)?)(?:[sS]|"|'')?$"#)
        .expect("valid Dec regex")
});

/// An angle, stored in degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Angle {
    degrees: f64,
}

impl Angle {
    pub fn from_degrees(degrees: f64) -> Self {
        Self { degrees }
    }

    pub fn from_arcmin(arcmin: f64) -> Self {
        Self::from_degrees(arcmin / 60.0)
    }

    pub fn from_arcsec(arcsec: f64) -> Self {
        Self::from_degrees(arcsec / 3600.0)
    }

    pub fn from_hours(hours: f64) -> Self {
        Self::from_degrees(hours * 15.0)
    }

    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    pub fn arcmin(&self) -> f64 {
        self.degrees * 60.0
    }

    pub fn arcsec(&self) -> f64 {
        self.degrees * 3600.0
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} deg", self.degrees)
    }
}

/// Parse an angular quantity such as `10arcsec`, `0.5deg`, `2'` or `1.5 arcmin`.
/// A bare number is in degrees.
pub fn parse_angle(text: &str) -> Result<Angle> {
    let caps = QUANTITY_REGEX
        .captures(text)
        .ok_or_else(|| Error::InvalidAngle(text.to_string()))?;
    let value: f64 = caps[1]
        .parse()
        .map_err(|_| Error::InvalidAngle(text.to_string()))?;

    let angle = match caps[2].to_ascii_lowercase().as_str() {
        "" | "d" | "deg" | "degree" | "degrees" | "°" => Angle::from_degrees(value),
        "'" | "m" | "am" | "amin" | "arcmin" | "arcminute" | "arcminutes" => Angle::from_arcmin(value),
        "\"" | "''" | "s" | "as" | "asec" | "arcsec" | "arcsecond" | "arcseconds" => {
            Angle::from_arcsec(value)
        }
        "mas" => Angle::from_arcsec(value / 1000.0),
        "h" | "hr" | "hour" | "hours" => Angle::from_hours(value),
        "rad" | "radian" | "radians" => Angle::from_degrees(value.to_degrees()),
        _ => return Err(Error::InvalidAngle(text.to_string())),
    };
    Ok(angle)
}

/// Parse a search radius; negative values are rejected.
pub fn parse_radius(text: &str) -> Result<Angle> {
    let angle = parse_angle(text)?;
    if angle.degrees() < 0.0 || !angle.degrees().is_finite() {
        return Err(Error::InvalidAngle(format!("{} (radius must not be negative)", text)));
    }
    Ok(angle)
}

/// ICRS position in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyCoord {
    pub ra_deg: f64,
    pub dec_deg: f64,
}

impl SkyCoord {
    /// RA is wrapped into [0, 360); Dec must be in [-90, 90].
    pub fn new(ra_deg: f64, dec_deg: f64) -> Result<Self> {
        if !ra_deg.is_finite() || !dec_deg.is_finite() || !(-90.0..=90.0).contains(&dec_deg) {
            return Err(Error::InvalidCoordinates(format!("{} {}", ra_deg, dec_deg)));
        }
        Ok(Self {
            ra_deg: ra_deg.rem_euclid(360.0),
            dec_deg,
        })
    }

    /// Parse a literal position. Returns `None` when the text is not a
    /// coordinate (it may then be an object name).
    pub fn parse(text: &str) -> Option<Self> {
        let normalized = text.replace(',', " ");
        let tokens: Vec<&str> = normalized.split_whitespace().collect();
        let (ra, dec) = match tokens.as_slice() {
            [ra, dec] => (parse_ra(ra)?, parse_dec(dec)?),
            [h, m, s, d, dm, ds] => {
                let ra = sexagesimal(false, h.parse().ok()?, m.parse().ok()?, s.parse().ok()?, 24.0)? * 15.0;
                let negative = d.starts_with('-');
                let degrees: f64 = d.trim_start_matches(['+', '-']).parse().ok()?;
                let dec = sexagesimal(negative, degrees, dm.parse().ok()?, ds.parse().ok()?, 90.0)?;
                (ra, dec)
            }
            _ => return None,
        };
        Self::new(ra, dec).ok()
    }
}

impl fmt::Display for SkyCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6} {:+.6}", self.ra_deg, self.dec_deg)
    }
}

fn sexagesimal(negative: bool, whole: f64, minutes: f64, seconds: f64, max: f64) -> Option<f64> {
    if whole < 0.0 || minutes >= 60.0 || seconds >= 60.0 || whole > max {
        return None;
    }
    let value = whole + minutes / 60.0 + seconds / 3600.0;
    if value > max {
        return None;
    }
    Some(if negative { -value } else { value })
}

fn parse_ra(token: &str) -> Option<f64> {
    if let Some(caps) = RA_SEXAGESIMAL.captures(token) {
        let hours = sexagesimal(
            false,
            caps[1].parse().ok()?,
            caps[2].parse().ok()?,
            caps[3].parse().ok()?,
            24.0,
        )?;
        return Some(hours * 15.0);
    }
    parse_decimal_token(token)
}

fn parse_dec(token: &str) -> Option<f64> {
    if let Some(caps) = DEC_SEXAGESIMAL.captures(token) {
        return sexagesimal(
            &caps[1] == "-",
            caps[2].parse().ok()?,
            caps[3].parse().ok()?,
            caps[4].parse().ok()?,
            90.0,
        );
    }
    parse_decimal_token(token)
}

/// Decimal value with an optional `h` or `d`/`deg` suffix.
fn parse_decimal_token(token: &str) -> Option<f64> {
    let caps = QUANTITY_REGEX.captures(token)?;
    let value: f64 = caps[1].parse().ok()?;
    match caps[2].to_ascii_lowercase().as_str() {
        "" | "d" | "deg" | "°" => Some(value),
        "h" => Some(value * 15.0),
        _ => None,
    }
}

/// Extract the first J2000 position from a Sesame XML response.
pub fn parse_sesame(xml: &str) -> Result<Option<SkyCoord>> {
    let mut reader = Reader::from_str(xml);
    let mut current: Option<&'static str> = None;
    let mut ra: Option<f64> = None;
    let mut dec: Option<f64> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                current = match e.local_name().as_ref() {
                    b"jradeg" => Some("ra"),
                    b"jdedeg" => Some("dec"),
                    _ => None,
                };
            }
            Event::Text(e) => {
                let text = e.unescape()?;
                match current {
                    Some("ra") if ra.is_none() => ra = text.trim().parse().ok(),
                    Some("dec") if dec.is_none() => dec = text.trim().parse().ok(),
                    _ => {}
                }
            }
            Event::End(_) => current = None,
            Event::Eof => break,
            _ => {}
        }
        if ra.is_some() && dec.is_some() {
            break;
        }
    }

    match (ra, dec) {
        (Some(ra), Some(dec)) => Ok(Some(SkyCoord::new(ra, dec)?)),
        _ => Ok(None),
    }
}

/// Sesame query URL for a name, with spaces sent as `%20`.
pub fn sesame_url(name: &str) -> String {
    // Form encoding writes a literal '+' as %2B, so every '+' left is a space.
    let encoded: String = url::form_urlencoded::byte_serialize(name.trim().as_bytes()).collect();
    format!("{}?{}", SESAME_URL, encoded.replace('+', "%20"))
}

/// Resolve an object name to a position with Sesame.
pub fn resolve_name(client: &ArchiveClient, name: &str) -> Result<SkyCoord> {
    let url = sesame_url(name);
    tracing::debug!("resolving '{}' via Sesame", name);
    let xml = client.get_text(&url, &[])?;
    parse_sesame(&xml)?.ok_or_else(|| Error::NameResolution(name.to_string()))
}

/// A literal position, or the resolved position of an object name.
pub fn resolve(client: &ArchiveClient, text: &str) -> Result<SkyCoord> {
    match SkyCoord::parse(text) {
        Some(coord) => Ok(coord),
        None if text.trim().is_empty() => Err(Error::InvalidCoordinates(text.to_string())),
        None => resolve_name(client, text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_sesame_url_encoding() {
        assert_eq!(sesame_url(" NGC 1068 "), format!("{}?NGC%201068", SESAME_URL));
        assert_eq!(sesame_url("PSR B1919+21"), format!("{}?PSR%20B1919%2B21", SESAME_URL));
    }

    #[test]
    fn test_parse_angle_units() {
        assert!(close(parse_angle("10arcsec").unwrap().degrees(), 10.0 / 3600.0));
        assert!(close(parse_angle("0.5deg").unwrap().degrees(), 0.5));
        assert!(close(parse_angle("1.5 arcmin").unwrap().arcmin(), 1.5));
        assert!(close(parse_angle("2'").unwrap().arcmin(), 2.0));
        assert!(close(parse_angle("30\"").unwrap().arcsec(), 30.0));
        assert!(close(parse_angle("1h").unwrap().degrees(), 15.0));
        assert!(close(parse_angle("0.25").unwrap().degrees(), 0.25));
        assert!(close(parse_angle("500mas").unwrap().arcsec(), 0.5));
    }

    #[test]
    fn test_parse_angle_invalid() {
        assert!(parse_angle("ten arcsec").is_err());
        assert!(parse_angle("5 parsec").is_err());
        assert!(parse_angle("").is_err());
        assert!(parse_radius("-1deg").is_err());
    }

    #[test]
    fn test_decimal_pairs() {
        let c = SkyCoord::parse("10.684 41.269").unwrap();
        assert!(close(c.ra_deg, 10.684) && close(c.dec_deg, 41.269));

        let c = SkyCoord::parse("10.68d +41.26d").unwrap();
        assert!(close(c.dec_deg, 41.26));

        let c = SkyCoord::parse("10.68h -41.26d").unwrap();
        assert!(close(c.ra_deg, 160.2) && close(c.dec_deg, -41.26));

        let c = SkyCoord::parse("202.4842,47.2306").unwrap();
        assert!(close(c.ra_deg, 202.4842));
    }

    #[test]
    fn test_sexagesimal() {
        let c = SkyCoord::parse("00:42:44.3 +41:16:09").unwrap();
        assert!(close(c.ra_deg, (42.0 / 60.0 + 44.3 / 3600.0) * 15.0));
        assert!(close(c.dec_deg, 41.0 + 16.0 / 60.0 + 9.0 / 3600.0));

        let c = SkyCoord::parse("00h42m44.3s -00d30m00s").unwrap();
        assert!(close(c.dec_deg, -0.5));

        let c = SkyCoord::parse("13 29 52.7 +47 11 43").unwrap();
        assert!(close(c.ra_deg, (13.0 + 29.0 / 60.0 + 52.7 / 3600.0) * 15.0));

        let c = SkyCoord::parse("05 35 17.3 -00 23 28").unwrap();
        assert!(c.dec_deg < 0.0);
    }

    #[test]
    fn test_names_are_not_coordinates() {
        assert!(SkyCoord::parse("M31").is_none());
        assert!(SkyCoord::parse("M 31").is_none());
        assert!(SkyCoord::parse("NGC 1275").is_none());
        assert!(SkyCoord::parse("Betelgeuse").is_none());
    }

    #[test]
    fn test_out_of_range() {
        assert!(SkyCoord::parse("10 95").is_none());
        assert!(SkyCoord::parse("25:00:00 +10:00:00").is_none());
        assert!(SkyCoord::parse("10:61:00 +10:00:00").is_none());
        assert!(close(SkyCoord::new(370.0, 0.0).unwrap().ra_deg, 10.0));
    }

    #[test]
    fn test_parse_sesame() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8" ?>
<Sesame xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
<Target option="SNV">
  <name>M31</name>
  <Resolver name="S=Simbad (via url):    1">
    <otype>AGN</otype>
    <jpos>00:42:44.33 +41:16:07.5</jpos>
    <jradeg>10.68470833</jradeg>
    <jdedeg>41.26875000</jdedeg>
    <oname>M  31</oname>
  </Resolver>
</Target>
</Sesame>"#;
        let coord = parse_sesame(xml).unwrap().unwrap();
        assert!(close(coord.ra_deg, 10.68470833));
        assert!(close(coord.dec_deg, 41.26875));
    }

    #[test]
    fn test_parse_sesame_not_found() {
        let xml = r#"<Sesame><Target option="SNV"><name>nosuchthing</name>
<Resolver name="S=Simbad"><INFO>*** Nothing found ***</INFO></Resolver></Target></Sesame>"#;
        assert!(parse_sesame(xml).unwrap().is_none());
    }
}
