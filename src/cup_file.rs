use crate::base::BaseDecoder;
use crate::error::Result;
use crate::waypoint::SemanticMapper;
use std::io::prelude::*;
use std::path::Path;
use std::str::Lines;

/// A whole CUP file held in memory, decoded lazily on request.
#[derive(Debug)]
pub struct CupFile {
    buf: String,
}

impl CupFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<CupFile> {
        let mut file = std::fs::File::open(path)?;
        CupFile::from_reader(&mut file)
    }

    // SeeYou writes Windows-1252 often enough that strict UTF-8 would reject real files.
    pub fn from_reader<B: Read>(reader: &mut B) -> Result<CupFile> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Ok(CupFile { buf: String::from_utf8_lossy(&buf).into_owned() })
    }

    pub fn base_records(&self) -> BaseDecoder<Lines<'_>> {
        BaseDecoder::new(self.buf.lines())
    }

    pub fn waypoints(&self) -> SemanticMapper<BaseDecoder<Lines<'_>>> {
        SemanticMapper::from_lines(self.buf.lines())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const FILE: &str = "name,code,country,lat,lon,elev,style,rwdir,rwlen,freq,desc\r\n\
\"Meiersberg\",\"MEIER\",DE,5117.983N,00657.383E,164m,4,130,800m,130.125,\"Flugplatz\"\r\n\
* a comment\r\n\
\"Ulm H Bf\",\"ULMHBF\",DE,4823.967N,00958.983E,480m,1,,,,\"BAHNHOF\"\r\n\
-----Related Tasks-----\r\n\
\"???\",\"Meiersberg\",\"Ulm H Bf\",\"Meiersberg\"\r\n";

    #[test]
    fn reads_waypoint_section() {
        let file = CupFile::from_reader(&mut FILE.as_bytes()).unwrap();
        let names: Vec<String> = file
            .waypoints()
            .map(|wp| wp.unwrap().shortname)
            .collect();
        assert_eq!(names, vec!["MEIER", "ULMHBF"]);
        assert_eq!(file.base_records().count(), 2);
    }

    #[test]
    fn lossy_bytes() {
        let bytes = b"\"Z\xfcrich\",\"ZUE\",CH,4727.000N,00833.000E,432m,1,,,,\"\"\n".to_vec();
        let file = CupFile::from_reader(&mut bytes.as_slice()).unwrap();
        let record = file.base_records().next().unwrap().unwrap();
        assert_eq!(record.code, "ZUE");
        assert!(record.name.starts_with('Z'));
    }

    #[test]
    fn missing_file() {
        let err = CupFile::from_file("/nonexistent/waypoints.cup").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
