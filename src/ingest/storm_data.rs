/// NOAA Storm Database export loader
///
/// Reads the storm event export (one row per reported event, 1950 onward)
/// into a columnar `EventTable` and derives a calendar year from each
/// row's begin date.
///
/// Format: comma-delimited, fully quoted, header row first. The canonical
/// distribution is bzip2-compressed (`StormData.csv.bz2`); gzip and plain
/// CSV are accepted too, chosen by file extension.
///
/// Columns read (all others ignored):
/// - EVTYPE:      free-text event label, kept verbatim
/// - BGN_DATE:    begin date, `M/D/YYYY H:MM:SS`
/// - FATALITIES, INJURIES: counts
/// - PROPDMG, CROPDMG:     damage amounts, scaled by the matching code
/// - PROPDMGEXP, CROPDMGEXP: magnitude codes ("K", "M", "B", or junk)
///
/// Row-level problems never abort the load: an unparseable date leaves the
/// year missing and a malformed number becomes a missing value. Ignored
/// columns are never decoded, so stray non-UTF-8 bytes in REMARKS are fine.
/// Only a missing file, a header without the columns above, or a
/// structurally unreadable stream is fatal.

use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

use bzip2::read::BzDecoder;
use chrono::{Datelike, NaiveDateTime};
use csv::{ByteRecord, ReaderBuilder};
use flate2::read::GzDecoder;
use tracing::{debug, info, warn};

use crate::model::{EventTable, ReportError, StormEvent};

/// chrono format of BGN_DATE. Single-digit month, day and hour parse fine.
pub const BEGIN_DATE_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

/// Header names that must be present for a stream to count as a storm export.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "EVTYPE",
    "BGN_DATE",
    "FATALITIES",
    "INJURIES",
    "PROPDMG",
    "PROPDMGEXP",
    "CROPDMG",
    "CROPDMGEXP",
];

/// Compression applied to the export file, inferred from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    Bzip2,
    Gzip,
    None,
}

impl Compression {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("bz2") => Compression::Bzip2,
            Some(ext) if ext.eq_ignore_ascii_case("gz") => Compression::Gzip,
            _ => Compression::None,
        }
    }
}

/// Extracts the calendar year from a BGN_DATE value.
///
/// Returns `None` for anything that does not match `BEGIN_DATE_FORMAT`.
pub fn parse_begin_year(begin_date: &str) -> Option<i32> {
    NaiveDateTime::parse_from_str(begin_date.trim(), BEGIN_DATE_FORMAT)
        .ok()
        .map(|dt| dt.year())
}

/// Loads the storm export at `path`, decompressing as its extension implies.
///
/// The file handle lives only for the duration of this call and is closed
/// on every return path.
pub fn load_events(path: &Path) -> Result<EventTable, ReportError> {
    let file = File::open(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ReportError::DataFileNotFound(path.to_path_buf()),
        _ => ReportError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let compression = Compression::from_path(path);
    debug!(path = %path.display(), ?compression, "opening storm data");

    let reader = BufReader::new(file);
    let table = match compression {
        Compression::Bzip2 => read_events(BzDecoder::new(reader))?,
        Compression::Gzip => read_events(GzDecoder::new(reader))?,
        Compression::None => read_events(reader)?,
    };

    log_load_summary(path, &table);
    Ok(table)
}

/// Parses an (already decompressed) export stream into an `EventTable`.
///
/// Rows are read as raw bytes and only the fields `StormEvent` names are
/// decoded, so free-text columns may carry any encoding.
pub fn read_events<R: Read>(reader: R) -> Result<EventTable, ReportError> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = rdr.byte_headers()?.clone();
    check_required_columns(&headers)?;

    let mut table = EventTable::default();
    let mut record = ByteRecord::new();
    while rdr.read_byte_record(&mut record)? {
        let event: StormEvent = record.deserialize(Some(&headers))?;
        let year = parse_begin_year(&event.begin_date);
        table.push(event, year);
    }

    Ok(table)
}

fn check_required_columns(headers: &ByteRecord) -> Result<(), ReportError> {
    let missing: Vec<&'static str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|name| !headers.iter().any(|h| h == name.as_bytes()))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ReportError::MissingColumns(missing))
    }
}

fn log_load_summary(path: &Path, table: &EventTable) {
    match table.year_range() {
        Some((first, last)) => info!(
            path = %path.display(),
            rows = table.len(),
            "loaded storm events {}-{}",
            first,
            last
        ),
        None => info!(path = %path.display(), rows = table.len(), "loaded storm events"),
    }

    let missing = table.missing_year_count();
    if missing > 0 {
        warn!(rows = missing, "begin date unparseable; rows excluded from yearly grouping");
    }
}
