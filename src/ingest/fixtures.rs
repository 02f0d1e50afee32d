/// Test fixtures: representative rows from the NOAA storm database export.
///
/// The real export (StormData.csv.bz2, ~900k rows) carries 37 columns and
/// quotes every field. These fixtures keep a handful of the ignored
/// columns so the loader is exercised against a header that does not
/// consist solely of the columns it reads, and include the data-quality
/// quirks found in the real file:
///
///   - BGN_DATE without zero padding, always with a `0:00:00` time part
///   - magnitude codes that are blank, lowercase, or not K/M/B at all
///   - non-numeric junk in a count column
///   - near-duplicate event labels ("TSTM WIND" / "THUNDERSTORM WIND")
///   - a REMARKS field with an embedded comma and newline
///   - a REMARKS field holding a byte that is not valid UTF-8

/// Nine rows, 1950-2002. Expected Stage-A results are spelled out in the
/// aggregation tests that use this fixture.
#[cfg(test)]
pub(crate) fn fixture_storm_export_csv() -> &'static str {
    r#""STATE__","BGN_DATE","COUNTYNAME","STATE","EVTYPE","FATALITIES","INJURIES","PROPDMG","PROPDMGEXP","CROPDMG","CROPDMGEXP","REMARKS","REFNUM"
"1.00","4/18/1950 0:00:00","MOBILE","AL","TORNADO","0.00","15.00","25.00","K","0.00","","","1.00"
"1.00","4/18/1950 0:00:00","BALDWIN","AL","TORNADO","0.00","0.00","2.50","K","0.00","","","2.00"
"5.00","6/8/1951 0:00:00","PULASKI","AR","TORNADO","2.00","2.00","25.00","K","0.00","","","3.00"
"17.00","3/5/2001 0:00:00","PEORIA","IL","FLOOD","0.00","0.00","1.00","K","0.00","","Illinois River above flood stage, Peoria","4.00"
"17.00","5/12/2002 0:00:00","PEORIA","IL","FLOOD","0.00","0.00","2.00","K","1.00","K","Levee seepage reported.
Sandbagging continued overnight.","5.00"
"48.00","7/4/2001 0:00:00","DALLAS","TX","TSTM WIND","1.00","0.00","5.00","","0.00","","","6.00"
"48.00","7/5/2001 0:00:00","DALLAS","TX","THUNDERSTORM WIND","0.00","3.00","1.50","B","0.00","","","7.00"
"20.00","99/99/2001 0:00:00","SEDGWICK","KS","HAIL","0.00","0.00","0.75","k","0.00","","","8.00"
"20.00","6/1/2001 0:00:00","SEDGWICK","KS","HAIL","?","1.00","0.00","","0.00","","","9.00"
"#
}

/// Header only, no data rows.
#[cfg(test)]
pub(crate) fn fixture_empty_export_csv() -> &'static str {
    "\"BGN_DATE\",\"EVTYPE\",\"FATALITIES\",\"INJURIES\",\"PROPDMG\",\"PROPDMGEXP\",\"CROPDMG\",\"CROPDMGEXP\"\n"
}

/// An export cut short: the CROPDMGEXP column is absent.
#[cfg(test)]
pub(crate) fn fixture_missing_column_csv() -> &'static str {
    r#""BGN_DATE","EVTYPE","FATALITIES","INJURIES","PROPDMG","PROPDMGEXP","CROPDMG"
"4/18/1950 0:00:00","TORNADO","0.00","15.00","25.00","K","0.00"
"#
}

/// Two rows, the first with a Latin-1 byte (0xE9) in REMARKS, as found in
/// older parts of the real export.
#[cfg(test)]
pub(crate) fn fixture_latin1_remarks_csv() -> &'static [u8] {
    b"\"BGN_DATE\",\"EVTYPE\",\"FATALITIES\",\"INJURIES\",\"PROPDMG\",\"PROPDMGEXP\",\"CROPDMG\",\"CROPDMGEXP\",\"REMARKS\"
\"5/3/1996 0:00:00\",\"HAIL\",\"0.00\",\"0.00\",\"2.00\",\"K\",\"0.00\",\"\",\"caf\xe9 roof damaged\"
\"5/4/1996 0:00:00\",\"HAIL\",\"0.00\",\"0.00\",\"4.00\",\"\",\"0.00\",\"\",\"\"
"
}
