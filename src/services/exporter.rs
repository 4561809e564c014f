// src/services/exporter.rs
// DOCUMENTATION: Flat-file export of the deduplicated result set
// PURPOSE: Write Place ID, Name, Latitude, Longitude, Address as CSV

use crate::errors::PlacesError;
use crate::models::ResultSet;
use std::path::Path;

/// Write the result set to `destination`, replacing any existing file
/// DOCUMENTATION: One header row, then one row per place in result order.
/// The same ResultSet always produces the same bytes.
pub fn export(results: &ResultSet, destination: &Path) -> Result<(), PlacesError> {
    let mut wtr = csv::Writer::from_path(destination)?;

    if results.is_empty() {
        // serialize() emits the header with the first record only
        wtr.write_record(["Place ID", "Name", "Latitude", "Longitude", "Address"])?;
    }

    for place in results.iter() {
        wtr.serialize(place)?;
    }
    wtr.flush()?;

    log::info!(
        "Exported {} places to {}",
        results.len(),
        destination.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlaceRecord;
    use std::fs;

    fn results() -> ResultSet {
        vec![
            PlaceRecord {
                place_id: "ChIJ1".to_string(),
                name: Some("Migros Appenzell".to_string()),
                latitude: 47.3305,
                longitude: 9.4095,
                address: Some("Poststrasse 4, Appenzell".to_string()),
            },
            PlaceRecord {
                place_id: "ChIJ2".to_string(),
                name: Some("Migrolino Gonten".to_string()),
                latitude: 47.3274,
                longitude: 9.3476,
                address: None,
            },
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_export_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("migros.csv");

        export(&results(), &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "Place ID,Name,Latitude,Longitude,Address");
        assert_eq!(
            lines[1],
            "ChIJ1,Migros Appenzell,47.3305,9.4095,\"Poststrasse 4, Appenzell\""
        );
        assert_eq!(lines[2], "ChIJ2,Migrolino Gonten,47.3274,9.3476,");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_export_is_idempotent_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("migros.csv");
        fs::write(&path, "stale contents that are much longer than the export itself\n".repeat(20))
            .unwrap();

        export(&results(), &path).unwrap();
        let first = fs::read(&path).unwrap();
        export(&results(), &path).unwrap();
        let second = fs::read(&path).unwrap();

        assert_eq!(first, second);
        assert!(!String::from_utf8(first).unwrap().contains("stale"));
    }

    #[test]
    fn test_export_empty_set_keeps_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");

        export(&ResultSet::new(), &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "Place ID,Name,Latitude,Longitude,Address\n");
    }
}
