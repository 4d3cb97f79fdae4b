//! End-to-end tests for archive assembly and validation
//!
//! These tests exercise the full path an upload takes: files on disk,
//! classified into archive slots, run through their class check sequences,
//! and read out as per-file states.

use anyhow::Result;
use tempfile::TempDir;

use dwca_validator::{ArchiveClass, CsvFile, DwcArchive, ValidationConfig, run_checks};

/// Write an extracted archive directory with one valid and one broken file
fn write_mixed_archive() -> Result<TempDir> {
    let dir = tempfile::tempdir()?;

    std::fs::write(
        dir.path().join("event.csv"),
        "eventID,eventDate,samplingProtocol\n\
         evt-1,2024-05-01,point count\n\
         evt-2,2024-05-02,point count\n\
         trailer,row,x\n",
    )?;

    // Duplicated header, unknown header, and a missing required value.
    std::fs::write(
        dir.path().join("occurrence.csv"),
        "occurrenceID,occurrenceID,basisOfRecord,scientificName,fieldStrength\n\
         occ-1,occ-1,HumanObservation,Rangifer tarandus,low\n\
         ,occ-2,HumanObservation,Rangifer tarandus,low\n\
         trailer,row,x,y,z\n",
    )?;

    std::fs::write(
        dir.path().join("meta.xml"),
        "<archive xmlns=\"http://rs.tdwg.org/dwc/text/\"/>\n",
    )?;

    Ok(dir)
}

#[test]
fn test_mixed_archive_end_to_end() -> Result<()> {
    let dir = write_mixed_archive()?;

    let mut archive = DwcArchive::from_dir(dir.path())?;
    assert_eq!(
        archive.populated(),
        vec![
            ArchiveClass::Event,
            ArchiveClass::Occurrence,
            ArchiveClass::Meta
        ]
    );

    let states = archive.validate();
    assert_eq!(states.len(), 3);

    let event = &states[0];
    assert_eq!(event.file_name, "event.csv");
    assert!(event.is_valid());

    let occurrence = &states[1];
    assert!(!occurrence.is_valid());
    // One duplicate header, one unknown header, one missing required value.
    assert_eq!(occurrence.header_errors.len(), 2);
    assert_eq!(occurrence.row_errors.len(), 1);
    assert_eq!(occurrence.row_errors[0].row, 3);

    let meta = &states[2];
    assert_eq!(meta.file_name, "meta.xml");
    assert!(meta.is_valid());

    Ok(())
}

#[test]
fn test_media_type_check_can_be_disabled_archive_wide() -> Result<()> {
    let dir = tempfile::tempdir()?;
    // An unknown extension leaves the file without a declared media type.
    std::fs::write(
        dir.path().join("event.data"),
        "eventID,eventDate\nevt-1,2024-05-01\ntrailer,row\n",
    )?;

    let mut file = CsvFile::from_path(&dir.path().join("event.data"))?;
    assert_eq!(file.media_type(), None);

    let strict = ArchiveClass::Event.checks();
    let state = run_checks(&mut file, &strict);
    assert!(!state.is_valid());
    assert_eq!(state.file_errors.len(), 1);

    let relaxed =
        ArchiveClass::Event.checks_with(&ValidationConfig::default().without_media_type_check());
    let mut file = CsvFile::from_path(&dir.path().join("event.data"))?;
    let state = run_checks(&mut file, &relaxed);
    assert!(state.is_valid());

    Ok(())
}

#[test]
fn test_single_file_flow_detects_class_from_name() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("measurementorfact.csv");
    std::fs::write(
        &path,
        "measurementID,measurementType,measurementValue\n\
         m-1,wingspan,21.5\n\
         trailer,row,x\n",
    )?;

    let class = ArchiveClass::from_path(&path).expect("class should be detected");
    assert_eq!(class, ArchiveClass::MeasurementOrFact);

    let mut file = CsvFile::from_path(&path)?;
    let state = run_checks(&mut file, &class.checks());
    assert!(state.is_valid());

    Ok(())
}

#[test]
fn test_archive_slots_are_independent() -> Result<()> {
    // A broken slot never contaminates the state of another slot.
    let mut archive = DwcArchive::new();
    archive.insert(
        ArchiveClass::Event,
        CsvFile::new("event.csv", Some("text/csv".to_string()), Vec::new()),
    );
    archive.insert(
        ArchiveClass::ResourceRelationship,
        CsvFile::new(
            "resourcerelationship.csv",
            Some("text/csv".to_string()),
            b"resourceRelationshipID,resourceID,relatedResourceID,relationshipOfResource\n\
              rr-1,occ-1,occ-2,predatorOf\n\
              trailer,row,x,y\n"
                .to_vec(),
        ),
    );

    let states = archive.validate();
    assert_eq!(states.len(), 2);
    assert!(!states[0].is_valid());
    assert!(states[1].is_valid());

    Ok(())
}
