//! Darwin Core term tables for each archive record class
//!
//! Term names follow the Darwin Core standard (https://dwc.tdwg.org/terms/).
//! Each class carries three tables: the headers a file of that class must
//! have, the full set of headers it may have, and the columns that must hold
//! a value on every data row.

// =============================================================================
// Event Class
// =============================================================================

pub const EVENT_REQUIRED_HEADERS: &[&str] = &["eventID", "eventDate"];

pub const EVENT_KNOWN_HEADERS: &[&str] = &[
    "eventID",
    "parentEventID",
    "eventDate",
    "eventTime",
    "startDayOfYear",
    "endDayOfYear",
    "year",
    "month",
    "day",
    "verbatimEventDate",
    "habitat",
    "samplingProtocol",
    "sampleSizeValue",
    "sampleSizeUnit",
    "samplingEffort",
    "fieldNumber",
    "fieldNotes",
    "eventRemarks",
    "locationID",
    "higherGeography",
    "continent",
    "waterBody",
    "country",
    "countryCode",
    "stateProvince",
    "county",
    "locality",
    "verbatimLocality",
    "minimumElevationInMeters",
    "maximumElevationInMeters",
    "minimumDepthInMeters",
    "maximumDepthInMeters",
    "decimalLatitude",
    "decimalLongitude",
    "geodeticDatum",
    "coordinateUncertaintyInMeters",
    "coordinatePrecision",
    "verbatimCoordinates",
    "verbatimLatitude",
    "verbatimLongitude",
    "verbatimCoordinateSystem",
    "verbatimSRS",
    "georeferencedBy",
    "georeferencedDate",
    "georeferenceProtocol",
    "georeferenceRemarks",
];

pub const EVENT_REQUIRED_FIELDS: &[&str] = &["eventID", "eventDate"];

// =============================================================================
// Occurrence Class
// =============================================================================

pub const OCCURRENCE_REQUIRED_HEADERS: &[&str] =
    &["occurrenceID", "basisOfRecord", "scientificName"];

pub const OCCURRENCE_KNOWN_HEADERS: &[&str] = &[
    "occurrenceID",
    "eventID",
    "basisOfRecord",
    "institutionCode",
    "collectionCode",
    "catalogNumber",
    "recordNumber",
    "recordedBy",
    "individualCount",
    "organismQuantity",
    "organismQuantityType",
    "sex",
    "lifeStage",
    "reproductiveCondition",
    "behavior",
    "establishmentMeans",
    "occurrenceStatus",
    "preparations",
    "associatedMedia",
    "associatedReferences",
    "associatedSequences",
    "associatedTaxa",
    "occurrenceRemarks",
    "taxonID",
    "scientificNameID",
    "scientificName",
    "acceptedNameUsage",
    "higherClassification",
    "kingdom",
    "phylum",
    "class",
    "order",
    "family",
    "genus",
    "specificEpithet",
    "infraspecificEpithet",
    "taxonRank",
    "verbatimTaxonRank",
    "scientificNameAuthorship",
    "vernacularName",
    "nomenclaturalCode",
    "taxonomicStatus",
    "identifiedBy",
    "dateIdentified",
    "identificationReferences",
    "identificationRemarks",
    "identificationQualifier",
    "typeStatus",
];

pub const OCCURRENCE_REQUIRED_FIELDS: &[&str] = &["occurrenceID", "basisOfRecord"];

// =============================================================================
// Measurement Or Fact Class
// =============================================================================

pub const MEASUREMENT_OR_FACT_REQUIRED_HEADERS: &[&str] =
    &["measurementID", "measurementType", "measurementValue"];

pub const MEASUREMENT_OR_FACT_KNOWN_HEADERS: &[&str] = &[
    "measurementID",
    "eventID",
    "occurrenceID",
    "measurementType",
    "measurementValue",
    "measurementAccuracy",
    "measurementUnit",
    "measurementDeterminedBy",
    "measurementDeterminedDate",
    "measurementMethod",
    "measurementRemarks",
];

pub const MEASUREMENT_OR_FACT_REQUIRED_FIELDS: &[&str] =
    &["measurementID", "measurementType", "measurementValue"];

// =============================================================================
// Resource Relationship Class
// =============================================================================

pub const RESOURCE_RELATIONSHIP_REQUIRED_HEADERS: &[&str] = &[
    "resourceRelationshipID",
    "resourceID",
    "relatedResourceID",
    "relationshipOfResource",
];

pub const RESOURCE_RELATIONSHIP_KNOWN_HEADERS: &[&str] = &[
    "resourceRelationshipID",
    "resourceID",
    "relatedResourceID",
    "relationshipOfResource",
    "relationshipAccordingTo",
    "relationshipEstablishedDate",
    "relationshipRemarks",
];

pub const RESOURCE_RELATIONSHIP_REQUIRED_FIELDS: &[&str] = &[
    "resourceRelationshipID",
    "resourceID",
    "relatedResourceID",
    "relationshipOfResource",
];
