//! Session, subject and acquisition metadata built from an MR header.
//!
//! The header is a flat JSON object of field name to value. The document
//! embeds the label classification produced by [`mrc_classify`].

pub mod age;
pub mod document;
pub mod error;
pub mod header;
pub mod subject;
pub mod timestamp;

pub use age::parse_patient_age;
pub use document::{METADATA_FILE_NAME, build_document, write_document};
pub use error::{MetadataError, Result};
pub use header::{
    EXCLUDED_FIELDS, Header, MAX_STRING_LEN, field_str, has_pixel_data, load_header,
    normalize_header, normalize_value,
};
pub use subject::{PersonName, sex_string, subject_from_header};
pub use timestamp::{
    acquisition_timestamp, localize, parse_date_time, parse_timezone, session_timestamp,
};
