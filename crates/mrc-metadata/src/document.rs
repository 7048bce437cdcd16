//! Assembly and output of the per-acquisition metadata document.

use std::fs;
use std::path::{Path, PathBuf};

use chrono_tz::Tz;
use mrc_classify::Classifier;
use mrc_model::{
    Acquisition, Classification, ClassificationKey, Intent, MetadataDocument, Session,
};
use tracing::{debug, info};

use crate::error::{MetadataError, Result};
use crate::header::{Header, field_str, has_pixel_data, normalize_header};
use crate::subject::subject_from_header;
use crate::timestamp::{acquisition_timestamp, session_timestamp};

pub const METADATA_FILE_NAME: &str = ".metadata.json";

/// Builds the metadata document for one header.
///
/// The classifier runs on `SeriesDescription`. A header without pixel data
/// is always classified as `Non-Image`, whatever the label says.
pub fn build_document(
    header: &Header,
    classifier: &Classifier,
    timezone: Option<Tz>,
) -> MetadataDocument {
    let label = field_str(header, "SeriesDescription");

    let mut classification = classifier.classify(label.as_deref());
    if !has_pixel_data(header) {
        debug!("no pixel data; classifying as Non-Image");
        mark_non_image(&mut classification);
    }

    MetadataDocument {
        session: Session {
            timestamp: session_timestamp(header, timezone),
            operator: field_str(header, "OperatorsName"),
            subject: subject_from_header(header),
        },
        acquisition: Acquisition {
            instrument: field_str(header, "Modality"),
            label,
            timestamp: acquisition_timestamp(header, timezone),
            classification,
            metadata: normalize_header(header),
        },
    }
}

fn mark_non_image(classification: &mut Classification) {
    classification.set(ClassificationKey::Intent, [Intent::NonImage.as_str()]);
}

/// Writes `document` as `.metadata.json` inside `dir`.
pub fn write_document(document: &MetadataDocument, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(|source| MetadataError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    let path = dir.join(METADATA_FILE_NAME);
    let json = serde_json::to_string_pretty(document)?;
    fs::write(&path, json).map_err(|source| MetadataError::Io {
        path: path.clone(),
        source,
    })?;
    info!(path = %path.display(), "wrote metadata");
    Ok(path)
}
