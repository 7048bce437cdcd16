//! Label input files.

use std::path::Path;

/// Reads labels from the first column of a CSV or plain-text file.
///
/// A first row whose first column is `label` (any case) is a header and is
/// skipped. Blank labels are ignored. Plain-text files work as one-column
/// CSV, so labels containing commas must be quoted.
pub fn read_labels(path: &Path) -> csv::Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut labels = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let Some(label) = record.get(0) else {
            continue;
        };
        if index == 0 && label.trim().eq_ignore_ascii_case("label") {
            continue;
        }
        if !label.trim().is_empty() {
            labels.push(label.to_string());
        }
    }
    Ok(labels)
}
