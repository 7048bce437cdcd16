use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono_tz::Tz;
use mrc_classify::{Classifier, ClassifierConfig};
use mrc_cli::input::read_labels;
use mrc_cli::logging::redact_value;
use mrc_cli::report::{LabelResult, cascade_table, classification_table, render_json};
use mrc_metadata::{build_document, load_header, parse_timezone, write_document};
use tracing::{debug, info, info_span};

use crate::cli::{ClassifyArgs, MetadataArgs, OutputFormatArg};

fn load_config(path: Option<&Path>) -> Result<ClassifierConfig> {
    match path {
        Some(path) => ClassifierConfig::load(path).context("load classifier config"),
        None => Ok(ClassifierConfig::default()),
    }
}

pub fn run_classify(args: &ClassifyArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let classifier = Classifier::from_config(&config);
    debug!(overrides = classifier.override_count(), "classifier ready");

    let mut labels = args.labels.clone();
    if let Some(path) = &args.input {
        let from_file = read_labels(path)
            .with_context(|| format!("read labels from {}", path.display()))?;
        info!(count = from_file.len(), path = %path.display(), "read labels");
        labels.extend(from_file);
    }
    if labels.is_empty() {
        bail!("no labels given; pass LABEL arguments or --input FILE");
    }

    let results: Vec<LabelResult> = labels
        .into_iter()
        .map(|label| {
            let classification = classifier.classify(label.as_str());
            LabelResult {
                label,
                classification,
            }
        })
        .collect();

    match args.format {
        OutputFormatArg::Json => println!("{}", render_json(&results)?),
        OutputFormatArg::Table => println!("{}", classification_table(&results)),
    }
    Ok(())
}

pub fn run_metadata(args: &MetadataArgs) -> Result<PathBuf> {
    let span = info_span!("metadata", header = %args.header.display());
    let _guard = span.enter();

    let config = load_config(args.config.as_deref())?;
    let timezone: Option<Tz> = args
        .timezone
        .as_deref()
        .or(config.timezone.as_deref())
        .map(parse_timezone)
        .transpose()
        .context("resolve instrument timezone")?;
    let classifier = Classifier::from_config(&config);

    let header = load_header(&args.header).context("load header")?;
    let document = build_document(&header, &classifier, timezone);
    if let Some(lastname) = &document.session.subject.lastname {
        debug!(lastname = redact_value(lastname), "subject name parsed");
    }

    let output_dir = args.output_dir.clone().unwrap_or_else(|| {
        args.header
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default()
    });
    let path = write_document(&document, &output_dir).context("write metadata")?;
    Ok(path)
}

pub fn run_rules() {
    println!("{}", cascade_table());
}
