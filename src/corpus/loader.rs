//! Common Voice manifest loader.
//!
//! Reads a `validated.tsv` manifest (tab-separated, one header row) and
//! yields [`CorpusRecord`]s ready for [`Catalog::build`].  The relevant
//! columns are `path` (column 1, the clip filename) and `sentence`
//! (column 3); clip filenames are joined onto a configured clips
//! directory.
//!
//! Malformed rows are skipped with a debug log rather than failing the
//! whole load — a single bad line in a 100k-row manifest should not
//! take the quiz down.
//!
//! [`Catalog::build`]: super::Catalog::build

use std::path::Path;

use thiserror::Error;

use super::CorpusRecord;

// ---------------------------------------------------------------------------
// CorpusError
// ---------------------------------------------------------------------------

/// Errors from loading the corpus manifest.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// The manifest file could not be read at all.
    #[error("failed to read corpus manifest {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// ---------------------------------------------------------------------------
// Manifest columns
// ---------------------------------------------------------------------------

/// Column index of the clip filename in `validated.tsv`.
const COL_PATH: usize = 1;
/// Column index of the transcript sentence in `validated.tsv`.
const COL_SENTENCE: usize = 3;

// ---------------------------------------------------------------------------
// load_manifest
// ---------------------------------------------------------------------------

/// Load corpus records from the TSV manifest at `manifest`, resolving
/// clip filenames against `clips_dir`.
///
/// # Errors
///
/// [`CorpusError::Io`] when the manifest cannot be read.  Individual
/// malformed rows (too few columns, empty sentence) are skipped, not
/// errors.
pub fn load_manifest(manifest: &Path, clips_dir: &Path) -> Result<Vec<CorpusRecord>, CorpusError> {
    let content = std::fs::read_to_string(manifest).map_err(|source| CorpusError::Io {
        path: manifest.display().to_string(),
        source,
    })?;

    let records = parse_manifest(&content, clips_dir);
    log::info!(
        "Loaded {} corpus records from {}",
        records.len(),
        manifest.display()
    );
    Ok(records)
}

/// Parse manifest text (header row + data rows) into records.
///
/// Split out from [`load_manifest`] so tests can feed literal TSV
/// without touching the filesystem.
pub fn parse_manifest(content: &str, clips_dir: &Path) -> Vec<CorpusRecord> {
    let mut records = Vec::new();

    for (line_no, line) in content.lines().enumerate() {
        if line_no == 0 {
            continue; // header
        }
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() <= COL_SENTENCE {
            log::debug!("skipping manifest line {}: too few columns", line_no + 1);
            continue;
        }

        let clip_name = fields[COL_PATH].trim();
        let sentence = fields[COL_SENTENCE].trim();
        if clip_name.is_empty() || sentence.is_empty() {
            log::debug!("skipping manifest line {}: empty field", line_no + 1);
            continue;
        }

        records.push(CorpusRecord {
            clip: clips_dir.join(clip_name),
            sentence: sentence.to_string(),
        });
    }

    records
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const HEADER: &str = "client_id\tpath\tsentence_id\tsentence\tup_votes";

    fn tsv(rows: &[&str]) -> String {
        let mut s = String::from(HEADER);
        for row in rows {
            s.push('\n');
            s.push_str(row);
        }
        s
    }

    #[test]
    fn parses_path_and_sentence_columns() {
        let content = tsv(&["abc\tclip_001.mp3\ts1\tsaya suka makan\t2"]);
        let records = parse_manifest(&content, Path::new("clips"));

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].clip, PathBuf::from("clips/clip_001.mp3"));
        assert_eq!(records[0].sentence, "saya suka makan");
    }

    #[test]
    fn header_row_is_skipped() {
        let records = parse_manifest(HEADER, Path::new("clips"));
        assert!(records.is_empty());
    }

    #[test]
    fn rows_with_too_few_columns_are_skipped() {
        let content = tsv(&[
            "abc\tclip_001.mp3",
            "def\tclip_002.mp3\ts2\tsaya pergi ke sekolah\t1",
        ]);
        let records = parse_manifest(&content, Path::new("clips"));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].sentence, "saya pergi ke sekolah");
    }

    #[test]
    fn rows_with_empty_sentence_are_skipped() {
        let content = tsv(&["abc\tclip_001.mp3\ts1\t\t2"]);
        assert!(parse_manifest(&content, Path::new("clips")).is_empty());
    }

    #[test]
    fn empty_manifest_yields_no_records() {
        assert!(parse_manifest("", Path::new("clips")).is_empty());
    }

    #[test]
    fn load_missing_manifest_is_io_error() {
        let err = load_manifest(Path::new("/nonexistent/validated.tsv"), Path::new("clips"))
            .unwrap_err();
        assert!(matches!(err, CorpusError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/validated.tsv"));
    }

    #[test]
    fn load_reads_from_disk() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("validated.tsv");
        std::fs::write(&path, tsv(&["abc\tc.mp3\ts1\tapa kabar hari ini\t0"]))
            .expect("write");

        let records = load_manifest(&path, Path::new("/data/clips")).expect("load");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].clip, PathBuf::from("/data/clips/c.mp3"));
    }
}
