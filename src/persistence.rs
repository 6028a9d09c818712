// File: src/persistence.rs
use crate::core::lexicon::{Lexicon, LexiconEntry};
use crate::error::Result;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// The on-disk form of a lexicon.
#[derive(Clone, Serialize, Deserialize)]
struct LexiconFile {
    categories: Vec<LexiconEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Bincode,
}

impl Format {
    fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("bin") => Format::Bincode,
            _ => Format::Json,
        }
    }
}

/// Writes the lexicon atomically: the data goes to a temp file in the target
/// directory, which then replaces `path`.
pub fn save_lexicon(lexicon: &Lexicon, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let state = LexiconFile {
        categories: lexicon.entries().to_vec(),
    };

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        match Format::for_path(path) {
            Format::Bincode => bincode::serialize_into(&mut writer, &state)?,
            Format::Json => serde_json::to_writer_pretty(&mut writer, &state)?,
        }
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|e| e.error)?;
    info!("Saved lexicon to {}", path.display());
    Ok(())
}

/// Reads and validates a lexicon. Files ending in `.bin` are bincode
/// snapshots; anything else is parsed as JSON.
pub fn load_lexicon(path: &Path) -> Result<Lexicon> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let state: LexiconFile = match Format::for_path(path) {
        Format::Bincode => bincode::deserialize_from(reader)?,
        Format::Json => serde_json::from_reader(reader)?,
    };

    let lexicon = Lexicon::new(state.categories)?;
    info!(
        "Loaded lexicon from {} ({} categories, {} keywords)",
        path.display(),
        lexicon.categories().len(),
        lexicon.keyword_count()
    );
    Ok(lexicon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::BiasCategory;
    use crate::error::BiasError;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(Format::for_path(Path::new("a/lexicon.bin")), Format::Bincode);
        assert_eq!(Format::for_path(Path::new("lexicon.json")), Format::Json);
        assert_eq!(Format::for_path(Path::new("lexicon")), Format::Json);
    }

    #[test]
    fn test_json_file_is_validated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexicon.json");
        fs::write(
            &path,
            r#"{ "categories": [ { "category": "gender_male", "explanation": "", "keywords": ["strong"] } ] }"#,
        )
        .unwrap();
        assert!(matches!(
            load_lexicon(&path),
            Err(BiasError::MissingExplanation(BiasCategory::GenderMale))
        ));
    }

    #[test]
    fn test_unknown_category_id_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexicon.json");
        fs::write(
            &path,
            r#"{ "categories": [ { "category": "economic", "explanation": "x", "keywords": [] } ] }"#,
        )
        .unwrap();
        assert!(matches!(load_lexicon(&path), Err(BiasError::Serialization(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_lexicon(&dir.path().join("missing.json")),
            Err(BiasError::Io(_))
        ));
    }
}
