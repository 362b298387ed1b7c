use crate::{Error, Label, Message};
use csv::ReaderBuilder;
use flate2::read::GzDecoder;
use log::{info, warn};
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::Path;

/// Describes the layout of a labeled message file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorpusLoaderConfig {
    pub delimiter: u8,
    pub has_headers: bool,
    /// Whether double quotes delimit fields. Tab-separated SMS dumps contain bare quotes
    /// inside message text and must be read with quoting disabled.
    pub quoting: bool,
    pub label_column: usize,
    pub text_column: usize,
}

/// Reads `(label, text)` rows into an ordered corpus of `Message`s.
///
/// Ids are assigned densely by row order. Labels must be `spam` or `ham`
/// (case-insensitive); the first row with any other label fails the whole load with
/// `Error::Schema`, as does a file without any rows. A row missing its text column
/// becomes an empty message. Non-UTF-8 bytes are replaced rather than rejected.
pub struct CorpusLoader {
    config: CorpusLoaderConfig,
}

impl CorpusLoader {
    pub fn new(config: CorpusLoaderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CorpusLoaderConfig {
        &self.config
    }

    /// Loads a corpus from disk. Paths ending in `.gz` are decompressed on the fly.
    pub fn load_path<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Message>, Error> {
        let path = path.as_ref();
        info!("Loading corpus from {:?}", path);

        let file = BufReader::new(File::open(path)?);

        let is_gzipped = path
            .extension()
            .map_or(false, |extension| extension.eq_ignore_ascii_case("gz"));

        if is_gzipped {
            self.load_reader(GzDecoder::new(file))
        } else {
            self.load_reader(file)
        }
    }

    /// Loads a corpus from an in-memory CSV string.
    pub fn load_str(&self, csv: &str) -> Result<Vec<Message>, Error> {
        self.load_reader(Cursor::new(csv.as_bytes()))
    }

    pub fn load_reader<R: Read>(&self, input: R) -> Result<Vec<Message>, Error> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.config.delimiter)
            .has_headers(self.config.has_headers)
            .quoting(self.config.quoting)
            .flexible(true)
            .from_reader(input);

        let mut messages = Vec::new();

        for record in reader.byte_records() {
            let record = record?;

            let line = record.position().map_or(0, |position| position.line());

            let raw_label = record
                .get(self.config.label_column)
                .map(String::from_utf8_lossy)
                .ok_or_else(|| {
                    Error::Schema(format!(
                        "Line {}: missing label column {}",
                        line, self.config.label_column
                    ))
                })?;

            let label = Label::parse_raw(&raw_label).ok_or_else(|| {
                Error::Schema(format!(
                    "Line {}: unknown label {:?}; expected \"spam\" or \"ham\"",
                    line,
                    raw_label.trim()
                ))
            })?;

            let text = match record.get(self.config.text_column) {
                Some(raw_text) => String::from_utf8_lossy(raw_text),
                None => {
                    warn!("Line {}: missing text column, treating as empty", line);
                    Cow::Borrowed("")
                }
            };

            messages.push(Message::new(messages.len(), label, text.into_owned()));
        }

        if messages.is_empty() {
            return Err(Error::Schema("Corpus contains no messages".to_string()));
        }

        info!("Loaded {} messages", messages.len());

        Ok(messages)
    }
}

impl Default for CorpusLoader {
    fn default() -> Self {
        Self::new(crate::DEFAULT_CORPUS_LOADER_CONFIG)
    }
}
