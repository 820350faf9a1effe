//! Classifier: decides whether a Java source unit should be annotated.
//!
//! Three substring checks over the unit's path and text, evaluated in a fixed
//! order:
//! 1. marker annotations (`@Data`, `@Getter`, `@Setter`): short-circuits to
//!    "already annotated";
//! 2. entity markers (`@Entity`, `@Table`);
//! 3. DTO markers: base name contains `Request`/`Response`, text contains
//!    `Payload`, or the lower-cased path contains `payload`.
//!
//! The marker sets are compiled into Aho-Corasick automatons once per
//! [`Sieve`], so each check is a single pass over the text.

use aho_corasick::AhoCorasick;
use common::{
    Classification, DTO_NAME_MARKERS, DTO_PATH_MARKER, DTO_TEXT_MARKER, ENTITY_MARKERS,
    MARKER_ANNOTATIONS,
};
use std::path::Path;

/// Errors from building the classifier.
#[derive(Debug, thiserror::Error)]
pub enum SieveError {
    #[error("Automaton build failed: {0}")]
    Automaton(#[from] aho_corasick::BuildError),
}

/// Pure classifier over `(path, text)`.
///
/// Holds no per-file state; one instance serves a whole run.
pub struct Sieve {
    markers: AhoCorasick,
    entity: AhoCorasick,
    dto_name: AhoCorasick,
}

impl Sieve {
    /// Compiles the fixed marker tables.
    ///
    /// # Examples
    /// ```
    /// # use sieve::Sieve;
    /// # use std::path::Path;
    /// let sieve = Sieve::new().unwrap();
    /// let c = sieve.classify(Path::new("Foo.java"), "@Entity\npublic class Foo {}\n");
    /// assert!(c.looks_like_entity);
    /// ```
    pub fn new() -> Result<Self, SieveError> {
        Ok(Self {
            markers: AhoCorasick::new(MARKER_ANNOTATIONS)?,
            entity: AhoCorasick::new(ENTITY_MARKERS)?,
            dto_name: AhoCorasick::new(DTO_NAME_MARKERS)?,
        })
    }

    /// Classifies one unit.
    pub fn classify(&self, path: &Path, text: &str) -> Classification {
        if self.has_marker_annotations(text) {
            return Classification::already_annotated();
        }
        Classification {
            has_marker_annotations: false,
            looks_like_entity: self.entity.is_match(text),
            looks_like_data_object: self.looks_like_data_object(path, text),
        }
    }

    pub fn has_marker_annotations(&self, text: &str) -> bool {
        self.markers.is_match(text)
    }

    fn looks_like_data_object(&self, path: &Path, text: &str) -> bool {
        let named_dto = path
            .file_name()
            .is_some_and(|name| self.dto_name.is_match(&*name.to_string_lossy()));

        named_dto
            || text.contains(DTO_TEXT_MARKER)
            || path
                .to_string_lossy()
                .to_lowercase()
                .contains(DTO_PATH_MARKER)
    }
}
