//! Rewriter: splices the Lombok import block and class annotations into a
//! unit that the classifier marked eligible.
//!
//! ## Edits
//! 1. Import block: inserted right after the package statement's `;`,
//!    preceded by a blank line, unless the text already imports `lombok`.
//!    No package statement means no imports; this is accepted, not an error.
//! 2. Annotation block: replaces the `\n` before the first public class
//!    header with `\n@Data\n@NoArgsConstructor\n@AllArgsConstructor[\n@Builder]\n`.
//!    `@Builder` only for entity-like units. No header means no annotations,
//!    even if step 1 already edited the text.
//!
//! The contract is textual: the result is not checked for syntactic validity.

pub mod scan;

pub use scan::{find_class_anchor, find_package_terminator};

use common::{Classification, BUILDER_ANNOTATION, CORE_ANNOTATIONS, IMPORT_LINES, IMPORT_MARKER};

/// Result of [`rewrite`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spliced {
    pub text: String,
    /// The import block was inserted.
    pub imports_inserted: bool,
    /// The text already imported the library, so no import block was needed.
    pub imports_present: bool,
    /// The annotation block was inserted.
    pub annotations_inserted: bool,
}

impl Spliced {
    /// `true` if the import block was needed but no package statement was found.
    pub fn missing_package(&self) -> bool {
        !self.imports_present && !self.imports_inserted
    }
}

/// Applies both edits to `text`.
///
/// Callers are expected to have checked `classification.is_eligible()`; the
/// only flag read here is `looks_like_entity`.
pub fn rewrite(text: &str, classification: &Classification) -> Spliced {
    let mut out = text.to_owned();

    let imports_present = text.contains(IMPORT_MARKER);
    let mut imports_inserted = false;
    if !imports_present {
        if let Some(at) = find_package_terminator(&out) {
            out.insert_str(at, &import_block());
            imports_inserted = true;
        }
    }

    let annotations_inserted = match find_class_anchor(&out) {
        Some(at) => {
            out.replace_range(
                at..at + 1,
                &annotation_block(classification.looks_like_entity),
            );
            true
        }
        None => false,
    };

    Spliced {
        text: out,
        imports_inserted,
        imports_present,
        annotations_inserted,
    }
}

/// Blank line followed by the four import lines; no trailing newline.
pub fn import_block() -> String {
    let mut block = String::from("\n");
    for line in IMPORT_LINES {
        block.push('\n');
        block.push_str(line);
    }
    block
}

/// Replacement for the newline before the class header.
pub fn annotation_block(with_builder: bool) -> String {
    let mut block = String::new();
    for annotation in CORE_ANNOTATIONS {
        block.push('\n');
        block.push_str(annotation);
    }
    if with_builder {
        block.push('\n');
        block.push_str(BUILDER_ANNOTATION);
    }
    block.push('\n');
    block
}
