//! Shared vocabulary for the classifier, the rewriter and the driver.
//!
//! Every table of literal text the tool matches or inserts lives here so the
//! crates that read it (`sieve`) and the crates that write it (`splice`) can
//! never drift apart.

use std::path::{Path, PathBuf};

/// Substrings whose presence means the class already carries generated
/// accessors. A file containing any of them is never touched.
pub const MARKER_ANNOTATIONS: &[&str] = &["@Data", "@Getter", "@Setter"];

/// Substrings that flag a persistence-mapped record.
pub const ENTITY_MARKERS: &[&str] = &["@Entity", "@Table"];

/// Base-name fragments (case-sensitive) that flag a request/response DTO.
pub const DTO_NAME_MARKERS: &[&str] = &["Request", "Response"];

/// Content fragment that flags a payload DTO.
pub const DTO_TEXT_MARKER: &str = "Payload";

/// Path fragment (matched against the lower-cased path) that flags a payload DTO.
pub const DTO_PATH_MARKER: &str = "payload";

/// Present when the generation library is already imported.
pub const IMPORT_MARKER: &str = "import lombok";

/// Import lines inserted after the package statement, in order.
pub const IMPORT_LINES: &[&str] = &[
    "import lombok.AllArgsConstructor;",
    "import lombok.Builder;",
    "import lombok.Data;",
    "import lombok.NoArgsConstructor;",
];

/// Annotations placed on every eligible class, in order.
pub const CORE_ANNOTATIONS: &[&str] = &["@Data", "@NoArgsConstructor", "@AllArgsConstructor"];

/// Annotation appended after the core set for entity-like classes only.
pub const BUILDER_ANNOTATION: &str = "@Builder";

/// File suffix of the sources the driver processes.
pub const SOURCE_SUFFIX: &str = ".java";

/// One source file, read once and discarded after processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    pub path: PathBuf,
    pub text: String,
}

impl SourceUnit {
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Flags derived from a unit's path and text. Never persisted.
///
/// When `has_marker_annotations` is set the classifier stops early and the
/// other two flags stay `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Classification {
    pub has_marker_annotations: bool,
    pub looks_like_entity: bool,
    pub looks_like_data_object: bool,
}

impl Classification {
    /// Classification of a unit that already carries marker annotations.
    pub fn already_annotated() -> Self {
        Self {
            has_marker_annotations: true,
            ..Self::default()
        }
    }

    pub fn is_eligible(&self) -> bool {
        !self.has_marker_annotations && (self.looks_like_entity || self.looks_like_data_object)
    }

    pub fn verdict(&self) -> Verdict {
        if self.has_marker_annotations {
            Verdict::AlreadyAnnotated
        } else if self.is_eligible() {
            Verdict::Eligible
        } else {
            Verdict::NotEligible
        }
    }
}

/// The classifier's decision for one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Marker annotations present: skip, the unit is left byte-identical.
    AlreadyAnnotated,
    /// No entity or DTO markers: skip.
    NotEligible,
    /// Hand the unit to the rewriter.
    Eligible,
}

/// Returns `true` if `path` names a file the driver should process.
pub fn is_source_path(path: &Path) -> bool {
    path.to_string_lossy().ends_with(SOURCE_SUFFIX)
}
