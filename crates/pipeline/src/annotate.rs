//! The Annotator: classify, then rewrite if eligible. No I/O.

use common::{Classification, SourceUnit, Verdict};
use sieve::Sieve;
use splice::Spliced;

/// Decision and rewritten text for one unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotated {
    pub classification: Classification,
    /// Present iff the unit was eligible.
    pub spliced: Option<Spliced>,
}

impl Annotated {
    pub fn verdict(&self) -> Verdict {
        self.classification.verdict()
    }

    /// The rewritten text, or `None` if the unit was skipped or the rewrite
    /// found nothing to change.
    pub fn rewritten<'a>(&'a self, original: &str) -> Option<&'a str> {
        self.spliced
            .as_ref()
            .map(|s| s.text.as_str())
            .filter(|text| *text != original)
    }
}

/// Runs the classifier and, for eligible units, the rewriter.
///
/// # Examples
/// ```
/// # use common::{SourceUnit, Verdict};
/// # use pipeline::annotate;
/// # use sieve::Sieve;
/// let sieve = Sieve::new().unwrap();
/// let unit = SourceUnit::new("Foo.java", "package com.x;\n\npublic class Foo {\n}\n");
/// let annotated = annotate(&sieve, &unit);
/// assert_eq!(annotated.verdict(), Verdict::NotEligible);
/// assert_eq!(annotated.rewritten(&unit.text), None);
/// ```
pub fn annotate(sieve: &Sieve, unit: &SourceUnit) -> Annotated {
    let classification = sieve.classify(unit.path(), &unit.text);
    let spliced = classification
        .is_eligible()
        .then(|| splice::rewrite(&unit.text, &classification));
    Annotated {
        classification,
        spliced,
    }
}
