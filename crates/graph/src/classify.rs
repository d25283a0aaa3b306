/// Document categories recognized by the visualization layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocType {
    /// Generic document, the fallback for anything unrecognized.
    Document,
    /// Scripted analysis plan (`.r`).
    Plan,
    /// Model definition (`.mdl`).
    Model,
    /// Tabular dataset (`.csv`).
    Dataset,
    /// Estimation output listing (`.lst`).
    Output,
}

impl DocType {
    /// Classify a path-like name by its suffix. First match wins,
    /// comparison is exact; unmatched names fall through to
    /// [`DocType::Document`].
    pub fn of(name: &str) -> Self {
        if name.ends_with(".r") {
            DocType::Plan
        } else if name.ends_with(".mdl") {
            DocType::Model
        } else if name.ends_with(".csv") {
            DocType::Dataset
        } else if name.ends_with(".lst") {
            DocType::Output
        } else {
            DocType::Document
        }
    }

    /// Fixed group code for this category.
    pub const fn group(self) -> u32 {
        match self {
            DocType::Document => 0,
            DocType::Plan => 1,
            DocType::Model => 2,
            DocType::Dataset => 3,
            DocType::Output => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_suffixes_map_to_their_category() {
        assert_eq!(DocType::of("foo.r"), DocType::Plan);
        assert_eq!(DocType::of("foo.mdl"), DocType::Model);
        assert_eq!(DocType::of("foo.csv"), DocType::Dataset);
        assert_eq!(DocType::of("foo.lst"), DocType::Output);
    }

    #[test]
    fn everything_else_is_a_generic_document() {
        assert_eq!(DocType::of("foo.txt"), DocType::Document);
        assert_eq!(DocType::of("noext"), DocType::Document);
        assert_eq!(DocType::of(""), DocType::Document);
        // Suffix comparison is exact, no case folding.
        assert_eq!(DocType::of("FOO.CSV"), DocType::Document);
    }

    #[test]
    fn group_codes_are_stable() {
        assert_eq!(DocType::Document.group(), 0);
        assert_eq!(DocType::Plan.group(), 1);
        assert_eq!(DocType::Model.group(), 2);
        assert_eq!(DocType::Dataset.group(), 3);
        assert_eq!(DocType::Output.group(), 4);
    }
}
