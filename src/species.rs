//! Fixed species enumeration for classifier outputs.

use std::fmt;

/// The three iris species the classifier distinguishes, in training order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Species {
    Setosa,
    Versicolor,
    Virginica,
}

/// All species in enumeration (= training) order.
pub const ALL_SPECIES: [Species; 3] = [Species::Setosa, Species::Versicolor, Species::Virginica];

/// Number of classes a classifier artifact must carry.
pub const CLASS_COUNT: usize = ALL_SPECIES.len();

impl Species {
    /// Map a classifier output index to a species.
    pub fn from_index(index: usize) -> Option<Self> {
        ALL_SPECIES.get(index).copied()
    }

    /// Label shown in the UI and stored in the model artifact.
    pub fn label(self) -> &'static str {
        match self {
            Species::Setosa => "Setosa",
            Species::Versicolor => "Versicolor",
            Species::Virginica => "Virginica",
        }
    }

    /// One-line field note shown beneath the probability rows.
    pub fn trait_note(self) -> &'static str {
        match self {
            Species::Setosa => "easiest to identify; large sepals, small petals",
            Species::Versicolor => "intermediate measurements on every axis",
            Species::Virginica => "smaller sepals, the largest petals",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_index_covers_exactly_three_classes() {
        assert_eq!(Species::from_index(0), Some(Species::Setosa));
        assert_eq!(Species::from_index(1), Some(Species::Versicolor));
        assert_eq!(Species::from_index(2), Some(Species::Virginica));
        assert_eq!(Species::from_index(3), None);
    }

    #[test]
    fn labels_follow_enumeration_order() {
        let labels: Vec<&str> = ALL_SPECIES.iter().map(|s| s.label()).collect();
        assert_eq!(labels, ["Setosa", "Versicolor", "Virginica"]);
    }
}
