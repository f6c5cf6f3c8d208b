pub mod label_table;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Species {
    Cat,
    Dog,
    Goldfish,
    Hamster,
    Turtle,
    Parrot,
    Snake,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    #[error("class label '{0}' has no display mapping")]
    Unknown(String),
    #[error("class label '{0}' appears more than once in the model vocabulary")]
    Duplicate(String),
    #[error("model vocabulary has {actual} classes, expected {expected}")]
    VocabSize { expected: usize, actual: usize },
}

impl Species {
    pub const ALL: [Species; 7] = [
        Species::Cat,
        Species::Dog,
        Species::Goldfish,
        Species::Hamster,
        Species::Turtle,
        Species::Parrot,
        Species::Snake,
    ];

    pub fn canonical_name(self) -> &'static str {
        match self {
            Species::Cat => "cat",
            Species::Dog => "dog",
            Species::Goldfish => "goldfish",
            Species::Hamster => "hamster",
            Species::Turtle => "turtle",
            Species::Parrot => "parrot",
            Species::Snake => "snake",
        }
    }

    /// Traditional Chinese name followed by the English name in parentheses.
    pub fn display_label(self) -> &'static str {
        match self {
            Species::Cat => "貓 (Cat)",
            Species::Dog => "狗 (Dog)",
            Species::Goldfish => "金魚 (Goldfish)",
            Species::Hamster => "倉鼠 (Hamster)",
            Species::Turtle => "烏龜 (Turtle)",
            Species::Parrot => "鸚鵡 (Parrot)",
            Species::Snake => "蛇 (Snake)",
        }
    }

    pub fn from_canonical(name: &str) -> Result<Species, LabelError> {
        let name = name.trim();
        Species::ALL
            .into_iter()
            .find(|species| species.canonical_name() == name)
            .ok_or_else(|| LabelError::Unknown(name.to_string()))
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_species_has_one_distinct_display_label() {
        let labels: HashSet<&str> = Species::ALL.iter().map(|s| s.display_label()).collect();
        assert_eq!(labels.len(), 7);

        let names: HashSet<&str> = Species::ALL.iter().map(|s| s.canonical_name()).collect();
        assert_eq!(names.len(), 7);
    }

    #[test]
    fn test_display_labels_are_bilingual() {
        for species in Species::ALL {
            let label = species.display_label();
            assert!(label.contains('('), "{label}");
            assert!(!label.is_ascii(), "{label} is missing the Chinese name");
        }
        assert_eq!(Species::Cat.display_label(), "貓 (Cat)");
        assert_eq!(Species::Snake.to_string(), "蛇 (Snake)");
    }

    #[test]
    fn test_from_canonical_round_trips_known_names() {
        for name in ["cat", "dog", "goldfish", "hamster", "turtle", "parrot", "snake"] {
            let species = Species::from_canonical(name).unwrap();
            assert_eq!(species.canonical_name(), name);
        }
        assert_eq!(Species::from_canonical(" dog\n"), Ok(Species::Dog));
    }

    #[test]
    fn test_from_canonical_rejects_unknown_names() {
        assert_eq!(
            Species::from_canonical("rabbit"),
            Err(LabelError::Unknown("rabbit".to_string()))
        );
        assert!(Species::from_canonical("Cat").is_err());
        assert!(Species::from_canonical("").is_err());
    }
}
