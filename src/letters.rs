use crate::config;
use crate::Error;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// value, letters
type LetterInfo = (u32, &'static str);

/// Letter values of the english scrabble tile set.
const ENGLISH: &[LetterInfo] = &[
    (1, "aeilnorstu"),
    (2, "dg"),
    (3, "bcmp"),
    (4, "fhvwy"),
    (5, "k"),
    (8, "jx"),
    (10, "qz"),
];

/// A group of letters that share the same value, as found in the letter config:
/// `{"value": 1, "letters": ["a", "e"]}`.
/// Values are points, so a negative value is rejected when parsing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LetterGroup {
    pub value: u32,
    #[serde(default)]
    pub letters: Vec<String>,
}

/// Lookup table with the value of each letter.
///
/// Letters are case insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterValues {
    values: HashMap<String, u32>,
}

impl Default for LetterValues {
    /// The values of the english scrabble tile set.
    fn default() -> Self {
        let values = ENGLISH
            .iter()
            .flat_map(|&(value, letters)| letters.chars().map(move |ch| (ch.to_string(), value)))
            .collect();
        LetterValues { values }
    }
}

impl LetterValues {
    /// Build the table from a list of letter groups.
    /// If a letter occurs more than once, the last value wins.
    ///
    /// ## Examples
    /// ```
    /// use scrabble_scores::{LetterGroup, LetterValues};
    /// let groups = vec![
    ///     LetterGroup { value: 1, letters: vec!["a".into(), "N".into()] },
    ///     LetterGroup { value: 4, letters: vec!["y".into()] },
    /// ];
    /// let values = LetterValues::from_groups(&groups);
    /// assert_eq!(values.score_of('n')?, 1);
    /// assert_eq!(values.score_of('Y')?, 4);
    /// # Ok::<(), scrabble_scores::Error>(())
    /// ```
    pub fn from_groups(groups: &[LetterGroup]) -> LetterValues {
        let mut values = HashMap::new();
        for group in groups {
            for letter in &group.letters {
                values.insert(letter.to_lowercase(), group.value);
            }
        }
        LetterValues { values }
    }

    /// Read the table from a json `file` with a list of letter groups.
    /// ## Errors
    /// If the file can not be read or does not contain a list of letter groups.
    pub fn from_file<P: AsRef<Path>>(file: P) -> Result<LetterValues, Error> {
        let groups: Vec<LetterGroup> = config::read_json(&file)?;
        let values = LetterValues::from_groups(&groups);
        info!(
            path = %file.as_ref().display(),
            letters = values.len(),
            "loaded letter values"
        );
        Ok(values)
    }

    /// Return the value of `letter`.
    /// ## Errors
    /// [`Error::UnknownLetter`] if the letter is not in the table.
    pub fn score_of(&self, letter: char) -> Result<u32, Error> {
        let key: String = letter.to_lowercase().collect();
        self.values
            .get(&key)
            .copied()
            .ok_or(Error::UnknownLetter(letter))
    }

    /// Check if `letter` has a value.
    pub fn contains(&self, letter: char) -> bool {
        self.score_of(letter).is_ok()
    }

    /// Number of letters in the table
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
