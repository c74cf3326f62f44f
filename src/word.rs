use crate::{Error, LetterValues, Owner, Tile};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A word on the board: a run of adjacent tiles in one direction.
///
/// Two words are equal when they have the same letters, wherever they are
/// on the board. A set of words therefore holds each spelling only once.
#[derive(Debug, Clone)]
pub struct Word<'a> {
    tiles: Vec<&'a Tile>,
}

impl<'a> Word<'a> {
    /// Create a word from tiles in reading order
    pub fn new(tiles: Vec<&'a Tile>) -> Word<'a> {
        Word { tiles }
    }

    pub fn tiles(&self) -> &[&'a Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The letters of the word
    pub fn text(&self) -> String {
        self.tiles.iter().map(|tile| tile.letter()).collect()
    }

    /// The sum of the letter values.
    /// ## Errors
    /// - [`Error::UnknownLetter`] if a letter is missing from `values`,
    /// - [`Error::ScoreOverflow`] if the sum does not fit in a `u32`.
    pub fn score(&self, values: &LetterValues) -> Result<u32, Error> {
        self.tiles.iter().try_fold(0u32, |total, tile| {
            total
                .checked_add(values.score_of(tile.letter())?)
                .ok_or_else(|| Error::ScoreOverflow(self.text()))
        })
    }

    /// The first tile played by exactly one player decides the owner of the word.
    /// If every tile has zero or several players the word is unallocated.
    /// ## Examples
    /// ```
    /// use scrabble_scores::{Owner, Tile, Word};
    /// let tiles = vec![
    ///     Tile::new(0, 0, "a", vec!["1".into(), "2".into()])?,
    ///     Tile::new(0, 1, "n", vec!["2".into()])?,
    /// ];
    /// let word = Word::new(tiles.iter().collect());
    /// assert_eq!(word.owner(), Owner::from("2"));
    /// # Ok::<(), scrabble_scores::Error>(())
    /// ```
    pub fn owner(&self) -> Owner {
        for tile in &self.tiles {
            if let [player] = tile.players() {
                return Owner::Player(player.clone());
            }
        }
        Owner::Unallocated
    }
}

impl PartialEq for Word<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.text() == other.text()
    }
}

impl Eq for Word<'_> {}

impl Hash for Word<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text().hash(state);
    }
}

impl fmt::Display for Word<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}
