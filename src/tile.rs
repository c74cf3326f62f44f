use crate::Error;
use std::fmt;

/// Identifier of a player.
pub type Player = String;

/// A letter on the board, with the players that may have played it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    x: usize,
    y: usize,
    letter: char,
    players: Vec<Player>,
}

impl Tile {
    /// Create a tile at (zero based) position `x`, `y`.
    /// The letter is stored in lowercase; `players` are kept as given.
    /// ## Errors
    /// - [`Error::InvalidCoordinate`] if `x` or `y` is negative or does not fit in a `usize`,
    /// - [`Error::InvalidLetter`] if `letter` is not a single letter a..z.
    /// ## Examples
    /// ```
    /// use scrabble_scores::Tile;
    /// let tile = Tile::new(0, 2, "T", vec!["1".into()])?;
    /// assert_eq!(tile.letter(), 't');
    /// assert_eq!((tile.x(), tile.y()), (0, 2));
    /// # Ok::<(), scrabble_scores::Error>(())
    /// ```
    pub fn new(x: i64, y: i64, letter: &str, players: Vec<Player>) -> Result<Tile, Error> {
        let (x, y) = match (usize::try_from(x), usize::try_from(y)) {
            (Ok(x), Ok(y)) => (x, y),
            _ => return Err(Error::InvalidCoordinate { x, y }),
        };
        let mut chars = letter.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(ch), None) if ch.is_ascii_alphabetic() => ch.to_ascii_lowercase(),
            _ => return Err(Error::InvalidLetter(String::from(letter))),
        };
        Ok(Tile {
            x,
            y,
            letter,
            players,
        })
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    /// The players that may have played this tile
    pub fn players(&self) -> &[Player] {
        &self.players
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Tile({}, {}, letter='{}', players={:?})",
            self.x, self.y, self.letter, self.players
        )
    }
}
