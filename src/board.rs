use crate::config;
use crate::tile::Player;
use crate::{Error, LetterValues, Scores, Tile, Word};

#[cfg(feature = "rayon")]
use rayon::prelude::*;
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use tracing::{debug, warn};

/// Default board dimension
pub const N: usize = 15;

/// Largest supported board dimension
pub const MAX_DIMENSION: usize = 1024;

/// A tile as found in the board config: `[x, y, letter, players]`, with
/// one based `x` and `y`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Placement(pub i64, pub i64, pub String, pub Vec<Player>);

impl Placement {
    pub fn new(x: i64, y: i64, letter: &str, players: &[&str]) -> Placement {
        let players = players.iter().map(|&p| String::from(p)).collect();
        Placement(x, y, String::from(letter), players)
    }
}

/// Direction in which a word is read
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    /// Along a row: `y` increases
    Right,
    /// Along a column: `x` increases
    Down,
}

impl Direction {
    fn step(self) -> (usize, usize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
        }
    }
}

/// Display the board as `dimension` lines, one for each `x`.
/// Empty squares show as ".".
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = (0..self.dimension)
            .map(|x| {
                (0..self.dimension)
                    .map(|y| self.tile_at(x, y).map_or('.', Tile::letter))
                    .collect::<String>()
            })
            .collect::<Vec<String>>()
            .join("\n");
        write!(f, "{}", repr)
    }
}

/// The state of a scrabble board: a square grid with the played tiles.
///
/// Each tile records the players that may have played it. The board finds
/// the words on it, and attributes the score of each word to its owner.
#[derive(Debug, Clone)]
pub struct Board {
    dimension: usize,
    /// Index in `tiles` for each square, row by row
    grid: Vec<Option<usize>>,
    tiles: Vec<Tile>,
}

impl Board {
    /// Create a board of 15x15 squares with the tiles in `placements`.
    ///
    /// ## Examples
    /// ```
    /// use scrabble_scores::{Board, LetterValues, Placement};
    /// let board = Board::new(&[
    ///     Placement::new(1, 1, "a", &["1"]),
    ///     Placement::new(1, 2, "n", &["1"]),
    ///     Placement::new(1, 3, "t", &["1"]),
    /// ])?;
    /// let scores = board.calc_scores(&LetterValues::default())?;
    /// assert_eq!(scores.player("1"), Some(3));
    /// # Ok::<(), scrabble_scores::Error>(())
    /// ```
    /// See also [`with_dimension`](Board::with_dimension).
    pub fn new(placements: &[Placement]) -> Result<Board, Error> {
        Board::with_dimension(placements, N)
    }

    /// Create a board of `dimension` x `dimension` squares with the tiles in `placements`.
    /// The coordinates in `placements` are one based.
    ///
    /// When two tiles are placed on the same square, the last one is used.
    /// ## Errors
    /// - If a tile can not be created, see [`Tile::new`],
    /// - [`Error::TilePlacementError`] if a tile is outside the board,
    /// - [`Error::InvalidDimension`] if `dimension` is larger than [`MAX_DIMENSION`].
    pub fn with_dimension(placements: &[Placement], dimension: usize) -> Result<Board, Error> {
        let squares = dimension
            .checked_mul(dimension)
            .filter(|_| dimension <= MAX_DIMENSION)
            .ok_or(Error::InvalidDimension(dimension))?;
        let mut board = Board {
            dimension,
            grid: vec![None; squares],
            tiles: Vec::with_capacity(placements.len()),
        };
        for Placement(x, y, letter, players) in placements {
            let tile = Tile::new(x.saturating_sub(1), y.saturating_sub(1), letter, players.clone())?;
            board.place(tile)?;
        }
        debug!(dimension, tiles = board.tiles.len(), "created board");
        Ok(board)
    }

    /// Read the board from a json `file` with a list of placements.
    /// ## Errors
    /// If the file can not be read or parsed, or a placement is not valid.
    /// ## Examples
    /// ```no_run
    /// use scrabble_scores::Board;
    /// let board = Board::from_file("board.json")?;
    /// println!("{}", board);
    /// # Ok::<(), scrabble_scores::Error>(())
    /// ```
    pub fn from_file<P: AsRef<Path>>(file: P) -> Result<Board, Error> {
        Board::from_file_with_dimension(file, N)
    }

    /// Read the board from a json `file`, for a board of `dimension` x `dimension` squares.
    /// ## Errors
    /// If the file can not be read or parsed, or a placement is not valid.
    pub fn from_file_with_dimension<P: AsRef<Path>>(
        file: P,
        dimension: usize,
    ) -> Result<Board, Error> {
        let placements: Vec<Placement> = config::read_json(file)?;
        Board::with_dimension(&placements, dimension)
    }

    fn place(&mut self, tile: Tile) -> Result<(), Error> {
        let (x, y) = (tile.x(), tile.y());
        if x >= self.dimension || y >= self.dimension {
            return Err(Error::TilePlacementError {
                x,
                y,
                dimension: self.dimension,
            });
        }
        let index = x * self.dimension + y;
        if let Some(previous) = self.grid[index].replace(self.tiles.len()) {
            warn!(
                x,
                y,
                replaced = %self.tiles[previous],
                "square already occupied, tile is replaced"
            );
        }
        self.tiles.push(tile);
        Ok(())
    }

    /// Number of squares along each side of the board
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// All tiles in the order they were placed
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Return tile at x, y (zero based), or None if the square is empty or outside the board.
    pub fn tile_at(&self, x: usize, y: usize) -> Option<&Tile> {
        if x < self.dimension && y < self.dimension {
            self.grid[x * self.dimension + y].map(|index| &self.tiles[index])
        } else {
            None
        }
    }

    /// Check if the square at x, y is occupied.
    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        self.tile_at(x, y).is_some()
    }

    /// Find all words on the board, in both directions.
    ///
    /// A word starts at a tile with a neighbour after it, and no neighbour before it.
    /// Only tiles before the last row and column are tried as start of a word.
    /// Words with the same letters are included once, so the same word played on
    /// different parts of the board is only counted once.
    /// Tiles without neighbours are not part of any word.
    pub fn walk(&self) -> HashSet<Word<'_>> {
        let mut words = HashSet::new();
        let last = self.dimension.saturating_sub(1);
        for x in 0..last {
            for y in 0..last {
                let tile = match self.tile_at(x, y) {
                    Some(tile) => tile,
                    None => continue,
                };
                if self.is_occupied(x, y + 1) && (y == 0 || !self.is_occupied(x, y - 1)) {
                    words.insert(self.word_from(tile, Direction::Right));
                }
                if self.is_occupied(x + 1, y) && (x == 0 || !self.is_occupied(x - 1, y)) {
                    words.insert(self.word_from(tile, Direction::Down));
                }
            }
        }
        debug!(words = words.len(), "walked board");
        words
    }

    /// Return the word that starts at `tile` and continues in `direction`
    /// up to the first empty square or the edge of the board.
    pub fn word_from<'a>(&'a self, tile: &'a Tile, direction: Direction) -> Word<'a> {
        let (dx, dy) = direction.step();
        let mut tiles = vec![tile];
        let (mut x, mut y) = (tile.x() + dx, tile.y() + dy);
        while let Some(next) = self.tile_at(x, y) {
            tiles.push(next);
            x += dx;
            y += dy;
        }
        Word::new(tiles)
    }

    /// Calculate the total score of each player, using the letter `values`.
    /// Words without owner are added to [`Owner::Unallocated`](crate::Owner::Unallocated).
    /// ## Errors
    /// - [`Error::UnknownLetter`] if a letter on the board has no value,
    /// - [`Error::ScoreOverflow`] if a word score or a total does not fit in a `u32`.
    /// ## Examples
    /// ```
    /// use scrabble_scores::{Board, LetterValues, Owner, Placement};
    /// let board = Board::new(&[
    ///     Placement::new(1, 1, "a", &["1"]),
    ///     Placement::new(2, 1, "n", &["1"]),
    ///     Placement::new(3, 1, "t", &["1", "2"]),
    ///     Placement::new(3, 2, "i", &["2"]),
    ///     Placement::new(3, 3, "n", &["2"]),
    ///     Placement::new(3, 4, "y", &["2"]),
    /// ])?;
    /// let scores = board.calc_scores(&LetterValues::default())?;
    /// assert_eq!(scores.player("1"), Some(3));
    /// assert_eq!(scores.player("2"), Some(7));
    /// assert_eq!(scores.get(&Owner::Unallocated), None);
    /// # Ok::<(), scrabble_scores::Error>(())
    /// ```
    pub fn calc_scores(&self, values: &LetterValues) -> Result<Scores, Error> {
        let mut scores = Scores::new();
        for word in self.walk() {
            let points = word.score(values)?;
            let owner = word.owner();
            debug!(word = %word, owner = %owner, points, "scored word");
            scores.add(owner, points)?;
        }
        Ok(scores)
    }
}

/// Calculate the scores of several independent boards.
/// With the `rayon` feature the boards are scored in parallel.
/// The results are in the same order as `boards`.
pub fn calc_all_scores(boards: &[Board], values: &LetterValues) -> Vec<Result<Scores, Error>> {
    #[cfg(feature = "rayon")]
    {
        boards
            .par_iter()
            .map(|board| board.calc_scores(values))
            .collect()
    }
    #[cfg(not(feature = "rayon"))]
    {
        boards
            .iter()
            .map(|board| board.calc_scores(values))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LetterGroup, Owner};

    type Result<T> = std::result::Result<T, Error>;

    fn values() -> LetterValues {
        LetterValues::from_groups(&[
            LetterGroup {
                value: 1,
                letters: vec!["a", "i", "n", "t"].into_iter().map(String::from).collect(),
            },
            LetterGroup {
                value: 4,
                letters: vec![String::from("y")],
            },
        ])
    }

    fn texts(board: &Board) -> Vec<String> {
        let mut texts: Vec<String> = board.walk().iter().map(Word::text).collect();
        texts.sort();
        texts
    }

    fn crossing() -> Vec<Placement> {
        vec![
            Placement::new(1, 1, "a", &["1"]),
            Placement::new(2, 1, "n", &["1"]),
            Placement::new(3, 1, "t", &["1", "2"]),
            Placement::new(3, 2, "i", &["2"]),
            Placement::new(3, 3, "n", &["2"]),
            Placement::new(3, 4, "y", &["2"]),
        ]
    }

    #[test]
    fn test_board() -> Result<()> {
        let board = Board::new(&crossing())?;
        assert_eq!(board.dimension(), 15);
        assert_eq!(board.tiles().len(), 6);
        assert!(board.is_occupied(0, 0));
        assert!(board.is_occupied(2, 3));
        assert!(!board.is_occupied(0, 1));
        assert!(!board.is_occupied(15, 0));
        assert_eq!(board.tile_at(2, 0).map(Tile::letter), Some('t'));
        let shared = board.tile_at(2, 0).unwrap();
        assert_eq!(shared.players(), &["1", "2"]);
        Ok(())
    }

    #[test]
    fn test_display() -> Result<()> {
        let board = Board::with_dimension(&crossing(), 4)?;
        assert_eq!(board.to_string(), "a...\nn...\ntiny\n....");
        Ok(())
    }

    #[test]
    fn test_walk_right() -> Result<()> {
        let board = Board::new(&[
            Placement::new(1, 1, "a", &["1"]),
            Placement::new(1, 2, "n", &["1"]),
            Placement::new(1, 3, "t", &["1"]),
        ])?;
        let words = board.walk();
        assert_eq!(words.len(), 1);
        let word = words.iter().next().unwrap();
        assert_eq!(word.text(), "ant");
        let positions: Vec<_> = word.tiles().iter().map(|t| (t.x(), t.y())).collect();
        assert_eq!(positions, vec![(0, 0), (0, 1), (0, 2)]);
        Ok(())
    }

    #[test]
    fn test_walk_down() -> Result<()> {
        let board = Board::new(&[
            Placement::new(1, 1, "a", &["1"]),
            Placement::new(2, 1, "n", &["1"]),
            Placement::new(3, 1, "t", &["1"]),
        ])?;
        let words = board.walk();
        assert_eq!(words.len(), 1);
        let word = words.iter().next().unwrap();
        assert_eq!(word.text(), "ant");
        let positions: Vec<_> = word.tiles().iter().map(|t| (t.x(), t.y())).collect();
        assert_eq!(positions, vec![(0, 0), (1, 0), (2, 0)]);
        Ok(())
    }

    #[test]
    fn test_walk_to_edge() -> Result<()> {
        let board = Board::new(&[
            Placement::new(13, 1, "a", &["1"]),
            Placement::new(14, 1, "n", &["1"]),
            Placement::new(15, 1, "t", &["1"]),
        ])?;
        assert_eq!(texts(&board), vec!["ant"]);
        assert_eq!(board.calc_scores(&values())?.player("1"), Some(3));

        let board = Board::new(&[
            Placement::new(2, 13, "a", &["1"]),
            Placement::new(2, 14, "n", &["1"]),
            Placement::new(2, 15, "t", &["1"]),
        ])?;
        assert_eq!(texts(&board), vec!["ant"]);
        Ok(())
    }

    #[test]
    fn test_last_row_is_not_walked() -> Result<()> {
        // words are only started before the last row and column
        let board = Board::new(&[
            Placement::new(15, 1, "a", &["1"]),
            Placement::new(15, 2, "n", &["1"]),
            Placement::new(15, 3, "t", &["1"]),
            Placement::new(1, 15, "a", &["1"]),
            Placement::new(2, 15, "t", &["1"]),
        ])?;
        assert!(board.walk().is_empty());
        Ok(())
    }

    #[test]
    fn test_walk_crossing() -> Result<()> {
        let board = Board::new(&crossing())?;
        assert_eq!(texts(&board), vec!["ant", "tiny"]);
        Ok(())
    }

    #[test]
    fn test_walk_middle_of_word() -> Result<()> {
        // a word is only found from its first tile
        let board = Board::new(&[
            Placement::new(5, 4, "t", &["1"]),
            Placement::new(5, 5, "i", &["1"]),
            Placement::new(5, 6, "n", &["1"]),
            Placement::new(5, 7, "y", &["1"]),
        ])?;
        assert_eq!(texts(&board), vec!["tiny"]);
        Ok(())
    }

    #[test]
    fn test_isolated_tile() -> Result<()> {
        let mut placements = crossing();
        placements.push(Placement::new(10, 10, "y", &["3"]));
        let board = Board::new(&placements)?;
        assert_eq!(texts(&board), vec!["ant", "tiny"]);
        let scores = board.calc_scores(&values())?;
        assert_eq!(scores.player("3"), None);

        let board = Board::new(&[Placement::new(7, 7, "a", &["1"])])?;
        assert!(board.walk().is_empty());
        assert!(board.calc_scores(&values())?.is_empty());
        Ok(())
    }

    #[test]
    fn test_same_word_counted_once() -> Result<()> {
        let board = Board::new(&[
            Placement::new(1, 1, "a", &["1"]),
            Placement::new(1, 2, "n", &["1"]),
            Placement::new(1, 3, "t", &["1"]),
            Placement::new(8, 8, "a", &["1"]),
            Placement::new(8, 9, "n", &["1"]),
            Placement::new(8, 10, "t", &["1"]),
        ])?;
        assert_eq!(board.walk().len(), 1);
        assert_eq!(board.calc_scores(&values())?.player("1"), Some(3));
        Ok(())
    }

    #[test]
    fn test_calc_scores() -> Result<()> {
        let board = Board::new(&[
            Placement::new(13, 1, "a", &["1"]),
            Placement::new(14, 1, "n", &["1"]),
            Placement::new(15, 1, "t", &["1"]),
        ])?;
        let expect: Scores = vec![(Owner::from("1"), 3)].into_iter().collect();
        assert_eq!(board.calc_scores(&values())?, expect);

        let board = Board::new(&crossing())?;
        let expect: Scores = vec![(Owner::from("1"), 3), (Owner::from("2"), 7)]
            .into_iter()
            .collect();
        assert_eq!(board.calc_scores(&values())?, expect);
        Ok(())
    }

    #[test]
    fn test_calc_scores_unallocated() -> Result<()> {
        let board = Board::new(&[
            Placement::new(4, 4, "a", &["1", "2"]),
            Placement::new(4, 5, "n", &["1", "2"]),
            Placement::new(4, 6, "y", &["2", "1"]),
            Placement::new(5, 4, "t", &["1"]),
        ])?;
        let scores = board.calc_scores(&values())?;
        assert_eq!(scores.unallocated(), Some(6));
        assert_eq!(scores.player("1"), Some(2));
        Ok(())
    }

    #[test]
    fn test_unknown_letter() -> Result<()> {
        let board = Board::new(&[
            Placement::new(1, 1, "a", &["1"]),
            Placement::new(1, 2, "x", &["1"]),
        ])?;
        let res = board.calc_scores(&values());
        assert!(matches!(res, Err(Error::UnknownLetter('x'))));
        Ok(())
    }

    #[test]
    fn test_score_overflow() -> Result<()> {
        let values = LetterValues::from_groups(&[LetterGroup {
            value: u32::MAX,
            letters: vec![String::from("a"), String::from("n")],
        }]);
        let board = Board::new(&[
            Placement::new(1, 1, "a", &["1"]),
            Placement::new(1, 2, "n", &["1"]),
        ])?;
        let res = board.calc_scores(&values);
        assert!(matches!(res, Err(Error::ScoreOverflow(_))));
        Ok(())
    }

    #[test]
    fn test_total_overflow() -> Result<()> {
        let values = LetterValues::from_groups(&[
            LetterGroup {
                value: 1 << 31,
                letters: vec![String::from("a")],
            },
            LetterGroup {
                value: 0,
                letters: vec![String::from("b"), String::from("c")],
            },
        ]);
        // "ab" and "ac" each fit, their sum does not
        let board = Board::new(&[
            Placement::new(1, 1, "a", &["1"]),
            Placement::new(1, 2, "b", &["1"]),
            Placement::new(2, 1, "c", &["1"]),
        ])?;
        match board.calc_scores(&values) {
            Err(Error::ScoreOverflow(owner)) => assert_eq!(owner, "1"),
            other => panic!("expected ScoreOverflow, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_replace_tile() -> Result<()> {
        let board = Board::new(&[
            Placement::new(1, 1, "a", &["1"]),
            Placement::new(1, 1, "t", &["2"]),
        ])?;
        assert_eq!(board.tiles().len(), 2);
        assert_eq!(board.tile_at(0, 0).map(Tile::letter), Some('t'));
        Ok(())
    }

    #[test]
    fn test_invalid_placements() {
        let res = Board::new(&[Placement::new(0, 1, "a", &["1"])]);
        assert!(matches!(res, Err(Error::InvalidCoordinate { x: -1, y: 0 })));

        let res = Board::new(&[
            Placement::new(1, 1, "a", &["1"]),
            Placement::new(1, 2, "an", &["1"]),
        ]);
        assert!(matches!(res, Err(Error::InvalidLetter(_))));
    }

    #[test]
    #[should_panic(expected = "TilePlacementError { x: 15, y: 0, dimension: 15 }")]
    fn test_tile_placement_error() {
        Board::new(&[Placement::new(16, 1, "a", &["1"])]).unwrap();
    }

    #[test]
    fn test_small_board() -> Result<()> {
        let board = Board::with_dimension(&crossing(), 4)?;
        assert_eq!(texts(&board), vec!["ant", "tiny"]);
        let res = Board::with_dimension(&crossing(), 3);
        assert!(matches!(res, Err(Error::TilePlacementError { .. })));
        Ok(())
    }

    #[test]
    fn test_invalid_dimension() -> Result<()> {
        let res = Board::with_dimension(&[], usize::MAX);
        assert!(matches!(res, Err(Error::InvalidDimension(usize::MAX))));
        let res = Board::with_dimension(&crossing(), MAX_DIMENSION + 1);
        assert!(matches!(res, Err(Error::InvalidDimension(_))));

        let board = Board::with_dimension(&crossing(), MAX_DIMENSION)?;
        assert_eq!(texts(&board), vec!["ant", "tiny"]);
        let board = Board::with_dimension(&[], 0)?;
        assert!(board.walk().is_empty());
        Ok(())
    }

    #[test]
    fn test_placement_from_json() -> Result<()> {
        let placements: Vec<Placement> =
            config::parse_json(r#"[[1, 1, "A", ["1"]], [1, 2, "n", ["1", "2"]]]"#, "inline")?;
        assert_eq!(placements[0], Placement::new(1, 1, "A", &["1"]));
        let board = Board::new(&placements)?;
        assert_eq!(texts(&board), vec!["an"]);
        Ok(())
    }

    #[test]
    fn test_calc_all_scores() -> Result<()> {
        let boards = vec![
            Board::new(&crossing())?,
            Board::new(&[Placement::new(1, 1, "a", &["1"]), Placement::new(1, 2, "z", &["1"])])?,
            Board::new(&[])?,
        ];
        let results = calc_all_scores(&boards, &values());
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().ok().and_then(|s| s.player("2")), Some(7));
        assert!(matches!(results[1], Err(Error::UnknownLetter('z'))));
        assert!(results[2].as_ref().map_or(false, Scores::is_empty));
        Ok(())
    }
}
