use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned
pub enum Error {
    /// A tile was placed at a negative coordinate
    #[error("Tile coordinates {x}:{y} are invalid")]
    InvalidCoordinate { x: i64, y: i64 },

    /// A tile letter must be a single letter a..z (case insensitive)
    #[error("\"{0}\" is not a valid letter")]
    InvalidLetter(String),

    /// The letter has no value in the letter value table
    #[error("No value for letter '{0}'")]
    UnknownLetter(char),

    /// Attempt to place a tile outside the board
    #[error("Tile at x={x}, y={y} does not fit on a {dimension}x{dimension} board")]
    TilePlacementError {
        x: usize,
        y: usize,
        dimension: usize,
    },

    /// The board dimension is larger than [`MAX_DIMENSION`](crate::MAX_DIMENSION)
    #[error("A board of {0}x{0} squares is not supported")]
    InvalidDimension(usize),

    /// A word score or a total score does not fit in a `u32`
    #[error("Score of \"{0}\" is too large")]
    ScoreOverflow(String),

    /// Error reading a configuration file
    #[error("Config file \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// Error parsing the json in a configuration file
    #[error("Config file \"{path}\" could not be parsed")]
    ParseError {
        path: String,
        source: serde_json::Error,
    },
}
