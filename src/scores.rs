use crate::tile::Player;
use crate::Error;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// The owner of a word: a single player, or unallocated when no
/// single player can be attributed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Owner {
    Player(Player),
    Unallocated,
}

impl Owner {
    /// Return the player, or `None` if unallocated.
    pub fn player(&self) -> Option<&str> {
        match self {
            Owner::Player(player) => Some(player),
            Owner::Unallocated => None,
        }
    }
}

impl From<&str> for Owner {
    fn from(player: &str) -> Self {
        Owner::Player(String::from(player))
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Owner::Player(player) => write!(f, "{}", player),
            Owner::Unallocated => write!(f, "Unallocated"),
        }
    }
}

/// Total score for each owner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scores(HashMap<Owner, u32>);

impl Scores {
    pub fn new() -> Scores {
        Scores(HashMap::new())
    }

    /// Add `points` to the total of `owner`. The total starts at 0.
    /// ## Errors
    /// [`Error::ScoreOverflow`] if the total does not fit in a `u32`. The
    /// total of `owner` is then left unchanged.
    pub fn add(&mut self, owner: Owner, points: u32) -> Result<(), Error> {
        let total = self
            .get(&owner)
            .unwrap_or(0)
            .checked_add(points)
            .ok_or_else(|| Error::ScoreOverflow(owner.to_string()))?;
        self.0.insert(owner, total);
        Ok(())
    }

    pub fn get(&self, owner: &Owner) -> Option<u32> {
        self.0.get(owner).copied()
    }

    /// Return the total of `player`
    pub fn player(&self, player: &str) -> Option<u32> {
        self.get(&Owner::from(player))
    }

    /// Return the total of the words without owner
    pub fn unallocated(&self) -> Option<u32> {
        self.get(&Owner::Unallocated)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Owner, u32)> {
        self.0.iter().map(|(owner, &points)| (owner, points))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the scores in a form that can be serialized.
    /// ## Examples
    /// ```
    /// use scrabble_scores::{Owner, Scores};
    /// let scores: Scores = vec![(Owner::from("1"), 3), (Owner::Unallocated, 2)]
    ///     .into_iter()
    ///     .collect();
    /// let json = serde_json::to_string(&scores.report())?;
    /// assert_eq!(json, r#"{"players":{"1":3},"unallocated":2}"#);
    /// # Ok::<(), serde_json::Error>(())
    /// ```
    pub fn report(&self) -> ScoreReport {
        let players = self
            .iter()
            .filter_map(|(owner, points)| owner.player().map(|p| (String::from(p), points)))
            .collect();
        ScoreReport {
            players,
            unallocated: self.unallocated(),
        }
    }
}

/// Collect totals per owner. A later total for the same owner replaces the
/// earlier one, as when collecting into a map.
impl FromIterator<(Owner, u32)> for Scores {
    fn from_iter<I: IntoIterator<Item = (Owner, u32)>>(iter: I) -> Self {
        Scores(iter.into_iter().collect())
    }
}

/// Display the scores, one line per player, ordered by player.
/// The unallocated score is shown last.
impl fmt::Display for Scores {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut owners: Vec<_> = self.iter().collect();
        owners.sort();
        write!(f, "Board Scores:")?;
        for (owner, points) in owners {
            write!(f, "\n{}: {}", owner, points)?;
        }
        Ok(())
    }
}

/// Serializable form of [`Scores`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreReport {
    pub players: BTreeMap<Player, u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unallocated: Option<u32>,
}
