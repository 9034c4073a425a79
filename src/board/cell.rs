//! Players and square contents.
//!
//! An Infectious board square holds exactly one of: nothing, an impassable
//! wall, or an active or passive colony belonging to one of the two players.

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Returns the other player. The game assumes exactly two players.
    pub const fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Returns the player's numeric id (1 or 2) as used on the wire.
    pub const fn id(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Parses a numeric player id.
    pub fn from_id(id: u8) -> Option<Player> {
        match id {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }
}

/// The contents of a single board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Impassable,
    /// A mobile colony: may step to adjacent empty squares and captures on arrival.
    Active(Player),
    /// An immobile colony, left behind when an active colony moves away.
    Passive(Player),
}

impl Cell {
    /// Returns the single-character IFEN representation.
    ///
    /// Passive colonies use the shifted digit of their owner ('!' for 1,
    /// '"' for 2).
    pub const fn ifen_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Impassable => '#',
            Cell::Active(Player::One) => '1',
            Cell::Active(Player::Two) => '2',
            Cell::Passive(Player::One) => '!',
            Cell::Passive(Player::Two) => '"',
        }
    }

    /// Parses a cell from its single-character IFEN representation.
    pub fn from_ifen_char(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Empty),
            '#' => Some(Cell::Impassable),
            '1' => Some(Cell::Active(Player::One)),
            '2' => Some(Cell::Active(Player::Two)),
            '!' => Some(Cell::Passive(Player::One)),
            '"' => Some(Cell::Passive(Player::Two)),
            _ => None,
        }
    }

    /// Returns true if the cell holds a colony (active or passive) of any player.
    pub const fn is_colony(self) -> bool {
        matches!(self, Cell::Active(_) | Cell::Passive(_))
    }

    /// Returns the owning player, if the cell holds a colony.
    pub const fn owner(self) -> Option<Player> {
        match self {
            Cell::Active(p) | Cell::Passive(p) => Some(p),
            _ => None,
        }
    }
}
