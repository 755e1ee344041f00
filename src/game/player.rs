/// Which of the two players a disc or turn belongs to. This is the identity
/// used for every ownership comparison; labels are display-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    /// Get the other seat
    pub fn other(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }
}

/// A participant in the game: a fixed seat plus a human-readable label.
#[derive(Debug, Clone)]
pub struct Player {
    seat: Seat,
    label: String,
}

impl Player {
    pub fn new(seat: Seat, label: impl Into<String>) -> Self {
        Player {
            seat,
            label: label.into(),
        }
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }

    /// Get player label for display
    pub fn label(&self) -> &str {
        &self.label
    }
}

// Two players with the same label are still different players.
impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.seat == other.seat
    }
}

impl Eq for Player {}

/// The two players of a game, indexed by seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Players {
    seats: [Player; 2],
}

impl Players {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Players {
            seats: [Player::new(Seat::First, first), Player::new(Seat::Second, second)],
        }
    }

    pub fn get(&self, seat: Seat) -> &Player {
        &self.seats[seat.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.seats.iter()
    }
}

impl Default for Players {
    fn default() -> Self {
        Players::new("Green", "Red")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_seat() {
        assert_eq!(Seat::First.other(), Seat::Second);
        assert_eq!(Seat::Second.other(), Seat::First);
    }

    #[test]
    fn test_default_labels() {
        let players = Players::default();
        assert_eq!(players.get(Seat::First).label(), "Green");
        assert_eq!(players.get(Seat::Second).label(), "Red");
    }

    #[test]
    fn test_equality_ignores_label() {
        // "Red" is a substring of "Reddish", and equal labels must not merge players either
        let players = Players::new("Red", "Reddish");
        assert_ne!(players.get(Seat::First), players.get(Seat::Second));

        let same = Players::new("Blue", "Blue");
        assert_ne!(same.get(Seat::First), same.get(Seat::Second));
        assert_eq!(same.get(Seat::First), &Player::new(Seat::First, "anything"));
    }

    #[test]
    fn test_iter_in_seat_order() {
        let players = Players::default();
        let seats: Vec<Seat> = players.iter().map(Player::seat).collect();
        assert_eq!(seats, vec![Seat::First, Seat::Second]);
    }
}
