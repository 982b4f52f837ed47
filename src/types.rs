use serde::{Deserialize, Serialize};

/// Identifier of a transposable element.
///
/// Ids are issued per genome, starting at 1, and are never reused.
pub type TeId = u64;

/// What a single genome position currently holds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occupancy {
    #[default]
    Empty,
    Active,
    Disabled,
}

impl Occupancy {
    /// Character used by `Genome::render`
    pub fn symbol(self) -> char {
        match self {
            Occupancy::Empty => '-',
            Occupancy::Active => 'A',
            Occupancy::Disabled => 'x',
        }
    }
}

/// One position of the genome.
///
/// Occupancy and owner live in the same record so they can never drift apart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Site {
    pub occupancy: Occupancy,
    pub owner: Option<TeId>,
}

impl Site {
    pub const EMPTY: Site = Site {
        occupancy: Occupancy::Empty,
        owner: None,
    };

    pub fn active(owner: TeId) -> Self {
        Self {
            occupancy: Occupancy::Active,
            owner: Some(owner),
        }
    }

    pub fn is_owned_by(&self, te: TeId) -> bool {
        self.owner == Some(te)
    }

    /// Owner of this site if the site is currently active
    pub fn active_owner(&self) -> Option<TeId> {
        match self.occupancy {
            Occupancy::Active => self.owner,
            _ => None,
        }
    }

    /// Flip an active site owned by `te` to disabled. Returns true if the site changed.
    pub fn disable_if_owned_by(&mut self, te: TeId) -> bool {
        if self.occupancy == Occupancy::Active && self.is_owned_by(te) {
            self.occupancy = Occupancy::Disabled;
            true
        } else {
            false
        }
    }
}
