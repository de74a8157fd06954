/// One side of a maze cell, in clockwise order starting from the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wall {
    North,
    East,
    South,
    West,
}

impl Wall {
    /// All four walls in clockwise order.
    pub const ALL: [Wall; 4] = [Wall::North, Wall::East, Wall::South, Wall::West];

    /// The wall on the far side of a passage through this one.
    pub fn opposite(self) -> Wall {
        Self::ALL[(self.index() + 2) % Self::ALL.len()]
    }

    /// Coordinate step towards the neighbour behind this wall. `y` grows southwards.
    pub fn offset(self) -> (i64, i64) {
        match self {
            Wall::North => (0, -1),
            Wall::East => (1, 0),
            Wall::South => (0, 1),
            Wall::West => (-1, 0),
        }
    }

    /// Bit used for this wall in a `Walls` mask.
    pub fn bit(self) -> u8 {
        1 << self.index()
    }

    fn index(self) -> usize {
        match self {
            Wall::North => 0,
            Wall::East => 1,
            Wall::South => 2,
            Wall::West => 3,
        }
    }
}

/// Set of walls standing around a cell, stored as a 4-bit mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Walls(u8);

impl Walls {
    const MASK: u8 = 0b1111;

    /// Every wall standing.
    pub fn all() -> Self {
        Self(Self::MASK)
    }

    /// Rebuilds a set from its mask, rejecting bits outside the four walls.
    pub fn from_bits(bits: u8) -> Option<Self> {
        (bits & !Self::MASK == 0).then_some(Self(bits))
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn contains(self, wall: Wall) -> bool {
        self.0 & wall.bit() != 0
    }

    pub fn remove(&mut self, wall: Wall) {
        self.0 &= !wall.bit();
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Standing walls in clockwise order.
    pub fn iter(self) -> impl Iterator<Item = Wall> {
        Wall::ALL.into_iter().filter(move |w| self.contains(*w))
    }
}
