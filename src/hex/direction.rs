use bevy::prelude::Reflect;

/// The six neighbor directions of a pointy-top hex, clockwise from the upper right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Reflect)]
pub enum HexDirection {
    /// North-east.
    NE,
    /// East.
    E,
    /// South-east.
    SE,
    /// South-west.
    SW,
    /// West.
    W,
    /// North-west.
    NW,
}

impl HexDirection {
    /// All directions in clockwise order.
    pub const ALL: [HexDirection; 6] = [
        HexDirection::NE,
        HexDirection::E,
        HexDirection::SE,
        HexDirection::SW,
        HexDirection::W,
        HexDirection::NW,
    ];

    /// Position of this direction in [`Self::ALL`], always in `0..6`.
    pub const fn index(self) -> usize {
        self as usize
    }

    const fn rotate(self, steps: usize) -> Self {
        Self::ALL[(self.index() + steps) % 6]
    }

    /// The direction pointing the other way.
    pub const fn opposite(self) -> Self {
        self.rotate(3)
    }

    /// One step clockwise.
    pub const fn next(self) -> Self {
        self.rotate(1)
    }

    /// One step counter-clockwise.
    pub const fn previous(self) -> Self {
        self.rotate(5)
    }

    /// Whether a cell triangulates the bridge towards this direction.
    ///
    /// Only NE, E and SE, so every adjacent pair is bridged once.
    pub const fn owns_bridge(self) -> bool {
        matches!(self, HexDirection::NE | HexDirection::E | HexDirection::SE)
    }

    /// Whether a cell triangulates the corner between this direction and the next.
    ///
    /// Only NE and E: each cell owns two of its six corners, so every
    /// three-cell corner is triangulated once.
    pub const fn owns_corner(self) -> bool {
        matches!(self, HexDirection::NE | HexDirection::E)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_an_involution() {
        for dir in HexDirection::ALL {
            assert_ne!(dir, dir.opposite());
            assert_eq!(dir, dir.opposite().opposite());
        }
    }

    #[test]
    fn opposite_pairs() {
        assert_eq!(HexDirection::NE.opposite(), HexDirection::SW);
        assert_eq!(HexDirection::E.opposite(), HexDirection::W);
        assert_eq!(HexDirection::SE.opposite(), HexDirection::NW);
    }

    #[test]
    fn next_and_previous_wrap() {
        assert_eq!(HexDirection::NW.next(), HexDirection::NE);
        assert_eq!(HexDirection::NE.previous(), HexDirection::NW);
        for dir in HexDirection::ALL {
            assert_eq!(dir.next().previous(), dir);
        }
    }

    #[test]
    fn index_matches_position_in_all() {
        for (i, dir) in HexDirection::ALL.iter().enumerate() {
            assert_eq!(dir.index(), i);
        }
    }

    #[test]
    fn half_the_directions_own_bridges() {
        let owners = HexDirection::ALL.iter().filter(|d| d.owns_bridge()).count();
        assert_eq!(owners, 3);
        for dir in HexDirection::ALL {
            assert_ne!(dir.owns_bridge(), dir.opposite().owns_bridge());
        }
    }

    #[test]
    fn a_third_of_the_corners_are_owned() {
        let owners = HexDirection::ALL.iter().filter(|d| d.owns_corner()).count();
        assert_eq!(owners, 2);
    }
}
