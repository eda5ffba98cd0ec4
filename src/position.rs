//! Discrete position classification for the N50P105 joystick module.

/// Discrete joystick position reported by [`crate::As5013::position`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Position {
    /// Stick at rest
    Center = 0,
    Top = 1,
    TopRight = 2,
    Right = 3,
    BottomRight = 4,
    Bottom = 5,
    BottomLeft = 6,
    Left = 7,
    TopLeft = 8,
}

impl From<Position> for u8 {
    fn from(position: Position) -> u8 {
        position as u8
    }
}

impl Position {
    /// Classify a signed (x, y) axis reading into one of the 9 zones.
    ///
    /// The rules are evaluated in a fixed order as independent conditionals,
    /// not as an else-if chain: a later rule overrides an earlier assignment
    /// when both hold, which is how the diagonal zones take priority over the
    /// axis-aligned cases near the ±60 boundary. The threshold table is part
    /// of the device's documented behavior and must not be reordered.
    #[must_use]
    pub fn from_axes(ox: i8, oy: i8) -> Self {
        let mut position = Position::Center;

        if ox <= -60 {
            position = Position::Right;
        }

        if ox >= 60 {
            position = Position::Left;
        }

        if oy >= 60 && (-20..20).contains(&ox) {
            position = Position::Top;
        }

        if oy <= -60 && (-20..=20).contains(&ox) {
            position = Position::Bottom;
        }

        if ox < -20 && ox > -60 {
            position = if oy > 20 {
                Position::TopRight
            } else {
                Position::BottomRight
            };
        }

        if ox < 60 && ox > 20 {
            position = if oy < -20 {
                Position::TopLeft
            } else {
                Position::BottomLeft
            };
        }

        position
    }
}
