use glam::Vec2;

/// Where the user's cursor or finger is, if anywhere.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Pointer {
    /// No interaction: no forces and no pointer links.
    #[default]
    Inactive,
    /// Pointer position in viewport coordinates.
    At(Vec2),
}

impl Pointer {
    /// Far off-screen position some hosts report when the pointer leaves.
    pub const SENTINEL: Vec2 = Vec2::new(-1000.0, -1000.0);

    /// Builds a pointer from a raw host position, mapping the sentinel and
    /// non-finite coordinates to [`Pointer::Inactive`].
    pub fn from_host(pos: Vec2) -> Self {
        if pos == Self::SENTINEL || !pos.is_finite() {
            Pointer::Inactive
        } else {
            Pointer::At(pos)
        }
    }

    pub fn position(&self) -> Option<Vec2> {
        match *self {
            Pointer::At(pos) => Some(pos),
            Pointer::Inactive => None,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Pointer::At(_))
    }
}
