//! The four paw slots and the order a walking dog places them.

/// One of the four anatomical paw positions.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PawSlot {
    FrontLeft,
    FrontRight,
    BackLeft,
    BackRight,
}

impl PawSlot {
    /// Diagonal gait: each front paw is followed by the opposite hind paw.
    pub const GAIT: [PawSlot; 4] = [
        PawSlot::FrontLeft,
        PawSlot::BackRight,
        PawSlot::FrontRight,
        PawSlot::BackLeft,
    ];

    /// Slot used for the print emitted when the dog has taken `step_count`
    /// steps so far.
    #[inline]
    pub fn for_step(step_count: u64) -> PawSlot {
        Self::GAIT[(step_count % 4) as usize]
    }

    #[inline]
    pub fn is_left(self) -> bool {
        matches!(self, PawSlot::FrontLeft | PawSlot::BackLeft)
    }

    #[inline]
    pub fn is_front(self) -> bool {
        matches!(self, PawSlot::FrontLeft | PawSlot::FrontRight)
    }

    /// Stable label, also used as the CSS-ish class name by presenters.
    pub fn as_str(self) -> &'static str {
        match self {
            PawSlot::FrontLeft  => "front-left",
            PawSlot::FrontRight => "front-right",
            PawSlot::BackLeft   => "back-left",
            PawSlot::BackRight  => "back-right",
        }
    }
}

impl std::fmt::Display for PawSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
