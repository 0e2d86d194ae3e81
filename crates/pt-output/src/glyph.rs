//! Paw icon geometry.
//!
//! Both glyphs live in a 24×24 view box: one pad ellipse below four toe
//! circles.  Back paws are a little smaller and narrower than front paws.

use pt_core::PawSlot;

/// Edge length of the glyph view box.
pub const VIEW_BOX: f64 = 24.0;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ellipse {
    pub cx: f64,
    pub cy: f64,
    pub rx: f64,
    pub ry: f64,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Circle {
    pub cx: f64,
    pub cy: f64,
    pub r:  f64,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PawGlyph {
    pub pad:  Ellipse,
    pub toes: [Circle; 4],
}

const fn circle(cx: f64, cy: f64, r: f64) -> Circle {
    Circle { cx, cy, r }
}

impl PawGlyph {
    pub const FRONT: PawGlyph = PawGlyph {
        pad:  Ellipse { cx: 12.0, cy: 16.0, rx: 6.0, ry: 4.0 },
        toes: [
            circle(8.0, 8.0, 2.5),
            circle(12.0, 6.0, 2.5),
            circle(16.0, 8.0, 2.5),
            circle(6.0, 12.0, 2.0),
        ],
    };

    pub const BACK: PawGlyph = PawGlyph {
        pad:  Ellipse { cx: 12.0, cy: 15.0, rx: 5.0, ry: 3.5 },
        toes: [
            circle(9.0, 8.0, 2.0),
            circle(12.0, 7.0, 2.0),
            circle(15.0, 8.0, 2.0),
            circle(7.0, 11.0, 1.5),
        ],
    };

    pub fn for_slot(slot: PawSlot) -> &'static PawGlyph {
        if slot.is_front() { &Self::FRONT } else { &Self::BACK }
    }
}
