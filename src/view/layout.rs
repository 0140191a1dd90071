//! Part positions for the assembled and exploded layouts.

use glam::Vec3;

use crate::scene::cabinet::{
    BASE, DOORS, FRAME_BOTTOM, FRAME_LEFT, FRAME_TOP, RIGHT_SIDE,
};

/// Parts whose position depends on the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    /// Bottom panel.
    Base,
    /// Right side panel.
    RightSide,
    /// Top rail of the front frame.
    FrameTop,
    /// Bottom rail of the front frame.
    FrameBottom,
    /// Left stile of the front frame.
    FrameLeft,
    /// Group holding both sliding doors.
    Doors,
}

impl Part {
    /// Every tracked part, in table order.
    pub const ALL: [Self; 6] = [
        Self::Base,
        Self::RightSide,
        Self::FrameTop,
        Self::FrameBottom,
        Self::FrameLeft,
        Self::Doors,
    ];

    /// Scene node name of this part.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Base => BASE,
            Self::RightSide => RIGHT_SIDE,
            Self::FrameTop => FRAME_TOP,
            Self::FrameBottom => FRAME_BOTTOM,
            Self::FrameLeft => FRAME_LEFT,
            Self::Doors => DOORS,
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

/// Which layout the cabinet is presented in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    /// Parts in their built positions.
    #[default]
    Assembled,
    /// Parts pulled apart along their assembly axes.
    Exploded,
}

impl LayoutMode {
    /// The position table for this layout.
    #[must_use]
    pub fn table(self) -> &'static LayoutTable {
        match self {
            Self::Assembled => &ASSEMBLED,
            Self::Exploded => &EXPLODED,
        }
    }
}

/// Position of every [`Part`] in one layout.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutTable {
    positions: [Vec3; 6],
}

impl LayoutTable {
    /// Target position of `part`.
    #[must_use]
    pub fn position(&self, part: Part) -> Vec3 {
        self.positions[part.slot()]
    }

    /// `(part, position)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (Part, Vec3)> + '_ {
        Part::ALL.iter().map(|&part| (part, self.position(part)))
    }
}

/// Built positions.
pub static ASSEMBLED: LayoutTable = LayoutTable {
    positions: [
        Vec3::new(0.0, -1.375, 0.0),
        Vec3::new(3.0, 0.0, 0.0),
        Vec3::new(0.0, 1.375, 1.1),
        Vec3::new(0.0, -1.375, 1.1),
        Vec3::new(-3.0, 0.0, 1.1),
        Vec3::ZERO,
    ],
};

/// Pulled-apart positions.
pub static EXPLODED: LayoutTable = LayoutTable {
    positions: [
        Vec3::new(0.0, -2.5, -1.0),
        Vec3::new(4.5, 0.0, -1.0),
        Vec3::new(0.0, 2.5, 2.0),
        Vec3::new(0.0, -2.5, 2.0),
        Vec3::new(-4.5, 0.0, 2.0),
        Vec3::new(0.0, 0.0, 3.0),
    ],
};
