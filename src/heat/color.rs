use crossterm::style::Color;

/// Commit-count intensity tier. Thresholds are inclusive upper bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IntensityLevel {
    /// No commits
    L0,
    /// 1-5 commits
    L1,
    /// 6-10 commits
    L2,
    /// 11-15 commits
    L3,
    /// 16-20 commits
    L4,
    /// More than 20 commits
    L5,
}

impl IntensityLevel {
    pub const ALL: [IntensityLevel; 6] = [
        IntensityLevel::L0,
        IntensityLevel::L1,
        IntensityLevel::L2,
        IntensityLevel::L3,
        IntensityLevel::L4,
        IntensityLevel::L5,
    ];

    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::L0 => (178, 215, 155), // #B2D79B light green
            Self::L1 => (139, 195, 74),  // #8BC34A
            Self::L2 => (34, 139, 34),   // #228B22 forest green
            Self::L3 => (0, 100, 0),     // #006400
            Self::L4 => (0, 128, 128),   // #008080 teal
            Self::L5 => (0, 64, 0),      // #004000
        }
    }

    pub fn color(self) -> Color {
        let (r, g, b) = self.rgb();
        Color::Rgb { r, g, b }
    }

    /// Swatch text shown in the legend.
    pub fn label(self) -> &'static str {
        match self {
            Self::L0 => "  .0.  ",
            Self::L1 => " *1-5* ",
            Self::L2 => "*06-10*",
            Self::L3 => "*11-15*",
            Self::L4 => "*16-20*",
            Self::L5 => " *21+* ",
        }
    }
}

pub fn bucket(commit_count: u32) -> IntensityLevel {
    match commit_count {
        0 => IntensityLevel::L0,
        1..=5 => IntensityLevel::L1,
        6..=10 => IntensityLevel::L2,
        11..=15 => IntensityLevel::L3,
        16..=20 => IntensityLevel::L4,
        _ => IntensityLevel::L5,
    }
}
