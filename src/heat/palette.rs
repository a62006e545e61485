use super::level::IntensityLevel;

/// Escape sequences used to paint grid cells, darkest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub levels: [&'static str; IntensityLevel::COUNT],
    pub reset: &'static str,
}

impl Palette {
    /// 256-color green ramp.
    pub const GREEN: Palette = Palette {
        levels: [
            "\x1b[48;5;232m",
            "\x1b[48;5;22m",
            "\x1b[48;5;28m",
            "\x1b[48;5;34m",
            "\x1b[48;5;40m",
            "\x1b[48;5;46m",
        ],
        reset: "\x1b[0m",
    };

    pub fn color(&self, level: IntensityLevel) -> &'static str {
        self.levels[level.index().min(IntensityLevel::COUNT - 1)]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::GREEN
    }
}
