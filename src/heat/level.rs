/// Activity bucket 0..=5 shown as one palette color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IntensityLevel(u8);

impl IntensityLevel {
    pub const NONE: IntensityLevel = IntensityLevel(0);
    pub const MAX: IntensityLevel = IntensityLevel(5);
    pub const COUNT: usize = 6;

    /// Lower commit bound for levels 5 down to 1.
    const THRESHOLDS: [(u32, u8); 5] = [(15, 5), (10, 4), (5, 3), (2, 2), (1, 1)];

    pub fn from_count(count: u32) -> Self {
        Self::THRESHOLDS
            .iter()
            .find(|&&(min, _)| count >= min)
            .map(|&(_, level)| IntensityLevel(level))
            .unwrap_or(Self::NONE)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}
