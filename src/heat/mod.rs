pub mod exec;
pub mod grid;
pub mod level;
pub mod palette;
pub mod range;
pub mod render;

pub use exec::{exec, render_activity};
pub use grid::{cell_position, Grid, Heatmap, MonthLabel};
pub use level::IntensityLevel;
pub use palette::Palette;
pub use range::{one_year_before, DateRange};
pub use render::{month_header, HeatmapRenderer};
