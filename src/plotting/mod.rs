mod cache;
pub mod chart;
pub mod styles;


pub use cache::PlotCache;
pub use chart::{render_chart, ChartPlan, PlottedSeries, RenderedChart};
pub use styles::{ChartStyle, ChartTheme};
