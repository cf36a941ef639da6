//! Tea Guide Common Library
//!
//! CLIと埋め込み先で共有するカタログ検索・抽出比率計算

pub mod brew;
pub mod catalog;
pub mod error;
pub mod render;
pub mod search;
pub mod types;
pub mod view;

pub use brew::{compute_display, infusion_schedule, resolve_ratio, scale_leaf, DisplayResult};
pub use catalog::Catalog;
pub use error::{BrewError, Error, Result};
pub use render::highlight_html;
pub use search::{compact, filtered_entries, highlight, matches, normalize, HighlightSegment, SearchQuery};
pub use types::{BrewMethod, BrewSettings, CatalogEntry, Filter, UnitSystem};
pub use view::{region_flag, Card, DetailView};
