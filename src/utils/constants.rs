/// Catalog file consumed by the reporter, resolved against the working directory
pub const CATALOG_FILE: &str = "all_month.csv";

/// Source column positions retained at load (USGS monthly feed layout)
pub const TIME_POSITION: usize = 0;
pub const DEPTH_POSITION: usize = 3;
pub const MAG_POSITION: usize = 4;
pub const PLACE_POSITION: usize = 13;
pub const TYPE_POSITION: usize = 14;

pub const RETAINED_POSITIONS: [usize; 5] = [
    TIME_POSITION,
    DEPTH_POSITION,
    MAG_POSITION,
    PLACE_POSITION,
    TYPE_POSITION,
];

/// Numeric columns analyzed for extremes
pub const DEPTH_COLUMN: &str = "depth";
pub const MAG_COLUMN: &str = "mag";

/// Report layout
pub const PREVIEW_ROWS: usize = 10;
pub const MINOR_DIVIDER: &str = "----------";
pub const MAJOR_DIVIDER: &str = "====================";

/// Event timestamps render in the feed's native shape
pub const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";
