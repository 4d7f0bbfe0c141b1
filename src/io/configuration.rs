//! Puzzle constants and runtime configuration defaults

// Day selector range accepted on the command line
/// First puzzle day
pub const FIRST_DAY: u8 = 1;
/// Last puzzle day
pub const LAST_DAY: u8 = 25;

// Tile image characters
/// Character of a foreground mark in tiles and masks
pub const FOREGROUND: char = '#';
/// Character of a background cell in tiles
pub const BACKGROUND: char = '.';
/// Prefix of a tile header line (`Tile 2311:`)
pub const TILE_HEADER_PREFIX: &str = "Tile ";

/// The sea monster mask; `#` cells are required marks, anything else is ignored
pub const SEA_MONSTER: [&str; 3] = [
    "                  # ",
    "#    ##    ##    ###",
    " #  #  #  #  #  #   ",
];

// Report repair
/// Sum the expense entries must reach
pub const EXPENSE_TARGET: u64 = 2020;

// Toboggan trajectory
/// Slope used for part 1, as (right, down)
pub const TOBOGGAN_SLOPE: (usize, usize) = (3, 1);
/// Slopes multiplied together for part 2, as (right, down)
pub const TOBOGGAN_SLOPES: [(usize, usize); 5] = [(1, 1), (3, 1), (5, 1), (7, 1), (1, 2)];

// Handy haversacks
/// Bag colour both parts revolve around
pub const TARGET_BAG: &str = "shiny gold";

// Encoding error
/// Number of preceding values a number must be a pair sum of
pub const XMAS_PREAMBLE: usize = 25;

// Adapter array
/// Largest joltage step an adapter accepts
pub const MAX_JOLT_STEP: u64 = 3;

// Seating system
/// Occupied neighbours that empty a seat under the adjacency rule
pub const ADJACENT_TOLERANCE: usize = 4;
/// Occupied visible seats that empty a seat under the line-of-sight rule
pub const VISIBLE_TOLERANCE: usize = 5;

// Rain risk
/// Waypoint start, as (east, north)
pub const WAYPOINT_START: (i64, i64) = (10, 1);

// Docking data
/// Width of the bitmask system in bits
pub const MASK_WIDTH: usize = 36;

// Rambunctious recitation
/// Turn answered by part 1
pub const RECITATION_SHORT: usize = 2020;
/// Turn answered by part 2
pub const RECITATION_LONG: usize = 30_000_000;

// Conway cubes
/// Boot cycles simulated before counting
pub const BOOT_CYCLES: usize = 6;

// Crab cups
/// Moves played in part 1
pub const CUP_MOVES_SHORT: usize = 100;
/// Moves played in part 2
pub const CUP_MOVES_LONG: usize = 10_000_000;
/// Total cups in part 2
pub const CUP_COUNT_LONG: usize = 1_000_000;

// Lobby layout
/// Days of the hex automaton in part 2
pub const LOBBY_DAYS: usize = 100;

// Combo breaker
/// Modulus of the handshake transform
pub const HANDSHAKE_MODULUS: u64 = 20_201_227;
/// Subject number used to derive public keys
pub const HANDSHAKE_SUBJECT: u64 = 7;

// Progress bar display settings
/// Steps between progress bar refreshes
pub const PROGRESS_STRIDE: usize = 250_000;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Image export settings
/// Output pixels per image cell
pub const EXPORT_PIXEL_SCALE: u32 = 4;
/// Colour of background cells
pub const EXPORT_BACKGROUND: [u8; 4] = [12, 34, 64, 255];
/// Colour of rough water marks
pub const EXPORT_WATER: [u8; 4] = [90, 160, 220, 255];
/// Colour of sea monster marks
pub const EXPORT_MONSTER: [u8; 4] = [60, 200, 90, 255];
