//! Simulation constants and tuning parameters.

/// Acceleration due to gravity (m/s²).
pub const GRAVITY: f64 = 9.8;

/// Range of a charge-1 shot at 45° elevation (meters); anchors muzzle velocity.
pub const REFERENCE_RANGE_M: f64 = 5_000.0;

/// Real-world height the field image is assumed to cover (meters).
pub const REFERENCE_MAP_HEIGHT_M: f64 = 25_000.0;

// --- Field ---

/// Default field image dimensions in pixels.
pub const DEFAULT_FIELD_WIDTH: u32 = 4_407;
pub const DEFAULT_FIELD_HEIGHT: u32 = 8_192;

// --- Shot parameter limits ---

pub const AZIMUTH_MIN: f64 = -360.0;
pub const AZIMUTH_MAX: f64 = 360.0;
pub const ELEVATION_MIN: f64 = 15.0;
pub const ELEVATION_MAX: f64 = 75.0;
pub const CHARGE_MIN: u8 = 1;
pub const CHARGE_MAX: u8 = 5;

// --- Blast effects ---

/// Radius within which a blast damages guns or destroys truck stock (px).
pub const BLAST_RADIUS_PX: f64 = 100.0;

/// Accumulated damage at which a gun is knocked out.
pub const GUN_KNOCKOUT_DAMAGE: i32 = 50;

/// Damage never accumulates past this value.
pub const GUN_DAMAGE_CAP: i32 = 100;

/// Shells every truck starts the battle with.
pub const INITIAL_TRUCK_AMMO: i32 = 10;

// --- Reliability ---

/// One-in-N chance an intruder gun breaks down at the start of a turn.
pub const MISFIRE_ODDS: u32 = 30;

/// One-in-N chance an intruder shell is a dud.
pub const DUD_ODDS: u32 = 30;

/// Uniform per-axis scatter on shots fired by a human intruder (px).
pub const INTRUDER_SCATTER_PX: i32 = 100;

// --- Placement ---

/// Minimum distance between a defender gun and every prior defender unit (px).
pub const DEFENDER_MIN_SPACING_PX: f64 = 300.0;

/// Minimum distance between intruder group centers (px).
pub const GROUP_MIN_SPACING_PX: f64 = 500.0;

/// Minimum pairwise distance inside a randomly deployed group (px).
pub const GROUP_MEMBER_MIN_SPACING_PX: f64 = 150.0;

/// Intruder guns deploy in groups of this size.
pub const INTRUDER_GROUP_SIZE: u32 = 3;

/// Attempts per rejection-sampled placement before generation fails.
pub const PLACEMENT_RETRY_BUDGET: u32 = 10_000;

// --- Computer accuracy ---

/// Defender computer aim error, ± per axis (px).
pub const DEFENDER_AI_AIM_ERROR_PX: i32 = 150;

/// Intruder computer base aim error, ± per axis (px).
pub const INTRUDER_AI_AIM_ERROR_PX: i32 = 300;

/// Extra intruder inaccuracy on the first three turns of a battle (px).
pub const FIRST_TURN_AIM_PENALTY_PX: [i32; 3] = [600, 400, 200];

// --- War ---

/// Intruder-held territory at the start of a war (percent).
pub const INITIAL_TERRITORY_OCCUPIED: i32 = 20;

/// Territory shift per decided battle (percent).
pub const TERRITORY_SHIFT_PER_BATTLE: i32 = 2;

/// Territory shift when a front line collapses at war's end (percent).
pub const FRONT_COLLAPSE_SHIFT: i32 = 10;

/// Pool floors below which the war cannot continue (defender side; the
/// intruder's floors are these times `INTRUDER_THRESHOLD_FACTOR`).
pub const END_UNITS_THRESHOLD: i32 = 1;
pub const END_AMMO_THRESHOLD: i32 = 10;
pub const END_DAMAGE_THRESHOLD: i32 = 50;
pub const INTRUDER_THRESHOLD_FACTOR: i32 = 3;
