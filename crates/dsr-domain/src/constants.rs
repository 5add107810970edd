//! Domain constants

/// Default similarity threshold above which an OLD/NEW pair is accepted as a
/// match. Strictly-greater comparison; pairs at or below are rejected.
pub const DEFAULT_MATCH_THRESHOLD: f32 = 0.6;

/// Default band breakpoint: similarity above this is no impact
pub const BAND_NONE_ABOVE: f32 = 0.90;

/// Default band breakpoint: similarity above this (up to none) is low impact
pub const BAND_LOW_ABOVE: f32 = 0.75;

/// Default band breakpoint: similarity above this (up to low) is moderate
/// impact; at or below is high impact
pub const BAND_MODERATE_ABOVE: f32 = 0.60;

/// Group key used when a result's code cannot be resolved to a parent
pub const UNKNOWN_GROUP: &str = "unknown";
