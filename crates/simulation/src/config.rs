/// Grid spacing between adjacent building tiles, in world units.
pub const TILE_SPACING: f32 = 10.0;

/// Treasury balance for a newly founded city.
pub const STARTING_MONEY: f32 = 500.0;

/// Upper clamp for a house's happiness. Service bonuses saturate here
/// instead of growing without bound.
pub const MAX_HOUSE_HAPPINESS: f32 = 2.0;
