//! Behavioral tuning profiles for the stock decision modules.
//!
//! Consolidates the per-module parameters the strategy chain reads.

/// Tuning for one decision module instance.
#[derive(Debug, Clone, Copy)]
pub struct TacticalProfile {
    /// Chebyshev radius (on the torus) within which enemies and shells
    /// trigger the threat-response strategy.
    pub danger_radius: i32,
    /// Ticks between `GetBattleInfo` refreshes.
    pub info_refresh_interval: u32,
    /// Whether the module shoots walls blocking its path.
    pub breach_walls: bool,
    /// Hold position instead of navigating toward enemies.
    pub hold_ground: bool,
    /// Rotate 45° clockwise when the chain has nothing better to do,
    /// sweeping the gun across all octants.
    pub patrol_rotation: bool,
}

/// Aggressive profile: closes distance, breaches walls.
pub fn hunter() -> TacticalProfile {
    TacticalProfile {
        danger_radius: 4,
        info_refresh_interval: 2,
        breach_walls: true,
        hold_ground: false,
        patrol_rotation: false,
    }
}

/// Defensive profile: holds ground and keeps the gun sweeping.
pub fn sentinel() -> TacticalProfile {
    TacticalProfile {
        danger_radius: 5,
        info_refresh_interval: 3,
        breach_walls: false,
        hold_ground: true,
        patrol_rotation: true,
    }
}
