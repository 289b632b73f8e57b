//! Cleanup system: reclaims deactivated shells at the end of each tick.
//!
//! Dead tanks are never removed — their list slots keep the stable id
//! order that the tick log depends on.

use ironclad_core::entities::Shell;

pub fn sweep_shells(shells: &mut Vec<Shell>) {
    shells.retain(|s| s.active);
}
