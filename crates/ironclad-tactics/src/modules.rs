//! Stock decision modules and factories.
//!
//! Each module keeps a copy of the latest battle info and refreshes it
//! on its profile's schedule; between refreshes it dead-reckons its own
//! heading (rotations always succeed, so the heading is exact even when
//! the rest of the snapshot is a tick or two old).

use std::collections::HashMap;

use tracing::trace;

use ironclad_core::enums::{Action, Player};
use ironclad_core::module::{DecisionModule, ModuleFactory};
use ironclad_core::state::BattleInfo;

use crate::profiles::{self, TacticalProfile};
use crate::strategy::{evaluate_chain, TacticalContext, TacticalMemory};

/// Strategy-chain module. The profile decides whether it plays the
/// aggressive or the defensive game.
pub struct ChainModule {
    profile: TacticalProfile,
    memory: TacticalMemory,
    info: Option<BattleInfo>,
    ticks_since_info: u32,
    rotations_since_info: i8,
}

impl ChainModule {
    pub fn new(profile: TacticalProfile) -> Self {
        Self {
            profile,
            memory: TacticalMemory::default(),
            info: None,
            ticks_since_info: 0,
            rotations_since_info: 0,
        }
    }
}

impl DecisionModule for ChainModule {
    fn next_action(&mut self) -> Action {
        let stale = self.ticks_since_info >= self.profile.info_refresh_interval;
        let Some(info) = self.info.as_ref().filter(|_| !stale) else {
            return Action::GetBattleInfo;
        };

        self.ticks_since_info += 1;
        let mut ctx = TacticalContext::from_info(info);
        ctx.direction = ctx.direction.rotated(self.rotations_since_info);

        let action = evaluate_chain(&ctx, &self.profile, &mut self.memory);
        if let Some(steps) = action.rotation_steps() {
            self.rotations_since_info += steps;
        }
        trace!(?action, "chain decision");
        action
    }

    fn receive_battle_info(&mut self, info: BattleInfo) {
        self.info = Some(info);
        self.ticks_since_info = 0;
        self.rotations_since_info = 0;
    }
}

/// Aggressive module: hunts a firing position and breaches walls.
pub struct HunterModule;

impl HunterModule {
    pub fn create() -> Box<dyn DecisionModule> {
        Box::new(ChainModule::new(profiles::hunter()))
    }
}

/// Defensive module: holds ground, sweeps its gun, and engages whatever
/// wanders into sight.
pub struct SentinelModule;

impl SentinelModule {
    pub fn create() -> Box<dyn DecisionModule> {
        Box::new(ChainModule::new(profiles::sentinel()))
    }
}

/// The default pairing: player 1 hunts, player 2 stands sentinel.
#[derive(Debug, Default)]
pub struct StandardFactory;

impl ModuleFactory for StandardFactory {
    fn create(&self, player: Player, _tank_index: usize) -> Box<dyn DecisionModule> {
        match player {
            Player::One => HunterModule::create(),
            Player::Two => SentinelModule::create(),
        }
    }
}

/// Plays back a fixed action sequence, then does nothing. Battle info
/// deliveries are accepted and discarded.
pub struct ScriptedModule {
    actions: Vec<Action>,
    cursor: usize,
}

impl ScriptedModule {
    pub fn new(actions: Vec<Action>) -> Self {
        Self { actions, cursor: 0 }
    }
}

impl DecisionModule for ScriptedModule {
    fn next_action(&mut self) -> Action {
        let action = self
            .actions
            .get(self.cursor)
            .copied()
            .unwrap_or(Action::DoNothing);
        self.cursor += 1;
        action
    }

    fn receive_battle_info(&mut self, _info: BattleInfo) {}
}

/// Factory handing each tank a pre-written script. Tanks without a
/// script do nothing — handy for driving one side of a test scenario.
#[derive(Debug, Default)]
pub struct ScriptedFactory {
    scripts: HashMap<(Player, usize), Vec<Action>>,
}

impl ScriptedFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_script(mut self, player: Player, tank_index: usize, actions: Vec<Action>) -> Self {
        self.scripts.insert((player, tank_index), actions);
        self
    }
}

impl ModuleFactory for ScriptedFactory {
    fn create(&self, player: Player, tank_index: usize) -> Box<dyn DecisionModule> {
        let actions = self
            .scripts
            .get(&(player, tank_index))
            .cloned()
            .unwrap_or_default();
        Box::new(ScriptedModule::new(actions))
    }
}
