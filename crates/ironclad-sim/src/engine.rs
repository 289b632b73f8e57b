//! Battle engine — the tick scheduler at the core of the simulation.
//!
//! `BattleEngine` owns the arena, the tank and shell lists, and the
//! decision modules. Each `tick()` runs the per-tick phases in a fixed
//! order and returns a `TickReport`; after an end condition fires the
//! outcome is available and `tick()` must not be called again. No RNG:
//! identical maps and modules replay identically.

use tracing::{debug, info};

use ironclad_core::constants::ZERO_AMMO_TIE_TICKS;
use ironclad_core::entities::{Shell, Tank};
use ironclad_core::enums::{Action, Cell, Player};
use ironclad_core::events::GameEvent;
use ironclad_core::module::{DecisionModule, ModuleFactory};
use ironclad_core::state::{ActionRecord, BattleOutcome, TickReport};
use serde::{Deserialize, Serialize};

use ironclad_arena::{Arena, MapFile};

use crate::systems;
use crate::world_setup;

/// Parameters a battle runs under, taken from the map header.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BattleConfig {
    /// Tick bound after which the game ties.
    pub max_steps: u32,
    /// Initial ammo per tank.
    pub num_shells: u32,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            max_steps: 1000,
            num_shells: 20,
        }
    }
}

/// The simulation engine. Owns all battle state.
pub struct BattleEngine {
    arena: Arena,
    tanks: Vec<Tank>,
    shells: Vec<Shell>,
    modules: Vec<Box<dyn DecisionModule>>,
    config: BattleConfig,
    tick: u32,
    zero_ammo_ticks: u32,
    outcome: Option<BattleOutcome>,
    events: Vec<GameEvent>,
}

impl BattleEngine {
    /// Set up a battle from a validated map, creating one decision module
    /// per tank through `factory`.
    pub fn new(map: MapFile, factory: &dyn ModuleFactory) -> Self {
        let (tanks, modules) = world_setup::spawn_forces(&map, factory);
        debug!(
            tanks = tanks.len(),
            width = map.arena.width(),
            height = map.arena.height(),
            max_steps = map.max_steps,
            "battle set up"
        );
        Self {
            arena: map.arena,
            tanks,
            shells: Vec::new(),
            modules,
            config: BattleConfig {
                max_steps: map.max_steps,
                num_shells: map.num_shells,
            },
            tick: 0,
            zero_ammo_ticks: 0,
            outcome: None,
            events: Vec::new(),
        }
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn tanks(&self) -> &[Tank] {
        &self.tanks
    }

    pub fn shells(&self) -> &[Shell] {
        &self.shells
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    /// Ticks completed so far (the first tick is 1).
    pub fn tick_count(&self) -> u32 {
        self.tick
    }

    /// The terminal result, once an end condition has fired.
    pub fn outcome(&self) -> Option<&BattleOutcome> {
        self.outcome.as_ref()
    }

    /// Advance the battle by one tick and return its report.
    pub fn tick(&mut self) -> TickReport {
        assert!(self.outcome.is_none(), "tick() called after game over");
        self.events.clear();
        self.tick += 1;

        // 1. Reset per-tick flags.
        for tank in self.tanks.iter_mut().filter(|t| t.alive) {
            tank.reset_tick_state();
        }

        // 2. Poll each alive tank's module in stable id order and execute.
        //    Battle info is synthesized and delivered on request, so later
        //    tanks' snapshots see earlier tanks' moves this tick.
        for i in 0..self.tanks.len() {
            if !self.tanks[i].alive {
                continue;
            }
            let action = self.modules[i].next_action();
            systems::actions::execute(&mut self.tanks[i], action, &self.arena, &mut self.shells);
            if action == Action::GetBattleInfo {
                let info =
                    systems::snapshot::build_battle_info(&self.arena, &self.tanks, &self.shells, i);
                self.modules[i].receive_battle_info(info);
            }
        }

        // 3. Collision pass (a): tank-mine, tank-tank.
        systems::collision::resolve(
            &mut self.arena,
            &mut self.tanks,
            &mut self.shells,
            &mut self.events,
        );

        // 4/5. Shell sub-steps with a collision pass after each, so a
        //      shell cannot tunnel through an obstacle or another shell.
        for _ in 0..ironclad_core::constants::SHELL_SUBSTEPS_PER_TICK {
            systems::shells::advance_substep(&mut self.shells, &self.arena, &mut self.events);
            systems::collision::resolve(
                &mut self.arena,
                &mut self.tanks,
                &mut self.shells,
                &mut self.events,
            );
        }

        // 6. Reclaim deactivated shells.
        systems::cleanup::sweep_shells(&mut self.shells);

        // 7. Cooldowns tick down. The reverse machine has no time-driven
        //    transitions, so nothing else ages here.
        for tank in self.tanks.iter_mut().filter(|t| t.alive) {
            tank.cooldown = tank.cooldown.saturating_sub(1);
        }

        // 8. The tick's log records, one per tank in id order.
        let records = self.tanks.iter().map(Self::record_for).collect();

        // 9. End-of-game evaluation.
        self.update_zero_ammo_counter();
        self.evaluate_end_conditions();
        self.check_invariants();

        TickReport {
            tick: self.tick,
            records,
            events: self.events.clone(),
        }
    }

    /// Run ticks until an end condition fires.
    pub fn run(&mut self) -> (Vec<TickReport>, BattleOutcome) {
        let mut reports = Vec::new();
        while self.outcome.is_none() {
            reports.push(self.tick());
        }
        let outcome = self.outcome.clone().expect("loop exits with outcome set");
        info!(%outcome, ticks = self.tick, "battle finished");
        (reports, outcome)
    }

    fn record_for(tank: &Tank) -> ActionRecord {
        if !tank.alive && !tank.killed_this_tick {
            return ActionRecord {
                action: None,
                ignored: false,
                killed: false,
            };
        }
        ActionRecord {
            action: Some(tank.last_action.unwrap_or(Action::DoNothing)),
            ignored: tank.last_action_ignored,
            killed: tank.killed_this_tick,
        }
    }

    fn alive_count(&self, player: Player) -> u32 {
        self.tanks
            .iter()
            .filter(|t| t.alive && t.player == player)
            .count() as u32
    }

    /// The tie-out clock runs while every alive tank on both sides is out
    /// of ammo and resets the moment any tank has a shell left.
    fn update_zero_ammo_counter(&mut self) {
        let any_ammo = self.tanks.iter().any(|t| t.alive && t.ammo > 0);
        if any_ammo {
            self.zero_ammo_ticks = 0;
        } else {
            self.zero_ammo_ticks += 1;
        }
    }

    /// Evaluate the end conditions in their fixed precedence order.
    fn evaluate_end_conditions(&mut self) {
        let p1 = self.alive_count(Player::One);
        let p2 = self.alive_count(Player::Two);

        self.outcome = if p1 == 0 && p2 == 0 {
            Some(BattleOutcome::MutualDestruction)
        } else if p2 == 0 {
            Some(BattleOutcome::Victory {
                player: Player::One,
                tanks_alive: p1,
            })
        } else if p1 == 0 {
            Some(BattleOutcome::Victory {
                player: Player::Two,
                tanks_alive: p2,
            })
        } else if self.zero_ammo_ticks >= ZERO_AMMO_TIE_TICKS {
            Some(BattleOutcome::AmmoDepleted {
                ticks: ZERO_AMMO_TIE_TICKS,
            })
        } else if self.tick >= self.config.max_steps {
            Some(BattleOutcome::MaxSteps {
                max_steps: self.config.max_steps,
                player1_alive: p1,
                player2_alive: p2,
            })
        } else {
            None
        };
    }

    /// Between-tick invariants. A violation is a programming bug, not a
    /// game state, so these abort in debug builds.
    fn check_invariants(&self) {
        if cfg!(not(debug_assertions)) {
            return;
        }
        let alive: Vec<&Tank> = self.tanks.iter().filter(|t| t.alive).collect();
        for (i, a) in alive.iter().enumerate() {
            for b in &alive[i + 1..] {
                debug_assert!(
                    a.position != b.position,
                    "alive tanks share {:?} after tick {}",
                    a.position,
                    self.tick
                );
            }
            debug_assert!(a.cooldown <= ironclad_core::constants::SHOOT_COOLDOWN_TICKS);
            debug_assert!(
                self.arena.cell_at(a.position) != Cell::Mine,
                "tank parked on a mine after tick {}",
                self.tick
            );
        }
        for shell in self.shells.iter().filter(|s| s.active) {
            debug_assert!(self.arena.cell_at(shell.position) != Cell::Mine);
        }
        for y in 0..self.arena.height() as i32 {
            for x in 0..self.arena.width() as i32 {
                let p = ironclad_core::types::Position::new(x, y);
                match self.arena.cell_at(p) {
                    Cell::WeakWall => debug_assert_eq!(self.arena.wall_hits(p), 1),
                    _ => debug_assert_eq!(self.arena.wall_hits(p), 0),
                }
            }
        }
    }
}
