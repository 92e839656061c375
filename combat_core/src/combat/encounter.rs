//! Combat - A player team facing an enemy team

use crate::actor::{Actor, Ally, Enemy};
use crate::error::CombatError;

/// The two teams of an encounter
#[derive(Debug, Clone, Default)]
pub struct Combat {
    pub player_team: Vec<Ally>,
    pub enemy_team: Vec<Enemy>,
}

impl Combat {
    pub fn new(player_team: Vec<Ally>, enemy_team: Vec<Enemy>) -> Self {
        Combat {
            player_team,
            enemy_team,
        }
    }

    /// Every participant, players first
    pub fn participants(&self) -> impl Iterator<Item = &Actor> {
        self.player_team
            .iter()
            .map(|ally| &ally.actor)
            .chain(self.enemy_team.iter().map(|enemy| &enemy.actor))
    }

    pub fn participants_mut(&mut self) -> impl Iterator<Item = &mut Actor> {
        self.player_team
            .iter_mut()
            .map(|ally| &mut ally.actor)
            .chain(self.enemy_team.iter_mut().map(|enemy| &mut enemy.actor))
    }

    /// Tick every participant's lasting effects once, stopping at the first failure
    pub fn end_of_round(&mut self) -> Result<(), CombatError> {
        for actor in self.participants_mut() {
            actor.handle_lasting_effects()?;
        }
        Ok(())
    }

    pub fn living_allies(&self) -> impl Iterator<Item = &Ally> {
        self.player_team.iter().filter(|ally| ally.actor.is_alive())
    }

    pub fn living_enemies(&self) -> impl Iterator<Item = &Enemy> {
        self.enemy_team.iter().filter(|enemy| enemy.actor.is_alive())
    }

    /// True once either team has no one left standing
    pub fn is_over(&self) -> bool {
        self.living_allies().next().is_none() || self.living_enemies().next().is_none()
    }
}
