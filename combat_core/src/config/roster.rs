//! Roster configuration loading - Ally and enemy templates

use super::ConfigError;
use crate::actor::{Actor, Ally, Enemy};
use crate::combat::Combat;
use crate::loot::{LootEntry, LootTable};
use crate::stat::StatLine;
use crate::types::Tension;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Shared actor fields of a template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorTemplate {
    pub name: String,
    #[serde(default = "default_level")]
    pub level: u32,
    pub hp: i64,
    #[serde(default)]
    pub tension: Tension,
    /// Starting value of every canonical stat
    pub stats: StatLine,
}

fn default_level() -> u32 {
    1
}

impl ActorTemplate {
    /// Build a fresh actor from this template
    pub fn build(&self) -> Result<Actor, ConfigError> {
        if self.hp <= 0 {
            return Err(ConfigError::ValidationError(format!(
                "{}: hp must be positive, got {}",
                self.name, self.hp
            )));
        }

        let actor = Actor::new(self.name.clone(), self.hp, &self.stats)
            .map_err(|err| ConfigError::ValidationError(format!("{}: {}", self.name, err)))?;

        Ok(actor.with_level(self.level).with_tension(self.tension))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllyTemplate {
    #[serde(flatten)]
    pub actor: ActorTemplate,
    #[serde(default)]
    pub exp: u64,
}

impl AllyTemplate {
    pub fn build(&self) -> Result<Ally, ConfigError> {
        Ok(Ally::new(self.actor.build()?).with_exp(self.exp))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyTemplate {
    #[serde(flatten)]
    pub actor: ActorTemplate,
    #[serde(default)]
    pub xp_ratio: f64,
    #[serde(default)]
    pub hype_ratio: f64,
    #[serde(default)]
    pub loot: Vec<LootEntry>,
}

impl EnemyTemplate {
    pub fn build(&self) -> Result<Enemy, ConfigError> {
        let name = &self.actor.name;
        for (field, ratio) in [("xp_ratio", self.xp_ratio), ("hype_ratio", self.hype_ratio)] {
            if !ratio.is_finite() || ratio < 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "{}: {} must be a non-negative number, got {}",
                    name, field, ratio
                )));
            }
        }
        if let Some(entry) = self
            .loot
            .iter()
            .find(|entry| !entry.weight.is_finite() || entry.weight < 0.0)
        {
            return Err(ConfigError::ValidationError(format!(
                "{}: loot weight for {} must be a non-negative number, got {}",
                name, entry.item.id, entry.weight
            )));
        }

        let loot_table: LootTable = self.loot.iter().cloned().collect();
        Ok(Enemy::new(self.actor.build()?, self.xp_ratio, self.hype_ratio).with_loot(loot_table))
    }
}

/// Container for roster templates
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub allies: Vec<AllyTemplate>,
    #[serde(default)]
    pub enemies: Vec<EnemyTemplate>,
}

impl RosterConfig {
    /// Build every template into a live roster
    pub fn build(&self) -> Result<Roster, ConfigError> {
        Ok(Roster {
            allies: self
                .allies
                .iter()
                .map(AllyTemplate::build)
                .collect::<Result<_, _>>()?,
            enemies: self
                .enemies
                .iter()
                .map(EnemyTemplate::build)
                .collect::<Result<_, _>>()?,
        })
    }
}

/// Actors built from a roster configuration
#[derive(Debug, Clone, Default)]
pub struct Roster {
    pub allies: Vec<Ally>,
    pub enemies: Vec<Enemy>,
}

impl Roster {
    pub fn ally(&self, name: &str) -> Option<&Ally> {
        self.allies.iter().find(|ally| ally.actor.name == name)
    }

    pub fn enemy(&self, name: &str) -> Option<&Enemy> {
        self.enemies.iter().find(|enemy| enemy.actor.name == name)
    }

    /// Put every ally on the player team and every enemy on the other
    pub fn into_combat(self) -> Combat {
        Combat::new(self.allies, self.enemies)
    }
}

/// Load a roster from a TOML file
pub fn load_roster(path: &Path) -> Result<Roster, ConfigError> {
    let config: RosterConfig = super::load_toml(path)?;
    config.build()
}

/// Load a roster from a TOML string
pub fn parse_roster(content: &str) -> Result<Roster, ConfigError> {
    let config: RosterConfig = super::parse_toml(content)?;
    config.build()
}

/// Get the bundled roster
pub fn default_roster() -> Result<Roster, ConfigError> {
    parse_roster(include_str!("../../config/roster.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StatKind;

    const ROSTER: &str = r#"
[[allies]]
name = "Kit"
level = 3
hp = 40
exp = 250
tension = "Low"

[allies.stats]
Attack = 8
Defense = 5
Magic = 2
Resistance = 3
Dexterity = 7
Agility = 6
Luck = 4
Hype = 0

[[enemies]]
name = "Bog Wisp"
level = 2
hp = 18
xp_ratio = 12.5
hype_ratio = 1.5

[enemies.stats]
Attack = 3
Defense = 1
Magic = 9
Resistance = 10
Dexterity = 5
Agility = 8
Luck = 2
Hype = 0

[[enemies.loot]]
weight = 3
id = "wisp_ember"
name = "Wisp Ember"

[[enemies.loot]]
weight = 0.5
id = "marsh_lantern"
name = "Marsh Lantern"
"#;

    #[test]
    fn test_parse_roster() {
        let roster = parse_roster(ROSTER).unwrap();

        let kit = roster.ally("Kit").unwrap();
        assert_eq!(kit.actor.level, 3);
        assert_eq!(kit.actor.hp.value(), 40);
        assert_eq!(kit.actor.tension, Tension::Low);
        assert_eq!(kit.exp(), 250);
        assert_eq!(kit.actor.stat(StatKind::Dexterity).unwrap().value, 7);

        let wisp = roster.enemy("Bog Wisp").unwrap();
        assert_eq!(wisp.actor.tension, Tension::Min);
        assert_eq!(wisp.xp_reward(), 25);
        assert_eq!(wisp.loot_table.entries().len(), 2);
        assert!((wisp.loot_table.entries()[0].weight - 3.0).abs() < f64::EPSILON);
        assert_eq!(wisp.loot_table.entries()[1].item.name, "Marsh Lantern");
    }

    #[test]
    fn test_missing_stat_rejected() {
        let toml = r#"
[[allies]]
name = "Half-Built"
hp = 10

[allies.stats]
Attack = 1
"#;
        let err = parse_roster(toml).unwrap_err();
        match err {
            ConfigError::ValidationError(msg) => {
                assert!(msg.contains("Half-Built"));
                assert!(msg.contains("Defense"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_negative_loot_weight_rejected() {
        let toml = r#"
[[enemies]]
name = "Cursed Chest"
hp = 10
xp_ratio = 1.0

[enemies.stats]
Attack = 0
Defense = 0
Magic = 0
Resistance = 0
Dexterity = 0
Agility = 0
Luck = 0
Hype = 0

[[enemies.loot]]
weight = -1.0
id = "void"
name = "Void"
"#;
        assert!(matches!(
            parse_roster(toml),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_unknown_stat_is_parse_error() {
        let toml = r#"
[[allies]]
name = "Typo"
hp = 10

[allies.stats]
Atack = 1
"#;
        assert!(matches!(parse_roster(toml), Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_default_roster_loads() {
        let roster = default_roster().unwrap();
        assert!(!roster.allies.is_empty());
        assert!(!roster.enemies.is_empty());

        let combat = roster.into_combat();
        assert!(!combat.is_over());
    }
}
