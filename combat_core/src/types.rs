//! Core value types shared across the combat engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical statistics every actor carries (HP is tracked separately)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StatKind {
    /// Physical offensive capability
    Attack,
    /// Physical defensive capability, mitigates Physical damage
    Defense,
    /// Arcane offensive capability
    Magic,
    /// Arcane defensive capability, mitigates Arcane damage
    Resistance,
    /// Offensive speed, weighed against target Agility to determine hit
    Dexterity,
    /// Defensive speed, weighed against aggressor Dexterity
    Agility,
    /// Critical hit / critical success rate
    Luck,
    /// Progress towards the next (or previous) Tension level
    Hype,
}

impl StatKind {
    /// Get all canonical stats
    pub fn all() -> &'static [StatKind] {
        &[
            StatKind::Attack,
            StatKind::Defense,
            StatKind::Magic,
            StatKind::Resistance,
            StatKind::Dexterity,
            StatKind::Agility,
            StatKind::Luck,
            StatKind::Hype,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            StatKind::Attack => "Attack",
            StatKind::Defense => "Defense",
            StatKind::Magic => "Magic",
            StatKind::Resistance => "Resistance",
            StatKind::Dexterity => "Dexterity",
            StatKind::Agility => "Agility",
            StatKind::Luck => "Luck",
            StatKind::Hype => "Hype",
        }
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Five-level hype meter, ordered Min (0) through Max (4)
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Tension {
    #[default]
    Min,
    Low,
    Medium,
    High,
    Max,
}

impl Tension {
    pub fn ordinal(&self) -> u8 {
        match self {
            Tension::Min => 0,
            Tension::Low => 1,
            Tension::Medium => 2,
            Tension::High => 3,
            Tension::Max => 4,
        }
    }

    pub fn from_ordinal(ordinal: u8) -> Option<Tension> {
        match ordinal {
            0 => Some(Tension::Min),
            1 => Some(Tension::Low),
            2 => Some(Tension::Medium),
            3 => Some(Tension::High),
            4 => Some(Tension::Max),
            _ => None,
        }
    }

    /// One level up, saturating at Max
    pub fn raise(self) -> Tension {
        Tension::from_ordinal(self.ordinal() + 1).unwrap_or(Tension::Max)
    }

    /// One level down, saturating at Min
    pub fn lower(self) -> Tension {
        self.ordinal()
            .checked_sub(1)
            .and_then(Tension::from_ordinal)
            .unwrap_or(Tension::Min)
    }
}

/// The form damage arrives in. Only this decides mitigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageType {
    /// Mitigated by Defense
    Physical,
    /// Mitigated by Resistance
    Arcane,
    /// Never mitigated
    Pure,
}

impl DamageType {
    /// The stat that mitigates this damage type, if any
    pub fn mitigating_stat(&self) -> Option<StatKind> {
        match self {
            DamageType::Physical => Some(StatKind::Defense),
            DamageType::Arcane => Some(StatKind::Resistance),
            DamageType::Pure => None,
        }
    }
}

/// Elemental aspect of damage. Carried through resolution but not yet consulted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageElement {
    #[default]
    Neutral,
    Fire,
    Water,
    Air,
    Earth,
    Electric,
    Poison,
    Psychic,
    Ice,
    Dark,
    Light,
}

impl DamageElement {
    pub fn all() -> &'static [DamageElement] {
        &[
            DamageElement::Neutral,
            DamageElement::Fire,
            DamageElement::Water,
            DamageElement::Air,
            DamageElement::Earth,
            DamageElement::Electric,
            DamageElement::Poison,
            DamageElement::Psychic,
            DamageElement::Ice,
            DamageElement::Dark,
            DamageElement::Light,
        ]
    }
}
