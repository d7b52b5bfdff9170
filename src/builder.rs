// Fluent builder for a game character. Setters take `&mut self` and
// return `&mut Self`, so chains work in one expression and the builder
// stays usable after `build()`; every `build()` yields a fresh,
// independent character.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::console::Console;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassType {
    Mage,
    Warrior,
    Rogue,
}

impl fmt::Display for ClassType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ClassType::Mage => "mage",
            ClassType::Warrior => "warrior",
            ClassType::Rogue => "rogue",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown class type: {0}")]
pub struct ParseClassTypeError(String);

impl FromStr for ClassType {
    type Err = ParseClassTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mage" => Ok(ClassType::Mage),
            "warrior" => Ok(ClassType::Warrior),
            "rogue" => Ok(ClassType::Rogue),
            other => Err(ParseClassTypeError(other.to_string())),
        }
    }
}

/// Assembled character. No public mutators: immutable in spirit once
/// built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    name: String,
    class_type: ClassType,
    level: u32,
    strength: u32,
    agility: u32,
    intelligence: u32,
    defense: u32,
}

impl Character {
    /// Entry point to the builder; identity is fixed here.
    pub fn builder(name: impl Into<String>, class_type: ClassType) -> CharacterBuilder {
        CharacterBuilder::new(name, class_type)
    }

    /// Read-only enumeration of every field, one line each.
    pub fn display_stats(&self, out: &dyn Console) {
        out.line(&format!("Name: {}", self.name));
        out.line(&format!("Class Type: {}", self.class_type));
        out.line(&format!("Level: {}", self.level));
        out.line(&format!("Strength: {}", self.strength));
        out.line(&format!("Agility: {}", self.agility));
        out.line(&format!("Intelligence: {}", self.intelligence));
        out.line(&format!("Defense: {}", self.defense));
    }
}

/// Fields never set fall back to explicit defaults in `build()`:
/// level 1, every stat 0.
#[derive(Debug, Clone)]
pub struct CharacterBuilder {
    name: String,
    class_type: ClassType,
    level: Option<u32>,
    strength: Option<u32>,
    agility: Option<u32>,
    intelligence: Option<u32>,
    defense: Option<u32>,
}

impl CharacterBuilder {
    pub fn new(name: impl Into<String>, class_type: ClassType) -> Self {
        Self {
            name: name.into(),
            class_type,
            level: None,
            strength: None,
            agility: None,
            intelligence: None,
            defense: None,
        }
    }

    // Setters may run zero or more times in any order; the last call
    // for a field wins.
    pub fn level(&mut self, level: u32) -> &mut Self {
        self.level = Some(level);
        self
    }

    pub fn strength(&mut self, strength: u32) -> &mut Self {
        self.strength = Some(strength);
        self
    }

    pub fn agility(&mut self, agility: u32) -> &mut Self {
        self.agility = Some(agility);
        self
    }

    pub fn intelligence(&mut self, intelligence: u32) -> &mut Self {
        self.intelligence = Some(intelligence);
        self
    }

    pub fn defense(&mut self, defense: u32) -> &mut Self {
        self.defense = Some(defense);
        self
    }

    /// Non-consuming: repeated calls yield equal, independent
    /// characters and leave the builder usable.
    pub fn build(&self) -> Character {
        Character {
            name: self.name.clone(),
            class_type: self.class_type,
            level: self.level.unwrap_or(1),
            strength: self.strength.unwrap_or(0),
            agility: self.agility.unwrap_or(0),
            intelligence: self.intelligence.unwrap_or(0),
            defense: self.defense.unwrap_or(0),
        }
    }
}

pub fn demo(out: &dyn Console) {
    let ariel = Character::builder("Ariel", ClassType::Warrior)
        .level(10)
        .defense(235)
        .intelligence(10)
        .agility(10)
        .strength(1000)
        .build();

    ariel.display_stats(out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Memory;

    #[test]
    fn ariel_scenario_displays_all_stats_in_order() {
        let out = Memory::new();
        demo(&out);
        assert_eq!(
            out.lines(),
            vec![
                "Name: Ariel",
                "Class Type: warrior",
                "Level: 10",
                "Strength: 1000",
                "Agility: 10",
                "Intelligence: 10",
                "Defense: 235",
            ]
        );
    }

    #[test]
    fn unset_fields_default_explicitly() {
        let rookie = Character::builder("Pip", ClassType::Rogue).build();

        let out = Memory::new();
        rookie.display_stats(&out);
        assert_eq!(
            out.lines(),
            vec![
                "Name: Pip",
                "Class Type: rogue",
                "Level: 1",
                "Strength: 0",
                "Agility: 0",
                "Intelligence: 0",
                "Defense: 0",
            ]
        );
    }

    #[test]
    fn later_setter_calls_overwrite_earlier_ones() {
        let mut builder = Character::builder("Zora", ClassType::Mage);
        builder.level(3).level(7).intelligence(40);
        builder.intelligence(55);

        let out = Memory::new();
        builder.build().display_stats(&out);
        let lines = out.lines();
        assert_eq!(lines[2], "Level: 7");
        assert_eq!(lines[5], "Intelligence: 55");
    }

    #[test]
    fn build_does_not_invalidate_the_builder() {
        let mut builder = Character::builder("Zora", ClassType::Mage);
        builder.level(7);

        let first = builder.build();
        let second = builder.build();
        assert_eq!(first, second);

        // Still usable: later sets affect later builds only.
        builder.level(8);
        let third = builder.build();
        assert_ne!(second, third);
        assert_eq!(first, second);
    }

    #[test]
    fn class_type_parses_valid_spellings() {
        assert_eq!("mage".parse(), Ok(ClassType::Mage));
        assert_eq!("warrior".parse(), Ok(ClassType::Warrior));
        assert_eq!("rogue".parse(), Ok(ClassType::Rogue));
    }

    #[test]
    fn class_type_rejects_unknown_spellings() {
        let err = "paladin".parse::<ClassType>().unwrap_err();
        assert_eq!(err.to_string(), "unknown class type: paladin");
        assert!("Warrior".parse::<ClassType>().is_err());
    }

    #[test]
    fn class_type_display_round_trips() {
        for class in [ClassType::Mage, ClassType::Warrior, ClassType::Rogue] {
            assert_eq!(class.to_string().parse(), Ok(class));
        }
    }
}
