//! Fixed tables used by the character generator.

pub const BACKGROUNDS: &[&str] = &[
    "Acolyte",
    "Sage",
    "Criminal",
    "Soldier",
    "Entertainer",
    "Hermit",
    "Guild Artisan",
    "Folk Hero",
    "Noble",
    "Urchin",
    "Investigator",
    "Archivist",
    "Shipwright",
    "Cartographer",
];

pub const RACES: &[&str] = &[
    "Human",
    "High Elf",
    "Wood Elf",
    "Drow",
    "Halfling",
    "Lightfoot Halfling",
    "Stout Halfling",
    "Half-Elf",
    "Half-Orc",
    "Tiefling",
    "Dragonborn",
    "Gnome",
    "Forest Gnome",
    "Rock Gnome",
    "Aasimar",
    "Goliath",
    "Kenku",
    "Tabaxi",
];

pub const CLASSES: &[&str] = &[
    "Fighter",
    "Rogue",
    "Wizard",
    "Sorcerer",
    "Cleric",
    "Barbarian",
    "Ranger",
    "Paladin",
    "Warlock",
    "Bard",
    "Monk",
    "Druid",
];

pub const ALIGNMENTS: &[&str] = &[
    "Lawful Good",
    "Neutral Good",
    "Chaotic Good",
    "Lawful Neutral",
    "True Neutral",
    "Chaotic Neutral",
    "Lawful Evil",
    "Neutral Evil",
    "Chaotic Evil",
];

pub const FIRST_NAMES: &[&str] = &[
    "Ash", "Rowan", "Kai", "Zara", "Mira", "Ira", "Sol", "Ren", "Luca", "Nia", "Asha", "Diego",
    "Omar", "Min", "Priya", "Kwame", "Aiko", "Sofia", "Mateo", "Lian", "Amara", "Chike", "Yara",
    "Noor", "Hana", "Eiji", "Marisol",
];

pub const SURNAMES: &[&str] = &[
    "Thorne",
    "Brightwood",
    "Maris",
    "Gale",
    "Ironheart",
    "Voss",
    "Kell",
    "N'dour",
    "Takeda",
    "Singh",
    "Garcia",
    "Okoye",
    "Hossain",
    "Ivanov",
    "Mbatha",
];

pub const LANGUAGES: &[&str] = &[
    "Common",
    "Elvish",
    "Dwarvish",
    "Halfling",
    "Infernal",
    "Abyssal",
    "Gnomish",
    "Goblin",
    "Orcish",
    "Sylvan",
    "Primordial",
    "Draconic",
    "Celestial",
    "Undercommon",
    "Thieves' Cant",
];

pub const SKILLS: &[&str] = &[
    "Athletics",
    "Acrobatics",
    "Sleight of Hand",
    "Stealth",
    "Arcana",
    "History",
    "Investigation",
    "Nature",
    "Religion",
    "Animal Handling",
    "Insight",
    "Medicine",
    "Perception",
    "Survival",
    "Persuasion",
    "Deception",
    "Intimidation",
];

pub const EQUIPMENT: &[&str] = &[
    "Explorer's Pack",
    "Dungeoneer's Pack",
    "Light Crossbow",
    "Longsword",
    "Shortsword",
    "Shield",
    "Spellbook",
    "Holy Symbol",
    "Thieves' Tools",
    "Crowbar",
    "Rope (50 ft)",
    "Traveler's Clothes",
];

pub const IDEALS: &[&str] = &[
    "Greater good",
    "Personal freedom",
    "Greed",
    "Balance",
    "Knowledge",
    "Power",
    "Honor",
];

pub const BONDS: &[&str] = &[
    "My family",
    "A mentor",
    "A lost love",
    "My sworn oath",
    "My home village",
    "A debt",
    "An old patron",
];

pub const FLAWS: &[&str] = &[
    "I judge too quickly",
    "I have a weakness for vices",
    "I hide secrets",
    "I act rashly",
    "I am distrustful",
];

pub const PERSONALITY_TRAITS: &[&str] = &[
    "Brave",
    "Cautious",
    "Curious",
    "Stoic",
    "Charismatic",
    "Reserved",
    "Hot-headed",
    "Playful",
    "Methodical",
];

/// Starting purse sizes, in gold pieces.
pub const STARTING_GOLD: &[u32] = &[0, 5, 10, 15, 25, 50];

pub const BASE_HEIGHT_IN: i32 = 60;
pub const BASE_WEIGHT_LB: i32 = 120;
pub const HEIGHT_VARIANCE_IN: (i32, i32) = (-6, 8);
pub const WEIGHT_VARIANCE_LB: (i32, i32) = (-20, 60);
pub const DEFAULT_AGE_RANGE: (i32, i32) = (16, 120);

/// Height (inches) and weight (pounds) offsets from the base build.
pub fn race_size_offsets(race: &str) -> (i32, i32) {
    match race {
        "Halfling" | "Lightfoot Halfling" | "Stout Halfling" => (-12, -30),
        "High Elf" | "Tiefling" => (0, -5),
        "Wood Elf" => (-2, -10),
        "Drow" => (-3, -15),
        "Half-Elf" => (-1, -10),
        "Half-Orc" => (4, 20),
        "Dragonborn" => (6, 30),
        "Gnome" => (-10, -25),
        "Aasimar" => (2, 5),
        "Goliath" => (10, 50),
        "Kenku" => (-8, -20),
        "Tabaxi" => (-4, -5),
        _ => (0, 0),
    }
}

/// Inclusive age range for a race.
pub fn race_age_range(race: &str) -> (i32, i32) {
    match race {
        "Human" => (16, 80),
        "High Elf" => (100, 750),
        "Wood Elf" => (100, 700),
        "Drow" => (90, 600),
        "Halfling" | "Lightfoot Halfling" | "Stout Halfling" => (20, 150),
        "Half-Elf" => (20, 180),
        "Half-Orc" => (14, 80),
        "Tiefling" => (16, 120),
        "Dragonborn" => (15, 80),
        "Gnome" | "Forest Gnome" | "Rock Gnome" => (40, 500),
        "Aasimar" => (18, 300),
        "Goliath" => (12, 90),
        "Kenku" => (10, 60),
        "Tabaxi" => (8, 80),
        _ => DEFAULT_AGE_RANGE,
    }
}

/// Languages a race knows besides Common.
pub fn racial_languages(race: &str) -> Vec<&'static str> {
    let mut languages = Vec::new();
    if race.contains("Elf") {
        languages.push("Elvish");
    }
    if race.contains("Dwarf") {
        languages.push("Dwarvish");
    }
    match race {
        "Tiefling" => languages.push("Infernal"),
        "Dragonborn" => languages.push("Draconic"),
        "Half-Orc" => languages.push("Orcish"),
        _ => {}
    }
    languages
}

/// First-level subclass options; empty for classes that pick one later.
pub fn subclass_options(class_name: &str) -> &'static [&'static str] {
    match class_name {
        "Barbarian" => &["Path of the Totem Warrior"],
        "Sorcerer" => &["Wild Magic", "Draconic Bloodline"],
        "Wizard" => &["Evocation", "Divination", "Abjuration"],
        "Fighter" => &["Champion", "Battle Master", "Eldritch Knight"],
        "Rogue" => &["Thief", "Assassin", "Arcane Trickster"],
        "Cleric" => &["Life Domain", "Light Domain", "War Domain"],
        "Paladin" => &["Oath of Devotion", "Oath of Vengeance", "Oath of Ancients"],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_race_has_an_age_range() {
        for race in RACES {
            let (lo, hi) = race_age_range(race);
            assert!(lo <= hi, "{race}");
        }
        assert_eq!(race_age_range("Dwarf"), DEFAULT_AGE_RANGE);
    }

    #[test]
    fn elves_speak_elvish() {
        assert_eq!(racial_languages("Wood Elf"), vec!["Elvish"]);
        assert_eq!(racial_languages("Half-Elf"), vec!["Elvish"]);
        assert_eq!(racial_languages("Half-Orc"), vec!["Orcish"]);
        assert!(racial_languages("Human").is_empty());
    }

    #[test]
    fn subclasses_only_for_early_choosers() {
        assert_eq!(subclass_options("Barbarian").len(), 1);
        assert!(subclass_options("Ranger").is_empty());
        assert!(subclass_options("Monk").is_empty());
    }
}
