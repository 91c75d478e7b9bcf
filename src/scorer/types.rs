use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// The five composite scores ("gokaku").
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSet {
    pub celestial: u32,
    pub personal: u32,
    pub earthly: u32,
    pub external: u32,
    pub total: u32,
}

/// The five phases ("gogyo"), in bucket order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl Element {
    pub const ALL: [Element; 5] = [
        Element::Wood,
        Element::Fire,
        Element::Earth,
        Element::Metal,
        Element::Water,
    ];

    /// Element of a score, from its last digit: 1-2 wood, 3-4 fire,
    /// 5-6 earth, 7-8 metal, 9-0 water.
    pub fn from_score(score: u32) -> Self {
        let digit = match score % 10 {
            0 => 10,
            d => d,
        };
        Self::ALL[((digit - 1) / 2) as usize]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn kanji(self) -> char {
        match self {
            Self::Wood => '木',
            Self::Fire => '火',
            Self::Earth => '土',
            Self::Metal => '金',
            Self::Water => '水',
        }
    }
}

/// Three-powers fortune tier ("sansai kikkyo").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Fortune {
    Inauspicious,
    Fair,
    Great,
}

impl Fortune {
    pub fn label(self) -> &'static str {
        match self {
            Self::Inauspicious => "凶",
            Self::Fair => "中吉",
            Self::Great => "大吉",
        }
    }
}

/// Elements of the three core scores and the resulting fortune.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementSet {
    pub celestial: Element,
    pub personal: Element,
    pub earthly: Element,
    pub fortune: Fortune,
}
