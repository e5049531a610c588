//! Usage: Closed catalog of emulated systems that have a bezel pack, plus the per-system path rule.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KnownSystem {
    Mame,
    Atari2600,
    Atari5200,
    Atari7800,
    Gb,
    Gba,
    Gbc,
    GceVectrex,
    MasterSystem,
    Megadrive,
    N64,
    Nes,
    Sega32x,
    SegaCd,
    Sg1000,
    Snes,
    SuperGrafx,
    Sfc,
    Psx,
    Tg16,
    TgCd,
    ColecoVision,
    Dreamcast,
    Naomi,
    Atomiswave,
}

impl KnownSystem {
    pub const ALL: [KnownSystem; 25] = [
        KnownSystem::Mame,
        KnownSystem::Atari2600,
        KnownSystem::Atari5200,
        KnownSystem::Atari7800,
        KnownSystem::Gb,
        KnownSystem::Gba,
        KnownSystem::Gbc,
        KnownSystem::GceVectrex,
        KnownSystem::MasterSystem,
        KnownSystem::Megadrive,
        KnownSystem::N64,
        KnownSystem::Nes,
        KnownSystem::Sega32x,
        KnownSystem::SegaCd,
        KnownSystem::Sg1000,
        KnownSystem::Snes,
        KnownSystem::SuperGrafx,
        KnownSystem::Sfc,
        KnownSystem::Psx,
        KnownSystem::Tg16,
        KnownSystem::TgCd,
        KnownSystem::ColecoVision,
        KnownSystem::Dreamcast,
        KnownSystem::Naomi,
        KnownSystem::Atomiswave,
    ];

    /// Identifier used on disk, in the UI and in pack repository names.
    pub fn as_str(self) -> &'static str {
        match self {
            KnownSystem::Mame => "MAME",
            KnownSystem::Atari2600 => "Atari2600",
            KnownSystem::Atari5200 => "Atari5200",
            KnownSystem::Atari7800 => "Atari7800",
            KnownSystem::Gb => "GB",
            KnownSystem::Gba => "GBA",
            KnownSystem::Gbc => "GBC",
            KnownSystem::GceVectrex => "GCEVectrex",
            KnownSystem::MasterSystem => "MasterSystem",
            KnownSystem::Megadrive => "Megadrive",
            KnownSystem::N64 => "N64",
            KnownSystem::Nes => "NES",
            KnownSystem::Sega32x => "Sega32X",
            KnownSystem::SegaCd => "SegaCD",
            KnownSystem::Sg1000 => "SG-1000",
            KnownSystem::Snes => "SNES",
            KnownSystem::SuperGrafx => "SuperGrafx",
            KnownSystem::Sfc => "SFC",
            KnownSystem::Psx => "PSX",
            KnownSystem::Tg16 => "TG16",
            KnownSystem::TgCd => "TG-CD",
            KnownSystem::ColecoVision => "ColecoVision",
            KnownSystem::Dreamcast => "Dreamcast",
            KnownSystem::Naomi => "Naomi",
            KnownSystem::Atomiswave => "Atomiswave",
        }
    }

    pub fn from_name(name: &str) -> Option<KnownSystem> {
        let name = name.trim();
        Self::ALL.into_iter().find(|s| s.as_str() == name)
    }

    pub fn catalog_index(self) -> usize {
        Self::ALL
            .iter()
            .position(|s| *s == self)
            .unwrap_or(Self::ALL.len())
    }

    /// Where an installed pack for this system lives, relative to the RetroArch root.
    pub fn installed_rel_path(self) -> PathBuf {
        match self {
            KnownSystem::Mame => PathBuf::from("overlay").join("ArcadeBezels"),
            other => PathBuf::from("overlay")
                .join("GameBezels")
                .join(other.as_str()),
        }
    }
}

impl std::fmt::Display for KnownSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for KnownSystem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for KnownSystem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        KnownSystem::from_name(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown system: {raw}")))
    }
}
