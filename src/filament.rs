//! Filament settings and the known filament presets.

use parse_display::{Display, FromStr};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The filament settings the printer needs to load a spool.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct AmsFilamentSettings {
    /// The filament preset code, e.g. `GFA00`.
    pub tray_info_idx: String,
    /// The minimum nozzle temperature, in celsius.
    pub nozzle_temp_min: i64,
    /// The maximum nozzle temperature, in celsius.
    pub nozzle_temp_max: i64,
    /// The material, e.g. `PLA`.
    pub tray_type: String,
}

impl AmsFilamentSettings {
    /// Create new filament settings.
    pub fn new(tray_info_idx: &str, nozzle_temp_min: i64, nozzle_temp_max: i64, tray_type: &str) -> Self {
        Self {
            tray_info_idx: tray_info_idx.to_string(),
            nozzle_temp_min,
            nozzle_temp_max,
            tray_type: tray_type.to_string(),
        }
    }
}

/// The filament presets known to the printer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Display, FromStr)]
#[serde(rename_all = "snake_case")]
#[display(style = "snake_case")]
pub enum Filament {
    /// Polymaker PolyLite PLA.
    PolyLitePla,
    /// Polymaker PolyTerra PLA.
    PolyTerraPla,
    /// Bambu ABS.
    BambuAbs,
    /// Bambu PA-CF.
    BambuPaCf,
    /// Bambu PC.
    BambuPc,
    /// Bambu PLA Basic.
    BambuPlaBasic,
    /// Bambu PLA Matte.
    BambuPlaMatte,
    /// Bambu Support G.
    SupportG,
    /// Bambu Support W.
    SupportW,
    /// Bambu TPU 95A.
    BambuTpu95a,
    /// Generic ABS.
    Abs,
    /// Generic ASA.
    Asa,
    /// Generic PA.
    Pa,
    /// Generic PA-CF.
    PaCf,
    /// Generic PC.
    Pc,
    /// Generic PETG.
    Petg,
    /// Generic PLA.
    Pla,
    /// Generic PLA-CF.
    PlaCf,
    /// Generic PVA.
    Pva,
    /// Generic TPU.
    Tpu,
}

impl Filament {
    /// Every preset.
    pub const ALL: [Filament; 20] = [
        Filament::PolyLitePla,
        Filament::PolyTerraPla,
        Filament::BambuAbs,
        Filament::BambuPaCf,
        Filament::BambuPc,
        Filament::BambuPlaBasic,
        Filament::BambuPlaMatte,
        Filament::SupportG,
        Filament::SupportW,
        Filament::BambuTpu95a,
        Filament::Abs,
        Filament::Asa,
        Filament::Pa,
        Filament::PaCf,
        Filament::Pc,
        Filament::Petg,
        Filament::Pla,
        Filament::PlaCf,
        Filament::Pva,
        Filament::Tpu,
    ];

    /// The preset code reported as `tray_info_idx`.
    pub fn tray_info_idx(&self) -> &'static str {
        match self {
            Filament::PolyLitePla => "GFL00",
            Filament::PolyTerraPla => "GFL01",
            Filament::BambuAbs => "GFB00",
            Filament::BambuPaCf => "GFN03",
            Filament::BambuPc => "GFC00",
            Filament::BambuPlaBasic => "GFA00",
            Filament::BambuPlaMatte => "GFA01",
            Filament::SupportG => "GFS01",
            Filament::SupportW => "GFS00",
            Filament::BambuTpu95a => "GFU01",
            Filament::Abs => "GFB99",
            Filament::Asa => "GFB98",
            Filament::Pa => "GFN99",
            Filament::PaCf => "GFN98",
            Filament::Pc => "GFC99",
            Filament::Petg => "GFG99",
            Filament::Pla => "GFL99",
            Filament::PlaCf => "GFL98",
            Filament::Pva => "GFS99",
            Filament::Tpu => "GFU99",
        }
    }

    /// The settings the printer uses for this preset.
    pub fn settings(&self) -> AmsFilamentSettings {
        let (min, max, tray_type) = match self {
            Filament::PolyLitePla
            | Filament::PolyTerraPla
            | Filament::BambuPlaBasic
            | Filament::BambuPlaMatte
            | Filament::Pla
            | Filament::PlaCf => (190, 250, "PLA"),
            Filament::BambuAbs | Filament::Abs => (240, 270, "ABS"),
            Filament::Asa => (240, 270, "ASA"),
            Filament::BambuPaCf | Filament::PaCf => (270, 300, "PA-CF"),
            Filament::Pa => (270, 300, "PA"),
            Filament::BambuPc | Filament::Pc => (260, 280, "PC"),
            Filament::SupportG => (190, 250, "PA-S"),
            Filament::SupportW => (190, 250, "PLA-S"),
            Filament::BambuTpu95a | Filament::Tpu => (200, 250, "TPU"),
            Filament::Petg => (220, 260, "PETG"),
            Filament::Pva => (190, 250, "PVA"),
        };

        AmsFilamentSettings::new(self.tray_info_idx(), min, max, tray_type)
    }

    /// Look up a preset by its `tray_info_idx` code.
    pub fn from_tray_info_idx(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.tray_info_idx() == code)
    }
}

impl From<Filament> for AmsFilamentSettings {
    fn from(filament: Filament) -> Self {
        filament.settings()
    }
}
