use std::collections::BTreeSet;

use anyhow::Context;
use bambulabs::{message::PrintTray, numeric::Numeric, parser::parse_record};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{AmsFilamentSettings, Error, FilamentTray as FilamentTrayTrait, RawRecord, RecordKind, Result};

/// A filament tray as reported by a Bambu Lab printer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FilamentTray {
    /// The pressure advance factor.
    pub k: f64,
    /// The flow dynamics index.
    pub n: i64,
    /// The uid of the spool's RFID tag.
    pub tag_uid: String,
    /// The tray id name.
    pub tray_id_name: String,
    /// The filament preset code.
    pub tray_info_idx: String,
    /// The material.
    pub tray_type: String,
    /// The material's sub brand.
    pub tray_sub_brands: String,
    /// The color as `RRGGBBAA`.
    pub tray_color: String,
    /// The spool weight.
    pub tray_weight: String,
    /// The filament diameter.
    pub tray_diameter: String,
    /// The drying temperature.
    pub tray_temp: String,
    /// The drying time.
    pub tray_time: String,
    /// The bed temperature type.
    pub bed_temp_type: String,
    /// The bed temperature.
    pub bed_temp: String,
    /// The maximum nozzle temperature.
    pub nozzle_temp_max: i64,
    /// The minimum nozzle temperature.
    pub nozzle_temp_min: i64,
    /// The xcam info.
    pub xcam_info: String,
    /// The spool uuid.
    pub tray_uuid: String,
    /// The colors of a multi color spool.
    pub cols: Option<Vec<String>>,
}

const KEYS: [&str; 19] = [
    "k",
    "n",
    "tag_uid",
    "tray_id_name",
    "tray_info_idx",
    "tray_type",
    "tray_sub_brands",
    "tray_color",
    "tray_weight",
    "tray_diameter",
    "tray_temp",
    "tray_time",
    "bed_temp_type",
    "bed_temp",
    "nozzle_temp_max",
    "nozzle_temp_min",
    "xcam_info",
    "tray_uuid",
    "cols",
];

fn read_i64(value: Option<&Numeric>, field: &str) -> anyhow::Result<i64> {
    match value {
        Some(value) => value.as_i64().with_context(|| format!("reading `{field}`")),
        None => Ok(0),
    }
}

impl TryFrom<PrintTray> for FilamentTray {
    type Error = anyhow::Error;

    fn try_from(tray: PrintTray) -> anyhow::Result<Self> {
        let k = match &tray.k {
            Some(k) => k.as_f64().context("reading `k`")?,
            None => 0.0,
        };

        Ok(Self {
            k,
            n: read_i64(tray.n.as_ref(), "n")?,
            nozzle_temp_max: read_i64(tray.nozzle_temp_max.as_ref(), "nozzle_temp_max")?,
            nozzle_temp_min: read_i64(tray.nozzle_temp_min.as_ref(), "nozzle_temp_min")?,
            tag_uid: tray.tag_uid.unwrap_or_default(),
            tray_id_name: tray.tray_id_name.unwrap_or_default(),
            tray_info_idx: tray.tray_info_idx.unwrap_or_default(),
            tray_type: tray.tray_type.unwrap_or_default(),
            tray_sub_brands: tray.tray_sub_brands.unwrap_or_default(),
            tray_color: tray.tray_color.unwrap_or_default(),
            tray_weight: tray.tray_weight.unwrap_or_default(),
            tray_diameter: tray.tray_diameter.unwrap_or_default(),
            tray_temp: tray.tray_temp.unwrap_or_default(),
            tray_time: tray.tray_time.unwrap_or_default(),
            bed_temp_type: tray.bed_temp_type.unwrap_or_default(),
            bed_temp: tray.bed_temp.unwrap_or_default(),
            xcam_info: tray.xcam_info.unwrap_or_default(),
            tray_uuid: tray.tray_uuid.unwrap_or_default(),
            cols: tray.cols,
        })
    }
}

impl FilamentTrayTrait for FilamentTray {
    fn keys() -> BTreeSet<&'static str> {
        KEYS.into_iter().collect()
    }

    fn from_dict(record: &RawRecord) -> Result<Self> {
        let mut tray: RawRecord = record
            .iter()
            .filter(|(key, _)| key.as_str() == "id" || KEYS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        // The wire type needs an id, but a tray on its own doesn't have one.
        tray.entry("id").or_insert_with(|| serde_json::Value::from(0));

        parse_record::<PrintTray>(&tray)
            .and_then(FilamentTray::try_from)
            .map_err(|err| Error::invalid_record(RecordKind::Tray, err))
    }

    fn filament(&self) -> AmsFilamentSettings {
        AmsFilamentSettings {
            tray_info_idx: self.tray_info_idx.clone(),
            nozzle_temp_min: self.nozzle_temp_min,
            nozzle_temp_max: self.nozzle_temp_max,
            tray_type: self.tray_type.clone(),
        }
    }
}

impl FilamentTray {
    /// The preset matching this tray's filament, if it is a known one.
    pub fn preset(&self) -> Option<crate::Filament> {
        crate::Filament::from_tray_info_idx(&self.tray_info_idx)
    }
}
