//! The AMS section of a printer report.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::numeric::Numeric;

/// The AMS id the printer uses for the external spool holder.
pub const EXTERNAL_SPOOL_AMS_ID: u32 = 255;

/// The tray id the printer uses for the external spool holder.
pub const EXTERNAL_SPOOL_TRAY_ID: u32 = 254;

/// A raw record, one JSON object out of a report.
pub type RawRecord = Map<String, Value>;

/// The print ams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PrintAms {
    /// The ams units, kept raw so each one can be parsed on its own.
    pub ams: Option<Vec<RawRecord>>,
    /// The ams exist bits.
    pub ams_exist_bits: Option<String>,
    /// The tray exist bits.
    pub tray_exist_bits: Option<String>,
    /// The tray is bbl bits.
    pub tray_is_bbl_bits: Option<String>,
    /// The tray tar.
    pub tray_tar: Option<String>,
    /// The tray now.
    pub tray_now: Option<String>,
    /// The tray pre.
    pub tray_pre: Option<String>,
    /// The tray read done bits.
    pub tray_read_done_bits: Option<String>,
    /// The tray reading bits.
    pub tray_reading_bits: Option<String>,
    /// The version.
    pub version: Option<i64>,
    /// The insert flag.
    pub insert_flag: Option<bool>,
    /// The power on flag.
    pub power_on_flag: Option<bool>,
    #[serde(flatten)]
    other: BTreeMap<String, Value>,
}

impl PrintAms {
    /// The ams records in this report, empty when the section has none.
    pub fn ams_records(&self) -> &[RawRecord] {
        self.ams.as_deref().unwrap_or_default()
    }
}

/// The print ams data, one AMS unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PrintAmsData {
    /// The id.
    pub id: Numeric,
    /// The humidity level.
    pub humidity: Option<Numeric>,
    /// The humidity in percent, only sent by newer firmware.
    pub humidity_raw: Option<Numeric>,
    /// The temperature.
    pub temp: Option<Numeric>,
    /// The trays, kept raw so each one can be parsed on its own.
    #[serde(default)]
    pub tray: Option<Vec<RawRecord>>,
    #[serde(flatten)]
    other: BTreeMap<String, Value>,
}

/// The print tray.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PrintTray {
    /// The id.
    pub id: Numeric,
    /// The tag uid.
    pub tag_uid: Option<String>,
    /// The tray id name.
    pub tray_id_name: Option<String>,
    /// The tray info index.
    pub tray_info_idx: Option<String>,
    /// The tray type.
    pub tray_type: Option<String>,
    /// The tray sub brands.
    pub tray_sub_brands: Option<String>,
    /// The tray color.
    pub tray_color: Option<String>,
    /// The tray weight.
    pub tray_weight: Option<String>,
    /// The tray diameter.
    pub tray_diameter: Option<String>,
    /// The tray temperature.
    pub tray_temp: Option<String>,
    /// The tray time.
    pub tray_time: Option<String>,
    /// The bed temperature type.
    pub bed_temp_type: Option<String>,
    /// The bed temperature.
    pub bed_temp: Option<String>,
    /// The nozzle temperature max.
    pub nozzle_temp_max: Option<Numeric>,
    /// The nozzle temperature min.
    pub nozzle_temp_min: Option<Numeric>,
    /// The xcam info.
    pub xcam_info: Option<String>,
    /// The tray uuid.
    pub tray_uuid: Option<String>,
    /// The tray remain.
    pub remain: Option<i64>,
    /// The tray k.
    pub k: Option<Numeric>,
    /// The tray n.
    pub n: Option<Numeric>,
    /// The colors of a multi color spool.
    pub cols: Option<Vec<String>>,
    #[serde(flatten)]
    other: BTreeMap<String, Value>,
}

impl PrintTray {
    /// Returns true if the slot holds no spool.
    ///
    /// The printer still reports empty slots, but only with an id and
    /// without any filament data.
    pub fn is_empty_slot(&self) -> bool {
        self.n.is_none()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_deserialize_print_ams() {
        let message = r#"{
            "ams": [
                {
                    "humidity": "4",
                    "id": "0",
                    "temp": "24.6",
                    "tray": [
                        {
                            "bed_temp": "35",
                            "bed_temp_type": "1",
                            "cols": ["F72323FF"],
                            "id": "0",
                            "k": 0.019999999552965164,
                            "n": 1,
                            "nozzle_temp_max": "230",
                            "nozzle_temp_min": "190",
                            "remain": -1,
                            "tag_uid": "0000000000000000",
                            "tray_color": "F72323FF",
                            "tray_diameter": "1.75",
                            "tray_id_name": "",
                            "tray_info_idx": "GFL99",
                            "tray_sub_brands": "",
                            "tray_temp": "0",
                            "tray_time": "0",
                            "tray_type": "PLA",
                            "tray_uuid": "00000000000000000000000000000000",
                            "tray_weight": "0",
                            "xcam_info": "000000000000000000000000"
                        },
                        { "id": "1" }
                    ]
                }
            ],
            "ams_exist_bits": "1",
            "insert_flag": true,
            "power_on_flag": false,
            "tray_exist_bits": "1",
            "tray_is_bbl_bits": "1",
            "tray_now": "255",
            "tray_pre": "255",
            "tray_read_done_bits": "1",
            "tray_reading_bits": "0",
            "tray_tar": "255",
            "version": 4
        }"#;

        let ams: PrintAms = serde_json::from_str(message).unwrap();

        assert_eq!(ams.tray_now.as_deref(), Some("255"));
        assert_eq!(ams.ams_records().len(), 1);

        let unit: PrintAmsData = serde_json::from_value(Value::Object(ams.ams_records()[0].clone())).unwrap();
        assert_eq!(unit.id.as_u32().unwrap(), 0);
        assert_eq!(unit.humidity.unwrap().as_i64().unwrap(), 4);
        assert_eq!(unit.temp.unwrap().as_f64().unwrap(), 24.6);

        let trays = unit.tray.unwrap();
        assert_eq!(trays.len(), 2);

        let tray: PrintTray = serde_json::from_value(Value::Object(trays[0].clone())).unwrap();
        assert!(!tray.is_empty_slot());
        assert_eq!(tray.tray_type.as_deref(), Some("PLA"));
        assert_eq!(tray.nozzle_temp_max.unwrap().as_i64().unwrap(), 230);
        assert_eq!(tray.cols, Some(vec!["F72323FF".to_string()]));

        let empty: PrintTray = serde_json::from_value(Value::Object(trays[1].clone())).unwrap();
        assert!(empty.is_empty_slot());
    }

    #[test]
    fn test_deserialize_print_ams_without_units() {
        let ams: PrintAms = serde_json::from_str(r#"{ "tray_now": "255" }"#).unwrap();

        assert!(ams.ams_records().is_empty());
    }

    #[test]
    fn test_deserialize_print_tray_keeps_unknown_fields() {
        let tray: PrintTray = serde_json::from_str(r#"{ "id": 254, "n": 1, "state": 11 }"#).unwrap();

        assert_eq!(tray.id.as_u32().unwrap(), EXTERNAL_SPOOL_TRAY_ID);
        assert_eq!(tray.other.get("state"), Some(&Value::from(11)));
    }
}
