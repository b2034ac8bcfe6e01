use std::collections::BTreeMap;

use bambulabs::{
    message::{PrintAms, PrintAmsData},
    parser::parse_record,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Ams;
use crate::{
    Ams as AmsTrait, AmsHub as AmsHubTrait, AmsId, AmsOptions, Error, ParseConfig, RawRecord, RecordKind, Result,
};

/// Every AMS unit hooked up to a Bambu Lab printer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AmsHub {
    ams_hub: BTreeMap<AmsId, Ams>,

    #[serde(skip)]
    parse: ParseConfig,
}

impl AmsHub {
    /// Create a new, empty hub that parses records with `parse`.
    pub fn with_config(parse: ParseConfig) -> Self {
        Self {
            ams_hub: BTreeMap::new(),
            parse,
        }
    }

    fn parse_ams(&self, record: &RawRecord) -> Result<(AmsId, Ams)> {
        let wire: PrintAmsData = parse_record(record).map_err(|err| Error::invalid_record(RecordKind::Ams, err))?;
        let invalid = |err: anyhow::Error| Error::invalid_record(RecordKind::Ams, err);

        let id = wire.id.as_u32().map_err(invalid)?;
        let humidity = match &wire.humidity {
            Some(humidity) => humidity.as_i64().map_err(invalid)?,
            None => 0,
        };
        let temperature = match &wire.temp {
            Some(temp) => temp.as_f64().map_err(invalid)?,
            None => 0.0,
        };

        let ams = Ams::new(
            humidity,
            temperature,
            AmsOptions {
                tray: wire.tray,
                parse: self.parse,
            },
        )?;

        Ok((id, ams))
    }

    /// Parse the AMS section of a printer report, e.g. `print.ams` of a
    /// `push_status` message.
    #[tracing::instrument(skip_all)]
    pub fn parse_report(&mut self, report: &serde_json::Value) -> Result<()> {
        let report: PrintAms = match report {
            serde_json::Value::Object(record) => {
                parse_record(record).map_err(|err| Error::invalid_record(RecordKind::Report, err))?
            }
            _ => {
                return Err(Error::InvalidRecord {
                    kind: RecordKind::Report,
                    reason: "expected a JSON object".to_string(),
                })
            }
        };

        self.parse_list(report.ams_records())
    }

    /// A mutable reference to the unit with `id`.
    pub fn get_mut(&mut self, id: AmsId) -> Result<&mut Ams> {
        self.ams_hub.get_mut(&id).ok_or(Error::AmsNotFound(id))
    }

    /// Iterate over the units, by id.
    pub fn iter(&self) -> impl Iterator<Item = (&AmsId, &Ams)> {
        self.ams_hub.iter()
    }

    /// The number of units in the hub.
    pub fn len(&self) -> usize {
        self.ams_hub.len()
    }

    /// Returns true if the hub holds no units.
    pub fn is_empty(&self) -> bool {
        self.ams_hub.is_empty()
    }
}

impl AmsHubTrait for AmsHub {
    type Ams = Ams;

    fn new() -> Self {
        Self::default()
    }

    fn ams_hub(&self) -> &BTreeMap<AmsId, Ams> {
        &self.ams_hub
    }

    #[tracing::instrument(skip_all)]
    fn parse_list(&mut self, records: &[RawRecord]) -> Result<()> {
        for record in records {
            match self.parse_ams(record) {
                Ok((id, ams)) => {
                    tracing::debug!("ams {} has {} trays", id, ams.filament_trays().len());
                    self.set(id, ams);
                }
                Err(err) if !self.parse.strict => {
                    tracing::warn!("skipping ams record: {}", err);
                }
                Err(err) => return Err(err),
            }
        }

        Ok(())
    }

    fn set(&mut self, id: AmsId, ams: Ams) {
        self.ams_hub.insert(id, ams);
    }
}
