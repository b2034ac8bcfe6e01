use std::collections::BTreeMap;

use bambulabs::{message::PrintTray, parser::parse_record};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::FilamentTray;
use crate::{Ams as AmsTrait, AmsOptions, Error, ParseConfig, RawRecord, RecordKind, Result, TrayIndex};

/// An AMS unit of a Bambu Lab printer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Ams {
    humidity: i64,
    temperature: f64,
    filament_trays: BTreeMap<TrayIndex, FilamentTray>,

    #[serde(skip)]
    parse: ParseConfig,
}

impl Ams {
    /// Parse a single raw tray record, returning `None` for an empty slot.
    fn parse_tray(record: &RawRecord) -> Result<Option<(TrayIndex, FilamentTray)>> {
        let wire: PrintTray = parse_record(record).map_err(|err| Error::invalid_record(RecordKind::Tray, err))?;
        let index = wire
            .id
            .as_u32()
            .map_err(|err| Error::invalid_record(RecordKind::Tray, err))?;

        if wire.is_empty_slot() {
            tracing::debug!("tray {} is empty", index);
            return Ok(None);
        }

        let tray = FilamentTray::try_from(wire).map_err(|err| Error::invalid_record(RecordKind::Tray, err))?;

        Ok(Some((index, tray)))
    }

    /// Iterate over the trays, by index.
    pub fn iter(&self) -> impl Iterator<Item = (&TrayIndex, &FilamentTray)> {
        self.filament_trays.iter()
    }

    /// A mutable reference to the tray at `index`.
    pub fn get_mut(&mut self, index: TrayIndex) -> Result<&mut FilamentTray> {
        self.filament_trays.get_mut(&index).ok_or(Error::TrayNotFound(index))
    }
}

impl AmsTrait for Ams {
    type Tray = FilamentTray;

    fn new(humidity: i64, temperature: f64, options: AmsOptions) -> Result<Self> {
        let mut ams = Self {
            humidity,
            temperature,
            filament_trays: BTreeMap::new(),
            parse: options.parse,
        };

        if let Some(trays) = options.tray {
            ams.process_trays(&trays)?;
        }

        Ok(ams)
    }

    fn humidity(&self) -> i64 {
        self.humidity
    }

    fn temperature(&self) -> f64 {
        self.temperature
    }

    fn filament_trays(&self) -> &BTreeMap<TrayIndex, FilamentTray> {
        &self.filament_trays
    }

    fn process_trays(&mut self, trays: &[RawRecord]) -> Result<()> {
        for record in trays {
            match Self::parse_tray(record) {
                Ok(Some((index, tray))) => self.set_filament_tray(tray, index),
                Ok(None) => {}
                Err(err) if !self.parse.strict => {
                    tracing::warn!("skipping tray record: {}", err);
                }
                Err(err) => return Err(err),
            }
        }

        Ok(())
    }

    fn set_filament_tray(&mut self, tray: FilamentTray, index: TrayIndex) {
        self.filament_trays.insert(index, tray);
    }
}
