//! Common traits used throughout this crate to model the AMS units of a
//! printer and the spools they hold.

use std::collections::{BTreeMap, BTreeSet};

use crate::{AmsFilamentSettings, AmsId, Error, ParseConfig, RawRecord, Result, TrayIndex};

/// A `FilamentTray` is one slot of an AMS, holding one spool of filament.
pub trait FilamentTray: Sized {
    /// The names of the fields a tray carries.
    fn keys() -> BTreeSet<&'static str>;

    /// Build a tray out of one raw tray record. Keys that are not part of
    /// [FilamentTray::keys] are ignored.
    fn from_dict(record: &RawRecord) -> Result<Self>;

    /// The filament settings for the spool in this tray.
    fn filament(&self) -> AmsFilamentSettings;
}

/// Options accepted when constructing an [Ams].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AmsOptions {
    /// Raw tray records to populate the unit with.
    pub tray: Option<Vec<RawRecord>>,

    /// How the raw tray records are parsed.
    pub parse: ParseConfig,
}

impl AmsOptions {
    /// Options populating the unit with the given raw tray records.
    pub fn with_trays(trays: Vec<RawRecord>) -> Self {
        Self {
            tray: Some(trays),
            ..Default::default()
        }
    }
}

/// An `Ams` (Automated Material System) is a single material storage unit,
/// with its own humidity and temperature readings, holding filament trays
/// by index.
pub trait Ams: Sized {
    /// The filament tray stored in this unit.
    type Tray: FilamentTray;

    /// Create a new unit. If `options` carries tray records they are
    /// processed as by [Ams::process_trays].
    fn new(humidity: i64, temperature: f64, options: AmsOptions) -> Result<Self>;

    /// The humidity reading of the unit.
    fn humidity(&self) -> i64;

    /// The temperature reading of the unit, in celsius.
    fn temperature(&self) -> f64;

    /// The filament trays by index.
    fn filament_trays(&self) -> &BTreeMap<TrayIndex, Self::Tray>;

    /// Parse raw tray records and store the resulting trays.
    fn process_trays(&mut self, trays: &[RawRecord]) -> Result<()>;

    /// Store `tray` at `index`, replacing any tray already there.
    fn set_filament_tray(&mut self, tray: Self::Tray, index: TrayIndex);

    /// The tray at `index`, if there is one.
    fn get_filament_tray(&self, index: TrayIndex) -> Option<&Self::Tray> {
        self.filament_trays().get(&index)
    }

    /// The tray at `index`.
    ///
    /// Returns [Error::TrayNotFound] when there is no tray at `index`.
    fn get(&self, index: TrayIndex) -> Result<&Self::Tray> {
        self.get_filament_tray(index).ok_or(Error::TrayNotFound(index))
    }

    /// Store `tray` at `index`.
    fn set(&mut self, index: TrayIndex, tray: Self::Tray) {
        self.set_filament_tray(tray, index)
    }
}

/// An `AmsHub` manages every [Ams] hooked up to a printer, by id.
pub trait AmsHub: Sized {
    /// The AMS unit managed by this hub.
    type Ams: Ams;

    /// Create a new, empty hub.
    fn new() -> Self;

    /// The AMS units by id.
    fn ams_hub(&self) -> &BTreeMap<AmsId, Self::Ams>;

    /// Parse raw AMS records and store the resulting units.
    fn parse_list(&mut self, records: &[RawRecord]) -> Result<()>;

    /// Store `ams` under `id`, replacing any unit already there.
    fn set(&mut self, id: AmsId, ams: Self::Ams);

    /// The unit with `id`, if there is one.
    fn get_ams(&self, id: AmsId) -> Option<&Self::Ams> {
        self.ams_hub().get(&id)
    }

    /// The unit with `id`.
    ///
    /// Returns [Error::AmsNotFound] when there is no unit with `id`.
    fn get(&self, id: AmsId) -> Result<&Self::Ams> {
        self.get_ams(id).ok_or(Error::AmsNotFound(id))
    }

    /// The tray at `tray_index` in the unit with `ams_id`.
    fn tray(&self, ams_id: AmsId, tray_index: TrayIndex) -> Result<&<Self::Ams as Ams>::Tray> {
        self.get(ams_id)?.get(tray_index)
    }
}
