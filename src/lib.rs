#![deny(missing_docs)]
#![deny(missing_copy_implementations)]
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
#![deny(unused_import_braces)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

//! This crate models the Automated Material System (AMS) units hooked up
//! to a 3D printer, and the filament trays each unit holds.

#[cfg(feature = "bambu")]
pub mod bambu;
mod config;
mod error;
mod filament;
mod traits;

pub use config::{Config, ParseConfig};
pub use error::{Error, RecordKind, Result};
pub use filament::{AmsFilamentSettings, Filament};
pub use traits::{Ams, AmsHub, AmsOptions, FilamentTray};

/// The index of a filament tray within an AMS unit.
pub type TrayIndex = u32;

/// The id of an AMS unit within a hub.
pub type AmsId = u32;

/// A raw key/value record, as found in a printer report.
pub type RawRecord = serde_json::Map<String, serde_json::Value>;
