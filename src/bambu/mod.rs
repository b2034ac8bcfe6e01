//! This module contains the AMS model of Bambu Lab 3D printers.
//!
//! The printer reports its AMS units in the `print.ams` section of every
//! `push_status` message. [AmsHub::parse_report] takes that section as is,
//! [AmsHub::parse_list](crate::AmsHub::parse_list) takes the list of units
//! found under its `ams` key.

mod ams;
mod hub;
mod tray;

pub use ams::Ams;
pub use bambulabs::message::{EXTERNAL_SPOOL_AMS_ID, EXTERNAL_SPOOL_TRAY_ID};
pub use hub::AmsHub;
pub use tray::FilamentTray;
