//! boompie grows directory trees on disk from declarative descriptors.
//!
//! A descriptor is a small yaml or toml document describing directories and
//! files; [`saadjie`] turns it into a typed node tree and [`materialize`]
//! walks that tree performing the file-system effects. Everything else here
//! is the surrounding command surface: the template [`catalog`], [`config`]
//! lookup, [`prompt`]s and the [`preview`].

pub mod api;
pub mod catalog;
pub mod config;
pub mod descriptor;
pub mod errors;
pub mod materialize;
pub mod preview;
pub mod prompt;
pub mod scaffold;
pub mod utils;
