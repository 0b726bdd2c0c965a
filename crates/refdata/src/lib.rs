pub mod loaders;
pub mod normalise;
pub mod tables;

pub use normalise::{normalise_lga_name, normalise_suburb_name};
pub use tables::{CrimeRow, LgaRow, LocationInputs, ReferenceData, SeifaRow};
