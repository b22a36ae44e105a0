//! Literal tables behind the catalog.

pub mod electricity;
pub mod finance;
pub mod home;
pub mod model_hub;
pub mod oil_gas;
pub mod showcase;
