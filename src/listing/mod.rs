//! Vehicle listing domain model.
//!
//! Raw input (a JSON object and/or command-line overrides) is decoded here
//! into a fully validated [`VehicleListing`]. Rendering code only ever sees
//! the validated form.

pub mod choice;
pub mod dealer;
pub mod overrides;
pub mod value;
pub mod vehicle;

pub use choice::{Choice, FuelType, Gearbox, UlezStatus};
pub use dealer::DealerDetails;
pub use overrides::{DealerOverrides, VehicleOverrides, merge};
pub use vehicle::VehicleListing;
