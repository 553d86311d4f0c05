pub mod region;
pub mod sensor;

pub use region::Region;
pub use sensor::Sensor;
