//! Static and symbolic inspection of candidate programs.
pub mod redundancy;
pub mod telemetry;

pub use redundancy::screen;
pub use telemetry::ProgramProfile;
