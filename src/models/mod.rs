pub mod crop_profile;
pub mod prediction;
pub mod weather;

pub use crop_profile::*;
pub use prediction::*;
pub use weather::*;
