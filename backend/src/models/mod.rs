pub mod criteria;
pub mod geo;
pub mod macros;
pub mod record;

pub use criteria::*;
pub use geo::*;
pub use record::*;
