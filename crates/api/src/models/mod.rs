pub mod marker;
pub mod registry;
pub mod type_ref;

pub use marker::{Marker, MarkerValue};
pub use registry::RegistryEntry;
pub use type_ref::TypeRef;
