//! Capability traits over introspectable binary modules.
//!
//! The scanner only ever talks to these traits, so any host able to
//! enumerate types, methods, markers and parameter types can feed it.
//! Every enumeration is fallible on its own: a host may manage to list a
//! module's types but fail on one type's methods, and callers are expected
//! to contain such failures to the unit that produced them.

use crate::error::MetadataResult;
use crate::models::{Marker, TypeRef};

/// A loaded binary module.
pub trait ModuleMetadata {
    /// Display name of the module (for logging/diagnostics)
    fn name(&self) -> &str;

    /// Enumerate every type defined in the module.
    fn types(&self) -> MetadataResult<Vec<Box<dyn TypeMetadata + '_>>>;
}

/// A type defined in a module.
pub trait TypeMetadata {
    /// Fully-qualified name, e.g. `Game.Logic.Actions`
    fn full_name(&self) -> &str;

    /// Enumerate the public methods of the type.
    fn methods(&self) -> MetadataResult<Vec<Box<dyn MethodMetadata + '_>>>;
}

/// A method declared by exactly one type.
pub trait MethodMetadata {
    fn name(&self) -> &str;

    /// Formal parameter types, in declaration order.
    fn parameter_types(&self) -> MetadataResult<Vec<TypeRef>>;

    /// Markers attached to the method, in the order the host reports them.
    fn markers(&self) -> MetadataResult<Vec<Marker>>;
}
