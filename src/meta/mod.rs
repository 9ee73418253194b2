//! Explicit type-metadata model: registry arena, class and member
//! descriptors, and the borrowed view handles the rest of the crate
//! operates on.

mod annotation;
mod member;
mod modifiers;
mod registry;
mod ty;

pub use annotation::{AnnotationInstance, AttrValue};
pub use member::{Constructor, Field, Method};
pub use modifiers::{ClassFlags, Modifiers};
pub use registry::{
    ClassDecl, ConstructorDecl, FieldDecl, MetaError, MethodDecl, Primitive, TypeRegistry,
};
pub use ty::{Class, ClassKind, TypeId};
