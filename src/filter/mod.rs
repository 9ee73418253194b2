//! Composable predicates over class and member metadata.
//!
//! Four filter traits, one per member kind; a primitive implements every
//! trait whose kind it supports (annotation presence applies to all four,
//! return-type checks to methods only, and so on). Filters are built
//! through the builders in [`builder`], combined with AND by default and
//! explicit OR/NOT operators, and applied through the resolution walks in
//! [`crate::introspect`].

use crate::meta::{Class, Constructor, Field, Method};

pub mod builder;
mod combinators;
mod predicates;

pub use combinators::{And, Not, Or};
pub use predicates::{
    Annotated, AssignableFrom, AssignableTo, IsAnnotation, IsAnonymous, IsArray, IsEnum,
    IsEnumConstant, IsInterface, IsLocal, IsMember, IsPrimitive, IsSynthetic, MetaAnnotated,
    ModifierFilter, NameFilter, ParameterAssignableFrom, ParameterAssignableTo, ParameterCount,
    ParameterThroughFilter, ParametersAssignableFrom, ParametersAssignableTo,
    ParametersThroughFilters, ReturnType, ReturnTypeAssignable, ReturnsVoid, Signature,
    TypeThroughFilter,
};

/// A testable condition over a class.
///
/// Built filters are immutable; they can be shared and reapplied freely.
pub trait ClassFilter: Send + Sync {
    fn accepts(&self, class: Class<'_>) -> bool;

    /// Human-readable description of the condition.
    fn describe(&self) -> String;
}

/// A testable condition over a method.
pub trait MethodFilter: Send + Sync {
    fn accepts(&self, method: Method<'_>) -> bool;

    /// Human-readable description of the condition.
    fn describe(&self) -> String;
}

/// A testable condition over a field.
pub trait FieldFilter: Send + Sync {
    fn accepts(&self, field: Field<'_>) -> bool;

    /// Human-readable description of the condition.
    fn describe(&self) -> String;
}

/// A testable condition over a constructor.
pub trait ConstructorFilter: Send + Sync {
    fn accepts(&self, constructor: Constructor<'_>) -> bool;

    /// Human-readable description of the condition.
    fn describe(&self) -> String;
}

pub type BoxedClassFilter = Box<dyn ClassFilter>;
pub type BoxedMethodFilter = Box<dyn MethodFilter>;
pub type BoxedFieldFilter = Box<dyn FieldFilter>;
pub type BoxedConstructorFilter = Box<dyn ConstructorFilter>;
