//! Atomic filter primitives.
//!
//! Each primitive implements every filter trait its member kind supports;
//! construction captures the compared-against types as registry ids, so a
//! built primitive is only meaningful against classes of the registry it
//! was constructed from.

mod annotated;
mod kind;
mod modifier;
mod name;
mod signature;
mod types;

pub use annotated::{Annotated, MetaAnnotated};
pub use kind::{
    IsAnnotation, IsAnonymous, IsArray, IsEnum, IsEnumConstant, IsInterface, IsLocal, IsMember,
    IsPrimitive, IsSynthetic,
};
pub use modifier::ModifierFilter;
pub use name::NameFilter;
pub use signature::{
    ParameterAssignableFrom, ParameterAssignableTo, ParameterCount, ParameterThroughFilter,
    ParametersAssignableFrom, ParametersAssignableTo, ParametersThroughFilters, ReturnType,
    ReturnTypeAssignable, ReturnsVoid, Signature,
};
pub use types::{AssignableFrom, AssignableTo, TypeThroughFilter};
