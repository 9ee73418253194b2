//! Structural kind checks.

use crate::filter::{ClassFilter, FieldFilter};
use crate::meta::{Class, Field};

macro_rules! class_kind_filter {
    ($(#[$doc:meta])* $filter:ident, $check:ident, $text:literal) => {
        $(#[$doc])*
        #[derive(Debug, Default, Clone, Copy)]
        pub struct $filter;

        impl ClassFilter for $filter {
            fn accepts(&self, class: Class<'_>) -> bool {
                class.$check()
            }

            fn describe(&self) -> String {
                $text.to_string()
            }
        }
    };
}

class_kind_filter! {
    /// Matches interface types; annotation types count as interfaces.
    IsInterface, is_interface, "is an interface"
}

class_kind_filter! {
    /// Matches annotation types.
    IsAnnotation, is_annotation, "is an annotation class"
}

class_kind_filter! {
    /// Matches anonymous classes.
    IsAnonymous, is_anonymous, "is an anonymous class"
}

class_kind_filter! {
    /// Matches array types.
    IsArray, is_array, "is an array class"
}

class_kind_filter! {
    /// Matches enum types.
    IsEnum, is_enum, "is an enum class"
}

class_kind_filter! {
    /// Matches classes declared inside a block.
    IsLocal, is_local, "is a local class"
}

class_kind_filter! {
    /// Matches classes declared as members of another class.
    IsMember, is_member, "is a member class"
}

class_kind_filter! {
    /// Matches primitive types.
    IsPrimitive, is_primitive, "is a primitive class"
}

class_kind_filter! {
    /// Matches compiler-introduced classes.
    IsSynthetic, is_synthetic, "is a synthetic class"
}

/// Matches fields that are enum constants.
#[derive(Debug, Default, Clone, Copy)]
pub struct IsEnumConstant;

impl FieldFilter for IsEnumConstant {
    fn accepts(&self, field: Field<'_>) -> bool {
        field.is_enum_constant()
    }

    fn describe(&self) -> String {
        "is enum constant".to_string()
    }
}
