//! Annotation synthesis: building annotation instances from attribute
//! maps, validated against the annotation type's accessors.

use indexmap::IndexMap;
use smol_str::SmolStr;
use thiserror::Error;
use tracing::debug;

use crate::meta::{AnnotationInstance, AttrValue, Class, Method, Primitive};

/// Accessor names that never count as attributes.
const RESERVED_ACCESSORS: [&str; 3] = ["annotation_type", "hash_code", "to_string"];

/// The conventionally named default attribute.
const DEFAULT_ATTRIBUTE: &str = "value";

/// Errors raised during annotation synthesis.
#[derive(Debug, Error)]
pub enum AnnotationError {
    /// The class handed to the builder is not an annotation type.
    #[error("{0} is not an annotation type")]
    NotAnAnnotationType(String),

    /// No accessor with the given name exists on the annotation type.
    #[error("invalid attribute: @{annotation} does not have any attribute named '{name}'")]
    UnknownAttribute { annotation: String, name: String },

    /// The assigned value does not fit the accessor's declared type.
    #[error(
        "invalid attribute type: {actual}, attribute '{name}' of @{annotation} should be {expected}"
    )]
    TypeMismatch {
        annotation: String,
        name: String,
        expected: String,
        actual: String,
    },

    /// An accessor without a default was never assigned a value.
    #[error("missing attribute value: attribute '{name}' of @{annotation} has not been set")]
    MissingValue { annotation: String, name: String },
}

/// Builds an [`AnnotationInstance`] from attribute assignments.
///
/// The accessor set is derived once at construction from the annotation
/// type's declared methods: every zero-parameter, non-void method whose
/// name is not reserved is an attribute, and its declared default
/// pre-seeds the value map.
///
/// ```
/// # use reflekt::{AnnotationBuilder, ClassDecl, MethodDecl, TypeRegistry};
/// # let mut reg = TypeRegistry::new();
/// # let string = reg.string_type().id();
/// # let id = reg
/// #     .declare(ClassDecl::annotation("api.Named").method(MethodDecl::new("value", string)))
/// #     .unwrap();
/// let named = AnnotationBuilder::new(reg.class(id))?
///     .value("worker")?
///     .build()?;
/// assert_eq!(named.to_string(), "@api.Named(value = 'worker')");
/// # Ok::<(), reflekt::AnnotationError>(())
/// ```
pub struct AnnotationBuilder<'a> {
    annotation_type: Class<'a>,
    accessors: IndexMap<SmolStr, Method<'a>>,
    values: IndexMap<SmolStr, Option<AttrValue>>,
}

impl<'a> AnnotationBuilder<'a> {
    pub fn new(annotation_type: Class<'a>) -> Result<Self, AnnotationError> {
        if !annotation_type.is_annotation() {
            return Err(AnnotationError::NotAnAnnotationType(
                annotation_type.qualified_name().to_string(),
            ));
        }
        let mut accessors = IndexMap::new();
        let mut values = IndexMap::new();
        for method in annotation_type.declared_methods() {
            let is_attribute = method.parameter_count() == 0
                && !method.has_void_return()
                && !RESERVED_ACCESSORS.contains(&method.name());
            if is_attribute {
                accessors.insert(SmolStr::new(method.name()), method);
                values.insert(SmolStr::new(method.name()), method.default_value().cloned());
            }
        }
        Ok(Self {
            annotation_type,
            accessors,
            values,
        })
    }

    /// Shorthand constructing a builder and assigning the `value`
    /// attribute in one step.
    pub fn with_value(
        annotation_type: Class<'a>,
        value: impl Into<AttrValue>,
    ) -> Result<Self, AnnotationError> {
        Self::new(annotation_type)?.value(value)
    }

    /// Assigns the conventionally named `value` attribute.
    pub fn value(self, value: impl Into<AttrValue>) -> Result<Self, AnnotationError> {
        self.attr(DEFAULT_ATTRIBUTE, value)
    }

    /// Assigns an attribute, validating the name and the value type. A
    /// scalar assigned to an array attribute is wrapped into a
    /// one-element array.
    pub fn attr(mut self, name: &str, value: impl Into<AttrValue>) -> Result<Self, AnnotationError> {
        let accessor =
            *self
                .accessors
                .get(name)
                .ok_or_else(|| AnnotationError::UnknownAttribute {
                    annotation: self.annotation_type.qualified_name().to_string(),
                    name: name.to_string(),
                })?;
        let value = value.into();
        self.validate_type(name, accessor, &value)?;
        let declared = accessor.return_type();
        let stored = if declared.is_array() && !value.is_array() {
            AttrValue::Array(vec![value])
        } else {
            value
        };
        self.values.insert(SmolStr::new(name), Some(stored));
        Ok(self)
    }

    fn validate_type(
        &self,
        name: &str,
        accessor: Method<'a>,
        value: &AttrValue,
    ) -> Result<(), AnnotationError> {
        let declared = accessor.return_type();
        let fits = if let Some(component) = declared.array_component() {
            match value {
                AttrValue::Array(elements) => elements
                    .iter()
                    .all(|element| scalar_fits(component, element)),
                scalar => scalar_fits(component, scalar),
            }
        } else {
            scalar_fits(declared, value)
        };
        if fits {
            Ok(())
        } else {
            Err(AnnotationError::TypeMismatch {
                annotation: self.annotation_type.qualified_name().to_string(),
                name: name.to_string(),
                expected: declared.qualified_name().to_string(),
                actual: value_type_name(value),
            })
        }
    }

    /// Produces the annotation instance; every accessor must have a value,
    /// assigned or defaulted.
    pub fn build(self) -> Result<AnnotationInstance, AnnotationError> {
        let mut values = IndexMap::new();
        for (name, value) in self.values {
            match value {
                Some(value) => {
                    values.insert(name, value);
                }
                None => {
                    return Err(AnnotationError::MissingValue {
                        annotation: self.annotation_type.qualified_name().to_string(),
                        name: name.to_string(),
                    });
                }
            }
        }
        debug!(annotation = %self.annotation_type.qualified_name(), "synthesized annotation instance");
        Ok(AnnotationInstance::from_parts(
            self.annotation_type.id(),
            self.annotation_type.qualified_name().to_string(),
            values,
        ))
    }
}

/// Whether a non-array value fits a declared scalar type: exact match for
/// primitives, assignability for reference types.
fn scalar_fits(declared: Class<'_>, value: &AttrValue) -> bool {
    let reg = declared.registry();
    match value {
        AttrValue::Boolean(_) => declared == reg.primitive(Primitive::Boolean),
        AttrValue::Byte(_) => declared == reg.primitive(Primitive::Byte),
        AttrValue::Short(_) => declared == reg.primitive(Primitive::Short),
        AttrValue::Char(_) => declared == reg.primitive(Primitive::Char),
        AttrValue::Int(_) => declared == reg.primitive(Primitive::Int),
        AttrValue::Long(_) => declared == reg.primitive(Primitive::Long),
        AttrValue::Float(_) => declared == reg.primitive(Primitive::Float),
        AttrValue::Double(_) => declared == reg.primitive(Primitive::Double),
        AttrValue::Str(_) => declared.is_assignable_from(reg.string_type()),
        AttrValue::Type { .. } => declared.is_assignable_from(reg.class_type()),
        AttrValue::Enum { ty, .. } => declared.is_assignable_from(reg.class(*ty)),
        AttrValue::Annotation(instance) => {
            declared.is_assignable_from(reg.class(instance.annotation_type_id()))
        }
        AttrValue::Array(_) => false,
    }
}

fn value_type_name(value: &AttrValue) -> String {
    match value {
        AttrValue::Boolean(_) => "boolean".to_string(),
        AttrValue::Byte(_) => "byte".to_string(),
        AttrValue::Short(_) => "short".to_string(),
        AttrValue::Char(_) => "char".to_string(),
        AttrValue::Int(_) => "int".to_string(),
        AttrValue::Long(_) => "long".to_string(),
        AttrValue::Float(_) => "float".to_string(),
        AttrValue::Double(_) => "double".to_string(),
        AttrValue::Str(_) => "string".to_string(),
        AttrValue::Type { .. } => "class".to_string(),
        AttrValue::Enum { constant, .. } => format!("enum constant {constant}"),
        AttrValue::Annotation(instance) => format!("@{}", instance.type_name()),
        AttrValue::Array(_) => "array".to_string(),
    }
}
