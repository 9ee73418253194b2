use std::fmt;
use std::hash::{Hash, Hasher};

use indexmap::IndexMap;
use rustc_hash::FxHasher;
use smol_str::SmolStr;

use super::registry::TypeRegistry;
use super::ty::{Class, TypeId};

/// A value assigned to one annotation attribute.
///
/// Scalars carry the primitive directly; `Type` and `Enum` carry the
/// registry id plus enough naming to render without a registry at hand.
#[derive(Debug, Clone)]
pub enum AttrValue {
    Boolean(bool),
    Byte(i8),
    Short(i16),
    Char(char),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Str(String),
    /// A class-literal value.
    Type { id: TypeId, name: String },
    /// An enum constant of the given enum type.
    Enum { ty: TypeId, constant: SmolStr },
    /// A nested annotation value.
    Annotation(AnnotationInstance),
    Array(Vec<AttrValue>),
}

impl AttrValue {
    /// A class-literal value for the given class.
    pub fn type_of(class: Class<'_>) -> Self {
        AttrValue::Type {
            id: class.id(),
            name: class.qualified_name().to_string(),
        }
    }

    /// An enum-constant value of the given enum type.
    pub fn enum_constant(ty: Class<'_>, constant: &str) -> Self {
        AttrValue::Enum {
            ty: ty.id(),
            constant: SmolStr::new(constant),
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self, AttrValue::Array(_))
    }
}

impl PartialEq for AttrValue {
    /// Structural equality. Floats compare by bit pattern so the relation
    /// stays reflexive (NaN equals NaN, as annotation attribute semantics
    /// require).
    fn eq(&self, other: &Self) -> bool {
        use AttrValue::*;
        match (self, other) {
            (Boolean(a), Boolean(b)) => a == b,
            (Byte(a), Byte(b)) => a == b,
            (Short(a), Short(b)) => a == b,
            (Char(a), Char(b)) => a == b,
            (Int(a), Int(b)) => a == b,
            (Long(a), Long(b)) => a == b,
            (Float(a), Float(b)) => a.to_bits() == b.to_bits(),
            (Double(a), Double(b)) => a.to_bits() == b.to_bits(),
            (Str(a), Str(b)) => a == b,
            (Type { id: a, .. }, Type { id: b, .. }) => a == b,
            (
                Enum { ty: a, constant: ac },
                Enum { ty: b, constant: bc },
            ) => a == b && ac == bc,
            (Annotation(a), Annotation(b)) => a == b,
            (Array(a), Array(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for AttrValue {}

impl Hash for AttrValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        use AttrValue::*;
        std::mem::discriminant(self).hash(state);
        match self {
            Boolean(v) => v.hash(state),
            Byte(v) => v.hash(state),
            Short(v) => v.hash(state),
            Char(v) => v.hash(state),
            Int(v) => v.hash(state),
            Long(v) => v.hash(state),
            Float(v) => v.to_bits().hash(state),
            Double(v) => v.to_bits().hash(state),
            Str(v) => v.hash(state),
            Type { id, .. } => id.hash(state),
            Enum { ty, constant } => {
                ty.hash(state);
                constant.hash(state);
            }
            Annotation(v) => v.hash(state),
            Array(v) => v.hash(state),
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use AttrValue::*;
        match self {
            Boolean(v) => write!(f, "{v}"),
            Byte(v) => write!(f, "{v}"),
            Short(v) => write!(f, "{v}"),
            Char(v) => write!(f, "{v}"),
            Int(v) => write!(f, "{v}"),
            Long(v) => write!(f, "{v}"),
            Float(v) => write!(f, "{v}"),
            Double(v) => write!(f, "{v}"),
            Str(v) => f.write_str(v),
            Type { name, .. } => f.write_str(name),
            Enum { constant, .. } => f.write_str(constant),
            Annotation(v) => write!(f, "{v}"),
            Array(values) => {
                f.write_str("[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Boolean(value)
    }
}

impl From<i8> for AttrValue {
    fn from(value: i8) -> Self {
        AttrValue::Byte(value)
    }
}

impl From<i16> for AttrValue {
    fn from(value: i16) -> Self {
        AttrValue::Short(value)
    }
}

impl From<char> for AttrValue {
    fn from(value: char) -> Self {
        AttrValue::Char(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        AttrValue::Int(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Long(value)
    }
}

impl From<f32> for AttrValue {
    fn from(value: f32) -> Self {
        AttrValue::Float(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Double(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Str(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Str(value)
    }
}

impl From<Class<'_>> for AttrValue {
    fn from(value: Class<'_>) -> Self {
        AttrValue::type_of(value)
    }
}

impl From<AnnotationInstance> for AttrValue {
    fn from(value: AnnotationInstance) -> Self {
        AttrValue::Annotation(value)
    }
}

impl<T: Into<AttrValue>> From<Vec<T>> for AttrValue {
    fn from(values: Vec<T>) -> Self {
        AttrValue::Array(values.into_iter().map(Into::into).collect())
    }
}

/// An annotation instance: an annotation type plus its attribute values.
///
/// Instances are plain values; the ones attached to registry metadata and
/// the ones produced by `AnnotationBuilder` are the same type, so equality
/// between them is symmetric by construction. Equality is value-based over
/// the annotation type and every attribute; hashing is attribute-derived
/// and independent of attribute order, consistent with equality.
#[derive(Debug, Clone)]
pub struct AnnotationInstance {
    type_id: TypeId,
    type_name: String,
    values: IndexMap<SmolStr, AttrValue>,
}

impl AnnotationInstance {
    /// Creates an instance with no attribute values set.
    ///
    /// This is the raw, unvalidated path used when feeding metadata into a
    /// registry; synthesis with validation goes through `AnnotationBuilder`.
    pub fn new(annotation_type: Class<'_>) -> Self {
        Self {
            type_id: annotation_type.id(),
            type_name: annotation_type.qualified_name().to_string(),
            values: IndexMap::new(),
        }
    }

    pub(crate) fn from_parts(
        type_id: TypeId,
        type_name: String,
        values: IndexMap<SmolStr, AttrValue>,
    ) -> Self {
        Self {
            type_id,
            type_name,
            values,
        }
    }

    /// Sets an attribute value, replacing any previous one. No validation
    /// is performed against the annotation type's accessors.
    pub fn with_value(mut self, name: &str, value: impl Into<AttrValue>) -> Self {
        self.values.insert(SmolStr::new(name), value.into());
        self
    }

    pub fn annotation_type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn annotation_type<'a>(&self, reg: &'a TypeRegistry) -> Class<'a> {
        reg.class(self.type_id)
    }

    /// The qualified name of the annotation type.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn value(&self, name: &str) -> Option<&AttrValue> {
        self.values.get(name)
    }

    /// Attribute name/value pairs, in insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PartialEq for AnnotationInstance {
    fn eq(&self, other: &Self) -> bool {
        if self.type_id != other.type_id || self.values.len() != other.values.len() {
            return false;
        }
        // An instance missing an attribute the other carries is unequal,
        // never an error.
        self.values
            .iter()
            .all(|(name, value)| other.values.get(name) == Some(value))
    }
}

impl Eq for AnnotationInstance {}

impl Hash for AnnotationInstance {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
        // Commutative combination keeps the hash independent of attribute
        // order, matching the order-independent equality above.
        let mut combined: u64 = 0;
        for (name, value) in &self.values {
            let mut hasher = FxHasher::default();
            name.hash(&mut hasher);
            let name_hash = hasher.finish();
            let mut hasher = FxHasher::default();
            value.hash(&mut hasher);
            combined = combined.wrapping_add((127u64.wrapping_mul(name_hash)) ^ hasher.finish());
        }
        combined.hash(state);
    }
}

impl fmt::Display for AnnotationInstance {
    /// `@qualified.Name` for attribute-less instances, otherwise
    /// `@qualified.Name(key = 'value', ...)` in attribute order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.type_name)?;
        if self.values.is_empty() {
            return Ok(());
        }
        f.write_str("(")?;
        for (i, (name, value)) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name} = '{value}'")?;
        }
        f.write_str(")")
    }
}
