use std::fmt;
use std::hash::{Hash, Hasher};

use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use super::annotation::AnnotationInstance;
use super::member::{Constructor, ConstructorDef, Field, FieldDef, Method, MethodDef};
use super::modifiers::{ClassFlags, Modifiers};
use super::registry::TypeRegistry;

/// Unique identifier for a class entry in the registry arena.
/// Uses u32 for compact storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(pub(crate) u32);

impl TypeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index as u32)
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// The structural kind of a registered type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassKind {
    Class,
    Interface,
    Enum,
    Annotation,
    Primitive,
    Array,
}

/// One class entry in the registry arena.
///
/// Externally owned metadata: the registry never mutates an entry after
/// registration, and views only ever borrow it.
#[derive(Debug, Clone)]
pub(crate) struct ClassDef {
    pub(crate) name: SmolStr,
    pub(crate) qualified_name: String,
    pub(crate) kind: ClassKind,
    pub(crate) modifiers: Modifiers,
    pub(crate) flags: ClassFlags,
    pub(crate) superclass: Option<TypeId>,
    pub(crate) interfaces: Vec<TypeId>,
    pub(crate) component: Option<TypeId>,
    pub(crate) annotations: Vec<AnnotationInstance>,
    pub(crate) methods: Vec<MethodDef>,
    pub(crate) fields: Vec<FieldDef>,
    pub(crate) constructors: Vec<ConstructorDef>,
}

/// Borrowed handle to a registered class.
///
/// A `Class` pairs a registry reference with a [`TypeId`]; it is `Copy` and
/// cheap to pass around. Equality and hashing are id-based and only
/// meaningful between handles of the same registry.
#[derive(Clone, Copy)]
pub struct Class<'a> {
    reg: &'a TypeRegistry,
    id: TypeId,
}

impl<'a> Class<'a> {
    pub(crate) fn new(reg: &'a TypeRegistry, id: TypeId) -> Self {
        Self { reg, id }
    }

    fn def(&self) -> &'a ClassDef {
        self.reg.def(self.id)
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn registry(&self) -> &'a TypeRegistry {
        self.reg
    }

    /// The simple name, without the package prefix.
    pub fn name(&self) -> &'a str {
        &self.def().name
    }

    /// The fully qualified, dot-separated name.
    pub fn qualified_name(&self) -> &'a str {
        &self.def().qualified_name
    }

    /// The package prefix of the qualified name, empty for top-level names.
    pub fn package_name(&self) -> &'a str {
        let qualified = self.qualified_name();
        match qualified.rsplit_once('.') {
            Some((package, _)) => package,
            None => "",
        }
    }

    pub fn kind(&self) -> ClassKind {
        self.def().kind
    }

    pub fn modifiers(&self) -> Modifiers {
        self.def().modifiers
    }

    /// True for interface kinds; annotation types count as interfaces.
    pub fn is_interface(&self) -> bool {
        matches!(self.kind(), ClassKind::Interface | ClassKind::Annotation)
    }

    pub fn is_annotation(&self) -> bool {
        self.kind() == ClassKind::Annotation
    }

    pub fn is_enum(&self) -> bool {
        self.kind() == ClassKind::Enum
    }

    pub fn is_primitive(&self) -> bool {
        self.kind() == ClassKind::Primitive
    }

    pub fn is_array(&self) -> bool {
        self.kind() == ClassKind::Array
    }

    pub fn is_anonymous(&self) -> bool {
        self.def().flags.contains(ClassFlags::ANONYMOUS)
    }

    pub fn is_local(&self) -> bool {
        self.def().flags.contains(ClassFlags::LOCAL)
    }

    pub fn is_member(&self) -> bool {
        self.def().flags.contains(ClassFlags::MEMBER)
    }

    pub fn is_synthetic(&self) -> bool {
        self.def().flags.contains(ClassFlags::SYNTHETIC)
    }

    pub fn superclass(&self) -> Option<Class<'a>> {
        self.def().superclass.map(|id| Class::new(self.reg, id))
    }

    /// The directly declared interfaces, in declaration order.
    pub fn interfaces(&self) -> impl Iterator<Item = Class<'a>> + use<'a> {
        let reg = self.reg;
        self.def().interfaces.iter().map(move |id| Class::new(reg, *id))
    }

    /// The component type, for array kinds.
    pub fn array_component(&self) -> Option<Class<'a>> {
        self.def().component.map(|id| Class::new(self.reg, id))
    }

    /// Annotation instances attached directly to this class declaration.
    pub fn annotations(&self) -> &'a [AnnotationInstance] {
        &self.def().annotations
    }

    /// True if an annotation of the given type is attached directly to this
    /// declaration. Superclass declarations are not consulted; see
    /// `ClassIntrospector::is_annotation_present` for the hierarchy-aware
    /// variant.
    pub fn is_annotation_present(&self, annotation: Class<'_>) -> bool {
        self.declared_annotation(annotation).is_some()
    }

    pub fn declared_annotation(&self, annotation: Class<'_>) -> Option<&'a AnnotationInstance> {
        self.annotations()
            .iter()
            .find(|instance| instance.annotation_type_id() == annotation.id())
    }

    pub fn declared_methods(&self) -> impl Iterator<Item = Method<'a>> + use<'a> {
        let reg = self.reg;
        let owner = self.id;
        (0..self.def().methods.len()).map(move |index| Method::new(reg, owner, index))
    }

    pub fn declared_fields(&self) -> impl Iterator<Item = Field<'a>> + use<'a> {
        let reg = self.reg;
        let owner = self.id;
        (0..self.def().fields.len()).map(move |index| Field::new(reg, owner, index))
    }

    pub fn declared_constructors(&self) -> impl Iterator<Item = Constructor<'a>> + use<'a> {
        let reg = self.reg;
        let owner = self.id;
        (0..self.def().constructors.len()).map(move |index| Constructor::new(reg, owner, index))
    }

    /// True if a value of type `other` can be treated as a value of this
    /// type: the types are identical, or this type appears in `other`'s
    /// supertype graph (superclass chain and interfaces, transitively).
    /// Arrays are covariant in their component type.
    pub fn is_assignable_from(&self, other: Class<'_>) -> bool {
        if self.id == other.id() {
            return true;
        }
        if self.is_array() && other.is_array() {
            return match (self.array_component(), other.array_component()) {
                (Some(this), Some(that)) => this.is_assignable_from(that),
                _ => false,
            };
        }
        let mut seen = FxHashSet::default();
        let mut pending = Vec::new();
        push_supertypes(other.def(), &mut pending);
        while let Some(id) = pending.pop() {
            if id == self.id {
                return true;
            }
            if seen.insert(id) {
                push_supertypes(self.reg.def(id), &mut pending);
            }
        }
        false
    }

    /// Inverse of [`Class::is_assignable_from`].
    pub fn is_subtype_of(&self, other: Class<'_>) -> bool {
        other.is_assignable_from(*self)
    }
}

fn push_supertypes(def: &ClassDef, pending: &mut Vec<TypeId>) {
    if let Some(superclass) = def.superclass {
        pending.push(superclass);
    }
    pending.extend(def.interfaces.iter().copied());
}

impl PartialEq for Class<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && std::ptr::eq(self.reg, other.reg)
    }
}

impl Eq for Class<'_> {}

impl Hash for Class<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Class<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Class")
            .field("id", &self.id)
            .field("name", &self.qualified_name())
            .finish()
    }
}

impl fmt::Display for Class<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.qualified_name())
    }
}
