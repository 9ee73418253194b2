use std::fmt;
use std::hash::{Hash, Hasher};

use smol_str::SmolStr;

use super::annotation::{AnnotationInstance, AttrValue};
use super::modifiers::Modifiers;
use super::registry::TypeRegistry;
use super::ty::{Class, TypeId};

/// One parameter of a method or constructor.
#[derive(Debug, Clone)]
pub(crate) struct ParamDef {
    pub(crate) ty: TypeId,
    pub(crate) annotations: Vec<AnnotationInstance>,
}

#[derive(Debug, Clone)]
pub(crate) struct MethodDef {
    pub(crate) name: SmolStr,
    pub(crate) modifiers: Modifiers,
    pub(crate) return_type: TypeId,
    pub(crate) params: Vec<ParamDef>,
    pub(crate) annotations: Vec<AnnotationInstance>,
    /// Declared default value, for annotation accessor methods.
    pub(crate) default_value: Option<AttrValue>,
}

#[derive(Debug, Clone)]
pub(crate) struct FieldDef {
    pub(crate) name: SmolStr,
    pub(crate) ty: TypeId,
    pub(crate) modifiers: Modifiers,
    pub(crate) enum_constant: bool,
    pub(crate) annotations: Vec<AnnotationInstance>,
}

#[derive(Debug, Clone)]
pub(crate) struct ConstructorDef {
    pub(crate) modifiers: Modifiers,
    pub(crate) params: Vec<ParamDef>,
    pub(crate) annotations: Vec<AnnotationInstance>,
}

macro_rules! member_view {
    ($(#[$doc:meta])* $view:ident) => {
        $(#[$doc])*
        #[derive(Clone, Copy)]
        pub struct $view<'a> {
            reg: &'a TypeRegistry,
            owner: TypeId,
            index: usize,
        }

        impl<'a> $view<'a> {
            pub(crate) fn new(reg: &'a TypeRegistry, owner: TypeId, index: usize) -> Self {
                Self { reg, owner, index }
            }

            /// The class this member is declared on.
            pub fn declaring_class(&self) -> Class<'a> {
                Class::new(self.reg, self.owner)
            }

            pub fn registry(&self) -> &'a TypeRegistry {
                self.reg
            }
        }

        impl PartialEq for $view<'_> {
            fn eq(&self, other: &Self) -> bool {
                self.owner == other.owner
                    && self.index == other.index
                    && std::ptr::eq(self.reg, other.reg)
            }
        }

        impl Eq for $view<'_> {}

        impl Hash for $view<'_> {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.owner.hash(state);
                self.index.hash(state);
            }
        }
    };
}

member_view! {
    /// Borrowed handle to a declared method.
    Method
}

member_view! {
    /// Borrowed handle to a declared field.
    Field
}

member_view! {
    /// Borrowed handle to a declared constructor.
    Constructor
}

impl<'a> Method<'a> {
    fn def(&self) -> &'a MethodDef {
        &self.reg.def(self.owner).methods[self.index]
    }

    pub fn name(&self) -> &'a str {
        &self.def().name
    }

    pub fn modifiers(&self) -> Modifiers {
        self.def().modifiers
    }

    pub fn return_type(&self) -> Class<'a> {
        Class::new(self.reg, self.def().return_type)
    }

    /// True if the method's return type is the builtin `void` type.
    pub fn has_void_return(&self) -> bool {
        self.def().return_type == self.reg.void_type().id()
    }

    pub fn parameter_count(&self) -> usize {
        self.def().params.len()
    }

    pub fn parameter_types(&self) -> impl Iterator<Item = Class<'a>> + use<'a> {
        let reg = self.reg;
        self.def().params.iter().map(move |param| Class::new(reg, param.ty))
    }

    pub fn parameter_type(&self, index: usize) -> Option<Class<'a>> {
        self.def()
            .params
            .get(index)
            .map(|param| Class::new(self.reg, param.ty))
    }

    pub fn parameter_annotations(&self, index: usize) -> &'a [AnnotationInstance] {
        self.def()
            .params
            .get(index)
            .map(|param| param.annotations.as_slice())
            .unwrap_or(&[])
    }

    /// Index of the first parameter carrying an annotation of the given
    /// type, or `None` if no parameter does.
    pub fn annotated_parameter_index(&self, annotation: Class<'_>) -> Option<usize> {
        self.def().params.iter().position(|param| {
            param
                .annotations
                .iter()
                .any(|instance| instance.annotation_type_id() == annotation.id())
        })
    }

    pub fn annotations(&self) -> &'a [AnnotationInstance] {
        &self.def().annotations
    }

    pub fn is_annotation_present(&self, annotation: Class<'_>) -> bool {
        self.annotation(annotation).is_some()
    }

    pub fn annotation(&self, annotation: Class<'_>) -> Option<&'a AnnotationInstance> {
        self.annotations()
            .iter()
            .find(|instance| instance.annotation_type_id() == annotation.id())
    }

    /// Declared default value, present only on annotation accessors.
    pub fn default_value(&self) -> Option<&'a AttrValue> {
        self.def().default_value.as_ref()
    }
}

impl<'a> Field<'a> {
    fn def(&self) -> &'a FieldDef {
        &self.reg.def(self.owner).fields[self.index]
    }

    pub fn name(&self) -> &'a str {
        &self.def().name
    }

    pub fn modifiers(&self) -> Modifiers {
        self.def().modifiers
    }

    pub fn field_type(&self) -> Class<'a> {
        Class::new(self.reg, self.def().ty)
    }

    pub fn is_enum_constant(&self) -> bool {
        self.def().enum_constant
    }

    pub fn annotations(&self) -> &'a [AnnotationInstance] {
        &self.def().annotations
    }

    pub fn is_annotation_present(&self, annotation: Class<'_>) -> bool {
        self.annotations()
            .iter()
            .any(|instance| instance.annotation_type_id() == annotation.id())
    }
}

impl<'a> Constructor<'a> {
    fn def(&self) -> &'a ConstructorDef {
        &self.reg.def(self.owner).constructors[self.index]
    }

    pub fn modifiers(&self) -> Modifiers {
        self.def().modifiers
    }

    pub fn parameter_count(&self) -> usize {
        self.def().params.len()
    }

    pub fn parameter_types(&self) -> impl Iterator<Item = Class<'a>> + use<'a> {
        let reg = self.reg;
        self.def().params.iter().map(move |param| Class::new(reg, param.ty))
    }

    pub fn parameter_type(&self, index: usize) -> Option<Class<'a>> {
        self.def()
            .params
            .get(index)
            .map(|param| Class::new(self.reg, param.ty))
    }

    pub fn annotations(&self) -> &'a [AnnotationInstance] {
        &self.def().annotations
    }

    pub fn is_annotation_present(&self, annotation: Class<'_>) -> bool {
        self.annotations()
            .iter()
            .any(|instance| instance.annotation_type_id() == annotation.id())
    }
}

impl fmt::Debug for Method<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Method")
            .field("declaring_class", &self.declaring_class().qualified_name())
            .field("name", &self.name())
            .finish()
    }
}

impl fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("declaring_class", &self.declaring_class().qualified_name())
            .field("name", &self.name())
            .finish()
    }
}

impl fmt::Debug for Constructor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constructor")
            .field("declaring_class", &self.declaring_class().qualified_name())
            .field("parameters", &self.parameter_count())
            .finish()
    }
}
