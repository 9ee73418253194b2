use super::{FilterBuildError, Pending};
use crate::filter::{
    And, Annotated, AssignableFrom, AssignableTo, BoxedClassFilter, IsAnnotation, IsAnonymous,
    IsArray, IsEnum, IsInterface, IsLocal, IsMember, IsPrimitive, IsSynthetic, MetaAnnotated,
    ModifierFilter, NameFilter, Not, Or,
};
use crate::meta::{Class, Modifiers};

/// Builder for class filters.
///
/// Filters are combined with AND; `not()` and `or()` apply to the next
/// filter added.
#[derive(Default)]
pub struct ClassFilterBuilder {
    filters: Vec<BoxedClassFilter>,
    pending: Pending,
    error: Option<FilterBuildError>,
}

impl ClassFilterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn add(mut self, filter: BoxedClassFilter) -> Self {
        if self.error.is_some() {
            return self;
        }
        match self.pending {
            Pending::Not => {
                self.filters.push(Box::new(Not::new(filter)));
                self.pending = Pending::None;
            }
            Pending::Or => {
                match self.filters.pop() {
                    Some(last) => self.filters.push(Box::new(Or::pair(last, filter))),
                    None => self.error = Some(FilterBuildError::DanglingOr),
                }
                self.pending = Pending::None;
            }
            Pending::None => self.filters.push(filter),
        }
        self
    }

    /// Applies NOT to the next filter added.
    pub fn not(mut self) -> Self {
        self.pending = Pending::Not;
        self
    }

    /// Applies OR between the last filter added and the next one.
    pub fn or(mut self) -> Self {
        self.pending = Pending::Or;
        self
    }

    /// Adds a prebuilt filter.
    pub fn with(self, filter: BoxedClassFilter) -> Self {
        self.add(filter)
    }

    pub fn is_interface(self) -> Self {
        self.add(Box::new(IsInterface))
    }

    pub fn is_annotation(self) -> Self {
        self.add(Box::new(IsAnnotation))
    }

    pub fn is_anonymous(self) -> Self {
        self.add(Box::new(IsAnonymous))
    }

    pub fn is_array(self) -> Self {
        self.add(Box::new(IsArray))
    }

    pub fn is_enum(self) -> Self {
        self.add(Box::new(IsEnum))
    }

    pub fn is_local(self) -> Self {
        self.add(Box::new(IsLocal))
    }

    pub fn is_member(self) -> Self {
        self.add(Box::new(IsMember))
    }

    pub fn is_primitive(self) -> Self {
        self.add(Box::new(IsPrimitive))
    }

    pub fn is_synthetic(self) -> Self {
        self.add(Box::new(IsSynthetic))
    }

    /// Matches classes that extend or implement the given type.
    pub fn extends_type(self, super_type: Class<'_>) -> Self {
        self.add(Box::new(AssignableFrom::new(super_type)))
    }

    /// Matches classes that are base types of the given type.
    pub fn super_type(self, extended_type: Class<'_>) -> Self {
        self.add(Box::new(AssignableTo::new(extended_type)))
    }

    pub fn annotated(self, annotation: Class<'_>) -> Self {
        self.add(Box::new(Annotated::new(annotation)))
    }

    pub fn meta_annotated(self, meta_annotation: Class<'_>) -> Self {
        self.add(Box::new(MetaAnnotated::new(meta_annotation)))
    }

    /// Matches classes whose qualified name matches the anchored regular
    /// expression. An invalid pattern poisons the builder; `build()`
    /// reports it.
    pub fn name(mut self, pattern: &str) -> Self {
        match NameFilter::new(pattern) {
            Ok(filter) => self.add(Box::new(filter)),
            Err(source) => {
                if self.error.is_none() {
                    self.error = Some(FilterBuildError::InvalidNamePattern {
                        pattern: pattern.to_string(),
                        source,
                    });
                }
                self
            }
        }
    }

    pub fn is_public(self) -> Self {
        self.add(Box::new(ModifierFilter::new(Modifiers::PUBLIC)))
    }

    pub fn is_protected(self) -> Self {
        self.add(Box::new(ModifierFilter::new(Modifiers::PROTECTED)))
    }

    pub fn is_private(self) -> Self {
        self.add(Box::new(ModifierFilter::new(Modifiers::PRIVATE)))
    }

    /// Matches classes with default (package) access: no access modifier
    /// bit set.
    pub fn is_default(self) -> Self {
        let access: BoxedClassFilter = Box::new(ModifierFilter::new(Modifiers::ACCESS));
        self.add(Box::new(Not::new(access)))
    }

    /// Matches classes carrying any modifier in the mask; combine bits
    /// with `|`.
    pub fn by_modifiers(self, modifiers: Modifiers) -> Self {
        self.add(Box::new(ModifierFilter::new(modifiers)))
    }

    pub fn is_final(self) -> Self {
        self.add(Box::new(ModifierFilter::new(Modifiers::FINAL)))
    }

    pub fn is_abstract(self) -> Self {
        self.add(Box::new(ModifierFilter::new(Modifiers::ABSTRACT)))
    }

    pub fn is_static(self) -> Self {
        self.add(Box::new(ModifierFilter::new(Modifiers::STATIC)))
    }

    /// Freezes the accumulated filters into one immutable composite.
    pub fn build(self) -> Result<BoxedClassFilter, FilterBuildError> {
        if let Some(error) = self.error {
            return Err(error);
        }
        let mut filters = self.filters;
        match filters.len() {
            0 => Err(FilterBuildError::NoFilters),
            1 => Ok(filters.remove(0)),
            _ => Ok(Box::new(And::new(filters))),
        }
    }
}
