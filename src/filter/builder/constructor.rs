use super::{FilterBuildError, Pending};
use crate::filter::{
    And, Annotated, BoxedClassFilter, BoxedConstructorFilter, MetaAnnotated, ModifierFilter, Not,
    Or, ParameterAssignableFrom, ParameterAssignableTo, ParameterCount, ParameterThroughFilter,
    ParametersAssignableFrom, ParametersAssignableTo, ParametersThroughFilters, Signature,
};
use crate::meta::{Class, Modifiers};

/// Builder for constructor filters.
///
/// Filters are combined with AND; `not()` and `or()` apply to the next
/// filter added.
#[derive(Default)]
pub struct ConstructorFilterBuilder {
    filters: Vec<BoxedConstructorFilter>,
    pending: Pending,
    error: Option<FilterBuildError>,
}

impl ConstructorFilterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn add(mut self, filter: BoxedConstructorFilter) -> Self {
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
    pub fn with(self, filter: BoxedConstructorFilter) -> Self {
        self.add(filter)
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

    /// Matches constructors with default (package) access: no access
    /// modifier bit set.
    pub fn is_default(self) -> Self {
        let access: BoxedConstructorFilter = Box::new(ModifierFilter::new(Modifiers::ACCESS));
        self.add(Box::new(Not::new(access)))
    }

    /// Matches constructors carrying any modifier in the mask; combine
    /// bits with `|`.
    pub fn by_modifiers(self, modifiers: Modifiers) -> Self {
        self.add(Box::new(ModifierFilter::new(modifiers)))
    }

    pub fn annotated(self, annotation: Class<'_>) -> Self {
        self.add(Box::new(Annotated::new(annotation)))
    }

    pub fn meta_annotated(self, meta_annotation: Class<'_>) -> Self {
        self.add(Box::new(MetaAnnotated::new(meta_annotation)))
    }

    /// Matches constructors with exactly the given parameter types.
    pub fn has_signature(self, params: &[Class<'_>]) -> Self {
        self.add(Box::new(Signature::new(params)))
    }

    pub fn number_of_parameters(self, count: usize) -> Self {
        self.add(Box::new(ParameterCount::new(count)))
    }

    /// Matches constructors whose parameters, position by position, extend
    /// the given types; the parameter count must match.
    pub fn parameters_extend(self, super_types: &[Class<'_>]) -> Self {
        self.add(Box::new(ParametersAssignableFrom::new(super_types)))
    }

    /// Matches constructors whose parameters, position by position, are
    /// base types of the given types; the parameter count must match.
    pub fn parameters_super(self, base_types: &[Class<'_>]) -> Self {
        self.add(Box::new(ParametersAssignableTo::new(base_types)))
    }

    /// Matches constructors whose parameter at `index` extends the given
    /// type.
    pub fn parameter_extends(self, index: usize, super_type: Class<'_>) -> Self {
        self.add(Box::new(ParameterAssignableFrom::new(index, super_type)))
    }

    /// Matches constructors whose parameter at `index` is a base type of
    /// the given type.
    pub fn parameter_super(self, index: usize, base_type: Class<'_>) -> Self {
        self.add(Box::new(ParameterAssignableTo::new(index, base_type)))
    }

    /// Matches constructors whose parameter type at `index` passes the
    /// given class filter.
    pub fn parameter_type_filter(self, index: usize, filter: BoxedClassFilter) -> Self {
        self.add(Box::new(ParameterThroughFilter::new(index, filter)))
    }

    /// Matches constructors whose parameter types, position by position,
    /// pass the given class filters; the parameter count must match.
    pub fn parameter_types_filter(self, filters: Vec<BoxedClassFilter>) -> Self {
        self.add(Box::new(ParametersThroughFilters::new(filters)))
    }

    /// Freezes the accumulated filters into one immutable composite.
    pub fn build(self) -> Result<BoxedConstructorFilter, FilterBuildError> {
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
