use super::{FilterBuildError, Pending};
use crate::filter::{
    And, Annotated, BoxedClassFilter, BoxedMethodFilter, MetaAnnotated, ModifierFilter,
    NameFilter, Not, Or, ParameterAssignableFrom, ParameterAssignableTo, ParameterCount,
    ParameterThroughFilter, ParametersAssignableFrom, ParametersAssignableTo,
    ParametersThroughFilters, ReturnType, ReturnTypeAssignable, ReturnsVoid, Signature,
};
use crate::meta::{Class, Modifiers};

/// Builder for method filters.
///
/// Filters are combined with AND; `not()` and `or()` apply to the next
/// filter added.
///
/// ```
/// # use reflekt::{MethodFilterBuilder, TypeRegistry};
/// # let reg = TypeRegistry::new();
/// let public_getter = MethodFilterBuilder::new()
///     .is_public()
///     .name("get[A-Z]\\w*")
///     .not()
///     .returns_void()
///     .number_of_parameters(0)
///     .build()?;
/// # Ok::<(), reflekt::FilterBuildError>(())
/// ```
#[derive(Default)]
pub struct MethodFilterBuilder {
    filters: Vec<BoxedMethodFilter>,
    pending: Pending,
    error: Option<FilterBuildError>,
}

impl MethodFilterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The canonical getter filter: a public, zero-parameter, non-void
    /// method named `getX`, `isX` or `hasX`.
    pub fn getters() -> BoxedMethodFilter {
        MethodFilterBuilder::new()
            .name("get[A-Z]\\w*")
            .or()
            .name("is[A-Z]\\w*")
            .or()
            .name("has[A-Z]\\w*")
            .is_public()
            .not()
            .returns_void()
            .number_of_parameters(0)
            .build()
            .expect("getter filter is well formed")
    }

    /// The canonical setter filter: a public, one-parameter, void method
    /// named `setX`.
    pub fn setters() -> BoxedMethodFilter {
        MethodFilterBuilder::new()
            .name("set[A-Z]\\w*")
            .is_public()
            .returns_void()
            .number_of_parameters(1)
            .build()
            .expect("setter filter is well formed")
    }

    fn add(mut self, filter: BoxedMethodFilter) -> Self {
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
    pub fn with(self, filter: BoxedMethodFilter) -> Self {
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

    pub fn is_static(self) -> Self {
        self.add(Box::new(ModifierFilter::new(Modifiers::STATIC)))
    }

    pub fn is_synchronized(self) -> Self {
        self.add(Box::new(ModifierFilter::new(Modifiers::SYNCHRONIZED)))
    }

    /// Matches methods with default (package) access: no access modifier
    /// bit set.
    pub fn is_default(self) -> Self {
        let access: BoxedMethodFilter = Box::new(ModifierFilter::new(Modifiers::ACCESS));
        self.add(Box::new(Not::new(access)))
    }

    /// Matches methods carrying any modifier in the mask; combine bits
    /// with `|`.
    pub fn by_modifiers(self, modifiers: Modifiers) -> Self {
        self.add(Box::new(ModifierFilter::new(modifiers)))
    }

    /// Getter shorthand. Appends four filters (public, non-void, name
    /// pattern, zero parameters); a pending `not()` or `or()` applies to
    /// the first of them only.
    pub fn is_getter(self) -> Self {
        self.is_public()
            .not()
            .returns_void()
            .name("get[A-Z].*|is[A-Z].*|has[A-Z].*")
            .number_of_parameters(0)
    }

    /// Setter shorthand. Appends four filters; the same pending-operator
    /// caveat as [`MethodFilterBuilder::is_getter`] applies.
    pub fn is_setter(self) -> Self {
        self.is_public()
            .returns_void()
            .name("set[A-Z].*")
            .number_of_parameters(1)
    }

    /// Matches methods whose name matches the anchored regular expression.
    /// An invalid pattern poisons the builder; `build()` reports it.
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

    pub fn annotated(self, annotation: Class<'_>) -> Self {
        self.add(Box::new(Annotated::new(annotation)))
    }

    pub fn meta_annotated(self, meta_annotation: Class<'_>) -> Self {
        self.add(Box::new(MetaAnnotated::new(meta_annotation)))
    }

    /// Matches methods with exactly the given parameter types.
    pub fn has_signature(self, params: &[Class<'_>]) -> Self {
        self.add(Box::new(Signature::new(params)))
    }

    pub fn return_type(self, return_type: Class<'_>) -> Self {
        self.add(Box::new(ReturnType::new(return_type)))
    }

    pub fn returns_void(self) -> Self {
        self.add(Box::new(ReturnsVoid))
    }

    /// Matches methods whose return type extends the given type.
    pub fn return_type_extends(self, return_type: Class<'_>) -> Self {
        self.add(Box::new(ReturnTypeAssignable::new(return_type)))
    }

    pub fn number_of_parameters(self, count: usize) -> Self {
        self.add(Box::new(ParameterCount::new(count)))
    }

    /// Matches methods whose parameters, position by position, extend the
    /// given types; the parameter count must match.
    pub fn parameters_extend(self, super_types: &[Class<'_>]) -> Self {
        self.add(Box::new(ParametersAssignableFrom::new(super_types)))
    }

    /// Matches methods whose parameters, position by position, are base
    /// types of the given types; the parameter count must match.
    pub fn parameters_super(self, base_types: &[Class<'_>]) -> Self {
        self.add(Box::new(ParametersAssignableTo::new(base_types)))
    }

    /// Matches methods whose parameter at `index` extends the given type.
    pub fn parameter_extends(self, index: usize, super_type: Class<'_>) -> Self {
        self.add(Box::new(ParameterAssignableFrom::new(index, super_type)))
    }

    /// Matches methods whose parameter at `index` is a base type of the
    /// given type.
    pub fn parameter_super(self, index: usize, base_type: Class<'_>) -> Self {
        self.add(Box::new(ParameterAssignableTo::new(index, base_type)))
    }

    /// Matches methods whose parameter type at `index` passes the given
    /// class filter.
    pub fn parameter_type_filter(self, index: usize, filter: BoxedClassFilter) -> Self {
        self.add(Box::new(ParameterThroughFilter::new(index, filter)))
    }

    /// Matches methods whose parameter types, position by position, pass
    /// the given class filters; the parameter count must match.
    pub fn parameter_types_filter(self, filters: Vec<BoxedClassFilter>) -> Self {
        self.add(Box::new(ParametersThroughFilters::new(filters)))
    }

    /// Freezes the accumulated filters into one immutable composite.
    pub fn build(self) -> Result<BoxedMethodFilter, FilterBuildError> {
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
