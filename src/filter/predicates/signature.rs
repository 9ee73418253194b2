//! Parameter-list and return-type predicates, shared between methods and
//! constructors.

use crate::filter::{BoxedClassFilter, ConstructorFilter, MethodFilter};
use crate::meta::{Class, Constructor, Method, TypeId};

/// Parameter-list access common to methods and constructors.
trait Parameterized<'a> {
    fn count(&self) -> usize;
    fn ty(&self, index: usize) -> Option<Class<'a>>;
}

impl<'a> Parameterized<'a> for Method<'a> {
    fn count(&self) -> usize {
        self.parameter_count()
    }

    fn ty(&self, index: usize) -> Option<Class<'a>> {
        self.parameter_type(index)
    }
}

impl<'a> Parameterized<'a> for Constructor<'a> {
    fn count(&self) -> usize {
        self.parameter_count()
    }

    fn ty(&self, index: usize) -> Option<Class<'a>> {
        self.parameter_type(index)
    }
}

macro_rules! impl_param_filter {
    ($filter:ident) => {
        impl MethodFilter for $filter {
            fn accepts(&self, method: Method<'_>) -> bool {
                self.passes(&method)
            }

            fn describe(&self) -> String {
                self.text()
            }
        }

        impl ConstructorFilter for $filter {
            fn accepts(&self, constructor: Constructor<'_>) -> bool {
                self.passes(&constructor)
            }

            fn describe(&self) -> String {
                self.text()
            }
        }
    };
}

/// Matches members with an exact number of parameters.
pub struct ParameterCount {
    count: usize,
}

impl ParameterCount {
    pub fn new(count: usize) -> Self {
        Self { count }
    }

    fn passes<'a>(&self, member: &impl Parameterized<'a>) -> bool {
        member.count() == self.count
    }

    fn text(&self) -> String {
        format!("number of parameters is {}", self.count)
    }
}

impl_param_filter!(ParameterCount);

/// Matches members whose parameter types equal a signature exactly.
pub struct Signature {
    params: Vec<TypeId>,
    names: Vec<String>,
}

impl Signature {
    pub fn new(params: &[Class<'_>]) -> Self {
        Self {
            params: params.iter().map(|p| p.id()).collect(),
            names: params.iter().map(|p| p.qualified_name().to_string()).collect(),
        }
    }

    fn passes<'a>(&self, member: &impl Parameterized<'a>) -> bool {
        member.count() == self.params.len()
            && self
                .params
                .iter()
                .enumerate()
                .all(|(i, id)| member.ty(i).is_some_and(|ty| ty.id() == *id))
    }

    fn text(&self) -> String {
        format!("with the parameters of type(s) ({})", self.names.join(", "))
    }
}

impl_param_filter!(Signature);

/// Matches members whose parameter at a given index extends a given type.
/// Members with too few parameters never match.
pub struct ParameterAssignableFrom {
    index: usize,
    target: TypeId,
    name: String,
}

impl ParameterAssignableFrom {
    pub fn new(index: usize, target: Class<'_>) -> Self {
        Self {
            index,
            target: target.id(),
            name: target.qualified_name().to_string(),
        }
    }

    fn passes<'a>(&self, member: &impl Parameterized<'a>) -> bool {
        match member.ty(self.index) {
            Some(param) => param
                .registry()
                .class(self.target)
                .is_assignable_from(param),
            None => false,
        }
    }

    fn text(&self) -> String {
        format!("parameter at index {} extends {}", self.index, self.name)
    }
}

impl_param_filter!(ParameterAssignableFrom);

/// Matches members whose entire parameter list, position by position,
/// extends the given types. The arity must match.
pub struct ParametersAssignableFrom {
    targets: Vec<TypeId>,
    names: Vec<String>,
}

impl ParametersAssignableFrom {
    pub fn new(targets: &[Class<'_>]) -> Self {
        Self {
            targets: targets.iter().map(|t| t.id()).collect(),
            names: targets.iter().map(|t| t.qualified_name().to_string()).collect(),
        }
    }

    fn passes<'a>(&self, member: &impl Parameterized<'a>) -> bool {
        member.count() == self.targets.len()
            && self.targets.iter().enumerate().all(|(i, target)| {
                member.ty(i).is_some_and(|param| {
                    param.registry().class(*target).is_assignable_from(param)
                })
            })
    }

    fn text(&self) -> String {
        format!("parameters extend {}", self.names.join(", "))
    }
}

impl_param_filter!(ParametersAssignableFrom);

/// Matches members whose parameter at a given index is a base type of a
/// given type. Members with too few parameters never match.
pub struct ParameterAssignableTo {
    index: usize,
    target: TypeId,
    name: String,
}

impl ParameterAssignableTo {
    pub fn new(index: usize, target: Class<'_>) -> Self {
        Self {
            index,
            target: target.id(),
            name: target.qualified_name().to_string(),
        }
    }

    fn passes<'a>(&self, member: &impl Parameterized<'a>) -> bool {
        match member.ty(self.index) {
            Some(param) => param.is_assignable_from(param.registry().class(self.target)),
            None => false,
        }
    }

    fn text(&self) -> String {
        format!(
            "parameter at index {} is a base type of {}",
            self.index, self.name
        )
    }
}

impl_param_filter!(ParameterAssignableTo);

/// Matches members whose entire parameter list, position by position, is a
/// base type of the given types. The arity must match.
pub struct ParametersAssignableTo {
    targets: Vec<TypeId>,
    names: Vec<String>,
}

impl ParametersAssignableTo {
    pub fn new(targets: &[Class<'_>]) -> Self {
        Self {
            targets: targets.iter().map(|t| t.id()).collect(),
            names: targets.iter().map(|t| t.qualified_name().to_string()).collect(),
        }
    }

    fn passes<'a>(&self, member: &impl Parameterized<'a>) -> bool {
        member.count() == self.targets.len()
            && self.targets.iter().enumerate().all(|(i, target)| {
                member.ty(i).is_some_and(|param| {
                    param.is_assignable_from(param.registry().class(*target))
                })
            })
    }

    fn text(&self) -> String {
        format!("parameters are base types of {}", self.names.join(", "))
    }
}

impl_param_filter!(ParametersAssignableTo);

/// Matches members whose parameter type at a given index passes a class
/// filter. Members with too few parameters never match.
pub struct ParameterThroughFilter {
    index: usize,
    filter: BoxedClassFilter,
}

impl ParameterThroughFilter {
    pub fn new(index: usize, filter: BoxedClassFilter) -> Self {
        Self { index, filter }
    }

    fn passes<'a>(&self, member: &impl Parameterized<'a>) -> bool {
        match member.ty(self.index) {
            Some(param) => self.filter.accepts(param),
            None => false,
        }
    }

    fn text(&self) -> String {
        format!(
            "parameter type at index {} matches class filter: {}",
            self.index,
            self.filter.describe()
        )
    }
}

impl_param_filter!(ParameterThroughFilter);

/// Matches members whose entire parameter list, position by position,
/// passes the given class filters. The arity must match.
pub struct ParametersThroughFilters {
    filters: Vec<BoxedClassFilter>,
}

impl ParametersThroughFilters {
    pub fn new(filters: Vec<BoxedClassFilter>) -> Self {
        Self { filters }
    }

    fn passes<'a>(&self, member: &impl Parameterized<'a>) -> bool {
        member.count() == self.filters.len()
            && self
                .filters
                .iter()
                .enumerate()
                .all(|(i, filter)| member.ty(i).is_some_and(|param| filter.accepts(param)))
    }

    fn text(&self) -> String {
        let descriptions: Vec<String> = self.filters.iter().map(|f| f.describe()).collect();
        format!("parameter types match filters: {}", descriptions.join(", "))
    }
}

impl_param_filter!(ParametersThroughFilters);

/// Matches methods whose return type is exactly a given type.
pub struct ReturnType {
    target: TypeId,
    name: String,
}

impl ReturnType {
    pub fn new(target: Class<'_>) -> Self {
        Self {
            target: target.id(),
            name: target.qualified_name().to_string(),
        }
    }
}

impl MethodFilter for ReturnType {
    fn accepts(&self, method: Method<'_>) -> bool {
        method.return_type().id() == self.target
    }

    fn describe(&self) -> String {
        format!("return type is {}", self.name)
    }
}

/// Matches methods returning the builtin `void` type.
///
/// Unlike [`ReturnType`] this needs no class handle up front; the builtin
/// is resolved from the method's own registry when the filter runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReturnsVoid;

impl MethodFilter for ReturnsVoid {
    fn accepts(&self, method: Method<'_>) -> bool {
        method.has_void_return()
    }

    fn describe(&self) -> String {
        "return type is void".to_string()
    }
}

/// Matches methods whose return type extends or implements a given type.
pub struct ReturnTypeAssignable {
    target: TypeId,
    name: String,
}

impl ReturnTypeAssignable {
    pub fn new(target: Class<'_>) -> Self {
        Self {
            target: target.id(),
            name: target.qualified_name().to_string(),
        }
    }
}

impl MethodFilter for ReturnTypeAssignable {
    fn accepts(&self, method: Method<'_>) -> bool {
        let return_type = method.return_type();
        return_type
            .registry()
            .class(self.target)
            .is_assignable_from(return_type)
    }

    fn describe(&self) -> String {
        format!("return type extends {}", self.name)
    }
}
