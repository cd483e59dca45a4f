use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;


type AnyArc = Arc<dyn Any + Send + Sync>;

/// Type-keyed set of auxiliary modules bound into an application.
///
/// The bootstrap sequence binds these but never calls into them.
#[derive(Clone, Default)]
pub struct ModuleRegistry {
    modules: HashMap<TypeId, Binding>,
}

#[derive(Clone)]
struct Binding {
    name: &'static str,
    value: AnyArc,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `value`, replacing any module of the same type. Returns `true` on replace.
    pub fn provide<T>(&mut self, value: T) -> bool
    where
        T: Any + Send + Sync,
    {
        let binding = Binding {
            name: type_name::<T>(),
            value: Arc::new(value),
        };
        self.modules.insert(TypeId::of::<T>(), binding).is_some()
    }

    pub fn get<T>(&self) -> Option<Arc<T>>
    where
        T: Any + Send + Sync,
    {
        self.modules
            .get(&TypeId::of::<T>())
            .and_then(|binding| binding.value.clone().downcast::<T>().ok())
    }

    pub fn contains<T>(&self) -> bool
    where
        T: Any + Send + Sync,
    {
        self.modules.contains_key(&TypeId::of::<T>())
    }

    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.modules.values().map(|binding| binding.name).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl fmt::Debug for ModuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}
