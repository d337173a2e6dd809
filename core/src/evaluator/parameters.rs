//! Variable bindings supplied at evaluation time.

use ecow::EcoString;

use crate::values::Value;

/// The lookup capability variable references resolve through.
///
/// A compiled expression carries no bindings of its own; every `evaluate`
/// call brings its own `Parameters`, so one compiled tree can serve many
/// callers, including concurrently.
pub trait Parameters {
    /// The value bound to `name`, or `None` if there is no such binding.
    fn get(&self, name: &str) -> Option<Value>;
}

impl Parameters for std::collections::HashMap<String, Value> {
    fn get(&self, name: &str) -> Option<Value> {
        std::collections::HashMap::get(self, name).cloned()
    }
}

impl Parameters for hashbrown::HashMap<EcoString, Value> {
    fn get(&self, name: &str) -> Option<Value> {
        hashbrown::HashMap::get(self, name).cloned()
    }
}

impl<F> Parameters for F
where
    F: Fn(&str) -> Option<Value>,
{
    fn get(&self, name: &str) -> Option<Value> {
        self(name)
    }
}

/// Bindings with nothing in them, for expressions built from literals only.
pub struct EmptyParameters;

impl Parameters for EmptyParameters {
    fn get(&self, _name: &str) -> Option<Value> {
        None
    }
}
