use std::any::Any;
use std::fmt::Debug;
use tracing::info;

/// A named piece of molecular data that can live inside a
/// [`GroupedProperty`](crate::GroupedProperty).
pub trait Property: Any + Debug + Send + Sync {
    fn name(&self) -> &str;

    /// Upcast used by [`GroupedProperty::get_property`](crate::GroupedProperty::get_property).
    fn as_any(&self) -> &dyn Any;

    /// Log a summary of the property.
    fn log(&self) {
        info!("{}", self.name());
    }
}
