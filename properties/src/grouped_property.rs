use crate::Property;
use tracing::info;

/// A bundle of properties, looked up by their concrete type.
#[derive(Debug, Default)]
pub struct GroupedProperty {
    name: String,
    properties: Vec<Box<dyn Property>>,
}

impl GroupedProperty {
    pub fn new(name: impl Into<String>) -> Self {
        GroupedProperty {
            name: name.into(),
            properties: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add `property`, replacing an existing one of the same type.
    pub fn add_property<P: Property>(&mut self, property: P) {
        match self
            .properties
            .iter()
            .position(|existing| existing.as_any().is::<P>())
        {
            Some(index) => self.properties[index] = Box::new(property),
            None => self.properties.push(Box::new(property)),
        }
    }

    pub fn with_property<P: Property>(mut self, property: P) -> Self {
        self.add_property(property);
        self
    }

    pub fn get_property<P: Property>(&self) -> Option<&P> {
        self.properties
            .iter()
            .find_map(|property| property.as_any().downcast_ref::<P>())
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Property> + '_ {
        self.properties.iter().map(|property| property.as_ref())
    }

    pub fn log(&self) {
        info!("{} ({} properties)", self.name, self.len());
        for property in self.iter() {
            property.log();
        }
    }
}
