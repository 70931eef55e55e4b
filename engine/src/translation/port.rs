use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Sink for CSS custom properties, typically the host document's root element.
pub trait StylePort {
    fn set_property(&mut self, name: &str, value: &str);
    fn remove_property(&mut self, name: &str);
}

/// In-memory style surface. Clones share the same property map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStylePort {
    properties: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemoryStylePort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<String> {
        self.lock().get(name).cloned()
    }

    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Renders the current properties as a `:root` block, sorted by name.
    pub fn to_css_block(&self) -> String {
        let properties = self.lock();
        let mut css = String::from(":root {\n");
        for (name, value) in properties.iter() {
            css.push_str(&format!("  {name}: {value};\n"));
        }
        css.push_str("}\n");
        css
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, String>> {
        self.properties.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl StylePort for MemoryStylePort {
    fn set_property(&mut self, name: &str, value: &str) {
        self.lock().insert(name.to_string(), value.to_string());
    }

    fn remove_property(&mut self, name: &str) {
        self.lock().remove(name);
    }
}
