use std::collections::HashMap;

/// Almacén clave-valor duradero (localStorage en web, fichero en nativo).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
}

/// Copia en memoria del almacén. Se siembra desde `eframe::Storage` al
/// arrancar y se vuelca en el hook `save` de eframe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_from(storage: Option<&dyn eframe::Storage>, keys: &[&str]) -> Self {
        let mut store = Self::new();
        if let Some(storage) = storage {
            for key in keys {
                if let Some(value) = storage.get_string(key) {
                    store.entries.insert((*key).to_string(), value);
                }
            }
        }
        store
    }

    pub fn flush_into(&self, storage: &mut dyn eframe::Storage) {
        for (key, value) in &self.entries {
            storage.set_string(key, value.clone());
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }
}

/// Mejor puntuación histórica; solo sube.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestScore {
    key: String,
}

impl BestScore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// `None` si nunca se guardó o el valor no es un número válido.
    pub fn stored(&self, store: &dyn KeyValueStore) -> Option<u32> {
        let raw = store.get(&self.key)?;
        match raw.trim().parse::<u32>() {
            Ok(value) => Some(value),
            Err(_) => {
                log::warn!("ignoring corrupt best score {raw:?} under key {}", self.key);
                None
            }
        }
    }

    pub fn current(&self, store: &dyn KeyValueStore) -> u32 {
        self.stored(store).unwrap_or(0)
    }

    pub fn record_if_best(&self, store: &mut dyn KeyValueStore, score: u32) -> u32 {
        let current = self.current(store);
        if score > current {
            store.set(&self.key, score.to_string());
            log::info!("new best score {score} (previous {current})");
            score
        } else {
            current
        }
    }
}

/// Doble de `eframe::Storage` que apunta lecturas y volcados.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct RecordingStorage {
    pub values: HashMap<String, String>,
    pub reads: std::cell::RefCell<Vec<String>>,
    pub flushes: usize,
}

#[cfg(test)]
impl eframe::Storage for RecordingStorage {
    fn get_string(&self, key: &str) -> Option<String> {
        self.reads.borrow_mut().push(key.to_string());
        self.values.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
    }

    fn flush(&mut self) {
        self.flushes += 1;
    }
}
