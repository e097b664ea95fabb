use std::collections::HashMap;
use std::rc::Rc;

use log::debug;

use crate::content::key::ContentKey;
use crate::content::record::ContentRecord;

/// Key to record mapping. Built empty, filled through [`Registry::register`],
/// read by the resolvers.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    entries: HashMap<ContentKey, Rc<ContentRecord>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `record` under `key`, replacing any previous entry.
    pub fn register(&mut self, key: ContentKey, record: ContentRecord) -> Rc<ContentRecord> {
        debug!("registering content for {}", key);
        let record = Rc::new(record);
        self.entries.insert(key, Rc::clone(&record));
        record
    }

    pub fn get(&self, key: &ContentKey) -> Option<Rc<ContentRecord>> {
        self.entries.get(key).cloned()
    }
}

#[cfg(test)]
impl Registry {
    pub fn contains(&self, key: &ContentKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
