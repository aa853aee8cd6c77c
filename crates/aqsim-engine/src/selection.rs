//! ---
//! aqs_section: "02-impact-engine"
//! aqs_subsection: "module"
//! aqs_type: "source"
//! aqs_scope: "code"
//! aqs_description: "Selection set of interventions chosen by the user."
//! aqs_version: "v0.1.0-alpha"
//! aqs_owner: "tbd"
//! ---
use std::collections::BTreeSet;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use aqsim_logging::aq_warn;

use crate::catalog::InterventionKey;

/// Interventions currently switched on. Order never matters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    selected: BTreeSet<InterventionKey>,
}

impl SelectionSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        InterventionKey::all().collect()
    }

    /// Build from loosely-typed `key -> bool` pairs. Unknown keys are logged and
    /// skipped; they never fail the selection.
    pub fn from_flags<I, K>(flags: I) -> Self
    where
        I: IntoIterator<Item = (K, bool)>,
        K: AsRef<str>,
    {
        let mut selection = Self::default();
        for (raw, enabled) in flags {
            match InterventionKey::from_str(raw.as_ref()) {
                Ok(key) => selection.set(key, enabled),
                Err(_) => {
                    aq_warn!("ignoring unknown intervention key '{}'", raw.as_ref())
                }
            }
        }
        selection
    }

    /// Select every recognised key in `keys`.
    pub fn from_names<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        Self::from_flags(keys.into_iter().map(|key| (key, true)))
    }

    pub fn is_selected(&self, key: InterventionKey) -> bool {
        self.selected.contains(&key)
    }

    pub fn set(&mut self, key: InterventionKey, enabled: bool) {
        if enabled {
            self.selected.insert(key);
        } else {
            self.selected.remove(&key);
        }
    }

    /// Flip `key` and return its new state.
    pub fn toggle(&mut self, key: InterventionKey) -> bool {
        let enabled = !self.is_selected(key);
        self.set(key, enabled);
        enabled
    }

    pub fn with(mut self, key: InterventionKey) -> Self {
        self.set(key, true);
        self
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = InterventionKey> + '_ {
        self.selected.iter().copied()
    }

    /// Every known key with its on/off state, in catalog order.
    pub fn flags(&self) -> IndexMap<InterventionKey, bool> {
        InterventionKey::all()
            .map(|key| (key, self.is_selected(key)))
            .collect()
    }
}

impl FromIterator<InterventionKey> for SelectionSet {
    fn from_iter<T: IntoIterator<Item = InterventionKey>>(iter: T) -> Self {
        Self {
            selected: iter.into_iter().collect(),
        }
    }
}

impl Serialize for SelectionSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(InterventionKey::all().count()))?;
        for key in InterventionKey::all() {
            map.serialize_entry(key.as_str(), &self.is_selected(key))?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SelectionSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = IndexMap::<String, bool>::deserialize(deserializer)?;
        Ok(SelectionSet::from_flags(raw))
    }
}
