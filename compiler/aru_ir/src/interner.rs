//! String interner for identifier storage.
//!
//! The core is single-threaded (§5) so, unlike the sharded,
//! `RwLock`-protected interner this is modeled on, a single `FxHashMap` plus
//! backing `Vec` is enough: no concurrent access to guard against.

use rustc_hash::FxHashMap;

use crate::Name;

/// Interns strings into compact [`Name`] handles.
pub struct StringInterner {
    map: FxHashMap<Box<str>, Name>,
    strings: Vec<Box<str>>,
}

impl StringInterner {
    pub fn new() -> Self {
        StringInterner {
            map: FxHashMap::default(),
            strings: Vec::new(),
        }
    }

    /// Intern `s`, returning its handle. Interning the same string twice
    /// returns the same handle.
    pub fn intern(&mut self, s: &str) -> Name {
        if let Some(&name) = self.map.get(s) {
            return name;
        }
        let idx = self.strings.len() as u32;
        let name = Name::from_raw(idx);
        self.strings.push(s.into());
        self.map.insert(s.into(), name);
        name
    }

    /// Resolve a handle back to its string.
    ///
    /// # Panics
    /// Panics if `name` was not produced by this interner.
    pub fn resolve(&self, name: Name) -> &str {
        &self.strings[name.raw() as usize]
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn round_trips() {
        let mut interner = StringInterner::new();
        let name = interner.intern("hello");
        assert_eq!(interner.resolve(name), "hello");
    }
}
