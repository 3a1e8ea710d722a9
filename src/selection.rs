use std::fmt::{self, Display};

/// Small numeric key, typically a language id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LangKey(pub u32);

impl LangKey {
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl Display for LangKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A selected key together with the label rendered from it.
///
/// The label is produced once, through the key's own `Display`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<K> {
    selected: K,
    label: String,
}

impl<K: Display> Selection<K> {
    #[must_use]
    pub fn new(selected: K) -> Self {
        let label = selected.to_string();
        Self { selected, label }
    }
}

impl<K> Selection<K> {
    #[inline]
    #[must_use]
    pub const fn selected(&self) -> &K {
        &self.selected
    }

    #[inline]
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn into_selected(self) -> K {
        self.selected
    }
}
