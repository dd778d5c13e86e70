// Root lexicon: dictionary items indexed by the surfaces of their stems.

pub mod loader;
mod stems;

pub use stems::{StemVariant, stem_variants};

use hashbrown::HashMap;
use turkmorph_core::DictionaryItem;

/// Error while adding an item to a [`RootLexicon`].
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("duplicate dictionary item id {0:?}")]
    DuplicateId(String),
    #[error("dictionary item has an empty lemma")]
    EmptyLemma,
    #[error("dictionary item {0:?} has an empty root")]
    EmptyRoot(String),
}

/// A stem surface together with the index of the item it belongs to.
#[derive(Debug, Clone)]
struct Stem {
    variant: StemVariant,
    item: usize,
}

/// A split of an input word into a known stem and the text after it.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a, 'w> {
    pub item: &'a DictionaryItem,
    pub stem: &'a StemVariant,
    pub remainder: &'w str,
}

/// Dictionary items indexed by every surface their root can take.
///
/// The lexicon owns its items; analyses borrow them.
#[derive(Debug, Default)]
pub struct RootLexicon {
    items: Vec<DictionaryItem>,
    ids: HashMap<String, usize>,
    stems: Vec<Stem>,
    by_surface: HashMap<String, Vec<usize>>,
    /// Length in chars of the longest stem surface.
    longest: usize,
}

impl RootLexicon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(
        items: impl IntoIterator<Item = DictionaryItem>,
    ) -> Result<Self, LexiconError> {
        let mut lexicon = Self::new();
        for item in items {
            lexicon.add(item)?;
        }
        Ok(lexicon)
    }

    /// Add an item and index its stem variants.
    pub fn add(&mut self, item: DictionaryItem) -> Result<(), LexiconError> {
        if item.lemma.is_empty() {
            return Err(LexiconError::EmptyLemma);
        }
        if item.root.is_empty() {
            return Err(LexiconError::EmptyRoot(item.id));
        }
        if self.ids.contains_key(&item.id) {
            return Err(LexiconError::DuplicateId(item.id));
        }

        let index = self.items.len();
        for variant in stem_variants(&item) {
            self.longest = self.longest.max(variant.surface.chars().count());
            self.by_surface
                .entry(variant.surface.clone())
                .or_default()
                .push(self.stems.len());
            self.stems.push(Stem { variant, item: index });
        }
        self.ids.insert(item.id.clone(), index);
        self.items.push(item);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[DictionaryItem] {
        &self.items
    }

    /// Look up an item by id, e.g. `elma_Noun`.
    pub fn get(&self, id: &str) -> Option<&DictionaryItem> {
        self.ids.get(id).map(|&i| &self.items[i])
    }

    /// Number of indexed stem surfaces.
    pub fn stem_count(&self) -> usize {
        self.stems.len()
    }

    /// Every stem that is a prefix of `word`, longest prefix first.
    ///
    /// Stems sharing a surface come in insertion order. A word with no
    /// known prefix yields nothing.
    pub fn candidates_for_prefix<'a, 'w>(&'a self, word: &'w str) -> Vec<Candidate<'a, 'w>> {
        let ends: Vec<usize> = word
            .char_indices()
            .map(|(i, c)| i + c.len_utf8())
            .take(self.longest)
            .collect();

        let mut out = Vec::new();
        for &end in ends.iter().rev() {
            let Some(indices) = self.by_surface.get(&word[..end]) else {
                continue;
            };
            for &s in indices {
                let stem = &self.stems[s];
                out.push(Candidate {
                    item: &self.items[stem.item],
                    stem: &stem.variant,
                    remainder: &word[end..],
                });
            }
        }
        out
    }
}
