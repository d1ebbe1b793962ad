//! The glyph table registry: owns every substitution table, alternating
//! pair, and catalog group, built once behind a `LazyLock` and read-only
//! afterwards. Concurrent readers need no locking under that discipline.

use std::collections::HashMap;
use std::sync::LazyLock;

use indexmap::{IndexMap, IndexSet};
use log::debug;

use crate::catalog::{ALL_CATEGORY, GroupDef, STYLE_CATEGORIES, TOPICS};
use crate::error::{Error, Result};
use crate::tables::{ALL_TABLES, ALTERNATING_PAIRS};

/// A single character-substitution table.
///
/// Keys are single Unicode scalar values; lookup is exact-match only.
/// Characters absent from the table pass through the engine verbatim.
#[derive(Debug)]
pub struct GlyphTable {
    id: &'static str,
    map: HashMap<char, &'static str>,
}

impl GlyphTable {
    fn from_entries(id: &'static str, entries: &[(char, &'static str)]) -> Self {
        let mut map = HashMap::with_capacity(entries.len());
        for &(ch, replacement) in entries {
            let clash = map.insert(ch, replacement);
            assert!(clash.is_none(), "table '{id}' maps {ch:?} twice");
        }
        Self { id, map }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    /// The replacement for `ch`, or `None` when it should pass through.
    pub fn lookup(&self, ch: char) -> Option<&'static str> {
        self.map.get(&ch).copied()
    }

    /// Number of mapped characters.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// A transform id resolved against the registry.
#[derive(Debug, Clone, Copy)]
pub enum ResolvedTransform<'a> {
    /// One table applied at every position.
    Direct(&'a GlyphTable),
    /// Two tables interleaved by zero-based scalar position parity.
    Alternating {
        even: &'a GlyphTable,
        odd: &'a GlyphTable,
    },
}

/// The full transform registry and catalog.
#[derive(Debug)]
pub struct Registry {
    tables: IndexMap<&'static str, GlyphTable>,
    alternating: IndexMap<&'static str, (&'static str, &'static str)>,
    categories: IndexMap<&'static str, Vec<&'static str>>,
    topics: IndexMap<&'static str, Vec<&'static str>>,
}

static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::build);

/// The process-wide registry, built on first use.
pub fn registry() -> &'static Registry {
    &REGISTRY
}

impl Registry {
    fn build() -> Self {
        let mut tables = IndexMap::with_capacity(ALL_TABLES.len());
        for def in ALL_TABLES {
            let table = GlyphTable::from_entries(def.id, def.entries);
            let clash = tables.insert(def.id, table);
            assert!(clash.is_none(), "duplicate table id '{}'", def.id);
        }

        let mut alternating = IndexMap::with_capacity(ALTERNATING_PAIRS.len());
        for def in ALTERNATING_PAIRS {
            for referenced in [def.even, def.odd] {
                assert!(
                    tables.contains_key(referenced),
                    "alternating pair '{}' references unknown table '{referenced}'",
                    def.id,
                );
            }
            assert!(
                !tables.contains_key(def.id),
                "alternating id '{}' collides with a table id",
                def.id,
            );
            let clash = alternating.insert(def.id, (def.even, def.odd));
            assert!(clash.is_none(), "duplicate alternating id '{}'", def.id);
        }

        let registry = Self {
            tables,
            alternating,
            categories: Self::ingest_groups(STYLE_CATEGORIES),
            topics: Self::ingest_groups(TOPICS),
        };

        for (group, ids) in registry.categories.iter().chain(registry.topics.iter()) {
            for &id in ids {
                assert!(
                    registry.is_registered(id),
                    "catalog group '{group}' names unknown transform '{id}'",
                );
            }
        }

        debug!(
            "glyph registry built: {} tables, {} alternating pairs, {} categories, {} topics",
            registry.tables.len(),
            registry.alternating.len(),
            registry.categories.len(),
            registry.topics.len(),
        );
        registry
    }

    fn ingest_groups(groups: &[GroupDef]) -> IndexMap<&'static str, Vec<&'static str>> {
        groups
            .iter()
            .map(|group| {
                // Order-preserving dedup; curated lists are allowed to repeat
                // an id but callers must not see it twice.
                let ids: IndexSet<&'static str> = group.transforms.iter().copied().collect();
                (group.id, ids.into_iter().collect())
            })
            .collect()
    }

    fn is_registered(&self, id: &str) -> bool {
        self.tables.contains_key(id) || self.alternating.contains_key(id)
    }

    /// Resolve a transform id to its table(s).
    pub fn resolve(&self, transform_id: &str) -> Result<ResolvedTransform<'_>> {
        if let Some(table) = self.tables.get(transform_id) {
            return Ok(ResolvedTransform::Direct(table));
        }
        if let Some(&(even, odd)) = self.alternating.get(transform_id) {
            return Ok(ResolvedTransform::Alternating {
                even: &self.tables[even],
                odd: &self.tables[odd],
            });
        }
        Err(Error::UnknownTransform(transform_id.to_string()))
    }

    /// Every registered transform id, tables first, in registration order.
    pub fn transform_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tables.keys().chain(self.alternating.keys()).copied()
    }

    /// The curated transform list for `category`, or every registered id for
    /// the special `"all"` category.
    pub fn transforms_for_category(&self, category: &str) -> Result<Vec<&'static str>> {
        if category == ALL_CATEGORY {
            return Ok(self.transform_ids().collect());
        }
        self.categories
            .get(category)
            .cloned()
            .ok_or_else(|| Error::UnknownCategory(category.to_string()))
    }

    /// The curated transform list for a per-platform topic.
    pub fn transforms_for_topic(&self, topic: &str) -> Result<Vec<&'static str>> {
        self.topics
            .get(topic)
            .cloned()
            .ok_or_else(|| Error::UnknownTopic(topic.to_string()))
    }

    /// Every category id, in catalog order. Does not include `"all"`.
    pub fn category_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.categories.keys().copied()
    }

    /// Every topic id, in catalog order.
    pub fn topic_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.topics.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_builds() {
        let reg = registry();
        assert_eq!(reg.tables.len(), ALL_TABLES.len());
        assert_eq!(reg.alternating.len(), ALTERNATING_PAIRS.len());
    }

    #[test]
    fn test_resolve_direct() {
        let reg = registry();
        match reg.resolve("sansBold").unwrap() {
            ResolvedTransform::Direct(table) => {
                assert_eq!(table.id(), "sansBold");
                assert_eq!(table.lookup('A'), Some("𝗔"));
            }
            other => panic!("expected direct transform, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_alternating() {
        let reg = registry();
        match reg.resolve("alternatingBold").unwrap() {
            ResolvedTransform::Alternating { even, odd } => {
                assert_eq!(even.id(), "sansBold");
                assert_eq!(odd.id(), "serifBold");
            }
            other => panic!("expected alternating transform, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_unknown() {
        let err = registry().resolve("boldScriptt").unwrap_err();
        assert_eq!(err, Error::UnknownTransform("boldScriptt".to_string()));
    }

    #[test]
    fn test_all_category_covers_everything() {
        let reg = registry();
        let all = reg.transforms_for_category("all").unwrap();
        assert_eq!(all.len(), ALL_TABLES.len() + ALTERNATING_PAIRS.len());
        assert!(all.contains(&"serifBold"));
        assert!(all.contains(&"alternatingSquared"));
    }

    #[test]
    fn test_unknown_category_and_topic() {
        let reg = registry();
        assert_eq!(
            reg.transforms_for_category("groovy").unwrap_err(),
            Error::UnknownCategory("groovy".to_string()),
        );
        assert_eq!(
            reg.transforms_for_topic("myspace").unwrap_err(),
            Error::UnknownTopic("myspace".to_string()),
        );
    }

    #[test]
    fn test_every_cataloged_id_resolves() {
        let reg = registry();
        let groups: Vec<_> = reg
            .category_ids()
            .map(|c| reg.transforms_for_category(c).unwrap())
            .chain(reg.topic_ids().map(|t| reg.transforms_for_topic(t).unwrap()))
            .collect();
        for ids in groups {
            for id in ids {
                reg.resolve(id).unwrap();
            }
        }
    }

    #[test]
    fn test_category_lists_are_deduplicated() {
        let reg = registry();
        for category in reg.category_ids() {
            let ids = reg.transforms_for_category(category).unwrap();
            let unique: IndexSet<_> = ids.iter().collect();
            assert_eq!(unique.len(), ids.len(), "duplicates in '{category}'");
        }
    }

    #[test]
    fn test_tables_are_nonempty() {
        let reg = registry();
        for id in reg.transform_ids() {
            if let ResolvedTransform::Direct(table) = reg.resolve(id).unwrap() {
                assert!(!table.is_empty(), "table '{id}' has no entries");
            }
        }
    }
}
