//! Shared configuration slot: one immutable snapshot, swapped whole on reload.
//!
//! Event processing grabs an `Arc` snapshot and works from it; a reload
//! builds a fresh `ParamsConfig` and replaces the pointer. Readers that
//! already hold a snapshot keep seeing the old options until they ask again.

use std::sync::{Arc, PoisonError, RwLock};

use crate::config::{ParamsConfig, RawConfig};

#[derive(Debug, Default)]
pub struct ConfigSlot {
    current: RwLock<Arc<ParamsConfig>>,
}

impl ConfigSlot {
    pub fn new(raw: &RawConfig) -> Self {
        Self {
            current: RwLock::new(Arc::new(ParamsConfig::from_raw(raw))),
        }
    }

    /// Normalize `raw` and replace the current snapshot. Nothing from the
    /// previous options carries over.
    pub fn reload(&self, raw: &RawConfig) -> Arc<ParamsConfig> {
        let next = Arc::new(ParamsConfig::from_raw(raw));
        // The guarded value is a plain Arc, so a poisoned lock still holds a valid snapshot.
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::clone(&next);
        tracing::debug!(
            white_list = next.white_list.len(),
            ignore_case = next.ignore_case,
            "reloaded params config"
        );
        next
    }

    /// The options in effect right now.
    pub fn snapshot(&self) -> Arc<ParamsConfig> {
        Arc::clone(&self.current.read().unwrap_or_else(PoisonError::into_inner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_with(white_list: Option<&str>) -> RawConfig {
        RawConfig {
            white_list: white_list.map(String::from),
            ..RawConfig::default()
        }
    }

    #[test]
    fn reload_clears_white_list_when_missing() {
        let slot = ConfigSlot::new(&raw_with(Some("one_item")));
        assert_eq!(slot.snapshot().white_list.len(), 1);

        slot.reload(&raw_with(None));
        assert!(slot.snapshot().white_list.is_empty());
    }

    #[test]
    fn reload_replaces_instead_of_merging() {
        let slot = ConfigSlot::new(&RawConfig {
            ignore_case: Some("true".to_string()),
            prefix: Some("old_".to_string()),
            white_list: Some("a,b".to_string()),
            ..RawConfig::default()
        });
        slot.reload(&RawConfig {
            ignore_case: None,
            prefix: None,
            white_list: Some("c".to_string()),
            ..RawConfig::default()
        });
        let cfg = slot.snapshot();
        assert!(!cfg.ignore_case);
        assert_eq!(cfg.prefix, "");
        assert_eq!(cfg.white_list.iter().collect::<Vec<_>>(), ["c"]);
    }

    #[test]
    fn held_snapshot_is_unaffected_by_reload() {
        let slot = ConfigSlot::new(&raw_with(Some("a")));
        let before = slot.snapshot();
        slot.reload(&raw_with(Some("b")));
        assert!(before.white_list.contains("a"));
        assert!(slot.snapshot().white_list.contains("b"));
    }

    #[test]
    fn concurrent_readers_see_whole_snapshots() {
        let slot = Arc::new(ConfigSlot::new(&raw_with(Some("a,b"))));
        let readers: Vec<_> = (0..4)
            .map(|_| {
                let slot = Arc::clone(&slot);
                std::thread::spawn(move || {
                    for _ in 0..200 {
                        let cfg = slot.snapshot();
                        let names: Vec<_> = cfg.white_list.iter().collect();
                        assert!(names == ["a", "b"] || names == ["c", "d", "e"]);
                    }
                })
            })
            .collect();
        for _ in 0..50 {
            slot.reload(&raw_with(Some("c,d,e")));
            slot.reload(&raw_with(Some("a,b")));
        }
        for r in readers {
            r.join().unwrap();
        }
    }
}
