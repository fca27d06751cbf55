//! String-keyed strategy registry and factory.
//!
//! The registry is process-wide: built-ins load lazily exactly once, and an
//! optional plugin source (installed by the embedder) is drained exactly
//! once. Both loads are idempotent, so a concurrent first use is benign.
//! [`RentUpdateFactory::reset`] exists for test isolation.

use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

use crate::error::RentUpdateError;
use crate::strategies::{
    FixedAmountUpdate, IpcThenPercentageUpdate, IpcUpdate, IravUpdate, MinIpcOrPercentageUpdate,
    PercentageUpdate, RentUpdateStrategy,
};
use crate::RentUpdateResult;

/// Constructor for a registered strategy.
pub type StrategyCtor = fn() -> Box<dyn RentUpdateStrategy>;

/// Zero or more (name, constructor) pairs contributed by an external
/// extension point.
pub type PluginSource = fn() -> Vec<(String, StrategyCtor)>;

#[derive(Default)]
struct RegistryState {
    registry: HashMap<String, StrategyCtor>,
    builtins_loaded: bool,
    plugins_loaded: bool,
    plugin_source: Option<PluginSource>,
}

static STATE: OnceLock<Mutex<RegistryState>> = OnceLock::new();

fn state() -> &'static Mutex<RegistryState> {
    STATE.get_or_init(|| Mutex::new(RegistryState::default()))
}

fn builtins() -> [(&'static str, StrategyCtor); 6] {
    [
        ("percentage", || Box::new(PercentageUpdate)),
        ("fixed_amount", || Box::new(FixedAmountUpdate)),
        ("ipc", || Box::new(IpcUpdate::new())),
        ("ipc_then_percentage", || {
            Box::new(IpcThenPercentageUpdate::new())
        }),
        ("irav", || Box::new(IravUpdate::new())),
        ("min_ipc_or_percentage", || {
            Box::new(MinIpcOrPercentageUpdate::new())
        }),
    ]
}

pub struct RentUpdateFactory;

impl RentUpdateFactory {
    fn normalize_key(key: &str) -> String {
        key.trim().to_lowercase()
    }

    /// Register a strategy constructor under a key. Idempotent; a later
    /// registration for an existing key overwrites it.
    pub fn register(key: &str, ctor: StrategyCtor) {
        let mut state = state().lock().expect("registry lock poisoned");
        state.registry.insert(Self::normalize_key(key), ctor);
    }

    /// Install the external extension point. Its candidates are drained on
    /// the next `create` if plugin discovery has not run yet.
    pub fn set_plugin_source(source: PluginSource) {
        let mut state = state().lock().expect("registry lock poisoned");
        state.plugin_source = Some(source);
    }

    fn ensure_loaded() {
        let pending_source = {
            let mut state = state().lock().expect("registry lock poisoned");
            if !state.builtins_loaded {
                for (key, ctor) in builtins() {
                    state.registry.insert(Self::normalize_key(key), ctor);
                }
                state.builtins_loaded = true;
            }
            if state.plugins_loaded {
                None
            } else {
                state.plugins_loaded = true;
                state.plugin_source
            }
        };

        // No source installed means no candidates; the source runs outside
        // the lock so it may call back into `register`.
        if let Some(source) = pending_source {
            for (key, ctor) in source() {
                Self::register(&key, ctor);
            }
        }
    }

    /// All currently registered keys, sorted.
    pub fn available() -> Vec<String> {
        Self::ensure_loaded();
        let state = state().lock().expect("registry lock poisoned");
        let mut keys: Vec<String> = state.registry.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Instantiate the strategy registered under `key` (trimmed,
    /// case-folded).
    pub fn create(key: &str) -> RentUpdateResult<Box<dyn RentUpdateStrategy>> {
        Self::ensure_loaded();
        let state = state().lock().expect("registry lock poisoned");
        match state.registry.get(&Self::normalize_key(key)) {
            Some(ctor) => Ok(ctor()),
            None => {
                let mut keys: Vec<&str> = state.registry.keys().map(String::as_str).collect();
                keys.sort_unstable();
                Err(RentUpdateError::UnknownStrategy {
                    key: key.to_string(),
                    available: keys.join(", "),
                })
            }
        }
    }

    /// Clear the registry and both lazy-load flags. Test scaffolding only.
    pub fn reset() {
        let mut state = state().lock().expect("registry lock poisoned");
        *state = RegistryState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{UpdateInput, UpdateOutcome};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    // The registry is process-wide state; serialize the tests that touch it.
    static TEST_LOCK: Mutex<()> = Mutex::new(());

    fn guard() -> std::sync::MutexGuard<'static, ()> {
        let guard = TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        RentUpdateFactory::reset();
        guard
    }

    struct NoopUpdate;

    impl RentUpdateStrategy for NoopUpdate {
        fn calculate(&self, input: &UpdateInput) -> RentUpdateResult<UpdateOutcome> {
            Ok(UpdateOutcome {
                amount: input.amount(),
                updated_amount: input.amount(),
                ..UpdateOutcome::default()
            })
        }
    }

    struct DoubleUpdate;

    impl RentUpdateStrategy for DoubleUpdate {
        fn calculate(&self, input: &UpdateInput) -> RentUpdateResult<UpdateOutcome> {
            Ok(UpdateOutcome {
                amount: input.amount(),
                updated_amount: input.amount() * dec!(2),
                ..UpdateOutcome::default()
            })
        }
    }

    #[test]
    fn builtins_resolve_by_key() {
        let _guard = guard();
        for key in [
            "percentage",
            "fixed_amount",
            "ipc",
            "ipc_then_percentage",
            "irav",
            "min_ipc_or_percentage",
        ] {
            assert!(RentUpdateFactory::create(key).is_ok(), "missing {key}");
        }
    }

    #[test]
    fn keys_are_trimmed_and_case_folded() {
        let _guard = guard();
        assert!(RentUpdateFactory::create("  IPC  ").is_ok());
        assert!(RentUpdateFactory::create("Fixed_Amount").is_ok());
    }

    #[test]
    fn unknown_key_lists_available_strategies() {
        let _guard = guard();
        let err = RentUpdateFactory::create("bogus").err().unwrap();
        assert_eq!(
            err.to_string(),
            "Unknown update type: bogus. Available: fixed_amount, ipc, \
             ipc_then_percentage, irav, min_ipc_or_percentage, percentage"
        );
    }

    #[test]
    fn custom_registration_and_overwrite() {
        let _guard = guard();
        RentUpdateFactory::register("custom", || Box::new(NoopUpdate));
        let input = UpdateInput::new(dec!(100), None, None, None, None).unwrap();
        let outcome = RentUpdateFactory::create("custom")
            .unwrap()
            .calculate(&input)
            .unwrap();
        assert_eq!(outcome.updated_amount, dec!(100));

        // Latest registration for the same key wins.
        RentUpdateFactory::register("custom", || Box::new(DoubleUpdate));
        let outcome = RentUpdateFactory::create("custom")
            .unwrap()
            .calculate(&input)
            .unwrap();
        assert_eq!(outcome.updated_amount, dec!(200));
    }

    #[test]
    fn builtin_can_be_overridden() {
        let _guard = guard();
        RentUpdateFactory::create("percentage").unwrap();
        RentUpdateFactory::register("percentage", || Box::new(NoopUpdate));
        let input = UpdateInput::new(dec!(80), None, None, None, None).unwrap();
        let outcome = RentUpdateFactory::create("percentage")
            .unwrap()
            .calculate(&input)
            .unwrap();
        assert_eq!(outcome.updated_amount, dec!(80));
    }

    fn plugin_candidates() -> Vec<(String, StrategyCtor)> {
        vec![("plugin_noop".to_string(), || Box::new(NoopUpdate))]
    }

    #[test]
    fn plugin_source_is_drained_once() {
        let _guard = guard();
        RentUpdateFactory::set_plugin_source(plugin_candidates);
        assert!(RentUpdateFactory::create("plugin_noop").is_ok());
        assert!(RentUpdateFactory::available().contains(&"plugin_noop".to_string()));
    }

    #[test]
    fn reset_restores_lazy_loading() {
        let _guard = guard();
        RentUpdateFactory::register("custom", || Box::new(NoopUpdate));
        RentUpdateFactory::reset();
        assert!(RentUpdateFactory::create("custom").is_err());
        assert!(RentUpdateFactory::create("ipc").is_ok());
    }

    #[test]
    fn available_is_sorted() {
        let _guard = guard();
        let keys = RentUpdateFactory::available();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
        assert_eq!(keys.len(), 6);
    }
}
