//! Model registry.
//!
//! Descriptors are built once per process and handed out as `Arc`s, so
//! every session of the same model shares one immutable table.

use std::sync::{Arc, LazyLock};

use rigwire_core::caps::CapabilityDescriptor;
use rigwire_core::error::{Error, Result};

static MODELS: LazyLock<Vec<Arc<CapabilityDescriptor>>> = LazyLock::new(|| {
    let mut models = Vec::new();

    #[cfg(feature = "text")]
    models.extend(rigwire_text::all_text_models());

    #[cfg(feature = "civ")]
    models.extend(rigwire_civ::all_civ_models());

    models.into_iter().map(Arc::new).collect()
});

/// The shared descriptor for `model_id`.
pub fn lookup(model_id: &str) -> Result<Arc<CapabilityDescriptor>> {
    MODELS
        .iter()
        .find(|m| m.model_id.eq_ignore_ascii_case(model_id))
        .cloned()
        .ok_or_else(|| Error::Config(format!("unknown model {model_id:?}")))
}

/// Every model compiled into this build.
pub fn supported_models() -> Vec<Arc<CapabilityDescriptor>> {
    MODELS.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "civ")]
    #[test]
    fn lookup_shares_one_descriptor() {
        let a = lookup("ic7300").unwrap();
        let b = lookup("IC7300").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn unknown_model_is_config_error() {
        assert!(matches!(lookup("ft-1000"), Err(Error::Config(_))));
    }

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<_> = supported_models().iter().map(|m| m.model_id).collect();
        let n = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), n);
    }

    #[cfg(all(feature = "text", feature = "civ"))]
    #[test]
    fn both_families_listed() {
        let ids: Vec<_> = supported_models().iter().map(|m| m.model_id).collect();
        assert!(ids.contains(&"ftx1"));
        assert!(ids.contains(&"ic705"));
    }
}
