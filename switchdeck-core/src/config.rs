//! Router configuration and optional hooks.

use crate::section::SectionId;
use serde::{Deserialize, Serialize};

/// Configuration options for a [`crate::SectionRouter`].
///
/// Every field has a default, so a host can deserialize a partial table or
/// start from `RouterOptions::default()` and override what it needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterOptions {
    /// Page id of the container element holding the trigger controls.
    pub container_id: String,
    /// Section identifiers to register.
    pub section_ids: Vec<SectionId>,
    /// Section shown when no persisted state exists.
    pub default_section: Option<SectionId>,
    /// Delay in milliseconds before the very first transition fires.
    pub initial_delay_ms: u64,
    /// Delay in milliseconds before trigger-driven transitions fire.
    pub section_delay_ms: u64,
    /// Read the persisted section at construction and write it on every
    /// completed transition.
    pub save_state: bool,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            container_id: "router".to_string(),
            section_ids: Vec::new(),
            default_section: None,
            initial_delay_ms: 0,
            section_delay_ms: 0,
            save_state: true,
        }
    }
}

/// Payload passed to the page-load hook, once per construction, before the
/// initial transition request is issued.
#[derive(Debug, Clone)]
pub struct PageLoad {
    pub default_section: Option<SectionId>,
    pub active_section: Option<SectionId>,
    pub saved_section: Option<SectionId>,
}

/// Payload passed to the trigger hook on every activation, before the
/// transition request is issued. `active_section` is the live value at
/// invocation time.
#[derive(Debug, Clone)]
pub struct TriggerClick {
    pub target: SectionId,
    pub default_section: Option<SectionId>,
    pub active_section: Option<SectionId>,
    pub saved_section: Option<SectionId>,
}

/// Optional hooks invoked synchronously at defined points. An absent hook
/// is a no-op, not an error.
#[derive(Default)]
pub struct RouterHooks {
    pub page_load: Option<Box<dyn FnMut(&PageLoad)>>,
    pub trigger_click: Option<Box<dyn FnMut(&TriggerClick)>>,
}

impl RouterHooks {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let options = RouterOptions::default();
        assert_eq!(options.container_id, "router");
        assert!(options.section_ids.is_empty());
        assert_eq!(options.default_section, None);
        assert_eq!(options.initial_delay_ms, 0);
        assert_eq!(options.section_delay_ms, 0);
        assert!(options.save_state);
    }

    #[test]
    fn partial_deserialization_fills_defaults() {
        let options: RouterOptions =
            serde_json::from_str(r#"{"default_section": "home", "section_delay_ms": 250}"#)
                .unwrap();
        assert_eq!(options.default_section, Some(SectionId::from("home")));
        assert_eq!(options.section_delay_ms, 250);
        assert_eq!(options.container_id, "router");
        assert!(options.save_state);
    }
}
