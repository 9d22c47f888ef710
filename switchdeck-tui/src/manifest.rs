//! Page manifest — TOML description of the demo page's sections and
//! router options, with a built-in page when no file is present.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use switchdeck_core::RouterOptions;

/// One section of the demo page.
#[derive(Debug, Clone, Deserialize)]
pub struct SectionDef {
    pub id: String,
    pub title: String,
    /// Tab-bar label of the section's trigger button.
    pub button: String,
    #[serde(default)]
    pub body: String,
}

/// The whole demo page: router options plus the section list.
#[derive(Debug, Clone, Deserialize)]
pub struct PageManifest {
    #[serde(default)]
    pub options: RouterOptions,
    #[serde(default, rename = "section")]
    pub sections: Vec<SectionDef>,
}

impl PageManifest {
    /// Load a manifest from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading manifest {}", path.display()))?;
        let manifest: PageManifest = toml::from_str(&content)
            .with_context(|| format!("parsing manifest {}", path.display()))?;
        Ok(manifest)
    }

    /// Built-in demo page used when no manifest file exists.
    pub fn demo() -> Self {
        let section = |id: &str, title: &str, button: &str, body: &str| SectionDef {
            id: id.to_string(),
            title: title.to_string(),
            button: button.to_string(),
            body: body.to_string(),
        };
        Self {
            options: RouterOptions {
                default_section: Some("home".into()),
                section_delay_ms: 250,
                ..RouterOptions::default()
            },
            sections: vec![
                section(
                    "home",
                    "Home",
                    "Home",
                    "Welcome to the switchdeck demo page.\n\n\
                     The tab bar above is a row of trigger buttons; each one is bound\n\
                     to the section it names. Activating a button requests a section\n\
                     transition, which fires after the configured delay unless a newer\n\
                     request supersedes it first.\n\n\
                     The active section is persisted, so the one you leave open is the\n\
                     one you come back to.",
                ),
                section(
                    "profile",
                    "Profile",
                    "Profile",
                    "A second section, mutually exclusive with the others.\n\n\
                     Only one section is ever styled active: its element shows here and\n\
                     its buttons light up in the tab bar. Mash a few number keys in a\n\
                     row and watch the activity log — superseded requests never fire.",
                ),
                section(
                    "settings",
                    "Settings",
                    "Settings",
                    "Edit switchdeck.toml in the working directory to reshape this page:\n\
                     sections, button labels, delays, and whether state is saved.\n\n\
                     Options and their defaults:\n\
                       default_section   (none)\n\
                       initial_delay_ms  0\n\
                       section_delay_ms  0\n\
                       save_state        true",
                ),
                section(
                    "about",
                    "About",
                    "About",
                    "switchdeck — a client-side view-section coordinator.\n\n\
                     This terminal page implements the page-model capability over\n\
                     ratatui widgets; the routing core is front-end agnostic.",
                ),
            ],
        }
    }
}
