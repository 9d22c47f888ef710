//! Terminal implementation of the page-model capability.
//!
//! The "page" is a tab bar of trigger buttons plus one content node per
//! section. Handles are positions in those two lists; the router toggles
//! active flags through [`Page::set_active`] and the draw code reads them
//! back when rendering.

use switchdeck_core::{Page, SectionId, Trigger};

use crate::manifest::PageManifest;

/// Handle into the demo page tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeId {
    Container,
    Section(usize),
    Button(usize),
}

/// Content node for one section.
#[derive(Debug)]
pub struct SectionNode {
    pub id: SectionId,
    pub title: String,
    pub body: String,
    pub active: bool,
}

/// A trigger button in the tab bar.
#[derive(Debug)]
pub struct ButtonNode {
    pub label: String,
    pub target: SectionId,
    pub active: bool,
}

#[derive(Debug)]
pub struct TuiPage {
    container_id: String,
    pub sections: Vec<SectionNode>,
    pub buttons: Vec<ButtonNode>,
}

impl TuiPage {
    pub fn from_manifest(manifest: &PageManifest) -> Self {
        let sections = manifest
            .sections
            .iter()
            .map(|def| SectionNode {
                id: SectionId::new(&def.id),
                title: def.title.clone(),
                body: def.body.clone(),
                active: false,
            })
            .collect();
        let buttons = manifest
            .sections
            .iter()
            .map(|def| ButtonNode {
                label: def.button.clone(),
                target: SectionId::new(&def.id),
                active: false,
            })
            .collect();
        Self {
            container_id: manifest.options.container_id.clone(),
            sections,
            buttons,
        }
    }

    /// Trigger handles in tab-bar order, for wiring key bindings.
    pub fn button_handles(&self) -> Vec<NodeId> {
        (0..self.buttons.len()).map(NodeId::Button).collect()
    }

    /// The section currently carrying the active marker, if any.
    pub fn active_section(&self) -> Option<&SectionNode> {
        self.sections.iter().find(|s| s.active)
    }
}

impl Page for TuiPage {
    type Handle = NodeId;

    fn container(&self, id: &str) -> Option<NodeId> {
        (id == self.container_id).then_some(NodeId::Container)
    }

    fn element(&self, id: &SectionId) -> Option<NodeId> {
        self.sections
            .iter()
            .position(|s| s.id == *id)
            .map(NodeId::Section)
    }

    fn triggers(&self, container: NodeId) -> Vec<Trigger<NodeId>> {
        if container != NodeId::Container {
            return Vec::new();
        }
        self.buttons
            .iter()
            .enumerate()
            .map(|(i, button)| Trigger {
                control: NodeId::Button(i),
                target: Some(button.target.clone()),
            })
            .collect()
    }

    fn set_active(&mut self, handle: NodeId, active: bool) {
        match handle {
            NodeId::Section(i) => {
                if let Some(section) = self.sections.get_mut(i) {
                    section.active = active;
                }
            }
            NodeId::Button(i) => {
                if let Some(button) = self.buttons.get_mut(i) {
                    button.active = active;
                }
            }
            NodeId::Container => {}
        }
    }
}
