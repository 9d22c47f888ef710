//! Page model capability — element lookup, trigger discovery, active-marker toggling.
//!
//! The router never touches a concrete widget tree. Hosts implement [`Page`]
//! over whatever view system they render with; [`MemoryPage`] is a flat
//! in-memory implementation used by the tests and benches and usable as a
//! reference by hosts.

use crate::section::SectionId;
use std::fmt;

/// A trigger control discovered under the container.
///
/// `target` is the control's declared target section, free-form data as far
/// as the page is concerned. Controls without one are ignored by the router.
#[derive(Debug, Clone)]
pub struct Trigger<H> {
    pub control: H,
    pub target: Option<SectionId>,
}

/// View-tree capability consumed by the router.
pub trait Page {
    /// Opaque element handle. Cheap to copy, compared by identity.
    type Handle: Copy + Eq + fmt::Debug;

    /// Resolve a container id to its element.
    fn container(&self, id: &str) -> Option<Self::Handle>;

    /// Resolve a section id to its element, if the page defines one.
    fn element(&self, id: &SectionId) -> Option<Self::Handle>;

    /// Enumerate the trigger controls under `container`, in document order.
    fn triggers(&self, container: Self::Handle) -> Vec<Trigger<Self::Handle>>;

    /// Add or remove the active-style marker on an element.
    fn set_active(&mut self, handle: Self::Handle, active: bool);
}

/// Handle into a [`MemoryPage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(usize);

#[derive(Debug)]
struct MemoryElement {
    dom_id: Option<String>,
    parent: Option<ElementId>,
    target: Option<SectionId>,
    is_trigger: bool,
    active: bool,
}

/// Flat in-memory page: an element arena with parent links and active flags.
#[derive(Debug, Default)]
pub struct MemoryPage {
    elements: Vec<MemoryElement>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, element: MemoryElement) -> ElementId {
        self.elements.push(element);
        ElementId(self.elements.len() - 1)
    }

    /// Add a container element with the given id.
    pub fn add_container(&mut self, id: &str) -> ElementId {
        self.push(MemoryElement {
            dom_id: Some(id.to_string()),
            parent: None,
            target: None,
            is_trigger: false,
            active: false,
        })
    }

    /// Add a section element whose id matches its section identifier.
    pub fn add_section(&mut self, id: &str) -> ElementId {
        self.push(MemoryElement {
            dom_id: Some(id.to_string()),
            parent: None,
            target: None,
            is_trigger: false,
            active: false,
        })
    }

    /// Add a trigger control under `container`. `target` is the declared
    /// target section; `None` models a control with no declaration.
    pub fn add_trigger(&mut self, container: ElementId, target: Option<&str>) -> ElementId {
        self.push(MemoryElement {
            dom_id: None,
            parent: Some(container),
            target: target.map(SectionId::from),
            is_trigger: true,
            active: false,
        })
    }

    pub fn is_active(&self, handle: ElementId) -> bool {
        self.elements[handle.0].active
    }

    /// All elements currently carrying the active marker.
    pub fn active_elements(&self) -> Vec<ElementId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, e)| e.active)
            .map(|(i, _)| ElementId(i))
            .collect()
    }
}

impl Page for MemoryPage {
    type Handle = ElementId;

    fn container(&self, id: &str) -> Option<ElementId> {
        self.elements
            .iter()
            .position(|e| !e.is_trigger && e.dom_id.as_deref() == Some(id))
            .map(ElementId)
    }

    fn element(&self, id: &SectionId) -> Option<ElementId> {
        self.container(id.as_str())
    }

    fn triggers(&self, container: ElementId) -> Vec<Trigger<ElementId>> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_trigger && e.parent == Some(container))
            .map(|(i, e)| Trigger {
                control: ElementId(i),
                target: e.target.clone(),
            })
            .collect()
    }

    fn set_active(&mut self, handle: ElementId, active: bool) {
        self.elements[handle.0].active = active;
    }
}
