//! Section-transition state machine.
//!
//! A [`SectionRouter`] owns its three collaborators (page model, state
//! store, scheduler) plus the section and button registries, the active
//! section, and the single pending-transition timer. All section changes
//! flow through two non-public steps: `request_transition` (guards and
//! debounce) and `apply_transition` (the ordered state commit).
//!
//! The host event loop drives the router from the outside: it delivers
//! trigger activations through [`SectionRouter::activate`] and drains due
//! timers through [`SectionRouter::pump`] each tick.

use std::collections::HashMap;
use std::time::Duration;

use crate::config::{PageLoad, RouterHooks, RouterOptions, TriggerClick};
use crate::error::RouterError;
use crate::page::Page;
use crate::schedule::{Scheduler, TimerHandle};
use crate::section::SectionId;
use crate::store::{StateStore, SAVED_SECTION_KEY};

struct PendingTransition {
    timer: TimerHandle,
    target: SectionId,
}

pub struct SectionRouter<P: Page, S: StateStore, T: Scheduler> {
    page: P,
    store: S,
    scheduler: T,
    options: RouterOptions,
    hooks: RouterHooks,
    /// Section id → its element, `None` when the page has no match.
    sections: HashMap<SectionId, Option<P::Handle>>,
    /// Section id → trigger controls bound to it, in discovery order.
    buttons: HashMap<SectionId, Vec<P::Handle>>,
    /// Control → declared target, used to serve activation events.
    triggers: Vec<(P::Handle, SectionId)>,
    active: Option<SectionId>,
    saved: Option<SectionId>,
    pending: Option<PendingTransition>,
}

impl<P: Page, S: StateStore, T: Scheduler> SectionRouter<P, S, T> {
    /// Build a router and issue the initial transition request.
    ///
    /// The container id must resolve; a miss aborts construction. Section
    /// ids and trigger targets that resolve to nothing are tolerated gaps.
    /// The `page_load` hook fires exactly once, before the initial request.
    pub fn new(
        page: P,
        store: S,
        scheduler: T,
        options: RouterOptions,
        hooks: RouterHooks,
    ) -> Result<Self, RouterError> {
        let container = page
            .container(&options.container_id)
            .ok_or_else(|| RouterError::ContainerNotFound(options.container_id.clone()))?;

        let saved = store.get(SAVED_SECTION_KEY).map(SectionId::from);

        let mut sections = HashMap::new();
        for id in &options.section_ids {
            sections.insert(id.clone(), page.element(id));
        }

        let mut buttons: HashMap<SectionId, Vec<P::Handle>> = HashMap::new();
        let mut triggers = Vec::new();
        for trigger in page.triggers(container) {
            // Controls that declare no target section are ignored.
            let Some(target) = trigger.target else { continue };
            buttons.entry(target.clone()).or_default().push(trigger.control);
            triggers.push((trigger.control, target));
        }

        let mut router = Self {
            page,
            store,
            scheduler,
            options,
            hooks,
            sections,
            buttons,
            triggers,
            active: None,
            saved,
            pending: None,
        };

        router.emit_page_load();

        let initial = if router.options.save_state && router.saved.is_some() {
            router.saved.clone()
        } else {
            router.options.default_section.clone()
        };
        if let Some(target) = initial {
            let delay = Duration::from_millis(router.options.initial_delay_ms);
            router.request_transition(&target, delay);
        }

        Ok(router)
    }

    /// Deliver a trigger activation event.
    ///
    /// Invokes the `trigger_click` hook with the live active section, then
    /// requests a transition to the control's declared target with the
    /// configured section delay. Controls unknown to the router are ignored.
    pub fn activate(&mut self, control: P::Handle) {
        let Some(target) = self
            .triggers
            .iter()
            .find(|(c, _)| *c == control)
            .map(|(_, target)| target.clone())
        else {
            return;
        };
        self.emit_trigger_click(&target);
        let delay = Duration::from_millis(self.options.section_delay_ms);
        self.request_transition(&target, delay);
    }

    /// Drain due timers and commit the pending transition if its timer fired.
    pub fn pump(&mut self) {
        while let Some(timer) = self.scheduler.next_due() {
            match self.pending.take() {
                Some(pending) if pending.timer == timer => {
                    self.apply_transition(pending.target);
                }
                other => self.pending = other,
            }
        }
    }

    /// The currently active section, `None` before the first commit.
    pub fn active_section(&self) -> Option<&SectionId> {
        self.active.as_ref()
    }

    /// The persisted section read from the store at construction.
    pub fn saved_section(&self) -> Option<&SectionId> {
        self.saved.as_ref()
    }

    /// Whether a delayed transition is armed but not yet committed.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn options(&self) -> &RouterOptions {
        &self.options
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable scheduler access, for host tick loops and manual clocks.
    pub fn scheduler_mut(&mut self) -> &mut T {
        &mut self.scheduler
    }

    /// Guard and debounce a transition request. Newest request wins: any
    /// pending timer is cancelled before the new request is scheduled.
    fn request_transition(&mut self, target: &SectionId, delay: Duration) {
        // Redundant requests return before cancellation, leaving an armed
        // pending transition untouched.
        if self.active.as_ref() == Some(target) {
            return;
        }
        // Targets without a registered element are rejected outright.
        if !matches!(self.sections.get(target), Some(Some(_))) {
            tracing::debug!(section = %target, "transition target has no element, ignoring");
            return;
        }
        if let Some(pending) = self.pending.take() {
            self.scheduler.cancel(pending.timer);
        }
        if delay.is_zero() {
            self.apply_transition(target.clone());
        } else {
            let timer = self.scheduler.schedule(delay);
            self.pending = Some(PendingTransition {
                timer,
                target: target.clone(),
            });
        }
    }

    /// Commit a transition. Old styling is removed before new styling is
    /// added, for the section element and its buttons alike; every step
    /// tolerates a missing registry entry.
    fn apply_transition(&mut self, target: SectionId) {
        if let Some(active) = &self.active {
            if let Some(Some(element)) = self.sections.get(active) {
                self.page.set_active(*element, false);
            }
        }
        if let Some(Some(element)) = self.sections.get(&target) {
            self.page.set_active(*element, true);
        }
        if let Some(active) = &self.active {
            if let Some(controls) = self.buttons.get(active) {
                for control in controls {
                    self.page.set_active(*control, false);
                }
            }
        }
        if let Some(controls) = self.buttons.get(&target) {
            for control in controls {
                self.page.set_active(*control, true);
            }
        }
        if self.options.save_state {
            self.store.set(SAVED_SECTION_KEY, target.as_str());
        }
        tracing::debug!(section = %target, "transition applied");
        self.active = Some(target);
    }

    fn emit_page_load(&mut self) {
        if let Some(hook) = self.hooks.page_load.as_mut() {
            let payload = PageLoad {
                default_section: self.options.default_section.clone(),
                active_section: self.active.clone(),
                saved_section: self.saved.clone(),
            };
            hook(&payload);
        }
    }

    fn emit_trigger_click(&mut self, target: &SectionId) {
        if let Some(hook) = self.hooks.trigger_click.as_mut() {
            let payload = TriggerClick {
                target: target.clone(),
                default_section: self.options.default_section.clone(),
                active_section: self.active.clone(),
                saved_section: self.saved.clone(),
            };
            hook(&payload);
        }
    }
}
