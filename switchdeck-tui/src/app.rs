//! Application state — single-owner, main-thread only.
//!
//! Owns the router (which in turn owns the page, the file store, and the
//! wall-clock scheduler), the tab-bar cursor, and the activity log fed by
//! the router hooks.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::Result;
use chrono::NaiveDateTime;

use switchdeck_core::{FileStore, RouterHooks, SectionId, SectionRouter, WallClockScheduler};

use crate::manifest::PageManifest;
use crate::page::{NodeId, TuiPage};

const LOG_CAP: usize = 100;

pub type DemoRouter = SectionRouter<TuiPage, FileStore, WallClockScheduler>;

/// One line in the activity log panel.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub at: NaiveDateTime,
    pub message: String,
}

/// Log shared between the app and the router hooks.
pub type SharedLog = Rc<RefCell<VecDeque<LogEntry>>>;

/// Push a log entry, capping the history.
pub fn push_log(log: &SharedLog, message: String) {
    let mut log = log.borrow_mut();
    log.push_front(LogEntry {
        at: chrono::Local::now().naive_local(),
        message,
    });
    if log.len() > LOG_CAP {
        log.pop_back();
    }
}

fn fmt_section(section: &Option<SectionId>) -> String {
    match section {
        Some(id) => id.to_string(),
        None => "(none)".to_string(),
    }
}

pub struct AppState {
    pub router: DemoRouter,
    /// Trigger handles in tab-bar order.
    pub buttons: Vec<NodeId>,
    /// Tab-bar highlight, independent of active styling.
    pub cursor: usize,
    pub running: bool,
    pub log: SharedLog,
}

impl AppState {
    pub fn new(manifest: PageManifest, state_path: PathBuf) -> Result<Self> {
        let log: SharedLog = Rc::new(RefCell::new(VecDeque::with_capacity(LOG_CAP)));

        let mut hooks = RouterHooks::new();
        let load_log = log.clone();
        hooks.page_load = Some(Box::new(move |info| {
            push_log(
                &load_log,
                format!(
                    "page load — saved {}, default {}",
                    fmt_section(&info.saved_section),
                    fmt_section(&info.default_section)
                ),
            );
        }));
        let click_log = log.clone();
        hooks.trigger_click = Some(Box::new(move |click| {
            push_log(
                &click_log,
                format!(
                    "button {} (active {})",
                    click.target,
                    fmt_section(&click.active_section)
                ),
            );
        }));

        let mut options = manifest.options.clone();
        options.section_ids = manifest
            .sections
            .iter()
            .map(|def| SectionId::new(&def.id))
            .collect();

        let page = TuiPage::from_manifest(&manifest);
        let buttons = page.button_handles();
        let router = SectionRouter::new(
            page,
            FileStore::open(state_path),
            WallClockScheduler::new(),
            options,
            hooks,
        )?;

        Ok(Self {
            router,
            buttons,
            cursor: 0,
            running: true,
            log,
        })
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn cursor_left(&mut self) {
        let len = self.buttons.len();
        if len > 0 {
            self.cursor = (self.cursor + len - 1) % len;
        }
    }

    pub fn cursor_right(&mut self) {
        let len = self.buttons.len();
        if len > 0 {
            self.cursor = (self.cursor + 1) % len;
        }
    }

    /// Activate the button under the cursor.
    pub fn activate_cursor(&mut self) {
        if let Some(button) = self.buttons.get(self.cursor).copied() {
            self.router.activate(button);
        }
    }

    /// Activate the n-th button (number-key shortcut).
    pub fn activate_index(&mut self, index: usize) {
        if let Some(button) = self.buttons.get(index).copied() {
            self.cursor = index;
            self.router.activate(button);
        }
    }

    /// Fire any delayed transition whose deadline has passed.
    pub fn tick(&mut self) {
        self.router.pump();
    }
}
