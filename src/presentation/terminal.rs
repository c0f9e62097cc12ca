//! Terminal presenter
//!
//! Renders banners as lines on a writer and dismisses success banners on the
//! tokio runtime once the configured delay has passed.

use log::{debug, warn};
use std::collections::BTreeSet;
use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::{Presenter, SUCCESS_DISMISS_AFTER};
use crate::auth::results::{Field, Form};

pub struct TerminalPresenter<W: Write> {
    out: W,
    dismiss_after: Duration,
    success: Arc<Mutex<Option<String>>>,
    generation: Arc<AtomicU64>,
    highlighted: BTreeSet<Field>,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self::with_dismiss_after(out, SUCCESS_DISMISS_AFTER)
    }

    pub fn with_dismiss_after(out: W, dismiss_after: Duration) -> Self {
        Self {
            out,
            dismiss_after,
            success: Arc::new(Mutex::new(None)),
            generation: Arc::new(AtomicU64::new(0)),
            highlighted: BTreeSet::new(),
        }
    }

    /// The success banner, if it has not been dismissed yet.
    pub fn success_banner(&self) -> Option<String> {
        self.success
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Currently highlighted fields, in form order.
    pub fn highlighted(&self) -> Vec<Field> {
        self.highlighted.iter().copied().collect()
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn into_writer(self) -> W {
        self.out
    }

    /// Writes one line of console output.
    pub fn write_line(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{}", line).and_then(|_| self.out.flush()) {
            warn!("Failed to write to terminal: {}", e);
        }
    }

    /// Writes `label: ` without a line break.
    pub fn prompt(&mut self, label: &str) {
        if let Err(e) = write!(self.out, "{}: ", label).and_then(|_| self.out.flush()) {
            warn!("Failed to write to terminal: {}", e);
        }
    }

    fn schedule_dismissal(&self, generation: u64) {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            warn!("No runtime available, success banner will not be dismissed");
            return;
        };

        let success = Arc::clone(&self.success);
        let current = Arc::clone(&self.generation);
        let delay = self.dismiss_after;

        handle.spawn(async move {
            tokio::time::sleep(delay).await;

            // A newer banner owns the slot now.
            if current.load(Ordering::SeqCst) != generation {
                return;
            }

            let mut banner = success
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            if banner.take().is_some() {
                debug!("Success banner dismissed after {:?}", delay);
            }
        });
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn show_error(&mut self, message: &str, field: Field) {
        self.write_line(&format!("Error: {} [{}]", message, field));
    }

    fn clear_error(&mut self) {
        debug!("Error banner cleared");
    }

    fn highlight_field(&mut self, field: Field) {
        self.highlighted.insert(field);
    }

    fn clear_field_highlight(&mut self, field: Field) {
        self.highlighted.remove(&field);
    }

    fn show_success(&mut self, message: &str) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        *self
            .success
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(message.to_string());

        self.write_line(&format!("Success! {}", message));
        self.schedule_dismissal(generation);
    }

    fn reset_form(&mut self, form: Form) {
        debug!("Form {} reset", form);
    }
}
