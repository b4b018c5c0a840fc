//! Contact console use-cases.
//!
//! # Responsibility
//! - Copy the profile e-mail through a host-supplied clipboard.
//! - Expose resume download and profile link affordances.
//!
//! # Invariants
//! - Clipboard failures never propagate; console state is left unchanged.
//! - The `copied` flag only flips after a successful write.

use crate::model::contact::{ContactProfile, ResumeDownload};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// How long hosts should show the "Copied!" label before calling
/// [`ContactConsole::reset_copied`].
pub const COPIED_FEEDBACK_MS: u64 = 1200;

const COPY_LABEL: &str = "Copy Email";
const COPIED_LABEL: &str = "Copied!";

/// Clipboard write failure reported by a host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// Host has no clipboard (headless, insecure context).
    Unavailable,
    /// Host refused the write.
    Denied(String),
}

impl Display for ClipboardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable => write!(f, "clipboard unavailable"),
            Self::Denied(reason) => write!(f, "clipboard write denied: {reason}"),
        }
    }
}

impl Error for ClipboardError {}

/// Host clipboard abstraction.
pub trait ClipboardSink {
    /// Writes `text` to the clipboard.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// View state for the contact page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactConsole {
    profile: ContactProfile,
    copied: bool,
}

impl ContactConsole {
    pub fn new(profile: ContactProfile) -> Self {
        Self {
            profile,
            copied: false,
        }
    }

    pub fn profile(&self) -> &ContactProfile {
        &self.profile
    }

    /// Whether the last copy succeeded and feedback is still showing.
    pub fn copied(&self) -> bool {
        self.copied
    }

    /// Label for the copy button in the current state.
    pub fn copy_label(&self) -> &'static str {
        if self.copied {
            COPIED_LABEL
        } else {
            COPY_LABEL
        }
    }

    /// Copies the e-mail address; failures are logged and swallowed.
    pub fn copy_email(&mut self, sink: &mut dyn ClipboardSink) {
        match sink.write_text(&self.profile.email) {
            Ok(()) => {
                self.copied = true;
                info!("event=contact_copy_email module=contact status=ok");
            }
            Err(err) => {
                debug!(
                    "event=contact_copy_email module=contact status=ignored reason={}",
                    err
                );
            }
        }
    }

    /// Clears copy feedback after [`COPIED_FEEDBACK_MS`].
    pub fn reset_copied(&mut self) {
        self.copied = false;
    }

    pub fn resume_download(&self) -> ResumeDownload {
        self.profile.resume_download()
    }
}
