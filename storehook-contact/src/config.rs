//! Configuration for the shipping contact extension
//!
//! Every knob defaults to the stock behavior: both fields on, email required,
//! and the shipping email CC'd on the processing, completed and customer note
//! emails.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use storehook::email::EmailKind;
use storehook::error::{Error, Result};

/// Settings of the shipping contact extension
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
  /// Label of the shipping email field
  pub email_label: String,
  /// Label of the shipping phone field
  pub phone_label: String,
  /// Whether the shipping email field is required at checkout
  pub email_required: bool,
  /// Whether the shipping phone field is registered at all
  pub phone_enabled: bool,
  /// Email kinds whose recipient list gains the shipping email
  pub cc_email_kinds: HashSet<EmailKind>,
}

impl Default for ContactConfig {
  fn default() -> Self {
    Self {
      email_label: "Shipping Email".to_string(),
      phone_label: "Shipping Phone".to_string(),
      email_required: true,
      phone_enabled: true,
      cc_email_kinds: HashSet::from([
        EmailKind::CustomerProcessingOrder,
        EmailKind::CustomerCompletedOrder,
        EmailKind::CustomerNote,
      ]),
    }
  }
}

impl ContactConfig {
  /// Create the default configuration
  pub fn new() -> Self {
    Self::default()
  }

  /// Set the label of the shipping email field
  pub fn with_email_label<S: Into<String>>(mut self, label: S) -> Self {
    self.email_label = label.into();
    self
  }

  /// Set the label of the shipping phone field
  pub fn with_phone_label<S: Into<String>>(mut self, label: S) -> Self {
    self.phone_label = label.into();
    self
  }

  /// Set whether the shipping email field is required at checkout
  pub fn with_email_required(mut self, required: bool) -> Self {
    self.email_required = required;
    self
  }

  /// Set whether the shipping phone field is registered
  pub fn with_phone_enabled(mut self, enabled: bool) -> Self {
    self.phone_enabled = enabled;
    self
  }

  /// Replace the set of email kinds that gain the CC
  pub fn with_cc_email_kinds<I: IntoIterator<Item = EmailKind>>(mut self, kinds: I) -> Self {
    self.cc_email_kinds = kinds.into_iter().collect();
    self
  }

  /// Add one email kind to the CC set
  pub fn cc_on(mut self, kind: EmailKind) -> Self {
    self.cc_email_kinds.insert(kind);
    self
  }

  /// Check the configuration for contradictions
  pub fn validate(&self) -> Result<()> {
    if self.email_label.trim().is_empty() {
      return Err(Error::config("email label must not be empty"));
    }
    if self.phone_enabled && self.phone_label.trim().is_empty() {
      return Err(Error::config("phone label must not be empty"));
    }
    Ok(())
  }
}
