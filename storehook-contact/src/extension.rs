//! The shipping contact extension
//!
//! Bundles the field, recipient and rendering callbacks and attaches them to
//! a host's extension points in one registration pass.

use storehook::error::Result;
use storehook::hooks::{Extension, StorefrontHooks};

use crate::config::ContactConfig;
use crate::{details, fields, recipients};

/// Priority of the recipient filters, behind the host's own default-priority
/// recipient handling.
pub const RECIPIENT_PRIORITY: u32 = 20;

/// Priority of the email customer details action, after the host's address
/// block.
pub const EMAIL_DETAILS_PRIORITY: u32 = 15;

/// The shipping contact extension
///
/// Registers the checkout and admin fields, the recipient CC filter for the
/// configured email kinds, and the two rendering actions.
pub struct ShippingContact {
  config: ContactConfig,
}

impl ShippingContact {
  /// Create the extension with the stock configuration
  pub fn new() -> Self {
    Self::with_config(ContactConfig::default())
  }

  /// Create the extension with a custom configuration
  pub fn with_config(config: ContactConfig) -> Self {
    Self { config }
  }

  /// The active configuration
  pub fn config(&self) -> &ContactConfig {
    &self.config
  }
}

impl Default for ShippingContact {
  fn default() -> Self {
    Self::new()
  }
}

impl Extension for ShippingContact {
  fn name(&self) -> &str {
    "shipping_contact"
  }

  fn register(&self, hooks: &mut StorefrontHooks) -> Result<()> {
    self.config.validate()?;

    let config = self.config.clone();
    hooks
      .checkout_shipping_fields
      .add_default(move |fields, ctx| fields::checkout_fields(&config, fields, ctx));

    let config = self.config.clone();
    hooks
      .admin_shipping_fields
      .add_default(move |fields, ctx| fields::admin_fields(&config, fields, ctx));

    for kind in &self.config.cc_email_kinds {
      hooks
        .email_recipients_mut(*kind)
        .add(RECIPIENT_PRIORITY, recipients::add_cc_recipient);
    }

    let config = self.config.clone();
    hooks
      .order_details
      .add_default(move |ctx| details::order_details(&config, ctx));

    let config = self.config.clone();
    hooks
      .email_customer_details
      .add(EMAIL_DETAILS_PRIORITY, move |ctx| {
        details::email_customer_details(&config, ctx)
      });

    Ok(())
  }
}
