//! Checkout and admin field callbacks
//!
//! Two filters: one appends the shipping email/phone fields to the checkout
//! shipping section, the other surfaces the stored values in the admin order
//! panel. The host persists posted checkout values under underscore-prefixed
//! meta keys and maps admin field ids through its `_shipping_` prefix.

use storehook::field::{FieldDef, FieldSet, FieldType, ValidateRule};
use storehook::hooks::{AdminContext, CheckoutContext};

use crate::config::ContactConfig;

/// Checkout field id of the shipping email
pub const CHECKOUT_EMAIL_FIELD: &str = "shipping_email";

/// Checkout field id of the shipping phone
pub const CHECKOUT_PHONE_FIELD: &str = "shipping_phone";

/// Admin panel field id of the shipping email
pub const ADMIN_EMAIL_FIELD: &str = "email";

/// Admin panel field id of the shipping phone
pub const ADMIN_PHONE_FIELD: &str = "phone";

// The host floats this wrapper class to the right column of the admin panel.
const ADMIN_PHONE_WRAPPER_CLASS: &str = "_shipping_state_field";

/// Append the shipping email and phone fields to the checkout shipping
/// section. The email field fills the left half of the row, the phone field
/// the right half with a float clear after it.
pub fn checkout_fields(
  config: &ContactConfig,
  mut fields: FieldSet,
  _ctx: &CheckoutContext,
) -> FieldSet {
  fields.insert(
    CHECKOUT_EMAIL_FIELD,
    FieldDef::new(config.email_label.clone())
      .with_required(config.email_required)
      .with_class("form-row-first")
      .validate_as(ValidateRule::Email),
  );
  if config.phone_enabled {
    fields.insert(
      CHECKOUT_PHONE_FIELD,
      FieldDef::new(config.phone_label.clone())
        .with_required(false)
        .with_type(FieldType::Tel)
        .with_class("form-row-last")
        .with_clear(true)
        .validate_as(ValidateRule::Phone),
    );
  }
  fields
}

/// Surface the stored shipping contact values in the admin order panel.
pub fn admin_fields(config: &ContactConfig, mut fields: FieldSet, _ctx: &AdminContext) -> FieldSet {
  fields.insert(
    ADMIN_EMAIL_FIELD,
    FieldDef::new(config.email_label.clone()),
  );
  if config.phone_enabled {
    fields.insert(
      ADMIN_PHONE_FIELD,
      FieldDef::new(config.phone_label.clone()).with_wrapper_class(ADMIN_PHONE_WRAPPER_CLASS),
    );
  }
  fields
}
