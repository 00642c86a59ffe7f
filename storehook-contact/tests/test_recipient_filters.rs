//! Test recipient filtering across email kinds
//!
//! This test verifies that the extension properly:
//! 1. Appends a valid stored shipping email on the processing, completed and
//!    customer note emails, after existing recipients, comma-separated
//! 2. Leaves the list unchanged for invalid or empty stored values
//! 3. Never touches emails outside the configured CC kinds
//! 4. Runs behind default-priority filters on the same chain

use storehook::email::{EmailKind, Recipients};
use storehook::hooks::StorefrontHooks;
use storehook::order::{Order, META_SHIPPING_EMAIL};
use storehook_contact::{ContactConfig, ShippingContact, RECIPIENT_PRIORITY};

const CC_KINDS: [EmailKind; 3] = [
  EmailKind::CustomerProcessingOrder,
  EmailKind::CustomerCompletedOrder,
  EmailKind::CustomerNote,
];

fn installed_hooks() -> StorefrontHooks {
  let mut hooks = StorefrontHooks::new();
  hooks
    .install(&ShippingContact::new())
    .expect("default install");
  hooks
}

#[test]
fn test_valid_email_appended_on_all_cc_kinds() {
  let hooks = installed_hooks();
  let order = Order::new(1001u64).with_meta(META_SHIPPING_EMAIL, "warehouse@example.com");

  for kind in CC_KINDS {
    let out = hooks.filter_email_recipients(kind, Recipients::from("buyer@example.com"), &order);
    assert_eq!(
      out.to_string(),
      "buyer@example.com,warehouse@example.com",
      "kind {kind} should gain the CC"
    );
  }
}

#[test]
fn test_invalid_or_empty_email_leaves_list_unchanged() {
  let hooks = installed_hooks();

  let invalid = Order::new(1u64).with_meta(META_SHIPPING_EMAIL, "warehouse-at-example");
  let empty = Order::new(2u64).with_meta(META_SHIPPING_EMAIL, "");
  let absent = Order::new(3u64);

  for order in [&invalid, &empty, &absent] {
    for kind in CC_KINDS {
      let out = hooks.filter_email_recipients(kind, Recipients::from("buyer@example.com"), order);
      assert_eq!(out.to_string(), "buyer@example.com");
    }
  }
}

#[test]
fn test_other_email_kinds_are_untouched() {
  let hooks = installed_hooks();
  let order = Order::new(4u64).with_meta(META_SHIPPING_EMAIL, "warehouse@example.com");

  for kind in [
    EmailKind::NewOrder,
    EmailKind::CancelledOrder,
    EmailKind::FailedOrder,
    EmailKind::CustomerOnHoldOrder,
    EmailKind::CustomerRefundedOrder,
    EmailKind::CustomerInvoice,
  ] {
    let out = hooks.filter_email_recipients(kind, Recipients::from("buyer@example.com"), &order);
    assert_eq!(out.to_string(), "buyer@example.com");
  }
}

#[test]
fn test_runs_behind_default_priority_filters() {
  let mut hooks = installed_hooks();

  // A host-side filter at default priority, registered after the extension,
  // still runs first because the extension sits at priority 20.
  hooks
    .email_recipients_mut(EmailKind::CustomerProcessingOrder)
    .add_default(|mut list, _order: &Order| {
      list.push("sales@host.example");
      list
    });
  assert!(storehook::hook::DEFAULT_PRIORITY < RECIPIENT_PRIORITY);

  let order = Order::new(5u64).with_meta(META_SHIPPING_EMAIL, "warehouse@example.com");
  let out = hooks.filter_email_recipients(
    EmailKind::CustomerProcessingOrder,
    Recipients::from("buyer@example.com"),
    &order,
  );
  assert_eq!(
    out.to_string(),
    "buyer@example.com,sales@host.example,warehouse@example.com"
  );
}

#[test]
fn test_duplicate_address_not_collapsed() {
  let hooks = installed_hooks();
  let order = Order::new(6u64).with_meta(META_SHIPPING_EMAIL, "buyer@example.com");

  let out = hooks.filter_email_recipients(
    EmailKind::CustomerCompletedOrder,
    Recipients::from("buyer@example.com"),
    &order,
  );
  assert_eq!(out.to_string(), "buyer@example.com,buyer@example.com");
}

#[test]
fn test_custom_cc_kind_set() {
  let config = ContactConfig::new().with_cc_email_kinds([EmailKind::CustomerInvoice]);
  let mut hooks = StorefrontHooks::new();
  hooks
    .install(&ShippingContact::with_config(config))
    .expect("custom install");

  let order = Order::new(7u64).with_meta(META_SHIPPING_EMAIL, "warehouse@example.com");

  let invoice = hooks.filter_email_recipients(
    EmailKind::CustomerInvoice,
    Recipients::from("buyer@example.com"),
    &order,
  );
  assert_eq!(
    invoice.to_string(),
    "buyer@example.com,warehouse@example.com"
  );

  let processing = hooks.filter_email_recipients(
    EmailKind::CustomerProcessingOrder,
    Recipients::from("buyer@example.com"),
    &order,
  );
  assert_eq!(processing.to_string(), "buyer@example.com");
}
