//! Recipient callback
//!
//! Appends the stored shipping email to the recipient list of selected
//! transactional emails. The address must parse as a syntactically valid
//! email; anything else is dropped without surfacing an error.

use storehook::email::{is_valid_address, Recipients};
use storehook::order::{Order, META_SHIPPING_EMAIL};

/// Append the order's shipping email to the recipient list when one is
/// stored and well formed. Existing recipients keep their positions; the
/// shipping email always lands last. Duplicates are not collapsed.
pub fn add_cc_recipient(mut recipients: Recipients, order: &Order) -> Recipients {
  match order.get_meta(META_SHIPPING_EMAIL) {
    Some(address) if is_valid_address(address) => {
      recipients.push(address);
    }
    Some(_) => {
      tracing::debug!(
        "ShippingContact: dropping malformed shipping email on order {}",
        order.id()
      );
    }
    None => {}
  }
  recipients
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_valid_email_is_appended_last() {
    let order = Order::new(1u64).with_meta(META_SHIPPING_EMAIL, "warehouse@example.com");
    let recipients = Recipients::from("buyer@example.com");

    let out = add_cc_recipient(recipients, &order);
    assert_eq!(out.to_string(), "buyer@example.com,warehouse@example.com");
  }

  #[test]
  fn test_invalid_email_leaves_list_unchanged() {
    let order = Order::new(2u64).with_meta(META_SHIPPING_EMAIL, "not-an-email");
    let recipients = Recipients::from("buyer@example.com");

    let out = add_cc_recipient(recipients, &order);
    assert_eq!(out.to_string(), "buyer@example.com");
  }

  #[test]
  fn test_empty_email_leaves_list_unchanged() {
    let order = Order::new(3u64).with_meta(META_SHIPPING_EMAIL, "");
    let recipients = Recipients::from("buyer@example.com");

    let out = add_cc_recipient(recipients, &order);
    assert_eq!(out.to_string(), "buyer@example.com");
  }

  #[test]
  fn test_absent_email_leaves_list_unchanged() {
    let order = Order::new(4u64);
    let out = add_cc_recipient(Recipients::from("buyer@example.com"), &order);
    assert_eq!(out.to_string(), "buyer@example.com");
  }

  #[test]
  fn test_duplicate_address_is_still_appended() {
    let order = Order::new(5u64).with_meta(META_SHIPPING_EMAIL, "buyer@example.com");
    let out = add_cc_recipient(Recipients::from("buyer@example.com"), &order);
    assert_eq!(out.to_string(), "buyer@example.com,buyer@example.com");
    assert_eq!(out.len(), 2);
  }

  #[test]
  fn test_appends_to_empty_list() {
    let order = Order::new(6u64).with_meta(META_SHIPPING_EMAIL, "warehouse@example.com");
    let out = add_cc_recipient(Recipients::new(), &order);
    assert_eq!(out.to_string(), "warehouse@example.com");
  }
}
