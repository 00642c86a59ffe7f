//! Order details and email rendering callbacks
//!
//! Two actions: one renders the stored shipping contact under the customer
//! details of the order details page, the other renders it into order emails
//! in either the HTML or the plain text variant. Absent fields produce no
//! output at all.

use storehook::error::Result;
use storehook::hooks::{EmailDetailsContext, OrderDetailsContext};
use storehook::order::{META_SHIPPING_EMAIL, META_SHIPPING_PHONE};
use storehook::render::{definition_item, labeled_line, labeled_paragraph};

use crate::config::ContactConfig;

/// Render the shipping contact as definition list items on the order details
/// page, one `<dt>/<dd>` pair per present field.
pub fn order_details(config: &ContactConfig, ctx: &mut OrderDetailsContext) -> Result<()> {
  if let Some(email) = ctx.order.get_meta(META_SHIPPING_EMAIL) {
    definition_item(&mut ctx.out, &config.email_label, email)?;
  }
  if let Some(phone) = ctx.order.get_meta(META_SHIPPING_PHONE) {
    definition_item(&mut ctx.out, &config.phone_label, phone)?;
  }
  Ok(())
}

/// Render the shipping contact into the customer details section of an order
/// email. Plain text emails get `label: value` lines, HTML emails get
/// bold-labeled paragraphs. Each present field keeps its own label.
pub fn email_customer_details(config: &ContactConfig, ctx: &mut EmailDetailsContext) -> Result<()> {
  let email = ctx.order.get_meta(META_SHIPPING_EMAIL);
  let phone = ctx.order.get_meta(META_SHIPPING_PHONE);

  if ctx.plain_text {
    if let Some(email) = email {
      labeled_line(&mut ctx.out, &config.email_label, email)?;
    }
    if let Some(phone) = phone {
      labeled_line(&mut ctx.out, &config.phone_label, phone)?;
    }
  } else {
    if let Some(email) = email {
      labeled_paragraph(&mut ctx.out, &config.email_label, email)?;
    }
    if let Some(phone) = phone {
      labeled_paragraph(&mut ctx.out, &config.phone_label, phone)?;
    }
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use storehook::order::Order;

  fn full_order() -> Order {
    Order::new(1001u64)
      .with_meta(META_SHIPPING_EMAIL, "warehouse@example.com")
      .with_meta(META_SHIPPING_PHONE, "555-867-5309")
  }

  #[test]
  fn test_order_details_renders_both_fields() {
    let config = ContactConfig::default();
    let mut ctx = OrderDetailsContext::new(full_order());
    order_details(&config, &mut ctx).unwrap();

    assert_eq!(
      ctx.out,
      "<dt>Shipping Email:</dt><dd>warehouse@example.com</dd>\
       <dt>Shipping Phone:</dt><dd>555-867-5309</dd>"
    );
  }

  #[test]
  fn test_order_details_omits_absent_phone() {
    let config = ContactConfig::default();
    let order = Order::new(1u64).with_meta(META_SHIPPING_EMAIL, "warehouse@example.com");
    let mut ctx = OrderDetailsContext::new(order);
    order_details(&config, &mut ctx).unwrap();

    assert!(ctx.out.contains("Shipping Email"));
    assert!(!ctx.out.contains("Shipping Phone"));
  }

  #[test]
  fn test_order_details_empty_order_renders_nothing() {
    let config = ContactConfig::default();
    let mut ctx = OrderDetailsContext::new(Order::new(2u64));
    order_details(&config, &mut ctx).unwrap();
    assert!(ctx.out.is_empty());
  }

  #[test]
  fn test_email_html_variant() {
    let config = ContactConfig::default();
    let mut ctx = EmailDetailsContext::new(full_order(), false, false);
    email_customer_details(&config, &mut ctx).unwrap();

    assert_eq!(
      ctx.out,
      "<p><strong>Shipping Email:</strong> warehouse@example.com</p>\
       <p><strong>Shipping Phone:</strong> 555-867-5309</p>"
    );
  }

  #[test]
  fn test_email_plain_variant_labels_each_field() {
    let config = ContactConfig::default();
    let mut ctx = EmailDetailsContext::new(full_order(), false, true);
    email_customer_details(&config, &mut ctx).unwrap();

    assert_eq!(
      ctx.out,
      "Shipping Email: warehouse@example.com\nShipping Phone: 555-867-5309\n"
    );
  }

  #[test]
  fn test_email_plain_variant_omits_absent_email() {
    let config = ContactConfig::default();
    let order = Order::new(3u64).with_meta(META_SHIPPING_PHONE, "555-867-5309");
    let mut ctx = EmailDetailsContext::new(order, false, true);
    email_customer_details(&config, &mut ctx).unwrap();

    assert_eq!(ctx.out, "Shipping Phone: 555-867-5309\n");
  }

  #[test]
  fn test_email_html_escapes_values() {
    let config = ContactConfig::default();
    let order = Order::new(4u64).with_meta(META_SHIPPING_PHONE, "<script>alert(1)</script>");
    let mut ctx = EmailDetailsContext::new(order, false, false);
    email_customer_details(&config, &mut ctx).unwrap();

    assert!(!ctx.out.contains("<script>"));
    assert!(ctx.out.contains("&lt;script&gt;"));
  }
}
