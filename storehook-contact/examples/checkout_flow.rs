//! Checkout Flow Example
//!
//! This example walks one order through the whole extension surface: field
//! registration at checkout, persistence through the host's order store, the
//! recipient CC on the processing email, and both rendered views.
//!
//! ## Run
//!
//! ```bash
//! RUST_LOG=debug cargo run --example checkout_flow
//! ```

use std::collections::HashMap;

use storehook::email::{EmailKind, Recipients};
use storehook::field::{FieldDef, FieldSet};
use storehook::hooks::StorefrontHooks;
use storehook::order::{Order, OrderId};
use storehook::store::{MemoryOrderStore, OrderStore};
use storehook_contact::ShippingContact;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
  // Initialize logging
  tracing_subscriber::registry()
    .with(fmt::layer())
    .with(EnvFilter::from_default_env())
    .init();

  // The host boots and installs the extension
  let mut hooks = StorefrontHooks::new();
  hooks.install(&ShippingContact::new())?;
  println!("✅ Installed shipping_contact ({} callbacks)", hooks.total_callbacks());

  // The host's own checkout fields, completed by the extension
  let mut host_fields = FieldSet::new();
  host_fields.insert("shipping_first_name", FieldDef::new("First name"));
  host_fields.insert("shipping_address_1", FieldDef::new("Street address"));
  let fields = hooks.collect_checkout_fields(host_fields);
  println!("Checkout fields: {:?}", fields.ids().collect::<Vec<_>>());

  // The customer submits the checkout form
  let store = MemoryOrderStore::new();
  let order_id = OrderId(1001);
  store.put(Order::new(order_id.as_u64()).with_billing_email("buyer@example.com"))?;

  let mut posted = HashMap::new();
  posted.insert("shipping_first_name".to_string(), "Kay".to_string());
  posted.insert("shipping_address_1".to_string(), "12 Dock Rd".to_string());
  posted.insert(
    "shipping_email".to_string(),
    "warehouse@example.com".to_string(),
  );
  posted.insert("shipping_phone".to_string(), "555-867-5309".to_string());
  store.apply_checkout(order_id, &fields, &posted)?;

  let order = store
    .get(order_id)?
    .ok_or_else(|| anyhow::anyhow!("order {order_id} disappeared from the store"))?;
  println!("Stored meta keys: {:?}", order.meta_keys().collect::<Vec<_>>());

  // The order moves to processing and the host composes the email
  let base = Recipients::from(order.billing_email().unwrap_or_default());
  let recipients =
    hooks.filter_email_recipients(EmailKind::CustomerProcessingOrder, base, &order);
  println!("Processing email goes to: {recipients}");

  // Both rendered views
  println!("\nOrder details page:\n{}", hooks.render_order_details(&order)?);
  println!(
    "Email (HTML):\n{}",
    hooks.render_email_customer_details(&order, false, false)?
  );
  println!(
    "Email (plain text):\n{}",
    hooks.render_email_customer_details(&order, false, true)?
  );

  Ok(())
}
