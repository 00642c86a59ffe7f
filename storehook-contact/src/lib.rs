//! # Storehook Contact
//!
//! A shipping contact extension for storefront hosts built on `storehook`.
//!
//! ## Overview
//!
//! `storehook-contact` adds a shipping email and a shipping phone field to
//! the checkout shipping section, surfaces the stored values in the admin
//! order panel, the customer order details page and order emails, and CC's
//! the shipping email on selected transactional emails:
//!
//! ```text
//!                      ┌──────────────────────────────┐
//!  checkout fields ───▶│                              │──▶ shipping_email,
//!  admin fields    ───▶│                              │    shipping_phone
//!                      │       ShippingContact        │
//!  email recipients ──▶│  (reads _shipping_email /    │──▶ CC on processing,
//!                      │   _shipping_phone order meta)│    completed, note
//!  order details   ───▶│                              │──▶ <dt>/<dd> items
//!  email details   ───▶│                              │──▶ HTML or plain text
//!                      └──────────────────────────────┘
//! ```
//!
//! The extension holds no state of its own. Values are persisted by the
//! host's order store; every callback degrades silently when its metadata is
//! absent.
//!
//! ## Usage
//!
//! ```rust
//! use storehook::email::{EmailKind, Recipients};
//! use storehook::field::FieldSet;
//! use storehook::hooks::StorefrontHooks;
//! use storehook::order::{Order, META_SHIPPING_EMAIL};
//! use storehook_contact::ShippingContact;
//!
//! fn main() -> storehook::error::Result<()> {
//!   let mut hooks = StorefrontHooks::new();
//!   hooks.install(&ShippingContact::new())?;
//!
//!   // Checkout now carries the two extra fields
//!   let fields = hooks.collect_checkout_fields(FieldSet::new());
//!   assert!(fields.contains("shipping_email"));
//!   assert!(fields.contains("shipping_phone"));
//!
//!   // The processing email CC's the stored shipping email
//!   let order = Order::new(1001u64).with_meta(META_SHIPPING_EMAIL, "warehouse@example.com");
//!   let recipients = hooks.filter_email_recipients(
//!     EmailKind::CustomerProcessingOrder,
//!     Recipients::from("buyer@example.com"),
//!     &order,
//!   );
//!   assert_eq!(recipients.to_string(), "buyer@example.com,warehouse@example.com");
//!   Ok(())
//! }
//! ```

pub mod config;
pub mod details;
pub mod extension;
pub mod fields;
pub mod recipients;

pub use config::ContactConfig;
pub use extension::{ShippingContact, EMAIL_DETAILS_PRIORITY, RECIPIENT_PRIORITY};
