//! # Storehook
//!
//! Typed extension points for storefront hosts in Rust
//!
//! Storehook 定义了店面宿主暴露给扩展的钩子管线：带优先级的过滤器链和动作链、
//! 结账与后台的字段定义、订单元数据视图、收件人列表以及渲染辅助。
//! Storehook defines the hook pipeline a storefront host exposes to its
//! extensions: priority-ordered filter and action chains, checkout and admin
//! field definitions, the order metadata view, recipient lists and render
//! helpers.
//! 宿主在请求生命周期的固定时刻分发这些链；扩展只在启动时注册回调。
//! The host dispatches the chains at fixed moments of its request lifecycle;
//! extensions only register callbacks at startup.
//!
//! ## 特性
//! ## Features
//!
//! - 带优先级的过滤器链与动作链，分发顺序确定
//!   - Priority-ordered filter and action chains with deterministic dispatch
//! - 类型化的店面扩展点，而非字符串键的回调表
//!   - Typed storefront extension points instead of string-keyed callback tables
//! - 结账页与后台订单面板字段的声明式定义
//!   - Declarative field definitions for the checkout page and the admin order panel
//! - 收件人列表保留宿主的逗号分隔线格式，并提供地址语法校验
//!   - Recipient lists preserve the host's comma-delimited wire format, with syntactic address validation
//! - 订单元数据视图与宿主存储契约，含测试用内存实现
//!   - Order metadata view and host store contract, with an in-memory implementation for tests
//!
//! ## 快速开始
//! ## Quick Start
//!
//! ```rust
//! use storehook::error::Result;
//! use storehook::field::{FieldDef, FieldSet};
//! use storehook::hooks::{Extension, StorefrontHooks};
//!
//! struct GiftNote;
//!
//! impl Extension for GiftNote {
//!   fn name(&self) -> &str {
//!     "gift_note"
//!   }
//!
//!   fn register(&self, hooks: &mut StorefrontHooks) -> Result<()> {
//!     hooks.checkout_shipping_fields.add_default(|mut fields, _| {
//!       fields.insert("shipping_gift_note", FieldDef::new("Gift Note"));
//!       fields
//!     });
//!     Ok(())
//!   }
//! }
//!
//! fn main() -> Result<()> {
//!   // 创建扩展点集合并安装扩展
//!   // Create the extension points and install the extension
//!   let mut hooks = StorefrontHooks::new();
//!   hooks.install(&GiftNote)?;
//!
//!   // 宿主分发：补全结账字段
//!   // Host dispatch: complete the checkout fields
//!   let fields = hooks.collect_checkout_fields(FieldSet::new());
//!   assert!(fields.contains("shipping_gift_note"));
//!   Ok(())
//! }
//! ```

pub mod email;
pub mod error;
pub mod field;
pub mod hook;
pub mod hooks;
pub mod order;
pub mod render;
pub mod store;
