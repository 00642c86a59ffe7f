//! 订单模块
//! Order module
//!
//! 宿主订单的元数据视图。持久化由宿主的订单存储负责，这里只定义
//! 扩展回调所依赖的读取契约。
//! Metadata view of a host order. Persistence belongs to the host's order
//! store; this module only defines the read contract the extension callbacks
//! rely on.

use std::fmt;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// 收货邮箱的元数据键
/// Order meta key for the shipping email
pub const META_SHIPPING_EMAIL: &str = "_shipping_email";

/// 收货电话的元数据键
/// Order meta key for the shipping phone
pub const META_SHIPPING_PHONE: &str = "_shipping_phone";

/// 结账字段 ID 对应的订单元数据键（加下划线前缀）
/// Order meta key for a checkout field id (underscore prefix)
pub fn meta_key_for_checkout_field(field_id: &str) -> String {
  format!("_{field_id}")
}

/// 后台字段 ID 对应的订单元数据键（加 `_shipping_` 前缀）
/// Order meta key for an admin panel field id (`_shipping_` prefix)
pub fn meta_key_for_admin_field(field_id: &str) -> String {
  format!("_shipping_{field_id}")
}

/// 订单 ID
/// Order id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(pub u64);

impl OrderId {
  /// 返回内部的数值
  /// Return the inner numeric value
  pub fn as_u64(&self) -> u64 {
    self.0
  }
}

impl From<u64> for OrderId {
  fn from(id: u64) -> Self {
    OrderId(id)
  }
}

impl fmt::Display for OrderId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// 订单
/// Order
///
/// 仅包含扩展点所需的字段：编号、账单邮箱、创建时间和字符串键的元数据。
/// Carries only what the extension points need: id, billing email, creation
/// time, and string-keyed metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
  /// 订单 ID
  /// Order id
  id: OrderId,
  /// 账单邮箱（宿主用作默认收件人）
  /// Billing email (the host's default recipient)
  billing_email: Option<String>,
  /// 创建时间
  /// Creation time
  created_at: DateTime<Utc>,
  /// 订单元数据，保持写入顺序
  /// Order metadata, in insertion order
  meta: IndexMap<String, String>,
}

impl Order {
  /// 创建一个新订单
  /// Create a new order
  pub fn new<I: Into<OrderId>>(id: I) -> Self {
    Self {
      id: id.into(),
      billing_email: None,
      created_at: Utc::now(),
      meta: IndexMap::new(),
    }
  }

  /// 设置账单邮箱
  /// Set the billing email
  pub fn with_billing_email<S: Into<String>>(mut self, email: S) -> Self {
    self.billing_email = Some(email.into());
    self
  }

  /// 设置一条元数据
  /// Set one metadata entry
  pub fn with_meta<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
    self.meta.insert(key.into(), value.into());
    self
  }

  /// 订单 ID
  /// Order id
  pub fn id(&self) -> OrderId {
    self.id
  }

  /// 账单邮箱
  /// Billing email
  pub fn billing_email(&self) -> Option<&str> {
    self.billing_email.as_deref()
  }

  /// 创建时间
  /// Creation time
  pub fn created_at(&self) -> DateTime<Utc> {
    self.created_at
  }

  /// 读取一条元数据。空字符串视为缺失，与宿主的取值约定一致。
  /// Read one metadata entry. Empty stored values count as absent, matching
  /// the host's truthiness contract.
  pub fn get_meta(&self, key: &str) -> Option<&str> {
    self.meta.get(key).map(String::as_str).filter(|v| !v.is_empty())
  }

  /// 写入一条元数据
  /// Write one metadata entry
  pub fn set_meta<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
    self.meta.insert(key.into(), value.into());
  }

  /// 删除一条元数据
  /// Remove one metadata entry
  pub fn remove_meta(&mut self, key: &str) -> Option<String> {
    self.meta.shift_remove(key)
  }

  /// 元数据键，按写入顺序
  /// Metadata keys, in insertion order
  pub fn meta_keys(&self) -> impl Iterator<Item = &str> {
    self.meta.keys().map(String::as_str)
  }
}
