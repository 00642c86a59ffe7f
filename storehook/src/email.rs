//! 邮件模块
//! Email module
//!
//! 宿主的事务性邮件类型、收件人列表的线格式，以及收件地址的语法校验。
//! The host's transactional email kinds, the wire format of recipient lists,
//! and syntactic validation of recipient addresses.

use std::fmt;
use std::str::FromStr;

use lettre::Address;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// 宿主的事务性邮件类型
/// The host's transactional email kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailKind {
  /// 新订单（发给管理员）
  /// New order (sent to the admin)
  NewOrder,
  /// 订单取消
  /// Cancelled order
  CancelledOrder,
  /// 订单失败
  /// Failed order
  FailedOrder,
  /// 订单挂起
  /// Order on hold
  CustomerOnHoldOrder,
  /// 订单处理中
  /// Order processing
  CustomerProcessingOrder,
  /// 订单已完成
  /// Order completed
  CustomerCompletedOrder,
  /// 订单已退款
  /// Order refunded
  CustomerRefundedOrder,
  /// 客户账单
  /// Customer invoice
  CustomerInvoice,
  /// 客户备注
  /// Customer note
  CustomerNote,
}

impl EmailKind {
  /// 宿主使用的邮件类型 ID
  /// The email id string used by the host
  pub fn as_str(&self) -> &'static str {
    match self {
      EmailKind::NewOrder => "new_order",
      EmailKind::CancelledOrder => "cancelled_order",
      EmailKind::FailedOrder => "failed_order",
      EmailKind::CustomerOnHoldOrder => "customer_on_hold_order",
      EmailKind::CustomerProcessingOrder => "customer_processing_order",
      EmailKind::CustomerCompletedOrder => "customer_completed_order",
      EmailKind::CustomerRefundedOrder => "customer_refunded_order",
      EmailKind::CustomerInvoice => "customer_invoice",
      EmailKind::CustomerNote => "customer_note",
    }
  }

  /// 所有邮件类型
  /// All email kinds
  pub fn all() -> [EmailKind; 9] {
    [
      EmailKind::NewOrder,
      EmailKind::CancelledOrder,
      EmailKind::FailedOrder,
      EmailKind::CustomerOnHoldOrder,
      EmailKind::CustomerProcessingOrder,
      EmailKind::CustomerCompletedOrder,
      EmailKind::CustomerRefundedOrder,
      EmailKind::CustomerInvoice,
      EmailKind::CustomerNote,
    ]
  }
}

impl fmt::Display for EmailKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for EmailKind {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    EmailKind::all()
      .into_iter()
      .find(|kind| kind.as_str() == s)
      .ok_or_else(|| Error::InvalidEmailKind {
        kind: s.to_string(),
      })
  }
}

/// 收件人列表
/// Recipient list
///
/// 宿主在收件人过滤器之间传递逗号分隔的地址串，这里保留该线格式：
/// 解析时跳过空段，拼接时不重排已有条目。
/// The host passes a comma-delimited address string through its recipient
/// filters; this type preserves that wire format, skipping empty segments on
/// parse and never reordering existing entries on join.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recipients {
  entries: Vec<String>,
}

impl Recipients {
  /// 创建一个空列表
  /// Create an empty list
  pub fn new() -> Self {
    Self::default()
  }

  /// 在已有条目之后追加一个地址
  /// Append an address after the existing entries
  pub fn push<S: Into<String>>(&mut self, address: S) {
    self.entries.push(address.into());
  }

  /// 是否包含某个地址
  /// Whether the list contains an address
  pub fn contains(&self, address: &str) -> bool {
    self.entries.iter().any(|entry| entry == address)
  }

  /// 按顺序迭代地址
  /// Iterate addresses in order
  pub fn iter(&self) -> impl Iterator<Item = &str> {
    self.entries.iter().map(String::as_str)
  }

  /// 地址数量
  /// Number of addresses
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// 列表是否为空
  /// Whether the list is empty
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

impl From<&str> for Recipients {
  fn from(list: &str) -> Self {
    let entries = list
      .split(',')
      .map(str::trim)
      .filter(|segment| !segment.is_empty())
      .map(str::to_string)
      .collect();
    Self { entries }
  }
}

impl From<String> for Recipients {
  fn from(list: String) -> Self {
    Recipients::from(list.as_str())
  }
}

impl fmt::Display for Recipients {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.entries.join(","))
  }
}

/// 检查一个地址在语法上是否合法。只做解析，不做任何解析以外的检查。
/// Check whether an address is syntactically well formed. Parsing only, no
/// resolution of any kind.
pub fn is_valid_address(address: &str) -> bool {
  address.parse::<Address>().is_ok()
}
