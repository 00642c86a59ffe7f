//! 错误处理模块
//! Error handling module
//!
//! 定义了 Storehook 库中使用的各种错误类型
//! Defines various error types used in the Storehook library

use thiserror::Error;

/// Storehook 库的结果类型
/// Result type for the Storehook library
pub type Result<T> = std::result::Result<T, Error>;

/// Storehook 错误类型
/// Storehook error type
#[derive(Error, Debug)]
pub enum Error {
  /// 配置错误
  /// Configuration error
  #[error("Configuration error: {message}")]
  Config { message: String },

  /// 钩子注册或分发错误
  /// Hook registration or dispatch error
  #[error("Hook error: {message}")]
  Hook { message: String },

  /// 订单存储错误
  /// Order store error
  #[error("Store error: {message}")]
  Store { message: String },

  /// 订单未找到错误
  /// Order not found error
  #[error("Order not found: {id}")]
  OrderNotFound { id: u64 },

  /// 无效的邮件类型
  /// Invalid email kind
  #[error("Invalid email kind: {kind}")]
  InvalidEmailKind { kind: String },

  /// 渲染写入错误
  /// Render write error
  #[error("Render error: {0}")]
  Render(#[from] std::fmt::Error),
}

impl Error {
  /// 创建配置错误
  /// Create a configuration error
  pub fn config<S: Into<String>>(message: S) -> Self {
    Self::Config {
      message: message.into(),
    }
  }

  /// 创建钩子错误
  /// Create a hook error
  pub fn hook<S: Into<String>>(message: S) -> Self {
    Self::Hook {
      message: message.into(),
    }
  }

  /// 创建订单存储错误
  /// Create an order store error
  pub fn store<S: Into<String>>(message: S) -> Self {
    Self::Store {
      message: message.into(),
    }
  }

  /// 创建订单未找到错误
  /// Create an order not found error
  pub fn order_not_found(id: u64) -> Self {
    Self::OrderNotFound { id }
  }

  /// 检查是否为订单未找到错误
  /// Check if the error is an order-not-found error
  pub fn is_not_found(&self) -> bool {
    matches!(self, Error::OrderNotFound { .. })
  }
}
