//! 订单存储模块
//! Order store module
//!
//! 宿主订单存储的契约，以及测试和演示使用的内存实现。扩展本身从不
//! 直接持久化任何东西。
//! The host order store contract, plus the in-memory implementation used by
//! tests and demos. The extension itself never persists anything directly.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{Error, Result};
use crate::field::FieldSet;
use crate::order::{meta_key_for_checkout_field, Order, OrderId};

/// 宿主订单存储的契约
/// The host order store contract
pub trait OrderStore: Send + Sync {
  /// 按 ID 读取订单。未知 ID 返回 `Ok(None)`。
  /// Read an order by id. Unknown ids return `Ok(None)`.
  fn get(&self, id: OrderId) -> Result<Option<Order>>;

  /// 写入（或覆盖）一个订单
  /// Write (or overwrite) an order
  fn put(&self, order: Order) -> Result<()>;

  /// 更新订单的一条元数据。未知 ID 返回订单未找到错误。
  /// Update one metadata entry of an order. Unknown ids return an
  /// order-not-found error.
  fn update_meta(&self, id: OrderId, key: &str, value: &str) -> Result<()>;

  /// 宿主的结账持久化步骤：结账字段集中每个有非空提交值的字段，
  /// 都以下划线前缀的元数据键存入订单。声明的校验规则在此处不执行。
  /// The host's checkout persistence step: every field in the checkout set
  /// with a non-empty posted value is stored on the order under its
  /// underscore-prefixed meta key. Declared validation rules are not
  /// enforced here.
  fn apply_checkout(
    &self,
    id: OrderId,
    fields: &FieldSet,
    posted: &HashMap<String, String>,
  ) -> Result<()> {
    let mut order = self
      .get(id)?
      .ok_or_else(|| Error::order_not_found(id.as_u64()))?;
    for (field_id, _) in fields.iter() {
      if let Some(value) = posted.get(field_id) {
        let value = value.trim();
        if !value.is_empty() {
          order.set_meta(meta_key_for_checkout_field(field_id), value);
        }
      }
    }
    self.put(order)
  }
}

/// 内存订单存储
/// In-memory order store
#[derive(Default)]
pub struct MemoryOrderStore {
  orders: RwLock<HashMap<OrderId, Order>>,
}

impl MemoryOrderStore {
  /// 创建一个空存储
  /// Create an empty store
  pub fn new() -> Self {
    Self::default()
  }

  /// 存储中的订单数量
  /// Number of orders in the store
  pub fn len(&self) -> Result<usize> {
    Ok(self.read()?.len())
  }

  /// 存储是否为空
  /// Whether the store is empty
  pub fn is_empty(&self) -> Result<bool> {
    Ok(self.read()?.is_empty())
  }

  fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, HashMap<OrderId, Order>>> {
    self
      .orders
      .read()
      .map_err(|_| Error::store("order store lock poisoned"))
  }

  fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, HashMap<OrderId, Order>>> {
    self
      .orders
      .write()
      .map_err(|_| Error::store("order store lock poisoned"))
  }
}

impl OrderStore for MemoryOrderStore {
  fn get(&self, id: OrderId) -> Result<Option<Order>> {
    Ok(self.read()?.get(&id).cloned())
  }

  fn put(&self, order: Order) -> Result<()> {
    self.write()?.insert(order.id(), order);
    Ok(())
  }

  fn update_meta(&self, id: OrderId, key: &str, value: &str) -> Result<()> {
    let mut orders = self.write()?;
    let order = orders
      .get_mut(&id)
      .ok_or_else(|| Error::order_not_found(id.as_u64()))?;
    order.set_meta(key, value);
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::field::FieldDef;
  use crate::order::META_SHIPPING_EMAIL;

  fn checkout_fields() -> FieldSet {
    let mut fields = FieldSet::new();
    fields.insert("shipping_email", FieldDef::new("Shipping Email"));
    fields.insert("shipping_phone", FieldDef::new("Shipping Phone"));
    fields
  }

  #[test]
  fn test_put_then_get() {
    let store = MemoryOrderStore::new();
    store.put(Order::new(1u64)).unwrap();
    let order = store.get(OrderId(1)).unwrap();
    assert!(order.is_some());
    assert!(store.get(OrderId(2)).unwrap().is_none());
  }

  #[test]
  fn test_update_meta() {
    let store = MemoryOrderStore::new();
    store.put(Order::new(1u64)).unwrap();
    store
      .update_meta(OrderId(1), META_SHIPPING_EMAIL, "warehouse@example.com")
      .unwrap();
    let order = store.get(OrderId(1)).unwrap().unwrap();
    assert_eq!(
      order.get_meta(META_SHIPPING_EMAIL),
      Some("warehouse@example.com")
    );

    let err = store.update_meta(OrderId(9), "_x", "y").unwrap_err();
    assert!(err.is_not_found());
  }

  #[test]
  fn test_apply_checkout_persists_posted_values() {
    let store = MemoryOrderStore::new();
    store.put(Order::new(7u64)).unwrap();

    let mut posted = HashMap::new();
    posted.insert(
      "shipping_email".to_string(),
      "warehouse@example.com".to_string(),
    );
    posted.insert("shipping_phone".to_string(), "  ".to_string());
    posted.insert("unrelated".to_string(), "ignored".to_string());

    store
      .apply_checkout(OrderId(7), &checkout_fields(), &posted)
      .unwrap();

    let order = store.get(OrderId(7)).unwrap().unwrap();
    assert_eq!(
      order.get_meta("_shipping_email"),
      Some("warehouse@example.com")
    );
    assert_eq!(order.get_meta("_shipping_phone"), None);
    assert_eq!(order.get_meta("_unrelated"), None);
  }

  #[test]
  fn test_apply_checkout_unknown_order() {
    let store = MemoryOrderStore::new();
    let posted = HashMap::new();
    let err = store
      .apply_checkout(OrderId(404), &checkout_fields(), &posted)
      .unwrap_err();
    assert!(err.is_not_found());
  }
}
