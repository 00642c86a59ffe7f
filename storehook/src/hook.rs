//! 钩子链模块
//! Hook chain module
//!
//! 提供带优先级的过滤器链与动作链，宿主在固定的扩展点上分发它们
//! Provides priority-ordered filter chains and action chains, dispatched by
//! the host at its fixed extension points

use std::fmt;
use std::sync::Arc;

use crate::error::Result;

/// 默认钩子优先级
/// Default hook priority
pub const DEFAULT_PRIORITY: u32 = 10;

/// 过滤器回调类型：接收一个值和上下文，返回（可能已变换的）值
/// Filter callback type: receives a value and a context, returns the
/// (possibly transformed) value
pub type FilterFn<T, C> = Arc<dyn Fn(T, &C) -> T + Send + Sync>;

/// 动作回调类型：接收可变上下文，产生输出或副作用
/// Action callback type: receives a mutable context, producing output or a
/// side effect
pub type ActionFn<C> = Arc<dyn Fn(&mut C) -> Result<()> + Send + Sync>;

/// 链中的单个回调条目
/// A single callback entry within a chain
struct ChainEntry<F> {
  priority: u32,
  seq: u64,
  callback: F,
}

impl<F> ChainEntry<F> {
  fn sort_key(&self) -> (u32, u64) {
    (self.priority, self.seq)
  }
}

/// 带优先级的过滤器链
/// Priority-ordered filter chain
///
/// 过滤器按 (priority, 插入顺序) 依次执行，每个过滤器接收上一个的输出。
/// Filters run in (priority, insertion) order, each receiving the previous
/// filter's output.
pub struct FilterChain<T, C> {
  name: String,
  entries: Vec<ChainEntry<FilterFn<T, C>>>,
  next_seq: u64,
}

impl<T, C> FilterChain<T, C> {
  /// 创建一个空的过滤器链
  /// Create an empty filter chain
  pub fn new<S: Into<String>>(name: S) -> Self {
    Self {
      name: name.into(),
      entries: Vec::new(),
      next_seq: 0,
    }
  }

  /// 链的名称（即扩展点名称）
  /// Name of the chain (the extension point name)
  pub fn name(&self) -> &str {
    &self.name
  }

  /// 以指定优先级注册一个过滤器
  /// Register a filter at the given priority
  pub fn add<F>(&mut self, priority: u32, callback: F)
  where
    F: Fn(T, &C) -> T + Send + Sync + 'static,
  {
    self.entries.push(ChainEntry {
      priority,
      seq: self.next_seq,
      callback: Arc::new(callback),
    });
    self.next_seq += 1;
    self.entries.sort_by_key(ChainEntry::sort_key);
  }

  /// 以默认优先级注册一个过滤器
  /// Register a filter at the default priority
  pub fn add_default<F>(&mut self, callback: F)
  where
    F: Fn(T, &C) -> T + Send + Sync + 'static,
  {
    self.add(DEFAULT_PRIORITY, callback);
  }

  /// 将值依次通过所有过滤器
  /// Fold the value through every registered filter
  pub fn apply(&self, value: T, ctx: &C) -> T {
    let mut value = value;
    for entry in &self.entries {
      tracing::debug!(
        "FilterChain {}: applying filter at priority {}",
        self.name,
        entry.priority
      );
      value = (entry.callback)(value, ctx);
    }
    value
  }

  /// 已注册的过滤器数量
  /// Number of registered filters
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// 链是否为空
  /// Whether the chain is empty
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

impl<T, C> fmt::Debug for FilterChain<T, C> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("FilterChain")
      .field("name", &self.name)
      .field("len", &self.entries.len())
      .finish()
  }
}

/// 带优先级的动作链
/// Priority-ordered action chain
///
/// 动作按 (priority, 插入顺序) 依次执行，遇到第一个错误即停止。
/// Actions run in (priority, insertion) order, stopping at the first error.
pub struct ActionChain<C> {
  name: String,
  entries: Vec<ChainEntry<ActionFn<C>>>,
  next_seq: u64,
}

impl<C> ActionChain<C> {
  /// 创建一个空的动作链
  /// Create an empty action chain
  pub fn new<S: Into<String>>(name: S) -> Self {
    Self {
      name: name.into(),
      entries: Vec::new(),
      next_seq: 0,
    }
  }

  /// 链的名称（即扩展点名称）
  /// Name of the chain (the extension point name)
  pub fn name(&self) -> &str {
    &self.name
  }

  /// 以指定优先级注册一个动作
  /// Register an action at the given priority
  pub fn add<F>(&mut self, priority: u32, callback: F)
  where
    F: Fn(&mut C) -> Result<()> + Send + Sync + 'static,
  {
    self.entries.push(ChainEntry {
      priority,
      seq: self.next_seq,
      callback: Arc::new(callback),
    });
    self.next_seq += 1;
    self.entries.sort_by_key(ChainEntry::sort_key);
  }

  /// 以默认优先级注册一个动作
  /// Register an action at the default priority
  pub fn add_default<F>(&mut self, callback: F)
  where
    F: Fn(&mut C) -> Result<()> + Send + Sync + 'static,
  {
    self.add(DEFAULT_PRIORITY, callback);
  }

  /// 依次执行所有动作
  /// Run every registered action in order
  pub fn run(&self, ctx: &mut C) -> Result<()> {
    for entry in &self.entries {
      tracing::debug!(
        "ActionChain {}: running action at priority {}",
        self.name,
        entry.priority
      );
      (entry.callback)(ctx)?;
    }
    Ok(())
  }

  /// 已注册的动作数量
  /// Number of registered actions
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// 链是否为空
  /// Whether the chain is empty
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

impl<C> fmt::Debug for ActionChain<C> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ActionChain")
      .field("name", &self.name)
      .field("len", &self.entries.len())
      .finish()
  }
}
