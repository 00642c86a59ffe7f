//! 扩展点模块
//! Extension point module
//!
//! 店面宿主暴露的固定扩展点集合。扩展在启动时把回调注册到这些链上，
//! 宿主在请求生命周期的固定时刻分发它们。
//! The fixed set of extension points a storefront host exposes. Extensions
//! register callbacks onto these chains at startup; the host dispatches them
//! at fixed moments of its request lifecycle.

use std::collections::HashMap;

use crate::email::{EmailKind, Recipients};
use crate::error::Result;
use crate::field::FieldSet;
use crate::hook::{ActionChain, FilterChain};
use crate::order::Order;

/// 结账字段过滤器的上下文（目前为空，作为扩展缝保留）
/// Context for checkout field filters (empty today, kept as an extension
/// seam)
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckoutContext;

/// 后台字段过滤器的上下文
/// Context for admin panel field filters
#[derive(Debug, Clone, Copy, Default)]
pub struct AdminContext;

/// 订单详情页动作的上下文
/// Context for order details page actions
#[derive(Debug)]
pub struct OrderDetailsContext {
  /// 正在展示的订单
  /// The order being displayed
  pub order: Order,
  /// 动作写入的标记缓冲
  /// Markup buffer the actions write into
  pub out: String,
}

impl OrderDetailsContext {
  /// 为一个订单创建空白上下文
  /// Create a blank context for an order
  pub fn new(order: Order) -> Self {
    Self {
      order,
      out: String::new(),
    }
  }
}

/// 邮件客户信息区块动作的上下文
/// Context for email customer details actions
#[derive(Debug)]
pub struct EmailDetailsContext {
  /// 邮件涉及的订单
  /// The order the email concerns
  pub order: Order,
  /// 该邮件是否发给管理员
  /// Whether the email goes to the admin
  pub sent_to_admin: bool,
  /// 是否渲染纯文本变体
  /// Whether the plain text variant is being rendered
  pub plain_text: bool,
  /// 动作写入的输出缓冲
  /// Output buffer the actions write into
  pub out: String,
}

impl EmailDetailsContext {
  /// 为一封订单邮件创建空白上下文
  /// Create a blank context for an order email
  pub fn new(order: Order, sent_to_admin: bool, plain_text: bool) -> Self {
    Self {
      order,
      sent_to_admin,
      plain_text,
      out: String::new(),
    }
  }
}

/// 店面扩展
/// A storefront extension
///
/// 扩展在 `register` 中把自己的回调挂到宿主的扩展点上，通常在宿主
/// 启动时调用一次。
/// An extension attaches its callbacks to the host's extension points inside
/// `register`, normally called once at host startup.
pub trait Extension {
  /// 扩展名称，用于日志
  /// Extension name, used in logs
  fn name(&self) -> &str;

  /// 把回调注册到扩展点上
  /// Register callbacks onto the extension points
  fn register(&self, hooks: &mut StorefrontHooks) -> Result<()>;
}

/// 店面宿主的扩展点集合
/// The storefront host's set of extension points
#[derive(Debug)]
pub struct StorefrontHooks {
  /// 结账页收货字段过滤器
  /// Checkout shipping field filters
  pub checkout_shipping_fields: FilterChain<FieldSet, CheckoutContext>,
  /// 后台订单面板收货字段过滤器
  /// Admin order panel shipping field filters
  pub admin_shipping_fields: FilterChain<FieldSet, AdminContext>,
  /// 按邮件类型划分的收件人过滤器
  /// Recipient filters, one chain per email kind
  email_recipients: HashMap<EmailKind, FilterChain<Recipients, Order>>,
  /// 订单详情页客户信息之后的动作
  /// Actions after the customer details on the order details page
  pub order_details: ActionChain<OrderDetailsContext>,
  /// 订单邮件客户信息区块的动作
  /// Actions for the customer details section of order emails
  pub email_customer_details: ActionChain<EmailDetailsContext>,
}

impl StorefrontHooks {
  /// 创建一个全部为空的扩展点集合
  /// Create the extension point set with every chain empty
  pub fn new() -> Self {
    Self {
      checkout_shipping_fields: FilterChain::new("shipping_fields"),
      admin_shipping_fields: FilterChain::new("admin_shipping_fields"),
      email_recipients: HashMap::new(),
      order_details: ActionChain::new("order_details_after_customer_details"),
      email_customer_details: ActionChain::new("email_customer_details"),
    }
  }

  /// 某个邮件类型的收件人过滤器链（尚未注册时为 `None`）
  /// The recipient filter chain for an email kind (`None` when nothing is
  /// registered yet)
  pub fn email_recipients(&self, kind: EmailKind) -> Option<&FilterChain<Recipients, Order>> {
    self.email_recipients.get(&kind)
  }

  /// 某个邮件类型的收件人过滤器链，不存在时创建
  /// The recipient filter chain for an email kind, created on first use
  pub fn email_recipients_mut(&mut self, kind: EmailKind) -> &mut FilterChain<Recipients, Order> {
    self
      .email_recipients
      .entry(kind)
      .or_insert_with(|| FilterChain::new(format!("email_recipient_{kind}")))
  }

  /// 安装一个扩展
  /// Install an extension
  pub fn install(&mut self, extension: &dyn Extension) -> Result<()> {
    tracing::info!("StorefrontHooks: installing extension {}", extension.name());
    extension.register(self)
  }

  /// 所有链上已注册的回调总数
  /// Total number of callbacks registered across all chains
  pub fn total_callbacks(&self) -> usize {
    self.checkout_shipping_fields.len()
      + self.admin_shipping_fields.len()
      + self
        .email_recipients
        .values()
        .map(FilterChain::len)
        .sum::<usize>()
      + self.order_details.len()
      + self.email_customer_details.len()
  }

  /// 宿主分发：让扩展补全结账页的收货字段
  /// Host dispatch: let extensions complete the checkout shipping fields
  pub fn collect_checkout_fields(&self, host_fields: FieldSet) -> FieldSet {
    self
      .checkout_shipping_fields
      .apply(host_fields, &CheckoutContext)
  }

  /// 宿主分发：让扩展补全后台订单面板的收货字段
  /// Host dispatch: let extensions complete the admin panel shipping fields
  pub fn collect_admin_fields(&self, host_fields: FieldSet) -> FieldSet {
    self.admin_shipping_fields.apply(host_fields, &AdminContext)
  }

  /// 宿主分发：对一封待发邮件的收件人列表应用过滤器。该类型没有
  /// 注册过滤器时原样返回。
  /// Host dispatch: apply the recipient filters of one outgoing email. The
  /// base list is returned unchanged when the kind has no filters.
  pub fn filter_email_recipients(
    &self,
    kind: EmailKind,
    base: Recipients,
    order: &Order,
  ) -> Recipients {
    match self.email_recipients.get(&kind) {
      Some(chain) => chain.apply(base, order),
      None => base,
    }
  }

  /// 宿主分发：渲染订单详情页客户信息之后的区块
  /// Host dispatch: render the section after the customer details on the
  /// order details page
  pub fn render_order_details(&self, order: &Order) -> Result<String> {
    let mut ctx = OrderDetailsContext::new(order.clone());
    self.order_details.run(&mut ctx)?;
    Ok(ctx.out)
  }

  /// 宿主分发：渲染订单邮件的客户信息区块
  /// Host dispatch: render the customer details section of an order email
  pub fn render_email_customer_details(
    &self,
    order: &Order,
    sent_to_admin: bool,
    plain_text: bool,
  ) -> Result<String> {
    let mut ctx = EmailDetailsContext::new(order.clone(), sent_to_admin, plain_text);
    self.email_customer_details.run(&mut ctx)?;
    Ok(ctx.out)
  }
}

impl Default for StorefrontHooks {
  fn default() -> Self {
    Self::new()
  }
}
