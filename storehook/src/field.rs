//! 表单字段模块
//! Form field module
//!
//! 结账页与后台订单面板的字段定义。校验规则只做声明，由宿主的表单层
//! 负责执行，这里不实现任何校验逻辑。
//! Field definitions for the checkout page and the admin order panel.
//! Validation rules are declared only; enforcement belongs to the host's form
//! layer and is never implemented here.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// 字段输入类型
/// Field input type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
  /// 文本输入
  /// Text input
  #[default]
  Text,
  /// 邮箱输入
  /// Email input
  Email,
  /// 电话输入
  /// Telephone input
  Tel,
  /// 下拉选择
  /// Select box
  Select,
  /// 复选框
  /// Checkbox
  Checkbox,
}

impl FieldType {
  /// 返回宿主模板使用的类型名
  /// Return the type name used by host templates
  pub fn as_str(&self) -> &'static str {
    match self {
      FieldType::Text => "text",
      FieldType::Email => "email",
      FieldType::Tel => "tel",
      FieldType::Select => "select",
      FieldType::Checkbox => "checkbox",
    }
  }
}

/// 声明式校验规则
/// Declared validation rule
///
/// 规则随字段一起注册，由宿主执行。
/// Rules are registered with the field and enforced by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidateRule {
  /// 邮箱格式
  /// Email format
  Email,
  /// 电话格式
  /// Phone format
  Phone,
  /// 邮编格式
  /// Postcode format
  Postcode,
  /// 数字
  /// Numeric
  Number,
}

/// 单个表单字段的定义
/// Definition of a single form field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
  /// 显示标签
  /// Display label
  pub label: String,
  /// 是否必填
  /// Whether the field is required
  #[serde(default)]
  pub required: bool,
  /// 输入类型
  /// Input type
  #[serde(default, rename = "type")]
  pub field_type: FieldType,
  /// 布局用的 CSS 类
  /// Layout css classes
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub class: Vec<String>,
  /// 包裹元素的 CSS 类
  /// Wrapper element css class
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub wrapper_class: Option<String>,
  /// 是否在字段后清除浮动
  /// Whether to clear floats after the field
  #[serde(default)]
  pub clear: bool,
  /// 声明的校验规则
  /// Declared validation rules
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub validate: Vec<ValidateRule>,
  /// 宿主渲染时的排序优先级
  /// Presentation ordering priority used by the host
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub priority: Option<u32>,
}

impl FieldDef {
  /// 创建一个可选的文本字段
  /// Create an optional text field
  pub fn new<S: Into<String>>(label: S) -> Self {
    Self {
      label: label.into(),
      required: false,
      field_type: FieldType::Text,
      class: Vec::new(),
      wrapper_class: None,
      clear: false,
      validate: Vec::new(),
      priority: None,
    }
  }

  /// 设置是否必填
  /// Set whether the field is required
  pub fn with_required(mut self, required: bool) -> Self {
    self.required = required;
    self
  }

  /// 设置输入类型
  /// Set the input type
  pub fn with_type(mut self, field_type: FieldType) -> Self {
    self.field_type = field_type;
    self
  }

  /// 追加一个布局 CSS 类
  /// Append one layout css class
  pub fn with_class<S: Into<String>>(mut self, class: S) -> Self {
    self.class.push(class.into());
    self
  }

  /// 设置包裹元素的 CSS 类
  /// Set the wrapper element css class
  pub fn with_wrapper_class<S: Into<String>>(mut self, wrapper_class: S) -> Self {
    self.wrapper_class = Some(wrapper_class.into());
    self
  }

  /// 设置是否清除浮动
  /// Set whether to clear floats after the field
  pub fn with_clear(mut self, clear: bool) -> Self {
    self.clear = clear;
    self
  }

  /// 追加一条声明式校验规则
  /// Append one declared validation rule
  pub fn validate_as(mut self, rule: ValidateRule) -> Self {
    self.validate.push(rule);
    self
  }

  /// 设置渲染排序优先级
  /// Set the presentation ordering priority
  pub fn with_priority(mut self, priority: u32) -> Self {
    self.priority = Some(priority);
    self
  }
}

/// 按注册顺序排列的字段集合
/// Ordered collection of fields, in registration order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldSet {
  fields: IndexMap<String, FieldDef>,
}

impl FieldSet {
  /// 创建一个空集合
  /// Create an empty set
  pub fn new() -> Self {
    Self::default()
  }

  /// 插入一个字段。重复的 ID 替换定义但保留原位置。
  /// Insert a field. A repeated id replaces the definition but keeps its
  /// original position.
  pub fn insert<S: Into<String>>(&mut self, id: S, field: FieldDef) {
    self.fields.insert(id.into(), field);
  }

  /// 按 ID 查找字段
  /// Look up a field by id
  pub fn get(&self, id: &str) -> Option<&FieldDef> {
    self.fields.get(id)
  }

  /// 是否包含某个 ID
  /// Whether the set contains an id
  pub fn contains(&self, id: &str) -> bool {
    self.fields.contains_key(id)
  }

  /// 字段 ID，按注册顺序
  /// Field ids, in registration order
  pub fn ids(&self) -> impl Iterator<Item = &str> {
    self.fields.keys().map(String::as_str)
  }

  /// 按注册顺序迭代字段
  /// Iterate fields in registration order
  pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldDef)> {
    self.fields.iter().map(|(id, field)| (id.as_str(), field))
  }

  /// 字段数量
  /// Number of fields
  pub fn len(&self) -> usize {
    self.fields.len()
  }

  /// 集合是否为空
  /// Whether the set is empty
  pub fn is_empty(&self) -> bool {
    self.fields.is_empty()
  }
}
