//! 渲染模块
//! Render module
//!
//! 订单详情与邮件正文使用的小型标记辅助函数。HTML 输出总是转义值，
//! 纯文本输出原样透传。
//! Small markup helpers for order details and email bodies. HTML output
//! always escapes values, plain text passes them through.

use std::borrow::Cow;
use std::fmt::Write;

use crate::error::Result;

/// 转义 HTML 特殊字符，无需转义时借用输入
/// Escape HTML special characters, borrowing the input when nothing needs
/// escaping
pub fn escape_html(input: &str) -> Cow<'_, str> {
  fn replacement(c: char) -> Option<&'static str> {
    match c {
      '&' => Some("&amp;"),
      '<' => Some("&lt;"),
      '>' => Some("&gt;"),
      '"' => Some("&quot;"),
      '\'' => Some("&#039;"),
      _ => None,
    }
  }

  if !input.chars().any(|c| replacement(c).is_some()) {
    return Cow::Borrowed(input);
  }

  let mut escaped = String::with_capacity(input.len() + 8);
  for c in input.chars() {
    match replacement(c) {
      Some(entity) => escaped.push_str(entity),
      None => escaped.push(c),
    }
  }
  Cow::Owned(escaped)
}

/// 写入一个定义列表项：`<dt>标签:</dt><dd>值</dd>`
/// Write one definition list item: `<dt>label:</dt><dd>value</dd>`
pub fn definition_item(out: &mut String, label: &str, value: &str) -> Result<()> {
  write!(
    out,
    "<dt>{}:</dt><dd>{}</dd>",
    escape_html(label),
    escape_html(value)
  )?;
  Ok(())
}

/// 写入一个加粗标签段落：`<p><strong>标签:</strong> 值</p>`
/// Write one bold-labeled paragraph: `<p><strong>label:</strong> value</p>`
pub fn labeled_paragraph(out: &mut String, label: &str, value: &str) -> Result<()> {
  write!(
    out,
    "<p><strong>{}:</strong> {}</p>",
    escape_html(label),
    escape_html(value)
  )?;
  Ok(())
}

/// 写入一行纯文本：`标签: 值` 加换行
/// Write one plain text line: `label: value` plus newline
pub fn labeled_line(out: &mut String, label: &str, value: &str) -> Result<()> {
  writeln!(out, "{label}: {value}")?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_escape_html_borrows_clean_input() {
    let input = "warehouse@example.com";
    assert!(matches!(escape_html(input), Cow::Borrowed(_)));
  }

  #[test]
  fn test_escape_html_entities() {
    assert_eq!(
      escape_html(r#"<b>"a" & 'b'</b>"#),
      "&lt;b&gt;&quot;a&quot; &amp; &#039;b&#039;&lt;/b&gt;"
    );
  }

  #[test]
  fn test_definition_item() {
    let mut out = String::new();
    definition_item(&mut out, "Shipping Email", "warehouse@example.com").unwrap();
    assert_eq!(
      out,
      "<dt>Shipping Email:</dt><dd>warehouse@example.com</dd>"
    );
  }

  #[test]
  fn test_labeled_paragraph_escapes_value() {
    let mut out = String::new();
    labeled_paragraph(&mut out, "Shipping Phone", "<555> 867-5309").unwrap();
    assert_eq!(
      out,
      "<p><strong>Shipping Phone:</strong> &lt;555&gt; 867-5309</p>"
    );
  }

  #[test]
  fn test_labeled_line_is_verbatim() {
    let mut out = String::new();
    labeled_line(&mut out, "Shipping Phone", "<555> 867-5309").unwrap();
    assert_eq!(out, "Shipping Phone: <555> 867-5309\n");
  }
}
