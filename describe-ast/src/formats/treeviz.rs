//! Treeviz formatter for programs
//!
//! One line per node, so a rewritten program can be scanned (and diffed) quickly. Nesting is
//! drawn with box connectors, 2 columns per level:
//!
//! <prefix><connector> <icon> <label> (label truncated to 60 characters)
//!
//! Example:
//!
//! ⧉ Program (2 statements)
//! ├─ ⇲ { LLMDescribe } from "@/widgets/llm-describe"
//! │ └─ ⇢ LLMDescribe
//! │   ├─ 𝑥 LLMDescribe
//! │   └─ 𝑥 LLMDescribe
//! └─ ∙ ExpressionStatement
//!   └─ ◇ <LLMDescribe>
//!     ├─ = content
//!     │ ├─ ⟨⟩ content
//!     │ └─ " "A card"
//!     └─ ◇ <div>
//!
//! Icons
//!     ImportDeclaration: ⇲
//!     ImportSpecifier: ⇢
//!     JSXElement: ◇
//!     JSXAttribute: =
//!     JSXExpressionContainer: { }
//!     JSXIdentifier: ⟨⟩
//!     StringLiteral: "
//!     Identifier: 𝑥
//!     anything else: ∙

use crate::ast::elements::{Node, SourceFile};

const LABEL_WIDTH: usize = 60;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push('…');
        truncated
    } else {
        s.to_string()
    }
}

fn icon(node: &Node) -> &'static str {
    match node {
        Node::ImportDeclaration(_) => "⇲",
        Node::ImportSpecifier(_) => "⇢",
        Node::JsxElement(_) => "◇",
        Node::JsxAttribute(_) => "=",
        Node::JsxExpressionContainer(_) => "{ }",
        Node::JsxIdentifier(_) => "⟨⟩",
        Node::StringLiteral(_) => "\"",
        Node::Identifier(_) => "𝑥",
        Node::Opaque(_) => "∙",
    }
}

pub fn to_treeviz_str(file: &SourceFile) -> String {
    let body = &file.program.body;
    let mut result = format!("⧉ Program ({} statements)\n", body.len());
    append_children(&mut result, body.iter().collect(), "");
    result
}

fn append_node(result: &mut String, node: &Node, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };
    let label = truncate(&node.display_label(), LABEL_WIDTH);
    result.push_str(&format!("{}{} {} {}\n", prefix, connector, icon(node), label));

    let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    append_children(result, node.children(), &new_prefix);
}

fn append_children(result: &mut String, children: Vec<&Node>, prefix: &str) {
    let count = children.len();
    for (i, child) in children.into_iter().enumerate() {
        append_node(result, child, prefix, i == count - 1);
    }
}
