//! The describe rewrite pass
//!
//! Program enter
//!
//!     Scan the top-level statements once. The wrapper counts as already imported when an
//!     import from the configured source has a named specifier importing the wrapper symbol.
//!     The flag is not re-derived later in the pass.
//!
//! Element visit
//!
//!     An element without the marker attribute is left alone. Otherwise the marker value is
//!     resolved into the content expression:
//!
//!     | marker value              | content                           |
//!     |---------------------------|-----------------------------------|
//!     | none (`<X llm />`)        | `""`                              |
//!     | `"text"`                  | the literal, attached as-is       |
//!     | `{expression}`            | the inner expression, verbatim    |
//!     | anything else             | no rewrite, element untouched     |
//!
//!     A literal content is attached directly (`content="text"`); any other expression goes
//!     back into an expression container (`content={expr}`). The element, minus its marker,
//!     becomes the only child of a new wrapper element.
//!
//! Program exit
//!
//!     If anything was wrapped and the wrapper was not already imported, a named import is
//!     inserted as the first statement.

use describe_ast::ast::{walk_program, VisitorMut};
use describe_ast::{
    ImportDeclaration, JsxAttribute, JsxElement, JsxExpressionContainer, Node, OpaqueNode,
    Program, StringLiteral,
};
use tracing::{debug, trace};

pub const DEFAULT_MARKER: &str = "llm";
pub const DEFAULT_WRAPPER: &str = "LLMDescribe";
pub const DEFAULT_IMPORT_SOURCE: &str = "@/widgets/llm-describe";
pub const DEFAULT_CONTENT_PROP: &str = "content";

/// Names the pass recognises and generates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribeOptions {
    /// Reserved attribute flagging an element for wrapping (exact, case-sensitive)
    pub marker: String,
    /// Wrapper symbol: both the imported binding and the generated element name
    pub wrapper: String,
    /// Module specifier the wrapper is imported from
    pub import_source: String,
    /// Attribute of the wrapper carrying the resolved content
    pub content_prop: String,
}

impl Default for DescribeOptions {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            wrapper: DEFAULT_WRAPPER.to_string(),
            import_source: DEFAULT_IMPORT_SOURCE.to_string(),
            content_prop: DEFAULT_CONTENT_PROP.to_string(),
        }
    }
}

impl DescribeOptions {
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    pub fn with_wrapper(mut self, wrapper: impl Into<String>) -> Self {
        self.wrapper = wrapper.into();
        self
    }

    pub fn with_import_source(mut self, import_source: impl Into<String>) -> Self {
        self.import_source = import_source.into();
        self
    }

    pub fn with_content_prop(mut self, content_prop: impl Into<String>) -> Self {
        self.content_prop = content_prop.into();
        self
    }
}

/// What one run of the pass did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformReport {
    /// Elements wrapped
    pub rewritten: usize,
    /// Elements whose marker value had an unsupported shape
    pub skipped: usize,
    pub import_injected: bool,
}

/// Run the pass over `program` in place
pub fn describe_program(program: &mut Program, options: &DescribeOptions) -> TransformReport {
    let mut pass = DescribePass::new(options);
    walk_program(&mut pass, program);
    pass.report()
}

/// Per-program visitor state
pub struct DescribePass<'o> {
    options: &'o DescribeOptions,
    has_import: bool,
    needs_import: bool,
    report: TransformReport,
}

impl<'o> DescribePass<'o> {
    pub fn new(options: &'o DescribeOptions) -> Self {
        Self {
            options,
            has_import: false,
            needs_import: false,
            report: TransformReport::default(),
        }
    }

    pub fn report(&self) -> TransformReport {
        self.report
    }

    fn imports_wrapper(&self, statement: &Node) -> bool {
        match statement {
            Node::ImportDeclaration(decl) => {
                decl.source() == self.options.import_source
                    && decl.imports_named(&self.options.wrapper)
            }
            _ => false,
        }
    }

    fn build_wrapper(&self, content: Node, original: Node) -> JsxElement {
        let value = match content {
            literal @ Node::StringLiteral(_) => literal,
            expression => Node::JsxExpressionContainer(JsxExpressionContainer::new(expression)),
        };
        let attribute = JsxAttribute::new(&self.options.content_prop, Some(value));
        JsxElement::new(
            &self.options.wrapper,
            vec![Node::JsxAttribute(attribute)],
            vec![original],
        )
    }
}

impl VisitorMut for DescribePass<'_> {
    fn enter_program(&mut self, program: &mut Program) {
        self.has_import = program
            .body
            .iter()
            .any(|statement| self.imports_wrapper(statement));
        self.needs_import = false;
    }

    fn leave_program(&mut self, program: &mut Program) {
        if self.needs_import && !self.has_import {
            let import =
                ImportDeclaration::named(&[&self.options.wrapper], &self.options.import_source);
            program.prepend(Node::ImportDeclaration(import));
            self.report.import_injected = true;
            debug!(
                wrapper = %self.options.wrapper,
                source = %self.options.import_source,
                "injected wrapper import"
            );
        }
    }

    fn visit_jsx_element(&mut self, node: &mut Node) {
        let Node::JsxElement(element) = node else {
            return;
        };
        let Some(index) = element.attribute_position(&self.options.marker) else {
            return;
        };

        // Removal and resolution are one step: on failure the attribute goes back where it was.
        let marker = element.opening.attributes.remove(index);
        let content = match into_content(marker) {
            Ok(content) => content,
            Err(marker) => {
                element.opening.attributes.insert(index, marker);
                self.report.skipped += 1;
                trace!(
                    element = element.name().unwrap_or("?"),
                    "unsupported marker value, element left untouched"
                );
                return;
            }
        };

        debug!(element = element.name().unwrap_or("?"), "wrapping element");
        let placeholder = Node::Opaque(OpaqueNode::new("JSXEmptyExpression"));
        let original = std::mem::replace(node, placeholder);
        *node = Node::JsxElement(self.build_wrapper(content, original));
        self.needs_import = true;
        self.report.rewritten += 1;
    }
}

/// Turn a marker attribute into its content expression, or hand it back unchanged.
fn into_content(marker: Node) -> Result<Node, Node> {
    let mut attr = match marker {
        Node::JsxAttribute(attr) => attr,
        other => return Err(other),
    };
    match attr.value.take().map(|value| *value) {
        None => Ok(Node::StringLiteral(StringLiteral::new(""))),
        Some(literal @ Node::StringLiteral(_)) => Ok(literal),
        Some(Node::JsxExpressionContainer(container)) => Ok(*container.expression),
        Some(other) => {
            attr.value = Some(Box::new(other));
            Err(Node::JsxAttribute(attr))
        }
    }
}
