//! Mutable traversal
//!
//! Passes implement [VisitorMut] and hand themselves to [walk_program]. Default
//! implementations are empty, so a pass only overrides the hooks it cares about.
//!
//! # Example
//!
//! ```ignore
//! struct CountElements(usize);
//!
//! impl VisitorMut for CountElements {
//!     fn visit_jsx_element(&mut self, _node: &mut Node) {
//!         self.0 += 1;
//!     }
//! }
//!
//! let mut counter = CountElements(0);
//! walk_program(&mut counter, &mut file.program);
//! ```

use super::elements::{Node, Program};

pub trait VisitorMut {
    /// Called once before any statement is visited
    fn enter_program(&mut self, _program: &mut Program) {}

    /// Called once after every statement has been walked
    fn leave_program(&mut self, _program: &mut Program) {}

    /// Called for every `JSXElement`, before its children are walked
    ///
    /// The visitor may replace `node` outright. The walk then continues into the children of
    /// whatever `node` holds afterwards, so an element moved inside a replacement is still
    /// walked (and its own children with it).
    fn visit_jsx_element(&mut self, _node: &mut Node) {}
}

/// Drive `visitor` over the whole program, depth-first
pub fn walk_program<V: VisitorMut + ?Sized>(visitor: &mut V, program: &mut Program) {
    visitor.enter_program(program);
    for statement in program.body.iter_mut() {
        walk_node(visitor, statement);
    }
    visitor.leave_program(program);
}

pub fn walk_node<V: VisitorMut + ?Sized>(visitor: &mut V, node: &mut Node) {
    if matches!(node, Node::JsxElement(_)) {
        visitor.visit_jsx_element(node);
    }
    for child in node.children_mut() {
        walk_node(visitor, child);
    }
}
