//! Babel JSON interchange
//!
//!     Decoding rules:
//!
//!     - A JSON object with a string `type` is a node. Typed kinds take their structural
//!       fields out of the object and keep the rest as [Meta].
//!     - Any other kind becomes an [OpaqueNode]; each field is decoded as a [Field], so
//!       nested nodes (even several levels of arrays down) are still nodes.
//!     - Objects without a `type` (`loc`, `extra`, ...) and scalars are plain values.
//!
//!     The root is either a `File` wrapping a `Program`, or a bare `Program`.
//!
//!     Encoding is the inverse. Keys come out in map order, so encoded JSON is compared
//!     structurally, not textually.

use super::elements::{
    Field, Identifier, ImportDeclaration, ImportSpecifier, JsxAttribute, JsxClosingElement,
    JsxElement, JsxExpressionContainer, JsxIdentifier, JsxOpeningElement, Meta, Node, OpaqueNode,
    Program, SourceFile, StringLiteral,
};
use super::error::AstError;
use serde_json::Value;

impl SourceFile {
    pub fn from_json_str(source: &str) -> Result<Self, AstError> {
        let value: Value = serde_json::from_str(source)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, AstError> {
        let mut obj = into_object(value)?;
        let kind = take_type(&mut obj)?;
        match kind.as_str() {
            "File" => {
                let mut program_obj = into_object(take(&mut obj, &kind, "program")?)?;
                let program_kind = take_type(&mut program_obj)?;
                if program_kind != "Program" {
                    return Err(AstError::UnexpectedShape {
                        kind: "File".to_string(),
                        field: "program",
                        expected: "Program",
                        found: program_kind,
                    });
                }
                Ok(SourceFile {
                    program: decode_program(program_obj)?,
                    file_meta: Some(obj),
                })
            }
            "Program" => Ok(SourceFile {
                program: decode_program(obj)?,
                file_meta: None,
            }),
            other => Err(AstError::UnexpectedShape {
                kind: "root".to_string(),
                field: "type",
                expected: "File or Program",
                found: other.to_string(),
            }),
        }
    }

    pub fn to_value(&self) -> Value {
        let program = encode_program(&self.program);
        match &self.file_meta {
            Some(meta) => {
                let mut obj = typed("File", meta);
                obj.insert("program".to_string(), program);
                Value::Object(obj)
            }
            None => program,
        }
    }

    pub fn to_json_string_pretty(&self) -> Result<String, AstError> {
        Ok(serde_json::to_string_pretty(&self.to_value())?)
    }
}

impl Node {
    pub fn from_value(value: Value) -> Result<Self, AstError> {
        decode_node(value)
    }

    pub fn to_value(&self) -> Value {
        encode_node(self)
    }
}

// ---------------------------------------------------------------------------
// decoding
// ---------------------------------------------------------------------------

fn decode_program(mut obj: Meta) -> Result<Program, AstError> {
    let body = take_node_list(&mut obj, "Program", "body")?;
    Ok(Program { body, meta: obj })
}

fn decode_node(value: Value) -> Result<Node, AstError> {
    let mut obj = into_object(value)?;
    let kind = take_type(&mut obj)?;
    let node = match kind.as_str() {
        "ImportDeclaration" => {
            let specifiers = take_node_list(&mut obj, &kind, "specifiers")?;
            let source = take_string_literal(&mut obj, &kind, "source")?;
            Node::ImportDeclaration(ImportDeclaration {
                specifiers,
                source,
                meta: obj,
            })
        }
        "ImportSpecifier" => {
            let imported = take_node(&mut obj, &kind, "imported")?;
            let local = take_node(&mut obj, &kind, "local")?;
            Node::ImportSpecifier(ImportSpecifier {
                imported: Box::new(imported),
                local: Box::new(local),
                meta: obj,
            })
        }
        "JSXElement" => {
            let opening = decode_opening(take(&mut obj, &kind, "openingElement")?)?;
            let closing = match obj.remove("closingElement") {
                None | Some(Value::Null) => None,
                Some(value) => Some(decode_closing(value)?),
            };
            let children = take_node_list(&mut obj, &kind, "children")?;
            Node::JsxElement(JsxElement {
                opening,
                closing,
                children,
                meta: obj,
            })
        }
        "JSXAttribute" => {
            let name = take_node(&mut obj, &kind, "name")?;
            let value = take_optional_node(&mut obj, "value")?;
            Node::JsxAttribute(JsxAttribute {
                name: Box::new(name),
                value: value.map(Box::new),
                meta: obj,
            })
        }
        "JSXExpressionContainer" => {
            let expression = take_node(&mut obj, &kind, "expression")?;
            Node::JsxExpressionContainer(JsxExpressionContainer {
                expression: Box::new(expression),
                meta: obj,
            })
        }
        "JSXIdentifier" => {
            let name = take_string(&mut obj, &kind, "name")?;
            Node::JsxIdentifier(JsxIdentifier { name, meta: obj })
        }
        "StringLiteral" => {
            let value = take_string(&mut obj, &kind, "value")?;
            Node::StringLiteral(StringLiteral { value, meta: obj })
        }
        "Identifier" => {
            let name = take_string(&mut obj, &kind, "name")?;
            Node::Identifier(Identifier { name, meta: obj })
        }
        _ => {
            let mut fields = Vec::with_capacity(obj.len());
            for (name, value) in obj {
                fields.push((name, decode_field(value)?));
            }
            Node::Opaque(OpaqueNode {
                kind: kind.clone(),
                fields,
            })
        }
    };
    Ok(node)
}

fn decode_field(value: Value) -> Result<Field, AstError> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .map(decode_field)
            .collect::<Result<Vec<_>, _>>()
            .map(Field::List),
        Value::Object(obj) if obj.get("type").is_some_and(Value::is_string) => {
            decode_node(Value::Object(obj)).map(|node| Field::Node(Box::new(node)))
        }
        other => Ok(Field::Value(other)),
    }
}

fn decode_opening(value: Value) -> Result<JsxOpeningElement, AstError> {
    let mut obj = into_object(value)?;
    let kind = take_type(&mut obj)?;
    let name = take_node(&mut obj, &kind, "name")?;
    let attributes = take_node_list(&mut obj, &kind, "attributes")?;
    let self_closing = take_bool(&mut obj, &kind, "selfClosing")?;
    Ok(JsxOpeningElement {
        name: Box::new(name),
        attributes,
        self_closing,
        meta: obj,
    })
}

fn decode_closing(value: Value) -> Result<JsxClosingElement, AstError> {
    let mut obj = into_object(value)?;
    let kind = take_type(&mut obj)?;
    let name = take_node(&mut obj, &kind, "name")?;
    Ok(JsxClosingElement {
        name: Box::new(name),
        meta: obj,
    })
}

fn into_object(value: Value) -> Result<Meta, AstError> {
    match value {
        Value::Object(obj) => Ok(obj),
        other => Err(AstError::NotANode(value_kind(&other).to_string())),
    }
}

fn take_type(obj: &mut Meta) -> Result<String, AstError> {
    match obj.remove("type") {
        Some(Value::String(kind)) => Ok(kind),
        Some(other) => Err(AstError::UnexpectedShape {
            kind: "node".to_string(),
            field: "type",
            expected: "string",
            found: value_kind(&other).to_string(),
        }),
        None => Err(AstError::NotANode("object without `type`".to_string())),
    }
}

fn take(obj: &mut Meta, kind: &str, field: &'static str) -> Result<Value, AstError> {
    obj.remove(field).ok_or_else(|| AstError::MissingField {
        kind: kind.to_string(),
        field,
    })
}

fn take_node(obj: &mut Meta, kind: &str, field: &'static str) -> Result<Node, AstError> {
    decode_node(take(obj, kind, field)?)
}

fn take_optional_node(obj: &mut Meta, field: &'static str) -> Result<Option<Node>, AstError> {
    match obj.remove(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => decode_node(value).map(Some),
    }
}

fn take_node_list(obj: &mut Meta, kind: &str, field: &'static str) -> Result<Vec<Node>, AstError> {
    match take(obj, kind, field)? {
        Value::Array(items) => items.into_iter().map(decode_node).collect(),
        other => Err(AstError::UnexpectedShape {
            kind: kind.to_string(),
            field,
            expected: "array",
            found: value_kind(&other).to_string(),
        }),
    }
}

fn take_string(obj: &mut Meta, kind: &str, field: &'static str) -> Result<String, AstError> {
    match take(obj, kind, field)? {
        Value::String(s) => Ok(s),
        other => Err(AstError::UnexpectedShape {
            kind: kind.to_string(),
            field,
            expected: "string",
            found: value_kind(&other).to_string(),
        }),
    }
}

fn take_bool(obj: &mut Meta, kind: &str, field: &'static str) -> Result<bool, AstError> {
    match obj.remove(field) {
        None => Ok(false),
        Some(Value::Bool(b)) => Ok(b),
        Some(other) => Err(AstError::UnexpectedShape {
            kind: kind.to_string(),
            field,
            expected: "boolean",
            found: value_kind(&other).to_string(),
        }),
    }
}

fn take_string_literal(
    obj: &mut Meta,
    kind: &str,
    field: &'static str,
) -> Result<StringLiteral, AstError> {
    match take_node(obj, kind, field)? {
        Node::StringLiteral(lit) => Ok(lit),
        other => Err(AstError::UnexpectedShape {
            kind: kind.to_string(),
            field,
            expected: "StringLiteral",
            found: other.node_type().to_string(),
        }),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ---------------------------------------------------------------------------
// encoding
// ---------------------------------------------------------------------------

fn typed(kind: &str, meta: &Meta) -> Meta {
    let mut obj = meta.clone();
    obj.insert("type".to_string(), Value::String(kind.to_string()));
    obj
}

fn encode_program(program: &Program) -> Value {
    let mut obj = typed("Program", &program.meta);
    obj.insert("body".to_string(), encode_list(&program.body));
    Value::Object(obj)
}

fn encode_list(nodes: &[Node]) -> Value {
    Value::Array(nodes.iter().map(encode_node).collect())
}

fn encode_node(node: &Node) -> Value {
    let obj = match node {
        Node::ImportDeclaration(decl) => {
            let mut obj = typed("ImportDeclaration", &decl.meta);
            obj.insert("specifiers".to_string(), encode_list(&decl.specifiers));
            obj.insert(
                "source".to_string(),
                encode_node(&Node::StringLiteral(decl.source.clone())),
            );
            obj
        }
        Node::ImportSpecifier(spec) => {
            let mut obj = typed("ImportSpecifier", &spec.meta);
            obj.insert("imported".to_string(), encode_node(&spec.imported));
            obj.insert("local".to_string(), encode_node(&spec.local));
            obj
        }
        Node::JsxElement(element) => {
            let mut obj = typed("JSXElement", &element.meta);
            let opening = &element.opening;
            let mut opening_obj = typed("JSXOpeningElement", &opening.meta);
            opening_obj.insert("name".to_string(), encode_node(&opening.name));
            opening_obj.insert("attributes".to_string(), encode_list(&opening.attributes));
            opening_obj.insert("selfClosing".to_string(), Value::Bool(opening.self_closing));
            obj.insert("openingElement".to_string(), Value::Object(opening_obj));
            let closing = match &element.closing {
                Some(closing) => {
                    let mut closing_obj = typed("JSXClosingElement", &closing.meta);
                    closing_obj.insert("name".to_string(), encode_node(&closing.name));
                    Value::Object(closing_obj)
                }
                None => Value::Null,
            };
            obj.insert("closingElement".to_string(), closing);
            obj.insert("children".to_string(), encode_list(&element.children));
            obj
        }
        Node::JsxAttribute(attr) => {
            let mut obj = typed("JSXAttribute", &attr.meta);
            obj.insert("name".to_string(), encode_node(&attr.name));
            let value = attr.value.as_deref().map_or(Value::Null, encode_node);
            obj.insert("value".to_string(), value);
            obj
        }
        Node::JsxExpressionContainer(container) => {
            let mut obj = typed("JSXExpressionContainer", &container.meta);
            obj.insert("expression".to_string(), encode_node(&container.expression));
            obj
        }
        Node::JsxIdentifier(ident) => {
            let mut obj = typed("JSXIdentifier", &ident.meta);
            obj.insert("name".to_string(), Value::String(ident.name.clone()));
            obj
        }
        Node::StringLiteral(lit) => {
            let mut obj = typed("StringLiteral", &lit.meta);
            obj.insert("value".to_string(), Value::String(lit.value.clone()));
            obj
        }
        Node::Identifier(ident) => {
            let mut obj = typed("Identifier", &ident.meta);
            obj.insert("name".to_string(), Value::String(ident.name.clone()));
            obj
        }
        Node::Opaque(opaque) => {
            let mut obj = typed(&opaque.kind, &Meta::new());
            for (name, field) in &opaque.fields {
                obj.insert(name.clone(), encode_field(field));
            }
            obj
        }
    };
    Value::Object(obj)
}

fn encode_field(field: &Field) -> Value {
    match field {
        Field::Node(node) => encode_node(node),
        Field::List(items) => Value::Array(items.iter().map(encode_field).collect()),
        Field::Value(value) => value.clone(),
    }
}
