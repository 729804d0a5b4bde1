//! End-to-end tests of the describe rewrite over Babel JSON trees

use describe_ast::{JsxAttribute, JsxElement, Node, OpaqueNode, Program, SourceFile, StringLiteral};
use describe_transform::transforms::standard::DESCRIBE_JSON;
use describe_transform::{describe_program, DescribeOptions, SourceLoader, TransformReport};
use proptest::prelude::*;
use rstest::rstest;
use serde_json::{json, Value};

fn ident(name: &str) -> Value {
    json!({ "type": "JSXIdentifier", "name": name })
}

fn attr(name: &str, value: Value) -> Value {
    json!({ "type": "JSXAttribute", "name": ident(name), "value": value })
}

fn string(value: &str) -> Value {
    json!({ "type": "StringLiteral", "value": value })
}

fn container(expression: Value) -> Value {
    json!({ "type": "JSXExpressionContainer", "expression": expression })
}

fn element(name: &str, attributes: Vec<Value>, children: Vec<Value>) -> Value {
    let closing = if children.is_empty() {
        Value::Null
    } else {
        json!({ "type": "JSXClosingElement", "name": ident(name) })
    };
    json!({
        "type": "JSXElement",
        "start": 0,
        "end": 10,
        "openingElement": {
            "type": "JSXOpeningElement",
            "name": ident(name),
            "attributes": attributes,
            "selfClosing": children.is_empty()
        },
        "closingElement": closing,
        "children": children
    })
}

fn statement(expression: Value) -> Value {
    json!({ "type": "ExpressionStatement", "expression": expression })
}

fn named_import(imported: &str, local: &str, source: &str) -> Value {
    json!({
        "type": "ImportDeclaration",
        "importKind": "value",
        "specifiers": [{
            "type": "ImportSpecifier",
            "imported": { "type": "Identifier", "name": imported },
            "local": { "type": "Identifier", "name": local }
        }],
        "source": string(source)
    })
}

fn default_import(local: &str, source: &str) -> Value {
    json!({
        "type": "ImportDeclaration",
        "specifiers": [{
            "type": "ImportDefaultSpecifier",
            "local": { "type": "Identifier", "name": local }
        }],
        "source": string(source)
    })
}

fn file(body: Vec<Value>) -> Value {
    json!({
        "type": "File",
        "program": { "type": "Program", "sourceType": "module", "body": body }
    })
}

fn describe(input: Value) -> (Value, TransformReport) {
    let mut source = SourceFile::from_value(input).unwrap();
    let report = describe_program(&mut source.program, &DescribeOptions::default());
    (source.to_value(), report)
}

fn body(output: &Value) -> &Vec<Value> {
    output["program"]["body"].as_array().unwrap()
}

fn is_wrapper_import(statement: &Value) -> bool {
    statement["type"] == "ImportDeclaration"
        && statement["source"]["value"] == "@/widgets/llm-describe"
        && statement["specifiers"][0]["imported"]["name"] == "LLMDescribe"
}

#[rstest]
#[case::string(string("A card"), string("A card"))]
#[case::bare(Value::Null, string(""))]
#[case::identifier(
    container(json!({ "type": "Identifier", "name": "label" })),
    container(json!({ "type": "Identifier", "name": "label" }))
)]
#[case::template(
    container(json!({ "type": "TemplateLiteral", "expressions": [], "quasis": [] })),
    container(json!({ "type": "TemplateLiteral", "expressions": [], "quasis": [] }))
)]
#[case::literal_in_container(container(string("x")), string("x"))]
#[case::empty_expression(
    container(json!({ "type": "JSXEmptyExpression" })),
    container(json!({ "type": "JSXEmptyExpression" }))
)]
fn test_marker_value_becomes_content(#[case] marker: Value, #[case] expected: Value) {
    let input = file(vec![statement(element(
        "Card",
        vec![attr("className", string("card")), attr("llm", marker)],
        vec![],
    ))]);
    let (output, report) = describe(input);

    assert_eq!(report.rewritten, 1);
    let statements = body(&output);
    assert_eq!(statements.len(), 2);
    assert!(is_wrapper_import(&statements[0]));

    let wrapper = &statements[1]["expression"];
    assert_eq!(wrapper["openingElement"]["name"]["name"], "LLMDescribe");
    let wrapper_attrs = wrapper["openingElement"]["attributes"].as_array().unwrap();
    assert_eq!(wrapper_attrs.len(), 1);
    assert_eq!(wrapper_attrs[0]["name"]["name"], "content");
    assert_eq!(wrapper_attrs[0]["value"], expected);

    let children = wrapper["children"].as_array().unwrap();
    assert_eq!(children.len(), 1);
    assert_eq!(
        children[0],
        element("Card", vec![attr("className", string("card"))], vec![])
    );
}

#[rstest]
#[case::jsx_element(element("b", vec![], vec![]))]
#[case::fragment(json!({
    "type": "JSXFragment",
    "openingFragment": { "type": "JSXOpeningFragment" },
    "closingFragment": { "type": "JSXClosingFragment" },
    "children": []
}))]
fn test_unsupported_marker_value_is_skipped(#[case] marker: Value) {
    let input = file(vec![statement(element(
        "Card",
        vec![attr("id", string("a")), attr("llm", marker), attr("role", string("note"))],
        vec![],
    ))]);
    let (output, report) = describe(input.clone());

    assert_eq!(output, input);
    assert_eq!(report.rewritten, 0);
    assert_eq!(report.skipped, 1);
}

#[rstest]
#[case::data_prefix("data-llm")]
#[case::uppercase("LLM")]
#[case::suffix("llmish")]
fn test_only_the_exact_marker_matches(#[case] name: &str) {
    let input = file(vec![statement(element(
        "div",
        vec![attr(name, string("x"))],
        vec![],
    ))]);
    let (output, report) = describe(input.clone());
    assert_eq!(output, input);
    assert_eq!(report, TransformReport::default());
}

#[test]
fn test_namespaced_attribute_does_not_match() {
    let namespaced = json!({
        "type": "JSXAttribute",
        "name": {
            "type": "JSXNamespacedName",
            "namespace": ident("llm"),
            "name": ident("x")
        },
        "value": string("x")
    });
    let input = file(vec![statement(element("div", vec![namespaced], vec![]))]);
    let (output, _) = describe(input.clone());
    assert_eq!(output, input);
}

#[rstest]
#[case::named(named_import("LLMDescribe", "LLMDescribe", "@/widgets/llm-describe"), false)]
#[case::aliased(named_import("LLMDescribe", "Describe", "@/widgets/llm-describe"), false)]
#[case::other_source(named_import("LLMDescribe", "LLMDescribe", "./llm-describe"), true)]
#[case::other_symbol(named_import("Other", "LLMDescribe", "@/widgets/llm-describe"), true)]
#[case::default_import(default_import("LLMDescribe", "@/widgets/llm-describe"), true)]
fn test_existing_import_detection(#[case] existing: Value, #[case] injected: bool) {
    let input = file(vec![
        existing,
        statement(element("div", vec![attr("llm", string("x"))], vec![])),
    ]);
    let (output, report) = describe(input);

    assert_eq!(report.import_injected, injected);
    let statements = body(&output);
    assert_eq!(statements.len(), if injected { 3 } else { 2 });
    if injected {
        assert!(is_wrapper_import(&statements[0]));
    }
}

#[test]
fn test_nested_markers_share_one_import() {
    let inner = element("span", vec![attr("llm", string("inner"))], vec![]);
    let outer = element("section", vec![attr("llm", string("outer"))], vec![inner]);
    let (output, report) = describe(file(vec![statement(outer)]));

    assert_eq!(report.rewritten, 2);
    let statements = body(&output);
    assert_eq!(
        statements.iter().filter(|s| is_wrapper_import(s)).count(),
        1
    );

    let outer_wrapper = &statements[1]["expression"];
    assert_eq!(
        outer_wrapper["openingElement"]["attributes"][0]["value"],
        string("outer")
    );
    let section = &outer_wrapper["children"][0];
    assert_eq!(section["openingElement"]["name"]["name"], "section");

    let inner_wrapper = &section["children"][0];
    assert_eq!(inner_wrapper["openingElement"]["name"]["name"], "LLMDescribe");
    assert_eq!(
        inner_wrapper["openingElement"]["attributes"][0]["value"],
        string("inner")
    );
}

#[test]
fn test_element_inside_attribute_value_is_rewritten() {
    let icon = element("Icon", vec![attr("llm", string("icon"))], vec![]);
    let button = element("Button", vec![attr("icon", container(icon))], vec![]);
    let (output, report) = describe(file(vec![statement(button)]));

    assert_eq!(report.rewritten, 1);
    let button = &body(&output)[1]["expression"];
    let wrapped = &button["openingElement"]["attributes"][0]["value"]["expression"];
    assert_eq!(wrapped["openingElement"]["name"]["name"], "LLMDescribe");
}

#[test]
fn test_element_inside_function_body_is_rewritten() {
    let component = json!({
        "type": "ExportDefaultDeclaration",
        "declaration": {
            "type": "ArrowFunctionExpression",
            "params": [],
            "body": {
                "type": "BlockStatement",
                "body": [{
                    "type": "ReturnStatement",
                    "argument": element("div", vec![attr("llm", string("Panel"))], vec![])
                }]
            }
        }
    });
    let (output, report) = describe(file(vec![component]));

    assert_eq!(report.rewritten, 1);
    let statements = body(&output);
    assert!(is_wrapper_import(&statements[0]));
    let returned = &statements[1]["declaration"]["body"]["body"][0]["argument"];
    assert_eq!(returned["openingElement"]["name"]["name"], "LLMDescribe");
}

#[test]
fn test_without_markers_nothing_changes() {
    let input = file(vec![
        named_import("useState", "useState", "react"),
        statement(element(
            "div",
            vec![attr("className", string("x"))],
            vec![element("span", vec![], vec![])],
        )),
    ]);
    let (output, report) = describe(input.clone());
    assert_eq!(output, input);
    assert_eq!(report, TransformReport::default());
}

#[test]
fn test_import_goes_before_existing_imports() {
    let input = file(vec![
        named_import("useState", "useState", "react"),
        statement(element("div", vec![attr("llm", string("x"))], vec![])),
    ]);
    let (output, _) = describe(input);
    let statements = body(&output);
    assert!(is_wrapper_import(&statements[0]));
    assert_eq!(statements[1]["source"]["value"], "react");
}

#[test]
fn test_json_pipeline_is_idempotent() {
    let input = file(vec![statement(element(
        "div",
        vec![attr("llm", string("x"))],
        vec![element("span", vec![attr("llm", Value::Null)], vec![])],
    ))]);
    let once = DESCRIBE_JSON.run(input.to_string()).unwrap();
    let twice = DESCRIBE_JSON.run(once.clone()).unwrap();

    let once: Value = serde_json::from_str(&once).unwrap();
    let twice: Value = serde_json::from_str(&twice).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_loader_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("card.ast.json");
    let input = file(vec![statement(element(
        "Card",
        vec![attr("llm", string("Pokemon card"))],
        vec![],
    ))]);
    std::fs::write(&path, input.to_string()).unwrap();

    let source = SourceLoader::from_path(&path).unwrap().describe().unwrap();
    assert_eq!(source.program.imports().count(), 1);
}

// Marker: None means no marker, Some(None) a bare marker, Some(Some(s)) a string marker.
type Marker = Option<Option<String>>;

fn build(name: &str, marker: Marker, children: Vec<JsxElement>) -> JsxElement {
    let mut attributes = vec![JsxAttribute::string("className", name).into()];
    if let Some(value) = marker {
        let value = value.map(|text| Node::StringLiteral(StringLiteral::new(text)));
        attributes.push(JsxAttribute::new("llm", value).into());
    }
    let children = children.into_iter().map(Node::JsxElement).collect();
    JsxElement::new(name, attributes, children)
}

fn marker_strategy() -> impl Strategy<Value = Marker> {
    prop_oneof![
        Just(None),
        Just(Some(None)),
        "[a-z ]{0,8}".prop_map(|text| Some(Some(text))),
    ]
}

fn name_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["div", "span", "Card", "section"])
}

fn element_strategy() -> impl Strategy<Value = JsxElement> {
    let leaf = (name_strategy(), marker_strategy())
        .prop_map(|(name, marker)| build(name, marker, vec![]));
    leaf.prop_recursive(4, 32, 4, |inner| {
        (
            name_strategy(),
            marker_strategy(),
            prop::collection::vec(inner, 0..4),
        )
            .prop_map(|(name, marker, children)| build(name, marker, children))
    })
}

fn count_elements(node: &Node, predicate: &dyn Fn(&JsxElement) -> bool) -> usize {
    let own = match node {
        Node::JsxElement(element) if predicate(element) => 1,
        _ => 0,
    };
    own + node
        .children()
        .into_iter()
        .map(|child| count_elements(child, predicate))
        .sum::<usize>()
}

fn count_in_program(program: &Program, predicate: &dyn Fn(&JsxElement) -> bool) -> usize {
    program
        .body
        .iter()
        .map(|statement| count_elements(statement, predicate))
        .sum()
}

proptest! {
    #[test]
    fn prop_rewrite_is_idempotent(root in element_strategy()) {
        let statement = OpaqueNode::new("ExpressionStatement").with_node("expression", root.into());
        let mut program = Program::new(vec![statement.into()]);
        let options = DescribeOptions::default();

        let markers = count_in_program(&program, &|e| e.attribute("llm").is_some());
        let first = describe_program(&mut program, &options);
        prop_assert_eq!(first.rewritten, markers);
        prop_assert_eq!(first.import_injected, markers > 0);
        prop_assert_eq!(count_in_program(&program, &|e| e.attribute("llm").is_some()), 0);
        prop_assert_eq!(
            count_in_program(&program, &|e| e.name() == Some("LLMDescribe")),
            markers
        );

        let after_first = program.clone();
        let second = describe_program(&mut program, &options);
        prop_assert_eq!(second, TransformReport::default());
        prop_assert_eq!(program, after_first);
    }
}
