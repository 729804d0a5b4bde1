//! Registry behaviour through the public API

use describe_registry::{
    nodes_from_json_str, to_description_str, DescribeNode, DescribeRegistry, DescribeTree,
    MemorySink, StateSink, DEFAULT_STATE_KEY,
};
use proptest::prelude::*;
use rstest::rstest;
use parking_lot::Mutex;
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc, Weak};
use std::thread;
use std::time::Duration;

fn registry_with(state: serde_json::Value) -> (DescribeRegistry, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::with_state(state));
    (DescribeRegistry::new(sink.clone()), sink)
}

#[rstest]
#[case::null_content(None)]
#[case::empty_content(Some(""))]
#[case::whitespace_content(Some(" \t "))]
fn test_blank_parent_keeps_child_depth(#[case] content: Option<&str>) {
    let (registry, _sink) = registry_with(serde_json::Value::Null);
    registry.register(DescribeNode::root("a", content));
    registry.register(DescribeNode::child("b", "a", Some("child")));
    registry.register(DescribeNode::child("c", "b", Some("grandchild")));

    assert_eq!(registry.description(), "  - child\n    - grandchild");
}

#[test]
fn test_every_mutation_is_published() {
    let (registry, sink) = registry_with(json!({ "theme": "dark" }));

    registry.register(DescribeNode::root("a", Some("Pokedex")));
    assert_eq!(
        sink.state(),
        json!({ "theme": "dark", "__widget_context": "- Pokedex" })
    );

    registry.register(DescribeNode::child("b", "a", Some("Pikachu")));
    assert_eq!(
        sink.get_str(DEFAULT_STATE_KEY).as_deref(),
        Some("- Pokedex\n  - Pikachu")
    );

    // The host changes its own keys between publications.
    let mut state = sink.state();
    state["theme"] = json!("light");
    sink.set_state(state);

    registry.unregister("b");
    assert_eq!(
        sink.state(),
        json!({ "theme": "light", "__widget_context": "- Pokedex" })
    );
}

#[test]
fn test_snapshot_registers_in_file_order() {
    let nodes = nodes_from_json_str(
        r#"[
            { "id": "a", "parentId": null, "content": "first" },
            { "id": "a", "parentId": null, "content": "second" },
            { "id": "b", "parentId": "a", "content": "child" }
        ]"#,
    )
    .unwrap();

    let (registry, _sink) = registry_with(serde_json::Value::Null);
    for node in nodes {
        registry.register(node);
    }
    assert_eq!(registry.description(), "- second\n  - child");
}

#[test]
fn test_nested_attachments_mirror_lifetimes() {
    let (registry, sink) = registry_with(serde_json::Value::Null);
    let page = registry.attach(Some("Piano widget"));
    let keyboard = page.attach_child(None);
    let c4 = keyboard.attach_child(Some("C4, pressed"));
    let d4 = keyboard.attach_child(Some("D4"));

    assert_eq!(
        sink.get_str(DEFAULT_STATE_KEY).as_deref(),
        Some("- Piano widget\n    - C4, pressed\n    - D4")
    );

    drop(c4);
    drop(keyboard);
    // D4 is now an orphan: registered, not described.
    assert_eq!(registry.description(), "- Piano widget");
    assert_eq!(registry.nodes().len(), 2);

    drop(d4);
    drop(page);
    assert!(registry.nodes().is_empty());
    assert_eq!(sink.get_str(DEFAULT_STATE_KEY).as_deref(), Some(""));
}

/// Host sink that reads the registry back, and mounts one extra node, while publishing.
#[derive(Default)]
struct ObservingSink {
    inner: MemorySink,
    registry: Mutex<Weak<DescribeRegistry>>,
    mounted: AtomicBool,
    seen: Mutex<Vec<String>>,
}

impl StateSink for ObservingSink {
    fn state(&self) -> serde_json::Value {
        self.inner.state()
    }

    fn set_state(&self, state: serde_json::Value) {
        self.inner.set_state(state);
        let Some(registry) = self.registry.lock().upgrade() else {
            return;
        };
        self.seen.lock().push(registry.description());
        if !self.mounted.swap(true, Ordering::SeqCst) {
            let toast = registry.attach(Some("toast"));
            assert_eq!(registry.nodes().len(), 2);
            drop(toast);
        }
    }
}

#[test]
fn test_sink_may_call_back_into_registry() {
    let sink = Arc::new(ObservingSink::default());
    let registry = Arc::new(DescribeRegistry::new(sink.clone()));
    *sink.registry.lock() = Arc::downgrade(&registry);

    let (done, finished) = mpsc::channel();
    let worker = {
        let registry = registry.clone();
        thread::spawn(move || {
            registry.register(DescribeNode::root("a", Some("Pokedex")));
            registry.unregister("a");
            done.send(()).unwrap();
        })
    };
    finished
        .recv_timeout(Duration::from_secs(5))
        .expect("registry calls returned while the sink re-entered it");
    worker.join().unwrap();

    assert!(registry.nodes().is_empty());
    assert_eq!(sink.inner.get_str(DEFAULT_STATE_KEY).as_deref(), Some(""));
    // The nested mount published its own states inside the first publication.
    assert_eq!(
        *sink.seen.lock(),
        vec![
            "- Pokedex".to_string(),
            "- Pokedex\n- toast".to_string(),
            "- Pokedex".to_string(),
            String::new(),
        ]
    );
}

fn forest_strategy() -> impl Strategy<Value = Vec<DescribeNode>> {
    // Parent of node i is None or one of nodes 0..i, so the forest has no cycles.
    let node_count = 1..12usize;
    node_count
        .prop_flat_map(|count| {
            let parents = (0..count)
                .map(|i| prop::option::of(0..i.max(1)).prop_map(move |p| p.filter(|_| i > 0)))
                .collect::<Vec<_>>();
            let contents = prop::collection::vec(
                prop::option::of("[ a-z]{0,6}"),
                count,
            );
            (parents, contents)
        })
        .prop_map(|(parents, contents)| {
            parents
                .into_iter()
                .zip(contents)
                .enumerate()
                .map(|(i, (parent, content))| DescribeNode {
                    id: format!("n{i}"),
                    parent_id: parent.map(|p| format!("n{p}")),
                    content,
                })
                .collect()
        })
}

proptest! {
    #[test]
    fn prop_registration_order_does_not_matter(
        (nodes, shuffled) in forest_strategy()
            .prop_flat_map(|nodes| (Just(nodes.clone()), Just(nodes).prop_shuffle()))
    ) {
        let (in_order, _) = registry_with(serde_json::Value::Null);
        for node in &nodes {
            in_order.register(node.clone());
        }
        let (out_of_order, _) = registry_with(serde_json::Value::Null);
        for node in &shuffled {
            out_of_order.register(node.clone());
        }

        prop_assert_eq!(in_order.description(), out_of_order.description());
        prop_assert_eq!(in_order.nodes(), out_of_order.nodes());

        let tree: DescribeTree = shuffled.iter().cloned().collect();
        prop_assert_eq!(tree.to_description_str(), to_description_str(&nodes));
    }
}
