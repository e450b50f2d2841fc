use ll_translate_engine::chunking::{
    AnnotationId, Chunk, InvalidItem, LinearItem, chunk_linear_data,
};
use pretty_assertions::assert_eq;

fn decode(json: &str) -> Vec<LinearItem> {
    serde_json::from_str(json).unwrap()
}

#[test]
fn decodes_each_host_shape() {
    let items = decode(
        r#"[
            "a",
            ["b", ["h1", "h2"]],
            {"type": "inlineImage", "attributes": {"src": "cat.png"}},
            {"type": "/inlineImage"},
            "e\u0301"
        ]"#,
    );

    assert_eq!(
        items,
        vec![
            LinearItem::Text("a".to_string()),
            LinearItem::Annotated("b".to_string(), vec!["h1".into(), "h2".into()]),
            LinearItem::Element {
                element_type: "inlineImage".to_string()
            },
            LinearItem::Element {
                element_type: "/inlineImage".to_string()
            },
            LinearItem::Text("e\u{301}".to_string()),
        ]
    );
}

#[test]
fn decoded_text_is_chunked() {
    let items = decode(r#"["H", ["i", ["h1"]], ["!", ["h1"]], "🇫🇷"]"#);

    let chunked = chunk_linear_data(&items).unwrap();

    assert_eq!(chunked.text, "Hi!🇫🇷");
    assert!(chunked.common_annotations.is_empty());
    assert_eq!(
        chunked.chunks,
        vec![Chunk {
            start: 1,
            text: "i!".to_string(),
            annotations: vec![AnnotationId::from("h1")],
        }]
    );
}

#[test]
fn decoded_element_is_reported_at_its_index() {
    let items = decode(r#"["a", "b", {"type": "inlineImage", "attributes": {}}, "c"]"#);

    let err = chunk_linear_data(&items).unwrap_err();

    assert_eq!(err.index, 2);
    assert_eq!(err.reason, InvalidItem::Element("inlineImage".to_string()));
}

#[test]
fn serializes_back_to_host_shapes() {
    let items = vec![
        LinearItem::from('x'),
        LinearItem::Annotated("y".to_string(), vec!["h1".into()]),
        LinearItem::Element {
            element_type: "inlineImage".to_string(),
        },
    ];

    let json = serde_json::to_string(&items).unwrap();

    assert_eq!(json, r#"["x",["y",["h1"]],{"type":"inlineImage"}]"#);
}
