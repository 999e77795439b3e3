use tww_core::TwwError;

#[test]
fn codes_are_stable() {
    assert_eq!(TwwError::UnknownVertex { vertex: 3 }.code(), "unknown-vertex");
    assert_eq!(
        TwwError::EdgeColorConflict { u: 1, v: 2 }.code(),
        "edge-color-conflict"
    );
    assert_eq!(TwwError::EmptyGraph.code(), "empty-graph");
    assert_eq!(
        TwwError::MissingHeader { line: None }.code(),
        "missing-header"
    );
    assert_eq!(TwwError::SelfLoop { vertex: 4 }.code(), "self-loop");
    assert_eq!(TwwError::LoopEdge { line: 4, label: 7 }.code(), "self-loop");
}

#[test]
fn messages_carry_the_diagnostic_coordinates() {
    let err = TwwError::LabelOutOfRange {
        line: 12,
        label: 9,
        vertices: 6,
    };
    let rendered = err.to_string();
    assert!(rendered.contains("line 12"));
    assert!(rendered.contains("label 9"));
    assert!(rendered.contains("1..=6"));

    let err = TwwError::EdgeColorConflict { u: 1, v: 2 };
    assert!(err.to_string().contains("other color"));

    let err = TwwError::UnknownVertex { vertex: 7 };
    assert!(err.to_string().contains("vertex 7"));
}

#[test]
fn errors_roundtrip_through_serde() {
    let errors = [
        TwwError::UnknownVertex { vertex: 3 },
        TwwError::EmptyGraph,
        TwwError::InvalidToken {
            line: 2,
            token: "x".into(),
        },
        TwwError::MissingHeader { line: Some(1) },
        TwwError::LoopEdge { line: 5, label: 5 },
    ];
    for err in errors {
        let json = serde_json::to_string(&err).unwrap();
        let back: TwwError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, back);
    }
}

#[test]
fn serialized_form_is_tagged_by_kind() {
    let json = serde_json::to_value(TwwError::IsolatedVertex { vertex: 5 }).unwrap();
    assert_eq!(json["kind"], "isolated-vertex");
    assert_eq!(json["vertex"], 5);
}
