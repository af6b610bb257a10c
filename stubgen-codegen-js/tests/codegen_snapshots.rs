//! Snapshot tests for JavaScript code generation.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use stubgen_codegen::{
    EmitterRegistry, Error, GeneratedArtifact, GenerationRequest, Language, generate,
    testing::{empty_document, widget_document},
};
use stubgen_codegen_js::Generator;
use stubgen_schema::{Document, SchemaDefinition, SchemaNode};

fn generate_js(document: &Document, module: &str, operations: &[&str]) -> GeneratedArtifact {
    let request = GenerationRequest::new(Language::JavaScript, module)
        .with_operations(operations.iter().copied());
    generate(document, &request, &Generator::new()).expect("generation failed")
}

#[test]
fn test_model_file() {
    let artifact = generate_js(&widget_document(), "client", &[]);

    assert_eq!(artifact.model_filename, "client_model.js");
    insta::assert_snapshot!(artifact.model_source, @r##"
// This file was generated from https://api.example.com/widgets.json

// GetWidgetRequest: {"id": "type string(required)."}
// GetWidgetResponse: {"widget": "type Widget."}
// ListWidgetsRequest: {"filter": "type string.", "limit": "type int. Page size"}
// ListWidgetsResponse: {"total": "type int(required).", "widgets": "type array[Widget](required).", "next_page": "type string."}
// Widget: {"count": "type int(required).", "name": "type string(required). Display name", "labels": "type map[string, string].", "note": "type string. Free-form note"}
"##);
}

#[test]
fn test_client_file() {
    let artifact = generate_js(&widget_document(), "billing", &[]);

    assert_eq!(artifact.client_filename, "billing_client.js");
    insta::assert_snapshot!(artifact.client_source, @r##"
// This file was generated from https://api.example.com/widgets.json

export class Invoker {
  invoke(path, data) {
    throw new Error(`Invoker.invoke is not implemented for ${path}`);
  }
}

export class BillingAPI {
  constructor(invoker) {
    this.invoker = invoker;
  }

  // req: {"id": "type string(required)."}
  // rsp: {"widget": "type Widget."}
  getWidget(data) {
    return this.invoker.invoke('/widgets/get', data);
  }

  // List all widgets
  // req: {"filter": "type string.", "limit": "type int. Page size"}
  // rsp: {"total": "type int(required).", "widgets": "type array[Widget](required).", "next_page": "type string."}
  listWidgets(data) {
    return this.invoker.invoke('/widgets/list', data);
  }
}

export default BillingAPI;
"##);
}

#[test]
fn test_empty_document_is_header_only() {
    let artifact = generate_js(&empty_document(), "client", &[]);
    let header = "// This file was generated from empty.json\n\n";

    assert_eq!(artifact.model_source, header);
    assert_eq!(artifact.client_source, header);
}

#[test]
fn test_filter_keeps_one_method() {
    let artifact = generate_js(&widget_document(), "client", &["ListWidgets"]);

    assert_eq!(artifact.client_source.matches("(data) {").count(), 1);
    assert!(artifact.client_source.contains("  listWidgets(data) {"));
    assert!(!artifact.client_source.contains("getWidget"));
}

#[test]
fn test_unknown_operation() {
    let request =
        GenerationRequest::new(Language::JavaScript, "client").with_operations(["Nope"]);
    let err = generate(&widget_document(), &request, &Generator::new()).unwrap_err();

    assert!(matches!(*err, Error::UnknownOperation { ref name } if name == "Nope"));
}

#[test]
fn test_unsupported_kind_aborts() {
    let doc = Document::builder("bad.json")
        .schema(SchemaDefinition::new("Widget").property("shape", SchemaNode::unsupported("unsupported")))
        .build()
        .unwrap();
    let request = GenerationRequest::new(Language::JavaScript, "client");
    let err = generate(&doc, &request, &Generator::new()).unwrap_err();

    assert!(matches!(*err, Error::UnknownSchemaType { ref kind, .. } if kind == "unsupported"));
}

#[test]
fn test_registry_dispatch() {
    let registry = EmitterRegistry::new().register(Generator::new());
    let request = GenerationRequest::new(Language::JavaScript, "client");

    let via_registry = registry.generate(&widget_document(), &request).unwrap();
    assert_eq!(via_registry, generate_js(&widget_document(), "client", &[]));
}

#[test]
fn test_multiline_summary_stays_commented() {
    let doc = Document::builder("ping.json")
        .schema(SchemaDefinition::new("PingRequest"))
        .schema(SchemaDefinition::new("PingResponse"))
        .operation(
            stubgen_schema::Operation::new("/ping", "Ping")
                .with_summary("Ping the service.\nReturns pong."),
        )
        .build()
        .unwrap();
    let artifact = generate_js(&doc, "client", &[]);

    assert!(artifact.client_source.contains(
        "  // Ping the service.\n  // Returns pong.\n  // req: {}\n  // rsp: {}\n  ping(data) {\n"
    ));
}
