use std::str::FromStr;

use quill_core::{HttpMethod, SchemaType};
use quill_document::{Document, Error};

const PETSTORE: &str = r##"{
  "swagger": "2.0",
  "info": { "title": "Petstore", "version": "1.0.0" },
  "basePath": "/v2",
  "definitions": {
    "Pet": {
      "type": "object",
      "required": ["name"],
      "properties": {
        "id": { "type": "integer", "format": "int64" },
        "name": { "type": "string" },
        "tags": { "type": "array", "items": { "$ref": "#/definitions/Tag" } },
        "status": { "type": "string", "enum": ["available", "pending", "sold"] }
      }
    },
    "Tag": {
      "type": "object",
      "properties": { "id": { "type": "integer" }, "name": { "type": "string" } }
    }
  },
  "paths": {
    "/pets": {
      "get": {
        "operationId": "find",
        "responses": {
          "200": {
            "description": "ok",
            "schema": { "type": "array", "items": { "$ref": "#/definitions/Pet" } },
            "examples": { "application/json": { "id": 1 } }
          }
        }
      },
      "post": { "operationId": "create", "responses": { "default": { "description": "ok" } } }
    },
    "/pets/{petId}": {
      "get": { "operationId": "findById", "responses": {} }
    }
  }
}"##;

#[test]
fn parses_definitions_in_order() {
    let doc = Document::from_str(PETSTORE).unwrap();

    let names: Vec<_> = doc.definitions.keys().cloned().collect();
    assert_eq!(names, vec!["Pet", "Tag"]);

    let pet = &doc.definitions["Pet"];
    let props: Vec<_> = pet.properties.keys().cloned().collect();
    assert_eq!(props, vec!["id", "name", "tags", "status"]);
    assert!(pet.is_required("name"));
    assert!(!pet.is_required("id"));
    assert_eq!(pet.properties["id"].schema_type(), SchemaType::primitive("long"));
    assert_eq!(pet.properties["status"].enum_strings().len(), 3);
}

#[test]
fn parses_paths_and_operations() {
    let doc = Document::from_str(PETSTORE).unwrap();

    assert_eq!(doc.info.title, "Petstore");
    assert_eq!(doc.base_path.as_deref(), Some("/v2"));
    assert_eq!(doc.operation_count(), 3);

    let pets = &doc.paths["/pets"];
    let ops: Vec<_> = pets
        .operations()
        .map(|(method, op)| (method, op.operation_id.clone().unwrap_or_default()))
        .collect();
    assert_eq!(
        ops,
        vec![
            (HttpMethod::Get, "find".to_string()),
            (HttpMethod::Post, "create".to_string())
        ]
    );

    let find = pets.get.as_ref().unwrap();
    assert!(find.responses["200"].examples.contains_key("application/json"));
}

#[test]
fn reports_parse_error_with_span() {
    let err = Document::from_str_with_filename("{\n  \"info\": [\n}", "broken.json").unwrap_err();

    match *err {
        Error::Parse { span, .. } => assert!(span.is_some()),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn reports_missing_file() {
    let temp = tempfile::TempDir::new().unwrap();
    let err = Document::from_file(temp.path().join("missing.json")).unwrap_err();

    assert!(matches!(*err, Error::Io { .. }));
}

#[test]
fn reads_document_from_file() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("api.json");
    std::fs::write(&path, PETSTORE).unwrap();

    let doc = Document::from_file(&path).unwrap();
    assert_eq!(doc.definitions.len(), 2);
}
