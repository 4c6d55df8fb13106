//! End-to-end runs of the Swift profiles over a small pet store document.

use quill_codegen::{
    Config, ContextRenderer, Emission, Error, FileRegistry, GenerationContext, Pipeline,
    ProfileRegistry, emit,
    testing::{petstore, write_to_temp},
};
use quill_codegen_swift::registry;
use quill_document::Document;

fn run<'p>(
    profiles: &'p ProfileRegistry,
    document: &'p Document,
    name: &str,
    pairs: &[&str],
) -> GenerationContext<'p> {
    let profile = profiles.get(name).unwrap();
    let config = Config::from_pairs(pairs.iter().copied()).unwrap();
    Pipeline::new().run(profile, document, &config).unwrap()
}

fn listing(emissions: &[Emission]) -> String {
    emissions
        .iter()
        .map(|e| format!("{} <- {}", e.path(), e.template))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_registry_lists_profiles() {
    let profiles = registry();
    assert_eq!(profiles.names(), vec!["swift", "moya", "LoopBackSwift"]);

    let err = profiles.get("kotlin").unwrap_err();
    assert!(matches!(err, Error::UnknownProfile { ref available, .. } if available == "swift, moya, LoopBackSwift"));
}

#[test]
fn test_swift_types_and_paths() {
    let (profiles, document) = (registry(), petstore());
    let ctx = run(&profiles, &document, "swift", &[]);
    let ir = ctx.ir.as_ref().unwrap();

    let order = ir.model("Order").unwrap();
    let types: Vec<_> = order.properties.iter().map(|p| p.data_type.as_str()).collect();
    assert_eq!(types, vec!["Int64", "Int64", "Int32", "NSDate", "String", "Bool"]);

    let pets = ir.group("PetsAPI").unwrap();
    assert_eq!(pets.operations[2].path.as_deref(), Some("/pets/{petId}"));
}

#[test]
fn test_moya_operations() {
    let (profiles, document) = (registry(), petstore());
    let ctx = run(&profiles, &document, "moya", &["projectName=PetKit"]);
    let pets = ctx.ir.as_ref().unwrap().group("PetsAPI").unwrap();

    let ids: Vec<_> = pets.operations.iter().map(|o| o.operation_id.as_str()).collect();
    assert_eq!(ids, vec!["Find", "Create", "FindById", "DeleteById", "Count"]);
    assert_eq!(
        pets.operations[2].path.as_deref(),
        Some("/pets/\\(petId.URLEscapedString)")
    );

    let examples: Vec<_> = pets.operations[2]
        .examples
        .iter()
        .map(|e| (e.content_type.as_str(), e.example.as_str()))
        .collect();
    assert_eq!(
        examples,
        vec![
            ("application/json", "{\\\"id\\\":1,\\\"name\\\":\\\"doggie\\\"}"),
            ("application/xml", "<Pet><id>1</id></Pet>"),
        ]
    );
}

#[test]
fn test_moya_emissions() {
    let (profiles, document) = (registry(), petstore());
    let ctx = run(&profiles, &document, "moya", &["projectName=PetKit"]);

    insta::assert_snapshot!(listing(&emit(&ctx).unwrap()), @r"
    PetKit/Models/Pet.swift <- model.tera
    PetKit/Models/Category.swift <- model.tera
    PetKit/Models/Order.swift <- model.tera
    PetKit/APIs/PetsAPI.swift <- api.tera
    PetKit/APIs/StoreAPI.swift <- api.tera
    PetKit/String+URLEscapedString.swift <- Swift+URLEscapedString.tera
    PetKit/ParameterEncoding+encode.swift <- ParameterEncoding+encode.tera
    PetKit/Parameters.swift <- Parameters.tera
    PetKit/JsonSerializable.swift <- JsonSerializable.tera
    PetKit/JsonDeserializers.swift <- JsonDeserializers.tera
    PetKit/Utils.swift <- Utils.tera
    ");
}

#[test]
fn test_loopback_defaults() {
    let (profiles, document) = (registry(), petstore());
    let ctx = run(&profiles, &document, "LoopBackSwift", &[]);
    let ir = ctx.ir.as_ref().unwrap();

    let pet = ir.model("Pet").unwrap();
    let id = pet.id_property().unwrap();
    assert_eq!(id.data_type, "Int");
    assert!(id.is_id);
    assert_eq!(id.default_value, "nil");

    let status = &pet.properties[4];
    assert_eq!(status.data_type_with_enum, "Status");
    assert_eq!(status.enum_cases[0].case_name, "Available");

    let pets = ir.group("PetsAPI").unwrap();
    assert_eq!(pets.operations[2].path.as_deref(), Some("/pets/\\(petId)"));
    assert_eq!(pets.resource_path.as_deref(), Some("/pets"));

    // only JSON examples survive
    assert_eq!(pets.operations[2].examples.len(), 1);

    let store = ir.group("StoreAPI").unwrap();
    let inventory = store.operations[1].successful_response.as_ref().unwrap();
    assert_eq!(inventory.code, "default");
    assert_eq!(inventory.data_type.as_deref(), Some("String"));
}

#[test]
fn test_loopback_data_api() {
    let (profiles, document) = (registry(), petstore());
    let ctx = run(&profiles, &document, "LoopBackSwift", &["generateDataAPI=true"]);
    let ir = ctx.ir.as_ref().unwrap();

    let pets = ir.group("PetsAPI").unwrap();
    let paths: Vec<_> = pets.operations.iter().map(|o| o.path.as_deref()).collect();
    assert_eq!(
        paths,
        vec![None, None, Some("\\(petId)"), Some("\\(petId)"), Some("count")]
    );
    assert!(pets.summary.has_find && pets.summary.has_create && pets.summary.has_count);
    // integer maps to Int64, which LoopBack does not treat as primitive
    assert_eq!(pets.summary.count_return_type, "Int64");
    // the body-less delete returns the synthesized generic string
    assert_eq!(pets.summary.delete_return_type, "String");

    let store = ir.group("StoreAPI").unwrap();
    assert_eq!(store.operations[0].path.as_deref(), Some("order"));

    let emissions = emit(&ctx).unwrap();
    let data_api = emissions
        .iter()
        .find(|e| e.file_name == "DataAPI.swift")
        .unwrap();
    assert_eq!(data_api.folder, "LoopBackSwiftClient");
    assert_eq!(data_api.context["apis"].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_loopback_realm() {
    let (profiles, document) = (registry(), petstore());
    let ctx = run(&profiles, &document, "LoopBackSwift", &["useRealm=true"]);
    let ir = ctx.ir.as_ref().unwrap();

    for model in &ir.models {
        let id = model.id_property().unwrap();
        assert!(id.required, "{} id must be required", model.name);
        assert!(id.is_id);
        assert_eq!(id.default_value, "0");
    }
    assert!(!ctx.has_warnings());
}

#[test]
fn test_loopback_emissions() {
    let (profiles, document) = (registry(), petstore());
    let ctx = run(&profiles, &document, "LoopBackSwift", &["projectName=PetKit"]);

    insta::assert_snapshot!(listing(&emit(&ctx).unwrap()), @r"
    PetKit/Models/Pet.swift <- model.tera
    PetKit/Models/Category.swift <- model.tera
    PetKit/Models/Order.swift <- model.tera
    PetKit/APIs/PetsAPI.swift <- api.tera
    PetKit/APIs/StoreAPI.swift <- api.tera
    PetKit/Auth/AuthenticationMethod.swift <- AuthenticationMethod.tera
    PetKit/Auth/APIKey.swift <- APIKey.tera
    PetKit/Auth/RequestAuthenticator.swift <- RequestAuthenticator.tera
    PetKit/Util/API.swift <- BaseAPI.tera
    PetKit/Util/APIError.swift <- APIError.tera
    PetKit/Util/RxAlamofireObjectMapping.swift <- RxAlamofireObjectMapping.tera
    PetKit/Util/Primitives+URLEscapedString.swift <- Primitives+URLEscapedString.tera
    PetKit/Util/NSData+JSON.swift <- NSData+JSON.tera
    PetKit/Util/Int64+_ObjectiveCBridgeable.swift <- Int64+_ObjectiveCBridgeable.tera
    PetKit/Util/ISO8601ExtendedDateTransform.swift <- ISO8601ExtendedDateTransform.tera
    PetKit.podspec <- Podspec.tera
    LICENSE <- LICENSE.tera
    PetKit/Util/NSDate+toString.swift <- NSDate+toString.tera
    ");
}

#[test]
fn test_reserved_operation_id_aborts_run() {
    let profiles = registry();
    let document: Document = r#"{ "paths": { "/pets": { "get": { "operationId": "default" } } } }"#
        .parse()
        .unwrap();
    let profile = profiles.get("moya").unwrap();

    let err = Pipeline::new()
        .run(profile, &document, &Config::new())
        .unwrap_err();
    assert!(matches!(err, Error::ReservedOperationId { ref id, .. } if id == "default"));
}

#[test]
fn test_write_generated_tree() {
    let (profiles, document) = (registry(), petstore());
    let ctx = run(&profiles, &document, "LoopBackSwift", &[]);
    let registry = FileRegistry::render(&emit(&ctx).unwrap(), &ContextRenderer).unwrap();

    let (temp, stats) = write_to_temp(&registry).unwrap();
    assert_eq!(stats.written, 18);

    let pet = std::fs::read_to_string(temp.path().join("LoopBackSwiftClient/Models/Pet.swift")).unwrap();
    let context: serde_json::Value = serde_json::from_str(&pet).unwrap();
    assert_eq!(context["model"]["className"], "Pet");
    assert_eq!(context["projectLicense"], "The MIT License (MIT)");
}
