use pretty_assertions::assert_eq;
use refdoc::{
    flatten, ClassRecord, FunctionRecord, MethodRecord, Node, Page, Parameter, Policy, Reference,
    Table,
};

fn fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("failed to read {}: {}", path, e))
}

// -- pages --

#[test]
fn page_from_json_matches_expected() {
    let page = Page::from_json(&fixture("animals.json")).unwrap();
    let expected = fixture("animals.expected.adoc");
    assert_eq!(page.render(), expected.trim_end());
}

#[test]
fn page_render_is_repeatable() {
    let page = Page::from_json(&fixture("animals.json")).unwrap();
    assert_eq!(page.render(), page.render());
}

#[test]
fn hidden_members_never_reach_the_page() {
    let page = Page::from_json(&fixture("animals.json")).unwrap();
    assert!(!page.render().contains("__repr__"));
}

#[test]
fn constructor_template_from_fixture() {
    let page = Page::from_json(&fixture("animals.json")).unwrap();
    let templates = page.templates();
    let (_, template) = templates
        .iter()
        .find(|(name, _)| name == "Cat.__init__")
        .unwrap();
    assert_eq!(template, fixture("animals.templates.adoc").trim_end());
}

#[test]
fn invalid_page_reports_the_record() {
    let err = Page::from_json(
        r#"{ "reference": "m", "functions": [{ "identifier": "f", "parameters": [{ "name": "a", "optional": true }, { "name": "b" }] }] }"#,
    )
    .unwrap_err();
    assert!(format!("{:#}", err).contains("invalid function `f`"));
}

#[test]
fn unknown_fields_are_rejected() {
    assert!(Page::from_json(r#"{ "reference": "m", "modules": [] }"#).is_err());
}

// -- records built in code --

#[test]
fn hello_without_parameters() {
    let hello = FunctionRecord::new("hello", "functions", vec![], "", "greets the user").unwrap();

    assert_eq!(hello.docstring_template(), "<DESCRIPTION>\n\n<EXPLANATION>");
    assert_eq!(hello.table_item(), vec!["`*hello*`", "greets the user"]);
    assert_eq!(hello.shape().generate(), vec!["`functions.*hello*()`"]);
}

#[test]
fn hello_with_parameter() {
    let params = Parameter::from_parallel(&["name"], &["str"], 0).unwrap();
    let hello = FunctionRecord::new("hello", "functions", params, "", "greets the user").unwrap();

    assert_eq!(hello.shape().generate(), vec!["`functions.*hello*(_name_)`"]);
    assert_eq!(hello.parameter_optional(), vec![false]);
}

#[test]
fn method_tables_for_constructed_class() {
    let policy = Policy::default();
    let method = |name: &str, return_type: &str| {
        let record = FunctionRecord::new(
            name,
            "Cat",
            vec![Parameter::required("self", "")],
            return_type,
            "",
        )
        .unwrap();
        MethodRecord::from_function(record, &policy)
    };
    let class = ClassRecord::new(
        "Cat",
        "classes",
        "cat class",
        None,
        vec![method("rename", ""), method("age_human_years", "int"), method("introduce", "")],
    );

    let tables: Vec<Table> = class
        .method_tables()
        .into_iter()
        .filter_map(|node| match node {
            Node::Table(table) => Some(table),
            _ => None,
        })
        .collect();

    assert_eq!(tables.len(), 2);
    assert_eq!(tables[0].rows().len(), 2);
    assert_eq!(tables[0].rows()[0][0], "`*rename*`");
    assert_eq!(tables[0].rows()[1][0], "`*introduce*`");
    assert_eq!(tables[1].rows(), &[vec!["`_int_`".to_string(), "`*age_human_years*`".to_string(), String::new()]]);
}

#[test]
fn flatten_of_concatenated_details() {
    let a = FunctionRecord::new("a", "m", vec![], "", "first").unwrap().details();
    let b = FunctionRecord::new("b", "m", vec![], "int", "").unwrap().details();
    let joined: Vec<Node> = a.iter().chain(&b).cloned().collect();

    let separate = format!(
        "{}{}",
        refdoc::flatten_unstripped(&a),
        refdoc::flatten_unstripped(&b)
    );
    assert_eq!(flatten(&joined), separate.trim());
}
