use crate::helpers::prelude::*;

use blade::{Blade, BuildType, CreateCommand, CreateOptions, LiquidProjectTemplates, ProjectTemplates};

#[test]
fn it_allows_create_calls_through_the_library() {
    let cwd_before = std::env::current_dir().unwrap();

    let templates = create_templates();
    let dir = tempdir().build();
    let engine = LiquidProjectTemplates::new(templates.path());

    let options = CreateOptions {
        name: Some(String::from("foobar-portlet")),
        build: BuildType::Maven,
        packagename: Some(String::from("com.acme.foobar")),
        ..Default::default()
    };

    let mut blade = Blade::with_output(dir.path(), Vec::new());
    CreateCommand::new(options)
        .execute(&mut blade, &engine)
        .expect("cannot create project");

    assert!(blade.errors().is_empty());
    assert_eq!(
        String::from_utf8(blade.into_output()).unwrap(),
        format!(
            "Successfully created project foobar-portlet in {}\n",
            dir.path().display()
        )
    );
    assert!(dir.read("foobar-portlet/pom.xml").contains("foobar-portlet"));
    assert!(dir.exists("foobar-portlet/src/main/java/com/acme/foobar/portlet/FoobarPortletPortlet.java"));

    let cwd_after = std::env::current_dir().unwrap();
    assert!(cwd_after == cwd_before);
}

#[test]
fn request_errors_are_collected_instead_of_returned() {
    let templates = create_templates();
    let dir = tempdir().build();
    let engine = LiquidProjectTemplates::new(templates.path());

    let mut blade = Blade::with_output(dir.path(), Vec::new());
    CreateCommand::new(CreateOptions::default())
        .execute(&mut blade, &engine)
        .unwrap();

    let messages: Vec<String> = blade.errors().messages().collect();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].starts_with("Create: SYNOPSIS"));
    assert!(dir.is_empty());
}

#[test]
fn the_catalog_is_available_through_the_trait() {
    let templates = create_templates();
    let engine = LiquidProjectTemplates::new(templates.path());

    let names: Vec<String> = engine.templates().unwrap().into_keys().collect();
    assert_eq!(names, vec!["api", "mvc-portlet", "theme"]);
}
