use crate::helpers::prelude::*;

#[test]
fn it_lists_templates_sorted_and_aligned() {
    let templates = create_templates();
    let dir = tempdir().build();

    let expected = format!(
        "api{}Creates an API module.\nmvc-portlet{}Creates an MVC portlet module.\ntheme{}Creates a theme project.\n",
        " ".repeat(10),
        " ".repeat(2),
        " ".repeat(8),
    );

    binary()
        .arg_templates(templates.path())
        .arg_create()
        .arg_list()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::diff(expected).from_utf8());

    assert!(dir.is_empty());
}

#[test]
fn listing_ignores_every_other_option() {
    let templates = create_templates();
    let dir = tempdir().file("foo/README.md", "taken").build();

    binary()
        .arg_templates(templates.path())
        .arg_create()
        .arg("-l")
        .arg_template("not-a-real-template")
        .arg("foo")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(
            predicates::str::contains("mvc-portlet")
                .and(predicates::str::contains("not in the list").not())
                .from_utf8(),
        );
}

#[test]
fn directories_without_a_template_config_are_not_listed() {
    let templates = tempdir()
        .with_default_templates()
        .file("drafts/notes.txt", "not a template")
        .build();

    binary()
        .arg_templates(templates.path())
        .arg_create()
        .arg_list()
        .assert()
        .success()
        .stdout(predicates::str::contains("drafts").not().from_utf8());
}

#[test]
fn missing_catalog_is_reported() {
    let dir = tempdir().build();

    binary()
        .arg_templates(dir.path().join("nowhere"))
        .arg_create()
        .arg_list()
        .assert()
        .failure()
        .stderr(predicates::str::contains("does not exist").from_utf8());
}
