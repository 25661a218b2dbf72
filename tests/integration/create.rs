use crate::helpers::prelude::*;

#[test]
fn it_creates_a_project_in_the_current_dir() {
    let templates = create_templates();
    let dir = tempdir().build();

    binary()
        .arg_templates(templates.path())
        .arg_create()
        .arg("my-portlet")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(
            predicates::str::contains(format!(
                "Successfully created project my-portlet in {}",
                dir.canonical_path().display()
            ))
            .from_utf8(),
        );

    assert!(dir.exists("my-portlet/build.gradle"));
    assert!(dir.exists("my-portlet/gradlew"));
    assert!(!dir.exists("my-portlet/pom.xml"));
    assert!(!dir.exists("my-portlet/template.toml"));
    assert!(dir
        .read("my-portlet/bnd.bnd")
        .contains("Bundle-SymbolicName: my.portlet"));
    assert!(dir
        .read("my-portlet/src/main/java/my/portlet/portlet/MyPortletPortlet.java")
        .contains("public class MyPortletPortlet"));
}

#[cfg(unix)]
#[test]
fn generated_gradle_wrapper_is_executable() {
    use std::os::unix::fs::PermissionsExt;

    let templates = create_templates();
    let dir = tempdir().build();

    binary()
        .arg_templates(templates.path())
        .arg_create()
        .arg("foo")
        .current_dir(dir.path())
        .assert()
        .success();

    let mode = std::fs::metadata(dir.path().join("foo/gradlew"))
        .unwrap()
        .permissions()
        .mode();
    assert_ne!(mode & 0o111, 0);
}

#[test]
fn it_can_create_a_maven_project() {
    let templates = create_templates();
    let dir = tempdir().build();

    binary()
        .arg_templates(templates.path())
        .arg_create()
        .arg_build("maven")
        .arg("-c")
        .arg("Greeter")
        .arg("-p")
        .arg("com.acme.greeter")
        .arg("greeter-web")
        .current_dir(dir.path())
        .assert()
        .success();

    assert!(!dir.exists("greeter-web/build.gradle"));
    assert!(!dir.exists("greeter-web/gradlew"));
    assert!(dir
        .read("greeter-web/pom.xml")
        .contains("<artifactId>greeter-web</artifactId>"));
    assert!(dir.exists("greeter-web/src/main/java/com/acme/greeter/portlet/GreeterPortlet.java"));
}

#[test]
fn it_creates_into_an_explicit_dir() {
    let templates = create_templates();
    let dir = tempdir().build();

    binary()
        .arg_templates(templates.path())
        .arg_create()
        .arg_template("theme")
        .arg_dir("themes")
        .arg("blue-theme")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Successfully created project blue-theme").from_utf8());

    assert_eq!(
        dir.read("themes/blue-theme/package.json"),
        r#"{ "name": "blue-theme" }"#
    );
}

#[test]
fn it_needs_a_project_name() {
    let templates = create_templates();
    let dir = tempdir().build();

    binary()
        .arg_templates(templates.path())
        .arg_create()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("Create: SYNOPSIS").from_utf8());

    assert!(dir.is_empty());
}

#[test]
fn it_rejects_an_unknown_template() {
    let templates = create_templates();
    let dir = tempdir().build();

    binary()
        .arg_templates(templates.path())
        .arg_create()
        .arg_template("not-a-real-template")
        .arg("foo")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(
            predicates::str::contains("the template not-a-real-template is not in the list")
                .from_utf8(),
        );

    assert!(dir.is_empty());
}

#[test]
fn it_refuses_a_non_empty_destination() {
    let templates = create_templates();
    let dir = tempdir().file("foo/README.md", "keep me").build();

    binary()
        .arg_templates(templates.path())
        .arg_create()
        .arg("foo")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("foo is not empty or it is a file").from_utf8());

    assert_eq!(dir.read("foo/README.md"), "keep me");
    assert!(!dir.exists("foo/build.gradle"));
}

#[test]
fn it_refuses_a_file_in_the_way() {
    let templates = create_templates();
    let dir = tempdir().file("foo", "not a directory").build();

    binary()
        .arg_templates(templates.path())
        .arg_create()
        .arg("foo")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("foo is not empty or it is a file").from_utf8());

    assert_eq!(dir.read("foo"), "not a directory");
}

#[test]
fn it_fills_an_existing_empty_dir() {
    let templates = create_templates();
    let dir = tempdir().build();
    std::fs::create_dir(dir.path().join("foo")).unwrap();

    binary()
        .arg_templates(templates.path())
        .arg_create()
        .arg("foo")
        .current_dir(dir.path())
        .assert()
        .success();

    assert!(dir.exists("foo/build.gradle"));
}

#[test]
fn missing_default_template_is_fatal() {
    let templates = tempdir().build();
    let dir = tempdir().build();

    binary()
        .arg_templates(templates.path())
        .arg_create()
        .arg("foo")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("`mvc-portlet` not found").from_utf8());
}

#[test]
fn templates_dir_can_come_from_the_environment() {
    let templates = create_templates();
    let dir = tempdir().build();

    binary()
        .env("BLADE_TEMPLATES", templates.path())
        .arg_create()
        .arg_template("api")
        .arg("foo-api")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Successfully created project foo-api").from_utf8());

    assert!(dir.exists("foo-api"));
}

#[test]
fn host_bundle_flag_does_not_clash_with_help() {
    binary()
        .arg_create()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicates::str::contains("--hostbundlebsn")
                .and(predicates::str::contains("--listtemplates"))
                .from_utf8(),
        );
}

#[test]
fn request_errors_survive_a_silenced_logger() {
    let templates = create_templates();
    let dir = tempdir().build();

    binary()
        .env("RUST_LOG", "off")
        .arg_templates(templates.path())
        .arg_create()
        .current_dir(dir.path())
        .assert()
        .code(1)
        .stderr(predicates::str::contains("Create: SYNOPSIS").from_utf8());
}
