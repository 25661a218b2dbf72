use crate::helpers::project::Project;
use crate::helpers::project_builder::tempdir;


pub fn create_templates() -> Project {
    tempdir().with_default_templates().build()
}
