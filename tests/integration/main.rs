mod helpers;

mod create;
mod list_templates;
mod public_api;
