use indicatif::{ProgressBar, ProgressStyle};

pub fn spinner() -> ProgressBar {
    let style = ProgressStyle::default_spinner()
        .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
        .template("{spinner:.green} {msg}")
        .expect("spinner template is valid");
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(style);
    spinner
}
