use indexmap::{IndexMap, IndexSet};

/// User-facing errors collected while a command runs, grouped by the label
/// of the command that raised them.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ErrorLog(IndexMap<String, IndexSet<String>>);

impl ErrorLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_errors<I, S>(&mut self, prefix: &str, errors: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0
            .entry(prefix.to_string())
            .or_default()
            .extend(errors.into_iter().map(Into::into));
    }

    pub fn add_error(&mut self, prefix: &str, error: impl Into<String>) {
        self.add_errors(prefix, [error]);
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(IndexSet::is_empty)
    }

    pub fn get(&self, prefix: &str) -> Option<&IndexSet<String>> {
        self.0.get(prefix)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &IndexSet<String>)> {
        self.0.iter().map(|(prefix, errors)| (prefix.as_str(), errors))
    }

    /// Every error rendered as `<prefix>: <message>`, in the order it was added
    pub fn messages(&self) -> impl Iterator<Item = String> + '_ {
        self.iter().flat_map(|(prefix, errors)| {
            errors.iter().map(move |error| format!("{prefix}: {error}"))
        })
    }
}
