/// Query string for a list request. Parameters are sent in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    params: Vec<(String, String)>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `key=value`. Filters the server does not know are ignored there.
    pub fn filter(mut self, key: &str, value: impl ToString) -> Self {
        self.params.push((key.to_string(), value.to_string()));
        self
    }

    /// Add `key=value` only when a value is given.
    pub fn filter_opt<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.filter(key, value),
            None => self,
        }
    }

    pub fn page(self, page: u32) -> Self {
        self.filter("page", page)
    }

    pub fn search(self, term: &str) -> Self {
        self.filter("search", term)
    }

    pub fn ordering(self, field: &str) -> Self {
        self.filter("ordering", field)
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}
