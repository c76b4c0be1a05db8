#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    Latest,
    Random,
}

#[derive(Debug, Clone)]
pub struct ViewSettings {
    pub sort_mode: SortMode,
    pub bookmarked_only: bool,
    pub search: String, // Overview search term; the main projection ignores it
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self { sort_mode: SortMode::Latest, bookmarked_only: false, search: String::new() }
    }
}
