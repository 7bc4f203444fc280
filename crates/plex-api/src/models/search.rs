use serde::{Deserialize, Serialize};

/// Plex metadata type ids used by the `type` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    Movie,
    Show,
    Season,
    Episode,
    Artist,
    Album,
    Track,
    Collection,
}

impl SearchType {
    pub fn type_id(self) -> u8 {
        match self {
            SearchType::Movie => 1,
            SearchType::Show => 2,
            SearchType::Season => 3,
            SearchType::Episode => 4,
            SearchType::Artist => 8,
            SearchType::Album => 9,
            SearchType::Track => 10,
            SearchType::Collection => 18,
        }
    }
}

/// One library filter, e.g. `genre=Drama,Comedy` or `resolution!=sd`.
///
/// Values within a filter OR together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterRequest {
    pub field: String,
    #[serde(default)]
    pub negate: bool,
    pub values: Vec<String>,
}

impl FilterRequest {
    pub fn new(field: impl Into<String>, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            field: field.into(),
            negate: false,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn negated(mut self) -> Self {
        self.negate = true;
        self
    }

    /// `(key, value)` query pair for this filter.
    pub fn query_pair(&self) -> (String, String) {
        let key = if self.negate {
            format!("{}!", self.field)
        } else {
            self.field.clone()
        };
        (key, self.values.join(","))
    }
}

/// Editable collection fields. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionModel {
    pub rating_key: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub title_sort: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub content_rating: Option<String>,
}

/// Parameters of a library section search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibrarySearch {
    pub library_key: String,
    pub search_type: SearchType,
    /// Free-text title match.
    pub title: Option<String>,
    /// `column:dir`, e.g. `addedAt:desc` or `titleSort:asc`.
    pub sort: Option<String>,
    pub filters: Vec<FilterRequest>,
    pub start: i64,
    pub count: i64,
}

impl LibrarySearch {
    pub fn new(library_key: impl Into<String>, search_type: SearchType) -> Self {
        Self {
            library_key: library_key.into(),
            search_type,
            title: None,
            sort: None,
            filters: Vec::new(),
            start: 0,
            count: 100,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn filter(mut self, filter: FilterRequest) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn window(mut self, start: i64, count: i64) -> Self {
        self.start = start;
        self.count = count;
        self
    }
}
