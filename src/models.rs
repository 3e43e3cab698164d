use serde::{Deserialize, Deserializer, Serialize};

/// A catalog record as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "year_as_text")]
    pub published_year: String,
    pub isbn: String,
}

impl Book {
    /// Editable copy of this record
    pub fn to_draft(&self) -> BookDraft {
        BookDraft {
            title: self.title.clone(),
            author: self.author.clone(),
            description: self.description.clone(),
            published_year: self.published_year.clone(),
            isbn: self.isbn.clone(),
        }
    }
}

/// The five editable fields of a book, sent as the body of create and update requests
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub description: String,
    pub published_year: String,
    pub isbn: String,
}

/// Form fields of a book, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BookField {
    Title,
    Isbn,
    PublishedYear,
    Author,
    Description,
}

impl BookField {
    pub const ALL: [BookField; 5] = [
        BookField::Title,
        BookField::Isbn,
        BookField::PublishedYear,
        BookField::Author,
        BookField::Description,
    ];

    /// Wire name of the field
    pub fn key(&self) -> &'static str {
        match self {
            BookField::Title => "title",
            BookField::Isbn => "isbn",
            BookField::PublishedYear => "publishedYear",
            BookField::Author => "author",
            BookField::Description => "description",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BookField::Title => "Title",
            BookField::Isbn => "ISBN",
            BookField::PublishedYear => "Published Year",
            BookField::Author => "Author",
            BookField::Description => "Description",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            BookField::Title => "Book title",
            BookField::Isbn => "ISBN",
            BookField::PublishedYear => "Select Published Year",
            BookField::Author => "Author",
            BookField::Description => "Description",
        }
    }

    pub fn next(&self) -> BookField {
        let idx = self.index();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> BookField {
        let idx = self.index();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }
}

impl BookDraft {
    pub fn get(&self, field: BookField) -> &str {
        match field {
            BookField::Title => &self.title,
            BookField::Isbn => &self.isbn,
            BookField::PublishedYear => &self.published_year,
            BookField::Author => &self.author,
            BookField::Description => &self.description,
        }
    }

    pub fn get_mut(&mut self, field: BookField) -> &mut String {
        match field {
            BookField::Title => &mut self.title,
            BookField::Isbn => &mut self.isbn,
            BookField::PublishedYear => &mut self.published_year,
            BookField::Author => &mut self.author,
            BookField::Description => &mut self.description,
        }
    }

    pub fn is_empty(&self) -> bool {
        BookField::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

/// One page of the catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPage {
    pub books: Vec<Book>,
    pub total_pages: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Query string of `GET /books`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    pub page: u32,
    pub limit: u32,
    pub sort_by: String,
    pub order: SortOrder,
}

impl ListQuery {
    /// Title-ascending page query; an empty search term is dropped
    pub fn new(search: &str, page: u32, limit: u32) -> Self {
        Self {
            search: if search.is_empty() { None } else { Some(search.to_string()) },
            page,
            limit,
            sort_by: "title".to_string(),
            order: SortOrder::Asc,
        }
    }
}

/// Accepts `"1999"` or `1999`
fn year_as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Year {
        Text(String),
        Number(i64),
    }

    Ok(match Option::<Year>::deserialize(deserializer)? {
        Some(Year::Text(s)) => s,
        Some(Year::Number(n)) => n.to_string(),
        None => String::new(),
    })
}
