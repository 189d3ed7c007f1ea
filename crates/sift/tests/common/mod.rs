//! Shared catalog fixture for integration tests.
#![allow(dead_code)]

use sift::{prelude::*, types::RelationshipId};

sift::attribute_kind! {
    pub enum BookAttr {
        Title => "title",
        Year => "year",
        Price => "price",
        InPrint => "in_print",
        Author => "author",
        Series => "series",
    }
}

///
/// Book
///

#[derive(Clone, Debug, PartialEq)]
pub struct Book {
    pub isbn: String,
    pub title: String,
    pub year: i64,
    pub price: f64,
    pub in_print: bool,
    pub author: RelationshipId,
    pub series: Option<String>,
}

impl EntityKind for Book {
    type Key = String;
    type Attribute = BookAttr;

    fn id(&self) -> &String {
        &self.isbn
    }

    fn attribute_value(&self, attribute: BookAttr) -> Option<IndexedValue> {
        match attribute {
            BookAttr::Title => Some(self.title.as_str().into()),
            BookAttr::Year => Some(self.year.into()),
            BookAttr::Price => IndexedValue::try_from(self.price).ok(),
            BookAttr::InPrint => Some(self.in_print.into()),
            BookAttr::Author => Some(self.author.clone().into()),
            BookAttr::Series => IndexedValue::optional(self.series.clone()),
        }
    }
}

fn book(isbn: &str, title: &str, year: i64, price: f64, author: &str) -> Book {
    Book {
        isbn: isbn.to_string(),
        title: title.to_string(),
        year,
        price,
        in_print: true,
        author: RelationshipId::new(author),
        series: None,
    }
}

pub fn catalog() -> Vec<Book> {
    let mut dune = book("isbn-3", "Dune", 1965, 9.5, "herbert");
    dune.series = Some("Dune".to_string());

    let mut messiah = book("isbn-5", "Dune Messiah", 1969, 8.0, "herbert");
    messiah.series = Some("Dune".to_string());

    let mut solaris = book("isbn-2", "Solaris", 1961, 11.0, "lem");
    solaris.in_print = false;

    vec![
        book("isbn-1", "Neuromancer", 1984, 10.0, "gibson"),
        solaris,
        dune,
        book("isbn-4", "Hyperion", 1989, 12.5, "simmons"),
        messiah,
    ]
}

pub fn titles(books: &[&Book]) -> Vec<String> {
    books.iter().map(|book| book.title.clone()).collect()
}
