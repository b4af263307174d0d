//! Extractor tests
//!
//! Document extraction through an injected converter, and spreadsheet
//! extraction over in-memory cells and the `posts.xlsx` fixture.

mod test_document;
mod test_spreadsheet;
