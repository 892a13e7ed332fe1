use std::fmt;

/// One page: a borrowed run of consecutive items
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Page<'a, T> {
    items: &'a [T],
}

impl<'a, T> Page<'a, T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'a, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.items
    }
}

impl<'a, T> IntoIterator for Page<'a, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Page<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for item in self.items {
            write!(f, "{}", item)?;
        }
        Ok(())
    }
}

/// Fixed-size pages over a slice; the last page may be shorter.
#[derive(Debug, Clone)]
pub struct Paginator<'a, T> {
    pages: Vec<Page<'a, T>>,
}

impl<'a, T> Paginator<'a, T> {
    /// A `page_size` of zero is treated as one.
    pub fn new(items: &'a [T], page_size: usize) -> Self {
        Paginator {
            pages: items.chunks(page_size.max(1))
                .map(|items| Page { items })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Page<'a, T>> {
        self.pages.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Page<'a, T>> {
        self.pages.iter()
    }
}

impl<'a, T> IntoIterator for Paginator<'a, T> {
    type Item = Page<'a, T>;
    type IntoIter = std::vec::IntoIter<Page<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.into_iter()
    }
}

pub fn paginate<T>(items: &[T], page_size: usize) -> Paginator<'_, T> {
    Paginator::new(items, page_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::DocId;
    use crate::search::results::ScoredDocument;

    #[test]
    fn splits_into_pages() {
        let items: Vec<i32> = (1..=7).collect();
        let pages = paginate(&items, 3);
        assert_eq!(pages.len(), 3);
        let sizes: Vec<usize> = pages.iter().map(|p| p.len()).collect();
        assert_eq!(sizes, vec![3, 3, 1]);
        assert_eq!(pages.get(2).unwrap().as_slice(), &[7]);
    }

    #[test]
    fn exact_multiple_has_no_trailing_page() {
        let items = [1, 2, 3, 4];
        assert_eq!(paginate(&items, 2).len(), 2);
    }

    #[test]
    fn empty_input_and_zero_size() {
        let empty: [u8; 0] = [];
        assert!(paginate(&empty, 3).is_empty());
        assert_eq!(paginate(&[1, 2], 0).len(), 2);
    }

    #[test]
    fn pages_display_their_items() {
        let hits = [
            ScoredDocument::new(DocId(2), 0.5, 1),
            ScoredDocument::new(DocId(4), 0.25, 3),
        ];
        let page = paginate(&hits, 2).into_iter().next().unwrap();
        assert_eq!(
            page.to_string(),
            "{ document_id = 2, relevance = 0.5, rating = 1 }{ document_id = 4, relevance = 0.25, rating = 3 }"
        );
    }
}
