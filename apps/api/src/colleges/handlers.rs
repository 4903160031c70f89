use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extract::AppQuery;
use crate::models::college::College;
use crate::state::AppState;

pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const MAX_PAGE_SIZE: usize = 100;

#[derive(Debug, Default, Deserialize)]
pub struct CollegeQuery {
    pub course: Option<String>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct CollegePage {
    /// Total matches across all pages.
    pub count: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub results: Vec<College>,
}

/// Slices `items` into the requested page. Page numbers start at 1; a page past
/// the end is `NotFound` (page 1 of an empty list is fine). Oversized page sizes
/// are capped at `MAX_PAGE_SIZE`.
pub fn paginate(
    items: Vec<&College>,
    page: Option<usize>,
    page_size: Option<usize>,
) -> Result<CollegePage, AppError> {
    let page_size = match page_size {
        None => DEFAULT_PAGE_SIZE,
        Some(0) => {
            return Err(AppError::validation(
                "page_size",
                "page_size must be at least 1",
            ))
        }
        Some(n) => n.min(MAX_PAGE_SIZE),
    };
    let page = match page {
        None => 1,
        Some(0) => return Err(AppError::validation("page", "page must be at least 1")),
        Some(n) => n,
    };

    let count = items.len();
    let total_pages = count.div_ceil(page_size).max(1);
    if page > total_pages {
        return Err(AppError::NotFound(format!(
            "Page {page} is out of range (last page is {total_pages})"
        )));
    }

    let results = items
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .cloned()
        .collect();

    Ok(CollegePage {
        count,
        page,
        page_size,
        total_pages,
        results,
    })
}

/// GET /api/v1/colleges?course=&page=&page_size=
pub async fn handle_list_colleges(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<CollegeQuery>,
) -> Result<Json<CollegePage>, AppError> {
    let matches = state.colleges.filter(query.course.as_deref());
    Ok(Json(paginate(matches, query.page, query.page_size)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colleges(n: usize) -> Vec<College> {
        (1..=n)
            .map(|i| College {
                id: i as i32,
                name: format!("College {i:03}"),
                city: "Pune".to_string(),
                state: "Maharashtra".to_string(),
                courses_offered: vec!["bsc".to_string()],
            })
            .collect()
    }

    #[test]
    fn test_default_page_size_and_last_partial_page() {
        let all = colleges(45);
        let first = paginate(all.iter().collect(), None, None).unwrap();
        assert_eq!(first.count, 45);
        assert_eq!(first.page, 1);
        assert_eq!(first.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.results.len(), 20);
        assert_eq!(first.results[0].id, 1);

        let last = paginate(all.iter().collect(), Some(3), None).unwrap();
        assert_eq!(last.results.len(), 5);
        assert_eq!(last.results[0].id, 41);
    }

    #[test]
    fn test_page_size_is_capped() {
        let all = colleges(150);
        let page = paginate(all.iter().collect(), None, Some(500)).unwrap();
        assert_eq!(page.page_size, MAX_PAGE_SIZE);
        assert_eq!(page.results.len(), MAX_PAGE_SIZE);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn test_page_bounds() {
        let all = colleges(10);
        assert!(matches!(
            paginate(all.iter().collect(), Some(2), None),
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            paginate(all.iter().collect(), Some(0), None),
            Err(AppError::Validation { ref field, .. }) if field == "page"
        ));
        assert!(matches!(
            paginate(all.iter().collect(), None, Some(0)),
            Err(AppError::Validation { ref field, .. }) if field == "page_size"
        ));
    }

    #[test]
    fn test_empty_list_has_one_empty_page() {
        let page = paginate(Vec::new(), None, None).unwrap();
        assert_eq!(page.count, 0);
        assert_eq!(page.total_pages, 1);
        assert!(page.results.is_empty());
    }
}
