//! In-memory filter/sort/paginate over search candidates.
//!
//! Pure functions, no side effects: the provider hands over a candidate list
//! and gets back one page plus the pre-pagination total. The query text
//! itself does not narrow the candidate list; candidates are already the
//! upstream answer for the query.

use std::cmp::Ordering;

use crate::models::video::{ResultItem, SearchPage, SearchRequest, SortMode};

pub fn execute(request: &SearchRequest, candidates: Vec<ResultItem>) -> SearchPage {
    let mut filtered = candidates;

    if let Some(genre) = &request.genre {
        filtered.retain(|v| &v.genre == genre);
    }
    if let Some(year) = &request.year {
        filtered.retain(|v| v.year.to_string() == *year);
    }

    // sort_by is stable, so ties keep their original list order
    match request.sort {
        SortMode::Newest => filtered.sort_by(|a, b| b.year.cmp(&a.year)),
        SortMode::Rating => {
            filtered.sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal));
        }
        SortMode::Relevance => filtered.sort_by(|a, b| b.views.cmp(&a.views)),
    }

    let total = filtered.len() as u64;
    let offset = request.page.saturating_sub(1) as usize * request.page_size as usize;
    let videos: Vec<ResultItem> = filtered
        .into_iter()
        .skip(offset)
        .take(request.page_size as usize)
        .collect();

    SearchPage {
        videos,
        total,
        page: request.page,
        page_size: request.page_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, genre: &str, year: i32, rating: f32, views: i64) -> ResultItem {
        ResultItem {
            id,
            title: format!("视频{id}"),
            genre: genre.to_string(),
            genre_name: genre.to_string(),
            year,
            rating,
            views,
            duration: "120分钟".to_string(),
            description: String::new(),
            thumbnail: String::new(),
            play_url: format!("https://example.com/play/{id}"),
        }
    }

    fn candidates() -> Vec<ResultItem> {
        vec![
            item(1, "scifi", 2014, 9.3, 128_000),
            item(2, "scifi", 2010, 8.8, 95_000),
            item(3, "action", 2021, 6.7, 182_000),
            item(4, "romance", 2010, 8.0, 67_000),
            item(5, "scifi", 2023, 7.9, 203_000),
        ]
    }

    fn request(page: u32, page_size: u32) -> SearchRequest {
        SearchRequest {
            query: "测试".to_string(),
            page,
            page_size,
            genre: None,
            year: None,
            sort: SortMode::Relevance,
        }
    }

    #[test]
    fn test_genre_filter_counts_all_matches() {
        let mut req = request(1, 2);
        req.genre = Some("scifi".to_string());

        let page = execute(&req, candidates());
        assert_eq!(page.total, 3);
        assert_eq!(page.videos.len(), 2);
        assert!(page.videos.iter().all(|v| v.genre == "scifi"));
    }

    #[test]
    fn test_year_filter_compares_as_string() {
        let mut req = request(1, 20);
        req.year = Some("2010".to_string());

        let page = execute(&req, candidates());
        assert_eq!(page.total, 2);
        assert!(page.videos.iter().all(|v| v.year == 2010));
    }

    #[test]
    fn test_sort_newest_is_non_increasing() {
        let mut req = request(1, 20);
        req.sort = SortMode::Newest;

        let page = execute(&req, candidates());
        let years: Vec<i32> = page.videos.iter().map(|v| v.year).collect();
        assert!(years.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_sort_newest_keeps_tie_order() {
        let mut req = request(1, 20);
        req.sort = SortMode::Newest;

        // ids 2 and 4 share year 2010 and must keep their relative order
        let page = execute(&req, candidates());
        let tied: Vec<i64> = page
            .videos
            .iter()
            .filter(|v| v.year == 2010)
            .map(|v| v.id)
            .collect();
        assert_eq!(tied, vec![2, 4]);
    }

    #[test]
    fn test_sort_rating_is_non_increasing() {
        let mut req = request(1, 20);
        req.sort = SortMode::Rating;

        let page = execute(&req, candidates());
        let ratings: Vec<f32> = page.videos.iter().map(|v| v.rating).collect();
        assert!(ratings.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_default_sort_orders_by_views() {
        let page = execute(&request(1, 20), candidates());
        let views: Vec<i64> = page.videos.iter().map(|v| v.views).collect();
        assert!(views.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(page.videos[0].id, 5);
    }

    #[test]
    fn test_page_size_caps_item_count() {
        let page = execute(&request(1, 2), candidates());
        assert_eq!(page.videos.len(), 2);
        assert_eq!(page.total, 5);
    }

    #[test]
    fn test_out_of_range_page_is_empty_with_total() {
        let page = execute(&request(99, 20), candidates());
        assert!(page.videos.is_empty());
        assert_eq!(page.total, 5);
        assert_eq!(page.page, 99);
    }

    #[test]
    fn test_second_page_continues_where_first_ended() {
        let first = execute(&request(1, 2), candidates());
        let second = execute(&request(2, 2), candidates());

        assert_eq!(first.videos.len(), 2);
        assert_eq!(second.videos.len(), 2);
        assert_ne!(first.videos[0].id, second.videos[0].id);
    }
}
