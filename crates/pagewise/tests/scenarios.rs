//! Paging scenarios an API handler runs into, through both the typed
//! parameters and the query-string adapter.

use std::num::NonZeroUsize;

use pagewise::{
    MockEnv, Number, PageConfig, PageEngine, PageParams, Pageable, Timestamp, Value,
    MAX_PAGE_SIZE_ENV,
};
use serde_json::{json, Value as Json};

#[derive(Debug, Clone, PartialEq)]
struct Post {
    id: u64,
    name: String,
    published: Timestamp,
}

impl Pageable for Post {
    fn field(&self, name: &str) -> Option<Value<'_>> {
        match name {
            "id" => Some(Value::Number(Number::U64(self.id))),
            "name" => Some(Value::String(&self.name)),
            "published" => Some(Value::Timestamp(self.published)),
            _ => None,
        }
    }
}

fn posts(n: u64) -> Vec<Post> {
    (0..n)
        .map(|id| Post {
            id,
            name: format!("Post{id}"),
            published: Timestamp::from_secs(1_700_000_000 - id as i64),
        })
        .collect()
}

fn json_posts(n: u64) -> Vec<Json> {
    (0..n)
        .map(|id| json!({"id": id, "name": format!("Post{id}")}))
        .collect()
}

fn page_len(n: u64, params: PageParams) -> usize {
    PageEngine::new(posts(n), &params, &PageConfig::default())
        .unwrap()
        .results()
        .len()
}

fn query_len(n: u64, query: &str, config: &PageConfig) -> usize {
    let params = PageParams::from_query(query).unwrap();
    PageEngine::new(json_posts(n), &params, config)
        .unwrap()
        .into_page()
        .results
        .len()
}

// ============================================================================
// Page lengths
// ============================================================================

#[test]
fn no_params_returns_everything() {
    let engine = PageEngine::new(posts(40), &PageParams::default(), &PageConfig::default()).unwrap();
    assert_eq!(engine.results(), posts(40).as_slice());
    assert_eq!(engine.page_meta(), None);
}

#[test]
fn first_page_uses_default_size() {
    assert_eq!(page_len(40, PageParams::new().offset(1)), 25);
}

#[test]
fn second_page_holds_remainder() {
    assert_eq!(page_len(40, PageParams::new().offset(2)), 15);
}

#[test]
fn negative_offset_is_first_page() {
    assert_eq!(page_len(40, PageParams::new().offset(-1)), 25);
}

#[test]
fn offset_past_last_page_is_empty() {
    let engine =
        PageEngine::new(posts(40), &PageParams::new().offset(3), &PageConfig::default()).unwrap();
    assert!(engine.results().is_empty());
    assert_eq!(engine.page_meta().unwrap().record_count, 0);
}

#[test]
fn explicit_size() {
    assert_eq!(page_len(40, PageParams::new().size(10)), 10);
}

#[test]
fn negative_size_uses_default() {
    assert_eq!(page_len(40, PageParams::new().size(-10)), 25);
}

#[test]
fn size_above_record_count() {
    assert_eq!(page_len(40, PageParams::new().size(100)), 40);
}

#[test]
fn size_capped_by_max_page_size() {
    let env = MockEnv::new().with_var(MAX_PAGE_SIZE_ENV, "10");
    let config = PageConfig::from_env_reader(&env).unwrap();

    let engine = PageEngine::new(posts(100), &PageParams::new().size(100), &config).unwrap();
    assert_eq!(engine.results().len(), 10);
    assert_eq!(engine.page_meta().unwrap().size, 10);
    assert_eq!(engine.page_meta().unwrap().total_pages, 10);
}

#[test]
fn zero_size_activates_paging_with_default() {
    let engine =
        PageEngine::new(posts(40), &PageParams::new().size(0), &PageConfig::default()).unwrap();
    let meta = engine.page_meta().unwrap();
    assert_eq!(meta.size, 25);
    assert_eq!(meta.offset, None);
    assert_eq!(engine.results().len(), 25);
}

// ============================================================================
// Sorting
// ============================================================================

#[test]
fn reverse_sort_by_id() {
    let engine = PageEngine::new(
        posts(20),
        &PageParams::new().sort_desc("id"),
        &PageConfig::default(),
    )
    .unwrap();

    assert_eq!(engine.results().len(), 20);
    assert_eq!(engine.results().last().unwrap().name, "Post0");
}

#[test]
fn reverse_sort_then_page() {
    let engine = PageEngine::new(
        posts(20),
        &PageParams::new().sort_desc("id").offset(1).size(10),
        &PageConfig::default(),
    )
    .unwrap();

    let results = engine.results();
    assert_eq!(results.len(), 10);
    assert_eq!(results[0].name, "Post19");
    assert_eq!(results[9].name, "Post10");
}

#[test]
fn second_page_of_sorted_collection_is_global_block() {
    let engine = PageEngine::new(
        posts(20),
        &PageParams::new().sort_desc("id").offset(2).size(10),
        &PageConfig::default(),
    )
    .unwrap();

    let ids: Vec<u64> = engine.results().iter().map(|post| post.id).collect();
    assert_eq!(ids, (0..10).rev().collect::<Vec<_>>());
}

#[test]
fn sort_by_timestamp() {
    // Later ids were published earlier.
    let engine = PageEngine::new(
        posts(5),
        &PageParams::new().sort_asc("published"),
        &PageConfig::default(),
    )
    .unwrap();

    assert_eq!(engine.results()[0].id, 4);
}

#[test]
fn sort_by_string_is_lexicographic() {
    let engine = PageEngine::new(
        posts(12),
        &PageParams::new().sort_asc("name").size(3),
        &PageConfig::default(),
    )
    .unwrap();

    let names: Vec<&str> = engine.results().iter().map(|post| post.name.as_str()).collect();
    assert_eq!(names, vec!["Post0", "Post1", "Post10"]);
}

#[test]
fn empty_sort_field_leaves_order() {
    let params = PageParams {
        sort_field: Some(String::new()),
        sort_descending: true,
        ..PageParams::default()
    };
    let engine = PageEngine::new(posts(5), &params, &PageConfig::default()).unwrap();
    assert_eq!(engine.results(), posts(5).as_slice());
}

// ============================================================================
// Query strings and JSON records
// ============================================================================

#[test]
fn query_string_scenarios() {
    let config = PageConfig::default();

    assert_eq!(query_len(40, "", &config), 40);
    assert_eq!(query_len(40, "page%5Boffset%5D=1", &config), 25);
    assert_eq!(query_len(40, "page%5Boffset%5D=2", &config), 15);
    assert_eq!(query_len(40, "page%5Boffset%5D=-1", &config), 25);
    assert_eq!(query_len(40, "page%5Boffset%5D=3", &config), 0);
    assert_eq!(query_len(40, "page%5Bsize%5D=10", &config), 10);
    assert_eq!(query_len(40, "page%5Bsize%5D=-10", &config), 25);
    assert_eq!(query_len(40, "page%5Bsize%5D=100", &config), 40);
    assert_eq!(query_len(100, "", &config), 100);

    let capped = PageConfig::default().with_max_page_size(NonZeroUsize::new(10).unwrap());
    assert_eq!(query_len(100, "page%5Bsize%5D=100", &capped), 10);
}

#[test]
fn query_string_reverse_sort_and_page() {
    let params = PageParams::from_query(
        "page%5Boffset%5D=1&page%5Bsize%5D=10&sort%5Bcriteria%5D=id&sort%5Breverse%5D=true",
    )
    .unwrap();

    let page = PageEngine::new(json_posts(20), &params, &PageConfig::default())
        .unwrap()
        .into_page();

    assert_eq!(page.results.len(), 10);
    assert_eq!(page.results[0]["name"], "Post19");

    let body = serde_json::to_value(&page).unwrap();
    assert_eq!(
        body["meta"],
        json!({
            "size": 10,
            "offset": 1,
            "record_count": 10,
            "total_records": 20,
            "total_pages": 2
        })
    );
}

#[test]
fn unpaged_envelope_has_empty_meta() {
    let page = PageEngine::new(json_posts(2), &PageParams::default(), &PageConfig::default())
        .unwrap()
        .into_page();

    let body = serde_json::to_value(&page).unwrap();
    assert_eq!(body["meta"], json!({}));
    assert_eq!(body["results"].as_array().map(Vec::len), Some(2));
}

#[test]
fn unknown_field_on_typed_records_is_an_error() {
    let result = PageEngine::new(
        posts(3),
        &PageParams::new().sort_asc("author"),
        &PageConfig::default(),
    );
    assert!(result.is_err());
}
