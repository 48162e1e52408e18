use economic_dashboard_wasm::domain::statistics::explorer::{
    DATASETS, DatasetQuery, DatasetSort, Frequency, filter_datasets, most_downloaded,
};

fn ids(query: &DatasetQuery, sort: DatasetSort) -> Vec<u32> {
    filter_datasets(query, sort).iter().map(|d| d.id).collect()
}

#[test]
fn empty_query_returns_everything() {
    let query = DatasetQuery::from_inputs("", "all", "all");
    assert_eq!(query, DatasetQuery::default());
    assert_eq!(filter_datasets(&query, DatasetSort::default()).len(), DATASETS.len());
}

#[test]
fn each_sort_orders_the_catalogue() {
    let all = DatasetQuery::default();
    assert_eq!(ids(&all, DatasetSort::RecentlyUpdated), vec![5, 1, 4, 2, 3, 6]);
    assert_eq!(ids(&all, DatasetSort::MostPopular), vec![5, 1, 4, 2, 3, 6]);
    assert_eq!(ids(&all, DatasetSort::Name), vec![2, 4, 5, 3, 6, 1]);
    assert_eq!(ids(&all, DatasetSort::Size), vec![6, 4, 5, 3, 2, 1]);
}

#[test]
fn text_search_ignores_case_and_covers_tags() {
    let query = DatasetQuery::from_inputs("  MONTHLY ", "all", "all");
    assert_eq!(query.text, "MONTHLY");
    assert_eq!(ids(&query, DatasetSort::RecentlyUpdated), vec![4, 2, 3]);

    let by_tag = DatasetQuery::from_inputs("stock market", "", "");
    assert_eq!(ids(&by_tag, DatasetSort::Name), vec![5]);
}

#[test]
fn category_and_frequency_narrow_the_result() {
    let trade = DatasetQuery::from_inputs("", "trade", "all");
    assert_eq!(ids(&trade, DatasetSort::Name), vec![4]);

    let monthly = DatasetQuery::from_inputs("", "all", "monthly");
    assert_eq!(monthly.frequency, Some(Frequency::Monthly));
    assert_eq!(ids(&monthly, DatasetSort::Name), vec![2, 4, 3]);

    let none = DatasetQuery::from_inputs("", "trade", "daily");
    assert!(filter_datasets(&none, DatasetSort::Name).is_empty());
}

#[test]
fn unknown_frequency_means_no_filter() {
    let query = DatasetQuery::from_inputs("", "all", "weekly");
    assert_eq!(query.frequency, None);
}

#[test]
fn most_downloaded_is_descending_and_truncated() {
    let top: Vec<u64> = most_downloaded(3).iter().map(|d| d.downloads).collect();
    assert_eq!(top, vec![2156, 1247, 1089]);
    assert_eq!(most_downloaded(100).len(), DATASETS.len());
    assert!(most_downloaded(0).is_empty());
}
