//! Event browsing integration tests: rows in, filtered and ranked views out.

use std::io::Write;

use brainy::events::{
    self, filter, EventCard, EventRow, FilterCriteria, Mode, PriceFilter, PriceTag, SortOrder,
};
use brainy::store::load_rows;

fn summit_and_expo() -> Vec<events::Event> {
    events::normalize_all(vec![
        EventRow {
            title: "AI Summit".into(),
            category: Some("Technology".into()),
            mode: Some("online".into()),
            price: Some(0.0),
            ..EventRow::default()
        },
        EventRow {
            title: "Art Expo".into(),
            category: Some("Design".into()),
            mode: Some("offline".into()),
            price: Some(500.0),
            ..EventRow::default()
        },
    ])
}

fn titles(list: &[events::Event]) -> Vec<&str> {
    list.iter().map(|e| e.title.as_str()).collect()
}

#[test]
fn free_filter_keeps_summit() {
    let criteria = FilterCriteria::from_labels("", "All", "All Modes", "Free").unwrap();
    assert_eq!(titles(&filter(&summit_and_expo(), &criteria)), vec!["AI Summit"]);
}

#[test]
fn art_query_keeps_expo() {
    let criteria = FilterCriteria::from_labels("art", "All", "All Modes", "All Prices").unwrap();
    assert_eq!(titles(&filter(&summit_and_expo(), &criteria)), vec!["Art Expo"]);
}

#[test]
fn sentinel_criteria_return_input_unchanged() {
    let all = summit_and_expo();
    let criteria = FilterCriteria::from_labels("", "All", "All Modes", "All Prices").unwrap();
    assert_eq!(filter(&all, &criteria), all);
}

#[test]
fn filter_is_idempotent_across_criteria() {
    let all = summit_and_expo();
    let cases = [
        FilterCriteria::new().with_query("a"),
        FilterCriteria::new().with_mode(Mode::Offline),
        FilterCriteria::new().with_price(PriceFilter::Paid),
        FilterCriteria::new().with_category("Technology").with_price(PriceFilter::Free),
    ];
    for criteria in cases {
        let once = filter(&all, &criteria);
        assert_eq!(filter(&once, &criteria), once);
    }
}

#[test]
fn rows_from_file_flow_into_filter_and_cards() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        file,
        r#"[
            {{"title":"Robotics Meetup","category":"Technology","mode":"hybrid","date":"2026-11-20","college":"VIT","view_count":40}},
            {{"title":"Dance Off","category":"Cultural","mode":"offline","price":150,"date":"2026-11-02","is_completed":false}},
            {{"title":"Old Hackathon","category":"Technology","mode":"online","date":"2025-01-01","is_completed":true}}
        ]"#
    )
    .unwrap();

    let rows: Vec<EventRow> = load_rows(file.path()).unwrap();
    let mut list = events::upcoming(&events::normalize_all(rows));
    assert_eq!(titles(&list), vec!["Dance Off", "Robotics Meetup"]);

    events::sort(&mut list, SortOrder::MostPopular);
    assert_eq!(titles(&list), vec!["Robotics Meetup", "Dance Off"]);

    let criteria = FilterCriteria::from_labels("vit", "Technology", "Hybrid", "Free").unwrap();
    let matched = events::filter_refs(&list, &criteria);
    assert_eq!(matched.len(), 1);

    let card = EventCard::from(matched[0]);
    assert_eq!(card.organizer, "VIT");
    assert_eq!(card.date, "Nov 20, 2026");
    assert_eq!(card.price, PriceTag::Free);
}

#[test]
fn invalid_labels_are_rejected_at_the_boundary() {
    assert!(FilterCriteria::from_labels("", "All", "Teleport", "All Prices").is_err());
    assert!(FilterCriteria::from_labels("", "All", "All Modes", "Cheap").is_err());
}
