
use crate::{
    browse::{Browser, session::BrowseSession},
    error::BrowseError,
    test_fixtures::{first_name, member_browser, roster},
    window::PageLabel,
};

fn names(rows: &[&crate::test_fixtures::Member]) -> Vec<String> {
    rows.iter().map(|member| member.first_name.clone()).collect()
}

// ----------------------------------------------------------------------
// Pipeline
// ----------------------------------------------------------------------

#[test]
fn zero_page_size_is_rejected_at_construction() {
    let err = Browser::new(first_name, 0).expect_err("zero page size must fail");

    assert_eq!(err, BrowseError::ZeroPageSize);
}

#[test]
fn empty_query_and_empty_selector_match_everything() {
    let engine = member_browser(10);
    let records = roster();

    let view = engine.paginate(&records, "", "", 1);

    assert_eq!(view.matched, records.len());
    assert_eq!(view.total_pages, 2);
    assert_eq!(view.count(), 10);
}

#[test]
fn search_is_case_insensitive() {
    let engine = member_browser(10);
    let records = roster();

    let view = engine.paginate(&records, "jo", "", 1);

    assert_eq!(names(&view.rows), vec!["John", "Joan", "Jonas"]);
}

#[test]
fn search_and_filter_compose_by_intersection() {
    let engine = member_browser(10);
    let records = roster();

    let view = engine.paginate(&records, "jo", "male", 1);

    assert_eq!(names(&view.rows), vec!["John", "Jonas"]);

    // A record passing only one of the two stages is excluded.
    let female_jo = engine.paginate(&records, "jo", "female", 1);
    assert_eq!(names(&female_jo.rows), vec!["Joan"]);
}

#[test]
fn unknown_selector_degrades_to_match_all() {
    let engine = member_browser(10);
    let records = roster();

    let view = engine.paginate(&records, "", "nonsense", 1);

    assert_eq!(view.matched, records.len());
}

#[test]
fn zero_matches_yield_zero_pages() {
    let engine = member_browser(10);
    let records = roster();

    let view = engine.paginate(&records, "zzz", "", 1);

    assert_eq!(view.matched, 0);
    assert_eq!(view.total_pages, 0);
    assert!(view.is_empty());
    assert!(view.no_matches());
}

#[test]
fn last_page_carries_the_remainder() {
    let engine = member_browser(5);
    let records = roster();

    let last = engine.paginate(&records, "", "", 3);

    assert_eq!(last.total_pages, 3);
    assert_eq!(last.count(), 2);
}

#[test]
fn out_of_range_page_yields_empty_rows_without_clamping() {
    let engine = member_browser(5);
    let records = roster();

    let view = engine.paginate(&records, "", "", 9);

    assert_eq!(view.total_pages, 3);
    assert_eq!(view.matched, records.len());
    assert!(view.is_empty());
}

#[test]
fn page_zero_behaves_like_page_one() {
    let engine = member_browser(5);
    let records = roster();

    let zero = engine.paginate(&records, "", "", 0);
    let one = engine.paginate(&records, "", "", 1);

    assert_eq!(names(&zero.rows), names(&one.rows));
}

#[test]
fn age_thresholds_filter_numerically() {
    let engine = member_browser(20);
    let records = roster();

    let under_20 = engine.paginate(&records, "", "under-20", 1);
    assert_eq!(names(&under_20.rows), vec!["Jane", "Mark"]);

    let young_men = engine.paginate(&records, "", "male-under-40", 1);
    assert_eq!(names(&young_men.rows), vec!["John", "Mark", "Liam", "Omar"]);
}

// ----------------------------------------------------------------------
// Session
// ----------------------------------------------------------------------

#[test]
fn query_change_resets_the_page() {
    let mut session = BrowseSession::new(member_browser(5));
    let records = roster();

    session.run(&records);
    assert!(session.go_to(2));

    session.set_query("jo");
    assert_eq!(session.page(), 1);
}

#[test]
fn selector_change_resets_the_page() {
    let mut session = BrowseSession::new(member_browser(5));
    let records = roster();

    session.run(&records);
    assert!(session.go_to(3));

    session.set_selector("female");
    assert_eq!(session.page(), 1);
}

#[test]
fn run_clamps_a_stale_page_to_the_last_page() {
    let mut session = BrowseSession::new(member_browser(5));
    let records = roster();

    session.run(&records);
    assert!(session.go_to(3));

    // The caller's record set shrank between runs.
    let shrunk = &records[..6];
    let view = session.run(shrunk);

    assert_eq!(view.total_pages, 2);
    assert_eq!(session.page(), 2);
    assert_eq!(view.count(), 1);
}

#[test]
fn previous_at_the_floor_is_a_noop() {
    let mut session = BrowseSession::new(member_browser(5));
    let records = roster();

    session.run(&records);

    assert!(!session.previous());
    assert_eq!(session.page(), 1);
}

#[test]
fn next_at_the_cap_is_a_noop() {
    let mut session = BrowseSession::new(member_browser(5));
    let records = roster();

    session.run(&records);
    assert!(session.go_to(3));

    assert!(!session.next());
    assert_eq!(session.page(), 3);
}

#[test]
fn relative_navigation_moves_within_bounds() {
    let mut session = BrowseSession::new(member_browser(5));
    let records = roster();

    session.run(&records);

    assert!(session.next());
    assert_eq!(session.page(), 2);
    assert!(session.previous());
    assert_eq!(session.page(), 1);
}

#[test]
fn go_to_rejects_out_of_range_targets() {
    let mut session = BrowseSession::new(member_browser(5));
    let records = roster();

    session.run(&records);

    assert!(!session.go_to(0));
    assert!(!session.go_to(4));
    assert_eq!(session.page(), 1);
    assert!(session.go_to(2));
    assert_eq!(session.page(), 2);
}

#[test]
fn navigation_is_disabled_on_an_empty_result_set() {
    let mut session = BrowseSession::new(member_browser(5));
    let records = roster();

    session.set_query("zzz");
    session.run(&records);

    assert!(!session.next());
    assert!(!session.previous());
    assert!(!session.go_to(1));
    assert_eq!(session.controls(), Default::default());
}

#[test]
fn controls_reflect_page_boundaries() {
    let mut session = BrowseSession::new(member_browser(5));
    let records = roster();

    session.run(&records);
    let at_floor = session.controls();
    assert!(!at_floor.previous);
    assert!(at_floor.next);

    assert!(session.go_to(3));
    let at_cap = session.controls();
    assert!(at_cap.previous);
    assert!(!at_cap.next);
}

#[test]
fn reset_restores_defaults() {
    let mut session = BrowseSession::new(member_browser(5));
    let records = roster();

    session.set_query("jo");
    session.set_selector("male");
    session.run(&records);
    session.reset();

    assert_eq!(session.query(), "");
    assert_eq!(session.selector(), "");
    assert_eq!(session.page(), 1);

    let view = session.run(&records);
    assert_eq!(view.matched, records.len());
}

#[test]
fn meta_reports_the_latest_run() {
    let mut session = BrowseSession::new(member_browser(5));
    let records = roster();

    session.run(&records);
    assert!(session.go_to(2));

    let meta = session.meta();
    assert_eq!(meta.page, 2);
    assert_eq!(meta.total_pages, 3);
    assert_eq!(meta.matched, records.len());
}

#[test]
fn labels_follow_the_session_page() {
    let mut session = BrowseSession::new(member_browser(1));
    let records = roster();

    session.run(&records);
    assert_eq!(
        session.labels(),
        vec![
            PageLabel::Number(1),
            PageLabel::Number(2),
            PageLabel::Number(3),
            PageLabel::Number(4),
            PageLabel::Ellipsis,
            PageLabel::Number(11),
            PageLabel::Number(12),
        ]
    );

    assert!(session.go_to(6));
    assert_eq!(
        session.labels(),
        vec![
            PageLabel::Number(1),
            PageLabel::Ellipsis,
            PageLabel::Number(5),
            PageLabel::Number(6),
            PageLabel::Number(7),
            PageLabel::Ellipsis,
            PageLabel::Number(12),
        ]
    );
}

#[test]
fn fresh_session_renders_blank_controls_before_the_first_run() {
    let session = BrowseSession::new(member_browser(5));

    assert_eq!(session.total_pages(), 0);
    assert_eq!(session.controls(), Default::default());
    assert!(
        session
            .labels()
            .iter()
            .all(|label| *label == PageLabel::Blank)
    );
}
