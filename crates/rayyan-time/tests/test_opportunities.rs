//! Upcoming fasting opportunities.

use rayyan_core::Error;
use rayyan_time::{
    next_opportunities, Date, LunarCalendar, OccasionCategory, Opportunities, TabularIslamic,
};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn next_five_from_second_of_ramadan() {
    let days = TabularIslamic
        .next_opportunities(date(2024, 3, 12), 0, 5)
        .unwrap();
    let got: Vec<_> = days.iter().map(|d| (d.date(), d.category())).collect();
    assert_eq!(
        got,
        vec![
            (date(2024, 3, 14), OccasionCategory::MondayThursday),
            (date(2024, 3, 18), OccasionCategory::MondayThursday),
            (date(2024, 3, 21), OccasionCategory::MondayThursday),
            (date(2024, 3, 23), OccasionCategory::WhiteDays),
            (date(2024, 3, 24), OccasionCategory::WhiteDays),
        ]
    );
}

#[test]
fn default_calendar_returns_exactly_limit() {
    let start = date(2025, 2, 3);
    let days = next_opportunities(start, 0, 5).unwrap();
    assert_eq!(days.len(), 5);
    assert!(days[0].date() >= start);
    for pair in days.windows(2) {
        assert!(pair[0].date() < pair[1].date());
    }
    for d in &days {
        assert_ne!(d.category(), OccasionCategory::None);
        assert_ne!(d.category(), OccasionCategory::Shawwal);
    }
}

#[test]
fn skips_shawwal_highlight() {
    // Wed 2024-04-10 is 1 Shawwal (tabular); the next fast is Thursday
    let days = TabularIslamic
        .next_opportunities(date(2024, 4, 10), 0, 1)
        .unwrap();
    assert_eq!(days[0].date(), date(2024, 4, 11));
    assert_eq!(days[0].category(), OccasionCategory::MondayThursday);
}

#[test]
fn lazy_walk_matches_collected() {
    let start = date(2024, 3, 12);
    let lazy: Vec<_> = Opportunities::new(&TabularIslamic, start, 0)
        .take(8)
        .map(|r| r.unwrap().date())
        .collect();
    let eager: Vec<_> = TabularIslamic
        .next_opportunities(start, 0, 8)
        .unwrap()
        .iter()
        .map(|d| d.date())
        .collect();
    assert_eq!(lazy, eager);
    assert_eq!(lazy[7], date(2024, 4, 1));
}

#[test]
fn restartable() {
    let start = date(2030, 5, 1);
    let a = TabularIslamic.next_opportunities(start, 2, 6).unwrap();
    let b = TabularIslamic.next_opportunities(start, 2, 6).unwrap();
    assert_eq!(a, b);
}

#[test]
fn unreachable_limit_reports_progress() {
    let mut walk = Opportunities::new(&TabularIslamic, date(2024, 3, 12), 0).scan_limit(9);
    let found: Vec<_> = walk.by_ref().collect::<Result<_, _>>().unwrap();
    assert_eq!(found.len(), 2);
    assert_eq!(walk.scanned(), 9);

    let err = Opportunities::new(&TabularIslamic, date(2024, 3, 12), 0)
        .scan_limit(9)
        .collect_limit(3)
        .unwrap_err();
    assert_eq!(
        err,
        Error::LimitUnreachable {
            limit: 3,
            found: 2,
            scanned: 9
        }
    );
}

#[test]
fn conversion_errors_propagate() {
    // Umm al-Qura tables end in 2076
    let err = next_opportunities(date(2076, 12, 30), 0, 10).unwrap_err();
    assert!(matches!(err, Error::Conversion(_)));
}
