//! Property checks over 2000–2070 on both calendars.

use proptest::prelude::*;
use rayyan_time::{Date, LunarCalendar, OccasionCategory, TabularIslamic, UmmAlQura};

// 2000-01-01 ..= 2070-12-31
const FIRST_SERIAL: i32 = 36_525;
const LAST_SERIAL: i32 = 62_457;

fn any_date() -> impl Strategy<Value = Date> {
    (FIRST_SERIAL..=LAST_SERIAL).prop_map(|s| Date::from_serial(s).unwrap())
}

fn any_calendar() -> impl Strategy<Value = &'static dyn LunarCalendar> {
    prop_oneof![
        Just(&UmmAlQura as &'static dyn LunarCalendar),
        Just(&TabularIslamic as &'static dyn LunarCalendar),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn conversion_is_deterministic_and_in_range(
        cal in any_calendar(),
        d in any_date(),
        k in -3i32..=3,
    ) {
        let a = cal.to_lunar(d, k).unwrap();
        prop_assert_eq!(a, cal.to_lunar(d, k).unwrap());
        prop_assert!((1..=30).contains(&a.day()));
        prop_assert!((1..=12).contains(&a.month()));
        // the offset is a plain shift of the civil date
        prop_assert_eq!(a, cal.to_lunar(d + k, 0).unwrap());
    }

    #[test]
    fn month_start_round_trips(cal in any_calendar(), d in any_date(), k in -3i32..=3) {
        let start = cal.month_start(d, k).unwrap();
        prop_assert!(start <= d);
        prop_assert_eq!(cal.to_lunar(start, k).unwrap().day(), 1);
        prop_assert!(cal.to_lunar(start, k).unwrap().same_month(&cal.to_lunar(d, k).unwrap()));
    }

    #[test]
    fn month_pages_are_whole_months(cal in any_calendar(), d in any_date(), k in -3i32..=3) {
        let page = cal.month_page(d, k).unwrap();
        let last = page.last().lunar().day();
        prop_assert_eq!(page.first().lunar().day(), 1);
        prop_assert!(last == 29 || last == 30);
        prop_assert_eq!(page.len(), usize::from(last));
        prop_assert!(page.first_date() <= d && d <= page.last_date());
        prop_assert_eq!(cal.to_lunar(page.next_month_start().unwrap(), k).unwrap().day(), 1);
    }

    #[test]
    fn opportunities_are_ordered_fasts(cal in any_calendar(), d in any_date(), n in 1usize..8) {
        let days = cal.next_opportunities(d, 0, n).unwrap();
        prop_assert_eq!(days.len(), n);
        prop_assert!(days[0].date() >= d);
        for pair in days.windows(2) {
            prop_assert!(pair[0].date() < pair[1].date());
        }
        for day in &days {
            prop_assert!(day.category().is_opportunity());
            prop_assert_ne!(day.category(), OccasionCategory::Shawwal);
        }
    }
}
