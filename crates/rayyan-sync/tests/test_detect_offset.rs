//! Offset detection against mock authorities.

use async_trait::async_trait;

use rayyan_core::{Error, Result};
use rayyan_sync::{detect_offset, LunarAuthority, OfficialLunarDate};
use rayyan_time::{Date, LunarCalendar, TabularIslamic, UmmAlQura};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

/// Answers with whatever the wrapped calendar says, shifted by `offset`.
struct CalendarAuthority<C: LunarCalendar> {
    calendar: C,
    offset: i32,
}

#[async_trait]
impl<C: LunarCalendar> LunarAuthority for CalendarAuthority<C> {
    async fn official_date(&self, today: Date) -> Result<OfficialLunarDate> {
        let l = self.calendar.to_lunar(today, self.offset)?;
        Ok(OfficialLunarDate {
            day: l.day(),
            month: l.month(),
            year: l.year(),
        })
    }

    fn name(&self) -> &str {
        "mock"
    }
}

struct Fixed(OfficialLunarDate);

#[async_trait]
impl LunarAuthority for Fixed {
    async fn official_date(&self, _today: Date) -> Result<OfficialLunarDate> {
        Ok(self.0)
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

struct Down;

#[async_trait]
impl LunarAuthority for Down {
    async fn official_date(&self, _today: Date) -> Result<OfficialLunarDate> {
        Err(Error::Network("connection refused".into()))
    }

    fn name(&self) -> &str {
        "down"
    }
}

#[tokio::test]
async fn finds_the_authoritys_offset() {
    let today = date(2024, 3, 20);
    for k in -3..=3 {
        let authority = CalendarAuthority {
            calendar: TabularIslamic,
            offset: k,
        };
        let got = detect_offset(&authority, &TabularIslamic, today).await.unwrap();
        assert_eq!(got, k);
    }
}

#[tokio::test]
async fn umm_al_qura_leads_tabular_on_arafah_1445() {
    let authority = CalendarAuthority {
        calendar: UmmAlQura,
        offset: 0,
    };
    let got = detect_offset(&authority, &TabularIslamic, date(2024, 6, 15))
        .await
        .unwrap();
    assert_eq!(got, 1);
}

#[tokio::test]
async fn agreeing_calendars_give_zero() {
    let authority = CalendarAuthority {
        calendar: UmmAlQura,
        offset: 0,
    };
    let got = detect_offset(&authority, &UmmAlQura, date(2024, 7, 16))
        .await
        .unwrap();
    assert_eq!(got, 0);
}

#[tokio::test]
async fn no_match_falls_back_to_zero() {
    // a year off; no shift of a few days reaches it
    let authority = Fixed(OfficialLunarDate {
        day: 1,
        month: 9,
        year: 1400,
    });
    let got = detect_offset(&authority, &TabularIslamic, date(2024, 3, 20))
        .await
        .unwrap();
    assert_eq!(got, 0);
}

#[tokio::test]
async fn matches_on_month_boundary() {
    // 2024-03-11 is 1 Ramadan; -1 already reads 29 Sha'ban
    let authority = Fixed(OfficialLunarDate {
        day: 1,
        month: 9,
        year: 1445,
    });
    let got = detect_offset(&authority, &TabularIslamic, date(2024, 3, 11))
        .await
        .unwrap();
    assert_eq!(got, 0);
}

#[tokio::test]
async fn failure_is_not_zero() {
    let err = detect_offset(&Down, &TabularIslamic, date(2024, 3, 20))
        .await
        .unwrap_err();
    assert_eq!(err, Error::Network("connection refused".into()));
}

#[tokio::test]
async fn works_through_a_trait_object() {
    let authority: Box<dyn LunarAuthority> = Box::new(CalendarAuthority {
        calendar: TabularIslamic,
        offset: 2,
    });
    let calendar: &dyn LunarCalendar = &TabularIslamic;
    let got = detect_offset(authority.as_ref(), calendar, date(2025, 1, 1))
        .await
        .unwrap();
    assert_eq!(got, 2);
}
