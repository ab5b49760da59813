use jalali_date::{
    CalendarDate, ConversionError, DateConverter, JulianDay, MAX_JULIAN_DAY, MIN_JULIAN_DAY,
    PersianMonth, gregorian_days_in_month, gregorian_to_jalali, is_jalali_leap_year,
    jalali_days_in_month, jalali_days_in_year, jalali_to_gregorian, jalali_year_info,
};

#[test]
fn gregorian_roundtrip_through_jalali() {
    for year in 600..=3700 {
        for month in 1..=12u8 {
            for day in [1, 15, gregorian_days_in_month(year, month).unwrap()] {
                let jalali = gregorian_to_jalali(year, month, day).unwrap();
                let back = jalali_to_gregorian(jalali.year, jalali.month, jalali.day).unwrap();
                assert_eq!(
                    back,
                    CalendarDate::new(year, month, day),
                    "roundtrip failed for {year:04}-{month:02}-{day:02} via {jalali}"
                );
            }
        }
    }
}

#[test]
fn jalali_roundtrip_every_day_of_recent_years() {
    for year in 1300..=1500 {
        for month in 1..=12u8 {
            for day in 1..=jalali_days_in_month(year, month).unwrap() {
                let gregorian = jalali_to_gregorian(year, month, day).unwrap();
                let back = gregorian_to_jalali(gregorian.year, gregorian.month, gregorian.day).unwrap();
                assert_eq!(
                    back,
                    CalendarDate::new(year, month, day),
                    "roundtrip failed for Jalali {year:04}-{month:02}-{day:02} via {gregorian}"
                );
            }
        }
    }
}

#[test]
fn julian_day_strictly_increases_through_a_jalali_year() {
    let mut previous: Option<JulianDay> = None;
    for month in 1..=12u8 {
        for day in 1..=jalali_days_in_month(1403, month).unwrap() {
            let jd = JulianDay::from_jalali(CalendarDate::new(1403, month, day)).unwrap();
            if let Some(prev) = previous {
                assert_eq!(
                    jd.get() - prev.get(),
                    1,
                    "gap before Jalali 1403-{month:02}-{day:02}"
                );
            }
            previous = Some(jd);
        }
    }
    let next_year = JulianDay::from_jalali(CalendarDate::new(1404, 1, 1)).unwrap();
    assert_eq!(previous.map(|jd| next_year.get() - jd.get()), Some(1));
}

#[test]
fn new_year_boundary_continuity() {
    let last = jalali_to_gregorian(1400, 12, 29).unwrap();
    let first = jalali_to_gregorian(1401, 1, 1).unwrap();
    assert_eq!(last, CalendarDate::new(2022, 3, 20));
    assert_eq!(first, CalendarDate::new(2022, 3, 21));
    assert_eq!(
        JulianDay::from_gregorian(first).get() - JulianDay::from_gregorian(last).get(),
        1
    );
}

#[test]
fn converter_renders_last_result() {
    let mut converter = DateConverter::new();
    converter.convert_gregorian_to_jalali(2024, 3, 20).unwrap();
    assert_eq!(converter.to_string(), "1403-01-01");

    converter.convert_jalali_to_gregorian(1304, 1, 1).unwrap();
    assert_eq!(converter.to_string(), "1925-03-21");
    assert_eq!(
        (converter.year(), converter.month(), converter.day()),
        (1925, 3, 21)
    );
}

#[test]
fn out_of_table_years_are_rejected() {
    assert!(matches!(
        jalali_to_gregorian(-62, 12, 29),
        Err(ConversionError::YearOutOfRange { year: -62 })
    ));
    assert!(matches!(
        jalali_to_gregorian(4000, 1, 1),
        Err(ConversionError::YearOutOfRange { year: 4000 })
    ));
    assert!(matches!(
        gregorian_to_jalali(-100, 1, 1),
        Err(ConversionError::GregorianYearOutOfRange { year: -100 })
    ));
}

#[test]
fn julian_calendar_dates_share_the_day_count() {
    let reform = JulianDay::from_julian(CalendarDate::new(1582, 10, 4));
    let next = JulianDay::new(reform.get() + 1);
    assert_eq!(next.to_gregorian().unwrap(), CalendarDate::new(1582, 10, 15));
    assert_eq!(next.to_jalali().unwrap(), gregorian_to_jalali(1582, 10, 15).unwrap());
}

#[test]
fn extreme_years_are_errors_not_panics() {
    for year in [i32::MIN, i32::MAX] {
        assert!(gregorian_to_jalali(year, 1, 1).is_err(), "gregorian {year}");
        assert!(jalali_to_gregorian(year, 1, 1).is_err(), "jalali {year}");
        assert!(jalali_year_info(year).is_err(), "year info {year}");
        assert!(is_jalali_leap_year(year).is_err(), "leap {year}");
        assert!(jalali_days_in_year(year).is_err(), "year length {year}");
        assert!(JulianDay::from_jalali(CalendarDate::new(year, 1, 1)).is_err());
    }
}

#[test]
fn extreme_julian_days_are_errors_not_panics() {
    let cases = [
        i64::MIN,
        i64::MIN + 1,
        MIN_JULIAN_DAY - 1,
        MAX_JULIAN_DAY + 1,
        1 << 40,
        i64::MAX,
    ];
    for value in cases {
        let jd = JulianDay::new(value);
        for result in [jd.to_gregorian(), jd.to_julian()] {
            assert!(
                matches!(result, Err(ConversionError::JulianDayOutOfRange { jd: rejected }) if rejected == value),
                "jd {value}"
            );
        }
        assert!(jd.to_jalali().is_err(), "jd {value} to jalali");
    }

    // Inside the decoder span but outside the Jalali table
    assert!(JulianDay::new(MAX_JULIAN_DAY).to_gregorian().is_ok());
    assert!(matches!(
        JulianDay::new(MAX_JULIAN_DAY).to_jalali(),
        Err(ConversionError::YearOutOfRange { .. })
    ));
}

fn rejects_month<T>(result: Result<T, ConversionError>, month: u8) -> bool {
    matches!(result, Err(ConversionError::InvalidMonth { month: rejected }) if rejected == month)
}

#[test]
fn months_outside_the_year_are_errors_not_panics() {
    for month in [0, 13] {
        assert!(rejects_month(gregorian_days_in_month(2024, month), month), "month {month}");
        assert!(rejects_month(jalali_days_in_month(1403, month), month), "month {month}");
        assert!(rejects_month(PersianMonth::try_from(month), month), "month {month}");
        assert!(rejects_month(CalendarDate::new(2024, month, 1).validate_gregorian(), month), "month {month}");
        assert!(rejects_month(CalendarDate::new(1403, month, 1).validate_jalali(), month), "month {month}");
        assert!(rejects_month(gregorian_to_jalali(2024, month, 1), month), "month {month}");
        assert!(rejects_month(jalali_to_gregorian(1403, month, 1), month), "month {month}");

        let mut converter = DateConverter::new();
        assert!(rejects_month(converter.convert_gregorian_to_jalali(2024, month, 1), month));
        assert!(rejects_month(converter.convert_jalali_to_gregorian(1403, month, 1), month));
        assert_eq!(converter.date(), CalendarDate::default());
    }
}
