use regex::Regex;
use serde::Deserialize;
use serde::Serialize;

/// A span of the day in minutes since midnight, both ends inclusive.
/// `start <= end` is assumed, never enforced: a reversed range is simply a
/// span no minute of the day falls into.
#[derive(PartialEq, Eq, Debug, Serialize, Deserialize, Clone, Copy)]
pub struct TimeRange {
    pub start: u32,
    pub end: u32,
}

impl TimeRange {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, minute_of_day: u32) -> bool {
        self.start <= minute_of_day && minute_of_day <= self.end
    }

    /// Extracts a range from one `/`-separated segment. The pattern is
    /// unanchored and tolerates whitespace around the dash; minutes take
    /// exactly two digits, hours one or two. Anything else yields no range
    /// rather than an error.
    pub fn from_segment(segment: &str) -> Option<TimeRange> {
        let range_pattern = Regex::new(r"(\d{1,2}):(\d{2})\s*-\s*(\d{1,2}):(\d{2})")
            .expect("the hard-coded range pattern is valid");

        let captures = range_pattern.captures(segment)?;

        let start_hour = captures.get(1).map_or("", |m| m.as_str()).parse::<u32>().ok()?;
        let start_minute = captures.get(2).map_or("", |m| m.as_str()).parse::<u32>().ok()?;
        let end_hour = captures.get(3).map_or("", |m| m.as_str()).parse::<u32>().ok()?;
        let end_minute = captures.get(4).map_or("", |m| m.as_str()).parse::<u32>().ok()?;

        Some(TimeRange::new(
            start_hour * 60 + start_minute,
            end_hour * 60 + end_minute,
        ))
    }
}

/// The work hours a technician account carries, as understood by the
/// availability resolution. Derived fresh from the raw text on every
/// evaluation and never stored.
///
/// Position is meaning: the segment before the first `/` is the morning,
/// the one after it the afternoon, whatever their clock order.
#[derive(PartialEq, Eq, Debug, Serialize, Deserialize, Clone, Copy, Default)]
pub struct WorkScheduleSpec {
    pub morning: Option<TimeRange>,
    pub afternoon: Option<TimeRange>,
}

impl WorkScheduleSpec {
    /// Total parse of a human-entered work-hours string such as
    /// `"08:30-12:30 / 14:00-17:30"` or `"9h-18h"`. Bare-hour shorthands
    /// (`9h`) are first rewritten to `9:00` everywhere in the text, then
    /// each segment is matched independently. Segments that do not parse
    /// contribute nothing, and segments past the second carry no meaning.
    pub fn parse(raw: &str) -> Self {
        let shorthand_pattern =
            Regex::new(r"(\d+)h").expect("the hard-coded shorthand pattern is valid");
        let normalized = shorthand_pattern.replace_all(raw, "${1}:00");

        let mut segments = normalized.split('/').map(str::trim);
        let morning = segments.next().and_then(TimeRange::from_segment);
        let afternoon = segments.next().and_then(TimeRange::from_segment);

        WorkScheduleSpec { morning, afternoon }
    }

    /// True when the minute falls inside either configured range, both
    /// endpoints included.
    pub fn in_work_time(&self, minute_of_day: u32) -> bool {
        self.morning
            .map_or(false, |range| range.contains(minute_of_day))
            || self
                .afternoon
                .map_or(false, |range| range.contains(minute_of_day))
    }

    /// True strictly between the end of the morning and the start of the
    /// afternoon. Requires both ranges; with a single range there is no
    /// break to be in, and with a reversed pair the window is empty and
    /// never triggers.
    pub fn in_break_time(&self, minute_of_day: u32) -> bool {
        match (self.morning, self.afternoon) {
            (Some(morning), Some(afternoon)) => {
                morning.end < minute_of_day && minute_of_day < afternoon.start
            }
            _ => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.morning.is_none() && self.afternoon.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::TimeRange;
    use super::WorkScheduleSpec;

    #[test]
    fn parses_a_canonical_two_range_schedule() {
        let schedule = WorkScheduleSpec::parse("08:30-12:30 / 14:00-17:30");

        assert_eq!(schedule.morning, Some(TimeRange::new(510, 750)));
        assert_eq!(schedule.afternoon, Some(TimeRange::new(840, 1050)));
    }

    #[test]
    fn rewrites_bare_hour_shorthands_before_matching() {
        let schedule = WorkScheduleSpec::parse("9h-18h");

        assert_eq!(schedule.morning, Some(TimeRange::new(540, 1080)));
        assert_eq!(schedule.afternoon, None);
    }

    #[test]
    fn tolerates_whitespace_around_the_dash() {
        // The backend's historical default entry.
        let schedule = WorkScheduleSpec::parse("08h - 17h");

        assert_eq!(schedule.morning, Some(TimeRange::new(480, 1020)));
        assert_eq!(schedule.afternoon, None);
    }

    #[test]
    fn an_unparseable_segment_contributes_nothing() {
        let schedule = WorkScheduleSpec::parse("matin / 14:00-17:30");

        assert_eq!(schedule.morning, None);
        assert_eq!(schedule.afternoon, Some(TimeRange::new(840, 1050)));
    }

    #[test]
    fn segments_past_the_second_are_ignored() {
        let schedule = WorkScheduleSpec::parse("08:00-10:00 / 11:00-12:00 / 13:00-14:00");

        assert_eq!(schedule.morning, Some(TimeRange::new(480, 600)));
        assert_eq!(schedule.afternoon, Some(TimeRange::new(660, 720)));
    }

    #[test]
    fn free_text_parses_to_an_empty_schedule() {
        assert!(WorkScheduleSpec::parse("not-a-schedule").is_empty());
        assert!(WorkScheduleSpec::parse("8h à 17h").is_empty());
    }

    #[test]
    fn single_digit_minutes_do_not_match() {
        assert!(WorkScheduleSpec::parse("9:5-10:00").is_empty());
    }

    #[test]
    fn work_time_bounds_are_inclusive_on_both_ends() {
        let schedule = WorkScheduleSpec::parse("09:00-18:00");

        assert!(schedule.in_work_time(540));
        assert!(schedule.in_work_time(1080));
        assert!(!schedule.in_work_time(539));
        assert!(!schedule.in_work_time(1081));
    }

    #[test]
    fn break_window_is_open_on_both_ends() {
        let schedule = WorkScheduleSpec::parse("08:00-12:00 / 13:00-17:00");

        assert!(!schedule.in_break_time(720));
        assert!(schedule.in_break_time(721));
        assert!(schedule.in_break_time(779));
        assert!(!schedule.in_break_time(780));
    }

    #[test]
    fn reversed_ranges_never_produce_a_break() {
        let schedule = WorkScheduleSpec::parse("13:00-17:00 / 08:00-12:00");

        for minute_of_day in 0..1440 {
            assert!(!schedule.in_break_time(minute_of_day));
        }
    }

    #[test]
    fn hours_beyond_the_wall_clock_are_syntactically_accepted() {
        let schedule = WorkScheduleSpec::parse("25:00-26:00");

        // 1500..=1560 lies past any real minute of the day, so the range
        // can never be hit; accepting it keeps the parse total.
        assert_eq!(schedule.morning, Some(TimeRange::new(1500, 1560)));
        assert!(!schedule.in_work_time(1439));
    }
}
