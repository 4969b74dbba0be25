use std::fmt;

use chrono::NaiveTime;
use chrono::Timelike;
use clap::ValueEnum;
use serde::Deserialize;
use serde::Serialize;
use strum_macros::EnumIter;

use super::work_schedule::WorkScheduleSpec;

/// The availability a technician effectively has right now, after the
/// schedule has had its say. This is what every outward surface shows.
#[derive(
    PartialEq, Eq, Hash, Clone, Copy, Debug, Default, Serialize, Deserialize, EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityState {
    #[default]
    Available,
    Busy,
    OnBreak,
    Unavailable,
}

impl AvailabilityState {
    pub fn variant_name(&self) -> &'static str {
        match self {
            AvailabilityState::Available => "available",
            AvailabilityState::Busy => "busy",
            AvailabilityState::OnBreak => "on_break",
            AvailabilityState::Unavailable => "unavailable",
        }
    }
}

impl fmt::Display for AvailabilityState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.variant_name())
    }
}

/// The status a technician sets by hand. Deliberately narrower than
/// [`AvailabilityState`]: nobody declares themselves unavailable, the
/// schedule does that for them.
///
/// Wire spellings are the French ones the technician records have always
/// carried. Deserialization is strict; this is the write boundary, and an
/// unrecognized status must be rejected, not coerced.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default, Serialize, Deserialize, ValueEnum)]
pub enum ManualStatus {
    #[default]
    #[serde(rename = "disponible")]
    #[value(name = "disponible")]
    Available,
    #[serde(rename = "occupé")]
    #[value(name = "occupe", alias = "occupé")]
    Busy,
    #[serde(rename = "en pause")]
    #[value(name = "en-pause", alias = "pause")]
    OnBreak,
}

impl ManualStatus {
    /// Lenient reading of free text already sitting in technician records.
    /// Accent-less and underscore spellings circulate in old data; anything
    /// else reads as no declared status at all.
    pub fn from_user_input(input: &str) -> Option<ManualStatus> {
        match input.trim().to_lowercase().as_str() {
            "disponible" => Some(ManualStatus::Available),
            "occupé" | "occupe" => Some(ManualStatus::Busy),
            "en pause" | "en_pause" => Some(ManualStatus::OnBreak),
            _ => None,
        }
    }

    pub fn as_wire_str(&self) -> &'static str {
        match self {
            ManualStatus::Available => "disponible",
            ManualStatus::Busy => "occupé",
            ManualStatus::OnBreak => "en pause",
        }
    }
}

impl fmt::Display for ManualStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_wire_str())
    }
}

impl From<ManualStatus> for AvailabilityState {
    fn from(manual_status: ManualStatus) -> Self {
        match manual_status {
            ManualStatus::Available => AvailabilityState::Available,
            ManualStatus::Busy => AvailabilityState::Busy,
            ManualStatus::OnBreak => AvailabilityState::OnBreak,
        }
    }
}

/// A wall-clock instant reduced to what the resolution cares about. Seconds
/// are dropped on construction, so two calls within the same minute are
/// indistinguishable.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
}

impl ClockTime {
    pub fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }

    pub fn minute_of_day(&self) -> u32 {
        self.hour * 60 + self.minute
    }
}

impl From<NaiveTime> for ClockTime {
    fn from(time: NaiveTime) -> Self {
        ClockTime::new(time.hour(), time.minute())
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Everything the resolution reads about one technician: the two raw record
/// fields exactly as stored, plus the clock. Borrowed so callers never clone
/// record text just to ask a question.
#[derive(Clone, Copy, Debug)]
pub struct TechnicianAvailabilityInput<'a> {
    pub work_hours: Option<&'a str>,
    pub manual_status: Option<&'a str>,
    pub now: ClockTime,
}

/// Resolves what a technician's availability is at the given instant.
///
/// Without a usable schedule the manual status is the whole answer. With
/// one, being in the midday break wins over everything, being outside the
/// configured ranges makes the technician unavailable, and only inside work
/// time does the manual status show through.
///
/// Total over any record contents: free-text schedules and unrecognized
/// statuses degrade to their defaults instead of failing.
pub fn resolve_availability(input: TechnicianAvailabilityInput<'_>) -> AvailabilityState {
    let manual_status = input
        .manual_status
        .and_then(ManualStatus::from_user_input)
        .unwrap_or_default();

    let work_hours = match input.work_hours.map(str::trim) {
        None | Some("") => return manual_status.into(),
        Some(work_hours) => work_hours,
    };

    let schedule = WorkScheduleSpec::parse(work_hours);
    let minute_of_day = input.now.minute_of_day();

    if schedule.in_break_time(minute_of_day) {
        return AvailabilityState::OnBreak;
    }

    if !schedule.in_work_time(minute_of_day) {
        return AvailabilityState::Unavailable;
    }

    manual_status.into()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;
    use proptest::prelude::*;

    use super::AvailabilityState;
    use super::ClockTime;
    use super::ManualStatus;
    use super::TechnicianAvailabilityInput;
    use super::resolve_availability;

    fn resolve(
        work_hours: Option<&str>,
        manual_status: Option<&str>,
        now: ClockTime,
    ) -> AvailabilityState {
        resolve_availability(TechnicianAvailabilityInput {
            work_hours,
            manual_status,
            now,
        })
    }

    #[test]
    fn an_absent_schedule_falls_back_to_the_manual_status() {
        let now = ClockTime::new(3, 0);

        assert_eq!(resolve(None, Some("occupé"), now), AvailabilityState::Busy);
        assert_eq!(
            resolve(None, Some("en pause"), now),
            AvailabilityState::OnBreak
        );
        assert_eq!(resolve(None, None, now), AvailabilityState::Available);
    }

    #[test]
    fn a_whitespace_schedule_behaves_like_an_absent_one() {
        let now = ClockTime::new(23, 59);

        assert_eq!(
            resolve(Some("   "), Some("occupé"), now),
            AvailabilityState::Busy
        );
    }

    #[test]
    fn unrecognized_manual_text_reads_as_available() {
        let now = ClockTime::new(10, 0);

        assert_eq!(resolve(None, Some("parti déjeuner"), now), AvailabilityState::Available);
        assert_eq!(
            resolve(Some("08:00-18:00"), Some("???"), now),
            AvailabilityState::Available
        );
    }

    #[test]
    fn free_text_hours_put_the_technician_off_hours() {
        // A schedule that parses to nothing is still a schedule; it just has
        // no work time anyone could be inside of.
        assert_eq!(
            resolve(Some("not-a-schedule"), Some("disponible"), ClockTime::new(10, 0)),
            AvailabilityState::Unavailable
        );
    }

    #[test]
    fn accentless_and_underscore_spellings_are_accepted() {
        assert_eq!(
            ManualStatus::from_user_input("Occupe"),
            Some(ManualStatus::Busy)
        );
        assert_eq!(
            ManualStatus::from_user_input("  en_pause "),
            Some(ManualStatus::OnBreak)
        );
        assert_eq!(
            ManualStatus::from_user_input("DISPONIBLE"),
            Some(ManualStatus::Available)
        );
        assert_eq!(ManualStatus::from_user_input("absent"), None);
    }

    #[test]
    fn the_break_outranks_any_manual_status() {
        let schedule = Some("08:00-12:00 / 13:00-17:00");
        let during_break = ClockTime::new(12, 30);

        assert_eq!(
            resolve(schedule, Some("disponible"), during_break),
            AvailabilityState::OnBreak
        );
        assert_eq!(
            resolve(schedule, Some("occupé"), during_break),
            AvailabilityState::OnBreak
        );
    }

    #[test]
    fn outside_work_time_outranks_the_manual_status() {
        let schedule = Some("08:00-12:00 / 13:00-17:00");

        assert_eq!(
            resolve(schedule, Some("occupé"), ClockTime::new(7, 59)),
            AvailabilityState::Unavailable
        );
        assert_eq!(
            resolve(schedule, Some("disponible"), ClockTime::new(17, 1)),
            AvailabilityState::Unavailable
        );
    }

    #[test]
    fn a_single_range_schedule_has_no_break() {
        let schedule = Some("09:00-18:00");

        assert_eq!(
            resolve(schedule, None, ClockTime::new(12, 30)),
            AvailabilityState::Available
        );
        assert_eq!(
            resolve(schedule, None, ClockTime::new(8, 59)),
            AvailabilityState::Unavailable
        );
    }

    #[test]
    fn range_endpoints_count_as_work_time() {
        let schedule = Some("08:30-12:30 / 14:00-17:30");

        assert_eq!(
            resolve(schedule, None, ClockTime::new(8, 30)),
            AvailabilityState::Available
        );
        assert_eq!(
            resolve(schedule, None, ClockTime::new(12, 30)),
            AvailabilityState::Available
        );
        assert_eq!(
            resolve(schedule, None, ClockTime::new(17, 30)),
            AvailabilityState::Available
        );
    }

    #[test]
    fn full_day_walkthrough_for_a_busy_technician() {
        let schedule = Some("08:30-12:30 / 14:00-17:30");
        let manual_status = Some("occupé");

        assert_eq!(
            resolve(schedule, manual_status, ClockTime::new(9, 0)),
            AvailabilityState::Busy
        );
        assert_eq!(
            resolve(schedule, manual_status, ClockTime::new(13, 0)),
            AvailabilityState::OnBreak
        );
        assert_eq!(
            resolve(schedule, manual_status, ClockTime::new(17, 45)),
            AvailabilityState::Unavailable
        );
        assert_eq!(
            resolve(schedule, manual_status, ClockTime::new(8, 30)),
            AvailabilityState::Busy
        );
    }

    #[test]
    fn reversed_ranges_leave_the_gap_unavailable() {
        // Afternoon listed first: no minute sits strictly between the
        // first range's end and the second's start, so the gap between the
        // real ranges reads as plain off-hours.
        let schedule = Some("13:00-17:00 / 08:00-12:00");

        assert_eq!(
            resolve(schedule, Some("occupé"), ClockTime::new(12, 30)),
            AvailabilityState::Unavailable
        );
        assert_eq!(
            resolve(schedule, Some("occupé"), ClockTime::new(9, 0)),
            AvailabilityState::Busy
        );
    }

    #[test]
    fn clock_time_drops_seconds() {
        let time = NaiveTime::from_hms_opt(9, 41, 59).unwrap();

        assert_eq!(ClockTime::from(time), ClockTime::new(9, 41));
        assert_eq!(ClockTime::new(9, 41).minute_of_day(), 581);
    }

    #[test]
    fn clock_time_renders_zero_padded() {
        assert_eq!(ClockTime::new(8, 5).to_string(), "08:05");
    }

    #[test]
    fn availability_state_serializes_to_snake_case() {
        assert_eq!(
            serde_json::to_string(&AvailabilityState::OnBreak).unwrap(),
            r#""on_break""#
        );
        assert_eq!(
            serde_json::from_str::<AvailabilityState>(r#""unavailable""#).unwrap(),
            AvailabilityState::Unavailable
        );
    }

    #[test]
    fn manual_status_keeps_its_french_wire_spellings() {
        assert_eq!(
            serde_json::to_string(&ManualStatus::Busy).unwrap(),
            r#""occupé""#
        );
        assert_eq!(
            serde_json::from_str::<ManualStatus>(r#""en pause""#).unwrap(),
            ManualStatus::OnBreak
        );
        assert!(serde_json::from_str::<ManualStatus>(r#""indisponible""#).is_err());
    }

    proptest! {
        #[test]
        fn resolution_never_panics_and_is_repeatable(
            work_hours in proptest::option::of(".{0,40}"),
            manual_status in proptest::option::of(".{0,20}"),
            hour in 0..24u32,
            minute in 0..60u32,
        ) {
            let now = ClockTime::new(hour, minute);
            let first = resolve(work_hours.as_deref(), manual_status.as_deref(), now);
            let second = resolve(work_hours.as_deref(), manual_status.as_deref(), now);

            prop_assert_eq!(first, second);
        }

        #[test]
        fn blank_schedules_only_ever_reflect_the_manual_status(
            hour in 0..24u32,
            minute in 0..60u32,
        ) {
            let now = ClockTime::new(hour, minute);

            prop_assert_eq!(
                resolve(Some(""), Some("occupé"), now),
                AvailabilityState::Busy
            );
            prop_assert_eq!(resolve(None, None, now), AvailabilityState::Available);
        }

        #[test]
        fn letter_only_schedules_resolve_unavailable(
            work_hours in "[a-zéèà ]{1,30}[a-zéèà]",
            hour in 0..24u32,
            minute in 0..60u32,
        ) {
            // No digits means no range survives the parse, and a non-empty
            // schedule with no ranges puts its technician off-hours.
            let resolved = resolve(Some(&work_hours), Some("disponible"), ClockTime::new(hour, minute));

            prop_assert_eq!(resolved, AvailabilityState::Unavailable);
        }
    }
}
