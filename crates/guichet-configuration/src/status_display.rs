use guichet_staffing_environment::technician_environment::availability::AvailabilityState;
use serde::Deserialize;
use serde::Serialize;

/// How each availability state is presented, on the wall board and in
/// terminals alike.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StatusDisplay {
    pub available: StatusStyle,
    pub busy: StatusStyle,
    pub on_break: StatusStyle,
    pub unavailable: StatusStyle,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StatusStyle {
    pub label: String,
    pub color: (u8, u8, u8),
}

impl StatusDisplay {
    pub fn style(&self, state: AvailabilityState) -> &StatusStyle {
        match state {
            AvailabilityState::Available => &self.available,
            AvailabilityState::Busy => &self.busy,
            AvailabilityState::OnBreak => &self.on_break,
            AvailabilityState::Unavailable => &self.unavailable,
        }
    }
}

impl StatusStyle {
    pub fn hex_color(&self) -> String {
        let (red, green, blue) = self.color;
        format!("#{red:02x}{green:02x}{blue:02x}")
    }
}
