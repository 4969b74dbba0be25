use serde::Deserialize;
use serde::Serialize;

/// Cadence of the technician board rebuild.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Refresh {
    pub board_seconds: u64,
}

impl Default for Refresh {
    fn default() -> Self {
        Self { board_seconds: 60 }
    }
}

#[cfg(test)]
mod tests {
    use super::Refresh;

    #[test]
    fn parses_the_board_cadence() {
        let refresh: Refresh = toml::from_str("board_seconds = 30").unwrap();

        assert_eq!(refresh.board_seconds, 30);
    }

    #[test]
    fn the_default_cadence_is_one_minute() {
        assert_eq!(Refresh::default().board_seconds, 60);
    }
}
