use chrono::{Datelike, NaiveDate, NaiveDateTime};

use super::{Line, Tone};
use crate::session::Session;

/// In-game calendar year shown on the welcome screen.
pub const GAME_YEAR: i32 = 2023;

const SEPARATOR: &str = "------------------------------------------------------------------";

/// `now` moved into [`GAME_YEAR`]. Feb 29 rolls over to Mar 1.
fn game_date(now: NaiveDateTime) -> NaiveDateTime {
    now.with_year(GAME_YEAR)
        .or_else(|| NaiveDate::from_ymd_opt(GAME_YEAR, 3, 1).map(|d| d.and_time(now.time())))
        .unwrap_or(now)
}

pub fn welcome_banner(player_name: &str, now: NaiveDateTime) -> Vec<Line> {
    let game_date = game_date(now);
    vec![
        Line::plain(""),
        Line::plain("Welcome, ")
            .push(player_name, Tone::Accent)
            .push(" to MicroInject Inc.!", Tone::Plain),
        Line::plain(""),
        Line::plain(
            "Here in MircoInject Inc. we specialize in find way to cure disease with DNA injection therapy.",
        ),
        Line::plain(""),
        Line::plain(format!(" Time: {}", now.format("%-I:%M:%S %p"))),
        Line::plain(format!(" Date: {}", game_date.format("%-m/%-d/%Y"))),
        Line::plain(SEPARATOR),
        Line::plain(""),
        Line::plain("Type 'help' for a list of commands."),
        Line::plain(""),
    ]
}

/// `<name>@:<path>$ `
pub fn prompt_line(session: &Session) -> Line {
    Line::toned(format!("{}@", session.player_name()), Tone::Success)
        .push(":", Tone::Plain)
        .push(session.display_path(), Tone::Warning)
        .push("$ ", Tone::Plain)
}
