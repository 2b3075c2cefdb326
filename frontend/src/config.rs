use log::Level;

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}

/// How long the success acknowledgment stays on screen before the dialog closes itself.
pub const AUTO_CLOSE_DELAY_MS: u32 = 2_000;

// One or more characters that are neither `@` nor whitespace as browsers define it
// (ECMAScript `\s`). Unicode `\s` would also reject U+0085 and accept U+FEFF.
macro_rules! email_part {
    () => {
        r"[^\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}@]+"
    };
}

/// Loose email shape: something, `@`, something, `.`, something. No whitespace, no second `@`.
pub const EMAIL_PATTERN: &str = concat!("^", email_part!(), "@", email_part!(), r"\.", email_part!(), "$");

pub const EVENT_WEEKDAY: &str = "Jueves";
pub const EVENT_DATE: &str = "26 de Junio";

pub const HERO_BACKGROUND: &str = "/assets/EVENTO FIT.jpg";
pub const DETAILS_BACKGROUND: &str = "/assets/EVENTO FITNESS.jpg";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduleEntry {
    /// Local start time followed by the city, e.g. "8 PM CDMX".
    pub time: &'static str,
    pub flag: &'static str,
}

impl ScheduleEntry {
    pub fn city(&self) -> &'static str {
        self.time.rsplit(' ').next().unwrap_or(self.time)
    }
}

pub const SCHEDULE: &[ScheduleEntry] = &[
    ScheduleEntry { time: "8 PM CDMX", flag: "/assets/mexico flag.png" },
    ScheduleEntry { time: "9 PM Miami", flag: "/assets/EEUU flag.png" },
    ScheduleEntry { time: "8 PM Bogotá", flag: "/assets/colombia flag.png" },
    ScheduleEntry { time: "10 PM Santiago", flag: "/assets/chile flag.png" },
    ScheduleEntry { time: "3 AM Madrid", flag: "/assets/españa flag.png" },
];
