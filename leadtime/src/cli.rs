//! Command-line arguments for the `leadtime` binary.

use clap::{Parser, ValueEnum};
use lt_leadtime::{
    CafStatus, ContractStatus, DeadlineRequest, EquipmentArrangement, LineType,
    RegistrationChannel,
};
use lt_time::{Date, HolidayCalendar, Japan, NoHolidays};

/// Work back from a construction date to the application deadline.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Requested (or provisional) construction date, YYYY-MM-DD.
    #[arg(long, value_name = "DATE")]
    pub target: Date,
    /// Line type: flets-1g, flets-10g, docomo-1g, docomo-10g.
    #[arg(long = "line", value_name = "LINE")]
    pub line_type: LineType,
    /// Router arrangement: onsite-rental-setup, customer-rental-setup, owned-terminal.
    #[arg(long = "router", value_name = "ARRANGEMENT")]
    pub arrangement: EquipmentArrangement,
    /// Registration channel: self-web-entry (web), agent-channel (agent).
    #[arg(long = "entry", value_name = "CHANNEL")]
    pub channel: RegistrationChannel,
    /// Contract status (informational).
    #[arg(long = "contract", value_name = "STATUS", default_value = "new-or-transfer")]
    pub contract_status: ContractStatus,
    /// Whether the CAF number is known: known, unknown.
    #[arg(long = "caf", value_name = "STATUS", default_value = "known")]
    pub caf_status: CafStatus,
    /// Evaluation date, YYYY-MM-DD. Defaults to the local system date.
    #[arg(long, value_name = "DATE")]
    pub today: Option<Date>,
    /// Holiday calendar to skip besides weekends.
    #[arg(long, value_enum, default_value_t = CalendarChoice::Japan)]
    pub calendar: CalendarChoice,
    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// The request described by the arguments.
    pub fn request(&self) -> DeadlineRequest {
        DeadlineRequest::new(self.target, self.line_type, self.arrangement, self.channel)
            .with_contract_status(self.contract_status)
            .with_caf_status(self.caf_status)
    }
}

/// Holiday calendars selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CalendarChoice {
    /// Japanese national holidays.
    Japan,
    /// Weekends only, no public holidays.
    Weekends,
}

impl CalendarChoice {
    /// The calendar instance.
    pub fn calendar(&self) -> &'static dyn HolidayCalendar {
        match self {
            CalendarChoice::Japan => &Japan,
            CalendarChoice::Weekends => &NoHolidays,
        }
    }
}
