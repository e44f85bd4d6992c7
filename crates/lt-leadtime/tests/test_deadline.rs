//! End-to-end deadline scenarios.

use lt_core::Error;
use lt_leadtime::{
    compute_deadline, Advisory, CafStatus, ConnectionSpeedClass, ContractStatus, DeadlineError,
    DeadlineRequest, EquipmentArrangement, LeadTime, LineType, RegistrationChannel, Selection,
};
use lt_time::{Date, HolidayCalendar, Japan, NoHolidays};
use proptest::prelude::*;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn today() -> Date {
    date(2026, 10, 19)
}

#[derive(Debug)]
struct EveryDay;

impl HolidayCalendar for EveryDay {
    fn name(&self) -> &str {
        "Every Day"
    }

    fn is_public_holiday(&self, _date: Date) -> bool {
        true
    }
}

#[test]
fn lead_time_table_scenarios() {
    let cases = [
        (EquipmentArrangement::OnsiteRentalSetup, RegistrationChannel::SelfWebEntry, 15),
        (EquipmentArrangement::CustomerRentalSetup, RegistrationChannel::AgentChannel, 13),
        (EquipmentArrangement::OwnedTerminal, RegistrationChannel::SelfWebEntry, 5),
    ];
    for (arrangement, channel, expected) in cases {
        let request = DeadlineRequest::new(date(2026, 12, 21), LineType::Flets1G, arrangement, channel);
        let result = compute_deadline(&request, today(), &NoHolidays).unwrap();
        assert_eq!(result.total_lead_time_days, expected, "{arrangement} + {channel}");
        assert_eq!(result.lead_time, LeadTime::resolve(arrangement, channel));
    }
}

#[test]
fn ten_gig_rental_is_rejected() {
    for line in [LineType::Flets10G, LineType::Docomo10G] {
        for arrangement in [
            EquipmentArrangement::OnsiteRentalSetup,
            EquipmentArrangement::CustomerRentalSetup,
        ] {
            let request =
                DeadlineRequest::new(date(2026, 12, 21), line, arrangement, RegistrationChannel::SelfWebEntry);
            // The failing calendar proves no offset is attempted.
            let err = compute_deadline(&request, today(), &EveryDay).unwrap_err();
            assert_eq!(
                err,
                DeadlineError::Incompatible {
                    speed: ConnectionSpeedClass::TenGig,
                    arrangement,
                }
            );
        }
    }
}

#[test]
fn ten_gig_owned_terminal_is_fine() {
    let request = DeadlineRequest::new(
        date(2026, 12, 21),
        LineType::Docomo10G,
        EquipmentArrangement::OwnedTerminal,
        RegistrationChannel::AgentChannel,
    );
    let result = compute_deadline(&request, today(), &NoHolidays).unwrap();
    assert_eq!(result.total_lead_time_days, 7);
}

#[test]
fn monday_without_holidays() {
    // Mon 2026-11-30, 5 business days back over one weekend → Mon 2026-11-23;
    // 2 business days forward → Wed 2026-12-02.
    let monday = date(2026, 11, 30);
    let request = DeadlineRequest::new(
        monday,
        LineType::Flets1G,
        EquipmentArrangement::OwnedTerminal,
        RegistrationChannel::SelfWebEntry,
    );
    let result = compute_deadline(&request, today(), &NoHolidays).unwrap();
    assert_eq!(result.target_date, monday);
    assert_eq!(result.total_lead_time_days, 5);
    assert_eq!(result.deadline, date(2026, 11, 23));
    assert_eq!(result.earliest_usable, date(2026, 12, 2));
    assert!(!result.deadline_passed);
    assert!(result.advisories.is_empty());
}

#[test]
fn japanese_holidays_push_the_deadline_back() {
    // Same request with the Japanese calendar: Labour Thanksgiving Day
    // (Mon 2026-11-23) is skipped → Fri 2026-11-20.
    let request = DeadlineRequest::new(
        date(2026, 11, 30),
        LineType::Flets1G,
        EquipmentArrangement::OwnedTerminal,
        RegistrationChannel::SelfWebEntry,
    );
    let result = compute_deadline(&request, today(), &Japan).unwrap();
    assert_eq!(result.deadline, date(2026, 11, 20));
    assert_eq!(result.earliest_usable, date(2026, 12, 2));
}

#[test]
fn onsite_rental_over_new_year() {
    // Target Mon 2027-01-18, 17 business days back with Japanese holidays.
    // Jan 1 and Coming of Age Day (Jan 11) are skipped.
    let request = DeadlineRequest::new(
        date(2027, 1, 18),
        LineType::Docomo1G,
        EquipmentArrangement::OnsiteRentalSetup,
        RegistrationChannel::AgentChannel,
    );
    let result = compute_deadline(&request, today(), &Japan).unwrap();
    assert_eq!(result.total_lead_time_days, 17);
    assert_eq!(result.deadline, date(2026, 12, 22));
    assert_eq!(Japan.business_days_between(result.deadline, request.target_date), 17);
}

#[test]
fn stale_deadline_sets_advisory() {
    // Target two days from today with a 17-day lead time.
    let request = DeadlineRequest::new(
        date(2026, 10, 21),
        LineType::Flets1G,
        EquipmentArrangement::OnsiteRentalSetup,
        RegistrationChannel::AgentChannel,
    );
    let result = compute_deadline(&request, today(), &Japan).unwrap();
    assert!(result.deadline_passed);
    assert!(result.deadline < today());
    assert_eq!(
        result.advisories,
        vec![Advisory::DeadlinePassed {
            deadline: result.deadline,
            today: today(),
        }]
    );
}

#[test]
fn past_target_is_invalid_input() {
    let request = DeadlineRequest::new(
        date(2026, 10, 1),
        LineType::Flets1G,
        EquipmentArrangement::OwnedTerminal,
        RegistrationChannel::SelfWebEntry,
    );
    let err = compute_deadline(&request, today(), &NoHolidays).unwrap_err();
    assert!(matches!(err, DeadlineError::Core(Error::InvalidInput(_))));
}

#[test]
fn exhausted_calendar_surfaces_as_core_error() {
    let request = DeadlineRequest::new(
        date(2026, 11, 30),
        LineType::Flets1G,
        EquipmentArrangement::OwnedTerminal,
        RegistrationChannel::SelfWebEntry,
    );
    let err = compute_deadline(&request, today(), &EveryDay).unwrap_err();
    assert!(matches!(err, DeadlineError::Core(Error::OracleExhaustion { .. })));
}

#[test]
fn json_shape() {
    let request = DeadlineRequest::new(
        date(2026, 11, 30),
        LineType::Flets1G,
        EquipmentArrangement::OwnedTerminal,
        RegistrationChannel::SelfWebEntry,
    )
    .with_caf_status(CafStatus::Unknown);
    let result = compute_deadline(&request, today(), &NoHolidays).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["deadline"], "2026-11-23");
    assert_eq!(json["earliest_usable"], "2026-12-02");
    assert_eq!(json["total_lead_time_days"], 5);
    assert_eq!(json["lead_time"]["equipment"], 4);
    assert_eq!(json["advisories"][0]["kind"], "caf-number-required");
}

#[test]
fn request_deserializes_with_defaults() {
    let request: DeadlineRequest = serde_json::from_str(
        r#"{
            "target_date": "2026-11-30",
            "line_type": "flets-10g",
            "arrangement": "owned-terminal",
            "channel": "agent-channel"
        }"#,
    )
    .unwrap();
    assert_eq!(request.line_type, LineType::Flets10G);
    assert_eq!(request.contract_status, ContractStatus::NewOrTransfer);
    assert_eq!(request.caf_status, CafStatus::Known);
}

fn any_request() -> impl Strategy<Value = DeadlineRequest> {
    let lo = date(2026, 10, 19).serial();
    let hi = date(2030, 12, 31).serial();
    (
        lo..=hi,
        0..LineType::ALL.len(),
        0..EquipmentArrangement::ALL.len(),
        0..RegistrationChannel::ALL.len(),
        0..ContractStatus::ALL.len(),
    )
        .prop_map(|(s, l, a, c, k)| {
            DeadlineRequest::new(
                Date::from_serial(s).unwrap(),
                LineType::ALL[l],
                EquipmentArrangement::ALL[a],
                RegistrationChannel::ALL[c],
            )
            .with_contract_status(ContractStatus::ALL[k])
        })
}

proptest! {
    #[test]
    fn deterministic_and_closed(request in any_request()) {
        let first = compute_deadline(&request, today(), &Japan);
        let second = compute_deadline(&request, today(), &Japan);
        prop_assert_eq!(&first, &second);
        match first {
            Ok(result) => {
                prop_assert!(Japan.is_business_day(result.deadline));
                prop_assert!(Japan.is_business_day(result.earliest_usable));
                prop_assert!(result.deadline < request.target_date);
                prop_assert!(result.earliest_usable > request.target_date);
                prop_assert_eq!(result.deadline_passed, result.deadline < today());
            }
            Err(err) => {
                let is_incompatible = matches!(err, DeadlineError::Incompatible { .. });
                prop_assert!(is_incompatible);
                prop_assert_eq!(request.line_type.speed_class(), ConnectionSpeedClass::TenGig);
                prop_assert!(request.arrangement.is_rental());
            }
        }
    }

    #[test]
    fn contract_status_never_changes_the_result(request in any_request()) {
        let base = compute_deadline(&request, today(), &Japan);
        for &status in ContractStatus::ALL {
            let other = compute_deadline(&request.with_contract_status(status), today(), &Japan);
            prop_assert_eq!(&base, &other);
        }
    }
}
