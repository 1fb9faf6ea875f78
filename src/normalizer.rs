use crate::model::{ElectionRecord, NormalizeError, VotingMethod};
use crate::schema::{Field, NormalizedRow};
use crate::utils::{is_truthy, parse_date, render_opt, render_value};
use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value;

pub const VOTING_METHOD_SEPARATOR: &str = " | ";
const NAME_LOCALE: &str = "en_US";

/// Which start-date fallback fired for a record. At most one does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFallback {
    /// Declared start was missing and was taken from the range start.
    DeclaredFromRange,
    /// Declared and range start were missing; both take the voting methods' starts.
    BothFromVotingMethods,
    /// Range start was missing and was taken from the declared start.
    RangeFromDeclared,
    /// Voting methods' start was missing and was taken from the declared start.
    VotingMethodsFromDeclared,
    None,
}

/// Flattens one election into an export row relative to `now`.
pub fn normalize(record: &ElectionRecord, now: NaiveDateTime) -> Result<NormalizedRow, NormalizeError> {
    let mut row = NormalizedRow::new();

    collapse_voting_methods(&mut row, record.voting_methods.as_deref());
    extract_scalars(&mut row, record)?;
    resolve_start_dates(&mut row);
    null_empty_optionals(&mut row);

    let declared = row
        .get(Field::ElectionDeclaredStartDate)
        .filter(|v| !v.is_empty())
        .ok_or(NormalizeError::MissingField(Field::ElectionDeclaredStartDate.key()))?;
    let election_date = parse_date(declared).map_err(|source| NormalizeError::InvalidDate {
        field: Field::ElectionDeclaredStartDate.key(),
        value: declared.to_string(),
        source,
    })?;
    let offset = days_offset(election_date, now.date());
    row.set(Field::DaysOffset, Some(offset.to_string()));

    Ok(row)
}

/// Days from `today` until the election, counting election day itself.
/// Past and same-day elections yield 1.
pub fn days_offset(election_date: NaiveDate, today: NaiveDate) -> i64 {
    let offset = (election_date - today).num_days() + 1;
    offset.max(1)
}

fn collapse_voting_methods(row: &mut NormalizedRow, methods: Option<&[VotingMethod]>) {
    let pickers: [(Field, fn(&VotingMethod) -> Option<&Value>); 6] = [
        (Field::VotingMethodsType, |m| m.kind.as_ref()),
        (Field::VotingMethodsPrimary, |m| m.primary.as_ref()),
        (Field::VotingMethodsStartDate, |m| m.start.as_ref()),
        (Field::VotingMethodsEndDate, |m| m.end.as_ref()),
        (Field::VotingMethodsExcuseRequired, |m| m.excuse_required.as_ref()),
        (Field::VotingMethodsInstructions, |m| m.instructions.as_ref()),
    ];

    for (field, pick) in pickers {
        row.set(field, methods.map(|methods| collapse(methods, pick)));
    }
}

/// Joins one sub-field across all voting methods, absent values as `""`.
fn collapse(methods: &[VotingMethod], pick: fn(&VotingMethod) -> Option<&Value>) -> String {
    methods
        .iter()
        .map(|method| pick(method).map(render_value).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(VOTING_METHOD_SEPARATOR)
}

fn extract_scalars(row: &mut NormalizedRow, record: &ElectionRecord) -> Result<(), NormalizeError> {
    let name = record
        .election_name
        .get(NAME_LOCALE)
        .ok_or(NormalizeError::MissingField("election_name.en_US"))?;

    row.set(Field::ElectionId, Some(render_value(&record.election_id)));
    row.set(Field::ElectionNameEncode, Some(NAME_LOCALE.to_string()));
    row.set(Field::ElectionName, Some(render_value(name)));
    row.set(Field::ElectionDateUpdated, render_opt(record.date_updated.as_ref()));
    row.set(Field::ElectionIssues, render_opt(record.election_issues.as_ref()));
    row.set(Field::IsSnapElection, render_opt(record.is_snap_election.as_ref()));
    row.set(Field::OriginalElectionYear, render_opt(record.original_election_year.as_ref()));
    row.set(Field::ElectionRangeStartDate, record.election_range_start_date.clone());
    row.set(Field::ElectionRangeEndDate, render_opt(record.election_range_end_date.as_ref()));
    row.set(Field::IsDelayedCovid19, render_opt(record.is_delayed_covid19.as_ref()));
    row.set(Field::CovidEffects, render_opt(record.covid_effects.as_ref()));
    row.set(Field::ElectionDeclaredStartDate, record.election_declared_start_date.clone());
    row.set(Field::ElectionDeclaredEndDate, render_opt(record.election_declared_end_date.as_ref()));
    row.set(Field::ElectionBlackoutStartDate, render_opt(record.election_blackout_start_date.as_ref()));
    row.set(Field::ElectionBlackoutEndDate, render_opt(record.election_blackout_end_date.as_ref()));
    row.set(Field::ElectionType, render_opt(record.election_type.as_ref()));
    row.set(Field::ElectionScope, render_opt(record.election_scope.as_ref()));
    row.set(Field::ElectoralSystem, render_opt(record.electoral_system.as_ref()));
    row.set(Field::ElectionCommissionName, render_opt(record.election_commission_name.as_ref()));
    row.set(
        Field::ElectionCommissionWebsite,
        render_opt(record.administering_election_commission_website.as_ref()),
    );
    row.set(Field::ElectionSource, render_opt(record.source.as_ref()));

    let district = &record.district;
    row.set(Field::DistrictOcdId, render_opt(district.district_ocd_id.as_ref()));
    row.set(Field::DistrictName, render_opt(district.district_name.as_ref()));
    row.set(Field::DistrictCountry, render_opt(district.district_country.as_ref()));
    row.set(Field::DistrictType, render_opt(district.district_type.as_ref()));

    let functions = &record.government_functions;
    row.set(
        Field::GovernmentFunctions,
        render_opt(functions.details.as_ref().filter(|v| is_truthy(v))),
    );
    row.set(Field::GovernmentFunctionsUpdatedDate, render_opt(functions.updated.as_ref()));

    row.set(Field::VoterRegistrationDeadline, render_opt(record.voter_registration_day.as_ref()));
    row.set(Field::VotingAgeMinimum, render_opt(record.voting_age_minimum_inclusive.as_ref()));
    row.set(Field::EligibleVoters, render_opt(record.eligible_voters.as_ref()));
    row.set(Field::FirstTimeVoters, render_opt(record.first_time_voters.as_ref()));

    Ok(())
}

/// Fills missing start dates from one another. First matching rule wins.
pub fn resolve_start_dates(row: &mut NormalizedRow) -> DateFallback {
    let fallback = if !row.is_present(Field::ElectionDeclaredStartDate) {
        if row.is_present(Field::ElectionRangeStartDate) {
            DateFallback::DeclaredFromRange
        } else {
            DateFallback::BothFromVotingMethods
        }
    } else if !row.is_present(Field::ElectionRangeStartDate) {
        DateFallback::RangeFromDeclared
    } else if row.get(Field::VotingMethodsStartDate).is_none() {
        // Only when voting methods were absent; a joined "" or " | " stays as is.
        DateFallback::VotingMethodsFromDeclared
    } else {
        DateFallback::None
    };

    match fallback {
        DateFallback::DeclaredFromRange => {
            row.copy(Field::ElectionRangeStartDate, Field::ElectionDeclaredStartDate);
        }
        DateFallback::BothFromVotingMethods => {
            row.copy(Field::VotingMethodsStartDate, Field::ElectionRangeStartDate);
            row.copy(Field::VotingMethodsStartDate, Field::ElectionDeclaredStartDate);
        }
        DateFallback::RangeFromDeclared => {
            row.copy(Field::ElectionDeclaredStartDate, Field::ElectionRangeStartDate);
        }
        DateFallback::VotingMethodsFromDeclared => {
            row.copy(Field::ElectionDeclaredStartDate, Field::VotingMethodsStartDate);
        }
        DateFallback::None => {}
    }

    fallback
}

fn null_empty_optionals(row: &mut NormalizedRow) {
    for field in [Field::GovernmentFunctions, Field::VotingMethodsExcuseRequired] {
        if !row.is_present(field) {
            row.set(field, None);
        }
    }
}
