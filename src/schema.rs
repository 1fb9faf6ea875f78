// Output schema: internal field names, their CSV column names and the flat row.

pub const FIELD_COUNT: usize = 38;

/// Every field of an exported row, in CSV column order.
///
/// The discriminant doubles as the column index, so [`Field::ALL`] must list
/// the variants in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    ElectionId,
    ElectionNameEncode,
    ElectionName,
    ElectionDateUpdated,
    ElectionIssues,
    IsSnapElection,
    OriginalElectionYear,
    ElectionRangeStartDate,
    ElectionRangeEndDate,
    IsDelayedCovid19,
    CovidEffects,
    ElectionDeclaredStartDate,
    ElectionDeclaredEndDate,
    ElectionBlackoutStartDate,
    ElectionBlackoutEndDate,
    ElectionType,
    ElectionScope,
    ElectoralSystem,
    ElectionCommissionName,
    ElectionCommissionWebsite,
    ElectionSource,
    DistrictOcdId,
    DistrictName,
    DistrictCountry,
    DistrictType,
    GovernmentFunctions,
    GovernmentFunctionsUpdatedDate,
    VoterRegistrationDeadline,
    VotingAgeMinimum,
    EligibleVoters,
    FirstTimeVoters,
    VotingMethodsType,
    VotingMethodsPrimary,
    VotingMethodsStartDate,
    VotingMethodsEndDate,
    VotingMethodsExcuseRequired,
    VotingMethodsInstructions,
    DaysOffset,
}

impl Field {
    pub const ALL: [Field; FIELD_COUNT] = [
        Field::ElectionId,
        Field::ElectionNameEncode,
        Field::ElectionName,
        Field::ElectionDateUpdated,
        Field::ElectionIssues,
        Field::IsSnapElection,
        Field::OriginalElectionYear,
        Field::ElectionRangeStartDate,
        Field::ElectionRangeEndDate,
        Field::IsDelayedCovid19,
        Field::CovidEffects,
        Field::ElectionDeclaredStartDate,
        Field::ElectionDeclaredEndDate,
        Field::ElectionBlackoutStartDate,
        Field::ElectionBlackoutEndDate,
        Field::ElectionType,
        Field::ElectionScope,
        Field::ElectoralSystem,
        Field::ElectionCommissionName,
        Field::ElectionCommissionWebsite,
        Field::ElectionSource,
        Field::DistrictOcdId,
        Field::DistrictName,
        Field::DistrictCountry,
        Field::DistrictType,
        Field::GovernmentFunctions,
        Field::GovernmentFunctionsUpdatedDate,
        Field::VoterRegistrationDeadline,
        Field::VotingAgeMinimum,
        Field::EligibleVoters,
        Field::FirstTimeVoters,
        Field::VotingMethodsType,
        Field::VotingMethodsPrimary,
        Field::VotingMethodsStartDate,
        Field::VotingMethodsEndDate,
        Field::VotingMethodsExcuseRequired,
        Field::VotingMethodsInstructions,
        Field::DaysOffset,
    ];

    /// External CSV column name.
    pub fn column(self) -> &'static str {
        match self {
            Field::ElectionId => "ExternalID",
            Field::ElectionNameEncode => "NameEncode",
            Field::ElectionName => "ElectName",
            Field::ElectionDateUpdated => "PubDate",
            Field::ElectionIssues => "ElectIssues",
            Field::IsSnapElection => "Snap",
            Field::OriginalElectionYear => "OrigElectYear",
            Field::ElectionRangeStartDate => "StartTime",
            Field::ElectionRangeEndDate => "EndTime",
            Field::IsDelayedCovid19 => "CovidDelay",
            Field::CovidEffects => "CovidEffects",
            Field::ElectionDeclaredStartDate => "ElectStartDate",
            Field::ElectionDeclaredEndDate => "ElectEndDate",
            Field::ElectionBlackoutStartDate => "ElectBlackoutStartDate",
            Field::ElectionBlackoutEndDate => "ElectBlackoutEndDate",
            Field::ElectionType => "Category",
            Field::ElectionScope => "SubCategory",
            Field::ElectoralSystem => "ElecSys",
            Field::ElectionCommissionName => "ElectCommName",
            Field::ElectionCommissionWebsite => "Url",
            Field::ElectionSource => "Source",
            Field::DistrictOcdId => "DistrictID",
            Field::DistrictName => "Title",
            Field::DistrictCountry => "CountryCode",
            Field::DistrictType => "DistrictType",
            Field::GovernmentFunctions => "GovFun",
            Field::GovernmentFunctionsUpdatedDate => "GovFunUpdate",
            Field::VoterRegistrationDeadline => "RegDeadline",
            Field::VotingAgeMinimum => "VotingAge",
            Field::EligibleVoters => "EligibleVoters",
            Field::FirstTimeVoters => "FirstTimeVoters",
            Field::VotingMethodsType => "VotingType",
            Field::VotingMethodsPrimary => "VotingPrimary",
            Field::VotingMethodsStartDate => "VotingStartDate",
            Field::VotingMethodsEndDate => "VotingEndDate",
            Field::VotingMethodsExcuseRequired => "Excuse",
            Field::VotingMethodsInstructions => "Description",
            Field::DaysOffset => "DaysOffset",
        }
    }

    /// Internal snake_case name, used in log and error messages.
    pub fn key(self) -> &'static str {
        match self {
            Field::ElectionId => "election_id",
            Field::ElectionNameEncode => "election_name_encode",
            Field::ElectionName => "election_name",
            Field::ElectionDateUpdated => "election_date_updated",
            Field::ElectionIssues => "election_issues",
            Field::IsSnapElection => "is_snap_election",
            Field::OriginalElectionYear => "original_election_year",
            Field::ElectionRangeStartDate => "election_range_start_date",
            Field::ElectionRangeEndDate => "election_range_end_date",
            Field::IsDelayedCovid19 => "is_delayed_covid19",
            Field::CovidEffects => "covid_effects",
            Field::ElectionDeclaredStartDate => "election_declared_start_date",
            Field::ElectionDeclaredEndDate => "election_declared_end_date",
            Field::ElectionBlackoutStartDate => "election_blackout_start_date",
            Field::ElectionBlackoutEndDate => "election_blackout_end_date",
            Field::ElectionType => "election_type",
            Field::ElectionScope => "election_scope",
            Field::ElectoralSystem => "electoral_system",
            Field::ElectionCommissionName => "election_commission_name",
            Field::ElectionCommissionWebsite => "administering_election_commission_website",
            Field::ElectionSource => "election_source",
            Field::DistrictOcdId => "district_ocd_id",
            Field::DistrictName => "district_name",
            Field::DistrictCountry => "district_country",
            Field::DistrictType => "district_type",
            Field::GovernmentFunctions => "government_functions",
            Field::GovernmentFunctionsUpdatedDate => "government_functions_updated_date",
            Field::VoterRegistrationDeadline => "voter_registration_day_deadline",
            Field::VotingAgeMinimum => "voting_age_minimum_inclusive",
            Field::EligibleVoters => "eligible_voters",
            Field::FirstTimeVoters => "first_time_voters",
            Field::VotingMethodsType => "voting_methods_type",
            Field::VotingMethodsPrimary => "voting_methods_primary",
            Field::VotingMethodsStartDate => "voting_methods_start_date",
            Field::VotingMethodsEndDate => "voting_methods_end_date",
            Field::VotingMethodsExcuseRequired => "voting_methods_excuse_required",
            Field::VotingMethodsInstructions => "voting_methods_instructions",
            Field::DaysOffset => "days_offset",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Header row of every export file.
pub fn header() -> impl Iterator<Item = &'static str> {
    Field::ALL.into_iter().map(Field::column)
}

/// A flat export row. `None` is the single empty marker and is written as an
/// empty cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRow {
    cells: [Option<String>; FIELD_COUNT],
}

impl Default for NormalizedRow {
    fn default() -> Self {
        Self::new()
    }
}

impl NormalizedRow {
    pub fn new() -> Self {
        Self {
            cells: std::array::from_fn(|_| None),
        }
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.cells[field.index()].as_deref()
    }

    pub fn set(&mut self, field: Field, value: Option<String>) {
        self.cells[field.index()] = value;
    }

    /// True when the field holds a non-empty value.
    pub fn is_present(&self, field: Field) -> bool {
        self.get(field).is_some_and(|v| !v.is_empty())
    }

    pub fn copy(&mut self, from: Field, to: Field) {
        self.cells[to.index()] = self.cells[from.index()].clone();
    }

    /// Cells in column order, empty marker rendered as `""`.
    pub fn record(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|cell| cell.as_deref().unwrap_or(""))
    }
}
