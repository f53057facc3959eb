//! Flight Table Module
//! Column names, supported years and the per-request year filter.

use polars::prelude::*;

/// Source dataset: US domestic airline on-time reporting extract.
pub const AIRLINE_DATA_URL: &str = "https://cf-courses-data.s3.us.cloud-object-storage.appdomain.cloud/IBMDeveloperSkillsNetwork-DV0101EN-SkillsNetwork/Data%20Files/airline_data.csv";

/// Years covered by the dataset.
pub const SUPPORTED_YEARS: std::ops::RangeInclusive<u16> = 2005..=2020;

pub mod columns {
    pub const YEAR: &str = "Year";
    pub const MONTH: &str = "Month";
    pub const REPORTING_AIRLINE: &str = "Reporting_Airline";
    pub const ORIGIN_STATE: &str = "OriginState";
    pub const DEST_STATE: &str = "DestState";
    pub const FLIGHTS: &str = "Flights";
    pub const AIR_TIME: &str = "AirTime";
    pub const CANCELLATION_CODE: &str = "CancellationCode";
    pub const DIV_AIRPORT_LANDINGS: &str = "DivAirportLandings";
    pub const CARRIER_DELAY: &str = "CarrierDelay";
    pub const WEATHER_DELAY: &str = "WeatherDelay";
    pub const NAS_DELAY: &str = "NASDelay";
    pub const SECURITY_DELAY: &str = "SecurityDelay";
    pub const LATE_AIRCRAFT_DELAY: &str = "LateAircraftDelay";
}

/// Select the rows of one reporting year.
///
/// The result is a fresh DataFrame derived per request; the source table is
/// never mutated.
pub fn filter_year(df: &DataFrame, year: u16) -> PolarsResult<DataFrame> {
    df.clone()
        .lazy()
        .filter(col(columns::YEAR).eq(lit(year as i32)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_year_frame() -> DataFrame {
        df!(
            columns::YEAR => &[2019i32, 2019, 2020, 2020, 2020],
            columns::MONTH => &[1i32, 2, 1, 1, 3],
            columns::FLIGHTS => &[1.0f64, 1.0, 1.0, 1.0, 1.0],
        )
        .unwrap()
    }

    #[test]
    fn filter_year_keeps_only_matching_rows() {
        let df = two_year_frame();

        let filtered = filter_year(&df, 2020).unwrap();
        assert_eq!(filtered.height(), 3);

        let years = filtered.column(columns::YEAR).unwrap().i32().unwrap();
        assert!(years.into_no_null_iter().all(|y| y == 2020));
    }

    #[test]
    fn filter_year_on_absent_year_is_empty() {
        let df = two_year_frame();
        let filtered = filter_year(&df, 2005).unwrap();
        assert_eq!(filtered.height(), 0);
    }

    #[test]
    fn supported_years_cover_dataset_range() {
        assert!(SUPPORTED_YEARS.contains(&2005));
        assert!(SUPPORTED_YEARS.contains(&2020));
        assert!(!SUPPORTED_YEARS.contains(&2021));
        assert_eq!(SUPPORTED_YEARS.count(), 16);
    }
}
