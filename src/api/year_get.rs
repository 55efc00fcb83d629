#![forbid(unsafe_code)]

use poem::Request;
use poem_openapi::{OpenApi, param::Path, payload::PlainText};

use crate::utils::server_utils::{self, RequestDebug};

// ***************************************************************************
//                                Constants
// ***************************************************************************
/// The baseline year that all inputs are classified against.
const REFERENCE_YEAR: i64 = 2019;

// ***************************************************************************
//                          Request/Response Definiions
// ***************************************************************************
pub struct YearApi;

struct ReqGetYear
{
    year: String,
}

// Implement the debug record trait for logging.
impl RequestDebug for ReqGetYear {
    type Req = ReqGetYear;
    fn get_request_info(&self) -> String {
        let mut s = String::with_capacity(64);
        s.push_str("  Request body:");
        s.push_str("\n    year: ");
        s.push_str(&self.year);
        s
    }
}

// ***************************************************************************
//                             OpenAPI Endpoint
// ***************************************************************************
#[OpenApi]
impl YearApi {
    #[oai(path = "/year/:year", method = "get")]
    async fn get_year(&self, http_req: &Request, year: Path<String>) -> PlainText<String> {
        // Package the request parameters.
        let req = ReqGetYear {year: year.0};

        // Conditional logging depending on log level.
        server_utils::debug_request(http_req, &req);

        PlainText(classify_year(&req.year))
    }
}

// ***************************************************************************
//                             Private Functions
// ***************************************************************************
// ---------------------------------------------------------------------------
// classify_year:
// ---------------------------------------------------------------------------
/** Classify a year string against the baseline year.
 *
 * The parse runs before any branching.  Input that does not parse as an
 * integer gets the "not a year" reply instead of falling through to the
 * distance arithmetic.  Valid input echoes the parsed value in decimal.
 */
fn classify_year(year_str: &str) -> String {
    let year: i64 = match year_str.parse() {
        Ok(y) => y,
        Err(_) => return format!("{} is not a year", year_str),
    };

    if year > REFERENCE_YEAR {
        format!("{} is in {} years", year, year - REFERENCE_YEAR)
    } else if year == REFERENCE_YEAR {
        format!("{} is this year!", year)
    } else {
        format!("{} is {} years ago", year, REFERENCE_YEAR - year)
    }
}

// ***************************************************************************
//                                  Tests
// ***************************************************************************
#[cfg(test)]
mod tests {
    use super::classify_year;

    #[test]
    fn the_reference_year_is_this_year() {
        assert_eq!(classify_year("2019"), "2019 is this year!");
    }

    #[test]
    fn future_years_report_the_distance() {
        assert_eq!(classify_year("2025"), "2025 is in 6 years");
        assert_eq!(classify_year("2020"), "2020 is in 1 years");
    }

    #[test]
    fn past_years_report_the_distance() {
        assert_eq!(classify_year("2000"), "2000 is 19 years ago");
        assert_eq!(classify_year("1999"), "1999 is 20 years ago");
        assert_eq!(classify_year("-1"), "-1 is 2020 years ago");
    }

    #[test]
    fn non_numeric_input_is_not_a_year() {
        assert_eq!(classify_year("abc"), "abc is not a year");
        assert_eq!(classify_year(""), " is not a year");
        assert_eq!(classify_year("20x9"), "20x9 is not a year");
        assert_eq!(classify_year("2019.5"), "2019.5 is not a year");
        assert_eq!(classify_year(" 2019"), " 2019 is not a year");
    }

    #[test]
    fn parsed_values_are_echoed_in_decimal() {
        assert_eq!(classify_year("+2025"), "2025 is in 6 years");
        assert_eq!(classify_year("02019"), "2019 is this year!");
    }
}
