#![forbid(unsafe_code)]

use poem::Request;
use poem_openapi::{OpenApi, param::Path, payload::PlainText};

use crate::utils::roster;
use crate::utils::server_utils::{self, RequestDebug};

// ***************************************************************************
//                          Request/Response Definiions
// ***************************************************************************
pub struct StudentsApi;

struct ReqGetStudent
{
    name: String,
}

// Implement the debug record trait for logging.
impl RequestDebug for ReqGetStudent {
    type Req = ReqGetStudent;
    fn get_request_info(&self) -> String {
        let mut s = String::with_capacity(64);
        s.push_str("  Request body:");
        s.push_str("\n    name: ");
        s.push_str(&self.name);
        s
    }
}

// ***************************************************************************
//                             OpenAPI Endpoint
// ***************************************************************************
#[OpenApi]
impl StudentsApi {
    #[oai(path = "/students/:name", method = "get")]
    async fn get_student(&self, http_req: &Request, name: Path<String>) -> PlainText<String> {
        // Package the request parameters.
        let req = ReqGetStudent {name: name.0};

        // Conditional logging depending on log level.
        server_utils::debug_request(http_req, &req);

        PlainText(student_reply(&req.name))
    }
}

// ***************************************************************************
//                             Private Functions
// ***************************************************************************
// ---------------------------------------------------------------------------
// student_reply:
// ---------------------------------------------------------------------------
/** Look the name up in the class roster.  Every input produces a reply,
 * so there is no error branch.
 */
fn student_reply(name: &str) -> String {
    if roster::is_enrolled(name) {
        format!("{} is in our class", name)
    } else {
        format!("who is {}?", name)
    }
}

// ***************************************************************************
//                                  Tests
// ***************************************************************************
#[cfg(test)]
mod tests {
    use super::student_reply;
    use crate::utils::roster::ROSTER;

    #[test]
    fn enrolled_names_are_acknowledged() {
        for name in ROSTER.iter() {
            assert_eq!(student_reply(name), format!("{} is in our class", name));
        }
    }

    #[test]
    fn unknown_names_get_the_question() {
        assert_eq!(student_reply("drake"), "who is drake?");
        assert_eq!(student_reply("Ashley"), "who is Ashley?");
        assert_eq!(student_reply(""), "who is ?");
        assert_eq!(student_reply("zoë"), "who is zoë?");
    }
}
