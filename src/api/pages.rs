#![forbid(unsafe_code)]

use poem_openapi::{OpenApi, payload::PlainText};

// ***************************************************************************
//                                Constants
// ***************************************************************************
// Fixed page bodies, returned verbatim on every request.
const HOME_PAGE      : &str = "Welcome to my webpage!";
const FAVORITE_FOOD  : &str = "mint chocolate chip ice cream";
const FAVORITE_MOVIE : &str = "When Harry Met Sally";
const ABOUT_ME       : &str = "I am a WDI Instructor who loves coding and solving bugs!";
const CONTACT        : &str = "email: me@me.com";
const NAME           : &str = "drakey";

// ***************************************************************************
//                             OpenAPI Endpoints
// ***************************************************************************
pub struct PagesApi;

#[OpenApi]
impl PagesApi {
    #[oai(path = "/", method = "get")]
    async fn home(&self) -> PlainText<String> {
        PlainText(HOME_PAGE.to_string())
    }

    #[oai(path = "/favorite-food", method = "get")]
    async fn favorite_food(&self) -> PlainText<String> {
        PlainText(FAVORITE_FOOD.to_string())
    }

    #[oai(path = "/favorite-movie", method = "get")]
    async fn favorite_movie(&self) -> PlainText<String> {
        PlainText(FAVORITE_MOVIE.to_string())
    }

    #[oai(path = "/about-me", method = "get")]
    async fn about_me(&self) -> PlainText<String> {
        PlainText(ABOUT_ME.to_string())
    }

    #[oai(path = "/contact", method = "get")]
    async fn contact(&self) -> PlainText<String> {
        PlainText(CONTACT.to_string())
    }

    #[oai(path = "/name", method = "get")]
    async fn name(&self) -> PlainText<String> {
        PlainText(NAME.to_string())
    }
}

// ***************************************************************************
//                                  Tests
// ***************************************************************************
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_bodies_are_fixed_literals() {
        assert_eq!(HOME_PAGE, "Welcome to my webpage!");
        assert_eq!(FAVORITE_FOOD, "mint chocolate chip ice cream");
        assert_eq!(FAVORITE_MOVIE, "When Harry Met Sally");
        assert_eq!(ABOUT_ME, "I am a WDI Instructor who loves coding and solving bugs!");
        assert_eq!(CONTACT, "email: me@me.com");
        assert_eq!(NAME, "drakey");
    }
}
