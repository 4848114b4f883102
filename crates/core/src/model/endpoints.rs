use thiserror::Error;
use url::Url;

/// Production auth function.
pub const DEFAULT_AUTH_URL: &str =
    "https://functions.poehali.dev/b207e2f4-2db5-4525-a048-f4b39493ad37";
/// Production course function.
pub const DEFAULT_COURSES_URL: &str =
    "https://functions.poehali.dev/c78ff66c-980f-4123-93e3-ee8fcb549148";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EndpointsError {
    #[error("invalid auth URL: {raw}")]
    InvalidAuthUrl { raw: String },
    #[error("invalid courses URL: {raw}")]
    InvalidCoursesUrl { raw: String },
}

/// The two remote functions the client talks to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    auth: Url,
    courses: Url,
}

impl Endpoints {
    #[must_use]
    pub fn auth(&self) -> &Url {
        &self.auth
    }

    #[must_use]
    pub fn courses(&self) -> &Url {
        &self.courses
    }
}

/// Unvalidated endpoint overrides, e.g. from flags or the environment.
#[derive(Clone, Debug, Default)]
pub struct EndpointsDraft {
    pub auth_url: Option<String>,
    pub courses_url: Option<String>,
}

impl EndpointsDraft {
    /// Layer `other` on top of `self`; values set in `other` win.
    #[must_use]
    pub fn merge(self, other: EndpointsDraft) -> Self {
        Self {
            auth_url: other.auth_url.or(self.auth_url),
            courses_url: other.courses_url.or(self.courses_url),
        }
    }

    /// Validate and fill unset values with the production defaults.
    ///
    /// # Errors
    ///
    /// Returns `EndpointsError` if a URL does not parse or is not http(s).
    pub fn validate(self) -> Result<Endpoints, EndpointsError> {
        let auth_raw = normalize(self.auth_url).unwrap_or_else(|| DEFAULT_AUTH_URL.to_string());
        let courses_raw =
            normalize(self.courses_url).unwrap_or_else(|| DEFAULT_COURSES_URL.to_string());

        let auth = parse_http(&auth_raw)
            .ok_or(EndpointsError::InvalidAuthUrl { raw: auth_raw.clone() })?;
        let courses = parse_http(&courses_raw).ok_or(EndpointsError::InvalidCoursesUrl {
            raw: courses_raw.clone(),
        })?;

        Ok(Endpoints { auth, courses })
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_http(raw: &str) -> Option<Url> {
    let url = Url::parse(raw).ok()?;
    matches!(url.scheme(), "http" | "https").then_some(url)
}
