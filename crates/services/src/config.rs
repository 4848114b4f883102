use std::env;

use edu_core::model::EndpointsDraft;

pub const ENV_AUTH_URL: &str = "EDU_AUTH_URL";
pub const ENV_COURSES_URL: &str = "EDU_COURSES_URL";

/// Endpoint overrides from the environment; unset or blank variables stay `None`.
#[must_use]
pub fn endpoints_from_env() -> EndpointsDraft {
    EndpointsDraft {
        auth_url: non_blank_var(ENV_AUTH_URL),
        courses_url: non_blank_var(ENV_COURSES_URL),
    }
}

fn non_blank_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}
