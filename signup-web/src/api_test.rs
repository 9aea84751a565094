//! Tests for API client path construction.

#[cfg(test)]
mod tests {
    use crate::api::SignupClient;

    #[test]
    fn api_url_joins_base_and_path() {
        let client = SignupClient::new("http://localhost:8000");
        assert_eq!(
            client.api_url("activities"),
            "http://localhost:8000/activities"
        );
        assert_eq!(client.api_url("/auth/me"), "http://localhost:8000/auth/me");
    }

    #[test]
    fn api_url_trims_trailing_slash() {
        let client = SignupClient::new("http://localhost:8000/");
        assert_eq!(client.api_url("auth/login"), "http://localhost:8000/auth/login");
    }

    #[test]
    fn default_base_yields_same_origin_paths() {
        let client = SignupClient::new("");
        assert_eq!(client.api_url("activities"), "/activities");
    }

    #[test]
    fn signup_path_encodes_activity_name() {
        assert_eq!(
            SignupClient::signup_path("Chess Club"),
            "activities/Chess%20Club/signup"
        );
    }

    #[test]
    fn unregister_path_encodes_activity_name() {
        assert_eq!(
            SignupClient::unregister_path("Art & Design"),
            "activities/Art%20%26%20Design/unregister"
        );
    }

    #[test]
    fn plain_names_pass_through_unchanged() {
        assert_eq!(SignupClient::signup_path("Chess"), "activities/Chess/signup");
    }
}
