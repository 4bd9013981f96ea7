//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod federation_error_tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = FederationError::from(io_error);

        match error {
            FederationError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = FederationError::from(json_error);

        match error {
            FederationError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_error = toml::from_str::<toml::Value>("mongodb = [unterminated").unwrap_err();
        let error = FederationError::from(toml_error);

        match error {
            FederationError::ConfigParse(_) => (),
            _ => panic!("Expected ConfigParse error variant"),
        }
    }

    #[tokio::test]
    async fn test_driver_error_conversion() {
        // A malformed URI is rejected by the driver without any network access
        let driver_error = mongodb::options::ClientOptions::parse("not-a-mongodb-uri")
            .await
            .unwrap_err();
        let error = FederationError::from(driver_error);

        match error {
            FederationError::Database(_) => (),
            _ => panic!("Expected Database error variant"),
        }
    }

    #[test]
    fn test_configuration_helper() {
        let error = FederationError::configuration("mongodb.uri is missing");
        match error {
            FederationError::Configuration { ref message } => {
                assert_eq!(message, "mongodb.uri is missing");
            }
            _ => panic!("Expected Configuration error variant"),
        }
    }

    #[test]
    fn test_invalid_document_helper() {
        let error = FederationError::invalid_document("ratings", "expected a document");
        match error {
            FederationError::InvalidDocument { field, message } => {
                assert_eq!(field, "ratings");
                assert_eq!(message, "expected a document");
            }
            _ => panic!("Expected InvalidDocument error variant"),
        }
    }
}

#[cfg(test)]
mod display_tests {
    use super::*;

    #[test]
    fn test_configuration_display() {
        let error = FederationError::configuration("mongodb.database is missing");
        assert_eq!(
            error.to_string(),
            "Configuration error: mongodb.database is missing"
        );
    }

    #[test]
    fn test_invalid_id_display() {
        let error = FederationError::InvalidId {
            id: "not-hex".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid document id: not-hex");
    }

    #[test]
    fn test_closed_display() {
        assert_eq!(
            FederationError::Closed.to_string(),
            "Database connection has been closed"
        );
    }

    #[test]
    fn test_invalid_document_display() {
        let error = FederationError::invalid_document("teamId", "expected a string");
        assert_eq!(
            error.to_string(),
            "Invalid document field 'teamId': expected a string"
        );
    }
}
