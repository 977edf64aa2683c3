/// Obsolete flow version lookup via the Tooling API.
use serde::Deserialize;
use tracing::{debug, info};

use super::command::run_sfdx;
use super::errors::SfdxError;
use crate::types::FlowVersion;

/// Fixed Tooling API query: every non-namespaced flow version marked
/// Obsolete, ordered by developer name then version number ascending.
const OBSOLETE_FLOW_QUERY: &str = "SELECT Id, Status, Definition.DeveloperName, VersionNumber \
     FROM Flow \
     WHERE Definition.NamespacePrefix = null AND Status = 'Obsolete' \
     ORDER BY Definition.DeveloperName, VersionNumber";

const QUERY_SUBCOMMAND: &str = "force:data:soql:query";

/// Response envelope emitted by `sfdx --json`.
#[derive(Debug, Deserialize)]
struct QueryResponse {
    result: QueryResult,
}

#[derive(Debug, Deserialize)]
struct QueryResult {
    records: Vec<FlowRecord>,
}

/// One record as the Tooling API reports it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct FlowRecord {
    id: String,
    status: String,
    definition: FlowDefinition,
    version_number: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct FlowDefinition {
    developer_name: String,
}

impl From<FlowRecord> for FlowVersion {
    fn from(record: FlowRecord) -> Self {
        Self {
            id: record.id,
            developer_name: record.definition.developer_name,
            version_number: record.version_number,
            status: record.status,
        }
    }
}

/// Compose the sfdx argument vector for the obsolete-flow query.
#[must_use]
pub fn query_args(target_username: Option<&str>) -> Vec<String> {
    let mut args = vec![
        QUERY_SUBCOMMAND.to_owned(),
        "--usetoolingapi".to_owned(),
        "--json".to_owned(),
        "--query".to_owned(),
        OBSOLETE_FLOW_QUERY.to_owned(),
    ];
    if let Some(alias) = target_username {
        args.push("--targetusername".to_owned());
        args.push(alias.to_owned());
    }
    args
}

/// Fetch every obsolete flow version from the org, in server order.
///
/// # Errors
///
/// - `SfdxError::Launch` / `SfdxError::CommandFailed` on subprocess failure.
/// - `SfdxError::MalformedResponse` if stdout is not the expected JSON shape
///   (missing `result.records`, `Definition.DeveloperName`, or
///   `VersionNumber` fields included).
pub fn fetch_obsolete_flow_versions(
    target_username: Option<&str>,
) -> Result<Vec<FlowVersion>, SfdxError> {
    info!("retrieving the list of obsolete flow versions");
    let capture = run_sfdx(&query_args(target_username))?;
    let versions = parse_query_response(&capture.stdout)?;
    info!(count = versions.len(), "obsolete flow versions found");
    Ok(versions)
}

/// Decode the `--json` response body into flow version records.
fn parse_query_response(body: &str) -> Result<Vec<FlowVersion>, SfdxError> {
    let response: QueryResponse =
        serde_json::from_str(body).map_err(|source| SfdxError::MalformedResponse {
            subcommand: QUERY_SUBCOMMAND.to_owned(),
            source,
        })?;
    debug!(
        records = response.result.records.len(),
        "query response decoded"
    );
    Ok(response
        .result
        .records
        .into_iter()
        .map(FlowVersion::from)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_args_without_target() {
        let args = query_args(None);
        assert_eq!(args[0], "force:data:soql:query");
        assert!(args.contains(&"--usetoolingapi".to_owned()));
        assert!(args.contains(&"--json".to_owned()));
        assert!(!args.iter().any(|a| a == "--targetusername"));
    }

    #[test]
    fn test_query_args_with_target() {
        let args = query_args(Some("my-sandbox"));
        let pos = args.iter().position(|a| a == "--targetusername").unwrap();
        assert_eq!(args[pos + 1], "my-sandbox");
    }

    #[test]
    fn test_query_selects_obsolete_flows() {
        let args = query_args(None);
        let query = &args[4];
        assert!(query.starts_with("SELECT Id, Status, Definition.DeveloperName, VersionNumber"));
        assert!(query.contains("Status = 'Obsolete'"));
        assert!(query.contains("Definition.NamespacePrefix = null"));
        assert!(query.ends_with("ORDER BY Definition.DeveloperName, VersionNumber"));
    }

    #[test]
    fn test_parse_response() {
        let body = r#"{
            "status": 0,
            "result": {
                "records": [
                    {
                        "Id": "301xx0000000001AAA",
                        "Status": "Obsolete",
                        "Definition": { "DeveloperName": "Account_Update" },
                        "VersionNumber": 3
                    },
                    {
                        "Id": "301xx0000000002AAA",
                        "Status": "Obsolete",
                        "Definition": { "DeveloperName": "Case_Escalation" },
                        "VersionNumber": 1
                    }
                ]
            }
        }"#;
        let versions = parse_query_response(body).unwrap();
        assert_eq!(versions.len(), 2);
        assert_eq!(versions[0].developer_name, "Account_Update");
        assert_eq!(versions[0].version_number, 3);
        assert_eq!(versions[0].status, "Obsolete");
        assert_eq!(versions[1].member_name(), "Case_Escalation-1");
    }

    #[test]
    fn test_parse_empty_records() {
        let body = r#"{ "status": 0, "result": { "records": [] } }"#;
        let versions = parse_query_response(body).unwrap();
        assert!(versions.is_empty());
    }

    #[test]
    fn test_parse_garbage_fails() {
        let err = parse_query_response("ERROR: not authorized").unwrap_err();
        assert!(matches!(err, SfdxError::MalformedResponse { .. }));
    }

    #[test]
    fn test_parse_missing_field_fails() {
        // VersionNumber absent from the record.
        let body = r#"{
            "result": {
                "records": [
                    {
                        "Id": "301xx0000000001AAA",
                        "Status": "Obsolete",
                        "Definition": { "DeveloperName": "Account_Update" }
                    }
                ]
            }
        }"#;
        let err = parse_query_response(body).unwrap_err();
        assert!(matches!(err, SfdxError::MalformedResponse { .. }));
    }

    #[test]
    fn test_parse_missing_result_fails() {
        let body = r#"{ "status": 0 }"#;
        let err = parse_query_response(body).unwrap_err();
        assert!(matches!(err, SfdxError::MalformedResponse { .. }));
    }
}
