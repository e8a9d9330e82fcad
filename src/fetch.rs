//! Static Data Fetch
//!
//! Loads the reference JSON files once. Failures never escape: each loader
//! logs and hands back a degraded result for its own control.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::catalog::{Catalog, Formatter, Population};
use crate::clan::ClanDisciplines;
use crate::models::{FlatEntry, GroupEntry, WrappedClanMap};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("request for {path} failed: {reason}")]
    Network { path: String, reason: String },

    #[error("{path} answered HTTP {status}")]
    Status { path: String, status: u16 },

    #[error("{path} is not valid data: {reason}")]
    Decode { path: String, reason: String },
}

pub async fn fetch_json<T: DeserializeOwned>(path: &str) -> Result<T, FetchError> {
    let response = Request::get(path)
        .send()
        .await
        .map_err(|e| FetchError::Network {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
    if !response.ok() {
        return Err(FetchError::Status {
            path: path.to_string(),
            status: response.status(),
        });
    }
    response.json::<T>().await.map_err(|e| FetchError::Decode {
        path: path.to_string(),
        reason: e.to_string(),
    })
}

fn into_population<T>(path: &str, result: Result<T, FetchError>, build: impl FnOnce(T) -> Catalog) -> Population {
    match result {
        Ok(data) => {
            let catalog = build(data);
            if catalog.is_empty() {
                tracing::warn!(path, "source has no options");
            }
            tracing::debug!(path, options = catalog.len(), "options loaded");
            Population::Ready(catalog)
        }
        Err(err) => {
            tracing::error!(%err, "error populating options");
            Population::Failed
        }
    }
}

/// `[{value, label, cost?, dots?}]`
pub async fn load_flat(path: &str) -> Population {
    let result = fetch_json::<Vec<FlatEntry>>(path).await;
    into_population(path, result, |entries| Catalog::from_flat(&entries))
}

/// `[{groupLabel, options: [...]}]`
pub async fn load_grouped(path: &str, formatter: Formatter) -> Population {
    let result = fetch_json::<Vec<GroupEntry>>(path).await;
    into_population(path, result, |groups| Catalog::from_grouped(&groups, formatter))
}

pub async fn load_clan_disciplines(path: &str) -> Option<ClanDisciplines> {
    match fetch_json::<WrappedClanMap>(path).await {
        Ok(wrapped) => {
            let table = ClanDisciplines::from_wrapped(wrapped);
            if table.is_empty() {
                tracing::warn!(path, "clan map is empty");
            }
            tracing::info!(clans = table.len(), "clan and discipline data loaded");
            Some(table)
        }
        Err(err) => {
            tracing::error!(%err, "failed to load clan/discipline data");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn entry(value: &str) -> FlatEntry {
        FlatEntry {
            value: value.to_string(),
            label: value.to_uppercase(),
            cost: None,
            dots: None,
        }
    }

    fn flat(result: Result<Vec<FlatEntry>, FetchError>) -> Population {
        into_population("data/V20/disciplines.json", result, |entries| Catalog::from_flat(&entries))
    }

    #[test]
    fn test_loaded_source_is_ready() {
        let population = flat(Ok(vec![entry("animalism"), entry("auspex"), entry("celerity")]));
        let catalog = population.catalog().expect("ready");
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_empty_source_stays_ready() {
        let population = flat(Ok(Vec::new()));
        assert!(matches!(population, Population::Ready(ref c) if c.is_empty()));
    }

    #[test]
    fn test_status_error_fails_population() {
        let err = FetchError::Status {
            path: "data/V20/disciplines.json".to_string(),
            status: 404,
        };
        assert_eq!(flat(Err(err)), Population::Failed);
    }

    #[test]
    fn test_decode_error_fails_population() {
        let err = FetchError::Decode {
            path: "data/V20/merits.json".to_string(),
            reason: "expected a sequence".to_string(),
        };
        let population = into_population("data/V20/merits.json", Err(err), |groups: Vec<GroupEntry>| {
            Catalog::from_grouped(&groups, catalog::with_cost)
        });
        assert_eq!(population, Population::Failed);
        assert!(population.catalog().is_none());
    }

    #[test]
    fn test_error_messages_name_the_source() {
        let err = FetchError::Status {
            path: "data/V20/paths.json".to_string(),
            status: 500,
        };
        assert_eq!(err.to_string(), "data/V20/paths.json answered HTTP 500");
    }
}
