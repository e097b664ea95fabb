use std::cell::RefCell;
use std::rc::Rc;

use gloo_net::http::Request;
use log::{debug, info, warn};

use crate::content::key::ContentKey;
use crate::content::record::ContentRecord;
use crate::content::registry::Registry;
use crate::error::{FetchError, FunnelError};

/// Synchronous lookup against a registry that is complete up front.
pub fn resolve_static(key: &ContentKey, registry: &Registry) -> Result<Rc<ContentRecord>, FunnelError> {
    let record = registry
        .get(key)
        .ok_or_else(|| FunnelError::not_found(key, "not registered"))?;
    record.validate(key)?;
    Ok(record)
}

/// `<base>/briefs/<key>.json`. The key is percent-encoded so it can only ever
/// address one file inside `briefs/`.
pub fn brief_url(base: &str, key: &ContentKey) -> String {
    format!(
        "{}/briefs/{}.json",
        base.trim_end_matches('/'),
        urlencoding::encode(key.as_str())
    )
}

/// One network round trip for one key's record.
#[allow(async_fn_in_trait)]
pub trait BriefFetcher {
    async fn fetch(&self, key: &ContentKey) -> Result<ContentRecord, FetchError>;

    /// Where `key` is expected to live, for error messages.
    fn location(&self, _key: &ContentKey) -> Option<String> {
        None
    }
}

/// Same-origin `GET` of the brief file. No query, no credentials.
#[derive(Debug, Clone)]
pub struct HttpBriefFetcher {
    base_url: String,
}

impl HttpBriefFetcher {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl BriefFetcher for HttpBriefFetcher {
    async fn fetch(&self, key: &ContentKey) -> Result<ContentRecord, FetchError> {
        let url = brief_url(&self.base_url, key);
        debug!("fetching {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network {
                url: url.clone(),
                message: e.to_string(),
            })?;

        if !response.ok() {
            return Err(FetchError::Status {
                url,
                status: response.status(),
            });
        }

        response
            .json::<ContentRecord>()
            .await
            .map_err(|e| FetchError::Decode {
                url,
                message: e.to_string(),
            })
    }

    fn location(&self, key: &ContentKey) -> Option<String> {
        Some(brief_url(&self.base_url, key))
    }
}

/// Resolver for content delivered as separate files. Each miss costs exactly
/// one fetch; whatever was fetched stays registered for the lifetime of the
/// resolver, so asking again for the same key never touches the network.
pub struct DynamicResolver<F> {
    registry: RefCell<Registry>,
    fetcher: F,
}

impl<F: BriefFetcher> DynamicResolver<F> {
    pub fn new(fetcher: F) -> Self {
        Self::with_registry(fetcher, Registry::new())
    }

    pub fn with_registry(fetcher: F, registry: Registry) -> Self {
        Self {
            registry: RefCell::new(registry),
            fetcher,
        }
    }

    pub async fn resolve(&self, key: &ContentKey) -> Result<Rc<ContentRecord>, FunnelError> {
        if let Some(record) = self.registry.borrow().get(key) {
            debug!("{} already registered", key);
            record.validate(key)?;
            return Ok(record);
        }

        if !key.is_known() {
            debug!("{} is not one of the known outcomes", key);
        }
        info!("loading brief {}", key);
        match self.fetcher.fetch(key).await {
            Ok(record) => {
                record.validate(key)?;
                self.registry.borrow_mut().register(key.clone(), record);
            }
            Err(e) => {
                warn!("brief {} failed to load: {}", key, e);
                return Err(FunnelError::not_found(key, e.to_string()));
            }
        }

        self.registry
            .borrow()
            .get(key)
            .ok_or_else(|| FunnelError::not_found(key, "loaded but did not register"))
    }

    pub fn location(&self, key: &ContentKey) -> Option<String> {
        self.fetcher.location(key)
    }
}

#[cfg(test)]
impl<F> DynamicResolver<F> {
    pub fn is_registered(&self, key: &ContentKey) -> bool {
        self.registry.borrow().contains(key)
    }
}
