// src/core/net.rs
//
// Page fetching. Remote pages go through a blocking reqwest client; anything
// that isn't an http(s) URL is read from disk so saved pages work offline.

use std::{fs, path::{Path, PathBuf}};

use reqwest::{blocking::Client, Url};

use crate::config::options::FetchOptions;
use crate::error::{Result, SheetError};

/// Source of page HTML. The runner only talks to this.
pub trait Fetch {
    fn get(&self, url: &str) -> Result<String>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(opts: &FetchOptions) -> Result<Self> {
        let client = Client::builder()
            .user_agent(opts.user_agent.clone())
            .timeout(opts.timeout())
            .build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &str) -> Result<String> {
        if is_remote(url) {
            logd!("Net: GET {}", url);
            let resp = self.client.get(url).send()?.error_for_status()?;
            let body = resp.text()?;
            logd!("Net: {} bytes from {}", body.len(), url);
            Ok(body)
        } else {
            let path = local_path(url);
            logd!("Net: reading {}", path.display());
            Ok(fs::read_to_string(path)?)
        }
    }
}

pub fn is_remote(url: &str) -> bool {
    Url::parse(url)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false)
}

fn local_path(url: &str) -> PathBuf {
    match Url::parse(url) {
        Ok(u) if u.scheme() == "file" => u.to_file_path().unwrap_or_else(|_| PathBuf::from(url)),
        _ => PathBuf::from(url),
    }
}

/// Resolve an `href` the way a browser fills in `a.href`.
/// Local bases resolve relative to the file's directory.
pub fn resolve_link(base: &str, href: &str) -> Result<String> {
    let href = href.trim();

    if is_remote(base) || base.starts_with("file:") {
        let base_url = Url::parse(base).map_err(|_| link_err(base, href))?;
        let joined = base_url.join(href).map_err(|_| link_err(base, href))?;
        return Ok(joined.into());
    }

    if is_remote(href) {
        return Ok(s!(href));
    }

    let dir = Path::new(base).parent().unwrap_or(Path::new(""));
    Ok(dir.join(href).to_string_lossy().into_owned())
}

fn link_err(base: &str, href: &str) -> SheetError {
    SheetError::Link { base: s!(base), href: s!(href) }
}
