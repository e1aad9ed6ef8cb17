//! FTP transport over libcurl.
//!
//! One session per invocation. The curl handle is owned by the session and
//! released on drop, so the control connection closes on every exit path;
//! libcurl reuses it across the listing and the download.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use curl::easy::Easy;
use url::Url;

use crate::config::TsfConfig;
use crate::error::FetchError;

pub struct ArchiveSession {
    easy: Easy,
    base: Url,
}

impl ArchiveSession {
    /// Prepare a session against the configured host. No traffic happens
    /// until the first `list` or `download_to`.
    pub fn connect(cfg: &TsfConfig) -> Result<Self, FetchError> {
        let base = Url::parse(&format!("ftp://{}/", cfg.host))?;
        let mut easy = Easy::new();
        easy.connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))?;
        easy.timeout(Duration::from_secs(cfg.transfer_timeout_secs))?;
        Ok(Self { easy, base })
    }

    /// The trailing slash makes libcurl LIST instead of RETR.
    fn dir_url(&self, path: &str) -> Url {
        let mut url = self.base.clone();
        url.set_path(&format!("{}/", path.trim_end_matches('/')));
        url
    }

    fn file_url(&self, path: &str) -> Url {
        let mut url = self.base.clone();
        url.set_path(path);
        url
    }

    /// Raw `LIST` lines for a remote directory.
    pub fn list(&mut self, path: &str) -> Result<Vec<String>, FetchError> {
        let url = self.dir_url(path);
        let mut body = Vec::new();

        self.easy.url(url.as_str())?;
        {
            let mut transfer = self.easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let text = String::from_utf8_lossy(&body);
        Ok(text.lines().map(str::to_string).collect())
    }

    /// Download `remote_path` into `dest`, returning the bytes written.
    pub fn download_to(&mut self, remote_path: &str, dest: &Path) -> Result<u64, FetchError> {
        let url = self.file_url(remote_path);

        let mut file = File::create(dest)?;
        let mut written: u64 = 0;
        let mut write_err: Option<std::io::Error> = None;

        self.easy.url(url.as_str())?;
        let performed = {
            let mut transfer = self.easy.transfer();
            transfer.write_function(|data| match file.write_all(data) {
                Ok(()) => {
                    written += data.len() as u64;
                    Ok(data.len())
                }
                Err(e) => {
                    write_err = Some(e);
                    Ok(0) // abort transfer
                }
            })?;
            transfer.perform()
        };

        // A write failure aborts the transfer; report the local error rather
        // than the CURLE_WRITE_ERROR it turns into.
        if let Some(e) = write_err {
            return Err(FetchError::Io(e));
        }
        performed?;
        file.flush()?;

        tracing::debug!("wrote {} bytes to {}", written, dest.display());
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> ArchiveSession {
        ArchiveSession::connect(&TsfConfig::default()).unwrap()
    }

    #[test]
    fn dir_url_has_trailing_slash() {
        let s = session();
        assert_eq!(
            s.dir_url("/Specs/archive/25_series/25.331").as_str(),
            "ftp://ftp.3gpp.org/Specs/archive/25_series/25.331/"
        );
        // Already-slashed paths are not doubled.
        assert_eq!(
            s.dir_url("/Specs/archive/25_series/25.331/").as_str(),
            "ftp://ftp.3gpp.org/Specs/archive/25_series/25.331/"
        );
    }

    #[test]
    fn file_url_keeps_plain_path() {
        let s = session();
        assert_eq!(
            s.file_url("/Specs/archive/25_series/25.331/25331-i60.zip")
                .as_str(),
            "ftp://ftp.3gpp.org/Specs/archive/25_series/25.331/25331-i60.zip"
        );
    }

    #[test]
    fn connect_rejects_bad_host() {
        let cfg = TsfConfig {
            host: "not a host".to_string(),
            ..TsfConfig::default()
        };
        assert!(matches!(
            ArchiveSession::connect(&cfg),
            Err(FetchError::Endpoint(_))
        ));
    }
}
