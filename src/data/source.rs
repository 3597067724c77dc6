//! Where the external vocabulary document comes from.

use crate::error::DatasetError;
use std::path::PathBuf;

/// A location the vocabulary JSON can be fetched from.
pub trait DatasetSource {
    fn describe(&self) -> String;
    fn fetch(&self) -> Result<String, DatasetError>;
}

pub struct FileSource {
    pub path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DatasetSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<String, DatasetError> {
        Ok(std::fs::read_to_string(&self.path)?)
    }
}

pub struct HttpSource {
    pub url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl DatasetSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    /// Single blocking GET: no retries and no timeout beyond the client default.
    fn fetch(&self) -> Result<String, DatasetError> {
        let response = reqwest::blocking::get(&self.url)?;
        let status = response.status();
        if !status.is_success() {
            return Err(DatasetError::HttpStatus(status.as_u16()));
        }
        Ok(response.text()?)
    }
}

/// Picks an HTTP source for `http://` and `https://` locations, a file source otherwise.
pub fn source_for(location: &str) -> Box<dyn DatasetSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpSource::new(location))
    } else {
        Box::new(FileSource::new(location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serves one request on a local port with the given status line and body.
    fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = [0u8; 1024];
            let _ = stream.read(&mut request);
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
        });
        format!("http://{}/data.json", addr)
    }

    #[test]
    fn test_source_for_picks_http() {
        assert_eq!(
            source_for("https://example.org/data.json").describe(),
            "https://example.org/data.json"
        );
        assert_eq!(source_for("data.json").describe(), "data.json");
    }

    #[test]
    fn test_file_source_reads_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"food\": []}}").unwrap();

        let source = FileSource::new(file.path());
        assert_eq!(source.fetch().unwrap(), "{\"food\": []}");
    }

    #[test]
    fn test_http_source_reads_body() {
        let url = serve_once("200 OK", "{\"food\": []}");
        assert_eq!(HttpSource::new(url).fetch().unwrap(), "{\"food\": []}");
    }

    #[test]
    fn test_http_error_status() {
        let url = serve_once("404 Not Found", "missing");
        assert!(matches!(
            HttpSource::new(url).fetch(),
            Err(DatasetError::HttpStatus(404))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let source = FileSource::new("nonexistent_vocabulary_xyz123.json");
        assert!(matches!(source.fetch(), Err(DatasetError::Io(_))));
    }
}
