use crate::mime::MimeDecision;
use anyhow::{Error, Result, bail};
use std::{fs::File as FsFile, path::PathBuf};
use tiny_http::{Header, Response};

pub struct File {
    pub path: PathBuf,
    pub mime: MimeDecision,
}

impl File {
    pub fn new(path: PathBuf, mime: MimeDecision) -> Result<Self> {
        let metadata = FsFile::open(&path).and_then(|file| file.metadata())?;

        if !metadata.is_file() {
            bail!("Not a regular file: {}", path.display());
        }

        Ok(Self { path, mime })
    }

    pub fn get_response(&self) -> Result<Response<FsFile>> {
        let fs_file = FsFile::open(&self.path)?;
        let header = Header::from_bytes("Content-Type", self.mime.content_type())
            .map_err(|_| Error::msg("Could not create header"))?;
        let mut response = Response::from_file(fs_file).with_header(header);

        if let Some(encoding) = self.mime.encoding {
            let header = Header::from_bytes("Content-Encoding", encoding)
                .map_err(|_| Error::msg("Could not create header"))?;
            response.add_header(header);
        }

        Ok(response)
    }
}
