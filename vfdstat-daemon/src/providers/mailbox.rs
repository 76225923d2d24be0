//! mbox message counting
//!
//! A message starts at a `From ` line that opens the file or follows a blank
//! line. Body lines that merely begin with `From ` (unescaped quoting) do not
//! count unless a blank line precedes them, same as any mbox reader.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::{debug, warn};

use vfdstat_core::traits::ProviderError;

use crate::config::spool_mailbox;

/// Mailbox lookup for the mail summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mailbox {
    /// Fixed path; otherwise the spool file of the queried user
    path: Option<PathBuf>,
}

impl Mailbox {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    /// File consulted for `user`
    pub fn path_for(&self, user: &str) -> PathBuf {
        self.path.clone().unwrap_or_else(|| spool_mailbox(user))
    }

    /// Messages in `user`'s mailbox; a mailbox that does not exist is empty
    pub fn count(&self, user: &str) -> Result<u32, ProviderError> {
        let path = self.path_for(user);
        count_file(&path)
    }
}

fn count_file(path: &Path) -> Result<u32, ProviderError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("{} does not exist, no mail", path.display());
            return Ok(0);
        }
        Err(e) => {
            warn!("cannot open mailbox {}: {}", path.display(), e);
            return Err(ProviderError::MailboxOpen);
        }
    };

    count_messages(BufReader::new(file)).map_err(|e| {
        warn!("cannot read mailbox {}: {}", path.display(), e);
        e
    })
}

/// Count messages in an mbox stream
pub fn count_messages<R: BufRead>(reader: R) -> Result<u32, ProviderError> {
    let mut count: u32 = 0;
    let mut after_blank = true;

    for line in reader.split(b'\n') {
        let line = line.map_err(|_| ProviderError::MailboxOpen)?;
        if after_blank && line.starts_with(b"From ") {
            count = count.checked_add(1).ok_or(ProviderError::Overflow)?;
        }
        after_blank = line.is_empty() || line == b"\r";
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const TWO_MESSAGES: &str = "\
From alice@example.org Mon Oct 19 09:00:00 2026
Subject: one

hello
From the desk of nobody, this line is body text

From bob@example.org Mon Oct 19 09:05:00 2026
Subject: two

bye
";

    #[test]
    fn test_counts_from_lines_after_blank() {
        assert_eq!(count_messages(TWO_MESSAGES.as_bytes()), Ok(2));
    }

    #[test]
    fn test_empty_mailbox() {
        assert_eq!(count_messages(&b""[..]), Ok(0));
    }

    #[test]
    fn test_crlf_blank_lines() {
        let text = "From a Mon\r\n\r\nbody\r\n\r\nFrom b Mon\r\n";
        assert_eq!(count_messages(text.as_bytes()), Ok(2));
    }

    #[test]
    fn test_non_utf8_body() {
        let mut text = b"From a Mon\n\n".to_vec();
        text.extend_from_slice(&[0xff, 0xfe, b'\n']);
        assert_eq!(count_messages(&text[..]), Ok(1));
    }

    #[test]
    fn test_missing_mailbox_is_empty() {
        let mailbox = Mailbox::new(Some(PathBuf::from("/nonexistent/vfdstat/mbox")));
        assert_eq!(mailbox.count("alice"), Ok(0));
    }

    #[test]
    fn test_directory_is_open_failure() {
        let mailbox = Mailbox::new(Some(std::env::temp_dir()));
        assert!(mailbox.count("alice").is_err());
    }

    #[test]
    fn test_counts_file() {
        let path = std::env::temp_dir().join(format!("vfdstat-mbox-{}", std::process::id()));
        fs::write(&path, TWO_MESSAGES).unwrap();

        let result = Mailbox::new(Some(path.clone())).count("alice");
        let _ = fs::remove_file(&path);

        assert_eq!(result, Ok(2));
    }

    #[test]
    fn test_spool_path_per_user() {
        let mailbox = Mailbox::new(None);
        assert_eq!(mailbox.path_for("alice"), PathBuf::from("/var/mail/alice"));

        let fixed = Mailbox::new(Some(PathBuf::from("/tmp/box")));
        assert_eq!(fixed.path_for("alice"), PathBuf::from("/tmp/box"));
    }
}
