//! Listing scope shared by every panel a host creates.
//!
//! A `CoreConfig` fixes the file-type tag and page size of both file listings. The host builds
//! it once, for example from its own settings, and lends it to [`ConsentRecordPanel::new`] and
//! [`FileQuery::new`]; nothing in this crate reads the environment itself.
//!
//! [`ConsentRecordPanel::new`]: crate::panel::ConsentRecordPanel::new
//! [`FileQuery::new`]: crate::query::FileQuery::new

use crate::constants::{CONSENT_RECORD_FILE_TYPE, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::{ConsentError, ConsentResult};

/// Core configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoreConfig {
    file_type: String,
    page_size: u32,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`ConsentError::InvalidInput`] if `file_type` is blank or `page_size` is outside
    /// `1..=MAX_PAGE_SIZE`.
    pub fn new(file_type: impl Into<String>, page_size: u32) -> ConsentResult<Self> {
        let file_type = file_type.into().trim().to_string();
        if file_type.is_empty() {
            return Err(ConsentError::InvalidInput(
                "file_type cannot be empty".into(),
            ));
        }
        validate_page_size(page_size)?;

        Ok(Self {
            file_type,
            page_size,
        })
    }

    pub fn file_type(&self) -> &str {
        &self.file_type
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            file_type: CONSENT_RECORD_FILE_TYPE.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Parse the listing page size from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_PAGE_SIZE`].
pub fn page_size_from_env_value(value: Option<String>) -> ConsentResult<u32> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    let Some(value) = value else {
        return Ok(DEFAULT_PAGE_SIZE);
    };

    let parsed = value
        .parse::<u32>()
        .map_err(|_| ConsentError::InvalidInput(format!("page size is not a number: {value}")))?;
    validate_page_size(parsed)?;
    Ok(parsed)
}

fn validate_page_size(page_size: u32) -> ConsentResult<()> {
    if page_size == 0 || page_size > MAX_PAGE_SIZE {
        return Err(ConsentError::InvalidInput(format!(
            "page size must be between 1 and {MAX_PAGE_SIZE}, got {page_size}"
        )));
    }
    Ok(())
}
