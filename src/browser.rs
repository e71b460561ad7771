use crate::{
    custom_error::{CustomError, CustomResult},
    logger::Logger,
};

/// Capability to hand a URL to the user's browser.
pub trait UrlOpener {
    fn open(&self, url: &str) -> CustomResult<()>;
}

/// Opens URLs with the platform's default handler.
pub struct SystemBrowser {
    logger: Logger,
}

impl SystemBrowser {
    pub fn new() -> Self {
        Self {
            logger: Logger::new(),
        }
    }
}

impl UrlOpener for SystemBrowser {
    fn open(&self, url: &str) -> CustomResult<()> {
        self.logger.info(format!("Opening {}", url));

        open::that(url).map_err(|source| CustomError::BrowserOpen {
            url: url.to_string(),
            source,
        })
    }
}
