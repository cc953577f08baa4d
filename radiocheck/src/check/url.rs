use super::Checker;
use crate::report::Outcome;
use crate::Result;

impl Checker<'_> {
    /// Probe a single URL given on the command line
    pub fn check_url(&self, url: &str) -> Result<Outcome> {
        let result = self.prober().probe(url)?;
        if result.ok {
            Ok(Outcome::Success(format!("{} is a playable url", url)))
        } else {
            Ok(Outcome::Failure(format!("mpd: {}", result.error_message)))
        }
    }
}
