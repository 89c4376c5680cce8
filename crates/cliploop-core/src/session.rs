//! Repeat-mode session state
//!
//! One explicit object owns the repeat state for a player session: the
//! duration limits, and the range/viewport pair that exists while repeat
//! mode is on. Components receive it by reference; there is no ambient
//! global, and the range cannot exist without its viewport.

use crate::range::{RepeatError, RepeatRange};
use crate::types::{RepeatOptions, Seconds};
use crate::viewport::Viewport;

/// Range + viewport pair that exists while repeat mode is on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveRepeat {
    pub range: RepeatRange,
    pub viewport: Viewport,
}

/// Session-scoped repeat state
#[derive(Debug, Clone, PartialEq)]
pub struct RepeatSession {
    options: RepeatOptions,
    active: Option<ActiveRepeat>,
}

impl RepeatSession {
    pub fn new(options: RepeatOptions) -> Self {
        Self {
            options,
            active: None,
        }
    }

    pub fn options(&self) -> RepeatOptions {
        self.options
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Enter repeat mode anchored at the current playback position.
    ///
    /// Creates a minimum-length range at `anchor` and a viewport around it.
    /// Refused with [`RepeatError::InvalidDuration`] when the media duration
    /// is unknown, non-finite, or shorter than the minimum range; the
    /// session is left untouched in that case.
    pub fn create(
        &mut self,
        anchor: Seconds,
        media_duration: Option<Seconds>,
    ) -> Result<&ActiveRepeat, RepeatError> {
        let media = media_duration.ok_or(RepeatError::InvalidDuration {
            min_duration: self.options.min_duration,
        })?;
        let range = RepeatRange::create(anchor, media, self.options)?;
        let viewport = Viewport::around(media, anchor, self.options);

        log::debug!(
            "repeat created: range [{:.2}, {:.2}], viewport [{:.2}, {:.2}]",
            range.start(),
            range.end(),
            viewport.start(),
            viewport.end()
        );
        Ok(self.active.insert(ActiveRepeat { range, viewport }))
    }

    /// Leave repeat mode and drop the range. Idempotent.
    pub fn cancel(&mut self) {
        if self.active.take().is_some() {
            log::debug!("repeat cancelled");
        }
    }

    pub fn active(&self) -> Option<&ActiveRepeat> {
        self.active.as_ref()
    }

    pub fn active_mut(&mut self) -> Option<&mut ActiveRepeat> {
        self.active.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_anchors_range_and_viewport() {
        let mut session = RepeatSession::new(RepeatOptions::default());
        let active = session.create(12.0, Some(60.0)).unwrap();
        assert_eq!(active.range.start(), 12.0);
        assert_eq!(active.range.end(), 13.0);
        assert!(active.viewport.contains(active.range.start()));
        assert!(active.viewport.contains(active.range.end()));
        assert!(session.is_active());
    }

    #[test]
    fn test_create_refuses_unknown_duration() {
        let mut session = RepeatSession::new(RepeatOptions::default());
        assert!(session.create(0.0, None).is_err());
        assert!(!session.is_active());
    }

    #[test]
    fn test_create_refuses_short_clip_without_mutation() {
        let mut session = RepeatSession::new(RepeatOptions::default());
        session.create(0.0, Some(30.0)).unwrap();
        let before = *session.active().unwrap();

        assert!(session.create(0.0, Some(0.5)).is_err());
        assert_eq!(*session.active().unwrap(), before);
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut session = RepeatSession::new(RepeatOptions::default());
        session.create(5.0, Some(60.0)).unwrap();
        session.cancel();
        assert!(!session.is_active());
        session.cancel();
        assert!(!session.is_active());
    }
}
