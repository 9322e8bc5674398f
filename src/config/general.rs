//! The general configuration settings for heft.
//!
//! This module defines the [General] struct for deserializing the `[general]`
//! table and the [InternalGeneral] struct for internal use, which has the row
//! limit already clamped.

use crate::core::rank::DEFAULT_LIMIT;

use serde::Deserialize;

/// Smallest accepted row limit.
pub const MIN_LIMIT: usize = 1;
/// Largest accepted row limit.
pub const MAX_LIMIT: usize = 1000;

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct General {
    limit: usize,
    move_to_trash: bool,
}

impl Default for General {
    fn default() -> Self {
        General {
            limit: DEFAULT_LIMIT,
            move_to_trash: false,
        }
    }
}

#[derive(Debug)]
pub struct InternalGeneral {
    limit: usize,
    move_to_trash: bool,
}

impl From<General> for InternalGeneral {
    fn from(g: General) -> Self {
        Self {
            limit: clamp_limit(g.limit),
            move_to_trash: g.move_to_trash,
        }
    }
}

impl InternalGeneral {
    /// Number of ranked rows to keep and show.
    #[inline]
    pub fn limit(&self) -> usize {
        self.limit
    }

    #[inline]
    pub fn move_to_trash(&self) -> bool {
        self.move_to_trash
    }
}

/// Clamps a configured row limit into [MIN_LIMIT]..=[MAX_LIMIT].
pub fn clamp_limit(limit: usize) -> usize {
    limit.clamp(MIN_LIMIT, MAX_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_is_clamped() {
        assert_eq!(clamp_limit(0), MIN_LIMIT);
        assert_eq!(clamp_limit(25), 25);
        assert_eq!(clamp_limit(usize::MAX), MAX_LIMIT);
    }

    #[test]
    fn defaults() {
        let general = InternalGeneral::from(General::default());
        assert_eq!(general.limit(), DEFAULT_LIMIT);
        assert!(!general.move_to_trash());
    }
}
