//! Symlink-safe path normalization.
//!
//! [`Normalizer`] collapses empty segments, `.` segments and, where provably
//! safe, `..` segments. A `..` only cancels the segment before it when that
//! segment is a real directory; `link/..` is kept as is, because the parent
//! of a symlink's target is not the directory holding the link.
//!
//! With verification enabled, the filesystem identity of the path is
//! snapshotted up front and re-checked before every step and once at the
//! end, so a concurrent rename or link swap aborts the call instead of
//! silently producing a path to a different object.

use std::fmt;

use serde::Serialize;

use crate::config::NormalizeOptions;
use crate::error::{Error, Result};
use crate::path::identity::{FileIdentity, FsLookup, IdentityLookup};
use crate::path::segments::{Segments, CUR_DIR, PARENT_DIR};

/// A non-fatal diagnostic produced while normalizing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    /// A `..` tried to ascend above the filesystem root.
    RootEscape {
        /// The path being normalized.
        path: String,
        /// The resolved prefix at which the ascent was attempted.
        prefix: String,
    },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RootEscape { path, prefix } => write!(
                f,
                "path '{path}' is trying to access up beyond the root (at '{prefix}')"
            ),
        }
    }
}

/// The outcome of a normalization: the path and any notices raised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Normalized {
    /// The normalized path.
    pub path: String,
    /// Notices raised while normalizing, in order.
    pub notices: Vec<Notice>,
}

impl Normalized {
    fn new(path: String, notices: Vec<Notice>) -> Self {
        Self { path, notices }
    }

    /// Number of root-escape notices raised.
    #[must_use]
    pub fn root_escapes(&self) -> usize {
        self.notices
            .iter()
            .filter(|n| matches!(n, Notice::RootEscape { .. }))
            .count()
    }

    /// Consume the result, keeping only the path.
    #[must_use]
    pub fn into_path(self) -> String {
        self.path
    }
}

impl fmt::Display for Normalized {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

/// Which rule a single normalization step applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAction {
    /// An ordinary segment was appended to the accumulator.
    Appended,
    /// A `..` cancelled the real directory before it.
    Collapsed,
    /// A `..` at the root was dropped.
    DroppedAtRoot,
    /// A `..` could not be cancelled and was appended.
    KeptDotDot,
    /// A `..` replaced a leading `.`.
    ReplacedCurrentDir,
    /// No segments remain; normalization is complete.
    Finished,
}

/// The result of one call to [`Normalizer::step`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// The rule that was applied.
    pub action: StepAction,
    /// A notice raised by this step, if any.
    pub notice: Option<Notice>,
}

impl Step {
    const fn new(action: StepAction) -> Self {
        Self {
            action,
            notice: None,
        }
    }

    /// Whether the walk should continue.
    #[must_use]
    pub fn should_continue(&self) -> bool {
        self.action != StepAction::Finished
    }
}

/// Symlink-safe normalizer over an [`IdentityLookup`].
///
/// # Examples
///
/// ```no_run
/// use safepath::config::NormalizeOptions;
/// use safepath::path::Normalizer;
///
/// let normalizer = Normalizer::new(NormalizeOptions::default());
/// let normalized = normalizer.normalize("/usr/./lib/../bin").unwrap();
/// assert_eq!(normalized.path, "/usr/bin");
/// ```
#[derive(Debug, Clone)]
pub struct Normalizer<L = FsLookup> {
    lookup: L,
    options: NormalizeOptions,
}

impl Normalizer<FsLookup> {
    /// Create a normalizer backed by the real filesystem.
    #[must_use]
    pub const fn new(options: NormalizeOptions) -> Self {
        Self::with_lookup(FsLookup, options)
    }
}

impl Default for Normalizer<FsLookup> {
    fn default() -> Self {
        Self::new(NormalizeOptions::default())
    }
}

impl<L: IdentityLookup> Normalizer<L> {
    /// Create a normalizer with a custom identity source.
    pub const fn with_lookup(lookup: L, options: NormalizeOptions) -> Self {
        Self { lookup, options }
    }

    /// The options this normalizer runs with.
    #[must_use]
    pub const fn options(&self) -> &NormalizeOptions {
        &self.options
    }

    /// Normalize `path`.
    ///
    /// Interior empty and `.` segments are always removed; the first and last
    /// segments are kept so absoluteness and a trailing `.` survive. `..`
    /// segments are only touched when `collapse_dotdots` is set, and only
    /// then is the filesystem consulted.
    ///
    /// # Errors
    ///
    /// - [`Error::Lookup`] if the path or an intermediate candidate cannot be
    ///   stat'ed.
    /// - [`Error::Consistency`] if verification is on and the identity of the
    ///   path changes between steps.
    pub fn normalize(&self, path: &str) -> Result<Normalized> {
        let sep = self.options.separator;
        let mut segments = Segments::split(path, sep);
        segments.strip_interior();

        if !self.options.touches_filesystem() {
            return Ok(Normalized::new(segments.join(sep), Vec::new()));
        }

        let initial = if self.options.verify {
            Some(self.lookup.identity(path)?)
        } else {
            None
        };

        if path.is_empty() {
            return Ok(Normalized::new(String::new(), Vec::new()));
        }

        let mut accumulated = Segments::new();
        let mut notices = Vec::new();
        let mut last_action = StepAction::Finished;
        let mut index = 0;

        loop {
            let step = self.step(
                path,
                &mut accumulated,
                &segments.as_slice()[index..],
                initial,
            )?;
            if !step.should_continue() {
                break;
            }
            log::debug!(
                "normalize '{path}': segment {index} {:?} -> {:?}",
                &segments[index],
                step.action
            );
            notices.extend(step.notice);
            last_action = step.action;
            index += 1;
        }

        if last_action == StepAction::Collapsed && self.ends_in_link(&accumulated)? {
            // Collapsing onto a symlink would name the link, not its target
            accumulated.push(CUR_DIR);
        }

        let output = accumulated.render(sep);

        if let Some(initial) = initial {
            let current = self.lookup.identity(&output)?;
            if current != initial {
                return Err(Error::Consistency {
                    original: path.to_string(),
                    candidate: output,
                    details: format!(
                        "final identity {current:?} differs from initial {initial:?}"
                    ),
                });
            }
        }

        Ok(Normalized::new(output, notices))
    }

    /// Apply one normalization step.
    ///
    /// `remaining` holds the unprocessed segments, the first of which is
    /// consumed by this step. When `initial` is set, the identity of
    /// `accumulated + remaining` is checked against it first. Returns
    /// [`StepAction::Finished`] once `remaining` is empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Lookup`] if a lookup fails and
    /// [`Error::Consistency`] if the identity check fails.
    pub fn step(
        &self,
        original: &str,
        accumulated: &mut Segments,
        remaining: &[String],
        initial: Option<FileIdentity>,
    ) -> Result<Step> {
        let sep = self.options.separator;
        let Some(segment) = remaining.first() else {
            return Ok(Step::new(StepAction::Finished));
        };

        if let Some(initial) = initial {
            let candidate = accumulated.concat(remaining).render(sep);
            let current = self.lookup.identity(&candidate)?;
            if current != initial {
                return Err(Error::Consistency {
                    original: original.to_string(),
                    candidate,
                    details: format!(
                        "intermediate identity {current:?} differs from initial {initial:?}"
                    ),
                });
            }
        }

        if segment != PARENT_DIR {
            accumulated.push(segment.clone());
            return Ok(Step::new(StepAction::Appended));
        }

        let here = accumulated.render(sep);
        let above = accumulated.concat(&[PARENT_DIR.to_string()]).render(sep);

        // Only the root is its own parent
        let notice = if self.lookup.identity(&here)? == self.lookup.identity(&above)? {
            log::warn!("path '{original}' is trying to access up beyond the root");
            Some(Notice::RootEscape {
                path: original.to_string(),
                prefix: here.clone(),
            })
        } else {
            None
        };

        let action = if accumulated.is_empty() || accumulated.last() == Some(PARENT_DIR) {
            accumulated.push(PARENT_DIR);
            StepAction::KeptDotDot
        } else if accumulated.is_root() {
            StepAction::DroppedAtRoot
        } else if accumulated.len() == 1 && accumulated.last() == Some(CUR_DIR) {
            accumulated.pop();
            accumulated.push(PARENT_DIR);
            StepAction::ReplacedCurrentDir
        } else if self.lookup.is_real_dir(&here)? {
            accumulated.pop();
            StepAction::Collapsed
        } else {
            accumulated.push(PARENT_DIR);
            StepAction::KeptDotDot
        };

        Ok(Step { action, notice })
    }

    fn ends_in_link(&self, accumulated: &Segments) -> Result<bool> {
        match accumulated.last() {
            None | Some("" | CUR_DIR | PARENT_DIR) => Ok(false),
            Some(_) => Ok(!self
                .lookup
                .is_real_dir(&accumulated.render(self.options.separator))?),
        }
    }
}

/// Normalize `path` against the real filesystem with default options:
/// collapse `..` where safe and verify identity throughout.
///
/// # Errors
///
/// See [`Normalizer::normalize`].
pub fn normalize(path: &str) -> Result<Normalized> {
    Normalizer::default().normalize(path)
}

/// Normalize `path` against the real filesystem with explicit options.
///
/// # Errors
///
/// See [`Normalizer::normalize`].
pub fn normalize_with(path: &str, options: &NormalizeOptions) -> Result<Normalized> {
    Normalizer::new(*options).normalize(path)
}
